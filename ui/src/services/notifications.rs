use crate::components::common::{Msg, NotificationActivityMsg};
use crate::error::{AppError, AppResult};
use std::sync::mpsc::Sender;
use std::time::Duration;
use uuid::Uuid;

/// Attempt-scoped notification lifecycle.
///
/// Owns the pending loading-notification identifier as an explicit field,
/// so repeated or concurrent workflow instances (as in tests) never
/// interfere through shared state. At most one loading notification is
/// outstanding per attempt; any terminal notification first dismisses it
/// by its tracked id, never by kind.
pub struct NotificationManager {
    tx: Sender<Msg>,
    pending: Option<Uuid>,
    duration: Duration,
}

impl NotificationManager {
    pub fn new(tx: Sender<Msg>, duration: Duration) -> Self {
        Self {
            tx,
            pending: None,
            duration,
        }
    }

    pub fn pending_id(&self) -> Option<Uuid> {
        self.pending
    }

    fn send(&self, msg: NotificationActivityMsg) -> AppResult<()> {
        self.tx
            .send(Msg::NotificationActivity(msg))
            .map_err(|e| AppError::Channel(e.to_string()))
    }

    /// Show a loading notification and start tracking its id. A previous
    /// pending one (stale attempt) is dismissed first.
    pub fn start_loading(&mut self, message: &str) -> AppResult<Uuid> {
        self.dismiss_pending()?;

        let id = Uuid::new_v4();
        self.send(NotificationActivityMsg::ShowLoading {
            id,
            message: message.to_string(),
        })?;
        self.pending = Some(id);
        Ok(id)
    }

    /// Dismiss the tracked loading notification, if any.
    pub fn dismiss_pending(&mut self) -> AppResult<()> {
        if let Some(id) = self.pending.take() {
            self.send(NotificationActivityMsg::Dismiss { id })?;
        }
        Ok(())
    }

    /// Terminal success notification with the fixed display duration.
    /// Always dismisses the pending loading notification first.
    pub fn success(&mut self, message: &str) -> AppResult<Uuid> {
        self.dismiss_pending()?;

        let id = Uuid::new_v4();
        self.send(NotificationActivityMsg::ShowSuccess {
            id,
            message: message.to_string(),
            duration: self.duration,
        })?;
        Ok(id)
    }

    /// Terminal error notification; same lifecycle as [`success`](Self::success).
    pub fn error(&mut self, message: &str) -> AppResult<Uuid> {
        self.dismiss_pending()?;

        let id = Uuid::new_v4();
        self.send(NotificationActivityMsg::ShowError {
            id,
            message: message.to_string(),
            duration: self.duration,
        })?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn manager() -> (NotificationManager, mpsc::Receiver<Msg>) {
        let (tx, rx) = mpsc::channel();
        (NotificationManager::new(tx, Duration::from_millis(4000)), rx)
    }

    fn next_notification(rx: &mpsc::Receiver<Msg>) -> NotificationActivityMsg {
        match rx.try_recv().expect("expected a notification message") {
            Msg::NotificationActivity(msg) => msg,
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_loading_then_success_dismisses_by_id() {
        let (mut manager, rx) = manager();

        let loading_id = manager.start_loading("Logging in...").unwrap();
        assert_eq!(manager.pending_id(), Some(loading_id));
        assert!(matches!(
            next_notification(&rx),
            NotificationActivityMsg::ShowLoading { id, .. } if id == loading_id
        ));

        manager.success("Login success!").unwrap();
        assert!(matches!(
            next_notification(&rx),
            NotificationActivityMsg::Dismiss { id } if id == loading_id
        ));
        assert!(matches!(
            next_notification(&rx),
            NotificationActivityMsg::ShowSuccess { .. }
        ));
        assert_eq!(manager.pending_id(), None);
    }

    #[test]
    fn test_at_most_one_loading_pending() {
        let (mut manager, rx) = manager();

        let first = manager.start_loading("one").unwrap();
        let second = manager.start_loading("two").unwrap();
        assert_ne!(first, second);
        assert_eq!(manager.pending_id(), Some(second));

        assert!(matches!(
            next_notification(&rx),
            NotificationActivityMsg::ShowLoading { id, .. } if id == first
        ));
        // Starting the second loading dismissed the first by id.
        assert!(matches!(
            next_notification(&rx),
            NotificationActivityMsg::Dismiss { id } if id == first
        ));
        assert!(matches!(
            next_notification(&rx),
            NotificationActivityMsg::ShowLoading { id, .. } if id == second
        ));
    }

    #[test]
    fn test_terminal_without_pending_skips_dismiss() {
        let (mut manager, rx) = manager();

        manager.error("oops").unwrap();
        assert!(matches!(
            next_notification(&rx),
            NotificationActivityMsg::ShowError { .. }
        ));
        assert!(rx.try_recv().is_err());
    }
}
