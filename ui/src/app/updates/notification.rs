use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg, NotificationActivityMsg};
use crate::components::notification::{Notification, NotificationKind};
use crate::components::state::MountWithState;
use crate::error::AppResult;
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{Sub, SubClause, SubEventClause};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_notification(&mut self, msg: NotificationActivityMsg) -> AppResult<Option<Msg>> {
        match msg {
            NotificationActivityMsg::ShowLoading { id, message } => {
                // Tick subscription drives the spinner animation.
                self.app.remount_with_state(
                    ComponentId::Notification,
                    Notification::new(NotificationKind::Loading, &message),
                    vec![Sub::new(SubEventClause::Tick, SubClause::Always)],
                )?;
                self.active_notification = Some(id);
                Ok(None)
            }

            NotificationActivityMsg::ShowSuccess {
                id,
                message,
                duration,
            } => {
                self.app.remount_with_state(
                    ComponentId::Notification,
                    Notification::new(NotificationKind::Success, &message),
                    Vec::default(),
                )?;
                self.active_notification = Some(id);
                self.schedule_dismiss(id, duration);
                Ok(None)
            }

            NotificationActivityMsg::ShowError {
                id,
                message,
                duration,
            } => {
                self.app.remount_with_state(
                    ComponentId::Notification,
                    Notification::new(NotificationKind::Error, &message),
                    Vec::default(),
                )?;
                self.active_notification = Some(id);
                self.schedule_dismiss(id, duration);
                Ok(None)
            }

            NotificationActivityMsg::Dismiss { id } => {
                // Dismissal is by identifier; a stale id (already replaced
                // by a newer notification) is a no-op.
                if self.active_notification == Some(id) {
                    if self.app.mounted(&ComponentId::Notification) {
                        self.app
                            .umount(&ComponentId::Notification)
                            .map_err(|e| crate::error::AppError::Component(e.to_string()))?;
                    }
                    self.active_notification = None;
                }
                Ok(None)
            }
        }
    }

    fn schedule_dismiss(&self, id: uuid::Uuid, duration: std::time::Duration) {
        let tx = self.tx_to_main.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = tx.send(Msg::NotificationActivity(NotificationActivityMsg::Dismiss {
                id,
            }));
        });
    }
}
