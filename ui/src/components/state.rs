use crate::components::common::{ComponentId, Msg};
use crate::error::{AppError, AppResult};
use tuirealm::{Application, Component, MockComponent, NoUserEvent, Sub};

/// Setup hook for components that prepare state before entering the view
/// tree: the login form, the toast, and the nav menu all reset themselves
/// here so a remount always starts from a known state.
pub trait ComponentState {
    fn mount(&mut self) -> AppResult<()>;
}

/// Mounting that runs [`ComponentState::mount`] first.
///
/// There is a single path on purpose: tui-realm's `remount` replaces an
/// existing instance under the same id and plain-mounts otherwise, so the
/// same call serves initial mounting and state resets (fresh login form
/// after success, replaced toast phases).
pub trait MountWithState {
    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static;
}

impl MountWithState for Application<ComponentId, Msg, NoUserEvent> {
    fn remount_with_state<C>(
        &mut self,
        id: ComponentId,
        mut component: C,
        subs: Vec<Sub<ComponentId, NoUserEvent>>,
    ) -> AppResult<()>
    where
        C: ComponentState + MockComponent + Component<Msg, NoUserEvent> + 'static,
    {
        component.mount()?;

        self.remount(id, Box::new(component), subs)
            .map_err(|e| AppError::Component(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tuirealm::command::{Cmd, CmdResult};
    use tuirealm::ratatui::layout::Rect;
    use tuirealm::{AttrValue, Attribute, Event, EventListenerCfg, Frame, State};

    struct CountingComponent {
        mounts: Arc<AtomicUsize>,
    }

    impl ComponentState for CountingComponent {
        fn mount(&mut self) -> AppResult<()> {
            self.mounts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    impl MockComponent for CountingComponent {
        fn view(&mut self, _frame: &mut Frame, _area: Rect) {}

        fn query(&self, _attr: Attribute) -> Option<AttrValue> {
            None
        }

        fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

        fn state(&self) -> State {
            State::None
        }

        fn perform(&mut self, _cmd: Cmd) -> CmdResult {
            CmdResult::None
        }
    }

    impl Component<Msg, NoUserEvent> for CountingComponent {
        fn on(&mut self, _ev: Event<NoUserEvent>) -> Option<Msg> {
            None
        }
    }

    #[test]
    fn test_remount_with_state_runs_setup_and_replaces_instance() {
        let mut app: Application<ComponentId, Msg, NoUserEvent> =
            Application::init(EventListenerCfg::default());
        let mounts = Arc::new(AtomicUsize::new(0));

        app.remount_with_state(
            ComponentId::RouteBody,
            CountingComponent {
                mounts: mounts.clone(),
            },
            Vec::default(),
        )
        .unwrap();
        assert!(app.mounted(&ComponentId::RouteBody));
        assert_eq!(mounts.load(Ordering::SeqCst), 1);

        // Same id again: the setup hook runs for the replacement too.
        app.remount_with_state(
            ComponentId::RouteBody,
            CountingComponent {
                mounts: mounts.clone(),
            },
            Vec::default(),
        )
        .unwrap();
        assert!(app.mounted(&ComponentId::RouteBody));
        assert_eq!(mounts.load(Ordering::SeqCst), 2);
    }
}
