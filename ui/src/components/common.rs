use crate::error::AppError;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Eq, PartialEq, Clone, Hash)]
pub enum ComponentId {
    Header,
    LoginForm,
    NavMenu,
    RouteBody,
    Notification,
    GlobalKeyWatcher,
}

/// Navigation routes. Symbolic names only; what lives behind each route
/// is the routing table's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Home,
    AllEvents,
}

#[derive(Debug, PartialEq)]
pub enum Msg {
    AppClose,
    ForceRedraw,
    AuthActivity(AuthActivityMsg),
    NotificationActivity(NotificationActivityMsg),
    NavigationActivity(NavigationActivityMsg),
    Error(AppError),
}

#[derive(Debug, PartialEq)]
pub enum AuthActivityMsg {
    /// A validated form submission; carries the entered credentials.
    SubmitLogin { email: String, password: String },
    /// Terminal outcome notifications back to the form: succeeded resets
    /// it to pristine, failed just re-enables submission.
    LoginSucceeded,
    LoginFailed,
}

#[derive(Debug, PartialEq)]
pub enum NotificationActivityMsg {
    ShowLoading {
        id: Uuid,
        message: String,
    },
    ShowSuccess {
        id: Uuid,
        message: String,
        duration: Duration,
    },
    ShowError {
        id: Uuid,
        message: String,
        duration: Duration,
    },
    /// Dismiss by tracked identifier, never by kind. Stale ids (an already
    /// replaced notification) are ignored.
    Dismiss {
        id: Uuid,
    },
}

#[derive(Debug, PartialEq)]
pub enum NavigationActivityMsg {
    NavigateTo(Route),
}

impl Default for Msg {
    fn default() -> Self {
        Self::AppClose
    }
}
