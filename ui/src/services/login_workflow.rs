use crate::components::common::{AuthActivityMsg, Msg, NavigationActivityMsg, Route};
use crate::constants::{
    INVALID_CREDENTIALS_MESSAGE, LOGIN_LOADING_MESSAGE, LOGIN_SUCCESS_MESSAGE,
};
use crate::error::{AppError, AppResult};
use crate::services::notifications::NotificationManager;
use async_trait::async_trait;
use moivon_client::auth::error_body::{ErrorBody, ErrorDetail};
use moivon_client::{AuthError, AuthService, Credentials, Session, SessionStore};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Explicit per-attempt state. A submission moves `Idle → Submitting →
/// (Success | Failure)`, and both terminal states return to `Idle`;
/// there is no automatic retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttemptState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

/// Guarded transition wrapper around [`AttemptState`].
#[derive(Debug, Default)]
pub struct LoginAttempt {
    state: AttemptState,
}

impl LoginAttempt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn begin(&mut self) -> AppResult<()> {
        match self.state {
            AttemptState::Idle => {
                self.state = AttemptState::Submitting;
                Ok(())
            }
            other => Err(AppError::State(format!(
                "Cannot begin a login attempt from {other:?}"
            ))),
        }
    }

    pub fn succeed(&mut self) -> AppResult<()> {
        match self.state {
            AttemptState::Submitting => {
                self.state = AttemptState::Success;
                Ok(())
            }
            other => Err(AppError::State(format!(
                "Cannot complete a login attempt from {other:?}"
            ))),
        }
    }

    pub fn fail(&mut self) -> AppResult<()> {
        match self.state {
            AttemptState::Submitting => {
                self.state = AttemptState::Failure;
                Ok(())
            }
            other => Err(AppError::State(format!(
                "Cannot fail a login attempt from {other:?}"
            ))),
        }
    }

    /// Return to `Idle` from a terminal state, ready for a new attempt.
    pub fn finish(&mut self) -> AppResult<()> {
        match self.state {
            AttemptState::Success | AttemptState::Failure => {
                self.state = AttemptState::Idle;
                Ok(())
            }
            other => Err(AppError::State(format!(
                "Cannot finish a login attempt from {other:?}"
            ))),
        }
    }
}

/// One selectable way to authenticate a login attempt. Both variants are
/// first-class; configuration picks one, neither is a fallback for the
/// other.
#[async_trait]
pub trait AuthStrategy: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// Route to land on after a successful attempt.
    fn landing_route(&self) -> Route;
}

/// Submits credentials to the remote auth endpoint.
pub struct RemoteAuth {
    service: AuthService,
}

impl RemoteAuth {
    pub fn new(service: AuthService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AuthStrategy for RemoteAuth {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.service.login(credentials).await
    }

    fn landing_route(&self) -> Route {
        Route::AllEvents
    }
}

/// Compares the entered credentials case-insensitively against two fixed
/// literals after an artificial delay. A mismatch always surfaces the
/// fixed invalid-credentials message.
pub struct MockAuth {
    email: String,
    password: String,
    delay: Duration,
}

impl MockAuth {
    pub fn new(email: impl Into<String>, password: impl Into<String>, delay: Duration) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            delay,
        }
    }

    fn invalid_credentials() -> AuthError {
        AuthError::Api {
            status: 401,
            body: ErrorBody {
                error: Some(ErrorDetail::Message(INVALID_CREDENTIALS_MESSAGE.to_string())),
            },
        }
    }
}

#[async_trait]
impl AuthStrategy for MockAuth {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        tokio::time::sleep(self.delay).await;

        let matches = credentials.email.eq_ignore_ascii_case(&self.email)
            && credentials.password.eq_ignore_ascii_case(&self.password);
        if !matches {
            return Err(Self::invalid_credentials());
        }

        Ok(Session::new(serde_json::json!({
            "accessToken": format!("mock-{}", uuid::Uuid::new_v4()),
            "user": { "email": self.email },
        })))
    }

    fn landing_route(&self) -> Route {
        Route::Home
    }
}

/// Orchestrates one login attempt end to end.
///
/// Success effects run in a fixed order: persist the session, dismiss the
/// loading notification, show the success notification, reset the form,
/// navigate. Session persistence always happens before navigation.
/// Failures dismiss the loading notification and surface the derived
/// error message; the attempt is abandoned and the user must resubmit.
pub struct LoginWorkflow {
    strategy: Arc<dyn AuthStrategy>,
    store: SessionStore,
    tx: Sender<Msg>,
    attempt: LoginAttempt,
    notifications: NotificationManager,
}

impl LoginWorkflow {
    pub fn new(
        strategy: Arc<dyn AuthStrategy>,
        store: SessionStore,
        tx: Sender<Msg>,
        notification_duration: Duration,
    ) -> Self {
        let notifications = NotificationManager::new(tx.clone(), notification_duration);
        Self {
            strategy,
            store,
            tx,
            attempt: LoginAttempt::new(),
            notifications,
        }
    }

    pub fn state(&self) -> AttemptState {
        self.attempt.state()
    }

    fn send(&self, msg: Msg) -> AppResult<()> {
        self.tx.send(msg).map_err(|e| AppError::Channel(e.to_string()))
    }

    /// Run one full attempt and return the terminal state it reached.
    /// The workflow itself ends back in `Idle` either way.
    pub async fn run_attempt(&mut self, credentials: Credentials) -> AppResult<AttemptState> {
        self.attempt.begin()?;
        self.notifications.start_loading(LOGIN_LOADING_MESSAGE)?;

        let outcome = self.strategy.authenticate(&credentials).await;
        let terminal = match outcome {
            Ok(session) => match self.store.save(&session) {
                Ok(()) => {
                    log::info!("Login attempt succeeded");
                    self.notifications.success(LOGIN_SUCCESS_MESSAGE)?;
                    self.send(Msg::AuthActivity(AuthActivityMsg::LoginSucceeded))?;
                    self.send(Msg::NavigationActivity(NavigationActivityMsg::NavigateTo(
                        self.strategy.landing_route(),
                    )))?;
                    self.attempt.succeed()?;
                    AttemptState::Success
                }
                Err(e) => {
                    log::error!("Session persistence failed: {e}");
                    self.notifications.error(&AuthError::Transport(e.to_string()).user_message())?;
                    self.send(Msg::AuthActivity(AuthActivityMsg::LoginFailed))?;
                    self.attempt.fail()?;
                    AttemptState::Failure
                }
            },
            Err(e) => {
                log::warn!("Login attempt failed: {e}");
                self.notifications.error(&e.user_message())?;
                self.send(Msg::AuthActivity(AuthActivityMsg::LoginFailed))?;
                self.attempt.fail()?;
                AttemptState::Failure
            }
        };

        self.attempt.finish()?;
        Ok(terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_attempt_transitions_are_guarded() {
        let mut attempt = LoginAttempt::new();
        assert_eq!(attempt.state(), AttemptState::Idle);

        // Terminal transitions require an in-flight attempt.
        assert_err!(attempt.succeed());
        assert_err!(attempt.fail());
        assert_err!(attempt.finish());

        assert_ok!(attempt.begin());
        assert_eq!(attempt.state(), AttemptState::Submitting);
        assert_err!(attempt.begin());

        assert_ok!(attempt.succeed());
        assert_eq!(attempt.state(), AttemptState::Success);
        assert_ok!(attempt.finish());
        assert_eq!(attempt.state(), AttemptState::Idle);
    }

    #[test]
    fn test_failure_also_returns_to_idle() {
        let mut attempt = LoginAttempt::new();
        attempt.begin().unwrap();
        attempt.fail().unwrap();
        assert_eq!(attempt.state(), AttemptState::Failure);
        attempt.finish().unwrap();
        assert_eq!(attempt.state(), AttemptState::Idle);
    }

    #[test]
    fn test_mock_mismatch_error_carries_fixed_message() {
        let error = MockAuth::invalid_credentials();
        assert_eq!(error.user_message(), INVALID_CREDENTIALS_MESSAGE);
    }
}
