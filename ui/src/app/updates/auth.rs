use crate::app::model::Model;
use crate::components::common::{AuthActivityMsg, ComponentId, Msg};
use crate::components::login_form::{ATTR_SUBMITTING, LoginForm};
use crate::components::state::MountWithState;
use crate::config;
use crate::error::AppResult;
use crate::services::LoginWorkflow;
use moivon_client::Credentials;
use tuirealm::terminal::TerminalAdapter;
use tuirealm::{AttrValue, Attribute};

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_auth(&mut self, msg: AuthActivityMsg) -> AppResult<Option<Msg>> {
        match msg {
            AuthActivityMsg::SubmitLogin { email, password } => {
                // One workflow per attempt; the notification identifier
                // lives inside it, never in process-wide state. The form's
                // own disabling policy is the only guard against
                // overlapping attempts.
                let mut workflow = LoginWorkflow::new(
                    self.strategy.clone(),
                    self.session_store.clone(),
                    self.tx_to_main.clone(),
                    config::get_config_or_panic().ui().notification_duration(),
                );
                let credentials = Credentials::new(email, password);

                tokio::spawn(async move {
                    if let Err(e) = workflow.run_attempt(credentials).await {
                        log::error!("Login attempt aborted: {e}");
                    }
                });
                Ok(None)
            }

            AuthActivityMsg::LoginSucceeded => {
                // Reset the form to its pristine state for the next visit
                // to the login route.
                self.app
                    .remount_with_state(ComponentId::LoginForm, LoginForm::new(), Vec::default())?;
                Ok(None)
            }

            AuthActivityMsg::LoginFailed => {
                // Re-enable submission; entered values stay for the retry.
                self.app
                    .attr(
                        &ComponentId::LoginForm,
                        Attribute::Custom(ATTR_SUBMITTING),
                        AttrValue::Flag(false),
                    )
                    .map_err(|e| crate::error::AppError::Component(e.to_string()))?;
                Ok(None)
            }
        }
    }
}
