pub mod login_workflow;
pub mod notifications;

pub use login_workflow::{AttemptState, AuthStrategy, LoginWorkflow, MockAuth, RemoteAuth};
pub use notifications::NotificationManager;
