//! Fixed names, durations, and message literals shared across the UI.

use std::time::Duration;

/// Display duration for terminal (success/error) notifications.
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(4000);

/// Loading toast shown while a login attempt is in flight.
pub const LOGIN_LOADING_MESSAGE: &str = "Logging in...";

/// Success toast shown after a completed login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login success!";

/// Error toast for the mock-credential strategy; always this text,
/// whatever the mismatch.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials!";

/// Logo asset, resolved against the configured public folder.
pub const LOGO_ASSET_PATH: &str = "/img/moivon-black.png";
