use serde::Deserialize;
use std::time::Duration;

/// Terminal event-loop and notification timing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UIConfig {
    tick_interval_millis: Option<u64>,
    poll_timeout_ms: Option<u64>,
    crossterm_input_listener_interval_ms: Option<u64>,
    crossterm_input_listener_retries: Option<usize>,
    notification_duration_ms: Option<u64>,
    spinner_frame_duration_ms: Option<u64>,
}

impl UIConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_millis.unwrap_or(100))
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms.unwrap_or(20))
    }

    pub fn crossterm_input_listener_interval(&self) -> Duration {
        Duration::from_millis(self.crossterm_input_listener_interval_ms.unwrap_or(20))
    }

    pub fn crossterm_input_listener_retries(&self) -> usize {
        self.crossterm_input_listener_retries.unwrap_or(5)
    }

    /// Display duration for success/error notifications.
    pub fn notification_duration(&self) -> Duration {
        self.notification_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::constants::NOTIFICATION_DURATION)
    }

    pub fn spinner_frame_duration(&self) -> Duration {
        Duration::from_millis(self.spinner_frame_duration_ms.unwrap_or(100))
    }
}
