use crate::components::common::Msg;
use crate::components::state::ComponentState;
use crate::config;
use crate::theme::ThemeManager;
use std::time::Instant;
use tui_realm_stdlib::Label;
use tuirealm::{
    Component, Event, MockComponent,
    event::NoUserEvent,
    props::{Alignment, AttrValue, Attribute},
};

// Simple animation frames for the loading phase
const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Notification phase. A notification starts as `Loading` and is replaced
/// by a terminal `Success` or `Error` one; the model tracks identities,
/// this component only renders the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Loading,
    Success,
    Error,
}

#[derive(MockComponent)]
pub struct Notification {
    component: Label,
    kind: NotificationKind,
    message: String,
    frame_index: usize,
    last_frame_time: Instant,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: &str) -> Self {
        let mut component = Label::default();

        let (prefix, color) = match kind {
            NotificationKind::Loading => (SPINNER_FRAMES[0], ThemeManager::status_loading()),
            NotificationKind::Success => ("✔", ThemeManager::status_success()),
            NotificationKind::Error => ("✖", ThemeManager::status_error()),
        };

        component.attr(
            Attribute::Text,
            AttrValue::String(format!("{prefix} {message}")),
        );
        component.attr(Attribute::Foreground, AttrValue::Color(color));
        component.attr(
            Attribute::Alignment,
            AttrValue::Alignment(Alignment::Center),
        );

        Self {
            component,
            kind,
            message: message.to_string(),
            frame_index: 0,
            last_frame_time: Instant::now(),
        }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    // Advance the spinner; terminal phases are static.
    fn update_animation(&mut self) {
        if self.kind != NotificationKind::Loading {
            return;
        }
        let now = Instant::now();
        let frame_duration = config::get_config_or_panic().ui().spinner_frame_duration();
        if now.duration_since(self.last_frame_time) >= frame_duration {
            self.frame_index = (self.frame_index + 1) % SPINNER_FRAMES.len();
            self.last_frame_time = now;

            let display_text = format!("{} {}", SPINNER_FRAMES[self.frame_index], self.message);
            self.component
                .attr(Attribute::Text, AttrValue::String(display_text));
        }
    }
}

impl Component<Msg, NoUserEvent> for Notification {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Tick => {
                self.update_animation();
                Some(Msg::ForceRedraw)
            }
            _ => None,
        }
    }
}

impl ComponentState for Notification {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!(
            "Mounting Notification component ({:?}): {}",
            self.kind,
            self.message
        );
        self.frame_index = 0;
        self.last_frame_time = Instant::now();
        Ok(())
    }
}
