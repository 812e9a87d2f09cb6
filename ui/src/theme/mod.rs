use tuirealm::props::Color;

/// Fixed color palette for the terminal UI.
///
/// Accessors are associated functions so components never hold color
/// state themselves.
pub struct ThemeManager;

impl ThemeManager {
    pub fn text_primary() -> Color {
        Color::White
    }

    pub fn text_muted() -> Color {
        Color::Gray
    }

    pub fn primary_accent() -> Color {
        Color::Cyan
    }

    pub fn title_accent() -> Color {
        Color::LightCyan
    }

    pub fn status_success() -> Color {
        Color::Green
    }

    pub fn status_error() -> Color {
        Color::Red
    }

    pub fn status_loading() -> Color {
        Color::Cyan
    }

    pub fn selection_bg() -> Color {
        Color::DarkGray
    }

    pub fn shortcut_key() -> Color {
        Color::LightCyan
    }

    pub fn shortcut_description() -> Color {
        Color::Gray
    }
}
