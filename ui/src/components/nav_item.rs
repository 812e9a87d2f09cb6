use crate::components::common::{Msg, NavigationActivityMsg, Route};
use crate::components::state::ComponentState;
use crate::theme::ThemeManager;
use tuirealm::command::{Cmd, CmdResult};
use tuirealm::event::{Key, KeyEvent};
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span};
use tuirealm::ratatui::widgets::Paragraph;
use tuirealm::{
    AttrValue, Attribute, Component, Event, Frame, MockComponent, NoUserEvent, State, StateValue,
};

/// One presentational navigation row: an icon glyph plus a label, with
/// highlight styling when selected.
#[derive(Debug, Clone)]
pub struct NavItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub route: Route,
}

impl NavItem {
    pub fn new(icon: &'static str, label: &'static str, route: Route) -> Self {
        Self { icon, label, route }
    }

    fn line(&self, selected: bool) -> Line<'_> {
        let icon_style = Style::default().fg(ThemeManager::primary_accent());
        let label_style = if selected {
            Style::default()
                .fg(ThemeManager::text_primary())
                .bg(ThemeManager::selection_bg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ThemeManager::text_muted())
        };
        Line::from(vec![
            Span::styled(format!("  {} ", self.icon), icon_style),
            Span::styled(self.label, label_style),
        ])
    }
}

/// Vertical menu of [`NavItem`] rows shown on the authenticated routes.
pub struct NavMenu {
    items: Vec<NavItem>,
    selected: usize,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(vec![
            NavItem::new("⌂", "Home", Route::Home),
            NavItem::new("♪", "All events", Route::AllEvents),
        ])
    }
}

impl NavMenu {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items, selected: 0 }
    }

    fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    fn select_prev(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + self.items.len() - 1) % self.items.len();
        }
    }
}

impl ComponentState for NavMenu {
    fn mount(&mut self) -> crate::error::AppResult<()> {
        log::debug!("Mounting NavMenu component");
        Ok(())
    }
}

impl MockComponent for NavMenu {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Constraint> = self.items.iter().map(|_| Constraint::Length(1)).collect();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(rows)
            .split(area);

        for (i, item) in self.items.iter().enumerate() {
            let row = Paragraph::new(item.line(i == self.selected));
            frame.render_widget(row, chunks[i]);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        match attr {
            Attribute::Content => self
                .items
                .get(self.selected)
                .map(|item| AttrValue::String(item.label.to_string())),
            _ => None,
        }
    }

    fn attr(&mut self, _attr: Attribute, _value: AttrValue) {}

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.selected))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(tuirealm::command::Direction::Down) => {
                self.select_next();
                CmdResult::Changed(self.state())
            }
            Cmd::Move(tuirealm::command::Direction::Up) => {
                self.select_prev();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, NoUserEvent> for NavMenu {
    fn on(&mut self, ev: Event<NoUserEvent>) -> Option<Msg> {
        match ev {
            Event::Keyboard(KeyEvent {
                code: Key::Down, ..
            }) => {
                self.select_next();
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent { code: Key::Up, .. }) => {
                self.select_prev();
                Some(Msg::ForceRedraw)
            }
            Event::Keyboard(KeyEvent {
                code: Key::Enter, ..
            }) => self.items.get(self.selected).map(|item| {
                Msg::NavigationActivity(NavigationActivityMsg::NavigateTo(item.route))
            }),
            Event::Keyboard(KeyEvent { code: Key::Esc, .. }) => Some(Msg::AppClose),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tuirealm::event::KeyModifiers;

    fn key(code: Key) -> Event<NoUserEvent> {
        Event::Keyboard(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_selection_wraps_around() {
        let mut menu = NavMenu::default();
        assert_eq!(menu.selected, 0);

        menu.on(key(Key::Down));
        assert_eq!(menu.selected, 1);
        menu.on(key(Key::Down));
        assert_eq!(menu.selected, 0);
        menu.on(key(Key::Up));
        assert_eq!(menu.selected, 1);
    }

    #[test]
    fn test_enter_navigates_to_selected_route() {
        let mut menu = NavMenu::default();
        menu.on(key(Key::Down));

        let msg = menu.on(key(Key::Enter));
        assert_eq!(
            msg,
            Some(Msg::NavigationActivity(NavigationActivityMsg::NavigateTo(
                Route::AllEvents
            )))
        );
    }
}
