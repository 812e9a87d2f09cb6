use crate::components::common::{ComponentId, Msg};
use crate::error::AppResult;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout, Rect};
use tuirealm::{Application, Frame, NoUserEvent};

/// Render the current view, then the notification toast on top of the
/// dedicated line when one is mounted. Notifications never steal focus.
pub fn with_notification<F>(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    chunks: &[Rect],
    view_fn: F,
) -> AppResult<()>
where
    F: FnOnce(
        &mut Application<ComponentId, Msg, NoUserEvent>,
        &mut Frame,
        &[Rect],
    ) -> AppResult<()>,
{
    view_fn(app, f, chunks)?;

    if app.mounted(&ComponentId::Notification) {
        app.view(&ComponentId::Notification, f, chunks[1]);
    }

    Ok(())
}

pub fn view_login(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    chunks: &[Rect],
) -> AppResult<()> {
    let main = chunks[2];

    // Center the form box horizontally
    let form_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(60.min(main.width)),
            Constraint::Min(1),
        ])
        .split(main)[1];

    app.view(&ComponentId::LoginForm, f, form_area);
    Ok(())
}

pub fn view_authed(
    app: &mut Application<ComponentId, Msg, NoUserEvent>,
    f: &mut Frame,
    chunks: &[Rect],
) -> AppResult<()> {
    let main = chunks[2];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(main);

    app.view(&ComponentId::NavMenu, f, columns[0]);
    app.view(&ComponentId::RouteBody, f, columns[1]);
    Ok(())
}
