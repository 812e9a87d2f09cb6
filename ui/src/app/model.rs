use crate::app::view::{view_authed, view_login, with_notification};
use crate::components::common::{ComponentId, Msg, Route};
use crate::components::global_key_watcher::GlobalKeyWatcher;
use crate::components::login_form::LoginForm;
use crate::components::nav_item::NavMenu;
use crate::components::state::MountWithState;
use crate::components::text_label::TextLabel;
use crate::config;
use crate::error::{AppError, AppResult};
use crate::services::{AuthStrategy, MockAuth, RemoteAuth};
use moivon_client::api::{ApiClient, Endpoints};
use moivon_client::{AuthService, SessionStore};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use tuirealm::event::NoUserEvent;
use tuirealm::ratatui::layout::{Constraint, Direction, Layout};
use tuirealm::terminal::{CrosstermTerminalAdapter, TerminalAdapter, TerminalBridge};
use tuirealm::{Application, EventListenerCfg, Sub, SubClause, SubEventClause, Update};
use uuid::Uuid;

/// Application model
pub struct Model<T>
where
    T: TerminalAdapter,
{
    /// Application
    pub app: Application<ComponentId, Msg, NoUserEvent>,
    /// Current navigation route
    pub route: Route,
    /// Indicates that the application must quit
    pub quit: bool,
    /// Tells whether to redraw interface
    pub redraw: bool,
    /// Used to draw to terminal
    pub terminal: TerminalBridge<T>,

    pub tx_to_main: Sender<Msg>,
    rx_to_main: Receiver<Msg>,

    pub(crate) strategy: Arc<dyn AuthStrategy>,
    pub(crate) session_store: SessionStore,
    /// Identifier of the currently displayed notification, if any.
    pub(crate) active_notification: Option<Uuid>,
}

impl Model<CrosstermTerminalAdapter> {
    pub fn new_crossterm() -> AppResult<Self> {
        let (tx_to_main, rx_to_main) = mpsc::channel();

        let session_store = SessionStore::new().map_err(|e| AppError::Storage(e.to_string()))?;
        let strategy = Self::build_strategy();

        let mut model = Self {
            app: Self::init_app()?,
            route: Route::Login,
            quit: false,
            redraw: true,
            terminal: TerminalBridge::init_crossterm()
                .map_err(|e| AppError::Component(e.to_string()))?,
            tx_to_main,
            rx_to_main,
            strategy,
            session_store,
            active_notification: None,
        };

        model
            .app
            .active(&ComponentId::LoginForm)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(model)
    }

    fn build_strategy() -> Arc<dyn AuthStrategy> {
        let config = config::get_config_or_panic();
        match config.auth().strategy() {
            config::AuthStrategyKind::Remote => {
                let endpoints = Endpoints::new(config.api().base_url());
                let api = ApiClient::new(endpoints, reqwest::Client::new());
                log::info!("Using remote auth against {}", config.api().base_url());
                Arc::new(RemoteAuth::new(AuthService::new(api)))
            }
            config::AuthStrategyKind::Mock => {
                log::info!("Using mock auth strategy");
                Arc::new(MockAuth::new(
                    config.auth().mock_email(),
                    config.auth().mock_password(),
                    config.auth().mock_delay(),
                ))
            }
        }
    }
}

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_outside_msg(&mut self) {
        if let Ok(msg) = self.rx_to_main.try_recv() {
            self.update(Some(msg));
        }
    }

    fn init_app() -> AppResult<Application<ComponentId, Msg, NoUserEvent>> {
        let config = config::get_config_or_panic();
        let mut app: Application<ComponentId, Msg, NoUserEvent> = Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(
                    config.ui().crossterm_input_listener_interval(),
                    config.ui().crossterm_input_listener_retries(),
                )
                .poll_timeout(config.ui().poll_timeout())
                .tick_interval(config.ui().tick_interval()),
        );

        app.mount(
            ComponentId::Header,
            Box::new(TextLabel::new("moivon".to_string())),
            Vec::default(),
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        app.remount_with_state(ComponentId::LoginForm, LoginForm::new(), Vec::default())?;

        app.mount(
            ComponentId::GlobalKeyWatcher,
            Box::new(GlobalKeyWatcher),
            vec![Sub::new(SubEventClause::Any, SubClause::Always)],
        )
        .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(app)
    }

    pub fn view(&mut self) -> AppResult<()> {
        let mut view_result: AppResult<()> = Ok(());
        let _ = self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints(
                    [
                        Constraint::Length(1), // Header
                        Constraint::Length(1), // Notification line
                        Constraint::Min(14),   // Main area
                    ]
                    .as_ref(),
                )
                .split(f.area());

            self.app.view(&ComponentId::Header, f, chunks[0]);

            view_result = match self.route {
                Route::Login => with_notification(&mut self.app, f, &chunks, view_login),
                Route::Home | Route::AllEvents => {
                    with_notification(&mut self.app, f, &chunks, view_authed)
                }
            };
        });

        view_result
    }

    /// Mount the authenticated-route components on first navigation away
    /// from the login screen.
    pub(crate) fn mount_authed_components(&mut self, route: Route) -> AppResult<()> {
        let title = match route {
            Route::Home => "Home",
            Route::AllEvents => "All events",
            Route::Login => "Login",
        };

        // Keep the existing menu (and its selection) across navigations.
        if !self.app.mounted(&ComponentId::NavMenu) {
            self.app
                .remount_with_state(ComponentId::NavMenu, NavMenu::default(), Vec::default())?;
        }

        self.app
            .remount(
                ComponentId::RouteBody,
                Box::new(TextLabel::new(title.to_string())),
                Vec::default(),
            )
            .map_err(|e| AppError::Component(e.to_string()))?;

        self.app
            .active(&ComponentId::NavMenu)
            .map_err(|e| AppError::Component(e.to_string()))?;

        Ok(())
    }
}

impl<T> Update<Msg> for Model<T>
where
    T: TerminalAdapter,
{
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        if let Some(msg) = msg {
            // Set redraw
            self.redraw = true;

            let result = match msg {
                Msg::AppClose => {
                    self.quit = true; // Terminate
                    None
                }
                Msg::ForceRedraw => None,
                Msg::AuthActivity(msg) => self.update_auth(msg).unwrap_or_else(|e| {
                    log::error!("Auth update failed: {e}");
                    None
                }),
                Msg::NotificationActivity(msg) => {
                    self.update_notification(msg).unwrap_or_else(|e| {
                        log::error!("Notification update failed: {e}");
                        None
                    })
                }
                Msg::NavigationActivity(msg) => {
                    self.update_navigation(msg).unwrap_or_else(|e| {
                        log::error!("Navigation update failed: {e}");
                        None
                    })
                }
                Msg::Error(e) => {
                    log::error!("Error received: {e}");
                    None
                }
            };

            result
        } else {
            None
        }
    }
}
