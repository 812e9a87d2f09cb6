use crate::app::model::Model;
use crate::components::common::{ComponentId, Msg, NavigationActivityMsg, Route};
use crate::error::AppResult;
use tuirealm::terminal::TerminalAdapter;

impl<T> Model<T>
where
    T: TerminalAdapter,
{
    pub fn update_navigation(&mut self, msg: NavigationActivityMsg) -> AppResult<Option<Msg>> {
        match msg {
            NavigationActivityMsg::NavigateTo(route) => {
                log::info!("Navigating to {route:?}");
                self.route = route;

                match route {
                    Route::Login => {
                        self.app
                            .active(&ComponentId::LoginForm)
                            .map_err(|e| crate::error::AppError::Component(e.to_string()))?;
                    }
                    Route::Home | Route::AllEvents => {
                        self.mount_authed_components(route)?;
                    }
                }

                Ok(None)
            }
        }
    }
}
