use yew::prelude::*;
use yew_router::prelude::*;

mod components;
pub mod api_client;
pub mod catalog;
pub mod common;
pub mod hooks;
pub mod presenter;
pub mod settings;
pub mod state;

use common::toast::ToastProvider;
use hooks::DashboardProvider;
use components::dashboard::Dashboard;
use components::layout::Layout;
use components::settings::Settings;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout title="Forecast Dashboard"><Dashboard /></Layout> }
        }
        Route::Settings => {
            log::trace!("Rendering Settings page");
            html! { <Layout title="Settings"><Settings /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <DashboardProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </DashboardProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== GeoRisk Forecast Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
