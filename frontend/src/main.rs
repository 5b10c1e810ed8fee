use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod content;
mod dom;
mod metadata;
mod state {
    pub mod menu;
    pub mod scroll;
}
mod motion {
    pub mod transition;
    pub mod viewport;
}
mod components {
    pub mod circular_gallery;
    pub mod decoration;
    pub mod icon;
    pub mod nav;
    pub mod reveal;
    pub mod section_heading;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod journey;
}
mod pages {
    pub mod not_found;
    pub mod portfolio;
}

use pages::{not_found::NotFound, portfolio::Portfolio};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Portfolio /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    if let Err(err) = metadata::SITE.install() {
        warn!("page metadata not installed: {}", err);
    }
    yew::Renderer::<App>::new().render();
}
