use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod deck;
mod predict;
mod theme;

mod components {
    pub mod animated_counter;
    pub mod interactive_chart;
    pub mod neural_network;
    pub mod parallax;
}

mod pages {
    pub mod home;
    pub mod not_found;
}

mod slides {
    pub mod conclusion;
    pub mod dataset;
    pub mod intro;
    pub mod methodology;
    pub mod prediction;
    pub mod problem;
    pub mod results;
}

use pages::home::Home;
use pages::not_found::NotFound;

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
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting presentation");

    yew::Renderer::<App>::new().render();
}
