use yew::prelude::*;
use log::info;

mod config;
mod error;
mod view;
mod insights {
    pub mod api;
    pub mod controller;
}
mod components {
    pub mod fade_in;
    pub mod insights_panel;
    pub mod nav;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
