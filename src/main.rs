//! FrameStore Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod drafts;
mod error;
mod logging;
mod models;
mod notices;
mod remote_state;
mod resource;
mod store;
mod totals;

use app::App;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, errors) = ApiConfig::load();
    logging::init(config.log_level);
    for err in errors {
        log::warn!("config: {}, using default", err);
    }
    log::info!("FrameStore UI starting, API at {}", config.base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
