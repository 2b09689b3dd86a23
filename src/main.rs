//! UpTask Frontend Entry Point

mod api;
mod app;
mod board;
mod cache;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod queries;
mod schema;
mod store;
mod utils;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    let config = AppConfig::load();
    log::set_max_level(config.log_level);
    log::info!("[APP] starting against {}", config.api_url);
    mount_to_body(move || view! { <App config=config /> });
}
