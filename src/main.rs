//! Todo Widget Entry Point

mod models;
mod config;
mod storage;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    console_logger::init(config.log_level);
    tracing::info!("starting todo widget");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
