//! KV Live Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod socket;
mod store;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;
use log::Level;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(if cfg!(debug_assertions) { Level::Debug } else { Level::Info });

    let config = match ClientConfig::from_location() {
        Ok(config) => config,
        Err(e) => {
            log::error!("cannot start: {}", e);
            return;
        }
    };
    log::info!("socket at {}", config.socket_url);

    mount_to_body(move || view! { <App config=config /> });
}
