//! Idea Map Frontend Entry Point

mod add_mode;
mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod error;
mod leaflet;
mod map_controller;
mod models;
mod popup;
mod store;
mod submission;

use app::App;
use config::MapConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = MapConfig::from_document();
    if config.is_none() {
        tracing::info!("[APP] No #map element on this page, map disabled");
    }

    mount_to_body(move || view! { <App config=config /> });
}
