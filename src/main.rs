//! Test Reports Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod flows;
mod format;
mod models;
mod store;
mod validation;

use app::App;
use components::ConfigErrorView;
use config::ApiConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match ApiConfig::from_build_env() {
        Ok(config) => {
            tracing::info!(base_url = config.base_url(), "[APP] starting");
            mount_to_body(move || view! { <App config=config.clone() /> });
        }
        Err(e) => {
            tracing::error!(error = %e, "[APP] missing service configuration");
            let message = e.to_string();
            mount_to_body(move || view! { <ConfigErrorView message=message.clone() /> });
        }
    }
}
