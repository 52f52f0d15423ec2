//! block-vision binary: wires logging, configuration, theme and the HTTP
//! client together and runs the event loop.

use block_vision::app::{self, App};
use block_vision::core::AppConfig;
use block_vision::debug;
use block_vision::services::api::ApiClient;
use block_vision::ui::theme::Theme;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let _log_guard = debug::init_logger();

    let config = AppConfig::from_env();
    tracing::info!(api_url = %config.api_url, timeout = ?config.http_timeout, "Configuration loaded");

    let theme = Theme::init_global(&app::load_settings(&config.theme_path));
    let api = match ApiClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create market API client");
            eprintln!("Error running program: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match app::run(App::new(api), theme).await {
        Ok(()) => {
            tracing::info!("Exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error running program: {}", e);
            ExitCode::FAILURE
        }
    }
}
