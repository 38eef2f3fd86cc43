//! CEP GUI Client - Main Entry Point
//!
//! Desktop prototype client for campus event discovery and promoter management.

use cep_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting CEP GUI Client...");

    // Run the GPUI application
    run_app();
}
