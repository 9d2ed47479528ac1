// OrderCal - date-picking order calendar
// Main entry point for iced application

use anyhow::Context;
use iced::{Application, Settings as IcedSettings};
use log::info;
use tokio_util::sync::CancellationToken;

use ordercal::app::{AppFlags, OrderCalApp};
use ordercal::command_handlers::OrderHandlers;
use ordercal::config::{validate_config, AppConfig};
use ordercal::utils::logging::{init_logging, log_error_with_context};
use ordercal::OrderClient;

fn load_flags() -> anyhow::Result<AppFlags> {
    let config = AppConfig::from_env().context("Failed to read configuration")?;
    validate_config(&config).context("Invalid configuration")?;

    let client = OrderClient::new(config.endpoint.clone(), &config.http)
        .context("Failed to build HTTP client")?;
    let shutdown = CancellationToken::new();

    Ok(AppFlags {
        config,
        handlers: OrderHandlers::new(client, shutdown.clone()),
        shutdown,
    })
}

fn main() -> anyhow::Result<()> {
    init_logging().context("Failed to initialize logging")?;
    info!("Starting OrderCal");

    let flags = match load_flags() {
        Ok(flags) => flags,
        Err(e) => {
            log_error_with_context(&e, "startup");
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    OrderCalApp::run(IcedSettings {
        window: iced::window::Settings {
            size: iced::Size::new(420.0, 620.0),
            resizable: true,
            ..Default::default()
        },
        ..IcedSettings::with_flags(flags)
    })
    .context("UI event loop failed")?;

    info!("OrderCal stopped");
    Ok(())
}
