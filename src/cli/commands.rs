//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::AppConfig;
use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::Cli;
use crate::config_initialization::initialize_configuration;
use crate::domain::model::ExternalCommand;
use crate::utils::logging::LoggingSystem;

/// Printed to stderr whatever the log filter says
pub const FFMPEG_MISSING_WARNING: &str =
    "Warning: ffmpeg not installed or not in PATH. Commands will not work.";

/// Run one trim invocation end to end
pub fn run(cli: Cli) -> Result<()> {
    let config = match initialize_configuration(&cli) {
        Ok(config) => config,
        Err(e) => {
            // The availability check still happens on launch, against
            // defaults plus whatever the command line set.
            let mut fallback = AppConfig::default();
            fallback.apply(cli.overrides());
            warn_if_ffmpeg_missing(&DefaultAppContainer::new(&fallback));
            return Err(e.into());
        }
    };

    LoggingSystem::new(config.logging())
        .initialize()
        .context("Failed to initialize logging")?;

    let container = DefaultAppContainer::new(&config);
    warn_if_ffmpeg_missing(&container);

    let interactor = container.trim_interactor();

    let request = cli.command.to_request();
    info!("Starting {}", request.mode.verb());

    if cli.dry_run {
        let command = interactor.plan(&request)?;
        print_plan(&command, cli.json)?;
        return Ok(());
    }

    interactor.execute(&request)?;
    Ok(())
}

fn warn_if_ffmpeg_missing(container: &dyn AppContainer) {
    if !container.trim_interactor().warn_if_unavailable() {
        eprintln!("{}", FFMPEG_MISSING_WARNING);
    }
}

/// Print a planned command to stdout
fn print_plan(command: &ExternalCommand, json: bool) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(&command.report())
            .context("Failed to serialize plan to JSON")?;
        println!("{}", json);
    } else {
        println!("{}", command);
    }
    Ok(())
}
