use std::io;

use cardbox_app::cli::{Cli, run};
use cardbox_core::config::load_config;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(cli.verbose)
                .with_line_number(cli.verbose),
        )
        .init();

    let settings = load_config(cli.config.as_deref())?;

    let level = if cli.verbose {
        "debug"
    } else {
        settings.logging.level.as_str()
    };

    if let Ok(filter) = EnvFilter::try_new(level) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %level, "Invalid log level in config, keeping warn");
    }

    tracing::debug!(settings = ?settings, "Configuration loaded");

    run(&cli, &settings, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    Ok(())
}
