pub mod args;
pub mod commands;

use crate::args::{Cli, Commands};
use anyhow::{Context, Result};
use bazaar::domain::config::{BackofficeConfig, LoggingSettings};
use bazaar::features::shipping::Shipping;
use bazaar::kernel::config::load_config;
use bazaar_logger::{Logger, parse_level};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config: BackofficeConfig = load_config(cli.config.as_deref())?;
    let _logger = init_logger(&config.logging, cli.json_logs)?;

    let slices = bazaar::init(&config);
    let shipping =
        bazaar::slice::<Shipping>(&slices).context("Shipping feature is not enabled")?;

    let outcome = match cli.command {
        Commands::Default {} => commands::default_tree()?,
        Commands::Transform { rows } => commands::transform(rows.as_deref())?,
        Commands::Validate { tree } => commands::validate(&tree)?,
        Commands::Flatten { tree } => commands::flatten(&tree)?,
        Commands::Check { rows, brand } => {
            commands::check(shipping, rows.as_deref(), &brand).await?
        },
        Commands::Publish { tree, brand } => commands::publish(shipping, &tree, &brand).await?,
    };

    writeln!(io::stdout().lock(), "{}", outcome.output).context("Writing output")?;

    Ok(if outcome.success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn init_logger(settings: &LoggingSettings, json_logs: bool) -> Result<Logger> {
    let mut builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&settings.level)?)
        .json(settings.json || json_logs);
    if let Some(filter) = &settings.filter {
        builder = builder.env_filter(filter);
    }
    Ok(builder.init()?)
}
