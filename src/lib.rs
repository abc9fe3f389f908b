pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::convert::ConvertOptions;
use crate::core::DayCache;
use crate::core::config::AppConfig;
use crate::core::day::{day_key, yesterday};
use anyhow::Result;
use chrono::NaiveDate;
use std::io::Write;
use tracing::{debug, info};

pub enum AppCommand {
    Raw,
    List,
    Clear,
    Convert(ConvertOptions),
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("curry starting...");

    let config = load_config(config_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(command, &config, yesterday(), &mut out).await
}

/// Runs `command` against the rates for `day`, writing user output to `out`.
pub async fn execute(
    command: AppCommand,
    config: &AppConfig,
    day: NaiveDate,
    out: &mut dyn Write,
) -> Result<()> {
    let key = day_key(day);
    let cache = DayCache::new(config.cache_dir()?);
    debug!("Using cache at {} for {}", cache.root().display(), key);

    match command {
        AppCommand::Clear => cli::clear::run(&cache, &key, out),
        AppCommand::Raw => {
            let snapshot = cli::load_snapshot(config, &cache, &key).await?;
            cli::raw::run(&snapshot.raw, out)
        }
        AppCommand::List => {
            let snapshot = cli::load_snapshot(config, &cache, &key).await?;
            cli::list::run(&snapshot.data.rates, out)
        }
        AppCommand::Convert(options) => {
            // Reject a bad amount before any network traffic.
            let request = options.resolve(&config.currency)?;
            let snapshot = cli::load_snapshot(config, &cache, &key).await?;
            cli::convert::run(&request, &snapshot.data.rates, &key, out)
        }
    }
}
