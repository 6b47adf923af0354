use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use pajak_cli::batch;
use pajak_cli::cli::{Cli, Command};
use pajak_cli::config::Config;
use pajak_cli::logging;
use pajak_cli::output::{render_rates, render_result};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };
    config.apply_overrides(&cli);

    logging::init_logging(&config.log_level, config.log_file.as_deref())
        .context("Failed to initialize logging")?;
    debug!(?config, "configuration loaded");

    let resolver = config.resolver();

    match cli.command {
        Command::Tax(command) => {
            let (tax, raw) = command.raw();
            let request = resolver
                .request(tax, &raw)
                .with_context(|| format!("Invalid input for {tax}"))?;
            let result = request
                .calculate()
                .with_context(|| format!("Invalid input for {tax}"))?;
            print!("{}", render_result(&result));
        }
        Command::Batch { file, output } => {
            let requests = batch::load_from_file(&file, &resolver)
                .with_context(|| format!("Failed to load batch: {}", file.display()))?;
            let records = batch::evaluate(&requests)
                .with_context(|| format!("Failed to evaluate batch: {}", file.display()))?;

            match &output {
                Some(path) => {
                    let out = File::create(path)
                        .with_context(|| format!("Failed to create: {}", path.display()))?;
                    batch::write_records(out, &records)
                        .with_context(|| format!("Failed to write: {}", path.display()))?;
                    info!(
                        requests = requests.len(),
                        records = records.len(),
                        path = %path.display(),
                        "batch written"
                    );
                }
                None => batch::write_records(io::stdout().lock(), &records)
                    .context("Failed to write batch results")?,
            }
        }
        Command::Rates => print!("{}", render_rates()),
    }

    Ok(())
}
