//! folioreport - renders PDF reports and JSON exports for manual assets.
//!
//! # Usage
//!
//! ```bash
//! # Render every asset in a file into ./reports
//! folioreport render --input assets.json
//!
//! # Spanish reports on Letter paper, JSON only as a dry run
//! folioreport render --input assets.json --locale es --page-size letter --json-only
//!
//! # Print derived metrics
//! folioreport metrics --input assets.json
//! ```

use clap::Parser;

mod cli;
mod commands;
mod config;
mod main_lib;

use cli::{Cli, Commands};
use config::Config;
use main_lib::init_tracing;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let cli = Cli::parse();
    init_tracing(cli.log_format.unwrap_or(config.log_format));

    match cli.command {
        Commands::Render(args) => {
            let summary = commands::render::execute(&args, &config)?;
            for path in summary.reports.iter().chain(&summary.exports) {
                println!("{}", path.display());
            }
            if !summary.failures.is_empty() {
                anyhow::bail!(
                    "{} report(s) failed to render ({}); their JSON exports were written",
                    summary.failures.len(),
                    summary.failures.join(", ")
                );
            }
        }
        Commands::Metrics(args) => {
            println!("{}", commands::metrics::execute(&args)?);
        }
    }

    Ok(())
}
