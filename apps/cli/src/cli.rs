//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{MetricsArgs, RenderArgs};
use crate::config::LogFormat;

/// folioreport - PDF reports and JSON exports for manually tracked assets
#[derive(Parser)]
#[command(name = "folioreport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log output format, overrides FOLIOREPORT_LOG_FORMAT
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Render the PDF report and JSON export of every asset in a file
    Render(RenderArgs),

    /// Print the derived metrics of every asset in a file
    Metrics(MetricsArgs),
}
