//! Metrics command implementation.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use folioreport_core::{derive_metrics_as_of, Metrics};

use super::read_assets;

/// Arguments for the metrics command.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Asset JSON file, holding one object or an array
    #[arg(short, long)]
    pub input: PathBuf,
}

/// Derives metrics for every asset and returns them as pretty JSON: an
/// object for a single asset, an array otherwise.
pub fn execute(args: &MetricsArgs) -> Result<String> {
    let now = Utc::now();
    let metrics: Vec<Metrics> = read_assets(&args.input)?
        .iter()
        .map(|asset| derive_metrics_as_of(asset, now))
        .collect();

    let json = match metrics.as_slice() {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(json)
}
