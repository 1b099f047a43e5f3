//! CLI command implementations.

pub mod metrics;
pub mod render;

pub use metrics::MetricsArgs;
pub use render::RenderArgs;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folioreport_core::{parse_asset_records, AssetRecord};

/// Reads and validates every asset record in a JSON file.
pub fn read_assets(path: &Path) -> Result<Vec<AssetRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    parse_asset_records(&json)
        .with_context(|| format!("Invalid asset data in {}", path.display()))
}
