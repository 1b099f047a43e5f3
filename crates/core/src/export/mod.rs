//! Export module - structured JSON export of an asset and its metrics.

mod export_model;

pub use export_model::{build_export, export_file_name, file_slug, report_file_name, AssetExport};
