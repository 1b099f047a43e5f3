//! Folioreport Core - asset records, derived metrics and report inputs.
//!
//! This crate turns a manually tracked asset into everything a report needs:
//! normalized metrics, synthesized chart series, localized info rows and the
//! JSON export. It has no layout knowledge; see `folioreport-document`.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod export;
pub mod i18n;
pub mod metrics;
pub mod series;
pub mod utils;

// Re-export the types most callers need
pub use assets::*;
pub use export::{build_export, export_file_name, report_file_name, AssetExport};
pub use i18n::{Catalog, Locale, Translator};
pub use metrics::{derive_metrics, derive_metrics_as_of, Metrics, RiskLevel};
pub use series::{synthesize_series, synthesize_series_as_of, Series, SeriesPair, TimePoint};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
