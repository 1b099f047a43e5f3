//! Metrics module - derived per-asset financial summary.

mod metrics_calculator;
mod metrics_model;


pub use metrics_calculator::{derive_metrics, derive_metrics_as_of};
pub use metrics_model::{Metrics, RiskLevel};
