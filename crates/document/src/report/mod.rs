//! Report module - the facade that runs the whole pipeline for one asset.

mod report_model;
mod report_service;
mod report_traits;

#[cfg(test)]
mod report_service_tests;

pub use report_model::{RenderedPdf, ReportArtifacts, ReportConfig};
pub use report_service::ReportService;
pub use report_traits::ReportServiceTrait;
