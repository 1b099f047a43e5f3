use chrono::{DateTime, Utc};
use folioreport_core::{AssetExport, AssetRecord};

use super::report_model::{RenderedPdf, ReportArtifacts};
use crate::errors::Result;

/// Trait for report generation.
pub trait ReportServiceTrait: Send + Sync {
    /// Builds the PDF report and the JSON export for one asset.
    ///
    /// Fails as a whole: either both artifacts are returned or none.
    fn generate(&self, asset: &AssetRecord, generated_at: DateTime<Utc>)
        -> Result<ReportArtifacts>;

    /// Builds only the JSON export. This is the single metrics derivation
    /// per asset.
    fn export(&self, asset: &AssetRecord, generated_at: DateTime<Utc>) -> AssetExport;

    /// Renders the PDF from an export's metrics and info rows, without
    /// deriving them again.
    fn render_pdf(&self, asset: &AssetRecord, export: &AssetExport) -> Result<RenderedPdf>;
}
