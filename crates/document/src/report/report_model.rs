use folioreport_core::{AssetExport, Metrics};

use crate::layout::{LayoutConfig, Margins, PageSize};

/// Page geometry and title used for every generated report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportConfig {
    pub page_size: PageSize,
    pub margins: Margins,
    /// Overrides the translated `report.title` when set
    pub report_title: Option<String>,
}

impl ReportConfig {
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::new(self.page_size, self.margins)
    }
}

/// Both artifacts of one report run, sharing a single metrics derivation.
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub metrics: Metrics,
    pub export: AssetExport,
    pub page_count: usize,
    pub pdf: Vec<u8>,
}

/// The PDF half of a report, rendered from an existing export.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub page_count: usize,
    pub pdf: Vec<u8>,
}
