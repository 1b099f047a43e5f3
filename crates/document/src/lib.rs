//! Paginated report documents for manual assets.
//!
//! The pipeline runs in one synchronous call: document model, layout,
//! header/footer stamping, then PDF encoding. [`ReportService`] wires the
//! steps together; the individual stages are public for callers that need
//! only part of it.

pub mod chart;
pub mod errors;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod report;
pub mod text;

pub use errors::{RenderError, Result};
pub use layout::{render, stamp, LayoutConfig, Margins, Page, PageHeader, PageSize};
pub use model::{build_document, Block, DocumentInput, DocumentModel};
pub use pdf::{encode_pdf, DocumentInfo};
pub use report::{RenderedPdf, ReportArtifacts, ReportConfig, ReportService, ReportServiceTrait};
