//! Document model - report blocks and the builder that assembles them.

mod document_builder;
mod document_model;


pub use document_builder::{build_document, DocumentInput};
pub use document_model::{
    Block, DocumentModel, FigureLegend, KeyValueRow, ParagraphStyle,
};
