//! PDF module - byte encoding of laid out pages.

mod pdf_encoder;

pub use pdf_encoder::{encode_pdf, DocumentInfo};
