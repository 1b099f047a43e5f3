//! Error types for document rendering.
//!
//! Unknown values and degenerate numbers never reach this module: they are
//! handled upstream as `None` and guarded constants. A [`RenderError`] means
//! the whole document could not be produced.

use thiserror::Error;

/// Type alias for Result using [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing surface cannot be initialized ({width}x{height} pt)")]
    InvalidSurface { width: f64, height: f64 },

    #[error("PDF encoding failed: {0}")]
    Encoding(String),

    #[error(transparent)]
    Core(#[from] folioreport_core::Error),
}
