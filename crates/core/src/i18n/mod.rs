//! Localized strings for report labels and paragraph templates.

mod translator;

pub use translator::{interpolate, Catalog, Locale, Translator};
