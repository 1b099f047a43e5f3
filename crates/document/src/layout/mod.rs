//! Layout module - pagination, page geometry and header/footer stamping.

mod layout_engine;
mod layout_model;
mod page_stamper;

#[cfg(test)]
mod layout_engine_tests;

pub use layout_engine::render;
pub use layout_model::{
    Color, DrawCommand, LayoutConfig, LayoutCursor, Margins, Page, PageSize, Point,
};
pub use page_stamper::{stamp, PageHeader};
