//! Page geometry and drawing primitives.
//!
//! All coordinates are points in a top-down space: `y = 0` is the top edge
//! of the page and grows downward. The PDF encoder flips them.

use std::str::FromStr;

use folioreport_core::errors::ValidationError;
use serde::{Deserialize, Serialize};

use crate::text::FontKind;

/// Physical page size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub const A4: PageSize = PageSize {
        width: 595.28,
        height: 841.89,
    };

    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

impl FromStr for PageSize {
    type Err = folioreport_core::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::LETTER),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown page size '{}' (expected a4 or letter)",
                other
            ))
            .into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins::uniform(48.0)
    }
}

/// Geometry used for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margins: Margins,
    /// Vertical band below the top margin kept free for the running header
    pub header_reserve: f64,
}

impl LayoutConfig {
    pub fn new(page_size: PageSize, margins: Margins) -> Self {
        Self {
            page_size,
            margins,
            header_reserve: 36.0,
        }
    }

    pub fn content_left(&self) -> f64 {
        self.margins.left
    }

    pub fn content_width(&self) -> f64 {
        self.page_size.width - self.margins.left - self.margins.right
    }

    /// First y position available to content on every page.
    pub fn content_top(&self) -> f64 {
        self.margins.top + self.header_reserve
    }

    /// Lowest y position content may reach.
    pub fn content_bottom(&self) -> f64 {
        self.page_size.height - self.margins.bottom
    }

    /// Height available to content on an empty page.
    pub fn usable_height(&self) -> f64 {
        self.content_bottom() - self.content_top()
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig::new(PageSize::default(), Margins::default())
    }
}

/// Mutable position state of a single render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub page_index: usize,
    pub y: f64,
    pub section_counter: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const TEXT: Color = Color {
        r: 0.122,
        g: 0.161,
        b: 0.216,
    };
    pub const MUTED: Color = Color {
        r: 0.420,
        g: 0.447,
        b: 0.502,
    };
    pub const ACCENT: Color = Color {
        r: 0.145,
        g: 0.388,
        b: 0.922,
    };
    pub const BENCHMARK: Color = Color {
        r: 0.918,
        g: 0.345,
        b: 0.047,
    };
    pub const BAND: Color = Color {
        r: 0.937,
        g: 0.965,
        b: 1.000,
    };
    pub const TABLE_HEADER: Color = Color {
        r: 0.898,
        g: 0.906,
        b: 0.922,
    };
    pub const ROW_STRIPE: Color = Color {
        r: 0.976,
        g: 0.980,
        b: 0.984,
    };
    pub const GRID: Color = Color {
        r: 0.820,
        g: 0.835,
        b: 0.859,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A drawing primitive placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    },
    Polyline {
        points: Vec<Point>,
        width: f64,
        color: Color,
    },
    /// Text with its baseline at `y`.
    Text {
        x: f64,
        y: f64,
        text: String,
        font: FontKind,
        size: f64,
        color: Color,
        /// Extra space added to every space character
        word_spacing: f64,
    },
}

impl DrawCommand {
    pub fn text(
        x: f64,
        y: f64,
        text: impl Into<String>,
        font: FontKind,
        size: f64,
        color: Color,
    ) -> Self {
        DrawCommand::Text {
            x,
            y,
            text: text.into(),
            font,
            size,
            color,
            word_spacing: 0.0,
        }
    }

    pub fn line(from: Point, to: Point, width: f64, color: Color) -> Self {
        DrawCommand::Line {
            from,
            to,
            width,
            color,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// One laid out page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based position in the document
    pub index: usize,
    pub commands: Vec<DrawCommand>,
}

impl Page {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            commands: Vec::new(),
        }
    }

    /// Texts drawn on this page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(DrawCommand::as_text)
    }
}
