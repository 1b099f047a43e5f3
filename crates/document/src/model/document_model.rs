//! Abstract document blocks, prior to page placement.

use folioreport_core::Series;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParagraphStyle {
    Body,
    Muted,
}

/// One row of a two-column table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueRow {
    pub label: String,
    pub value: String,
    /// Rendered in bold (totals)
    pub emphasis: bool,
}

impl KeyValueRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            emphasis: false,
        }
    }

    pub fn emphasized(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            emphasis: true,
            ..Self::new(label, value)
        }
    }
}

/// Legend entries of a figure: asset series first, benchmark second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureLegend {
    pub asset: String,
    pub benchmark: String,
}

/// A content unit. Immutable once built; the layout engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Section heading. The layout engine prefixes the section number.
    Heading { level: u8, text: String },
    Paragraph { text: String, style: ParagraphStyle },
    KeyValueTable {
        header: (String, String),
        rows: Vec<KeyValueRow>,
        /// Fractions of the content width, one per column
        column_widths: [f64; 2],
    },
    Figure {
        asset_series: Series,
        inflation_series: Series,
        caption: String,
        legend: FigureLegend,
        currency: String,
    },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            style: ParagraphStyle::Body,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            style: ParagraphStyle::Muted,
        }
    }
}

/// Ordered blocks of one report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentModel {
    pub blocks: Vec<Block>,
}

impl DocumentModel {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Heading texts in order, without numbering.
    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
