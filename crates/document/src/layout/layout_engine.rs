//! Single forward pass placing document blocks onto pages.
//!
//! Before a block of height `h` is placed the engine checks
//! `y + h > content_bottom`. When it does not fit the current page is
//! finalized and the cursor moves to the top of a fresh one. A block taller
//! than a whole page is still placed and overflows; only paragraphs are
//! flowed line by line.

use log::{debug, warn};

use super::layout_model::{Color, DrawCommand, LayoutConfig, LayoutCursor, Page, Point};
use crate::chart::{dashed_segments, project, PlotArea};
use crate::errors::{RenderError, Result};
use crate::model::{Block, DocumentModel, FigureLegend, KeyValueRow, ParagraphStyle};
use crate::text::{justify, text_width, FontKind, Line};
use folioreport_core::Series;

const BODY_SIZE: f64 = 10.0;
const MUTED_SIZE: f64 = 9.0;
const LINE_HEIGHT: f64 = 14.0;
const PARAGRAPH_SPACING: f64 = 8.0;

const TITLE_SIZE: f64 = 17.0;
const TITLE_BAND: f64 = 30.0;
const SECTION_SIZE: f64 = 12.5;
const SECTION_BAND: f64 = 24.0;
const HEADING_SPACING: f64 = 10.0;

const TABLE_SIZE: f64 = 9.0;
pub(crate) const TABLE_HEADER_HEIGHT: f64 = 20.0;
pub(crate) const TABLE_ROW_HEIGHT: f64 = 18.0;
const TABLE_SPACING: f64 = 14.0;
const CELL_PADDING: f64 = 6.0;

const CHART_HEIGHT: f64 = 190.0;
const LEGEND_HEIGHT: f64 = 22.0;
const FIGURE_SPACING: f64 = 12.0;
const AXIS_LABEL_GUTTER: f64 = 56.0;

/// Lays out `model` and returns its pages, without header or footer.
///
/// Fails only when the page geometry leaves no room for content.
pub fn render(model: &DocumentModel, config: &LayoutConfig) -> Result<Vec<Page>> {
    validate_surface(config)?;

    let mut engine = LayoutEngine::new(config);
    for (idx, block) in model.blocks.iter().enumerate() {
        let keep_with = model
            .blocks
            .get(idx + 1)
            .map(|next| engine.min_height(next))
            .unwrap_or(0.0);
        engine.place(block, keep_with);
    }

    let pages = engine.finish();
    debug!(
        "Laid out {} blocks on {} page(s)",
        model.blocks.len(),
        pages.len()
    );
    Ok(pages)
}

fn validate_surface(config: &LayoutConfig) -> Result<()> {
    let size = config.page_size;
    let usable = size.width.is_finite()
        && size.height.is_finite()
        && size.width > 0.0
        && size.height > 0.0
        && config.content_width() > 0.0
        && config.usable_height() > 0.0;
    if usable {
        Ok(())
    } else {
        Err(RenderError::InvalidSurface {
            width: size.width,
            height: size.height,
        })
    }
}

struct LayoutEngine<'a> {
    config: &'a LayoutConfig,
    cursor: LayoutCursor,
    pages: Vec<Page>,
    current: Page,
}

impl<'a> LayoutEngine<'a> {
    fn new(config: &'a LayoutConfig) -> Self {
        Self {
            config,
            cursor: LayoutCursor {
                page_index: 0,
                y: config.content_top(),
                section_counter: 0,
            },
            pages: Vec::new(),
            current: Page::new(0),
        }
    }

    fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }

    fn at_page_top(&self) -> bool {
        self.cursor.y <= self.config.content_top()
    }

    fn new_page(&mut self) {
        let index = self.cursor.page_index + 1;
        let finished = std::mem::replace(&mut self.current, Page::new(index));
        self.pages.push(finished);
        self.cursor.page_index = index;
        self.cursor.y = self.config.content_top();
        debug!("Page break, continuing on page {}", index + 1);
    }

    /// Starts a new page unless `height` fits below the cursor.
    fn ensure_space(&mut self, height: f64) {
        if self.cursor.y + height > self.config.content_bottom() && !self.at_page_top() {
            self.new_page();
        }
        if height > self.config.usable_height() {
            warn!(
                "Block of {:.1}pt exceeds the {:.1}pt page body and will overflow",
                height,
                self.config.usable_height()
            );
        }
    }

    fn push(&mut self, command: DrawCommand) {
        self.current.commands.push(command);
    }

    /// Smallest height that must follow a heading on the same page.
    fn min_height(&self, block: &Block) -> f64 {
        match block {
            Block::Heading { level, .. } => heading_band(*level) + HEADING_SPACING,
            Block::Paragraph { .. } => LINE_HEIGHT * 2.0,
            Block::KeyValueTable { rows, .. } => {
                let full = table_height(rows.len());
                if full <= self.config.usable_height() {
                    full
                } else {
                    TABLE_HEADER_HEIGHT + TABLE_ROW_HEIGHT
                }
            }
            Block::Figure { .. } => figure_height(),
        }
    }

    fn place(&mut self, block: &Block, keep_with: f64) {
        match block {
            Block::Heading { level, text } => self.place_heading(*level, text, keep_with),
            Block::Paragraph { text, style } => self.place_paragraph(text, *style),
            Block::KeyValueTable {
                header,
                rows,
                column_widths,
            } => self.place_table(header, rows, column_widths),
            Block::Figure {
                asset_series,
                inflation_series,
                caption,
                legend,
                currency,
            } => self.place_figure(asset_series, inflation_series, caption, legend, currency),
        }
    }

    fn place_heading(&mut self, level: u8, text: &str, keep_with: f64) {
        let band = heading_band(level);
        let own = band + HEADING_SPACING;
        let with_next = own + keep_with;
        // A heading never ends a page when its follower can fit on the next one
        self.ensure_space(if with_next <= self.config.usable_height() {
            with_next
        } else {
            own
        });

        self.cursor.section_counter += 1;
        let (left, width) = (self.config.content_left(), self.config.content_width());
        let top = self.cursor.y;
        let size = if level <= 1 { TITLE_SIZE } else { SECTION_SIZE };

        self.push(DrawCommand::FillRect {
            x: left,
            y: top,
            width,
            height: band,
            color: Color::BAND,
        });
        self.push(DrawCommand::line(
            Point::new(left, top + band),
            Point::new(left + width, top + band),
            1.5,
            Color::ACCENT,
        ));
        let label = format!("{}. {}", self.cursor.section_counter, text);
        self.push(DrawCommand::text(
            left + 8.0,
            top + band / 2.0 + size / 3.0,
            fit_text(&label, FontKind::Bold, size, width - 16.0),
            FontKind::Bold,
            size,
            Color::TEXT,
        ));

        self.cursor.y += own;
    }

    fn place_paragraph(&mut self, text: &str, style: ParagraphStyle) {
        let (size, color) = match style {
            ParagraphStyle::Body => (BODY_SIZE, Color::TEXT),
            ParagraphStyle::Muted => (MUTED_SIZE, Color::MUTED),
        };
        let lines = justify(text, self.config.content_width(), |s| {
            text_width(FontKind::Regular, size, s)
        });
        if lines.is_empty() {
            return;
        }

        let height = lines.len() as f64 * LINE_HEIGHT + PARAGRAPH_SPACING;
        if height <= self.config.usable_height() {
            self.ensure_space(height);
            for line in &lines {
                self.draw_line(line, size, color);
            }
        } else {
            debug!(
                "Paragraph of {} lines is taller than a page, flowing line by line",
                lines.len()
            );
            for line in &lines {
                self.ensure_space(LINE_HEIGHT);
                self.draw_line(line, size, color);
            }
        }
        self.cursor.y += PARAGRAPH_SPACING;
    }

    fn draw_line(&mut self, line: &Line, size: f64, color: Color) {
        let space = text_width(FontKind::Regular, size, " ");
        let word_spacing = if line.justified { line.gap - space } else { 0.0 };
        let baseline = self.cursor.y + LINE_HEIGHT * 0.75;

        self.push(DrawCommand::Text {
            x: self.config.content_left(),
            y: baseline,
            text: line.text(),
            font: FontKind::Regular,
            size,
            color,
            word_spacing,
        });
        self.cursor.y += LINE_HEIGHT;
    }

    fn place_table(
        &mut self,
        header: &(String, String),
        rows: &[KeyValueRow],
        columns: &[f64; 2],
    ) {
        // Placed as a unit so the header row always shares a page with its rows
        self.ensure_space(table_height(rows.len()));

        let left = self.config.content_left();
        let width = self.config.content_width();
        let total: f64 = columns.iter().sum();
        let first = if total > 0.0 {
            width * columns[0] / total
        } else {
            width / 2.0
        };
        let second = width - first;
        let top = self.cursor.y;

        self.push(DrawCommand::FillRect {
            x: left,
            y: top,
            width,
            height: TABLE_HEADER_HEIGHT,
            color: Color::TABLE_HEADER,
        });
        self.draw_cells(
            top,
            TABLE_HEADER_HEIGHT,
            (header.0.as_str(), header.1.as_str()),
            (first, second),
            true,
        );

        let mut y = top + TABLE_HEADER_HEIGHT;
        for (idx, row) in rows.iter().enumerate() {
            if idx % 2 == 1 {
                self.push(DrawCommand::FillRect {
                    x: left,
                    y,
                    width,
                    height: TABLE_ROW_HEIGHT,
                    color: Color::ROW_STRIPE,
                });
            }
            if row.emphasis {
                self.push(DrawCommand::line(
                    Point::new(left, y),
                    Point::new(left + width, y),
                    0.8,
                    Color::TEXT,
                ));
            }
            self.draw_cells(
                y,
                TABLE_ROW_HEIGHT,
                (row.label.as_str(), row.value.as_str()),
                (first, second),
                row.emphasis,
            );
            y += TABLE_ROW_HEIGHT;
        }

        self.push(DrawCommand::line(
            Point::new(left, y),
            Point::new(left + width, y),
            0.5,
            Color::GRID,
        ));
        self.cursor.y = y + TABLE_SPACING;
    }

    fn draw_cells(
        &mut self,
        top: f64,
        height: f64,
        (label, value): (&str, &str),
        (first, second): (f64, f64),
        bold: bool,
    ) {
        let font = if bold { FontKind::Bold } else { FontKind::Regular };
        let baseline = top + height / 2.0 + TABLE_SIZE / 3.0;
        let left = self.config.content_left();

        self.push(DrawCommand::text(
            left + CELL_PADDING,
            baseline,
            fit_text(label, font, TABLE_SIZE, first - 2.0 * CELL_PADDING),
            font,
            TABLE_SIZE,
            Color::TEXT,
        ));
        self.push(DrawCommand::text(
            left + first + CELL_PADDING,
            baseline,
            fit_text(value, font, TABLE_SIZE, second - 2.0 * CELL_PADDING),
            font,
            TABLE_SIZE,
            Color::TEXT,
        ));
    }

    fn place_figure(
        &mut self,
        asset: &Series,
        benchmark: &Series,
        caption: &str,
        legend: &FigureLegend,
        currency: &str,
    ) {
        self.ensure_space(figure_height());

        let left = self.config.content_left();
        let width = self.config.content_width();
        let top = self.cursor.y;
        let area = PlotArea {
            x: left + AXIS_LABEL_GUTTER,
            y: top + 10.0,
            width: (width - AXIS_LABEL_GUTTER - 12.0).max(1.0),
            height: CHART_HEIGHT - 10.0 - 24.0,
        };
        let chart = project(asset, benchmark, area, currency);
        self.current.commands.extend(chart);

        // Legend strip
        let legend_y = top + CHART_HEIGHT + LEGEND_HEIGHT / 2.0;
        let mut x = area.x;
        self.push(DrawCommand::line(
            Point::new(x, legend_y),
            Point::new(x + 20.0, legend_y),
            1.6,
            Color::ACCENT,
        ));
        x += 26.0;
        self.push(DrawCommand::text(
            x,
            legend_y + MUTED_SIZE / 3.0,
            legend.asset.clone(),
            FontKind::Regular,
            MUTED_SIZE,
            Color::TEXT,
        ));
        x += text_width(FontKind::Regular, MUTED_SIZE, &legend.asset) + 24.0;
        let sample = [Point::new(x, legend_y), Point::new(x + 20.0, legend_y)];
        for (from, to) in dashed_segments(&sample) {
            self.push(DrawCommand::line(from, to, 1.6, Color::BENCHMARK));
        }
        x += 26.0;
        self.push(DrawCommand::text(
            x,
            legend_y + MUTED_SIZE / 3.0,
            legend.benchmark.clone(),
            FontKind::Regular,
            MUTED_SIZE,
            Color::TEXT,
        ));

        self.cursor.y = top + CHART_HEIGHT + LEGEND_HEIGHT;
        let caption = fit_text(caption, FontKind::Regular, MUTED_SIZE, width);
        self.push(DrawCommand::text(
            left,
            self.cursor.y + LINE_HEIGHT * 0.75,
            caption,
            FontKind::Regular,
            MUTED_SIZE,
            Color::MUTED,
        ));
        self.cursor.y += LINE_HEIGHT + FIGURE_SPACING;
    }
}

fn heading_band(level: u8) -> f64 {
    if level <= 1 {
        TITLE_BAND
    } else {
        SECTION_BAND
    }
}

pub(crate) fn table_height(rows: usize) -> f64 {
    TABLE_HEADER_HEIGHT + rows as f64 * TABLE_ROW_HEIGHT + TABLE_SPACING
}

fn figure_height() -> f64 {
    CHART_HEIGHT + LEGEND_HEIGHT + LINE_HEIGHT + FIGURE_SPACING
}

/// Shortens `text` with a trailing ellipsis until it fits `max_width`.
pub(crate) fn fit_text(text: &str, font: FontKind, size: f64, max_width: f64) -> String {
    if text_width(font, size, text) <= max_width {
        return text.to_string();
    }
    let ellipsis = "...";
    let budget = max_width - text_width(font, size, ellipsis);
    let mut fitted = String::new();
    let mut used = 0.0;
    for ch in text.chars() {
        let advance = text_width(font, size, ch.encode_utf8(&mut [0; 4]));
        if used + advance > budget {
            break;
        }
        used += advance;
        fitted.push(ch);
    }
    format!("{}{}", fitted.trim_end(), ellipsis)
}
