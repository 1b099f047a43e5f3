//! Second pass: running header and page-number footer.
//!
//! Runs after layout, once the total page count is known.

use log::debug;

use super::layout_engine::fit_text;
use super::layout_model::{Color, DrawCommand, LayoutConfig, Page, Point};
use crate::text::{text_width, FontKind};

const HEADER_SIZE: f64 = 9.0;
const FOOTER_SIZE: f64 = 8.0;

/// Text repeated at the top of every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    pub title: String,
    /// Already localized generation date line
    pub generated_on: String,
}

/// Prepends the header band and appends the `"{index}/{total}"` footer to
/// every page.
pub fn stamp(pages: &mut [Page], header: &PageHeader, config: &LayoutConfig) {
    let total = pages.len();
    for page in pages.iter_mut() {
        let header_commands = header_band(header, config);
        page.commands.splice(0..0, header_commands);
        page.commands.push(footer(page.index + 1, total, config));
    }
    debug!("Stamped header and footer on {} page(s)", total);
}

fn header_band(header: &PageHeader, config: &LayoutConfig) -> Vec<DrawCommand> {
    let left = config.content_left();
    let width = config.content_width();
    let baseline = config.margins.top + HEADER_SIZE;
    let rule_y = config.margins.top + config.header_reserve * 0.55;

    let date_width = text_width(FontKind::Regular, HEADER_SIZE, &header.generated_on);
    let title = fit_text(
        &header.title,
        FontKind::Bold,
        HEADER_SIZE,
        (width - date_width - 12.0).max(0.0),
    );

    vec![
        DrawCommand::text(left, baseline, title, FontKind::Bold, HEADER_SIZE, Color::TEXT),
        DrawCommand::text(
            left + width - date_width,
            baseline,
            header.generated_on.clone(),
            FontKind::Regular,
            HEADER_SIZE,
            Color::MUTED,
        ),
        DrawCommand::line(
            Point::new(left, rule_y),
            Point::new(left + width, rule_y),
            1.0,
            Color::ACCENT,
        ),
    ]
}

fn footer(number: usize, total: usize, config: &LayoutConfig) -> DrawCommand {
    let label = format!("{}/{}", number, total);
    let width = text_width(FontKind::Regular, FOOTER_SIZE, &label);
    DrawCommand::text(
        config.content_left() + (config.content_width() - width) / 2.0,
        config.content_bottom() + config.margins.bottom / 2.0,
        label,
        FontKind::Regular,
        FOOTER_SIZE,
        Color::MUTED,
    )
}
