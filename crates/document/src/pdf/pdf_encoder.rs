//! Encodes laid out pages as a PDF byte stream.

use log::debug;
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::errors::{RenderError, Result};
use crate::layout::{Color, DrawCommand, Page, PageSize};
use crate::text::{encode_win_ansi, FontKind};

const PRODUCER: &str = concat!("folioreport ", env!("CARGO_PKG_VERSION"));

/// Document information dictionary entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: String,
    pub subject: Option<String>,
}

/// Allocates sequential object ids.
struct RefAllocator(i32);

impl RefAllocator {
    fn next(&mut self) -> Ref {
        self.0 += 1;
        Ref::new(self.0)
    }
}

/// Writes `pages` into a PDF with Helvetica base fonts.
pub fn encode_pdf(pages: &[Page], page_size: PageSize, info: &DocumentInfo) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(RenderError::Encoding(
            "a document needs at least one page".to_string(),
        ));
    }
    let page_count = i32::try_from(pages.len())
        .map_err(|_| RenderError::Encoding(format!("too many pages ({})", pages.len())))?;

    let mut refs = RefAllocator(0);
    let catalog_id = refs.next();
    let page_tree_id = refs.next();
    let regular_font_id = refs.next();
    let bold_font_id = refs.next();
    let info_id = refs.next();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (refs.next(), refs.next())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_count);

    for (font_id, font) in [
        (regular_font_id, FontKind::Regular),
        (bold_font_id, FontKind::Bold),
    ] {
        pdf.type1_font(font_id)
            .base_font(Name(font.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let mut document_info = pdf.document_info(info_id);
    document_info
        .title(TextStr(&info.title))
        .producer(TextStr(PRODUCER));
    if let Some(subject) = &info.subject {
        document_info.subject(TextStr(subject));
    }
    document_info.finish();

    let media_box = Rect::new(0.0, 0.0, page_size.width as f32, page_size.height as f32);
    for (page, (page_id, content_id)) in pages.iter().zip(&page_ids) {
        let mut page_writer = pdf.page(*page_id);
        page_writer
            .media_box(media_box)
            .parent(page_tree_id)
            .contents(*content_id);
        page_writer
            .resources()
            .fonts()
            .pair(Name(FontKind::Regular.resource_name().as_bytes()), regular_font_id)
            .pair(Name(FontKind::Bold.resource_name().as_bytes()), bold_font_id);
        page_writer.finish();

        let content = encode_page(page, page_size.height);
        pdf.stream(*content_id, &content);
    }

    let bytes = pdf.finish();
    debug!("Encoded {} page(s) into {} bytes", pages.len(), bytes.len());
    Ok(bytes)
}

/// Content stream for one page, flipping y into PDF's bottom-up space.
fn encode_page(page: &Page, page_height: f64) -> Vec<u8> {
    let flip = |y: f64| (page_height - y) as f32;
    let mut content = Content::new();

    for command in &page.commands {
        match command {
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                set_fill(&mut content, *color);
                content
                    .rect(*x as f32, flip(y + height), *width as f32, *height as f32)
                    .fill_nonzero();
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                set_stroke(&mut content, *color, *width);
                content
                    .move_to(from.x as f32, flip(from.y))
                    .line_to(to.x as f32, flip(to.y))
                    .stroke();
            }
            DrawCommand::Polyline {
                points,
                width,
                color,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };
                set_stroke(&mut content, *color, *width);
                content.move_to(first.x as f32, flip(first.y));
                for point in rest {
                    content.line_to(point.x as f32, flip(point.y));
                }
                content.stroke();
            }
            DrawCommand::Text {
                x,
                y,
                text,
                font,
                size,
                color,
                word_spacing,
            } => {
                let bytes = encode_win_ansi(text);
                set_fill(&mut content, *color);
                // Tw outlives ET, so every text object sets it
                content
                    .begin_text()
                    .set_font(Name(font.resource_name().as_bytes()), *size as f32)
                    .set_word_spacing(*word_spacing as f32)
                    .next_line(*x as f32, flip(*y))
                    .show(Str(&bytes))
                    .end_text();
            }
        }
    }

    content.finish()
}

fn set_fill(content: &mut Content, color: Color) {
    content.set_fill_rgb(color.r, color.g, color.b);
}

fn set_stroke(content: &mut Content, color: Color, width: f64) {
    content
        .set_stroke_rgb(color.r, color.g, color.b)
        .set_line_width(width as f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;

    fn info() -> DocumentInfo {
        DocumentInfo {
            title: "Asset Report".to_string(),
            subject: Some("Flat".to_string()),
        }
    }

    fn sample_page(index: usize) -> Page {
        Page {
            index,
            commands: vec![
                DrawCommand::FillRect {
                    x: 48.0,
                    y: 84.0,
                    width: 100.0,
                    height: 20.0,
                    color: Color::BAND,
                },
                DrawCommand::line(
                    Point::new(0.0, 0.0),
                    Point::new(10.0, 10.0),
                    1.0,
                    Color::GRID,
                ),
                DrawCommand::Text {
                    x: 48.0,
                    y: 100.0,
                    text: "Valor € · 2 m²".to_string(),
                    font: FontKind::Bold,
                    size: 10.0,
                    color: Color::TEXT,
                    word_spacing: 1.5,
                },
            ],
        }
    }

    #[test]
    fn test_encodes_valid_pdf_header_and_trailer() {
        let bytes = encode_pdf(&[sample_page(0), sample_page(1)], PageSize::A4, &info()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len() - 32..]).to_string();
        assert!(tail.contains("%%EOF"));

        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/Helvetica-Bold"));
        assert!(text.contains("/WinAnsiEncoding"));
        assert!(text.contains("Asset Report"));
    }

    #[test]
    fn test_content_stream_flips_y_and_sets_word_spacing() {
        let content = encode_page(&sample_page(0), 841.89);
        let text = String::from_utf8_lossy(&content);

        // rect y = 841.89 - 84 - 20, baseline y = 841.89 - 100
        assert!(text.contains("737.89"));
        assert!(text.contains(" re"));
        assert!(text.contains("741.89"));
        assert!(text.contains("1.5 Tw"));
        assert!(text.contains("/F2 10 Tf"));
    }

    #[test]
    fn test_plain_line_after_justified_line_resets_word_spacing() {
        let line = |y: f64, text: &str, word_spacing: f64| DrawCommand::Text {
            x: 48.0,
            y,
            text: text.to_string(),
            font: FontKind::Regular,
            size: 10.0,
            color: Color::TEXT,
            word_spacing,
        };
        let page = Page {
            index: 0,
            commands: vec![
                line(100.0, "stretched across the full width", 3.25),
                line(114.0, "last line left aligned", 0.0),
            ],
        };
        let content = encode_page(&page, 841.89);
        let text = String::from_utf8_lossy(&content);

        let objects: Vec<&str> = text.split("BT").skip(1).collect();
        assert_eq!(objects.len(), 2);
        assert!(objects[0].contains("3.25 Tw"));
        assert!(objects[1].contains("0 Tw"));
        assert!(!objects[1].contains("3.25 Tw"));
    }

    #[test]
    fn test_empty_document_is_an_encoding_error() {
        assert!(matches!(
            encode_pdf(&[], PageSize::A4, &info()),
            Err(RenderError::Encoding(_))
        ));
    }
}
