//! Tests for the pagination/layout engine.

#[cfg(test)]
mod tests {
    use crate::errors::RenderError;
    use crate::layout::{render, DrawCommand, LayoutConfig, Margins, Page, PageSize};
    use crate::model::{Block, DocumentModel, KeyValueRow};
    use crate::text::{text_width, FontKind};
    use approx::assert_abs_diff_eq;

    fn filler(words: usize) -> Block {
        let text = (0..words)
            .map(|i| if i % 3 == 0 { "portfolio" } else { "value" })
            .collect::<Vec<_>>()
            .join(" ");
        Block::paragraph(text)
    }

    fn table(rows: usize) -> Block {
        Block::KeyValueTable {
            header: ("Head A".to_string(), "Head B".to_string()),
            rows: (1..=rows)
                .map(|i| KeyValueRow::new(format!("Row {}", i), format!("{}", i * 100)))
                .collect(),
            column_widths: [0.5, 0.5],
        }
    }

    fn page_of(pages: &[Page], text: &str) -> usize {
        pages
            .iter()
            .position(|page| page.texts().any(|t| t == text))
            .unwrap_or_else(|| panic!("'{}' was not drawn", text))
    }

    fn text_ys(page: &Page) -> Vec<f64> {
        page.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { y, .. } => Some(*y),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_table_header_never_separated_from_first_row() {
        let config = LayoutConfig::default();
        for words in (0..1500).step_by(23) {
            let model = DocumentModel {
                blocks: vec![filler(words), table(6)],
            };
            let pages = render(&model, &config).unwrap();
            assert_eq!(
                page_of(&pages, "Head A"),
                page_of(&pages, "Row 1"),
                "split with {} filler words",
                words
            );
        }
    }

    #[test]
    fn test_heading_moves_with_following_table() {
        let config = LayoutConfig::default();
        for words in (0..1500).step_by(29) {
            let model = DocumentModel {
                blocks: vec![filler(words), Block::heading(2, "Section"), table(8)],
            };
            let pages = render(&model, &config).unwrap();
            assert_eq!(page_of(&pages, "1. Section"), page_of(&pages, "Head A"));
        }
    }

    #[test]
    fn test_sections_numbered_in_render_order() {
        let model = DocumentModel {
            blocks: vec![
                Block::heading(1, "Flat"),
                Block::heading(2, "Financial Summary"),
                Block::paragraph("Intro"),
                Block::heading(2, "Projection Analysis"),
            ],
        };
        let pages = render(&model, &LayoutConfig::default()).unwrap();
        let texts: Vec<&str> = pages[0].texts().collect();
        assert_eq!(
            texts,
            vec!["1. Flat", "2. Financial Summary", "Intro", "3. Projection Analysis"]
        );
    }

    #[test]
    fn test_page_break_restarts_below_header_reserve() {
        let config = LayoutConfig::default();
        let model = DocumentModel {
            blocks: (0..7).map(|_| table(10)).collect(),
        };
        let pages = render(&model, &config).unwrap();

        // 214pt per table, three fit in the 709.89pt body
        assert_eq!(pages.len(), 3);
        for (idx, page) in pages.iter().enumerate() {
            assert_eq!(page.index, idx);
            for y in text_ys(page) {
                assert!(y >= config.content_top() && y <= config.content_bottom());
            }
        }
    }

    #[test]
    fn test_long_paragraph_flows_across_pages() {
        let config = LayoutConfig::default();
        let model = DocumentModel {
            blocks: vec![filler(6000)],
        };
        let pages = render(&model, &config).unwrap();

        assert!(pages.len() > 1);
        for page in &pages {
            for y in text_ys(page) {
                assert!(y <= config.content_bottom());
            }
        }
    }

    #[test]
    fn test_oversized_table_is_placed_and_overflows() {
        let config = LayoutConfig::default();
        let model = DocumentModel {
            blocks: vec![filler(40), table(60)],
        };
        let pages = render(&model, &config).unwrap();

        // Moved to a fresh page, then drawn whole
        assert_eq!(pages.len(), 2);
        assert_eq!(page_of(&pages, "Row 60"), 1);
        assert!(text_ys(&pages[1])
            .into_iter()
            .any(|y| y > config.page_size.height));
    }

    #[test]
    fn test_justified_lines_fill_content_width() {
        let config = LayoutConfig::default();
        let model = DocumentModel {
            blocks: vec![filler(200)],
        };
        let pages = render(&model, &config).unwrap();
        let lines: Vec<(String, f64, f64)> = pages[0]
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text {
                    text,
                    size,
                    word_spacing,
                    ..
                } => Some((text.clone(), *size, *word_spacing)),
                _ => None,
            })
            .collect();

        let (last, rest) = lines.split_last().unwrap();
        for (text, size, word_spacing) in rest {
            let spaces = text.matches(' ').count() as f64;
            let rendered = text_width(FontKind::Regular, *size, text) + word_spacing * spaces;
            assert_abs_diff_eq!(rendered, config.content_width(), epsilon = 1e-6);
        }
        assert_eq!(last.2, 0.0);
    }

    #[test]
    fn test_empty_model_renders_one_page() {
        let pages = render(&DocumentModel::default(), &LayoutConfig::default()).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].commands.is_empty());
    }

    #[test]
    fn test_zero_size_surface_is_rejected() {
        let config = LayoutConfig::new(
            PageSize {
                width: 0.0,
                height: 0.0,
            },
            Margins::default(),
        );
        assert!(matches!(
            render(&DocumentModel::default(), &config),
            Err(RenderError::InvalidSurface { .. })
        ));

        let cramped = LayoutConfig::new(PageSize::A4, Margins::uniform(400.0));
        assert!(render(&DocumentModel::default(), &cramped).is_err());
    }
}
