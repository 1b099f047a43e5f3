//! Greedy word wrapping with full justification.

/// One wrapped line of a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub words: Vec<String>,
    /// Space between consecutive words, in points
    pub gap: f64,
    /// Rendered width: word widths plus all gaps
    pub width: f64,
    /// Whether the gaps were stretched to fill the content width
    pub justified: bool,
}

impl Line {
    /// Words joined by single spaces.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Wraps `text` to `content_width` and justifies every line except the
/// last line of each paragraph.
///
/// Newlines separate paragraphs. A word wider than the content width gets a
/// line of its own and overflows it.
pub fn justify<F>(text: &str, content_width: f64, measure: F) -> Vec<Line>
where
    F: Fn(&str) -> f64,
{
    let space = measure(" ");
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let words: Vec<(&str, f64)> = paragraph
            .split_whitespace()
            .map(|word| (word, measure(word)))
            .collect();
        if words.is_empty() {
            continue;
        }

        let wrapped = wrap(&words, content_width, space);
        let last = wrapped.len() - 1;
        for (idx, range) in wrapped.into_iter().enumerate() {
            let line_words = &words[range];
            lines.push(build_line(line_words, content_width, space, idx < last));
        }
    }

    lines
}

/// Splits measured words into index ranges, one per line.
fn wrap(words: &[(&str, f64)], content_width: f64, space: f64) -> Vec<std::ops::Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut width = 0.0;

    for (idx, (_, word_width)) in words.iter().enumerate() {
        if idx == start {
            width = *word_width;
            continue;
        }
        let candidate = width + space + word_width;
        if candidate > content_width {
            ranges.push(start..idx);
            start = idx;
            width = *word_width;
        } else {
            width = candidate;
        }
    }
    ranges.push(start..words.len());
    ranges
}

fn build_line(words: &[(&str, f64)], content_width: f64, space: f64, stretch: bool) -> Line {
    let words_width: f64 = words.iter().map(|(_, w)| w).sum();
    let gaps = words.len().saturating_sub(1);

    let (gap, justified) = if stretch && gaps > 0 && words_width < content_width {
        ((content_width - words_width) / gaps as f64, true)
    } else {
        (space, false)
    };

    Line {
        words: words.iter().map(|(word, _)| word.to_string()).collect(),
        gap,
        width: words_width + gap * gaps as f64,
        justified,
    }
}
