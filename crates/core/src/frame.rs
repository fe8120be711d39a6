//! Box layout for the selector.
//!
//! A [`Frame`] is built purely from the selector state and the viewport, so
//! drawing the same state twice yields the same output. Every line has the
//! same width, which lets a full redraw overwrite whatever was there before.

use crate::selector::Selector;

/// Rows used by the box around the option rows: top border, title, filter,
/// separator and bottom border.
pub const CHROME_ROWS: usize = 5;

const FILTER_LABEL: &str = "Filter: ";
const NO_MATCHES: &str = "No matches found.";

/// How a segment should be styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Border,
    Title,
    FilterLabel,
    FilterText,
    Item,
    SelectedItem,
    NoMatches,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    pub segments: Vec<Segment>,
}

impl Line {
    /// The plain text of the line, without styling.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn boxed(kind: SegmentKind, content: String) -> Self {
        Self {
            segments: vec![
                Segment::new(SegmentKind::Border, "│ "),
                Segment::new(kind, content),
                Segment::new(SegmentKind::Border, "│"),
            ],
        }
    }

    fn rule(left: char, width: usize, right: char) -> Self {
        let text = format!("{left}{}{right}", "─".repeat(width));
        Self {
            segments: vec![Segment::new(SegmentKind::Border, text)],
        }
    }
}

/// The window of option rows that fits on screen.
///
/// The window follows the cursor: it only moves when the cursor would leave it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub offset: usize,
    /// `None` means every row fits
    pub height: Option<usize>,
}

impl Viewport {
    /// Viewport for a terminal with `terminal_rows` rows.
    pub fn resize(&mut self, terminal_rows: Option<usize>) {
        self.height = terminal_rows.map(|rows| rows.saturating_sub(CHROME_ROWS).max(1));
    }

    /// Scrolls so that `cursor` is visible in a list of `len` rows.
    pub fn follow(&mut self, cursor: Option<usize>, len: usize) {
        let Some(height) = self.height else {
            self.offset = 0;
            return;
        };

        let cursor = cursor.unwrap_or(0);
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + height {
            self.offset = cursor + 1 - height;
        }

        self.offset = self.offset.min(len.saturating_sub(height));
    }

    fn range(&self, len: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(len);
        let end = match self.height {
            Some(height) => (start + height).min(len),
            None => len,
        };
        start..end
    }
}

/// A complete picture of the selector box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Total width of each line, borders included
    pub width: usize,
    pub lines: Vec<Line>,
}

impl Frame {
    #[must_use]
    pub fn build(selector: &Selector, viewport: &Viewport) -> Self {
        let inner = selector.width();
        let mut lines = Vec::with_capacity(CHROME_ROWS + selector.view_len());

        lines.push(Line::rule('╭', inner, '╮'));
        lines.push(Line::boxed(SegmentKind::Title, fit(&selector.config().title, inner - 1)));

        let label_width = FILTER_LABEL.len().min(inner - 1);
        let mut filter_line = Line::boxed(
            SegmentKind::FilterText,
            tail(selector.filter(), inner - 1 - label_width),
        );
        filter_line.segments.insert(
            1,
            Segment::new(SegmentKind::FilterLabel, fit(FILTER_LABEL, label_width)),
        );
        lines.push(filter_line);

        lines.push(Line::rule('├', inner, '┤'));

        if selector.view_len() == 0 {
            lines.push(Line::boxed(SegmentKind::NoMatches, fit(NO_MATCHES, inner - 1)));
        } else {
            let cursor = selector.cursor();
            let range = viewport.range(selector.view_len());
            for (i, option) in selector
                .view()
                .enumerate()
                .skip(range.start)
                .take(range.len())
            {
                let line = if Some(i) == cursor {
                    Line::boxed(
                        SegmentKind::SelectedItem,
                        format!("> {}", fit(option, inner - 3)),
                    )
                } else {
                    Line::boxed(SegmentKind::Item, format!("  {}", fit(option, inner - 3)))
                };
                lines.push(line);
            }
        }

        lines.push(Line::rule('╰', inner, '╯'));

        Self {
            width: inner + 2,
            lines,
        }
    }
}

/// Pads or truncates `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}

/// Like [`fit`], but keeps the end of `text` when it is too long.
fn tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    let kept: String = text.chars().skip(count.saturating_sub(width)).collect();
    format!("{kept:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{Key, SelectorConfig, DEFAULT_MIN_WIDTH};

    fn selector(values: &[&str]) -> Selector {
        let options = values.iter().map(ToString::to_string).collect();
        Selector::new(
            options,
            SelectorConfig::default().with_title("Select a branch:"),
        )
        .unwrap()
    }

    fn texts(frame: &Frame) -> Vec<String> {
        frame.lines.iter().map(Line::text).collect()
    }

    #[test]
    fn test_layout() {
        let selector = selector(&["main", "dev"]);
        let frame = Frame::build(&selector, &Viewport::default());
        let lines = texts(&frame);

        assert_eq!(frame.width, DEFAULT_MIN_WIDTH + 2);
        assert_eq!(lines.len(), CHROME_ROWS + 2);
        assert!(lines[0].starts_with('╭') && lines[0].ends_with('╮'));
        assert!(lines[1].starts_with("│ Select a branch:"));
        assert!(lines[2].starts_with("│ Filter: "));
        assert!(lines[3].starts_with('├'));
        assert!(lines[4].starts_with("│ > main "));
        assert!(lines[5].starts_with("│   dev "));
        assert!(lines[6].starts_with('╰'));
    }

    #[test]
    fn test_every_line_has_same_width() {
        let mut selector = selector(&["main", "feature/very-long-branch-name"]);
        for c in "a-much-longer-filter-than-the-field-can-hold-at-all-really-no".chars() {
            selector.handle_key(Key::Char(c));
        }
        let frame = Frame::build(&selector, &Viewport::default());

        for line in &frame.lines {
            assert_eq!(line.text().chars().count(), frame.width, "{}", line.text());
        }
    }

    #[test]
    fn test_long_filter_shows_tail() {
        let mut selector = selector(&["a"]);
        let typed = "x".repeat(60) + "end";
        for c in typed.chars() {
            selector.handle_key(Key::Char(c));
        }
        let frame = Frame::build(&selector, &Viewport::default());
        assert!(frame.lines[2].text().trim_end_matches('│').trim_end().ends_with("end"));
    }

    #[test]
    fn test_selected_row_is_marked() {
        let mut selector = selector(&["main", "dev"]);
        selector.handle_key(Key::Down);
        let frame = Frame::build(&selector, &Viewport::default());

        assert_eq!(frame.lines[4].segments[1].kind, SegmentKind::Item);
        assert_eq!(frame.lines[5].segments[1].kind, SegmentKind::SelectedItem);
        assert!(frame.lines[5].text().starts_with("│ > dev"));
    }

    #[test]
    fn test_no_matches_row() {
        let mut selector = selector(&["x"]);
        selector.handle_key(Key::Char('z'));
        let frame = Frame::build(&selector, &Viewport::default());

        assert_eq!(frame.lines.len(), CHROME_ROWS + 1);
        assert_eq!(frame.lines[4].segments[1].kind, SegmentKind::NoMatches);
        assert!(frame.lines[4].text().contains("No matches found."));
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut selector = selector(&["main", "dev", "feature"]);
        selector.handle_key(Key::Char('e'));
        selector.handle_key(Key::Down);
        let viewport = Viewport::default();

        assert_eq!(
            Frame::build(&selector, &viewport),
            Frame::build(&selector, &viewport)
        );
    }

    #[test]
    fn test_viewport_follows_cursor() {
        let mut viewport = Viewport::default();
        viewport.resize(Some(CHROME_ROWS + 3));
        assert_eq!(viewport.height, Some(3));

        viewport.follow(Some(4), 10);
        assert_eq!(viewport.offset, 2);

        viewport.follow(Some(3), 10);
        assert_eq!(viewport.offset, 2);

        viewport.follow(Some(1), 10);
        assert_eq!(viewport.offset, 1);

        viewport.follow(Some(9), 10);
        assert_eq!(viewport.offset, 7);

        viewport.follow(Some(0), 10);
        assert_eq!(viewport.offset, 0);
    }

    #[test]
    fn test_viewport_clamps_when_list_shrinks() {
        let mut viewport = Viewport {
            offset: 7,
            height: Some(3),
        };
        viewport.follow(Some(1), 2);
        assert_eq!(viewport.offset, 0);
    }

    #[test]
    fn test_scrolled_frame_shows_window() {
        let mut selector = selector(&["a", "b", "c", "d", "e"]);
        for _ in 0..3 {
            selector.handle_key(Key::Down);
        }
        let mut viewport = Viewport::default();
        viewport.resize(Some(CHROME_ROWS + 2));
        viewport.follow(selector.cursor(), selector.view_len());

        let frame = Frame::build(&selector, &viewport);
        let lines = texts(&frame);
        assert_eq!(lines.len(), CHROME_ROWS + 2);
        assert!(lines[4].starts_with("│   c"));
        assert!(lines[5].starts_with("│ > d"));
    }
}
