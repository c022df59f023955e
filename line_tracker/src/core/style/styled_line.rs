// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Style;
use smallvec::SmallVec;
use std::ops::Range;

/// A byte range of [`StyledLine::text`] and the [`Style`] that applies to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub range: Range<usize>,
    pub style: Style,
}

/// Plain text plus style spans. This is the input to a [`StyleFormatter`].
///
/// The line can only be built by appending, which keeps the spans sorted,
/// non-overlapping, and on `char` boundaries.
///
/// ```
/// use r3bl_line_tracker::{BasicColor, Style, StyledLine};
///
/// let line = StyledLine::default()
///     .with("[ok] ", Style::default().fg(BasicColor::Green).bold())
///     .with_plain("build finished");
/// assert_eq!(line.text(), "[ok] build finished");
/// assert_eq!(line.spans().len(), 1);
/// ```
///
/// [`StyleFormatter`]: crate::StyleFormatter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    text: String,
    spans: SmallVec<[StyleSpan; 4]>,
}

impl StyledLine {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: SmallVec::new(),
        }
    }

    /// Append `text` with `style`. A plain style adds no span.
    pub fn push(&mut self, text: &str, style: Style) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        let start = self.text.len();
        self.text.push_str(text);
        if !style.is_plain() {
            self.spans.push(StyleSpan {
                range: start..self.text.len(),
                style,
            });
        }
        self
    }

    pub fn push_plain(&mut self, text: &str) -> &mut Self {
        self.push(text, Style::default())
    }

    #[must_use]
    pub fn with(mut self, text: &str, style: Style) -> Self {
        self.push(text, style);
        self
    }

    #[must_use]
    pub fn with_plain(mut self, text: &str) -> Self {
        self.push_plain(text);
        self
    }

    /// The text without any styling.
    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn spans(&self) -> &[StyleSpan] { &self.spans }

    /// Walks the whole text in order, yielding each run with its style (or [`None`] for
    /// the unstyled gaps between spans).
    pub fn segments(&self) -> impl Iterator<Item = (&str, Option<&Style>)> {
        let mut segments: SmallVec<[(&str, Option<&Style>); 8]> = SmallVec::new();
        let mut cursor = 0;
        for span in &self.spans {
            if cursor < span.range.start {
                segments.push((&self.text[cursor..span.range.start], None));
            }
            segments.push((&self.text[span.range.clone()], Some(&span.style)));
            cursor = span.range.end;
        }
        if cursor < self.text.len() {
            segments.push((&self.text[cursor..], None));
        }
        segments.into_iter()
    }
}

impl From<&str> for StyledLine {
    fn from(value: &str) -> Self { Self::plain(value) }
}

impl From<String> for StyledLine {
    fn from(value: String) -> Self { Self::plain(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BasicColor;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segments_cover_the_whole_text() {
        let red = Style::default().fg(BasicColor::Red);
        let line = StyledLine::default()
            .with_plain("a ")
            .with("red", red.clone())
            .with_plain(" and ")
            .with("bold", Style::default().bold())
            .with_plain("!");

        let segments: Vec<(&str, bool)> = line
            .segments()
            .map(|(text, style)| (text, style.is_some()))
            .collect();
        assert_eq!(
            segments,
            vec![
                ("a ", false),
                ("red", true),
                (" and ", false),
                ("bold", true),
                ("!", false)
            ]
        );
        assert_eq!(line.spans()[0].range, 2..5);
        assert_eq!(line.spans()[0].style, red);
    }

    #[test]
    fn test_empty_and_plain_pushes_add_no_span() {
        let mut line = StyledLine::default();
        line.push("", Style::default().bold())
            .push("x", Style::default());
        assert_eq!(line.text(), "x");
        assert!(line.spans().is_empty());
    }

    #[test]
    fn test_multibyte_text_keeps_char_boundaries() {
        let line = StyledLine::plain("日本")
            .with("語", Style::default().italic());
        assert_eq!(line.spans()[0].range, 6..9);
        let styled: Vec<&str> = line
            .segments()
            .filter_map(|(text, style)| style.map(|_| text))
            .collect();
        assert_eq!(styled, vec!["語"]);
    }
}
