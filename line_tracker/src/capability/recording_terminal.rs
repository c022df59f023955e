// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CapabilityOperation, ClearDirection, ColorDepth, DEFAULT_COLUMNS,
            DEFAULT_ROWS, ResizeListener, TerminalCapability};
use smallvec::SmallVec;
use std::fmt::{Debug, Formatter};
use unicode_segmentation::UnicodeSegmentation;

/// One call made on a [`RecordingTerminal`], in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Write(String),
    ClearCurrentLine(ClearDirection),
    MoveCursorRelative { dx: isize, dy: isize },
    MoveCursorAbsolute { x: u16, y: Option<u16> },
    SubscribeResize,
}

/// An in-memory [`TerminalCapability`] for tests. It keeps the text of every row, the
/// cursor, and a log of the calls made on it.
///
/// - Each grapheme cluster occupies one cell.
/// - Rows start out as `[""]`, and a `'\n'` (or a move below the last row) adds rows.
/// - Writing overwrites cells, padding the row with spaces if the cursor is past its
///   end. Blank cells at the end of a row are not kept after a clear.
/// - A move above row 0 fails and leaves the cursor where it was. Moves left of column
///   0 stop at column 0.
/// - [`Self::fail_next`] and [`Self::nudge_cursor`] simulate a broken terminal and a
///   foreign writer.
///
/// ```
/// use r3bl_line_tracker::{RecordingTerminal, TerminalCapability};
///
/// let mut terminal = RecordingTerminal::default();
/// terminal.write("hello\nworld");
/// terminal.move_cursor_relative(-5, -1);
/// terminal.write("J");
/// assert_eq!(terminal.lines(), &["Jello", "world"]);
/// assert_eq!(terminal.cursor(), (0, 1));
/// ```
pub struct RecordingTerminal {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    columns: u16,
    rows: u16,
    color_depth: ColorDepth,
    calls: Vec<RecordedCall>,
    pending_failures: SmallVec<[CapabilityOperation; 2]>,
    resize_listeners: Vec<ResizeListener>,
}

impl Debug for RecordingTerminal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingTerminal")
            .field("lines", &self.lines)
            .field("cursor", &self.cursor())
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("color_depth", &self.color_depth)
            .field("calls", &self.calls.len())
            .field("resize_listeners", &self.resize_listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for RecordingTerminal {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            color_depth: ColorDepth::Truecolor,
            calls: Vec::new(),
            pending_failures: SmallVec::new(),
            resize_listeners: Vec::new(),
        }
    }
}

impl RecordingTerminal {
    #[must_use]
    pub fn with_color_depth(mut self, color_depth: ColorDepth) -> Self {
        self.color_depth = color_depth;
        self
    }

    #[must_use]
    pub fn with_size(mut self, columns: u16, rows: u16) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn lines(&self) -> &[String] { &self.lines }

    /// `(row, column)`.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) { (self.cursor_row, self.cursor_col) }

    #[must_use]
    pub fn calls(&self) -> &[RecordedCall] { &self.calls }

    pub fn clear_calls(&mut self) { self.calls.clear(); }

    /// The next call of `operation` returns `false` and has no effect.
    pub fn fail_next(&mut self, operation: CapabilityOperation) {
        self.pending_failures.push(operation);
    }

    /// Move the cursor by `dy` rows without recording a call, like another program
    /// writing to the terminal would. Stops at row 0.
    pub fn nudge_cursor(&mut self, dy: isize) {
        self.cursor_row = self.cursor_row.saturating_add_signed(dy);
        self.ensure_row_exists(self.cursor_row);
    }

    /// Change the size and notify every resize listener.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        for listener in &mut self.resize_listeners {
            listener();
        }
    }

    /// Records `call`, and returns `false` if a failure was queued for `operation`.
    fn record(&mut self, operation: CapabilityOperation, call: RecordedCall) -> bool {
        self.calls.push(call);
        match self.pending_failures.iter().position(|it| *it == operation) {
            Some(index) => {
                self.pending_failures.remove(index);
                false
            }
            None => true,
        }
    }

    fn ensure_row_exists(&mut self, row: usize) {
        if self.lines.len() <= row {
            self.lines.resize(row + 1, String::new());
        }
    }

    fn overwrite_at_cursor(&mut self, segment: &str) {
        let line = &mut self.lines[self.cursor_row];
        let mut cells: Vec<&str> = line.graphemes(true).collect();
        let mut col = self.cursor_col;
        let padding = col.saturating_sub(cells.len());
        cells.extend(std::iter::repeat_n(" ", padding));
        for grapheme in segment.graphemes(true) {
            if col < cells.len() {
                cells[col] = grapheme;
            } else {
                cells.push(grapheme);
            }
            col += 1;
        }
        *line = cells.concat();
        self.cursor_col = col;
    }
}

impl TerminalCapability for RecordingTerminal {
    fn write(&mut self, text: &str) -> bool {
        if !self.record(CapabilityOperation::Write, RecordedCall::Write(text.into())) {
            return false;
        }
        for (index, segment) in text.split('\n').enumerate() {
            if index > 0 {
                self.cursor_row += 1;
                self.cursor_col = 0;
                self.ensure_row_exists(self.cursor_row);
            }
            self.overwrite_at_cursor(segment);
        }
        true
    }

    fn clear_current_line(&mut self, direction: ClearDirection) -> bool {
        let call = RecordedCall::ClearCurrentLine(direction);
        if !self.record(CapabilityOperation::ClearCurrentLine, call) {
            return false;
        }
        let col = self.cursor_col;
        let line = &mut self.lines[self.cursor_row];
        let cells: Vec<&str> = line.graphemes(true).collect();
        *line = match direction {
            ClearDirection::EntireLine => String::new(),
            ClearDirection::After => cells.iter().take(col).copied().collect(),
            ClearDirection::Before if col + 1 >= cells.len() => String::new(),
            ClearDirection::Before => " ".repeat(col + 1) + &cells[col + 1..].concat(),
        };
        true
    }

    fn move_cursor_relative(&mut self, dx: isize, dy: isize) -> bool {
        let call = RecordedCall::MoveCursorRelative { dx, dy };
        if !self.record(CapabilityOperation::MoveCursorRelative, call) {
            return false;
        }
        let Some(row) = self.cursor_row.checked_add_signed(dy) else {
            return false;
        };
        self.cursor_row = row;
        self.cursor_col = self.cursor_col.saturating_add_signed(dx);
        self.ensure_row_exists(row);
        true
    }

    fn move_cursor_absolute(&mut self, x: u16, y: Option<u16>) -> bool {
        let call = RecordedCall::MoveCursorAbsolute { x, y };
        if !self.record(CapabilityOperation::MoveCursorAbsolute, call) {
            return false;
        }
        self.cursor_col = usize::from(x);
        if let Some(y) = y {
            self.cursor_row = usize::from(y);
            self.ensure_row_exists(self.cursor_row);
        }
        true
    }

    fn query_color_depth(&self) -> ColorDepth { self.color_depth }

    fn subscribe_resize(&mut self, listener: ResizeListener) -> bool {
        if !self.record(CapabilityOperation::SubscribeResize, RecordedCall::SubscribeResize)
        {
            return false;
        }
        self.resize_listeners.push(listener);
        true
    }

    fn columns(&self) -> u16 { self.columns }

    fn rows(&self) -> u16 { self.rows }

    fn reported_cursor_row(&self) -> Option<usize> { Some(self.cursor_row) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc,
                    atomic::{AtomicUsize, Ordering}};
    use test_case::test_case;

    #[test]
    fn test_write_overwrites_and_pads() {
        let mut terminal = RecordingTerminal::default();
        terminal.write("abcdef");
        terminal.move_cursor_absolute(2, None);
        terminal.write("XY");
        assert_eq!(terminal.lines(), &["abXYef"]);

        terminal.move_cursor_absolute(8, None);
        terminal.write("z");
        assert_eq!(terminal.lines(), &["abXYef  z"]);
        assert_eq!(terminal.cursor(), (0, 9));
    }

    #[test]
    fn test_graphemes_are_single_cells() {
        let mut terminal = RecordingTerminal::default();
        terminal.write("e\u{301}日x");
        terminal.move_cursor_absolute(1, None);
        terminal.write("本");
        assert_eq!(terminal.lines(), &["e\u{301}本x"]);
    }

    #[test_case(ClearDirection::EntireLine, 2, "")]
    #[test_case(ClearDirection::After, 2, "ab")]
    #[test_case(ClearDirection::Before, 2, "   de")]
    #[test_case(ClearDirection::Before, 4, "")]
    #[test_case(ClearDirection::After, 0, "")]
    fn test_clear(direction: ClearDirection, col: u16, expected: &str) {
        let mut terminal = RecordingTerminal::default();
        terminal.write("abcde");
        terminal.move_cursor_absolute(col, None);
        assert!(terminal.clear_current_line(direction));
        assert_eq!(terminal.lines(), &[expected]);
        assert_eq!(terminal.cursor(), (0, usize::from(col)));
    }

    #[test]
    fn test_move_above_top_fails_without_moving() {
        let mut terminal = RecordingTerminal::default();
        terminal.write("a\nb");
        assert!(!terminal.move_cursor_relative(0, -2));
        assert_eq!(terminal.cursor(), (1, 1));
        assert!(terminal.move_cursor_relative(-5, -1));
        assert_eq!(terminal.cursor(), (0, 0));
    }

    #[test]
    fn test_move_below_last_row_adds_rows() {
        let mut terminal = RecordingTerminal::default();
        assert!(terminal.move_cursor_relative(0, 2));
        assert_eq!(terminal.lines(), &["", "", ""]);
        assert_eq!(terminal.reported_cursor_row(), Some(2));
    }

    #[test]
    fn test_fail_next_only_fails_once() {
        let mut terminal = RecordingTerminal::default();
        terminal.fail_next(CapabilityOperation::Write);
        assert!(!terminal.write("lost"));
        assert!(terminal.write("kept"));
        assert_eq!(terminal.lines(), &["kept"]);
        assert_eq!(
            terminal.calls(),
            &[
                RecordedCall::Write("lost".into()),
                RecordedCall::Write("kept".into())
            ]
        );
    }

    #[test]
    fn test_nudge_is_not_recorded() {
        let mut terminal = RecordingTerminal::default();
        terminal.nudge_cursor(3);
        terminal.nudge_cursor(-10);
        assert_eq!(terminal.cursor(), (0, 0));
        assert_eq!(terminal.lines().len(), 4);
        assert!(terminal.calls().is_empty());
    }

    #[test]
    fn test_resize_fires_every_listener() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut terminal = RecordingTerminal::default().with_size(100, 30);
        for _ in 0..2 {
            let count = count.clone();
            assert!(terminal.subscribe_resize(Box::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
            })));
        }
        terminal.resize(120, 40);
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!((terminal.columns(), terminal.rows()), (120, 40));
    }
}
