// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CapabilityOperation, ClearDirection, ColorDepth, LineTrackerError,
            StyleFormatter, StyledLine, TerminalCapability, TrackerResult};

const DEBUG_LINE_TRACKER: bool = false;

/// Line addressable output on top of a [`TerminalCapability`].
///
/// The tracker keeps two counters:
/// - `current_row`: the row (0 based, relative to where the cursor was when the tracker
///   was created) that the cursor is on.
/// - `line_count`: how many lines have been appended, which is also the row that the
///   next [`Self::append_line`] writes to.
///
/// Each operation first moves the cursor to the row it targets, using a single relative
/// move (or no move at all if the cursor is already there), and then checks that the
/// cursor really is on that row. If it isn't, the operation fails with
/// [`LineTrackerError::CursorDesync`]. The check compares against
/// [`TerminalCapability::reported_cursor_row`] when the capability provides it.
/// Operations that write text also return the cursor to column 0 first, unless it is
/// known to be there already.
///
/// ```
/// use r3bl_line_tracker::{LineCursorTracker, LineTrackerError, RecordingTerminal};
///
/// let mut tracker = LineCursorTracker::new(RecordingTerminal::default());
/// tracker.append_line("A").unwrap();
/// tracker.append_line("B").unwrap();
/// tracker.replace_line(0, "A2").unwrap();
/// assert_eq!(tracker.capability().lines(), &["A2", "B", ""]);
///
/// tracker.remove_last_line().unwrap();
/// tracker.remove_last_line().unwrap();
/// assert_eq!(tracker.remove_last_line(), Err(LineTrackerError::LineUnderflow));
/// ```
#[derive(Debug)]
pub struct LineCursorTracker<T: TerminalCapability> {
    capability: T,
    current_row: usize,
    line_count: usize,
    /// What the capability reported as the cursor row when the tracker was created.
    origin_row: usize,
    /// `false` once text was written that didn't end with a newline.
    at_line_start: bool,
}

impl<T: TerminalCapability> LineCursorTracker<T> {
    /// The cursor is assumed to be at the start of an empty row.
    pub fn new(capability: T) -> Self {
        let origin_row = capability.reported_cursor_row().unwrap_or_default();
        Self {
            capability,
            current_row: 0,
            line_count: 0,
            origin_row,
            at_line_start: true,
        }
    }

    #[must_use]
    pub fn current_row(&self) -> usize { self.current_row }

    #[must_use]
    pub fn line_count(&self) -> usize { self.line_count }

    #[must_use]
    pub fn capability(&self) -> &T { &self.capability }

    /// Writing to the capability directly moves the cursor behind the tracker's back.
    /// A row change makes the next operation fail with
    /// [`LineTrackerError::CursorDesync`]. A column change is not tracked at all.
    pub fn capability_mut(&mut self) -> &mut T { &mut self.capability }

    pub fn into_inner(self) -> T { self.capability }

    #[must_use]
    pub fn columns(&self) -> u16 { self.capability.columns() }

    #[must_use]
    pub fn rows(&self) -> u16 { self.capability.rows() }

    #[must_use]
    pub fn color_depth(&self) -> ColorDepth { self.capability.query_color_depth() }

    /// Returns the terminal's color depth if it is at least `requested`.
    ///
    /// # Errors
    ///
    /// [`LineTrackerError::UnsupportedCapability`] if the terminal has fewer colors.
    pub fn require_color_depth(&self, requested: ColorDepth) -> TrackerResult<ColorDepth> {
        let available = self.color_depth();
        if available.supports(requested) {
            Ok(available)
        } else {
            Err(LineTrackerError::UnsupportedCapability {
                requested,
                available,
            })
        }
    }

    /// Write `text` as a new line below the last one. A `text` with `k` newlines takes
    /// up `k + 1` lines.
    ///
    /// # Errors
    ///
    /// [`LineTrackerError::CursorDesync`] if the cursor couldn't be moved to the newest
    /// row, or [`LineTrackerError::CapabilityCallFailed`] if the write failed. The
    /// counters are unchanged in both cases.
    pub fn append_line(&mut self, text: &str) -> TrackerResult<()> {
        self.move_to_newest_row()?;
        self.move_to_line_start_if_needed()?;

        let mut acc = String::with_capacity(text.len() + 1);
        acc.push_str(text);
        acc.push('\n');
        self.write(&acc)?;

        let span = count_newlines(text) + 1;
        self.current_row += span;
        self.line_count += span;
        self.at_line_start = true;

        DEBUG_LINE_TRACKER.then(|| {
            tracing::debug!(
                message = "append_line",
                span = span,
                current_row = self.current_row,
                line_count = self.line_count
            );
        });

        Ok(())
    }

    /// Clear line `line_index` and write `text` in its place. The line count never
    /// changes, even if `text` contains newlines (the cursor does move down past them).
    ///
    /// # Errors
    ///
    /// [`LineTrackerError::CursorDesync`] or [`LineTrackerError::CapabilityCallFailed`].
    pub fn replace_line(&mut self, line_index: usize, text: &str) -> TrackerResult<()> {
        self.move_to_row(line_index)?;
        self.move_to_line_start_if_needed()?;
        self.clear(ClearDirection::EntireLine)?;
        self.write(text)?;
        self.current_row += count_newlines(text);
        self.at_line_start = text.is_empty() || text.ends_with('\n');
        Ok(())
    }

    /// Clear (part of) line `line_index`. The line itself stays, it is just blank.
    ///
    /// # Errors
    ///
    /// [`LineTrackerError::CursorDesync`] or [`LineTrackerError::CapabilityCallFailed`].
    pub fn clear_line(
        &mut self,
        line_index: usize,
        direction: ClearDirection,
    ) -> TrackerResult<()> {
        self.move_to_row(line_index)?;
        self.clear(direction)
    }

    /// Forget the last line and clear it. The cursor ends up on the cleared row, which is
    /// where the next [`Self::append_line`] writes.
    ///
    /// # Errors
    ///
    /// [`LineTrackerError::LineUnderflow`] if there are no lines (nothing changes), or
    /// [`LineTrackerError::CursorDesync`] or
    /// [`LineTrackerError::CapabilityCallFailed`].
    pub fn remove_last_line(&mut self) -> TrackerResult<()> {
        let Some(new_line_count) = self.line_count.checked_sub(1) else {
            tracing::warn!(message = "remove_last_line called with no lines");
            return Err(LineTrackerError::LineUnderflow);
        };
        self.move_to_row(new_line_count)?;
        self.line_count = new_line_count;
        self.clear(ClearDirection::EntireLine)
    }

    /// Move to line `line_index` without changing the column.
    ///
    /// # Errors
    ///
    /// [`LineTrackerError::CursorDesync`].
    pub fn move_to_line(&mut self, line_index: usize) -> TrackerResult<()> {
        self.move_to_row(line_index)
    }

    /// Move to column 0 of line `line_index`.
    ///
    /// # Errors
    ///
    /// [`LineTrackerError::CursorDesync`] or [`LineTrackerError::CapabilityCallFailed`].
    pub fn move_to_line_start(&mut self, line_index: usize) -> TrackerResult<()> {
        self.move_to_row(line_index)?;
        self.move_to_column_zero()
    }

    /// Format `line` for the terminal's color depth and append it.
    ///
    /// # Errors
    ///
    /// Anything `formatter` returns, or anything [`Self::append_line`] returns.
    pub fn append_styled_line(
        &mut self,
        line: &StyledLine,
        formatter: &impl StyleFormatter,
    ) -> TrackerResult<()> {
        let text = formatter.format(line, self.color_depth())?;
        self.append_line(&text)
    }

    /// Format `line` for the terminal's color depth and put it in place of line
    /// `line_index`.
    ///
    /// # Errors
    ///
    /// Anything `formatter` returns, or anything [`Self::replace_line`] returns.
    pub fn replace_styled_line(
        &mut self,
        line_index: usize,
        line: &StyledLine,
        formatter: &impl StyleFormatter,
    ) -> TrackerResult<()> {
        let text = formatter.format(line, self.color_depth())?;
        self.replace_line(line_index, &text)
    }

    /// See [`crate::measure_display_width`].
    #[must_use]
    pub fn measure_display_width(&self, text: &str) -> usize {
        crate::measure_display_width(text)
    }

    /// Call `listener` whenever the terminal is resized. Nothing in the tracker changes
    /// on resize. Returns `false` if the terminal can't report resizes.
    pub fn on_resize(&mut self, listener: impl FnMut() + Send + 'static) -> bool {
        self.capability.subscribe_resize(Box::new(listener))
    }
}

/// Cursor movement.
impl<T: TerminalCapability> LineCursorTracker<T> {
    fn move_to_newest_row(&mut self) -> TrackerResult<()> {
        self.move_to_row(self.line_count)
    }

    fn move_to_row(&mut self, target_row: usize) -> TrackerResult<()> {
        let delta = signed_delta(self.current_row, target_row);

        if delta != 0 {
            DEBUG_LINE_TRACKER.then(|| {
                tracing::debug!(
                    message = "move_to_row",
                    from = self.current_row,
                    to = target_row,
                    delta = delta
                );
            });

            if !self.capability.move_cursor_relative(0, delta) {
                tracing::error!(
                    message = "Cursor move failed",
                    intended = target_row,
                    actual = self.current_row
                );
                return Err(LineTrackerError::CursorDesync {
                    intended: target_row,
                    actual: self.current_row,
                });
            }
            self.current_row = target_row;
        }

        self.check_reported_row()
    }

    /// If the capability knows where its cursor is, make sure that matches
    /// `current_row`. On a mismatch `current_row` is set to the reported row, unless
    /// the cursor is above `origin_row`, in which case `current_row` is left alone.
    fn check_reported_row(&mut self) -> TrackerResult<()> {
        let Some(reported) = self.capability.reported_cursor_row() else {
            return Ok(());
        };
        let Some(actual) = reported.checked_sub(self.origin_row) else {
            tracing::error!(
                message = "Cursor desync, cursor is above the first tracked row",
                intended = self.current_row,
                reported = reported,
                origin = self.origin_row
            );
            return Err(LineTrackerError::CursorDesync {
                intended: self.current_row,
                actual: 0,
            });
        };
        if actual == self.current_row {
            return Ok(());
        }

        tracing::error!(
            message = "Cursor desync",
            intended = self.current_row,
            actual = actual
        );
        let intended = self.current_row;
        self.current_row = actual;
        Err(LineTrackerError::CursorDesync { intended, actual })
    }

    fn move_to_line_start_if_needed(&mut self) -> TrackerResult<()> {
        if self.at_line_start {
            Ok(())
        } else {
            self.move_to_column_zero()
        }
    }

    fn move_to_column_zero(&mut self) -> TrackerResult<()> {
        if self.capability.move_cursor_absolute(0, None) {
            self.at_line_start = true;
            Ok(())
        } else {
            Err(self.call_failed(CapabilityOperation::MoveCursorAbsolute))
        }
    }

    fn write(&mut self, text: &str) -> TrackerResult<()> {
        self.at_line_start = false;
        if self.capability.write(text) {
            Ok(())
        } else {
            Err(self.call_failed(CapabilityOperation::Write))
        }
    }

    fn clear(&mut self, direction: ClearDirection) -> TrackerResult<()> {
        if self.capability.clear_current_line(direction) {
            Ok(())
        } else {
            Err(self.call_failed(CapabilityOperation::ClearCurrentLine))
        }
    }

    fn call_failed(&self, operation: CapabilityOperation) -> LineTrackerError {
        tracing::error!(
            message = "Terminal call failed",
            operation = %operation,
            current_row = self.current_row
        );
        LineTrackerError::CapabilityCallFailed { operation }
    }
}

fn count_newlines(text: &str) -> usize { text.bytes().filter(|it| *it == b'\n').count() }

/// `to - from`, saturating at the bounds of [`isize`].
fn signed_delta(from: usize, to: usize) -> isize {
    if to >= from {
        isize::try_from(to - from).unwrap_or(isize::MAX)
    } else {
        isize::try_from(from - to).map_or(isize::MIN, |it| -it)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicColor, OutputDevice, OutputDeviceExt, PlainFormatter,
                RecordedCall, RecordingTerminal, SgrFormatter, Style, VirtualTerminal,
                CrosstermTerminal};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc,
                    atomic::{AtomicBool, Ordering}};
    use test_case::test_case;

    fn new_tracker() -> LineCursorTracker<RecordingTerminal> {
        LineCursorTracker::new(RecordingTerminal::default())
    }

    #[test_case(1)]
    #[test_case(5)]
    #[test_case(20)]
    fn test_n_appends(n: usize) {
        let mut tracker = new_tracker();
        for i in 0..n {
            tracker.append_line(&format!("line {i}")).unwrap();
        }
        assert_eq!(tracker.line_count(), n);
        assert_eq!(tracker.current_row(), n);
        assert_eq!(tracker.capability().lines().len(), n + 1);
    }

    #[test]
    fn test_append_with_newlines_spans_rows() {
        let mut tracker = new_tracker();
        tracker.append_line("a\nb\nc").unwrap();
        assert_eq!((tracker.line_count(), tracker.current_row()), (3, 3));
        tracker.append_line("d").unwrap();
        assert_eq!((tracker.line_count(), tracker.current_row()), (4, 4));
        assert_eq!(tracker.capability().lines(), &["a", "b", "c", "d", ""]);
    }

    #[test]
    fn test_consecutive_appends_do_not_move() {
        let mut tracker = new_tracker();
        tracker.append_line("a").unwrap();
        tracker.append_line("b").unwrap();
        assert_eq!(
            tracker.capability().calls(),
            &[
                RecordedCall::Write("a\n".into()),
                RecordedCall::Write("b\n".into())
            ]
        );
    }

    #[test]
    fn test_replace_keeps_line_count() {
        let mut tracker = new_tracker();
        tracker.append_line("A").unwrap();
        tracker.append_line("B").unwrap();
        tracker.replace_line(0, "A2").unwrap();
        assert_eq!(tracker.line_count(), 2);
        assert_eq!(tracker.current_row(), 0);
        assert_eq!(tracker.capability().lines(), &["A2", "B", ""]);

        tracker.replace_line(1, "B2").unwrap();
        tracker.append_line("C").unwrap();
        assert_eq!(tracker.capability().lines(), &["A2", "B2", "C", ""]);
    }

    #[test]
    fn test_replace_with_newline_moves_cursor_but_not_line_count() {
        let mut tracker = new_tracker();
        tracker.append_line("a").unwrap();
        tracker.append_line("b").unwrap();
        tracker.replace_line(0, "x\ny").unwrap();
        assert_eq!(tracker.line_count(), 2);
        assert_eq!(tracker.current_row(), 1);
        assert_eq!(tracker.capability().cursor().0, 1);
        assert_eq!(tracker.capability().lines(), &["x", "y", ""]);
    }

    #[test]
    fn test_clear_line() {
        let mut tracker = new_tracker();
        for _ in 0..3 {
            tracker.append_line("x").unwrap();
        }
        tracker.clear_line(1, ClearDirection::EntireLine).unwrap();
        assert_eq!(tracker.capability().lines(), &["x", "", "x", ""]);
        assert_eq!(tracker.line_count(), 3);
    }

    #[test]
    fn test_clear_line_directions() {
        let mut tracker = new_tracker();
        tracker.append_line("abcdef").unwrap();
        tracker.move_to_line(0).unwrap();
        tracker.capability_mut().move_cursor_absolute(3, None);
        tracker.clear_line(0, ClearDirection::After).unwrap();
        assert_eq!(tracker.capability().lines()[0], "abc");
        tracker.capability_mut().move_cursor_absolute(1, None);
        tracker.clear_line(0, ClearDirection::Before).unwrap();
        assert_eq!(tracker.capability().lines()[0], "  c");
    }

    #[test]
    fn test_remove_last_line() {
        let mut tracker = new_tracker();
        for it in ["a", "b", "c"] {
            tracker.append_line(it).unwrap();
        }
        tracker.remove_last_line().unwrap();
        assert_eq!(tracker.line_count(), 2);
        assert_eq!(tracker.current_row(), 2);
        assert_eq!(tracker.capability().cursor().0, 2);
        assert_eq!(tracker.capability().lines(), &["a", "b", "", ""]);

        tracker.append_line("d").unwrap();
        assert_eq!(tracker.capability().lines(), &["a", "b", "d", ""]);
    }

    #[test]
    fn test_remove_last_line_on_empty_tracker() {
        let mut tracker = new_tracker();
        assert_eq!(
            tracker.remove_last_line(),
            Err(LineTrackerError::LineUnderflow)
        );
        assert_eq!((tracker.line_count(), tracker.current_row()), (0, 0));
        assert!(tracker.capability().calls().is_empty());
    }

    #[test]
    fn test_move_to_line_start_is_idempotent() {
        let mut tracker = new_tracker();
        tracker.append_line("abc").unwrap();
        tracker.append_line("def").unwrap();

        tracker.move_to_line_start(0).unwrap();
        let once = tracker.capability().cursor();
        tracker.move_to_line_start(0).unwrap();
        assert_eq!(tracker.capability().cursor(), once);
        assert_eq!(once, (0, 0));
        assert_eq!(
            &tracker.capability().calls()[2..],
            &[
                RecordedCall::MoveCursorRelative { dx: 0, dy: -2 },
                RecordedCall::MoveCursorAbsolute { x: 0, y: None },
                RecordedCall::MoveCursorAbsolute { x: 0, y: None },
            ]
        );
    }

    #[test]
    fn test_measure_display_width_of_styled_text() {
        let tracker = new_tracker();
        assert_eq!(tracker.measure_display_width("\x1b[1;32m[ok]\x1b[0m 日本"), 9);
    }

    /// Push `L0..L9`, replace line 3, clear line 4, then resize.
    #[test]
    fn test_push_replace_clear_resize() {
        let mut tracker = new_tracker();
        let mut expected: Vec<String> = (0..10).map(|i| format!("L{i}")).collect();
        for it in &expected {
            tracker.append_line(it).unwrap();
        }
        expected.push(String::new());
        assert_eq!(tracker.capability().lines(), expected.as_slice());

        tracker.replace_line(3, "L3-new").unwrap();
        expected[3] = "L3-new".into();
        assert_eq!(tracker.capability().lines(), expected.as_slice());

        tracker.clear_line(4, ClearDirection::default()).unwrap();
        expected[4] = String::new();
        assert_eq!(tracker.capability().lines(), expected.as_slice());

        let called = Arc::new(AtomicBool::new(false));
        let called_clone = called.clone();
        assert!(tracker.on_resize(move || called_clone.store(true, Ordering::SeqCst)));
        let rows = tracker.rows();
        tracker.capability_mut().resize(80, rows + 1);
        assert!(called.load(Ordering::SeqCst));
        assert_eq!(tracker.rows(), rows + 1);
        assert_eq!(tracker.line_count(), 10);
    }

    #[test]
    fn test_failed_move_is_a_desync_and_changes_nothing() {
        let mut tracker = new_tracker();
        tracker.append_line("a").unwrap();
        tracker.append_line("b").unwrap();
        tracker
            .capability_mut()
            .fail_next(CapabilityOperation::MoveCursorRelative);

        assert_eq!(
            tracker.replace_line(0, "x"),
            Err(LineTrackerError::CursorDesync {
                intended: 0,
                actual: 2
            })
        );
        assert_eq!(tracker.current_row(), 2);
        assert_eq!(tracker.capability().lines(), &["a", "b", ""]);
    }

    #[test]
    fn test_foreign_cursor_move_is_detected() {
        let mut tracker = new_tracker();
        tracker.append_line("a").unwrap();
        tracker.append_line("b").unwrap();
        tracker.capability_mut().nudge_cursor(-1);

        assert_eq!(
            tracker.clear_line(1, ClearDirection::EntireLine),
            Err(LineTrackerError::CursorDesync {
                intended: 1,
                actual: 0
            })
        );
        // The tracker now believes what the terminal reports.
        assert_eq!(tracker.current_row(), 0);
        tracker.move_to_line(1).unwrap();
        assert_eq!(tracker.capability().cursor().0, 1);
    }

    #[test]
    fn test_foreign_cursor_move_is_detected_without_a_move() {
        let mut tracker = new_tracker();
        tracker.append_line("a").unwrap();
        tracker.capability_mut().nudge_cursor(1);
        assert_eq!(
            tracker.append_line("b"),
            Err(LineTrackerError::CursorDesync {
                intended: 1,
                actual: 2
            })
        );
        assert_eq!(tracker.line_count(), 1);
    }

    #[test_case(CapabilityOperation::Write)]
    #[test_case(CapabilityOperation::ClearCurrentLine)]
    fn test_failed_calls_are_escalated(operation: CapabilityOperation) {
        let mut tracker = new_tracker();
        tracker.append_line("a").unwrap();
        tracker.capability_mut().fail_next(operation);
        assert_eq!(
            tracker.replace_line(0, "b"),
            Err(LineTrackerError::CapabilityCallFailed { operation })
        );
        assert_eq!(tracker.line_count(), 1);
    }

    #[test]
    fn test_failed_append_leaves_counters() {
        let mut tracker = new_tracker();
        tracker.capability_mut().fail_next(CapabilityOperation::Write);
        assert_eq!(
            tracker.append_line("a"),
            Err(LineTrackerError::CapabilityCallFailed {
                operation: CapabilityOperation::Write
            })
        );
        assert_eq!((tracker.line_count(), tracker.current_row()), (0, 0));
    }

    #[test]
    fn test_failed_absolute_move_is_escalated() {
        let mut tracker = new_tracker();
        tracker.append_line("a").unwrap();
        tracker
            .capability_mut()
            .fail_next(CapabilityOperation::MoveCursorAbsolute);
        assert_eq!(
            tracker.move_to_line_start(0),
            Err(LineTrackerError::CapabilityCallFailed {
                operation: CapabilityOperation::MoveCursorAbsolute
            })
        );
        assert_eq!(tracker.current_row(), 0);
    }

    #[test]
    fn test_failed_subscribe() {
        let mut tracker = new_tracker();
        tracker
            .capability_mut()
            .fail_next(CapabilityOperation::SubscribeResize);
        assert!(!tracker.on_resize(|| {}));
    }

    #[test]
    fn test_require_color_depth() {
        let tracker = LineCursorTracker::new(
            RecordingTerminal::default().with_color_depth(ColorDepth::Ansi256),
        );
        assert_eq!(
            tracker.require_color_depth(ColorDepth::Ansi16),
            Ok(ColorDepth::Ansi256)
        );
        assert_eq!(
            tracker.require_color_depth(ColorDepth::Truecolor),
            Err(LineTrackerError::UnsupportedCapability {
                requested: ColorDepth::Truecolor,
                available: ColorDepth::Ansi256
            })
        );
    }

    #[test]
    fn test_styled_lines_on_virtual_terminal() {
        let mut tracker = LineCursorTracker::new(
            VirtualTerminal::default().with_color_depth(ColorDepth::Ansi16),
        );
        let line = StyledLine::default()
            .with("[ok]", Style::default().fg(BasicColor::Green).bold())
            .with_plain(" build");
        tracker
            .append_styled_line(&line, &SgrFormatter::default())
            .unwrap();
        tracker
            .append_styled_line(&StyledLine::plain("test"), &PlainFormatter)
            .unwrap();
        tracker
            .replace_styled_line(1, &line, &SgrFormatter::strict())
            .unwrap();

        assert_eq!(tracker.capability().lines(), vec!["[ok] build", "[ok] build", ""]);
        let output = String::from_utf8_lossy(tracker.capability().output()).into_owned();
        assert!(output.starts_with("\x1b[32m\x1b[1m[ok]\x1b[0m build\n"));
    }

    #[test]
    fn test_strict_formatter_error_propagates() {
        let mut tracker = LineCursorTracker::new(
            RecordingTerminal::default().with_color_depth(ColorDepth::Monochrome),
        );
        let line = StyledLine::default().with("x", Style::default().fg(BasicColor::Red));
        assert_eq!(
            tracker.append_styled_line(&line, &SgrFormatter::strict()),
            Err(LineTrackerError::UnsupportedCapability {
                requested: ColorDepth::Ansi16,
                available: ColorDepth::Monochrome
            })
        );
        assert!(tracker.capability().calls().is_empty());
    }

    #[test]
    fn test_virtual_terminal_matches_recording_terminal() {
        fn drive<T: TerminalCapability>(tracker: &mut LineCursorTracker<T>) {
            for it in ["one", "two", "three", "four"] {
                tracker.append_line(it).unwrap();
            }
            tracker.replace_line(1, "TWO").unwrap();
            tracker.clear_line(2, ClearDirection::EntireLine).unwrap();
            tracker.remove_last_line().unwrap();
            tracker.append_line("five").unwrap();
            tracker.move_to_line_start(0).unwrap();
        }

        let mut recording = new_tracker();
        let mut virtual_ = LineCursorTracker::new(VirtualTerminal::default());
        drive(&mut recording);
        drive(&mut virtual_);

        assert_eq!(virtual_.capability().lines(), recording.capability().lines());
        assert_eq!(virtual_.capability().cursor(), recording.capability().cursor());
        assert_eq!(
            virtual_.capability().lines(),
            vec!["one", "TWO", "", "five", ""]
        );
    }

    #[test]
    fn test_virtual_terminal_detects_foreign_writer() {
        let mut tracker = LineCursorTracker::new(VirtualTerminal::default());
        tracker.append_line("a").unwrap();
        tracker.capability_mut().feed(b"log message\n");
        assert_eq!(
            tracker.replace_line(0, "b"),
            Err(LineTrackerError::CursorDesync {
                intended: 0,
                actual: 1
            })
        );
    }

    #[test]
    fn test_virtual_terminal_clamps_at_top() {
        let mut terminal = VirtualTerminal::default();
        terminal.feed(b"banner\n");
        let mut tracker = LineCursorTracker::new(terminal);
        tracker.append_line("a").unwrap();
        tracker.append_line("b").unwrap();
        tracker.replace_line(0, "A").unwrap();
        assert_eq!(tracker.capability().lines(), vec!["banner", "A", "b", ""]);

        // Something scrolled the cursor up past the tracker's first row.
        tracker.capability_mut().feed(b"\x1b[5A");
        assert!(matches!(
            tracker.move_to_line(1),
            Err(LineTrackerError::CursorDesync { intended: 1, .. })
        ));
    }

    #[test]
    fn test_virtual_terminal_detects_cursor_above_first_row() {
        let mut terminal = VirtualTerminal::default();
        terminal.feed(b"banner\n");
        let mut tracker = LineCursorTracker::new(terminal);

        // Something moved the cursor onto the banner row before anything was appended.
        tracker.capability_mut().feed(b"\x1b[A");
        assert_eq!(
            tracker.append_line("a"),
            Err(LineTrackerError::CursorDesync {
                intended: 0,
                actual: 0
            })
        );
        assert_eq!(tracker.capability().lines(), vec!["banner", ""]);
        assert_eq!(tracker.current_row(), 0);
        assert_eq!(tracker.line_count(), 0);
    }

    #[test]
    fn test_crossterm_backend_bytes() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let terminal =
            CrosstermTerminal::new(output_device).with_color_depth(ColorDepth::Ansi16);
        let mut tracker = LineCursorTracker::new(terminal);
        tracker.append_line("a").unwrap();
        tracker.append_line("b").unwrap();
        tracker.replace_line(0, "c").unwrap();
        tracker.remove_last_line().unwrap();
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "a\nb\n\x1b[2A\x1b[2Kc\x1b[1B\x1b[2K"
        );
    }

    #[test_case(0, 0, 0)]
    #[test_case(2, 5, 3)]
    #[test_case(5, 2, -3)]
    #[test_case(usize::MAX, 0, isize::MIN)]
    fn test_signed_delta(from: usize, to: usize, expected: isize) {
        assert_eq!(signed_delta(from, to), expected);
    }
}
