// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ClearDirection, ColorDepth};
use strum_macros::{Display, EnumIter};

/// Called (with no arguments) whenever the terminal is resized. Backends may call it
/// from another thread.
pub type ResizeListener = Box<dyn FnMut() + Send + 'static>;

/// The operations that a [`crate::LineCursorTracker`] needs from a terminal.
///
/// Every method that does something reports success as a `bool`. The tracker turns a
/// `false` into a [`crate::LineTrackerError`].
///
/// Rows and columns are 0 based. Relative moves are positive to the right / down.
pub trait TerminalCapability {
    /// Write `text` at the cursor. A `'\n'` in `text` moves the cursor to column 0 of
    /// the next row.
    fn write(&mut self, text: &str) -> bool;

    /// Clear (part of) the row the cursor is on. The cursor doesn't move.
    fn clear_current_line(&mut self, direction: ClearDirection) -> bool;

    fn move_cursor_relative(&mut self, dx: isize, dy: isize) -> bool;

    /// Move to column `x`. If `y` is given, also move to that row (of the visible
    /// screen), otherwise stay on the current row.
    fn move_cursor_absolute(&mut self, x: u16, y: Option<u16>) -> bool;

    fn query_color_depth(&self) -> ColorDepth;

    /// Returns `false` if the backend can't deliver resize notifications.
    fn subscribe_resize(&mut self, listener: ResizeListener) -> bool;

    fn columns(&self) -> u16;

    fn rows(&self) -> u16;

    /// The row the cursor is actually on, relative to the row it was on when this
    /// capability was created. Backends that can't know this return [`None`], which
    /// disables the tracker's check against it.
    fn reported_cursor_row(&self) -> Option<usize> { None }
}

/// Names a [`TerminalCapability`] method. Used in errors, and by
/// [`crate::RecordingTerminal::fail_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CapabilityOperation {
    Write,
    ClearCurrentLine,
    MoveCursorRelative,
    MoveCursorAbsolute,
    SubscribeResize,
}
