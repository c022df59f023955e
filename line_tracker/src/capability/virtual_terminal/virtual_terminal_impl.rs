// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ClearDirection, ColorDepth, DEFAULT_COLUMNS, DEFAULT_ROWS, ResizeListener,
            TerminalCapability, VirtualScreen, VirtualScreenPerformer, queue_clear_line,
            queue_move_absolute, queue_move_relative};
use std::fmt::{Debug, Formatter};

/// A [`TerminalCapability`] backed by a [`VirtualScreen`]. Every call is rendered into
/// the bytes that [`crate::CrosstermTerminal`] would write, and then parsed by
/// [`vte`]. The raw bytes are kept, see [`Self::output`].
///
/// Unlike [`crate::RecordingTerminal`], a move past the top edge succeeds and leaves the
/// cursor at row 0, which is what a real terminal does. The tracker catches this through
/// [`TerminalCapability::reported_cursor_row`].
///
/// ```
/// use r3bl_line_tracker::{TerminalCapability, VirtualTerminal};
///
/// let mut terminal = VirtualTerminal::default();
/// terminal.write("one\ntwo\n");
/// terminal.move_cursor_relative(0, -2);
/// terminal.write("ONE");
/// assert_eq!(terminal.lines(), vec!["ONE", "two", ""]);
/// assert_eq!(terminal.output(), b"one\ntwo\n\x1b[2AONE");
/// ```
pub struct VirtualTerminal {
    parser: vte::Parser,
    screen: VirtualScreen,
    output: Vec<u8>,
    columns: u16,
    rows: u16,
    color_depth: ColorDepth,
    resize_listeners: Vec<ResizeListener>,
}

impl Debug for VirtualTerminal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualTerminal")
            .field("screen", &self.screen)
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("color_depth", &self.color_depth)
            .finish_non_exhaustive()
    }
}

impl Default for VirtualTerminal {
    fn default() -> Self {
        Self {
            parser: vte::Parser::new(),
            screen: VirtualScreen::default(),
            output: Vec::new(),
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            color_depth: ColorDepth::Truecolor,
            resize_listeners: Vec::new(),
        }
    }
}

impl VirtualTerminal {
    #[must_use]
    pub fn with_color_depth(mut self, color_depth: ColorDepth) -> Self {
        self.color_depth = color_depth;
        self
    }

    /// Parse `bytes` as if another program wrote them to this terminal.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
        let mut performer = VirtualScreenPerformer {
            screen: &mut self.screen,
        };
        self.parser.advance(&mut performer, bytes);
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> { self.screen.lines() }

    /// `(row, column)`.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) { self.screen.cursor() }

    #[must_use]
    pub fn screen(&self) -> &VirtualScreen { &self.screen }

    /// Every byte written so far.
    #[must_use]
    pub fn output(&self) -> &[u8] { &self.output }

    /// Change the size and notify every resize listener.
    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        for listener in &mut self.resize_listeners {
            listener();
        }
    }

    fn render_and_feed(
        &mut self,
        queue: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
    ) -> bool {
        let mut bytes = Vec::new();
        match queue(&mut bytes) {
            Ok(()) => {
                self.feed(&bytes);
                true
            }
            Err(error) => {
                tracing::warn!(message = "Can't render terminal call", error = ?error);
                false
            }
        }
    }
}

impl TerminalCapability for VirtualTerminal {
    fn write(&mut self, text: &str) -> bool {
        self.feed(text.as_bytes());
        true
    }

    fn clear_current_line(&mut self, direction: ClearDirection) -> bool {
        self.render_and_feed(|out| queue_clear_line(out, direction))
    }

    fn move_cursor_relative(&mut self, dx: isize, dy: isize) -> bool {
        self.render_and_feed(|out| queue_move_relative(out, dx, dy))
    }

    fn move_cursor_absolute(&mut self, x: u16, y: Option<u16>) -> bool {
        self.render_and_feed(|out| queue_move_absolute(out, x, y))
    }

    fn query_color_depth(&self) -> ColorDepth { self.color_depth }

    fn subscribe_resize(&mut self, listener: ResizeListener) -> bool {
        self.resize_listeners.push(listener);
        true
    }

    fn columns(&self) -> u16 { self.columns }

    fn rows(&self) -> u16 { self.rows }

    fn reported_cursor_row(&self) -> Option<usize> { Some(self.screen.cursor().0) }
}
