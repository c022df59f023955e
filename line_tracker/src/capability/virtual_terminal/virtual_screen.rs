// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ClearDirection;

/// The state behind a [`crate::VirtualTerminal`]: rows of chars plus a cursor.
///
/// - Rows are added as the cursor moves below the last one. Nothing scrolls away.
/// - Rows are not wrapped at the terminal width.
/// - The cursor can't move above row 0 or left of column 0. Moves past those edges
///   stop at the edge, like a real terminal.
/// - Blank cells at the end of a row are dropped after a clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualScreen {
    rows: Vec<Vec<char>>,
    cursor_row: usize,
    cursor_col: usize,
}

impl Default for VirtualScreen {
    fn default() -> Self {
        Self {
            rows: vec![Vec::new()],
            cursor_row: 0,
            cursor_col: 0,
        }
    }
}

impl VirtualScreen {
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.iter().collect()).collect()
    }

    /// `(row, column)`.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) { (self.cursor_row, self.cursor_col) }

    pub fn print_char(&mut self, ch: char) {
        let row = &mut self.rows[self.cursor_row];
        if row.len() < self.cursor_col {
            row.resize(self.cursor_col, ' ');
        }
        if self.cursor_col < row.len() {
            row[self.cursor_col] = ch;
        } else {
            row.push(ch);
        }
        self.cursor_col += 1;
    }

    /// LF is treated as CR + LF, the way a terminal with `onlcr` output processing
    /// shows it.
    pub fn line_feed(&mut self) {
        self.carriage_return();
        self.move_down(1);
    }

    pub fn carriage_return(&mut self) { self.cursor_col = 0; }

    pub fn backspace(&mut self) { self.move_left(1); }

    pub fn move_up(&mut self, n: u16) {
        self.cursor_row = self.cursor_row.saturating_sub(usize::from(n));
    }

    pub fn move_down(&mut self, n: u16) {
        self.cursor_row += usize::from(n);
        self.ensure_row_exists(self.cursor_row);
    }

    pub fn move_left(&mut self, n: u16) {
        self.cursor_col = self.cursor_col.saturating_sub(usize::from(n));
    }

    pub fn move_right(&mut self, n: u16) { self.cursor_col += usize::from(n); }

    /// 0 based.
    pub fn move_to_col(&mut self, col: usize) { self.cursor_col = col; }

    /// 0 based.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cursor_row = row;
        self.cursor_col = col;
        self.ensure_row_exists(row);
    }

    pub fn clear_line(&mut self, direction: ClearDirection) {
        let col = self.cursor_col;
        let row = &mut self.rows[self.cursor_row];
        match direction {
            ClearDirection::EntireLine => row.clear(),
            ClearDirection::After => row.truncate(col),
            ClearDirection::Before => {
                let end = (col + 1).min(row.len());
                row[..end].fill(' ');
            }
        }
        while row.last() == Some(&' ') {
            row.pop();
        }
    }

    fn ensure_row_exists(&mut self, row: usize) {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
    }
}
