// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::{HashMap, hash_map::Entry};
use unicode_width::UnicodeWidthStr;

/// Returns the number of terminal cells that `text` occupies once it is printed. ANSI
/// escape sequences (colors, cursor moves, etc) are stripped first and take up no cells.
/// Wide characters (CJK, most emoji) take up 2 cells.
///
/// ```
/// use r3bl_line_tracker::measure_display_width;
///
/// assert_eq!(measure_display_width("\x1b[31mfoo\x1b[0m"), 3);
/// assert_eq!(measure_display_width("日本"), 4);
/// assert_eq!(measure_display_width(""), 0);
/// ```
#[must_use]
pub fn measure_display_width(text: &str) -> usize {
    let stripped = strip_ansi::strip_ansi(text);
    let stripped: &str = stripped.as_ref();
    UnicodeWidthStr::width(stripped)
}

/// Different ways to measure the width of a string. [`Self::calculate`] memoizes the
/// [`DisplayWidth::StripAnsi`] variant, which is the expensive one.
///
/// ```
/// use r3bl_line_tracker::{DisplayWidth, MemoizedWidthMap};
///
/// let mut memoized_width_map = MemoizedWidthMap::new();
/// let width = DisplayWidth::StripAnsi.calculate("\x1b[1mok\x1b[0m", &mut memoized_width_map);
/// assert_eq!(width, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display,
         strum_macros::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum DisplayWidth {
    /// Width after stripping ANSI escape sequences.
    StripAnsi,
    /// Raw unicode width. Escape sequences are measured as if they were printable.
    Unicode,
}

pub type MemoizedWidthMap = HashMap<String, usize>;

impl DisplayWidth {
    /// If `input` isn't in `memoized_width_map` yet, measure it and store the result.
    /// Otherwise return the stored width.
    pub fn calculate(&self, input: &str, memoized_width_map: &mut MemoizedWidthMap) -> usize {
        match self {
            // Do not memoize (slower to do this).
            DisplayWidth::Unicode => UnicodeWidthStr::width(input),

            // Memoize (faster to do this).
            DisplayWidth::StripAnsi => match memoized_width_map.entry(input.to_string()) {
                Entry::Occupied(entry) => *entry.get(),
                Entry::Vacant(entry) => *entry.insert(measure_display_width(input)),
            },
        }
    }
}
