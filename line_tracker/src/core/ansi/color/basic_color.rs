// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::convert::BASIC_PALETTE;
use crate::{AnsiValue, RgbValue, TransformColor};
use strum_macros::{Display, EnumIter, EnumString};

/// The 16 named colors every color terminal understands (4-bit color). The exact shade
/// is up to the terminal's theme, [`TransformColor::as_rgb`] returns the xterm defaults.
///
/// Names parse from `snake_case`, eg: `"bright_red".parse::<BasicColor>()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl BasicColor {
    /// Index of this color in the ANSI palette (0-15).
    #[must_use]
    pub const fn index(self) -> u8 { self as u8 }

    #[rustfmt::skip]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0  => Self::Black,
            1  => Self::Red,
            2  => Self::Green,
            3  => Self::Yellow,
            4  => Self::Blue,
            5  => Self::Magenta,
            6  => Self::Cyan,
            7  => Self::White,
            8  => Self::BrightBlack,
            9  => Self::BrightRed,
            10 => Self::BrightGreen,
            11 => Self::BrightYellow,
            12 => Self::BrightBlue,
            13 => Self::BrightMagenta,
            14 => Self::BrightCyan,
            15 => Self::BrightWhite,
            _  => return None,
        })
    }

    /// SGR parameter that sets this color as the foreground (30-37, 90-97).
    #[must_use]
    pub const fn foreground_code(self) -> u8 {
        let index = self.index();
        if index < 8 { 30 + index } else { 90 + index - 8 }
    }

    /// SGR parameter that sets this color as the background (40-47, 100-107).
    #[must_use]
    pub const fn background_code(self) -> u8 { self.foreground_code() + 10 }
}

impl TransformColor for BasicColor {
    fn as_rgb(&self) -> RgbValue { BASIC_PALETTE[self.index() as usize] }

    fn as_ansi256(&self) -> AnsiValue { AnsiValue::new(self.index()) }

    fn as_basic(&self) -> BasicColor { *self }
}
