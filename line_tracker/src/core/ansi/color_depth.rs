// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

/// The number of colors a terminal can display, expressed the way terminals report it:
/// as a bit depth of 1, 4, 8, or 24.
///
/// The variants are ordered, so `available >= requested` tells you whether a terminal
/// can show a color of the requested depth.
///
/// | Variant                    | Bits | Colors        |
/// |----------------------------|------|---------------|
/// | [`ColorDepth::Monochrome`] | 1    | none          |
/// | [`ColorDepth::Ansi16`]     | 4    | 16            |
/// | [`ColorDepth::Ansi256`]    | 8    | 256           |
/// | [`ColorDepth::Truecolor`]  | 24   | 16.7 million  |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, EnumIter,
)]
pub enum ColorDepth {
    #[default]
    #[strum(to_string = "1-bit (monochrome)")]
    Monochrome,
    #[strum(to_string = "4-bit (16 colors)")]
    Ansi16,
    #[strum(to_string = "8-bit (256 colors)")]
    Ansi256,
    #[strum(to_string = "24-bit (truecolor)")]
    Truecolor,
}

impl ColorDepth {
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            ColorDepth::Monochrome => 1,
            ColorDepth::Ansi16 => 4,
            ColorDepth::Ansi256 => 8,
            ColorDepth::Truecolor => 24,
        }
    }

    /// Returns `true` if a terminal with `self` depth can display colors that need
    /// `requested` depth.
    #[must_use]
    pub fn supports(self, requested: ColorDepth) -> bool { self >= requested }
}

/// These trait implementations allow us to use `ColorDepth` and its bit count
/// interchangeably.
mod convert_between_color_depth_and_bits {
    use super::ColorDepth;

    impl TryFrom<u8> for ColorDepth {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(bits: u8) -> Result<Self, Self::Error> {
            match bits {
                1  => Ok(ColorDepth::Monochrome),
                4  => Ok(ColorDepth::Ansi16),
                8  => Ok(ColorDepth::Ansi256),
                24 => Ok(ColorDepth::Truecolor),
                _  => Err(()),
            }
        }
    }

    impl From<ColorDepth> for u8 {
        fn from(value: ColorDepth) -> Self { value.bits() }
    }
}
