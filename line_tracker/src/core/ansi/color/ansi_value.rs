// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette representation.

use super::convert::{convert_ansi256_into_rgb, convert_rgb_into_basic};
use crate::{BasicColor, RgbValue, TransformColor};

/// Represents a color in the ANSI 256-color palette format. Each index (0-255) maps to a
/// specific color in the palette.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }

    /// Indices 0-15 are the 16 basic terminal colors, whose actual RGB value depends on
    /// the terminal's theme.
    #[must_use]
    pub const fn is_basic(&self) -> bool { self.index < 16 }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { convert_ansi256_into_rgb(*self) }

    fn as_ansi256(&self) -> AnsiValue { *self }

    fn as_basic(&self) -> BasicColor {
        match BasicColor::from_index(self.index) {
            Some(basic) => basic,
            None => convert_rgb_into_basic(self.as_rgb()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(AnsiValue{index: 42}, RgbValue{red: 0, green: 215, blue: 135})]
    #[test_case(AnsiValue{index: 57}, RgbValue{red: 95, green: 0, blue: 255})]
    #[test_case(AnsiValue{index: 232}, RgbValue{red: 8, green: 8, blue: 8})]
    #[test_case(AnsiValue{index: 255}, RgbValue{red: 238, green: 238, blue: 238})]
    #[test_case(AnsiValue{index: 9}, RgbValue{red: 255, green: 0, blue: 0})]
    fn test_ansi256_color_as_rgb(ansi_color: AnsiValue, rgb_color: RgbValue) {
        assert_eq!(ansi_color.as_rgb(), rgb_color);
    }

    #[test]
    fn test_basic_indices_map_directly() {
        for index in 0..16 {
            let basic = AnsiValue::new(index).as_basic();
            assert_eq!(basic.index(), index);
        }
    }

    #[test]
    fn test_extended_index_degrades_to_nearest_basic() {
        // 196 is pure red in the color cube.
        assert_eq!(AnsiValue::new(196).as_basic(), BasicColor::BrightRed);
    }
}
