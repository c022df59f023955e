// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.

use super::convert::{convert_rgb_into_ansi256, convert_rgb_into_basic};
use crate::{AnsiValue, BasicColor, TransformColor};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbValue {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u32) -> Self {
        let red = ((value >> 16) & 0xFF) as u8;
        let green = ((value >> 8) & 0xFF) as u8;
        let blue = (value & 0xFF) as u8;
        Self { red, green, blue }
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Squared euclidean distance in RGB space. Good enough to pick the nearest palette
    /// entry.
    #[must_use]
    pub fn distance_squared(&self, other: &RgbValue) -> u32 {
        let dr = i32::from(self.red) - i32::from(other.red);
        let dg = i32::from(self.green) - i32::from(other.green);
        let db = i32::from(self.blue) - i32::from(other.blue);
        (dr * dr + dg * dg + db * db).unsigned_abs()
    }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_ansi256(&self) -> AnsiValue { convert_rgb_into_ansi256(*self) }

    fn as_basic(&self) -> BasicColor { convert_rgb_into_basic(*self) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_from_u32() {
        assert_eq!(RgbValue::from(0x00ff_8000), RgbValue::from_u8(255, 128, 0));
    }

    #[test_case(RgbValue{red: 0, green: 0, blue: 0}, 16)]
    #[test_case(RgbValue{red: 0, green: 128, blue: 255}, 33)]
    #[test_case(RgbValue{red: 255, green: 128, blue: 0}, 208)]
    #[test_case(RgbValue{red: 255, green: 255, blue: 255}, 231)]
    fn test_rgb_color_as_ansi256(rgb_color: RgbValue, index: u8) {
        assert_eq!(rgb_color.as_ansi256(), AnsiValue { index });
    }

    /// <https://www.ditig.com/256-colors-cheat-sheet>
    /// ANSI: 57 `BlueViolet`
    /// RGB: #5f00ff rgb(95,0,255)
    #[test]
    fn test_rgb_to_ansi() {
        let rgb = RgbValue::from_u8(95, 0, 255);
        assert_eq!(rgb.as_ansi256(), AnsiValue::new(57));
    }

    #[test_case(RgbValue{red: 250, green: 10, blue: 10}, BasicColor::BrightRed)]
    #[test_case(RgbValue{red: 120, green: 0, blue: 0}, BasicColor::Red)]
    #[test_case(RgbValue{red: 10, green: 10, blue: 10}, BasicColor::Black)]
    #[test_case(RgbValue{red: 250, green: 250, blue: 250}, BasicColor::BrightWhite)]
    fn test_rgb_color_as_basic(rgb_color: RgbValue, expected: BasicColor) {
        assert_eq!(rgb_color.as_basic(), expected);
    }
}
