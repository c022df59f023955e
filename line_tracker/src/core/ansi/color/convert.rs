// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiValue, BasicColor, RgbValue};
use strum::IntoEnumIterator;

/// The xterm default RGB values for the 16 basic colors, in palette order.
pub const BASIC_PALETTE: [RgbValue; 16] = [
    RgbValue::from_u8(0, 0, 0),
    RgbValue::from_u8(128, 0, 0),
    RgbValue::from_u8(0, 128, 0),
    RgbValue::from_u8(128, 128, 0),
    RgbValue::from_u8(0, 0, 128),
    RgbValue::from_u8(128, 0, 128),
    RgbValue::from_u8(0, 128, 128),
    RgbValue::from_u8(192, 192, 192),
    RgbValue::from_u8(128, 128, 128),
    RgbValue::from_u8(255, 0, 0),
    RgbValue::from_u8(0, 255, 0),
    RgbValue::from_u8(255, 255, 0),
    RgbValue::from_u8(0, 0, 255),
    RgbValue::from_u8(255, 0, 255),
    RgbValue::from_u8(0, 255, 255),
    RgbValue::from_u8(255, 255, 255),
];

/// Channel intensities of the 6×6×6 color cube (indices 16-231).
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

const CUBE_START: u8 = 16;
const GRAYSCALE_START: u8 = 232;

/// Maps an RGB color onto the 6×6×6 color cube of the 256-color palette.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbValue) -> AnsiValue {
    fn cube_index(channel: u8) -> u8 {
        match channel {
            0..48 => 0,
            48..115 => 1,
            _ => (channel - 35) / 40,
        }
    }

    let red = cube_index(rgb.red);
    let green = cube_index(rgb.green);
    let blue = cube_index(rgb.blue);
    AnsiValue::new(CUBE_START + 36 * red + 6 * green + blue)
}

#[must_use]
pub fn convert_ansi256_into_rgb(ansi: AnsiValue) -> RgbValue {
    let index = ansi.index;
    if index < CUBE_START {
        BASIC_PALETTE[index as usize]
    } else if index < GRAYSCALE_START {
        let offset = index - CUBE_START;
        RgbValue::from_u8(
            CUBE_LEVELS[(offset / 36) as usize],
            CUBE_LEVELS[((offset % 36) / 6) as usize],
            CUBE_LEVELS[(offset % 6) as usize],
        )
    } else {
        let level = 8 + 10 * (index - GRAYSCALE_START);
        RgbValue::from_u8(level, level, level)
    }
}

/// Picks the basic color with the smallest distance to `rgb`.
#[must_use]
pub fn convert_rgb_into_basic(rgb: RgbValue) -> BasicColor {
    BasicColor::iter()
        .min_by_key(|basic| BASIC_PALETTE[basic.index() as usize].distance_squared(&rgb))
        .unwrap_or(BasicColor::White)
}
