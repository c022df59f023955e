// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiValue, BasicColor, RgbValue};

pub trait TransformColor {
    /// Returns a [`RgbValue`] representation of the `self` color.
    fn as_rgb(&self) -> RgbValue;

    /// Returns the index of a color in 256-color ANSI palette approximating the `self`
    /// color.
    fn as_ansi256(&self) -> AnsiValue;

    /// Returns the one of the 16 basic terminal colors closest to the `self` color.
    fn as_basic(&self) -> BasicColor;
}
