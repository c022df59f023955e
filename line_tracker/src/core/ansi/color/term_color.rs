// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiValue, BasicColor, ColorDepth, RgbValue, TransformColor};

/// A foreground or background color, in whichever representation the caller chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermColor {
    Basic(BasicColor),
    Ansi256(AnsiValue),
    Rgb(RgbValue),
}

impl From<BasicColor> for TermColor {
    fn from(value: BasicColor) -> Self { TermColor::Basic(value) }
}

impl From<AnsiValue> for TermColor {
    fn from(value: AnsiValue) -> Self { TermColor::Ansi256(value) }
}

impl From<RgbValue> for TermColor {
    fn from(value: RgbValue) -> Self { TermColor::Rgb(value) }
}

impl TermColor {
    /// The lowest [`ColorDepth`] that can show this color without degrading it.
    #[must_use]
    pub fn required_depth(&self) -> ColorDepth {
        match self {
            TermColor::Basic(_) => ColorDepth::Ansi16,
            TermColor::Ansi256(_) => ColorDepth::Ansi256,
            TermColor::Rgb(_) => ColorDepth::Truecolor,
        }
    }

    /// Convert this color to the richest representation that `depth` can show. Returns
    /// [`None`] for [`ColorDepth::Monochrome`], where no color can be shown at all.
    #[must_use]
    pub fn degrade_to(&self, depth: ColorDepth) -> Option<TermColor> {
        if depth.supports(self.required_depth()) {
            return Some(*self);
        }
        match depth {
            ColorDepth::Monochrome => None,
            ColorDepth::Ansi16 => Some(TermColor::Basic(self.as_basic())),
            ColorDepth::Ansi256 | ColorDepth::Truecolor => {
                Some(TermColor::Ansi256(self.as_ansi256()))
            }
        }
    }
}

impl TransformColor for TermColor {
    fn as_rgb(&self) -> RgbValue {
        match self {
            TermColor::Basic(it) => it.as_rgb(),
            TermColor::Ansi256(it) => it.as_rgb(),
            TermColor::Rgb(it) => it.as_rgb(),
        }
    }

    fn as_ansi256(&self) -> AnsiValue {
        match self {
            TermColor::Basic(it) => it.as_ansi256(),
            TermColor::Ansi256(it) => it.as_ansi256(),
            TermColor::Rgb(it) => it.as_ansi256(),
        }
    }

    fn as_basic(&self) -> BasicColor {
        match self {
            TermColor::Basic(it) => it.as_basic(),
            TermColor::Ansi256(it) => it.as_basic(),
            TermColor::Rgb(it) => it.as_basic(),
        }
    }
}
