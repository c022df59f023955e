// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color types and conversions.
//!
//! - **Primitive types**: [`RgbValue`] (24-bit truecolor), [`AnsiValue`] (256-color
//!   palette), and [`BasicColor`] (the 16 named terminal colors).
//! - **Wrapper type**: [`TermColor`], which knows the [`ColorDepth`] it needs and how to
//!   degrade itself to a lower one.
//! - **Abstraction**: [`TransformColor`] for converting between representations.
//!
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//!
//! [`ColorDepth`]: crate::ColorDepth

// Attach.
mod ansi_value;
mod basic_color;
mod convert;
mod rgb_value;
mod term_color;
mod transform_color;

// Re-export.
pub use ansi_value::*;
pub use basic_color::*;
pub use convert::*;
pub use rgb_value::*;
pub use term_color::*;
pub use transform_color::*;
