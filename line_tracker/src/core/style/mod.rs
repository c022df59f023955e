// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pluggable color and style formatting. A [`StyledLine`] is plain text plus style
//! spans. A [`StyleFormatter`] turns it into the string that is actually written to the
//! terminal, taking the terminal's [`ColorDepth`] into account.
//!
//! [`ColorDepth`]: crate::ColorDepth

// Attach sources.
pub mod style_formatter;
pub mod styled_line;
pub mod text_style;

// Re-export.
pub use style_formatter::*;
pub use styled_line::*;
pub use text_style::*;
