// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi_escape_codes;
pub mod color;
pub mod color_depth;
pub mod constants;
pub mod detect_color_support;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use color_depth::*;
pub use constants::*;
pub use detect_color_support::*;
