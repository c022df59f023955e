// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Building blocks that the tracker and its backends share: ANSI escape codes, colors
//! and color depth detection, style formatting, display width, output devices, logging,
//! and test fixtures.

// Attach sources.
pub mod ansi;
pub mod log;
pub mod misc;
pub mod style;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export.
pub use ansi::*;
pub use log::*;
pub use misc::*;
pub use style::*;
pub use terminal_io::*;
pub use test_fixtures::*;
