// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The line bookkeeping. [`LineCursorTracker`] maps logical line indices onto cursor
//! rows and drives a [`crate::TerminalCapability`] to reach them.

// Attach sources.
pub mod line_cursor_tracker;
pub mod tracker_error;

// Re-export.
pub use line_cursor_tracker::*;
pub use tracker_error::*;
