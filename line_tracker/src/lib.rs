// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_line_tracker
//!
//! Line addressable output for interactive terminals. A terminal natively only knows how
//! to move its cursor and write characters. This crate layers logical "lines" on top of
//! that: you can append line `N`, replace line `N`, clear line `N`, or retract the last
//! line, and the cursor is moved to the right row before each operation.
//!
//! This is the kind of bookkeeping that spinners, progress bars, and multi-task status
//! displays need, where a handful of lines at the bottom of the terminal are rewritten in
//! place while the rest of the output scrolls by normally.
//!
//! # Architecture
//!
//! ```text
//! ╭───────────────────────╮    ╭───────────────────────────╮
//! │ caller                │────▶ LineCursorTracker         │
//! │ append / replace /    │    │ current_row, line_count   │
//! │ clear / remove_last   │    │ desync check on each move │
//! ╰───────────────────────╯    ╰─────────────┬─────────────╯
//!                                            │ TerminalCapability
//!              ╭─────────────────────────────┼───────────────────────────╮
//!              ▼                             ▼                           ▼
//!    ╭──────────────────╮        ╭────────────────────╮       ╭───────────────────╮
//!    │ CrosstermTerminal│        │ RecordingTerminal  │       │ VirtualTerminal   │
//!    │ (stdout, stderr) │        │ (in-memory lines)  │       │ (vte parser)      │
//!    ╰──────────────────╯        ╰────────────────────╯       ╰───────────────────╯
//! ```
//!
//! - [`LineCursorTracker`] owns the two counters (`current_row` and `line_count`) and
//!   translates line operations into the minimal sequence of capability calls.
//! - [`TerminalCapability`] is the seam to the device. Every `false` returned by it is
//!   escalated as a [`LineTrackerError`], never ignored.
//! - [`StyleFormatter`] turns a [`StyledLine`] (plain text plus style spans) into a
//!   string for the terminal's [`ColorDepth`], before it reaches the tracker.
//! - [`measure_display_width`] counts the visible cells of a string that may contain
//!   escape sequences.
//!
//! # Example
//!
//! ```
//! use r3bl_line_tracker::{ClearDirection, LineCursorTracker, RecordingTerminal};
//!
//! let mut tracker = LineCursorTracker::new(RecordingTerminal::default());
//! tracker.append_line("task 1: pending").unwrap();
//! tracker.append_line("task 2: pending").unwrap();
//! tracker.replace_line(0, "task 1: done").unwrap();
//! tracker.clear_line(1, ClearDirection::EntireLine).unwrap();
//!
//! assert_eq!(tracker.capability().lines(), &["task 1: done", "", ""]);
//! ```
//!
//! # Logging
//!
//! The crate logs with [`tracing`]. Use [`TracingConfig`] to send logs to a file, or to
//! stdout / stderr / an [`OutputDevice`]. Don't log to the same terminal that the tracker
//! is writing to, since that moves the cursor behind the tracker's back.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod capability;
pub mod core;
pub mod tracker;

// Re-export.
pub use capability::*;
pub use core::*;
pub use tracker::*;
