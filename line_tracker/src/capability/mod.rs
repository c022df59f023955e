// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The seam between the tracker and a terminal. [`TerminalCapability`] is the trait,
//! and the rest of this module is the backends that implement it:
//! - [`CrosstermTerminal`] for a real terminal.
//! - [`RecordingTerminal`] for unit tests that assert on lines of text.
//! - [`VirtualTerminal`] for tests that check the actual escape sequences.

// Attach sources.
pub mod ansi_commands;
pub mod clear_direction;
pub mod crossterm_terminal;
pub mod recording_terminal;
pub mod terminal_capability;
pub mod virtual_terminal;

// Re-export.
pub use ansi_commands::*;
pub use clear_direction::*;
pub use crossterm_terminal::*;
pub use recording_terminal::*;
pub use terminal_capability::*;
pub use virtual_terminal::*;
