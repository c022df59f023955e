// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A [`crate::TerminalCapability`] that renders every call into ANSI bytes and parses
//! them back with [`vte`], so tests can check what a real terminal would show.
//!
//! ```text
//! VirtualTerminal (capability call)
//!         ↓
//!     ansi_commands (same bytes as CrosstermTerminal)
//!         ↓
//!     vte::Parser
//!         ↓
//!     VirtualScreenPerformer (thin shim, this module)
//!         ↓
//!     VirtualScreen (rows of chars + cursor)
//! ```

// Attach sources.
pub mod params_ext;
pub mod virtual_screen;
pub mod virtual_screen_performer;
pub mod virtual_terminal_impl;

// Re-export.
pub use params_ext::*;
pub use virtual_screen::*;
pub use virtual_screen_performer::*;
pub use virtual_terminal_impl::*;
