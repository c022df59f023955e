// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures that are handy in tests of this crate and of crates that use it.

// Attach.
pub mod output_device_fixtures;
pub mod temp_dir;

// Re-export.
pub use output_device_fixtures::*;
pub use temp_dir::*;
