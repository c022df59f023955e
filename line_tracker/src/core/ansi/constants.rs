// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte and character constants for the small subset of VT100 / ECMA-48 sequences that
//! this crate emits and understands.
//!
//! More info:
//! - <https://vt100.net/docs/vt100-ug/chapter3.html>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#CSI_(Control_Sequence_Introducer)_sequences>

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Final character of a Select Graphic Rendition sequence.
pub const SGR: &str = "m";

/// Erase from the start of the line through the cursor (`EL 1`). Crossterm's
/// `ClearType` has no variant for this.
pub const EL_CLEAR_TO_LINE_START: &str = "\x1b[1K";

// C0 control characters.
pub const BACKSPACE: u8 = 0x08;
pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';

// CSI dispatch characters.
pub const CUU_CURSOR_UP: char = 'A';
pub const CUD_CURSOR_DOWN: char = 'B';
pub const CUF_CURSOR_FORWARD: char = 'C';
pub const CUB_CURSOR_BACKWARD: char = 'D';
pub const CNL_CURSOR_NEXT_LINE: char = 'E';
pub const CPL_CURSOR_PREV_LINE: char = 'F';
pub const CHA_CURSOR_COLUMN: char = 'G';
pub const CUP_CURSOR_POSITION: char = 'H';
pub const EL_ERASE_LINE: char = 'K';
pub const SGR_SET_GRAPHICS: char = 'm';

// `EL` parameter values.
pub const EL_TO_END: u16 = 0;
pub const EL_TO_START: u16 = 1;
pub const EL_ENTIRE: u16 = 2;
