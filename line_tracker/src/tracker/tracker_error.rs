// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CapabilityOperation, ColorDepth};
use miette::Diagnostic;

pub type TrackerResult<T> = Result<T, LineTrackerError>;

/// Everything that can go wrong in a [`crate::LineCursorTracker`] operation. None of
/// these are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum LineTrackerError {
    /// The cursor isn't on the row the tracker expected after a move. Either the move
    /// failed, or something else wrote to the terminal.
    /// `actual` is 0 when the cursor is above the tracker's first row.
    #[error("Cursor is on row {actual}, expected row {intended}")]
    #[diagnostic(
        code(r3bl_line_tracker::cursor_desync),
        help(
            "Make sure nothing else writes to this terminal while the tracker is in use"
        )
    )]
    CursorDesync { intended: usize, actual: usize },

    /// [`crate::LineCursorTracker::remove_last_line`] was called with no lines left.
    #[error("There is no line to remove")]
    #[diagnostic(
        code(r3bl_line_tracker::line_underflow),
        help("Check `line_count()` before removing a line")
    )]
    LineUnderflow,

    /// The terminal can't display the requested color depth.
    #[error("Color depth {requested} was requested, but the terminal only supports {available}")]
    #[diagnostic(
        code(r3bl_line_tracker::unsupported_capability),
        help(
            "Degrade the colors (eg: `SgrFormatter::degrading()`), or set `FORCE_COLOR` \
             if the detection is wrong"
        )
    )]
    UnsupportedCapability {
        requested: ColorDepth,
        available: ColorDepth,
    },

    /// A `write`, `clear_current_line`, or `move_cursor_absolute` call on the terminal
    /// returned `false`.
    #[error("Terminal call `{operation}` failed")]
    #[diagnostic(code(r3bl_line_tracker::capability_call_failed))]
    CapabilityCallFailed { operation: CapabilityOperation },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(
            LineTrackerError::CursorDesync {
                intended: 3,
                actual: 1
            }
            .to_string(),
            "Cursor is on row 1, expected row 3"
        );
        assert_eq!(
            LineTrackerError::CapabilityCallFailed {
                operation: CapabilityOperation::Write
            }
            .to_string(),
            "Terminal call `write` failed"
        );
        assert_eq!(
            LineTrackerError::UnsupportedCapability {
                requested: ColorDepth::Truecolor,
                available: ColorDepth::Ansi16,
            }
            .to_string(),
            format!(
                "Color depth {} was requested, but the terminal only supports {}",
                ColorDepth::Truecolor,
                ColorDepth::Ansi16
            )
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let code = LineTrackerError::LineUnderflow.code().unwrap().to_string();
        assert_eq!(code, "r3bl_line_tracker::line_underflow");
        assert!(LineTrackerError::LineUnderflow.help().is_some());
    }
}
