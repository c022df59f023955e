// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns [`crate::TerminalCapability`] calls into crossterm commands, queued on any
//! [`Write`]r. [`crate::CrosstermTerminal`] queues them on its [`crate::OutputDevice`],
//! and [`crate::VirtualTerminal`] queues them on a byte buffer that it then parses, so
//! both backends see exactly the same bytes.
//!
//! Nothing is queued for a zero length move, since eg `CSI 0 A` means "move up 1" to
//! most terminals.

use crate::{ClearDirection, EL_CLEAR_TO_LINE_START};
use crossterm::{QueueableCommand, cursor,
                terminal::{Clear, ClearType}};
use std::io::{Result, Write};

/// Queue a relative cursor move. Horizontal first, then vertical.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn queue_move_relative(
    out: &mut (impl Write + ?Sized),
    dx: isize,
    dy: isize,
) -> Result<()> {
    let cols = clamp_to_u16(dx.unsigned_abs());
    match dx.signum() {
        -1 => {
            out.queue(cursor::MoveLeft(cols))?;
        }
        1 => {
            out.queue(cursor::MoveRight(cols))?;
        }
        _ => {}
    }

    let rows = clamp_to_u16(dy.unsigned_abs());
    match dy.signum() {
        -1 => {
            out.queue(cursor::MoveUp(rows))?;
        }
        1 => {
            out.queue(cursor::MoveDown(rows))?;
        }
        _ => {}
    }

    Ok(())
}

/// Queue a move to column `x`, and to row `y` if one is given.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn queue_move_absolute(
    out: &mut (impl Write + ?Sized),
    x: u16,
    y: Option<u16>,
) -> Result<()> {
    match y {
        Some(y) => out.queue(cursor::MoveTo(x, y))?,
        None => out.queue(cursor::MoveToColumn(x))?,
    };
    Ok(())
}

/// Queue a clear of (part of) the cursor's row.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn queue_clear_line(
    out: &mut (impl Write + ?Sized),
    direction: ClearDirection,
) -> Result<()> {
    match direction {
        // Crossterm has no `ClearType` for this one.
        ClearDirection::Before => {
            out.write_all(EL_CLEAR_TO_LINE_START.as_bytes())?;
        }
        ClearDirection::After => {
            out.queue(Clear(ClearType::UntilNewLine))?;
        }
        ClearDirection::EntireLine => {
            out.queue(Clear(ClearType::CurrentLine))?;
        }
    }
    Ok(())
}

fn clamp_to_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test_case(0, 0, "")]
    #[test_case(0, -3, "\x1b[3A")]
    #[test_case(0, 2, "\x1b[2B")]
    #[test_case(4, 0, "\x1b[4C")]
    #[test_case(-1, -1, "\x1b[1D\x1b[1A")]
    fn test_move_relative(dx: isize, dy: isize, expected: &str) {
        assert_eq!(render(|out| queue_move_relative(out, dx, dy)), expected);
    }

    #[test]
    fn test_move_absolute() {
        assert_eq!(render(|out| queue_move_absolute(out, 0, None)), "\x1b[1G");
        assert_eq!(
            render(|out| queue_move_absolute(out, 4, Some(2))),
            "\x1b[3;5H"
        );
    }

    #[test_case(ClearDirection::Before, "\x1b[1K")]
    #[test_case(ClearDirection::After, "\x1b[K")]
    #[test_case(ClearDirection::EntireLine, "\x1b[2K")]
    fn test_clear_line(direction: ClearDirection, expected: &str) {
        assert_eq!(render(|out| queue_clear_line(out, direction)), expected);
    }

    #[test]
    fn test_huge_move_is_clamped() {
        assert_eq!(
            render(|out| queue_move_relative(out, 0, isize::MIN)),
            format!("\x1b[{}A", u16::MAX)
        );
    }
}
