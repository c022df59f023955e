// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BACKSPACE, CARRIAGE_RETURN, CHA_CURSOR_COLUMN, CNL_CURSOR_NEXT_LINE,
            CPL_CURSOR_PREV_LINE, CUB_CURSOR_BACKWARD, CUD_CURSOR_DOWN,
            CUF_CURSOR_FORWARD, CUP_CURSOR_POSITION, CUU_CURSOR_UP, ClearDirection,
            EL_ENTIRE, EL_ERASE_LINE, EL_TO_END, EL_TO_START, LINE_FEED, ParamsExt,
            SGR_SET_GRAPHICS, VirtualScreen};
use vte::{Params, Perform};

/// Thin shim from [`vte`] callbacks to [`VirtualScreen`] methods. It only understands
/// the sequences this crate emits. Everything else is logged and dropped.
#[derive(Debug)]
pub struct VirtualScreenPerformer<'a> {
    pub screen: &'a mut VirtualScreen,
}

impl Perform for VirtualScreenPerformer<'_> {
    fn print(&mut self, ch: char) { self.screen.print_char(ch); }

    fn execute(&mut self, byte: u8) {
        match byte {
            LINE_FEED => self.screen.line_feed(),
            CARRIAGE_RETURN => self.screen.carriage_return(),
            BACKSPACE => self.screen.backspace(),
            _ => tracing::debug!(message = "C0 control ignored", byte = ?byte),
        }
    }

    fn csi_dispatch(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        ignore: bool,
        dispatch_char: char,
    ) {
        if ignore || !intermediates.is_empty() {
            tracing::warn!(
                message = "CSI: Discarding malformed sequence",
                dispatch_char = ?dispatch_char
            );
            return;
        }

        let n = params.extract_nth_non_zero(0);
        match dispatch_char {
            CUU_CURSOR_UP => self.screen.move_up(n),
            CUD_CURSOR_DOWN => self.screen.move_down(n),
            CUF_CURSOR_FORWARD => self.screen.move_right(n),
            CUB_CURSOR_BACKWARD => self.screen.move_left(n),
            CNL_CURSOR_NEXT_LINE => {
                self.screen.move_down(n);
                self.screen.carriage_return();
            }
            CPL_CURSOR_PREV_LINE => {
                self.screen.move_up(n);
                self.screen.carriage_return();
            }
            CHA_CURSOR_COLUMN => self.screen.move_to_col(usize::from(n) - 1),
            CUP_CURSOR_POSITION => {
                let col = params.extract_nth_non_zero(1);
                self.screen
                    .move_to(usize::from(n) - 1, usize::from(col) - 1);
            }
            EL_ERASE_LINE => match params.extract_nth_opt(0).unwrap_or(EL_TO_END) {
                EL_TO_END => self.screen.clear_line(ClearDirection::After),
                EL_TO_START => self.screen.clear_line(ClearDirection::Before),
                EL_ENTIRE => self.screen.clear_line(ClearDirection::EntireLine),
                other => {
                    tracing::warn!(message = "CSI K: Unknown mode", mode = ?other);
                }
            },
            // Styling doesn't change what is on the screen.
            SGR_SET_GRAPHICS => {}
            _ => {
                tracing::warn!(
                    message = "CSI: Unknown CSI sequence",
                    dispatch_char = ?dispatch_char
                );
            }
        }
    }
}
