// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use crate::{BasicColor, CSI, SGR};
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Dim,
    Italic,
    Underline,
    Invert,
    Strikethrough,
    ForegroundBasic(BasicColor),
    BackgroundBasic(BasicColor),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

impl Display for SgrCode {
    /// SGR: set graphics mode command.
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::Reset                     => write!(f, "{CSI}0{SGR}"),
            SgrCode::Bold                      => write!(f, "{CSI}1{SGR}"),
            SgrCode::Dim                       => write!(f, "{CSI}2{SGR}"),
            SgrCode::Italic                    => write!(f, "{CSI}3{SGR}"),
            SgrCode::Underline                 => write!(f, "{CSI}4{SGR}"),
            SgrCode::Invert                    => write!(f, "{CSI}7{SGR}"),
            SgrCode::Strikethrough             => write!(f, "{CSI}9{SGR}"),
            SgrCode::ForegroundBasic(color)    => write!(f, "{CSI}{}{SGR}", color.foreground_code()),
            SgrCode::BackgroundBasic(color)    => write!(f, "{CSI}{}{SGR}", color.background_code()),
            SgrCode::ForegroundAnsi256(index)  => write!(f, "{CSI}38;5;{index}{SGR}"),
            SgrCode::BackgroundAnsi256(index)  => write!(f, "{CSI}48;5;{index}{SGR}"),
            SgrCode::ForegroundRGB(r, g, b)    => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
            SgrCode::BackgroundRGB(r, g, b)    => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
        }
    }
}
