// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorDepth, LineTrackerError, SgrCode, Style, StyleAttr, StyledLine,
            TermColor, TrackerResult};
use smallvec::SmallVec;

/// Turns a [`StyledLine`] into the string that is written to the terminal.
///
/// Implement this to plug in your own markup. The tracker only ever sees the returned
/// string.
pub trait StyleFormatter {
    /// # Errors
    ///
    /// Returns [`LineTrackerError::UnsupportedCapability`] if the formatter refuses to
    /// render a style the terminal can't display at `depth`.
    fn format(&self, line: &StyledLine, depth: ColorDepth) -> TrackerResult<String>;
}

/// Drops all styling and returns the plain text. Use this when output is piped.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl StyleFormatter for PlainFormatter {
    fn format(&self, line: &StyledLine, _depth: ColorDepth) -> TrackerResult<String> {
        Ok(line.text().to_string())
    }
}

/// What [`SgrFormatter`] does with a color that needs more depth than the terminal has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    /// Convert to the closest color the terminal can show. At
    /// [`ColorDepth::Monochrome`] colors are dropped while attributes (bold, underline,
    /// etc) are kept.
    #[default]
    Degrade,
    /// Fail with [`LineTrackerError::UnsupportedCapability`].
    Strict,
}

/// Renders each styled run as SGR escape sequences, followed by the text and a reset.
///
/// ```
/// use r3bl_line_tracker::{BasicColor, ColorDepth, SgrFormatter, Style, StyleFormatter,
///                         StyledLine};
///
/// let line = StyledLine::default()
///     .with("ok", Style::default().fg(BasicColor::Green))
///     .with_plain(" done");
/// let it = SgrFormatter::default().format(&line, ColorDepth::Ansi16).unwrap();
/// assert_eq!(it, "\x1b[32mok\x1b[0m done");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SgrFormatter {
    pub policy: ColorPolicy,
}

impl SgrFormatter {
    #[must_use]
    pub fn degrading() -> Self {
        Self {
            policy: ColorPolicy::Degrade,
        }
    }

    #[must_use]
    pub fn strict() -> Self {
        Self {
            policy: ColorPolicy::Strict,
        }
    }

    fn sgr_codes_for(
        &self,
        style: &Style,
        depth: ColorDepth,
    ) -> TrackerResult<SmallVec<[SgrCode; 4]>> {
        let mut acc = SmallVec::new();
        for attr in &style.attrs {
            let code = match *attr {
                StyleAttr::Foreground(color) => self
                    .resolve(color, depth)?
                    .map(foreground_code),
                StyleAttr::Background(color) => self
                    .resolve(color, depth)?
                    .map(background_code),
                StyleAttr::Bold => Some(SgrCode::Bold),
                StyleAttr::Dim => Some(SgrCode::Dim),
                StyleAttr::Italic => Some(SgrCode::Italic),
                StyleAttr::Underline => Some(SgrCode::Underline),
                StyleAttr::Invert => Some(SgrCode::Invert),
                StyleAttr::Strikethrough => Some(SgrCode::Strikethrough),
            };
            acc.extend(code);
        }
        Ok(acc)
    }

    fn resolve(
        &self,
        color: TermColor,
        depth: ColorDepth,
    ) -> TrackerResult<Option<TermColor>> {
        let requested = color.required_depth();
        if self.policy == ColorPolicy::Strict && !depth.supports(requested) {
            return Err(LineTrackerError::UnsupportedCapability {
                requested,
                available: depth,
            });
        }
        Ok(color.degrade_to(depth))
    }
}

impl StyleFormatter for SgrFormatter {
    fn format(&self, line: &StyledLine, depth: ColorDepth) -> TrackerResult<String> {
        let mut acc = String::with_capacity(line.text().len());
        for (text, maybe_style) in line.segments() {
            let codes = match maybe_style {
                Some(style) => self.sgr_codes_for(style, depth)?,
                None => SmallVec::new(),
            };
            if codes.is_empty() {
                acc.push_str(text);
                continue;
            }
            for code in &codes {
                acc.push_str(&code.to_string());
            }
            acc.push_str(text);
            acc.push_str(&SgrCode::Reset.to_string());
        }
        Ok(acc)
    }
}

fn foreground_code(color: TermColor) -> SgrCode {
    match color {
        TermColor::Basic(it) => SgrCode::ForegroundBasic(it),
        TermColor::Ansi256(it) => SgrCode::ForegroundAnsi256(it.index),
        TermColor::Rgb(it) => SgrCode::ForegroundRGB(it.red, it.green, it.blue),
    }
}

fn background_code(color: TermColor) -> SgrCode {
    match color {
        TermColor::Basic(it) => SgrCode::BackgroundBasic(it),
        TermColor::Ansi256(it) => SgrCode::BackgroundAnsi256(it.index),
        TermColor::Rgb(it) => SgrCode::BackgroundRGB(it.red, it.green, it.blue),
    }
}
