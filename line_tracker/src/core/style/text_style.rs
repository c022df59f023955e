// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorDepth, TermColor};
use smallvec::SmallVec;

/// A single styling attribute. A [`Style`] is a list of these, applied in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAttr {
    Foreground(TermColor),
    Background(TermColor),
    Bold,
    Dim,
    Italic,
    Underline,
    Invert,
    Strikethrough,
}

/// Builder for a list of [`StyleAttr`]s.
///
/// ```
/// use r3bl_line_tracker::{BasicColor, RgbValue, Style};
///
/// let style = Style::default()
///     .fg(BasicColor::Red)
///     .bg(RgbValue::from_u8(0, 0, 0))
///     .bold();
/// assert_eq!(style.attrs.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub attrs: SmallVec<[StyleAttr; 4]>,
}

impl Style {
    #[must_use]
    pub fn fg(self, color: impl Into<TermColor>) -> Self {
        self.with(StyleAttr::Foreground(color.into()))
    }

    #[must_use]
    pub fn bg(self, color: impl Into<TermColor>) -> Self {
        self.with(StyleAttr::Background(color.into()))
    }

    #[must_use]
    pub fn bold(self) -> Self { self.with(StyleAttr::Bold) }

    #[must_use]
    pub fn dim(self) -> Self { self.with(StyleAttr::Dim) }

    #[must_use]
    pub fn italic(self) -> Self { self.with(StyleAttr::Italic) }

    #[must_use]
    pub fn underline(self) -> Self { self.with(StyleAttr::Underline) }

    #[must_use]
    pub fn invert(self) -> Self { self.with(StyleAttr::Invert) }

    #[must_use]
    pub fn strikethrough(self) -> Self { self.with(StyleAttr::Strikethrough) }

    #[must_use]
    pub fn with(mut self, attr: StyleAttr) -> Self {
        self.attrs.push(attr);
        self
    }

    #[must_use]
    pub fn is_plain(&self) -> bool { self.attrs.is_empty() }

    /// The lowest [`ColorDepth`] that can show every color in this style as is.
    #[must_use]
    pub fn required_depth(&self) -> ColorDepth {
        self.attrs
            .iter()
            .filter_map(|attr| match attr {
                StyleAttr::Foreground(color) | StyleAttr::Background(color) => {
                    Some(color.required_depth())
                }
                _ => None,
            })
            .max()
            .unwrap_or_default()
    }
}
