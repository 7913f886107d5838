/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Font related values, and `<ratio>`.

use super::{CSSFloat, Keyword, StyleValue};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FontStyleKeyword {
    Normal,
    Italic,
    Oblique,
}

impl FontStyleKeyword {
    pub fn to_keyword(self) -> Keyword {
        match self {
            FontStyleKeyword::Normal => Keyword::Normal,
            FontStyleKeyword::Italic => Keyword::Italic,
            FontStyleKeyword::Oblique => Keyword::Oblique,
        }
    }

    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        Some(match keyword {
            Keyword::Normal => FontStyleKeyword::Normal,
            Keyword::Italic => FontStyleKeyword::Italic,
            Keyword::Oblique => FontStyleKeyword::Oblique,
            _ => return None,
        })
    }
}

/// A computed `font-style`: a keyword with an optional oblique angle.
#[derive(Clone, Debug, PartialEq)]
pub struct FontStyle {
    pub style: FontStyleKeyword,
    pub angle: Option<StyleValue>,
}

impl FontStyle {
    pub fn new(style: FontStyleKeyword, angle: Option<StyleValue>) -> Self {
        FontStyle { style, angle }
    }
}

/// Whether an [`OpenTypeTagged`] value belongs to `font-feature-settings` or
/// `font-variation-settings`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OpenTypeTagMode {
    FontFeatureSettings,
    FontVariationSettings,
}

/// A four letter OpenType tag with a value, e.g. `"wght" 400`.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenTypeTagged {
    pub mode: OpenTypeTagMode,
    pub tag: String,
    pub value: StyleValue,
}

impl OpenTypeTagged {
    pub fn new(mode: OpenTypeTagMode, tag: impl Into<String>, value: StyleValue) -> Self {
        OpenTypeTagged { mode, tag: tag.into(), value }
    }
}

/// A `<ratio>`: `numerator / denominator`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ratio {
    pub numerator: CSSFloat,
    pub denominator: CSSFloat,
}

impl Ratio {
    #[inline]
    pub const fn new(numerator: CSSFloat, denominator: CSSFloat) -> Self {
        Ratio { numerator, denominator }
    }

    /// A ratio is degenerate if either part is zero or infinite.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.numerator.is_finite() ||
            !self.denominator.is_finite() ||
            self.numerator == 0. ||
            self.denominator == 0.
    }

    #[inline]
    pub fn value(&self) -> CSSFloat {
        self.numerator / self.denominator
    }
}
