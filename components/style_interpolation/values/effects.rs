/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Values for shadows and filters.

use super::{Angle, CSSFloat, Color, StyleValue};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShadowPlacement {
    Outer,
    Inner,
}

/// A single `box-shadow` or `text-shadow` entry.
///
/// The offsets, blur radius and spread distance are length values (or
/// `calc()`s of lengths).
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    pub color: StyleValue,
    pub offset_x: StyleValue,
    pub offset_y: StyleValue,
    pub blur_radius: StyleValue,
    pub spread_distance: StyleValue,
    pub placement: ShadowPlacement,
}

impl Shadow {
    /// A transparent shadow with zero offsets, blur and spread, used to pad
    /// shadow lists of different lengths.
    pub fn transparent(placement: ShadowPlacement) -> Self {
        Shadow {
            color: Color::transparent().into(),
            offset_x: StyleValue::px(0.),
            offset_y: StyleValue::px(0.),
            blur_radius: StyleValue::px(0.),
            spread_distance: StyleValue::px(0.),
            placement,
        }
    }
}

/// The color adjustment filter functions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColorFilterKind {
    Brightness,
    Contrast,
    Grayscale,
    Invert,
    Opacity,
    Saturate,
    Sepia,
}

impl ColorFilterKind {
    /// The amount for which the filter has no effect.
    pub fn identity_amount(self) -> CSSFloat {
        match self {
            ColorFilterKind::Brightness |
            ColorFilterKind::Contrast |
            ColorFilterKind::Opacity |
            ColorFilterKind::Saturate => 1.,
            ColorFilterKind::Grayscale | ColorFilterKind::Invert | ColorFilterKind::Sepia => 0.,
        }
    }
}

/// A single `<filter-function>` or `url()` reference.
///
/// Omitted arguments are `None` and take the function's default. Lengths
/// are length values or `calc()`s of them, as in [`Shadow`].
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Blur(Option<StyleValue>),
    Color {
        kind: ColorFilterKind,
        /// The amount as a number, where `50%` is `0.5`.
        amount: Option<CSSFloat>,
    },
    DropShadow {
        offset_x: StyleValue,
        offset_y: StyleValue,
        radius: Option<StyleValue>,
        color: Option<Color>,
    },
    HueRotate(Option<Angle>),
    Url(String),
}

impl FilterValue {
    /// The same filter function with the arguments for which it does nothing.
    pub fn to_identity(&self) -> Option<FilterValue> {
        Some(match *self {
            FilterValue::Blur(..) => FilterValue::Blur(Some(StyleValue::px(0.))),
            FilterValue::Color { kind, .. } => FilterValue::Color {
                kind,
                amount: Some(kind.identity_amount()),
            },
            FilterValue::DropShadow { .. } => FilterValue::DropShadow {
                offset_x: StyleValue::px(0.),
                offset_y: StyleValue::px(0.),
                radius: Some(StyleValue::px(0.)),
                color: Some(Color::transparent()),
            },
            FilterValue::HueRotate(..) => FilterValue::HueRotate(Some(Angle::zero())),
            FilterValue::Url(..) => return None,
        })
    }

    #[inline]
    pub fn is_url(&self) -> bool {
        matches!(*self, FilterValue::Url(..))
    }
}

/// The value of `filter` and `backdrop-filter` other than `none`.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterValueList(pub Vec<FilterValue>);

impl FilterValueList {
    #[inline]
    pub fn contains_url(&self) -> bool {
        self.0.iter().any(FilterValue::is_url)
    }
}
