/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! `<length>` and `<percentage>` values.

use euclid::default::Size2D;
use strum::Display;

use super::CSSFloat;

/// Pixels per inch, as fixed by CSS.
const PX_PER_IN: CSSFloat = 96.;

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum LengthUnit {
    Px,
    Cm,
    Mm,
    #[strum(serialize = "Q")]
    Q,
    In,
    Pt,
    Pc,
    Em,
    Rem,
    Ex,
    Ch,
    Vw,
    Vh,
    Vmin,
    Vmax,
}

impl LengthUnit {
    /// The number of pixels in one of this unit, for absolute units.
    pub fn px_per_unit(self) -> Option<CSSFloat> {
        Some(match self {
            LengthUnit::Px => 1.,
            LengthUnit::In => PX_PER_IN,
            LengthUnit::Cm => PX_PER_IN / 2.54,
            LengthUnit::Mm => PX_PER_IN / 25.4,
            LengthUnit::Q => PX_PER_IN / 101.6,
            LengthUnit::Pt => PX_PER_IN / 72.,
            LengthUnit::Pc => PX_PER_IN / 6.,
            _ => return None,
        })
    }

    #[inline]
    pub fn is_absolute(self) -> bool {
        self.px_per_unit().is_some()
    }
}

/// What relative lengths are resolved against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthResolutionContext {
    pub font_size: CSSFloat,
    pub root_font_size: CSSFloat,
    pub viewport_size: Size2D<CSSFloat>,
}

impl Default for LengthResolutionContext {
    fn default() -> Self {
        LengthResolutionContext {
            font_size: 16.,
            root_font_size: 16.,
            viewport_size: Size2D::new(800., 600.),
        }
    }
}

/// A `<length>`, kept in the unit it was specified in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: CSSFloat,
    pub unit: LengthUnit,
}

impl Length {
    #[inline]
    pub const fn new(value: CSSFloat, unit: LengthUnit) -> Self {
        Length { value, unit }
    }

    #[inline]
    pub const fn px(value: CSSFloat) -> Self {
        Length::new(value, LengthUnit::Px)
    }

    #[inline]
    pub const fn zero() -> Self {
        Length::px(0.)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.
    }

    /// The value in pixels, if the unit is absolute.
    #[inline]
    pub fn absolute_px(&self) -> Option<CSSFloat> {
        self.unit.px_per_unit().map(|factor| self.value * factor)
    }

    pub fn to_px(&self, context: &LengthResolutionContext) -> CSSFloat {
        if let Some(px) = self.absolute_px() {
            return px;
        }
        let viewport = context.viewport_size;
        let factor = match self.unit {
            LengthUnit::Em => context.font_size,
            LengthUnit::Rem => context.root_font_size,
            LengthUnit::Ex | LengthUnit::Ch => context.font_size / 2.,
            LengthUnit::Vw => viewport.width / 100.,
            LengthUnit::Vh => viewport.height / 100.,
            LengthUnit::Vmin => viewport.width.min(viewport.height) / 100.,
            LengthUnit::Vmax => viewport.width.max(viewport.height) / 100.,
            _ => 1.,
        };
        self.value * factor
    }
}

/// A `<percentage>`, stored as written: `50%` is `Percentage(50.)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Percentage(pub CSSFloat);

impl Percentage {
    #[inline]
    pub fn as_fraction(self) -> CSSFloat {
        self.0 / 100.
    }
}
