/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! `<angle>` and the other dimensions with a canonical unit: `<time>`,
//! `<frequency>` and `<resolution>`.

use std::f32::consts::PI;

use super::CSSFloat;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AngleUnit {
    Deg,
    Grad,
    Rad,
    Turn,
}

/// A computed `<angle>` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    pub value: CSSFloat,
    pub unit: AngleUnit,
}

impl Angle {
    #[inline]
    pub const fn new(value: CSSFloat, unit: AngleUnit) -> Self {
        Angle { value, unit }
    }

    #[inline]
    pub const fn from_degrees(degrees: CSSFloat) -> Self {
        Angle::new(degrees, AngleUnit::Deg)
    }

    #[inline]
    pub fn from_radians(radians: CSSFloat) -> Self {
        Angle::from_degrees(radians.to_degrees())
    }

    #[inline]
    pub const fn zero() -> Self {
        Angle::from_degrees(0.)
    }

    pub fn degrees(&self) -> CSSFloat {
        match self.unit {
            AngleUnit::Deg => self.value,
            AngleUnit::Grad => self.value * 0.9,
            AngleUnit::Rad => self.value * 180. / PI,
            AngleUnit::Turn => self.value * 360.,
        }
    }

    #[inline]
    pub fn radians(&self) -> CSSFloat {
        self.degrees().to_radians()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TimeUnit {
    Second,
    Millisecond,
}

/// A `<time>`, canonically in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Time {
    pub value: CSSFloat,
    pub unit: TimeUnit,
}

impl Time {
    #[inline]
    pub const fn from_seconds(seconds: CSSFloat) -> Self {
        Time { value: seconds, unit: TimeUnit::Second }
    }

    pub fn seconds(&self) -> CSSFloat {
        match self.unit {
            TimeUnit::Second => self.value,
            TimeUnit::Millisecond => self.value / 1000.,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FrequencyUnit {
    Hertz,
    Kilohertz,
}

/// A `<frequency>`, canonically in hertz.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frequency {
    pub value: CSSFloat,
    pub unit: FrequencyUnit,
}

impl Frequency {
    #[inline]
    pub const fn from_hertz(hertz: CSSFloat) -> Self {
        Frequency { value: hertz, unit: FrequencyUnit::Hertz }
    }

    pub fn hertz(&self) -> CSSFloat {
        match self.unit {
            FrequencyUnit::Hertz => self.value,
            FrequencyUnit::Kilohertz => self.value * 1000.,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ResolutionUnit {
    Dppx,
    Dpi,
    Dpcm,
}

/// A `<resolution>`, canonically in dots per pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub value: CSSFloat,
    pub unit: ResolutionUnit,
}

impl Resolution {
    #[inline]
    pub const fn from_dppx(dppx: CSSFloat) -> Self {
        Resolution { value: dppx, unit: ResolutionUnit::Dppx }
    }

    pub fn dppx(&self) -> CSSFloat {
        match self.unit {
            ResolutionUnit::Dppx => self.value,
            ResolutionUnit::Dpi => self.value / 96.,
            ResolutionUnit::Dpcm => self.value * 2.54 / 96.,
        }
    }
}
