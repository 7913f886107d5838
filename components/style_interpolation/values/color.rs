/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Computed colors, and conversion to and from the Oklab space.

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RGBA {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl RGBA {
    pub const TRANSPARENT: RGBA = RGBA::new(0, 0, 0, 0);
    pub const BLACK: RGBA = RGBA::new(0, 0, 0, 255);
    pub const WHITE: RGBA = RGBA::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        RGBA { red, green, blue, alpha }
    }

    /// The alpha channel in the `[0, 1]` range.
    #[inline]
    pub fn alpha_f32(&self) -> f32 {
        self.alpha as f32 / 255.
    }

    /// Converts to Oklab, ignoring alpha.
    pub fn to_oklab(&self) -> Oklab {
        let (r, g, b) = lin_srgb(
            self.red as f32 / 255.,
            self.green as f32 / 255.,
            self.blue as f32 / 255.,
        );
        let (l, m, s) = multiply_matrix(LINEAR_SRGB_TO_LMS, r, g, b);
        let (lightness, a, b) = multiply_matrix(LMS_TO_OKLAB, l.cbrt(), m.cbrt(), s.cbrt());
        Oklab { lightness, a, b }
    }
}

/// Whether a color was written with the legacy comma syntax (`rgb()`, hex,
/// named colors) or a modern functional notation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorSyntax {
    Legacy,
    Modern,
}

/// What non-absolute colors resolve against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorResolutionContext {
    pub current_color: RGBA,
}

impl Default for ColorResolutionContext {
    fn default() -> Self {
        ColorResolutionContext { current_color: RGBA::BLACK }
    }
}

/// A `<color>` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Absolute { rgba: RGBA, syntax: ColorSyntax },
    CurrentColor,
}

impl Color {
    #[inline]
    pub const fn legacy(rgba: RGBA) -> Self {
        Color::Absolute { rgba, syntax: ColorSyntax::Legacy }
    }

    #[inline]
    pub const fn modern(rgba: RGBA) -> Self {
        Color::Absolute { rgba, syntax: ColorSyntax::Modern }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Color::legacy(RGBA::TRANSPARENT)
    }

    pub fn syntax(&self) -> ColorSyntax {
        match *self {
            Color::Absolute { syntax, .. } => syntax,
            Color::CurrentColor => ColorSyntax::Legacy,
        }
    }

    pub fn resolve(&self, context: &ColorResolutionContext) -> RGBA {
        match *self {
            Color::Absolute { rgba, .. } => rgba,
            Color::CurrentColor => context.current_color,
        }
    }
}

/// A color in the Oklab space, without alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklab {
    pub lightness: f32,
    pub a: f32,
    pub b: f32,
}

impl Oklab {
    /// Converts back to 8-bit sRGB, clamping out of gamut channels.
    pub fn to_rgba(&self, alpha: f32) -> RGBA {
        let (l, m, s) = multiply_matrix(OKLAB_TO_LMS, self.lightness, self.a, self.b);
        let (r, g, b) = multiply_matrix(LMS_TO_LINEAR_SRGB, l.powi(3), m.powi(3), s.powi(3));
        let (r, g, b) = gam_srgb(r, g, b);
        RGBA::new(to_channel(r), to_channel(g), to_channel(b), to_channel(alpha))
    }
}

#[inline]
fn to_channel(value: f32) -> u8 {
    (value * 255.).round().clamp(0., 255.) as u8
}

// https://bottosson.github.io/posts/oklab/
const LINEAR_SRGB_TO_LMS: &[f32] = &[
    0.4122214708, 0.5363325363, 0.0514459929,
    0.2119034982, 0.6806995451, 0.1073969566,
    0.0883024619, 0.2817188376, 0.6299787005,
];

const LMS_TO_OKLAB: &[f32] = &[
    0.2104542553, 0.7936177850, -0.0040720468,
    1.9779984951, -2.4285922050, 0.4505937099,
    0.0259040371, 0.7827717662, -0.8086757660,
];

const OKLAB_TO_LMS: &[f32] = &[
    1.0, 0.3963377774, 0.2158037573,
    1.0, -0.1055613458, -0.0638541728,
    1.0, -0.0894841775, -1.2914855480,
];

const LMS_TO_LINEAR_SRGB: &[f32] = &[
    4.0767416621, -3.3077115913, 0.2309699292,
    -1.2684380046, 2.6097574011, -0.3413193965,
    -0.0041960863, -0.7034186147, 1.7076147010,
];

fn multiply_matrix(m: &[f32], x: f32, y: f32, z: f32) -> (f32, f32, f32) {
    let a = m[0] * x + m[1] * y + m[2] * z;
    let b = m[3] * x + m[4] * y + m[5] * z;
    let c = m[6] * x + m[7] * y + m[8] * z;
    (a, b, c)
}

fn lin_srgb(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    #[inline]
    fn component(c: f32) -> f32 {
        let abs = c.abs();
        if abs < 0.04045 {
            return c / 12.92;
        }
        c.signum() * ((abs + 0.055) / 1.055).powf(2.4)
    }

    (component(r), component(g), component(b))
}

fn gam_srgb(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    #[inline]
    fn component(c: f32) -> f32 {
        let abs = c.abs();
        if abs > 0.0031308 {
            return c.signum() * (1.055 * abs.powf(1. / 2.4) - 0.055);
        }
        12.92 * c
    }

    (component(r), component(g), component(b))
}
