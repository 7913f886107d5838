/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animated types for CSS colors.

use super::{AnimationContext, Procedure, animate_raw, interpolate_raw};
use crate::calc::NumericRange;
use crate::prefs;
use crate::values::color::Oklab;
use crate::values::{Color, ColorSyntax, RGBA, StyleValue};

/// Interpolates two colors.
///
/// Legacy colors blend their gamma encoded sRGB channels. Modern colors
/// blend in premultiplied Oklab.
///
/// <https://drafts.csswg.org/css-color-4/#interpolation>
pub fn interpolate_color(from: RGBA, to: RGBA, progress: f64, syntax: ColorSyntax) -> RGBA {
    match syntax {
        ColorSyntax::Legacy => RGBA::new(
            interpolate_raw(from.red, to.red, progress, None),
            interpolate_raw(from.green, to.green, progress, None),
            interpolate_raw(from.blue, to.blue, progress, None),
            interpolate_raw(from.alpha, to.alpha, progress, None),
        ),
        ColorSyntax::Modern => interpolate_oklab(from, to, progress),
    }
}

fn interpolate_oklab(from: RGBA, to: RGBA, progress: f64) -> RGBA {
    let premultiplied = |color: RGBA| {
        let alpha = color.alpha_f32();
        let oklab = color.to_oklab();
        [oklab.lightness * alpha, oklab.a * alpha, oklab.b * alpha]
    };
    let from_channels = premultiplied(from);
    let to_channels = premultiplied(to);

    let alpha = interpolate_raw(
        from.alpha_f32(),
        to.alpha_f32(),
        progress,
        Some(NumericRange::new(0., 1.)),
    );
    // Nothing to un-premultiply.
    if alpha <= 0. {
        return RGBA::TRANSPARENT;
    }

    let mut channels = [0.; 3];
    for (channel, (from, to)) in channels.iter_mut().zip(from_channels.iter().zip(to_channels)) {
        *channel = interpolate_raw(*from, to, progress, None) / alpha;
    }
    Oklab {
        lightness: channels[0],
        a: channels[1],
        b: channels[2],
    }
    .to_rgba(alpha)
}

/// Animates two `<color>` values, resolving `currentcolor` against the
/// element first.
pub(crate) fn animate_color(
    context: &AnimationContext,
    from: &Color,
    to: &Color,
    procedure: Procedure,
) -> Result<StyleValue, ()> {
    let resolution_context = context.element.color_resolution_context();
    let from_rgba = from.resolve(&resolution_context);
    let to_rgba = to.resolve(&resolution_context);
    let modern = from.syntax() == ColorSyntax::Modern || to.syntax() == ColorSyntax::Modern;
    let oklab_enabled = context
        .element
        .preferences()
        .get_bool(prefs::OKLAB_COLOR_INTERPOLATION_ENABLED);
    let syntax = if modern && oklab_enabled {
        ColorSyntax::Modern
    } else {
        ColorSyntax::Legacy
    };

    let rgba = match procedure {
        Procedure::Interpolate { progress } => {
            interpolate_color(from_rgba, to_rgba, progress, syntax)
        },
        Procedure::Add | Procedure::Accumulate { .. } => RGBA::new(
            animate_raw(from_rgba.red, to_rgba.red, procedure, None),
            animate_raw(from_rgba.green, to_rgba.green, procedure, None),
            animate_raw(from_rgba.blue, to_rgba.blue, procedure, None),
            animate_raw(from_rgba.alpha, to_rgba.alpha, procedure, None),
        ),
    };
    Ok(Color::Absolute { rgba, syntax }.into())
}
