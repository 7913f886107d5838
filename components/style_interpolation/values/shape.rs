/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! `<basic-shape>` and `superellipse()` values.

use super::{CSSFloat, Position, StyleValue};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FillRule {
    Nonzero,
    Evenodd,
}

/// The radius of a `circle()` or `ellipse()`.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeRadius {
    LengthPercentage(StyleValue),
    ClosestSide,
    FarthestSide,
}

/// A polygon vertex.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonPoint {
    pub x: StyleValue,
    pub y: StyleValue,
}

/// A computed `<basic-shape>`. Every length-percentage component is a
/// [`StyleValue`].
#[derive(Clone, Debug, PartialEq)]
pub enum BasicShape {
    Inset {
        top: StyleValue,
        right: StyleValue,
        bottom: StyleValue,
        left: StyleValue,
    },
    Xywh {
        x: StyleValue,
        y: StyleValue,
        width: StyleValue,
        height: StyleValue,
    },
    Rect {
        top: StyleValue,
        right: StyleValue,
        bottom: StyleValue,
        left: StyleValue,
    },
    Circle {
        radius: ShapeRadius,
        position: Position,
    },
    Ellipse {
        radius_x: ShapeRadius,
        radius_y: ShapeRadius,
        position: Position,
    },
    Polygon {
        fill_rule: FillRule,
        points: Vec<PolygonPoint>,
    },
    Path {
        fill_rule: FillRule,
        path: String,
    },
}

/// The `superellipse()` parameter of `corner-shape`.
///
/// `square` is `+∞`, `notch` is `-∞`, `round` is `1`, `bevel` is `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Superellipse {
    pub parameter: CSSFloat,
}

impl Superellipse {
    #[inline]
    pub const fn new(parameter: CSSFloat) -> Self {
        Superellipse { parameter }
    }
}
