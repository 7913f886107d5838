/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animation of `<basic-shape>`s.
//!
//! <https://drafts.csswg.org/css-shapes/#basic-shape-interpolation>

use super::{AnimationContext, Procedure, animate_length_percentage, animate_position};
use crate::calc::NumericRange;
use crate::values::shape::{PolygonPoint, ShapeRadius};
use crate::values::{BasicShape, StyleValue};

fn animate_radius(
    context: &AnimationContext,
    from: &ShapeRadius,
    to: &ShapeRadius,
    procedure: Procedure,
) -> Result<ShapeRadius, ()> {
    match (from, to) {
        (ShapeRadius::LengthPercentage(from), ShapeRadius::LengthPercentage(to)) => {
            let range = Some(NumericRange::NON_NEGATIVE);
            Ok(ShapeRadius::LengthPercentage(animate_length_percentage(
                context, from, to, procedure, range,
            )?))
        },
        _ => Err(()),
    }
}

/// Animates two shapes of the same kind.
pub(crate) fn animate_basic_shape(
    context: &AnimationContext,
    from: &BasicShape,
    to: &BasicShape,
    procedure: Procedure,
) -> Result<BasicShape, ()> {
    let lp = |from: &StyleValue, to: &StyleValue| {
        animate_length_percentage(context, from, to, procedure, None)
    };
    let size = |from: &StyleValue, to: &StyleValue| {
        animate_length_percentage(context, from, to, procedure, Some(NumericRange::NON_NEGATIVE))
    };

    Ok(match (from, to) {
        (
            BasicShape::Inset { top, right, bottom, left },
            BasicShape::Inset { top: to_top, right: to_right, bottom: to_bottom, left: to_left },
        ) => BasicShape::Inset {
            top: lp(top, to_top)?,
            right: lp(right, to_right)?,
            bottom: lp(bottom, to_bottom)?,
            left: lp(left, to_left)?,
        },
        (
            BasicShape::Xywh { x, y, width, height },
            BasicShape::Xywh { x: to_x, y: to_y, width: to_width, height: to_height },
        ) => BasicShape::Xywh {
            x: lp(x, to_x)?,
            y: lp(y, to_y)?,
            width: size(width, to_width)?,
            height: size(height, to_height)?,
        },
        (
            BasicShape::Rect { top, right, bottom, left },
            BasicShape::Rect { top: to_top, right: to_right, bottom: to_bottom, left: to_left },
        ) => BasicShape::Rect {
            top: lp(top, to_top)?,
            right: lp(right, to_right)?,
            bottom: lp(bottom, to_bottom)?,
            left: lp(left, to_left)?,
        },
        (
            BasicShape::Circle { radius, position },
            BasicShape::Circle { radius: to_radius, position: to_position },
        ) => BasicShape::Circle {
            radius: animate_radius(context, radius, to_radius, procedure)?,
            position: animate_position(context, position, to_position, procedure)?,
        },
        (
            BasicShape::Ellipse { radius_x, radius_y, position },
            BasicShape::Ellipse {
                radius_x: to_radius_x,
                radius_y: to_radius_y,
                position: to_position,
            },
        ) => BasicShape::Ellipse {
            radius_x: animate_radius(context, radius_x, to_radius_x, procedure)?,
            radius_y: animate_radius(context, radius_y, to_radius_y, procedure)?,
            position: animate_position(context, position, to_position, procedure)?,
        },
        (
            BasicShape::Polygon { fill_rule, points },
            BasicShape::Polygon { fill_rule: to_fill_rule, points: to_points },
        ) => {
            if fill_rule != to_fill_rule || points.len() != to_points.len() {
                return Err(());
            }
            let points = points
                .iter()
                .zip(to_points.iter())
                .map(|(from, to)| {
                    Ok(PolygonPoint {
                        x: lp(&from.x, &to.x)?,
                        y: lp(&from.y, &to.y)?,
                    })
                })
                .collect::<Result<Vec<_>, ()>>()?;
            BasicShape::Polygon { fill_rule: *fill_rule, points }
        },
        (BasicShape::Path { .. }, BasicShape::Path { .. }) if from == to => from.clone(),
        _ => return Err(()),
    })
}
