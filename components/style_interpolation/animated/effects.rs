/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animated types for CSS values related to effects.

use itertools::{EitherOrBoth, Itertools};
use log::debug;

use super::color::animate_color;
use super::{
    AllowDiscrete, Animate, AnimationContext, Procedure, animate_component, animate_discrete,
    animate_length_percentage, interpolate_discrete,
};
use crate::calc::{CalculationContext, NumericRange};
use crate::dom::TElement;
use crate::values::effects::ColorFilterKind;
use crate::values::{Angle, Color, FilterValue, FilterValueList, Keyword, Separator};
use crate::values::{Shadow, StyleValue, StyleValueKind, ValueList};

/// Flattens a `box-shadow` or `text-shadow` value into its shadows.
fn shadow_list(value: &StyleValue) -> Option<Vec<Shadow>> {
    match *value.kind() {
        StyleValueKind::Keyword(Keyword::None) => Some(vec![]),
        StyleValueKind::Shadow(ref shadow) => Some(vec![shadow.clone()]),
        StyleValueKind::ValueList(ref list) => list
            .values
            .iter()
            .map(|value| match *value.kind() {
                StyleValueKind::Shadow(ref shadow) => Some(shadow.clone()),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}

/// Interpolates two shadow lists, padding the shorter one with transparent
/// shadows, or steps between them if that fails.
///
/// <https://drafts.csswg.org/css-transitions/#animtype-shadow-list>
pub fn interpolate_box_shadow(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    let context = AnimationContext::new(element, calculation_context);
    let interpolated = match (shadow_list(from), shadow_list(to)) {
        (Some(from_list), Some(to_list)) => {
            let procedure = Procedure::Interpolate { progress };
            animate_shadow_lists(&context, &from_list, &to_list, procedure)
        },
        _ => Err(()),
    };
    match interpolated {
        Ok(shadows) if shadows.is_empty() => Some(StyleValue::keyword(Keyword::None)),
        Ok(shadows) => {
            let values = shadows.into_iter().map(StyleValue::from).collect();
            Some(ValueList::new(values, Separator::Comma).into())
        },
        Err(()) => interpolate_discrete(from, to, progress, allow_discrete),
    }
}

fn animate_shadow_lists(
    context: &AnimationContext,
    from: &[Shadow],
    to: &[Shadow],
    procedure: Procedure,
) -> Result<Vec<Shadow>, ()> {
    from.iter()
        .zip_longest(to.iter())
        .map(|shadows| match shadows {
            EitherOrBoth::Both(from, to) => animate_shadow(context, from, to, procedure),
            EitherOrBoth::Left(from) => {
                animate_shadow(context, from, &Shadow::transparent(from.placement), procedure)
            },
            EitherOrBoth::Right(to) => {
                animate_shadow(context, &Shadow::transparent(to.placement), to, procedure)
            },
        })
        .collect()
}

/// Animates a single shadow. Inset and outer shadows snap at the halfway
/// point.
pub(crate) fn animate_shadow(
    context: &AnimationContext,
    from: &Shadow,
    to: &Shadow,
    procedure: Procedure,
) -> Result<Shadow, ()> {
    let placement = animate_discrete(&from.placement, &to.placement, procedure)?;
    let length = |from: &StyleValue, to: &StyleValue, range| {
        animate_length_percentage(context, from, to, procedure, range)
    };
    Ok(Shadow {
        color: animate_component(context, &from.color, &to.color, procedure)?,
        offset_x: length(&from.offset_x, &to.offset_x, None)?,
        offset_y: length(&from.offset_y, &to.offset_y, None)?,
        blur_radius: length(&from.blur_radius, &to.blur_radius, Some(NumericRange::NON_NEGATIVE))?,
        spread_distance: length(&from.spread_distance, &to.spread_distance, None)?,
        placement,
    })
}

/// The filters of a `filter` or `backdrop-filter` value, `none` being
/// empty.
fn filter_list(value: &StyleValue) -> Option<&[FilterValue]> {
    match *value.kind() {
        StyleValueKind::Keyword(Keyword::None) => Some(&[][..]),
        StyleValueKind::FilterValueList(ref list) => Some(&list.0),
        _ => None,
    }
}

/// Interpolates two filter lists, or steps between them if that fails.
///
/// `none` and missing trailing filters are treated as the identity of the
/// filter on the other side. Lists with a `url()` never interpolate.
///
/// <https://drafts.fxtf.org/filter-effects/#interpolation-of-filters>
pub fn interpolate_filter_value_list(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    let context = AnimationContext::new(element, calculation_context);
    let interpolated = match (filter_list(from), filter_list(to)) {
        (Some(from_list), Some(to_list)) => {
            animate_filter_lists(&context, from_list, to_list, Procedure::Interpolate { progress })
        },
        _ => Err(()),
    };
    match interpolated {
        Ok(list) if list.0.is_empty() => Some(StyleValue::keyword(Keyword::None)),
        Ok(list) => Some(list.into()),
        Err(()) => interpolate_discrete(from, to, progress, allow_discrete),
    }
}

pub(crate) fn animate_filter_lists(
    context: &AnimationContext,
    from: &[FilterValue],
    to: &[FilterValue],
    procedure: Procedure,
) -> Result<FilterValueList, ()> {
    if from.iter().chain(to.iter()).any(FilterValue::is_url) {
        debug!("Filter lists with url() don't interpolate");
        return Err(());
    }
    from.iter()
        .zip_longest(to.iter())
        .map(|filters| match filters {
            EitherOrBoth::Both(from, to) => animate_filter(context, from, to, procedure),
            EitherOrBoth::Left(from) => {
                animate_filter(context, from, &from.to_identity().ok_or(())?, procedure)
            },
            EitherOrBoth::Right(to) => {
                animate_filter(context, &to.to_identity().ok_or(())?, to, procedure)
            },
        })
        .collect::<Result<Vec<_>, _>>()
        .map(FilterValueList)
}

/// The amount a color filter function takes when it's omitted.
const DEFAULT_COLOR_FILTER_AMOUNT: f32 = 1.;

/// Animates an optional length argument, `None` being `0px`.
fn animate_filter_length(
    context: &AnimationContext,
    from: Option<&StyleValue>,
    to: Option<&StyleValue>,
    procedure: Procedure,
    range: Option<NumericRange>,
) -> Result<StyleValue, ()> {
    let zero = StyleValue::px(0.);
    let from = from.unwrap_or(&zero);
    let to = to.unwrap_or(&zero);
    animate_length_percentage(context, from, to, procedure, range)
}

fn animate_filter(
    context: &AnimationContext,
    from: &FilterValue,
    to: &FilterValue,
    procedure: Procedure,
) -> Result<FilterValue, ()> {
    let non_negative = Some(NumericRange::NON_NEGATIVE);
    Ok(match (from, to) {
        (FilterValue::Blur(from), FilterValue::Blur(to)) => {
            let radius = animate_filter_length(
                context,
                from.as_ref(),
                to.as_ref(),
                procedure,
                non_negative,
            )?;
            FilterValue::Blur(Some(radius))
        },
        (
            &FilterValue::Color { kind: from_kind, amount: from_amount },
            &FilterValue::Color { kind: to_kind, amount: to_amount },
        ) => {
            let kind = animate_discrete(&from_kind, &to_kind, procedure)?;
            let amount = from_amount
                .unwrap_or(DEFAULT_COLOR_FILTER_AMOUNT)
                .animate(&to_amount.unwrap_or(DEFAULT_COLOR_FILTER_AMOUNT), procedure)?;
            FilterValue::Color {
                kind,
                amount: Some(clamp_filter_amount(kind, amount)),
            }
        },
        (&FilterValue::HueRotate(from), &FilterValue::HueRotate(to)) => {
            let angle = from
                .unwrap_or_else(Angle::zero)
                .animate(&to.unwrap_or_else(Angle::zero), procedure)?;
            FilterValue::HueRotate(Some(angle))
        },
        (
            FilterValue::DropShadow {
                offset_x: from_x,
                offset_y: from_y,
                radius: from_radius,
                color: from_color,
            },
            FilterValue::DropShadow {
                offset_x: to_x,
                offset_y: to_y,
                radius: to_radius,
                color: to_color,
            },
        ) => {
            let radius = animate_filter_length(
                context,
                from_radius.as_ref(),
                to_radius.as_ref(),
                procedure,
                non_negative,
            )?;
            let color = animate_color(
                context,
                &from_color.unwrap_or(Color::CurrentColor),
                &to_color.unwrap_or(Color::CurrentColor),
                procedure,
            )?;
            let StyleValueKind::Color(color) = *color.kind() else {
                return Err(());
            };
            FilterValue::DropShadow {
                offset_x: animate_length_percentage(context, from_x, to_x, procedure, None)?,
                offset_y: animate_length_percentage(context, from_y, to_y, procedure, None)?,
                radius: Some(radius),
                color: Some(color),
            }
        },
        _ => return Err(()),
    })
}

/// Amounts are never negative, and some filters saturate at `100%`.
fn clamp_filter_amount(kind: ColorFilterKind, amount: f32) -> f32 {
    match kind {
        ColorFilterKind::Grayscale |
        ColorFilterKind::Invert |
        ColorFilterKind::Opacity |
        ColorFilterKind::Sepia => amount.clamp(0., 1.),
        ColorFilterKind::Brightness | ColorFilterKind::Contrast | ColorFilterKind::Saturate => {
            amount.max(0.)
        },
    }
}
