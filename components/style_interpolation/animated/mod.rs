/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animated values.
//!
//! Interpolation, addition and accumulation of resolved values all go
//! through the same per-kind structural recursion, parameterised by a
//! [`Procedure`]. Internally every rule answers `Result<_, ()>`, where
//! `Err(())` means "no continuous rule applies"; the public entry points turn
//! that into an `Option` and, for interpolation, fall back to a discrete
//! step.

use std::mem;

use log::trace;
use num_traits::{Bounded, NumCast, ToPrimitive};

use crate::calc::{CalculationContext, NumericRange, ValueType};
use crate::dom::TElement;
use crate::values::position::{BackgroundSize, BorderImageSlice, BorderRadius, Edge, Position};
use crate::values::{Angle, CSSFloat, CSSInteger, FontStyle, Frequency, Length, OpenTypeTagged};
use crate::values::{Percentage, Ratio, Rect, Resolution, StyleValue, Superellipse, Time, ValueList};

pub mod color;
pub mod effects;
pub mod grid;
pub mod list;
pub mod matrix;
pub mod mixed;
pub mod shape;
pub mod transform;

/// A procedure to be applied by [`Animate::animate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Procedure {
    /// <https://drafts.csswg.org/web-animations/#animation-interpolation>
    Interpolate { progress: f64 },
    /// <https://drafts.csswg.org/web-animations/#animation-addition>
    Add,
    /// <https://drafts.csswg.org/web-animations/#animation-accumulation>
    Accumulate { count: u64 },
}

impl Procedure {
    /// Returns this procedure as a pair of weights.
    ///
    /// This is useful for animations that don't animate differently
    /// depending on the used procedure.
    #[inline]
    pub fn weights(self) -> (f64, f64) {
        match self {
            Procedure::Interpolate { progress } => (1. - progress, progress),
            Procedure::Add => (1., 1.),
            Procedure::Accumulate { count } => (count as f64, 1.),
        }
    }
}

/// Animate from one value to another.
///
/// This trait is derived the usual way for values whose animation doesn't
/// need any context; values made of other [`StyleValue`]s go through
/// [`animate_value`] instead.
pub trait Animate: Sized {
    /// Animate a value towards another one, given an animation procedure.
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()>;
}

/// Whether the caller accepts a discrete step when no continuous rule
/// applies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AllowDiscrete {
    Yes,
    No,
}

/// How an animated value combines with the underlying value.
///
/// <https://drafts.csswg.org/web-animations/#animation-composite-operation>
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompositeOperation {
    Replace,
    Add,
    Accumulate,
}

/// A numeric primitive that [`interpolate_raw`] understands.
pub trait RawNumeric: Copy + Bounded + NumCast + ToPrimitive {
    /// Whether results have to be rounded to an integer.
    const INTEGRAL: bool;
}

macro_rules! raw_numeric {
    ($integral:expr => $($ty:ty),+) => {
        $(impl RawNumeric for $ty {
            const INTEGRAL: bool = $integral;
        })+
    };
}

raw_numeric!(false => f32, f64);
raw_numeric!(true => u8, i32, i64);

/// `from + (to - from) * progress`, clamped to `range` if given.
///
/// Integral types are computed in floating point, rounded half away from
/// zero, and clamped to the range or to the type's own bounds.
pub fn interpolate_raw<T: RawNumeric>(
    from: T,
    to: T,
    progress: f64,
    range: Option<NumericRange>,
) -> T {
    animate_raw(from, to, Procedure::Interpolate { progress }, range)
}

/// Like [`interpolate_raw`], for any [`Procedure`].
pub fn animate_raw<T: RawNumeric>(
    from: T,
    to: T,
    procedure: Procedure,
    range: Option<NumericRange>,
) -> T {
    let from_value = from.to_f64().unwrap_or_default();
    let to_value = to.to_f64().unwrap_or_default();
    let mut result = match procedure {
        Procedure::Interpolate { progress } => from_value + (to_value - from_value) * progress,
        _ => {
            let (from_weight, to_weight) = procedure.weights();
            from_value * from_weight + to_value * to_weight
        },
    };
    if let Some(range) = range {
        result = range.clamp(result);
    }
    if T::INTEGRAL {
        let min = T::min_value().to_f64().unwrap_or(f64::MIN);
        let max = T::max_value().to_f64().unwrap_or(f64::MAX);
        result = result.round().max(min).min(max);
    }
    T::from(result).unwrap_or(from)
}

impl Animate for f32 {
    #[inline]
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(animate_raw(*self, *other, procedure, None))
    }
}

impl Animate for f64 {
    #[inline]
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(animate_raw(*self, *other, procedure, None))
    }
}

impl Animate for Percentage {
    #[inline]
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(Percentage(self.0.animate(&other.0, procedure)?))
    }
}

impl Animate for Length {
    /// Lengths in the same unit, or both in absolute units, animate
    /// directly. Anything else needs a `calc()`.
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        if self.unit == other.unit {
            return Ok(Length::new(self.value.animate(&other.value, procedure)?, self.unit));
        }
        let from = self.absolute_px().ok_or(())?;
        let to = other.absolute_px().ok_or(())?;
        Ok(Length::px(from.animate(&to, procedure)?))
    }
}

impl Animate for Angle {
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        if self.unit == other.unit {
            return Ok(Angle::new(self.value.animate(&other.value, procedure)?, self.unit));
        }
        Ok(Angle::from_degrees(self.degrees().animate(&other.degrees(), procedure)?))
    }
}

impl Animate for Time {
    #[inline]
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(Time::from_seconds(self.seconds().animate(&other.seconds(), procedure)?))
    }
}

impl Animate for Frequency {
    #[inline]
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(Frequency::from_hertz(self.hertz().animate(&other.hertz(), procedure)?))
    }
}

impl Animate for Resolution {
    #[inline]
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(Resolution::from_dppx(self.dppx().animate(&other.dppx(), procedure)?))
    }
}

impl Animate for Ratio {
    /// <https://drafts.csswg.org/css-values/#combine-ratio>
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        let Procedure::Interpolate { progress } = procedure else {
            return Err(());
        };
        if self.is_degenerate() || other.is_degenerate() {
            return Err(());
        }
        let from = (self.value() as f64).ln();
        let to = (other.value() as f64).ln();
        let value = interpolate_raw(from, to, progress, None).exp();
        Ok(Ratio::new(value as CSSFloat, 1.))
    }
}

/// What a single value-level animation step is evaluated against.
#[derive(Clone, Copy)]
pub struct AnimationContext<'a> {
    pub element: &'a dyn TElement,
    pub calculation_context: &'a CalculationContext,
}

impl<'a> AnimationContext<'a> {
    pub fn new(element: &'a dyn TElement, calculation_context: &'a CalculationContext) -> Self {
        AnimationContext { element, calculation_context }
    }

    #[inline]
    fn range_for(&self, value_type: ValueType) -> Option<NumericRange> {
        self.calculation_context.range_for(value_type)
    }

    /// Integers take the number range unless they have their own.
    #[inline]
    pub(crate) fn integer_range(&self) -> Option<NumericRange> {
        self.range_for(ValueType::Integer).or_else(|| self.range_for(ValueType::Number))
    }
}

#[inline]
fn restrict(value: CSSFloat, range: Option<NumericRange>) -> CSSFloat {
    match range {
        Some(range) => range.clamp(value as f64) as CSSFloat,
        None => value,
    }
}

/// Picks one side at the halfway point. Only interpolation can do that, so
/// addition and accumulation of different values fail.
pub(crate) fn animate_discrete<T: Clone + PartialEq>(
    from: &T,
    to: &T,
    procedure: Procedure,
) -> Result<T, ()> {
    if from == to {
        return Ok(from.clone());
    }
    match procedure {
        Procedure::Interpolate { progress } if progress >= 0.5 => Ok(to.clone()),
        Procedure::Interpolate { .. } => Ok(from.clone()),
        Procedure::Add | Procedure::Accumulate { .. } => Err(()),
    }
}

/// Rounds a number resolved for an integer-valued property, half away from
/// zero, after clamping it to `range`.
pub(crate) fn round_to_integer(value: f64, range: Option<NumericRange>) -> CSSInteger {
    let value = range.map_or(value, |range| range.clamp(value));
    // `as` saturates at the integer bounds.
    value.round() as CSSInteger
}

/// Steps from `from` to `to` at the halfway point.
///
/// Equal values always pass through, even when discrete steps aren't
/// allowed.
pub fn interpolate_discrete(
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    if from.equals(to) {
        return Some(from.clone());
    }
    if allow_discrete == AllowDiscrete::No {
        return None;
    }
    Some(if progress >= 0.5 { to.clone() } else { from.clone() })
}

/// Interpolates two values of the same property slot, falling back to a
/// discrete step when `allow_discrete` permits it.
pub fn interpolate_value(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    let context = AnimationContext::new(element, calculation_context);
    interpolate_value_in(&context, from, to, progress, allow_discrete)
}

pub(crate) fn interpolate_value_in(
    context: &AnimationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    match animate_value(context, from, to, Procedure::Interpolate { progress }) {
        Ok(value) => Some(value),
        Err(()) => interpolate_discrete(from, to, progress, allow_discrete),
    }
}

/// Interpolates two values with a continuous rule only.
pub fn interpolate_value_impl(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
) -> Option<StyleValue> {
    let context = AnimationContext::new(element, calculation_context);
    animate_value(&context, from, to, Procedure::Interpolate { progress }).ok()
}

/// Animates a component of a larger value. Interpolation lets equal
/// components through unchanged, but never steps discretely.
pub(crate) fn animate_component(
    context: &AnimationContext,
    from: &StyleValue,
    to: &StyleValue,
    procedure: Procedure,
) -> Result<StyleValue, ()> {
    match procedure {
        Procedure::Interpolate { progress } => {
            interpolate_value_in(context, from, to, progress, AllowDiscrete::No).ok_or(())
        },
        _ => animate_value(context, from, to, procedure),
    }
}

/// Animates a length-percentage component, whatever the percentages of the
/// enclosing property resolve against.
pub(crate) fn animate_length_percentage(
    context: &AnimationContext,
    from: &StyleValue,
    to: &StyleValue,
    procedure: Procedure,
    range: Option<NumericRange>,
) -> Result<StyleValue, ()> {
    let mut calculation_context = CalculationContext::for_percentages_as(ValueType::Length);
    if let Some(range) = range {
        calculation_context = calculation_context
            .with_range(ValueType::Length, range)
            .with_range(ValueType::Percentage, range);
    }
    let context = AnimationContext::new(context.element, &calculation_context);
    animate_component(&context, from, to, procedure)
}

/// The per-kind animation rules.
pub fn animate_value(
    context: &AnimationContext,
    from: &StyleValue,
    to: &StyleValue,
    procedure: Procedure,
) -> Result<StyleValue, ()> {
    use crate::values::StyleValueKind as K;

    Ok(match (from.kind(), to.kind()) {
        (&K::Transformation(..), _) | (_, &K::Transformation(..)) => {
            unreachable!("transform functions are only animated as part of a transform list")
        },
        (&K::Calculated(..), _) | (_, &K::Calculated(..)) => {
            return mixed::animate_mixed_value(context, from, to, procedure);
        },
        (&K::Angle(ref a), &K::Angle(ref b)) => {
            let angle = a.animate(b, procedure)?;
            let range = context.range_for(ValueType::Angle);
            Angle::new(restrict(angle.value, range), angle.unit).into()
        },
        (&K::Length(ref a), &K::Length(ref b)) => match a.animate(b, procedure) {
            Ok(length) => {
                let range = context.range_for(ValueType::Length);
                Length::new(restrict(length.value, range), length.unit).into()
            },
            Err(()) => return mixed::animate_mixed_value(context, from, to, procedure),
        },
        (&K::Number(a), &K::Number(b)) => {
            StyleValue::number(animate_raw(a, b, procedure, context.range_for(ValueType::Number)))
        },
        (&K::Integer(a), &K::Integer(b)) => {
            StyleValue::integer(animate_raw(a, b, procedure, context.integer_range()))
        },
        (&K::Percentage(a), &K::Percentage(b)) => {
            let percentage = a.animate(&b, procedure)?;
            Percentage(restrict(percentage.0, context.range_for(ValueType::Percentage))).into()
        },
        (&K::Flex(a), &K::Flex(b)) => {
            StyleValue::flex(animate_raw(a, b, procedure, context.range_for(ValueType::Flex)))
        },
        (&K::Time(ref a), &K::Time(ref b)) => a.animate(b, procedure)?.into(),
        (&K::Frequency(ref a), &K::Frequency(ref b)) => a.animate(b, procedure)?.into(),
        (&K::Resolution(ref a), &K::Resolution(ref b)) => a.animate(b, procedure)?.into(),
        (&K::Color(ref a), &K::Color(ref b)) => color::animate_color(context, a, b, procedure)?,
        (&K::BackgroundSize(ref a), &K::BackgroundSize(ref b)) => {
            animate_background_size(context, a, b, procedure)?.into()
        },
        (&K::BorderImageSlice(ref a), &K::BorderImageSlice(ref b)) => {
            animate_border_image_slice(context, a, b, procedure)?.into()
        },
        (&K::BorderRadius(ref a), &K::BorderRadius(ref b)) => {
            animate_border_radius(context, a, b, procedure)?.into()
        },
        (&K::Position(ref a), &K::Position(ref b)) => {
            animate_position(context, a, b, procedure)?.into()
        },
        (&K::Edge(ref a), &K::Edge(ref b)) => {
            let vertical = a.edge.is_vertical() || b.edge.is_vertical();
            animate_edge(context, a, b, procedure, vertical)?.into()
        },
        (&K::OpenTypeTagged(ref a), &K::OpenTypeTagged(ref b)) => {
            animate_open_type_tagged(context, a, b, procedure)?.into()
        },
        (&K::FontStyle(ref a), &K::FontStyle(ref b)) => {
            animate_font_style(context, a, b, procedure)?.into()
        },
        (&K::Ratio(ref a), &K::Ratio(ref b)) => a.animate(b, procedure)?.into(),
        (&K::Rect(ref a), &K::Rect(ref b)) => animate_rect(context, a, b, procedure)?.into(),
        (&K::Superellipse(ref a), &K::Superellipse(ref b)) => a.animate(b, procedure)?.into(),
        (&K::BasicShape(ref a), &K::BasicShape(ref b)) => {
            shape::animate_basic_shape(context, a, b, procedure)?.into()
        },
        (&K::Shadow(ref a), &K::Shadow(ref b)) => {
            effects::animate_shadow(context, a, b, procedure)?.into()
        },
        (&K::FilterValueList(ref a), &K::FilterValueList(ref b)) => {
            effects::animate_filter_lists(context, &a.0, &b.0, procedure)?.into()
        },
        (&K::GridTrackSizeList(ref a), &K::GridTrackSizeList(ref b)) => {
            grid::animate_grid_track_size_list(context, a, b, procedure)?.into()
        },
        (&K::ValueList(ref a), &K::ValueList(ref b)) => {
            animate_value_list(context, a, b, procedure)?.into()
        },
        (a, b) if mem::discriminant(a) != mem::discriminant(b) => {
            return mixed::animate_mixed_value(context, from, to, procedure);
        },
        _ => {
            trace!("No continuous rule for {:?}", from.kind());
            return Err(());
        },
    })
}

fn animate_value_list(
    context: &AnimationContext,
    from: &ValueList,
    to: &ValueList,
    procedure: Procedure,
) -> Result<ValueList, ()> {
    if from.len() != to.len() {
        return Err(());
    }
    let values = from
        .values
        .iter()
        .zip(to.values.iter())
        .map(|(from, to)| animate_component(context, from, to, procedure))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ValueList::new(values, from.separator))
}

fn animate_background_size(
    context: &AnimationContext,
    from: &BackgroundSize,
    to: &BackgroundSize,
    procedure: Procedure,
) -> Result<BackgroundSize, ()> {
    let range = Some(NumericRange::NON_NEGATIVE);
    Ok(BackgroundSize {
        width: animate_length_percentage(context, &from.width, &to.width, procedure, range)?,
        height: animate_length_percentage(context, &from.height, &to.height, procedure, range)?,
    })
}

fn animate_border_image_slice(
    context: &AnimationContext,
    from: &BorderImageSlice,
    to: &BorderImageSlice,
    procedure: Procedure,
) -> Result<BorderImageSlice, ()> {
    if from.fill != to.fill {
        return Err(());
    }
    let calculation_context = CalculationContext::default()
        .with_range(ValueType::Number, NumericRange::NON_NEGATIVE)
        .with_range(ValueType::Percentage, NumericRange::NON_NEGATIVE);
    let context = AnimationContext::new(context.element, &calculation_context);
    let side =
        |from: &StyleValue, to: &StyleValue| animate_component(&context, from, to, procedure);
    Ok(BorderImageSlice {
        top: side(&from.top, &to.top)?,
        right: side(&from.right, &to.right)?,
        bottom: side(&from.bottom, &to.bottom)?,
        left: side(&from.left, &to.left)?,
        fill: from.fill,
    })
}

/// `auto` sides only animate to `auto`.
fn animate_rect(
    context: &AnimationContext,
    from: &Rect,
    to: &Rect,
    procedure: Procedure,
) -> Result<Rect, ()> {
    let side = |from: &Option<StyleValue>,
                to: &Option<StyleValue>|
     -> Result<Option<StyleValue>, ()> {
        match (from, to) {
            (None, None) => Ok(None),
            (Some(from), Some(to)) => {
                Ok(Some(animate_length_percentage(context, from, to, procedure, None)?))
            },
            _ => Err(()),
        }
    };
    Ok(Rect {
        top: side(&from.top, &to.top)?,
        right: side(&from.right, &to.right)?,
        bottom: side(&from.bottom, &to.bottom)?,
        left: side(&from.left, &to.left)?,
    })
}

fn animate_border_radius(
    context: &AnimationContext,
    from: &BorderRadius,
    to: &BorderRadius,
    procedure: Procedure,
) -> Result<BorderRadius, ()> {
    let range = Some(NumericRange::NON_NEGATIVE);
    Ok(BorderRadius::new(
        animate_length_percentage(context, &from.horizontal, &to.horizontal, procedure, range)?,
        animate_length_percentage(context, &from.vertical, &to.vertical, procedure, range)?,
    ))
}

pub(crate) fn animate_edge(
    context: &AnimationContext,
    from: &Edge,
    to: &Edge,
    procedure: Procedure,
    vertical: bool,
) -> Result<Edge, ()> {
    let from = from.resolved(vertical);
    let to = to.resolved(vertical);
    let (Some(from_offset), Some(to_offset)) = (from.offset.as_ref(), to.offset.as_ref()) else {
        return Err(());
    };
    let offset = animate_length_percentage(context, from_offset, to_offset, procedure, None)?;
    Ok(Edge::new(from.edge, Some(offset)))
}

pub(crate) fn animate_position(
    context: &AnimationContext,
    from: &Position,
    to: &Position,
    procedure: Procedure,
) -> Result<Position, ()> {
    Ok(Position::new(
        animate_edge(context, &from.edge_x, &to.edge_x, procedure, false)?,
        animate_edge(context, &from.edge_y, &to.edge_y, procedure, true)?,
    ))
}

fn animate_open_type_tagged(
    context: &AnimationContext,
    from: &OpenTypeTagged,
    to: &OpenTypeTagged,
    procedure: Procedure,
) -> Result<OpenTypeTagged, ()> {
    if from.mode != to.mode || from.tag != to.tag {
        return Err(());
    }
    let value = animate_component(context, &from.value, &to.value, procedure)?;
    Ok(OpenTypeTagged::new(from.mode, from.tag.clone(), value))
}

fn animate_font_style(
    context: &AnimationContext,
    from: &FontStyle,
    to: &FontStyle,
    procedure: Procedure,
) -> Result<FontStyle, ()> {
    let (Some(from_angle), Some(to_angle)) = (from.angle.as_ref(), to.angle.as_ref()) else {
        // Without two angles there is nothing to interpolate.
        return animate_discrete(from, to, procedure);
    };
    let style = animate_discrete(&from.style, &to.style, procedure)?;
    let angle = animate_component(context, from_angle, to_angle, procedure)?;
    Ok(FontStyle::new(style, Some(angle)))
}

impl Animate for Superellipse {
    /// Superellipses interpolate in "half corner" space, where the corner's
    /// midpoint moves linearly.
    ///
    /// <https://drafts.csswg.org/css-borders-4/#corner-shape-interpolation>
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        let Procedure::Interpolate { progress } = procedure else {
            return Err(());
        };
        let from = superellipse_to_half_corner(self.parameter as f64);
        let to = superellipse_to_half_corner(other.parameter as f64);
        let half_corner = interpolate_raw(from, to, progress, Some(NumericRange::new(0., 1.)));
        Ok(Superellipse::new(half_corner_to_superellipse(half_corner) as CSSFloat))
    }
}

fn superellipse_to_half_corner(parameter: f64) -> f64 {
    if parameter == f64::INFINITY {
        return 1.;
    }
    if parameter == f64::NEG_INFINITY {
        return 0.;
    }
    let convex_half_corner = 0.5_f64.powf(0.5_f64.powf(parameter.abs()));
    if parameter < 0. {
        1. - convex_half_corner
    } else {
        convex_half_corner
    }
}

fn half_corner_to_superellipse(half_corner: f64) -> f64 {
    if half_corner <= 0. {
        return f64::NEG_INFINITY;
    }
    if half_corner >= 1. {
        return f64::INFINITY;
    }
    let convex_half_corner = if half_corner < 0.5 { 1. - half_corner } else { half_corner };
    let parameter = (0.5_f64.ln() / convex_half_corner.ln()).log2();
    let parameter = if half_corner < 0.5 { -parameter } else { parameter };
    // Snap to integers so that e.g. `round` survives a round trip.
    let rounded = parameter.round();
    if (parameter - rounded).abs() < f32::EPSILON as f64 {
        rounded
    } else {
        parameter
    }
}

/// Combines an animated value with the underlying one.
///
/// `Replace` never composites; every other operation adds the two values
/// component-wise. Values of different kinds, or kinds without an addition
/// (like `<ratio>`), don't composite.
pub fn composite_value(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    underlying: &StyleValue,
    animated: &StyleValue,
    operation: CompositeOperation,
) -> Option<StyleValue> {
    let procedure = match operation {
        CompositeOperation::Replace => return None,
        CompositeOperation::Add => Procedure::Add,
        CompositeOperation::Accumulate => Procedure::Accumulate { count: 1 },
    };
    if let Some(result) = transform::composite_transform(element, underlying, animated, operation)
    {
        return result;
    }
    if mem::discriminant(underlying.kind()) != mem::discriminant(animated.kind()) {
        return None;
    }
    let context = AnimationContext::new(element, calculation_context);
    animate_value(&context, underlying, animated, procedure).ok()
}
