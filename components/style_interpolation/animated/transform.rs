/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animated values for transform lists.
//!
//! <https://drafts.csswg.org/css-transforms-2/#interpolation-of-transforms>

use log::{debug, trace};

use super::matrix::{Quaternion, interpolate_matrices, slerp};
use super::{
    AllowDiscrete, AnimationContext, CompositeOperation, Procedure, animate_value,
    interpolate_value_in,
};
use crate::calc::{CalculationContext, ValueType};
use crate::dom::TElement;
use crate::values::transform::{ComputedMatrix, list_to_matrix, resolve_angle, resolve_number};
use crate::values::{CSSFloat, Keyword, Separator, StyleValue, StyleValueKind};
use crate::values::{TransformFunction, Transformation, ValueList};

/// Splits a `transform` value into its functions. `none` is the empty
/// list; anything else isn't a transform.
pub fn transform_list(value: &StyleValue) -> Option<Vec<Transformation>> {
    match *value.kind() {
        StyleValueKind::Keyword(Keyword::None) => Some(vec![]),
        StyleValueKind::Transformation(ref transformation) => Some(vec![transformation.clone()]),
        StyleValueKind::ValueList(ref list) => list
            .values
            .iter()
            .map(|value| value.as_transformation().cloned())
            .collect(),
        _ => None,
    }
}

fn to_value(transformations: Vec<Transformation>) -> StyleValue {
    if transformations.is_empty() {
        return StyleValue::keyword(Keyword::None);
    }
    let values = transformations.into_iter().map(StyleValue::from).collect();
    ValueList::new(values, Separator::Space).into()
}

/// Interpolates two `transform` values.
///
/// Functions are interpolated pairwise for as long as both lists agree on a
/// shared primitive. The rest of both lists is multiplied out into matrices
/// which are interpolated by decomposition. Fails if a matrix can't be
/// built or decomposed.
pub fn interpolate_transform(
    element: &dyn TElement,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
) -> Option<StyleValue> {
    if from.is_keyword(Keyword::None) && to.is_keyword(Keyword::None) {
        return Some(from.clone());
    }
    let mut from_list = transform_list(from)?;
    let mut to_list = transform_list(to)?;

    let length = from_list.len().max(to_list.len());
    for index in from_list.len()..length {
        from_list.push(to_list[index].to_identity());
    }
    for index in to_list.len()..length {
        to_list.push(from_list[index].to_identity());
    }

    let calculation_context = CalculationContext::for_percentages_as(ValueType::Length);
    let context = AnimationContext::new(element, &calculation_context);

    let mut result = Vec::with_capacity(length);
    let mut index = 0;
    while index < length {
        let (from, to) = (&from_list[index], &to_list[index]);
        match interpolate_transform_function(&context, from, to, progress) {
            Ok(Some(transformation)) => result.push(transformation),
            Ok(None) => break,
            Err(()) => {
                debug!("Can't interpolate {:?} and {:?}", from, to);
                return None;
            },
        }
        index += 1;
    }

    if index < length {
        trace!("Interpolating transform functions {}.. as matrices", index);
        let resolution_context = element.transform_resolution_context();
        let from_matrix = list_to_matrix(&from_list[index..], &resolution_context).ok()?;
        let to_matrix = list_to_matrix(&to_list[index..], &resolution_context).ok()?;
        let matrix = interpolate_matrices(&from_matrix, &to_matrix, progress)?;
        result.push(Transformation::matrix3d(&matrix));
    }

    Some(to_value(result))
}

/// The primitive both functions can be expressed as, if any.
///
/// <https://drafts.csswg.org/css-transforms-2/#transform-primitives>
fn shared_primitive(from: TransformFunction, to: TransformFunction) -> Option<TransformFunction> {
    use crate::values::TransformFunction::*;

    let three_d = from.is_3d() || to.is_3d();
    let is_translate = |f: TransformFunction| {
        matches!(f, Translate | Translate3d | TranslateX | TranslateY | TranslateZ)
    };
    let is_scale = |f: TransformFunction| matches!(f, Scale | Scale3d | ScaleX | ScaleY | ScaleZ);
    let is_rotate = |f: TransformFunction| {
        matches!(f, Rotate | Rotate3d | RotateX | RotateY | RotateZ)
    };
    let is_skew = |f: TransformFunction| matches!(f, Skew | SkewX | SkewY);

    Some(if is_translate(from) && is_translate(to) {
        if three_d { Translate3d } else { Translate }
    } else if is_scale(from) && is_scale(to) {
        if three_d { Scale3d } else { Scale }
    } else if is_rotate(from) && is_rotate(to) {
        if three_d { Rotate3d } else { Rotate }
    } else if is_skew(from) && is_skew(to) {
        Skew
    } else {
        return None;
    })
}

/// Rewrites `transformation` as `primitive`, spelling out every argument.
pub(crate) fn expand_to_primitive(
    transformation: &Transformation,
    primitive: TransformFunction,
) -> Transformation {
    use crate::values::TransformFunction::*;

    let arg = |index: usize| transformation.values.get(index).cloned();
    let zero_px = || StyleValue::px(0.);
    let one = || StyleValue::number(1.);
    let zero_deg = || StyleValue::degrees(0.);
    let number = StyleValue::number;
    let angle = || arg(0).unwrap_or_else(zero_deg);

    let values = match (primitive, transformation.function) {
        (Translate, Translate) => {
            vec![arg(0).unwrap_or_else(zero_px), arg(1).unwrap_or_else(zero_px)]
        },
        (Translate, TranslateX) => vec![arg(0).unwrap_or_else(zero_px), zero_px()],
        (Translate, TranslateY) => vec![zero_px(), arg(0).unwrap_or_else(zero_px)],
        (Translate3d, Translate | Translate3d) => vec![
            arg(0).unwrap_or_else(zero_px),
            arg(1).unwrap_or_else(zero_px),
            arg(2).unwrap_or_else(zero_px),
        ],
        (Translate3d, TranslateX) => vec![arg(0).unwrap_or_else(zero_px), zero_px(), zero_px()],
        (Translate3d, TranslateY) => vec![zero_px(), arg(0).unwrap_or_else(zero_px), zero_px()],
        (Translate3d, TranslateZ) => vec![zero_px(), zero_px(), arg(0).unwrap_or_else(zero_px)],
        (Scale, Scale) => {
            let sx = arg(0).unwrap_or_else(one);
            vec![sx.clone(), arg(1).unwrap_or(sx)]
        },
        (Scale, ScaleX) => vec![arg(0).unwrap_or_else(one), one()],
        (Scale, ScaleY) => vec![one(), arg(0).unwrap_or_else(one)],
        (Scale3d, Scale) => {
            let sx = arg(0).unwrap_or_else(one);
            vec![sx.clone(), arg(1).unwrap_or(sx), one()]
        },
        (Scale3d, Scale3d) => vec![
            arg(0).unwrap_or_else(one),
            arg(1).unwrap_or_else(one),
            arg(2).unwrap_or_else(one),
        ],
        (Scale3d, ScaleX) => vec![arg(0).unwrap_or_else(one), one(), one()],
        (Scale3d, ScaleY) => vec![one(), arg(0).unwrap_or_else(one), one()],
        (Scale3d, ScaleZ) => vec![one(), one(), arg(0).unwrap_or_else(one)],
        (Rotate, _) => vec![arg(0).unwrap_or_else(zero_deg)],
        (Rotate3d, Rotate3d) => transformation.values.clone(),
        (Rotate3d, RotateX) => vec![number(1.), number(0.), number(0.), angle()],
        (Rotate3d, RotateY) => vec![number(0.), number(1.), number(0.), angle()],
        (Rotate3d, _) => vec![number(0.), number(0.), number(1.), angle()],
        (Skew, Skew) => vec![arg(0).unwrap_or_else(zero_deg), arg(1).unwrap_or_else(zero_deg)],
        (Skew, SkewX) => vec![arg(0).unwrap_or_else(zero_deg), zero_deg()],
        (Skew, SkewY) => vec![zero_deg(), arg(0).unwrap_or_else(zero_deg)],
        _ => transformation.values.clone(),
    };
    Transformation::new(primitive, values)
}

/// Interpolates a single pair of transform functions.
///
/// Returns `Ok(None)` when the functions have no shared primitive, and
/// `Err(())` when they do but an argument fails to interpolate.
fn interpolate_transform_function(
    context: &AnimationContext,
    from: &Transformation,
    to: &Transformation,
    progress: f64,
) -> Result<Option<Transformation>, ()> {
    use crate::values::TransformFunction::*;

    if matches!(from.function, Matrix | Matrix3d | Perspective) ||
        matches!(to.function, Matrix | Matrix3d | Perspective)
    {
        return Ok(None);
    }

    let (from, to) = if from.function == to.function &&
        from.values.len() == to.values.len() &&
        from.function != Rotate3d
    {
        (from.clone(), to.clone())
    } else {
        let Some(primitive) = shared_primitive(from.function, to.function) else {
            return Ok(None);
        };
        (expand_to_primitive(from, primitive), expand_to_primitive(to, primitive))
    };

    if from.function == Rotate3d {
        return interpolate_rotate3d(context, &from, &to, progress, true).map(Some);
    }

    let values = from
        .values
        .iter()
        .zip(to.values.iter())
        .map(|(from, to)| {
            interpolate_value_in(context, from, to, progress, AllowDiscrete::No).ok_or(())
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(Transformation::new(from.function, values)))
}

/// The normalized axis and the angle (in radians) of a `rotate3d()`.
pub(crate) fn rotate3d_components(transformation: &Transformation) -> Result<([f64; 3], f64), ()> {
    let [x, y, z, angle] = transformation.values.as_slice() else {
        return Err(());
    };
    let axis = [resolve_number(x)?, resolve_number(y)?, resolve_number(z)?].map(|v| v as f64);
    let length = axis.iter().map(|v| v * v).sum::<f64>().sqrt();
    let axis = if length == 0. {
        [0., 0., 1.]
    } else {
        axis.map(|v| v / length)
    };
    Ok((axis, resolve_angle(angle)? as f64))
}

fn same_axis(a: &[f64; 3], b: &[f64; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(a, b)| (a - b).abs() < f32::EPSILON as f64)
}

/// Interpolates two rotations about arbitrary axes.
///
/// Rotations about the same axis only interpolate their angle. A rotation
/// by zero takes the other side's axis. Anything else is interpolated as a
/// quaternion, unless `allow_slerp` is false.
pub(crate) fn interpolate_rotate3d(
    context: &AnimationContext,
    from: &Transformation,
    to: &Transformation,
    progress: f64,
    allow_slerp: bool,
) -> Result<Transformation, ()> {
    let (mut from_axis, from_angle) = rotate3d_components(from)?;
    let (mut to_axis, to_angle) = rotate3d_components(to)?;
    if from_angle == 0. {
        from_axis = to_axis;
    } else if to_angle == 0. {
        to_axis = from_axis;
    }

    let axis_values = |axis: [f64; 3]| axis.map(|v| StyleValue::number(v as CSSFloat));

    if same_axis(&from_axis, &to_axis) {
        let (from_angle, to_angle) = (&from.values[3], &to.values[3]);
        let angle = interpolate_value_in(context, from_angle, to_angle, progress, AllowDiscrete::No)
            .ok_or(())?;
        let mut values = axis_values(from_axis).to_vec();
        values.push(angle);
        return Ok(Transformation::new(TransformFunction::Rotate3d, values));
    }

    if !allow_slerp {
        return Err(());
    }
    let quaternion = |[x, y, z]: [f64; 3], angle: f64| Quaternion::from_axis_angle(x, y, z, angle);
    let from_quaternion = quaternion(from_axis, from_angle);
    let to_quaternion = quaternion(to_axis, to_angle);
    let ((x, y, z), angle) = slerp(from_quaternion, to_quaternion, progress).to_axis_angle();
    let mut values = axis_values([x, y, z]).to_vec();
    values.push(StyleValue::degrees(angle.to_degrees() as CSSFloat));
    Ok(Transformation::new(TransformFunction::Rotate3d, values))
}

/// Composites two transform lists, if either side is one.
///
/// Addition appends the animated list to the underlying one. Accumulation
/// combines the lists function by function, and fails unless every pair
/// shares a primitive other than a matrix or a perspective.
///
/// <https://drafts.csswg.org/css-transforms-2/#combining-transform-lists>
pub(crate) fn composite_transform(
    element: &dyn TElement,
    underlying: &StyleValue,
    animated: &StyleValue,
    operation: CompositeOperation,
) -> Option<Option<StyleValue>> {
    let is_functions = |value: &StyleValue| match *value.kind() {
        StyleValueKind::Transformation(..) => true,
        StyleValueKind::ValueList(ref list) => {
            !list.is_empty() && list.values.iter().all(|value| value.as_transformation().is_some())
        },
        _ => false,
    };
    if !is_functions(underlying) && !is_functions(animated) {
        return None;
    }
    let (Some(mut underlying), Some(animated)) =
        (transform_list(underlying), transform_list(animated))
    else {
        return Some(None);
    };
    match operation {
        CompositeOperation::Replace => Some(None),
        CompositeOperation::Add => {
            underlying.extend(animated);
            Some(Some(to_value(underlying)))
        },
        CompositeOperation::Accumulate => {
            let calculation_context = CalculationContext::for_percentages_as(ValueType::Length);
            let context = AnimationContext::new(element, &calculation_context);
            Some(accumulate_transform_lists(&context, underlying, animated).ok().map(to_value))
        },
    }
}

fn accumulate_transform_lists(
    context: &AnimationContext,
    mut underlying: Vec<Transformation>,
    mut animated: Vec<Transformation>,
) -> Result<Vec<Transformation>, ()> {
    for index in underlying.len()..animated.len() {
        underlying.push(animated[index].to_identity());
    }
    for index in animated.len()..underlying.len() {
        animated.push(underlying[index].to_identity());
    }
    underlying
        .iter()
        .zip(animated.iter())
        .map(|(underlying, animated)| accumulate_transform_function(context, underlying, animated))
        .collect()
}

/// Scale factors add their offsets from one, so `scale(2)` accumulated onto
/// `scale(3)` is `scale(4)`. Every other argument adds.
fn accumulate_transform_function(
    context: &AnimationContext,
    underlying: &Transformation,
    animated: &Transformation,
) -> Result<Transformation, ()> {
    use crate::values::TransformFunction::*;

    let procedure = Procedure::Accumulate { count: 1 };
    let unsupported =
        |function: TransformFunction| matches!(function, Matrix | Matrix3d | Perspective);
    if unsupported(underlying.function) || unsupported(animated.function) {
        return Err(());
    }
    let (underlying, animated) = if underlying.function == animated.function &&
        underlying.values.len() == animated.values.len() &&
        underlying.function != Rotate3d
    {
        (underlying.clone(), animated.clone())
    } else {
        let primitive = shared_primitive(underlying.function, animated.function).ok_or(())?;
        (
            expand_to_primitive(underlying, primitive),
            expand_to_primitive(animated, primitive),
        )
    };

    if underlying.function == Rotate3d {
        let (underlying_axis, underlying_angle) = rotate3d_components(&underlying)?;
        let (animated_axis, animated_angle) = rotate3d_components(&animated)?;
        let axis = if underlying_angle == 0. {
            &animated.values[..3]
        } else if animated_angle == 0. || same_axis(&underlying_axis, &animated_axis) {
            &underlying.values[..3]
        } else {
            return Err(());
        };
        let angle = animate_value(context, &underlying.values[3], &animated.values[3], procedure)?;
        let mut values = axis.to_vec();
        values.push(angle);
        return Ok(Transformation::new(Rotate3d, values));
    }

    let is_scale = matches!(underlying.function, Scale | Scale3d | ScaleX | ScaleY | ScaleZ);
    let values = underlying
        .values
        .iter()
        .zip(animated.values.iter())
        .map(|(underlying, animated)| {
            if is_scale {
                let factor = resolve_number(underlying)? + resolve_number(animated)? - 1.;
                return Ok(StyleValue::number(factor));
            }
            animate_value(context, underlying, animated, procedure)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Transformation::new(underlying.function, values))
}

/// The matrix of a whole transform value, `none` being the identity.
pub fn transform_to_matrix(element: &dyn TElement, value: &StyleValue) -> Option<ComputedMatrix> {
    let list = transform_list(value)?;
    list_to_matrix(&list, &element.transform_resolution_context()).ok()
}
