/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Property-level interpolation: CSS-wide keyword resolution, and the rules
//! of the properties that don't animate by computed value.

use log::debug;

use super::{AnimationType, PropertyId, animation_type_from_longhand_property};
use super::{IDENTITY_ROTATE, IDENTITY_SCALE, IDENTITY_TRANSLATE, OBLIQUE_0DEG};
use super::{calculation_context_for, property_initial_value};
use crate::animated::effects::{interpolate_box_shadow, interpolate_filter_value_list};
use crate::animated::grid::interpolate_grid_track_size_list;
use crate::animated::list::interpolate_repeatable_list;
use crate::animated::transform::{expand_to_primitive, interpolate_rotate3d, interpolate_transform};
use crate::animated::{AllowDiscrete, AnimationContext, interpolate_discrete, interpolate_value};
use crate::calc::CalculationContext;
use crate::dom::TElement;
use crate::prefs;
use crate::values::{FontStyleKeyword, Keyword, OpenTypeTagged, Separator, StyleValue};
use crate::values::{StyleValueKind, TransformFunction, Transformation, ValueList};

/// The `transition-behavior` of a transition.
///
/// <https://drafts.csswg.org/css-transitions-2/#transition-behavior-property>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TransitionBehavior {
    #[default]
    Normal,
    AllowDiscrete,
}

/// Replaces CSS-wide keywords with the value they stand for.
///
/// A guaranteed-invalid value behaves as `unset`, which for the properties
/// known here is the initial value.
fn with_keyword_values_resolved(
    element: &dyn TElement,
    property: PropertyId,
    value: &StyleValue,
) -> StyleValue {
    match *value.kind() {
        StyleValueKind::GuaranteedInvalid |
        StyleValueKind::Keyword(Keyword::Initial) |
        StyleValueKind::Keyword(Keyword::Unset) => property_initial_value(property),
        StyleValueKind::Keyword(Keyword::Inherit) => element
            .non_animated_inherit_value(property)
            .unwrap_or_else(|| property_initial_value(property)),
        _ => value.clone(),
    }
}

/// Interpolates two computed values of `property` at `progress`.
///
/// Returns `None` if the values can't be interpolated, which, unless
/// `allow_discrete` permits a discrete step, includes every pair without a
/// continuous rule. For `transform`, `None` also means the interpolated
/// matrix is singular and the element shouldn't be rendered.
pub fn interpolate_property(
    element: &dyn TElement,
    property: PropertyId,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    let from = with_keyword_values_resolved(element, property, from);
    let to = with_keyword_values_resolved(element, property, to);
    let calculation_context = calculation_context_for(property);

    match animation_type_from_longhand_property(property) {
        AnimationType::None => Some(to),
        AnimationType::ByComputedValue => {
            interpolate_value(element, &calculation_context, &from, &to, progress, allow_discrete)
        },
        AnimationType::RepeatableList => interpolate_repeatable_list(
            element,
            &calculation_context,
            &from,
            &to,
            progress,
            allow_discrete,
        ),
        AnimationType::Discrete => interpolate_discrete(&from, &to, progress, allow_discrete),
        AnimationType::Custom => interpolate_custom_property(
            element,
            &calculation_context,
            property,
            &from,
            &to,
            progress,
            allow_discrete,
        ),
    }
}

fn interpolate_custom_property(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    property: PropertyId,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    let continuous = match property {
        // https://drafts.csswg.org/css-transforms-1/#interpolation-of-transforms
        //
        // A singular matrix means the element isn't rendered, rather than
        // that the animation snaps.
        PropertyId::Transform => return interpolate_transform(element, from, to, progress),
        PropertyId::BoxShadow | PropertyId::TextShadow => interpolate_box_shadow(
            element,
            calculation_context,
            from,
            to,
            progress,
            allow_discrete,
        ),
        PropertyId::FontStyle => {
            if from.equals(to) {
                return Some(from.clone());
            }
            // Only two oblique angles interpolate; anything else steps
            // between the values as given.
            let from_oblique = oblique_if_normal(from);
            let to_oblique = oblique_if_normal(to);
            if !has_oblique_angle(&from_oblique) || !has_oblique_angle(&to_oblique) {
                return interpolate_discrete(from, to, progress, allow_discrete);
            }
            interpolate_value(
                element,
                calculation_context,
                &from_oblique,
                &to_oblique,
                progress,
                AllowDiscrete::No,
            )
        },
        PropertyId::FontVariationSettings => {
            let (Some(from), Some(to)) =
                (normalized_font_variations(from), normalized_font_variations(to))
            else {
                return interpolate_discrete(from, to, progress, allow_discrete);
            };
            let (from, to) = (StyleValue::from(from), StyleValue::from(to));
            interpolate_value(element, calculation_context, &from, &to, progress, AllowDiscrete::No)
        },
        PropertyId::Visibility => {
            return interpolate_visibility(from, to, progress, allow_discrete);
        },
        PropertyId::ContentVisibility => {
            return interpolate_content_visibility(from, to, progress, allow_discrete);
        },
        PropertyId::Scale => interpolate_scale(element, calculation_context, from, to, progress),
        PropertyId::Translate => {
            interpolate_translate(element, calculation_context, from, to, progress)
        },
        PropertyId::Rotate => interpolate_rotate(element, calculation_context, from, to, progress),
        PropertyId::Filter | PropertyId::BackdropFilter => interpolate_filter_value_list(
            element,
            calculation_context,
            from,
            to,
            progress,
            allow_discrete,
        ),
        PropertyId::GridTemplateColumns | PropertyId::GridTemplateRows => {
            interpolate_grid_track_size_list(element, calculation_context, from, to, progress)
        },
        _ => None,
    };

    continuous.or_else(|| {
        debug!("Interpolating {} discretely", property);
        interpolate_discrete(from, to, progress, allow_discrete)
    })
}

fn is_normal_font_style(value: &StyleValue) -> bool {
    match *value.kind() {
        StyleValueKind::FontStyle(ref style) => style.style == FontStyleKeyword::Normal,
        StyleValueKind::Keyword(keyword) => keyword == Keyword::Normal,
        _ => false,
    }
}

fn has_oblique_angle(value: &StyleValue) -> bool {
    matches!(*value.kind(), StyleValueKind::FontStyle(ref style) if style.angle.is_some())
}

/// `font-style: normal` animates as `oblique 0deg`.
fn oblique_if_normal(value: &StyleValue) -> StyleValue {
    if is_normal_font_style(value) {
        OBLIQUE_0DEG.clone()
    } else {
        value.clone()
    }
}

/// The settings of a `font-variation-settings` value with a single entry per
/// tag, the last one winning, sorted by tag. `None` if this isn't a list of
/// settings.
fn normalized_font_variations(value: &StyleValue) -> Option<ValueList> {
    let mut settings = match *value.kind() {
        StyleValueKind::OpenTypeTagged(ref setting) => vec![setting.clone()],
        StyleValueKind::ValueList(ref list) => list
            .values
            .iter()
            .map(|value| match *value.kind() {
                StyleValueKind::OpenTypeTagged(ref setting) => Some(setting.clone()),
                _ => None,
            })
            .collect::<Option<Vec<OpenTypeTagged>>>()?,
        _ => return None,
    };
    // The sort is stable, so after reversing, the last declaration of each
    // tag leads its run.
    settings.reverse();
    settings.sort_by(|a, b| a.tag.cmp(&b.tag));
    settings.dedup_by(|a, b| a.tag == b.tag);
    Some(ValueList::new(
        settings.into_iter().map(StyleValue::from).collect(),
        Separator::Comma,
    ))
}

/// Between `from` and `to`, `dominant` wins. At and beyond the endpoints,
/// the closer endpoint does.
fn dominated_step(
    from: &StyleValue,
    to: &StyleValue,
    dominant: &StyleValue,
    progress: f64,
) -> StyleValue {
    if progress <= 0. {
        from.clone()
    } else if progress >= 1. {
        to.clone()
    } else {
        dominant.clone()
    }
}

/// <https://drafts.csswg.org/web-animations-1/#animating-visibility>
fn interpolate_visibility(
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    if from.equals(to) {
        return Some(from.clone());
    }
    if from.is_keyword(Keyword::Visible) || to.is_keyword(Keyword::Visible) {
        let visible = StyleValue::keyword(Keyword::Visible);
        return Some(dominated_step(from, to, &visible, progress));
    }
    interpolate_discrete(from, to, progress, allow_discrete)
}

/// <https://drafts.csswg.org/css-contain/#content-visibility-animation>
fn interpolate_content_visibility(
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    if from.equals(to) {
        return Some(from.clone());
    }
    let from_is_hidden = from.is_keyword(Keyword::Hidden);
    let to_is_hidden = to.is_keyword(Keyword::Hidden) || to.is_keyword(Keyword::Auto);
    if from_is_hidden || to_is_hidden {
        let visible_side = if from_is_hidden { to } else { from };
        return Some(dominated_step(from, to, visible_side, progress));
    }
    interpolate_discrete(from, to, progress, allow_discrete)
}

/// The function of an individual transform property, `none` being
/// `identity`.
fn individual_transform(value: &StyleValue, identity: &StyleValue) -> Option<Transformation> {
    if value.is_keyword(Keyword::None) {
        return identity.as_transformation().cloned();
    }
    value.as_transformation().cloned()
}

/// Interpolates the three axes of a `scale` or `translate` value, both
/// expanded to `primitive`.
fn interpolate_axes(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    from: &Transformation,
    to: &Transformation,
    primitive: TransformFunction,
    progress: f64,
) -> Option<Vec<StyleValue>> {
    let from = expand_to_primitive(from, primitive);
    let to = expand_to_primitive(to, primitive);
    from.values
        .iter()
        .zip(to.values.iter())
        .map(|(from, to)| {
            interpolate_value(element, calculation_context, from, to, progress, AllowDiscrete::No)
        })
        .collect()
}

/// <https://drafts.csswg.org/css-transforms-2/#propdef-scale>
fn interpolate_scale(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
) -> Option<StyleValue> {
    if from.is_keyword(Keyword::None) && to.is_keyword(Keyword::None) {
        return Some(from.clone());
    }
    let from = individual_transform(from, &IDENTITY_SCALE)?;
    let to = individual_transform(to, &IDENTITY_SCALE)?;
    let mut values = interpolate_axes(
        element,
        calculation_context,
        &from,
        &to,
        TransformFunction::Scale3d,
        progress,
    )?;

    if matches!(values.last().map(|z| z.kind()), Some(&StyleValueKind::Number(z)) if z == 1.) {
        values.pop();
        return Some(Transformation::new(TransformFunction::Scale, values).into());
    }
    Some(Transformation::new(TransformFunction::Scale3d, values).into())
}

/// <https://drafts.csswg.org/css-transforms-2/#propdef-translate>
fn interpolate_translate(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
) -> Option<StyleValue> {
    if from.is_keyword(Keyword::None) && to.is_keyword(Keyword::None) {
        return Some(from.clone());
    }
    let from = individual_transform(from, &IDENTITY_TRANSLATE)?;
    let to = individual_transform(to, &IDENTITY_TRANSLATE)?;
    let mut values = interpolate_axes(
        element,
        calculation_context,
        &from,
        &to,
        TransformFunction::Translate3d,
        progress,
    )?;

    let z_is_zero = match values.last().map(|z| z.kind()) {
        Some(StyleValueKind::Length(length)) => length.absolute_px() == Some(0.),
        _ => false,
    };
    if z_is_zero {
        values.pop();
        return Some(Transformation::new(TransformFunction::Translate, values).into());
    }
    Some(Transformation::new(TransformFunction::Translate3d, values).into())
}

/// <https://drafts.csswg.org/css-transforms-2/#interpolation-of-decomposed-quaternion-values>
fn interpolate_rotate(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
) -> Option<StyleValue> {
    if from.is_keyword(Keyword::None) && to.is_keyword(Keyword::None) {
        return Some(from.clone());
    }
    let from = individual_transform(from, &IDENTITY_ROTATE)?;
    let to = individual_transform(to, &IDENTITY_ROTATE)?;

    if from.function == to.function && from.function != TransformFunction::Rotate3d {
        let (Some(from_angle), Some(to_angle)) = (from.values.first(), to.values.first()) else {
            return None;
        };
        let angle = interpolate_value(
            element,
            calculation_context,
            from_angle,
            to_angle,
            progress,
            AllowDiscrete::No,
        )?;
        return Some(Transformation::new(from.function, vec![angle]).into());
    }

    let context = AnimationContext::new(element, calculation_context);
    let from = expand_to_primitive(&from, TransformFunction::Rotate3d);
    let to = expand_to_primitive(&to, TransformFunction::Rotate3d);
    let allow_slerp = element.preferences().get_bool(prefs::INDIVIDUAL_ROTATE_SLERP_ENABLED);
    interpolate_rotate3d(&context, &from, &to, progress, allow_slerp)
        .ok()
        .map(StyleValue::from)
}

/// Whether a change of `property` from `old` to `new` starts a transition.
///
/// <https://drafts.csswg.org/css-transitions/#transitionable>
pub fn property_values_are_transitionable(
    element: &dyn TElement,
    property: PropertyId,
    old: &StyleValue,
    new: &StyleValue,
    behavior: TransitionBehavior,
) -> bool {
    let behavior = if element.preferences().get_bool(prefs::TRANSITION_BEHAVIOR_ENABLED) {
        behavior
    } else {
        TransitionBehavior::Normal
    };

    match animation_type_from_longhand_property(property) {
        AnimationType::None => return false,
        AnimationType::Discrete if behavior != TransitionBehavior::AllowDiscrete => return false,
        _ => {},
    }

    // Values of a transitionable type may still not be, e.g. an inset and
    // an outset shadow.
    behavior == TransitionBehavior::AllowDiscrete ||
        interpolate_property(element, property, old, new, 0.5, AllowDiscrete::No).is_some()
}
