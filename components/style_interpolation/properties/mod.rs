/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The animatable longhands this engine knows about, and their metadata.

use std::sync::LazyLock;

use strum::{Display, EnumIter, EnumString};

use crate::calc::{CalculationContext, NumericRange, ValueType};
use crate::values::position::PositionEdge;
use crate::values::{BackgroundSize, BorderImageSlice, BorderRadius, Color, Edge, FontStyle};
use crate::values::{FontStyleKeyword, Keyword, Position, RGBA, StyleValue, Superellipse, Time};
use crate::values::{TransformFunction, Transformation};

pub mod animated_properties;

pub use self::animated_properties::{
    TransitionBehavior, interpolate_property, property_values_are_transitionable,
};

/// A longhand property.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum PropertyId {
    AspectRatio,
    BackdropFilter,
    BackgroundColor,
    BackgroundPosition,
    BackgroundSize,
    BorderImageSlice,
    BorderTopLeftRadius,
    BoxShadow,
    Clip,
    ClipPath,
    Color,
    ContentVisibility,
    CornerTopLeftShape,
    Display,
    Filter,
    FontFeatureSettings,
    FontStyle,
    FontVariationSettings,
    FontWeight,
    GridTemplateColumns,
    GridTemplateRows,
    Height,
    Left,
    ObjectPosition,
    Opacity,
    Rotate,
    Scale,
    TextShadow,
    Transform,
    TransitionDuration,
    Translate,
    Visibility,
    Width,
    ZIndex,
}

/// How the values of a property animate.
///
/// <https://drafts.csswg.org/web-animations/#animation-type>
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationType {
    /// Not animatable.
    None,
    Discrete,
    ByComputedValue,
    RepeatableList,
    /// Has rules of its own.
    Custom,
}

pub fn animation_type_from_longhand_property(property: PropertyId) -> AnimationType {
    use self::PropertyId as P;

    match property {
        P::TransitionDuration => AnimationType::None,
        P::Display | P::FontFeatureSettings => AnimationType::Discrete,
        P::AspectRatio |
        P::BackgroundColor |
        P::BorderImageSlice |
        P::BorderTopLeftRadius |
        P::Clip |
        P::ClipPath |
        P::Color |
        P::CornerTopLeftShape |
        P::FontWeight |
        P::Height |
        P::Left |
        P::ObjectPosition |
        P::Opacity |
        P::Width |
        P::ZIndex => AnimationType::ByComputedValue,
        P::BackgroundPosition | P::BackgroundSize => AnimationType::RepeatableList,
        P::BackdropFilter |
        P::BoxShadow |
        P::ContentVisibility |
        P::Filter |
        P::FontStyle |
        P::FontVariationSettings |
        P::GridTemplateColumns |
        P::GridTemplateRows |
        P::Rotate |
        P::Scale |
        P::TextShadow |
        P::Transform |
        P::Translate |
        P::Visibility => AnimationType::Custom,
    }
}

/// `scale(1)`, what `scale: none` animates as.
pub static IDENTITY_SCALE: LazyLock<StyleValue> = LazyLock::new(|| {
    Transformation::new(
        TransformFunction::Scale,
        vec![StyleValue::number(1.), StyleValue::number(1.)],
    )
    .into()
});

/// `translate(0px, 0px)`, what `translate: none` animates as.
pub static IDENTITY_TRANSLATE: LazyLock<StyleValue> = LazyLock::new(|| {
    Transformation::new(TransformFunction::Translate, vec![StyleValue::px(0.), StyleValue::px(0.)])
        .into()
});

/// `rotate(0deg)`, what `rotate: none` animates as.
pub static IDENTITY_ROTATE: LazyLock<StyleValue> = LazyLock::new(|| {
    Transformation::new(TransformFunction::Rotate, vec![StyleValue::degrees(0.)]).into()
});

/// `oblique 0deg`, what `font-style: normal` animates as.
pub static OBLIQUE_0DEG: LazyLock<StyleValue> = LazyLock::new(|| {
    FontStyle::new(FontStyleKeyword::Oblique, Some(StyleValue::degrees(0.))).into()
});

fn position(x: f32, y: f32) -> Position {
    Position::new(
        Edge::new(PositionEdge::Left, Some(StyleValue::percentage(x))),
        Edge::new(PositionEdge::Top, Some(StyleValue::percentage(y))),
    )
}

/// The computed initial value of `property`.
pub fn property_initial_value(property: PropertyId) -> StyleValue {
    use self::PropertyId as P;

    let auto = || StyleValue::keyword(Keyword::Auto);
    let none = || StyleValue::keyword(Keyword::None);
    let normal = || StyleValue::keyword(Keyword::Normal);

    match property {
        P::AspectRatio | P::Clip | P::Height | P::Left | P::Width | P::ZIndex => auto(),
        P::BackdropFilter | P::BoxShadow | P::ClipPath | P::Filter | P::GridTemplateColumns |
        P::GridTemplateRows | P::Rotate | P::Scale | P::TextShadow | P::Transform |
        P::Translate => none(),
        P::FontFeatureSettings | P::FontVariationSettings => normal(),
        P::BackgroundColor => Color::transparent().into(),
        P::BackgroundPosition => position(0., 0.).into(),
        P::BackgroundSize => BackgroundSize { width: auto(), height: auto() }.into(),
        P::BorderImageSlice => BorderImageSlice {
            top: StyleValue::percentage(100.),
            right: StyleValue::percentage(100.),
            bottom: StyleValue::percentage(100.),
            left: StyleValue::percentage(100.),
            fill: false,
        }
        .into(),
        P::BorderTopLeftRadius => BorderRadius::new(StyleValue::px(0.), StyleValue::px(0.)).into(),
        P::Color => Color::legacy(RGBA::BLACK).into(),
        P::ContentVisibility | P::Visibility => StyleValue::keyword(Keyword::Visible),
        P::CornerTopLeftShape => Superellipse::new(1.).into(),
        P::Display => StyleValue::keyword(Keyword::Inline),
        P::FontStyle => FontStyle::new(FontStyleKeyword::Normal, None).into(),
        P::FontWeight => StyleValue::number(400.),
        P::ObjectPosition => position(50., 50.).into(),
        P::Opacity => StyleValue::number(1.),
        P::TransitionDuration => Time::from_seconds(0.).into(),
    }
}

/// What percentages in values of `property` stand for, if anything but
/// percentages.
pub fn property_resolves_percentages_relative_to(property: PropertyId) -> Option<ValueType> {
    use self::PropertyId as P;

    match property {
        P::BackgroundPosition |
        P::BackgroundSize |
        P::BorderTopLeftRadius |
        P::GridTemplateColumns |
        P::GridTemplateRows |
        P::Height |
        P::Left |
        P::ObjectPosition |
        P::Translate |
        P::Width => Some(ValueType::Length),
        _ => None,
    }
}

/// The ranges values of `property` are clamped to after interpolation.
pub fn property_accepted_type_ranges(property: PropertyId) -> Vec<(ValueType, NumericRange)> {
    use self::PropertyId as P;

    match property {
        P::Opacity => vec![(ValueType::Number, NumericRange::new(0., 1.))],
        P::FontWeight => vec![(ValueType::Number, NumericRange::new(1., 1000.))],
        P::Height | P::Width => vec![
            (ValueType::Length, NumericRange::NON_NEGATIVE),
            (ValueType::Percentage, NumericRange::NON_NEGATIVE),
        ],
        P::TransitionDuration => vec![(ValueType::Time, NumericRange::NON_NEGATIVE)],
        _ => vec![],
    }
}

/// The calculation context values of `property` interpolate in.
pub fn calculation_context_for(property: PropertyId) -> CalculationContext {
    CalculationContext {
        percentages_resolve_as: property_resolves_percentages_relative_to(property),
        resolve_numbers_as_integers: property == PropertyId::ZIndex,
        accepted_type_ranges: property_accepted_type_ranges(property).into_iter().collect(),
    }
}
