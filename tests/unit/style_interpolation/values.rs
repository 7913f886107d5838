/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use style_interpolation::animated::{
    AllowDiscrete, CompositeOperation, composite_value, interpolate_discrete, interpolate_raw,
    interpolate_value, interpolate_value_impl,
};
use style_interpolation::calc::{CalculationContext, NumericRange, ValueType};
use style_interpolation::values::{
    BackgroundSize, BorderImageSlice, BorderRadius, Edge, Keyword, Length, LengthUnit,
    OpenTypeTagMode, OpenTypeTagged, Position, PositionEdge, Ratio, Rect, Separator, StyleValue,
    StyleValueKind, Superellipse, TransformFunction, Transformation,
};

use crate::support::{TestElement, approx_eq, resolve_calc};

fn interpolate(from: &StyleValue, to: &StyleValue, progress: f64) -> Option<StyleValue> {
    let element = TestElement::new();
    interpolate_value(
        &element,
        &CalculationContext::default(),
        from,
        to,
        progress,
        AllowDiscrete::Yes,
    )
}

#[test]
fn test_raw_float_interpolation() {
    assert_eq!(interpolate_raw(0f32, 10., 0.25, None), 2.5);
    assert_eq!(interpolate_raw(0f64, 10., 1.5, None), 15.);
    assert_eq!(interpolate_raw(0f64, 10., 1.5, Some(NumericRange::new(0., 12.))), 12.);
}

#[test]
fn test_raw_integer_rounds_half_away_from_zero() {
    assert_eq!(interpolate_raw(0i64, 3, 0.5, None), 2);
    assert_eq!(interpolate_raw(-3i64, 0, 0.5, None), -2);
    assert_eq!(interpolate_raw(0u8, 255, 0.5, None), 128);
    // Out of range results saturate at the bounds of the type.
    assert_eq!(interpolate_raw(0u8, 255, 2., None), 255);
    assert_eq!(interpolate_raw(0u8, 255, -1., None), 0);
}

#[test]
fn test_number_endpoints_and_midpoint() {
    let from = StyleValue::number(0.);
    let to = StyleValue::number(10.);
    assert_eq!(interpolate(&from, &to, 0.), Some(from.clone()));
    assert_eq!(interpolate(&from, &to, 1.), Some(to.clone()));
    assert_eq!(interpolate(&from, &to, 0.25), Some(StyleValue::number(2.5)));
}

#[test]
fn test_integer_interpolation() {
    let result = interpolate(&StyleValue::integer(1), &StyleValue::integer(2), 0.5);
    assert_eq!(result, Some(StyleValue::integer(2)));
}

#[test]
fn test_equal_values_pass_through() {
    let auto = StyleValue::keyword(Keyword::Auto);
    let element = TestElement::new();
    let result = interpolate_value(
        &element,
        &CalculationContext::default(),
        &auto,
        &auto,
        0.3,
        AllowDiscrete::No,
    );
    assert_eq!(result, Some(auto));
}

#[test]
fn test_discrete_threshold() {
    let from = StyleValue::keyword(Keyword::Auto);
    let to = StyleValue::keyword(Keyword::None);
    assert_eq!(interpolate(&from, &to, 0.49), Some(from.clone()));
    assert_eq!(interpolate(&from, &to, 0.5), Some(to.clone()));
    assert_eq!(interpolate_discrete(&from, &to, 0.7, AllowDiscrete::No), None);

    let element = TestElement::new();
    let calc = CalculationContext::default();
    assert_eq!(interpolate_value_impl(&element, &calc, &from, &to, 0.7), None);
}

#[test]
fn test_lengths_in_different_absolute_units() {
    let from: StyleValue = Length::new(0., LengthUnit::In).into();
    let to = StyleValue::px(96.);
    assert_eq!(interpolate(&from, &to, 0.5), Some(StyleValue::px(48.)));
}

#[test]
fn test_length_range_is_applied() {
    let element = TestElement::new();
    let calc =
        CalculationContext::default().with_range(ValueType::Length, NumericRange::NON_NEGATIVE);
    let result = interpolate_value(
        &element,
        &calc,
        &StyleValue::px(10.),
        &StyleValue::px(20.),
        -2.,
        AllowDiscrete::No,
    );
    assert_eq!(result, Some(StyleValue::px(0.)));
}

#[test]
fn test_ratio_interpolates_geometrically() {
    let from: StyleValue = Ratio::new(1., 1.).into();
    let to: StyleValue = Ratio::new(4., 1.).into();
    let result = interpolate(&from, &to, 0.5).unwrap();
    match *result.kind() {
        StyleValueKind::Ratio(ratio) => assert!(approx_eq(ratio.value(), 2.), "{:?}", ratio),
        ref other => panic!("expected a ratio, got {:?}", other),
    }
}

#[test]
fn test_degenerate_ratio_is_discrete() {
    let from: StyleValue = Ratio::new(0., 1.).into();
    let to: StyleValue = Ratio::new(4., 1.).into();
    assert_eq!(interpolate(&from, &to, 0.4), Some(from.clone()));
    assert_eq!(interpolate(&from, &to, 0.6), Some(to.clone()));
}

#[test]
fn test_superellipse_endpoints() {
    let from: StyleValue = Superellipse::new(1.).into();
    let to: StyleValue = Superellipse::new(2.).into();
    let at = |progress| match *interpolate(&from, &to, progress).unwrap().kind() {
        StyleValueKind::Superellipse(superellipse) => superellipse.parameter,
        ref other => panic!("expected a superellipse, got {:?}", other),
    };
    assert_eq!(at(0.), 1.);
    assert_eq!(at(1.), 2.);
    let middle = at(0.5);
    assert!(middle > 1. && middle < 2., "{}", middle);
}

#[test]
fn test_value_lists_of_different_lengths_are_discrete() {
    let from = StyleValue::list(vec![StyleValue::number(1.)], Separator::Space);
    let to = StyleValue::list(
        vec![StyleValue::number(1.), StyleValue::number(2.)],
        Separator::Space,
    );
    assert_eq!(interpolate(&from, &to, 0.6), Some(to.clone()));
}

#[test]
fn test_composite_accumulate_adds() {
    let element = TestElement::new();
    let calc = CalculationContext::default();
    let underlying = StyleValue::number(2.);
    let animated = StyleValue::number(3.);
    let accumulate =
        composite_value(&element, &calc, &underlying, &animated, CompositeOperation::Accumulate);
    assert_eq!(accumulate, Some(StyleValue::number(5.)));
    let add = composite_value(&element, &calc, &underlying, &animated, CompositeOperation::Add);
    assert_eq!(add, Some(StyleValue::number(5.)));
    let replace =
        composite_value(&element, &calc, &underlying, &animated, CompositeOperation::Replace);
    assert_eq!(replace, None);
}

#[test]
fn test_composite_lengths() {
    let element = TestElement::new();
    let calc = CalculationContext::default();
    let result = composite_value(
        &element,
        &calc,
        &StyleValue::px(10.),
        &StyleValue::px(5.),
        CompositeOperation::Add,
    );
    assert_eq!(result, Some(StyleValue::px(15.)));
}

#[test]
fn test_composite_fails_without_an_addition() {
    let element = TestElement::new();
    let calc = CalculationContext::default();
    let ratio: StyleValue = Ratio::new(1., 2.).into();
    assert_eq!(
        composite_value(&element, &calc, &ratio, &ratio, CompositeOperation::Add),
        None
    );
    let kind_mismatch = composite_value(
        &element,
        &calc,
        &StyleValue::number(1.),
        &StyleValue::px(1.),
        CompositeOperation::Add,
    );
    assert_eq!(kind_mismatch, None);
}

#[test]
fn test_composite_transform_lists_concatenate() {
    let element = TestElement::new();
    let calc = CalculationContext::default();
    let translate: StyleValue =
        Transformation::new(TransformFunction::TranslateX, vec![StyleValue::px(10.)]).into();
    let rotate: StyleValue =
        Transformation::new(TransformFunction::Rotate, vec![StyleValue::degrees(45.)]).into();
    let result = composite_value(&element, &calc, &translate, &rotate, CompositeOperation::Add);
    assert_eq!(
        result,
        Some(StyleValue::list(vec![translate.clone(), rotate.clone()], Separator::Space))
    );
    let accumulated =
        composite_value(&element, &calc, &translate, &rotate, CompositeOperation::Accumulate);
    assert_eq!(accumulated, None);
}

#[test]
fn test_composite_transform_lists_accumulate_function_by_function() {
    let element = TestElement::new();
    let calc = CalculationContext::default();
    let function =
        |function, values| -> StyleValue { Transformation::new(function, values).into() };
    let list = |translate: f32, angle: f32, scale: f32| {
        StyleValue::list(
            vec![
                function(TransformFunction::TranslateX, vec![StyleValue::px(translate)]),
                function(TransformFunction::Rotate, vec![StyleValue::degrees(angle)]),
                function(TransformFunction::Scale, vec![StyleValue::number(scale)]),
            ],
            Separator::Space,
        )
    };
    let underlying = list(10., 45., 2.);
    let animated = list(5., 45., 3.);
    let result =
        composite_value(&element, &calc, &underlying, &animated, CompositeOperation::Accumulate);
    assert_eq!(result, Some(list(15., 90., 4.)));

    // A missing function accumulates onto its identity.
    let translate = function(TransformFunction::TranslateX, vec![StyleValue::px(10.)]);
    let result =
        composite_value(&element, &calc, &translate, &animated, CompositeOperation::Accumulate);
    assert_eq!(result, Some(list(15., 45., 3.)));

    let matrix = function(
        TransformFunction::Matrix,
        [1., 0., 0., 1., 0., 0.].iter().map(|&v| StyleValue::number(v)).collect(),
    );
    let result =
        composite_value(&element, &calc, &matrix, &matrix, CompositeOperation::Accumulate);
    assert_eq!(result, None);
}

fn interpolate_continuously(
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
) -> Option<StyleValue> {
    let element = TestElement::new();
    interpolate_value_impl(&element, &CalculationContext::default(), from, to, progress)
}

#[test]
fn test_edges_resolve_from_the_start() {
    let edge = |edge, offset: Option<StyleValue>| -> StyleValue { Edge::new(edge, offset).into() };
    let right = edge(PositionEdge::Right, Some(StyleValue::percentage(10.)));
    let left = edge(PositionEdge::Left, Some(StyleValue::percentage(10.)));
    let expected = edge(PositionEdge::Left, Some(StyleValue::percentage(50.)));
    assert_eq!(interpolate_continuously(&right, &left, 0.5), Some(expected));

    let resolved = Edge::new(PositionEdge::Right, Some(StyleValue::px(10.))).resolved(false);
    assert_eq!(resolved.edge, PositionEdge::Left);
    let offset = resolved.offset.expect("an offset");
    assert!(approx_eq(resolve_calc(&offset, Some(200.)), 190.), "{:?}", offset);

    let resolved = Edge::new(PositionEdge::Bottom, None).resolved(true);
    assert_eq!(resolved, Edge::new(PositionEdge::Top, Some(StyleValue::percentage(100.))));
    let resolved = Edge::new(PositionEdge::Center, None).resolved(true);
    assert_eq!(resolved, Edge::new(PositionEdge::Top, Some(StyleValue::percentage(50.))));
}

#[test]
fn test_positions_interpolate_per_axis() {
    let from: StyleValue = Position::new(
        Edge::new(PositionEdge::Center, None),
        Edge::new(PositionEdge::Top, None),
    )
    .into();
    let to: StyleValue = Position::new(
        Edge::new(PositionEdge::Right, Some(StyleValue::percentage(10.))),
        Edge::new(PositionEdge::Bottom, None),
    )
    .into();
    let expected: StyleValue = Position::new(
        Edge::new(PositionEdge::Left, Some(StyleValue::percentage(70.))),
        Edge::new(PositionEdge::Top, Some(StyleValue::percentage(50.))),
    )
    .into();
    assert_eq!(interpolate_continuously(&from, &to, 0.5), Some(expected));
}

#[test]
fn test_border_radius() {
    let radius = |horizontal: f32, vertical: f32| -> StyleValue {
        BorderRadius::new(StyleValue::px(horizontal), StyleValue::percentage(vertical)).into()
    };
    let (from, to) = (radius(10., 20.), radius(30., 40.));
    assert_eq!(interpolate_continuously(&from, &to, 0.5), Some(radius(20., 30.)));
    assert_eq!(interpolate_continuously(&from, &to, -1.), Some(radius(0., 0.)));
}

#[test]
fn test_background_size() {
    let auto = StyleValue::keyword(Keyword::Auto);
    let size = |width: StyleValue, height: StyleValue| -> StyleValue {
        BackgroundSize { width, height }.into()
    };
    let from = size(StyleValue::px(10.), auto.clone());
    let to = size(StyleValue::px(30.), auto.clone());
    let expected = size(StyleValue::px(20.), auto.clone());
    assert_eq!(interpolate_continuously(&from, &to, 0.5), Some(expected));

    let auto_width = size(auto.clone(), auto.clone());
    assert_eq!(interpolate_continuously(&auto_width, &to, 0.5), None);
    assert_eq!(interpolate(&auto_width, &to, 0.3), Some(auto_width.clone()));
}

#[test]
fn test_border_image_slice_fill_must_match() {
    let slice = |value: f32, fill: bool| -> StyleValue {
        let side = StyleValue::number(value);
        BorderImageSlice {
            top: side.clone(),
            right: side.clone(),
            bottom: side.clone(),
            left: side,
            fill,
        }
        .into()
    };
    assert_eq!(
        interpolate_continuously(&slice(10., true), &slice(20., true), 0.5),
        Some(slice(15., true))
    );
    assert_eq!(
        interpolate_continuously(&slice(10., true), &slice(20., true), -2.),
        Some(slice(0., true))
    );
    assert_eq!(interpolate_continuously(&slice(10., true), &slice(20., false), 0.5), None);
}

#[test]
fn test_rect_sides() {
    let rect = |top: Option<StyleValue>, bottom: Option<StyleValue>| -> StyleValue {
        Rect {
            top,
            right: Some(StyleValue::px(10.)),
            bottom,
            left: None,
        }
        .into()
    };
    let from = rect(Some(StyleValue::px(0.)), None);
    let to = rect(Some(StyleValue::px(20.)), None);
    let expected = rect(Some(StyleValue::px(10.)), None);
    assert_eq!(interpolate_continuously(&from, &to, 0.5), Some(expected));

    let auto_mismatch = rect(Some(StyleValue::px(20.)), Some(StyleValue::px(5.)));
    assert_eq!(interpolate_continuously(&from, &auto_mismatch, 0.5), None);
}

#[test]
fn test_rect_sides_mix_relative_units() {
    let rect = |top: StyleValue| -> StyleValue {
        Rect { top: Some(top), right: None, bottom: None, left: None }.into()
    };
    let from = rect(Length::new(1., LengthUnit::Em).into());
    let to = rect(StyleValue::px(10.));
    let result = interpolate_continuously(&from, &to, 0.5).expect("a rect");
    let StyleValueKind::Rect(ref rect) = *result.kind() else {
        panic!("expected a rect, got {:?}", result);
    };
    let top = rect.top.as_ref().expect("a top side");
    assert!(approx_eq(resolve_calc(top, None), 13.), "{:?}", top);
}

#[test]
fn test_open_type_values_must_agree_on_tag_and_mode() {
    let tagged = |mode, tag: &str, value: f32| -> StyleValue {
        OpenTypeTagged::new(mode, tag, StyleValue::number(value)).into()
    };
    let variations = OpenTypeTagMode::FontVariationSettings;
    let features = OpenTypeTagMode::FontFeatureSettings;
    assert_eq!(
        interpolate_continuously(
            &tagged(variations, "wght", 400.),
            &tagged(variations, "wght", 600.),
            0.5
        ),
        Some(tagged(variations, "wght", 500.))
    );
    assert_eq!(
        interpolate_continuously(
            &tagged(variations, "wght", 400.),
            &tagged(variations, "wdth", 100.),
            0.5
        ),
        None
    );
    assert_eq!(
        interpolate_continuously(
            &tagged(features, "liga", 0.),
            &tagged(variations, "liga", 1.),
            0.5
        ),
        None
    );
}
