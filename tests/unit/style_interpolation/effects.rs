/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use style_interpolation::animated::AllowDiscrete;
use style_interpolation::animated::effects::{
    interpolate_box_shadow, interpolate_filter_value_list,
};
use style_interpolation::calc::CalculationContext;
use style_interpolation::values::{Angle, Color, ColorFilterKind, FilterValue, FilterValueList};
use style_interpolation::values::{Keyword, Length, LengthUnit, RGBA, Separator, Shadow};
use style_interpolation::values::{ShadowPlacement, StyleValue, StyleValueKind};

use crate::support::{TestElement, approx_eq, resolve_calc};

fn filters(values: Vec<FilterValue>) -> StyleValue {
    FilterValueList(values).into()
}

fn interpolate_filters(
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    let element = TestElement::new();
    let calc = CalculationContext::default();
    interpolate_filter_value_list(&element, &calc, from, to, progress, allow_discrete)
}

fn shadow(offset: f32, blur: f32, placement: ShadowPlacement) -> Shadow {
    Shadow {
        color: Color::legacy(RGBA::BLACK).into(),
        offset_x: StyleValue::px(offset),
        offset_y: StyleValue::px(offset),
        blur_radius: StyleValue::px(blur),
        spread_distance: StyleValue::px(0.),
        placement,
    }
}

fn interpolate_shadows(from: &StyleValue, to: &StyleValue, progress: f64) -> Option<StyleValue> {
    let element = TestElement::new();
    let calc = CalculationContext::default();
    interpolate_box_shadow(&element, &calc, from, to, progress, AllowDiscrete::No)
}

#[test]
fn test_missing_filters_take_the_identity() {
    let from = filters(vec![FilterValue::Blur(Some(StyleValue::px(10.)))]);
    let to = filters(vec![
        FilterValue::Blur(Some(StyleValue::px(10.))),
        FilterValue::HueRotate(Some(Angle::from_degrees(90.))),
    ]);
    let expected = filters(vec![
        FilterValue::Blur(Some(StyleValue::px(10.))),
        FilterValue::HueRotate(Some(Angle::from_degrees(45.))),
    ]);
    assert_eq!(interpolate_filters(&from, &to, 0.5, AllowDiscrete::No), Some(expected));
}

#[test]
fn test_none_filter_interpolates_from_the_identity() {
    let none = StyleValue::keyword(Keyword::None);
    let to = filters(vec![FilterValue::Color {
        kind: ColorFilterKind::Grayscale,
        amount: Some(1.),
    }]);
    let expected = filters(vec![FilterValue::Color {
        kind: ColorFilterKind::Grayscale,
        amount: Some(0.5),
    }]);
    assert_eq!(interpolate_filters(&none, &to, 0.5, AllowDiscrete::No), Some(expected));
    assert_eq!(interpolate_filters(&none, &none, 0.5, AllowDiscrete::No), Some(none.clone()));
}

#[test]
fn test_color_filter_amounts_are_clamped() {
    let from = filters(vec![FilterValue::Color { kind: ColorFilterKind::Sepia, amount: None }]);
    let to = filters(vec![FilterValue::Color {
        kind: ColorFilterKind::Sepia,
        amount: Some(0.),
    }]);
    let expected = filters(vec![FilterValue::Color {
        kind: ColorFilterKind::Sepia,
        amount: Some(1.),
    }]);
    assert_eq!(interpolate_filters(&from, &to, -1., AllowDiscrete::No), Some(expected));
}

#[test]
fn test_url_filters_do_not_interpolate() {
    let from = filters(vec![FilterValue::Url("#glow".to_owned())]);
    let to = filters(vec![FilterValue::Blur(Some(StyleValue::px(2.)))]);
    assert_eq!(interpolate_filters(&from, &to, 0.5, AllowDiscrete::No), None);
    assert_eq!(interpolate_filters(&from, &to, 0.6, AllowDiscrete::Yes), Some(to.clone()));
}

#[test]
fn test_mismatched_filter_functions_step() {
    let from = filters(vec![FilterValue::Blur(Some(StyleValue::px(2.)))]);
    let to = filters(vec![FilterValue::HueRotate(None)]);
    assert_eq!(interpolate_filters(&from, &to, 0.2, AllowDiscrete::Yes), Some(from.clone()));
}

#[test]
fn test_shadow_interpolates_from_none() {
    let none = StyleValue::keyword(Keyword::None);
    let to = StyleValue::list(
        vec![shadow(10., 4., ShadowPlacement::Outer).into()],
        Separator::Comma,
    );
    let expected = Shadow {
        color: Color::legacy(RGBA::new(0, 0, 0, 128)).into(),
        offset_x: StyleValue::px(5.),
        offset_y: StyleValue::px(5.),
        blur_radius: StyleValue::px(2.),
        spread_distance: StyleValue::px(0.),
        placement: ShadowPlacement::Outer,
    };
    let expected = StyleValue::list(vec![expected.into()], Separator::Comma);
    assert_eq!(interpolate_shadows(&none, &to, 0.5), Some(expected));
}

#[test]
fn test_shadow_placement_snaps() {
    let from: StyleValue = shadow(0., 0., ShadowPlacement::Outer).into();
    let to: StyleValue = shadow(8., 0., ShadowPlacement::Inner).into();
    let result = interpolate_shadows(&from, &to, 0.25).unwrap();
    let expected = StyleValue::list(
        vec![shadow(2., 0., ShadowPlacement::Outer).into()],
        Separator::Comma,
    );
    assert_eq!(result, expected);
    let result = interpolate_shadows(&from, &to, 0.75).unwrap();
    let expected = StyleValue::list(
        vec![shadow(6., 0., ShadowPlacement::Inner).into()],
        Separator::Comma,
    );
    assert_eq!(result, expected);
}

#[test]
fn test_shadow_blur_is_never_negative() {
    let from: StyleValue = shadow(0., 0., ShadowPlacement::Outer).into();
    let to: StyleValue = shadow(0., 10., ShadowPlacement::Outer).into();
    let result = interpolate_shadows(&from, &to, -1.).unwrap();
    let expected = StyleValue::list(
        vec![shadow(0., 0., ShadowPlacement::Outer).into()],
        Separator::Comma,
    );
    assert_eq!(result, expected);
}

fn single_filter(value: &StyleValue) -> FilterValue {
    match *value.kind() {
        StyleValueKind::FilterValueList(ref list) if list.0.len() == 1 => list.0[0].clone(),
        ref other => panic!("expected a single filter, got {:?}", other),
    }
}

#[test]
fn test_blur_mixes_relative_lengths() {
    let from = filters(vec![FilterValue::Blur(Some(Length::new(1., LengthUnit::Em).into()))]);
    let to = filters(vec![FilterValue::Blur(Some(StyleValue::px(10.)))]);
    let result = interpolate_filters(&from, &to, 0.5, AllowDiscrete::No).expect("a filter");
    let FilterValue::Blur(Some(radius)) = single_filter(&result) else {
        panic!("expected a blur, got {:?}", result);
    };
    assert!(approx_eq(resolve_calc(&radius, None), 13.), "{:?}", radius);
}

#[test]
fn test_drop_shadow_offsets_mix_relative_lengths() {
    let drop_shadow = |offset_x: StyleValue, radius: Option<StyleValue>| FilterValue::DropShadow {
        offset_x,
        offset_y: StyleValue::px(4.),
        radius,
        color: None,
    };
    let from = filters(vec![drop_shadow(Length::new(1., LengthUnit::Em).into(), None)]);
    let to = filters(vec![drop_shadow(StyleValue::px(10.), Some(StyleValue::px(6.)))]);
    let result = interpolate_filters(&from, &to, 0.5, AllowDiscrete::No).expect("a filter");
    let FilterValue::DropShadow { offset_x, offset_y, radius, .. } = single_filter(&result) else {
        panic!("expected a drop shadow, got {:?}", result);
    };
    assert!(approx_eq(resolve_calc(&offset_x, None), 13.), "{:?}", offset_x);
    assert_eq!(offset_y, StyleValue::px(4.));
    assert_eq!(radius, Some(StyleValue::px(3.)));
}

#[test]
fn test_shorter_shadow_list_is_padded_with_matching_placement() {
    let from = StyleValue::list(
        vec![shadow(10., 4., ShadowPlacement::Outer).into()],
        Separator::Comma,
    );
    let to = StyleValue::list(
        vec![
            shadow(20., 4., ShadowPlacement::Outer).into(),
            shadow(8., 0., ShadowPlacement::Inner).into(),
        ],
        Separator::Comma,
    );
    let padded = Shadow {
        color: Color::legacy(RGBA::new(0, 0, 0, 128)).into(),
        offset_x: StyleValue::px(4.),
        offset_y: StyleValue::px(4.),
        blur_radius: StyleValue::px(0.),
        spread_distance: StyleValue::px(0.),
        placement: ShadowPlacement::Inner,
    };
    let expected = StyleValue::list(
        vec![shadow(15., 4., ShadowPlacement::Outer).into(), padded.into()],
        Separator::Comma,
    );
    assert_eq!(interpolate_shadows(&from, &to, 0.5), Some(expected));
}
