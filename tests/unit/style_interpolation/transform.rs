/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use style_interpolation::animated::transform::{interpolate_transform, transform_to_matrix};
use style_interpolation::values::{
    Keyword, Separator, StyleValue, TransformFunction, Transformation,
};
use style_interpolation::{AllowDiscrete, PropertyId, interpolate_property};

use crate::support::{TestElement, approx_eq, number};

fn function(function: TransformFunction, values: Vec<StyleValue>) -> StyleValue {
    Transformation::new(function, values).into()
}

fn transform_list(functions: Vec<StyleValue>) -> StyleValue {
    StyleValue::list(functions, Separator::Space)
}

fn matrix(values: [f32; 6]) -> StyleValue {
    let values = values.iter().map(|&v| StyleValue::number(v)).collect();
    function(TransformFunction::Matrix, values)
}

fn matrix3d_values(value: &StyleValue) -> Vec<f32> {
    let list = value.as_value_list().expect("a transform list");
    assert_eq!(list.len(), 1);
    let transformation = list.values[0].as_transformation().expect("a transform function");
    assert_eq!(transformation.function, TransformFunction::Matrix3d);
    transformation.values.iter().map(number).collect()
}

#[test]
fn test_functions_expand_to_a_shared_primitive() {
    let element = TestElement::new();
    let from = function(TransformFunction::TranslateX, vec![StyleValue::px(10.)]);
    let to = function(
        TransformFunction::Translate,
        vec![StyleValue::px(20.), StyleValue::px(30.)],
    );
    let expected = transform_list(vec![function(
        TransformFunction::Translate,
        vec![StyleValue::px(10.), StyleValue::px(0.)],
    )]);
    assert_eq!(interpolate_transform(&element, &from, &to, 0.), Some(expected));

    let expected = transform_list(vec![function(
        TransformFunction::Translate,
        vec![StyleValue::px(15.), StyleValue::px(15.)],
    )]);
    assert_eq!(interpolate_transform(&element, &from, &to, 0.5), Some(expected));
}

#[test]
fn test_none_is_padded_with_identity_functions() {
    let element = TestElement::new();
    let none = StyleValue::keyword(Keyword::None);
    let rotate = function(TransformFunction::Rotate, vec![StyleValue::degrees(90.)]);
    let expected =
        transform_list(vec![function(TransformFunction::Rotate, vec![StyleValue::degrees(45.)])]);
    assert_eq!(interpolate_transform(&element, &none, &rotate, 0.5), Some(expected));
    assert_eq!(interpolate_transform(&element, &none, &none, 0.5), Some(none.clone()));
}

#[test]
fn test_matrices_interpolate_by_decomposition() {
    let element = TestElement::new();
    let from = matrix([1., 0., 0., 1., 0., 0.]);
    let to = matrix([1., 0., 0., 1., 100., 0.]);
    let result = interpolate_transform(&element, &from, &to, 0.5).unwrap();
    let values = matrix3d_values(&result);
    assert_eq!(values.len(), 16);
    assert!(approx_eq(values[12], 50.), "{:?}", values);
    assert!(approx_eq(values[13], 0.), "{:?}", values);
    assert!(approx_eq(values[0], 1.), "{:?}", values);
    assert!(approx_eq(values[5], 1.), "{:?}", values);
}

#[test]
fn test_mismatched_lists_fall_back_to_matrices() {
    let element = TestElement::new();
    let from = transform_list(vec![
        function(TransformFunction::Translate, vec![StyleValue::px(10.), StyleValue::px(0.)]),
        function(TransformFunction::Scale, vec![StyleValue::number(2.)]),
    ]);
    let to = transform_list(vec![
        function(TransformFunction::Translate, vec![StyleValue::px(30.), StyleValue::px(0.)]),
        function(TransformFunction::Rotate, vec![StyleValue::degrees(0.)]),
    ]);
    let result = interpolate_transform(&element, &from, &to, 0.5).unwrap();
    let list = result.as_value_list().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(
        list.values[0],
        function(TransformFunction::Translate, vec![StyleValue::px(20.), StyleValue::px(0.)])
    );
    let remainder = list.values[1].as_transformation().unwrap();
    assert_eq!(remainder.function, TransformFunction::Matrix3d);
    assert!(approx_eq(number(&remainder.values[0]), 1.5));
    assert!(approx_eq(number(&remainder.values[5]), 1.5));
}

#[test]
fn test_singular_matrices_do_not_interpolate() {
    let element = TestElement::new();
    let from = matrix([1., 0., 0., 1., 0., 0.]);
    let to = matrix([0., 0., 0., 0., 0., 0.]);
    assert_eq!(interpolate_transform(&element, &from, &to, 0.5), None);
    let result = interpolate_property(
        &element,
        PropertyId::Transform,
        &from,
        &to,
        0.5,
        AllowDiscrete::Yes,
    );
    assert_eq!(result, None);
}

#[test]
fn test_rotate3d_about_the_same_axis_interpolates_the_angle() {
    let element = TestElement::new();
    let rotate3d = |angle: f32| {
        function(
            TransformFunction::Rotate3d,
            vec![
                StyleValue::number(0.),
                StyleValue::number(0.),
                StyleValue::number(2.),
                StyleValue::degrees(angle),
            ],
        )
    };
    let expected = transform_list(vec![function(
        TransformFunction::Rotate3d,
        vec![
            StyleValue::number(0.),
            StyleValue::number(0.),
            StyleValue::number(1.),
            StyleValue::degrees(30.),
        ],
    )]);
    let result = interpolate_transform(&element, &rotate3d(0.), &rotate3d(60.), 0.5);
    assert_eq!(result, Some(expected));
}

#[test]
fn test_transform_to_matrix() {
    let element = TestElement::new();
    let value = transform_list(vec![
        function(TransformFunction::TranslateX, vec![StyleValue::px(10.)]),
        function(TransformFunction::Scale, vec![StyleValue::number(2.)]),
    ]);
    let matrix = transform_to_matrix(&element, &value).unwrap();
    let values = matrix.to_array();
    assert!(approx_eq(values[0], 2.));
    assert!(approx_eq(values[5], 2.));
    assert!(approx_eq(values[12], 10.));

    let none = StyleValue::keyword(Keyword::None);
    assert_eq!(transform_to_matrix(&element, &none).unwrap().to_array()[0], 1.);
    assert!(transform_to_matrix(&element, &StyleValue::number(1.)).is_none());
}
