/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use style_interpolation::animated::interpolate_value_impl;
use style_interpolation::calc::CalculationContext;
use style_interpolation::values::shape::{FillRule, PolygonPoint, ShapeRadius};
use style_interpolation::values::{BasicShape, Edge, Position, PositionEdge, StyleValue};

use crate::support::TestElement;

fn interpolate(from: &BasicShape, to: &BasicShape, progress: f64) -> Option<StyleValue> {
    let element = TestElement::new();
    interpolate_value_impl(
        &element,
        &CalculationContext::default(),
        &from.clone().into(),
        &to.clone().into(),
        progress,
    )
}

fn px(value: f32) -> StyleValue {
    StyleValue::px(value)
}

fn circle(radius: ShapeRadius) -> BasicShape {
    BasicShape::Circle { radius, position: Position::center() }
}

fn polygon(fill_rule: FillRule, points: &[(f32, f32)]) -> BasicShape {
    let points = points
        .iter()
        .map(|&(x, y)| PolygonPoint { x: px(x), y: px(y) })
        .collect();
    BasicShape::Polygon { fill_rule, points }
}

fn centered() -> Position {
    Position::new(
        Edge::new(PositionEdge::Left, Some(StyleValue::percentage(50.))),
        Edge::new(PositionEdge::Top, Some(StyleValue::percentage(50.))),
    )
}

#[test]
fn test_inset() {
    let from = BasicShape::Inset { top: px(10.), right: px(10.), bottom: px(10.), left: px(10.) };
    let to = BasicShape::Inset { top: px(20.), right: px(30.), bottom: px(40.), left: px(50.) };
    let expected =
        BasicShape::Inset { top: px(15.), right: px(20.), bottom: px(25.), left: px(30.) };
    assert_eq!(interpolate(&from, &to, 0.5), Some(expected.into()));
}

#[test]
fn test_xywh_sizes_are_never_negative() {
    let from = BasicShape::Xywh { x: px(0.), y: px(0.), width: px(10.), height: px(10.) };
    let to = BasicShape::Xywh { x: px(10.), y: px(10.), width: px(30.), height: px(20.) };
    let expected = BasicShape::Xywh { x: px(-10.), y: px(-10.), width: px(0.), height: px(0.) };
    assert_eq!(interpolate(&from, &to, -1.), Some(expected.into()));
}

#[test]
fn test_circle() {
    let from = circle(ShapeRadius::LengthPercentage(px(10.)));
    let to = circle(ShapeRadius::LengthPercentage(px(30.)));
    let expected = BasicShape::Circle {
        radius: ShapeRadius::LengthPercentage(px(20.)),
        position: centered(),
    };
    assert_eq!(interpolate(&from, &to, 0.5), Some(expected.into()));
}

#[test]
fn test_circle_with_a_keyword_radius_does_not_interpolate() {
    let from = circle(ShapeRadius::ClosestSide);
    let to = circle(ShapeRadius::LengthPercentage(px(30.)));
    assert_eq!(interpolate(&from, &to, 0.5), None);
    let farthest = circle(ShapeRadius::FarthestSide);
    assert_eq!(interpolate(&from, &farthest, 0.5), None);
}

#[test]
fn test_ellipse() {
    let from = BasicShape::Ellipse {
        radius_x: ShapeRadius::LengthPercentage(px(10.)),
        radius_y: ShapeRadius::LengthPercentage(px(20.)),
        position: Position::center(),
    };
    let to = BasicShape::Ellipse {
        radius_x: ShapeRadius::LengthPercentage(px(30.)),
        radius_y: ShapeRadius::LengthPercentage(px(40.)),
        position: Position::center(),
    };
    let expected = BasicShape::Ellipse {
        radius_x: ShapeRadius::LengthPercentage(px(20.)),
        radius_y: ShapeRadius::LengthPercentage(px(30.)),
        position: centered(),
    };
    assert_eq!(interpolate(&from, &to, 0.5), Some(expected.into()));
}

#[test]
fn test_polygon() {
    let from = polygon(FillRule::Nonzero, &[(0., 0.), (10., 0.), (10., 10.)]);
    let to = polygon(FillRule::Nonzero, &[(10., 10.), (30., 10.), (30., 30.)]);
    let expected = polygon(FillRule::Nonzero, &[(5., 5.), (20., 5.), (20., 20.)]);
    assert_eq!(interpolate(&from, &to, 0.5), Some(expected.into()));
}

#[test]
fn test_polygons_must_agree_on_fill_rule_and_points() {
    let from = polygon(FillRule::Nonzero, &[(0., 0.), (10., 0.), (10., 10.)]);
    let evenodd = polygon(FillRule::Evenodd, &[(0., 0.), (10., 0.), (10., 10.)]);
    assert_eq!(interpolate(&from, &evenodd, 0.5), None);
    let square = polygon(FillRule::Nonzero, &[(0., 0.), (10., 0.), (10., 10.), (0., 10.)]);
    assert_eq!(interpolate(&from, &square, 0.5), None);
}

#[test]
fn test_different_shapes_do_not_interpolate() {
    let inset = BasicShape::Inset { top: px(0.), right: px(0.), bottom: px(0.), left: px(0.) };
    let round = circle(ShapeRadius::LengthPercentage(px(10.)));
    assert_eq!(interpolate(&inset, &round, 0.5), None);
}

#[test]
fn test_paths_only_pass_through_when_equal() {
    let path = |d: &str| BasicShape::Path { fill_rule: FillRule::Nonzero, path: d.to_owned() };
    let from = path("M0 0 L10 10");
    assert_eq!(interpolate(&from, &from, 0.5), Some(from.clone().into()));
    assert_eq!(interpolate(&from, &path("M0 0 L20 20"), 0.5), None);
}
