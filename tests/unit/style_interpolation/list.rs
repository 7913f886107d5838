/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use style_interpolation::animated::AllowDiscrete;
use style_interpolation::animated::list::interpolate_repeatable_list;
use style_interpolation::calc::CalculationContext;
use style_interpolation::values::{Keyword, Separator, StyleValue};

use crate::support::TestElement;

fn numbers(values: &[f32]) -> StyleValue {
    StyleValue::list(values.iter().map(|&v| StyleValue::number(v)).collect(), Separator::Comma)
}

fn interpolate(
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    let element = TestElement::new();
    let calc = CalculationContext::default();
    interpolate_repeatable_list(&element, &calc, from, to, progress, allow_discrete)
}

#[test]
fn test_lists_repeat_to_the_least_common_multiple() {
    let from = numbers(&[0., 10.]);
    let to = numbers(&[100., 200., 300.]);
    assert_eq!(
        interpolate(&from, &to, 0.5, AllowDiscrete::No),
        Some(numbers(&[50., 105., 150., 55., 100., 155.]))
    );
}

#[test]
fn test_single_values_stretch_to_the_other_list() {
    let from = StyleValue::number(0.);
    let to = numbers(&[10., 20.]);
    assert_eq!(interpolate(&from, &to, 0.5, AllowDiscrete::No), Some(numbers(&[5., 10.])));
    assert_eq!(interpolate(&to, &from, 0.5, AllowDiscrete::No), Some(numbers(&[5., 10.])));
}

#[test]
fn test_plain_values_interpolate_directly() {
    let result = interpolate(
        &StyleValue::number(1.),
        &StyleValue::number(3.),
        0.5,
        AllowDiscrete::No,
    );
    assert_eq!(result, Some(StyleValue::number(2.)));
}

#[test]
fn test_failing_items_step_between_the_original_lists() {
    let from = numbers(&[1., 2.]);
    let to = StyleValue::list(
        vec![StyleValue::number(1.), StyleValue::keyword(Keyword::Auto)],
        Separator::Comma,
    );
    assert_eq!(interpolate(&from, &to, 0.6, AllowDiscrete::No), None);
    assert_eq!(interpolate(&from, &to, 0.6, AllowDiscrete::Yes), Some(to.clone()));
    assert_eq!(interpolate(&from, &to, 0.4, AllowDiscrete::Yes), Some(from.clone()));
}
