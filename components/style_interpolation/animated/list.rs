/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Lists that repeat to a common length before interpolating.
//!
//! <https://drafts.csswg.org/css-values/#repeatable-list>

use num_integer::lcm;

use super::{AllowDiscrete, AnimationContext, interpolate_discrete, interpolate_value_in};
use crate::calc::CalculationContext;
use crate::dom::TElement;
use crate::values::{StyleValue, ValueList};

/// Interpolates two lists item by item, repeating each to the least common
/// multiple of their lengths. A single value counts as a list of one.
///
/// Steps between the original values if any pair of items fails.
pub fn interpolate_repeatable_list(
    element: &dyn TElement,
    calculation_context: &CalculationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
    allow_discrete: AllowDiscrete,
) -> Option<StyleValue> {
    let context = AnimationContext::new(element, calculation_context);
    match interpolate_lists(&context, from, to, progress) {
        Some(value) => Some(value),
        None => interpolate_discrete(from, to, progress, allow_discrete),
    }
}

fn interpolate_lists(
    context: &AnimationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
) -> Option<StyleValue> {
    let stretched;
    let (from_list, to_list) = match (from.as_value_list(), to.as_value_list()) {
        (Some(from_list), Some(to_list)) => (from_list, to_list),
        (Some(from_list), None) => {
            stretched = ValueList::new(vec![to.clone(); from_list.len()], from_list.separator);
            (from_list, &stretched)
        },
        (None, Some(to_list)) => {
            stretched = ValueList::new(vec![from.clone(); to_list.len()], to_list.separator);
            (&stretched, to_list)
        },
        (None, None) => {
            return interpolate_value_in(context, from, to, progress, AllowDiscrete::No);
        },
    };
    if from_list.is_empty() || to_list.is_empty() {
        return None;
    }

    let length = lcm(from_list.len(), to_list.len());
    let values = (0..length)
        .map(|index| {
            interpolate_value_in(
                context,
                &from_list.values[index % from_list.len()],
                &to_list.values[index % to_list.len()],
                progress,
                AllowDiscrete::No,
            )
        })
        .collect::<Option<Vec<_>>>()?;
    Some(ValueList::new(values, from_list.separator).into())
}
