/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Animation between values of the same resolved type but different shapes,
//! like `20px` and `calc(10% + 5px)`.
//!
//! <https://drafts.csswg.org/css-values/#combine-mixed>

use log::debug;

use super::{AnimationContext, Procedure, round_to_integer};
use crate::calc::{CalcNode, CalculatedValue, NumericType};
use crate::values::{CSSFloat, StyleValue, StyleValueKind};

/// Interpolates two numeric values through a calculation tree.
pub fn interpolate_mixed_value(
    context: &AnimationContext,
    from: &StyleValue,
    to: &StyleValue,
    progress: f64,
) -> Option<StyleValue> {
    animate_mixed_value(context, from, to, Procedure::Interpolate { progress }).ok()
}

pub(crate) fn animate_mixed_value(
    context: &AnimationContext,
    from: &StyleValue,
    to: &StyleValue,
    procedure: Procedure,
) -> Result<StyleValue, ()> {
    let from_node = CalcNode::from_value(from).ok_or(())?;
    let to_node = CalcNode::from_value(to).ok_or(())?;
    let from_type = from_node.numeric_type().ok_or(())?;
    let to_type = to_node.numeric_type().ok_or(())?;

    let from_resolved = from_type.resolved_type(context.calculation_context);
    let to_resolved = to_type.resolved_type(context.calculation_context);
    if from_resolved.is_none() || from_resolved != to_resolved {
        debug!(
            "Can't combine {:?} and {:?}: types resolve to {:?} and {:?}",
            from, to, from_resolved, to_resolved
        );
        return Err(());
    }

    // A plain dimension against a plain percentage only needs a `calc()`
    // strictly between the endpoints.
    if let Procedure::Interpolate { progress } = procedure {
        if is_dimension_percentage_pair(&from_node, from_type, &to_node, to_type) {
            if progress == 0. {
                return Ok(from.clone());
            }
            if progress == 1. {
                return Ok(to.clone());
            }
        }
    }

    let (from_weight, to_weight) = procedure.weights();
    let node = CalcNode::Sum(vec![
        CalcNode::Product(vec![from_node, CalcNode::number(from_weight as CSSFloat)]),
        CalcNode::Product(vec![to_node, CalcNode::number(to_weight as CSSFloat)]),
    ])
    .simplify();

    if let Some(value) = node.as_value() {
        // `z-index: 1` against a plain number still animates as an integer.
        if let StyleValueKind::Number(number) = *value.kind() {
            if context.calculation_context.resolve_numbers_as_integers {
                let integer = round_to_integer(number as f64, context.integer_range());
                return Ok(StyleValue::integer(integer));
            }
        }
        return Ok(value);
    }
    let numeric_type = match from_type.added_to(to_type) {
        Some(numeric_type) => numeric_type,
        None => node.numeric_type().ok_or(())?,
    };
    Ok(CalculatedValue::new(node, numeric_type).into())
}

fn is_dimension_percentage_pair(
    from_node: &CalcNode,
    from_type: NumericType,
    to_node: &CalcNode,
    to_type: NumericType,
) -> bool {
    let is_leaf = |node: &CalcNode| matches!(*node, CalcNode::Numeric(..));
    if !is_leaf(from_node) || !is_leaf(to_node) {
        return false;
    }
    let is_dimension = |ty: NumericType| ty.dimension.is_some() && !ty.has_percentage;
    (is_dimension(from_type) && to_type == NumericType::PERCENTAGE) ||
        (from_type == NumericType::PERCENTAGE && is_dimension(to_type))
}
