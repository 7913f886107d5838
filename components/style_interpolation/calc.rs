/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Calculation trees for `calc()` and the metadata used to resolve them.
//!
//! <https://drafts.csswg.org/css-values/#calc-func>

use smallvec::SmallVec;

use crate::values::length::LengthResolutionContext;
use crate::values::{Angle, CSSFloat, Frequency, Length, Percentage, Resolution};
use crate::values::{StyleValue, StyleValueKind, Time};

/// The category a numeric value, or a calculation, resolves to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueType {
    Angle,
    Flex,
    Frequency,
    Integer,
    Length,
    Number,
    Percentage,
    Resolution,
    Time,
}

/// An inclusive range of accepted values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub const NON_NEGATIVE: NumericRange = NumericRange { min: 0., max: f64::INFINITY };

    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        NumericRange { min, max }
    }

    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Per-property (or per-function) rules for resolving calculations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalculationContext {
    /// What percentages stand for, or `None` when they stay percentages.
    pub percentages_resolve_as: Option<ValueType>,
    pub resolve_numbers_as_integers: bool,
    pub accepted_type_ranges: SmallVec<[(ValueType, NumericRange); 2]>,
}

impl CalculationContext {
    pub fn for_percentages_as(value_type: ValueType) -> Self {
        CalculationContext {
            percentages_resolve_as: Some(value_type),
            ..Default::default()
        }
    }

    pub fn with_range(mut self, value_type: ValueType, range: NumericRange) -> Self {
        self.accepted_type_ranges.push((value_type, range));
        self
    }

    pub fn range_for(&self, value_type: ValueType) -> Option<NumericRange> {
        self.accepted_type_ranges
            .iter()
            .find(|&&(ty, _)| ty == value_type)
            .map(|&(_, range)| range)
    }
}

/// A leaf of a calculation tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericValue {
    Number(CSSFloat),
    Percentage(Percentage),
    Length(Length),
    Angle(Angle),
    Time(Time),
    Frequency(Frequency),
    Resolution(Resolution),
    Flex(CSSFloat),
}

impl NumericValue {
    pub fn numeric_type(&self) -> NumericType {
        let dimension = match *self {
            NumericValue::Number(..) => return NumericType::NUMBER,
            NumericValue::Percentage(..) => return NumericType::PERCENTAGE,
            NumericValue::Length(..) => ValueType::Length,
            NumericValue::Angle(..) => ValueType::Angle,
            NumericValue::Time(..) => ValueType::Time,
            NumericValue::Frequency(..) => ValueType::Frequency,
            NumericValue::Resolution(..) => ValueType::Resolution,
            NumericValue::Flex(..) => ValueType::Flex,
        };
        NumericType::dimension(dimension)
    }

    fn scaled(self, factor: CSSFloat) -> Self {
        match self {
            NumericValue::Number(v) => NumericValue::Number(v * factor),
            NumericValue::Percentage(p) => NumericValue::Percentage(Percentage(p.0 * factor)),
            NumericValue::Length(l) => NumericValue::Length(Length::new(l.value * factor, l.unit)),
            NumericValue::Angle(a) => NumericValue::Angle(Angle::new(a.value * factor, a.unit)),
            NumericValue::Time(t) => NumericValue::Time(Time { value: t.value * factor, ..t }),
            NumericValue::Frequency(f) => {
                NumericValue::Frequency(Frequency { value: f.value * factor, ..f })
            },
            NumericValue::Resolution(r) => {
                NumericValue::Resolution(Resolution { value: r.value * factor, ..r })
            },
            NumericValue::Flex(v) => NumericValue::Flex(v * factor),
        }
    }

    /// Adds two leaves that can be expressed in a single unit.
    fn merged_with(&self, other: &Self) -> Option<Self> {
        Some(match (*self, *other) {
            (NumericValue::Number(a), NumericValue::Number(b)) => NumericValue::Number(a + b),
            (NumericValue::Percentage(a), NumericValue::Percentage(b)) => {
                NumericValue::Percentage(Percentage(a.0 + b.0))
            },
            (NumericValue::Length(a), NumericValue::Length(b)) => {
                if a.unit == b.unit {
                    NumericValue::Length(Length::new(a.value + b.value, a.unit))
                } else {
                    NumericValue::Length(Length::px(a.absolute_px()? + b.absolute_px()?))
                }
            },
            (NumericValue::Angle(a), NumericValue::Angle(b)) => {
                if a.unit == b.unit {
                    NumericValue::Angle(Angle::new(a.value + b.value, a.unit))
                } else {
                    NumericValue::Angle(Angle::from_degrees(a.degrees() + b.degrees()))
                }
            },
            (NumericValue::Time(a), NumericValue::Time(b)) => {
                NumericValue::Time(Time::from_seconds(a.seconds() + b.seconds()))
            },
            (NumericValue::Frequency(a), NumericValue::Frequency(b)) => {
                NumericValue::Frequency(Frequency::from_hertz(a.hertz() + b.hertz()))
            },
            (NumericValue::Resolution(a), NumericValue::Resolution(b)) => {
                NumericValue::Resolution(Resolution::from_dppx(a.dppx() + b.dppx()))
            },
            (NumericValue::Flex(a), NumericValue::Flex(b)) => NumericValue::Flex(a + b),
            _ => return None,
        })
    }

    /// The value in its canonical unit (px, deg, s, Hz, dppx, fr).
    fn resolve(
        &self,
        lengths: &LengthResolutionContext,
        basis: Option<CSSFloat>,
    ) -> Option<CSSFloat> {
        Some(match *self {
            NumericValue::Number(v) | NumericValue::Flex(v) => v,
            NumericValue::Percentage(p) => basis? * p.as_fraction(),
            NumericValue::Length(ref l) => l.to_px(lengths),
            NumericValue::Angle(ref a) => a.degrees(),
            NumericValue::Time(ref t) => t.seconds(),
            NumericValue::Frequency(ref f) => f.hertz(),
            NumericValue::Resolution(ref r) => r.dppx(),
        })
    }

    fn into_value(self) -> StyleValue {
        match self {
            NumericValue::Number(v) => StyleValue::number(v),
            NumericValue::Percentage(p) => p.into(),
            NumericValue::Length(l) => l.into(),
            NumericValue::Angle(a) => a.into(),
            NumericValue::Time(t) => t.into(),
            NumericValue::Frequency(f) => f.into(),
            NumericValue::Resolution(r) => r.into(),
            NumericValue::Flex(v) => StyleValue::flex(v),
        }
    }
}

/// The type of a calculation: an optional dimension, and whether a
/// percentage takes part in it.
///
/// <https://drafts.css-houdini.org/css-typed-om/#numeric-typing>
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NumericType {
    pub dimension: Option<ValueType>,
    pub has_percentage: bool,
}

impl NumericType {
    pub const NUMBER: NumericType = NumericType { dimension: None, has_percentage: false };
    pub const PERCENTAGE: NumericType = NumericType { dimension: None, has_percentage: true };

    #[inline]
    pub const fn dimension(value_type: ValueType) -> Self {
        NumericType { dimension: Some(value_type), has_percentage: false }
    }

    /// The type of `self + other`, if they can be added.
    pub fn added_to(self, other: NumericType) -> Option<NumericType> {
        match (self.dimension, other.dimension) {
            (a, b) if a == b => {
                if a.is_none() && self.has_percentage != other.has_percentage {
                    return None;
                }
                Some(NumericType {
                    dimension: a,
                    has_percentage: self.has_percentage || other.has_percentage,
                })
            },
            (Some(dimension), None) | (None, Some(dimension)) => {
                let bare = if self.dimension.is_none() { self } else { other };
                if !bare.has_percentage {
                    return None;
                }
                Some(NumericType { dimension: Some(dimension), has_percentage: true })
            },
            _ => None,
        }
    }

    /// The type of `self * other`. One side has to be a plain number.
    pub fn multiplied_by(self, other: NumericType) -> Option<NumericType> {
        if self == NumericType::NUMBER {
            Some(other)
        } else if other == NumericType::NUMBER {
            Some(self)
        } else {
            None
        }
    }

    /// What a value of this type resolves to under `context`.
    pub fn resolved_type(&self, context: &CalculationContext) -> Option<ValueType> {
        match (self.dimension, self.has_percentage) {
            (None, false) if context.resolve_numbers_as_integers => Some(ValueType::Integer),
            (None, false) => Some(ValueType::Number),
            (None, true) => Some(context.percentages_resolve_as.unwrap_or(ValueType::Percentage)),
            (Some(dimension), false) => Some(dimension),
            (Some(dimension), true) => {
                (context.percentages_resolve_as == Some(dimension)).then_some(dimension)
            },
        }
    }

    pub fn matches_length_percentage(&self) -> bool {
        matches!(self.dimension, None | Some(ValueType::Length)) &&
            (self.dimension.is_some() || self.has_percentage)
    }
}

/// A node of a calculation tree.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcNode {
    Numeric(NumericValue),
    Sum(Vec<CalcNode>),
    Product(Vec<CalcNode>),
    Negate(Box<CalcNode>),
    Invert(Box<CalcNode>),
}

impl CalcNode {
    #[inline]
    pub fn number(value: CSSFloat) -> Self {
        CalcNode::Numeric(NumericValue::Number(value))
    }

    #[inline]
    pub fn percentage(value: CSSFloat) -> Self {
        CalcNode::Numeric(NumericValue::Percentage(Percentage(value)))
    }

    /// Converts a numeric value (or a `calc()`) to a tree.
    pub fn from_value(value: &StyleValue) -> Option<CalcNode> {
        let leaf = match *value.kind() {
            StyleValueKind::Calculated(ref calc) => return Some(calc.node().clone()),
            StyleValueKind::Number(v) => NumericValue::Number(v),
            StyleValueKind::Integer(v) => NumericValue::Number(v as CSSFloat),
            StyleValueKind::Percentage(p) => NumericValue::Percentage(p),
            StyleValueKind::Length(l) => NumericValue::Length(l),
            StyleValueKind::Angle(a) => NumericValue::Angle(a),
            StyleValueKind::Time(t) => NumericValue::Time(t),
            StyleValueKind::Frequency(f) => NumericValue::Frequency(f),
            StyleValueKind::Resolution(r) => NumericValue::Resolution(r),
            StyleValueKind::Flex(v) => NumericValue::Flex(v),
            _ => return None,
        };
        Some(CalcNode::Numeric(leaf))
    }

    pub fn numeric_type(&self) -> Option<NumericType> {
        match *self {
            CalcNode::Numeric(ref leaf) => Some(leaf.numeric_type()),
            CalcNode::Sum(ref children) => {
                let mut children = children.iter();
                let first = children.next()?.numeric_type()?;
                children.try_fold(first, |ty, child| ty.added_to(child.numeric_type()?))
            },
            CalcNode::Product(ref children) => children
                .iter()
                .try_fold(NumericType::NUMBER, |ty, child| ty.multiplied_by(child.numeric_type()?)),
            CalcNode::Negate(ref child) => child.numeric_type(),
            CalcNode::Invert(ref child) => {
                (child.numeric_type()? == NumericType::NUMBER).then_some(NumericType::NUMBER)
            },
        }
    }

    /// Evaluates the tree to a value in the canonical unit of its type.
    /// Percentages are taken against `basis`, and fail without one.
    pub fn resolve(
        &self,
        lengths: &LengthResolutionContext,
        basis: Option<CSSFloat>,
    ) -> Option<CSSFloat> {
        match *self {
            CalcNode::Numeric(ref leaf) => leaf.resolve(lengths, basis),
            CalcNode::Sum(ref children) => children
                .iter()
                .try_fold(0., |sum, child| Some(sum + child.resolve(lengths, basis)?)),
            CalcNode::Product(ref children) => children
                .iter()
                .try_fold(1., |product, child| Some(product * child.resolve(lengths, basis)?)),
            CalcNode::Negate(ref child) => child.resolve(lengths, basis).map(|v| -v),
            CalcNode::Invert(ref child) => child.resolve(lengths, basis).map(|v| 1. / v),
        }
    }

    /// Constant-folds the tree: numbers in products are multiplied into
    /// their sibling, and sum terms with compatible units are merged.
    ///
    /// <https://drafts.csswg.org/css-values/#calc-simplification>
    pub fn simplify(&self) -> CalcNode {
        match *self {
            CalcNode::Numeric(leaf) => CalcNode::Numeric(leaf),
            CalcNode::Negate(ref child) => match child.simplify() {
                CalcNode::Negate(inner) => *inner,
                other => other.scaled(-1.),
            },
            CalcNode::Invert(ref child) => match child.simplify() {
                CalcNode::Numeric(NumericValue::Number(v)) => CalcNode::number(1. / v),
                CalcNode::Invert(inner) => *inner,
                other => CalcNode::Invert(Box::new(other)),
            },
            CalcNode::Product(ref children) => {
                let mut factor = 1.;
                let mut rest = vec![];
                let mut pending: Vec<CalcNode> = children.iter().map(CalcNode::simplify).collect();
                while let Some(child) = pending.pop() {
                    match child {
                        CalcNode::Numeric(NumericValue::Number(v)) => factor *= v,
                        CalcNode::Product(inner) => pending.extend(inner),
                        other => rest.push(other),
                    }
                }
                rest.reverse();
                match rest.len() {
                    0 => CalcNode::number(factor),
                    1 => rest.remove(0).scaled(factor),
                    _ => {
                        if factor != 1. {
                            rest.push(CalcNode::number(factor));
                        }
                        CalcNode::Product(rest)
                    },
                }
            },
            CalcNode::Sum(ref children) => {
                let mut terms: Vec<CalcNode> = vec![];
                for child in children {
                    match child.simplify() {
                        CalcNode::Sum(inner) => {
                            for term in inner {
                                push_term(&mut terms, term);
                            }
                        },
                        other => push_term(&mut terms, other),
                    }
                }
                if terms.len() == 1 {
                    return terms.remove(0);
                }
                CalcNode::Sum(terms)
            },
        }
    }

    /// Multiplies the tree by a constant, pushing the factor into leaves
    /// where possible.
    fn scaled(self, factor: CSSFloat) -> CalcNode {
        if factor == 1. {
            return self;
        }
        match self {
            CalcNode::Numeric(leaf) => CalcNode::Numeric(leaf.scaled(factor)),
            CalcNode::Sum(terms) => {
                CalcNode::Sum(terms.into_iter().map(|term| term.scaled(factor)).collect())
            },
            CalcNode::Negate(inner) => (*inner).scaled(-factor),
            other => CalcNode::Product(vec![other, CalcNode::number(factor)]),
        }
    }

    /// The value of a tree that simplified down to a single leaf.
    pub fn as_value(&self) -> Option<StyleValue> {
        match *self {
            CalcNode::Numeric(leaf) => Some(leaf.into_value()),
            _ => None,
        }
    }
}

fn push_term(terms: &mut Vec<CalcNode>, term: CalcNode) {
    if let CalcNode::Numeric(ref leaf) = term {
        for existing in terms.iter_mut() {
            if let CalcNode::Numeric(ref mut existing_leaf) = *existing {
                if let Some(merged) = existing_leaf.merged_with(leaf) {
                    *existing_leaf = merged;
                    return;
                }
            }
        }
    }
    terms.push(term);
}

/// A computed `calc()` expression.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatedValue {
    node: CalcNode,
    numeric_type: NumericType,
}

impl CalculatedValue {
    /// Wraps a tree, if it is well typed.
    pub fn from_node(node: CalcNode) -> Option<Self> {
        let numeric_type = node.numeric_type()?;
        Some(CalculatedValue { node, numeric_type })
    }

    /// Wraps a tree with a type computed by the caller.
    pub fn new(node: CalcNode, numeric_type: NumericType) -> Self {
        CalculatedValue { node, numeric_type }
    }

    #[inline]
    pub fn node(&self) -> &CalcNode {
        &self.node
    }

    #[inline]
    pub fn numeric_type(&self) -> NumericType {
        self.numeric_type
    }

    #[inline]
    pub fn resolved_type(&self, context: &CalculationContext) -> Option<ValueType> {
        self.numeric_type.resolved_type(context)
    }
}
