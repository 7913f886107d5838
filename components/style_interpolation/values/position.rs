/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Values made of a fixed set of length-percentage components: positions,
//! `background-size`, border radii, `border-image-slice` and `clip` rects.

use crate::calc::{CalcNode, CalculatedValue};
use super::{Percentage, StyleValue, StyleValueKind};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PositionEdge {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

impl PositionEdge {
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, PositionEdge::Top | PositionEdge::Bottom)
    }
}

/// One axis of a `<position>`: an edge keyword and an optional offset from
/// it.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub edge: PositionEdge,
    pub offset: Option<StyleValue>,
}

impl Edge {
    pub fn new(edge: PositionEdge, offset: Option<StyleValue>) -> Self {
        Edge { edge, offset }
    }

    /// Rewrites this edge as an offset from the left (or top, when
    /// `vertical`) edge.
    ///
    /// `right 10%` becomes `left 90%`, `right 10px` becomes
    /// `left calc(100% - 10px)` and `center` becomes `left 50%`.
    pub fn resolved(&self, vertical: bool) -> Edge {
        let start = if vertical { PositionEdge::Top } else { PositionEdge::Left };
        let offset = match self.edge {
            PositionEdge::Left | PositionEdge::Top => self
                .offset
                .clone()
                .unwrap_or_else(|| StyleValue::percentage(0.)),
            PositionEdge::Center => StyleValue::percentage(50.),
            PositionEdge::Right | PositionEdge::Bottom => match self.offset {
                None => StyleValue::percentage(100.),
                Some(ref offset) => complement(offset),
            },
        };
        Edge::new(start, Some(offset))
    }
}

/// `100% - offset`.
fn complement(offset: &StyleValue) -> StyleValue {
    if let StyleValueKind::Percentage(Percentage(percentage)) = *offset.kind() {
        return StyleValue::percentage(100. - percentage);
    }
    let Some(node) = CalcNode::from_value(offset) else {
        return offset.clone();
    };
    let node = CalcNode::Sum(vec![
        CalcNode::percentage(100.),
        CalcNode::Negate(Box::new(node)),
    ]);
    match CalculatedValue::from_node(node.simplify()) {
        Some(calc) => calc.into(),
        None => offset.clone(),
    }
}

/// A computed `<position>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub edge_x: Edge,
    pub edge_y: Edge,
}

impl Position {
    pub fn new(edge_x: Edge, edge_y: Edge) -> Self {
        Position { edge_x, edge_y }
    }

    pub fn center() -> Self {
        Position::new(
            Edge::new(PositionEdge::Center, None),
            Edge::new(PositionEdge::Center, None),
        )
    }
}

/// A computed `background-size` layer other than `cover`/`contain`.
///
/// Each axis is a length-percentage or `auto`.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundSize {
    pub width: StyleValue,
    pub height: StyleValue,
}

/// A single corner radius.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderRadius {
    pub horizontal: StyleValue,
    pub vertical: StyleValue,
}

impl BorderRadius {
    pub fn new(horizontal: StyleValue, vertical: StyleValue) -> Self {
        BorderRadius { horizontal, vertical }
    }
}

/// A computed `border-image-slice`.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderImageSlice {
    pub top: StyleValue,
    pub right: StyleValue,
    pub bottom: StyleValue,
    pub left: StyleValue,
    pub fill: bool,
}

/// The legacy `rect()` shape of `clip`, where `None` stands for `auto`.
///
/// Sides are lengths, or `calc()`s of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Rect {
    pub top: Option<StyleValue>,
    pub right: Option<StyleValue>,
    pub bottom: Option<StyleValue>,
    pub left: Option<StyleValue>,
}
