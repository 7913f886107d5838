/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Resolved CSS values.
//!
//! Every value the interpolation engine consumes or produces is a
//! [`StyleValue`]: an immutable, reference-counted handle around a closed
//! [`StyleValueKind`] enum. Values are never mutated after construction;
//! interpolation always builds new ones.

use std::ops::Deref;

use servo_arc::Arc;
use strum::{Display, EnumString};

use crate::calc::CalculatedValue;

pub mod angle;
pub mod color;
pub mod effects;
pub mod font;
pub mod grid;
pub mod length;
pub mod position;
pub mod shape;
pub mod transform;

pub use self::angle::{Angle, AngleUnit, Frequency, FrequencyUnit, Resolution, ResolutionUnit};
pub use self::angle::{Time, TimeUnit};
pub use self::color::{Color, ColorSyntax, RGBA};
pub use self::effects::{ColorFilterKind, FilterValue, FilterValueList, Shadow, ShadowPlacement};
pub use self::font::{FontStyle, FontStyleKeyword, OpenTypeTagMode, OpenTypeTagged, Ratio};
pub use self::grid::{ExplicitGridTrack, GridSize, GridTrackComponent, GridTrackSizeList};
pub use self::length::{Length, LengthUnit, Percentage};
pub use self::position::{BackgroundSize, BorderImageSlice, BorderRadius, Edge, Position};
pub use self::position::{PositionEdge, Rect};
pub use self::shape::{BasicShape, Superellipse};
pub use self::transform::{TransformFunction, Transformation};

/// A CSS float value.
pub type CSSFloat = f32;

/// A CSS integer value.
pub type CSSInteger = i64;

/// Identifier keywords that can appear as a complete value.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum Keyword {
    Auto,
    Block,
    ClosestSide,
    Collapse,
    FarthestSide,
    Hidden,
    Inherit,
    Initial,
    Inline,
    Italic,
    None,
    Normal,
    Oblique,
    Unset,
    Visible,
}

impl Keyword {
    /// Whether this is one of the CSS-wide keywords handled before
    /// interpolation.
    #[inline]
    pub fn is_css_wide(self) -> bool {
        matches!(self, Keyword::Initial | Keyword::Inherit | Keyword::Unset)
    }
}

/// How the items of a [`ValueList`] are separated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Separator {
    Space,
    Comma,
}

/// A list of values, e.g. the layers of `background-position`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueList {
    pub values: Vec<StyleValue>,
    pub separator: Separator,
}

impl ValueList {
    pub fn new(values: Vec<StyleValue>, separator: Separator) -> Self {
        ValueList { values, separator }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The payload of a [`StyleValue`].
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValueKind {
    Angle(Angle),
    BackgroundSize(BackgroundSize),
    BasicShape(BasicShape),
    BorderImageSlice(BorderImageSlice),
    BorderRadius(BorderRadius),
    Calculated(CalculatedValue),
    Color(Color),
    Edge(Edge),
    FilterValueList(FilterValueList),
    /// A flexible length, in `fr`.
    Flex(CSSFloat),
    FontStyle(FontStyle),
    Frequency(Frequency),
    GridTrackSizeList(GridTrackSizeList),
    /// The value of a custom property that failed to substitute.
    GuaranteedInvalid,
    Integer(CSSInteger),
    Keyword(Keyword),
    Length(Length),
    Number(CSSFloat),
    OpenTypeTagged(OpenTypeTagged),
    Percentage(Percentage),
    Position(Position),
    Ratio(Ratio),
    Rect(Rect),
    Resolution(Resolution),
    Shadow(Shadow),
    Superellipse(Superellipse),
    Time(Time),
    Transformation(Transformation),
    ValueList(ValueList),
}

/// A shared handle to an immutable resolved value.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleValue(Arc<StyleValueKind>);

impl StyleValue {
    #[inline]
    pub fn new(kind: StyleValueKind) -> Self {
        StyleValue(Arc::new(kind))
    }

    #[inline]
    pub fn kind(&self) -> &StyleValueKind {
        &self.0
    }

    /// Structural equality, with a pointer fast path.
    #[inline]
    pub fn equals(&self, other: &StyleValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }

    pub fn keyword(keyword: Keyword) -> Self {
        StyleValueKind::Keyword(keyword).into()
    }

    pub fn number(value: CSSFloat) -> Self {
        StyleValueKind::Number(value).into()
    }

    pub fn integer(value: CSSInteger) -> Self {
        StyleValueKind::Integer(value).into()
    }

    pub fn px(value: CSSFloat) -> Self {
        Length::px(value).into()
    }

    pub fn percentage(value: CSSFloat) -> Self {
        Percentage(value).into()
    }

    pub fn degrees(value: CSSFloat) -> Self {
        Angle::from_degrees(value).into()
    }

    pub fn flex(value: CSSFloat) -> Self {
        StyleValueKind::Flex(value).into()
    }

    pub fn list(values: Vec<StyleValue>, separator: Separator) -> Self {
        ValueList::new(values, separator).into()
    }

    #[inline]
    pub fn as_keyword(&self) -> Option<Keyword> {
        match *self.kind() {
            StyleValueKind::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    #[inline]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.as_keyword() == Some(keyword)
    }

    #[inline]
    pub fn as_value_list(&self) -> Option<&ValueList> {
        match *self.kind() {
            StyleValueKind::ValueList(ref list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_transformation(&self) -> Option<&Transformation> {
        match *self.kind() {
            StyleValueKind::Transformation(ref transformation) => Some(transformation),
            _ => None,
        }
    }

    /// Whether this is a `<length>`, a `<percentage>` or a `calc()` of them.
    pub fn is_length_percentage(&self) -> bool {
        match *self.kind() {
            StyleValueKind::Length(..) | StyleValueKind::Percentage(..) => true,
            StyleValueKind::Calculated(ref calc) => calc.numeric_type().matches_length_percentage(),
            _ => false,
        }
    }
}

impl Deref for StyleValue {
    type Target = StyleValueKind;

    #[inline]
    fn deref(&self) -> &StyleValueKind {
        &self.0
    }
}

impl From<StyleValueKind> for StyleValue {
    #[inline]
    fn from(kind: StyleValueKind) -> Self {
        StyleValue::new(kind)
    }
}

macro_rules! impl_from_payload {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl From<$ty> for StyleValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    StyleValue::new(StyleValueKind::$ty(value))
                }
            }
        )+
    };
}

impl_from_payload!(
    Angle,
    BackgroundSize,
    BasicShape,
    BorderImageSlice,
    BorderRadius,
    Color,
    Edge,
    FilterValueList,
    FontStyle,
    Frequency,
    GridTrackSizeList,
    Keyword,
    Length,
    OpenTypeTagged,
    Percentage,
    Position,
    Ratio,
    Rect,
    Resolution,
    Shadow,
    Superellipse,
    Time,
    Transformation,
    ValueList,
);

impl From<CalculatedValue> for StyleValue {
    #[inline]
    fn from(value: CalculatedValue) -> Self {
        StyleValue::new(StyleValueKind::Calculated(value))
    }
}
