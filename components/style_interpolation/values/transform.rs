/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Transform functions and their matrices.

use euclid::default::{Size2D, Transform3D};
use strum::{Display, EnumString};

use super::length::LengthResolutionContext;
use super::{CSSFloat, Keyword, StyleValue, StyleValueKind};

/// A 4x4 transform matrix, in the row-vector layout used by `euclid`.
pub type ComputedMatrix = Transform3D<CSSFloat>;

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "camelCase")]
pub enum TransformFunction {
    Matrix,
    #[strum(serialize = "matrix3d")]
    Matrix3d,
    Perspective,
    Rotate,
    #[strum(serialize = "rotate3d")]
    Rotate3d,
    #[strum(serialize = "rotateX")]
    RotateX,
    #[strum(serialize = "rotateY")]
    RotateY,
    #[strum(serialize = "rotateZ")]
    RotateZ,
    Scale,
    #[strum(serialize = "scale3d")]
    Scale3d,
    #[strum(serialize = "scaleX")]
    ScaleX,
    #[strum(serialize = "scaleY")]
    ScaleY,
    #[strum(serialize = "scaleZ")]
    ScaleZ,
    Skew,
    #[strum(serialize = "skewX")]
    SkewX,
    #[strum(serialize = "skewY")]
    SkewY,
    Translate,
    #[strum(serialize = "translate3d")]
    Translate3d,
    #[strum(serialize = "translateX")]
    TranslateX,
    #[strum(serialize = "translateY")]
    TranslateY,
    #[strum(serialize = "translateZ")]
    TranslateZ,
}

impl TransformFunction {
    pub fn is_3d(self) -> bool {
        use self::TransformFunction::*;
        matches!(
            self,
            Matrix3d | Perspective | Rotate3d | RotateX | RotateY | Scale3d | ScaleZ |
                Translate3d | TranslateZ
        )
    }
}

/// What transform arguments are resolved against when building a matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformResolutionContext {
    pub lengths: LengthResolutionContext,
    /// The transform reference box, for percentages in translations.
    pub reference_box: Option<Size2D<CSSFloat>>,
}

/// A transform function with its arguments, e.g. `translate(10px, 50%)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformation {
    pub function: TransformFunction,
    pub values: Vec<StyleValue>,
}

impl Transformation {
    pub fn new(function: TransformFunction, values: Vec<StyleValue>) -> Self {
        Transformation { function, values }
    }

    pub fn matrix3d(matrix: &ComputedMatrix) -> Self {
        let values = matrix.to_array().iter().map(|&v| StyleValue::number(v)).collect();
        Transformation::new(TransformFunction::Matrix3d, values)
    }

    /// The same function with arguments for which it has no effect.
    pub fn to_identity(&self) -> Transformation {
        use self::TransformFunction::*;
        let zero_px = || StyleValue::px(0.);
        let values = match self.function {
            Matrix => [1., 0., 0., 1., 0., 0.].iter().map(|&v| StyleValue::number(v)).collect(),
            Matrix3d => ComputedMatrix::identity()
                .to_array()
                .iter()
                .map(|&v| StyleValue::number(v))
                .collect(),
            Perspective => vec![StyleValue::keyword(Keyword::None)],
            Rotate | RotateX | RotateY | RotateZ | SkewX | SkewY => vec![StyleValue::degrees(0.)],
            Rotate3d => {
                let mut values: Vec<_> = self.values.iter().take(3).cloned().collect();
                values.push(StyleValue::degrees(0.));
                values
            },
            Skew => vec![StyleValue::degrees(0.); self.values.len().max(1)],
            Scale | Scale3d | ScaleX | ScaleY | ScaleZ => {
                vec![StyleValue::number(1.); self.values.len().max(1)]
            },
            Translate | Translate3d | TranslateX | TranslateY | TranslateZ => {
                (0..self.values.len().max(1)).map(|_| zero_px()).collect()
            },
        };
        Transformation::new(self.function, values)
    }

    /// Builds the matrix of this transform function.
    pub fn to_matrix(&self, context: &TransformResolutionContext) -> Result<ComputedMatrix, ()> {
        use self::TransformFunction::*;

        let reference_box = context.reference_box;
        let width = reference_box.map(|size| size.width);
        let height = reference_box.map(|size| size.height);
        let length = |index: usize, basis: Option<CSSFloat>| -> Result<CSSFloat, ()> {
            match self.values.get(index) {
                Some(value) => resolve_length(value, &context.lengths, basis),
                None => Ok(0.),
            }
        };
        let number = |index: usize| -> Result<CSSFloat, ()> {
            self.values.get(index).ok_or(()).and_then(resolve_number)
        };
        let angle = |index: usize| -> Result<euclid::Angle<CSSFloat>, ()> {
            let value = self.values.get(index).ok_or(())?;
            Ok(euclid::Angle::radians(resolve_angle(value)?))
        };

        Ok(match self.function {
            Matrix => {
                if self.values.len() != 6 {
                    return Err(());
                }
                ComputedMatrix::new_2d(
                    number(0)?,
                    number(1)?,
                    number(2)?,
                    number(3)?,
                    number(4)?,
                    number(5)?,
                )
            },
            Matrix3d => {
                if self.values.len() != 16 {
                    return Err(());
                }
                let mut m = [0.; 16];
                for (index, slot) in m.iter_mut().enumerate() {
                    *slot = number(index)?;
                }
                ComputedMatrix::from_array(m)
            },
            Perspective => match self.values.first() {
                Some(value) if value.is_keyword(Keyword::None) => ComputedMatrix::identity(),
                Some(value) => {
                    let distance = resolve_length(value, &context.lengths, None)?;
                    ComputedMatrix::perspective(distance.max(1.))
                },
                None => return Err(()),
            },
            Rotate | RotateZ => ComputedMatrix::rotation(0., 0., 1., angle(0)?),
            RotateX => ComputedMatrix::rotation(1., 0., 0., angle(0)?),
            RotateY => ComputedMatrix::rotation(0., 1., 0., angle(0)?),
            Rotate3d => {
                let (x, y, z) = (number(0)?, number(1)?, number(2)?);
                let length = (x * x + y * y + z * z).sqrt();
                if length == 0. {
                    return Ok(ComputedMatrix::identity());
                }
                ComputedMatrix::rotation(x / length, y / length, z / length, angle(3)?)
            },
            Scale => {
                let sx = number(0)?;
                let sy = if self.values.len() > 1 { number(1)? } else { sx };
                ComputedMatrix::scale(sx, sy, 1.)
            },
            Scale3d => ComputedMatrix::scale(number(0)?, number(1)?, number(2)?),
            ScaleX => ComputedMatrix::scale(number(0)?, 1., 1.),
            ScaleY => ComputedMatrix::scale(1., number(0)?, 1.),
            ScaleZ => ComputedMatrix::scale(1., 1., number(0)?),
            Skew => {
                let ay = if self.values.len() > 1 { angle(1)? } else { euclid::Angle::zero() };
                ComputedMatrix::skew(angle(0)?, ay)
            },
            SkewX => ComputedMatrix::skew(angle(0)?, euclid::Angle::zero()),
            SkewY => ComputedMatrix::skew(euclid::Angle::zero(), angle(0)?),
            Translate => ComputedMatrix::translation(length(0, width)?, length(1, height)?, 0.),
            Translate3d => ComputedMatrix::translation(
                length(0, width)?,
                length(1, height)?,
                length(2, None)?,
            ),
            TranslateX => ComputedMatrix::translation(length(0, width)?, 0., 0.),
            TranslateY => ComputedMatrix::translation(0., length(0, height)?, 0.),
            TranslateZ => ComputedMatrix::translation(0., 0., length(0, None)?),
        })
    }
}

/// Multiplies a transform list into a single matrix. The last function in
/// the list is applied first.
pub fn list_to_matrix<'a>(
    transformations: impl IntoIterator<Item = &'a Transformation>,
    context: &TransformResolutionContext,
) -> Result<ComputedMatrix, ()> {
    let mut matrix = ComputedMatrix::identity();
    for transformation in transformations {
        matrix = transformation.to_matrix(context)?.then(&matrix);
    }
    Ok(matrix)
}

/// Resolves a length-percentage to pixels. Percentages need a `basis`.
pub fn resolve_length(
    value: &StyleValue,
    context: &LengthResolutionContext,
    basis: Option<CSSFloat>,
) -> Result<CSSFloat, ()> {
    match *value.kind() {
        StyleValueKind::Length(ref length) => Ok(length.to_px(context)),
        StyleValueKind::Percentage(percentage) => {
            Ok(basis.ok_or(())? * percentage.as_fraction())
        },
        StyleValueKind::Number(number) if number == 0. => Ok(0.),
        StyleValueKind::Calculated(ref calc) => {
            calc.node().resolve(context, basis).ok_or(())
        },
        _ => Err(()),
    }
}

/// Resolves a `<number>` (or a `<percentage>` standing for one).
pub fn resolve_number(value: &StyleValue) -> Result<CSSFloat, ()> {
    match *value.kind() {
        StyleValueKind::Number(number) => Ok(number),
        StyleValueKind::Integer(integer) => Ok(integer as CSSFloat),
        StyleValueKind::Percentage(percentage) => Ok(percentage.as_fraction()),
        StyleValueKind::Calculated(ref calc) => calc
            .node()
            .resolve(&LengthResolutionContext::default(), Some(1.))
            .ok_or(()),
        _ => Err(()),
    }
}

/// Resolves an `<angle>` to radians. A unitless zero is accepted.
pub fn resolve_angle(value: &StyleValue) -> Result<CSSFloat, ()> {
    match *value.kind() {
        StyleValueKind::Angle(ref angle) => Ok(angle.radians()),
        StyleValueKind::Number(number) if number == 0. => Ok(0.),
        StyleValueKind::Calculated(ref calc) => calc
            .node()
            .resolve(&LengthResolutionContext::default(), None)
            .map(CSSFloat::to_radians)
            .ok_or(()),
        _ => Err(()),
    }
}
