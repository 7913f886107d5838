/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Matrix decomposition and interpolation.
//!
//! <https://drafts.csswg.org/css-transforms-2/#interpolation-of-3d-matrices>

use log::debug;

use super::{Animate, Procedure};
use crate::values::CSSFloat;
use crate::values::transform::ComputedMatrix;

/// A 3d translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translate3D(pub f32, pub f32, pub f32);

/// A 3d scale function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale3D(pub f32, pub f32, pub f32);

/// A 3d skew function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skew(pub f32, pub f32, pub f32);

/// A 3d perspective transformation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective(pub f32, pub f32, pub f32, pub f32);

/// A quaternion used to represent a rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion(pub f64, pub f64, pub f64, pub f64);

/// A decomposed 3d matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixDecomposed3D {
    pub translate: Translate3D,
    pub scale: Scale3D,
    pub skew: Skew,
    pub perspective: Perspective,
    pub quaternion: Quaternion,
}

impl Quaternion {
    /// Return a quaternion from a unit direction vector and angle (unit:
    /// radian).
    #[inline]
    pub fn from_direction_and_angle(vector: (f64, f64, f64), angle: f64) -> Self {
        let half_angle = angle / 2.;
        let sin = half_angle.sin();
        Quaternion(vector.0 * sin, vector.1 * sin, vector.2 * sin, half_angle.cos())
    }

    /// Like [`Quaternion::from_direction_and_angle`], normalizing the axis
    /// first. A zero axis gives the identity rotation.
    pub fn from_axis_angle(x: f64, y: f64, z: f64, angle: f64) -> Self {
        let length = (x * x + y * y + z * z).sqrt();
        if length == 0. {
            return Quaternion(0., 0., 0., 1.);
        }
        Quaternion::from_direction_and_angle((x / length, y / length, z / length), angle)
    }

    /// The axis and angle (in radians) of this rotation.
    ///
    /// A rotation by (almost) nothing gives the `z` axis with a zero angle.
    pub fn to_axis_angle(&self) -> ((f64, f64, f64), f64) {
        let w = self.3.clamp(-1., 1.);
        let angle = 2. * w.acos();
        let sin = (angle / 2.).sin();
        if sin.abs() < f64::EPSILON {
            return ((0., 0., 1.), 0.);
        }
        ((self.0 / sin, self.1 / sin, self.2 / sin), angle)
    }

    /// Calculate the dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.0 * other.0 + self.1 * other.1 + self.2 * other.2 + self.3 * other.3
    }

    #[inline]
    fn scaled(&self, factor: f64) -> Self {
        Quaternion(self.0 * factor, self.1 * factor, self.2 * factor, self.3 * factor)
    }

    #[inline]
    fn plus(&self, other: &Self) -> Self {
        Quaternion(self.0 + other.0, self.1 + other.1, self.2 + other.2, self.3 + other.3)
    }

    /// The Hamilton product `self * other`, i.e. the rotation `other`
    /// followed by `self`.
    fn multiply(&self, other: &Self) -> Self {
        let (a, b) = (self, other);
        Quaternion(
            a.3 * b.0 + a.0 * b.3 + a.1 * b.2 - a.2 * b.1,
            a.3 * b.1 - a.0 * b.2 + a.1 * b.3 + a.2 * b.0,
            a.3 * b.2 + a.0 * b.1 - a.1 * b.0 + a.2 * b.3,
            a.3 * b.3 - a.0 * b.0 - a.1 * b.1 - a.2 * b.2,
        )
    }
}

/// Spherical linear interpolation between two unit quaternions.
///
/// <https://drafts.csswg.org/css-transforms-2/#interpolation-of-decomposed-3d-matrix-values>
pub fn slerp(from: Quaternion, to: Quaternion, progress: f64) -> Quaternion {
    let product = from.dot(&to).clamp(-1., 1.);
    if (product.abs() - 1.).abs() < f64::EPSILON {
        return from;
    }

    let theta = product.acos();
    let w = (progress * theta).sin() / (1. - product * product).sqrt();
    let from_factor = (progress * theta).cos() - product * w;
    from.scaled(from_factor).plus(&to.scaled(w))
}

impl Animate for Quaternion {
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        match procedure {
            Procedure::Interpolate { progress } => Ok(slerp(*self, *other, progress)),
            Procedure::Add => Ok(self.multiply(other)),
            Procedure::Accumulate { count } => {
                let mut result = *other;
                for _ in 0..count {
                    result = self.multiply(&result);
                }
                Ok(result)
            },
        }
    }
}

impl Animate for Translate3D {
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(Translate3D(
            self.0.animate(&other.0, procedure)?,
            self.1.animate(&other.1, procedure)?,
            self.2.animate(&other.2, procedure)?,
        ))
    }
}

impl Animate for Scale3D {
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(Scale3D(
            animate_scale_factor(self.0, other.0, procedure)?,
            animate_scale_factor(self.1, other.1, procedure)?,
            animate_scale_factor(self.2, other.2, procedure)?,
        ))
    }
}

/// Scales add by multiplication, so that adding the identity `1` is a
/// no-op.
fn animate_scale_factor(from: f32, to: f32, procedure: Procedure) -> Result<f32, ()> {
    match procedure {
        Procedure::Interpolate { .. } => from.animate(&to, procedure),
        Procedure::Add => Ok(from * to),
        Procedure::Accumulate { count } => Ok((from - 1.) * count as f32 + to),
    }
}

impl Animate for Skew {
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(Skew(
            self.0.animate(&other.0, procedure)?,
            self.1.animate(&other.1, procedure)?,
            self.2.animate(&other.2, procedure)?,
        ))
    }
}

impl Animate for Perspective {
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(Perspective(
            self.0.animate(&other.0, procedure)?,
            self.1.animate(&other.1, procedure)?,
            self.2.animate(&other.2, procedure)?,
            animate_scale_factor(self.3, other.3, procedure)?,
        ))
    }
}

impl Animate for MatrixDecomposed3D {
    /// <https://drafts.csswg.org/css-transforms/#interpolation-of-decomposed-3d-matrix-values>
    fn animate(&self, other: &Self, procedure: Procedure) -> Result<Self, ()> {
        Ok(MatrixDecomposed3D {
            translate: self.translate.animate(&other.translate, procedure)?,
            scale: self.scale.animate(&other.scale, procedure)?,
            skew: self.skew.animate(&other.skew, procedure)?,
            perspective: self.perspective.animate(&other.perspective, procedure)?,
            quaternion: self.quaternion.animate(&other.quaternion, procedure)?,
        })
    }
}

type Row = [f32; 3];

/// Decompose a 3D matrix.
///
/// <https://drafts.csswg.org/css-transforms-2/#decomposing-a-3d-matrix>
pub fn decompose_3d_matrix(matrix: &ComputedMatrix) -> Result<MatrixDecomposed3D, ()> {
    let mut m = matrix.to_arrays();

    // Normalize the matrix.
    if m[3][3] == 0.0 {
        return Err(());
    }
    let scaling_factor = m[3][3];
    for row in m.iter_mut() {
        for value in row.iter_mut() {
            *value /= scaling_factor;
        }
    }

    // perspective_matrix is used to solve for perspective, but it also
    // provides an easy way to test for singularity of the upper 3x3
    // component.
    let mut perspective_matrix = m;
    for row in perspective_matrix.iter_mut().take(3) {
        row[3] = 0.;
    }
    perspective_matrix[3][3] = 1.;
    let perspective_matrix = ComputedMatrix::from_arrays(perspective_matrix);

    if perspective_matrix.determinant() == 0.0 {
        return Err(());
    }

    // First, isolate perspective.
    let perspective = if m[0][3] != 0.0 || m[1][3] != 0.0 || m[2][3] != 0.0 {
        let right_hand_side = [m[0][3], m[1][3], m[2][3], m[3][3]];
        let inverse = perspective_matrix.inverse().ok_or(())?.to_arrays();
        let mut solution = [0.; 4];
        for (i, value) in solution.iter_mut().enumerate() {
            *value = (0..4).map(|k| inverse[i][k] * right_hand_side[k]).sum();
        }
        Perspective(solution[0], solution[1], solution[2], solution[3])
    } else {
        Perspective(0.0, 0.0, 0.0, 1.0)
    };

    // Next take care of translation (easy).
    let translate = Translate3D(m[3][0], m[3][1], m[3][2]);

    // Now get scale and shear. 'row' is a 3 element array of 3 component
    // vectors.
    let mut row: [Row; 3] = [[0.; 3]; 3];
    for i in 0..3 {
        row[i] = [m[i][0], m[i][1], m[i][2]];
    }

    // Compute X scale factor and normalize first row.
    let row0len = length(&row[0]);
    let mut scale = Scale3D(row0len, 0.0, 0.0);
    row[0] = normalized(&row[0], row0len);

    // Compute XY shear factor and make 2nd row orthogonal to 1st.
    let mut skew = Skew(dot(&row[0], &row[1]), 0.0, 0.0);
    row[1] = combine(&row[1], &row[0], 1.0, -skew.0);

    // Now, compute Y scale and normalize 2nd row.
    let row1len = length(&row[1]);
    scale.1 = row1len;
    row[1] = normalized(&row[1], row1len);
    skew.0 /= scale.1;

    // Compute XZ and YZ shears, orthogonalize 3rd row
    skew.1 = dot(&row[0], &row[2]);
    row[2] = combine(&row[2], &row[0], 1.0, -skew.1);
    skew.2 = dot(&row[1], &row[2]);
    row[2] = combine(&row[2], &row[1], 1.0, -skew.2);

    // Next, get Z scale and normalize 3rd row.
    let row2len = length(&row[2]);
    scale.2 = row2len;
    row[2] = normalized(&row[2], row2len);
    skew.1 /= scale.2;
    skew.2 /= scale.2;

    // At this point, the matrix (in rows) is orthonormal. Check for a
    // coordinate system flip. If the determinant is -1, then negate the
    // matrix and the scaling factors.
    if dot(&row[0], &cross(&row[1], &row[2])) < 0.0 {
        scale.0 *= -1.;
        scale.1 *= -1.;
        scale.2 *= -1.;
        for row in row.iter_mut() {
            for value in row.iter_mut() {
                *value *= -1.;
            }
        }
    }

    // Now, get the rotations out.
    let mut quaternion = Quaternion(
        0.5 * ((1.0 + row[0][0] - row[1][1] - row[2][2]).max(0.0) as f64).sqrt(),
        0.5 * ((1.0 - row[0][0] + row[1][1] - row[2][2]).max(0.0) as f64).sqrt(),
        0.5 * ((1.0 - row[0][0] - row[1][1] + row[2][2]).max(0.0) as f64).sqrt(),
        0.5 * ((1.0 + row[0][0] + row[1][1] + row[2][2]).max(0.0) as f64).sqrt(),
    );

    if row[2][1] > row[1][2] {
        quaternion.0 = -quaternion.0
    }
    if row[0][2] > row[2][0] {
        quaternion.1 = -quaternion.1
    }
    if row[1][0] > row[0][1] {
        quaternion.2 = -quaternion.2
    }

    Ok(MatrixDecomposed3D {
        translate,
        scale,
        skew,
        perspective,
        quaternion,
    })
}

impl From<MatrixDecomposed3D> for ComputedMatrix {
    /// Recompose a 3D matrix.
    ///
    /// <https://drafts.csswg.org/css-transforms/#recomposing-to-a-3d-matrix>
    fn from(decomposed: MatrixDecomposed3D) -> ComputedMatrix {
        let mut m = ComputedMatrix::identity().to_arrays();

        let perspective = decomposed.perspective;
        m[0][3] = perspective.0;
        m[1][3] = perspective.1;
        m[2][3] = perspective.2;
        m[3][3] = perspective.3;

        let translate = decomposed.translate;
        let translate = [translate.0, translate.1, translate.2];
        for i in 0..4 {
            m[3][i] += (0..3).map(|j| translate[j] * m[j][i]).sum::<f32>();
        }
        let mut matrix = ComputedMatrix::from_arrays(m);

        // Apply rotation.
        let Quaternion(x, y, z, w) = decomposed.quaternion;
        let mut rotation = ComputedMatrix::identity().to_arrays();
        rotation[0][0] = (1.0 - 2.0 * (y * y + z * z)) as f32;
        rotation[0][1] = (2.0 * (x * y + z * w)) as f32;
        rotation[0][2] = (2.0 * (x * z - y * w)) as f32;
        rotation[1][0] = (2.0 * (x * y - z * w)) as f32;
        rotation[1][1] = (1.0 - 2.0 * (x * x + z * z)) as f32;
        rotation[1][2] = (2.0 * (y * z + x * w)) as f32;
        rotation[2][0] = (2.0 * (x * z + y * w)) as f32;
        rotation[2][1] = (2.0 * (y * z - x * w)) as f32;
        rotation[2][2] = (1.0 - 2.0 * (x * x + y * y)) as f32;
        matrix = ComputedMatrix::from_arrays(rotation).then(&matrix);

        // Apply skew.
        let skew = decomposed.skew;
        let mut temp = ComputedMatrix::identity().to_arrays();
        if skew.2 != 0.0 {
            temp[2][1] = skew.2;
            matrix = ComputedMatrix::from_arrays(temp).then(&matrix);
            temp[2][1] = 0.0;
        }
        if skew.1 != 0.0 {
            temp[2][0] = skew.1;
            matrix = ComputedMatrix::from_arrays(temp).then(&matrix);
            temp[2][0] = 0.0;
        }
        if skew.0 != 0.0 {
            temp[1][0] = skew.0;
            matrix = ComputedMatrix::from_arrays(temp).then(&matrix);
        }

        // Apply scale.
        let scale = [decomposed.scale.0, decomposed.scale.1, decomposed.scale.2];
        let mut m = matrix.to_arrays();
        for (row, factor) in m.iter_mut().zip(scale) {
            for value in row.iter_mut() {
                *value *= factor;
            }
        }
        ComputedMatrix::from_arrays(m)
    }
}

/// Interpolates two matrices by decomposing them. Fails if either matrix
/// can't be decomposed.
pub fn interpolate_matrices(
    from: &ComputedMatrix,
    to: &ComputedMatrix,
    progress: f64,
) -> Option<ComputedMatrix> {
    let decomposed = (decompose_3d_matrix(from), decompose_3d_matrix(to));
    let (from_decomposed, to_decomposed) = match decomposed {
        (Ok(from), Ok(to)) => (from, to),
        _ => {
            debug!("Can't decompose {:?} or {:?}", from, to);
            return None;
        },
    };
    let decomposed = from_decomposed
        .animate(&to_decomposed, Procedure::Interpolate { progress })
        .ok()?;
    Some(decomposed.into())
}

#[inline]
fn length(row: &Row) -> CSSFloat {
    dot(row, row).sqrt()
}

#[inline]
fn normalized(row: &Row, length: CSSFloat) -> Row {
    if length == 0. {
        return *row;
    }
    [row[0] / length, row[1] / length, row[2] / length]
}

/// Calculate `a * ascl + b * bscl`.
#[inline]
fn combine(a: &Row, b: &Row, ascl: f32, bscl: f32) -> Row {
    [
        (ascl * a[0]) + (bscl * b[0]),
        (ascl * a[1]) + (bscl * b[1]),
        (ascl * a[2]) + (bscl * b[2]),
    ]
}

#[inline]
fn dot(a: &Row, b: &Row) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(row1: &Row, row2: &Row) -> Row {
    [
        row1[1] * row2[2] - row1[2] * row2[1],
        row1[2] * row2[0] - row1[0] * row2[2],
        row1[0] * row2[1] - row1[1] * row2[0],
    ]
}
