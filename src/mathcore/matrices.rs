//! `mathcore::matrices` submodule implements NxM matrices and specialized 3x3/4x4 matrices
//! which are used to apply transformations on vectors and points.
//!
//! Matrices are stored row-major and act on column vectors (`M * v`), so composing
//! `A * B` applies `B` first.
//!

use crate::mathcore::{
    floats::{equal, FloatOperations, EPSILON},
    points::{Point3, Point4},
    vectors::{Vector3, Vector4},
    Angle,
};
use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use serde_big_array::Array;
use std::{
    f32::consts::{FRAC_PI_2, PI},
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};
use thiserror::Error;

/// [`SingularMatrixError`] is returned by strict inversion when matrix determinant is zero.
///
#[derive(Error, Copy, Clone, Debug, PartialEq)]
#[error("matrix is singular (determinant is {determinant}) and cannot be inverted")]
pub struct SingularMatrixError {
    /// Determinant of rejected matrix.
    ///
    pub determinant: f32,
}

/// [`Matrix`] struct implements linear algebra functions with matrices.
///
/// It also implements various matrix operations with second operand being either matrix or number.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Matrix<const ROWS: usize, const COLUMNS: usize> {
    /// Underlying array.
    ///
    arr: Array<Array<f32, COLUMNS>, ROWS>,
}
impl<const ROWS: usize, const COLUMNS: usize> Matrix<ROWS, COLUMNS> {
    /// Returns matrix size as a tuple.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 4> = Matrix::zero();
    /// assert_eq!(matrix.size(), (3, 4));
    /// ```
    ///
    pub fn size(&self) -> (usize, usize) {
        (ROWS, COLUMNS)
    }
    /// Returns matrix as an array.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 3> = Matrix::zero();
    /// assert_eq!(matrix.as_array(), [[0.0; 3]; 3]);
    /// ```
    ///
    pub fn as_array(&self) -> [[f32; COLUMNS]; ROWS] {
        let mut arr: [[f32; COLUMNS]; ROWS] = [[0.0; COLUMNS]; ROWS];
        for (r, item) in self.arr.iter().enumerate().take(ROWS) {
            arr[r] = item.0;
        }
        arr
    }
    /// Returns copy of matrix row.
    ///
    pub fn row(&self, index: usize) -> [f32; COLUMNS] {
        self[index]
    }
    /// Returns copy of matrix column.
    ///
    pub fn column(&self, index: usize) -> [f32; ROWS] {
        let mut column: [f32; ROWS] = [0.0; ROWS];
        for (r, elem) in column.iter_mut().enumerate() {
            *elem = self[r][index];
        }
        column
    }

    /// Initializes matrix with zeroes.
    ///
    pub fn zero() -> Self {
        Self {
            arr: Array([Array([0.0; COLUMNS]); ROWS]),
        }
    }
    /// Initializes matrix with ones.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 4> = Matrix::one();
    /// assert_eq!(matrix.as_array(), [[1.0; 4]; 3]);
    /// ```
    ///
    pub fn one() -> Self {
        Self {
            arr: Array([Array([1.0; COLUMNS]); ROWS]),
        }
    }

    /// Applies function to every matrix element and returns changed matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix;
    /// let mut matrix: Matrix<1, 4> = Matrix::from([[1.0, 2.0, 3.0, 4.0]]);
    /// matrix = matrix.map(|x| x + 1.0);
    /// assert_eq!(matrix.as_array(), [[2.0, 3.0, 4.0, 5.0]]);
    /// ```
    ///
    pub fn map(self, f: impl Fn(f32) -> f32) -> Matrix<ROWS, COLUMNS> {
        let mut matrix: Matrix<ROWS, COLUMNS> = Matrix::zero();
        for r in 0..ROWS {
            for c in 0..COLUMNS {
                matrix[r][c] = f(self[r][c]);
            }
        }
        matrix
    }
    /// Combines matrices by applying function on their elements.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix;
    /// let m1: Matrix<1, 4> = Matrix::from([[1.0, 2.0, 2.0, 1.0]]);
    /// let m2: Matrix<1, 4> = Matrix::from([[2.0, 1.0, 1.0, 2.0]]);
    /// assert_eq!(m1.combine(m2, |a, b| a + b).as_array(), [[3.0; 4]]);
    /// ```
    ///
    pub fn combine(
        self,
        other: Matrix<ROWS, COLUMNS>,
        f: impl Fn(f32, f32) -> f32,
    ) -> Matrix<ROWS, COLUMNS> {
        let mut matrix: Matrix<ROWS, COLUMNS> = Matrix::zero();
        for r in 0..ROWS {
            for c in 0..COLUMNS {
                matrix[r][c] = f(self[r][c], other[r][c]);
            }
        }
        matrix
    }

    /// Returns transpose of initial matrix.
    ///
    /// Interchanges its rows into columns (flips matrix over its diagonal).
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix;
    /// let matrix: Matrix<2, 3> = Matrix::from([
    ///     [1.0, 2.0, 3.0],
    ///     [4.0, 5.0, 6.0],
    /// ]);
    /// assert_eq!(
    ///     matrix.transposed().as_array(),
    ///     [
    ///         [1.0, 4.0],
    ///         [2.0, 5.0],
    ///         [3.0, 6.0]
    ///     ]
    /// );
    /// ```
    ///
    pub fn transposed(&self) -> Matrix<COLUMNS, ROWS> {
        let mut matrix: Matrix<COLUMNS, ROWS> = Matrix::zero();
        for r in 0..ROWS {
            for c in 0..COLUMNS {
                matrix[c][r] = self[r][c];
            }
        }
        matrix
    }

    /// Performs dot product operation on two matrices.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix;
    /// let m1: Matrix<1, 3> = Matrix::from([[1.0, 2.0, 3.0]]);
    /// let m2: Matrix<3, 1> = Matrix::from([[1.0], [2.0], [3.0]]);
    /// assert_eq!(m1.dot_product(m2).as_array(), [[14.0]]);
    /// ```
    ///
    pub fn dot_product<const RHS_COLUMNS: usize>(
        self,
        other: Matrix<COLUMNS, RHS_COLUMNS>,
    ) -> Matrix<ROWS, RHS_COLUMNS> {
        let mut matrix: Matrix<ROWS, RHS_COLUMNS> = Matrix::zero();
        for r in 0..ROWS {
            for c in 0..RHS_COLUMNS {
                let mut res: f32 = 0.0;
                for k in 0..COLUMNS {
                    res += self[r][k] * other[k][c];
                }
                matrix[r][c] = res;
            }
        }
        matrix
    }
}
impl<const N: usize> Matrix<N, N> {
    /// Makes n-sized identity matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix;
    /// let matrix: Matrix<3, 3> = Matrix::identity();
    /// assert_eq!(
    ///     matrix.as_array(),
    ///     [
    ///         [1.0, 0.0, 0.0],
    ///         [0.0, 1.0, 0.0],
    ///         [0.0, 0.0, 1.0]
    ///     ],
    /// );
    /// ```
    ///
    pub fn identity() -> Matrix<N, N> {
        let mut matrix: Matrix<N, N> = Matrix::zero();
        for i in 0..N {
            matrix[i][i] = 1.0;
        }
        matrix
    }
}
impl<const ROWS: usize, const COLUMNS: usize> FloatOperations for Matrix<ROWS, COLUMNS> {
    /// Constructs new matrix by correcting every matrix element that may be wronged by float operations.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix;
    /// # use ggcollide::mathcore::floats::FloatOperations;
    /// let matrix: Matrix<1, 3> = Matrix::from([[-0.0, 0.00000001, 0.99999999]]).correct_to(0);
    /// assert_eq!(matrix.as_array(), [[0.0, 0.0, 1.0]]);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }
    /// Constructs new matrix by rounding every matrix element up to specified number of digits after floating
    /// point.
    ///
    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Index<usize> for Matrix<ROWS, COLUMNS> {
    type Output = [f32; COLUMNS];

    fn index(&self, index: usize) -> &Self::Output {
        &self.arr[index]
    }
}
impl<const ROWS: usize, const COLUMNS: usize> IndexMut<usize> for Matrix<ROWS, COLUMNS> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.arr[index]
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Neg for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Add<Self> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    /// Is equal to `self.combine(rhs, |a, b| a + b)`.
    ///
    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Sub<Self> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    /// Is equal to `self.combine(rhs, |a, b| a - b)`.
    ///
    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}
impl<const ROWS: usize, const COLUMNS: usize, const RHS_COLUMNS: usize>
    Mul<Matrix<COLUMNS, RHS_COLUMNS>> for Matrix<ROWS, COLUMNS>
{
    type Output = Matrix<ROWS, RHS_COLUMNS>;

    /// Performs dot product operation on two matrices.
    ///
    fn mul(self, rhs: Matrix<COLUMNS, RHS_COLUMNS>) -> Self::Output {
        self.dot_product(rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> AddAssign<Self> for Matrix<ROWS, COLUMNS> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> SubAssign<Self> for Matrix<ROWS, COLUMNS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<const N: usize> MulAssign<Self> for Matrix<N, N> {
    /// `a *= b` is `a = a * b`, so `b` is applied before what `a` already held.
    ///
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Add<f32> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    fn add(self, rhs: f32) -> Self::Output {
        self.map(|x| x + rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Sub<f32> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    fn sub(self, rhs: f32) -> Self::Output {
        self.map(|x| x - rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Mul<f32> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|x| x * rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> Div<f32> for Matrix<ROWS, COLUMNS> {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        self.map(|x| x / rhs)
    }
}
impl<const ROWS: usize, const COLUMNS: usize> AddAssign<f32> for Matrix<ROWS, COLUMNS> {
    fn add_assign(&mut self, rhs: f32) {
        *self = *self + rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> SubAssign<f32> for Matrix<ROWS, COLUMNS> {
    fn sub_assign(&mut self, rhs: f32) {
        *self = *self - rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> MulAssign<f32> for Matrix<ROWS, COLUMNS> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> DivAssign<f32> for Matrix<ROWS, COLUMNS> {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
impl<const ROWS: usize, const COLUMNS: usize> PartialEq for Matrix<ROWS, COLUMNS> {
    /// Sign-insensitive element-wise equality (see `floats::equal`).
    ///
    fn eq(&self, other: &Self) -> bool {
        for r in 0..ROWS {
            for c in 0..COLUMNS {
                if !equal(self[r][c], other[r][c]) {
                    return false;
                }
            }
        }
        true
    }
}
impl<const ROWS: usize, const COLUMNS: usize> AbsDiffEq for Matrix<ROWS, COLUMNS> {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (0..ROWS).all(|r| (0..COLUMNS).all(|c| self[r][c].abs_diff_eq(&other[r][c], epsilon)))
    }
}
impl<const ROWS: usize, const COLUMNS: usize> RelativeEq for Matrix<ROWS, COLUMNS> {
    fn default_max_relative() -> Self::Epsilon {
        EPSILON
    }
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        (0..ROWS).all(|r| {
            (0..COLUMNS).all(|c| self[r][c].relative_eq(&other[r][c], epsilon, max_relative))
        })
    }
}
impl<const ROWS: usize, const COLUMNS: usize> From<[[f32; COLUMNS]; ROWS]>
    for Matrix<ROWS, COLUMNS>
{
    /// Shorthand for writing `Matrix { arr: ... }`.
    ///
    fn from(arr: [[f32; COLUMNS]; ROWS]) -> Self {
        let mut array: Array<Array<f32, COLUMNS>, ROWS> = Array([Array([0.0; COLUMNS]); ROWS]);
        for r in 0..ROWS {
            array[r] = Array(arr[r]);
        }
        Matrix { arr: array }
    }
}

/// [`EulerAngles`] struct holds rotation angles around X, Y and Z axes.
///
/// Order in which those rotations are composed is defined by function that produced angles
/// ([`Matrix3::get_euler_xyz`] or [`Matrix3::get_euler_zxy`]).
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct EulerAngles {
    /// Rotation around X axis.
    ///
    pub x: Angle,
    /// Rotation around Y axis.
    ///
    pub y: Angle,
    /// Rotation around Z axis.
    ///
    pub z: Angle,
}
impl EulerAngles {
    /// Initializes angles from radians.
    ///
    pub fn from_radians(x: f32, y: f32, z: f32) -> Self {
        EulerAngles {
            x: Angle::from_radians(x),
            y: Angle::from_radians(y),
            z: Angle::from_radians(z),
        }
    }
}

/// Type alias for 3x3 [`Matrix`] (linear part of three-dimensional transform).
///
pub type Matrix3 = Matrix<3, 3>;
impl Matrix3 {
    /// Returns determinant of 2x2 minor that is left after removing given row and column.
    ///
    pub fn minor(&self, row: usize, column: usize) -> f32 {
        let mut elements: [f32; 4] = [0.0; 4];
        let mut i: usize = 0;
        for r in (0..3).filter(|&r| r != row) {
            for c in (0..3).filter(|&c| c != column) {
                elements[i] = self[r][c];
                i += 1;
            }
        }
        elements[0] * elements[3] - elements[1] * elements[2]
    }
    /// Returns signed minor (`(-1)^(row + column) * minor`).
    ///
    pub fn cofactor(&self, row: usize, column: usize) -> f32 {
        if (row + column) % 2 == 0 {
            self.minor(row, column)
        } else {
            -self.minor(row, column)
        }
    }
    /// Returns matrix which consists of cofactors of initial matrix.
    ///
    pub fn matrix_of_cofactors(&self) -> Matrix3 {
        let mut matrix: Matrix3 = Matrix::zero();
        for r in 0..3 {
            for c in 0..3 {
                matrix[r][c] = self.cofactor(r, c);
            }
        }
        matrix
    }
    /// Returns adjugate matrix (transposed matrix of cofactors).
    ///
    pub fn adjugate(&self) -> Matrix3 {
        self.matrix_of_cofactors().transposed()
    }
    /// Returns determinant of matrix (cofactor expansion along first row).
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix3;
    /// let matrix: Matrix3 = Matrix3::from([
    ///     [-3.0, 2.0, 2.0],
    ///     [43.0, 1.0, -12.0],
    ///     [5.0, 0.0, 5.0]
    /// ]);
    /// assert_eq!(matrix.determinant(), -575.0);
    /// ```
    ///
    pub fn determinant(&self) -> f32 {
        (0..3).map(|c| self[0][c] * self.cofactor(0, c)).sum()
    }
    /// Returns inverse of matrix (`adjugate / determinant`).
    ///
    /// Inverting singular matrix is a precondition violation: elements of the result
    /// are infinite or `NaN`. Use `try_inverted` to have that case reported.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix3;
    /// # use ggcollide::mathcore::floats::FloatOperations;
    /// let matrix: Matrix3 = Matrix3::from([
    ///     [3.0, 2.0, 2.0],
    ///     [1.0, 2.0, 2.0],
    ///     [1.0, 3.0, 2.0]
    /// ]);
    /// assert_eq!(
    ///     matrix.inverted().round_up_to(2).as_array(),
    ///     [
    ///         [0.5, -0.5, 0.0],
    ///         [0.0, -1.0, 1.0],
    ///         [-0.25, 1.75, -1.0]
    ///     ]
    /// );
    /// ```
    ///
    pub fn inverted(&self) -> Matrix3 {
        self.adjugate() * (1.0 / self.determinant())
    }
    /// Returns inverse of matrix or [`SingularMatrixError`] if determinant is zero.
    ///
    pub fn try_inverted(&self) -> Result<Matrix3, SingularMatrixError> {
        let determinant: f32 = self.determinant();
        if determinant == 0.0 || !determinant.is_finite() {
            log::debug!("refusing to invert singular 3x3 matrix {:?}", self);
            return Err(SingularMatrixError { determinant });
        }
        Ok(self.adjugate() * (1.0 / determinant))
    }

    /// Constructs scale matrix.
    ///
    pub fn scale(x: f32, y: f32, z: f32) -> Matrix3 {
        Matrix::from([[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, z]])
    }
    /// Constructs matrix of rotation around X axis.
    ///
    pub fn rotation_x(angle: Angle) -> Matrix3 {
        let (s, c): (f32, f32) = angle.sin_cos();
        Matrix::from([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }
    /// Constructs matrix of rotation around Y axis.
    ///
    pub fn rotation_y(angle: Angle) -> Matrix3 {
        let (s, c): (f32, f32) = angle.sin_cos();
        Matrix::from([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }
    /// Constructs matrix of rotation around Z axis.
    ///
    pub fn rotation_z(angle: Angle) -> Matrix3 {
        let (s, c): (f32, f32) = angle.sin_cos();
        Matrix::from([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }
    /// Constructs rotation matrix which is equal to `Rx * Ry * Rz`.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::{Angle, matrices::Matrix3};
    /// let (x, y, z): (Angle, Angle, Angle) =
    ///     (Angle::from_degrees(30.0), Angle::from_degrees(45.0), Angle::from_degrees(60.0));
    /// assert_eq!(
    ///     Matrix3::rotation(x, y, z),
    ///     Matrix3::rotation_x(x) * Matrix3::rotation_y(y) * Matrix3::rotation_z(z)
    /// );
    /// ```
    ///
    pub fn rotation(x: Angle, y: Angle, z: Angle) -> Matrix3 {
        let mut matrix: Matrix3 = Matrix::identity();
        matrix.populate_rotation(x, y, z);
        matrix
    }
    /// Overwrites matrix with rotation `Rx * Ry * Rz`.
    ///
    pub fn populate_rotation(&mut self, x: Angle, y: Angle, z: Angle) {
        let ((sa, ca), (sb, cb), (sc, cc)) = (x.sin_cos(), y.sin_cos(), z.sin_cos());
        *self = Matrix::from([
            [cb * cc, -cb * sc, sb],
            [sa * sb * cc + ca * sc, -sa * sb * sc + ca * cc, -sa * cb],
            [-ca * sb * cc + sa * sc, ca * sb * sc + sa * cc, ca * cb],
        ]);
    }
    /// Constructs rotation matrix which is equal to `Rz * Rx * Ry`.
    ///
    pub fn rotation_zxy(x: Angle, y: Angle, z: Angle) -> Matrix3 {
        let ((sa, ca), (sb, cb), (sc, cc)) = (x.sin_cos(), y.sin_cos(), z.sin_cos());
        Matrix::from([
            [cc * cb - sc * sa * sb, -sc * ca, cc * sb + sc * sa * cb],
            [sc * cb + cc * sa * sb, cc * ca, sc * sb - cc * sa * cb],
            [-ca * sb, sa, ca * cb],
        ])
    }

    /// Extracts both solutions of Euler angles from rotation `Rx * Ry * Rz`.
    ///
    /// Scale is removed before extraction. In gimbal lock (Y rotation is ±90 degrees) X and Z
    /// rotations are not distinguishable, so Z is set to zero and the same solution is
    /// returned twice.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::{EulerAngles, Matrix3};
    /// # use approx::assert_abs_diff_eq;
    /// let rotation: Matrix3 = Matrix3::rotation_x(ggcollide::mathcore::Angle::DEG45);
    /// for angles in rotation.get_euler_xyz() {
    ///     assert_abs_diff_eq!(
    ///         Matrix3::rotation(angles.x, angles.y, angles.z),
    ///         rotation,
    ///         epsilon = 0.0001
    ///     );
    /// }
    /// ```
    ///
    pub fn get_euler_xyz(&self) -> [EulerAngles; 2] {
        let m: Matrix3 = self.get_rotation();
        let sin_y: f32 = m[0][2].clamp(-1.0, 1.0);
        if sin_y >= 1.0 - EPSILON {
            let angles: EulerAngles =
                EulerAngles::from_radians(m[1][0].atan2(m[1][1]), FRAC_PI_2, 0.0);
            return [angles; 2];
        }
        if sin_y <= -1.0 + EPSILON {
            let angles: EulerAngles =
                EulerAngles::from_radians((-m[1][0]).atan2(m[1][1]), -FRAC_PI_2, 0.0);
            return [angles; 2];
        }
        let y1: f32 = sin_y.asin();
        [y1, PI - y1].map(|y| {
            let cos_y: f32 = y.cos();
            EulerAngles::from_radians(
                (-m[1][2] / cos_y).atan2(m[2][2] / cos_y),
                y,
                (-m[0][1] / cos_y).atan2(m[0][0] / cos_y),
            )
        })
    }
    /// Extracts both solutions of Euler angles from rotation `Rz * Rx * Ry`.
    ///
    /// In gimbal lock (X rotation is ±90 degrees) Y is set to zero and the same solution is
    /// returned twice.
    ///
    pub fn get_euler_zxy(&self) -> [EulerAngles; 2] {
        let m: Matrix3 = self.get_rotation();
        let sin_x: f32 = m[2][1].clamp(-1.0, 1.0);
        if sin_x.abs() >= 1.0 - EPSILON {
            let angles: EulerAngles = EulerAngles::from_radians(
                FRAC_PI_2.copysign(sin_x),
                0.0,
                m[1][0].atan2(m[0][0]),
            );
            return [angles; 2];
        }
        let x1: f32 = sin_x.asin();
        [x1, PI - x1].map(|x| {
            let cos_x: f32 = x.cos();
            EulerAngles::from_radians(
                x,
                (-m[2][0] / cos_x).atan2(m[2][2] / cos_x),
                (-m[0][1] / cos_x).atan2(m[1][1] / cos_x),
            )
        })
    }

    /// Returns length of first basis column.
    ///
    pub fn get_x_scale(&self) -> f32 {
        Vector3::from(self.column(0)).length()
    }
    /// Returns length of second basis column.
    ///
    pub fn get_y_scale(&self) -> f32 {
        Vector3::from(self.column(1)).length()
    }
    /// Returns length of third basis column.
    ///
    pub fn get_z_scale(&self) -> f32 {
        Vector3::from(self.column(2)).length()
    }
    /// Returns lengths of all basis columns.
    ///
    pub fn get_scale(&self) -> Vector3 {
        Vector3::new(self.get_x_scale(), self.get_y_scale(), self.get_z_scale())
    }
    /// Returns rotation part of matrix (matrix with normalized basis columns).
    ///
    pub fn get_rotation(&self) -> Matrix3 {
        let scale: [f32; 3] = self.get_scale().elements();
        let mut matrix: Matrix3 = *self;
        for r in 0..3 {
            for (c, s) in scale.iter().enumerate() {
                matrix[r][c] /= s;
            }
        }
        matrix
    }
}
impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Self::Output {
        let v: [f32; 3] = rhs.elements();
        Vector3::from(self.as_array().map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2]))
    }
}
impl Mul<Point3> for Matrix3 {
    type Output = Point3;

    fn mul(self, rhs: Point3) -> Self::Output {
        Point3::from((self * rhs.to_vector()).elements())
    }
}

/// Type alias for 4x4 [`Matrix`] (three-dimensional affine or projective transform).
///
pub type Matrix4 = Matrix<4, 4>;
impl Matrix4 {
    /// Returns pairwise 2x2 sub-determinants of top two rows (`s`) and bottom two rows (`c`).
    ///
    fn sub_determinants(&self) -> ([f32; 6], [f32; 6]) {
        let a: [[f32; 4]; 4] = self.as_array();
        let s: [f32; 6] = [
            a[0][0] * a[1][1] - a[1][0] * a[0][1],
            a[0][0] * a[1][2] - a[1][0] * a[0][2],
            a[0][0] * a[1][3] - a[1][0] * a[0][3],
            a[0][1] * a[1][2] - a[1][1] * a[0][2],
            a[0][1] * a[1][3] - a[1][1] * a[0][3],
            a[0][2] * a[1][3] - a[1][2] * a[0][3],
        ];
        let c: [f32; 6] = [
            a[2][0] * a[3][1] - a[3][0] * a[2][1],
            a[2][0] * a[3][2] - a[3][0] * a[2][2],
            a[2][0] * a[3][3] - a[3][0] * a[2][3],
            a[2][1] * a[3][2] - a[3][1] * a[2][2],
            a[2][1] * a[3][3] - a[3][1] * a[2][3],
            a[2][2] * a[3][3] - a[3][2] * a[2][3],
        ];
        (s, c)
    }
    /// Combines sub-determinants into determinant (Laplace expansion by complementary minors).
    ///
    fn determinant_from(s: &[f32; 6], c: &[f32; 6]) -> f32 {
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
    /// Returns determinant of matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::matrices::Matrix4;
    /// let matrix: Matrix4 = Matrix4::from([
    ///     [2.0, 0.0, 1.0, 3.0],
    ///     [1.0, -1.0, 0.0, 2.0],
    ///     [0.0, 4.0, 1.0, -1.0],
    ///     [3.0, 0.0, 2.0, 1.0]
    /// ]);
    /// assert_eq!(matrix.determinant(), -6.0);
    /// ```
    ///
    pub fn determinant(&self) -> f32 {
        let (s, c): ([f32; 6], [f32; 6]) = self.sub_determinants();
        Matrix4::determinant_from(&s, &c)
    }
    /// Builds inverse from precomputed sub-determinants.
    ///
    fn inverted_with(&self, s: &[f32; 6], c: &[f32; 6], determinant: f32) -> Matrix4 {
        let a: [[f32; 4]; 4] = self.as_array();
        let inv: f32 = 1.0 / determinant;
        Matrix4::from([
            [
                a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3],
                -a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3],
                a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3],
                -a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3],
            ],
            [
                -a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1],
                a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1],
                -a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1],
                a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1],
            ],
            [
                a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0],
                -a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0],
                a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0],
                -a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0],
            ],
            [
                -a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0],
                a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0],
                -a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0],
                a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0],
            ],
        ]) * inv
    }
    /// Returns inverse of matrix, computed in closed form.
    ///
    /// Inverting singular matrix is a precondition violation: elements of the result
    /// are infinite or `NaN`. Use `try_inverted` to have that case reported.
    ///
    pub fn inverted(&self) -> Matrix4 {
        let (s, c): ([f32; 6], [f32; 6]) = self.sub_determinants();
        self.inverted_with(&s, &c, Matrix4::determinant_from(&s, &c))
    }
    /// Returns inverse of matrix or [`SingularMatrixError`] if determinant is zero.
    ///
    pub fn try_inverted(&self) -> Result<Matrix4, SingularMatrixError> {
        let (s, c): ([f32; 6], [f32; 6]) = self.sub_determinants();
        let determinant: f32 = Matrix4::determinant_from(&s, &c);
        if determinant == 0.0 || !determinant.is_finite() {
            log::debug!("refusing to invert singular 4x4 matrix {:?}", self);
            return Err(SingularMatrixError { determinant });
        }
        Ok(self.inverted_with(&s, &c, determinant))
    }
    /// Returns inverse of matrix that is a composition of translation, rotation and scale
    /// (in that order, `T * R * S`).
    ///
    /// Scale of every axis is the length of its basis column and rotation is the normalized
    /// basis, so result is `S^-1 * R^T * T^-1`. Matrices with shear or projection are
    /// not supported and produce wrong results.
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::{Angle, matrices::{Matrix3, Matrix4}, vectors::Vector3};
    /// # use approx::assert_abs_diff_eq;
    /// let matrix: Matrix4 = Matrix4::trs(
    ///     Vector3::new(1.0, -2.0, 5.0),
    ///     Matrix3::rotation_y(Angle::DEG90),
    ///     Vector3::new(2.0, 2.0, 4.0),
    /// );
    /// assert_abs_diff_eq!(matrix.inverted_trs(), matrix.inverted(), epsilon = 0.0001);
    /// ```
    ///
    pub fn inverted_trs(&self) -> Matrix4 {
        let mut matrix: Matrix4 = Matrix::identity();
        let scale_squared: [f32; 3] = [0, 1, 2].map(|c| {
            let column: [f32; 4] = self.column(c);
            Vector3::new(column[0], column[1], column[2]).length_squared()
        });
        for (r, s) in scale_squared.iter().enumerate() {
            for c in 0..3 {
                matrix[r][c] = self[c][r] / s;
            }
        }
        let translation: Vector3 = matrix.get_linear() * self.get_translation();
        for r in 0..3 {
            matrix[r][3] = -translation.elements()[r];
        }
        matrix
    }

    /// Constructs translation matrix.
    ///
    pub fn translation(offset: Vector3) -> Matrix4 {
        Matrix::from([
            [1.0, 0.0, 0.0, offset.x],
            [0.0, 1.0, 0.0, offset.y],
            [0.0, 0.0, 1.0, offset.z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
    /// Constructs scale matrix.
    ///
    pub fn scale(x: f32, y: f32, z: f32) -> Matrix4 {
        Matrix4::from_linear(Matrix3::scale(x, y, z))
    }
    /// Embeds 3x3 linear transform into upper-left corner of identity matrix.
    ///
    pub fn from_linear(linear: Matrix3) -> Matrix4 {
        let mut matrix: Matrix4 = Matrix::identity();
        for r in 0..3 {
            matrix[r][..3].copy_from_slice(&linear[r]);
        }
        matrix
    }
    /// Constructs rotation matrix from 3x3 rotation.
    ///
    pub fn from_rotation(rotation: Matrix3) -> Matrix4 {
        Matrix4::from_linear(rotation)
    }
    /// Constructs rotation matrix which is equal to `Rx * Ry * Rz`.
    ///
    pub fn rotation(x: Angle, y: Angle, z: Angle) -> Matrix4 {
        let mut matrix: Matrix4 = Matrix::identity();
        matrix.populate_rotation(x, y, z);
        matrix
    }
    /// Overwrites upper-left 3x3 part of matrix with rotation `Rx * Ry * Rz`.
    ///
    /// Translation column and bottom row stay as they were.
    ///
    pub fn populate_rotation(&mut self, x: Angle, y: Angle, z: Angle) {
        let rotation: Matrix3 = Matrix3::rotation(x, y, z);
        for r in 0..3 {
            self[r][..3].copy_from_slice(&rotation[r]);
        }
    }
    /// Constructs `T * R * S` matrix.
    ///
    pub fn trs(translation: Vector3, rotation: Matrix3, scale: Vector3) -> Matrix4 {
        let mut matrix: Matrix4 =
            Matrix4::from_linear(rotation * Matrix3::scale(scale.x, scale.y, scale.z));
        for r in 0..3 {
            matrix[r][3] = translation.elements()[r];
        }
        matrix
    }

    /// Returns length of first basis column.
    ///
    pub fn get_x_scale(&self) -> f32 {
        self.get_linear().get_x_scale()
    }
    /// Returns length of second basis column.
    ///
    pub fn get_y_scale(&self) -> f32 {
        self.get_linear().get_y_scale()
    }
    /// Returns length of third basis column.
    ///
    pub fn get_z_scale(&self) -> f32 {
        self.get_linear().get_z_scale()
    }
    /// Returns translation column.
    ///
    pub fn get_translation(&self) -> Vector3 {
        Vector3::new(self[0][3], self[1][3], self[2][3])
    }
    /// Returns upper-left 3x3 part of matrix.
    ///
    pub fn get_linear(&self) -> Matrix3 {
        let mut matrix: Matrix3 = Matrix::zero();
        for r in 0..3 {
            matrix[r].copy_from_slice(&self[r][..3]);
        }
        matrix
    }
    /// Returns rotation part of matrix (linear part with normalized basis columns).
    ///
    pub fn get_rotation(&self) -> Matrix3 {
        self.get_linear().get_rotation()
    }

    /// Transforms position (`w` is 1.0, so translation applies).
    ///
    /// # Example
    /// ```rust
    /// # use ggcollide::mathcore::{matrices::Matrix4, points::Point3, vectors::Vector3};
    /// let matrix: Matrix4 = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0));
    /// assert_eq!(matrix.transform_point(Point3::origin()), Point3::new(1.0, 2.0, 3.0));
    /// assert_eq!(matrix.transform_vector(Vector3::unit_x()), Vector3::unit_x());
    /// ```
    ///
    pub fn transform_point(&self, point: Point3) -> Point3 {
        (*self * Point4::from(point)).homogenized()
    }
    /// Transforms direction (`w` is 0.0, so translation does not apply).
    ///
    pub fn transform_vector(&self, vector: Vector3) -> Vector3 {
        (*self * Vector4::from(vector)).xyz()
    }
}
impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Self::Output {
        let v: [f32; 4] = rhs.elements();
        Vector4::from(
            self.as_array()
                .map(|row| row.iter().zip(v.iter()).map(|(a, b)| a * b).sum::<f32>()),
        )
    }
}
impl Mul<Point4> for Matrix4 {
    type Output = Point4;

    fn mul(self, rhs: Point4) -> Self::Output {
        Point4::from((self * rhs.to_vector()).elements())
    }
}
