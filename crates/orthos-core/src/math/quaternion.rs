// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides a Quaternion type for representing 3D rotations.

use super::ternion::Ternion;
use super::vector::{ArithmeticVector, RealVector};
use super::EPSILON;
use crate::error::{GeometryError, Result};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A quaternion `r + x𝐢 + y𝐣 + z𝐤`.
///
/// Quaternions form a four-dimensional real vector space with an additional,
/// non-commutative multiplication (the Hamilton product). A unit quaternion, or
/// *versor*, describes a rotation in 3D space without the gimbal lock that Euler
/// angles suffer from; it acts on a vector `v` by conjugation, `q·v·q⁻¹`, where `v`
/// is embedded as the [pure](Quaternion::pure) quaternion `(0, v)`.
///
/// Nothing here enforces unit length. Callers that use a quaternion as a
/// rotation are responsible for passing a versor, or for calling
/// [`versor`](Quaternion::versor) first.
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
    /// The scalar (real) part.
    pub r: f64,
    /// The 𝐢 component of the vector part.
    pub x: f64,
    /// The 𝐣 component of the vector part.
    pub y: f64,
    /// The 𝐤 component of the vector part.
    pub z: f64,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// The zero quaternion. It has no inverse and represents no rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer [`euler`](Self::euler) or [`from_axis_angle`](Self::from_axis_angle).
    #[inline]
    pub const fn new(r: f64, x: f64, y: f64, z: f64) -> Self {
        Self { r, x, y, z }
    }

    /// Creates the unit quaternion for the given yaw (about Z), pitch (about Y)
    /// and roll (about X), all in radians.
    ///
    /// The rotations compose in roll, pitch, yaw order: the result rotates a
    /// vector about X first and about Z last.
    ///
    /// # Examples
    ///
    /// ```
    /// use orthos_core::{Quaternion, Ternion};
    /// use orthos_core::math::FRAC_PI_2;
    /// use approx::assert_relative_eq;
    ///
    /// let quarter_turn = Quaternion::euler(FRAC_PI_2, 0.0, 0.0);
    /// assert_relative_eq!(quarter_turn.rotate(Ternion::X), Ternion::Y, epsilon = 1e-12);
    /// ```
    pub fn euler(yaw: f64, pitch: f64, roll: f64) -> Self {
        let (sy, cy) = (yaw * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sr, cr) = (roll * 0.5).sin_cos();
        Self {
            r: cr * cp * cy + sr * sp * sy,
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
        }
    }

    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. It does not need to be normalised; a
    ///   zero-length axis yields [`Quaternion::IDENTITY`].
    /// * `angle`: The angle of rotation in radians.
    pub fn from_axis_angle(axis: Ternion, angle: f64) -> Self {
        let Ok(axis) = axis.normalised() else {
            return Self::IDENTITY;
        };
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(c, axis.x * s, axis.y * s, axis.z * s)
    }

    /// Embeds a ternion as the pure quaternion `(0, x, y, z)`.
    #[inline]
    pub const fn pure(ternion: Ternion) -> Self {
        Self::new(0.0, ternion.x, ternion.y, ternion.z)
    }

    /// Drops the scalar part, returning the vector part `(x, y, z)`.
    ///
    /// Only meaningful when `r` is (close to) zero, e.g. after rotating a pure
    /// quaternion.
    #[inline]
    pub const fn to_ternion(&self) -> Ternion {
        Ternion::new(self.x, self.y, self.z)
    }

    /// Computes the Hamilton product `self · other`.
    ///
    /// Quaternion multiplication is not commutative: `a.product(b)` applies the
    /// rotation `b` first, then `a`.
    #[inline]
    pub fn product(&self, other: Self) -> Self {
        Self {
            r: self.r * other.r - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.r * other.x + self.x * other.r + self.y * other.z - self.z * other.y,
            y: self.r * other.y - self.x * other.z + self.y * other.r + self.z * other.x,
            z: self.r * other.z + self.x * other.y - self.y * other.x + self.z * other.r,
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub const fn conjugate(&self) -> Self {
        Self::new(self.r, -self.x, -self.y, -self.z)
    }

    /// Calculates the squared norm `r² + x² + y² + z²`.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.inner_product(*self)
    }

    /// Calculates the norm of the quaternion.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns the versor (unit quaternion) pointing the same way as this one.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a zero quaternion.
    pub fn versor(&self) -> Result<Self> {
        let norm = self.norm();
        if norm > EPSILON {
            Ok(*self * (1.0 / norm))
        } else {
            Err(GeometryError::DivideByZero {
                operation: "take the versor of a quaternion",
            })
        }
    }

    /// Computes the multiplicative inverse, `conjugate / |q|²`.
    /// For a unit quaternion, the reciprocal is equal to its conjugate.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a zero quaternion.
    pub fn reciprocal(&self) -> Result<Self> {
        let norm_squared = self.norm_squared();
        if norm_squared > EPSILON * EPSILON {
            Ok(self.conjugate() * (1.0 / norm_squared))
        } else {
            Err(GeometryError::DivideByZero {
                operation: "invert a quaternion",
            })
        }
    }

    /// Computes the four-dimensional dot product of two quaternions.
    ///
    /// This is not the Hamilton product; see [`product`](Self::product) for that.
    #[inline]
    pub fn inner_product(&self, other: Self) -> f64 {
        self.r * other.r + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns `true` if the norm is within `tolerance` of one.
    #[inline]
    pub fn is_versor(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() <= tolerance
    }

    /// Returns the angle, in radians within `[0, π]`, of the rotation that takes
    /// this rotation to `other`.
    ///
    /// Both operands are normalised first. Because `q` and `-q` describe the same
    /// rotation, the result is computed as `acos(2⟨p, q⟩² − 1)`, which is blind to
    /// that sign.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] if either quaternion is zero.
    pub fn angle(&self, other: Self) -> Result<f64> {
        let inner = self.versor()?.inner_product(other.versor()?);
        Ok((2.0 * inner * inner - 1.0).clamp(-1.0, 1.0).acos())
    }

    /// Rotates a ternion by conjugation, `q · pure(v) · q*`.
    ///
    /// Uses the conjugate rather than the reciprocal, so the result is a pure
    /// rotation only when `self` is a versor.
    #[inline]
    pub fn rotate(&self, ternion: Ternion) -> Ternion {
        self.product(Self::pure(ternion))
            .product(self.conjugate())
            .to_ternion()
    }
}

impl ArithmeticVector for Quaternion {
    type Scalar = f64;
    type Components = [f64; 4];

    const DIMENSION: usize = 4;

    #[inline]
    fn sum(&self, other: Self) -> Self {
        *self + other
    }

    #[inline]
    fn scale(&self, scalar: f64) -> Self {
        *self * scalar
    }

    #[inline]
    fn components(&self) -> [f64; 4] {
        [self.r, self.x, self.y, self.z]
    }
}

impl RealVector for Quaternion {}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.product(rhs)
    }
}

impl Mul<Ternion> for Quaternion {
    type Output = Ternion;
    /// Rotates a `Ternion` by this quaternion; see [`Quaternion::rotate`].
    #[inline]
    fn mul(self, rhs: Ternion) -> Self::Output {
        self.rotate(rhs)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f64) -> Self::Output {
        Self::new(
            self.r * scalar,
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    /// Note: This is not a rotation operation.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r + rhs.r,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    /// Subtracts two quaternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r - rhs.r,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components. The result describes the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.r, -self.x, -self.y, -self.z)
    }
}

impl From<Ternion> for Quaternion {
    /// Same as [`Quaternion::pure`].
    #[inline]
    fn from(ternion: Ternion) -> Self {
        Self::pure(ternion)
    }
}

impl fmt::Display for Quaternion {
    /// Formats the quaternion in equation form, e.g. `(0.707107 + 0𝐢 + 0𝐣 - 0.707107𝐤)`,
    /// with at most six decimals per coefficient.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = [(self.r, ""), (self.x, "𝐢"), (self.y, "𝐣"), (self.z, "𝐤")];
        f.write_str("(")?;
        for (i, (value, unit)) in terms.into_iter().enumerate() {
            let sign = match (i, value.is_sign_negative() && value != 0.0) {
                (0, true) => "-",
                (0, false) => "",
                (_, true) => " - ",
                (_, false) => " + ",
            };
            write!(f, "{sign}{}{unit}", trim_decimals(value.abs()))?;
        }
        f.write_str(")")
    }
}

fn trim_decimals(value: f64) -> String {
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_owned()
}

// --- Approximate Equality ---

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.components()
            .iter()
            .zip(other.components())
            .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.components()
            .iter()
            .zip(other.components())
            .all(|(a, b)| a.relative_eq(&b, epsilon, max_relative))
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.components()
            .iter()
            .zip(other.components())
            .all(|(a, b)| a.ulps_eq(&b, epsilon, max_ulps))
    }
}
