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

//! Provides the [`Ternion`], a three-component real vector.

use super::vector::{ArithmeticVector, RealVector};
use super::EPSILON;
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// A vector of three real values `x`, `y` and `z`, read as `x𝐢 + y𝐣 + z𝐤`.
///
/// This is an ordinary 3D vector, named to sit alongside the quaternions: a
/// ternion is exactly the vector part of a pure quaternion. It is used both for
/// points and for free directions.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Ternion {
    /// The x component.
    pub x: f64,
    /// The y component.
    pub y: f64,
    /// The z component.
    pub z: f64,
}

impl Ternion {
    /// The origin, with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// A ternion with all components set to `1.0`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    /// The standard basis, in `X`, `Y`, `Z` order.
    pub const BASIS: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Creates a new `Ternion` with the specified components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a `Ternion` with all three components set to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Returns a new ternion with the absolute value of each component.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Returns the component-wise minimum of two ternions.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Returns the component-wise maximum of two ternions.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Calculates the dot product of this ternion and another.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product of this ternion and another.
    ///
    /// The result is the zero vector when the operands are parallel.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns this ternion scaled to unit length, or `fallback` when its length
    /// is at most [`EPSILON`].
    ///
    /// The fallback is returned as given; it is not normalised.
    #[inline]
    pub fn normalised_or(&self, fallback: Self) -> Self {
        let length = self.length();
        if length > EPSILON {
            *self * (1.0 / length)
        } else {
            fallback
        }
    }

    /// Returns `true` if no component is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns `true` if every component differs from `other`'s by at most `tolerance`.
    #[inline]
    pub fn within(&self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

impl ArithmeticVector for Ternion {
    type Scalar = f64;
    type Components = [f64; 3];

    const DIMENSION: usize = 3;

    #[inline]
    fn sum(&self, other: Self) -> Self {
        *self + other
    }

    #[inline]
    fn scale(&self, scalar: f64) -> Self {
        *self * scalar
    }

    #[inline]
    fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl RealVector for Ternion {}

// --- Operator Overloads ---

impl Add for Ternion {
    type Output = Self;
    /// Adds two ternions component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Ternion {
    type Output = Self;
    /// Subtracts two ternions component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Ternion {
    type Output = Self;
    /// Multiplies the ternion by a scalar.
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Mul<Ternion> for f64 {
    type Output = Ternion;
    /// Multiplies a scalar by a ternion.
    #[inline]
    fn mul(self, rhs: Ternion) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Ternion {
    type Output = Self;
    /// Divides the ternion by a scalar.
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Neg for Ternion {
    type Output = Self;
    /// Negates the ternion.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Index<usize> for Ternion {
    type Output = f64;
    /// Allows accessing a component by index (`t[0]`, `t[1]`, `t[2]`).
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Ternion"),
        }
    }
}

impl IndexMut<usize> for Ternion {
    /// Allows mutating a component by index (`t[0] = ...`).
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Ternion"),
        }
    }
}

impl From<[f64; 3]> for Ternion {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Ternion> for [f64; 3] {
    #[inline]
    fn from(t: Ternion) -> Self {
        [t.x, t.y, t.z]
    }
}

impl fmt::Display for Ternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// --- Approximate Equality ---

impl AbsDiffEq for Ternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Ternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Ternion {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
