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

//! Provides the scalar, vector and quaternion algebra of the kernel.
//!
//! Points and directions are [`Ternion`]s, rotations are [`Quaternion`]s. Both
//! implement the small [`ArithmeticVector`] and [`RealVector`] capability traits,
//! which is what the generic [`Orthotope`](crate::geometry::Orthotope) shape is
//! written against.
//!
//! All angular functions in this module operate in **radians** by default, unless
//! explicitly specified otherwise (e.g., `degrees_to_radians`).

// --- Fundamental Constants ---

/// Magnitudes at or below this value are treated as zero by normalisation and
/// inversion.
pub const EPSILON: f64 = 1e-12;

/// The default tolerance of [`approx_eq`].
pub const APPROX_EPSILON: f64 = 1e-9;

// Re-export standard mathematical constants for convenience.
pub use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI, SQRT_2, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f64 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f64 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod quaternion;
pub mod ternion;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::quaternion::Quaternion;
pub use self::ternion::Ternion;
pub use self::vector::{ArithmeticVector, RealVector};

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use orthos_core::math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use orthos_core::math::{radians_to_degrees, PI};
/// assert_eq!(radians_to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use orthos_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Performs an approximate equality comparison using [`APPROX_EPSILON`].
///
/// # Examples
///
/// ```
/// use orthos_core::math::{approx_eq, APPROX_EPSILON};
/// assert!(approx_eq(1.0, 1.0 + APPROX_EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + APPROX_EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_eps(a, b, APPROX_EPSILON)
}
