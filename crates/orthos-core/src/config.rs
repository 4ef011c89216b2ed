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

//! Tolerance configuration for validation and intersection testing.
//!
//! Every comparison in the crate that is not exact goes through one of the
//! fields of [`Tolerances`], so the numeric slack in use is always visible at the
//! call site instead of being buried in a constant.

use crate::error::{GeometryError, Result};

/// Default bound on the absolute cosine between two edges of a validated box.
pub const DEFAULT_ORTHOGONALITY_TOLERANCE: f64 = 1e-6;

/// Default length below which a cross-product separating axis is skipped.
///
/// The axis is built from two unit vectors, so its length is the sine of the
/// angle between the source edges.
pub const DEFAULT_PARALLEL_AXIS_TOLERANCE: f64 = 1e-6;

/// Default allowed deviation of a rotation quaternion's norm from one.
pub const DEFAULT_VERSOR_TOLERANCE: f64 = 1e-6;

/// The tolerances used by box validation and the separating axis test.
///
/// # Examples
///
/// ```
/// use orthos_core::Tolerances;
///
/// let strict = Tolerances::default();
/// assert!(strict.validate().is_ok());
/// assert!(Tolerances::LOOSE.orthogonality > strict.orthogonality);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tolerances {
    /// Maximum `|cos θ|` between any two edges of a box, checked as
    /// `|a·b| <= orthogonality * |a| * |b|`. Zero-length edges always pass.
    pub orthogonality: f64,
    /// Cross-product axes shorter than this are treated as non-separating.
    pub parallel_axis: f64,
    /// Allowed `| |q| - 1 |` before a rotation is reported as not being a versor.
    pub versor: f64,
}

impl Tolerances {
    /// The default, strict tolerance set.
    pub const STRICT: Self = Self {
        orthogonality: DEFAULT_ORTHOGONALITY_TOLERANCE,
        parallel_axis: DEFAULT_PARALLEL_AXIS_TOLERANCE,
        versor: DEFAULT_VERSOR_TOLERANCE,
    };

    /// A permissive preset for hand-entered or measured geometry, accepting edges
    /// up to roughly half a degree away from perpendicular.
    pub const LOOSE: Self = Self {
        orthogonality: 1e-2,
        parallel_axis: DEFAULT_PARALLEL_AXIS_TOLERANCE,
        versor: 1e-3,
    };

    /// Returns a copy with a different orthogonality tolerance.
    #[inline]
    pub fn with_orthogonality(self, orthogonality: f64) -> Self {
        Self {
            orthogonality,
            ..self
        }
    }

    /// Returns a copy with a different parallel-axis tolerance.
    #[inline]
    pub fn with_parallel_axis(self, parallel_axis: f64) -> Self {
        Self {
            parallel_axis,
            ..self
        }
    }

    /// Checks that every tolerance is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("orthogonality", self.orthogonality),
            ("parallel_axis", self.parallel_axis),
            ("versor", self.versor),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Tolerances {
    /// Returns [`Tolerances::STRICT`].
    #[inline]
    fn default() -> Self {
        Self::STRICT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let tolerances = Tolerances::default();
        assert_eq!(tolerances, Tolerances::STRICT);
        assert_eq!(tolerances.orthogonality, DEFAULT_ORTHOGONALITY_TOLERANCE);
        assert_eq!(tolerances.parallel_axis, DEFAULT_PARALLEL_AXIS_TOLERANCE);
        assert_eq!(tolerances.versor, DEFAULT_VERSOR_TOLERANCE);
    }

    #[test]
    fn test_builders() {
        let tolerances = Tolerances::default()
            .with_orthogonality(0.1)
            .with_parallel_axis(1e-3);
        assert_eq!(tolerances.orthogonality, 0.1);
        assert_eq!(tolerances.parallel_axis, 1e-3);
        assert_eq!(tolerances.versor, DEFAULT_VERSOR_TOLERANCE);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Tolerances::LOOSE.validate().is_ok());

        let negative = Tolerances::default().with_orthogonality(-1.0);
        assert_eq!(
            negative.validate(),
            Err(GeometryError::InvalidTolerance {
                name: "orthogonality",
                value: -1.0
            })
        );

        let nan = Tolerances::default().with_parallel_axis(f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(GeometryError::InvalidTolerance {
                name: "parallel_axis",
                ..
            })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial() {
        let tolerances: Tolerances = serde_json::from_str(r#"{ "orthogonality": 0.05 }"#)
            .expect("partial tolerance set should deserialize");
        assert_eq!(tolerances.orthogonality, 0.05);
        assert_eq!(tolerances.parallel_axis, DEFAULT_PARALLEL_AXIS_TOLERANCE);
    }
}
