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

//! Defines the error taxonomy shared by the algebra and geometry modules.

use thiserror::Error;

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// An error raised by a vector, quaternion or box operation.
///
/// Construction-time validation failures (`NonOrthogonalEdges`, `NonFinite`) and
/// degenerate arithmetic (`DivideByZero`) are the only failure surfaces. A
/// degenerate separating axis during intersection testing is *not* an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Two edge vectors of a box are not orthogonal within the configured tolerance.
    #[error(
        "edges `{first}` and `{second}` are not orthogonal (|cos| = {cosine:.3e}, tolerance {tolerance:.3e})"
    )]
    NonOrthogonalEdges {
        /// The name of the first offending edge.
        first: &'static str,
        /// The name of the second offending edge.
        second: &'static str,
        /// The absolute cosine of the angle between the two edges.
        cosine: f64,
        /// The tolerance the cosine was checked against.
        tolerance: f64,
    },
    /// A coordinate handed to a validated constructor is NaN or infinite.
    #[error("`{what}` has a non-finite component")]
    NonFinite {
        /// The name of the offending input.
        what: &'static str,
    },
    /// An operation would divide by a zero (or vanishingly small) magnitude.
    #[error("cannot {operation}: magnitude is zero")]
    DivideByZero {
        /// A short description of the operation, e.g. `"normalise a vector"`.
        operation: &'static str,
    },
    /// A tolerance is negative or not finite.
    #[error("tolerance `{name}` must be finite and non-negative, got {value}")]
    InvalidTolerance {
        /// The name of the tolerance field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GeometryError::DivideByZero {
            operation: "normalise a vector",
        };
        assert_eq!(err.to_string(), "cannot normalise a vector: magnitude is zero");

        let err = GeometryError::NonFinite { what: "origin" };
        assert_eq!(err.to_string(), "`origin` has a non-finite component");

        let err = GeometryError::NonOrthogonalEdges {
            first: "a",
            second: "b",
            cosine: 0.5,
            tolerance: 1e-6,
        };
        let message = err.to_string();
        assert!(message.starts_with("edges `a` and `b` are not orthogonal"));
        assert!(message.contains("5.000e-1"));
    }
}
