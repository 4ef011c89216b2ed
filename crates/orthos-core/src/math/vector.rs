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

//! Capability traits shared by every fixed-size vector type of the kernel.
//!
//! [`ArithmeticVector`] is the minimal vector-space contract; [`RealVector`]
//! layers the Euclidean metric on top of it for vectors over `f64`. Both traits
//! return `Self` from their operations, so `Ternion::sum` is statically a
//! `Ternion` and never a type-erased base.

use super::EPSILON;
use crate::error::{GeometryError, Result};

/// An element of a finite-dimensional vector space.
pub trait ArithmeticVector: Copy {
    /// The scalar field of the space.
    type Scalar: Copy;
    /// The fixed-size component storage returned by [`components`](Self::components).
    type Components: AsRef<[Self::Scalar]>;

    /// The number of components.
    const DIMENSION: usize;

    /// Returns the number of components of this vector.
    #[inline]
    fn dimension(&self) -> usize {
        Self::DIMENSION
    }

    /// Adds two vectors component-wise.
    fn sum(&self, other: Self) -> Self;

    /// Multiplies every component by a scalar.
    fn scale(&self, scalar: Self::Scalar) -> Self;

    /// Returns the components in their canonical order.
    fn components(&self) -> Self::Components;
}

/// A vector over the reals, equipped with the Euclidean norm.
///
/// Every method is provided in terms of [`ArithmeticVector`]; implementors only
/// opt in.
pub trait RealVector: ArithmeticVector<Scalar = f64> {
    /// Calculates the squared Euclidean norm.
    #[inline]
    fn length_squared(&self) -> f64 {
        self.components().as_ref().iter().map(|c| c * c).sum()
    }

    /// Calculates the Euclidean norm, `√Σcᵢ²`.
    #[inline]
    fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns `self - other`.
    #[inline]
    fn difference(&self, other: Self) -> Self {
        self.sum(other.scale(-1.0))
    }

    /// Returns the additive inverse, `-self`.
    #[inline]
    fn inverse(&self) -> Self {
        self.scale(-1.0)
    }

    /// Returns the Euclidean distance between two vectors.
    #[inline]
    fn distance(&self, other: Self) -> f64 {
        self.difference(other).length()
    }

    /// Returns the vector scaled to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] if the length is at most
    /// [`EPSILON`].
    fn normalised(&self) -> Result<Self> {
        let length = self.length();
        if length > EPSILON {
            Ok(self.scale(1.0 / length))
        } else {
            Err(GeometryError::DivideByZero {
                operation: "normalise a vector",
            })
        }
    }
}
