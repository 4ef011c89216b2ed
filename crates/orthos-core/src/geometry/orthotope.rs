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

//! The generic orthotope: an n-dimensional box in its own frame.

use crate::math::{ArithmeticVector, RealVector};

/// A shape made of an origin vertex and `N` mutually orthogonal edges
/// connected to it (a rectangle for `N = 2`, a box for `N = 3`).
///
/// Implementors supply the origin and the edges; the centre, half edges,
/// orthonormal frame and extents are derived from them.
pub trait Orthotope<const N: usize> {
    /// The vector type of the space the orthotope lives in.
    type Vector: RealVector;

    /// Returns how many origin-connected edges the orthotope has.
    #[inline]
    fn dimension(&self) -> usize {
        N
    }

    /// Returns the origin vertex.
    fn origin(&self) -> Self::Vector;

    /// Returns the origin-connected edges.
    fn original_edges(&self) -> [Self::Vector; N];

    /// Returns the centre, `origin + Σ ½eᵢ`.
    fn centre(&self) -> Self::Vector {
        self.original_edges()
            .iter()
            .fold(self.origin(), |centre, edge| centre.sum(edge.scale(0.5)))
    }

    /// Returns every edge scaled by one half.
    fn halves(&self) -> [Self::Vector; N] {
        self.original_edges().map(|edge| edge.scale(0.5))
    }

    /// Returns the unit direction of every edge, or `None` for an edge whose
    /// length is zero.
    fn orthonormals(&self) -> [Option<Self::Vector>; N] {
        self.original_edges().map(|edge| edge.normalised().ok())
    }

    /// Returns the half length of every edge.
    fn extents(&self) -> [f64; N] {
        self.original_edges().map(|edge| edge.length() * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Quaternion, Ternion};
    use approx::assert_relative_eq;

    /// A rectangle in the plane, spanned by two edges.
    struct Rectangle {
        origin: Ternion,
        edges: [Ternion; 2],
    }

    impl Orthotope<2> for Rectangle {
        type Vector = Ternion;

        fn origin(&self) -> Ternion {
            self.origin
        }

        fn original_edges(&self) -> [Ternion; 2] {
            self.edges
        }
    }

    /// A 4-dimensional tesseract, using quaternions as points of ℝ⁴.
    struct Tesseract {
        origin: Quaternion,
        side: f64,
    }

    impl Orthotope<4> for Tesseract {
        type Vector = Quaternion;

        fn origin(&self) -> Quaternion {
            self.origin
        }

        fn original_edges(&self) -> [Quaternion; 4] {
            let s = self.side;
            [
                Quaternion::new(s, 0.0, 0.0, 0.0),
                Quaternion::new(0.0, s, 0.0, 0.0),
                Quaternion::new(0.0, 0.0, s, 0.0),
                Quaternion::new(0.0, 0.0, 0.0, s),
            ]
        }
    }

    #[test]
    fn test_rectangle_derived_values() {
        let rect = Rectangle {
            origin: Ternion::new(1.0, 1.0, 0.0),
            edges: [Ternion::new(4.0, 0.0, 0.0), Ternion::new(0.0, 2.0, 0.0)],
        };
        assert_eq!(rect.dimension(), 2);
        assert_eq!(rect.centre(), Ternion::new(3.0, 2.0, 0.0));
        assert_eq!(
            rect.halves(),
            [Ternion::new(2.0, 0.0, 0.0), Ternion::new(0.0, 1.0, 0.0)]
        );
        assert_eq!(rect.orthonormals(), [Some(Ternion::X), Some(Ternion::Y)]);
        assert_eq!(rect.extents(), [2.0, 1.0]);
    }

    #[test]
    fn test_degenerate_edge_has_no_orthonormal() {
        let flat = Rectangle {
            origin: Ternion::ZERO,
            edges: [Ternion::new(0.0, 0.0, 2.0), Ternion::ZERO],
        };
        assert_eq!(flat.orthonormals(), [Some(Ternion::Z), None]);
        assert_eq!(flat.extents(), [1.0, 0.0]);
    }

    #[test]
    fn test_tesseract_in_four_dimensions() {
        let cell = Tesseract {
            origin: Quaternion::ZERO,
            side: 2.0,
        };
        assert_eq!(cell.dimension(), 4);
        assert_relative_eq!(cell.centre(), Quaternion::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(cell.extents(), [1.0; 4]);
    }
}
