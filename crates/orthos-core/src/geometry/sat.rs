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

//! Separating Axis Theorem (SAT) overlap test for pairs of boxes.
//!
//! Two convex polyhedra are disjoint if and only if some axis exists along which
//! their projections do not overlap. For two boxes it is enough to try fifteen
//! candidates: the three face normals of each box and the nine cross products
//! of one edge direction from each.
//!
//! Every candidate axis is unit length, so one absolute comparison is meaningful
//! across all of them. Cross products of (near-)parallel edges carry no
//! information and are skipped instead of normalised.
//!
//! Degenerate boxes (flat sheets, segments and points) are tested through an
//! orthonormal frame aligned with their remaining edges, so they still offer
//! three face axes each.

use super::orthotope::Orthotope;
use crate::config::Tolerances;
use crate::math::{RealVector, Ternion};

/// Where a separating axis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSource {
    /// Axis `.0` of the first box's frame.
    FaceOfFirst(usize),
    /// Axis `.0` of the second box's frame.
    FaceOfSecond(usize),
    /// The cross product of frame axis `.0` of the first box with frame axis
    /// `.1` of the second.
    EdgePair(usize, usize),
}

/// A unit axis along which two boxes' projections do not overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeparatingAxis {
    /// The unit axis.
    pub axis: Ternion,
    /// Which candidate produced the axis.
    pub source: AxisSource,
    /// The distance between the two projected intervals along `axis`. Always positive.
    pub gap: f64,
}

/// A box reduced to what the projection needs: its centre, half edges and an
/// orthonormal frame whose axes follow the non-degenerate edges.
struct Frame {
    centre: Ternion,
    half_edges: [Ternion; 3],
    normals: [Ternion; 3],
}

impl Frame {
    fn of<T: Orthotope<3, Vector = Ternion>>(shape: &T) -> Self {
        Self {
            centre: shape.centre(),
            half_edges: shape.halves(),
            normals: complete_frame(shape.orthonormals()),
        }
    }

    /// The projected half-width along `axis`, `Σ |½eᵢ · axis|`.
    #[inline]
    fn radius(&self, axis: Ternion) -> f64 {
        self.half_edges.iter().map(|edge| edge.dot(axis).abs()).sum()
    }
}

/// Completes the edge directions of a box to an orthonormal frame.
///
/// A flat box gets the cross product of its two remaining directions. A segment
/// keeps its direction and gains two perpendiculars; a point takes the standard
/// basis. Zero-length edges project to nothing, so any frame aligned with the
/// surviving edges keeps the test exact.
fn complete_frame(directions: [Option<Ternion>; 3]) -> [Ternion; 3] {
    match directions {
        [Some(a), Some(b), Some(c)] => [a, b, c],
        [None, Some(b), Some(c)] => [b.cross(c).normalised_or(Ternion::X), b, c],
        [Some(a), None, Some(c)] => [a, c.cross(a).normalised_or(Ternion::Y), c],
        [Some(a), Some(b), None] => [a, b, a.cross(b).normalised_or(Ternion::Z)],
        [Some(d), None, None] => {
            let [u, w] = perpendiculars(d);
            [d, u, w]
        }
        [None, Some(d), None] => {
            let [u, w] = perpendiculars(d);
            [w, d, u]
        }
        [None, None, Some(d)] => {
            let [u, w] = perpendiculars(d);
            [u, w, d]
        }
        [None, None, None] => Ternion::BASIS,
    }
}

/// Two unit vectors that form an orthonormal frame with the unit vector `d`.
fn perpendiculars(d: Ternion) -> [Ternion; 2] {
    let least_parallel = Ternion::BASIS
        .into_iter()
        .min_by(|p, q| d.dot(*p).abs().total_cmp(&d.dot(*q).abs()))
        .unwrap_or(Ternion::X);
    let u = d.cross(least_parallel).normalised_or(Ternion::Y);
    [u, d.cross(u)]
}

/// Measures the gap between both projections along a unit `axis`.
///
/// Positive when the axis separates the boxes. Touching boxes give zero.
#[inline]
fn projection_gap(first: &Frame, second: &Frame, offset: Ternion, axis: Ternion) -> f64 {
    offset.dot(axis).abs() - (first.radius(axis) + second.radius(axis))
}

/// Searches the fifteen candidate axes for one that separates `first` from `second`.
///
/// Candidates are tried in a fixed order: the face normals of `first`, those of
/// `second`, then the edge-pair cross products with `first`'s edge as the outer
/// loop. Returns the first separating axis found, or `None` when the boxes
/// overlap (touching counts as overlapping).
pub fn find_separating_axis<A, B>(
    first: &A,
    second: &B,
    tolerances: &Tolerances,
) -> Option<SeparatingAxis>
where
    A: Orthotope<3, Vector = Ternion>,
    B: Orthotope<3, Vector = Ternion>,
{
    let a = Frame::of(first);
    let b = Frame::of(second);
    let offset = b.centre - a.centre;

    let test = |axis: Ternion, source: AxisSource| {
        let gap = projection_gap(&a, &b, offset, axis);
        (gap > 0.0).then(|| {
            log::trace!("separating axis {axis} from {source:?} with gap {gap}");
            SeparatingAxis { axis, source, gap }
        })
    };

    for (i, normal) in a.normals.iter().enumerate() {
        if let Some(found) = test(*normal, AxisSource::FaceOfFirst(i)) {
            return Some(found);
        }
    }

    for (j, normal) in b.normals.iter().enumerate() {
        if let Some(found) = test(*normal, AxisSource::FaceOfSecond(j)) {
            return Some(found);
        }
    }

    for (i, edge_a) in a.normals.iter().enumerate() {
        for (j, edge_b) in b.normals.iter().enumerate() {
            let cross = edge_a.cross(*edge_b);
            let length = cross.length();
            if length < tolerances.parallel_axis {
                log::trace!("skipping degenerate axis for edge pair ({i}, {j})");
                continue;
            }
            if let Some(found) = test(cross / length, AxisSource::EdgePair(i, j)) {
                return Some(found);
            }
        }
    }

    None
}

/// Returns `true` if no candidate axis separates the two boxes.
#[inline]
pub fn overlaps<A, B>(first: &A, second: &B, tolerances: &Tolerances) -> bool
where
    A: Orthotope<3, Vector = Ternion>,
    B: Orthotope<3, Vector = Ternion>,
{
    find_separating_axis(first, second, tolerances).is_none()
}
