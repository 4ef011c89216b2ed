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

//! Provides [`Obb`], an oriented bounding box.

use super::orthotope::Orthotope;
use super::sat::{self, SeparatingAxis};
use crate::config::Tolerances;
use crate::error::{GeometryError, Result};
use crate::math::{Quaternion, RealVector, Ternion};
use once_cell::sync::OnceCell;
use std::fmt;

/// An oriented box: a 3-orthotope.
///
/// A box keeps its origin vertex and the three mutually orthogonal edges `a`,
/// `b` and `c` that the origin connects to. It never changes after
/// construction; every transformation returns a new box.
///
/// The centre is computed on first use and cached. Racing initialisers compute
/// the same value from the same immutable fields, so the cache needs no
/// coordination beyond the cell itself.
#[derive(Clone)]
pub struct Obb {
    origin: Ternion,
    a: Ternion,
    b: Ternion,
    c: Ternion,
    centre: OnceCell<Ternion>,
}

impl Obb {
    /// Vertex index pairs for [`edges`](Self::edges), referring to the order of
    /// [`vertices`](Self::vertices): the four edges parallel to `a`, then the
    /// four parallel to `b`, then the four parallel to `c`.
    pub const EDGE_INDICES: [[usize; 2]; 12] = [
        // a
        [0, 4],
        [1, 5],
        [3, 6],
        [2, 7],
        // b
        [0, 3],
        [1, 2],
        [4, 6],
        [5, 7],
        // c
        [0, 1],
        [3, 2],
        [4, 5],
        [6, 7],
    ];

    /// Creates a box from an origin and three edges, validated against
    /// [`Tolerances::default`].
    ///
    /// # Errors
    ///
    /// See [`Obb::with_tolerances`].
    pub fn new(origin: Ternion, a: Ternion, b: Ternion, c: Ternion) -> Result<Self> {
        Self::with_tolerances(origin, a, b, c, &Tolerances::default())
    }

    /// Creates a box from an origin and three edges, validated against the given
    /// tolerances.
    ///
    /// # Errors
    ///
    /// * [`GeometryError::InvalidTolerance`] if `tolerances` is invalid.
    /// * [`GeometryError::NonFinite`] if any input has a NaN or infinite component.
    /// * [`GeometryError::NonOrthogonalEdges`] if two edges are further from
    ///   perpendicular than `tolerances.orthogonality` allows.
    ///
    /// # Examples
    ///
    /// ```
    /// use orthos_core::{GeometryError, Obb, Ternion, Tolerances};
    ///
    /// let skewed = Obb::new(
    ///     Ternion::ZERO,
    ///     Ternion::new(1.0, 0.0, 0.0),
    ///     Ternion::new(0.01, 1.0, 0.0),
    ///     Ternion::new(0.0, 0.0, 1.0),
    /// );
    /// assert!(matches!(skewed, Err(GeometryError::NonOrthogonalEdges { .. })));
    ///
    /// let accepted = Obb::with_tolerances(
    ///     Ternion::ZERO,
    ///     Ternion::new(1.0, 0.0, 0.0),
    ///     Ternion::new(0.001, 1.0, 0.0),
    ///     Ternion::new(0.0, 0.0, 1.0),
    ///     &Tolerances::LOOSE,
    /// );
    /// assert!(accepted.is_ok());
    /// ```
    pub fn with_tolerances(
        origin: Ternion,
        a: Ternion,
        b: Ternion,
        c: Ternion,
        tolerances: &Tolerances,
    ) -> Result<Self> {
        tolerances.validate()?;
        for (what, value) in [("origin", origin), ("a", a), ("b", b), ("c", c)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { what });
            }
        }
        let edges = [("a", a), ("b", b), ("c", c)];
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            let (first, u) = edges[i];
            let (second, v) = edges[j];
            check_orthogonal(first, u, second, v, tolerances.orthogonality)?;
        }
        Ok(Self::from_parts(origin, a, b, c))
    }

    /// Creates the degenerate, zero-volume box at the coordinate origin.
    #[inline]
    pub fn empty() -> Self {
        Self::from_parts(Ternion::ZERO, Ternion::ZERO, Ternion::ZERO, Ternion::ZERO)
    }

    /// Creates the axis-aligned box with opposite corners `one` and `two`, then
    /// rotates it about its centre if a rotation is given.
    ///
    /// The corners may be given in any order. The origin is their component-wise
    /// minimum and `a`, `b`, `c` point along X, Y and Z.
    ///
    /// # Examples
    ///
    /// ```
    /// use orthos_core::{Obb, Ternion};
    ///
    /// let cube = Obb::from_corners(Ternion::ONE, Ternion::ZERO, None);
    /// assert_eq!(cube.origin(), Ternion::ZERO);
    /// assert_eq!(cube.centre(), Ternion::splat(0.5));
    /// assert_eq!(cube.volume(), 1.0);
    /// ```
    pub fn from_corners(one: Ternion, two: Ternion, rotation: Option<Quaternion>) -> Self {
        let min = one.min(two);
        let size = one.max(two) - min;
        let aligned = Self::from_parts(
            min,
            Ternion::new(size.x, 0.0, 0.0),
            Ternion::new(0.0, size.y, 0.0),
            Ternion::new(0.0, 0.0, size.z),
        );
        match rotation {
            Some(rotation) => aligned.rotate(rotation),
            None => aligned,
        }
    }

    /// Creates a box centred on `centre` with the given width, height and depth,
    /// then rotates it about that centre if a rotation is given.
    pub fn from_centre_and_extent(
        centre: Ternion,
        width_height_depth: Ternion,
        rotation: Option<Quaternion>,
    ) -> Self {
        let half = width_height_depth * 0.5;
        Self::from_corners(centre - half, centre + half, rotation)
    }

    #[inline]
    fn from_parts(origin: Ternion, a: Ternion, b: Ternion, c: Ternion) -> Self {
        Self {
            origin,
            a,
            b,
            c,
            centre: OnceCell::new(),
        }
    }

    // --- Accessors ---

    /// Returns the origin vertex.
    #[inline]
    pub fn origin(&self) -> Ternion {
        self.origin
    }

    /// Returns the first origin-connected edge.
    #[inline]
    pub fn a(&self) -> Ternion {
        self.a
    }

    /// Returns the second origin-connected edge.
    #[inline]
    pub fn b(&self) -> Ternion {
        self.b
    }

    /// Returns the third origin-connected edge.
    #[inline]
    pub fn c(&self) -> Ternion {
        self.c
    }

    /// Returns `[a, b, c]`.
    #[inline]
    pub fn edge_vectors(&self) -> [Ternion; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the centre, `origin + ½a + ½b + ½c`.
    pub fn centre(&self) -> Ternion {
        *self
            .centre
            .get_or_init(|| self.origin + (self.a + self.b + self.c) * 0.5)
    }

    // --- Transformations ---

    /// Returns this box translated by `delta`.
    #[inline]
    pub fn offset(&self, delta: Ternion) -> Self {
        Self::from_parts(self.origin + delta, self.a, self.b, self.c)
    }

    /// Returns this box rotated about its **origin** vertex.
    ///
    /// The origin stays where it is; the edges are rotated by conjugation.
    /// See [`rotate`](Self::rotate) for rotation about the centre.
    pub fn transform(&self, rotation: Quaternion) -> Self {
        note_rotation(&rotation);
        Self::from_parts(
            self.origin,
            rotation.rotate(self.a),
            rotation.rotate(self.b),
            rotation.rotate(self.c),
        )
    }

    /// Returns this box rotated about its **centre**.
    ///
    /// The centre is invariant; only the orientation changes. See
    /// [`transform`](Self::transform) for rotation about the origin.
    pub fn rotate(&self, rotation: Quaternion) -> Self {
        note_rotation(&rotation);
        let centre = self.centre();
        Self::from_parts(
            centre + rotation.rotate(self.origin - centre),
            rotation.rotate(self.a),
            rotation.rotate(self.b),
            rotation.rotate(self.c),
        )
    }

    /// Returns this box moved so that its centre is `point`, with unchanged edges.
    #[inline]
    pub fn centred(&self, point: Ternion) -> Self {
        Self::from_parts(
            point - (self.a + self.b + self.c) * 0.5,
            self.a,
            self.b,
            self.c,
        )
    }

    /// Returns this box with its edges resized to the given width, height and
    /// depth (for `a`, `b` and `c` respectively), keeping their directions and the
    /// box's centre.
    ///
    /// Negative sizes are taken by magnitude. A zero-length edge has no direction
    /// to keep, so it takes the matching standard basis axis (X for `a`, Y for
    /// `b`, Z for `c`) instead.
    ///
    /// That axis ignores the box's orientation: on a rotated box the substituted
    /// edge is generally not orthogonal to the other two, and the result fails
    /// [`is_orthogonal`](Self::is_orthogonal).
    pub fn sized(&self, width_height_depth: Ternion) -> Self {
        let size = width_height_depth.abs();
        let resized = Self::from_parts(
            Ternion::ZERO,
            self.a.normalised_or(Ternion::X) * size.x,
            self.b.normalised_or(Ternion::Y) * size.y,
            self.c.normalised_or(Ternion::Z) * size.z,
        );
        resized.centred(self.centre())
    }

    // --- Queries ---

    /// Returns the eight corners, in the order `origin`, `origin + c`,
    /// `origin + b + c`, `origin + b`, `origin + a`, `origin + a + c`,
    /// `origin + a + b`, `origin + a + b + c`.
    pub fn vertices(&self) -> [Ternion; 8] {
        let (o, a, b, c) = (self.origin, self.a, self.b, self.c);
        [
            o,
            o + c,
            o + b + c,
            o + b,
            o + a,
            o + a + c,
            o + a + b,
            o + a + b + c,
        ]
    }

    /// Returns the twelve edges as `[start, end]` pairs, following
    /// [`Obb::EDGE_INDICES`].
    pub fn edges(&self) -> [[Ternion; 2]; 12] {
        let vertices = self.vertices();
        Self::EDGE_INDICES.map(|[start, end]| [vertices[start], vertices[end]])
    }

    /// Returns the volume, `|a|·|b|·|c|`.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.a.length() * self.b.length() * self.c.length()
    }

    /// Returns `true` if every corresponding pair of vertices differs by at most
    /// `tolerance` in every coordinate.
    ///
    /// This compares vertex lists position by position, so it is an approximate
    /// equality for boxes built the same way, not a congruence test: the same
    /// box described from another origin corner is not similar.
    pub fn is_similar(&self, other: &Self, tolerance: f64) -> bool {
        self.vertices()
            .iter()
            .zip(other.vertices())
            .all(|(mine, theirs)| mine.within(theirs, tolerance))
    }

    /// Returns `true` if the edges are pairwise orthogonal within
    /// `tolerances.orthogonality`.
    pub fn is_orthogonal(&self, tolerances: &Tolerances) -> bool {
        let tolerance = tolerances.orthogonality;
        check_orthogonal("a", self.a, "b", self.b, tolerance).is_ok()
            && check_orthogonal("a", self.a, "c", self.c, tolerance).is_ok()
            && check_orthogonal("b", self.b, "c", self.c, tolerance).is_ok()
    }

    /// Returns `true` if this box and `other` overlap, using [`Tolerances::default`].
    ///
    /// Boxes that only touch are considered to be intersecting. The test is
    /// symmetric: `a.intersects(&b) == b.intersects(&a)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use orthos_core::{Obb, Quaternion, Ternion};
    /// use orthos_core::math::FRAC_PI_4;
    ///
    /// let cube = Obb::from_corners(Ternion::ZERO, Ternion::ONE, None);
    /// let diamond = Obb::from_centre_and_extent(
    ///     Ternion::new(1.6, 0.5, 0.5),
    ///     Ternion::ONE,
    ///     Some(Quaternion::euler(FRAC_PI_4, 0.0, 0.0)),
    /// );
    /// assert!(cube.intersects(&diamond));
    /// assert!(!cube.intersects(&diamond.offset(Ternion::new(0.2, 0.0, 0.0))));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersects_with(other, &Tolerances::default())
    }

    /// Returns `true` if this box and `other` overlap, using the given tolerances.
    #[inline]
    pub fn intersects_with(&self, other: &Self, tolerances: &Tolerances) -> bool {
        sat::overlaps(self, other, tolerances)
    }

    /// Returns an axis separating this box from `other`, or `None` if they overlap.
    #[inline]
    pub fn separating_axis(&self, other: &Self, tolerances: &Tolerances) -> Option<SeparatingAxis> {
        sat::find_separating_axis(self, other, tolerances)
    }
}

fn check_orthogonal(
    first: &'static str,
    u: Ternion,
    second: &'static str,
    v: Ternion,
    tolerance: f64,
) -> Result<()> {
    let scale = u.length() * v.length();
    let dot = u.dot(v).abs();
    if dot <= tolerance * scale {
        Ok(())
    } else {
        Err(GeometryError::NonOrthogonalEdges {
            first,
            second,
            cosine: dot / scale,
            tolerance,
        })
    }
}

fn note_rotation(rotation: &Quaternion) {
    let tolerance = Tolerances::default().versor;
    if !rotation.is_versor(tolerance) {
        log::debug!(
            "rotating a box by non-unit quaternion {rotation} (norm {}); edges will be scaled",
            rotation.norm()
        );
    }
}

impl Orthotope<3> for Obb {
    type Vector = Ternion;

    #[inline]
    fn origin(&self) -> Ternion {
        self.origin
    }

    #[inline]
    fn original_edges(&self) -> [Ternion; 3] {
        self.edge_vectors()
    }

    #[inline]
    fn centre(&self) -> Ternion {
        Obb::centre(self)
    }
}

impl Default for Obb {
    /// Returns [`Obb::empty`].
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Obb {
    /// Exact, field-by-field equality of origin and edges.
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.a == other.a && self.b == other.b && self.c == other.c
    }
}

impl fmt::Debug for Obb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Obb")
            .field("origin", &self.origin)
            .field("a", &self.a)
            .field("b", &self.b)
            .field("c", &self.c)
            .finish()
    }
}

impl fmt::Display for Obb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Obb[origin={}, a={}, b={}, c={}]",
            self.origin, self.a, self.b, self.c
        )
    }
}
