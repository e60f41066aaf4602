use crate::error::{IslandError, Result};
use crate::math::intersect_2d::{segment_intersect, segments_cross};
use crate::math::segment_2d::Segment;
use crate::math::{Point2, TOLERANCE};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// A simple polygon given as an ordered, implicitly closed vertex sequence.
///
/// Edge `i` joins vertex `i` and vertex `(i + 1) % n`. Vertices are kept in
/// the order supplied and the island is immutable after construction.
/// Simplicity (no self-intersection) is an unchecked precondition of the
/// loader.
#[derive(Debug, Clone)]
pub struct Island {
    vertices: Vec<Point2>,
}

impl Island {
    /// Creates an island from its vertices.
    ///
    /// # Errors
    ///
    /// Returns [`IslandError::TooFewVertices`] for fewer than 3 vertices.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(IslandError::TooFewVertices(vertices.len()).into());
        }
        Ok(Self { vertices })
    }

    /// The number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The vertex at index `i`.
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range index.
    #[must_use]
    pub fn vertex(&self, i: usize) -> Point2 {
        self.vertices[i]
    }

    /// All vertices in construction order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// The axis-aligned bounds of the island.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Aabb { min, max }
    }

    fn edge(&self, i: usize) -> Segment {
        let n = self.vertices.len();
        Segment::new(self.vertices[i], self.vertices[(i + 1) % n])
    }

    /// Tests whether a point lies inside the island (even-odd ray cast).
    #[must_use]
    pub fn contains_point(&self, pt: &Point2) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > pt.y) != (vj.y > pt.y) {
                let cross_x = vi.x + (pt.y - vi.y) / (vj.y - vi.y) * (vj.x - vi.x);
                if pt.x < cross_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Tests whether the segment between vertices `a` and `b` lies entirely
    /// within the island, touching the boundary only at its endpoints.
    ///
    /// Adjacent vertices are trivially valid (their segment is an edge). A
    /// transversal crossing with any non-adjacent edge invalidates the
    /// segment outright. What remains are grazing contacts: the segment is
    /// split at every boundary intersection and each piece's midpoint must
    /// be interior, which catches diagonals that dip outside a concave notch
    /// between two boundary touches.
    ///
    /// # Errors
    ///
    /// Returns [`IslandError::InvalidVertexPair`] for equal or out-of-range
    /// indices.
    pub fn contains_line(&self, a: usize, b: usize) -> Result<bool> {
        let n = self.vertices.len();
        if a == b || a >= n || b >= n {
            return Err(IslandError::InvalidVertexPair { a, b, len: n }.into());
        }

        let diff = a.abs_diff(b);
        if diff == 1 || diff == n - 1 {
            return Ok(true);
        }

        let candidate = Segment::new(self.vertices[a], self.vertices[b]);

        for i in 0..n {
            let j = (i + 1) % n;
            if i == a || j == a || i == b || j == b {
                // a segment touching its own endpoint's edges is not a crossing
                continue;
            }
            if segments_cross(&candidate, &self.edge(i)) {
                return Ok(false);
            }
        }

        let mut hits = self.intersections(&candidate.a, &candidate.b);
        hits.sort_by(|p, q| {
            (p - candidate.a)
                .norm()
                .total_cmp(&(q - candidate.a).norm())
        });

        let mut chain = Vec::with_capacity(hits.len() + 2);
        chain.push(candidate.a);
        chain.extend(hits);
        chain.push(candidate.b);

        let mut left = chain[0];
        for &right in &chain[1..] {
            if (right - left).norm() < TOLERANCE {
                // distance-equal boundary points collapse to one
                continue;
            }
            let mid = Segment::new(left, right).midpoint();
            if !self.contains_point(&mid) {
                return Ok(false);
            }
            left = right;
        }
        Ok(true)
    }

    /// Every point where the segment from `a` to `b` meets a polygon edge.
    ///
    /// Edges with an endpoint exactly equal to `a` or `b` are skipped so a
    /// query anchored on a vertex does not report its own endpoint. The
    /// exact comparison only ever fires for query points that are themselves
    /// vertices; extended real-valued points never match. No ordering is
    /// guaranteed.
    #[must_use]
    pub fn intersections(&self, a: &Point2, b: &Point2) -> Vec<Point2> {
        let query = Segment::new(*a, *b);
        let mut found = Vec::new();
        for i in 0..self.vertices.len() {
            let edge = self.edge(i);
            if edge.a == *a || edge.b == *a || edge.a == *b || edge.b == *b {
                continue;
            }
            if let Some(pt) = segment_intersect(&query, &edge) {
                found.push(pt);
            }
        }
        found
    }
}
