use crate::error::Result;
use crate::island::Island;
use crate::math::segment_2d::{angle_between, Segment};
use crate::math::{Point2, NEAR_COINCIDENT_EPSILON};

/// Finds the longest runway that fits inside an island.
///
/// Every unordered vertex pair is tested once; visible pairs are extended
/// outward on both sides before being measured, since the longest line need
/// not end on a vertex. Ties are resolved in favor of the last candidate
/// enumerated (non-strict comparison). Returns `Ok(None)` when no vertex
/// pair admits an interior segment.
///
/// # Errors
///
/// Never fails for a well-formed island; index errors from the visibility
/// predicate are propagated rather than unwrapped.
pub fn calculate(island: &Island) -> Result<Option<Segment>> {
    let n = island.vertex_count();
    let mut longest = f64::NEG_INFINITY;
    let mut best: Option<Segment> = None;

    // n choose 2: once (a, b) is tested, (b, a) never is
    for a in 0..n {
        for b in (a + 1)..n {
            if !island.contains_line(a, b)? {
                continue;
            }
            let va = island.vertex(a);
            let vb = island.vertex(b);
            let pa = extend(island, &va, &vb, true);
            let pb = extend(island, &va, &vb, false);
            let dist = (pa - pb).norm();
            if dist >= longest {
                longest = dist;
                best = Some(Segment::new(pa, pb));
            }
        }
    }
    Ok(best)
}

/// Attempts to extend one end of a valid segment out to the boundary.
///
/// A point is projected along the segment's own direction far enough to be
/// guaranteed outside the island, and the nearest boundary hit on the way
/// back is taken as the new endpoint. The midpoint between the original
/// endpoint and the hit must still be interior; otherwise the extension
/// would pass outside the island and the original endpoint is kept.
fn extend(island: &Island, a: &Point2, b: &Point2, extend_a: bool) -> Point2 {
    let bounds = island.bounds();
    // always at least the island's diameter for non-degenerate bounds
    let reach = bounds.width() * bounds.height();

    let (origin, other) = if extend_a { (a, b) } else { (b, a) };
    let bearing = angle_between(other, origin).to_radians();
    let far = Point2::new(
        origin.x + reach * bearing.cos(),
        origin.y + reach * bearing.sin(),
    );

    let Some(hit) = closest_intersection(island, &far, origin) else {
        return *origin;
    };
    let mid = Segment::new(*origin, hit).midpoint();
    if island.contains_point(&mid) {
        hit
    } else {
        *origin
    }
}

/// The boundary hit nearest to `origin` on the segment towards `far`.
///
/// Hits within 1e-7 of `origin` are degenerate self-detections of the point
/// being extended and are suppressed.
fn closest_intersection(island: &Island, far: &Point2, origin: &Point2) -> Option<Point2> {
    let mut nearest = f64::INFINITY;
    let mut result = None;
    for hit in island.intersections(far, origin) {
        let dist = (hit - origin).norm();
        if dist > NEAR_COINCIDENT_EPSILON && dist < nearest {
            nearest = dist;
            result = Some(hit);
        }
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::segment_2d::point_on_segment;
    use approx::assert_relative_eq;

    fn island(coords: &[(f64, f64)]) -> Island {
        Island::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()).unwrap()
    }

    /// Asserts that both endpoints lie on the island boundary (vertex or
    /// edge interior).
    fn assert_on_boundary(isle: &Island, runway: &Segment) {
        let n = isle.vertex_count();
        for pt in [&runway.a, &runway.b] {
            let on_edge = (0..n).any(|i| {
                let edge = Segment::new(isle.vertex(i), isle.vertex((i + 1) % n));
                point_on_segment(&edge, pt)
            });
            assert!(on_edge, "endpoint {pt} not on the boundary");
        }
    }

    #[test]
    fn rectangle_runway_is_the_diagonal() {
        let isle = island(&[(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0)]);
        let runway = calculate(&isle).unwrap().unwrap();
        assert_relative_eq!(runway.length(), 125.0_f64.sqrt(), epsilon = 1e-6);
        assert_on_boundary(&isle, &runway);
    }

    #[test]
    fn convex_pentagon_runway_is_the_longest_diagonal() {
        // Regular pentagon on a circle of radius 10; the longest diagonal
        // subtends two edges: 2 * r * sin(2π/5).
        let radius = 10.0;
        let vertices: Vec<(f64, f64)> = (0..5)
            .map(|i| {
                let theta = (90.0 + 72.0 * f64::from(i)).to_radians();
                (radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        let isle = island(&vertices);
        let runway = calculate(&isle).unwrap().unwrap();
        let expected = 2.0 * radius * (0.4 * std::f64::consts::PI).sin();
        assert_relative_eq!(runway.length(), expected, epsilon = 1e-6);
        assert_on_boundary(&isle, &runway);
    }

    #[test]
    fn triangle_runway_is_the_longest_edge() {
        // Every pair is adjacent; extension finds no room beyond the corners.
        let isle = island(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        let runway = calculate(&isle).unwrap().unwrap();
        assert_relative_eq!(runway.length(), 5.0, epsilon = 1e-6);
        assert_on_boundary(&isle, &runway);
    }

    #[test]
    fn l_shape_runway_spans_the_arms() {
        // (0,4) to (4,0) grazes the reflex vertex (2,2) and cannot be
        // extended past either corner.
        let isle = island(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 4.0),
            (0.0, 4.0),
        ]);
        let runway = calculate(&isle).unwrap().unwrap();
        assert_relative_eq!(runway.length(), 32.0_f64.sqrt(), epsilon = 1e-6);
        assert_on_boundary(&isle, &runway);
    }

    #[test]
    fn extension_reaches_a_non_vertex_boundary_point() {
        // Reflex pentagon: the segment (10,0)-(2,3) continues through open
        // interior past the reflex vertex and is clipped by the left edge
        // at (0, 3.75).
        let isle = island(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (2.0, 3.0),
            (0.0, 10.0),
        ]);
        assert!(isle.contains_line(1, 3).unwrap());

        let extended = extend(
            &isle,
            &Point2::new(10.0, 0.0),
            &Point2::new(2.0, 3.0),
            false,
        );
        assert!((extended.x).abs() < 1e-6, "x={}", extended.x);
        assert!((extended.y - 3.75).abs() < 1e-6, "y={}", extended.y);

        // Round-trip: the clipped endpoint genuinely lies on the edge that
        // stopped it.
        let left_edge = Segment::new(Point2::new(0.0, 10.0), Point2::new(0.0, 0.0));
        assert!(point_on_segment(&left_edge, &extended));
    }

    #[test]
    fn extension_noop_without_boundary_hit() {
        // Extending (0,0)-(2,2) in the L-shape points into the notch and
        // meets no non-adjacent edge at all, so the endpoint stays put.
        let isle = island(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 4.0),
            (0.0, 4.0),
        ]);
        let extended = extend(&isle, &Point2::new(0.0, 0.0), &Point2::new(2.0, 2.0), false);
        assert!((extended.x - 2.0).abs() < 1e-9);
        assert!((extended.y - 2.0).abs() < 1e-9);
    }

    #[test]
    fn extension_rejected_when_midpoint_leaves_the_island() {
        // U-shape: extending (0,0)-(3,3) crosses the gap between the arms
        // and hits the far arm at (7,7), but the midpoint (5,5) is outside,
        // so the extension is discarded.
        let isle = island(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (7.0, 10.0),
            (7.0, 3.0),
            (3.0, 3.0),
            (3.0, 10.0),
            (0.0, 10.0),
        ]);
        let extended = extend(&isle, &Point2::new(0.0, 0.0), &Point2::new(3.0, 3.0), false);
        assert!((extended.x - 3.0).abs() < 1e-9);
        assert!((extended.y - 3.0).abs() < 1e-9);
    }
}
