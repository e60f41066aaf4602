use super::segment_2d::{point_on_segment, Segment};
use super::{Point2, TOLERANCE};

/// Intersection of the infinite lines through two segments, accepted only
/// if it falls inside both segments' closed bounding boxes.
///
/// Returns `None` for parallel or coincident lines (degenerate denominator)
/// or when the intersection lies outside either segment's extent.
#[must_use]
pub fn segment_intersect(s1: &Segment, s2: &Segment) -> Option<Point2> {
    let d1 = s1.b - s1.a;
    let d2 = s2.b - s2.a;

    let denom = d1.x * d2.y - d1.y * d2.x;
    if denom.abs() < TOLERANCE {
        return None;
    }

    let dx = s2.a.x - s1.a.x;
    let dy = s2.a.y - s1.a.y;
    let t = (dx * d2.y - dy * d2.x) / denom;
    let pt = Point2::new(s1.a.x + d1.x * t, s1.a.y + d1.y * t);

    if in_bounding_box(s1, &pt) && in_bounding_box(s2, &pt) {
        Some(pt)
    } else {
        None
    }
}

/// Tests whether two segments cross transversally.
///
/// Contacts at endpoints are deliberately excluded: two polygon edges
/// sharing a vertex with a candidate diagonal must not count as a crossing.
#[must_use]
pub fn segments_cross(s1: &Segment, s2: &Segment) -> bool {
    if !segments_intersect(s1, s2) {
        return false;
    }
    !(point_on_segment(s1, &s2.a)
        || point_on_segment(s1, &s2.b)
        || point_on_segment(s2, &s1.a)
        || point_on_segment(s2, &s1.b))
}

/// Standard orientation-sign segment-intersection test, touches included.
fn segments_intersect(s1: &Segment, s2: &Segment) -> bool {
    let d1 = orient(&s2.a, &s2.b, &s1.a);
    let d2 = orient(&s2.a, &s2.b, &s1.b);
    let d3 = orient(&s1.a, &s1.b, &s2.a);
    let d4 = orient(&s1.a, &s1.b, &s2.b);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1.abs() < TOLERANCE && in_bounding_box(s2, &s1.a))
        || (d2.abs() < TOLERANCE && in_bounding_box(s2, &s1.b))
        || (d3.abs() < TOLERANCE && in_bounding_box(s1, &s2.a))
        || (d4.abs() < TOLERANCE && in_bounding_box(s1, &s2.b))
}

/// Twice the signed area of triangle `a`, `b`, `c`.
fn orient(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn in_bounding_box(seg: &Segment, pt: &Point2) -> bool {
    pt.x >= seg.a.x.min(seg.b.x) - TOLERANCE
        && pt.x <= seg.a.x.max(seg.b.x) + TOLERANCE
        && pt.y >= seg.a.y.min(seg.b.y) - TOLERANCE
        && pt.y <= seg.a.y.max(seg.b.y) + TOLERANCE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point2::new(ax, ay), Point2::new(bx, by))
    }

    // ── segment_intersect tests ──

    #[test]
    fn crossing_segments_meet_in_the_middle() {
        let pt = segment_intersect(&seg(0.0, 0.0, 2.0, 2.0), &seg(0.0, 2.0, 2.0, 0.0)).unwrap();
        assert!((pt.x - 1.0).abs() < TOL);
        assert!((pt.y - 1.0).abs() < TOL);
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        assert!(segment_intersect(&seg(0.0, 0.0, 2.0, 0.0), &seg(0.0, 1.0, 2.0, 1.0)).is_none());
    }

    #[test]
    fn intersection_outside_extent_rejected() {
        // The infinite lines meet at (3, 0), past the end of the first segment.
        assert!(segment_intersect(&seg(0.0, 0.0, 1.0, 0.0), &seg(3.0, -1.0, 3.0, 1.0)).is_none());
    }

    #[test]
    fn shared_endpoint_reported() {
        // The closed bounding boxes include endpoints.
        let pt = segment_intersect(&seg(0.0, 0.0, 2.0, 2.0), &seg(2.0, 2.0, 4.0, 0.0)).unwrap();
        assert!((pt.x - 2.0).abs() < TOL);
        assert!((pt.y - 2.0).abs() < TOL);
    }

    // ── segments_cross tests ──

    #[test]
    fn transversal_crossing_detected() {
        assert!(segments_cross(&seg(0.0, 0.0, 2.0, 2.0), &seg(0.0, 2.0, 2.0, 0.0)));
    }

    #[test]
    fn shared_endpoint_is_not_a_crossing() {
        assert!(!segments_cross(&seg(0.0, 0.0, 2.0, 2.0), &seg(2.0, 2.0, 4.0, 0.0)));
    }

    #[test]
    fn endpoint_touching_interior_is_not_a_crossing() {
        // T contact: (2, 0) lies on the first segment.
        assert!(!segments_cross(&seg(0.0, 0.0, 4.0, 0.0), &seg(2.0, 0.0, 2.0, 3.0)));
    }

    #[test]
    fn disjoint_segments_do_not_cross() {
        assert!(!segments_cross(&seg(0.0, 0.0, 1.0, 0.0), &seg(0.0, 1.0, 1.0, 1.0)));
    }
}
