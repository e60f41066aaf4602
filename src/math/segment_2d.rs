use std::f64::consts::PI;

use super::{Point2, ON_SEGMENT_EPSILON};

/// An ordered pair of distinct points.
///
/// Represents a polygon edge, a candidate runway, or an extension ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point2,
    pub b: Point2,
}

impl Segment {
    /// Creates a new segment from `a` to `b`.
    #[must_use]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    /// Returns the endpoint-to-endpoint distance.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    /// Returns the point halfway between the two endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        Point2::new((self.a.x + self.b.x) / 2.0, (self.a.y + self.b.y) / 2.0)
    }
}

/// Bearing from `src` to `dest` in degrees, in `[0, 360)`.
///
/// Measured with the y axis inverted (screen convention), so the angle
/// increases clockwise from the positive x direction.
#[must_use]
pub fn angle_between(src: &Point2, dest: &Point2) -> f64 {
    let dx = dest.x - src.x;
    let dy = -(dest.y - src.y);
    let rads = dy.atan2(dx);
    let rads = if rads < 0.0 { -rads } else { 2.0 * PI - rads };
    let degrees = rads.to_degrees();
    if degrees >= 360.0 {
        degrees - 360.0
    } else {
        degrees
    }
}

/// Tests whether `pt` touches the segment.
///
/// True iff the summed distances from `pt` to both endpoints equal the
/// segment length within an absolute tolerance of 1e-11. This is the
/// operative definition of "touching" used to tell genuine crossings apart
/// from shared-endpoint contacts.
#[must_use]
pub fn point_on_segment(seg: &Segment, pt: &Point2) -> bool {
    let summed = (pt - seg.a).norm() + (pt - seg.b).norm();
    (summed - seg.length()).abs() < ON_SEGMENT_EPSILON
}
