use crate::ray::Ray;
use nalgebra::{Point3, Vector3};

pub type P3 = Point3<f64>;
pub type V3 = Vector3<f64>;

/// Tolerance shared by every degeneracy check.
pub const EPSILON: f64 = 1e-7;

pub fn is_near_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

/// True when `cross_or_dot`, a cross-product norm or dot product of two
/// vectors with lengths `a` and `b`, is at most `EPSILON * a * b`. Any
/// zero-length input therefore counts as parallel.
pub(crate) fn nearly_parallel(cross_or_dot: f64, a: f64, b: f64) -> bool {
    cross_or_dot.abs() <= EPSILON * a * b
}

pub fn is_finite_point(p: &P3) -> bool {
    p.coords.iter().all(|c| c.is_finite())
}

/// A plane through `origin` with (not necessarily unit) `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub origin: P3,
    pub normal: V3,
}

impl Plane {
    pub fn new(origin: P3, normal: V3) -> Self {
        Plane { origin, normal }
    }

    pub fn from_points(a: &P3, b: &P3, c: &P3) -> Self {
        let n = (b - a).cross(&(c - a));
        Plane::new(*a, n)
    }

    pub fn is_degenerate(&self) -> bool {
        is_near_zero(self.normal.norm())
    }

    pub fn signed_distance(&self, p: &P3) -> f64 {
        (p - self.origin).dot(&self.normal) / self.normal.norm()
    }

    /// Parameter `t` where the line through `ray.start` and `ray.end` meets the
    /// plane, with `t = 0` at start and `t = 1` at end. `None` when the segment
    /// runs parallel to the plane (or either the segment or the normal is
    /// degenerate).
    pub fn segment_param(&self, ray: &Ray) -> Option<f64> {
        let d = ray.dir();
        let den = d.dot(&self.normal);
        if nearly_parallel(den, d.norm(), self.normal.norm()) {
            return None;
        }
        let num = (self.origin - ray.start).dot(&self.normal);
        Some(num / den)
    }
}
