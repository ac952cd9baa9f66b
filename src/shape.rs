use crate::math::*;
use crate::ray::Ray;
use log::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub p0: P3,
    pub p1: P3,
    pub p2: P3,
}

impl Triangle {
    pub fn new(p0: P3, p1: P3, p2: P3) -> Self {
        Triangle { p0, p1, p2 }
    }

    pub fn edges(&self) -> (V3, V3) {
        (self.p1 - self.p0, self.p2 - self.p0)
    }

    /// Unnormalized face normal, `(p1 - p0) x (p2 - p0)`.
    pub fn normal(&self) -> V3 {
        let (e1, e2) = self.edges();
        e1.cross(&e2)
    }

    pub fn area(&self) -> f64 {
        self.normal().norm() / 2.0
    }

    pub fn plane(&self) -> Plane {
        Plane::new(self.p0, self.normal())
    }

    /// True for collinear or coincident vertices.
    ///
    /// Edge lengths are squared along the way, so coordinates beyond about
    /// `1e150` overflow to infinity and such triangles count as degenerate.
    pub fn is_degenerate(&self) -> bool {
        let (e1, e2) = self.edges();
        nearly_parallel(e1.cross(&e2).norm(), e1.norm(), e2.norm())
    }

    /// Coordinates `(s, t)` with `p - p0 = s * e1 + t * e2`, for `p` in the
    /// triangle's plane. Points off the plane are projected onto it first.
    pub fn barycentric(&self, p: &P3) -> Option<(f64, f64)> {
        let (u, v) = self.edges();
        let w = p - self.p0;
        let uu = u.dot(&u);
        let uv = u.dot(&v);
        let vv = v.dot(&v);
        let uw = u.dot(&w);
        let vw = v.dot(&w);

        // uu * vv - uv^2 == |u x v|^2
        let den = uu * vv - uv * uv;
        if den <= EPSILON * EPSILON * uu * vv {
            return None;
        }
        let s = (vv * uw - uv * vw) / den;
        let t = (uu * vw - uv * uw) / den;
        Some((s, t))
    }

    /// Inclusive of edges and vertices.
    pub fn contains(&self, p: &P3) -> bool {
        match self.barycentric(p) {
            Some((s, t)) => s >= -EPSILON && t >= -EPSILON && s + t <= 1.0 + EPSILON,
            None => false,
        }
    }

    pub fn test_hit(&self, ray: &Ray) -> Option<P3> {
        intersect(self, ray)
    }
}

/// Point where the segment `ray` crosses `tri`, if any.
///
/// Hits on edges, on vertices and at either end of the segment all count.
/// Segments parallel to the triangle's plane, zero-length segments and
/// degenerate triangles never hit.
pub fn intersect(tri: &Triangle, ray: &Ray) -> Option<P3> {
    if tri.is_degenerate() {
        trace!("degenerate triangle {:?}", tri);
        return None;
    }

    let t = match tri.plane().segment_param(ray) {
        Some(t) => t,
        None => {
            trace!("segment parallel to triangle plane {:?}", ray);
            return None;
        }
    };
    // slack is a distance along the segment, not a parameter; also rejects NaN
    let clamped = t.max(0.0).min(1.0);
    if !((t - clamped).abs() * ray.length() <= EPSILON) {
        return None;
    }

    let pos = if t <= 0.0 {
        ray.start
    } else if t >= 1.0 {
        ray.end
    } else {
        ray.at(t)
    };
    if !is_finite_point(&pos) {
        warn!("intersection point is not finite {:?}", pos);
        warn!("> triangle {:?}", tri);
        warn!("> ray {:?}", ray);
        return None;
    }

    if tri.contains(&pos) {
        Some(pos)
    } else {
        None
    }
}
