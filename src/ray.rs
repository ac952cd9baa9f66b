use crate::math::*;

/// A finite segment from `start` to `end`. Only points with parameter
/// `t` in `[0, 1]` belong to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub start: P3,
    pub end: P3,
}

impl Ray {
    pub fn new(start: P3, end: P3) -> Self {
        Ray { start, end }
    }

    pub fn from_dir(start: P3, dir: V3) -> Self {
        Ray::new(start, start + dir)
    }

    pub fn dir(&self) -> V3 {
        self.end - self.start
    }

    pub fn at(&self, t: f64) -> P3 {
        self.start + self.dir() * t
    }

    pub fn length(&self) -> f64 {
        self.dir().norm()
    }

    pub fn is_degenerate(&self) -> bool {
        is_near_zero(self.length())
    }

    pub fn reversed(&self) -> Self {
        Ray::new(self.end, self.start)
    }
}

#[test]
fn test() {
    let ray = Ray::new(P3::new(0.0, -0.5, 0.0), P3::new(0.0, 1.5, 0.0));
    assert_eq!(ray.dir(), V3::new(0.0, 2.0, 0.0));
    assert_eq!(ray.length(), 2.0);
    assert_eq!(ray.at(0.0), ray.start);
    assert_eq!(ray.at(1.0), ray.end);
    assert_eq!(ray.at(0.5), P3::new(0.0, 0.5, 0.0));
    assert!(!ray.is_degenerate());

    let back = ray.reversed();
    assert_eq!(back.start, ray.end);
    assert_eq!(back.dir(), -ray.dir());
    assert_eq!(back.reversed(), ray);

    assert_eq!(Ray::from_dir(ray.start, ray.dir()), ray);
    assert!(Ray::new(ray.start, ray.start).is_degenerate());
}
