pub mod math;
pub mod ray;
pub mod shape;

pub use math::{P3, V3};
pub use ray::Ray;
pub use shape::{intersect, Triangle};
