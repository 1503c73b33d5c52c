pub mod interval;
pub mod polygon;

pub use interval::{overlaps, subtract, Interval};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point bound checks.
pub const TOLERANCE: f64 = 1e-10;
