pub mod feature;
pub mod room;

pub use feature::{FeatureKind, FeatureType, WallFeature};
pub use room::{wall_length, wall_point, Room, Wall};
