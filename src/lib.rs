pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod registry;
pub mod session;

pub use error::{GeometryError, Result, RoomError, ValidationError};
pub use geometry::{FeatureKind, FeatureType, Room, Wall, WallFeature};
pub use operations::{AreaReport, LayoutGeometry};
pub use registry::{FeatureId, FeatureRegistry};
pub use session::{Layout, LayoutConfig, LayoutSession, SubmissionReport};
