pub mod layout;
pub mod query;
pub mod validate;

pub use layout::{BuildLayout, FeatureGeometry, LayoutGeometry, Quad, SkirtingGeometry};
pub use query::{AreaReport, RoomAreas};
pub use validate::{validate_and_register, ValidateFeature};
