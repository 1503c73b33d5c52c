mod area;

pub use area::{AreaReport, RoomAreas};
