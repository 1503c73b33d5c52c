use crate::geometry::{wall_length, FeatureType, Room, Wall};
use crate::math::{subtract, Interval};
use crate::registry::FeatureRegistry;

/// Residual intervals of `wall` left for skirting once every door is carved out.
///
/// Starts from the full wall `[0, wall_length)` and subtracts each door span
/// on that wall. Windows and the fireplace do not interrupt the skirting.
#[must_use]
pub fn skirting_segments(wall: Wall, room: &Room, registry: &FeatureRegistry) -> Vec<Interval> {
    registry
        .on_wall(wall)
        .filter(|(_, f)| f.feature_type() == FeatureType::Door)
        .fold(
            vec![Interval::new(0.0, wall_length(wall, room))],
            |segments, (_, door)| subtract(&segments, &door.span()),
        )
}
