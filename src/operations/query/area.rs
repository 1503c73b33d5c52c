use crate::error::Result;
use crate::geometry::{FeatureKind, Room, Wall, WallFeature};
use crate::operations::layout::skirting_segments;
use crate::registry::FeatureRegistry;

/// Surface areas of a finalized layout, in square units of the room dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaReport {
    /// Floor area, equal to the ceiling.
    pub floor: f64,
    /// `width_x * width_y`.
    pub ceiling: f64,
    /// All four walls, before openings.
    pub wall_gross: f64,
    /// Total door opening area.
    pub door: f64,
    /// Total window opening area.
    pub window: f64,
    /// Sides and back of the fireplace recess; zero without a fireplace.
    pub fireplace_extra_wall: f64,
    /// `wall_gross - door - window + fireplace_extra_wall`.
    pub wall_net: f64,
    /// Zero when skirting is disabled.
    pub skirting: f64,
}

impl AreaReport {
    /// Door and window area together.
    #[must_use]
    pub fn opening(&self) -> f64 {
        self.door + self.window
    }
}

/// Computes the [`AreaReport`] of a room and its accepted features.
///
/// Every figure is derived from the registry on each call; sums do not
/// depend on registration order.
#[derive(Debug)]
pub struct RoomAreas<'a> {
    room: &'a Room,
    registry: &'a FeatureRegistry,
    skirting_height: Option<f64>,
}

impl<'a> RoomAreas<'a> {
    /// Creates a new area query without skirting.
    #[must_use]
    pub fn new(room: &'a Room, registry: &'a FeatureRegistry) -> Self {
        Self {
            room,
            registry,
            skirting_height: None,
        }
    }

    /// Includes skirting boards of the given height.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidSkirtingHeight` if `height` is not in
    /// `(0, room.height]`.
    pub fn with_skirting(mut self, height: f64) -> Result<Self> {
        self.skirting_height = Some(self.room.check_skirting_height(height)?);
        Ok(self)
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> AreaReport {
        let room = self.room;
        let ceiling = room.width_x() * room.width_y();
        let wall_gross = 2.0 * (room.width_x() + room.width_y()) * room.height();

        let door: f64 = self.registry.doors().map(WallFeature::opening_area).sum();
        let window: f64 = self.registry.windows().map(WallFeature::opening_area).sum();

        let fireplace_extra_wall = match self.registry.fireplace() {
            Some(WallFeature {
                width,
                kind: FeatureKind::Fireplace { depth },
                ..
            }) => (2.0 * depth + width) * room.height(),
            _ => 0.0,
        };

        let skirting = self.skirting_height.map_or(0.0, |height| {
            Wall::ALL
                .into_iter()
                .flat_map(|wall| skirting_segments(wall, room, self.registry))
                .map(|seg| seg.length() * height)
                .sum::<f64>()
        });

        AreaReport {
            floor: ceiling,
            ceiling,
            wall_gross,
            door,
            window,
            fireplace_extra_wall,
            wall_net: wall_gross - door - window + fireplace_extra_wall,
            skirting,
        }
    }
}
