mod prism;
mod skirting;

pub use prism::FireplacePrism;
pub use skirting::skirting_segments;

use crate::error::Result;
use crate::geometry::{wall_point, FeatureKind, FeatureType, Room, Wall, WallFeature};
use crate::math::{Interval, Point3};
use crate::registry::{FeatureId, FeatureRegistry};

/// A planar quadrilateral, vertices in drawing order.
pub type Quad = [Point3; 4];

/// Geometry of one accepted feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureGeometry {
    /// Registry ID of the feature.
    pub id: FeatureId,
    /// Door, window or fireplace.
    pub kind: FeatureType,
    /// Mounting wall.
    pub wall: Wall,
    /// Display label such as `"Door 1"`.
    pub label: String,
    /// One quad for doors and windows, five for a fireplace.
    pub faces: Vec<Quad>,
}

/// A skirting board strip between two doors (or a door and a corner).
#[derive(Debug, Clone, PartialEq)]
pub struct SkirtingGeometry {
    /// Wall the strip runs along.
    pub wall: Wall,
    /// Local extent along the wall.
    pub span: Interval,
    /// Board height above the floor.
    pub height: f64,
    /// Strip face flush on the wall at floor level.
    pub quad: Quad,
}

/// Everything a renderer needs to draw a finalized layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGeometry {
    /// Walls 1 to 4, then ceiling, then floor.
    pub room_faces: [Quad; 6],
    /// Accepted features in registration order.
    pub features: Vec<FeatureGeometry>,
    /// Skirting strips, wall by wall; empty when skirting is disabled.
    pub skirting: Vec<SkirtingGeometry>,
}

/// Builds [`LayoutGeometry`] from a room and its validated features.
///
/// Performs no validation; the registry is assumed to hold only features
/// accepted by [`ValidateFeature`](crate::operations::ValidateFeature).
#[derive(Debug)]
pub struct BuildLayout<'a> {
    room: &'a Room,
    registry: &'a FeatureRegistry,
    skirting_height: Option<f64>,
}

impl<'a> BuildLayout<'a> {
    /// Creates a new layout build without skirting.
    #[must_use]
    pub fn new(room: &'a Room, registry: &'a FeatureRegistry) -> Self {
        Self {
            room,
            registry,
            skirting_height: None,
        }
    }

    /// Enables skirting boards of the given height.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidSkirtingHeight` if `height` is not in
    /// `(0, room.height]`.
    pub fn with_skirting(mut self, height: f64) -> Result<Self> {
        self.skirting_height = Some(self.room.check_skirting_height(height)?);
        Ok(self)
    }

    /// Executes the build.
    #[must_use]
    pub fn execute(&self) -> LayoutGeometry {
        let features = self
            .registry
            .iter()
            .map(|(id, feature)| FeatureGeometry {
                id,
                kind: feature.feature_type(),
                wall: feature.wall,
                label: self.registry.label(id).unwrap_or_default(),
                faces: self.feature_faces(feature),
            })
            .collect();

        let skirting = match self.skirting_height {
            Some(height) => self.skirting(height),
            None => Vec::new(),
        };

        LayoutGeometry {
            room_faces: room_faces(self.room),
            features,
            skirting,
        }
    }

    fn feature_faces(&self, feature: &WallFeature) -> Vec<Quad> {
        let span = feature.span();
        match feature.kind {
            FeatureKind::Door { .. } | FeatureKind::Window { .. } => {
                let band = feature.height_band(self.room);
                vec![wall_quad(feature.wall, span, band, self.room)]
            }
            FeatureKind::Fireplace { depth } => {
                let prism = FireplacePrism::new(feature.wall, span, depth, self.room);
                prism.faces().to_vec()
            }
        }
    }

    fn skirting(&self, height: f64) -> Vec<SkirtingGeometry> {
        Wall::ALL
            .into_iter()
            .flat_map(|wall| {
                skirting_segments(wall, self.room, self.registry)
                    .into_iter()
                    .map(move |span| SkirtingGeometry {
                        wall,
                        span,
                        height,
                        quad: wall_quad(wall, span, Interval::new(0.0, height), self.room),
                    })
            })
            .collect()
    }
}

/// Quad flush on `wall` covering `span` horizontally and `band` vertically.
fn wall_quad(wall: Wall, span: Interval, band: Interval, room: &Room) -> Quad {
    [
        wall_point(wall, span.start, band.start, room),
        wall_point(wall, span.end, band.start, room),
        wall_point(wall, span.end, band.end, room),
        wall_point(wall, span.start, band.end, room),
    ]
}

fn room_faces(room: &Room) -> [Quad; 6] {
    let v = room.corners();
    [
        [v[0], v[1], v[5], v[4]],
        [v[1], v[2], v[6], v[5]],
        [v[2], v[3], v[7], v[6]],
        [v[3], v[0], v[4], v[7]],
        [v[4], v[5], v[6], v[7]],
        [v[0], v[1], v[2], v[3]],
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, RoomError};
    use crate::math::polygon::{polygon_area, polygon_normal};
    use crate::operations::validate_and_register;
    use approx::assert_relative_eq;

    fn room() -> Room {
        Room::new(5.0, 4.0, 2.5).unwrap()
    }

    fn furnished(room: &Room) -> FeatureRegistry {
        let mut reg = FeatureRegistry::new();
        for f in [
            WallFeature::door(Wall::Front, 1.0, 1.0, 2.0),
            WallFeature::window(Wall::Back, 0.25, 1.5, 1.5, 0.8),
            WallFeature::fireplace(Wall::Right, 1.0, 1.7, 0.5),
            WallFeature::door(Wall::Left, 2.0, 0.9, 2.1),
        ] {
            validate_and_register(&mut reg, f, room).unwrap();
        }
        reg
    }

    #[test]
    fn door_quad_lies_on_front_wall() {
        let room = room();
        let reg = furnished(&room);
        let geom = BuildLayout::new(&room, &reg).execute();

        let door = &geom.features[0];
        assert_eq!(door.label, "Door 1");
        assert_eq!(
            door.faces,
            vec![[
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 2.0),
                Point3::new(1.0, 0.0, 2.0),
            ]]
        );
    }

    #[test]
    fn window_quad_sits_on_back_wall_band() {
        let room = room();
        let reg = furnished(&room);
        let geom = BuildLayout::new(&room, &reg).execute();

        let window = &geom.features[1];
        assert_eq!(window.kind, FeatureType::Window);
        let quad = &window.faces[0];
        assert!(quad.iter().all(|p| (p.y - 4.0).abs() < 1e-12));
        assert_relative_eq!(quad[0].z, 1.5);
        assert_relative_eq!(quad[2].z, 2.3, epsilon = 1e-12);
        assert_relative_eq!(polygon_area(quad), 1.5 * 0.8, epsilon = 1e-12);
    }

    #[test]
    fn fireplace_has_five_faces_and_no_top() {
        let room = room();
        let reg = furnished(&room);
        let geom = BuildLayout::new(&room, &reg).execute();

        let fireplace = &geom.features[2];
        assert_eq!(fireplace.label, "Fireplace");
        assert_eq!(fireplace.faces.len(), 5);
        let has_top = fireplace.faces.iter().any(|q| q.iter().all(|p| p.z > 2.4));
        assert!(!has_top);
    }

    #[test]
    fn skirting_is_disabled_by_default() {
        let room = room();
        let reg = furnished(&room);
        assert!(BuildLayout::new(&room, &reg).execute().skirting.is_empty());
    }

    #[test]
    fn skirting_strips_go_around_doors() {
        let room = room();
        let reg = furnished(&room);
        let geom = BuildLayout::new(&room, &reg)
            .with_skirting(0.1)
            .unwrap()
            .execute();

        let front: Vec<Interval> = geom
            .skirting
            .iter()
            .filter(|s| s.wall == Wall::Front)
            .map(|s| s.span)
            .collect();
        assert_eq!(front, vec![Interval::new(0.0, 1.0), Interval::new(2.0, 5.0)]);
        // Front 2, right 1, back 1, left 2.
        assert_eq!(geom.skirting.len(), 6);
        for strip in &geom.skirting {
            let expected = strip.span.length() * 0.1;
            assert_relative_eq!(polygon_area(&strip.quad), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn skirting_height_outside_room_is_refused() {
        let room = room();
        let reg = furnished(&room);
        for height in [10.0, -1.0, 0.0] {
            let err = BuildLayout::new(&room, &reg)
                .with_skirting(height)
                .unwrap_err();
            assert!(matches!(
                err,
                RoomError::Geometry(GeometryError::InvalidSkirtingHeight { .. })
            ));
        }
    }

    #[test]
    fn room_faces_cover_shell() {
        let room = room();
        let geom = BuildLayout::new(&room, &FeatureRegistry::new()).execute();
        let walls: f64 = geom.room_faces[..4].iter().map(|q| polygon_area(q)).sum();
        assert_relative_eq!(walls, 2.0 * (5.0 + 4.0) * 2.5, epsilon = 1e-12);
        assert_relative_eq!(polygon_area(&geom.room_faces[4]), 20.0, epsilon = 1e-12);
        assert_relative_eq!(polygon_normal(&geom.room_faces[5]).unwrap().z, 1.0);
    }

    #[test]
    fn rebuild_is_identical() {
        let room = room();
        let reg = furnished(&room);
        let build = BuildLayout::new(&room, &reg).with_skirting(0.1).unwrap();
        assert_eq!(build.execute(), build.execute());
    }
}
