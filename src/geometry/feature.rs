use std::fmt;

use crate::math::Interval;

use super::room::{Room, Wall};

/// A feature mounted on one wall of a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallFeature {
    /// Mounting wall.
    pub wall: Wall,
    /// Distance from the wall's local origin corner.
    pub offset: f64,
    /// Extent along the wall.
    pub width: f64,
    /// Kind-specific parameters.
    pub kind: FeatureKind,
}

/// Kind-specific parameters of a [`WallFeature`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureKind {
    /// A floor-standing opening.
    Door { height: f64 },
    /// An opening whose sill sits `bottom` above the floor.
    Window { bottom: f64, height: f64 },
    /// A full-height chimney breast protruding `depth` into the room.
    Fireplace { depth: f64 },
}

/// Discriminant of [`FeatureKind`], used for diagnostics and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureType {
    Door,
    Window,
    Fireplace,
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FeatureType::Door => "Door",
            FeatureType::Window => "Window",
            FeatureType::Fireplace => "Fireplace",
        })
    }
}

impl WallFeature {
    /// Creates a door standing on the floor.
    #[must_use]
    pub fn door(wall: Wall, offset: f64, width: f64, height: f64) -> Self {
        Self {
            wall,
            offset,
            width,
            kind: FeatureKind::Door { height },
        }
    }

    /// Creates a window with its sill at `bottom`.
    #[must_use]
    pub fn window(wall: Wall, offset: f64, width: f64, bottom: f64, height: f64) -> Self {
        Self {
            wall,
            offset,
            width,
            kind: FeatureKind::Window { bottom, height },
        }
    }

    /// Creates a full-height fireplace recessed `depth` into the room.
    #[must_use]
    pub fn fireplace(wall: Wall, offset: f64, width: f64, depth: f64) -> Self {
        Self {
            wall,
            offset,
            width,
            kind: FeatureKind::Fireplace { depth },
        }
    }

    /// The feature's discriminant.
    #[must_use]
    pub fn feature_type(&self) -> FeatureType {
        match self.kind {
            FeatureKind::Door { .. } => FeatureType::Door,
            FeatureKind::Window { .. } => FeatureType::Window,
            FeatureKind::Fireplace { .. } => FeatureType::Fireplace,
        }
    }

    /// Local span `[offset, offset + width)` along the wall.
    #[must_use]
    pub fn span(&self) -> Interval {
        Interval::new(self.offset, self.offset + self.width)
    }

    /// Vertical extent `[bottom, top)` of the feature.
    ///
    /// A fireplace always spans the full room height.
    #[must_use]
    pub fn height_band(&self, room: &Room) -> Interval {
        match self.kind {
            FeatureKind::Door { height } => Interval::new(0.0, height),
            FeatureKind::Window { bottom, height } => Interval::new(bottom, bottom + height),
            FeatureKind::Fireplace { .. } => Interval::new(0.0, room.height()),
        }
    }

    /// Opening area cut out of the wall; zero for a fireplace.
    #[must_use]
    pub fn opening_area(&self) -> f64 {
        match self.kind {
            FeatureKind::Door { height } | FeatureKind::Window { height, .. } => {
                self.width * height
            }
            FeatureKind::Fireplace { .. } => 0.0,
        }
    }
}
