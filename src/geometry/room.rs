use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

/// An axis-aligned rectangular room with its origin at the front-left floor corner.
///
/// The floor lies at `z = 0` and the ceiling at `z = height`. Dimensions are
/// fixed once the room is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    width_x: f64,
    width_y: f64,
    height: f64,
}

impl Room {
    /// Creates a new room.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonPositiveDimension` if any dimension is not
    /// a positive finite number.
    pub fn new(width_x: f64, width_y: f64, height: f64) -> Result<Self> {
        for (name, value) in [
            ("width_x", width_x),
            ("width_y", width_y),
            ("height", height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeometryError::NonPositiveDimension { name, value }.into());
            }
        }
        Ok(Self {
            width_x,
            width_y,
            height,
        })
    }

    /// Checks that `height` is a usable skirting board height for this room.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidSkirtingHeight` unless
    /// `0 < height <= self.height()`.
    pub fn check_skirting_height(&self, height: f64) -> Result<f64> {
        if height.is_nan() || height <= 0.0 || height > self.height {
            return Err(GeometryError::InvalidSkirtingHeight {
                value: height,
                max: self.height,
            }
            .into());
        }
        Ok(height)
    }

    /// Length of walls 1 and 3 (along X).
    #[must_use]
    pub fn width_x(&self) -> f64 {
        self.width_x
    }

    /// Length of walls 2 and 4 (along Y).
    #[must_use]
    pub fn width_y(&self) -> f64 {
        self.width_y
    }

    /// Floor-to-ceiling height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The eight corners of the room box.
    ///
    /// Indices 0..4 run counter-clockwise around the floor starting at the
    /// origin; 4..8 are the same corners at ceiling height.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        let (x, y, h) = (self.width_x, self.width_y, self.height);
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(x, 0.0, 0.0),
            Point3::new(x, y, 0.0),
            Point3::new(0.0, y, 0.0),
            Point3::new(0.0, 0.0, h),
            Point3::new(x, 0.0, h),
            Point3::new(x, y, h),
            Point3::new(0.0, y, h),
        ]
    }
}

/// One of the four walls of a [`Room`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Wall {
    /// Wall 1, the plane `y = 0`.
    Front = 1,
    /// Wall 2, the plane `x = width_x`.
    Right = 2,
    /// Wall 3, the plane `y = width_y`.
    Back = 3,
    /// Wall 4, the plane `x = 0`.
    Left = 4,
}

impl Wall {
    /// All walls in index order.
    pub const ALL: [Wall; 4] = [Wall::Front, Wall::Right, Wall::Back, Wall::Left];

    /// The 1-based wall index.
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether the wall's local axis runs along X (walls 1 and 3).
    #[must_use]
    pub fn runs_along_x(self) -> bool {
        matches!(self, Wall::Front | Wall::Back)
    }

    /// Unit vector pointing from the wall into the room.
    #[must_use]
    pub fn inward(self) -> Vector3 {
        match self {
            Wall::Front => Vector3::y(),
            Wall::Right => -Vector3::x(),
            Wall::Back => -Vector3::y(),
            Wall::Left => Vector3::x(),
        }
    }

    /// Room extent perpendicular to this wall.
    #[must_use]
    pub fn depth_available(self, room: &Room) -> f64 {
        if self.runs_along_x() {
            room.width_y
        } else {
            room.width_x
        }
    }
}

impl TryFrom<u8> for Wall {
    type Error = GeometryError;

    fn try_from(index: u8) -> std::result::Result<Self, Self::Error> {
        match index {
            1 => Ok(Wall::Front),
            2 => Ok(Wall::Right),
            3 => Ok(Wall::Back),
            4 => Ok(Wall::Left),
            other => Err(GeometryError::InvalidWallIndex(other)),
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wall {}", self.index())
    }
}

/// Length of `wall` in `room`.
#[must_use]
pub fn wall_length(wall: Wall, room: &Room) -> f64 {
    if wall.runs_along_x() {
        room.width_x
    } else {
        room.width_y
    }
}

/// Maps a local coordinate along `wall` and a height `z` to room coordinates.
#[must_use]
pub fn wall_point(wall: Wall, local: f64, z: f64, room: &Room) -> Point3 {
    match wall {
        Wall::Front => Point3::new(local, 0.0, z),
        Wall::Right => Point3::new(room.width_x, local, z),
        Wall::Back => Point3::new(local, room.width_y, z),
        Wall::Left => Point3::new(0.0, local, z),
    }
}
