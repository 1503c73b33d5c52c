use crate::geometry::{wall_point, Room, Wall};
use crate::math::{Interval, Point3};

use super::Quad;

/// Rectangular prism of a fireplace recessed into the room.
///
/// Vertex layout:
/// - `0, 1`: bottom corners on the wall, at the span start and end
/// - `2, 3`: bottom corners `depth` inside the room, at span end and start
/// - `4..8`: the same four corners at ceiling height
#[derive(Debug, Clone, PartialEq)]
pub struct FireplacePrism {
    pub vertices: [Point3; 8],
}

impl FireplacePrism {
    /// Builds the prism for a fireplace spanning `span` on `wall`.
    #[must_use]
    pub fn new(wall: Wall, span: Interval, depth: f64, room: &Room) -> Self {
        let inset = wall.inward() * depth;
        let corner = |local: f64, z: f64| wall_point(wall, local, z, room);
        let h = room.height();
        let (a, b) = (span.start, span.end);
        Self {
            vertices: [
                corner(a, 0.0),
                corner(b, 0.0),
                corner(b, 0.0) + inset,
                corner(a, 0.0) + inset,
                corner(a, h),
                corner(b, h),
                corner(b, h) + inset,
                corner(a, h) + inset,
            ],
        }
    }

    /// The drawn faces: front, two sides, the inward back and the bottom.
    ///
    /// The prism is open-topped, so the ceiling face is never emitted.
    #[must_use]
    pub fn faces(&self) -> [Quad; 5] {
        let v = &self.vertices;
        [
            [v[0], v[1], v[5], v[4]],
            [v[1], v[2], v[6], v[5]],
            [v[2], v[3], v[7], v[6]],
            [v[3], v[0], v[4], v[7]],
            [v[0], v[1], v[2], v[3]],
        ]
    }
}
