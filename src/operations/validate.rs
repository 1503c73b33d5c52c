use tracing::debug;

use crate::error::ValidationError;
use crate::geometry::{wall_length, FeatureKind, Room, WallFeature};
use crate::registry::{FeatureId, FeatureRegistry};

/// Checks a candidate feature against the room and every accepted feature.
///
/// Checks run in a fixed order and the first failure wins:
/// offset, width/depth, wall length, height band, fireplace depth,
/// duplicate fireplace, overlap. Upper bounds are inclusive and exact, so a
/// feature may end on a wall corner or at the ceiling but never past it.
#[derive(Debug)]
pub struct ValidateFeature {
    candidate: WallFeature,
}

impl ValidateFeature {
    /// Creates a new validation for `candidate`.
    #[must_use]
    pub fn new(candidate: WallFeature) -> Self {
        Self { candidate }
    }

    /// Runs every check without touching the registry.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] the candidate trips.
    pub fn execute(&self, registry: &FeatureRegistry, room: &Room) -> Result<(), ValidationError> {
        let c = &self.candidate;
        let kind = c.feature_type();
        let wall = c.wall;

        if is_negative(c.offset) {
            return Err(ValidationError::OffsetNegative {
                kind,
                wall,
                offset: c.offset,
            });
        }

        if is_non_positive(c.width) {
            return Err(ValidationError::NonPositiveWidth {
                kind,
                wall,
                dimension: "width",
                value: c.width,
            });
        }
        if let FeatureKind::Fireplace { depth } = c.kind {
            if is_non_positive(depth) {
                return Err(ValidationError::NonPositiveWidth {
                    kind,
                    wall,
                    dimension: "depth",
                    value: depth,
                });
            }
        }

        let length = wall_length(wall, room);
        let span = c.span();
        if exceeds(span.end, length) {
            return Err(ValidationError::ExceedsWallLength {
                kind,
                wall,
                offset: span.start,
                end: span.end,
                wall_length: length,
            });
        }

        match c.kind {
            FeatureKind::Door { height } | FeatureKind::Window { height, .. } => {
                let band = c.height_band(room);
                if is_negative(band.start)
                    || is_non_positive(height)
                    || exceeds(band.end, room.height())
                {
                    return Err(ValidationError::InvalidHeightBand {
                        kind,
                        wall,
                        bottom: band.start,
                        top: band.end,
                        room_height: room.height(),
                    });
                }
            }
            FeatureKind::Fireplace { depth } => {
                let available = wall.depth_available(room);
                if exceeds(depth, available) {
                    return Err(ValidationError::FireplaceDepthExceedsRoom {
                        kind,
                        wall,
                        depth,
                        available,
                    });
                }
                if let Some(existing) = registry.fireplace() {
                    return Err(ValidationError::DuplicateFireplace {
                        kind,
                        wall,
                        existing_wall: existing.wall,
                    });
                }
            }
        }

        if let Some((_, existing)) = registry
            .on_wall(wall)
            .find(|(_, f)| f.span().overlaps(&span))
        {
            let other = existing.span();
            return Err(ValidationError::Overlap {
                kind,
                wall,
                start: span.start,
                end: span.end,
                existing: existing.feature_type(),
                existing_start: other.start,
                existing_end: other.end,
            });
        }

        Ok(())
    }
}

// NaN trips every predicate below.

fn is_negative(value: f64) -> bool {
    value.is_nan() || value < 0.0
}

fn is_non_positive(value: f64) -> bool {
    value.is_nan() || value <= 0.0
}

fn exceeds(value: f64, limit: f64) -> bool {
    value.is_nan() || value > limit
}

/// Validates `candidate` and, if it passes, appends it to `registry`.
///
/// On failure the registry is left exactly as it was.
///
/// # Errors
///
/// Returns the [`ValidationError`] describing why the candidate was refused.
pub fn validate_and_register(
    registry: &mut FeatureRegistry,
    candidate: WallFeature,
    room: &Room,
) -> Result<FeatureId, ValidationError> {
    ValidateFeature::new(candidate).execute(registry, room)?;
    let id = registry.insert(candidate);
    debug!(
        kind = %candidate.feature_type(),
        wall = candidate.wall.index(),
        offset = candidate.offset,
        width = candidate.width,
        "feature accepted"
    );
    Ok(id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::geometry::{FeatureType, Wall};

    fn room() -> Room {
        Room::new(5.0, 4.0, 2.5).unwrap()
    }

    fn register(reg: &mut FeatureRegistry, f: WallFeature) -> Result<FeatureId, ValidationError> {
        validate_and_register(reg, f, &room())
    }

    #[test]
    fn accepts_valid_door() {
        let mut reg = FeatureRegistry::new();
        let door = WallFeature::door(Wall::Front, 1.0, 1.0, 2.0);
        let id = register(&mut reg, door).unwrap();
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(id).unwrap().wall, Wall::Front);
    }

    #[test]
    fn negative_offset() {
        let mut reg = FeatureRegistry::new();
        let door = WallFeature::door(Wall::Front, -1.0, 1.0, 2.0);
        let err = register(&mut reg, door).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OffsetNegative { offset, .. } if offset == -1.0
        ));
        assert!(reg.is_empty());
    }

    #[test]
    fn nan_offset_is_rejected() {
        let mut reg = FeatureRegistry::new();
        let door = WallFeature::door(Wall::Front, f64::NAN, 1.0, 2.0);
        let err = register(&mut reg, door).unwrap_err();
        assert!(matches!(err, ValidationError::OffsetNegative { .. }));
    }

    #[test]
    fn non_positive_width_and_depth() {
        let mut reg = FeatureRegistry::new();
        let window = WallFeature::window(Wall::Back, 1.0, 0.0, 1.0, 1.0);
        let err = register(&mut reg, window).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonPositiveWidth {
                dimension: "width",
                ..
            }
        ));

        let fireplace = WallFeature::fireplace(Wall::Right, 1.0, 1.0, -0.5);
        let err = register(&mut reg, fireplace).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NonPositiveWidth {
                dimension: "depth",
                kind: FeatureType::Fireplace,
                ..
            }
        ));
    }

    #[test]
    fn exceeds_wall_length() {
        let mut reg = FeatureRegistry::new();
        let door = WallFeature::door(Wall::Front, 4.0, 2.0, 2.0);
        let err = register(&mut reg, door).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ExceedsWallLength { wall: Wall::Front, end, wall_length, .. }
                if end == 6.0 && wall_length == 5.0
        ));
        // Wall 2 is only 4 long.
        let door = WallFeature::door(Wall::Right, 3.5, 1.0, 2.0);
        assert!(register(&mut reg, door).is_err());
    }

    #[test]
    fn span_a_hair_past_the_corner_is_rejected() {
        let mut reg = FeatureRegistry::new();
        let door = WallFeature::door(Wall::Front, 4.0, 1.0 + 5e-11, 2.0);
        let err = register(&mut reg, door).unwrap_err();
        assert!(matches!(err, ValidationError::ExceedsWallLength { .. }));
        assert!(reg.is_empty());
    }

    #[test]
    fn band_a_hair_above_the_ceiling_is_rejected() {
        let mut reg = FeatureRegistry::new();
        let door = WallFeature::door(Wall::Front, 0.0, 1.0, 2.5 + 5e-11);
        let err = register(&mut reg, door).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidHeightBand { .. }));

        let window = WallFeature::window(Wall::Back, 0.0, 1.0, 1.5, 1.0 + 5e-11);
        let err = register(&mut reg, window).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidHeightBand { .. }));
        assert!(reg.is_empty());
    }

    #[test]
    fn feature_may_end_at_wall_corner() {
        let mut reg = FeatureRegistry::new();
        let front = WallFeature::door(Wall::Front, 4.0, 1.0, 2.0);
        let right = WallFeature::door(Wall::Right, 0.0, 1.0, 2.0);
        register(&mut reg, front).unwrap();
        register(&mut reg, right).unwrap();
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn invalid_height_band() {
        let mut reg = FeatureRegistry::new();
        let cases = [
            WallFeature::door(Wall::Front, 0.0, 1.0, 3.0),
            WallFeature::door(Wall::Front, 0.0, 1.0, 0.0),
            WallFeature::window(Wall::Front, 0.0, 1.0, -0.1, 1.0),
            WallFeature::window(Wall::Front, 0.0, 1.0, 2.0, 1.0),
        ];
        for candidate in cases {
            let err = register(&mut reg, candidate).unwrap_err();
            assert!(
                matches!(
                    err,
                    ValidationError::InvalidHeightBand { room_height, .. } if room_height == 2.5
                ),
                "{candidate:?} -> {err:?}"
            );
        }
        assert!(reg.is_empty());
    }

    #[test]
    fn window_reaching_ceiling_is_valid() {
        let mut reg = FeatureRegistry::new();
        let window = WallFeature::window(Wall::Front, 0.0, 1.0, 1.5, 1.0);
        register(&mut reg, window).unwrap();
    }

    #[test]
    fn fireplace_depth_bounded_by_perpendicular_dimension() {
        let mut reg = FeatureRegistry::new();
        // Wall 1 faces a 4 m deep room.
        let front = WallFeature::fireplace(Wall::Front, 1.0, 1.0, 4.5);
        let err = register(&mut reg, front).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::FireplaceDepthExceedsRoom { available, .. } if available == 4.0
        ));
        // Wall 2 faces 5 m, so the same depth fits.
        let right = WallFeature::fireplace(Wall::Right, 1.0, 1.0, 4.5);
        register(&mut reg, right).unwrap();
    }

    #[test]
    fn second_fireplace_is_duplicate() {
        let mut reg = FeatureRegistry::new();
        let first = WallFeature::fireplace(Wall::Right, 1.0, 1.7, 0.5);
        let second = WallFeature::fireplace(Wall::Left, 0.0, 1.0, 0.5);
        register(&mut reg, first).unwrap();
        let err = register(&mut reg, second).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateFireplace {
                kind: FeatureType::Fireplace,
                wall: Wall::Left,
                existing_wall: Wall::Right,
            }
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn window_overlapping_door_is_rejected() {
        let mut reg = FeatureRegistry::new();
        let door = WallFeature::door(Wall::Front, 0.0, 1.0, 2.0);
        let window = WallFeature::window(Wall::Front, 0.5, 1.0, 1.0, 1.0);
        register(&mut reg, door).unwrap();
        let err = register(&mut reg, window).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Overlap {
                kind: FeatureType::Window,
                existing: FeatureType::Door,
                ..
            }
        ));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn overlap_with_fireplace_footprint() {
        let mut reg = FeatureRegistry::new();
        let fireplace = WallFeature::fireplace(Wall::Right, 1.0, 1.7, 0.5);
        let window = WallFeature::window(Wall::Right, 2.0, 1.0, 1.0, 1.0);
        register(&mut reg, fireplace).unwrap();
        let err = register(&mut reg, window).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Overlap {
                existing: FeatureType::Fireplace,
                ..
            }
        ));
    }

    #[test]
    fn adjacent_and_other_wall_features_allowed() {
        let mut reg = FeatureRegistry::new();
        for feature in [
            WallFeature::door(Wall::Front, 0.0, 1.0, 2.0),
            WallFeature::window(Wall::Front, 1.0, 1.0, 1.0, 1.0),
            WallFeature::window(Wall::Back, 0.5, 1.0, 1.0, 1.0),
        ] {
            register(&mut reg, feature).unwrap();
        }
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn validation_alone_leaves_registry_untouched() {
        let reg = FeatureRegistry::new();
        let door = WallFeature::door(Wall::Front, 0.0, 1.0, 2.0);
        ValidateFeature::new(door).execute(&reg, &room()).unwrap();
        assert!(reg.is_empty());
    }
}
