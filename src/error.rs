use thiserror::Error;

use crate::geometry::{FeatureType, Wall};

/// Top-level error type for the room layout kernel.
#[derive(Debug, Error)]
pub enum RoomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised while constructing rooms and layout parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("room dimension {name} = {value} must be positive and finite")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("wall index {0} is out of range [1, 4]")]
    InvalidWallIndex(u8),

    #[error("skirting height {value} must lie in (0, {max}]")]
    InvalidSkirtingHeight { value: f64, max: f64 },
}

/// Reasons a candidate wall feature is refused by the validator.
///
/// Every variant names the feature type and wall, plus the numbers that
/// caused the rejection. A rejected candidate never touches the registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{kind} on {wall}: offset {offset} is negative")]
    OffsetNegative {
        kind: FeatureType,
        wall: Wall,
        offset: f64,
    },

    #[error("{kind} on {wall}: {dimension} {value} must be positive")]
    NonPositiveWidth {
        kind: FeatureType,
        wall: Wall,
        dimension: &'static str,
        value: f64,
    },

    #[error("{kind} on {wall}: span [{offset}, {end}) exceeds wall length {wall_length}")]
    ExceedsWallLength {
        kind: FeatureType,
        wall: Wall,
        offset: f64,
        end: f64,
        wall_length: f64,
    },

    #[error(
        "{kind} on {wall}: height band [{bottom}, {top}) does not fit room height {room_height}"
    )]
    InvalidHeightBand {
        kind: FeatureType,
        wall: Wall,
        bottom: f64,
        top: f64,
        room_height: f64,
    },

    #[error("{kind} on {wall}: depth {depth} exceeds room dimension {available}")]
    FireplaceDepthExceedsRoom {
        kind: FeatureType,
        wall: Wall,
        depth: f64,
        available: f64,
    },

    #[error(
        "{kind} on {wall}: span [{start}, {end}) overlaps {existing} at [{existing_start}, {existing_end})"
    )]
    Overlap {
        kind: FeatureType,
        wall: Wall,
        start: f64,
        end: f64,
        existing: FeatureType,
        existing_start: f64,
        existing_end: f64,
    },

    #[error("{kind} on {wall}: a fireplace is already registered on {existing_wall}")]
    DuplicateFireplace {
        kind: FeatureType,
        wall: Wall,
        existing_wall: Wall,
    },
}

impl ValidationError {
    /// Returns the wall the rejected candidate was aimed at.
    #[must_use]
    pub fn wall(&self) -> Wall {
        match self {
            Self::OffsetNegative { wall, .. }
            | Self::NonPositiveWidth { wall, .. }
            | Self::ExceedsWallLength { wall, .. }
            | Self::InvalidHeightBand { wall, .. }
            | Self::FireplaceDepthExceedsRoom { wall, .. }
            | Self::Overlap { wall, .. }
            | Self::DuplicateFireplace { wall, .. } => *wall,
        }
    }

    /// Returns the type of the rejected candidate.
    #[must_use]
    pub fn kind(&self) -> FeatureType {
        match self {
            Self::OffsetNegative { kind, .. }
            | Self::NonPositiveWidth { kind, .. }
            | Self::ExceedsWallLength { kind, .. }
            | Self::InvalidHeightBand { kind, .. }
            | Self::FireplaceDepthExceedsRoom { kind, .. }
            | Self::Overlap { kind, .. }
            | Self::DuplicateFireplace { kind, .. } => *kind,
        }
    }
}

/// Convenience type alias for results using [`RoomError`].
pub type Result<T> = std::result::Result<T, RoomError>;
