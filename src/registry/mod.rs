use slotmap::SlotMap;

use crate::geometry::{FeatureType, Wall, WallFeature};

slotmap::new_key_type! {
    /// Unique identifier for an accepted feature in the registry.
    pub struct FeatureId;
}

/// Arena of accepted wall features.
///
/// Features are only ever added through the validator, so every stored
/// feature satisfies the bound and non-overlap invariants against every
/// other. Insertion order is kept for labeling.
#[derive(Debug, Default, Clone)]
pub struct FeatureRegistry {
    features: SlotMap<FeatureId, WallFeature>,
    order: Vec<FeatureId>,
    fireplace: Option<FeatureId>,
}

impl FeatureRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an already validated feature and returns its ID.
    pub(crate) fn insert(&mut self, feature: WallFeature) -> FeatureId {
        let id = self.features.insert(feature);
        self.order.push(id);
        if feature.feature_type() == FeatureType::Fireplace {
            self.fireplace = Some(id);
        }
        id
    }

    /// Returns the feature with the given ID.
    #[must_use]
    pub fn get(&self, id: FeatureId) -> Option<&WallFeature> {
        self.features.get(id)
    }

    /// Number of accepted features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no feature has been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All features in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FeatureId, &WallFeature)> {
        self.order
            .iter()
            .filter_map(|&id| self.features.get(id).map(|f| (id, f)))
    }

    /// Features of one type, in insertion order.
    pub fn of_type(&self, ty: FeatureType) -> impl Iterator<Item = (FeatureId, &WallFeature)> {
        self.iter().filter(move |(_, f)| f.feature_type() == ty)
    }

    /// Doors, in insertion order.
    pub fn doors(&self) -> impl Iterator<Item = &WallFeature> {
        self.of_type(FeatureType::Door).map(|(_, f)| f)
    }

    /// Windows, in insertion order.
    pub fn windows(&self) -> impl Iterator<Item = &WallFeature> {
        self.of_type(FeatureType::Window).map(|(_, f)| f)
    }

    /// The registered fireplace, if any.
    #[must_use]
    pub fn fireplace(&self) -> Option<&WallFeature> {
        self.fireplace.and_then(|id| self.features.get(id))
    }

    /// Features of every type mounted on `wall`.
    pub fn on_wall(&self, wall: Wall) -> impl Iterator<Item = (FeatureId, &WallFeature)> {
        self.iter().filter(move |(_, f)| f.wall == wall)
    }

    /// Display label such as `"Door 2"`; the fireplace is just `"Fireplace"`.
    ///
    /// Ranks count features of the same type in insertion order, starting at 1.
    #[must_use]
    pub fn label(&self, id: FeatureId) -> Option<String> {
        let ty = self.features.get(id)?.feature_type();
        if ty == FeatureType::Fireplace {
            return Some(ty.to_string());
        }
        let rank = self.of_type(ty).position(|(other, _)| other == id)? + 1;
        Some(format!("{ty} {rank}"))
    }
}
