use tracing::{info, warn};

use crate::error::{Result, ValidationError};
use crate::geometry::{Room, WallFeature};
use crate::operations::{validate_and_register, AreaReport, BuildLayout, LayoutGeometry, RoomAreas};
use crate::registry::{FeatureId, FeatureRegistry};

/// Layout options supplied alongside the room dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutConfig {
    /// Skirting board height; `None` disables skirting.
    pub skirting_height: Option<f64>,
}

impl LayoutConfig {
    /// Enables skirting boards of the given height.
    #[must_use]
    pub fn with_skirting(mut self, height: f64) -> Self {
        self.skirting_height = Some(height);
        self
    }
}

/// Outcome of a batch submission.
#[derive(Debug, Default)]
pub struct SubmissionReport {
    /// IDs of accepted candidates, in submission order.
    pub accepted: Vec<FeatureId>,
    /// Rejected candidates as `(submission index, reason)`.
    pub rejected: Vec<(usize, ValidationError)>,
}

impl SubmissionReport {
    /// Whether every candidate was accepted.
    #[must_use]
    pub fn all_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Collects wall features for one room.
///
/// Candidates are validated strictly in submission order, each against
/// everything accepted before it. Call [`finish`](Self::finish) to freeze
/// the result.
#[derive(Debug)]
pub struct LayoutSession {
    room: Room,
    config: LayoutConfig,
    registry: FeatureRegistry,
}

impl LayoutSession {
    /// Opens a session for `room`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidSkirtingHeight` if skirting is enabled
    /// with a height outside `(0, room.height]`.
    pub fn new(room: Room, config: LayoutConfig) -> Result<Self> {
        if let Some(height) = config.skirting_height {
            room.check_skirting_height(height)?;
        }
        Ok(Self {
            room,
            config,
            registry: FeatureRegistry::new(),
        })
    }

    /// The room being furnished.
    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Features accepted so far.
    #[must_use]
    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    /// Validates one candidate and registers it on success.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for a refused candidate; the session
    /// is unchanged and the caller may resubmit corrected parameters.
    pub fn submit(
        &mut self,
        candidate: WallFeature,
    ) -> std::result::Result<FeatureId, ValidationError> {
        let result = validate_and_register(&mut self.registry, candidate, &self.room);
        if let Err(err) = &result {
            warn!(
                kind = %err.kind(),
                wall = err.wall().index(),
                reason = %err,
                "feature rejected"
            );
        }
        result
    }

    /// Submits candidates in order, collecting accepts and rejects.
    pub fn submit_all<I>(&mut self, candidates: I) -> SubmissionReport
    where
        I: IntoIterator<Item = WallFeature>,
    {
        let mut report = SubmissionReport::default();
        for (index, candidate) in candidates.into_iter().enumerate() {
            match self.submit(candidate) {
                Ok(id) => report.accepted.push(id),
                Err(err) => report.rejected.push((index, err)),
            }
        }
        report
    }

    /// Freezes the session into a read-only [`Layout`].
    #[must_use]
    pub fn finish(self) -> Layout {
        info!(
            features = self.registry.len(),
            doors = self.registry.doors().count(),
            windows = self.registry.windows().count(),
            fireplace = self.registry.fireplace().is_some(),
            "layout finalized"
        );
        Layout {
            room: self.room,
            config: self.config,
            registry: self.registry,
        }
    }
}

/// A finalized room layout.
///
/// Geometry and areas are rebuilt from the frozen registry on every call.
#[derive(Debug, Clone)]
pub struct Layout {
    room: Room,
    config: LayoutConfig,
    registry: FeatureRegistry,
}

impl Layout {
    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    /// Builds the renderable geometry.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidSkirtingHeight` if the configured
    /// skirting height does not fit the room.
    pub fn geometry(&self) -> Result<LayoutGeometry> {
        let build = BuildLayout::new(&self.room, &self.registry);
        let build = match self.config.skirting_height {
            Some(h) => build.with_skirting(h)?,
            None => build,
        };
        Ok(build.execute())
    }

    /// Computes the area figures.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidSkirtingHeight` if the configured
    /// skirting height does not fit the room.
    pub fn areas(&self) -> Result<AreaReport> {
        let query = RoomAreas::new(&self.room, &self.registry);
        let query = match self.config.skirting_height {
            Some(h) => query.with_skirting(h)?,
            None => query,
        };
        Ok(query.execute())
    }
}
