//! Missions
//!
//! Catalog filtering, photo verification and completion. Evidence comes from
//! an [`EvidenceCapture`] and is judged by a [`MissionVerifier`]; both are
//! traits so the simulated implementations used today can be replaced by a
//! real camera and a real verification backend.

use crate::catalog::{ContentCatalog, Mission, MissionCategory};
use crate::media::{self, MediaError, Photo, PhotoPicker, PhotoSource, PickOptions};
use crate::Timings;
use app_state::AppStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Mission error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    /// No mission with this id
    #[error("Mission not found: {0}")]
    NotFound(u32),

    /// Capturing evidence failed or was cancelled
    #[error(transparent)]
    Capture(#[from] MediaError),

    /// The verifier did not accept the evidence
    #[error("Verification failed: {0}")]
    Rejected(String),
}

/// Result type for mission operations
pub type Result<T> = std::result::Result<T, MissionError>;

/// Mission catalog filter chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MissionFilter {
    /// Everything
    #[default]
    All,
    /// A single category
    Category(MissionCategory),
}

impl MissionFilter {
    /// Chips in display order
    pub fn chips() -> Vec<MissionFilter> {
        std::iter::once(MissionFilter::All)
            .chain(MissionCategory::all().into_iter().map(MissionFilter::Category))
            .collect()
    }

    /// Chip label
    pub fn label(&self) -> &'static str {
        match self {
            MissionFilter::All => "All",
            MissionFilter::Category(category) => category.label(),
        }
    }

    /// Whether a mission passes the filter
    pub fn matches(&self, mission: &Mission) -> bool {
        match self {
            MissionFilter::All => true,
            MissionFilter::Category(category) => mission.category == *category,
        }
    }
}

/// Missions passing a filter, in catalog order
pub fn filter_missions(catalog: &ContentCatalog, filter: MissionFilter) -> Vec<&Mission> {
    catalog.missions.iter().filter(|m| filter.matches(m)).collect()
}

/// Resolve a route's mission parameter
///
/// A missing id opens the first mission in the catalog.
pub fn resolve_mission(catalog: &ContentCatalog, id: Option<u32>) -> Result<&Mission> {
    match id {
        Some(id) => catalog.mission(id).ok_or(MissionError::NotFound(id)),
        None => catalog.missions.first().ok_or(MissionError::NotFound(0)),
    }
}

/// Collects photo evidence for a mission
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvidenceCapture: Send + Sync {
    /// Capture evidence from the given source
    async fn capture(&self, mission: &Mission, source: PhotoSource) -> media::Result<Photo>;
}

/// Decides whether evidence proves the mission was done
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MissionVerifier: Send + Sync {
    /// Judge the evidence
    async fn verify(&self, mission: &Mission, evidence: &Photo) -> Verdict;
}

/// Verifier decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Evidence accepted
    Approved,
    /// Evidence refused, with a reason
    Rejected(String),
}

/// Evidence capture backed by a [`PhotoPicker`]
pub struct PickerCapture<P> {
    picker: P,
}

impl<P: PhotoPicker> PickerCapture<P> {
    /// Wrap a picker
    pub fn new(picker: P) -> Self {
        Self { picker }
    }
}

#[async_trait]
impl<P: PhotoPicker> EvidenceCapture for PickerCapture<P> {
    async fn capture(&self, mission: &Mission, source: PhotoSource) -> media::Result<Photo> {
        debug!(mission = mission.id, %source, "Capturing evidence");
        media::pick_photo(&self.picker, source, PickOptions::default()).await
    }
}

/// Verifier that approves everything after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedVerifier {
    delay: Duration,
}

impl SimulatedVerifier {
    /// Approve after `delay`
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl MissionVerifier for SimulatedVerifier {
    async fn verify(&self, _mission: &Mission, _evidence: &Photo) -> Verdict {
        tokio::time::sleep(self.delay).await;
        Verdict::Approved
    }
}

/// What to do after the completion screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextStep {
    /// Share the achievement on the social feed
    Share,
    /// Go back to the mission catalog
    NextMission,
}

/// Result of a completed mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionCompletion {
    /// Completed mission
    pub mission_id: u32,
    /// Points awarded
    pub points: u64,
    /// Balance afterwards
    pub balance: u64,
    /// Evidence that was verified, if the mission went through verification
    pub evidence: Option<Photo>,
}

/// Drives missions from evidence capture to completion
#[derive(Clone)]
pub struct MissionService {
    store: AppStore,
    capture: Arc<dyn EvidenceCapture>,
    verifier: Arc<dyn MissionVerifier>,
}

impl MissionService {
    /// Create a service over explicit capture and verifier backends
    pub fn new(
        store: AppStore,
        capture: Arc<dyn EvidenceCapture>,
        verifier: Arc<dyn MissionVerifier>,
    ) -> Self {
        Self {
            store,
            capture,
            verifier,
        }
    }

    /// Service over the simulated camera and verifier
    pub fn simulated(store: AppStore, timings: &Timings) -> Self {
        Self::new(
            store,
            Arc::new(PickerCapture::new(media::SimulatedPhotoPicker::new())),
            Arc::new(SimulatedVerifier::new(timings.verification())),
        )
    }

    /// Capture and verify evidence without awarding anything
    pub async fn verify(&self, mission: &Mission, source: PhotoSource) -> Result<Photo> {
        let photo = self.capture.capture(mission, source).await?;
        match self.verifier.verify(mission, &photo).await {
            Verdict::Approved => Ok(photo),
            Verdict::Rejected(reason) => {
                tracing::warn!(mission = mission.id, %reason, "Evidence rejected");
                Err(MissionError::Rejected(reason))
            }
        }
    }

    /// Award a mission's points
    pub fn complete(&self, mission: &Mission) -> MissionCompletion {
        let balance = self.store.award_points(mission.points);
        info!(mission = mission.id, points = mission.points, balance, "Mission completed");
        MissionCompletion {
            mission_id: mission.id,
            points: mission.points,
            balance,
            evidence: None,
        }
    }

    /// Verify then complete
    pub async fn verify_and_complete(
        &self,
        mission: &Mission,
        source: PhotoSource,
    ) -> Result<MissionCompletion> {
        let photo = self.verify(mission, source).await?;
        let mut completion = self.complete(mission);
        completion.evidence = Some(photo);
        Ok(completion)
    }
}
