//! Photo capture
//!
//! Mission evidence and profile avatars both come from a [`PhotoPicker`].
//! The device camera and gallery are not available headless, so
//! [`SimulatedPhotoPicker`] stands in for them with configurable permission
//! and cancellation behaviour.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use thiserror::Error;

/// Media error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// The user refused access to the source
    #[error("Permission to access {0} is required!")]
    PermissionDenied(PhotoSource),

    /// The user backed out of the picker
    #[error("Photo selection cancelled")]
    Cancelled,

    /// The source failed
    #[error("Photo source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for media operations
pub type Result<T> = std::result::Result<T, MediaError>;

/// Where a photo comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSource {
    /// Take a new photo
    Camera,
    /// Pick an existing photo
    Gallery,
}

impl fmt::Display for PhotoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoSource::Camera => write!(f, "camera"),
            PhotoSource::Gallery => write!(f, "gallery"),
        }
    }
}

/// A captured or picked photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Local URI of the image
    pub uri: String,
    /// Source it came from
    pub source: PhotoSource,
}

/// Picker options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickOptions {
    /// Let the user crop before confirming
    pub allows_editing: bool,
    /// Crop aspect ratio (width, height)
    pub aspect: (u32, u32),
    /// Compression quality (0.0-1.0)
    pub quality: f32,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            allows_editing: true,
            aspect: (1, 1),
            quality: 1.0,
        }
    }
}

/// Access to the camera and photo gallery
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoPicker: Send + Sync {
    /// Ask for access to a source
    async fn request_permission(&self, source: PhotoSource) -> bool;

    /// Open the source; `None` means the user cancelled
    async fn launch(&self, source: PhotoSource, options: PickOptions) -> Result<Option<Photo>>;
}

/// Request permission, then launch the picker
///
/// Denied permission and cancellation both come back as errors so callers
/// can leave their state untouched with a single `?`.
pub async fn pick_photo(
    picker: &dyn PhotoPicker,
    source: PhotoSource,
    options: PickOptions,
) -> Result<Photo> {
    if !picker.request_permission(source).await {
        tracing::warn!(%source, "Photo permission denied");
        return Err(MediaError::PermissionDenied(source));
    }
    picker.launch(source, options).await?.ok_or(MediaError::Cancelled)
}

/// Picker that fabricates photos after a short delay
#[derive(Debug)]
pub struct SimulatedPhotoPicker {
    camera_granted: bool,
    gallery_granted: bool,
    cancel: bool,
    delay: Duration,
    taken: AtomicU32,
}

impl SimulatedPhotoPicker {
    /// Picker with every permission granted
    pub fn new() -> Self {
        Self {
            camera_granted: true,
            gallery_granted: true,
            cancel: false,
            delay: Duration::ZERO,
            taken: AtomicU32::new(0),
        }
    }

    /// Deny access to a source
    pub fn deny(mut self, source: PhotoSource) -> Self {
        match source {
            PhotoSource::Camera => self.camera_granted = false,
            PhotoSource::Gallery => self.gallery_granted = false,
        }
        self
    }

    /// Cancel every launch
    pub fn cancelling(mut self) -> Self {
        self.cancel = true;
        self
    }

    /// Wait this long before returning a photo
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for SimulatedPhotoPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PhotoPicker for SimulatedPhotoPicker {
    async fn request_permission(&self, source: PhotoSource) -> bool {
        match source {
            PhotoSource::Camera => self.camera_granted,
            PhotoSource::Gallery => self.gallery_granted,
        }
    }

    async fn launch(&self, source: PhotoSource, _options: PickOptions) -> Result<Option<Photo>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.cancel {
            return Ok(None);
        }
        let n = self.taken.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(Some(Photo {
            uri: format!("file:///simulated/{}/{}.jpg", source, n),
            source,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_picker_returns_distinct_photos() {
        let picker = SimulatedPhotoPicker::new();
        let a = pick_photo(&picker, PhotoSource::Camera, PickOptions::default())
            .await
            .unwrap();
        let b = pick_photo(&picker, PhotoSource::Gallery, PickOptions::default())
            .await
            .unwrap();
        assert_eq!(a.source, PhotoSource::Camera);
        assert_eq!(b.uri, "file:///simulated/gallery/2.jpg");
    }

    #[tokio::test]
    async fn test_permission_denied_message() {
        let picker = SimulatedPhotoPicker::new().deny(PhotoSource::Gallery);
        let err = pick_photo(&picker, PhotoSource::Gallery, PickOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Permission to access gallery is required!");
        assert!(pick_photo(&picker, PhotoSource::Camera, PickOptions::default())
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_cancelled_pick() {
        let picker = SimulatedPhotoPicker::new().cancelling();
        let err = pick_photo(&picker, PhotoSource::Camera, PickOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, MediaError::Cancelled);
    }

    #[tokio::test]
    async fn test_launch_skipped_without_permission() {
        let mut picker = MockPhotoPicker::new();
        picker.expect_request_permission().return_const(false);
        picker.expect_launch().never();

        let err = pick_photo(&picker, PhotoSource::Camera, PickOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err, MediaError::PermissionDenied(PhotoSource::Camera));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_is_respected() {
        let picker = SimulatedPhotoPicker::new().with_delay(Duration::from_secs(1));
        let start = tokio::time::Instant::now();
        pick_photo(&picker, PhotoSource::Camera, PickOptions::default())
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
