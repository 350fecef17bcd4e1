// SPDX-License-Identifier: MPL-2.0
//! Session state for the enhancement workspace.

use crate::api::{Algorithm, EnhancementMetrics};
use crate::app::config::defaults::{clamp_clip_limit, clamp_tile_size};
use crate::media::ImageData;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// How long the enhance button shows its confirmation label after a
/// successful enhancement before reverting.
pub const COMPLETE_LABEL_DURATION: Duration = Duration::from_secs(2);

/// The workspace's current display stage, projected from session state.
///
/// Exactly one stage holds at any time. The enhanced pane and the controls
/// render from this projection instead of inspecting individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No image loaded yet; the empty state is shown.
    NoImage,
    /// An image is loaded and ready to be enhanced.
    ImageLoaded,
    /// An enhancement request is in flight.
    Processing,
    /// The last enhancement succeeded and its result is on screen.
    ResultReady,
    /// The last enhancement failed; the enhanced pane shows the failure
    /// placeholder until the next attempt or a new image.
    Failed,
}

/// Everything the workspace remembers about the current session.
#[derive(Debug)]
pub struct Session {
    /// The loaded source image, if any.
    pub source: Option<ImageData>,
    /// Path the source image was loaded from (used to title the pane).
    pub source_path: Option<PathBuf>,
    /// The enhanced image returned by the service.
    pub result: Option<ImageData>,
    /// Quality metrics accompanying the result, when the service computed them.
    pub metrics: Option<EnhancementMetrics>,
    /// A request is currently in flight. Enforces single-flight: the
    /// enhance control is disabled while set.
    pub in_flight: bool,
    /// The last request failed and no newer result exists.
    pub failed: bool,
    /// When the last successful enhancement completed, while the
    /// confirmation label is still showing.
    pub completed_at: Option<Instant>,

    // Tuning parameters, seeded from config defaults.
    pub algorithm: Algorithm,
    pub clip_limit: f64,
    pub tile_size: u32,
}

impl Default for Session {
    fn default() -> Self {
        use crate::app::config::defaults::{DEFAULT_CLIP_LIMIT, DEFAULT_TILE_SIZE};
        Self {
            source: None,
            source_path: None,
            result: None,
            metrics: None,
            in_flight: false,
            failed: false,
            completed_at: None,
            algorithm: Algorithm::default(),
            clip_limit: DEFAULT_CLIP_LIMIT,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }
}

impl Session {
    pub fn stage(&self) -> Stage {
        if self.in_flight {
            Stage::Processing
        } else if self.result.is_some() {
            Stage::ResultReady
        } else if self.failed {
            Stage::Failed
        } else if self.source.is_some() {
            Stage::ImageLoaded
        } else {
            Stage::NoImage
        }
    }

    /// Whether the enhance control is enabled.
    pub fn can_enhance(&self) -> bool {
        self.source.is_some() && !self.in_flight
    }

    /// Whether the download control is enabled.
    pub fn can_download(&self) -> bool {
        self.result.is_some()
    }

    /// Whether the enhance button currently shows its confirmation label.
    pub fn showing_complete_label(&self) -> bool {
        self.completed_at
            .is_some_and(|t| t.elapsed() < COMPLETE_LABEL_DURATION)
    }

    /// Installs a freshly loaded source image, resetting any previous
    /// result, metrics and failure state.
    pub fn set_source(&mut self, image: ImageData, path: Option<PathBuf>) {
        self.source = Some(image);
        self.source_path = path;
        self.result = None;
        self.metrics = None;
        self.failed = false;
        self.completed_at = None;
    }

    pub fn set_clip_limit(&mut self, value: f64) {
        self.clip_limit = clamp_clip_limit(value);
    }

    pub fn set_tile_size(&mut self, value: u32) {
        self.tile_size = clamp_tile_size(value);
    }
}

/// Formats a metric value for display, two decimals.
pub fn format_metric(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats an improvement delta, one decimal with an explicit sign for
/// positive values.
pub fn format_improvement(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}")
    } else {
        format!("{value:.1}")
    }
}
