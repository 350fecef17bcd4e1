// SPDX-License-Identifier: MPL-2.0
//! Wire types for the `/enhance` endpoint.
//!
//! Field names follow the service contract exactly; the request uses the
//! backend's camelCase parameter names (`clipLimit`, `tileSize`) while the
//! response uses snake_case.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enhancement algorithms the backend understands.
///
/// `clahe` is the default and the only one with tunable parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Clahe,
    Histogram,
    Unsharp,
    Bilateral,
    Morphological,
    Gamma,
}

impl Algorithm {
    /// All algorithms, in the order they appear in the picker.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Clahe,
        Algorithm::Histogram,
        Algorithm::Unsharp,
        Algorithm::Bilateral,
        Algorithm::Morphological,
        Algorithm::Gamma,
    ];

    /// Whether this algorithm uses the clip-limit/tile-size tunables.
    #[must_use]
    pub fn has_tunables(self) -> bool {
        matches!(self, Algorithm::Clahe)
    }

    /// The name sent on the wire.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Algorithm::Clahe => "clahe",
            Algorithm::Histogram => "histogram",
            Algorithm::Unsharp => "unsharp",
            Algorithm::Bilateral => "bilateral",
            Algorithm::Morphological => "morphological",
            Algorithm::Gamma => "gamma",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Algorithm::Clahe => "CLAHE",
            Algorithm::Histogram => "Histogram Equalization",
            Algorithm::Unsharp => "Unsharp Masking",
            Algorithm::Bilateral => "Bilateral Filter",
            Algorithm::Morphological => "Morphological",
            Algorithm::Gamma => "Gamma Correction",
        };
        write!(f, "{label}")
    }
}

/// Request body for `POST /enhance`. Constructed fresh per submission.
#[derive(Debug, Clone, Serialize)]
pub struct EnhancementRequest {
    /// Source image as a base64 data URI.
    pub image: String,
    pub algorithm: Algorithm,
    #[serde(rename = "clipLimit")]
    pub clip_limit: f64,
    #[serde(rename = "tileSize")]
    pub tile_size: u32,
}

/// Before/after quality metrics computed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnhancementMetrics {
    pub contrast_original: f64,
    pub contrast_enhanced: f64,
    pub contrast_improvement: f64,
    pub sharpness_original: f64,
    pub sharpness_enhanced: f64,
    pub sharpness_improvement: f64,
    pub entropy_original: f64,
    pub entropy_enhanced: f64,
    pub entropy_improvement: f64,
}

/// Success body for `POST /enhance`.
///
/// The backend echoes the algorithm it applied; the echo is accepted but not
/// required. `metrics` is optional: when absent, the metrics panel stays
/// hidden.
#[derive(Debug, Clone, Deserialize)]
pub struct EnhancementResponse {
    /// Enhanced image as a base64 data URI.
    pub enhanced_image: String,
    #[serde(default)]
    pub metrics: Option<EnhancementMetrics>,
    #[serde(default)]
    pub algorithm: Option<String>,
}
