// SPDX-License-Identifier: MPL-2.0
//! Default values and allowed ranges for configurable settings.
//!
//! The enhancement defaults mirror what the backend applies when a parameter
//! is omitted, so a fresh install and the service agree on behavior.

/// Default CLAHE clip limit.
pub const DEFAULT_CLIP_LIMIT: f64 = 2.0;

/// Minimum clip limit exposed by the slider.
pub const MIN_CLIP_LIMIT: f64 = 0.5;

/// Maximum clip limit exposed by the slider.
pub const MAX_CLIP_LIMIT: f64 = 10.0;

/// Slider step for the clip limit.
pub const CLIP_LIMIT_STEP: f64 = 0.1;

/// Default CLAHE tile grid size.
pub const DEFAULT_TILE_SIZE: u32 = 8;

/// Minimum tile size exposed by the slider.
pub const MIN_TILE_SIZE: u32 = 2;

/// Maximum tile size exposed by the slider.
pub const MAX_TILE_SIZE: u32 = 16;

/// Clamps a clip limit into the supported range so persisted configs cannot
/// request nonsensical values.
#[must_use]
pub fn clamp_clip_limit(value: f64) -> f64 {
    value.clamp(MIN_CLIP_LIMIT, MAX_CLIP_LIMIT)
}

/// Clamps a tile size into the supported range.
#[must_use]
pub fn clamp_tile_size(value: u32) -> u32 {
    value.clamp(MIN_TILE_SIZE, MAX_TILE_SIZE)
}
