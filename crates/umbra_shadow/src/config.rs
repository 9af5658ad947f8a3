//! Shadow Culling Configuration
//!
//! Tuning constants for projection fitting and priority scoring, with serde
//! support for hot-reload.
//!
//! The depth slack and reference distance are heuristics tuned for a scene
//! scale of roughly 1 unit = 1 metre with casters within a hundred metres of
//! the camera. Recalibrate both for other scene scales.

use serde::{Deserialize, Serialize};
use umbra_math::ClipDepth;

/// Maximum light-space depth kept past a caster's near face, in world units
pub const DEFAULT_DEPTH_SLACK: f32 = 50.0;

/// Squared camera distance at which the distance term of the priority saturates
pub const DEFAULT_REFERENCE_DISTANCE_SQ: f32 = 10_000.0;

/// Smallest width, height or depth a fitted projection may have
pub const DEFAULT_MIN_EXTENT: f32 = 1e-4;

const MIN_EXTENT_RANGE: (f32, f32) = (1e-6, 1.0);

/// Per-frame shadow caster culling configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowCullingConfig {
    /// Far plane is clamped to at most this far past the caster's near face,
    /// unless the caster itself is deeper
    pub depth_slack: f32,

    /// Squared distance normalising the distance term of the priority
    pub reference_distance_sq: f32,

    /// Minimum extent used to keep degenerate projections invertible
    pub min_extent: f32,

    /// Clip-space depth convention of the generated projection
    pub clip_depth: ClipDepth,
}

impl Default for ShadowCullingConfig {
    fn default() -> Self {
        Self {
            depth_slack: DEFAULT_DEPTH_SLACK,
            reference_distance_sq: DEFAULT_REFERENCE_DISTANCE_SQ,
            min_extent: DEFAULT_MIN_EXTENT,
            clip_depth: ClipDepth::ZeroToOne,
        }
    }
}

impl ShadowCullingConfig {
    /// Configuration producing OpenGL-style [-1, 1] depth projections
    pub fn gl() -> Self {
        Self {
            clip_depth: ClipDepth::NegativeOneToOne,
            ..Default::default()
        }
    }

    /// Set the depth slack
    pub fn with_depth_slack(mut self, depth_slack: f32) -> Self {
        self.depth_slack = depth_slack;
        self
    }

    /// Set the reference distance (not squared)
    pub fn with_reference_distance(mut self, distance: f32) -> Self {
        self.reference_distance_sq = distance * distance;
        self
    }

    /// Set the clip-depth convention
    pub fn with_clip_depth(mut self, clip_depth: ClipDepth) -> Self {
        self.clip_depth = clip_depth;
        self
    }

    /// Validate configuration and clamp values to valid ranges
    pub fn validate(&mut self) {
        let min_extent = if self.min_extent.is_finite() {
            self.min_extent.clamp(MIN_EXTENT_RANGE.0, MIN_EXTENT_RANGE.1)
        } else {
            DEFAULT_MIN_EXTENT
        };
        if min_extent != self.min_extent {
            log::debug!("Shadow culling: min_extent {} clamped to {}", self.min_extent, min_extent);
            self.min_extent = min_extent;
        }

        let depth_slack = if self.depth_slack.is_finite() {
            self.depth_slack.max(self.min_extent)
        } else {
            DEFAULT_DEPTH_SLACK
        };
        if depth_slack != self.depth_slack {
            log::debug!("Shadow culling: depth_slack {} clamped to {}", self.depth_slack, depth_slack);
            self.depth_slack = depth_slack;
        }

        if !(self.reference_distance_sq.is_finite() && self.reference_distance_sq > 0.0) {
            log::debug!(
                "Shadow culling: reference_distance_sq {} reset to {}",
                self.reference_distance_sq,
                DEFAULT_REFERENCE_DISTANCE_SQ
            );
            self.reference_distance_sq = DEFAULT_REFERENCE_DISTANCE_SQ;
        }
    }
}
