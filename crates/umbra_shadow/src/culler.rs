//! Per-caster culling pipeline
//!
//! Frame construction, light-space re-fit, rejection, then fitting and
//! scoring for casters that survive. Rejected casters skip the last two
//! stages entirely.

use rayon::prelude::*;

use crate::config::ShadowCullingConfig;
use crate::cull::{test_visibility, Visibility};
use crate::fit::fit_projection;
use crate::frame::ShadowFrame;
use crate::priority::caster_priority;
use crate::request::{CullingRequest, CullingResult};

/// Batches smaller than this are culled on the calling thread
const PARALLEL_THRESHOLD: usize = 128;

/// Smallest slice of requests handed to one rayon task
const MIN_REQUESTS_PER_TASK: usize = 32;

/// Stateless shadow caster culler; cheap to copy into worker threads
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShadowCasterCuller {
    config: ShadowCullingConfig,
}

impl ShadowCasterCuller {
    /// Create a culler, clamping the configuration to valid ranges
    pub fn new(mut config: ShadowCullingConfig) -> Self {
        config.validate();
        Self { config }
    }

    pub fn config(&self) -> &ShadowCullingConfig {
        &self.config
    }

    /// Cull, fit and score one caster
    pub fn cull(&self, request: &CullingRequest) -> CullingResult {
        debug_assert!(
            request.caster_bounds.is_valid(),
            "caster bounds inverted: {:?}",
            request.caster_bounds
        );

        let frame = ShadowFrame::new(&request.caster_bounds, request.light_rotation);
        let caster = frame.to_light_space(&request.caster_bounds);
        let frustum = request.frustum_corners.bounds_in(&frame.view);

        let visibility = test_visibility(&caster, &frustum);
        if visibility != Visibility::Visible {
            log::trace!(
                "Shadow caster at {:?} rejected: {:?}",
                frame.center,
                visibility
            );
            return CullingResult::INVISIBLE;
        }

        let fitted = fit_projection(&caster, &frustum, &self.config);
        let priority = caster_priority(
            frame.center,
            request.camera_position,
            request.camera_forward,
            self.config.reference_distance_sq,
        );

        CullingResult {
            view_matrix: frame.view,
            projection_matrix: fitted.matrix,
            bounds: fitted.bounds,
            priority,
            light_direction: frame.light_direction(),
            visible: true,
        }
    }

    /// Cull every request in order on the calling thread
    pub fn cull_batch(&self, requests: &[CullingRequest]) -> Vec<CullingResult> {
        requests.iter().map(|request| self.cull(request)).collect()
    }

    /// Cull every request on the rayon thread pool.
    ///
    /// Output order and contents match [`cull_batch`](Self::cull_batch).
    /// Small batches stay on the calling thread.
    pub fn cull_batch_parallel(&self, requests: &[CullingRequest]) -> Vec<CullingResult> {
        if requests.len() < PARALLEL_THRESHOLD {
            return self.cull_batch(requests);
        }

        log::debug!(
            "Culling {} shadow casters on {} threads",
            requests.len(),
            rayon::current_num_threads()
        );
        requests
            .par_iter()
            .with_min_len(MIN_REQUESTS_PER_TASK)
            .map(|request| self.cull(request))
            .collect()
    }
}

/// Cull a single caster with the given configuration
pub fn cull_shadow_caster(request: &CullingRequest, config: &ShadowCullingConfig) -> CullingResult {
    ShadowCasterCuller::new(*config).cull(request)
}
