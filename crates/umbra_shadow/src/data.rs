//! GPU Shadow Caster Data
//!
//! Packed per-caster record for upload to a uniform or storage buffer.

use serde::{Deserialize, Serialize};

use crate::request::CullingResult;

/// Shadow pass data for one caster, ready for `bytemuck::bytes_of`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuShadowCaster {
    /// Light view-projection matrix (column-major)
    pub view_projection: [[f32; 4]; 4],

    /// Direction toward the light, w = 0
    pub light_direction: [f32; 4],

    /// Near plane of the orthographic volume
    pub near: f32,

    /// Far plane of the orthographic volume
    pub far: f32,

    /// Scheduling priority (lower renders first)
    pub priority: f32,

    /// 1 when the caster is visible, 0 otherwise
    pub enabled: u32,
}

impl GpuShadowCaster {
    /// Record for a rejected caster
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled != 0
    }

    /// Pack a culling result; invisible results pack as [`disabled`](Self::disabled)
    pub fn from_result(result: &CullingResult) -> Self {
        let Some(view_projection) = result.view_projection() else {
            return Self::disabled();
        };

        Self {
            view_projection: view_projection.to_cols_array_2d(),
            light_direction: result.light_direction.to_array(),
            near: result.bounds.near,
            far: result.bounds.far,
            priority: result.priority,
            enabled: 1,
        }
    }
}

impl From<&CullingResult> for GpuShadowCaster {
    fn from(result: &CullingResult) -> Self {
        Self::from_result(result)
    }
}
