//! # umbra_shadow - Shadow Caster Culling
//!
//! Per-frame, per-caster setup for orthographic shadow maps:
//! - Light-space view matrix centered on the caster
//! - Early rejection of casters that cannot shadow anything the camera sees
//! - Tight orthographic projection with a bounded depth range
//! - Priority score for allocating a limited shadow-map budget
//!
//! ## Architecture
//!
//! ```text
//! CullingRequest ──► ShadowFrame ──► light-space boxes ──► test_visibility
//!                                                               │
//!                                    rejected ◄─────────────────┤
//!                                                               ▼
//!                                           fit_projection + caster_priority
//!                                                               │
//!                                                               ▼
//!                                                         CullingResult
//! ```
//!
//! Every stage is a pure function, so requests can be culled from any number
//! of threads at once. Rendering, atlas management and picking which casters
//! to keep are left to the host.
//!
//! ## Example
//!
//! ```ignore
//! use umbra_shadow::prelude::*;
//!
//! let camera = CameraFrustum::perspective(eye, camera_rotation, fov_y, aspect, 0.1, 200.0, ClipDepth::ZeroToOne);
//! let mut corners = FrustumCorners::EMPTY;
//! camera.frustum_corners(&mut corners);
//!
//! let culler = ShadowCasterCuller::new(ShadowCullingConfig::default());
//! let result = culler.cull(&CullingRequest::new(
//!     caster_bounds,
//!     light_rotation,
//!     camera.position(),
//!     camera.forward(),
//!     corners,
//! ));
//!
//! if result.visible {
//!     shadow_pass.set_camera(result.view_matrix, result.projection_matrix);
//! }
//! ```

pub mod config;
pub mod cull;
pub mod culler;
pub mod data;
pub mod error;
pub mod fit;
pub mod frame;
pub mod frustum;
pub mod priority;
pub mod request;

// Re-exports
pub use config::{
    ShadowCullingConfig,
    DEFAULT_DEPTH_SLACK,
    DEFAULT_MIN_EXTENT,
    DEFAULT_REFERENCE_DISTANCE_SQ,
};

pub use cull::{test_visibility, Visibility};
pub use culler::{cull_shadow_caster, ShadowCasterCuller};
pub use data::GpuShadowCaster;
pub use error::CullingRequestError;
pub use fit::{fit_projection, projection_bounds, FittedProjection};
pub use frame::{ShadowFrame, DEPTH_FLIP};
pub use frustum::{CameraFrustum, FrustumCornerProvider};
pub use priority::caster_priority;
pub use request::{CullingRequest, CullingResult, FrustumCorners, MAX_FRUSTUM_CORNERS};

pub mod prelude {
    pub use crate::{
        CameraFrustum, CullingRequest, CullingResult, FrustumCornerProvider, FrustumCorners,
        GpuShadowCaster, ShadowCasterCuller, ShadowCullingConfig,
    };
    pub use umbra_math::prelude::*;
}
