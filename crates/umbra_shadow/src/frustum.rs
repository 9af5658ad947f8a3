//! Camera frustum corner extraction
//!
//! The culler only needs the 8 world-space corners of the camera's view
//! volume. Where they come from is up to the host; [`CameraFrustum`] derives
//! them from a view and projection matrix pair for a single eye.

use glam::{Mat4, Quat, Vec3};
use umbra_math::ClipDepth;

use crate::request::{FrustumCorners, MAX_FRUSTUM_CORNERS};

/// Source of world-space frustum corners.
///
/// Implementations write into the caller's buffer, so concurrent queries on
/// different buffers never alias.
pub trait FrustumCornerProvider {
    /// Write the corners (near BL, BR, TL, TR, then far BL, BR, TL, TR)
    fn frustum_corners(&self, out: &mut FrustumCorners);

    /// Corners in a fresh buffer
    fn corners(&self) -> FrustumCorners {
        let mut out = FrustumCorners::EMPTY;
        self.frustum_corners(&mut out);
        out
    }
}

/// View volume of a single (non-stereo) camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrustum {
    pub view: Mat4,
    pub projection: Mat4,
    pub clip_depth: ClipDepth,
}

impl CameraFrustum {
    pub fn new(view: Mat4, projection: Mat4, clip_depth: ClipDepth) -> Self {
        Self { view, projection, clip_depth }
    }

    /// Perspective camera at `position` looking along `rotation * +Z`
    pub fn perspective(
        position: Vec3,
        rotation: Quat,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
        clip_depth: ClipDepth,
    ) -> Self {
        let view = Mat4::look_to_rh(position, rotation * Vec3::Z, rotation * Vec3::Y);
        let projection = match clip_depth {
            ClipDepth::ZeroToOne => Mat4::perspective_rh(fov_y, aspect, near, far),
            ClipDepth::NegativeOneToOne => Mat4::perspective_rh_gl(fov_y, aspect, near, far),
        };
        Self { view, projection, clip_depth }
    }

    /// Camera position recovered from the view matrix
    pub fn position(&self) -> Vec3 {
        self.view.inverse().w_axis.truncate()
    }

    /// World-space view direction recovered from the view matrix
    pub fn forward(&self) -> Vec3 {
        self.view.inverse().transform_vector3(Vec3::NEG_Z).normalize_or_zero()
    }
}

impl FrustumCornerProvider for CameraFrustum {
    fn frustum_corners(&self, out: &mut FrustumCorners) {
        let inv_view_proj = (self.projection * self.view).inverse();
        let depths = [self.clip_depth.near_ndc(), self.clip_depth.far_ndc()];

        let mut points = [Vec3::ZERO; MAX_FRUSTUM_CORNERS];
        for (i, point) in points.iter_mut().enumerate() {
            let ndc = Vec3::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                depths[i >> 2],
            );
            *point = inv_view_proj.project_point3(ndc);
        }
        out.set(points);
    }
}
