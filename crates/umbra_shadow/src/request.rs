//! Per-caster culling inputs and outputs

use glam::{Mat4, Quat, Vec3, Vec4};
use umbra_math::{Aabb, OrthoBounds};

use crate::error::{CullingRequestError, Result};
use crate::frame::is_unit_rotation;

/// Number of corners of a view frustum (4 near + 4 far)
pub const MAX_FRUSTUM_CORNERS: usize = 8;

/// World-space frustum corners in a fixed-capacity buffer.
///
/// Order: near bottom-left, bottom-right, top-left, top-right, then the same
/// four on the far plane. Only the first `count` entries are meaningful.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrustumCorners {
    points: [Vec3; MAX_FRUSTUM_CORNERS],
    count: usize,
}

impl FrustumCorners {
    /// Buffer holding no corners
    pub const EMPTY: Self = Self {
        points: [Vec3::ZERO; MAX_FRUSTUM_CORNERS],
        count: 0,
    };

    /// Full set of 8 corners
    #[inline]
    pub const fn new(points: [Vec3; MAX_FRUSTUM_CORNERS]) -> Self {
        Self { points, count: MAX_FRUSTUM_CORNERS }
    }

    /// Copy up to 8 corners; longer input is an error rather than truncated
    pub fn from_slice(points: &[Vec3]) -> Result<Self> {
        if points.len() > MAX_FRUSTUM_CORNERS {
            return Err(CullingRequestError::TooManyFrustumCorners { count: points.len() });
        }
        let mut corners = Self::EMPTY;
        corners.points[..points.len()].copy_from_slice(points);
        corners.count = points.len();
        Ok(corners)
    }

    /// Overwrite with a full set of 8 corners
    #[inline]
    pub fn set(&mut self, points: [Vec3; MAX_FRUSTUM_CORNERS]) {
        self.points = points;
        self.count = MAX_FRUSTUM_CORNERS;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The valid corners
    #[inline]
    pub fn as_slice(&self) -> &[Vec3] {
        &self.points[..self.count]
    }

    /// World-space box of the valid corners re-fitted into `matrix`'s frame.
    /// No corners gives [`Aabb::EMPTY`].
    pub fn bounds_in(&self, matrix: &Mat4) -> Aabb {
        if self.is_empty() {
            return Aabb::EMPTY;
        }
        Aabb::from_points(self.as_slice()).transform(matrix)
    }
}

impl Default for FrustumCorners {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Everything needed to cull and fit one shadow caster for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CullingRequest {
    /// World-space caster bounds
    pub caster_bounds: Aabb,
    /// Light orientation; the light shines along `light_rotation * +Z`
    pub light_rotation: Quat,
    pub camera_position: Vec3,
    /// Unit view direction of the camera
    pub camera_forward: Vec3,
    pub frustum_corners: FrustumCorners,
}

impl CullingRequest {
    pub fn new(
        caster_bounds: Aabb,
        light_rotation: Quat,
        camera_position: Vec3,
        camera_forward: Vec3,
        frustum_corners: FrustumCorners,
    ) -> Self {
        Self {
            caster_bounds,
            light_rotation,
            camera_position,
            camera_forward,
            frustum_corners,
        }
    }

    /// Check the preconditions the culler assumes
    pub fn validate(&self) -> Result<()> {
        if !self.caster_bounds.is_finite() {
            return Err(CullingRequestError::NonFinite { field: "caster_bounds" });
        }
        if let Some(axis) = self.caster_bounds.inverted_axis() {
            return Err(CullingRequestError::InvertedBounds { axis: ['x', 'y', 'z'][axis] });
        }
        if !self.light_rotation.is_finite() {
            return Err(CullingRequestError::NonFinite { field: "light_rotation" });
        }
        if !is_unit_rotation(self.light_rotation) {
            return Err(CullingRequestError::NonUnitRotation {
                length: self.light_rotation.length(),
            });
        }
        if !self.camera_position.is_finite() {
            return Err(CullingRequestError::NonFinite { field: "camera_position" });
        }
        if !self.camera_forward.is_finite() {
            return Err(CullingRequestError::NonFinite { field: "camera_forward" });
        }
        if self.frustum_corners.as_slice().iter().any(|p| !p.is_finite()) {
            return Err(CullingRequestError::NonFinite { field: "frustum_corners" });
        }
        Ok(())
    }
}

/// Shadow pass setup for one caster.
///
/// `visible` is the only signal; the other fields hold defaults when it is
/// false.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CullingResult {
    /// World to light space
    pub view_matrix: Mat4,
    /// Light space to clip space
    pub projection_matrix: Mat4,
    /// Orthographic volume the projection was built from
    pub bounds: OrthoBounds,
    /// Lower renders first
    pub priority: f32,
    /// Points from the scene toward the light, w = 0
    pub light_direction: Vec4,
    pub visible: bool,
}

impl CullingResult {
    /// Result for a caster that cannot cast a visible shadow
    pub const INVISIBLE: Self = Self {
        view_matrix: Mat4::IDENTITY,
        projection_matrix: Mat4::IDENTITY,
        bounds: OrthoBounds::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        priority: 0.0,
        light_direction: Vec4::ZERO,
        visible: false,
    };

    /// Combined view-projection, only for visible casters
    pub fn view_projection(&self) -> Option<Mat4> {
        self.visible.then(|| self.projection_matrix * self.view_matrix)
    }
}

impl Default for CullingResult {
    fn default() -> Self {
        Self::INVISIBLE
    }
}
