//! Orthographic projection bounds
//!
//! Light-space shadow frusta are described as an off-center box
//! (left/right/bottom/top plus near/far distances along -Z) and only turned
//! into a matrix once the extents are known to be non-degenerate.

use glam::Mat4;

/// Clip-space depth convention of the projection matrix
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClipDepth {
    /// Depth range [0, 1] (wgpu, Vulkan, D3D, Metal)
    #[default]
    ZeroToOne,
    /// Depth range [-1, 1] (OpenGL)
    NegativeOneToOne,
}

impl ClipDepth {
    /// NDC depth of the near plane
    #[inline]
    pub fn near_ndc(self) -> f32 {
        match self {
            Self::ZeroToOne => 0.0,
            Self::NegativeOneToOne => -1.0,
        }
    }

    /// NDC depth of the far plane
    #[inline]
    pub fn far_ndc(self) -> f32 {
        1.0
    }
}

/// Off-center orthographic volume in a right-handed view frame looking down -Z
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    /// Distance to the near plane (may be negative)
    pub near: f32,
    /// Distance to the far plane
    pub far: f32,
}

impl OrthoBounds {
    #[inline]
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self { left, right, bottom, top, near, far }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.far - self.near
    }

    /// Every extent strictly positive and every plane finite
    pub fn is_valid(&self) -> bool {
        let finite = [self.left, self.right, self.bottom, self.top, self.near, self.far]
            .iter()
            .all(|v| v.is_finite());
        finite && self.width() > 0.0 && self.height() > 0.0 && self.depth() > 0.0
    }

    /// Widen any extent narrower than `min_extent`.
    ///
    /// Width and height grow symmetrically about their midpoint; depth grows
    /// away from the near plane so nothing in front of the light is clipped.
    pub fn with_min_extent(self, min_extent: f32) -> Self {
        let widen = |lo: f32, hi: f32| {
            if hi - lo >= min_extent {
                (lo, hi)
            } else {
                let mid = (lo + hi) * 0.5;
                let half = min_extent * 0.5;
                (mid - half, mid + half)
            }
        };

        let (left, right) = widen(self.left, self.right);
        let (bottom, top) = widen(self.bottom, self.top);
        let far = if self.far - self.near >= min_extent {
            self.far
        } else {
            self.near + min_extent
        };

        Self { left, right, bottom, top, near: self.near, far }
    }

    /// Build the projection matrix for the given clip-depth convention
    pub fn to_matrix(&self, clip_depth: ClipDepth) -> Mat4 {
        match clip_depth {
            ClipDepth::ZeroToOne => Mat4::orthographic_rh(
                self.left, self.right, self.bottom, self.top, self.near, self.far,
            ),
            ClipDepth::NegativeOneToOne => Mat4::orthographic_rh_gl(
                self.left, self.right, self.bottom, self.top, self.near, self.far,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    #[test]
    fn test_ortho_bounds_validity() {
        assert!(OrthoBounds::new(-1.0, 1.0, -1.0, 1.0, 0.0, 10.0).is_valid());
        assert!(!OrthoBounds::new(1.0, 1.0, -1.0, 1.0, 0.0, 10.0).is_valid());
        assert!(!OrthoBounds::new(-1.0, 1.0, -1.0, 1.0, 5.0, 5.0).is_valid());
        assert!(!OrthoBounds::new(-1.0, f32::NAN, -1.0, 1.0, 0.0, 10.0).is_valid());
    }

    #[test]
    fn test_with_min_extent_widens_degenerate_box() {
        let point = OrthoBounds::new(2.0, 2.0, -3.0, -3.0, 4.0, 4.0);
        let widened = point.with_min_extent(0.01);

        assert!(widened.is_valid());
        assert!((widened.width() - 0.01).abs() < 1e-6);
        assert!((widened.height() - 0.01).abs() < 1e-6);
        assert!(((widened.left + widened.right) * 0.5 - 2.0).abs() < 1e-6);
        assert_eq!(widened.near, 4.0);
        assert!((widened.far - 4.01).abs() < 1e-6);
    }

    #[test]
    fn test_with_min_extent_keeps_wide_box() {
        let bounds = OrthoBounds::new(-5.0, 5.0, -2.0, 2.0, -1.0, 30.0);
        assert_eq!(bounds.with_min_extent(0.01), bounds);
    }

    #[test]
    fn test_to_matrix_zero_to_one() {
        let bounds = OrthoBounds::new(-2.0, 2.0, -1.0, 1.0, 1.0, 11.0);
        let proj = bounds.to_matrix(ClipDepth::ZeroToOne);

        let near = proj * Vec4::new(2.0, 1.0, -1.0, 1.0);
        let far = proj * Vec4::new(-2.0, -1.0, -11.0, 1.0);
        assert!((near - Vec4::new(1.0, 1.0, 0.0, 1.0)).length() < 1e-5);
        assert!((far - Vec4::new(-1.0, -1.0, 1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_to_matrix_negative_one_to_one() {
        let bounds = OrthoBounds::new(-2.0, 2.0, -1.0, 1.0, 1.0, 11.0);
        let proj = bounds.to_matrix(ClipDepth::NegativeOneToOne);

        let near = proj.project_point3(Vec3::new(0.0, 0.0, -1.0));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -11.0));
        assert!((near.z + 1.0).abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_clip_depth_planes() {
        assert_eq!(ClipDepth::default(), ClipDepth::ZeroToOne);
        assert_eq!(ClipDepth::ZeroToOne.near_ndc(), 0.0);
        assert_eq!(ClipDepth::NegativeOneToOne.near_ndc(), -1.0);
        assert_eq!(ClipDepth::NegativeOneToOne.far_ndc(), 1.0);
    }
}
