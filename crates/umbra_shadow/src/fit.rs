//! Orthographic projection fitting
//!
//! The projection hugs the caster's light-space box laterally. Along the
//! view axis it starts at the caster's face nearest the light and extends
//! far enough to reach the receivers inside the camera frustum, but no more
//! than `depth_slack` past the near plane unless the caster itself is deeper.
//! A far plane pushed all the way to the end of a long frustum would squeeze
//! the useful depth range into a sliver of the depth buffer.

use glam::Mat4;
use umbra_math::{Aabb, OrthoBounds};

use crate::config::ShadowCullingConfig;

/// Fitted orthographic volume and its matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FittedProjection {
    pub bounds: OrthoBounds,
    pub matrix: Mat4,
}

/// Raw bounds before the minimum-extent safeguard
pub fn projection_bounds(caster: &Aabb, frustum: &Aabb, depth_slack: f32) -> OrthoBounds {
    let near = -caster.max.z;
    let caster_far = -caster.min.z;
    let frustum_far = -frustum.min.z;
    let far = caster_far.max(frustum_far.min(near + depth_slack));

    OrthoBounds::new(caster.min.x, caster.max.x, caster.min.y, caster.max.y, near, far)
}

/// Fit the shadow projection for a visible caster
pub fn fit_projection(caster: &Aabb, frustum: &Aabb, config: &ShadowCullingConfig) -> FittedProjection {
    let raw = projection_bounds(caster, frustum, config.depth_slack);
    let bounds = raw.with_min_extent(config.min_extent);
    if bounds != raw {
        log::trace!("Shadow fit: widened degenerate projection {:?} to {:?}", raw, bounds);
    }

    FittedProjection {
        bounds,
        matrix: bounds.to_matrix(config.clip_depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use umbra_math::ClipDepth;

    fn frustum() -> Aabb {
        Aabb::new(Vec3::new(-10.0, -10.0, -98.5), Vec3::new(10.0, 10.0, 0.5))
    }

    #[test]
    fn test_lateral_bounds_follow_caster() {
        let caster = Aabb::new(Vec3::new(-2.0, -3.0, -0.5), Vec3::new(4.0, 5.0, 0.5));
        let bounds = projection_bounds(&caster, &frustum(), 50.0);

        assert_eq!((bounds.left, bounds.right), (-2.0, 4.0));
        assert_eq!((bounds.bottom, bounds.top), (-3.0, 5.0));
        assert_eq!(bounds.near, -0.5);
    }

    #[test]
    fn test_far_clamped_by_depth_slack() {
        let caster = Aabb::new(Vec3::new(-1.0, -1.0, -0.5), Vec3::new(1.0, 1.0, 0.5));
        let bounds = projection_bounds(&caster, &frustum(), 50.0);
        assert_eq!(bounds.far, 49.5);
    }

    #[test]
    fn test_far_stops_at_frustum_end() {
        let caster = Aabb::new(Vec3::new(-1.0, -1.0, -0.5), Vec3::new(1.0, 1.0, 0.5));
        let shallow = Aabb::new(Vec3::new(-10.0, -10.0, -20.0), Vec3::new(10.0, 10.0, 0.0));
        let bounds = projection_bounds(&caster, &shallow, 50.0);
        assert_eq!(bounds.far, 20.0);
    }

    #[test]
    fn test_far_never_clips_deep_caster() {
        let caster = Aabb::new(Vec3::new(-1.0, -1.0, -80.0), Vec3::new(1.0, 1.0, 0.0));
        let bounds = projection_bounds(&caster, &frustum(), 50.0);
        assert_eq!(bounds.near, 0.0);
        assert_eq!(bounds.far, 80.0);

        // Frustum ends in front of the caster's far face
        let short = Aabb::new(Vec3::new(-10.0, -10.0, -5.0), Vec3::new(10.0, 10.0, 10.0));
        assert_eq!(projection_bounds(&caster, &short, 50.0).far, 80.0);
    }

    #[test]
    fn test_degenerate_caster_gets_valid_projection() {
        let point = Aabb::new(Vec3::ZERO, Vec3::ZERO);
        let tight = Aabb::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0));
        let config = ShadowCullingConfig::default();
        let fitted = fit_projection(&point, &tight, &config);

        assert!(fitted.bounds.is_valid());
        assert!(fitted.matrix.is_finite());
        assert!(fitted.matrix.determinant().abs() > 0.0);
    }

    #[test]
    fn test_projection_maps_caster_into_clip_volume() {
        let caster = Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 1.0));
        for clip_depth in [ClipDepth::ZeroToOne, ClipDepth::NegativeOneToOne] {
            let config = ShadowCullingConfig::default().with_clip_depth(clip_depth);
            let fitted = fit_projection(&caster, &frustum(), &config);

            let near_ndc = fitted.matrix.project_point3(caster.max);
            let corner_ndc = fitted.matrix.project_point3(caster.min);
            assert!((near_ndc.x - 1.0).abs() < 1e-5);
            assert!((near_ndc.y - 1.0).abs() < 1e-5);
            assert!((near_ndc.z - clip_depth.near_ndc()).abs() < 1e-5);
            assert!((corner_ndc.x + 1.0).abs() < 1e-5);
            assert!(corner_ndc.z <= 1.0 + 1e-5);
        }
    }
}
