//! Light-space frame construction
//!
//! The light view is centered on the caster and rotated into the light's
//! orientation, then Z is negated so the light looks down -Z like any other
//! right-handed camera. Depths in front of the light are therefore negative
//! light-space Z values.

use glam::{Mat4, Quat, Vec3, Vec4};
use umbra_math::Aabb;

/// Tolerance on `|light_rotation| - 1` accepted as a unit quaternion
pub const UNIT_ROTATION_TOLERANCE: f32 = 1e-3;

/// Whether `rotation` is close enough to unit length to build a light view
#[inline]
pub fn is_unit_rotation(rotation: Quat) -> bool {
    (rotation.length() - 1.0).abs() <= UNIT_ROTATION_TOLERANCE
}

/// Negates Z to turn the light's +Z forward into a -Z view axis
pub const DEPTH_FLIP: Mat4 = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::NEG_Z, Vec4::W);

/// View matrix and derived vectors for one caster
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowFrame {
    /// World to light space
    pub view: Mat4,
    /// World-space center of the caster bounds
    pub center: Vec3,
    /// Direction the light travels, world space
    pub light_forward: Vec3,
}

impl ShadowFrame {
    /// Build the light view for a caster.
    ///
    /// `light_rotation` must be a unit quaternion.
    pub fn new(caster_bounds: &Aabb, light_rotation: Quat) -> Self {
        debug_assert!(
            is_unit_rotation(light_rotation),
            "light rotation must be a unit quaternion: {light_rotation:?}"
        );

        let center = caster_bounds.center();
        let rotation = light_rotation.inverse();
        let view = DEPTH_FLIP * Mat4::from_quat(rotation) * Mat4::from_translation(-center);

        Self {
            view,
            center,
            light_forward: light_rotation * Vec3::Z,
        }
    }

    /// Direction toward the light, w = 0
    #[inline]
    pub fn light_direction(&self) -> Vec4 {
        (-self.light_forward).extend(0.0)
    }

    /// Re-fit world-space bounds into light space
    #[inline]
    pub fn to_light_space(&self, world: &Aabb) -> Aabb {
        world.transform(&self.view)
    }
}
