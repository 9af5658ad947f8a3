//! Shadow budget priority
//!
//! Lower scores render first. The score sums two terms in [0, 1]: squared
//! camera distance normalised by a reference distance, and how far the
//! caster sits from the center of the view.

use glam::Vec3;
use umbra_math::safe_direction;

/// Priority of a caster centered at `caster_center`.
///
/// A caster at the camera position has no view direction; its angle term
/// falls back to the neutral 0.5.
pub fn caster_priority(
    caster_center: Vec3,
    camera_position: Vec3,
    camera_forward: Vec3,
    reference_distance_sq: f32,
) -> f32 {
    let distance_term =
        (caster_center.distance_squared(camera_position) / reference_distance_sq).clamp(0.0, 1.0);
    let to_caster = safe_direction(camera_position, caster_center);
    let cos_angle = camera_forward.dot(to_caster).clamp(-1.0, 1.0);

    distance_term + 0.5 - 0.5 * cos_angle
}
