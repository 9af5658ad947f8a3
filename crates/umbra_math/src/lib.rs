//! # umbra_math - Shadow Fitting Primitives
//!
//! Small geometry layer on top of `glam` used by the shadow caster culler:
//! axis-aligned boxes that can be re-fitted into another frame, and
//! orthographic bounds that always produce an invertible projection.

pub mod bounds;
pub mod projection;

pub use bounds::*;
pub use projection::*;

pub use glam::{Mat4, Quat, Vec3, Vec4};

/// Common math constants
pub mod consts {
    /// Squared length below which a direction is treated as zero
    pub const DIRECTION_EPSILON_SQ: f32 = 1e-12;
}

/// Unit direction from `from` towards `to`, or zero when the points coincide.
///
/// Never produces NaN, so dot products against the result degrade to 0.
#[inline]
pub fn safe_direction(from: Vec3, to: Vec3) -> Vec3 {
    let delta = to - from;
    if delta.length_squared() <= consts::DIRECTION_EPSILON_SQ {
        Vec3::ZERO
    } else {
        delta.normalize_or_zero()
    }
}

pub mod prelude {
    pub use crate::bounds::Aabb;
    pub use crate::projection::{ClipDepth, OrthoBounds};
    pub use crate::safe_direction;
    pub use glam::{Mat4, Quat, Vec3, Vec4};
}
