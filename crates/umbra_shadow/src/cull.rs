//! Light-space visibility rejection
//!
//! Both boxes must already be in the caster's light space (see
//! [`ShadowFrame`](crate::ShadowFrame)), where the light looks down -Z.
//! Comparisons are strict: a caster that only touches the frustum box on a
//! face, edge or corner is kept.
//!
//! The footprint test rejects on both sides of each lateral axis: a caster
//! wholly left of, right of, below or above the frustum box is dropped, not
//! only one whose minimum lies past the frustum's maximum.

use umbra_math::Aabb;

/// Outcome of the light-space overlap test
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Caster may shadow something the camera sees
    Visible,
    /// Caster lies entirely past the far end of the frustum along the light
    BeyondFrustum,
    /// Caster's footprint across the light does not overlap the frustum's
    OutsideFootprint,
}

impl Visibility {
    #[inline]
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Classify a caster against the camera frustum, both in light space
pub fn test_visibility(caster: &Aabb, frustum: &Aabb) -> Visibility {
    // Light travels toward -Z: the caster's nearest face to the light is
    // max.z, the frustum's farthest point is min.z.
    if caster.max.z < frustum.min.z {
        return Visibility::BeyondFrustum;
    }

    let disjoint_x = caster.min.x > frustum.max.x || caster.max.x < frustum.min.x;
    let disjoint_y = caster.min.y > frustum.max.y || caster.max.y < frustum.min.y;
    if disjoint_x || disjoint_y {
        return Visibility::OutsideFootprint;
    }

    Visibility::Visible
}
