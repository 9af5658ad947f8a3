//! Axis-aligned bounding boxes and re-fitting them into other frames

use glam::{Mat4, Vec3};

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Inverted box; expanding it by any point yields that point
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    /// Create from min and max points
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest box containing every point. Empty input gives [`Aabb::EMPTY`].
    pub fn from_points(points: &[Vec3]) -> Self {
        points
            .iter()
            .fold(Self::EMPTY, |aabb, &point| aabb.expand_to_include(point))
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if min <= max on every axis
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// First axis (0 = x, 1 = y, 2 = z) on which min > max
    pub fn inverted_axis(&self) -> Option<usize> {
        (0..3).find(|&axis| self.min[axis] > self.max[axis])
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Expand to include a point
    #[inline]
    pub fn expand_to_include(self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Check if a point is inside (boundary inclusive)
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// The 8 corners; bit 0 of the index selects max.x, bit 1 max.y, bit 2 max.z
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Box that exactly bounds this box after the affine `matrix` is applied.
    ///
    /// All 8 corners go through the transform; a rotation moves the extreme
    /// points away from the original min/max corners.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        self.corners()
            .iter()
            .fold(Self::EMPTY, |aabb, &corner| {
                aabb.expand_to_include(matrix.transform_point3(corner))
            })
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}
