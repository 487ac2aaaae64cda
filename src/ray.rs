use crate::vec3::Vec3;

/// A ray, beginning at `origin` and extending along `direction`.
///
/// `direction` need not be a unit vector, so `t` is measured in multiples of
/// its length rather than in world units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Finds the point along the ray at parameter `t`. Positive values of `t`
    /// represent positions forward from the origin, and negative values,
    /// behind the origin.
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + t * self.direction
    }
}
