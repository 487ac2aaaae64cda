use std::ops::Range;

use crate::ray::Ray;
use crate::vec3::Vec3;

/// An object in a scene.
///
/// The primary purpose of a `Hittable` is to interact with rays using the
/// `hit` method. Scenes are shared between render threads, so implementations
/// must be `Sync + Send`.
pub trait Hittable: std::fmt::Debug + Sync + Send {
    /// Tests if `ray` intersects the object `self`, and if so, if that
    /// intersection occurs within `t_range` along the ray. (Recall that `Ray`
    /// is defined in terms of a `t` value that refers to points along the ray.)
    ///
    /// Both ends of `t_range` are *excluded*: a hit is only reported if
    /// `t_range.start < t < t_range.end`.
    ///
    /// The `t_range` serves two purposes here. First, if the intersection
    /// occurs at *negative* `t`, the object is behind the eye instead of in
    /// front of it, and the intersection is an illusion. Second, while the
    /// upper end of `t_range` starts out as infinity, we adjust it down as we
    /// find objects along `ray`. Once we've found an object at position `t`, we
    /// can ignore any objects at positions greater than `t`.
    fn hit(&self, ray: &Ray, t_range: Range<f64>) -> Option<HitRecord>;
}

/// Whether `t` lies strictly inside `t_range`.
#[inline]
fn surrounds(t_range: &Range<f64>, t: f64) -> bool {
    t_range.start < t && t < t_range.end
}

/// A sphere.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Hittable for Sphere {
    /// Solves `|origin + t*direction - center|^2 = radius^2` for `t`.
    ///
    /// A ray that only grazes the sphere (a single, repeated root) is treated
    /// as a miss.
    ///
    /// # Panics
    ///
    /// If `ray.direction` has zero length.
    #[inline]
    fn hit(&self, ray: &Ray, t_range: Range<f64>) -> Option<HitRecord> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        assert!(a != 0., "ray {:?} has no direction", ray);
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant > 0. {
            let root = discriminant.sqrt();
            for &t in &[(-half_b - root) / a, (-half_b + root) / a] {
                if surrounds(&t_range, t) {
                    let p = ray.at(t);
                    let outward_normal = (p - self.center) / self.radius;
                    return Some(HitRecord::with_face_normal(ray, t, p, outward_normal));
                }
            }
        }
        None
    }
}

/// A description of a `Ray` hitting a `Hittable`. This stores information
/// needed for shading later.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    /// Position along the ray, expressed as the ray parameter.
    pub t: f64,
    /// Position along the ray, as an actual point.
    pub p: Vec3,
    /// Surface normal at the hit position. Always faces against the ray.
    pub normal: Vec3,
    /// Whether the ray struck the side the outward normal points to.
    pub front_face: bool,
}

impl HitRecord {
    /// Builds a record from an `outward_normal`, flipping it when the ray
    /// arrives from inside the surface.
    pub fn with_face_normal(ray: &Ray, t: f64, p: Vec3, outward_normal: Vec3) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.;
        HitRecord {
            t,
            p,
            normal: if front_face {
                outward_normal
            } else {
                -outward_normal
            },
            front_face,
        }
    }
}
