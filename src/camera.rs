use crate::ray::Ray;
use crate::vec3::Vec3;

/// A pinhole camera looking down the negative Z axis.
///
/// All geometry is computed at construction; afterwards the camera is only
/// read, so one instance can be shared by every render thread.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Creates a camera at the world origin.
    ///
    /// The viewport is `aspect_ratio * viewport_height` wide and sits
    /// `focal_length` in front of the eye.
    pub fn new(aspect_ratio: f64, viewport_height: f64, focal_length: f64) -> Self {
        Camera::with_origin(Vec3::default(), aspect_ratio, viewport_height, focal_length)
    }

    /// Like `new`, but with the eye at `origin`.
    pub fn with_origin(
        origin: Vec3,
        aspect_ratio: f64,
        viewport_height: f64,
        focal_length: f64,
    ) -> Self {
        let viewport_width = aspect_ratio * viewport_height;
        let horizontal = Vec3(viewport_width, 0., 0.);
        let vertical = Vec3(0., viewport_height, 0.);
        let lower_left_corner =
            origin - horizontal / 2. - vertical / 2. - Vec3(0., 0., focal_length);
        Camera {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
        }
    }

    /// Produces the ray through image-plane coordinates `(u, v)`, where
    /// `(0, 0)` is the lower-left corner of the viewport and `(1, 1)` the
    /// upper-right.
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        Ray {
            origin: self.origin,
            direction: self.lower_left_corner + u * self.horizontal + v * self.vertical
                - self.origin,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn lower_left_corner(&self) -> Vec3 {
        self.lower_left_corner
    }

    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }

    pub fn vertical(&self) -> Vec3 {
        self.vertical
    }
}
