use crate::camera::Camera;
use crate::error::{Error, Result};

/// Everything needed to turn a scene into pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Jittered rays averaged into each pixel.
    pub samples_per_pixel: usize,
    /// Viewport width over viewport height.
    pub aspect_ratio: f64,
    /// Height of the viewport in world units.
    pub viewport_height: f64,
    /// Distance from the eye to the viewport.
    pub focal_length: f64,
    /// Seed for sample jitter. The same seed gives the same image.
    pub seed: u64,
    /// Render rows on the rayon pool instead of the calling thread.
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let aspect_ratio = 16. / 9.;
        let width = 400;
        RenderConfig {
            width,
            height: height_for(width, aspect_ratio),
            samples_per_pixel: 100,
            aspect_ratio,
            viewport_height: 2.,
            focal_length: 1.,
            seed: 0xDEADBEEF,
            parallel: true,
        }
    }
}

/// Image height that matches `width` at `aspect_ratio`, truncated.
pub fn height_for(width: usize, aspect_ratio: f64) -> usize {
    (width as f64 / aspect_ratio) as usize
}

impl RenderConfig {
    /// Checks that the values describe something we can render.
    ///
    /// Pixel coordinates are normalized by `width - 1` and `height - 1`, so
    /// both dimensions need at least two pixels.
    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.height < 2 {
            return Err(Error::InvalidConfig(format!(
                "image must be at least 2x2 pixels, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(Error::InvalidConfig(
                "need at least one sample per pixel".to_string(),
            ));
        }
        for &(name, value) in &[
            ("aspect ratio", self.aspect_ratio),
            ("viewport height", self.viewport_height),
            ("focal length", self.focal_length),
        ] {
            if !(value.is_finite() && value > 0.) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Builds the camera described by this configuration.
    pub fn camera(&self) -> Camera {
        Camera::new(self.aspect_ratio, self.viewport_height, self.focal_length)
    }
}
