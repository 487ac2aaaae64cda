use std::path::Path;

use image::error::{ImageError, ParameterError, ParameterErrorKind};
use rayon::prelude::*;

use crate::error::Result;
use crate::vec3::{Channel::*, Vec3};

/// An 8-bit RGBA pixel.
pub type Rgba = [u8; 4];

/// The finished image: `height` rows of `width` pixels, top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct Film {
    pub width: usize,
    pub height: usize,
    pub buffer: Vec<Rgba>,
}

impl Film {
    /// Fills a film by handing each row to `f(y, row)`, one row per rayon
    /// task. `y = 0` is the top row.
    pub fn par_compute(width: usize, height: usize, f: impl Fn(usize, &mut [Rgba]) + Sync) -> Film {
        let mut film = Film::blank(width, height);
        if width > 0 {
            film.buffer
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
        film
    }

    /// Sequential version of `par_compute`; rows are visited top to bottom.
    pub fn compute(width: usize, height: usize, mut f: impl FnMut(usize, &mut [Rgba])) -> Film {
        let mut film = Film::blank(width, height);
        if width > 0 {
            for (y, row) in film.buffer.chunks_mut(width).enumerate() {
                f(y, row);
            }
        }
        film
    }

    fn blank(width: usize, height: usize) -> Film {
        Film {
            width,
            height,
            buffer: vec![[0; 4]; width * height],
        }
    }

    pub fn at(&self, x: usize, y: usize) -> Rgba {
        self.buffer[y * self.width + x]
    }

    /// Writes the film to `path`. The container format is picked from the
    /// file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let raw: Vec<u8> = self.buffer.iter().flatten().copied().collect();
        let image = image::RgbaImage::from_raw(self.width as u32, self.height as u32, raw)
            .ok_or_else(|| {
                ImageError::Parameter(ParameterError::from_kind(
                    ParameterErrorKind::DimensionMismatch,
                ))
            })?;
        image.save(path)?;
        Ok(())
    }
}

/// Converts the sum of `samples` colors into an 8-bit pixel.
///
/// Each channel is averaged, clamped to `[0, 0.999]` and scaled by 256, so a
/// fully saturated channel lands on 255 rather than overflowing. Alpha is
/// always opaque.
///
/// # Panics
///
/// If `samples` is zero.
pub fn tone_map(sum: Vec3, samples: usize) -> Rgba {
    assert!(samples > 0, "tone mapping needs at least one sample");

    fn to_u8(x: f64) -> u8 {
        (256. * x.max(0.).min(0.999)) as u8
    }

    let scale = 1. / samples as f64;
    [
        to_u8(sum[R] * scale),
        to_u8(sum[G] * scale),
        to_u8(sum[B] * scale),
        to_u8(1.),
    ]
}
