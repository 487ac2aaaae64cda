#![deny(unsafe_code)]

pub mod camera;
pub mod config;
pub mod error;
pub mod film;
pub mod object;
pub mod ray;
pub mod scene;
pub mod vec3;

use rand::prelude::*;
use rand::rngs::SmallRng;

pub use crate::camera::Camera;
pub use crate::config::RenderConfig;
pub use crate::error::{Error, Result};
pub use crate::film::{tone_map, Film, Rgba};
pub use crate::object::{HitRecord, Hittable, Sphere};
pub use crate::ray::Ray;
pub use crate::scene::Scene;
use crate::vec3::{Axis::*, Vec3};

/// Background color straight up.
pub const SKY_BLUE: Vec3 = Vec3(0.5, 0.7, 1.0);
/// Background color straight down.
pub const WHITE: Vec3 = Vec3(1., 1., 1.);

/// Something rays can be fired into. Answers with the nearest hit in front of
/// the ray's origin.
pub trait World: Send + Sync {
    fn hit_top(&self, ray: &Ray) -> Option<HitRecord>;
}

impl<'r, T: World + ?Sized> World for &'r T {
    fn hit_top(&self, ray: &Ray) -> Option<HitRecord> {
        (*self).hit_top(ray)
    }
}

impl World for [Box<dyn Hittable>] {
    fn hit_top(&self, ray: &Ray) -> Option<HitRecord> {
        scene::nearest_hit(self, ray, 0. ..std::f64::INFINITY)
    }
}

impl World for Scene {
    fn hit_top(&self, ray: &Ray) -> Option<HitRecord> {
        self.hit(ray, 0. ..std::f64::INFINITY)
    }
}

/// Computes the color seen along `ray` in `world`.
///
/// Surfaces are shaded by their normal, with each component mapped from
/// `[-1, 1]` to `[0, 1]`. Rays that escape pick up a vertical gradient from
/// white (looking down) to sky blue (looking up).
pub fn color(world: &impl World, ray: &Ray) -> Vec3 {
    match world.hit_top(ray) {
        Some(hit) => (hit.normal + WHITE) / 2.,
        None => background(ray),
    }
}

/// The color of empty space in the direction of `ray`.
pub fn background(ray: &Ray) -> Vec3 {
    let unit_direction = ray.direction.into_unit();
    let t = 0.5 * (unit_direction[Y] + 1.);
    (1. - t) * WHITE + t * SKY_BLUE
}

/// Maps pixel `(x, y)` of an `nx` by `ny` image, nudged by `jitter`, to
/// camera coordinates. Row 0 is the top of the image, where `v` is 1.
///
/// # Panics
///
/// If the image is narrower or shorter than two pixels.
#[inline]
pub fn pixel_uv(x: usize, y: usize, nx: usize, ny: usize, jitter: (f64, f64)) -> (f64, f64) {
    assert!(nx > 1 && ny > 1, "image must be at least 2x2, got {}x{}", nx, ny);
    let u = (x as f64 + jitter.0) / (nx - 1) as f64;
    let v = 1. - (y as f64 + jitter.1) / (ny - 1) as f64;
    (u, v)
}

/// Averages `ns` jittered rays through pixel `(x, y)`.
#[allow(clippy::too_many_arguments)]
pub fn sample_pixel(
    x: usize,
    y: usize,
    nx: usize,
    ny: usize,
    ns: usize,
    camera: &Camera,
    world: &impl World,
    rng: &mut impl Rng,
) -> Rgba {
    let sum: Vec3 = (0..ns)
        .map(|_| {
            let (u, v) = pixel_uv(x, y, nx, ny, (rng.gen(), rng.gen()));
            color(world, &camera.get_ray(u, v))
        })
        .sum();
    tone_map(sum, ns)
}

/// Random stream for one row of the image. Rows get separate streams so the
/// result doesn't depend on which thread renders which row.
pub fn row_rng(seed: u64, row: usize) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Fills one row of the image, left to right.
fn cast_row(
    y: usize,
    row: &mut [Rgba],
    ny: usize,
    ns: usize,
    camera: &Camera,
    world: &impl World,
    rng: &mut impl Rng,
) {
    let nx = row.len();
    for (x, px) in row.iter_mut().enumerate() {
        *px = sample_pixel(x, y, nx, ny, ns, camera, world, &mut *rng);
    }
}

/// Renders on the rayon pool. Each row draws its jitter from `row_rng(seed, y)`.
pub fn par_cast(
    nx: usize,
    ny: usize,
    ns: usize,
    camera: &Camera,
    world: impl World,
    seed: u64,
) -> Film {
    Film::par_compute(nx, ny, |y, row| {
        cast_row(y, row, ny, ns, camera, &world, &mut row_rng(seed, y))
    })
}

/// Sequential counterpart of `par_cast`, producing the same image.
pub fn seeded_cast(
    nx: usize,
    ny: usize,
    ns: usize,
    camera: &Camera,
    world: impl World,
    seed: u64,
) -> Film {
    Film::compute(nx, ny, |y, row| {
        cast_row(y, row, ny, ns, camera, &world, &mut row_rng(seed, y))
    })
}

/// Renders on the calling thread, drawing all jitter from `rng`.
pub fn cast(
    nx: usize,
    ny: usize,
    ns: usize,
    camera: &Camera,
    world: impl World,
    rng: &mut impl Rng,
) -> Film {
    Film::compute(nx, ny, |y, row| cast_row(y, row, ny, ns, camera, &world, &mut *rng))
}

/// Renders `world` as described by `config`.
///
/// The output depends only on `config` and `world`: parallel and sequential
/// renders with the same seed are identical.
pub fn render(config: &RenderConfig, world: impl World) -> Result<Film> {
    config.validate()?;
    let camera = config.camera();
    let (nx, ny, ns) = (config.width, config.height, config.samples_per_pixel);
    log::debug!(
        "rendering {}x{} at {} samples/pixel (parallel: {})",
        nx,
        ny,
        ns,
        config.parallel
    );
    let film = if config.parallel {
        par_cast(nx, ny, ns, &camera, world, config.seed)
    } else {
        seeded_cast(nx, ny, ns, &camera, world, config.seed)
    };
    Ok(film)
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    fn small_sphere() -> Scene {
        let mut scene = Scene::new();
        scene.add(Sphere {
            center: Vec3(0., 0., -1.),
            radius: 0.5,
        });
        scene
    }

    fn tiny_config() -> RenderConfig {
        RenderConfig {
            width: 17,
            height: 9,
            samples_per_pixel: 4,
            ..RenderConfig::default()
        }
    }

    fn looking(direction: Vec3) -> Ray {
        Ray {
            origin: Vec3::default(),
            direction,
        }
    }

    #[test]
    fn straight_ahead_hits_small_sphere() {
        let scene = small_sphere();
        let ray = Camera::new(16. / 9., 2., 1.).get_ray(0.5, 0.5);
        let hit = scene.hit_top(&ray).expect("center ray should hit");
        assert_relative_eq!(hit.t, 0.5);
        assert_abs_diff_eq!(hit.p, Vec3(0., 0., -0.5), epsilon = 1e-12);
        assert_abs_diff_eq!(hit.normal, Vec3(0., 0., 1.), epsilon = 1e-12);
        assert!(hit.front_face);
        assert_abs_diff_eq!(color(&scene, &ray), Vec3(0.5, 0.5, 1.), epsilon = 1e-12);
    }

    #[test]
    fn hits_at_the_origin_are_excluded() {
        // The sphere's surface passes through the eye; only the far side
        // counts.
        let mut scene = Scene::new();
        scene.add(Sphere {
            center: Vec3(0., 0., -1.),
            radius: 1.,
        });
        let hit = scene
            .hit_top(&looking(Vec3(0., 0., -1.)))
            .expect("far side should hit");
        assert_relative_eq!(hit.t, 2.);
    }

    #[test]
    fn background_runs_from_white_to_sky_blue() {
        let empty = Scene::new();
        assert_abs_diff_eq!(color(&empty, &looking(Vec3(0., 1., 0.))), SKY_BLUE);
        assert_abs_diff_eq!(color(&empty, &looking(Vec3(0., -1., 0.))), WHITE);
        assert_abs_diff_eq!(
            color(&empty, &looking(Vec3(0., 0., -1.))),
            Vec3(0.75, 0.85, 1.),
            epsilon = 1e-12
        );
    }

    #[test]
    fn background_ignores_direction_length() {
        assert_abs_diff_eq!(
            background(&looking(Vec3(1., 2., -3.))),
            background(&looking(Vec3(10., 20., -30.))),
            epsilon = 1e-12
        );
    }

    #[test]
    fn slice_and_scene_agree() {
        let scene = small_sphere();
        let ray = looking(Vec3(0.1, 0.1, -1.));
        assert_eq!(scene.hit_top(&ray), scene.objects().hit_top(&ray));
    }

    #[test]
    fn pixel_corners_map_to_image_corners() {
        assert_eq!(pixel_uv(0, 0, 400, 225, (0., 0.)), (0., 1.));
        assert_eq!(pixel_uv(399, 224, 400, 225, (0., 0.)), (1., 0.));
        let (u, v) = pixel_uv(0, 224, 400, 225, (0.5, 0.5));
        assert_abs_diff_eq!(u, 0.5 / 399., epsilon = 1e-12);
        assert_abs_diff_eq!(v, -0.5 / 224., epsilon = 1e-12);
    }

    #[test]
    fn empty_scene_is_bluer_at_the_top() {
        let film = render(&tiny_config(), Scene::new()).expect("valid config");
        let top = film.at(0, 0);
        let bottom = film.at(0, film.height - 1);
        assert_eq!(top[2], 255);
        assert_eq!(bottom[2], 255);
        assert!(top[0] < bottom[0], "{:?} vs {:?}", top, bottom);
        assert!(film.buffer.iter().all(|px| px[3] == 255));
    }

    #[test]
    fn sphere_shows_up_in_the_middle() {
        let config = tiny_config();
        let with_sphere = render(&config, small_sphere()).expect("valid config");
        let empty = render(&config, Scene::new()).expect("valid config");
        let (x, y) = (config.width / 2, config.height / 2);
        // Normals on the visible cap point down, so green stays at or below
        // half; the sky there is far greener.
        assert!(with_sphere.at(x, y)[1] <= 128, "{:?}", with_sphere.at(x, y));
        assert!(empty.at(x, y)[1] > 200, "{:?}", empty.at(x, y));
        assert_eq!(with_sphere.at(0, 0), empty.at(0, 0));
    }

    #[test]
    fn parallel_and_sequential_renders_match() {
        let parallel = tiny_config();
        let sequential = RenderConfig {
            parallel: false,
            ..parallel
        };
        let scene = small_sphere();
        assert_eq!(
            render(&parallel, &scene).expect("valid config"),
            render(&sequential, &scene).expect("valid config")
        );
    }

    #[test]
    fn seed_controls_jitter() {
        let scene = small_sphere();
        let a = render(&tiny_config(), &scene).expect("valid config");
        let b = render(&tiny_config(), &scene).expect("valid config");
        assert_eq!(a, b);

        let other_seed = RenderConfig {
            seed: 1,
            ..tiny_config()
        };
        let c = render(&other_seed, &scene).expect("valid config");
        assert_ne!(a, c);
    }

    #[test]
    fn cast_uses_caller_rng() {
        let camera = Camera::new(16. / 9., 2., 1.);
        let scene = small_sphere();
        let mut rng1 = SmallRng::seed_from_u64(7);
        let mut rng2 = SmallRng::seed_from_u64(7);
        let a = cast(17, 9, 2, &camera, &scene, &mut rng1);
        let b = cast(17, 9, 2, &camera, &scene, &mut rng2);
        assert_eq!(a, b);
        assert_eq!(a.buffer.len(), 17 * 9);
    }

    #[test]
    #[should_panic(expected = "at least 2x2")]
    fn single_column_image_panics() {
        pixel_uv(0, 0, 1, 9, (0.5, 0.));
    }

    #[test]
    #[should_panic(expected = "at least 2x2")]
    fn single_row_cast_panics() {
        let mut rng = SmallRng::seed_from_u64(7);
        cast(9, 1, 4, &Camera::new(16. / 9., 2., 1.), Scene::new(), &mut rng);
    }

    #[test]
    #[should_panic(expected = "at least one sample")]
    fn zero_samples_panics() {
        seeded_cast(4, 3, 0, &Camera::new(16. / 9., 2., 1.), Scene::new(), 1);
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = RenderConfig {
            width: 1,
            ..tiny_config()
        };
        assert!(matches!(
            render(&config, Scene::new()),
            Err(Error::InvalidConfig(_))
        ));
    }
}
