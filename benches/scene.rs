use criterion::{criterion_group, Criterion};
use rand::prelude::*;

use spheretrace::vec3::Vec3;
use spheretrace::*;

fn scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(Sphere {
        center: Vec3(0., 0., -1.),
        radius: 0.5,
    });
    scene.add(Sphere {
        center: Vec3(0., -100.5, -1.),
        radius: 100.,
    });
    scene
}

fn criterion_benchmark(c: &mut Criterion) {
    const NX: usize = 80;
    const NY: usize = 45;
    const NS: usize = 4;

    let world = scene();
    let camera = Camera::new(16. / 9., 2., 1.);

    c.bench_function("scene/80x45x4", |b| {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(0xDEADBEEF);
        b.iter(|| cast(NX, NY, NS, &camera, &world, &mut rng));
    });

    c.bench_function("scene/80x45x4/par", |b| {
        b.iter(|| par_cast(NX, NY, NS, &camera, &world, 0xDEADBEEF));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion::criterion_main!(benches);
