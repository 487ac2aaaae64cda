use std::ops::Range;

use crate::object::{HitRecord, Hittable};
use crate::ray::Ray;

/// An ordered collection of objects, itself usable as a `Hittable`.
///
/// Lookups are a linear scan, which is fine for the handful of objects we
/// render.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Box<dyn Hittable>>,
}

impl Scene {
    pub fn new() -> Self {
        Scene::default()
    }

    /// Appends `object`. Objects are never deduplicated or removed.
    pub fn add(&mut self, object: impl Hittable + 'static) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> &[Box<dyn Hittable>] {
        &self.objects
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray, t_range: Range<f64>) -> Option<HitRecord> {
        nearest_hit(&self.objects, ray, t_range)
    }
}

/// Finds the closest hit among `objects`. Each test after a hit only
/// considers positions nearer than the best found so far.
pub fn nearest_hit(
    objects: &[Box<dyn Hittable>],
    ray: &Ray,
    mut t_range: Range<f64>,
) -> Option<HitRecord> {
    let mut hit = None;
    for object in objects {
        if let Some(rec) = object.hit(ray, t_range.clone()) {
            t_range.end = rec.t;
            hit = Some(rec);
        }
    }
    hit
}
