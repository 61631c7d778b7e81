//! World domain: static platform volumes and terrain queries.

use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::math::Ray3d;
use bevy::prelude::*;

/// An immutable axis-aligned platform volume.
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub bounds: Aabb3d,
}

impl Platform {
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self {
            bounds: Aabb3d::new(center, size * 0.5),
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::from((self.bounds.min + self.bounds.max) * 0.5)
    }

    pub fn size(&self) -> Vec3 {
        Vec3::from(self.bounds.max - self.bounds.min)
    }

    /// Height of the walkable top surface
    pub fn top(&self) -> f32 {
        self.bounds.max.y
    }

    /// Inclusive containment, so a point resting exactly on the top counts.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let min = Vec3::from(self.bounds.min);
        let max = Vec3::from(self.bounds.max);
        point.cmpge(min).all() && point.cmple(max).all()
    }
}

/// Nearest ray hit against terrain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainHit {
    pub point: Vec3,
    pub distance: f32,
}

/// Read-only terrain: floating platforms over a finite ground plane at y = 0.
#[derive(Resource, Debug, Clone, Default)]
pub struct Terrain {
    pub platforms: Vec<Platform>,
    pub ground_half_extent: f32,
}

impl Terrain {
    pub fn new(platforms: Vec<Platform>, ground_size: f32) -> Self {
        Self {
            platforms,
            ground_half_extent: ground_size * 0.5,
        }
    }

    /// Platforms whose volume contains `point`, in scatter order.
    pub fn support_under(&self, point: Vec3) -> impl Iterator<Item = &Platform> + '_ {
        self.platforms
            .iter()
            .filter(move |platform| platform.contains_point(point))
    }

    /// Cast a ray against platforms and the ground plane, returning the
    /// nearest hit no further than `max_distance`.
    pub fn raycast(&self, origin: Vec3, direction: Dir3, max_distance: f32) -> Option<TerrainHit> {
        let ray = RayCast3d::from_ray(Ray3d::new(origin, direction), max_distance);

        let platform_hit = self
            .platforms
            .iter()
            .filter_map(|platform| ray.aabb_intersection_at(&platform.bounds))
            .min_by(|a, b| a.total_cmp(b));

        let nearest = match (platform_hit, self.ground_distance(origin, direction)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }?;

        (nearest <= max_distance).then(|| TerrainHit {
            point: origin + *direction * nearest,
            distance: nearest,
        })
    }

    fn ground_distance(&self, origin: Vec3, direction: Dir3) -> Option<f32> {
        // Only downward rays from above the plane can hit it
        if direction.y >= 0.0 || origin.y < 0.0 {
            return None;
        }
        let distance = -origin.y / direction.y;
        let point = origin + *direction * distance;
        let inside = point.x.abs() <= self.ground_half_extent
            && point.z.abs() <= self.ground_half_extent;
        inside.then_some(distance)
    }
}
