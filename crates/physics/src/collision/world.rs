//! Collision world containing the static level geometry.
//!
//! The world stores box brushes and answers filtered raycasts against them.
//! Raycasts are the only geometry query the swing system needs: the aim
//! tracker casts along the view direction to find an anchor, and the movement
//! controller probes straight down for ground.

use glam::Vec3;
use parry3d::math::{Isometry, Point, Real, Vector};
use parry3d::query::{Ray, RayCast};
use parry3d::shape::SharedShape;
use serde::{Deserialize, Serialize};

use super::flags::ContentFlags;

/// Result of a raycast that hit a brush.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RayHit {
    /// World-space impact point.
    pub point: Vec3,

    /// Surface normal at the impact point, pointing away from the surface.
    pub normal: Vec3,

    /// Distance from the ray origin to the impact point.
    pub distance: f32,

    /// Content flags of the brush that was hit.
    pub contents: ContentFlags,

    /// Identifier of the brush that was hit.
    ///
    /// The aim tracker keys target identity on this, so two hits count as the
    /// same target while the brush id matches.
    pub brush: u32,
}

/// A piece of collision geometry in the world.
#[derive(Debug, Clone)]
pub struct CollisionBrush {
    /// Unique identifier for this brush.
    pub id: u32,
    /// The collision shape.
    pub shape: SharedShape,
    /// Position and orientation in world space.
    pub transform: Isometry<Real>,
    /// Content flags for raycast filtering.
    pub contents: ContentFlags,
}

/// The collision world containing all geometry.
///
/// Immutable after construction; queries take `&self` and can be issued from
/// anywhere the world is shared.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    /// Static world brushes (floors, platforms, beams).
    brushes: Vec<CollisionBrush>,
    /// Next brush ID to assign.
    next_id: u32,
}

impl CollisionWorld {
    /// Create an empty collision world.
    pub fn new() -> Self {
        Self {
            brushes: Vec::new(),
            next_id: 0,
        }
    }

    /// Add an axis-aligned box to the world.
    ///
    /// # Arguments
    ///
    /// * `center` - Center position of the box in world space
    /// * `half_extents` - Half-size in each axis (x, y, z)
    /// * `contents` - Content flags for raycast filtering
    ///
    /// Returns the id of the new brush.
    pub fn add_box(&mut self, center: Vec3, half_extents: Vec3, contents: ContentFlags) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let shape = SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z);
        let transform = Isometry::translation(center.x, center.y, center.z);

        self.brushes.push(CollisionBrush {
            id,
            shape,
            transform,
            contents,
        });

        id
    }

    /// Get the number of collision brushes.
    pub fn brush_count(&self) -> usize {
        self.brushes.len()
    }

    /// Cast a ray through the world and return the closest filtered hit.
    ///
    /// # Arguments
    ///
    /// * `origin` - Ray starting position
    /// * `direction` - Ray direction (will be normalized)
    /// * `max_distance` - Maximum distance to search
    /// * `mask` - Content flags to collide with
    pub fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: ContentFlags,
    ) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir.length_squared() < 0.5 {
            return None;
        }

        let ray = Ray::new(
            Point::new(origin.x, origin.y, origin.z),
            Vector::new(dir.x, dir.y, dir.z),
        );

        let mut closest: Option<(f32, &CollisionBrush)> = None;

        for brush in &self.brushes {
            if !mask.intersects(brush.contents) {
                continue;
            }

            if let Some(toi) = brush.shape.cast_ray(&brush.transform, &ray, max_distance, true) {
                if toi < max_distance {
                    let is_closer = closest.as_ref().map_or(true, |(dist, _)| toi < *dist);
                    if is_closer {
                        closest = Some((toi, brush));
                    }
                }
            }
        }

        closest.map(|(distance, brush)| RayHit {
            point: origin + dir * distance,
            normal: self.compute_hit_normal(&ray, distance, brush),
            distance,
            contents: brush.contents,
            brush: brush.id,
        })
    }

    /// Compute the surface normal at a ray intersection.
    fn compute_hit_normal(&self, ray: &Ray, toi: f32, brush: &CollisionBrush) -> Vec3 {
        if let Some(intersection) =
            brush
                .shape
                .cast_ray_and_get_normal(&brush.transform, ray, toi + 0.01, true)
        {
            Vec3::new(
                intersection.normal.x,
                intersection.normal.y,
                intersection.normal.z,
            )
        } else {
            // Fallback: face the ray back at the caller
            let dir = Vec3::new(ray.dir.x, ray.dir.y, ray.dir.z);
            -dir.normalize()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
