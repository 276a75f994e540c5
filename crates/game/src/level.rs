//! Level geometry and spawn points.

use grapnel_physics::{CollisionWorld, ContentFlags};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A game level containing collision geometry and spawn points.
#[derive(Debug)]
pub struct Level {
    /// Level identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Collision world for physics.
    pub collision: CollisionWorld,

    /// Player spawn points.
    pub spawn_points: Vec<SpawnPoint>,
}

/// A spawn point for players.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPoint {
    /// Position in world space.
    pub position: Vec3,

    /// Initial facing direction (yaw in radians).
    pub facing: f32,
}

impl Level {
    /// Create an empty level.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            collision: CollisionWorld::new(),
            spawn_points: Vec::new(),
        }
    }

    /// Build the swing gallery: a long hall with a raised start platform and
    /// a row of overhead beams to chain swings across.
    pub fn swing_gallery() -> Self {
        let mut level = Self::new("swing_gallery", "Swing Gallery");

        // Ground slab
        level.collision.add_box(
            Vec3::new(0.0, -0.5, 0.0),
            Vec3::new(80.0, 0.5, 40.0),
            ContentFlags::SOLID,
        );

        // Raised start platform, top at y=8
        level.collision.add_box(
            Vec3::new(-60.0, 4.0, 0.0),
            Vec3::new(6.0, 4.0, 6.0),
            ContentFlags::SOLID,
        );

        // Overhead beams down the hall, alternating heights
        for i in 0..5 {
            let x = -40.0 + i as f32 * 20.0;
            let height = 18.0 + (i % 2) as f32 * 3.0;
            level.collision.add_box(
                Vec3::new(x, height, 0.0),
                Vec3::new(1.0, 0.5, 6.0),
                ContentFlags::SOLID | ContentFlags::SWINGABLE,
            );
        }

        // Far wall to stop runaway flights
        level.collision.add_box(
            Vec3::new(80.0, 10.0, 0.0),
            Vec3::new(0.5, 10.0, 40.0),
            ContentFlags::SOLID,
        );

        // Spawns on the platform, facing down the hall (+X)
        level.spawn_points.push(SpawnPoint {
            position: Vec3::new(-60.0, 8.0, 0.0),
            facing: 0.0,
        });
        level.spawn_points.push(SpawnPoint {
            position: Vec3::new(-55.0, 8.0, 4.0),
            facing: 0.0,
        });

        level
    }

    /// Get a spawn point by index.
    pub fn get_spawn(&self, index: usize) -> Option<&SpawnPoint> {
        self.spawn_points.get(index)
    }

    /// Get the number of spawn points.
    pub fn spawn_count(&self) -> usize {
        self.spawn_points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_creation() {
        let level = Level::new("test", "Test Level");
        assert_eq!(level.id, "test");
        assert_eq!(level.collision.brush_count(), 0);
    }

    #[test]
    fn test_swing_gallery() {
        let level = Level::swing_gallery();
        assert!(level.collision.brush_count() > 0);
        assert!(level.spawn_count() >= 2);
        assert!(level.get_spawn(0).is_some());
        assert!(level.get_spawn(99).is_none());
    }

    #[test]
    fn test_gallery_beam_reachable_from_spawn() {
        let level = Level::swing_gallery();
        let spawn = level.get_spawn(0).unwrap();

        // Aim from spawn eye height at the middle of the first beam's near face
        let eye = spawn.position + Vec3::new(0.0, 1.6, 0.0);
        let toward_beam = Vec3::new(-41.0, 18.0, 0.0) - eye;

        let hit = level
            .collision
            .raycast(eye, toward_beam, 50.0, ContentFlags::MASK_SWINGABLE)
            .expect("First beam should be in aim range from spawn");

        assert!(hit.contents.contains(ContentFlags::SWINGABLE));
        assert!(hit.distance < 50.0);
    }

    #[test]
    fn test_gallery_ground_under_spawn() {
        let level = Level::swing_gallery();
        let spawn = level.get_spawn(0).unwrap();

        let hit = level
            .collision
            .raycast(
                spawn.position + Vec3::new(0.0, 0.5, 0.0),
                -Vec3::Y,
                2.0,
                ContentFlags::MASK_CARRIER_SOLID,
            )
            .expect("Spawn should stand on the platform");

        assert!((hit.point.y - 8.0).abs() < 0.01, "Platform top at y=8, got {}", hit.point.y);
    }
}
