//! Aim target acquisition.
//!
//! Every visual frame the view ray is cast against swingable surfaces and
//! the result is tracked here. Consumers poll the returned [`AimEvent`] to
//! drive crosshair feedback; the tracked target itself is what the grapple
//! attaches to.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collision::CollisionWorld;

use super::config::SwingConfig;

/// A surface point the grapple can attach to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimTarget {
    /// Hit point on the surface, in world space.
    pub point: Vec3,

    /// Brush the point lies on. Used to tell "same surface, new point"
    /// apart from an actual target change.
    pub brush: u32,
}

/// Result of an aim update, reported once per transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AimEvent {
    /// The crosshair settled on a new swingable surface.
    TargetFound(AimTarget),

    /// The crosshair left all swingable surfaces.
    TargetLost,
}

/// Tracks what swingable surface the crosshair rests on, frame to frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AimTracker {
    target: Option<AimTarget>,
}

impl AimTracker {
    /// Re-aim from the given eye ray and report any transition.
    ///
    /// While the crosshair stays on the same brush the tracked point follows
    /// it silently; events only fire when the surface under the crosshair
    /// changes or goes away.
    pub fn update(
        &mut self,
        world: &CollisionWorld,
        origin: Vec3,
        direction: Vec3,
        config: &SwingConfig,
    ) -> Option<AimEvent> {
        let found = world
            .raycast(origin, direction, config.max_rope_distance, config.swingable_mask)
            .map(|hit| AimTarget {
                point: hit.point,
                brush: hit.brush,
            });

        match (found, self.target) {
            (Some(new), Some(old)) if new.brush == old.brush => {
                // Same surface, just follow the point
                self.target = Some(new);
                None
            }
            (Some(new), _) => {
                log::debug!("aim target found on brush {} at {:?}", new.brush, new.point);
                self.target = Some(new);
                Some(AimEvent::TargetFound(new))
            }
            (None, Some(_)) => {
                log::debug!("aim target lost");
                self.target = None;
                Some(AimEvent::TargetLost)
            }
            (None, None) => None,
        }
    }

    /// The currently tracked target, if any.
    #[inline]
    pub fn target(&self) -> Option<AimTarget> {
        self.target
    }
}
