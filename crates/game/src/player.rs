//! Player entity and state.

use grapnel_physics::{
    AimEvent, CarrierState, CollisionWorld, SwingConfig, SwingController, SwingPhase,
};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Unique identifier for entities.
pub type EntityId = u32;

/// A player in the game.
///
/// Bundles the carrier the physics acts on with the swing controller that
/// pulls on it. Everything here is plain state; the simulation owns the
/// update order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique player ID.
    pub id: EntityId,

    /// Player name/handle.
    pub name: String,

    /// Carrier physics state.
    pub carrier: CarrierState,

    /// Grappling swing controller.
    pub swing: SwingController,
}

impl Player {
    /// Create a new player at the given spawn position.
    pub fn new(id: EntityId, name: String, spawn_position: Vec3, swing_config: SwingConfig) -> Self {
        Self {
            id,
            name,
            carrier: CarrierState::new(spawn_position),
            swing: SwingController::new(swing_config),
        }
    }

    /// Get the player's current position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.carrier.position
    }

    /// Get the player's eye position (camera and aim ray origin).
    pub fn eye_position(&self) -> Vec3 {
        self.carrier.eye_position(self.swing.config.eye_height)
    }

    /// Get the direction the player is looking.
    #[inline]
    pub fn look_direction(&self) -> Vec3 {
        self.carrier.look_direction()
    }

    /// Check if the player is on the ground.
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.carrier.grounded
    }

    /// Current swing phase.
    #[inline]
    pub fn swing_phase(&self) -> SwingPhase {
        self.swing.phase()
    }

    /// Check if the player is mid-swing.
    #[inline]
    pub fn is_swinging(&self) -> bool {
        self.swing.is_swinging()
    }

    /// Check if a swingable surface is under the crosshair.
    #[inline]
    pub fn is_targeting(&self) -> bool {
        self.swing.is_targeting()
    }

    /// Current and target rope length, if swinging.
    pub fn rope_lengths(&self) -> Option<(f32, f32)> {
        match (
            self.swing.current_rope_length(),
            self.swing.target_rope_length(),
        ) {
            (Some(current), Some(target)) => Some((current, target)),
            _ => None,
        }
    }

    /// Sample the visual rope curve, if swinging.
    pub fn rope_curve(&self) -> Option<Vec<Vec3>> {
        self.swing.rope_curve(&self.carrier)
    }

    /// Cut the rope from outside normal input flow (teleport, level change).
    pub fn force_release(&mut self, world: &CollisionWorld) -> Option<AimEvent> {
        self.swing.force_release(&mut self.carrier, world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(
            1,
            "Test".to_string(),
            Vec3::new(0.0, 5.0, 0.0),
            SwingConfig::default(),
        );

        assert_eq!(player.position(), Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(player.swing_phase(), SwingPhase::Idle);
        assert!(!player.is_swinging());
        assert!(player.rope_lengths().is_none());
        assert!(player.rope_curve().is_none());
    }

    #[test]
    fn test_eye_position_uses_swing_config() {
        let config = SwingConfig {
            eye_height: 2.0,
            ..Default::default()
        };
        let player = Player::new(1, "Test".to_string(), Vec3::ZERO, config);

        assert_eq!(player.eye_position(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_force_release_without_rope_is_noop() {
        let world = CollisionWorld::new();
        let mut player = Player::new(1, "Test".to_string(), Vec3::ZERO, SwingConfig::default());

        assert_eq!(player.force_release(&world), None);
        assert_eq!(player.swing_phase(), SwingPhase::Idle);
    }
}
