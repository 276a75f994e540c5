//! Carrier movement controller.
//!
//! This is the main entry point for carrier movement. It drains queued
//! forces, drives ground walking, applies gravity, and integrates the
//! carrier through the collision world.

use glam::Vec3;

use crate::collision::{CollisionWorld, ContentFlags};

use super::carrier::{CarrierCommand, CarrierState};
use super::config::MovementConfig;

/// Carrier movement controller.
///
/// Handles the baseline locomotion that the swing system builds on:
/// - Ground walking (direct velocity drive)
/// - Gravity while airborne
/// - Force accumulator integration
/// - Ground detection and landing
///
/// # Example
///
/// ```ignore
/// let controller = MovementController::new(MovementConfig::default());
/// let mut carrier = CarrierState::new(spawn_position);
///
/// // Each physics step:
/// controller.physics_step(&mut carrier, &command, &world, swinging, step_time);
/// ```
#[derive(Debug, Clone)]
pub struct MovementController {
    /// Movement configuration.
    pub config: MovementConfig,
}

impl MovementController {
    /// Create a new movement controller with the given configuration.
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    /// Create a controller with default configuration.
    pub fn with_default_config() -> Self {
        Self::new(MovementConfig::default())
    }

    /// Initialize a carrier's position at spawn.
    ///
    /// Probes down from the spawn point to find the ground and places the
    /// carrier on it. Should be called once when spawning.
    pub fn spawn_at(&self, state: &mut CarrierState, spawn_pos: Vec3, world: &CollisionWorld) {
        // Start slightly above the spawn point to probe down
        let probe_start = spawn_pos + Vec3::new(0.0, 1.0, 0.0);

        let hit = world.raycast(
            probe_start,
            -Vec3::Y,
            3.0,
            ContentFlags::MASK_CARRIER_SOLID,
        );

        if let Some(hit) = hit {
            state.position = hit.point;
            state.grounded = true;
        } else {
            // No ground found, use spawn position as-is
            state.position = spawn_pos;
            state.grounded = false;
        }

        state.velocity = Vec3::ZERO;
    }

    /// Apply view angle deltas from a command.
    ///
    /// Runs on the visual frame clock so the view never lags the mouse.
    pub fn update_view_angles(&self, state: &mut CarrierState, command: &CarrierCommand) {
        state.view_angles.x += command.view_delta.0; // Pitch
        state.view_angles.y += command.view_delta.1; // Yaw

        // Clamp pitch to prevent looking beyond vertical
        const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
        state.view_angles.x = state.view_angles.x.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        // Normalize yaw to -PI..PI
        while state.view_angles.y > std::f32::consts::PI {
            state.view_angles.y -= std::f32::consts::TAU;
        }
        while state.view_angles.y < -std::f32::consts::PI {
            state.view_angles.y += std::f32::consts::TAU;
        }
    }

    /// Advance carrier movement by one fixed physics step.
    ///
    /// Drains the force accumulator, drives ground walking (unless the swing
    /// system owns the carrier), applies gravity while airborne, and
    /// integrates position with a downward landing probe.
    ///
    /// # Arguments
    ///
    /// * `state` - The carrier state (will be modified)
    /// * `command` - The player's input command for this step
    /// * `world` - The collision world
    /// * `swinging` - Whether the swing system currently owns the carrier
    /// * `delta_time` - Fixed step time in seconds
    pub fn physics_step(
        &self,
        state: &mut CarrierState,
        command: &CarrierCommand,
        world: &CollisionWorld,
        swinging: bool,
        delta_time: f32,
    ) {
        // Queued forces first, so swing forces land this step
        let force = state.take_accumulated_force();
        state.velocity += force * delta_time;

        if state.grounded && !swinging {
            self.ground_drive(state, command);
        }

        if !state.grounded {
            state.velocity.y -= self.config.gravity * delta_time;
        }

        self.integrate(state, world, delta_time);
    }

    /// Direct-drive ground walking: horizontal velocity is set from input,
    /// not accelerated toward it. Stops are instant.
    fn ground_drive(&self, state: &mut CarrierState, command: &CarrierCommand) {
        let forward = state.forward_direction();
        let right = state.right_direction();

        let wish = forward * command.forward_move + right * command.right_move;
        let direction = wish.normalize_or_zero();

        state.velocity.x = direction.x * self.config.walk_speed;
        state.velocity.z = direction.z * self.config.walk_speed;
    }

    /// Move the carrier by one step of velocity, landing on ground when the
    /// step crosses it.
    fn integrate(&self, state: &mut CarrierState, world: &CollisionWorld, delta_time: f32) {
        let step = state.velocity * delta_time;
        let next = state.position + step;

        if step.y <= 0.0 {
            // Probe far enough to cover the whole downward step
            let probe_distance = self.config.ground_check_distance - step.y;

            if let Some(hit) = world.raycast(
                state.position,
                -Vec3::Y,
                probe_distance,
                ContentFlags::MASK_CARRIER_SOLID,
            ) {
                state.position = Vec3::new(next.x, hit.point.y, next.z);
                state.velocity.y = 0.0;
                if !state.grounded {
                    log::debug!("carrier landed at {:?}", state.position);
                }
                state.grounded = true;
                return;
            }
        }

        state.position = next;
        state.grounded = false;
    }
}

// ============================================================================
// Tests
// ============================================================================
