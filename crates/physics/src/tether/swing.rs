//! Swing state machine and orchestration.
//!
//! This is the main entry point for the grappling swing. It owns the aim
//! tracker and the rope constraint, runs the Idle / Targeting / Swinging
//! phase machine, and splits work across the two clocks: per-frame input
//! edges and aiming in [`SwingController::frame_update`], forces on the
//! fixed tick in [`SwingController::physics_step`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collision::CollisionWorld;
use crate::movement::{CarrierCommand, CarrierState};

use super::aim::{AimEvent, AimTarget, AimTracker};
use super::config::SwingConfig;
use super::curve::sample_rope_curve;
use super::rope::RopeConstraint;

/// Phase of the swing state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwingPhase {
    /// Nothing swingable under the crosshair, rope stowed.
    Idle,

    /// A swingable surface under the crosshair, ready to fire.
    Targeting,

    /// Rope attached, constraint active.
    Swinging,
}

impl Default for SwingPhase {
    fn default() -> Self {
        SwingPhase::Idle
    }
}

/// The grappling swing controller.
///
/// Drives one carrier's swing: acquiring targets, attaching and releasing
/// the rope, reeling it in and out, and pushing constraint forces into the
/// carrier's force accumulator.
///
/// # Example
///
/// ```ignore
/// let mut swing = SwingController::new(SwingConfig::default());
///
/// // Each visual frame:
/// let event = swing.frame_update(&mut carrier, &world, &command, frame_time);
///
/// // Each fixed physics tick:
/// swing.physics_step(&mut carrier, &command, step_time);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwingController {
    /// Swing configuration.
    pub config: SwingConfig,

    phase: SwingPhase,
    rope: RopeConstraint,
    aim: AimTracker,

    /// Engage button state last frame, for edge detection.
    prev_engage_pressed: bool,
}

impl SwingController {
    /// Create a new swing controller with the given configuration.
    pub fn new(config: SwingConfig) -> Self {
        Self {
            config,
            phase: SwingPhase::Idle,
            rope: RopeConstraint::default(),
            aim: AimTracker::default(),
            prev_engage_pressed: false,
        }
    }

    /// Create a controller with default configuration.
    pub fn with_default_config() -> Self {
        Self::new(SwingConfig::default())
    }

    /// Current phase of the swing state machine.
    #[inline]
    pub fn phase(&self) -> SwingPhase {
        self.phase
    }

    /// Whether the rope is attached and pulling.
    #[inline]
    pub fn is_swinging(&self) -> bool {
        self.phase == SwingPhase::Swinging
    }

    /// Whether a swingable surface is under the crosshair.
    #[inline]
    pub fn is_targeting(&self) -> bool {
        self.phase == SwingPhase::Targeting
    }

    /// The surface point currently under the crosshair, if any.
    #[inline]
    pub fn aim_target(&self) -> Option<AimTarget> {
        self.aim.target()
    }

    /// The active anchor point, if swinging.
    pub fn anchor_point(&self) -> Option<Vec3> {
        self.rope.attachment().map(|attachment| attachment.anchor)
    }

    /// The effective rope length, if swinging.
    pub fn current_rope_length(&self) -> Option<f32> {
        self.rope.attachment().map(|attachment| attachment.current_length)
    }

    /// The rope length being eased toward, if swinging.
    pub fn target_rope_length(&self) -> Option<f32> {
        self.rope.attachment().map(|attachment| attachment.target_length)
    }

    /// Sample the visual rope curve from the carrier's eye to the anchor.
    pub fn rope_curve(&self, carrier: &CarrierState) -> Option<Vec<Vec3>> {
        self.rope.attachment().map(|attachment| {
            sample_rope_curve(
                carrier.eye_position(self.config.eye_height),
                attachment.anchor,
                attachment.current_length,
                &self.config,
            )
        })
    }

    /// Per-frame swing update: aiming, input edges, attach and release.
    ///
    /// Runs on the visual frame clock. Aiming happens every frame, even
    /// mid-swing, so the crosshair stays live and a release settles straight
    /// into [`SwingPhase::Targeting`] when a surface is under it.
    ///
    /// Returns the aim transition for this frame, if one happened.
    ///
    /// # Arguments
    ///
    /// * `carrier` - The carrier state (velocity is rewritten on release)
    /// * `world` - The collision world aim rays are cast against
    /// * `command` - The player's input command for this frame
    /// * `delta_time` - Frame time in seconds
    pub fn frame_update(
        &mut self,
        carrier: &mut CarrierState,
        world: &CollisionWorld,
        command: &CarrierCommand,
        delta_time: f32,
    ) -> Option<AimEvent> {
        let engage_just_pressed = command.wants_engage() && !self.prev_engage_pressed;
        let engage_released = !command.wants_engage() && self.prev_engage_pressed;
        self.prev_engage_pressed = command.wants_engage();

        let event = self.aim.update(
            world,
            carrier.eye_position(self.config.eye_height),
            carrier.look_direction(),
            &self.config,
        );

        if self.phase == SwingPhase::Swinging {
            if command.wants_shorten() {
                self.rope
                    .adjust_target_length(-self.config.rope_adjust_speed * delta_time, &self.config);
            }
            if command.wants_extend() {
                self.rope
                    .adjust_target_length(self.config.rope_adjust_speed * delta_time, &self.config);
            }

            // Letting go of the button or touching ground ends the swing
            if engage_released || carrier.grounded {
                self.release(carrier);
                self.apply_aim_phase();
            }
        } else {
            self.apply_aim_phase();

            if engage_just_pressed {
                if let Some(target) = self.aim.target() {
                    self.rope.attach(carrier.position, target.point, &self.config);
                    self.set_phase(SwingPhase::Swinging);
                }
            }
        }

        event
    }

    /// Per-tick swing forces: length easing, the rope constraint, and air
    /// control. No-op unless swinging.
    ///
    /// Forces are queued on the carrier's accumulator; the movement
    /// controller integrates them in the same tick.
    pub fn physics_step(
        &mut self,
        carrier: &mut CarrierState,
        command: &CarrierCommand,
        delta_time: f32,
    ) {
        if self.phase != SwingPhase::Swinging {
            return;
        }

        self.rope.step_length(&self.config, delta_time);

        let force = self
            .rope
            .constraint_force(carrier.position, carrier.velocity, &self.config);
        carrier.apply_force(force);

        self.apply_air_control(carrier, command);
    }

    /// Steer the swing from movement input.
    ///
    /// Lateral intent is projected onto the carrier's yaw-only basis, so
    /// "forward" means where the player faces, not where the rope points.
    /// Input under the deadzone is ignored.
    fn apply_air_control(&self, carrier: &mut CarrierState, command: &CarrierCommand) {
        let wish = carrier.forward_direction() * command.forward_move
            + carrier.right_direction() * command.right_move;

        if wish.length() <= self.config.air_control_deadzone {
            return;
        }

        carrier.apply_force(wish.normalize() * self.config.air_control);
    }

    /// Cut the rope from outside the normal input flow (death, teleport,
    /// level change). No-op unless swinging.
    ///
    /// Re-aims immediately so the phase lands on Targeting or Idle, and
    /// returns that transition if one happened.
    pub fn force_release(
        &mut self,
        carrier: &mut CarrierState,
        world: &CollisionWorld,
    ) -> Option<AimEvent> {
        if self.phase != SwingPhase::Swinging {
            return None;
        }

        self.release(carrier);

        let event = self.aim.update(
            world,
            carrier.eye_position(self.config.eye_height),
            carrier.look_direction(),
            &self.config,
        );
        self.apply_aim_phase();
        event
    }

    /// Detach the rope and launch the carrier.
    ///
    /// Release velocity is the current velocity scaled by the momentum
    /// multiplier, plus a boost along the tangential swing direction when
    /// the swing is actually moving.
    fn release(&mut self, carrier: &mut CarrierState) {
        let attachment = match self.rope.attachment() {
            Some(attachment) => attachment,
            None => return,
        };

        let velocity = carrier.velocity;
        let rope_dir = (attachment.anchor - carrier.position).normalize_or_zero();

        // Tangential part of the motion; degenerate rope keeps it all
        let swing_velocity = if rope_dir.length_squared() > 0.5 {
            velocity.reject_from_normalized(rope_dir)
        } else {
            velocity
        };

        let mut released = velocity * self.config.momentum_preservation;
        if swing_velocity.length() > self.config.min_boost_swing_speed {
            released += swing_velocity.normalize() * self.config.release_boost_force;
        }

        carrier.set_velocity(released);
        self.rope.detach();

        log::debug!(
            "released at speed {:.2}, boosted to {:.2}",
            velocity.length(),
            released.length()
        );
    }

    /// Settle on Targeting or Idle from the current aim state.
    fn apply_aim_phase(&mut self) {
        if self.aim.target().is_some() {
            self.set_phase(SwingPhase::Targeting);
        } else {
            self.set_phase(SwingPhase::Idle);
        }
    }

    fn set_phase(&mut self, phase: SwingPhase) {
        if self.phase != phase {
            log::debug!("swing phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
