//! Carrier state and input commands.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Kinematic state of the swing carrier.
///
/// The carrier is the body everything acts on. The movement controller
/// integrates it and the swing system pulls on it through the force
/// accumulator: forces queued with [`CarrierState::apply_force`] are summed
/// until the integrator drains them once per physics step. The carrier has
/// unit mass, so force and acceleration coincide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarrierState {
    /// Position in world space (feet).
    pub position: Vec3,

    /// Velocity in world space (meters/second).
    pub velocity: Vec3,

    /// View angles in radians: (pitch, yaw, roll).
    ///
    /// - Pitch: Looking up/down (-PI/2 to PI/2, negative looks up)
    /// - Yaw: Looking left/right (-PI to PI)
    /// - Roll: Tilting head (usually 0)
    pub view_angles: Vec3,

    /// Whether the carrier is standing on ground this tick.
    pub grounded: bool,

    /// Forces queued since the last physics step.
    accumulated_force: Vec3,
}

impl CarrierState {
    /// Create a new carrier state at the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Queue a continuous force for the next physics step.
    pub fn apply_force(&mut self, force: Vec3) {
        self.accumulated_force += force;
    }

    /// Overwrite the velocity outright.
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Drain the force accumulator.
    ///
    /// Called once per physics step by the integrator; anything queued after
    /// that lands in the following step.
    pub fn take_accumulated_force(&mut self) -> Vec3 {
        let force = self.accumulated_force;
        self.accumulated_force = Vec3::ZERO;
        force
    }

    /// Get the eye position (camera placement and aim ray origin).
    pub fn eye_position(&self, eye_height: f32) -> Vec3 {
        self.position + Vec3::new(0.0, eye_height, 0.0)
    }

    /// Get the forward direction from view angles (horizontal only).
    pub fn forward_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.view_angles.y.sin_cos();
        Vec3::new(cos_yaw, 0.0, sin_yaw).normalize()
    }

    /// Get the right direction from view angles (horizontal only).
    pub fn right_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.view_angles.y.sin_cos();
        Vec3::new(-sin_yaw, 0.0, cos_yaw).normalize()
    }

    /// Get the full forward direction including pitch.
    pub fn look_direction(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.view_angles.x.sin_cos();
        let (sin_yaw, cos_yaw) = self.view_angles.y.sin_cos();

        Vec3::new(cos_pitch * cos_yaw, -sin_pitch, cos_pitch * sin_yaw)
    }

    /// Get current horizontal speed.
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}

/// Input command from the player for a single tick.
///
/// This represents the player's intent - movement axes, view deltas, and
/// which buttons are held.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarrierCommand {
    /// Forward/backward movement (-1.0 to 1.0).
    /// Positive = forward, negative = backward.
    pub forward_move: f32,

    /// Strafe left/right (-1.0 to 1.0).
    /// Positive = right, negative = left.
    pub right_move: f32,

    /// View angle delta this frame (radians).
    /// (pitch_delta, yaw_delta)
    pub view_delta: (f32, f32),

    /// Button states.
    pub buttons: CarrierButtons,
}

/// Button state flags for carrier commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierButtons(pub u16);

impl CarrierButtons {
    /// Fire the grapple / hold the rope.
    pub const ENGAGE: u16 = 1 << 0;

    /// Reel the rope in while swinging.
    pub const SHORTEN: u16 = 1 << 1;

    /// Let the rope out while swinging.
    pub const EXTEND: u16 = 1 << 2;

    /// Check if a button is pressed.
    #[inline]
    pub fn pressed(self, button: u16) -> bool {
        (self.0 & button) != 0
    }

    /// Press a button.
    #[inline]
    pub fn press(&mut self, button: u16) {
        self.0 |= button;
    }

    /// Release a button.
    #[inline]
    pub fn release(&mut self, button: u16) {
        self.0 &= !button;
    }
}

impl CarrierCommand {
    /// Check if the grapple button is held.
    #[inline]
    pub fn wants_engage(&self) -> bool {
        self.buttons.pressed(CarrierButtons::ENGAGE)
    }

    /// Check if rope shortening is requested.
    #[inline]
    pub fn wants_shorten(&self) -> bool {
        self.buttons.pressed(CarrierButtons::SHORTEN)
    }

    /// Check if rope extension is requested.
    #[inline]
    pub fn wants_extend(&self) -> bool {
        self.buttons.pressed(CarrierButtons::EXTEND)
    }

    /// Check if any movement input is active.
    #[inline]
    pub fn has_movement_input(&self) -> bool {
        self.forward_move.abs() > 0.01 || self.right_move.abs() > 0.01
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_carrier_directions() {
        let mut carrier = CarrierState::new(Vec3::ZERO);

        // Facing +X (yaw = 0)
        carrier.view_angles.y = 0.0;
        let forward = carrier.forward_direction();
        assert!((forward.x - 1.0).abs() < 0.01);
        assert!(forward.z.abs() < 0.01);

        // Facing +Z (yaw = PI/2)
        carrier.view_angles.y = PI / 2.0;
        let forward = carrier.forward_direction();
        assert!(forward.x.abs() < 0.01);
        assert!((forward.z - 1.0).abs() < 0.01);

        // Right is perpendicular to forward
        assert!(carrier.forward_direction().dot(carrier.right_direction()).abs() < 0.01);
    }

    #[test]
    fn test_look_direction_pitch() {
        let mut carrier = CarrierState::new(Vec3::ZERO);

        // Level look along +X
        let look = carrier.look_direction();
        assert!((look.x - 1.0).abs() < 0.01);
        assert!(look.y.abs() < 0.01);

        // Negative pitch looks up
        carrier.view_angles.x = -PI / 4.0;
        assert!(carrier.look_direction().y > 0.5);
    }

    #[test]
    fn test_force_accumulator_drains() {
        let mut carrier = CarrierState::new(Vec3::ZERO);

        carrier.apply_force(Vec3::new(1.0, 2.0, 0.0));
        carrier.apply_force(Vec3::new(0.0, 3.0, 0.0));

        assert_eq!(carrier.take_accumulated_force(), Vec3::new(1.0, 5.0, 0.0));
        assert_eq!(carrier.take_accumulated_force(), Vec3::ZERO);
    }

    #[test]
    fn test_command_buttons() {
        let mut cmd = CarrierCommand::default();
        assert!(!cmd.wants_engage());

        cmd.buttons.press(CarrierButtons::ENGAGE);
        assert!(cmd.wants_engage());

        cmd.buttons.release(CarrierButtons::ENGAGE);
        assert!(!cmd.wants_engage());
    }

    #[test]
    fn test_eye_position() {
        let carrier = CarrierState::new(Vec3::new(2.0, 5.0, -1.0));
        assert_eq!(carrier.eye_position(1.6), Vec3::new(2.0, 6.6, -1.0));
    }
}
