//! Player input handling.
//!
//! This module converts raw input (keyboard, mouse) into commands for the
//! physics system.

use grapnel_physics::movement::{CarrierButtons, CarrierCommand};
use serde::{Deserialize, Serialize};

/// Raw player input for a single frame.
///
/// This is the input format received from the client input system.
/// It gets converted to [`CarrierCommand`] for the physics system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Movement keys pressed.
    pub movement: MovementInput,

    /// Mouse delta this frame (pixels).
    pub mouse_delta: (f32, f32),

    /// Action buttons pressed.
    pub actions: ActionInput,

    /// Frame number this input was generated.
    pub frame: u32,
}

/// Movement key states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Action button states.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ActionInput {
    /// Fire or hold the grapple.
    pub engage: bool,

    /// Reel the rope in.
    pub shorten: bool,

    /// Let the rope out.
    pub extend: bool,
}

impl PlayerInput {
    /// Convert to a physics command.
    ///
    /// # Arguments
    ///
    /// * `mouse_sensitivity` - Mouse sensitivity multiplier
    pub fn to_command(&self, mouse_sensitivity: f32) -> CarrierCommand {
        let mut cmd = CarrierCommand::default();

        // Movement axes
        if self.movement.forward {
            cmd.forward_move += 1.0;
        }
        if self.movement.backward {
            cmd.forward_move -= 1.0;
        }
        if self.movement.right {
            cmd.right_move += 1.0;
        }
        if self.movement.left {
            cmd.right_move -= 1.0;
        }

        // Normalize diagonal movement
        let move_magnitude = (cmd.forward_move.powi(2) + cmd.right_move.powi(2)).sqrt();
        if move_magnitude > 1.0 {
            cmd.forward_move /= move_magnitude;
            cmd.right_move /= move_magnitude;
        }

        // View angles (convert mouse pixels to radians)
        let sensitivity_radians = mouse_sensitivity * 0.001;
        cmd.view_delta = (
            -self.mouse_delta.1 * sensitivity_radians, // Pitch (Y mouse = pitch)
            self.mouse_delta.0 * sensitivity_radians,  // Yaw (X mouse = yaw)
        );

        // Action buttons
        if self.actions.engage {
            cmd.buttons.press(CarrierButtons::ENGAGE);
        }
        if self.actions.shorten {
            cmd.buttons.press(CarrierButtons::SHORTEN);
        }
        if self.actions.extend {
            cmd.buttons.press(CarrierButtons::EXTEND);
        }

        cmd
    }

    /// Check if any movement input is active.
    pub fn has_movement(&self) -> bool {
        self.movement.forward
            || self.movement.backward
            || self.movement.left
            || self.movement.right
    }
}
