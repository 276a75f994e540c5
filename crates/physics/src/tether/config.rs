//! Swing tuning values.
//!
//! All swing parameters are grouped here. The defaults are the tuned feel
//! the rest of the crate is tested against; change them together or the
//! swing goes mushy.

use serde::{Deserialize, Serialize};

use crate::collision::ContentFlags;

/// Configuration for the grappling swing.
///
/// All values use metric units (meters, seconds) unless otherwise noted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwingConfig {
    // ========================================================================
    // Targeting
    // ========================================================================
    /// Maximum aim ray distance (meters).
    pub max_rope_distance: f32,

    /// Content mask a surface must match to accept an anchor.
    pub swingable_mask: ContentFlags,

    /// Aim ray origin height above the feet (meters).
    pub eye_height: f32,

    // ========================================================================
    // Rope Length
    // ========================================================================
    /// Shortest allowed rope (meters).
    pub min_rope_length: f32,

    /// Longest allowed rope (meters).
    pub max_rope_length: f32,

    /// Easing rate for current length chasing target length (1/second).
    pub rope_ease_rate: f32,

    /// Reel speed while shorten/extend is held (meters/second).
    pub rope_adjust_speed: f32,

    // ========================================================================
    // Constraint Forces
    // ========================================================================
    /// Spring constant pulling the carrier back to the rope rim.
    pub spring_force: f32,

    /// Damping constant bleeding off radial velocity.
    pub damping_force: f32,

    /// Fraction of gravity applied as upward lift while the rope hangs
    /// slack. Keeps slack swings floaty instead of dead.
    pub slack_lift_fraction: f32,

    /// Gravity the lift fraction scales against (meters/second²).
    pub gravity: f32,

    // ========================================================================
    // Air Control
    // ========================================================================
    /// Steering force applied from movement input while swinging.
    pub air_control: f32,

    /// Input magnitude below which air control is ignored.
    pub air_control_deadzone: f32,

    // ========================================================================
    // Release
    // ========================================================================
    /// Velocity multiplier applied on release.
    pub momentum_preservation: f32,

    /// Boost force added along the swing direction on release.
    pub release_boost_force: f32,

    /// Minimum tangential speed (meters/second) for the release boost.
    pub min_boost_swing_speed: f32,

    // ========================================================================
    // Rope Curve
    // ========================================================================
    /// Sample count for the visual rope curve.
    pub rope_segments: usize,

    /// Sag depth as a fraction of current rope length.
    pub rope_sag_fraction: f32,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            // Targeting
            max_rope_distance: 50.0,
            swingable_mask: ContentFlags::MASK_SWINGABLE,
            eye_height: 1.6,

            // Rope length
            min_rope_length: 3.0,
            max_rope_length: 50.0,
            rope_ease_rate: 2.0,
            rope_adjust_speed: 5.0,

            // Constraint forces
            spring_force: 100.0,   // Stiff: the rim acts like a hard rim, not a bungee
            damping_force: 10.0,
            slack_lift_fraction: 0.1,
            gravity: 9.81,

            // Air control
            air_control: 2.0,
            air_control_deadzone: 0.1,

            // Release
            momentum_preservation: 1.2,
            release_boost_force: 5.0,
            min_boost_swing_speed: 0.5,

            // Rope curve
            rope_segments: 20,
            rope_sag_fraction: 0.1,
        }
    }
}

impl SwingConfig {
    /// Upward lift applied while the rope hangs slack.
    #[inline]
    pub fn slack_lift(&self) -> f32 {
        self.gravity * self.slack_lift_fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SwingConfig::default();
        assert!(config.min_rope_length < config.max_rope_length);
        assert!(config.max_rope_distance <= config.max_rope_length);
        assert!(config.spring_force > config.damping_force);
        assert!(config.rope_sag_fraction > 0.0 && config.rope_sag_fraction < 1.0);
        assert!(config.rope_segments >= 2);
    }

    #[test]
    fn test_slack_lift() {
        let config = SwingConfig::default();
        assert!((config.slack_lift() - config.gravity * 0.1).abs() < 1e-6);
    }
}
