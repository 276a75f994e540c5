//! Rope attachment and constraint forces.
//!
//! The rope is a soft distance constraint: while the carrier stays inside
//! the rope's reach nothing pulls, and once it crosses the rim a stiff
//! spring with radial damping hauls it back. Length changes ease toward a
//! target instead of snapping.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::config::SwingConfig;

/// An active rope attachment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RopeAttachment {
    /// World-space anchor point the rope is tied to.
    pub anchor: Vec3,

    /// Effective rope length right now (meters).
    pub current_length: f32,

    /// Length the rope is easing toward (meters).
    pub target_length: f32,
}

/// Distance constraint between the carrier and an anchor point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RopeConstraint {
    attachment: Option<RopeAttachment>,
}

impl RopeConstraint {
    /// Tie the rope to an anchor.
    ///
    /// The initial length is the carrier-to-anchor distance clamped into the
    /// configured range, so very close anchors still leave swing room and
    /// distant ones don't leave the carrier dangling on a kilometer of rope.
    /// Does nothing if already attached.
    pub fn attach(&mut self, carrier_pos: Vec3, anchor: Vec3, config: &SwingConfig) {
        if self.attachment.is_some() {
            return;
        }

        let length = (anchor - carrier_pos)
            .length()
            .clamp(config.min_rope_length, config.max_rope_length);

        log::debug!("rope attached at {:?}, length {:.2}", anchor, length);

        self.attachment = Some(RopeAttachment {
            anchor,
            current_length: length,
            target_length: length,
        });
    }

    /// Cut the rope. Does nothing if not attached.
    pub fn detach(&mut self) {
        if self.attachment.take().is_some() {
            log::debug!("rope detached");
        }
    }

    /// The active attachment, if any.
    #[inline]
    pub fn attachment(&self) -> Option<RopeAttachment> {
        self.attachment
    }

    /// Whether the rope is currently tied to an anchor.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Nudge the target length by `delta` meters, staying inside the
    /// configured range. Does nothing if not attached.
    pub fn adjust_target_length(&mut self, delta: f32, config: &SwingConfig) {
        if let Some(attachment) = &mut self.attachment {
            attachment.target_length = (attachment.target_length + delta)
                .clamp(config.min_rope_length, config.max_rope_length);
        }
    }

    /// Ease the current length toward the target by one physics step.
    ///
    /// The easing factor is folded per step, so the feel depends on the
    /// tick rate. Tuned at 50 Hz.
    pub fn step_length(&mut self, config: &SwingConfig, delta_time: f32) {
        if let Some(attachment) = &mut self.attachment {
            let t = (config.rope_ease_rate * delta_time).clamp(0.0, 1.0);
            attachment.current_length +=
                (attachment.target_length - attachment.current_length) * t;
        }
    }

    /// Compute the constraint force on the carrier for this physics step.
    ///
    /// Slack rope (carrier inside the rim): a small upward lift and nothing
    /// else. Taut rope: a stiff spring toward the rim plus damping of the
    /// radial velocity component, with the same lift on top.
    pub fn constraint_force(
        &self,
        carrier_pos: Vec3,
        velocity: Vec3,
        config: &SwingConfig,
    ) -> Vec3 {
        let attachment = match self.attachment {
            Some(attachment) => attachment,
            None => return Vec3::ZERO,
        };

        let rope_vector = carrier_pos - attachment.anchor;
        let distance = rope_vector.length();
        let lift = Vec3::Y * config.slack_lift();

        if distance <= attachment.current_length {
            return lift;
        }

        // Taut: distance > current_length >= 0, so the division is safe
        let direction = rope_vector / distance;
        let rim = attachment.anchor + direction * attachment.current_length;

        let spring = (rim - carrier_pos) * config.spring_force;
        let radial = velocity.project_onto_normalized(direction);
        let damping = -radial * config.damping_force;

        spring + damping + lift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_clamps_length() {
        let config = SwingConfig::default();

        // Anchor almost on top of the carrier: clamped up to the minimum
        let mut rope = RopeConstraint::default();
        rope.attach(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), &config);
        let attachment = rope.attachment().unwrap();
        assert_eq!(attachment.current_length, config.min_rope_length);
        assert_eq!(attachment.target_length, config.min_rope_length);

        // Distant anchor: clamped down to the maximum
        let mut rope = RopeConstraint::default();
        rope.attach(Vec3::ZERO, Vec3::new(60.0, 0.0, 0.0), &config);
        assert_eq!(rope.attachment().unwrap().current_length, config.max_rope_length);

        // In-range anchor: kept as-is
        let mut rope = RopeConstraint::default();
        rope.attach(Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0), &config);
        assert!((rope.attachment().unwrap().current_length - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_attach_while_attached_is_ignored() {
        let config = SwingConfig::default();
        let mut rope = RopeConstraint::default();

        rope.attach(Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0), &config);
        rope.attach(Vec3::ZERO, Vec3::new(0.0, 40.0, 0.0), &config);

        let attachment = rope.attachment().unwrap();
        assert_eq!(attachment.anchor, Vec3::new(20.0, 0.0, 0.0), "First anchor wins");
    }

    #[test]
    fn test_adjust_target_length() {
        let config = SwingConfig::default();
        let mut rope = RopeConstraint::default();
        rope.attach(Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0), &config);

        rope.adjust_target_length(-5.0, &config);
        assert!((rope.attachment().unwrap().target_length - 15.0).abs() < 1e-5);

        // Clamps at both ends
        rope.adjust_target_length(-100.0, &config);
        assert_eq!(rope.attachment().unwrap().target_length, config.min_rope_length);
        rope.adjust_target_length(100.0, &config);
        assert_eq!(rope.attachment().unwrap().target_length, config.max_rope_length);

        // Current length is untouched by adjustments
        assert!((rope.attachment().unwrap().current_length - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_adjust_detached_is_noop() {
        let config = SwingConfig::default();
        let mut rope = RopeConstraint::default();

        rope.adjust_target_length(-5.0, &config);
        assert!(rope.attachment().is_none());
    }

    #[test]
    fn test_step_length_converges() {
        let config = SwingConfig::default();
        let mut rope = RopeConstraint::default();
        rope.attach(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, &config);
        rope.adjust_target_length(-5.0, &config);

        for _ in 0..200 {
            rope.step_length(&config, 0.02);
        }

        let attachment = rope.attachment().unwrap();
        assert!(
            (attachment.current_length - 5.0).abs() < 0.01,
            "Should converge on the target, got {}",
            attachment.current_length
        );
    }

    #[test]
    fn test_step_length_clamps_huge_steps() {
        let config = SwingConfig::default();
        let mut rope = RopeConstraint::default();
        rope.attach(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, &config);
        rope.adjust_target_length(-5.0, &config);

        // One absurd step jumps straight to the target instead of overshooting
        rope.step_length(&config, 10.0);
        let attachment = rope.attachment().unwrap();
        assert!((attachment.current_length - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_slack_force_is_lift_only() {
        let config = SwingConfig::default();
        let mut rope = RopeConstraint::default();
        rope.attach(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, &config);

        // Carrier well inside the rim, moving fast: still only lift
        let force = rope.constraint_force(
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(30.0, -10.0, 4.0),
            &config,
        );
        assert_eq!(force, Vec3::Y * config.slack_lift());
    }

    #[test]
    fn test_no_force_when_detached() {
        let config = SwingConfig::default();
        let rope = RopeConstraint::default();

        let force = rope.constraint_force(Vec3::new(5.0, 0.0, 0.0), Vec3::X, &config);
        assert_eq!(force, Vec3::ZERO);
    }

    #[test]
    fn test_taut_spring_pulls_toward_rim() {
        let config = SwingConfig::default();
        let mut rope = RopeConstraint::default();
        // Length 10 along +X from the anchor at the origin
        rope.attach(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, &config);

        // Carrier 2m past the rim, stationary
        let force = rope.constraint_force(Vec3::new(12.0, 0.0, 0.0), Vec3::ZERO, &config);

        assert!(
            (force.x - (-2.0 * config.spring_force)).abs() < 1e-3,
            "Spring scales with overshoot, got {}",
            force.x
        );
        assert!((force.y - config.slack_lift()).abs() < 1e-5, "Lift rides on top");
        assert!(force.z.abs() < 1e-5);
    }

    #[test]
    fn test_spring_scales_with_constant() {
        let config = SwingConfig {
            spring_force: 200.0,
            ..Default::default()
        };
        let mut rope = RopeConstraint::default();
        rope.attach(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, &config);

        let force = rope.constraint_force(Vec3::new(12.0, 0.0, 0.0), Vec3::ZERO, &config);
        assert!((force.x - (-400.0)).abs() < 1e-3);
    }

    #[test]
    fn test_damping_opposes_radial_velocity() {
        let config = SwingConfig::default();
        let mut rope = RopeConstraint::default();
        rope.attach(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, &config);
        let pos = Vec3::new(12.0, 0.0, 0.0);

        let still = rope.constraint_force(pos, Vec3::ZERO, &config);

        // Moving outward: damping adds inward pull
        let outward = rope.constraint_force(pos, Vec3::new(5.0, 0.0, 0.0), &config);
        assert!(
            (outward.x - (still.x - 5.0 * config.damping_force)).abs() < 1e-3,
            "got {}",
            outward.x
        );

        // Moving inward: damping pushes back outward
        let inward = rope.constraint_force(pos, Vec3::new(-5.0, 0.0, 0.0), &config);
        assert!((inward.x - (still.x + 5.0 * config.damping_force)).abs() < 1e-3);

        // Tangential velocity is left alone
        let tangential = rope.constraint_force(pos, Vec3::new(0.0, 0.0, 7.0), &config);
        assert!((tangential.x - still.x).abs() < 1e-3);
        assert!(tangential.z.abs() < 1e-5, "No drag on the swing plane");
    }

    #[test]
    fn test_detach_resets_fully() {
        let config = SwingConfig::default();
        let mut rope = RopeConstraint::default();

        rope.attach(Vec3::ZERO, Vec3::new(20.0, 0.0, 0.0), &config);
        rope.adjust_target_length(-10.0, &config);
        rope.detach();
        assert!(!rope.is_attached());

        // Re-attach starts fresh, no leftover target
        rope.attach(Vec3::ZERO, Vec3::new(30.0, 0.0, 0.0), &config);
        let attachment = rope.attachment().unwrap();
        assert!((attachment.current_length - 30.0).abs() < 1e-5);
        assert!((attachment.target_length - 30.0).abs() < 1e-5);
    }
}
