//! Movement configuration values.

use serde::{Deserialize, Serialize};

/// Configuration for carrier movement physics.
///
/// All values use metric units (meters, seconds) unless otherwise noted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Ground walking speed (meters/second).
    pub walk_speed: f32,

    /// Gravity acceleration (meters/second²).
    pub gravity: f32,

    /// Distance below the feet probed for ground contact (meters).
    pub ground_check_distance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 10.0,
            gravity: 9.81,
            ground_check_distance: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MovementConfig::default();
        assert!(config.walk_speed > 0.0);
        assert!(config.gravity > 0.0);
        assert!(config.ground_check_distance > 0.0);
    }
}
