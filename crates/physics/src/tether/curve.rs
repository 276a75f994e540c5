//! Visual rope curve sampling.

use glam::Vec3;

use super::config::SwingConfig;

/// Sample a sagging rope curve from `start` to `anchor`.
///
/// Points lie on the straight chord between the endpoints with a half-sine
/// dip whose depth scales with the current rope length. Purely cosmetic;
/// the constraint itself acts along the straight line.
pub fn sample_rope_curve(
    start: Vec3,
    anchor: Vec3,
    current_length: f32,
    config: &SwingConfig,
) -> Vec<Vec3> {
    let segments = config.rope_segments.max(2);
    let sag_depth = current_length * config.rope_sag_fraction;

    (0..segments)
        .map(|i| {
            let t = i as f32 / (segments - 1) as f32;
            let mut point = start.lerp(anchor, t);
            point.y -= (t * std::f32::consts::PI).sin() * sag_depth;
            point
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_endpoints() {
        let config = SwingConfig::default();
        let start = Vec3::new(0.0, 5.0, 0.0);
        let anchor = Vec3::new(20.0, 15.0, 0.0);

        let points = sample_rope_curve(start, anchor, 20.0, &config);

        assert_eq!(points.len(), config.rope_segments);
        assert!((points[0] - start).length() < 1e-4, "Curve starts at the carrier");
        assert!(
            (points[points.len() - 1] - anchor).length() < 1e-4,
            "Curve ends at the anchor"
        );
    }

    #[test]
    fn test_curve_sags_at_midpoint() {
        let config = SwingConfig {
            rope_segments: 3,
            ..Default::default()
        };
        let start = Vec3::new(0.0, 10.0, 0.0);
        let anchor = Vec3::new(10.0, 10.0, 0.0);

        let points = sample_rope_curve(start, anchor, 10.0, &config);

        let expected_sag = 10.0 * config.rope_sag_fraction;
        let mid = points[1];
        assert!((mid.x - 5.0).abs() < 1e-5);
        assert!(
            (mid.y - (10.0 - expected_sag)).abs() < 1e-4,
            "Midpoint dips by the sag depth, got y={}",
            mid.y
        );
    }

    #[test]
    fn test_longer_rope_sags_deeper() {
        let config = SwingConfig {
            rope_segments: 3,
            ..Default::default()
        };
        let start = Vec3::new(0.0, 10.0, 0.0);
        let anchor = Vec3::new(10.0, 10.0, 0.0);

        let short = sample_rope_curve(start, anchor, 10.0, &config);
        let long = sample_rope_curve(start, anchor, 40.0, &config);

        assert!(long[1].y < short[1].y);
    }

    #[test]
    fn test_segment_count_floor() {
        let config = SwingConfig {
            rope_segments: 0,
            ..Default::default()
        };

        let points = sample_rope_curve(Vec3::ZERO, Vec3::X, 1.0, &config);
        assert_eq!(points.len(), 2, "Degenerate configs still yield both endpoints");
    }
}
