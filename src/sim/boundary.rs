//! Keep the iceberg on screen
//!
//! A soft push back toward the visible range, proportional to how far the
//! shape sticks out. The berg can still overshoot for a few ticks.

use glam::DVec2;

use super::geometry::horizontal_extent;
use super::state::Velocity;

/// Horizontal velocity correction for a ring on a surface of `surface_width`
pub fn boundary_push(ring: &[DVec2], surface_width: f64, gain: f64) -> f64 {
    let Some((min_x, max_x)) = horizontal_extent(ring) else {
        return 0.0;
    };

    let mut push = 0.0;
    if min_x < 0.0 {
        push += -min_x / surface_width * gain;
    }
    if max_x > surface_width {
        push += (surface_width - max_x) / surface_width * gain;
    }
    push
}

/// Nudge `velocity` back toward the visible horizontal extent
pub fn constrain(ring: &[DVec2], velocity: &mut Velocity, surface_width: f64, gain: f64) {
    velocity.linear.x += boundary_push(ring, surface_width, gain);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(x0: f64, x1: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(x0, 0.0),
            DVec2::new(x1, 0.0),
            DVec2::new(x1, 10.0),
            DVec2::new(x0, 0.0),
        ]
    }

    #[test]
    fn test_inside_no_push() {
        let mut v = Velocity::ZERO;
        constrain(&span(10.0, 790.0), &mut v, 800.0, 10.0);
        assert_eq!(v.linear.x, 0.0);
    }

    #[test]
    fn test_left_overshoot_pushes_right() {
        let mut v = Velocity::ZERO;
        constrain(&span(-50.0, 100.0), &mut v, 800.0, 10.0);
        assert!((v.linear.x - 0.625).abs() < 1e-12);
    }

    #[test]
    fn test_right_overshoot_pushes_left() {
        let mut v = Velocity {
            linear: DVec2::new(1.0, 2.0),
            angular: 0.0,
        };
        constrain(&span(700.0, 880.0), &mut v, 800.0, 10.0);
        assert!((v.linear.x - 0.0).abs() < 1e-12);
        assert_eq!(v.linear.y, 2.0);
    }

    #[test]
    fn test_wider_than_surface_pushes_both_ways() {
        // Overshoot equally on both sides: pushes cancel
        assert!(boundary_push(&span(-100.0, 900.0), 800.0, 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_ring_no_push() {
        assert_eq!(boundary_push(&[], 800.0, 10.0), 0.0);
    }
}
