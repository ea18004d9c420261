//! Velocity integration and rigid transform

use glam::DVec2;

use super::forces::Forces;
use super::geometry::rotate;
use super::state::{Polygon, Velocity};
use crate::settings::Settings;

/// Blend of air and water damping by submerged fraction
#[inline]
pub fn damping(submerged_ratio: f64, settings: &Settings) -> f64 {
    settings.damping_air * (1.0 - submerged_ratio) + settings.damping_water * submerged_ratio
}

/// Accelerate, then damp. Water damps harder than air, rotation harder still.
pub fn apply_forces(velocity: &mut Velocity, forces: &Forces, settings: &Settings) {
    velocity.linear.y += forces.fy;
    velocity.angular += forces.mz / settings.torque_scale;

    let d = damping(forces.submerged_ratio, settings);
    velocity.linear *= d;
    velocity.angular *= d - settings.angular_damping_offset;
}

/// Rotate every vertex about `pivot`, then translate
pub fn transform(polygon: &mut Polygon, pivot: DVec2, velocity: &Velocity) {
    for p in &mut polygon.points {
        *p = rotate(pivot, *p, velocity.angular) + velocity.linear;
    }
}

/// One integrator step: update velocity from forces and move the polygon
pub fn integrate(
    polygon: &mut Polygon,
    velocity: &mut Velocity,
    forces: &Forces,
    settings: &Settings,
) {
    apply_forces(velocity, forces, settings);
    transform(polygon, forces.centroid, velocity);
    log::trace!(
        "integrate: v=({:.4}, {:.4}) w={:.4}",
        velocity.linear.x,
        velocity.linear.y,
        velocity.angular
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forces(fy: f64, mz: f64, submerged_ratio: f64, centroid: DVec2) -> Forces {
        Forces {
            fy,
            fb: 0.0,
            mz,
            submerged_ratio,
            centroid,
            buoyancy_point: centroid,
        }
    }

    #[test]
    fn test_damping_blend() {
        let s = Settings::default();
        assert_eq!(damping(0.0, &s), 0.99);
        assert_eq!(damping(1.0, &s), 0.94);
        assert!((damping(0.5, &s) - 0.965).abs() < 1e-12);
    }

    #[test]
    fn test_apply_forces_half_submerged() {
        let s = Settings::default();
        let mut v = Velocity::ZERO;
        apply_forces(&mut v, &forces(0.411_764_705_882, 0.0, 0.5, DVec2::ZERO), &s);
        assert!((v.linear.y - 0.397_353).abs() < 1e-5);
        assert_eq!(v.linear.x, 0.0);
        assert_eq!(v.angular, 0.0);
    }

    #[test]
    fn test_angular_damped_harder() {
        let s = Settings::default();
        let mut v = Velocity {
            linear: DVec2::new(1.0, 0.0),
            angular: 1.0,
        };
        apply_forces(&mut v, &forces(0.0, 0.0, 0.0, DVec2::ZERO), &s);
        assert!((v.linear.x - 0.99).abs() < 1e-12);
        assert!((v.angular - 0.89).abs() < 1e-12);
    }

    #[test]
    fn test_torque_scaled() {
        let s = Settings::default();
        let mut v = Velocity::ZERO;
        apply_forces(&mut v, &forces(0.0, 3.0, 1.0, DVec2::ZERO), &s);
        // 3 / 30 then damped by 0.94 - 0.1
        assert!((v.angular - 0.1 * 0.84).abs() < 1e-12);
    }

    #[test]
    fn test_transform_translates_without_rotation() {
        let mut polygon = Polygon::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(0.0, 0.0),
        ]);
        let v = Velocity {
            linear: DVec2::new(1.0, -0.5),
            angular: 0.0,
        };
        transform(&mut polygon, DVec2::new(1.0, 1.0), &v);
        assert_eq!(polygon.points[1], DVec2::new(3.0, -0.5));
        assert!(polygon.is_closed());
    }

    #[test]
    fn test_transform_rotates_about_pivot() {
        let mut polygon = Polygon::new(vec![DVec2::new(2.0, 1.0), DVec2::new(1.0, 1.0)]);
        let v = Velocity {
            linear: DVec2::ZERO,
            angular: 180.0,
        };
        transform(&mut polygon, DVec2::new(1.0, 1.0), &v);
        assert!((polygon.points[0] - DVec2::new(0.0, 1.0)).length() < 1e-12);
        // The pivot itself stays put
        assert!((polygon.points[1] - DVec2::new(1.0, 1.0)).length() < 1e-12);
    }
}
