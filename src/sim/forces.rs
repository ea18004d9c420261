//! Gravity, buoyancy and the righting moment
//!
//! Gravity pulls down (+y) at the centroid of the whole iceberg. Buoyancy
//! pushes up at the centroid of the part below the waterline, scaled by how
//! much of the area is submerged. Their horizontal offset turns the berg.
//! Forces are normalized to the polygon area, so they act as accelerations.

use glam::DVec2;

use super::geometry::{area, centroid};
use super::service::GeometryService;
use crate::error::SimResult;
use crate::settings::Settings;

/// Forces acting on the iceberg for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forces {
    /// Net vertical acceleration (positive = down)
    pub fy: f64,
    /// Buoyant acceleration
    pub fb: f64,
    /// Moment about the centroid
    pub mz: f64,
    /// Fraction of the area below the waterline
    pub submerged_ratio: f64,
    /// Centroid of the whole polygon (rotation pivot)
    pub centroid: DVec2,
    /// Point the buoyant force acts through, after blending
    pub buoyancy_point: DVec2,
}

/// Weight of the full centroid in the buoyancy point at a given submersion.
///
/// The drawing is a 2D slice of a 3D berg whose edges are thinner than its
/// middle, so the real submerged mass sits closer to the full centroid than
/// the slice suggests. 0 when fully out or fully in, `max_blend` at half.
pub fn centroid_blend(submerged_ratio: f64, max_blend: f64) -> f64 {
    let edge = if submerged_ratio < 0.5 {
        submerged_ratio
    } else {
        1.0 - submerged_ratio
    };
    edge * 2.0 * max_blend
}

/// Compute the forces on `ring` floating at `water_level`
pub fn compute_forces(
    ring: &[DVec2],
    water_level: f64,
    settings: &Settings,
    geometry: &dyn GeometryService,
) -> SimResult<Forces> {
    let pc = centroid(ring);
    let submerged = geometry.clip_to_half_plane(ring, water_level)?;
    let submerged_area = area(&submerged);

    // Slivers too thin to have a centroid fall back to the origin
    let pc_submerged = if submerged.len() >= 4 && submerged_area > 0.0 {
        centroid(&submerged)
    } else {
        DVec2::ZERO
    };

    let submerged_ratio = submerged_area / area(ring);
    let fb = submerged_ratio / settings.specific_gravity;
    let fy = settings.gravity - fb;

    let r = centroid_blend(submerged_ratio, settings.centroid_blend);
    let buoyancy_point = pc_submerged * (1.0 - r) + pc * r;
    let mz = fb * (buoyancy_point.x - pc.x);

    Ok(Forces {
        fy,
        fb,
        mz,
        submerged_ratio,
        centroid: pc,
        buoyancy_point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::service::OverlayGeometry;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(x0, y0),
            DVec2::new(x1, y0),
            DVec2::new(x1, y1),
            DVec2::new(x0, y1),
            DVec2::new(x0, y0),
        ]
    }

    #[test]
    fn test_fully_above_water_falls() {
        let ring = rect(0.0, 0.0, 10.0, 10.0);
        let f = compute_forces(&ring, 300.0, &Settings::default(), &OverlayGeometry).unwrap();
        assert_eq!(f.submerged_ratio, 0.0);
        assert_eq!(f.fb, 0.0);
        assert_eq!(f.fy, 1.0);
        assert_eq!(f.mz, 0.0);
    }

    #[test]
    fn test_fully_submerged_rises() {
        let ring = rect(0.0, 400.0, 10.0, 410.0);
        let f = compute_forces(&ring, 300.0, &Settings::default(), &OverlayGeometry).unwrap();
        assert!((f.submerged_ratio - 1.0).abs() < 1e-12);
        assert!((f.fb - 1.0 / 0.85).abs() < 1e-9);
        assert!((f.fy - (1.0 - 1.0 / 0.85)).abs() < 1e-9);
        assert!(f.fy < 0.0);
        assert!(f.mz.abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_square_half_submerged() {
        let f = compute_forces(
            &rect(100.0, 250.0, 300.0, 350.0),
            300.0,
            &Settings::default(),
            &OverlayGeometry,
        )
        .unwrap();
        assert!((f.submerged_ratio - 0.5).abs() < 1e-12);
        assert!((f.fb - 0.588_235).abs() < 1e-5);
        assert!((f.fy - 0.411_765).abs() < 1e-5);
        assert!(f.mz.abs() < 1e-9);
        assert!((f.centroid - DVec2::new(200.0, 300.0)).length() < 1e-9);
    }

    #[test]
    fn test_centroid_blend_profile() {
        assert_eq!(centroid_blend(0.0, 0.2), 0.0);
        assert_eq!(centroid_blend(1.0, 0.2), 0.0);
        assert!((centroid_blend(0.5, 0.2) - 0.2).abs() < 1e-12);
        assert!((centroid_blend(0.25, 0.2) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_lopsided_shape_gets_torque() {
        // An "L": heavy foot sticks out to the right under water
        let ring = vec![
            DVec2::new(0.0, 200.0),
            DVec2::new(20.0, 200.0),
            DVec2::new(20.0, 380.0),
            DVec2::new(120.0, 380.0),
            DVec2::new(120.0, 400.0),
            DVec2::new(0.0, 400.0),
            DVec2::new(0.0, 200.0),
        ];
        let f = compute_forces(&ring, 300.0, &Settings::default(), &OverlayGeometry).unwrap();
        // Buoyancy acts right of the centroid: positive moment
        assert!(f.buoyancy_point.x > f.centroid.x);
        assert!(f.mz > 0.0);
    }

    #[test]
    fn test_clip_failure_propagates() {
        use crate::sim::sanitize::tests::StubGeometry;

        let geo = StubGeometry {
            fail: true,
            ..Default::default()
        };
        let ring = rect(0.0, 0.0, 10.0, 10.0);
        assert!(compute_forces(&ring, 5.0, &Settings::default(), &geo).is_err());
    }
}
