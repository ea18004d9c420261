//! Geometry service port
//!
//! The simulation needs exactly two polygon operations it does not implement
//! itself: splitting a self-intersecting ring into simple rings, and clipping
//! a ring against the region below the waterline. They sit behind
//! [`GeometryService`] so the physics can be tested against a stub.

use std::fmt;

use glam::DVec2;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use super::geometry::close_ring;

/// Failure reported by a geometry service
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The input ring was unusable (open, too short, non-finite)
    Malformed(String),
    /// The backend failed on otherwise valid input
    Backend(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Malformed(msg) => write!(f, "malformed ring: {}", msg),
            GeometryError::Backend(msg) => write!(f, "geometry backend error: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Polygon operations consumed by the simulation
pub trait GeometryService {
    /// Partition a closed, possibly self-crossing ring into closed simple rings
    fn resolve_self_intersections(&self, ring: &[DVec2]) -> Result<Vec<Vec<DVec2>>, GeometryError>;

    /// Intersect a closed ring with the half-plane `y >= y_min`.
    ///
    /// Returns a closed ring, or an empty one when nothing usable remains.
    fn clip_to_half_plane(&self, ring: &[DVec2], y_min: f64) -> Result<Vec<DVec2>, GeometryError>;
}

/// Production geometry service backed by `i_overlay`
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayGeometry;

impl OverlayGeometry {
    pub fn new() -> Self {
        Self
    }
}

/// Reject rings the backends can't reason about
fn check_ring(ring: &[DVec2]) -> Result<(), GeometryError> {
    if ring.len() < 4 {
        return Err(GeometryError::Malformed(format!(
            "{} points, need at least 4",
            ring.len()
        )));
    }
    if ring.first() != ring.last() {
        return Err(GeometryError::Malformed("ring is not closed".into()));
    }
    if !ring.iter().all(|p| p.is_finite()) {
        return Err(GeometryError::Malformed("non-finite coordinate".into()));
    }
    Ok(())
}

impl GeometryService for OverlayGeometry {
    fn resolve_self_intersections(&self, ring: &[DVec2]) -> Result<Vec<Vec<DVec2>>, GeometryError> {
        check_ring(ring)?;

        // i_overlay wants open contours
        let contour: Vec<[f64; 2]> = ring[..ring.len() - 1].iter().map(|p| [p.x, p.y]).collect();

        // Even-odd fill splits crossing loops into separate lobes
        let shapes = contour.overlay(&[contour.clone()], OverlayRule::Union, FillRule::EvenOdd);

        // Outer contours and holes alike: each one is a simple ring
        let rings = shapes
            .iter()
            .flatten()
            .filter(|contour| contour.len() >= 3)
            .map(|contour| {
                let mut ring: Vec<DVec2> =
                    contour.iter().map(|&[x, y]| DVec2::new(x, y)).collect();
                close_ring(&mut ring);
                ring
            })
            .collect();

        Ok(rings)
    }

    fn clip_to_half_plane(&self, ring: &[DVec2], y_min: f64) -> Result<Vec<DVec2>, GeometryError> {
        check_ring(ring)?;

        // Sutherland-Hodgman against a single edge
        let open = &ring[..ring.len() - 1];
        let inside = |p: DVec2| p.y >= y_min;
        let crossing = |a: DVec2, b: DVec2| {
            let t = (y_min - a.y) / (b.y - a.y);
            DVec2::new(a.x + (b.x - a.x) * t, y_min)
        };

        let mut out = Vec::with_capacity(open.len() + 2);
        let mut prev = open[open.len() - 1];
        for &curr in open {
            match (inside(prev), inside(curr)) {
                (true, true) => out.push(curr),
                (true, false) => out.push(crossing(prev, curr)),
                (false, true) => {
                    out.push(crossing(prev, curr));
                    out.push(curr);
                }
                (false, false) => {}
            }
            prev = curr;
        }

        close_ring(&mut out);
        if out.len() < 4 {
            out.clear();
        }
        Ok(out)
    }
}
