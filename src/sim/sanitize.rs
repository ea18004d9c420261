//! Turn a freehand stroke into a simulatable polygon
//!
//! People draw messy shapes: repeated points from a pointer that didn't move,
//! loops where the stroke crosses itself. The sanitizer closes the ring,
//! drops stuttered points, splits it at crossings and keeps the biggest piece.

use glam::DVec2;

use super::geometry::{area, close_ring};
use super::service::GeometryService;
use super::state::Polygon;
use crate::error::{SimError, SimResult};

/// Minimum raw points for a stroke to be considered a shape
pub const MIN_STROKE_POINTS: usize = 3;

/// Close the ring and drop points identical to the one before them
pub fn dedup_ring(stroke: &[DVec2]) -> Vec<DVec2> {
    let mut ring: Vec<DVec2> = Vec::with_capacity(stroke.len() + 1);
    for &p in stroke {
        if ring.last() != Some(&p) {
            ring.push(p);
        }
    }
    // The closing point duplicates the first, so drop a trailing repeat before re-closing
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    close_ring(&mut ring);
    ring
}

/// Sanitize a raw stroke into a closed, simple, non-empty polygon
pub fn sanitize(stroke: &[DVec2], geometry: &dyn GeometryService) -> SimResult<Polygon> {
    if stroke.len() < MIN_STROKE_POINTS {
        return Err(SimError::DegenerateStroke {
            points: stroke.len(),
        });
    }

    let ring = dedup_ring(stroke);
    // 3 distinct vertices + closing repeat
    if ring.len() < 4 {
        return Err(SimError::DegenerateStroke {
            points: ring.len().saturating_sub(1),
        });
    }

    // Always take the backend's rings: a stroke that crosses itself an even
    // number of times can still come back as one piece
    let best = geometry
        .resolve_self_intersections(&ring)?
        .into_iter()
        .map(|mut piece| {
            close_ring(&mut piece);
            piece
        })
        .max_by(|a, b| area(a).total_cmp(&area(b)))
        .ok_or(SimError::ZeroArea)?;

    if area(&best) <= 0.0 {
        return Err(SimError::ZeroArea);
    }

    Ok(Polygon::new(best))
}
