//! Melting: every vertex creeps toward the waterline
//!
//! Ice above the water melts faster than ice below it. The contraction is
//! geometric, so the berg shrinks forever without ever reaching zero area.

use super::state::Polygon;

/// Shrink each vertex's vertical distance to `water_level` by the melt factors
pub fn melt(polygon: &mut Polygon, water_level: f64, melt_air: f64, melt_water: f64) {
    for p in &mut polygon.points {
        let factor = if p.y < water_level { melt_air } else { melt_water };
        p.y = (p.y - water_level) * factor + water_level;
    }
}
