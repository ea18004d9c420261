//! Fixed-interval simulation tick
//!
//! One tick: forces, integration, boundary push, melting. Ticks while drawing
//! or with nothing on screen do nothing.

use super::boundary::constrain;
use super::forces::{Forces, compute_forces};
use super::integrate::integrate;
use super::melt::melt;
use super::service::GeometryService;
use super::state::{Phase, SimState};
use crate::error::SimResult;
use crate::settings::Settings;

/// Advance the iceberg by one tick.
///
/// Returns the forces applied, or `None` if there was nothing to simulate.
/// A geometry failure leaves the state untouched.
pub fn tick(
    state: &mut SimState,
    settings: &Settings,
    geometry: &dyn GeometryService,
) -> SimResult<Option<Forces>> {
    let water_level = state.water_level;
    let surface_width = state.surface.width;

    let Phase::Simulating { iceberg } = &mut state.phase else {
        return Ok(None);
    };
    if !iceberg.polygon.is_simulatable() {
        return Ok(None);
    }

    let forces = compute_forces(&iceberg.polygon.points, water_level, settings, geometry)?;
    integrate(&mut iceberg.polygon, &mut iceberg.velocity, &forces, settings);
    constrain(
        &iceberg.polygon.points,
        &mut iceberg.velocity,
        surface_width,
        settings.boundary_gain,
    );
    melt(
        &mut iceberg.polygon,
        water_level,
        settings.melt_air,
        settings.melt_water,
    );

    state.time_ticks += 1;
    Ok(Some(forces))
}
