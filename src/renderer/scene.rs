//! Scene tessellation
//!
//! Turns the simulation state into one triangle list, back to front: the
//! sea, ice, its outline, the translucent water over both, then the lasso on
//! top. The sky is the clear color.

use glam::Vec2;

use super::shapes::{polygon_fill, polyline, rect};
use super::vertex::{LASSO_WIDTH, OUTLINE_WIDTH, Vertex, colors};
use crate::sim::state::{Phase, SimState};

pub fn build_scene(state: &SimState) -> Vec<Vertex> {
    let surface = state.surface;
    let water_min = Vec2::new(0.0, state.water_level as f32);
    let water_max = Vec2::new(surface.width as f32, surface.height as f32);

    let mut vertices = rect(water_min, water_max, colors::SEA);

    if let Phase::Simulating { iceberg } = &state.phase {
        let ring = &iceberg.polygon.points;
        vertices.extend(polygon_fill(ring, colors::ICE));
        vertices.extend(polyline(ring, OUTLINE_WIDTH, colors::OUTLINE));
    }

    vertices.extend(rect(water_min, water_max, colors::WATER));

    if let Phase::Drawing { stroke } = &state.phase {
        vertices.extend(polyline(stroke, LASSO_WIDTH, colors::LASSO));
    }

    vertices
}
