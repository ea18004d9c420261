//! Deterministic floating-body simulation
//!
//! Everything that moves the iceberg lives here. This module must stay pure
//! and deterministic:
//! - One fixed tick per step, no wall-clock input
//! - Polygon clipping and self-intersection cleanup behind [`GeometryService`]
//! - No rendering or platform dependencies

pub mod boundary;
pub mod forces;
pub mod geometry;
pub mod integrate;
pub mod melt;
pub mod sanitize;
pub mod service;
pub mod state;
pub mod tick;

pub use boundary::{boundary_push, constrain};
pub use forces::{Forces, compute_forces};
pub use integrate::{apply_forces, damping, integrate, transform};
pub use melt::melt;
pub use sanitize::sanitize;
pub use service::{GeometryError, GeometryService, OverlayGeometry};
pub use state::{Iceberg, Phase, Polygon, SimState, Surface, Velocity};
pub use tick::tick;
