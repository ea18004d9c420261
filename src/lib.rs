//! Iceberg Sim - draw a shape, watch it float
//!
//! Core modules:
//! - `sim`: Deterministic floating-body simulation (geometry, forces, melting)
//! - `session`: Simulation loop owner (gestures, ticking, start/stop)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Scheduling abstraction (fixed-interval clock)
//! - `settings`: Data-driven physics tuning

pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{SimError, SimResult};
pub use session::Session;
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation interval in milliseconds (one tick)
    pub const TICK_INTERVAL_MS: f64 = 50.0;
    /// Maximum ticks run per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ice is this fraction as dense as water
    pub const SPECIFIC_GRAVITY: f64 = 0.85;
    /// Gravity as a per-tick pseudo-acceleration (screen +y is down)
    pub const GRAVITY: f64 = 1.0;

    /// Per-tick velocity decay when fully out of the water
    pub const DAMPING_AIR: f64 = 0.99;
    /// Per-tick velocity decay when fully submerged
    pub const DAMPING_WATER: f64 = 0.94;
    /// Angular velocity is damped harder by this offset
    pub const ANGULAR_DAMPING_OFFSET: f64 = 0.1;
    /// Torque-to-angular-acceleration divisor
    pub const TORQUE_SCALE: f64 = 30.0;
    /// How far the buoyancy point moves toward the full centroid at half submersion
    pub const CENTROID_BLEND: f64 = 0.2;

    /// Horizontal push applied per surface-width of overshoot
    pub const BOUNDARY_GAIN: f64 = 10.0;

    /// Per-tick shrink factor of a vertex's distance to the waterline, above water
    pub const MELT_AIR: f64 = 0.9999;
    /// Per-tick shrink factor below water
    pub const MELT_WATER: f64 = 0.99999;

    /// Waterline sits at this fraction of the surface height
    pub const WATER_LEVEL_FRACTION: f64 = 1.0 / 3.0;
    /// Surface aspect (height / width)
    pub const SURFACE_ASPECT: f64 = 9.0 / 16.0;
    /// Vertical space reserved below the surface when clamping its height
    pub const SURFACE_MARGIN: f64 = 50.0;
}
