//! Simulation state and core types
//!
//! Everything the simulation loop owns lives here: the iceberg polygon, its
//! velocity, the in-progress stroke and the fixed surface geometry.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A closed ring of screen-space points (first point repeated at the end)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<DVec2>,
}

impl Polygon {
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last points coincide
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }

    /// Enough points to simulate: 3 vertices plus the closing repeat
    pub fn is_simulatable(&self) -> bool {
        self.points.len() >= 4
    }
}

/// Linear and angular velocity of the iceberg
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    /// Screen pixels per tick
    pub linear: DVec2,
    /// Degrees per tick
    pub angular: f64,
}

impl Velocity {
    pub const ZERO: Self = Self {
        linear: DVec2::ZERO,
        angular: 0.0,
    };
}

/// The simulated floating body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Iceberg {
    pub polygon: Polygon,
    pub velocity: Velocity,
}

impl Iceberg {
    /// A freshly accepted shape starts at rest
    pub fn at_rest(polygon: Polygon) -> Self {
        Self {
            polygon,
            velocity: Velocity::ZERO,
        }
    }
}

/// What the simulation is doing right now
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing to simulate
    Empty,
    /// A gesture is in progress; raw points accumulate here
    Drawing { stroke: Vec<DVec2> },
    /// A valid iceberg is floating
    Simulating { iceberg: Iceberg },
}

/// Drawing surface dimensions (screen pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size a surface to the 16:9 layout, leaving a margin below it in the window
    pub fn from_width(width: f64, window_height: f64) -> Self {
        let height = (width * SURFACE_ASPECT).min(window_height - SURFACE_MARGIN);
        Self { width, height }
    }

    /// Waterline y for a given fraction of the surface height
    pub fn water_level(&self, fraction: f64) -> f64 {
        self.height * fraction
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Drawing surface
    pub surface: Surface,
    /// Waterline y, fixed for the session
    pub water_level: f64,
    /// Current phase
    pub phase: Phase,
    /// Ticks that actually advanced the iceberg
    pub time_ticks: u64,
}

impl SimState {
    /// Create an empty state for a surface with an explicit waterline
    pub fn new(surface: Surface, water_level: f64) -> Self {
        Self {
            surface,
            water_level,
            phase: Phase::Empty,
            time_ticks: 0,
        }
    }

    /// Create an empty state with the waterline at the default height fraction
    pub fn for_surface(surface: Surface) -> Self {
        let water_level = surface.water_level(WATER_LEVEL_FRACTION);
        Self::new(surface, water_level)
    }

    /// Current iceberg, if one is floating
    pub fn iceberg(&self) -> Option<&Iceberg> {
        match &self.phase {
            Phase::Simulating { iceberg } => Some(iceberg),
            _ => None,
        }
    }

    /// Raw stroke of the gesture in progress
    pub fn stroke(&self) -> Option<&[DVec2]> {
        match &self.phase {
            Phase::Drawing { stroke } => Some(stroke.as_slice()),
            _ => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.phase, Phase::Drawing { .. })
    }

    /// Start a new gesture, discarding any iceberg
    pub fn begin_stroke(&mut self, point: DVec2) {
        self.phase = Phase::Drawing {
            stroke: vec![point],
        };
    }

    /// Add a point to the gesture in progress (ignored when not drawing)
    pub fn extend_stroke(&mut self, point: DVec2) {
        if let Phase::Drawing { stroke } = &mut self.phase {
            stroke.push(point);
        }
    }

    /// End the gesture, handing back its raw points. Leaves the state `Empty`.
    pub fn take_stroke(&mut self) -> Option<Vec<DVec2>> {
        match std::mem::replace(&mut self.phase, Phase::Empty) {
            Phase::Drawing { stroke } => Some(stroke),
            other => {
                self.phase = other;
                None
            }
        }
    }

    /// Put a sanitized polygon into the water, at rest
    pub fn launch(&mut self, polygon: Polygon) {
        self.phase = Phase::Simulating {
            iceberg: Iceberg::at_rest(polygon),
        };
    }
}
