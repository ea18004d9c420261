//! Simulation loop owner
//!
//! A [`Session`] holds everything one drawing surface needs: the simulation
//! state, settings, the geometry service and the tick clock. Input handlers
//! and the frame loop both go through it, one call at a time, so a tick never
//! overlaps a gesture update.

use glam::DVec2;

use crate::platform::FixedTimestep;
use crate::settings::Settings;
use crate::sim::forces::Forces;
use crate::sim::sanitize::sanitize;
use crate::sim::service::{GeometryService, OverlayGeometry};
use crate::sim::state::{SimState, Surface};
use crate::sim::tick::tick;

/// One interactive iceberg session
pub struct Session<G: GeometryService = OverlayGeometry> {
    state: SimState,
    settings: Settings,
    geometry: G,
    clock: FixedTimestep,
}

impl Session<OverlayGeometry> {
    /// Session on `surface` using the default geometry backend
    pub fn with_surface(surface: Surface, settings: Settings) -> Self {
        Self::new(surface, settings, OverlayGeometry::new())
    }
}

impl<G: GeometryService> Session<G> {
    pub fn new(surface: Surface, settings: Settings, geometry: G) -> Self {
        let water_level = surface.water_level(settings.water_level_fraction);
        let clock = FixedTimestep::new(settings.tick_interval_ms, settings.max_substeps);
        Self {
            state: SimState::new(surface, water_level),
            settings,
            geometry,
            clock,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn water_level(&self) -> f64 {
        self.state.water_level
    }

    /// Start the periodic tick
    pub fn start(&mut self) {
        self.clock.start();
        log::info!(
            "Simulation started ({} ms ticks, waterline y={:.1})",
            self.clock.interval_ms(),
            self.state.water_level
        );
    }

    /// Stop the periodic tick; gestures still work
    pub fn stop(&mut self) {
        self.clock.stop();
        log::info!("Simulation stopped");
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Pointer pressed: start a new shape, dropping the old iceberg
    pub fn pointer_down(&mut self, point: DVec2) {
        self.state.begin_stroke(point);
    }

    /// Pointer dragged
    pub fn pointer_move(&mut self, point: DVec2) {
        self.state.extend_stroke(point);
    }

    /// Pointer released: turn the stroke into an iceberg.
    ///
    /// Messy strokes are common, so a rejected stroke just clears the scene
    /// with no error shown. Returns whether a shape was accepted.
    pub fn pointer_up(&mut self) -> bool {
        let Some(stroke) = self.state.take_stroke() else {
            return false;
        };

        match sanitize(&stroke, &self.geometry) {
            Ok(polygon) => {
                log::info!("Iceberg launched with {} vertices", polygon.len() - 1);
                self.state.launch(polygon);
                true
            }
            Err(e) => {
                log::debug!("Stroke of {} points discarded: {}", stroke.len(), e);
                false
            }
        }
    }

    /// Run exactly one simulation step
    pub fn tick(&mut self) -> Option<Forces> {
        match tick(&mut self.state, &self.settings, &self.geometry) {
            Ok(forces) => {
                if let Some(f) = &forces {
                    log::trace!(
                        "tick {}: fy={:.4} mz={:.4} submerged={:.3}",
                        self.state.time_ticks,
                        f.fy,
                        f.mz,
                        f.submerged_ratio
                    );
                }
                forces
            }
            Err(e) => {
                log::debug!("Tick skipped: {}", e);
                None
            }
        }
    }

    /// Feed elapsed wall time and run the ticks that fell due.
    ///
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        let due = self.clock.advance(elapsed_ms);
        for _ in 0..due {
            self.tick();
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sanitize::tests::StubGeometry;
    use crate::sim::state::Phase;

    fn session() -> Session {
        Session::with_surface(Surface::new(800.0, 900.0), Settings::default())
    }

    fn draw(session: &mut Session<impl GeometryService>, points: &[(f64, f64)]) -> bool {
        let mut iter = points.iter().map(|&(x, y)| DVec2::new(x, y));
        if let Some(first) = iter.next() {
            session.pointer_down(first);
        }
        for p in iter {
            session.pointer_move(p);
        }
        session.pointer_up()
    }

    const SQUARE: [(f64, f64); 5] = [
        (100.0, 250.0),
        (300.0, 250.0),
        (300.0, 350.0),
        (100.0, 350.0),
        (100.0, 250.0),
    ];

    #[test]
    fn test_waterline_from_surface() {
        assert_eq!(session().water_level(), 300.0);
    }

    #[test]
    fn test_draw_square_and_tick() {
        let mut s = session();
        assert!(draw(&mut s, &SQUARE));
        assert!(s.state().iceberg().is_some());

        let forces = s.tick().unwrap();
        assert!((forces.submerged_ratio - 0.5).abs() < 1e-9);
        let vy = s.state().iceberg().unwrap().velocity.linear.y;
        assert!((vy - 0.397).abs() < 1e-3);
    }

    #[test]
    fn test_short_stroke_clears_scene() {
        let mut s = session();
        assert!(draw(&mut s, &SQUARE));
        assert!(!draw(&mut s, &[(5.0, 5.0), (6.0, 6.0)]));
        assert_eq!(s.state().phase, Phase::Empty);
        assert!(s.tick().is_none());
    }

    #[test]
    fn test_service_failure_clears_scene_quietly() {
        let geo = StubGeometry {
            fail: true,
            ..Default::default()
        };
        let mut s = Session::new(Surface::new(800.0, 900.0), Settings::default(), geo);
        assert!(!draw(&mut s, &SQUARE));
        assert_eq!(s.state().phase, Phase::Empty);
    }

    #[test]
    fn test_no_ticks_while_drawing() {
        let mut s = session();
        draw(&mut s, &SQUARE);
        s.start();
        s.pointer_down(DVec2::new(10.0, 10.0));
        assert_eq!(s.advance(500.0), 8);
        assert!(s.state().is_drawing());
        assert_eq!(s.state().time_ticks, 0);
    }

    #[test]
    fn test_advance_respects_clock() {
        let mut s = session();
        draw(&mut s, &SQUARE);

        assert_eq!(s.advance(1000.0), 0);
        assert_eq!(s.state().time_ticks, 0);

        s.start();
        assert!(s.is_running());
        assert_eq!(s.advance(0.0), 1);
        assert_eq!(s.advance(100.0), 2);
        assert_eq!(s.state().time_ticks, 3);

        s.stop();
        assert_eq!(s.advance(1000.0), 0);
        assert_eq!(s.state().time_ticks, 3);
    }

    #[test]
    fn test_tick_harness_runs_without_clock() {
        let mut s = session();
        draw(&mut s, &SQUARE);
        for _ in 0..50 {
            s.tick();
        }
        assert!(!s.is_running());
        assert_eq!(s.state().time_ticks, 50);
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut s = session();
        assert!(!s.pointer_up());
        assert_eq!(s.state().phase, Phase::Empty);
    }
}
