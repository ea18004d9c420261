//! Physics and timing settings
//!
//! Every constant the simulation uses lives here so it can be tuned without a
//! rebuild. Defaults come from [`crate::consts`]; a JSON override only needs
//! the keys it changes. Persisted in LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Tunable simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Forces ===
    /// Ice density relative to water (0-1 floats)
    pub specific_gravity: f64,
    /// Per-tick downward acceleration
    pub gravity: f64,
    /// Max pull of the buoyancy point toward the full centroid
    pub centroid_blend: f64,
    /// Divides torque into angular acceleration
    pub torque_scale: f64,

    // === Damping ===
    pub damping_air: f64,
    pub damping_water: f64,
    /// Extra angular damping on top of the linear blend
    pub angular_damping_offset: f64,

    // === Boundary ===
    /// Push per surface-width of overshoot
    pub boundary_gain: f64,

    // === Melting ===
    pub melt_air: f64,
    pub melt_water: f64,

    // === Timing ===
    /// Milliseconds between ticks
    pub tick_interval_ms: f64,
    /// Most ticks run to catch up after a stall
    pub max_substeps: u32,

    // === Layout ===
    /// Waterline position as a fraction of surface height
    pub water_level_fraction: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            specific_gravity: SPECIFIC_GRAVITY,
            gravity: GRAVITY,
            centroid_blend: CENTROID_BLEND,
            torque_scale: TORQUE_SCALE,

            damping_air: DAMPING_AIR,
            damping_water: DAMPING_WATER,
            angular_damping_offset: ANGULAR_DAMPING_OFFSET,

            boundary_gain: BOUNDARY_GAIN,

            melt_air: MELT_AIR,
            melt_water: MELT_WATER,

            tick_interval_ms: TICK_INTERVAL_MS,
            max_substeps: MAX_SUBSTEPS,

            water_level_fraction: WATER_LEVEL_FRACTION,
        }
    }
}

/// Returns an error unless `min < value < max`
fn check_open(
    name: &'static str,
    value: f64,
    min: f64,
    max: f64,
    safe_range: &'static str,
) -> SimResult<()> {
    if value > min && value < max {
        Ok(())
    } else {
        Err(SimError::UnsafeSetting {
            name,
            value,
            safe_range,
        })
    }
}

impl Settings {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> SimResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that make the simulation blow up or freeze.
    ///
    /// Damping and melt factors at or above 1 let energy or size grow without
    /// bound; a non-positive specific gravity divides by zero.
    pub fn validate(&self) -> SimResult<()> {
        check_open("specific_gravity", self.specific_gravity, 0.0, f64::INFINITY, "(0.0, ∞)")?;
        check_open("gravity", self.gravity, 0.0, f64::INFINITY, "(0.0, ∞)")?;
        check_open("torque_scale", self.torque_scale, 0.0, f64::INFINITY, "(0.0, ∞)")?;
        check_open("damping_air", self.damping_air, 0.0, 1.0, "(0.0, 1.0)")?;
        check_open("damping_water", self.damping_water, 0.0, 1.0, "(0.0, 1.0)")?;
        check_open("melt_air", self.melt_air, 0.0, 1.0 + f64::EPSILON, "(0.0, 1.0]")?;
        check_open("melt_water", self.melt_water, 0.0, 1.0 + f64::EPSILON, "(0.0, 1.0]")?;
        check_open("tick_interval_ms", self.tick_interval_ms, 0.0, f64::INFINITY, "(0.0, ∞)")?;
        check_open(
            "water_level_fraction",
            self.water_level_fraction,
            0.0,
            1.0,
            "(0.0, 1.0)",
        )?;
        if !(0.0..=1.0).contains(&self.centroid_blend) {
            return Err(SimError::UnsafeSetting {
                name: "centroid_blend",
                value: self.centroid_blend,
                safe_range: "[0.0, 1.0]",
            });
        }
        if !(0.0..1.0).contains(&self.angular_damping_offset) {
            return Err(SimError::UnsafeSetting {
                name: "angular_damping_offset",
                value: self.angular_damping_offset,
                safe_range: "[0.0, 1.0)",
            });
        }
        if self.boundary_gain < 0.0 || !self.boundary_gain.is_finite() {
            return Err(SimError::UnsafeSetting {
                name: "boundary_gain",
                value: self.boundary_gain,
                safe_range: "[0.0, ∞)",
            });
        }
        if self.max_substeps == 0 {
            return Err(SimError::UnsafeSetting {
                name: "max_substeps",
                value: 0.0,
                safe_range: "[1, ∞)",
            });
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "iceberg_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Self {
        let loaded = std::fs::read_to_string(path)
            .map_err(|e| SimError::SettingsParse(e.to_string()))
            .and_then(|json| Self::from_json(&json));
        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }
}
