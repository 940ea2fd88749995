use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Integration step sizes
// ---------------------------------------------------------------------------

/// Upper bound on the powered-phase step, s.
pub const POWERED_DT: f64 = 0.01;

/// Minimum number of powered-phase steps across the burn.
pub const MIN_BURN_STEPS: f64 = 100.0;

/// Coast-phase step, s.
pub const COAST_DT: f64 = 0.05;

/// Longest burn the simulator accepts, s.
pub const MAX_BURN_TIME: f64 = 3600.0;

// ---------------------------------------------------------------------------
// 1-D vertical flight state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Motor burning, rocket still held by its own weight.
    Pad,
    Powered,
    Coast,
}

/// One sample of the vertical flight. Altitude is above the pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct State {
    pub time: f64,         // s
    pub altitude: f64,     // m
    pub velocity: f64,     // m/s, positive up
    pub acceleration: f64, // m/s^2
    pub mass: f64,         // kg
    pub phase: Phase,
}

impl State {
    pub fn on_pad(mass: f64) -> Self {
        Self {
            time: 0.0,
            altitude: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            mass,
            phase: Phase::Pad,
        }
    }
}

// ---------------------------------------------------------------------------
// Launch site conditions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConditions {
    pub temperature_c: f64,   // ground air temperature, °C
    pub base_altitude_m: f64, // pad elevation above sea level, m
    /// Speed at which the airframe is considered aerodynamically stable, m/s.
    pub stable_velocity_ms: f64,
}

impl Default for LaunchConditions {
    fn default() -> Self {
        Self {
            temperature_c: 20.0,
            base_altitude_m: 0.0,
            stable_velocity_ms: 15.0,
        }
    }
}
