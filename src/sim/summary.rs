use serde::Serialize;

use super::event::SimEvent;
use super::state::{LaunchConditions, State};
use crate::vehicle::{MotorProperties, MotorRecord, RocketProperties, RocketRecord};

/// Simulator inputs as supplied; motor figures may be missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightInputs {
    pub rocket: RocketProperties,
    pub motor_initial_mass: Option<f64>,
    pub motor_burnout_mass: Option<f64>,
    /// Catalog total impulse; the curve's own impulse is used when absent.
    pub motor_total_impulse: Option<f64>,
}

impl FlightInputs {
    /// Derive inputs from rocket and motor records using the motor mass
    /// fallback rules.
    pub fn from_records(rocket: &RocketRecord, motor: &MotorRecord) -> Self {
        Self {
            rocket: rocket.properties(),
            motor_initial_mass: motor.initial_mass(),
            motor_burnout_mass: motor.burnout_mass(),
            motor_total_impulse: motor.total_impulse.filter(|v| v.is_finite() && *v > 0.0),
        }
    }
}

/// Fully resolved inputs of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimInputs {
    pub rocket: RocketProperties,
    pub motor: MotorProperties,
    pub conditions: LaunchConditions,
}

impl SimInputs {
    /// Loaded rocket at ignition, kg.
    pub fn launch_mass(&self) -> f64 {
        self.rocket.dry_mass + self.motor.initial_mass
    }

    /// Rocket after the motor is spent, kg. Never heavier than at launch.
    pub fn burnout_mass(&self) -> f64 {
        self.rocket.dry_mass + self.motor.burnout_mass.min(self.motor.initial_mass)
    }
}

/// Key figures of a simulated flight. Altitudes are above the pad.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub inputs: SimInputs,
    /// `None` if thrust never overcame weight.
    pub liftoff_time: Option<f64>,
    pub burnout_time: f64,
    pub burnout_altitude: f64,
    pub apogee_time: f64,
    pub max_altitude: f64,
    /// Velocity leaving the launch guide; `None` if it never cleared it.
    pub guide_velocity: Option<f64>,
    /// Altitude at which the stable velocity was reached.
    pub stable_velocity_distance: Option<f64>,
    pub max_acceleration: f64,
    pub max_velocity: f64,
    /// Sum of thrust over the powered steps, for comparison with the motor's
    /// total impulse.
    pub integrated_impulse: f64,
}

impl FlightSummary {
    /// Relative difference between integrated and catalog impulse.
    pub fn impulse_deviation(&self) -> f64 {
        let expected = self.inputs.motor.total_impulse;
        if expected > 0.0 {
            (self.integrated_impulse - expected).abs() / expected
        } else {
            0.0
        }
    }
}

/// A simulated flight with its full trajectory.
#[derive(Debug, Clone)]
pub struct Flight {
    pub summary: FlightSummary,
    pub trajectory: Vec<State>,
    pub events: Vec<SimEvent>,
}
