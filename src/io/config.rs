use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::curve::AnalysisParameters;
use crate::error::Result;
use crate::sim::{FlightInputs, LaunchConditions};
use crate::vehicle::{MotorRecord, RocketRecord};

/// Flight file: the rocket, its motor, and optional analysis and launch
/// settings.
///
/// ```toml
/// [launch]
/// temperature_c = 25.0
///
/// [rocket]
/// name = "Generic 2.6in"
/// weight = 1.6
/// body_diameter = 0.066
/// cd = 0.45
/// guide_length = 1.83
///
/// [motor]
/// designation = "K550W"
/// total_weight = 1.487
/// propellant_weight = 0.919
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightConfig {
    #[serde(default)]
    pub analysis: AnalysisParameters,
    #[serde(default)]
    pub launch: LaunchConditions,
    pub rocket: RocketRecord,
    pub motor: MotorRecord,
}

impl FlightConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.analysis.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn inputs(&self) -> FlightInputs {
        FlightInputs::from_records(&self.rocket, &self.motor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const FLIGHT: &str = include_str!("../../data/flight.toml");

    #[test]
    fn sample_flight_file() {
        let c = FlightConfig::from_toml_str(FLIGHT).unwrap();
        assert_eq!(c.rocket.name.as_deref(), Some("Generic 6.2in"));
        assert_eq!(c.motor.designation.as_deref(), Some("N1502"));
        assert_eq!(c.launch.temperature_c, 20.0);
        assert_eq!(c.analysis, AnalysisParameters::default());
        assert!(c.inputs().rocket.validate());
        assert_eq!(c.inputs().motor_burnout_mass, Some(10.567 - 0.522));
    }

    #[test]
    fn optional_tables_default() {
        let c = FlightConfig::from_toml_str(
            "[rocket]\nweight = 2.0\n\n[motor]\npropellant_weight = 0.5\n",
        )
        .unwrap();
        assert_eq!(c.launch, LaunchConditions::default());
        assert_eq!(c.rocket.cd, None);
        assert_eq!(c.motor.initial_mass(), Some(1.0));
    }

    #[test]
    fn missing_motor_table() {
        let err = FlightConfig::from_toml_str("[rocket]\nweight = 2.0\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn bad_cutoff_rejected() {
        let err = FlightConfig::from_toml_str(
            "[analysis]\nburn_time_cutoff = 1.5\n[rocket]\n[motor]\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::BadCutoff(_)));
    }
}
