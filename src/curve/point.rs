use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Thrust curve sample
// ---------------------------------------------------------------------------

/// One `(time, thrust)` sample of a motor's thrust curve, MKS units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: f64,   // s
    pub thrust: f64, // N
    /// Motor mass at this sample, kg, when the source file carries it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
}

impl DataPoint {
    pub fn new(time: f64, thrust: f64) -> Self {
        Self {
            time,
            thrust,
            mass: None,
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.time.is_finite() && self.time >= 0.0 && self.thrust.is_finite() && self.thrust >= 0.0
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((time, thrust): (f64, f64)) -> Self {
        DataPoint::new(time, thrust)
    }
}

/// Build a point list from `(time, thrust)` pairs.
pub fn points(pairs: &[(f64, f64)]) -> Vec<DataPoint> {
    pairs.iter().copied().map(DataPoint::from).collect()
}

// ---------------------------------------------------------------------------
// Analysis parameters
// ---------------------------------------------------------------------------

/// Tuning knobs for curve cleanup and the standardized burn window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisParameters {
    /// Fraction of peak thrust that bounds the burn window (NFPA uses 5%).
    pub burn_time_cutoff: f64,
    /// Samples closer than this in time are merged, s.
    pub time_epsilon: f64,
    /// Leading samples weaker than this are pre-ignition noise, N.
    pub thrust_epsilon: f64,
}

impl Default for AnalysisParameters {
    fn default() -> Self {
        Self {
            burn_time_cutoff: 0.05,
            time_epsilon: 5e-5,
            thrust_epsilon: 5e-4,
        }
    }
}

impl AnalysisParameters {
    pub fn validate(&self) -> Result<()> {
        if self.burn_time_cutoff > 0.0 && self.burn_time_cutoff < 1.0 {
            Ok(())
        } else {
            Err(Error::BadCutoff(self.burn_time_cutoff))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_nfpa_convention() {
        let p = AnalysisParameters::default();
        assert_eq!(p.burn_time_cutoff, 0.05);
        assert_eq!(p.time_epsilon, 5e-5);
        assert_eq!(p.thrust_epsilon, 5e-4);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn cutoff_must_be_a_fraction() {
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let p = AnalysisParameters {
                burn_time_cutoff: bad,
                ..Default::default()
            };
            assert!(matches!(p.validate(), Err(Error::BadCutoff(_))), "cutoff {bad}");
        }
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let p: AnalysisParameters = toml::from_str("burn_time_cutoff = 0.1").unwrap();
        assert_eq!(p.burn_time_cutoff, 0.1);
        assert_eq!(p.time_epsilon, 5e-5);
    }

    #[test]
    fn validity_rejects_negative_and_non_finite() {
        assert!(DataPoint::new(0.0, 0.0).is_valid());
        assert!(!DataPoint::new(-0.1, 10.0).is_valid());
        assert!(!DataPoint::new(0.1, -10.0).is_valid());
        assert!(!DataPoint::new(f64::NAN, 10.0).is_valid());
        assert!(!DataPoint::new(0.1, f64::INFINITY).is_valid());
    }
}
