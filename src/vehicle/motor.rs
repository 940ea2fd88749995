use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Motor record (catalog metadata)
// ---------------------------------------------------------------------------

/// Motor catalog entry. Weights in kg, impulse in N·s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorRecord {
    pub designation: Option<String>,
    pub total_weight: Option<f64>,
    pub propellant_weight: Option<f64>,
    pub total_impulse: Option<f64>,
}

impl MotorRecord {
    pub fn new(designation: impl Into<String>) -> Self {
        Self {
            designation: Some(designation.into()),
            ..Default::default()
        }
    }

    pub fn total_weight(mut self, v: f64) -> Self { self.total_weight = Some(v); self }
    pub fn propellant_weight(mut self, v: f64) -> Self { self.propellant_weight = Some(v); self }
    pub fn total_impulse(mut self, v: f64) -> Self { self.total_impulse = Some(v); self }

    /// Loaded motor mass: the total weight, else twice the propellant.
    pub fn initial_mass(&self) -> Option<f64> {
        positive(self.total_weight).or_else(|| positive(self.propellant_weight).map(|p| 2.0 * p))
    }

    /// Spent motor mass: total minus propellant, else half the total, else
    /// the propellant weight as a stand-in for the casing.
    pub fn burnout_mass(&self) -> Option<f64> {
        match (positive(self.total_weight), positive(self.propellant_weight)) {
            (Some(total), Some(prop)) => Some(total - prop),
            (Some(total), None) => Some(total / 2.0),
            (None, Some(prop)) => Some(prop),
            (None, None) => None,
        }
    }
}

fn positive(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite() && *v > 0.0)
}

// ---------------------------------------------------------------------------
// Motor physical properties
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotorProperties {
    pub initial_mass: f64,  // kg
    pub burnout_mass: f64,  // kg
    pub total_impulse: f64, // N·s
}

impl MotorProperties {
    /// Mass expelled during the burn; zero if the figures are inverted.
    pub fn mass_loss(&self) -> f64 {
        (self.initial_mass - self.burnout_mass).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_weights_known() {
        let m = MotorRecord::new("K550W").total_weight(1.487).propellant_weight(0.919);
        assert_eq!(m.initial_mass(), Some(1.487));
        assert!((m.burnout_mass().unwrap() - 0.568).abs() < 1e-12);
    }

    #[test]
    fn only_total_weight() {
        let m = MotorRecord::new("X").total_weight(2.0);
        assert_eq!(m.initial_mass(), Some(2.0));
        assert_eq!(m.burnout_mass(), Some(1.0));
    }

    #[test]
    fn only_propellant_weight() {
        let m = MotorRecord::new("X").propellant_weight(0.5);
        assert_eq!(m.initial_mass(), Some(1.0));
        assert_eq!(m.burnout_mass(), Some(0.5));
    }

    #[test]
    fn nothing_known() {
        let m = MotorRecord::new("X").total_weight(0.0);
        assert_eq!(m.initial_mass(), None);
        assert_eq!(m.burnout_mass(), None);
    }

    #[test]
    fn mass_loss_never_negative() {
        let p = MotorProperties {
            initial_mass: 1.0,
            burnout_mass: 1.5,
            total_impulse: 100.0,
        };
        assert_eq!(p.mass_loss(), 0.0);
    }
}
