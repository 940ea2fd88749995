use serde::{Deserialize, Serialize};

use crate::physics::aerodynamics::reference_area;

// ---------------------------------------------------------------------------
// Rocket record (as stored by the caller, every field optional)
// ---------------------------------------------------------------------------

/// A rocket as entered by a user. All quantities MKS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketRecord {
    pub name: Option<String>,
    pub weight: Option<f64>,        // kg, dry (no motor)
    pub body_diameter: Option<f64>, // m
    pub cd: Option<f64>,
    pub guide_length: Option<f64>, // m, launch rail/rod length
}

impl RocketRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn weight(mut self, v: f64) -> Self { self.weight = Some(v); self }
    pub fn body_diameter(mut self, v: f64) -> Self { self.body_diameter = Some(v); self }
    pub fn cd(mut self, v: f64) -> Self { self.cd = Some(v); self }
    pub fn guide_length(mut self, v: f64) -> Self { self.guide_length = Some(v); self }

    /// Resolved physical properties; missing fields become NaN and fail
    /// [`RocketProperties::validate`].
    pub fn properties(&self) -> RocketProperties {
        RocketProperties {
            dry_mass: self.weight.unwrap_or(f64::NAN),
            body_diameter: self.body_diameter.unwrap_or(f64::NAN),
            cd: self.cd.unwrap_or(f64::NAN),
            guide_length: self.guide_length.unwrap_or(f64::NAN),
        }
    }
}

// ---------------------------------------------------------------------------
// Rocket physical properties
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocketProperties {
    pub dry_mass: f64,      // kg
    pub body_diameter: f64, // m
    pub cd: f64,
    pub guide_length: f64, // m
}

impl RocketProperties {
    /// Names of the properties that are not finite and positive.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("dry mass", self.dry_mass),
            ("body diameter", self.body_diameter),
            ("drag coefficient", self.cd),
            ("guide length", self.guide_length),
        ]
        .into_iter()
        .filter(|(_, v)| !(v.is_finite() && *v > 0.0))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> bool {
        self.invalid_fields().is_empty()
    }

    pub fn area(&self) -> f64 {
        reference_area(self.body_diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_record_validates() {
        let p = RocketRecord::new("Test")
            .weight(1.2)
            .body_diameter(0.066)
            .cd(0.45)
            .guide_length(1.8)
            .properties();
        assert!(p.validate());
        assert_eq!(p.dry_mass, 1.2);
    }

    #[test]
    fn missing_and_non_positive_fields_are_named() {
        let p = RocketRecord::new("Broken")
            .weight(0.0)
            .body_diameter(0.066)
            .cd(-0.3)
            .properties();
        assert!(!p.validate());
        assert_eq!(p.invalid_fields(), vec!["dry mass", "drag coefficient", "guide length"]);
    }

    #[test]
    fn deserializes_partial_toml() {
        let r: RocketRecord = toml::from_str("weight = 2.5\ncd = 0.5").unwrap();
        assert_eq!(r.weight, Some(2.5));
        assert_eq!(r.body_diameter, None);
        assert!(!r.properties().validate());
    }
}
