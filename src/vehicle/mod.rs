pub mod rocket;
pub mod motor;

pub use rocket::{RocketProperties, RocketRecord};
pub use motor::{MotorProperties, MotorRecord};

// ---------------------------------------------------------------------------
// Preset vehicles
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    const LB: f64 = 0.453_592_37; // kg
    const INCH: f64 = 0.0254;     // m
    const FOOT: f64 = 0.3048;     // m

    /// Generic high-power airframe: 27 lb, 6.2 in body, cd 0.5, 12 ft rail.
    pub fn generic_high_power() -> RocketRecord {
        RocketRecord::new("Generic 6.2in")
            .weight(27.0 * LB)
            .body_diameter(6.2 * INCH)
            .cd(0.5)
            .guide_length(12.0 * FOOT)
    }

    /// Generic mid-power airframe: 54 mm motor mount in a 2.6 in body, 6 ft rod.
    pub fn generic_mid_power() -> RocketRecord {
        RocketRecord::new("Generic 2.6in")
            .weight(1.6)
            .body_diameter(2.6 * INCH)
            .cd(0.45)
            .guide_length(6.0 * FOOT)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn presets_are_valid() {
            assert!(generic_high_power().properties().validate());
            assert!(generic_mid_power().properties().validate());
        }

        #[test]
        fn imperial_conversions() {
            let p = generic_high_power().properties();
            assert!((p.dry_mass - 12.247).abs() < 1e-3);
            assert!((p.body_diameter - 0.15748).abs() < 1e-9);
            assert!((p.guide_length - 3.6576).abs() < 1e-9);
        }
    }
}
