use std::f64::consts::PI;

/// Frontal reference area of a round body tube, m^2.
pub fn reference_area(body_diameter: f64) -> f64 {
    let r = body_diameter / 2.0;
    PI * r * r
}

/// Drag coefficient folded with density and area: `0.5 * rho * A * cd`.
///
/// Multiplying by `v^2` gives the drag force in newtons.
pub fn drag_factor(air_density: f64, area: f64, cd: f64) -> f64 {
    0.5 * air_density * area * cd
}

/// Quadratic drag magnitude opposing the motion, N.
pub fn drag_force(velocity: f64, air_density: f64, area: f64, cd: f64) -> f64 {
    velocity * velocity * drag_factor(air_density, area, cd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn area_of_a_54mm_tube() {
        assert_relative_eq!(reference_area(0.054), 0.002_290_2, epsilon = 1e-7);
    }

    #[test]
    fn no_drag_at_rest() {
        assert_eq!(drag_force(0.0, 1.225, 0.01, 0.5), 0.0);
    }

    #[test]
    fn drag_scales_with_velocity_squared() {
        let f1 = drag_force(100.0, 1.2, 0.02, 0.5);
        let f2 = drag_force(200.0, 1.2, 0.02, 0.5);
        assert_relative_eq!(f2 / f1, 4.0, epsilon = 1e-12);
        assert_relative_eq!(f1, 100.0 * 100.0 * 0.5 * 1.2 * 0.02 * 0.5, epsilon = 1e-9);
    }
}
