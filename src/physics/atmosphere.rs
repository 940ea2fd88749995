use super::gravity::gravity_accel;

// ---------------------------------------------------------------------------
// Tropospheric barometric model
// ---------------------------------------------------------------------------

const P0: f64 = 101_325.0;           // sea-level pressure, Pa
const LAPSE_COEFF: f64 = 2.25577e-5; // 1/m
const PRESSURE_EXP: f64 = 5.25588;
const MOLAR_MASS_AIR: f64 = 0.0289644; // kg/mol
const GAS_CONSTANT: f64 = 8.31447;     // J/(mol·K)
const KELVIN: f64 = 273.15;

/// Altitude band the model is valid for, m.
pub const ALTITUDE_RANGE: (f64, f64) = (-60.0, 11_000.0);

/// Ground temperature band the model is valid for, °C.
pub const TEMPERATURE_RANGE: (f64, f64) = (-50.0, 60.0);

/// Local gravity and air density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    pub gravity: f64,     // m/s^2
    pub air_density: f64, // kg/m^3
}

/// Gravity and air density at a geometric altitude for a given air
/// temperature.
///
/// Inputs outside the troposphere band are clamped; the model is only an
/// approximation there.
pub fn atmosphere(altitude_m: f64, temperature_c: f64) -> Atmosphere {
    let h = altitude_m.clamp(ALTITUDE_RANGE.0, ALTITUDE_RANGE.1);
    let t = temperature_c.clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1);

    let pressure = P0 * (1.0 - LAPSE_COEFF * h).powf(PRESSURE_EXP);
    let air_density = pressure * MOLAR_MASS_AIR / (GAS_CONSTANT * (t + KELVIN));

    Atmosphere {
        gravity: gravity_accel(h),
        air_density,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
