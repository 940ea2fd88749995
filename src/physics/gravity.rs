/// Standard gravity at sea level, m/s^2.
pub const G0: f64 = 9.80665;

/// Earth radius used by the inverse-square model, m.
pub const EARTH_RADIUS: f64 = 6.4e6;

/// Inverse-square gravity magnitude at a geometric altitude, m/s^2.
pub fn gravity_accel(altitude: f64) -> f64 {
    let ratio = EARTH_RADIUS / (EARTH_RADIUS + altitude);
    G0 * ratio * ratio
}
