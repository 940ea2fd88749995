use log::debug;

use super::event::{ApogeeDetector, EventDetector, EventKind, GuideRailDetector, SimEvent, VelocityDetector};
use super::state::{LaunchConditions, Phase, State, COAST_DT, MAX_BURN_TIME, MIN_BURN_STEPS, POWERED_DT};
use super::summary::{Flight, FlightInputs, FlightSummary, SimInputs};
use crate::curve::{fit, normalize, stats, AnalysisParameters, DataPoint, ThrustCurve};
use crate::physics::aerodynamics::{drag_factor, drag_force};
use crate::physics::atmosphere;
use crate::report::{ErrorCode, Ignore, Reporter};
use crate::vehicle::{MotorProperties, MotorRecord, RocketRecord};

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Simulate a vertical flight on the given thrust curve.
///
/// Returns `None` (after reporting) if the rocket properties are invalid or
/// the curve cannot be fitted. Missing motor masses are reported and taken
/// as zero.
pub fn simulate(
    inputs: &FlightInputs,
    points: &[DataPoint],
    conditions: &LaunchConditions,
    reporter: &mut dyn Reporter,
) -> Option<FlightSummary> {
    simulate_flight(inputs, points, conditions, reporter, false).map(|f| f.summary)
}

/// Simulate a rocket record flying on a motor record.
pub fn simulate_rocket(
    rocket: &RocketRecord,
    motor: &MotorRecord,
    points: &[DataPoint],
    conditions: &LaunchConditions,
    reporter: &mut dyn Reporter,
) -> Option<FlightSummary> {
    let inputs = FlightInputs::from_records(rocket, motor);
    simulate(&inputs, points, conditions, reporter)
}

/// Like [`simulate`], also returning every integration step and the flight
/// events.
pub fn simulate_traced(
    inputs: &FlightInputs,
    points: &[DataPoint],
    conditions: &LaunchConditions,
    reporter: &mut dyn Reporter,
) -> Option<Flight> {
    simulate_flight(inputs, points, conditions, reporter, true)
}

// ---------------------------------------------------------------------------
// Input resolution
// ---------------------------------------------------------------------------

fn simulate_flight(
    inputs: &FlightInputs,
    points: &[DataPoint],
    conditions: &LaunchConditions,
    reporter: &mut dyn Reporter,
    traced: bool,
) -> Option<Flight> {
    let invalid = inputs.rocket.invalid_fields();
    if !invalid.is_empty() {
        reporter.report(
            ErrorCode::BadRocketInfo,
            &format!("invalid rocket {}", invalid.join(", ")),
        );
        return None;
    }

    let initial_mass = motor_mass(inputs.motor_initial_mass, "initial", reporter);
    let burnout_mass = motor_mass(inputs.motor_burnout_mass, "burnout", reporter);

    let params = AnalysisParameters::default();
    let Some((curve, curve_impulse)) = fit_motor(points, &params, reporter) else {
        reporter.report(ErrorCode::BadMotorData, "motor thrust curve cannot be fitted");
        return None;
    };
    if curve.max_time() > MAX_BURN_TIME {
        reporter.report(
            ErrorCode::BadMotorData,
            &format!("burn time {:.0} s exceeds {:.0} s", curve.max_time(), MAX_BURN_TIME),
        );
        return None;
    }

    let resolved = SimInputs {
        rocket: inputs.rocket,
        motor: MotorProperties {
            initial_mass,
            burnout_mass,
            total_impulse: inputs.motor_total_impulse.unwrap_or(curve_impulse),
        },
        conditions: *conditions,
    };
    Some(integrate(&resolved, &curve, traced))
}

fn motor_mass(value: Option<f64>, which: &str, reporter: &mut dyn Reporter) -> f64 {
    match value.filter(|v| v.is_finite() && *v >= 0.0) {
        Some(v) => v,
        None => {
            reporter.report(
                ErrorCode::BadMotorInfo,
                &format!("motor {which} mass unknown, using 0"),
            );
            0.0
        }
    }
}

/// Fitted curve plus its total impulse; `None` for a curve with no burn.
fn fit_motor(
    points: &[DataPoint],
    params: &AnalysisParameters,
    reporter: &mut dyn Reporter,
) -> Option<(ThrustCurve, f64)> {
    // Normalize once so data warnings are reported once.
    let points = normalize(points, params, reporter)?;
    let curve = fit(&points, params, &mut Ignore)?;
    let curve_stats = stats(&points, params, &mut Ignore)?;
    if !(curve.max_time() > 0.0) {
        return None;
    }
    Some((curve, curve_stats.total_impulse))
}

// ---------------------------------------------------------------------------
// Two-regime integration
// ---------------------------------------------------------------------------

struct Recorder {
    trajectory: Option<Vec<State>>,
    events: Vec<SimEvent>,
}

impl Recorder {
    fn step(&mut self, state: State) {
        if let Some(t) = self.trajectory.as_mut() {
            t.push(state);
        }
    }

    fn event(&mut self, kind: EventKind, state: State) {
        self.events.push(SimEvent { kind, state });
    }

    /// Record `state` as the apogee, replacing an earlier, lower one.
    fn apogee(&mut self, state: State) {
        let known = self
            .events
            .iter()
            .any(|e| e.kind == EventKind::Apogee && e.state == state);
        if !known {
            self.events.retain(|e| e.kind != EventKind::Apogee);
            self.event(EventKind::Apogee, state);
        }
    }
}

fn integrate(inputs: &SimInputs, curve: &ThrustCurve, traced: bool) -> Flight {
    let rocket = &inputs.rocket;
    let conditions = &inputs.conditions;
    let area = rocket.area();

    let burnout_time = curve.max_time();
    let dt = POWERED_DT.min(burnout_time / MIN_BURN_STEPS);
    let steps = (burnout_time / dt - 1e-9).ceil() as usize;

    let launch_mass = inputs.launch_mass();
    let final_mass = inputs.burnout_mass();

    let mut rec = Recorder {
        trajectory: traced.then(|| Vec::with_capacity(steps + 1)),
        events: Vec::new(),
    };
    let mut guide = GuideRailDetector::new(rocket.guide_length);
    let mut stable = VelocityDetector::new(conditions.stable_velocity_ms);

    let mut state = State::on_pad(launch_mass);
    rec.step(state);

    let mut liftoff_time = None;
    let mut guide_velocity = None;
    let mut stable_velocity_distance = None;
    let mut max_acceleration = 0.0_f64;
    let mut max_velocity = 0.0_f64;
    let mut max_altitude = 0.0_f64;
    let mut apogee_time = 0.0;
    let mut apogee_state = state;
    let mut apogee = ApogeeDetector;
    let mut impulse = 0.0;

    // --- Powered ascent ---
    for k in 0..steps {
        let t = k as f64 * dt;
        let mass = launch_mass - (launch_mass - final_mass) * (t / burnout_time);
        let atm = atmosphere(conditions.base_altitude_m + state.altitude, conditions.temperature_c);
        let thrust = curve.thrust(t);
        let drag = drag_force(state.velocity, atm.air_density, area, rocket.cd);

        let mut accel = (thrust - drag) / mass - atm.gravity;
        if liftoff_time.is_none() {
            if accel > 0.0 {
                liftoff_time = Some(t);
                rec.event(EventKind::Liftoff, state);
            } else {
                // held by the pad
                accel = 0.0;
            }
        }

        let velocity = state.velocity + accel * dt;
        let prev = state;
        state = State {
            time: t + dt,
            altitude: state.altitude + velocity * dt,
            velocity,
            acceleration: accel,
            mass,
            phase: if liftoff_time.is_some() { Phase::Powered } else { Phase::Pad },
        };
        impulse += thrust * dt;

        if guide.check(&prev, &state).is_some() {
            guide_velocity = Some(state.velocity);
            rec.event(EventKind::GuideRailClear, state);
        }
        if stable.check(&prev, &state).is_some() {
            stable_velocity_distance = Some(state.altitude);
            rec.event(EventKind::StableVelocity, state);
        }

        max_acceleration = max_acceleration.max(accel);
        max_velocity = max_velocity.max(state.velocity);
        if state.altitude > max_altitude {
            max_altitude = state.altitude;
            apogee_time = state.time;
            apogee_state = state;
        }
        // peak under thrust, e.g. a weak sustainer after a boost
        if apogee.check(&prev, &state).is_some() {
            rec.apogee(apogee_state);
        }
        rec.step(state);
    }

    let burnout_time = steps as f64 * dt;
    let burnout_altitude = state.altitude;
    state.time = burnout_time;
    rec.event(EventKind::Burnout, state);
    debug!(
        "burnout at {:.2} s: altitude {:.1} m, velocity {:.1} m/s",
        burnout_time, burnout_altitude, state.velocity
    );

    // --- Unpowered coast ---
    // Drag uses the density at the pad for the whole coast.
    let pad = atmosphere(conditions.base_altitude_m, conditions.temperature_c);
    let coast_drag = drag_factor(pad.air_density, area, rocket.cd);
    let mut time = burnout_time;

    while state.velocity > 0.0 {
        let g = atmosphere(conditions.base_altitude_m + state.altitude, conditions.temperature_c).gravity;
        let accel = -(state.velocity * state.velocity * coast_drag) / final_mass - g;
        let velocity = state.velocity + accel * COAST_DT;
        time += COAST_DT;

        let prev = state;
        state = State {
            time,
            altitude: state.altitude + velocity * COAST_DT,
            velocity,
            acceleration: accel,
            mass: final_mass,
            phase: Phase::Coast,
        };

        if state.altitude > max_altitude {
            max_altitude = state.altitude;
            apogee_time = time;
            apogee_state = state;
        }
        if apogee.check(&prev, &state).is_some() {
            rec.apogee(apogee_state);
        }
        rec.step(state);
    }

    debug!("apogee at {:.2} s: altitude {:.1} m", apogee_time, max_altitude);
    rec.events.sort_by(|a, b| a.state.time.total_cmp(&b.state.time));

    let summary = FlightSummary {
        inputs: *inputs,
        liftoff_time,
        burnout_time,
        burnout_altitude,
        apogee_time,
        max_altitude,
        guide_velocity,
        stable_velocity_distance,
        max_acceleration,
        max_velocity,
        integrated_impulse: impulse,
    };

    Flight {
        summary,
        trajectory: rec.trajectory.unwrap_or_default(),
        events: rec.events,
    }
}
