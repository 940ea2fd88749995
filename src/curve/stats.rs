use serde::Serialize;

use super::normalize::normalize;
use super::point::{AnalysisParameters, DataPoint};
use crate::report::Reporter;

/// Standardized performance figures of one thrust curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveStatistics {
    pub point_count: usize,
    pub params: AnalysisParameters,
    pub max_thrust: f64,    // N
    pub max_time: f64,      // s
    pub avg_thrust: f64,    // N, over the burn window
    pub burn_start: f64,    // s
    pub burn_end: f64,      // s
    pub burn_time: f64,     // s
    pub total_impulse: f64, // N·s
}

/// Compute curve statistics from raw or already normalized samples.
///
/// The burn window is bounded by the interpolated crossings of
/// `max_thrust * burn_time_cutoff`, which stays stable across different
/// samplings of the same physical curve.
pub fn stats(
    points: &[DataPoint],
    params: &AnalysisParameters,
    reporter: &mut dyn Reporter,
) -> Option<CurveStatistics> {
    let points = normalize(points, params, reporter)?;

    let max_thrust = points.iter().map(|p| p.thrust).fold(0.0_f64, f64::max);
    let max_time = points.iter().map(|p| p.time).fold(0.0_f64, f64::max);

    let samples = with_origin(&points);
    let cutoff = max_thrust * params.burn_time_cutoff;
    // Each end falls back on its own: a curve that starts above the cutoff
    // still has a tail-off crossing.
    let start = rise_crossing(&samples, cutoff).unwrap_or(0.0);
    let end = fall_crossing(&samples, cutoff).unwrap_or(max_time);
    let (burn_start, burn_end) = if end > start { (start, end) } else { (0.0, max_time) };
    let burn_time = burn_end - burn_start;

    let total_impulse = trapezoid(&samples);
    let avg_thrust = if burn_time > 0.0 {
        total_impulse / burn_time
    } else {
        0.0
    };

    Some(CurveStatistics {
        point_count: points.len(),
        params: *params,
        max_thrust,
        max_time,
        avg_thrust,
        burn_start,
        burn_end,
        burn_time,
        total_impulse,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `(time, thrust)` pairs with the implicit ignition point prepended.
pub(crate) fn with_origin(points: &[DataPoint]) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(points.len() + 1);
    if points.first().is_some_and(|p| p.time > 0.0) {
        out.push((0.0, 0.0));
    }
    out.extend(points.iter().map(|p| (p.time, p.thrust)));
    out
}

/// First crossing from below `cutoff` to at/above it.
fn rise_crossing(samples: &[(f64, f64)], cutoff: f64) -> Option<f64> {
    samples
        .windows(2)
        .find(|w| w[0].1 < cutoff && w[1].1 >= cutoff)
        .map(|w| lerp_time(w[0], w[1], cutoff))
}

/// Last crossing from at/above `cutoff` to below it.
fn fall_crossing(samples: &[(f64, f64)], cutoff: f64) -> Option<f64> {
    samples
        .windows(2)
        .rev()
        .find(|w| w[0].1 >= cutoff && w[1].1 < cutoff)
        .map(|w| lerp_time(w[0], w[1], cutoff))
}

fn lerp_time((t0, f0): (f64, f64), (t1, f1): (f64, f64), level: f64) -> f64 {
    t0 + (t1 - t0) * (level - f0) / (f1 - f0)
}

fn trapezoid(samples: &[(f64, f64)]) -> f64 {
    samples
        .windows(2)
        .map(|w| 0.5 * (w[0].1 + w[1].1) * (w[1].0 - w[0].0))
        .sum()
}
