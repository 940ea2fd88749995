use log::trace;

use super::point::{AnalysisParameters, DataPoint};
use crate::report::{ErrorCode, Reporter};

/// Clean a raw sample list into a strictly time-ordered thrust curve.
///
/// Invalid samples are dropped, the rest sorted by time, pre-ignition noise
/// at the head removed and samples closer than `time_epsilon` merged into
/// their running mean. Returns `None` if nothing usable remains.
///
/// Normalizing an already normalized curve returns it unchanged.
pub fn normalize(
    points: &[DataPoint],
    params: &AnalysisParameters,
    reporter: &mut dyn Reporter,
) -> Option<Vec<DataPoint>> {
    let mut valid: Vec<DataPoint> = points.iter().filter(|p| p.is_valid()).copied().collect();

    let invalid = points.len() - valid.len();
    if invalid > 0 {
        reporter.report(
            ErrorCode::InvalidPoints,
            &format!("{invalid} invalid data point(s) discarded"),
        );
    }

    for p in valid.iter_mut() {
        p.mass = p.mass.filter(|m| m.is_finite() && *m >= 0.0);
    }
    valid.sort_by(|a, b| a.time.total_cmp(&b.time));

    let head = leading_noise(&valid, params.thrust_epsilon);
    let mut merged: Vec<DataPoint> = Vec::with_capacity(valid.len() - head);
    let mut group = 0usize;
    let mut duplicates = 0usize;

    for p in &valid[head..] {
        match merged.last_mut() {
            Some(prev) if p.time - prev.time < params.time_epsilon => {
                group += 1;
                duplicates += 1;
                prev.thrust += (p.thrust - prev.thrust) / group as f64;
            }
            _ => {
                merged.push(*p);
                group = 1;
            }
        }
    }

    if duplicates > 0 {
        reporter.report(
            ErrorCode::DuplicatePoints,
            &format!("{duplicates} duplicate data point(s) merged"),
        );
    }

    // A merged head can average below the noise floor.
    let head = leading_noise(&merged, params.thrust_epsilon);
    merged.drain(..head);

    trace!(
        "normalized {} raw point(s) into {} ({} invalid, {} merged)",
        points.len(),
        merged.len(),
        invalid,
        duplicates
    );

    if merged.is_empty() {
        None
    } else {
        Some(merged)
    }
}

fn leading_noise(points: &[DataPoint], thrust_epsilon: f64) -> usize {
    points
        .iter()
        .take_while(|p| p.thrust < thrust_epsilon)
        .count()
}
