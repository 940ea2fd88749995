use super::normalize::normalize;
use super::point::{AnalysisParameters, DataPoint};
use super::stats::with_origin;
use crate::report::Reporter;

/// Continuous thrust function over a normalized curve.
///
/// Piecewise linear between breakpoints, ramping from `(0, 0)` to the first
/// sample when that sample is after ignition. Zero before ignition and
/// after the last sample; never extrapolates.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrustCurve {
    time: Vec<f64>,
    thrust: Vec<f64>,
}

/// Fit a thrust function to raw or normalized samples.
pub fn fit(
    points: &[DataPoint],
    params: &AnalysisParameters,
    reporter: &mut dyn Reporter,
) -> Option<ThrustCurve> {
    let points = normalize(points, params, reporter)?;
    let (time, thrust) = with_origin(&points).into_iter().unzip();
    Some(ThrustCurve { time, thrust })
}

impl ThrustCurve {
    /// Instantaneous thrust at `t` seconds after ignition, N.
    pub fn thrust(&self, t: f64) -> f64 {
        let n = self.time.len();
        if !(t >= 0.0 && t <= self.max_time()) {
            return 0.0;
        }
        // index of the last breakpoint at or before t
        let i = self.time.partition_point(|&x| x <= t).saturating_sub(1);
        if i + 1 >= n {
            return self.thrust[n - 1];
        }
        let (t0, t1) = (self.time[i], self.time[i + 1]);
        let (f0, f1) = (self.thrust[i], self.thrust[i + 1]);
        f0 + (f1 - f0) * (t - t0) / (t1 - t0)
    }

    pub fn max_time(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }

    /// Breakpoints as `(time, thrust)` pairs, implicit ignition point included.
    pub fn breakpoints(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.thrust.iter().copied())
    }
}
