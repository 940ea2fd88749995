use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::curve::CurveStatistics;
use crate::error::Result;
use crate::sim::FlightSummary;

/// Everything the CLI reports about one simulated flight.
#[derive(Debug, Clone, Serialize)]
pub struct FlightReport<'a> {
    pub rocket: Option<&'a str>,
    pub motor: Option<&'a str>,
    /// Class and average thrust derived from the curve, e.g. `N1502`.
    pub designation: Option<String>,
    pub statistics: &'a CurveStatistics,
    pub summary: &'a FlightSummary,
}

/// Write any serializable value as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Write flight report JSON to a writer.
pub fn write_summary<W: Write>(writer: W, report: &FlightReport<'_>) -> Result<()> {
    write_json(writer, report)
}

/// Write flight report JSON to a file.
pub fn write_summary_file(path: impl AsRef<Path>, report: &FlightReport<'_>) -> Result<()> {
    write_summary(File::create(path)?, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{stats, AnalysisParameters};
    use crate::io::csv::read_points;
    use crate::report::Ignore;
    use crate::sim::{simulate_rocket, LaunchConditions};
    use crate::vehicle::{presets, MotorRecord};
    use serde_json::Value;

    #[test]
    fn json_output_is_valid() {
        let pts = read_points(include_str!("../../data/k550w.csv").as_bytes()).unwrap();
        let statistics = stats(&pts, &AnalysisParameters::default(), &mut Ignore).unwrap();
        let rocket = presets::generic_mid_power();
        let motor = MotorRecord::new("K550W").total_weight(1.487).propellant_weight(0.919);
        let summary =
            simulate_rocket(&rocket, &motor, &pts, &LaunchConditions::default(), &mut Ignore).unwrap();

        let report = FlightReport {
            rocket: rocket.name.as_deref(),
            motor: motor.designation.as_deref(),
            designation: statistics.designation(),
            statistics: &statistics,
            summary: &summary,
        };

        let mut buf = Vec::new();
        write_summary(&mut buf, &report).unwrap();
        let json: Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json["motor"], "K550W");
        assert_eq!(json["designation"], "K538");
        assert_eq!(json["statistics"]["point_count"], 26);
        assert!(json["summary"]["max_altitude"].as_f64().unwrap() > 3000.0);
        assert_eq!(json["summary"]["inputs"]["conditions"]["temperature_c"], 20.0);
    }

    #[test]
    fn missing_values_are_null() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[None, Some(1.5)]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().split_whitespace().collect::<String>(), "[null,1.5]");
    }
}
