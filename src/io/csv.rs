use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, Writer};

use crate::curve::DataPoint;
use crate::error::{Error, Result};
use crate::sim::State;

/// Read a thrust curve from CSV.
///
/// Expects a header naming `time` and `thrust` columns, with an optional
/// `mass` column. Lines starting with `#` are skipped. Blank or unparsable
/// cells become NaN so the normalizer can report and drop them.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<DataPoint>> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    };
    let (Some(time), Some(thrust)) = (column("time"), column("thrust")) else {
        return Err(Error::MissingColumns(headers.iter().collect::<Vec<_>>().join(",")));
    };
    let mass = column("mass");

    let mut points = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let mut point = DataPoint::new(cell(&record, time), cell(&record, thrust));
        if let Some(m) = mass.map(|i| cell(&record, i)).filter(|m| !m.is_nan()) {
            point = point.with_mass(m);
        }
        points.push(point);
    }
    Ok(points)
}

pub fn read_points_file(path: impl AsRef<Path>) -> Result<Vec<DataPoint>> {
    read_points(File::open(path)?)
}

fn cell(record: &StringRecord, index: usize) -> f64 {
    record
        .get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(f64::NAN)
}

/// Write a flight trajectory to CSV.
///
/// Columns: time, altitude, velocity, acceleration, mass, phase
pub fn write_trajectory<W: Write>(writer: W, trajectory: &[State]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for s in trajectory {
        wtr.serialize(s)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, trajectory: &[State]) -> Result<()> {
    write_trajectory(File::create(path)?, trajectory)
}
