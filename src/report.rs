use std::fmt;

use serde::Serialize;

use crate::error::Error;

// ---------------------------------------------------------------------------
// Diagnostic codes
// ---------------------------------------------------------------------------

/// Codes reported through a [`Reporter`].
///
/// Codes below 200 are data-quality warnings on the thrust curve itself,
/// codes from 200 concern the rocket/motor inputs of a flight simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    InvalidPoints,
    DuplicatePoints,
    BadRocketInfo,
    BadMotorInfo,
    BadMotorData,
}

impl ErrorCode {
    pub fn code(self) -> u16 {
        match self {
            ErrorCode::InvalidPoints => 105,
            ErrorCode::DuplicatePoints => 106,
            ErrorCode::BadRocketInfo => 201,
            ErrorCode::BadMotorInfo => 202,
            ErrorCode::BadMotorData => 203,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::InvalidPoints => "INVALID_POINTS",
            ErrorCode::DuplicatePoints => "DUPLICATE_POINTS",
            ErrorCode::BadRocketInfo => "BAD_ROCKET_INFO",
            ErrorCode::BadMotorInfo => "BAD_MOTOR_INFO",
            ErrorCode::BadMotorData => "BAD_MOTOR_DATA",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// ---------------------------------------------------------------------------
// Reporter seam
// ---------------------------------------------------------------------------

/// Sink for non-fatal warnings and fatal input problems.
///
/// Computations never abort because of a report; they signal fatal problems
/// by returning `None` and use the reporter purely for diagnostics.
pub trait Reporter {
    fn report(&mut self, code: ErrorCode, message: &str);
}

impl<F> Reporter for F
where
    F: FnMut(ErrorCode, &str),
{
    fn report(&mut self, code: ErrorCode, message: &str) {
        self(code, message)
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl Reporter for Ignore {
    fn report(&mut self, _code: ErrorCode, _message: &str) {}
}

/// Forwards every report to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, code: ErrorCode, message: &str) {
        log::warn!("{code}: {message}");
    }
}

// ---------------------------------------------------------------------------
// Collector
// ---------------------------------------------------------------------------

/// Append-only record of everything reported to it.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn last(&self) -> Option<&Diagnostic> {
        self.diagnostics.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// True if at least one diagnostic with this code was reported.
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    /// Turn the first collected diagnostic into a hard error.
    pub fn into_result(self) -> Result<(), Error> {
        match self.diagnostics.into_iter().next() {
            Some(d) => Err(Error::Reported(d)),
            None => Ok(()),
        }
    }
}

impl Reporter for Collector {
    fn report(&mut self, code: ErrorCode, message: &str) {
        self.diagnostics.push(Diagnostic {
            code,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_published_numbers() {
        assert_eq!(ErrorCode::InvalidPoints.code(), 105);
        assert_eq!(ErrorCode::DuplicatePoints.code(), 106);
        assert_eq!(ErrorCode::BadRocketInfo.code(), 201);
        assert_eq!(ErrorCode::BadMotorInfo.code(), 202);
        assert_eq!(ErrorCode::BadMotorData.code(), 203);
    }

    #[test]
    fn collector_tracks_reports_in_order() {
        let mut c = Collector::new();
        assert!(!c.has_errors());
        assert!(c.last().is_none());

        c.report(ErrorCode::InvalidPoints, "2 invalid points");
        c.report(ErrorCode::DuplicatePoints, "1 duplicate point");

        assert!(c.has_errors());
        assert_eq!(c.count(), 2);
        assert_eq!(c.last().unwrap().code, ErrorCode::DuplicatePoints);
        assert!(c.contains(ErrorCode::InvalidPoints));
        assert!(!c.contains(ErrorCode::BadRocketInfo));
    }

    #[test]
    fn collector_into_result_fails_on_first() {
        let mut c = Collector::new();
        c.report(ErrorCode::BadMotorInfo, "missing mass");
        c.report(ErrorCode::BadRocketInfo, "bad cd");
        match c.into_result() {
            Err(Error::Reported(d)) => assert_eq!(d.code, ErrorCode::BadMotorInfo),
            other => panic!("expected reported error, got {:?}", other),
        }
        assert!(Collector::new().into_result().is_ok());
    }

    #[test]
    fn closures_are_reporters() {
        let mut seen = Vec::new();
        {
            let mut sink = |code: ErrorCode, msg: &str| seen.push((code.code(), msg.to_string()));
            sink.report(ErrorCode::BadMotorData, "no points");
        }
        assert_eq!(seen, vec![(203, "no points".to_string())]);
    }
}
