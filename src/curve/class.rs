use std::fmt;

use serde::Serialize;

use super::stats::CurveStatistics;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNO";

/// Upper bound of the "A" band, N·s. Each following letter doubles it.
const A_MAX: f64 = 2.5;

/// Motor impulse class (NAR/NFPA letter bands).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImpulseClass {
    /// Fractional "A" classes: 1/8A, 1/4A and 1/2A.
    FractionalA(u8),
    Letter(char),
}

impl fmt::Display for ImpulseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpulseClass::FractionalA(d) => write!(f, "1/{d}A"),
            ImpulseClass::Letter(c) => write!(f, "{c}"),
        }
    }
}

/// Classify a total impulse; `None` for non-positive or beyond "O".
pub fn impulse_class(total_impulse: f64) -> Option<ImpulseClass> {
    if !(total_impulse > 0.0) {
        return None;
    }
    let mut upper = A_MAX / 8.0;
    for d in [8u8, 4, 2] {
        if total_impulse <= upper {
            return Some(ImpulseClass::FractionalA(d));
        }
        upper *= 2.0;
    }
    for &c in LETTERS {
        if total_impulse <= upper {
            return Some(ImpulseClass::Letter(c as char));
        }
        upper *= 2.0;
    }
    None
}

impl CurveStatistics {
    pub fn impulse_class(&self) -> Option<ImpulseClass> {
        impulse_class(self.total_impulse)
    }

    /// Common designation: class followed by average thrust, e.g. `K538`.
    pub fn designation(&self) -> Option<String> {
        self.impulse_class()
            .map(|class| format!("{class}{}", self.avg_thrust.round() as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(impulse_class(0.0), None);
        assert_eq!(impulse_class(-5.0), None);
        assert_eq!(impulse_class(f64::NAN), None);
        assert_eq!(impulse_class(0.3), Some(ImpulseClass::FractionalA(8)));
        assert_eq!(impulse_class(0.625), Some(ImpulseClass::FractionalA(4)));
        assert_eq!(impulse_class(1.0), Some(ImpulseClass::FractionalA(2)));
        assert_eq!(impulse_class(2.5), Some(ImpulseClass::Letter('A')));
        assert_eq!(impulse_class(2.51), Some(ImpulseClass::Letter('B')));
        assert_eq!(impulse_class(40.0), Some(ImpulseClass::Letter('E')));
        assert_eq!(impulse_class(1624.9), Some(ImpulseClass::Letter('K')));
        assert_eq!(impulse_class(10240.0), Some(ImpulseClass::Letter('M')));
        assert_eq!(impulse_class(10339.8), Some(ImpulseClass::Letter('N')));
        assert_eq!(impulse_class(40960.0), Some(ImpulseClass::Letter('O')));
        assert_eq!(impulse_class(40960.1), None);
    }

    #[test]
    fn display() {
        assert_eq!(ImpulseClass::FractionalA(4).to_string(), "1/4A");
        assert_eq!(ImpulseClass::Letter('H').to_string(), "H");
    }
}
