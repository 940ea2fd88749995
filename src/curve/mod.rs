pub mod point;
pub mod normalize;
pub mod stats;
pub mod fit;
pub mod class;

pub use point::{points, AnalysisParameters, DataPoint};
pub use normalize::normalize;
pub use stats::{stats, CurveStatistics};
pub use fit::{fit, ThrustCurve};
pub use class::{impulse_class, ImpulseClass};
