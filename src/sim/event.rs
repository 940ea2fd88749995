use serde::Serialize;

use super::state::State;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    Liftoff,
    GuideRailClear,
    StableVelocity,
    Burnout,
    Apogee,
}

/// A discrete event that occurred during simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimEvent {
    pub kind: EventKind,
    pub state: State,
}

/// Passive event detector over consecutive states.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Fires once, the first time the rocket is at or above the top of the
/// launch guide while moving up.
pub struct GuideRailDetector {
    pub guide_length: f64,
    fired: bool,
}

impl GuideRailDetector {
    pub fn new(guide_length: f64) -> Self {
        Self { guide_length, fired: false }
    }
}

impl EventDetector for GuideRailDetector {
    fn check(&mut self, _prev: &State, current: &State) -> Option<EventKind> {
        if self.fired || current.altitude < self.guide_length || current.velocity <= 0.0 {
            return None;
        }
        self.fired = true;
        Some(EventKind::GuideRailClear)
    }
}

/// Fires once, the first time velocity reaches the threshold.
pub struct VelocityDetector {
    pub velocity: f64,
    fired: bool,
}

impl VelocityDetector {
    pub fn new(velocity: f64) -> Self {
        Self { velocity, fired: false }
    }
}

impl EventDetector for VelocityDetector {
    fn check(&mut self, _prev: &State, current: &State) -> Option<EventKind> {
        if self.fired || current.velocity < self.velocity {
            return None;
        }
        self.fired = true;
        Some(EventKind::StableVelocity)
    }
}

/// Detects the top of the climb (velocity going from positive to not).
pub struct ApogeeDetector;

impl EventDetector for ApogeeDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if prev.velocity > 0.0 && current.velocity <= 0.0 {
            Some(EventKind::Apogee)
        } else {
            None
        }
    }
}
