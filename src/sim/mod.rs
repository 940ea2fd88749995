pub mod event;
pub mod runner;
pub mod state;
pub mod summary;

pub use event::{EventKind, SimEvent};
pub use runner::{simulate, simulate_rocket, simulate_traced};
pub use state::{LaunchConditions, Phase, State};
pub use summary::{Flight, FlightInputs, FlightSummary, SimInputs};
