//! Rocket motor thrust-curve analysis and vertical flight simulation.
//!
//! Raw `(time, thrust)` samples are cleaned by [`curve::normalize`], reduced
//! to standardized figures by [`curve::stats`] and turned into a continuous
//! thrust function by [`curve::fit`]. [`sim::simulate`] flies a rocket on
//! that curve through a simple altitude and temperature dependent
//! atmosphere. Data problems go to a [`report::Reporter`].

pub mod curve;
pub mod error;
pub mod io;
pub mod physics;
pub mod report;
pub mod sim;
pub mod vehicle;

pub use error::{Error, Result};
