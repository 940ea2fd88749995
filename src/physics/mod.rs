pub mod aerodynamics;
pub mod atmosphere;
pub mod gravity;

pub use atmosphere::{atmosphere, Atmosphere};
