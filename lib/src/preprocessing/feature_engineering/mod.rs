//! Feature engineering transformations.
//!
//! Stateless, value-wise transformations that reshape feature distributions
//! without learning parameters from the data.

mod log;

pub use log::LogTransformation;
