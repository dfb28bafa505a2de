//! Benchmark utilities for featurekit.
//!
//! Provides deterministic synthetic datasets shaped like housing data so
//! the transformation benchmarks do not depend on files on disk.

pub mod data;

pub use data::{synthetic_housing, NEIGHBORHOODS};
