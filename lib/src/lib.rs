//! # featurekit
//!
//! Configurable feature transformations for named-column tabular datasets.
//!
//! ## Core Design Principles
//!
//! - **Strategy dispatch**: log transform, standard scaling, min-max scaling and
//!   one-hot encoding share one [`Transformation`](preprocessing::Transformation)
//!   trait and are interchangeable behind a
//!   [`FeatureEngineer`](preprocessing::FeatureEngineer).
//! - **Immutable inputs**: every transformation returns a new [`Dataset`].
//! - **Typed errors**: missing columns, out-of-domain values and degenerate
//!   columns surface as [`PreprocessingError`](preprocessing::PreprocessingError).
//!
//! ## Quick Start
//!
//! ```rust
//! use featurekit::Dataset;
//! use featurekit::preprocessing::{FeatureEngineer, LogTransformation, MinMaxScaling};
//!
//! let data = Dataset::builder()
//!     .numeric("SalePrice", [129_900.0, 208_500.0, 755_000.0])
//!     .build()
//!     .unwrap();
//!
//! let mut engineer = FeatureEngineer::new(LogTransformation::new(["SalePrice"]).unwrap());
//! let logged = engineer.apply(&data).unwrap();
//!
//! engineer.set_strategy(MinMaxScaling::with_range(["SalePrice"], (0.0, 1.0)).unwrap());
//! let scaled = engineer.apply(&logged).unwrap();
//! assert_eq!(scaled.numeric("SalePrice").unwrap()[2], 1.0);
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: In-memory tabular data and CSV loading
//! - `preprocessing`: Transformation strategies, dispatcher, pipeline and configuration

/// In-memory tabular datasets.
pub mod dataset;

/// Feature transformation strategies.
pub mod preprocessing;

pub use dataset::{Column, ColumnKind, Dataset};
