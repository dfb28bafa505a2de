//! Feature transformations for tabular datasets.
//!
//! Every strategy implements [`Transformation`]: it takes a [`Dataset`] and
//! returns a transformed copy. [`FeatureEngineer`] holds one active strategy
//! and can swap it at runtime without changing call sites.
//!
//! # Design Philosophy
//!
//! - **Copy-on-write**: inputs are never mutated; an error means no output
//! - **Fit per call**: scalers and encoders learn their statistics from the
//!   dataset they are applied to, nothing is remembered between calls
//! - **Explicit failures**: log of values `<= -1`, zero-variance and
//!   zero-range columns are errors rather than NaN or infinity
//!
//! # Available Strategies
//!
//! - [`LogTransformation`]: `ln(1 + x)`
//! - [`StandardScaling`]: Z-score normalization
//! - [`MinMaxScaling`]: Scale to `[0, 1]` or a custom range
//! - [`OneHotEncoding`]: Drop-first indicator columns
//! - [`Pipeline`]: Chain strategies together
//!
//! # Example
//!
//! ```rust
//! use featurekit::dataset::Dataset;
//! use featurekit::preprocessing::{FeatureEngineer, OneHotEncoding, StandardScaling};
//!
//! let data = Dataset::builder()
//!     .numeric("Gr Liv Area", [1710.0, 1262.0, 1786.0])
//!     .categorical("Neighborhood", ["CollgCr", "Veenker", "CollgCr"])
//!     .build()?;
//!
//! let mut engineer = FeatureEngineer::new(StandardScaling::new(["Gr Liv Area"])?);
//! let scaled = engineer.apply(&data)?;
//!
//! engineer.set_strategy(OneHotEncoding::new(["Neighborhood"])?);
//! let encoded = engineer.apply(&scaled)?;
//! assert_eq!(encoded.column_names(), &["Gr Liv Area", "Neighborhood_Veenker"]);
//! # Ok::<(), featurekit::preprocessing::PreprocessingError>(())
//! ```

pub mod config;
pub mod encoding;
pub mod engineer;
pub mod error;
pub mod feature_engineering;
pub mod features;
pub mod pipeline;
pub mod scaling;
pub mod traits;

// Re-export main types
pub use config::TransformationConfig;
pub use encoding::{FittedOneHotEncoder, HandleUnknown, OneHotEncoding};
pub use engineer::FeatureEngineer;
pub use error::{PreprocessingError, Result};
pub use feature_engineering::LogTransformation;
pub use features::FeatureSelector;
pub use pipeline::Pipeline;
pub use scaling::{
    FeatureRange, FittedMinMaxScaler, FittedStandardScaler, MinMaxScaling, StandardScaling,
};
pub use traits::{Fit, FittedTransform, Transformation};
