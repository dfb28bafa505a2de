//! Scaling transformations for numeric features.
//!
//! | Strategy | Description |
//! |----------|-------------|
//! | [`StandardScaling`] | Z-score normalization (mean=0, std=1) |
//! | [`MinMaxScaling`] | Scale to `[0, 1]` or a custom range |
//!
//! Both learn their statistics from the dataset they are applied to. A column
//! without spread (all values equal) cannot be scaled and is reported as
//! [`PreprocessingError::DegenerateColumn`].
//!
//! # Example
//!
//! ```rust
//! use featurekit::dataset::Dataset;
//! use featurekit::preprocessing::{Fit, FittedTransform, StandardScaling};
//!
//! let data = Dataset::builder()
//!     .numeric("Gr Liv Area", [1000.0, 2000.0, 3000.0])
//!     .build()
//!     .unwrap();
//!
//! let fitted = StandardScaling::new(["Gr Liv Area"]).unwrap().fit(&data).unwrap();
//! assert_eq!(fitted.mean()[0], 2000.0);
//!
//! let scaled = fitted.transform(&data).unwrap();
//! assert_eq!(scaled.numeric("Gr Liv Area").unwrap()[1], 0.0);
//! ```

pub mod minmax;
pub mod standard;

pub use minmax::{FeatureRange, FittedMinMaxScaler, MinMaxScaling};
pub use standard::{FittedStandardScaler, StandardScaling};

use crate::dataset::Dataset;
use crate::preprocessing::error::{PreprocessingError, Result};
use ndarray::Array1;

/// Numeric column whose values are all finite.
pub(crate) fn finite_column<'a>(data: &'a Dataset, name: &str) -> Result<&'a Array1<f64>> {
    let values = data.numeric(name)?;
    if let Some((row, &value)) = values.iter().enumerate().find(|&(_, &x)| !x.is_finite()) {
        return Err(PreprocessingError::InvalidValue {
            column: name.to_string(),
            row,
            value,
            reason: "scaling requires finite values".to_string(),
        });
    }
    Ok(values)
}

/// Minimum and maximum of a column, `None` when it is empty.
pub(crate) fn column_bounds(values: &Array1<f64>) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &x| match acc {
        None => Some((x, x)),
        Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
    })
}

/// Bounds of a column that has at least two distinct values.
pub(crate) fn spread_bounds(name: &str, values: &Array1<f64>) -> Result<(f64, f64)> {
    let (lo, hi) = column_bounds(values).ok_or_else(|| PreprocessingError::DegenerateColumn {
        column: name.to_string(),
        reason: "column has no values".to_string(),
    })?;

    if lo == hi {
        return Err(PreprocessingError::DegenerateColumn {
            column: name.to_string(),
            reason: format!("all values equal {}", lo),
        });
    }
    Ok((lo, hi))
}
