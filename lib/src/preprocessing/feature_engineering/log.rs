//! Shifted log transformation for skewed features.
//!
//! Each selected value `x` becomes:
//! ```text
//! y = ln(1 + x)
//! ```
//! which stays defined at `x = 0`. The caller can undo it with `y.exp_m1()`.

use crate::dataset::{Column, Dataset};
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::features::FeatureSelector;
use crate::preprocessing::traits::Transformation;
use tracing::info;

/// Log transformation `ln(1 + x)` applied to selected numeric columns.
///
/// # Example
/// ```rust
/// use featurekit::dataset::Dataset;
/// use featurekit::preprocessing::{LogTransformation, Transformation};
///
/// let data = Dataset::builder()
///     .numeric("SalePrice", [0.0, 9.0, 99.0])
///     .build()
///     .unwrap();
///
/// let log = LogTransformation::new(["SalePrice"]).unwrap();
/// let out = log.apply(&data).unwrap();
///
/// assert_eq!(out.numeric("SalePrice").unwrap()[0], 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct LogTransformation {
    features: FeatureSelector,
}

impl LogTransformation {
    /// Create a log transformation over `features`.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::InvalidConfiguration`] for an empty or
    /// duplicated feature list.
    pub fn new<I, S>(features: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            features: FeatureSelector::new(features)?,
        })
    }

    /// Selected columns.
    pub fn features(&self) -> &FeatureSelector {
        &self.features
    }
}

impl Transformation for LogTransformation {
    fn apply(&self, data: &Dataset) -> Result<Dataset> {
        info!(features = %self.features, "Applying log transformation");
        self.features.check(data)?;

        let mut out = data.clone();
        for name in self.features.iter() {
            let values = data.numeric(name)?;

            // ln_1p is undefined at -1 and below; NaN fails the same comparison.
            if let Some((row, &value)) = values.iter().enumerate().find(|&(_, &x)| !(x > -1.0)) {
                return Err(PreprocessingError::InvalidValue {
                    column: name.to_string(),
                    row,
                    value,
                    reason: "log1p requires values greater than -1".to_string(),
                });
            }

            out.set_column(name.to_string(), Column::Numeric(values.mapv(f64::ln_1p)))?;
        }

        info!("Log transformation completed");
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "LogTransformation"
    }
}
