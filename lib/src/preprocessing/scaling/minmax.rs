//! Min-max scaling.
//!
//! Maps each selected column onto a target range (default `[0, 1]`):
//! ```text
//! x_scaled = min + (x - x_min) / (x_max - x_min) * (max - min)
//! ```

use super::{finite_column, spread_bounds};
use crate::dataset::{Column, Dataset};
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::features::FeatureSelector;
use crate::preprocessing::traits::{Fit, FittedTransform, Transformation};
use ndarray::Array1;
use tracing::{debug, info};

/// Target range of min-max scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureRange {
    /// Value the column minimum maps to.
    pub min: f64,
    /// Value the column maximum maps to.
    pub max: f64,
}

impl Default for FeatureRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl FeatureRange {
    /// Create a range, requiring finite bounds with `min < max` and a finite width.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PreprocessingError::InvalidConfiguration(format!(
                "feature_range bounds must be finite, got ({}, {})",
                min, max
            )));
        }
        if min >= max {
            return Err(PreprocessingError::InvalidConfiguration(format!(
                "feature_range minimum must be less than maximum, got ({}, {})",
                min, max
            )));
        }
        if !(max - min).is_finite() {
            return Err(PreprocessingError::InvalidConfiguration(format!(
                "feature_range width overflows, got ({}, {})",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Min-max scaling strategy (unfitted).
#[derive(Clone, Debug)]
pub struct MinMaxScaling {
    features: FeatureSelector,
    range: FeatureRange,
}

impl MinMaxScaling {
    /// Create a min-max scaler over `features` with target range `[0, 1]`.
    pub fn new<I, S>(features: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            features: FeatureSelector::new(features)?,
            range: FeatureRange::default(),
        })
    }

    /// Create a min-max scaler over `features` with target range `(min, max)`.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::InvalidConfiguration`] if the feature
    /// list is invalid or `min >= max`.
    pub fn with_range<I, S>(features: I, feature_range: (f64, f64)) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (min, max) = feature_range;
        Ok(Self {
            features: FeatureSelector::new(features)?,
            range: FeatureRange::new(min, max)?,
        })
    }

    /// Selected columns.
    pub fn features(&self) -> &FeatureSelector {
        &self.features
    }

    /// Target range.
    pub fn feature_range(&self) -> FeatureRange {
        self.range
    }
}

impl Fit for MinMaxScaling {
    type Fitted = FittedMinMaxScaler;

    fn fit(&self, data: &Dataset) -> Result<Self::Fitted> {
        self.features.check(data)?;

        let mut data_min = Vec::with_capacity(self.features.len());
        let mut data_max = Vec::with_capacity(self.features.len());

        for name in self.features.iter() {
            let values = finite_column(data, name)?;
            let (lo, hi) = spread_bounds(name, values)?;

            if !(hi - lo).is_finite() {
                return Err(PreprocessingError::DegenerateColumn {
                    column: name.to_string(),
                    reason: format!("range [{}, {}] overflows", lo, hi),
                });
            }

            debug!(column = name, min = lo, max = hi, "Fitted min-max scaler column");
            data_min.push(lo);
            data_max.push(hi);
        }

        Ok(FittedMinMaxScaler {
            features: self.features.clone(),
            range: self.range,
            data_min: Array1::from(data_min),
            data_max: Array1::from(data_max),
        })
    }
}

impl Transformation for MinMaxScaling {
    fn apply(&self, data: &Dataset) -> Result<Dataset> {
        info!(
            features = %self.features,
            min = self.range.min,
            max = self.range.max,
            "Applying min-max scaling"
        );
        let out = self.fit_transform(data)?;
        info!("Min-max scaling completed");
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "MinMaxScaling"
    }
}

/// Fitted min-max scaler holding per-column minimum and maximum.
#[derive(Clone, Debug)]
pub struct FittedMinMaxScaler {
    features: FeatureSelector,
    range: FeatureRange,
    data_min: Array1<f64>,
    data_max: Array1<f64>,
}

impl FittedMinMaxScaler {
    /// Minimum of each selected column, in selector order.
    pub fn data_min(&self) -> &Array1<f64> {
        &self.data_min
    }

    /// Maximum of each selected column, in selector order.
    pub fn data_max(&self) -> &Array1<f64> {
        &self.data_max
    }

    /// Target range.
    pub fn feature_range(&self) -> FeatureRange {
        self.range
    }

    /// Undo the scaling, mapping the target range back onto `[x_min, x_max]`.
    pub fn inverse_transform(&self, data: &Dataset) -> Result<Dataset> {
        let range = self.range;
        self.map_columns(data, |y, lo, hi| {
            lo + (y - range.min) / range.width() * (hi - lo)
        })
    }

    fn map_columns<F>(&self, data: &Dataset, f: F) -> Result<Dataset>
    where
        F: Fn(f64, f64, f64) -> f64,
    {
        self.features.check(data)?;

        let mut out = data.clone();
        for (idx, name) in self.features.iter().enumerate() {
            let (lo, hi) = (self.data_min[idx], self.data_max[idx]);
            let values = finite_column(data, name)?;
            out.set_column(
                name.to_string(),
                Column::Numeric(values.mapv(|x| f(x, lo, hi))),
            )?;
        }
        Ok(out)
    }
}

impl FittedTransform for FittedMinMaxScaler {
    fn transform(&self, data: &Dataset) -> Result<Dataset> {
        let range = self.range;
        self.map_columns(data, |x, lo, hi| {
            range.min + (x - lo) / (hi - lo) * range.width()
        })
    }
}
