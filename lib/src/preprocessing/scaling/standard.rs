//! Standard scaling (Z-score normalization).
//!
//! Each selected column is centered on its mean and divided by its standard
//! deviation:
//! ```text
//! z = (x - u) / s
//! ```
//! `s` is the population standard deviation (ddof = 0). Both statistics come
//! from the dataset being transformed.

use super::{finite_column, spread_bounds};
use crate::dataset::{Column, Dataset};
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::features::FeatureSelector;
use crate::preprocessing::traits::{Fit, FittedTransform, Transformation};
use ndarray::Array1;
use tracing::{debug, info};

/// Standard scaling strategy (unfitted).
#[derive(Clone, Debug)]
pub struct StandardScaling {
    features: FeatureSelector,
}

impl StandardScaling {
    /// Create a standard scaler over `features`.
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

impl Fit for StandardScaling {
    type Fitted = FittedStandardScaler;

    fn fit(&self, data: &Dataset) -> Result<Self::Fitted> {
        self.features.check(data)?;

        let mut mean = Vec::with_capacity(self.features.len());
        let mut shifts = Vec::with_capacity(self.features.len());
        let mut std = Vec::with_capacity(self.features.len());

        for name in self.features.iter() {
            let values = finite_column(data, name)?;
            spread_bounds(name, values)?;

            let (mu, shift, sigma) = centered_moments(values).ok_or_else(|| {
                PreprocessingError::DegenerateColumn {
                    column: name.to_string(),
                    reason: "column has no values".to_string(),
                }
            })?;

            if sigma == 0.0 || !sigma.is_finite() {
                return Err(PreprocessingError::DegenerateColumn {
                    column: name.to_string(),
                    reason: format!("standard deviation {} cannot be used as a divisor", sigma),
                });
            }

            debug!(column = name, mean = mu + shift, std = sigma, "Fitted standard scaler column");
            mean.push(mu);
            shifts.push(shift);
            std.push(sigma);
        }

        Ok(FittedStandardScaler {
            features: self.features.clone(),
            mean: Array1::from(mean),
            shift: Array1::from(shifts),
            std: Array1::from(std),
        })
    }
}

impl Transformation for StandardScaling {
    fn apply(&self, data: &Dataset) -> Result<Dataset> {
        info!(features = %self.features, "Applying standard scaling");
        let out = self.fit_transform(data)?;
        info!("Standard scaling completed");
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "StandardScaling"
    }
}

/// Fitted standard scaler holding per-column mean and standard deviation.
#[derive(Clone, Debug)]
pub struct FittedStandardScaler {
    features: FeatureSelector,
    mean: Array1<f64>,
    /// Mean of `x - mean`, the rounding error left by the first pass.
    shift: Array1<f64>,
    std: Array1<f64>,
}

impl FittedStandardScaler {
    /// Mean of each selected column, in selector order.
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Population standard deviation of each selected column, in selector order.
    pub fn std(&self) -> &Array1<f64> {
        &self.std
    }

    /// Columns the scaler was fitted on.
    pub fn features(&self) -> &FeatureSelector {
        &self.features
    }

    /// Undo the scaling: `x = z * s + u`.
    pub fn inverse_transform(&self, data: &Dataset) -> Result<Dataset> {
        self.map_columns(data, |z, mu, shift, sigma| (z * sigma + shift) + mu)
    }

    fn map_columns<F>(&self, data: &Dataset, f: F) -> Result<Dataset>
    where
        F: Fn(f64, f64, f64, f64) -> f64,
    {
        self.features.check(data)?;

        let mut out = data.clone();
        for (idx, name) in self.features.iter().enumerate() {
            let (mu, shift, sigma) = (self.mean[idx], self.shift[idx], self.std[idx]);
            let values = finite_column(data, name)?;
            out.set_column(
                name.to_string(),
                Column::Numeric(values.mapv(|x| f(x, mu, shift, sigma))),
            )?;
        }
        Ok(out)
    }
}

impl FittedTransform for FittedStandardScaler {
    fn transform(&self, data: &Dataset) -> Result<Dataset> {
        self.map_columns(data, |x, mu, shift, sigma| ((x - mu) - shift) / sigma)
    }
}

/// Two-pass mean and population standard deviation.
///
/// Returns `(mean, shift, std)` where `shift` is the mean of `x - mean`, so
/// `(x - mean) - shift` is centered even when `mean` is off by a few ulps.
/// Squares are taken relative to the largest deviation.
fn centered_moments(values: &Array1<f64>) -> Option<(f64, f64, f64)> {
    let mu = values.mean()?;
    let deviations = values.mapv(|x| x - mu);
    let shift = deviations.mean()?;
    let centered = deviations.mapv(|d| d - shift);

    let scale = centered.fold(0.0f64, |acc, &d| acc.max(d.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return Some((mu, shift, scale));
    }
    let sigma = scale * centered.mapv(|d| (d / scale).powi(2)).mean()?.sqrt();
    Some((mu, shift, sigma))
}
