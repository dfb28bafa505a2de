//! Core traits for feature transformations.
//!
//! - [`Transformation`]: the single capability every strategy exposes, used
//!   through `Box<dyn Transformation>` by [`FeatureEngineer`](crate::preprocessing::FeatureEngineer).
//! - [`Fit`] / [`FittedTransform`]: the explicit fit-then-apply split for
//!   algorithms that learn column statistics (scalers, encoders).

use crate::dataset::Dataset;
use crate::preprocessing::error::Result;
use std::fmt::Debug;

/// A feature transformation strategy.
///
/// Implementations read the input dataset and return a new one; the input is
/// never modified. An error means no output was produced.
pub trait Transformation: Debug {
    /// Transform `data`, returning a new dataset.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`](crate::preprocessing::PreprocessingError) if:
    /// - A selected column is missing
    /// - A column has the wrong kind for the algorithm
    /// - A value is outside the domain of the transformation
    /// - Column statistics make the transformation undefined
    fn apply(&self, data: &Dataset) -> Result<Dataset>;

    /// Human-readable strategy name, used in logs.
    fn name(&self) -> &'static str;
}

/// Transformations that learn parameters from the data they transform.
///
/// Parameters are learned fresh on every call; nothing is cached between
/// calls to [`Transformation::apply`].
pub trait Fit {
    /// Learned parameters ready to transform data.
    type Fitted: FittedTransform;

    /// Learn parameters from `data`.
    fn fit(&self, data: &Dataset) -> Result<Self::Fitted>;

    /// Fit on `data` and transform it in one step.
    fn fit_transform(&self, data: &Dataset) -> Result<Dataset> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Learned parameters that can transform datasets.
pub trait FittedTransform {
    /// Transform `data` using the learned parameters.
    fn transform(&self, data: &Dataset) -> Result<Dataset>;
}
