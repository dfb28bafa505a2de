//! Pipeline for chaining transformations.
//!
//! A Pipeline runs its steps in order, feeding the output of one step to the
//! next. It is itself a [`Transformation`], so it can be installed in a
//! [`FeatureEngineer`](crate::preprocessing::FeatureEngineer) like any single
//! strategy.
//!
//! # Example
//! ```rust
//! use featurekit::dataset::Dataset;
//! use featurekit::preprocessing::{LogTransformation, OneHotEncoding, Pipeline, Transformation};
//!
//! let data = Dataset::builder()
//!     .numeric("SalePrice", [0.0, 1.0])
//!     .categorical("Street", ["Pave", "Grvl"])
//!     .build()
//!     .unwrap();
//!
//! let pipeline = Pipeline::new()
//!     .add(LogTransformation::new(["SalePrice"]).unwrap())
//!     .add(OneHotEncoding::new(["Street"]).unwrap());
//!
//! let out = pipeline.apply(&data).unwrap();
//! assert_eq!(out.column_names(), &["SalePrice", "Street_Pave"]);
//! ```

use crate::dataset::Dataset;
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::traits::Transformation;
use tracing::debug;

/// Ordered chain of transformations.
#[derive(Debug, Default)]
pub struct Pipeline {
    steps: Vec<Box<dyn Transformation>>,
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    #[allow(clippy::should_implement_trait)]
    pub fn add<T: Transformation + 'static>(self, step: T) -> Self {
        self.add_boxed(Box::new(step))
    }

    /// Append an already boxed step.
    pub fn add_boxed(mut self, step: Box<dyn Transformation>) -> Self {
        self.steps.push(step);
        self
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the pipeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }
}

impl Transformation for Pipeline {
    fn apply(&self, data: &Dataset) -> Result<Dataset> {
        let (first, rest) = self.steps.split_first().ok_or_else(|| {
            PreprocessingError::InvalidConfiguration("pipeline has no steps".to_string())
        })?;

        debug!(step = 0, name = first.name(), "Running pipeline step");
        let mut current = first.apply(data)?;
        for (idx, step) in rest.iter().enumerate() {
            debug!(step = idx + 1, name = step.name(), "Running pipeline step");
            current = step.apply(&current)?;
        }
        Ok(current)
    }

    fn name(&self) -> &'static str {
        "Pipeline"
    }
}
