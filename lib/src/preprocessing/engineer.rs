//! Runtime-swappable holder of the active transformation strategy.

use crate::dataset::Dataset;
use crate::preprocessing::error::Result;
use crate::preprocessing::traits::Transformation;
use tracing::info;

/// Applies whichever [`Transformation`] is currently selected.
///
/// The engineer carries no transformation logic: [`apply`](Self::apply)
/// forwards to the active strategy and returns its result or error
/// untouched. Swapping needs `&mut self`, so concurrent callers must
/// serialize access themselves.
///
/// # Example
/// ```rust
/// use featurekit::dataset::Dataset;
/// use featurekit::preprocessing::{FeatureEngineer, LogTransformation, MinMaxScaling};
///
/// let data = Dataset::builder()
///     .numeric("SalePrice", [100.0, 200.0, 400.0])
///     .build()
///     .unwrap();
///
/// let mut engineer = FeatureEngineer::new(LogTransformation::new(["SalePrice"]).unwrap());
/// let logged = engineer.apply(&data).unwrap();
///
/// engineer.set_strategy(MinMaxScaling::new(["SalePrice"]).unwrap());
/// let scaled = engineer.apply(&logged).unwrap();
/// assert_eq!(scaled.numeric("SalePrice").unwrap()[2], 1.0);
/// ```
#[derive(Debug)]
pub struct FeatureEngineer {
    strategy: Box<dyn Transformation>,
}

impl FeatureEngineer {
    /// Create an engineer with an initial strategy.
    pub fn new<T: Transformation + 'static>(strategy: T) -> Self {
        Self::from_boxed(Box::new(strategy))
    }

    /// Create an engineer from an already boxed strategy.
    pub fn from_boxed(strategy: Box<dyn Transformation>) -> Self {
        Self { strategy }
    }

    /// Replace the active strategy. The previous one is dropped.
    pub fn set_strategy<T: Transformation + 'static>(&mut self, strategy: T) {
        self.set_boxed_strategy(Box::new(strategy));
    }

    /// Replace the active strategy with an already boxed one.
    pub fn set_boxed_strategy(&mut self, strategy: Box<dyn Transformation>) {
        info!(
            from = self.strategy.name(),
            to = strategy.name(),
            "Switching feature engineering strategy"
        );
        self.strategy = strategy;
    }

    /// The active strategy.
    pub fn strategy(&self) -> &dyn Transformation {
        self.strategy.as_ref()
    }

    /// Apply the active strategy to `data`.
    pub fn apply(&self, data: &Dataset) -> Result<Dataset> {
        info!(strategy = self.strategy.name(), "Applying feature engineering strategy");
        self.strategy.apply(data)
    }
}
