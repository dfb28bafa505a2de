//! Column selection for transformations.

use crate::dataset::Dataset;
use crate::preprocessing::error::{PreprocessingError, Result};
use std::collections::HashSet;
use std::fmt;

/// Ordered, non-empty, duplicate-free list of column names a transformation works on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureSelector {
    names: Vec<String>,
}

impl FeatureSelector {
    /// Create a selector from column names.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::InvalidConfiguration`] if the list is
    /// empty or names a column twice.
    pub fn new<I, S>(features: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = features.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(PreprocessingError::InvalidConfiguration(
                "feature list must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(PreprocessingError::InvalidConfiguration(format!(
                    "feature '{}' selected more than once",
                    name
                )));
            }
        }

        Ok(Self { names })
    }

    /// Selected names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over the selected names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of selected columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no columns are selected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Fail with [`PreprocessingError::ColumnNotFound`] on the first selected
    /// column that is missing from `data`.
    pub fn check(&self, data: &Dataset) -> Result<()> {
        match self.iter().find(|name| !data.contains(name)) {
            Some(missing) => Err(PreprocessingError::ColumnNotFound(missing.to_string())),
            None => Ok(()),
        }
    }
}

impl fmt::Display for FeatureSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names.join(", "))
    }
}
