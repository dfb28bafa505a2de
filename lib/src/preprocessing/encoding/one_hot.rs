//! One-hot encoding with a dropped reference category.

use crate::dataset::{Column, Dataset};
use crate::preprocessing::encoding::HandleUnknown;
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::features::FeatureSelector;
use crate::preprocessing::traits::{Fit, FittedTransform, Transformation};
use ndarray::Array1;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// One-hot encoding strategy (unfitted).
///
/// Categories of each selected column are sorted (strings lexicographically,
/// numbers numerically) and the first one is dropped. Every other category
/// becomes an indicator column named `{column}_{category}`, appended after the
/// columns that were not selected. Selected columns are removed.
///
/// A column with fewer than two distinct values produces no indicator columns.
///
/// # Example
/// ```rust
/// use featurekit::dataset::Dataset;
/// use featurekit::preprocessing::{OneHotEncoding, Transformation};
///
/// let data = Dataset::builder()
///     .categorical("Color", ["red", "red", "blue", "green"])
///     .build()
///     .unwrap();
///
/// let out = OneHotEncoding::new(["Color"]).unwrap().apply(&data).unwrap();
/// assert_eq!(out.column_names(), &["Color_green", "Color_red"]);
/// ```
#[derive(Clone, Debug)]
pub struct OneHotEncoding {
    features: FeatureSelector,
    handle_unknown: HandleUnknown,
}

impl OneHotEncoding {
    /// Create a one-hot encoder over `features`.
    pub fn new<I, S>(features: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            features: FeatureSelector::new(features)?,
            handle_unknown: HandleUnknown::default(),
        })
    }

    /// Set the strategy for categories unseen during fit.
    pub fn with_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.handle_unknown = strategy;
        self
    }

    /// Selected columns.
    pub fn features(&self) -> &FeatureSelector {
        &self.features
    }
}

impl Fit for OneHotEncoding {
    type Fitted = FittedOneHotEncoder;

    fn fit(&self, data: &Dataset) -> Result<Self::Fitted> {
        self.features.check(data)?;

        let mut categories = Vec::with_capacity(self.features.len());
        for name in self.features.iter() {
            let column = data.column(name)?;
            let cats = sorted_categories(name, column)?;
            debug!(column = name, n_categories = cats.len(), "Fitted one-hot column");
            categories.push(cats);
        }

        Ok(FittedOneHotEncoder {
            features: self.features.clone(),
            categories,
            handle_unknown: self.handle_unknown,
        })
    }
}

impl Transformation for OneHotEncoding {
    fn apply(&self, data: &Dataset) -> Result<Dataset> {
        info!(features = %self.features, "Applying one-hot encoding");
        let out = self.fit_transform(data)?;
        info!("One-hot encoding completed");
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "OneHotEncoding"
    }
}

/// Fitted one-hot encoder holding the sorted categories of each column.
#[derive(Clone, Debug)]
pub struct FittedOneHotEncoder {
    features: FeatureSelector,
    /// Sorted categories per selected column, including the dropped first one.
    categories: Vec<Vec<String>>,
    handle_unknown: HandleUnknown,
}

impl FittedOneHotEncoder {
    /// Sorted categories learned for each selected column.
    ///
    /// The first category of each column is the dropped reference.
    pub fn categories(&self) -> &[Vec<String>] {
        &self.categories
    }

    /// Names of the indicator columns `transform` appends, in order.
    pub fn feature_names_out(&self) -> Vec<String> {
        self.features
            .iter()
            .zip(&self.categories)
            .flat_map(|(name, cats)| {
                cats.iter()
                    .skip(1)
                    .map(move |cat| indicator_name(name, cat))
            })
            .collect()
    }

    /// Number of indicator columns `transform` appends.
    pub fn n_features_out(&self) -> usize {
        self.categories
            .iter()
            .map(|cats| cats.len().saturating_sub(1))
            .sum()
    }
}

impl FittedTransform for FittedOneHotEncoder {
    fn transform(&self, data: &Dataset) -> Result<Dataset> {
        self.features.check(data)?;

        let mut out = data.without_columns(self.features.names());
        let n_rows = data.n_rows();

        for (name, cats) in self.features.iter().zip(&self.categories) {
            let labels = row_labels(name, data.column(name)?)?;
            let index: HashMap<&str, usize> = cats
                .iter()
                .enumerate()
                .map(|(i, c)| (c.as_str(), i))
                .collect();

            // One indicator per non-reference category.
            let width = cats.len().saturating_sub(1);
            let mut indicators = vec![vec![0.0f64; n_rows]; width];

            for (row, label) in labels.iter().enumerate() {
                match index.get(label.as_str()) {
                    Some(0) => {}
                    Some(&idx) => indicators[idx - 1][row] = 1.0,
                    None => {
                        if self.handle_unknown == HandleUnknown::Error {
                            return Err(PreprocessingError::UnknownCategory {
                                column: name.to_string(),
                                row,
                                category: label.clone(),
                            });
                        }
                    }
                }
            }

            for (cat, values) in cats.iter().skip(1).zip(indicators) {
                let indicator = indicator_name(name, cat);
                if out.contains(&indicator) {
                    return Err(PreprocessingError::DuplicateColumn(indicator));
                }
                out.set_column(indicator, Column::Numeric(Array1::from(values)))?;
            }
        }

        Ok(out)
    }
}

fn indicator_name(column: &str, category: &str) -> String {
    format!("{}_{}", column, category)
}

/// Label of a numeric category; `-0.0` and `0.0` share one label.
fn number_label(x: f64) -> String {
    (x + 0.0).to_string()
}

fn row_labels(name: &str, column: &Column) -> Result<Vec<String>> {
    match column {
        Column::Categorical(values) => Ok(values.clone()),
        Column::Numeric(values) => values
            .iter()
            .enumerate()
            .map(|(row, &x)| {
                if x.is_nan() {
                    Err(PreprocessingError::InvalidValue {
                        column: name.to_string(),
                        row,
                        value: x,
                        reason: "NaN cannot be used as a category".to_string(),
                    })
                } else {
                    Ok(number_label(x))
                }
            })
            .collect(),
    }
}

fn sorted_categories(name: &str, column: &Column) -> Result<Vec<String>> {
    match column {
        Column::Categorical(values) => Ok(values
            .iter()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()),
        Column::Numeric(values) => {
            if let Some((row, &x)) = values.iter().enumerate().find(|&(_, x)| x.is_nan()) {
                return Err(PreprocessingError::InvalidValue {
                    column: name.to_string(),
                    row,
                    value: x,
                    reason: "NaN cannot be used as a category".to_string(),
                });
            }
            let mut distinct: Vec<f64> = values.iter().map(|&x| x + 0.0).collect();
            distinct.sort_by(f64::total_cmp);
            distinct.dedup();
            Ok(distinct.into_iter().map(number_label).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_data() -> Dataset {
        Dataset::builder()
            .numeric("SalePrice", [100.0, 200.0, 300.0, 400.0])
            .categorical("Color", ["red", "red", "blue", "green"])
            .numeric("Rooms", [3.0, 3.0, 4.0, 3.0])
            .build()
            .unwrap()
    }

    fn row(data: &Dataset, names: &[String], i: usize) -> Vec<f64> {
        names.iter().map(|n| data.numeric(n).unwrap()[i]).collect()
    }

    #[test]
    fn test_one_hot_color_example() {
        let data = color_data();
        let encoder = OneHotEncoding::new(["Color"]).unwrap();
        let out = encoder.apply(&data).unwrap();

        assert!(!out.contains("Color"));
        assert_eq!(out.n_rows(), 4);

        let indicators = encoder.fit(&data).unwrap().feature_names_out();
        assert_eq!(indicators, vec!["Color_green", "Color_red"]);

        let red_1 = row(&out, &indicators, 0);
        let red_2 = row(&out, &indicators, 1);
        let blue = row(&out, &indicators, 2);
        let green = row(&out, &indicators, 3);

        assert_eq!(red_1, red_2);
        assert_ne!(blue, red_1);
        assert_ne!(green, red_1);
        assert_ne!(blue, green);
        assert_eq!(blue, vec![0.0, 0.0]);
    }

    #[test]
    fn test_one_hot_column_order() {
        let data = color_data();
        let out = OneHotEncoding::new(["Color"]).unwrap().apply(&data).unwrap();
        assert_eq!(
            out.column_names(),
            &["SalePrice", "Rooms", "Color_green", "Color_red"]
        );
        assert_eq!(out.column("SalePrice").unwrap(), data.column("SalePrice").unwrap());
    }

    #[test]
    fn test_one_hot_numeric_categories() {
        let data = Dataset::builder()
            .numeric("Bedrooms", [10.0, 2.0, 3.0, 2.0])
            .build()
            .unwrap();
        let encoder = OneHotEncoding::new(["Bedrooms"]).unwrap();
        let fitted = encoder.fit(&data).unwrap();

        // Numeric order, not lexicographic.
        assert_eq!(fitted.categories()[0], vec!["2", "3", "10"]);

        let out = fitted.transform(&data).unwrap();
        assert_eq!(out.column_names(), &["Bedrooms_3", "Bedrooms_10"]);
        assert_eq!(out.numeric("Bedrooms_10").unwrap().to_vec(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_one_hot_multiple_columns() {
        let data = color_data();
        let fitted = OneHotEncoding::new(["Rooms", "Color"])
            .unwrap()
            .fit(&data)
            .unwrap();

        assert_eq!(fitted.n_features_out(), 3);
        assert_eq!(
            fitted.feature_names_out(),
            vec!["Rooms_4", "Color_green", "Color_red"]
        );

        let out = fitted.transform(&data).unwrap();
        assert_eq!(out.n_columns(), 4);
    }

    #[test]
    fn test_one_hot_single_category_yields_no_columns() {
        let data = Dataset::builder()
            .numeric("SalePrice", [1.0, 2.0])
            .categorical("Street", ["Pave", "Pave"])
            .build()
            .unwrap();
        let out = OneHotEncoding::new(["Street"]).unwrap().apply(&data).unwrap();

        assert_eq!(out.column_names(), &["SalePrice"]);
        assert_eq!(out.n_rows(), 2);
    }

    #[test]
    fn test_one_hot_all_columns_removed_keeps_rows() {
        let data = Dataset::builder()
            .categorical("Street", ["Pave", "Pave", "Pave"])
            .build()
            .unwrap();
        let out = OneHotEncoding::new(["Street"]).unwrap().apply(&data).unwrap();
        assert_eq!(out.shape(), (3, 0));
    }

    #[test]
    fn test_one_hot_missing_column() {
        let data = color_data();
        let result = OneHotEncoding::new(["Neighborhood"]).unwrap().apply(&data);
        assert!(matches!(
            result,
            Err(PreprocessingError::ColumnNotFound(name)) if name == "Neighborhood"
        ));
    }

    #[test]
    fn test_one_hot_unknown_category_error() {
        let fitted = OneHotEncoding::new(["Color"])
            .unwrap()
            .fit(&color_data())
            .unwrap();
        let test = Dataset::builder()
            .categorical("Color", ["red", "purple"])
            .build()
            .unwrap();

        assert!(matches!(
            fitted.transform(&test),
            Err(PreprocessingError::UnknownCategory { row: 1, ref category, .. }) if category == "purple"
        ));
    }

    #[test]
    fn test_one_hot_unknown_category_ignore() {
        let fitted = OneHotEncoding::new(["Color"])
            .unwrap()
            .with_handle_unknown(HandleUnknown::Ignore)
            .fit(&color_data())
            .unwrap();
        let test = Dataset::builder()
            .categorical("Color", ["red", "purple"])
            .build()
            .unwrap();

        let out = fitted.transform(&test).unwrap();
        assert_eq!(out.numeric("Color_red").unwrap().to_vec(), vec![1.0, 0.0]);
        assert_eq!(out.numeric("Color_green").unwrap().to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_one_hot_indicator_name_collision() {
        let data = Dataset::builder()
            .categorical("Color", ["red", "blue"])
            .numeric("Color_red", [0.0, 1.0])
            .build()
            .unwrap();
        let result = OneHotEncoding::new(["Color"]).unwrap().apply(&data);
        assert!(matches!(
            result,
            Err(PreprocessingError::DuplicateColumn(name)) if name == "Color_red"
        ));
    }

    #[test]
    fn test_one_hot_rejects_nan_category() {
        let data = Dataset::builder()
            .numeric("Garage Cars", [1.0, f64::NAN])
            .build()
            .unwrap();
        let result = OneHotEncoding::new(["Garage Cars"]).unwrap().apply(&data);
        assert!(matches!(result, Err(PreprocessingError::InvalidValue { .. })));
    }

    #[test]
    fn test_one_hot_does_not_mutate_input() {
        let data = color_data();
        let before = data.clone();
        OneHotEncoding::new(["Color"]).unwrap().apply(&data).unwrap();
        assert_eq!(data, before);
    }
}
