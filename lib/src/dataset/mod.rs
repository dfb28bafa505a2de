//! In-memory tabular datasets with named, row-aligned columns.
//!
//! A [`Dataset`] is an ordered collection of named [`Column`]s. Every column has
//! the same number of rows and row `i` of every column refers to the same
//! record. Transformations never mutate a dataset in place: they clone it and
//! return the modified copy.
//!
//! # Example
//!
//! ```rust
//! use featurekit::dataset::Dataset;
//!
//! let data = Dataset::builder()
//!     .numeric("SalePrice", [208_500.0, 181_500.0, 223_500.0])
//!     .categorical("Neighborhood", ["CollgCr", "Veenker", "CollgCr"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(data.shape(), (3, 2));
//! assert_eq!(data.numeric("SalePrice").unwrap()[1], 181_500.0);
//! ```

use crate::preprocessing::error::{PreprocessingError, Result};
use ndarray::Array1;
use std::fmt;

pub mod csv;

/// Kind of values stored in a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    /// Floating-point values.
    Numeric,
    /// String categories.
    Categorical,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

/// A single column of scalar values.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    /// Numeric values.
    Numeric(Array1<f64>),
    /// Categorical values.
    Categorical(Vec<String>),
}

impl Column {
    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Categorical(values) => values.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kind of values held by the column.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Numeric(_) => ColumnKind::Numeric,
            Column::Categorical(_) => ColumnKind::Categorical,
        }
    }

    /// Numeric values, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&Array1<f64>> {
        match self {
            Column::Numeric(values) => Some(values),
            Column::Categorical(_) => None,
        }
    }

    /// Categorical values, if this is a categorical column.
    pub fn as_categorical(&self) -> Option<&[String]> {
        match self {
            Column::Numeric(_) => None,
            Column::Categorical(values) => Some(values),
        }
    }
}

impl From<Array1<f64>> for Column {
    fn from(values: Array1<f64>) -> Self {
        Column::Numeric(values)
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Numeric(Array1::from(values))
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Categorical(values)
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::Categorical(values.into_iter().map(str::to_string).collect())
    }
}

/// Ordered collection of named, equal-length columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    names: Vec<String>,
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    /// Create a dataset from `(name, column)` pairs.
    ///
    /// # Errors
    /// - [`PreprocessingError::DuplicateColumn`] if a name appears twice.
    /// - [`PreprocessingError::LengthMismatch`] if columns differ in length.
    pub fn new<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let mut dataset = Dataset::default();
        for (name, column) in columns {
            let name = name.into();
            if dataset.contains(&name) {
                return Err(PreprocessingError::DuplicateColumn(name));
            }
            dataset.push_column(name, column)?;
        }
        Ok(dataset)
    }

    /// Start building a dataset column by column.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Number of rows (records).
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns `true` if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in schema order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` if a column with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterate over `(name, column)` pairs in schema order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(self.columns.iter())
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.position(name)
            .map(|idx| &self.columns[idx])
            .ok_or_else(|| PreprocessingError::ColumnNotFound(name.to_string()))
    }

    /// Look up a numeric column by name.
    pub fn numeric(&self, name: &str) -> Result<&Array1<f64>> {
        let column = self.column(name)?;
        column
            .as_numeric()
            .ok_or_else(|| PreprocessingError::ColumnTypeMismatch {
                column: name.to_string(),
                expected: ColumnKind::Numeric,
                got: column.kind(),
            })
    }

    /// Look up a categorical column by name.
    pub fn categorical(&self, name: &str) -> Result<&[String]> {
        let column = self.column(name)?;
        column
            .as_categorical()
            .ok_or_else(|| PreprocessingError::ColumnTypeMismatch {
                column: name.to_string(),
                expected: ColumnKind::Categorical,
                got: column.kind(),
            })
    }

    /// Return a copy with `name` replaced by `column`, or appended if absent.
    pub fn with_column(&self, name: impl Into<String>, column: impl Into<Column>) -> Result<Self> {
        let mut out = self.clone();
        out.set_column(name.into(), column.into())?;
        Ok(out)
    }

    /// Return a copy without the named columns. Names not in the schema are ignored.
    ///
    /// The row count is preserved even when every column is removed.
    pub fn without_columns<S: AsRef<str>>(&self, names: &[S]) -> Self {
        let mut out = Dataset {
            names: Vec::with_capacity(self.names.len()),
            columns: Vec::with_capacity(self.columns.len()),
            n_rows: self.n_rows,
        };
        for (name, column) in self.names.iter().zip(self.columns.iter()) {
            if !names.iter().any(|n| n.as_ref() == name) {
                out.names.push(name.clone());
                out.columns.push(column.clone());
            }
        }
        out
    }

    /// Replace a column in place or append it if the name is new.
    pub(crate) fn set_column(&mut self, name: String, column: Column) -> Result<()> {
        match self.position(&name) {
            Some(idx) => {
                self.check_length(&name, &column)?;
                self.columns[idx] = column;
                Ok(())
            }
            None => self.push_column(name, column),
        }
    }

    fn push_column(&mut self, name: String, column: Column) -> Result<()> {
        if self.columns.is_empty() && self.n_rows == 0 {
            self.n_rows = column.len();
        } else {
            self.check_length(&name, &column)?;
        }
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    fn check_length(&self, name: &str, column: &Column) -> Result<()> {
        if column.len() != self.n_rows {
            return Err(PreprocessingError::LengthMismatch {
                column: name.to_string(),
                expected: self.n_rows,
                got: column.len(),
            });
        }
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

/// Incremental [`Dataset`] constructor.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<(String, Column)>,
}

impl DatasetBuilder {
    /// Add a numeric column.
    pub fn numeric(mut self, name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        self.columns
            .push((name.into(), Column::Numeric(values.into_iter().collect())));
        self
    }

    /// Add a categorical column.
    pub fn categorical<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.push((
            name.into(),
            Column::Categorical(values.into_iter().map(Into::into).collect()),
        ));
        self
    }

    /// Add an already-built column.
    pub fn column(mut self, name: impl Into<String>, column: impl Into<Column>) -> Self {
        self.columns.push((name.into(), column.into()));
        self
    }

    /// Validate and build the dataset.
    pub fn build(self) -> Result<Dataset> {
        Dataset::new(self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::builder()
            .numeric("Gr Liv Area", [1710.0, 1262.0, 1786.0])
            .categorical("Neighborhood", ["CollgCr", "Veenker", "CollgCr"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_dataset_shape_and_names() {
        let data = sample();
        assert_eq!(data.shape(), (3, 2));
        assert_eq!(data.column_names(), &["Gr Liv Area", "Neighborhood"]);
        assert!(data.contains("Neighborhood"));
        assert!(!data.contains("SalePrice"));
    }

    #[test]
    fn test_dataset_rejects_ragged_columns() {
        let result = Dataset::builder()
            .numeric("a", [1.0, 2.0])
            .numeric("b", [1.0])
            .build();
        assert!(matches!(
            result,
            Err(PreprocessingError::LengthMismatch {
                expected: 2,
                got: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_dataset_rejects_duplicate_names() {
        let result = Dataset::builder()
            .numeric("a", [1.0])
            .numeric("a", [2.0])
            .build();
        assert!(matches!(result, Err(PreprocessingError::DuplicateColumn(n)) if n == "a"));
    }

    #[test]
    fn test_typed_lookup() {
        let data = sample();
        assert_eq!(data.numeric("Gr Liv Area").unwrap().len(), 3);
        assert_eq!(data.categorical("Neighborhood").unwrap()[1], "Veenker");
        assert!(matches!(
            data.numeric("Neighborhood"),
            Err(PreprocessingError::ColumnTypeMismatch {
                expected: ColumnKind::Numeric,
                got: ColumnKind::Categorical,
                ..
            })
        ));
        assert!(matches!(
            data.column("SalePrice"),
            Err(PreprocessingError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_with_column_leaves_original_untouched() {
        let data = sample();
        let replaced = data
            .with_column("Gr Liv Area", vec![0.0, 0.0, 0.0])
            .unwrap();

        assert_eq!(data.numeric("Gr Liv Area").unwrap()[0], 1710.0);
        assert_eq!(replaced.numeric("Gr Liv Area").unwrap()[0], 0.0);
        assert_eq!(replaced.column_names(), data.column_names());
    }

    #[test]
    fn test_with_column_appends_and_checks_length() {
        let data = sample();
        let appended = data.with_column("Year", vec![2003.0, 1976.0, 2001.0]).unwrap();
        assert_eq!(appended.column_names().last().unwrap(), "Year");

        let bad = data.with_column("Year", vec![2003.0]);
        assert!(matches!(bad, Err(PreprocessingError::LengthMismatch { .. })));
    }

    #[test]
    fn test_without_columns_preserves_row_count() {
        let data = sample();
        let dropped = data.without_columns(&["Gr Liv Area", "Neighborhood"]);
        assert_eq!(dropped.n_columns(), 0);
        assert_eq!(dropped.n_rows(), 3);
    }

    #[test]
    fn test_empty_dataset() {
        let data = Dataset::new(Vec::<(String, Column)>::new()).unwrap();
        assert!(data.is_empty());
        assert_eq!(data.shape(), (0, 0));
    }
}
