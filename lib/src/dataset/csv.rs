//! CSV loading and writing for [`Dataset`].
//!
//! Column kinds are inferred: a column is numeric when every cell parses as
//! `f64`, otherwise it is categorical and cells are kept verbatim.

use super::{Column, Dataset};
use crate::preprocessing::error::Result;
use ::csv::{ReaderBuilder, Trim, WriterBuilder};
use ndarray::Array1;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::debug;

impl Dataset {
    /// Read a dataset from CSV data with a header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for result in rdr.records() {
            let record = result?;
            for (col, value) in cells.iter_mut().zip(record.iter()) {
                col.push(value.to_string());
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, values)| (name, infer_column(values)));
        let dataset = Dataset::new(columns)?;

        debug!(
            rows = dataset.n_rows(),
            columns = dataset.n_columns(),
            "Loaded dataset from CSV"
        );
        Ok(dataset)
    }

    /// Read a dataset from a CSV file.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(BufReader::new(file))
    }

    /// Write the dataset as CSV with a header row.
    pub fn to_csv_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_writer(writer);
        wtr.write_record(self.column_names())?;

        for row in 0..self.n_rows() {
            let record: Vec<String> = self
                .columns()
                .map(|(_, column)| match column {
                    Column::Numeric(values) => values[row].to_string(),
                    Column::Categorical(values) => values[row].clone(),
                })
                .collect();
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

fn infer_column(values: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = values.iter().map(|v| v.parse::<f64>().ok()).collect();
    match parsed {
        Some(numbers) if !values.is_empty() => Column::Numeric(Array1::from(numbers)),
        _ => Column::Categorical(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ColumnKind;

    const HOUSES: &str = "\
SalePrice,Gr Liv Area,Neighborhood
208500,1710,CollgCr
181500,1262,Veenker
223500,1786,CollgCr
";

    #[test]
    fn test_read_infers_column_kinds() {
        let data = Dataset::from_csv_reader(HOUSES.as_bytes()).unwrap();

        assert_eq!(data.shape(), (3, 3));
        assert_eq!(data.column("SalePrice").unwrap().kind(), ColumnKind::Numeric);
        assert_eq!(
            data.column("Neighborhood").unwrap().kind(),
            ColumnKind::Categorical
        );
        assert_eq!(data.numeric("Gr Liv Area").unwrap()[1], 1262.0);
    }

    #[test]
    fn test_mixed_column_is_categorical() {
        let csv = "MS Zoning\n20\nRL\n";
        let data = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.categorical("MS Zoning").unwrap(), &["20", "RL"]);
    }

    #[test]
    fn test_write_then_read_preserves_values() {
        let data = Dataset::from_csv_reader(HOUSES.as_bytes()).unwrap();

        let mut buf = Vec::new();
        data.to_csv_writer(&mut buf).unwrap();
        let reread = Dataset::from_csv_reader(buf.as_slice()).unwrap();

        assert_eq!(reread, data);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("featurekit_does_not_exist.csv");
        let result = Dataset::from_csv_path(&path);
        assert!(matches!(
            result,
            Err(crate::preprocessing::error::PreprocessingError::Io(_))
        ));
    }

    #[test]
    fn test_from_csv_path() {
        let path = std::env::temp_dir().join("featurekit_houses.csv");
        std::fs::write(&path, HOUSES).unwrap();

        let data = Dataset::from_csv_path(&path).unwrap();
        assert_eq!(data.n_rows(), 3);

        std::fs::remove_file(path).ok();
    }
}
