//! Feature Engineering Example: House Prices
//!
//! This example demonstrates swapping transformation strategies at runtime:
//! - Log transformation of skewed prices
//! - Standard and min-max scaling of living area
//! - One-hot encoding of the neighborhood
//! - A JSON-configured pipeline running all of the above in one call
//!
//! Run with: cargo run --example house_price_features [data.csv] [config.json]
//!
//! Set `RUST_LOG=debug` to see fitted statistics.

use featurekit::preprocessing::{
    FeatureEngineer, LogTransformation, MinMaxScaling, OneHotEncoding, StandardScaling,
    TransformationConfig,
};
use featurekit::Dataset;
use std::error::Error;
use tracing_subscriber::EnvFilter;

const SAMPLE_CSV: &str = "\
SalePrice,Gr Liv Area,Neighborhood
208500,1710,CollgCr
181500,1262,Veenker
223500,1786,CollgCr
140000,1717,Crawfor
250000,2198,NoRidge
143000,1362,Mitchel
307000,1694,Somerst
200000,2090,NWAmes
";

const SAMPLE_CONFIG: &str = r#"{
    "strategy": "pipeline",
    "steps": [
        { "strategy": "log", "features": ["SalePrice"] },
        { "strategy": "min_max_scaling", "features": ["Gr Liv Area"], "feature_range": [0.0, 1.0] },
        { "strategy": "one_hot_encoding", "features": ["Neighborhood"] }
    ]
}"#;

fn summarize(label: &str, data: &Dataset) {
    println!("{} ({} rows x {} columns)", label, data.n_rows(), data.n_columns());
    println!("  columns: {}", data.column_names().join(", "));
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);

    // 1. Load data
    let data = match args.next() {
        Some(path) => Dataset::from_csv_path(path)?,
        None => Dataset::from_csv_reader(SAMPLE_CSV.as_bytes())?,
    };
    summarize("Input", &data);

    // 2. Log transformation
    let mut engineer = FeatureEngineer::new(LogTransformation::new(["SalePrice", "Gr Liv Area"])?);
    let logged = engineer.apply(&data)?;
    println!("\nlog1p(SalePrice): {:.4}", logged.numeric("SalePrice")?);

    // 3. Standard scaling
    engineer.set_strategy(StandardScaling::new(["SalePrice", "Gr Liv Area"])?);
    let standardized = engineer.apply(&data)?;
    println!("z(Gr Liv Area): {:.4}", standardized.numeric("Gr Liv Area")?);

    // 4. Min-max scaling
    engineer.set_strategy(MinMaxScaling::with_range(["SalePrice", "Gr Liv Area"], (0.0, 1.0))?);
    let scaled = engineer.apply(&data)?;
    println!("minmax(SalePrice): {:.4}", scaled.numeric("SalePrice")?);

    // 5. One-hot encoding
    engineer.set_strategy(OneHotEncoding::new(["Neighborhood"])?);
    let encoded = engineer.apply(&data)?;
    println!();
    summarize("One-hot encoded", &encoded);

    // 6. Configured pipeline
    let config = match args.next() {
        Some(path) => TransformationConfig::from_path(path)?,
        None => TransformationConfig::from_json_str(SAMPLE_CONFIG)?,
    };
    engineer.set_boxed_strategy(config.build()?);
    let transformed = engineer.apply(&data)?;
    println!();
    summarize("Pipeline output", &transformed);

    println!();
    transformed.to_csv_writer(std::io::stdout().lock())?;

    Ok(())
}
