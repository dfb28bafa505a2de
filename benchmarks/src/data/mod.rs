//! Synthetic housing dataset.

use featurekit::Dataset;

/// Neighborhood labels cycled through by [`synthetic_housing`].
pub const NEIGHBORHOODS: [&str; 8] = [
    "NAmes", "CollgCr", "OldTown", "Edwards", "Somerst", "NridgHt", "Gilbert", "Sawyer",
];

/// Build a dataset with `n_rows` rows and three columns:
///
/// - `SalePrice`: right-skewed positive prices
/// - `Gr Liv Area`: living area in square feet
/// - `Neighborhood`: one of [`NEIGHBORHOODS`]
///
/// Values are a pure function of the row index, so repeated calls return
/// identical data.
///
/// # Example
///
/// ```
/// let data = benchmarks::synthetic_housing(100);
/// assert_eq!(data.shape(), (100, 3));
/// ```
pub fn synthetic_housing(n_rows: usize) -> Dataset {
    let price = (0..n_rows).map(|i| {
        let t = i as f64;
        50_000.0 + 20_000.0 * (t * 0.37).sin().abs() * (1.0 + (t % 17.0) / 4.0)
    });
    let area = (0..n_rows).map(|i| 800.0 + ((i * 7919) % 2600) as f64);
    let neighborhood = (0..n_rows).map(|i| NEIGHBORHOODS[(i * 31) % NEIGHBORHOODS.len()]);

    Dataset::builder()
        .numeric("SalePrice", price)
        .numeric("Gr Liv Area", area)
        .categorical("Neighborhood", neighborhood)
        .build()
        .expect("synthetic columns have equal length")
}
