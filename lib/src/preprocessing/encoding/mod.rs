//! Categorical feature encoding.
//!
//! ## OneHotEncoding
//! Replaces each selected column by 0/1 indicator columns, one per observed
//! category except the first (drop-first), so the indicators stay linearly
//! independent.
//!
//! ```text
//! Color: [red, red, blue, green]
//!   -> Color_green: [0, 0, 0, 1]
//!      Color_red:   [1, 1, 0, 0]      (blue is the dropped reference)
//! ```

mod one_hot;

pub use one_hot::{FittedOneHotEncoder, OneHotEncoding};

use serde::{Deserialize, Serialize};

/// Strategy for handling unknown categories during transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Raise an error when unknown categories are encountered.
    #[default]
    Error,
    /// Ignore unknown categories (all indicators zero for that row).
    Ignore,
}
