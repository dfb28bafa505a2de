//! Declarative transformation configuration.
//!
//! A [`TransformationConfig`] describes one strategy (or a pipeline of them)
//! as data. It is deserialized from JSON and turned into a boxed
//! [`Transformation`] with [`build`](TransformationConfig::build), which runs
//! the same validation as the constructors.
//!
//! ```json
//! {
//!   "strategy": "pipeline",
//!   "steps": [
//!     { "strategy": "log", "features": ["SalePrice", "Gr Liv Area"] },
//!     { "strategy": "min_max_scaling", "features": ["Gr Liv Area"], "feature_range": [0.0, 1.0] },
//!     { "strategy": "one_hot_encoding", "features": ["Neighborhood"] }
//!   ]
//! }
//! ```

use crate::preprocessing::encoding::{HandleUnknown, OneHotEncoding};
use crate::preprocessing::error::{PreprocessingError, Result};
use crate::preprocessing::feature_engineering::LogTransformation;
use crate::preprocessing::pipeline::Pipeline;
use crate::preprocessing::scaling::{MinMaxScaling, StandardScaling};
use crate::preprocessing::traits::Transformation;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_feature_range() -> (f64, f64) {
    (0.0, 1.0)
}

/// Serializable description of a transformation strategy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum TransformationConfig {
    /// `ln(1 + x)` on the listed columns.
    Log { features: Vec<String> },
    /// Z-score normalization of the listed columns.
    StandardScaling { features: Vec<String> },
    /// Min-max scaling of the listed columns onto `feature_range`.
    MinMaxScaling {
        features: Vec<String>,
        #[serde(default = "default_feature_range")]
        feature_range: (f64, f64),
    },
    /// Drop-first one-hot encoding of the listed columns.
    OneHotEncoding {
        features: Vec<String>,
        #[serde(default)]
        handle_unknown: HandleUnknown,
    },
    /// Steps applied in order.
    Pipeline { steps: Vec<TransformationConfig> },
}

impl TransformationConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Build the described strategy.
    ///
    /// # Errors
    /// Returns [`PreprocessingError::InvalidConfiguration`]
    /// for empty or duplicated feature lists, an inverted `feature_range`, or
    /// an empty pipeline.
    pub fn build(&self) -> Result<Box<dyn Transformation>> {
        let strategy: Box<dyn Transformation> = match self {
            TransformationConfig::Log { features } => {
                Box::new(LogTransformation::new(features.iter().cloned())?)
            }
            TransformationConfig::StandardScaling { features } => {
                Box::new(StandardScaling::new(features.iter().cloned())?)
            }
            TransformationConfig::MinMaxScaling {
                features,
                feature_range,
            } => Box::new(MinMaxScaling::with_range(
                features.iter().cloned(),
                *feature_range,
            )?),
            TransformationConfig::OneHotEncoding {
                features,
                handle_unknown,
            } => Box::new(
                OneHotEncoding::new(features.iter().cloned())?.with_handle_unknown(*handle_unknown),
            ),
            TransformationConfig::Pipeline { steps } => {
                if steps.is_empty() {
                    return Err(PreprocessingError::InvalidConfiguration(
                        "pipeline has no steps".to_string(),
                    ));
                }
                let pipeline = steps
                    .iter()
                    .map(TransformationConfig::build)
                    .try_fold(Pipeline::new(), |p, step| step.map(|s| p.add_boxed(s)))?;
                Box::new(pipeline)
            }
        };
        Ok(strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_parse_min_max_with_default_range() {
        let config =
            TransformationConfig::from_json_str(r#"{"strategy": "min_max_scaling", "features": ["SalePrice"]}"#)
                .unwrap();
        assert_eq!(
            config,
            TransformationConfig::MinMaxScaling {
                features: vec!["SalePrice".to_string()],
                feature_range: (0.0, 1.0),
            }
        );
    }

    #[test]
    fn test_parse_one_hot_handle_unknown() {
        let config = TransformationConfig::from_json_str(
            r#"{"strategy": "one_hot_encoding", "features": ["Neighborhood"], "handle_unknown": "ignore"}"#,
        )
        .unwrap();
        assert!(matches!(
            config,
            TransformationConfig::OneHotEncoding {
                handle_unknown: HandleUnknown::Ignore,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_strategy_is_parse_error() {
        let result = TransformationConfig::from_json_str(r#"{"strategy": "pca", "features": ["a"]}"#);
        assert!(matches!(result, Err(PreprocessingError::ConfigParse(_))));
    }

    #[test]
    fn test_build_rejects_inverted_range() {
        let config = TransformationConfig::MinMaxScaling {
            features: vec!["SalePrice".to_string()],
            feature_range: (1.0, 0.0),
        };
        assert!(matches!(
            config.build(),
            Err(PreprocessingError::InvalidConfiguration(_))
        ));

        let config = TransformationConfig::from_json_str(
            r#"{"strategy": "min_max_scaling", "features": ["x"], "feature_range": [-1e308, 1e308]}"#,
        )
        .unwrap();
        assert!(matches!(
            config.build(),
            Err(PreprocessingError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_build_rejects_empty_features() {
        let config = TransformationConfig::Log { features: vec![] };
        assert!(matches!(
            config.build(),
            Err(PreprocessingError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_build_rejects_empty_pipeline() {
        let config = TransformationConfig::Pipeline { steps: vec![] };
        assert!(config.build().is_err());
    }

    #[test]
    fn test_build_pipeline_and_apply() {
        let config = TransformationConfig::from_json_str(
            r#"{
                "strategy": "pipeline",
                "steps": [
                    {"strategy": "log", "features": ["SalePrice"]},
                    {"strategy": "standard_scaling", "features": ["SalePrice"]},
                    {"strategy": "one_hot_encoding", "features": ["Street"]}
                ]
            }"#,
        )
        .unwrap();
        let strategy = config.build().unwrap();
        assert_eq!(strategy.name(), "Pipeline");

        let data = Dataset::builder()
            .numeric("SalePrice", [1.0, 2.0, 3.0])
            .categorical("Street", ["Pave", "Grvl", "Pave"])
            .build()
            .unwrap();
        let out = strategy.apply(&data).unwrap();
        assert_eq!(out.column_names(), &["SalePrice", "Street_Pave"]);
        assert!(out.numeric("SalePrice").unwrap().mean().unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = TransformationConfig::OneHotEncoding {
            features: vec!["Neighborhood".to_string()],
            handle_unknown: HandleUnknown::Error,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""strategy":"one_hot_encoding""#));
        assert_eq!(TransformationConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join("featurekit_log_config.json");
        std::fs::write(&path, r#"{"strategy": "log", "features": ["SalePrice"]}"#).unwrap();

        let config = TransformationConfig::from_path(&path).unwrap();
        assert_eq!(config.build().unwrap().name(), "LogTransformation");

        std::fs::remove_file(path).ok();
    }
}
