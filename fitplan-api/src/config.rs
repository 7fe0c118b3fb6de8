use std::{env, path::PathBuf, str::FromStr};

use dotenv::dotenv;
use fitplan_engine::classifier::ForestParameters;
use fitplan_model::bmi::ActivityLevel;

#[derive(Debug, thiserror::Error)]
#[error("invalid value \"{value}\" for {key}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
}

/// Service settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_address: String,
    pub port: u16,
    pub dataset_path: PathBuf,
    pub plans_path: PathBuf,
    pub suggestions_path: PathBuf,
    pub forest: ForestParameters,
    pub activity_level: ActivityLevel,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = ForestParameters::default();
        let n_trees = parse_or(&lookup, "MODEL_TREES", defaults.n_trees)?;
        if n_trees == 0 {
            return Err(ConfigError {
                key: "MODEL_TREES",
                value: n_trees.to_string(),
            });
        }

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1".to_owned()),
            port: parse_or(&lookup, "PORT", 5001)?,
            dataset_path: path_or(&lookup, "DATASET_PATH", "data/final_dataset.csv"),
            plans_path: path_or(&lookup, "PLANS_PATH", "data/plans.ron"),
            suggestions_path: path_or(&lookup, "SUGGESTIONS_PATH", "data/suggestions.ron"),
            forest: ForestParameters {
                n_trees,
                seed: parse_or(&lookup, "MODEL_SEED", defaults.seed)?,
            },
            activity_level: parse_or(&lookup, "ACTIVITY_LEVEL", ActivityLevel::default())?,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError { key, value }),
    }
}

fn path_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> PathBuf {
    lookup(key)
        .unwrap_or_else(|| default.to_owned())
        .into()
}
