//! Word counting, keyword ranking and lexicon sentiment for short text.
//!
//! [`analyze`] is the whole computation; the rest of the crate is the shared
//! result type and the server configuration loader.

pub mod analyzer;
pub mod app_config;
pub mod config;
pub mod frequency;
pub mod lexicon;
pub mod types;

use thiserror::Error;

pub use analyzer::{analyze, normalize_token, tokens, MAX_KEYWORDS};
pub use app_config::{AppConfig, Environment};
pub use config::{build_app_config, load_app_config, load_app_config_from_env};
pub use frequency::FrequencyTable;
pub use lexicon::{sentiment_weight, NEGATIVE_WORDS, POSITIVE_WORDS};
pub use types::AnalysisResult;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
