pub mod app_config;
pub mod config;
pub mod locale;
pub mod records;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use locale::{base_language, resolve_locale, DEFAULT_LOCALE};
pub use records::{CompleteRecord, DetailRecord, Field, PlaceDetails, SummaryRecord, SENTINEL};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
