//! Domain types and presentation logic shared by the fibercheck client,
//! server and CLI.

pub mod address;
pub mod app_config;
pub mod config;
pub mod coverage;
pub mod locale;
pub mod render;

use thiserror::Error;

pub use address::{AddressQuery, Field};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use coverage::{CoverageResponse, CoverageResult, CoverageStatus};
pub use locale::Locale;
pub use render::{
    format_query, provider_initials, results_view, status_presentation, CardView, Icon,
    OffersLink, ResultsView, StatusPresentation, Tone,
};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown address field: {0}")]
    UnknownField(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
