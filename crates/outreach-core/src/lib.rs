//! Shared data shapes and pure logic for the influencer outreach dashboard.

pub mod app_config;
pub mod brief;
pub mod config;
pub mod contact;
pub mod filter;
pub mod influencer;
pub mod parse;
pub mod performance;
pub mod roster;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use brief::{BriefForm, BriefKind, ClientBrief, PRODUCT_SERVICES, TARGET_AUDIENCES};
pub use config::{load_app_config, load_app_config_from_env};
pub use contact::{contact_message, ContactRequest, ContactResponse, HealthStatus, SearchRequest};
pub use filter::{filter_influencers, InfluencerFilter, PlatformFilter};
pub use influencer::{FollowerCount, Influencer, Platform};
pub use performance::{
    bundled_performance, load_performance, CampaignPerformance, ContentFeedback, ContentKind,
    ContentMetrics, DailyMetrics, InfluencerContent,
};
pub use roster::{bundled_roster, load_roster};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read roster file {path}: {source}")]
    RosterFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse roster file: {0}")]
    RosterFileParse(#[from] serde_yaml::Error),

    #[error("failed to read performance file {path}: {source}")]
    PerformanceFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse performance file: {0}")]
    PerformanceFileParse(#[source] serde_yaml::Error),

    #[error("data validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("brief field '{0}' is required")]
    MissingField(&'static str),

    #[error("brief field '{field}' has unsupported value '{value}'")]
    InvalidOption { field: &'static str, value: String },
}
