//! bdo-profile: Black Desert family profile viewer
//!
//! This crate resolves a family name to its profile page on the Black Desert
//! website, extracts the family, life skill and character data from the HTML,
//! and drives an interactive terminal session around that pipeline. Batch
//! helpers export profiles as JSON, read and write guild rosters as CSV, and
//! average the gearscore of a folder of exported profiles.

pub mod config;
pub mod export;
pub mod extract;
pub mod fetcher;
pub mod model;
pub mod session;
pub mod tui;

use thiserror::Error;

/// Main error type for profile retrieval and export
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("server returned status: {status}")]
    HttpStatus { url: String, status: String },

    #[error("Could not find profile link for '{family}'. May not exist or profile is private")]
    ProfileNotFound { family: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Result type alias for profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetcher::ProfileClient;
pub use model::{parse_papd, Character, FamilyInfo, LifeSkill, Profile};
pub use session::{Command, Completion, Key, SessionController, SessionState};
