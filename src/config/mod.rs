//! Configuration module for bdo-profile
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default matching the live site, so
//! the tool runs without any file at all.
//!
//! # Example
//!
//! ```no_run
//! use bdo_profile::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("bdo-profile.toml")).unwrap();
//! println!("Fetching from: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetchConfig, LabelConfig, OutputConfig, SelectorConfig, SiteConfig,
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, load_or_default};
pub use validation::validate;
