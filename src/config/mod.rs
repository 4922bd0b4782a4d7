//! Configuration module for Enlaces-SAT
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and supplies the built-in defaults pointing at the SAT portal.
//!
//! # Example
//!
//! ```no_run
//! use enlaces_sat::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Output file: {}", config.output.links_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FilterConfig, OutputConfig, SourceConfig};

// Re-export parser functions
pub use parser::{default_config, load_config};
