//! Configuration loading and management for the severance calculator.
//!
//! This module provides functionality to load the calculator configuration
//! from YAML files: regulation metadata, the consultation contact and the
//! HTTP binding.
//!
//! # Example
//!
//! ```no_run
//! use pesangon_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pesangon").unwrap();
//! println!("Loaded regulation: {}", config.regulation().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, ContactConfig, RegulationMetadata, ServerConfig};
