//! Configuration loading and management for the roster.
//!
//! This module loads roster settings from YAML files: roster metadata, the
//! staff display palette and the named coverage periods.
//!
//! # Example
//!
//! ```no_run
//! use shift_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded roster: {}", config.roster().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CoveragePeriod, PaletteConfig, PeriodsConfig, RosterConfig, RosterMetadata};
