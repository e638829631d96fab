//! Configuration types for the roster.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

fn default_double_click_ms() -> u64 {
    500
}

fn default_max_recurring_days() -> i64 {
    366
}

/// Roster-wide settings from `roster.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterMetadata {
    /// Human-readable name of the roster (e.g. the shop or team).
    pub name: String,
    /// ISO currency code that rates and salaries are expressed in.
    pub currency: String,
    /// Maximum gap between two clicks on a shift that still counts as a
    /// double click, in milliseconds.
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
    /// Longest date range, in days, a recurring definition may span.
    #[serde(default = "default_max_recurring_days")]
    pub max_recurring_days: i64,
}

/// Display palette from `palette.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    /// Colors assigned to staff by `color_index` modulo the list length.
    pub colors: Vec<String>,
}

/// A named slice of the working day, e.g. "Morning" 8:30–12:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoveragePeriod {
    /// Display name.
    pub name: String,
    /// First slot of the period.
    pub start: String,
    /// Slot the period ends at (exclusive).
    pub end: String,
}

/// Coverage periods file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodsConfig {
    /// The periods in display order.
    pub periods: Vec<CoveragePeriod>,
}

/// The complete roster configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    metadata: RosterMetadata,
    palette: Vec<String>,
    periods: Vec<CoveragePeriod>,
}

impl RosterConfig {
    /// Creates a new RosterConfig from its component parts.
    pub fn new(metadata: RosterMetadata, palette: Vec<String>, periods: Vec<CoveragePeriod>) -> Self {
        Self {
            metadata,
            palette,
            periods,
        }
    }

    /// Returns the roster metadata.
    pub fn roster(&self) -> &RosterMetadata {
        &self.metadata
    }

    /// Returns the display palette.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Returns the coverage periods.
    pub fn periods(&self) -> &[CoveragePeriod] {
        &self.periods
    }
}
