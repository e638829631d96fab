//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading roster
//! configuration from YAML files.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{RosterError, RosterResult};
use crate::grid::slot_index;
use crate::models::StaffMember;

use super::types::{CoveragePeriod, PaletteConfig, PeriodsConfig, RosterConfig, RosterMetadata};

/// Loads and provides access to roster configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── roster.yaml    # Roster name, currency, double-click window
/// ├── palette.yaml   # Staff display colors
/// └── periods.yaml   # Named coverage periods
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let morning = loader.period("Morning").unwrap();
/// println!("Morning runs {} to {}", morning.start, morning.end);
/// # Ok::<(), shift_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails with `ConfigNotFound` if a file is missing and with
    /// `ConfigParseError` if a file is malformed, the palette is empty, or a
    /// period does not sit on the slot table.
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RosterMetadata>(&path.join("roster.yaml"))?;

        let palette_path = path.join("palette.yaml");
        let palette = Self::load_yaml::<PaletteConfig>(&palette_path)?;
        if palette.colors.is_empty() {
            return Err(RosterError::ConfigParseError {
                path: palette_path.display().to_string(),
                message: "palette must contain at least one color".to_string(),
            });
        }

        let periods_path = path.join("periods.yaml");
        let periods = Self::load_yaml::<PeriodsConfig>(&periods_path)?;
        for period in &periods.periods {
            Self::validate_period(period).map_err(|message| RosterError::ConfigParseError {
                path: periods_path.display().to_string(),
                message,
            })?;
        }

        tracing::info!(
            roster = %metadata.name,
            colors = palette.colors.len(),
            periods = periods.periods.len(),
            "Loaded roster configuration"
        );

        Ok(Self {
            config: RosterConfig::new(metadata, palette.colors, periods.periods),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RosterResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RosterError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_period(period: &CoveragePeriod) -> Result<(), String> {
        let start = slot_index(&period.start).ok_or_else(|| {
            format!(
                "period '{}' starts at '{}', which is not a grid slot",
                period.name, period.start
            )
        })?;
        let end = slot_index(&period.end).ok_or_else(|| {
            format!(
                "period '{}' ends at '{}', which is not a grid slot",
                period.name, period.end
            )
        })?;
        if start >= end {
            return Err(format!("period '{}' must end after it starts", period.name));
        }
        Ok(())
    }

    /// Returns the underlying roster configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the roster metadata.
    pub fn roster(&self) -> &RosterMetadata {
        self.config.roster()
    }

    /// Looks up a coverage period by name.
    pub fn period(&self, name: &str) -> Option<&CoveragePeriod> {
        self.config.periods().iter().find(|period| period.name == name)
    }

    /// The display color for a staff member.
    pub fn color_for(&self, staff: &StaffMember) -> &str {
        // The palette is never empty after load.
        staff.color(self.config.palette()).unwrap_or_default()
    }

    /// The double-click window as a duration.
    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.config.roster().double_click_ms)
    }
}
