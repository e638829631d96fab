//! Error types for the shift roster engine.
//!
//! Lookup misses in the time grid are modelled as `Option::None` and never
//! reach this module. Everything that can actually fail (configuration,
//! boundary validation, store access) is reported through [`RosterError`].

use thiserror::Error;

/// The main error type for the shift roster engine.
///
/// # Example
///
/// ```
/// use shift_roster::error::RosterError;
///
/// let error = RosterError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time string could not be interpreted as "H:MM".
    #[error("Invalid time '{value}'")]
    InvalidTime {
        /// The rejected value.
        value: String,
    },

    /// A date or calendar month was out of range.
    #[error("Invalid date '{value}'")]
    InvalidDate {
        /// The rejected value.
        value: String,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift (empty for unsaved drafts).
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A staff record was invalid or contained inconsistent data.
    #[error("Invalid staff field '{field}': {message}")]
    InvalidStaff {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No staff member exists with the given id.
    #[error("Staff member not found: {id}")]
    StaffNotFound {
        /// The missing staff id.
        id: String,
    },

    /// No shift exists with the given id.
    #[error("Shift not found: {id}")]
    ShiftNotFound {
        /// The missing shift id.
        id: String,
    },

    /// The backing data store rejected or failed a call.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// Some writes of a batch failed while others were applied.
    #[error("{failed} of {total} batch writes failed")]
    PartialBatchFailure {
        /// Number of failed writes.
        failed: usize,
        /// Number of writes attempted.
        total: usize,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = RosterError::ConfigParseError {
            path: "/config/periods.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/periods.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_shift_displays_id_and_message() {
        let error = RosterError::InvalidShift {
            shift_id: "shift_001".to_string(),
            message: "end time must be after start time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift 'shift_001': end time must be after start time"
        );
    }

    #[test]
    fn test_partial_batch_failure_displays_counts() {
        let error = RosterError::PartialBatchFailure { failed: 2, total: 5 };
        assert_eq!(error.to_string(), "2 of 5 batch writes failed");
    }

    #[test]
    fn test_staff_not_found_displays_id() {
        let error = RosterError::StaffNotFound {
            id: "staff_9".to_string(),
        };
        assert_eq!(error.to_string(), "Staff member not found: staff_9");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RosterError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_time() -> RosterResult<()> {
            Err(RosterError::InvalidTime {
                value: "25:00".to_string(),
            })
        }

        fn propagates_error() -> RosterResult<()> {
            returns_invalid_time()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
