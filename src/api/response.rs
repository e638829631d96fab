//! Response types for the roster API.
//!
//! This module defines the success bodies that are not plain domain types
//! and the error structure every endpoint returns on failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{CoverageGrid, PeriodCoverage};
use crate::error::RosterError;

/// Response body for the `/coverage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageResponse {
    /// The 7 × 26 slot grid.
    #[serde(flatten)]
    pub grid: CoverageGrid,
    /// Per-day coverage of the configured named periods.
    pub periods: Vec<DailyPeriods>,
}

/// Named-period coverage for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPeriods {
    /// The calendar date.
    pub date: NaiveDate,
    /// One entry per configured period.
    pub periods: Vec<PeriodCoverage>,
}

/// Response body for the `/recurring-dates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringDatesResponse {
    /// ISO dates in ascending order.
    pub dates: Vec<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

fn bad_request(error: ApiError) -> ApiErrorResponse {
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
}

fn server_error(error: ApiError) -> ApiErrorResponse {
    ApiErrorResponse {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        error,
    }
}

impl From<RosterError> for ApiErrorResponse {
    fn from(error: RosterError) -> Self {
        let message = error.to_string();
        match error {
            RosterError::ConfigNotFound { path } => server_error(ApiError::with_details(
                "CONFIG_ERROR",
                "Configuration error",
                format!("Configuration file not found: {}", path),
            )),
            RosterError::ConfigParseError { path, message } => {
                server_error(ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ))
            }
            RosterError::InvalidTime { .. } => bad_request(ApiError::new("INVALID_TIME", message)),
            RosterError::InvalidDate { .. } => bad_request(ApiError::new("INVALID_DATE", message)),
            RosterError::InvalidShift { .. } => bad_request(ApiError::with_details(
                "INVALID_SHIFT",
                message,
                "The shift data contains invalid information",
            )),
            RosterError::InvalidStaff { .. } => bad_request(ApiError::with_details(
                "INVALID_STAFF",
                message,
                "The staff data contains invalid information",
            )),
            RosterError::StaffNotFound { .. } => {
                bad_request(ApiError::new("STAFF_NOT_FOUND", message))
            }
            RosterError::ShiftNotFound { .. } => {
                bad_request(ApiError::new("SHIFT_NOT_FOUND", message))
            }
            RosterError::Store { .. } => server_error(ApiError::new("STORE_ERROR", message)),
            RosterError::PartialBatchFailure { .. } => {
                server_error(ApiError::new("PARTIAL_BATCH_FAILURE", message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_shift_maps_to_bad_request() {
        let api_error: ApiErrorResponse = RosterError::InvalidShift {
            shift_id: "sh1".to_string(),
            message: "unrecognised day 'Funday'".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_SHIFT");
        assert!(api_error.error.message.contains("Funday"));
    }

    #[test]
    fn test_store_error_maps_to_server_error() {
        let api_error: ApiErrorResponse = RosterError::Store {
            message: "connection reset".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "STORE_ERROR");
    }
}
