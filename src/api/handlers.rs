//! HTTP request handlers for the roster API.
//!
//! Every handler is a thin wrapper over the pure calculation functions:
//! decode, normalize the shift rows, calculate, encode.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{generate_recurring_dates, payroll_report, period_coverage, weekly_coverage};
use crate::error::RosterError;
use crate::grid::week_dates;
use crate::models::{PayPeriod, StaffMember};

use super::request::{normalize_shifts, CoverageRequest, PayrollRequest, RecurringDatesRequest};
use super::response::{
    ApiError, ApiErrorResponse, CoverageResponse, DailyPeriods, RecurringDatesResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/coverage", post(coverage_handler))
        .route("/recurring-dates", post(recurring_dates_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(correlation_id: Uuid, err: RosterError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a body decoding failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /payroll.
///
/// Aggregates hours and pay per staff member over the requested period.
async fn payroll_handler(
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let pay_period = match PayPeriod::try_from(request.pay_period) {
        Ok(period) => period,
        Err(err) => return error_response(correlation_id, err),
    };
    let shifts = match normalize_shifts(request.shifts, pay_period.start_date) {
        Ok(shifts) => shifts,
        Err(err) => return error_response(correlation_id, err),
    };
    let staff: Vec<StaffMember> = request.staff.into_iter().map(Into::into).collect();
    if let Some(err) = staff.iter().find_map(|member| member.validate().err()) {
        return error_response(correlation_id, err);
    }

    let start_time = Instant::now();
    let report = payroll_report(&staff, &shifts, pay_period);
    info!(
        correlation_id = %correlation_id,
        staff_count = report.lines.len(),
        shifts_count = shifts.len(),
        total_pay = %report.totals.total_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll completed successfully"
    );
    json_response(StatusCode::OK, report)
}

/// Handler for POST /coverage.
///
/// Returns the weekly slot grid plus coverage of each configured period.
async fn coverage_handler(
    State(state): State<AppState>,
    payload: Result<Json<CoverageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing coverage request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let shifts = match normalize_shifts(request.shifts, request.week_start) {
        Ok(shifts) => shifts,
        Err(err) => return error_response(correlation_id, err),
    };

    let start_time = Instant::now();
    let grid = weekly_coverage(&shifts, request.week_start);
    let configured = state.config().config().periods();
    let periods = week_dates(request.week_start)
        .into_iter()
        .map(|date| DailyPeriods {
            date,
            periods: period_coverage(&shifts, configured, date),
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        week_start = %grid.week_start,
        shifts_count = shifts.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Coverage completed successfully"
    );
    json_response(StatusCode::OK, CoverageResponse { grid, periods })
}

/// Handler for POST /recurring-dates.
///
/// Ranges longer than the configured `max_recurring_days` are rejected.
async fn recurring_dates_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecurringDatesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing recurring dates request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.check_span(state.config().roster().max_recurring_days) {
        return error_response(correlation_id, err);
    }

    let dates = generate_recurring_dates(request.start_date, request.end_date, &request.weekdays);
    info!(
        correlation_id = %correlation_id,
        dates_count = dates.len(),
        "Recurring dates generated"
    );
    json_response(StatusCode::OK, RecurringDatesResponse { dates })
}
