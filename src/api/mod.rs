//! HTTP API for the shift roster engine.
//!
//! JSON endpoints over the pure calculations: payroll aggregation, weekly
//! coverage and recurring date generation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CoverageRequest, PayPeriodRequest, PayrollRequest, RecurringDatesRequest, ShiftRequest,
    StaffRequest,
};
pub use response::{ApiError, CoverageResponse, DailyPeriods, RecurringDatesResponse};
pub use state::AppState;
