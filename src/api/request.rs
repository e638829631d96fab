//! Request types for the roster API.
//!
//! Shift rows are accepted as the store hands them over, so legacy
//! weekday labels and padded times are normalized before any calculation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::models::{Compensation, PayPeriod, Shift, ShiftRecord, ShiftType, StaffMember};

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Staff to report on.
    pub staff: Vec<StaffRequest>,
    /// Shift rows; those outside the pay period are ignored.
    pub shifts: Vec<ShiftRequest>,
    /// The reporting window.
    pub pay_period: PayPeriodRequest,
}

/// Request body for the `/coverage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageRequest {
    /// Shift rows.
    pub shifts: Vec<ShiftRequest>,
    /// Any date in the week to show; the grid starts on its Monday.
    pub week_start: NaiveDate,
}

/// Request body for the `/recurring-dates` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringDatesRequest {
    /// First date of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the range (inclusive).
    pub end_date: NaiveDate,
    /// Weekday labels, e.g. `["Mon", "Wed"]`.
    pub weekdays: Vec<String>,
}

impl RecurringDatesRequest {
    /// Rejects ranges longer than `max_days` days.
    ///
    /// An inverted range is allowed and simply yields no dates.
    pub fn check_span(&self, max_days: i64) -> RosterResult<()> {
        let span = (self.end_date - self.start_date).num_days();
        if span > max_days {
            return Err(RosterError::InvalidDate {
                value: format!(
                    "{}..{} spans {} days, more than the allowed {}",
                    self.start_date, self.end_date, span, max_days
                ),
            });
        }
        Ok(())
    }
}

/// Staff member information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRequest {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Pay arrangement.
    pub compensation: Compensation,
    /// Whether the staff member is currently employed.
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Manual sort position.
    #[serde(default)]
    pub display_order: i32,
}

fn default_active() -> bool {
    true
}

/// Pay period information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// Shift row in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff member working the shift.
    pub staff_id: String,
    /// ISO date or legacy weekday label.
    pub day: String,
    /// The kind of shift.
    pub shift_type: ShiftType,
    /// Start time.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time.
    #[serde(default)]
    pub end_time: Option<String>,
}

impl From<StaffRequest> for StaffMember {
    fn from(req: StaffRequest) -> Self {
        let mut staff = StaffMember::new(req.id, req.name, req.compensation);
        staff.is_active = req.is_active;
        staff.display_order = req.display_order;
        staff
    }
}

impl TryFrom<PayPeriodRequest> for PayPeriod {
    type Error = RosterError;

    fn try_from(req: PayPeriodRequest) -> RosterResult<Self> {
        if req.end_date < req.start_date {
            return Err(RosterError::InvalidDate {
                value: format!("{}..{}", req.start_date, req.end_date),
            });
        }
        Ok(PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        })
    }
}

impl From<ShiftRequest> for ShiftRecord {
    fn from(req: ShiftRequest) -> Self {
        ShiftRecord {
            id: req.id,
            staff_id: req.staff_id,
            day: req.day,
            shift_type: req.shift_type,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

/// Normalizes request rows, resolving weekday labels in the week of
/// `reference`.
pub(crate) fn normalize_shifts(
    shifts: Vec<ShiftRequest>,
    reference: NaiveDate,
) -> RosterResult<Vec<Shift>> {
    shifts
        .into_iter()
        .map(|req| ShiftRecord::from(req).normalize(reference))
        .collect()
}
