//! Pay period model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// An inclusive date range that payroll is computed over.
///
/// # Example
///
/// ```
/// use shift_roster::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::month(2026, 1).unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// The calendar month `year`-`month`.
    pub fn month(year: i32, month: u32) -> RosterResult<Self> {
        let invalid = || RosterError::InvalidDate {
            value: format!("{}-{:02}", year, month),
        };
        let start_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let end_date = next_start
            .and_then(|date| date.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this pay period, inclusive of
    /// both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
