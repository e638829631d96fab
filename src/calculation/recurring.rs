//! Recurring shift expansion.
//!
//! A recurring shift is one definition (staff, times, weekdays, date range)
//! that becomes one concrete shift per matching calendar day. Nothing here
//! touches the store; callers persist the drafts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::grid::{iso_date, weekday_from_label, weekday_index};
use crate::models::{NewShift, ShiftType};

fn selected_columns<S: AsRef<str>>(weekdays: &[S]) -> [bool; 7] {
    let mut selected = [false; 7];
    for label in weekdays {
        match weekday_from_label(label.as_ref()) {
            Some(column) => selected[column] = true,
            None => tracing::debug!(label = %label.as_ref(), "Ignoring unknown weekday label"),
        }
    }
    selected
}

/// Lazily yields each date in `[start, end]` whose weekday is selected.
///
/// Yields nothing when `start > end` or no known weekday is selected.
pub fn recurring_dates<S: AsRef<str>>(
    start: NaiveDate,
    end: NaiveDate,
    weekdays: &[S],
) -> impl Iterator<Item = NaiveDate> {
    let selected = selected_columns(weekdays);
    let any_selected = selected.iter().any(|&on| on);

    start
        .iter_days()
        .take_while(move |date| any_selected && *date <= end)
        .filter(move |date| selected[weekday_index(*date)])
}

/// ISO date strings for each selected weekday between `start` and `end`
/// inclusive, in chronological order.
///
/// # Examples
///
/// ```
/// use shift_roster::calculation::generate_recurring_dates;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(); // Monday
/// let end = NaiveDate::from_ymd_opt(2026, 1, 25).unwrap();
/// let dates = generate_recurring_dates(start, end, &["Mon", "Fri"]);
/// assert_eq!(dates, vec!["2026-01-12", "2026-01-16", "2026-01-19", "2026-01-23"]);
/// ```
pub fn generate_recurring_dates<S: AsRef<str>>(
    start: NaiveDate,
    end: NaiveDate,
    weekdays: &[S],
) -> Vec<String> {
    recurring_dates(start, end, weekdays).map(iso_date).collect()
}

/// A shift definition repeated on chosen weekdays over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringShift {
    /// The staff member working every occurrence.
    pub staff_id: String,
    /// The kind of shift.
    pub shift_type: ShiftType,
    /// Start time for working shifts.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time for working shifts.
    #[serde(default)]
    pub end_time: Option<String>,
    /// First date of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last date of the range (inclusive).
    pub end_date: NaiveDate,
    /// Weekday labels to repeat on.
    pub weekdays: Vec<String>,
}

impl RecurringShift {
    /// One unsaved shift per matching date.
    pub fn expand(&self) -> Vec<NewShift> {
        recurring_dates(self.start_date, self.end_date, &self.weekdays)
            .map(|day| NewShift {
                staff_id: self.staff_id.clone(),
                day,
                shift_type: self.shift_type,
                start_time: self.start_time.clone(),
                end_time: self.end_time.clone(),
            })
            .collect()
    }
}
