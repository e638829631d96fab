//! Week and month bucketing for the calendar views.

use chrono::{Duration, NaiveDate};

use crate::error::{RosterError, RosterResult};

use super::time_slots::weekday_index;

/// Formats a date as `YYYY-MM-DD`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a `YYYY-MM-DD` string.
pub fn parse_iso_date(value: &str) -> RosterResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| RosterError::InvalidDate {
        value: value.to_string(),
    })
}

/// Returns the seven dates of the Monday-start week containing `date`.
///
/// # Examples
///
/// ```
/// use shift_roster::grid::week_dates;
/// use chrono::NaiveDate;
///
/// // 2026-01-15 is a Thursday
/// let week = week_dates(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// assert_eq!(week[0], NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(week[6], NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// ```
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = date - Duration::days(weekday_index(date) as i64);
    std::array::from_fn(|offset| monday + Duration::days(offset as i64))
}

/// Lays out a month as Monday-start rows.
///
/// Cells outside the month are `None`. A month is always covered by four
/// to six rows.
pub fn month_weeks(year: i32, month: u32) -> RosterResult<Vec<[Option<NaiveDate>; 7]>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| RosterError::InvalidDate {
        value: format!("{}-{:02}", year, month),
    })?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next_first| next_first.pred_opt())
        .ok_or_else(|| RosterError::InvalidDate {
            value: format!("{}-{:02}", year, month),
        })?;

    let mut rows = Vec::new();
    let mut week_start = week_dates(first)[0];

    while week_start <= last {
        let row = week_dates(week_start).map(|day| {
            if day >= first && day <= last {
                Some(day)
            } else {
                None
            }
        });
        rows.push(row);
        week_start += Duration::days(7);
    }

    Ok(rows)
}
