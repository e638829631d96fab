//! Staff coverage over the time grid.
//!
//! A shift covers the half-open slot interval `[start, end)`: a shift ending
//! at "18:00" is not on duty in the "18:00" slot. Any time that misses the
//! slot table makes the shift inactive rather than an error.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CoveragePeriod;
use crate::grid::{TIME_SLOTS, slot_index, week_dates, weekday_label};
use crate::models::Shift;

/// Display band for a staff count.
///
/// # Example
///
/// ```
/// use shift_roster::calculation::{CoverageLevel, intensity_class};
///
/// assert_eq!(intensity_class(0), CoverageLevel::None);
/// assert_eq!(intensity_class(7), CoverageLevel::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageLevel {
    /// Nobody on duty.
    None,
    /// One person on duty.
    Low,
    /// Two people on duty.
    Adequate,
    /// Three or more people on duty.
    High,
}

/// Maps a staff count onto its [`CoverageLevel`].
pub fn intensity_class(count: usize) -> CoverageLevel {
    match count {
        0 => CoverageLevel::None,
        1 => CoverageLevel::Low,
        2 => CoverageLevel::Adequate,
        _ => CoverageLevel::High,
    }
}

/// Whether `shift` is on duty during `slot`.
///
/// # Examples
///
/// ```
/// use shift_roster::calculation::is_active;
/// use shift_roster::models::{Shift, ShiftType};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let shift = Shift::working("sh1", "s1", day, ShiftType::Regular, "9:00", "18:00");
/// assert!(is_active(&shift, "9:00"));
/// assert!(!is_active(&shift, "18:00"));
/// ```
pub fn is_active(shift: &Shift, slot: &str) -> bool {
    match (shift.slot_range(), slot_index(slot)) {
        (Some((start, end)), Some(index)) => start <= index && index < end,
        _ => false,
    }
}

fn is_active_at(shift: &Shift, index: usize) -> bool {
    matches!(shift.slot_range(), Some((start, end)) if start <= index && index < end)
}

/// Staff ids on a working shift on `date` during `slot`.
pub fn coverage(shifts: &[Shift], slot: &str, date: NaiveDate) -> BTreeSet<String> {
    shifts
        .iter()
        .filter(|shift| shift.day == date && shift.is_working() && is_active(shift, slot))
        .map(|shift| shift.staff_id.clone())
        .collect()
}

/// Staff ids on duty at any slot of the half-open range `[from, to)`.
///
/// Every slot in the range is checked, so shifts starting or ending mid-range
/// are counted. An unmatched bound yields an empty set.
pub fn coverage_over_range(
    shifts: &[Shift],
    from: &str,
    to: &str,
    date: NaiveDate,
) -> BTreeSet<String> {
    let (Some(from_index), Some(to_index)) = (slot_index(from), slot_index(to)) else {
        return BTreeSet::new();
    };

    let on_day: Vec<&Shift> = shifts
        .iter()
        .filter(|shift| shift.day == date && shift.is_working())
        .collect();

    (from_index..to_index)
        .flat_map(|index| {
            on_day
                .iter()
                .filter(move |shift| is_active_at(shift, index))
                .map(|shift| shift.staff_id.clone())
        })
        .collect()
}

/// One cell of the coverage grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageCell {
    /// The slot label, e.g. "9:00".
    pub slot: String,
    /// Staff on duty, sorted.
    pub staff_ids: Vec<String>,
    /// Display band for the count.
    pub level: CoverageLevel,
}

/// One column of the coverage grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// The weekday label.
    pub label: String,
    /// One cell per slot, in slot-table order.
    pub slots: Vec<CoverageCell>,
}

/// Coverage for a full Monday-start week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageGrid {
    /// Monday of the week.
    pub week_start: NaiveDate,
    /// Seven columns, Monday first.
    pub days: Vec<CoverageDay>,
}

impl CoverageGrid {
    /// Looks up a cell by column and slot index.
    pub fn cell(&self, day: usize, slot: usize) -> Option<&CoverageCell> {
        self.days.get(day).and_then(|column| column.slots.get(slot))
    }
}

/// Builds the 7 × 26 coverage grid for the week containing `date`.
pub fn weekly_coverage(shifts: &[Shift], date: NaiveDate) -> CoverageGrid {
    let week = week_dates(date);

    let days = week
        .iter()
        .map(|&day| {
            let on_day: Vec<&Shift> = shifts
                .iter()
                .filter(|shift| shift.day == day && shift.is_working())
                .collect();

            let slots = TIME_SLOTS
                .iter()
                .enumerate()
                .map(|(index, slot)| {
                    let staff: BTreeSet<&str> = on_day
                        .iter()
                        .filter(|shift| is_active_at(shift, index))
                        .map(|shift| shift.staff_id.as_str())
                        .collect();
                    CoverageCell {
                        slot: slot.to_string(),
                        level: intensity_class(staff.len()),
                        staff_ids: staff.into_iter().map(str::to_string).collect(),
                    }
                })
                .collect();

            CoverageDay {
                date: day,
                label: weekday_label(day).to_string(),
                slots,
            }
        })
        .collect();

    CoverageGrid {
        week_start: week[0],
        days,
    }
}

/// Coverage summary for one named period of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCoverage {
    /// The period name, e.g. "Morning".
    pub name: String,
    /// Staff on duty at some point during the period, sorted.
    pub staff_ids: Vec<String>,
    /// Display band for the count.
    pub level: CoverageLevel,
}

/// Coverage for each configured period on `date`.
pub fn period_coverage(
    shifts: &[Shift],
    periods: &[CoveragePeriod],
    date: NaiveDate,
) -> Vec<PeriodCoverage> {
    periods
        .iter()
        .map(|period| {
            let staff = coverage_over_range(shifts, &period.start, &period.end, date);
            PeriodCoverage {
                name: period.name.clone(),
                level: intensity_class(staff.len()),
                staff_ids: staff.into_iter().collect(),
            }
        })
        .collect()
}
