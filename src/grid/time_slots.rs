//! The fixed half-hour slot table and weekday labels.
//!
//! Every shift time in the roster is mapped onto [`TIME_SLOTS`], and every
//! calendar date onto one of the [`WEEKDAYS`] columns. Times in the table are
//! never zero-padded, so externally sourced values must go through
//! [`normalize_time`] before any lookup.

use chrono::{Datelike, NaiveDate};

/// Number of slots in the time grid.
pub const SLOT_COUNT: usize = 26;

/// The ordered half-hour marks from "8:30" to "21:00".
pub const TIME_SLOTS: [&str; SLOT_COUNT] = [
    "8:30", "9:00", "9:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00",
    "13:30", "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30", "18:00",
    "18:30", "19:00", "19:30", "20:00", "20:30", "21:00",
];

/// Weekday column labels, Monday first.
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Returns the position of `time` in the slot table.
///
/// Only exact matches count: `"09:00"` is not found, `"9:00"` is.
///
/// # Examples
///
/// ```
/// use shift_roster::grid::slot_index;
///
/// assert_eq!(slot_index("8:30"), Some(0));
/// assert_eq!(slot_index("21:00"), Some(25));
/// assert_eq!(slot_index("09:00"), None);
/// ```
pub fn slot_index(time: &str) -> Option<usize> {
    TIME_SLOTS.iter().position(|slot| *slot == time)
}

/// Returns the slot label at `index`, if it is inside the table.
pub fn slot_time(index: usize) -> Option<&'static str> {
    TIME_SLOTS.get(index).copied()
}

/// Returns the slot immediately after `time`.
///
/// Saturates: the last slot and unmatched values come back unchanged.
///
/// # Examples
///
/// ```
/// use shift_roster::grid::next_slot;
///
/// assert_eq!(next_slot("9:00"), "9:30");
/// assert_eq!(next_slot("21:00"), "21:00");
/// assert_eq!(next_slot("7:00"), "7:00");
/// ```
pub fn next_slot(time: &str) -> &str {
    match slot_index(time).and_then(|index| slot_time(index + 1)) {
        Some(next) => next,
        None => time,
    }
}

/// Column index of `date` with Monday as 0 and Sunday as 6.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// The weekday label for `date`.
///
/// # Examples
///
/// ```
/// use shift_roster::grid::weekday_label;
/// use chrono::NaiveDate;
///
/// // 2026-01-18 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(weekday_label(sunday), "Sun");
/// ```
pub fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAYS[weekday_index(date)]
}

/// Resolves a weekday label back to its column index.
pub fn weekday_from_label(label: &str) -> Option<usize> {
    WEEKDAYS.iter().position(|day| *day == label)
}

/// Brings an external time value into slot-table form.
///
/// Strips the leading zero from the hour and drops any seconds component,
/// so `"09:00"` and `"09:00:00"` both become `"9:00"`. Values that do not
/// look like a time are returned trimmed but otherwise untouched; they will
/// simply miss in [`slot_index`].
///
/// # Examples
///
/// ```
/// use shift_roster::grid::normalize_time;
///
/// assert_eq!(normalize_time("09:00:00"), "9:00");
/// assert_eq!(normalize_time("08:30"), "8:30");
/// assert_eq!(normalize_time("13:30"), "13:30");
/// ```
pub fn normalize_time(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut parts = trimmed.split(':');

    match (parts.next(), parts.next()) {
        (Some(hour), Some(minute)) => match hour.parse::<u32>() {
            Ok(hour) => format!("{}:{}", hour, minute),
            Err(_) => trimmed.to_string(),
        },
        _ => trimmed.to_string(),
    }
}

/// Parses an "H:MM" string into minutes since midnight.
///
/// Returns `None` for anything that is not a valid wall-clock time.
pub fn time_to_minutes(time: &str) -> Option<u32> {
    let (hour, minute) = time.trim().split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    if hour >= 24 || minute >= 60 {
        return None;
    }

    Some(hour * 60 + minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_table_has_26_half_hour_marks() {
        assert_eq!(TIME_SLOTS.len(), 26);
        assert_eq!(TIME_SLOTS[0], "8:30");
        assert_eq!(TIME_SLOTS[25], "21:00");

        for pair in TIME_SLOTS.windows(2) {
            let a = time_to_minutes(pair[0]).unwrap();
            let b = time_to_minutes(pair[1]).unwrap();
            assert_eq!(b - a, 30);
        }
    }

    #[test]
    fn test_slot_index_requires_exact_match() {
        assert_eq!(slot_index("9:00"), Some(1));
        assert_eq!(slot_index("09:00"), None);
        assert_eq!(slot_index("8:00"), None);
        assert_eq!(slot_index(""), None);
    }

    #[test]
    fn test_next_slot_saturates_at_end() {
        assert_eq!(next_slot("20:30"), "21:00");
        assert_eq!(next_slot("21:00"), "21:00");
    }

    #[test]
    fn test_next_slot_returns_unmatched_unchanged() {
        assert_eq!(next_slot("09:00"), "09:00");
        assert_eq!(next_slot("garbage"), "garbage");
    }

    #[test]
    fn test_weekday_label_monday_first() {
        // 2026-01-12 is a Monday
        assert_eq!(weekday_label(make_date("2026-01-12")), "Mon");
        assert_eq!(weekday_index(make_date("2026-01-12")), 0);
        assert_eq!(weekday_label(make_date("2026-01-17")), "Sat");
        assert_eq!(weekday_index(make_date("2026-01-18")), 6);
    }

    #[test]
    fn test_weekday_from_label() {
        assert_eq!(weekday_from_label("Mon"), Some(0));
        assert_eq!(weekday_from_label("Sun"), Some(6));
        assert_eq!(weekday_from_label("Monday"), None);
    }

    #[test]
    fn test_normalize_time_variants() {
        assert_eq!(normalize_time("9:00"), "9:00");
        assert_eq!(normalize_time(" 09:30 "), "9:30");
        assert_eq!(normalize_time("21:00:00"), "21:00");
        assert_eq!(normalize_time("noon"), "noon");
    }

    #[test]
    fn test_normalized_padded_time_is_found() {
        assert_eq!(slot_index(&normalize_time("08:30:00")), Some(0));
    }

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("9:00"), Some(540));
        assert_eq!(time_to_minutes("18:30"), Some(1110));
        assert_eq!(time_to_minutes("24:00"), None);
        assert_eq!(time_to_minutes("9:75"), None);
        assert_eq!(time_to_minutes("nine"), None);
    }

    proptest! {
        #[test]
        fn prop_next_slot_advances_by_one(index in 0usize..SLOT_COUNT) {
            let time = TIME_SLOTS[index];
            let next = next_slot(time);
            if index == SLOT_COUNT - 1 {
                prop_assert_eq!(next, time);
            } else {
                prop_assert_eq!(slot_index(next), Some(index + 1));
            }
        }

        #[test]
        fn prop_padded_slot_normalizes_back(index in 0usize..SLOT_COUNT) {
            let time = TIME_SLOTS[index];
            let padded = format!("{:0>5}:00", time);
            prop_assert_eq!(normalize_time(&padded), time);
        }
    }
}
