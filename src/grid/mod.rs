//! The time-grid coordinate system.
//!
//! All shift times map onto a fixed table of 26 half-hour slots and every
//! date onto a Monday-first week column. This module holds those constants,
//! the conversions between wall-clock strings and grid indices, and the
//! week/month bucketing used by the calendar views.

mod calendar;
mod time_slots;

pub use calendar::{iso_date, month_weeks, parse_iso_date, week_dates};
pub use time_slots::{
    SLOT_COUNT, TIME_SLOTS, WEEKDAYS, next_slot, normalize_time, slot_index, slot_time,
    time_to_minutes, weekday_from_label, weekday_index, weekday_label,
};
