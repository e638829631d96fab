//! Shift model, unsaved shift drafts and raw store rows.
//!
//! A [`Shift`] always carries a real calendar date. Older rows in the store
//! may hold a bare weekday label instead; those arrive as [`ShiftRecord`]
//! and are resolved against a reference week by [`ShiftRecord::normalize`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::grid::{iso_date, normalize_time, slot_index, week_dates, weekday_from_label};

/// The kind of a rostered shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// A fixed working shift.
    Regular,
    /// A working shift with negotiated hours.
    Flexible,
    /// Approved leave; not working all day.
    Leave,
    /// Scheduled day off; not working all day.
    WeekOff,
}

impl ShiftType {
    /// Regular and flexible shifts count towards hours and coverage.
    pub fn is_working(self) -> bool {
        matches!(self, ShiftType::Regular | ShiftType::Flexible)
    }
}

/// A persisted shift with a canonical date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff member working the shift.
    pub staff_id: String,
    /// The calendar date of the shift.
    pub day: NaiveDate,
    /// The kind of shift.
    pub shift_type: ShiftType,
    /// Start time in "H:MM" form; only meaningful for working shifts.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time in "H:MM" form; only meaningful for working shifts.
    #[serde(default)]
    pub end_time: Option<String>,
}

impl Shift {
    /// Creates a working shift.
    pub fn working(
        id: impl Into<String>,
        staff_id: impl Into<String>,
        day: NaiveDate,
        shift_type: ShiftType,
        start_time: &str,
        end_time: &str,
    ) -> Self {
        Self {
            id: id.into(),
            staff_id: staff_id.into(),
            day,
            shift_type,
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
        }
    }

    /// Creates an all-day leave or week-off entry.
    pub fn day_off(
        id: impl Into<String>,
        staff_id: impl Into<String>,
        day: NaiveDate,
        shift_type: ShiftType,
    ) -> Self {
        Self {
            id: id.into(),
            staff_id: staff_id.into(),
            day,
            shift_type,
            start_time: None,
            end_time: None,
        }
    }

    /// Whether this shift counts towards hours and coverage.
    pub fn is_working(&self) -> bool {
        self.shift_type.is_working()
    }

    /// The start and end times of a working shift.
    ///
    /// Leave and week-off entries return `None` even if times are stored.
    pub fn time_range(&self) -> Option<(&str, &str)> {
        if !self.is_working() {
            return None;
        }
        match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) => Some((start.as_str(), end.as_str())),
            _ => None,
        }
    }

    /// The start and end positions in the slot table.
    ///
    /// `None` when either time misses the table.
    pub fn slot_range(&self) -> Option<(usize, usize)> {
        let (start, end) = self.time_range()?;
        Some((slot_index(start)?, slot_index(end)?))
    }
}

/// An unsaved shift, validated before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShift {
    /// The staff member working the shift.
    pub staff_id: String,
    /// The calendar date of the shift.
    pub day: NaiveDate,
    /// The kind of shift.
    pub shift_type: ShiftType,
    /// Start time; required for working shifts.
    #[serde(default)]
    pub start_time: Option<String>,
    /// End time; required for working shifts.
    #[serde(default)]
    pub end_time: Option<String>,
}

impl NewShift {
    /// Rejects working shifts whose range is missing, off the slot table,
    /// zero-length or inverted.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::{NewShift, ShiftType};
    /// use chrono::NaiveDate;
    ///
    /// let draft = NewShift {
    ///     staff_id: "s1".to_string(),
    ///     day: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
    ///     shift_type: ShiftType::Regular,
    ///     start_time: Some("18:00".to_string()),
    ///     end_time: Some("9:00".to_string()),
    /// };
    /// assert!(draft.validate().is_err());
    /// ```
    pub fn validate(&self) -> RosterResult<()> {
        if self.staff_id.trim().is_empty() {
            return Err(invalid_draft("staff id is required"));
        }
        if !self.shift_type.is_working() {
            return Ok(());
        }

        let (start, end) = match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(invalid_draft("working shifts need a start and end time")),
        };
        let start_index = slot_index(start)
            .ok_or_else(|| invalid_draft(&format!("start time '{}' is not a grid slot", start)))?;
        let end_index = slot_index(end)
            .ok_or_else(|| invalid_draft(&format!("end time '{}' is not a grid slot", end)))?;

        if start_index >= end_index {
            return Err(invalid_draft("end time must be after start time"));
        }

        Ok(())
    }

    /// Attaches an id, dropping times from non-working entries.
    pub fn into_shift(self, id: impl Into<String>) -> Shift {
        let working = self.shift_type.is_working();
        Shift {
            id: id.into(),
            staff_id: self.staff_id,
            day: self.day,
            shift_type: self.shift_type,
            start_time: if working { self.start_time } else { None },
            end_time: if working { self.end_time } else { None },
        }
    }
}

fn invalid_draft(message: &str) -> RosterError {
    RosterError::InvalidShift {
        shift_id: String::new(),
        message: message.to_string(),
    }
}

/// A shift row as the store hands it over.
///
/// `day` may be an ISO date or, for legacy rows, a weekday label such as
/// `"Mon"`. Times may be zero-padded or carry seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: String,
    /// The staff member working the shift.
    pub staff_id: String,
    /// ISO date or weekday label.
    pub day: String,
    /// The kind of shift.
    pub shift_type: ShiftType,
    /// Raw start time.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Raw end time.
    #[serde(default)]
    pub end_time: Option<String>,
}

impl ShiftRecord {
    /// Converts the row into a canonical [`Shift`].
    ///
    /// Weekday labels resolve to that weekday within the Monday-start week
    /// containing `reference`. Times are normalized for slot lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::{ShiftRecord, ShiftType};
    /// use chrono::NaiveDate;
    ///
    /// let record = ShiftRecord {
    ///     id: "sh1".to_string(),
    ///     staff_id: "s1".to_string(),
    ///     day: "Wed".to_string(),
    ///     shift_type: ShiftType::Regular,
    ///     start_time: Some("09:00:00".to_string()),
    ///     end_time: Some("18:00:00".to_string()),
    /// };
    /// // 2026-01-12 is a Monday
    /// let shift = record.normalize(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()).unwrap();
    /// assert_eq!(shift.day, NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
    /// assert_eq!(shift.start_time.as_deref(), Some("9:00"));
    /// ```
    pub fn normalize(&self, reference: NaiveDate) -> RosterResult<Shift> {
        let day = match NaiveDate::parse_from_str(self.day.trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                let column = weekday_from_label(self.day.trim()).ok_or_else(|| {
                    RosterError::InvalidShift {
                        shift_id: self.id.clone(),
                        message: format!("unrecognised day '{}'", self.day),
                    }
                })?;
                tracing::debug!(
                    shift_id = %self.id,
                    label = %self.day,
                    "Resolving legacy weekday label"
                );
                week_dates(reference)[column]
            }
        };

        Ok(Shift {
            id: self.id.clone(),
            staff_id: self.staff_id.clone(),
            day,
            shift_type: self.shift_type,
            start_time: self.start_time.as_deref().map(normalize_time),
            end_time: self.end_time.as_deref().map(normalize_time),
        })
    }
}

impl From<&Shift> for ShiftRecord {
    fn from(shift: &Shift) -> Self {
        ShiftRecord {
            id: shift.id.clone(),
            staff_id: shift.staff_id.clone(),
            day: iso_date(shift.day),
            shift_type: shift.shift_type,
            start_time: shift.start_time.clone(),
            end_time: shift.end_time.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn draft(start: Option<&str>, end: Option<&str>, shift_type: ShiftType) -> NewShift {
        NewShift {
            staff_id: "staff_001".to_string(),
            day: make_date("2026-01-12"),
            shift_type,
            start_time: start.map(str::to_string),
            end_time: end.map(str::to_string),
        }
    }

    #[test]
    fn test_shift_type_working() {
        assert!(ShiftType::Regular.is_working());
        assert!(ShiftType::Flexible.is_working());
        assert!(!ShiftType::Leave.is_working());
        assert!(!ShiftType::WeekOff.is_working());
    }

    #[test]
    fn test_shift_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ShiftType::WeekOff).unwrap(),
            "\"week_off\""
        );
        assert_eq!(
            serde_json::from_str::<ShiftType>("\"flexible\"").unwrap(),
            ShiftType::Flexible
        );
    }

    #[test]
    fn test_time_range_ignored_for_leave() {
        let mut shift = Shift::day_off("sh1", "s1", make_date("2026-01-12"), ShiftType::Leave);
        shift.start_time = Some("9:00".to_string());
        shift.end_time = Some("18:00".to_string());
        assert_eq!(shift.time_range(), None);
        assert_eq!(shift.slot_range(), None);
    }

    #[test]
    fn test_slot_range_for_working_shift() {
        let shift = Shift::working(
            "sh1",
            "s1",
            make_date("2026-01-12"),
            ShiftType::Regular,
            "9:00",
            "18:00",
        );
        assert_eq!(shift.slot_range(), Some((1, 19)));
    }

    #[test]
    fn test_slot_range_misses_on_padded_time() {
        let shift = Shift::working(
            "sh1",
            "s1",
            make_date("2026-01-12"),
            ShiftType::Regular,
            "09:00",
            "18:00",
        );
        assert_eq!(shift.slot_range(), None);
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "id": "shift_001",
            "staff_id": "staff_001",
            "day": "2026-01-12",
            "shift_type": "regular",
            "start_time": "9:00",
            "end_time": "18:00"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.day, make_date("2026-01-12"));
        assert_eq!(shift.time_range(), Some(("9:00", "18:00")));
    }

    #[test]
    fn test_validate_accepts_valid_range() {
        assert!(draft(Some("9:00"), Some("18:00"), ShiftType::Regular).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_length_range() {
        let result = draft(Some("9:00"), Some("9:00"), ShiftType::Flexible).validate();
        match result {
            Err(RosterError::InvalidShift { message, .. }) => {
                assert_eq!(message, "end time must be after start time")
            }
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_off_grid_time() {
        assert!(draft(Some("7:00"), Some("9:00"), ShiftType::Regular).validate().is_err());
        assert!(draft(Some("09:00"), Some("18:00"), ShiftType::Regular).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_times() {
        assert!(draft(None, Some("18:00"), ShiftType::Regular).validate().is_err());
    }

    #[test]
    fn test_validate_leave_needs_no_times() {
        assert!(draft(None, None, ShiftType::Leave).validate().is_ok());
    }

    #[test]
    fn test_into_shift_clears_times_for_week_off() {
        let shift = draft(Some("9:00"), Some("18:00"), ShiftType::WeekOff).into_shift("sh9");
        assert_eq!(shift.id, "sh9");
        assert_eq!(shift.start_time, None);
        assert_eq!(shift.end_time, None);
    }

    #[test]
    fn test_record_with_iso_day() {
        let record = ShiftRecord {
            id: "sh1".to_string(),
            staff_id: "s1".to_string(),
            day: "2026-02-03".to_string(),
            shift_type: ShiftType::Regular,
            start_time: Some("08:30".to_string()),
            end_time: Some("12:00".to_string()),
        };

        let shift = record.normalize(make_date("2026-01-12")).unwrap();
        assert_eq!(shift.day, make_date("2026-02-03"));
        assert_eq!(shift.slot_range(), Some((0, 7)));
    }

    #[test]
    fn test_record_with_weekday_label_uses_reference_week() {
        let record = ShiftRecord {
            id: "sh1".to_string(),
            staff_id: "s1".to_string(),
            day: "Sun".to_string(),
            shift_type: ShiftType::Leave,
            start_time: None,
            end_time: None,
        };

        // Reference is a Thursday; Sunday of that week is 2026-01-18
        let shift = record.normalize(make_date("2026-01-15")).unwrap();
        assert_eq!(shift.day, make_date("2026-01-18"));
    }

    #[test]
    fn test_record_with_unknown_day_is_rejected() {
        let record = ShiftRecord {
            id: "sh1".to_string(),
            staff_id: "s1".to_string(),
            day: "someday".to_string(),
            shift_type: ShiftType::Regular,
            start_time: None,
            end_time: None,
        };

        match record.normalize(make_date("2026-01-15")) {
            Err(RosterError::InvalidShift { shift_id, .. }) => assert_eq!(shift_id, "sh1"),
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_record_from_shift_uses_iso_day() {
        let shift = Shift::working(
            "sh1",
            "s1",
            make_date("2026-01-12"),
            ShiftType::Regular,
            "9:00",
            "18:00",
        );
        let record = ShiftRecord::from(&shift);
        assert_eq!(record.day, "2026-01-12");
    }
}
