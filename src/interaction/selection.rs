//! Rectangular cell selection on the week grid.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::grid::{SLOT_COUNT, TIME_SLOTS, next_slot};
use crate::models::{NewShift, ShiftType};

/// A cell of the week grid: a weekday column and a slot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Weekday column, Monday = 0.
    pub day: usize,
    /// Row in the slot table.
    pub slot: usize,
}

impl Cell {
    /// Creates a cell, clamping indices into the grid.
    pub fn new(day: usize, slot: usize) -> Self {
        Self {
            day: day.min(6),
            slot: slot.min(SLOT_COUNT - 1),
        }
    }

    /// The `"day-slot"` key used by the calendar to identify a cell.
    pub fn key(&self) -> String {
        format!("{}-{}", self.day, self.slot)
    }
}

/// An inclusive rectangle of cells.
///
/// Built from min/max of two corner cells, so it does not depend on which
/// corner the drag started from.
///
/// # Example
///
/// ```
/// use shift_roster::interaction::{Cell, SelectionRect};
///
/// let forward = SelectionRect::from_corners(Cell::new(0, 5), Cell::new(1, 3));
/// let backward = SelectionRect::from_corners(Cell::new(1, 3), Cell::new(0, 5));
/// assert_eq!(forward, backward);
/// assert_eq!(forward.cells().len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRect {
    /// First selected column.
    pub first_day: usize,
    /// Last selected column.
    pub last_day: usize,
    /// First selected slot row.
    pub first_slot: usize,
    /// Last selected slot row.
    pub last_slot: usize,
}

impl SelectionRect {
    /// The rectangle spanned by two corner cells.
    pub fn from_corners(a: Cell, b: Cell) -> Self {
        Self {
            first_day: a.day.min(b.day),
            last_day: a.day.max(b.day),
            first_slot: a.slot.min(b.slot),
            last_slot: a.slot.max(b.slot),
        }
    }

    /// Whether `cell` lies inside the rectangle.
    pub fn contains(&self, cell: Cell) -> bool {
        (self.first_day..=self.last_day).contains(&cell.day)
            && (self.first_slot..=self.last_slot).contains(&cell.slot)
    }

    /// Every selected cell.
    pub fn cells(&self) -> BTreeSet<Cell> {
        (self.first_day..=self.last_day)
            .flat_map(|day| (self.first_slot..=self.last_slot).map(move |slot| Cell { day, slot }))
            .collect()
    }

    /// Every selected cell key, in `"day-slot"` form.
    pub fn keys(&self) -> BTreeSet<String> {
        self.cells().iter().map(Cell::key).collect()
    }

    /// The start and end times the rectangle spans.
    ///
    /// The end is the slot after the last selected row, since a selected
    /// row stands for the half hour that starts there.
    pub fn time_range(&self) -> (&'static str, &'static str) {
        let start = TIME_SLOTS[self.first_slot];
        let end = next_slot(TIME_SLOTS[self.last_slot]);
        (start, end)
    }

    /// One shift draft per selected day of `week`.
    ///
    /// `week` is the Monday-start week the grid is showing.
    pub fn to_drafts(
        &self,
        week: &[NaiveDate; 7],
        staff_id: &str,
        shift_type: ShiftType,
    ) -> Vec<NewShift> {
        let (start, end) = self.time_range();
        let working = shift_type.is_working();

        (self.first_day..=self.last_day)
            .map(|day| NewShift {
                staff_id: staff_id.to_string(),
                day: week[day],
                shift_type,
                start_time: working.then(|| start.to_string()),
                end_time: working.then(|| end.to_string()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{slot_index, week_dates};

    fn cell(day: usize, time: &str) -> Cell {
        Cell::new(day, slot_index(time).unwrap())
    }

    #[test]
    fn test_backward_drag_matches_forward_drag() {
        // Tue 10:00 back to Mon 11:00
        let backward = SelectionRect::from_corners(cell(1, "10:00"), cell(0, "11:00"));
        let forward = SelectionRect::from_corners(cell(0, "10:00"), cell(1, "11:00"));

        assert_eq!(backward, forward);
        assert_eq!(backward.cells(), forward.cells());
        assert_eq!(backward.cells().len(), 6);
        assert_eq!(backward.last_day - backward.first_day + 1, 2);
        assert_eq!(backward.last_slot - backward.first_slot + 1, 3);
    }

    #[test]
    fn test_contains() {
        let rect = SelectionRect::from_corners(Cell::new(1, 2), Cell::new(3, 4));
        assert!(rect.contains(Cell::new(2, 3)));
        assert!(rect.contains(Cell::new(3, 4)));
        assert!(!rect.contains(Cell::new(0, 3)));
        assert!(!rect.contains(Cell::new(2, 5)));
    }

    #[test]
    fn test_cell_new_clamps() {
        assert_eq!(Cell::new(9, 99), Cell { day: 6, slot: 25 });
    }

    #[test]
    fn test_keys() {
        let rect = SelectionRect::from_corners(Cell::new(0, 0), Cell::new(0, 1));
        let keys: Vec<String> = rect.keys().into_iter().collect();
        assert_eq!(keys, vec!["0-0", "0-1"]);
    }

    #[test]
    fn test_time_range_ends_after_last_row() {
        let rect = SelectionRect::from_corners(cell(0, "10:00"), cell(0, "11:00"));
        assert_eq!(rect.time_range(), ("10:00", "11:30"));
    }

    #[test]
    fn test_time_range_saturates_on_last_row() {
        let rect = SelectionRect::from_corners(cell(0, "20:30"), cell(0, "21:00"));
        assert_eq!(rect.time_range(), ("20:30", "21:00"));
    }

    #[test]
    fn test_to_drafts_one_per_day() {
        // 2026-01-12 is a Monday
        let week = week_dates(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
        let rect = SelectionRect::from_corners(cell(1, "9:00"), cell(2, "17:30"));

        let drafts = rect.to_drafts(&week, "alice", ShiftType::Regular);
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].day, week[1]);
        assert_eq!(drafts[1].day, week[2]);
        assert_eq!(drafts[0].start_time.as_deref(), Some("9:00"));
        assert_eq!(drafts[0].end_time.as_deref(), Some("18:00"));
        assert!(drafts.iter().all(|d| d.validate().is_ok()));
    }

    #[test]
    fn test_to_drafts_leave_has_no_times() {
        let week = week_dates(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
        let rect = SelectionRect::from_corners(Cell::new(4, 0), Cell::new(4, 25));
        let drafts = rect.to_drafts(&week, "alice", ShiftType::Leave);
        assert_eq!(drafts[0].start_time, None);
        assert_eq!(drafts[0].end_time, None);
    }
}
