//! Shift boundary dragging.
//!
//! A resize grabs one edge of a shift block. Top and bottom move the start
//! and end slots; left and right move the first and last day columns. The
//! candidate boundary is `original + round(pixel_delta / cell_size)`,
//! clamped so the block never inverts or leaves the grid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::grid::{SLOT_COUNT, TIME_SLOTS, weekday_index};
use crate::models::Shift;

/// The edge of a shift block being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeEdge {
    /// Start time.
    Top,
    /// End time.
    Bottom,
    /// First day.
    Left,
    /// Last day.
    Right,
}

impl ResizeEdge {
    /// Whether the edge moves along the time axis.
    pub fn is_time_axis(self) -> bool {
        matches!(self, ResizeEdge::Top | ResizeEdge::Bottom)
    }
}

/// A pointer position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// Rendered size of one grid cell in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    /// Column width (day axis).
    pub width: f64,
    /// Row height (time axis).
    pub height: f64,
}

/// The block a shift occupies on the week grid.
///
/// Days are inclusive, slots are half-open: `end_slot` is the row of the
/// end time, which the shift does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftBounds {
    /// First day column.
    pub start_day: usize,
    /// Last day column.
    pub end_day: usize,
    /// Row of the start time.
    pub start_slot: usize,
    /// Row of the end time.
    pub end_slot: usize,
}

impl ShiftBounds {
    /// The block for a single-day working shift.
    ///
    /// `None` for leave, week-off, times off the slot table, and zero-length
    /// or inverted ranges.
    pub fn for_shift(shift: &Shift) -> Option<Self> {
        let (start_slot, end_slot) = shift.slot_range()?;
        let day = weekday_index(shift.day);
        let bounds = Self {
            start_day: day,
            end_day: day,
            start_slot,
            end_slot,
        };
        bounds.is_valid().then_some(bounds)
    }

    /// Whether the block is non-empty and lies inside the week grid.
    pub fn is_valid(&self) -> bool {
        self.start_slot < self.end_slot
            && self.end_slot < SLOT_COUNT
            && self.start_day <= self.end_day
            && self.end_day < 7
    }

    /// Moves `edge` by `steps` cells, clamped to keep the block valid.
    ///
    /// An invalid block is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::interaction::{ResizeEdge, ShiftBounds};
    ///
    /// let bounds = ShiftBounds { start_day: 0, end_day: 0, start_slot: 1, end_slot: 19 };
    /// // Dragging the top edge far below the bottom stops one slot short
    /// assert_eq!(bounds.resized(ResizeEdge::Top, 40).start_slot, 18);
    /// // Dragging the bottom edge past the table stops at the last slot
    /// assert_eq!(bounds.resized(ResizeEdge::Bottom, 40).end_slot, 25);
    /// ```
    pub fn resized(&self, edge: ResizeEdge, steps: i64) -> Self {
        let mut next = *self;
        if !self.is_valid() {
            return next;
        }
        let last_slot = (SLOT_COUNT - 1) as i64;

        match edge {
            ResizeEdge::Top => {
                next.start_slot =
                    (self.start_slot as i64 + steps).clamp(0, self.end_slot as i64 - 1) as usize;
            }
            ResizeEdge::Bottom => {
                next.end_slot = (self.end_slot as i64 + steps)
                    .clamp(self.start_slot as i64 + 1, last_slot) as usize;
            }
            ResizeEdge::Left => {
                next.start_day =
                    (self.start_day as i64 + steps).clamp(0, self.end_day as i64) as usize;
            }
            ResizeEdge::Right => {
                next.end_day =
                    (self.end_day as i64 + steps).clamp(self.start_day as i64, 6) as usize;
            }
        }

        next
    }

    /// Start and end time labels; `None` for an invalid block.
    pub fn times(&self) -> Option<(&'static str, &'static str)> {
        self.is_valid()
            .then(|| (TIME_SLOTS[self.start_slot], TIME_SLOTS[self.end_slot]))
    }

    /// The dates the block covers within `week`; `None` for an invalid block.
    pub fn dates(&self, week: &[NaiveDate; 7]) -> Option<Vec<NaiveDate>> {
        self.is_valid()
            .then(|| week[self.start_day..=self.end_day].to_vec())
    }
}

/// Whole cells a pixel delta corresponds to, rounded half away from zero.
pub fn cell_steps(pixel_delta: f64, cell_size: f64) -> i64 {
    if cell_size <= 0.0 || !pixel_delta.is_finite() {
        return 0;
    }
    (pixel_delta / cell_size).round() as i64
}

/// An in-progress edge drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeDrag {
    /// The shift being resized.
    pub shift_id: String,
    /// The grabbed edge.
    pub edge: ResizeEdge,
    /// Pointer position at grab time.
    pub origin: PointerPosition,
    /// Cell dimensions at grab time.
    pub cell: CellSize,
    /// Block before the drag began.
    pub original: ShiftBounds,
    /// Last reported block.
    pub current: ShiftBounds,
}

impl ResizeDrag {
    /// Starts a drag on `edge` of `bounds`.
    pub fn new(
        shift_id: impl Into<String>,
        edge: ResizeEdge,
        bounds: ShiftBounds,
        origin: PointerPosition,
        cell: CellSize,
    ) -> Self {
        Self {
            shift_id: shift_id.into(),
            edge,
            origin,
            cell,
            original: bounds,
            current: bounds,
        }
    }

    /// The candidate block for a pointer at `position`.
    pub fn candidate(&self, position: PointerPosition) -> ShiftBounds {
        let steps = if self.edge.is_time_axis() {
            cell_steps(position.y - self.origin.y, self.cell.height)
        } else {
            cell_steps(position.x - self.origin.x, self.cell.width)
        };
        self.original.resized(self.edge, steps)
    }

    /// Applies a pointer move; returns the new block if it changed.
    pub fn update(&mut self, position: PointerPosition) -> Option<ShiftBounds> {
        let candidate = self.candidate(position);
        if candidate == self.current {
            return None;
        }
        self.current = candidate;
        Some(candidate)
    }
}
