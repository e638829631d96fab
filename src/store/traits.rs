//! Storage abstraction for staff and shift rows.
//!
//! The real backing store is a remote relational database with its own
//! access policies; this trait is the seam the service layer talks to.
//! Every call either succeeds or reports [`RosterError::Store`].
//!
//! [`RosterError::Store`]: crate::error::RosterError::Store

use crate::error::RosterResult;
use crate::models::{ShiftRecord, StaffMember};

/// Row-oriented access to the staff and shifts tables.
pub trait RosterStore: Send + Sync {
    /// All staff rows, in no particular order.
    fn list_staff(&self) -> RosterResult<Vec<StaffMember>>;

    /// A staff row by id.
    fn get_staff(&self, staff_id: &str) -> RosterResult<Option<StaffMember>>;

    /// Inserts a new staff row.
    fn insert_staff(&self, staff: &StaffMember) -> RosterResult<()>;

    /// Replaces an existing staff row.
    fn update_staff(&self, staff: &StaffMember) -> RosterResult<()>;

    /// Deletes a staff row; returns whether it existed.
    fn delete_staff(&self, staff_id: &str) -> RosterResult<bool>;

    /// Writes a single staff row's manual sort position.
    fn set_display_order(&self, staff_id: &str, display_order: i32) -> RosterResult<()>;

    /// All shift rows as stored.
    fn list_shifts(&self) -> RosterResult<Vec<ShiftRecord>>;

    /// Shift rows owned by one staff member.
    fn list_shifts_for_staff(&self, staff_id: &str) -> RosterResult<Vec<ShiftRecord>>;

    /// Inserts a new shift row.
    fn insert_shift(&self, shift: &ShiftRecord) -> RosterResult<()>;

    /// Replaces an existing shift row.
    fn update_shift(&self, shift: &ShiftRecord) -> RosterResult<()>;

    /// Deletes a shift row; returns whether it existed.
    fn delete_shift(&self, shift_id: &str) -> RosterResult<bool>;
}
