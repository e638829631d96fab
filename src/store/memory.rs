//! In-memory [`RosterStore`] implementation.
//!
//! Used by tests and local development. Writes for selected row ids can be
//! made to fail so batch failure handling can be exercised.

use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{RosterError, RosterResult};
use crate::models::{ShiftRecord, StaffMember};

use super::traits::RosterStore;

/// A [`RosterStore`] backed by in-process maps.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    staff: RwLock<BTreeMap<String, StaffMember>>,
    shifts: RwLock<BTreeMap<String, ShiftRecord>>,
    failing_ids: RwLock<HashSet<String>>,
}

fn poisoned() -> RosterError {
    RosterError::Store {
        message: "store lock poisoned".to_string(),
    }
}

fn read<T>(lock: &RwLock<T>) -> RosterResult<RwLockReadGuard<'_, T>> {
    lock.read().map_err(|_| poisoned())
}

fn write<T>(lock: &RwLock<T>) -> RosterResult<RwLockWriteGuard<'_, T>> {
    lock.write().map_err(|_| poisoned())
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with rows.
    pub fn with_rows(staff: Vec<StaffMember>, shifts: Vec<ShiftRecord>) -> Self {
        Self {
            staff: RwLock::new(staff.into_iter().map(|s| (s.id.clone(), s)).collect()),
            shifts: RwLock::new(shifts.into_iter().map(|s| (s.id.clone(), s)).collect()),
            failing_ids: RwLock::default(),
        }
    }

    /// Makes every later write to the row with `id` fail.
    pub fn fail_writes_for(&self, id: &str) -> RosterResult<()> {
        write(&self.failing_ids)?.insert(id.to_string());
        Ok(())
    }

    fn check_writable(&self, id: &str) -> RosterResult<()> {
        if read(&self.failing_ids)?.contains(id) {
            return Err(RosterError::Store {
                message: format!("write rejected for row '{}'", id),
            });
        }
        Ok(())
    }
}

impl RosterStore for InMemoryStore {
    fn list_staff(&self) -> RosterResult<Vec<StaffMember>> {
        Ok(read(&self.staff)?.values().cloned().collect())
    }

    fn get_staff(&self, staff_id: &str) -> RosterResult<Option<StaffMember>> {
        Ok(read(&self.staff)?.get(staff_id).cloned())
    }

    fn insert_staff(&self, staff: &StaffMember) -> RosterResult<()> {
        self.check_writable(&staff.id)?;
        let mut rows = write(&self.staff)?;
        if rows.contains_key(&staff.id) {
            return Err(RosterError::Store {
                message: format!("duplicate staff id '{}'", staff.id),
            });
        }
        rows.insert(staff.id.clone(), staff.clone());
        Ok(())
    }

    fn update_staff(&self, staff: &StaffMember) -> RosterResult<()> {
        self.check_writable(&staff.id)?;
        let mut rows = write(&self.staff)?;
        match rows.get_mut(&staff.id) {
            Some(row) => {
                *row = staff.clone();
                Ok(())
            }
            None => Err(RosterError::StaffNotFound {
                id: staff.id.clone(),
            }),
        }
    }

    fn delete_staff(&self, staff_id: &str) -> RosterResult<bool> {
        self.check_writable(staff_id)?;
        Ok(write(&self.staff)?.remove(staff_id).is_some())
    }

    fn set_display_order(&self, staff_id: &str, display_order: i32) -> RosterResult<()> {
        self.check_writable(staff_id)?;
        let mut rows = write(&self.staff)?;
        let row = rows
            .get_mut(staff_id)
            .ok_or_else(|| RosterError::StaffNotFound {
                id: staff_id.to_string(),
            })?;
        row.display_order = display_order;
        Ok(())
    }

    fn list_shifts(&self) -> RosterResult<Vec<ShiftRecord>> {
        Ok(read(&self.shifts)?.values().cloned().collect())
    }

    fn list_shifts_for_staff(&self, staff_id: &str) -> RosterResult<Vec<ShiftRecord>> {
        Ok(read(&self.shifts)?
            .values()
            .filter(|shift| shift.staff_id == staff_id)
            .cloned()
            .collect())
    }

    fn insert_shift(&self, shift: &ShiftRecord) -> RosterResult<()> {
        self.check_writable(&shift.id)?;
        let mut rows = write(&self.shifts)?;
        if rows.contains_key(&shift.id) {
            return Err(RosterError::Store {
                message: format!("duplicate shift id '{}'", shift.id),
            });
        }
        rows.insert(shift.id.clone(), shift.clone());
        Ok(())
    }

    fn update_shift(&self, shift: &ShiftRecord) -> RosterResult<()> {
        self.check_writable(&shift.id)?;
        let mut rows = write(&self.shifts)?;
        match rows.get_mut(&shift.id) {
            Some(row) => {
                *row = shift.clone();
                Ok(())
            }
            None => Err(RosterError::ShiftNotFound {
                id: shift.id.clone(),
            }),
        }
    }

    fn delete_shift(&self, shift_id: &str) -> RosterResult<bool> {
        self.check_writable(shift_id)?;
        Ok(write(&self.shifts)?.remove(shift_id).is_some())
    }
}
