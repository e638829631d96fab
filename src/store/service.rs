//! Roster operations over a [`RosterStore`].
//!
//! Creation paths validate before writing. Batch writes are issued one row
//! at a time with no transaction; every result is checked and, if any
//! failed, the authoritative rows are re-read so the caller drops its
//! optimistic state.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::calculation::RecurringShift;
use crate::error::{RosterError, RosterResult};
use crate::grid::week_dates;
use crate::interaction::{InteractionEvent, ShiftBounds};
use crate::models::{NewShift, PayPeriod, Shift, ShiftRecord, StaffMember};

use super::traits::RosterStore;

/// The result of a multi-row write.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome<T> {
    /// Every write succeeded.
    Applied(Vec<T>),
    /// Some writes failed; `items` is the state re-read from the store.
    Resynced {
        /// Authoritative rows after the partial failure.
        items: Vec<T>,
        /// Ids whose write failed.
        failed: Vec<String>,
    },
}

impl<T> BatchOutcome<T> {
    /// Whether every write succeeded.
    pub fn is_complete(&self) -> bool {
        matches!(self, BatchOutcome::Applied(_))
    }

    /// The rows the caller should now display.
    pub fn items(&self) -> &[T] {
        match self {
            BatchOutcome::Applied(items) => items,
            BatchOutcome::Resynced { items, .. } => items,
        }
    }

    /// The partial failure as an error, if there was one.
    pub fn failure(&self, total: usize) -> Option<RosterError> {
        match self {
            BatchOutcome::Applied(_) => None,
            BatchOutcome::Resynced { failed, .. } => Some(RosterError::PartialBatchFailure {
                failed: failed.len(),
                total,
            }),
        }
    }
}

/// Roster operations with validation and resynchronisation.
#[derive(Debug)]
pub struct RosterService<S> {
    store: S,
}

impl<S: RosterStore> RosterService<S> {
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Staff in manual display order, ties broken by name.
    pub fn staff(&self) -> RosterResult<Vec<StaffMember>> {
        let mut staff = self.store.list_staff()?;
        staff.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(staff)
    }

    /// Validates and inserts a staff member, appending them to the end of
    /// the manual order.
    pub fn create_staff(&self, mut staff: StaffMember) -> RosterResult<StaffMember> {
        staff.validate()?;
        if staff.id.is_empty() {
            staff.id = Uuid::new_v4().to_string();
        }
        let existing = self.store.list_staff()?;
        staff.display_order = existing
            .iter()
            .map(|member| member.display_order + 1)
            .max()
            .unwrap_or(0);

        self.store.insert_staff(&staff)?;
        tracing::info!(staff_id = %staff.id, "Staff member created");
        Ok(staff)
    }

    /// Validates and replaces a staff member's profile.
    pub fn update_staff(&self, staff: &StaffMember) -> RosterResult<()> {
        staff.validate()?;
        self.store.update_staff(staff)
    }

    /// Deletes a staff member and every shift they own.
    ///
    /// Each shift is deleted separately. If any delete fails the staff row
    /// is kept, so no shift is left without its owner, and the re-read
    /// staff list comes back as [`BatchOutcome::Resynced`].
    pub fn remove_staff(&self, staff_id: &str) -> RosterResult<BatchOutcome<StaffMember>> {
        self.ensure_staff_exists(staff_id)?;

        let mut failed = Vec::new();
        for shift in self.store.list_shifts_for_staff(staff_id)? {
            if let Err(err) = self.store.delete_shift(&shift.id) {
                tracing::warn!(shift_id = %shift.id, error = %err, "Shift delete failed");
                failed.push(shift.id);
            }
        }

        if failed.is_empty() {
            match self.store.delete_staff(staff_id) {
                Ok(true) => {}
                Ok(false) => {
                    return Err(RosterError::StaffNotFound {
                        id: staff_id.to_string(),
                    });
                }
                Err(err) => {
                    tracing::warn!(staff_id, error = %err, "Staff delete failed");
                    failed.push(staff_id.to_string());
                }
            }
        }

        let staff = self.staff()?;
        if failed.is_empty() {
            tracing::info!(staff_id, "Staff member removed");
            Ok(BatchOutcome::Applied(staff))
        } else {
            tracing::warn!(
                staff_id,
                failed = failed.len(),
                "Staff removal partially failed; resynchronised staff list"
            );
            Ok(BatchOutcome::Resynced {
                items: staff,
                failed,
            })
        }
    }

    /// Writes a new manual order: `ordered_ids[i]` gets display order `i`.
    ///
    /// Each row is written separately. If any write fails the staff list is
    /// re-read and returned as [`BatchOutcome::Resynced`].
    pub fn reorder_staff(&self, ordered_ids: &[String]) -> RosterResult<BatchOutcome<StaffMember>> {
        let failed: Vec<String> = ordered_ids
            .iter()
            .enumerate()
            .filter_map(|(position, staff_id)| {
                self.store
                    .set_display_order(staff_id, position as i32)
                    .err()
                    .map(|err| {
                        tracing::warn!(staff_id = %staff_id, error = %err, "Reorder write failed");
                        staff_id.clone()
                    })
            })
            .collect();

        let staff = self.staff()?;
        if failed.is_empty() {
            Ok(BatchOutcome::Applied(staff))
        } else {
            tracing::warn!(
                failed = failed.len(),
                total = ordered_ids.len(),
                "Reorder partially failed; resynchronised staff list"
            );
            Ok(BatchOutcome::Resynced {
                items: staff,
                failed,
            })
        }
    }

    fn normalized(records: Vec<ShiftRecord>, reference: NaiveDate) -> Vec<Shift> {
        records
            .into_iter()
            .filter_map(|record| match record.normalize(reference) {
                Ok(shift) => Some(shift),
                Err(err) => {
                    tracing::warn!(shift_id = %record.id, error = %err, "Skipping unreadable shift row");
                    None
                }
            })
            .collect()
    }

    /// Shifts dated in the Monday-start week containing `date`.
    ///
    /// Legacy weekday-label rows are placed in that week.
    pub fn shifts_for_week(&self, date: NaiveDate) -> RosterResult<Vec<Shift>> {
        let week = week_dates(date);
        let period = PayPeriod {
            start_date: week[0],
            end_date: week[6],
        };
        Ok(Self::normalized(self.store.list_shifts()?, date)
            .into_iter()
            .filter(|shift| period.contains_date(shift.day))
            .collect())
    }

    /// Shifts dated inside `period`.
    ///
    /// Legacy weekday-label rows are placed in the period's first week.
    pub fn shifts_in_period(&self, period: PayPeriod) -> RosterResult<Vec<Shift>> {
        Ok(Self::normalized(self.store.list_shifts()?, period.start_date)
            .into_iter()
            .filter(|shift| period.contains_date(shift.day))
            .collect())
    }

    /// Rewrites weekday-label rows as ISO dates in the week of `reference`.
    ///
    /// Rows are rewritten one at a time. Rows with an unrecognised label or
    /// a failed write are reported in [`BatchOutcome::Resynced`] together
    /// with every shift re-read from the store.
    pub fn migrate_legacy_days(&self, reference: NaiveDate) -> RosterResult<BatchOutcome<Shift>> {
        let mut migrated = Vec::new();
        let mut failed = Vec::new();
        for record in self.store.list_shifts()? {
            if NaiveDate::parse_from_str(&record.day, "%Y-%m-%d").is_ok() {
                continue;
            }
            let written = record
                .normalize(reference)
                .and_then(|shift| {
                    self.store.update_shift(&ShiftRecord::from(&shift))?;
                    Ok(shift)
                });
            match written {
                Ok(shift) => migrated.push(shift),
                Err(err) => {
                    tracing::warn!(shift_id = %record.id, error = %err, "Legacy row not migrated");
                    failed.push(record.id);
                }
            }
        }

        if !migrated.is_empty() {
            tracing::info!(migrated = migrated.len(), "Legacy weekday rows rewritten as dates");
        }
        if failed.is_empty() {
            Ok(BatchOutcome::Applied(migrated))
        } else {
            let items = Self::normalized(self.store.list_shifts()?, reference);
            Ok(BatchOutcome::Resynced { items, failed })
        }
    }

    fn ensure_staff_exists(&self, staff_id: &str) -> RosterResult<()> {
        match self.store.get_staff(staff_id)? {
            Some(_) => Ok(()),
            None => Err(RosterError::StaffNotFound {
                id: staff_id.to_string(),
            }),
        }
    }

    /// Validates and inserts one shift.
    ///
    /// Zero-length and inverted ranges are rejected here, so aggregation
    /// never has to.
    pub fn create_shift(&self, draft: NewShift) -> RosterResult<Shift> {
        draft.validate()?;
        self.ensure_staff_exists(&draft.staff_id)?;

        let shift = draft.into_shift(Uuid::new_v4().to_string());
        self.store.insert_shift(&ShiftRecord::from(&shift))?;
        tracing::debug!(shift_id = %shift.id, staff_id = %shift.staff_id, "Shift created");
        Ok(shift)
    }

    /// Expands a recurring definition and inserts one shift per date.
    ///
    /// The definition is validated once up front. If any insert fails the
    /// staff member's shifts are re-read and returned as
    /// [`BatchOutcome::Resynced`].
    pub fn create_recurring(&self, template: &RecurringShift) -> RosterResult<BatchOutcome<Shift>> {
        self.ensure_staff_exists(&template.staff_id)?;
        let drafts = template.expand();
        if let Some(first) = drafts.first() {
            first.validate()?;
        }

        let mut created = Vec::with_capacity(drafts.len());
        let mut failed = Vec::new();
        for draft in drafts {
            let shift = draft.into_shift(Uuid::new_v4().to_string());
            match self.store.insert_shift(&ShiftRecord::from(&shift)) {
                Ok(()) => created.push(shift),
                Err(err) => {
                    tracing::warn!(shift_id = %shift.id, error = %err, "Recurring insert failed");
                    failed.push(shift.id);
                }
            }
        }

        if failed.is_empty() {
            tracing::info!(
                staff_id = %template.staff_id,
                created = created.len(),
                "Recurring shifts created"
            );
            return Ok(BatchOutcome::Applied(created));
        }

        let items = Self::normalized(
            self.store.list_shifts_for_staff(&template.staff_id)?,
            template.start_date,
        );
        Ok(BatchOutcome::Resynced { items, failed })
    }

    /// Inserts one shift per day of a committed grid selection.
    pub fn create_from_drafts(&self, drafts: Vec<NewShift>) -> RosterResult<BatchOutcome<Shift>> {
        for draft in &drafts {
            draft.validate()?;
            self.ensure_staff_exists(&draft.staff_id)?;
        }

        let reference = drafts.first().map(|draft| draft.day);
        let mut created = Vec::with_capacity(drafts.len());
        let mut failed = Vec::new();
        for draft in drafts {
            let staff_id = draft.staff_id.clone();
            let shift = draft.into_shift(Uuid::new_v4().to_string());
            match self.store.insert_shift(&ShiftRecord::from(&shift)) {
                Ok(()) => created.push(shift),
                Err(err) => {
                    tracing::warn!(staff_id = %staff_id, error = %err, "Shift insert failed");
                    failed.push(shift.id);
                }
            }
        }

        if failed.is_empty() {
            Ok(BatchOutcome::Applied(created))
        } else {
            let reference = reference.unwrap_or_else(|| chrono::Utc::now().date_naive());
            let items = Self::normalized(self.store.list_shifts()?, reference);
            Ok(BatchOutcome::Resynced { items, failed })
        }
    }

    fn load_shift(&self, shift_id: &str, reference: NaiveDate) -> RosterResult<Shift> {
        self.store
            .list_shifts()?
            .into_iter()
            .find(|record| record.id == shift_id)
            .ok_or_else(|| RosterError::ShiftNotFound {
                id: shift_id.to_string(),
            })?
            .normalize(reference)
    }

    /// Moves a shift to the first day and time range of `bounds` within the
    /// week containing `week_of`.
    pub fn apply_bounds(
        &self,
        shift_id: &str,
        bounds: ShiftBounds,
        week_of: NaiveDate,
    ) -> RosterResult<Shift> {
        let invalid = || RosterError::InvalidShift {
            shift_id: shift_id.to_string(),
            message: "resized range is not a valid grid range".to_string(),
        };
        let week = week_dates(week_of);
        let (start, end) = bounds.times().ok_or_else(invalid)?;
        let first_day = bounds
            .dates(&week)
            .and_then(|dates| dates.first().copied())
            .ok_or_else(invalid)?;

        let mut shift = self.load_shift(shift_id, week_of)?;
        let draft = NewShift {
            staff_id: shift.staff_id.clone(),
            day: first_day,
            shift_type: shift.shift_type,
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
        };
        draft.validate().map_err(|_| invalid())?;

        shift.day = draft.day;
        shift.start_time = draft.start_time;
        shift.end_time = draft.end_time;
        self.store.update_shift(&ShiftRecord::from(&shift))?;
        Ok(shift)
    }

    /// Deletes a shift.
    pub fn remove_shift(&self, shift_id: &str) -> RosterResult<()> {
        if !self.store.delete_shift(shift_id)? {
            return Err(RosterError::ShiftNotFound {
                id: shift_id.to_string(),
            });
        }
        tracing::debug!(shift_id, "Shift removed");
        Ok(())
    }

    /// Writes back the effect of a grid interaction event.
    ///
    /// Live bound updates move the shift itself. When a resize finishes
    /// spanning several days, the extra days get copies of the shift.
    /// Selection and capture events need no write and are ignored.
    pub fn handle_event(
        &self,
        event: &InteractionEvent,
        week_of: NaiveDate,
    ) -> RosterResult<Vec<Shift>> {
        match event {
            InteractionEvent::BoundsUpdated { shift_id, bounds } => {
                Ok(vec![self.apply_bounds(shift_id, *bounds, week_of)?])
            }
            InteractionEvent::ResizeFinished { shift_id, bounds } => {
                let shift = self.apply_bounds(shift_id, *bounds, week_of)?;
                let week = week_dates(week_of);
                let mut written = vec![shift.clone()];
                for day in bounds.dates(&week).into_iter().flatten().skip(1) {
                    let copy = Shift {
                        id: Uuid::new_v4().to_string(),
                        day,
                        ..shift.clone()
                    };
                    self.store.insert_shift(&ShiftRecord::from(&copy))?;
                    written.push(copy);
                }
                Ok(written)
            }
            InteractionEvent::ShiftRemoved { shift_id } => {
                self.remove_shift(shift_id)?;
                Ok(Vec::new())
            }
            _ => Ok(Vec::new()),
        }
    }
}
