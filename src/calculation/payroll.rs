//! Roster-wide payroll aggregation.
//!
//! Shifts are indexed by staff id once, so a report over S staff and N
//! shifts costs O(N + S) rather than rescanning the shift list per person.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    Compensation, PayPeriod, PayrollReport, PayrollTotals, Shift, StaffMember, StaffPayLine,
};

use super::hours::sum_hours;

/// Groups working shifts by their `staff_id`.
///
/// Leave and week-off entries are dropped since they never contribute
/// hours.
pub fn index_by_staff(shifts: &[Shift]) -> HashMap<&str, Vec<&Shift>> {
    let mut index: HashMap<&str, Vec<&Shift>> = HashMap::new();
    for shift in shifts.iter().filter(|shift| shift.is_working()) {
        index.entry(shift.staff_id.as_str()).or_default().push(shift);
    }
    index
}

/// Builds the pay line for one staff member from their pre-indexed shifts.
pub fn staff_pay_line(staff: &StaffMember, shifts: &[&Shift]) -> StaffPayLine {
    let hours = sum_hours(shifts.iter().copied());
    let (rate, amount) = match staff.compensation {
        Compensation::Hourly { hourly_rate } => (Some(hourly_rate), hours * hourly_rate),
        Compensation::Monthly { monthly_salary } => (None, monthly_salary),
    };

    StaffPayLine {
        staff_id: staff.id.clone(),
        name: staff.name.clone(),
        employment_type: staff.employment_type(),
        shift_count: shifts.len(),
        hours,
        rate,
        amount,
    }
}

/// Aggregates hours and pay for every staff member over a pay period.
///
/// Only shifts dated inside `pay_period` count. Inactive staff appear only
/// when they still have shifts in the period. Lines follow the roster's
/// manual `display_order`, ties broken by name.
///
/// # Examples
///
/// ```
/// use shift_roster::calculation::payroll_report;
/// use shift_roster::models::{Compensation, PayPeriod, Shift, ShiftType, StaffMember};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let alice = StaffMember::new(
///     "alice",
///     "Alice",
///     Compensation::Hourly { hourly_rate: Decimal::new(150000, 0) },
/// );
/// let day = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let shifts = vec![Shift::working("sh1", "alice", day, ShiftType::Regular, "9:00", "18:00")];
///
/// let report = payroll_report(&[alice], &shifts, PayPeriod::month(2026, 1).unwrap());
/// assert_eq!(report.lines[0].hours, Decimal::new(9, 0));
/// assert_eq!(report.totals.total_pay, Decimal::new(1_350_000, 0));
/// ```
pub fn payroll_report(
    staff: &[StaffMember],
    shifts: &[Shift],
    pay_period: PayPeriod,
) -> PayrollReport {
    let in_period: Vec<Shift> = shifts
        .iter()
        .filter(|shift| pay_period.contains_date(shift.day))
        .cloned()
        .collect();
    let index = index_by_staff(&in_period);

    let mut roster: Vec<&StaffMember> = staff
        .iter()
        .filter(|member| member.is_active || index.contains_key(member.id.as_str()))
        .collect();
    roster.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.name.cmp(&b.name))
    });

    let lines: Vec<StaffPayLine> = roster
        .into_iter()
        .map(|member| {
            let member_shifts = index
                .get(member.id.as_str())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            staff_pay_line(member, member_shifts)
        })
        .collect();

    let orphaned = index
        .keys()
        .filter(|staff_id| !staff.iter().any(|member| member.id == **staff_id))
        .count();
    if orphaned > 0 {
        tracing::warn!(
            orphaned_staff = orphaned,
            "Shifts reference staff not present in the roster snapshot"
        );
    }

    let totals = PayrollTotals::from_lines(&lines);
    tracing::debug!(
        staff_count = lines.len(),
        shift_count = in_period.len(),
        total_pay = %totals.total_pay,
        "Payroll aggregated"
    );

    PayrollReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        pay_period,
        lines,
        totals,
    }
}

/// Hours for every staff member keyed by id; a convenience over
/// [`index_by_staff`] for roster list views.
pub fn hours_by_staff(shifts: &[Shift]) -> HashMap<String, Decimal> {
    index_by_staff(shifts)
        .into_iter()
        .map(|(staff_id, member_shifts)| (staff_id.to_string(), sum_hours(member_shifts)))
        .collect()
}
