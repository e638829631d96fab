//! Worked hours and salary for a single staff member.
//!
//! Hours come straight from the "H:MM" strings of working shifts; no slot
//! lookup is involved. Leave and week-off entries contribute nothing.

use rust_decimal::Decimal;

use crate::grid::time_to_minutes;
use crate::models::{Compensation, Shift, StaffMember};

/// Hours covered by one shift.
///
/// Returns zero for leave, week-off, or times that do not parse. An
/// inverted range yields a negative figure; ranges are validated when the
/// shift is created, not here.
///
/// # Examples
///
/// ```
/// use shift_roster::calculation::hours_of;
/// use shift_roster::models::{Shift, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let shift = Shift::working("sh1", "s1", day, ShiftType::Regular, "8:30", "12:00");
/// assert_eq!(hours_of(&shift), Decimal::new(35, 1)); // 3.5 hours
/// ```
pub fn hours_of(shift: &Shift) -> Decimal {
    let Some((start, end)) = shift.time_range() else {
        return Decimal::ZERO;
    };

    match (time_to_minutes(start), time_to_minutes(end)) {
        (Some(start_minutes), Some(end_minutes)) => {
            let worked = i64::from(end_minutes) - i64::from(start_minutes);
            Decimal::new(worked, 0) / Decimal::new(60, 0)
        }
        _ => {
            tracing::debug!(
                shift_id = %shift.id,
                start = %start,
                end = %end,
                "Unparseable shift times counted as zero hours"
            );
            Decimal::ZERO
        }
    }
}

/// Sums hours over shifts already restricted to one staff member.
pub(crate) fn sum_hours<'a>(shifts: impl IntoIterator<Item = &'a Shift>) -> Decimal {
    shifts.into_iter().map(hours_of).sum()
}

/// Total hours `staff` worked across `shifts`.
///
/// Shifts belonging to other staff members are skipped.
pub fn total_hours(staff: &StaffMember, shifts: &[Shift]) -> Decimal {
    sum_hours(shifts.iter().filter(|shift| shift.staff_id == staff.id))
}

/// Pay for `staff` over `shifts`.
///
/// Hourly staff earn `total_hours × hourly_rate`; monthly staff earn their
/// fixed salary however many hours they worked.
///
/// # Examples
///
/// ```
/// use shift_roster::calculation::salary;
/// use shift_roster::models::{Compensation, Shift, ShiftType, StaffMember};
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
/// assert_eq!(salary(&alice, &shifts), Decimal::new(1_350_000, 0));
/// ```
pub fn salary(staff: &StaffMember, shifts: &[Shift]) -> Decimal {
    match staff.compensation {
        Compensation::Hourly { hourly_rate } => total_hours(staff, shifts) * hourly_rate,
        Compensation::Monthly { monthly_salary } => monthly_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn alice() -> StaffMember {
        StaffMember::new(
            "alice",
            "Alice",
            Compensation::Hourly {
                hourly_rate: dec("150000"),
            },
        )
    }

    fn shift(id: &str, staff_id: &str, start: &str, end: &str) -> Shift {
        Shift::working(
            id,
            staff_id,
            make_date("2026-01-12"),
            ShiftType::Regular,
            start,
            end,
        )
    }

    #[test]
    fn test_alice_single_regular_shift() {
        let shifts = vec![shift("sh1", "alice", "9:00", "18:00")];
        assert_eq!(total_hours(&alice(), &shifts), dec("9.0"));
        assert_eq!(salary(&alice(), &shifts), dec("1350000"));
    }

    #[test]
    fn test_total_hours_empty_is_zero() {
        assert_eq!(total_hours(&alice(), &[]), Decimal::ZERO);
        assert_eq!(salary(&alice(), &[]), Decimal::ZERO);
    }

    #[test]
    fn test_other_staff_shifts_ignored() {
        let shifts = vec![
            shift("sh1", "alice", "9:00", "12:00"),
            shift("sh2", "bob", "9:00", "18:00"),
        ];
        assert_eq!(total_hours(&alice(), &shifts), dec("3"));
    }

    #[test]
    fn test_leave_and_week_off_count_zero() {
        let shifts = vec![
            Shift::day_off("sh1", "alice", make_date("2026-01-13"), ShiftType::Leave),
            Shift::day_off("sh2", "alice", make_date("2026-01-14"), ShiftType::WeekOff),
        ];
        assert_eq!(total_hours(&alice(), &shifts), Decimal::ZERO);
    }

    #[test]
    fn test_flexible_shift_counts() {
        let flexible = Shift::working(
            "sh1",
            "alice",
            make_date("2026-01-12"),
            ShiftType::Flexible,
            "13:30",
            "17:00",
        );
        assert_eq!(hours_of(&flexible), dec("3.5"));
    }

    #[test]
    fn test_padded_times_still_count_hours() {
        assert_eq!(hours_of(&shift("sh1", "alice", "09:00", "10:30")), dec("1.5"));
    }

    #[test]
    fn test_inverted_range_is_not_rejected() {
        assert_eq!(hours_of(&shift("sh1", "alice", "18:00", "9:00")), dec("-9"));
    }

    #[test]
    fn test_unparseable_time_counts_zero() {
        assert_eq!(hours_of(&shift("sh1", "alice", "morning", "18:00")), Decimal::ZERO);
    }

    #[test]
    fn test_monthly_salary_ignores_hours() {
        let bob = StaffMember::new(
            "bob",
            "Bob",
            Compensation::Monthly {
                monthly_salary: dec("12000000"),
            },
        );
        let shifts = vec![shift("sh1", "bob", "9:00", "18:00")];
        assert_eq!(total_hours(&bob, &shifts), dec("9"));
        assert_eq!(salary(&bob, &shifts), dec("12000000"));
        assert_eq!(salary(&bob, &[]), dec("12000000"));
    }

    fn arb_shift() -> impl Strategy<Value = Shift> {
        (0usize..25, 1usize..26).prop_map(|(start, len)| {
            let end = (start + len).min(25).max(start + 1);
            shift(
                "sh",
                "alice",
                crate::grid::TIME_SLOTS[start],
                crate::grid::TIME_SLOTS[end],
            )
        })
    }

    proptest! {
        #[test]
        fn prop_total_hours_is_additive(
            a in proptest::collection::vec(arb_shift(), 0..8),
            b in proptest::collection::vec(arb_shift(), 0..8),
        ) {
            let staff = alice();
            let mut both = a.clone();
            both.extend(b.iter().cloned());
            prop_assert_eq!(
                total_hours(&staff, &both),
                total_hours(&staff, &a) + total_hours(&staff, &b)
            );
        }
    }
}
