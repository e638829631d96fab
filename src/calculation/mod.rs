//! Calculation logic for the shift roster engine.
//!
//! This module contains the pure functions over roster snapshots: worked
//! hours and salary, roster-wide payroll aggregation, staff coverage on the
//! time grid, and recurring shift date expansion.

mod coverage;
mod hours;
mod payroll;
mod recurring;

pub use coverage::{
    CoverageCell, CoverageDay, CoverageGrid, CoverageLevel, PeriodCoverage, coverage,
    coverage_over_range, intensity_class, is_active, period_coverage, weekly_coverage,
};
pub use hours::{hours_of, salary, total_hours};
pub use payroll::{hours_by_staff, index_by_staff, payroll_report, staff_pay_line};
pub use recurring::{RecurringShift, generate_recurring_dates, recurring_dates};
