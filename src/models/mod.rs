//! Core data models for the shift roster engine.
//!
//! Staff and shifts are owned by the caller (or the store); the calculation
//! modules only read snapshots of them.

mod pay_period;
mod payroll_report;
mod shift;
mod staff;

pub use pay_period::PayPeriod;
pub use payroll_report::{PayrollReport, PayrollTotals, StaffPayLine};
pub use shift::{NewShift, Shift, ShiftRecord, ShiftType};
pub use staff::{Compensation, EmploymentType, StaffMember};
