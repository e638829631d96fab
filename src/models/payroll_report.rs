//! Payroll report models.
//!
//! A [`PayrollReport`] is the output of aggregating a roster over a pay
//! period: one [`StaffPayLine`] per staff member plus [`PayrollTotals`].

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmploymentType, PayPeriod};

/// Hours and pay for one staff member over a pay period.
///
/// # Example
///
/// ```
/// use shift_roster::models::{EmploymentType, StaffPayLine};
/// use rust_decimal::Decimal;
///
/// let line = StaffPayLine {
///     staff_id: "staff_001".to_string(),
///     name: "Alice".to_string(),
///     employment_type: EmploymentType::PartTime,
///     shift_count: 1,
///     hours: Decimal::new(9, 0),
///     rate: Some(Decimal::new(150000, 0)),
///     amount: Decimal::new(1_350_000, 0),
/// };
/// assert_eq!(line.amount, line.hours * line.rate.unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffPayLine {
    /// The staff member this line is for.
    pub staff_id: String,
    /// Display name at the time of calculation.
    pub name: String,
    /// Employment arrangement.
    pub employment_type: EmploymentType,
    /// Number of working shifts in the period.
    pub shift_count: usize,
    /// Hours worked in the period.
    pub hours: Decimal,
    /// Hourly rate; absent for monthly salaried staff.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// Pay for the period.
    pub amount: Decimal,
}

/// Aggregated totals across every line of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Hours across all staff.
    pub total_hours: Decimal,
    /// Pay owed to hourly staff.
    pub hourly_pay: Decimal,
    /// Pay owed to monthly salaried staff.
    pub salaried_pay: Decimal,
    /// Sum of every line amount.
    pub total_pay: Decimal,
}

impl PayrollTotals {
    /// Sums a set of pay lines.
    pub fn from_lines(lines: &[StaffPayLine]) -> Self {
        lines.iter().fold(PayrollTotals::default(), |mut totals, line| {
            totals.total_hours += line.hours;
            match line.employment_type {
                EmploymentType::PartTime => totals.hourly_pay += line.amount,
                EmploymentType::FullTime => totals.salaried_pay += line.amount,
            }
            totals.total_pay += line.amount;
            totals
        })
    }
}

/// The result of a payroll aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// The period the report covers.
    pub pay_period: PayPeriod,
    /// One line per staff member, in roster display order.
    pub lines: Vec<StaffPayLine>,
    /// Aggregated totals.
    pub totals: PayrollTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(employment_type: EmploymentType, hours: i64, amount: i64) -> StaffPayLine {
        StaffPayLine {
            staff_id: "s".to_string(),
            name: "n".to_string(),
            employment_type,
            shift_count: 1,
            hours: Decimal::new(hours, 0),
            rate: None,
            amount: Decimal::new(amount, 0),
        }
    }

    #[test]
    fn test_totals_split_by_employment_type() {
        let lines = vec![
            line(EmploymentType::PartTime, 9, 1_350_000),
            line(EmploymentType::FullTime, 40, 12_000_000),
            line(EmploymentType::PartTime, 4, 400_000),
        ];

        let totals = PayrollTotals::from_lines(&lines);
        assert_eq!(totals.total_hours, Decimal::new(53, 0));
        assert_eq!(totals.hourly_pay, Decimal::new(1_750_000, 0));
        assert_eq!(totals.salaried_pay, Decimal::new(12_000_000, 0));
        assert_eq!(totals.total_pay, Decimal::new(13_750_000, 0));
    }

    #[test]
    fn test_totals_of_no_lines_are_zero() {
        assert_eq!(PayrollTotals::from_lines(&[]), PayrollTotals::default());
    }

    #[test]
    fn test_pay_line_omits_missing_rate() {
        let json = serde_json::to_string(&line(EmploymentType::FullTime, 1, 1)).unwrap();
        assert!(!json.contains("rate"));
    }
}
