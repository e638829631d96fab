//! Staff member model and compensation types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment, paid a fixed monthly salary.
    FullTime,
    /// Part-time employment, paid per hour worked.
    PartTime,
}

/// How a staff member is paid.
///
/// The employment type is the serde tag, so a record can only ever carry
/// the figure that matches its arrangement.
///
/// # Example
///
/// ```
/// use shift_roster::models::{Compensation, EmploymentType};
/// use rust_decimal::Decimal;
///
/// let json = r#"{"employment_type": "part_time", "hourly_rate": "150000"}"#;
/// let compensation: Compensation = serde_json::from_str(json).unwrap();
/// assert_eq!(compensation, Compensation::Hourly { hourly_rate: Decimal::new(150000, 0) });
/// assert_eq!(compensation.employment_type(), EmploymentType::PartTime);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "employment_type")]
pub enum Compensation {
    /// Paid per worked hour.
    #[serde(rename = "part_time")]
    Hourly {
        /// Pay per hour.
        hourly_rate: Decimal,
    },
    /// Paid a fixed amount per month regardless of hours.
    #[serde(rename = "full_time")]
    Monthly {
        /// Pay per month.
        monthly_salary: Decimal,
    },
}

impl Compensation {
    /// The employment arrangement this compensation belongs to.
    pub fn employment_type(&self) -> EmploymentType {
        match self {
            Compensation::Hourly { .. } => EmploymentType::PartTime,
            Compensation::Monthly { .. } => EmploymentType::FullTime,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A member of staff on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Palette slot, cycled modulo the palette size.
    #[serde(default)]
    pub color_index: u32,
    /// Pay arrangement.
    pub compensation: Compensation,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// National identity number.
    #[serde(default)]
    pub national_id: Option<String>,
    /// Date the staff member joined.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    /// Highest education attained.
    #[serde(default)]
    pub education: Option<String>,
    /// Reference to an externally hosted avatar image.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// Team name.
    #[serde(default)]
    pub team: Option<String>,
    /// Whether the staff member is currently employed.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Manual sort position in roster lists.
    #[serde(default)]
    pub display_order: i32,
}

impl StaffMember {
    /// Creates an active staff member with no optional profile fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, compensation: Compensation) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color_index: 0,
            compensation,
            date_of_birth: None,
            national_id: None,
            join_date: None,
            education: None,
            avatar_url: None,
            phone: None,
            email: None,
            position: None,
            team: None,
            is_active: true,
            display_order: 0,
        }
    }

    /// The employment arrangement, derived from the compensation.
    pub fn employment_type(&self) -> EmploymentType {
        self.compensation.employment_type()
    }

    /// Picks this staff member's display color from `palette`.
    ///
    /// Returns `None` only for an empty palette.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::{Compensation, StaffMember};
    /// use rust_decimal::Decimal;
    ///
    /// let mut staff = StaffMember::new(
    ///     "s1",
    ///     "Alice",
    ///     Compensation::Hourly { hourly_rate: Decimal::new(150000, 0) },
    /// );
    /// staff.color_index = 4;
    /// let palette = vec!["#ef4444".to_string(), "#3b82f6".to_string(), "#22c55e".to_string()];
    /// assert_eq!(staff.color(&palette), Some("#3b82f6"));
    /// ```
    pub fn color<'a>(&self, palette: &'a [String]) -> Option<&'a str> {
        if palette.is_empty() {
            return None;
        }
        palette
            .get(self.color_index as usize % palette.len())
            .map(String::as_str)
    }

    /// Checks the fields a store write must not accept.
    pub fn validate(&self) -> RosterResult<()> {
        if self.name.trim().is_empty() {
            return Err(RosterError::InvalidStaff {
                field: "name".to_string(),
                message: "cannot be empty".to_string(),
            });
        }

        let (field, amount) = match self.compensation {
            Compensation::Hourly { hourly_rate } => ("hourly_rate", hourly_rate),
            Compensation::Monthly { monthly_salary } => ("monthly_salary", monthly_salary),
        };
        if amount.is_sign_negative() {
            return Err(RosterError::InvalidStaff {
                field: field.to_string(),
                message: "cannot be negative".to_string(),
            });
        }

        if let (Some(born), Some(joined)) = (self.date_of_birth, self.join_date) {
            if joined < born {
                return Err(RosterError::InvalidStaff {
                    field: "join_date".to_string(),
                    message: "cannot be before date of birth".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly(rate: i64) -> Compensation {
        Compensation::Hourly {
            hourly_rate: Decimal::new(rate, 0),
        }
    }

    #[test]
    fn test_deserialize_part_time_staff() {
        let json = r#"{
            "id": "staff_001",
            "name": "Alice",
            "color_index": 2,
            "compensation": {"employment_type": "part_time", "hourly_rate": "150000"},
            "phone": "0901234567",
            "display_order": 3
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.id, "staff_001");
        assert_eq!(staff.employment_type(), EmploymentType::PartTime);
        assert_eq!(staff.compensation, hourly(150000));
        assert_eq!(staff.phone.as_deref(), Some("0901234567"));
        assert!(staff.is_active);
        assert_eq!(staff.display_order, 3);
    }

    #[test]
    fn test_deserialize_full_time_staff() {
        let json = r#"{
            "id": "staff_002",
            "name": "Bob",
            "compensation": {"employment_type": "full_time", "monthly_salary": "12000000"},
            "join_date": "2024-03-01",
            "is_active": false
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.employment_type(), EmploymentType::FullTime);
        assert_eq!(
            staff.compensation,
            Compensation::Monthly {
                monthly_salary: Decimal::new(12_000_000, 0)
            }
        );
        assert_eq!(staff.join_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert!(!staff.is_active);
    }

    #[test]
    fn test_mismatched_compensation_field_is_rejected() {
        let json = r#"{"employment_type": "full_time", "hourly_rate": "150000"}"#;
        assert!(serde_json::from_str::<Compensation>(json).is_err());
    }

    #[test]
    fn test_compensation_serializes_with_employment_tag() {
        let json = serde_json::to_value(hourly(100)).unwrap();
        assert_eq!(json["employment_type"], "part_time");
        assert_eq!(json["hourly_rate"], "100");
    }

    #[test]
    fn test_color_cycles_modulo_palette() {
        let palette: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let mut staff = StaffMember::new("s1", "Alice", hourly(1));

        staff.color_index = 0;
        assert_eq!(staff.color(&palette), Some("a"));
        staff.color_index = 5;
        assert_eq!(staff.color(&palette), Some("c"));
        assert_eq!(staff.color(&[]), None);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let staff = StaffMember::new("s1", "  ", hourly(1));
        match staff.validate() {
            Err(RosterError::InvalidStaff { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected InvalidStaff, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let staff = StaffMember::new("s1", "Alice", hourly(-5));
        match staff.validate() {
            Err(RosterError::InvalidStaff { field, .. }) => assert_eq!(field, "hourly_rate"),
            other => panic!("Expected InvalidStaff, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_join_before_birth() {
        let mut staff = StaffMember::new("s1", "Alice", hourly(1));
        staff.date_of_birth = NaiveDate::from_ymd_opt(2000, 1, 1);
        staff.join_date = NaiveDate::from_ymd_opt(1999, 1, 1);
        assert!(staff.validate().is_err());

        staff.join_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        assert!(staff.validate().is_ok());
    }
}
