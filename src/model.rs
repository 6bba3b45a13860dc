//! Roster data consumed by the renderer
//!
//! These types mirror what the surrounding application stores. The engine
//! treats every list as read-only input for a single render call and never
//! validates cross references between them.

use crate::geometry::{self, Rgb};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type EmployeeId = u64;

/// Placeholder label for vacations whose employee is not in the roster.
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Raw color as stored, usually `#rrggbb`. See [`Employee::rgb`].
    #[serde(default)]
    pub color: Option<String>,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: Some(color.into()),
        }
    }

    /// Normalized display color; malformed or missing values become the default blue.
    pub fn rgb(&self) -> Rgb {
        Rgb::normalize(self.color.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacation {
    pub id: u64,
    #[serde(alias = "employee_id")]
    pub employee_id: EmployeeId,
    #[serde(alias = "start_date")]
    pub start_date: NaiveDate,
    #[serde(alias = "end_date")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

impl Vacation {
    pub fn new(id: u64, employee_id: EmployeeId, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id,
            employee_id,
            start_date,
            end_date,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether any day of the booking falls inside `from..=to`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date >= from
    }

    /// The booked days restricted to the window, if any remain.
    pub fn clip(&self, from: NaiveDate, to: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        geometry::clip_range(self.start_date, self.end_date, from, to)
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Description with surrounding whitespace removed; `None` when blank.
    pub fn note(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    #[serde(default, alias = "country_code")]
    pub country_code: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            country_code: None,
            kind: None,
        }
    }
}

/// Everything a single render needs. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(alias = "from")]
    pub from_date: NaiveDate,
    #[serde(alias = "to")]
    pub to_date: NaiveDate,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub vacations: Vec<Vacation>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// Display name of the selected holiday country; empty when none is selected.
    #[serde(default)]
    pub country_label: String,
}

impl RenderRequest {
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            from_date,
            to_date,
            employees: Vec::new(),
            vacations: Vec::new(),
            holidays: Vec::new(),
            country_label: String::new(),
        }
    }

    /// Build an empty request from `YYYY-MM-DD` strings.
    pub fn with_window_str(from: &str, to: &str) -> Result<Self> {
        Ok(Self::new(parse_date(from)?, parse_date(to)?))
    }

    /// Parse a JSON request body (camelCase or snake_case field names).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidRange(format!("Malformed render request: {}", e)))
    }

    pub fn employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    pub fn vacations(mut self, vacations: Vec<Vacation>) -> Self {
        self.vacations = vacations;
        self
    }

    pub fn holidays(mut self, holidays: Vec<Holiday>) -> Self {
        self.holidays = holidays;
        self
    }

    pub fn country_label(mut self, label: impl Into<String>) -> Self {
        self.country_label = label.into();
        self
    }

    /// Inclusive day count of the window. Fails when the window is empty or inverted.
    pub fn day_count(&self) -> Result<u32> {
        let days = geometry::days_inclusive(self.from_date, self.to_date);
        if days < 1 {
            return Err(Error::InvalidRange(format!(
                "to date {} is before from date {}",
                self.to_date, self.from_date
            )));
        }
        u32::try_from(days)
            .map_err(|_| Error::InvalidRange(format!("window of {} days is too long", days)))
    }
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        Error::InvalidRange(format!("invalid date '{}', use YYYY-MM-DD", input.trim()))
    })
}
