//! Data sources a caller can use to assemble a [`RenderRequest`]
//!
//! The renderer itself never calls these; it only sees the lists they return.
//! Applications implement the traits on top of their own storage and holiday
//! feed, and the in-memory versions here back tests and small tools.

use crate::model::{Employee, Holiday, RenderRequest, Vacation};
use crate::Result;
use chrono::NaiveDate;

pub trait RosterSource: Send + Sync {
    fn list_employees(&self) -> Result<Vec<Employee>>;

    /// Vacations with at least one day inside `from..=to`.
    fn list_vacations_overlapping(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Vacation>>;
}

pub trait HolidaySource: Send + Sync {
    /// Public holidays of `country_code` falling inside `from..=to`.
    fn list_holidays(&self, country_code: &str, from: NaiveDate, to: NaiveDate) -> Result<Vec<Holiday>>;
}

/// Roster kept in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoster {
    employees: Vec<Employee>,
    vacations: Vec<Vacation>,
}

impl MemoryRoster {
    pub fn new(employees: Vec<Employee>, vacations: Vec<Vacation>) -> Self {
        Self {
            employees,
            vacations,
        }
    }
}

impl RosterSource for MemoryRoster {
    fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn list_vacations_overlapping(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Vacation>> {
        let mut found: Vec<Vacation> = self
            .vacations
            .iter()
            .filter(|v| v.overlaps(from, to))
            .cloned()
            .collect();
        found.sort_by_key(|v| v.start_date);
        Ok(found)
    }
}

/// Holidays kept in memory; entries without a country code match every country.
#[derive(Debug, Clone, Default)]
pub struct MemoryHolidays {
    holidays: Vec<Holiday>,
}

impl MemoryHolidays {
    pub fn new(holidays: Vec<Holiday>) -> Self {
        Self { holidays }
    }
}

impl HolidaySource for MemoryHolidays {
    fn list_holidays(&self, country_code: &str, from: NaiveDate, to: NaiveDate) -> Result<Vec<Holiday>> {
        Ok(self
            .holidays
            .iter()
            .filter(|h| from <= h.date && h.date <= to)
            .filter(|h| {
                h.country_code
                    .as_deref()
                    .map_or(true, |code| code.eq_ignore_ascii_case(country_code))
            })
            .cloned()
            .collect())
    }
}

/// Selected holiday country: the code queried from the feed and the label shown in the legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub code: String,
    pub label: String,
}

impl Country {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

impl RenderRequest {
    /// Fetch everything a render of `from..=to` needs.
    ///
    /// Roster failures are returned. A failing holiday feed only costs the
    /// holiday shading: it is logged and the request is built without holidays.
    pub fn gather(
        roster: &dyn RosterSource,
        holidays: Option<(&dyn HolidaySource, &Country)>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Self> {
        let request = RenderRequest::new(from, to);
        request.day_count()?;

        let employees = roster.list_employees()?;
        let vacations = roster.list_vacations_overlapping(from, to)?;

        let (holiday_list, label) = match holidays {
            Some((source, country)) => {
                let list = source.list_holidays(&country.code, from, to).unwrap_or_else(|e| {
                    log::warn!("Holiday lookup for {} failed: {}", country.code, e);
                    Vec::new()
                });
                (list, country.label.clone())
            }
            None => (Vec::new(), String::new()),
        };

        Ok(request
            .employees(employees)
            .vacations(vacations)
            .holidays(holiday_list)
            .country_label(label))
    }
}
