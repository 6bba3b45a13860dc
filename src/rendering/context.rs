//! Per-render view of the request: clipped bookings, holiday set, lookups.
//!
//! Built once per call from the borrowed request and never shared between
//! calls.

use crate::geometry::{self, Rgb};
use crate::model::{Employee, EmployeeId, Holiday, RenderRequest, Vacation, UNKNOWN_EMPLOYEE};
use chrono::{Days, NaiveDate};
use std::collections::{BTreeMap, HashMap};

/// A vacation that overlaps the window, already clipped to it.
#[derive(Debug, Clone)]
pub struct Booking<'a> {
    pub vacation: &'a Vacation,
    pub employee: Option<&'a Employee>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color: Rgb,
}

impl Booking<'_> {
    pub fn employee_id(&self) -> EmployeeId {
        self.vacation.employee_id
    }

    pub fn employee_name(&self) -> &str {
        self.employee.map(|e| e.name.as_str()).unwrap_or(UNKNOWN_EMPLOYEE)
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// One employee absent on a given day, as drawn in a monthly cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Absence {
    pub employee_id: EmployeeId,
    pub color: Rgb,
}

pub struct RenderContext<'a> {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub days: u32,
    pub employees: &'a [Employee],
    /// Overlapping vacations in input order
    pub bookings: Vec<Booking<'a>>,
    /// Holidays inside the window, by date, first entry per day
    pub holidays: Vec<&'a Holiday>,
    pub country_label: &'a str,
    holiday_days: BTreeMap<NaiveDate, &'a Holiday>,
    roster_rank: HashMap<EmployeeId, usize>,
}

impl<'a> RenderContext<'a> {
    /// `days` must be the validated inclusive day count of the request window.
    pub fn new(request: &'a RenderRequest, days: u32) -> Self {
        let (from, to) = (request.from_date, request.to_date);

        let mut roster_rank = HashMap::new();
        for (rank, employee) in request.employees.iter().enumerate() {
            roster_rank.entry(employee.id).or_insert(rank);
        }

        let bookings = request
            .vacations
            .iter()
            .filter_map(|vacation| {
                let (start, end) = vacation.clip(from, to)?;
                let employee = roster_rank
                    .get(&vacation.employee_id)
                    .map(|&rank| &request.employees[rank]);
                if employee.is_none() {
                    log::trace!(
                        "vacation {} references unknown employee {}",
                        vacation.id,
                        vacation.employee_id
                    );
                }
                Some(Booking {
                    vacation,
                    employee,
                    start,
                    end,
                    color: employee.map(Employee::rgb).unwrap_or(Rgb::DEFAULT),
                })
            })
            .collect();

        let mut holiday_days = BTreeMap::new();
        for holiday in &request.holidays {
            if holiday.date >= from && holiday.date <= to {
                holiday_days.entry(holiday.date).or_insert(holiday);
            }
        }
        let holidays = holiday_days.values().copied().collect();

        Self {
            from,
            to,
            days,
            employees: &request.employees,
            bookings,
            holidays,
            country_label: &request.country_label,
            holiday_days,
            roster_rank,
        }
    }

    /// Date of the column at `offset` days after `from`.
    pub fn date_at(&self, offset: u32) -> NaiveDate {
        self.from
            .checked_add_days(Days::new(u64::from(offset)))
            .unwrap_or(self.to)
    }

    pub fn dates(&self) -> impl Iterator<Item = (u32, NaiveDate)> + '_ {
        (0..self.days).map(move |offset| (offset, self.date_at(offset)))
    }

    pub fn in_window(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn column_of(&self, date: NaiveDate) -> u32 {
        geometry::day_offset(self.from, date).max(0) as u32
    }

    pub fn holiday_on(&self, date: NaiveDate) -> Option<&'a Holiday> {
        self.holiday_days.get(&date).copied()
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_days.contains_key(&date)
    }

    pub fn bookings_for(&self, employee_id: EmployeeId) -> impl Iterator<Item = &Booking<'a>> + '_ {
        self.bookings
            .iter()
            .filter(move |b| b.employee_id() == employee_id)
    }

    /// Distinct employees on vacation on `date`, in roster order.
    ///
    /// Employees missing from the roster come last, in booking order.
    pub fn absences_on(&self, date: NaiveDate) -> Vec<Absence> {
        let mut ranked: Vec<(usize, Absence)> = self
            .bookings
            .iter()
            .enumerate()
            .filter(|(_, b)| b.covers(date))
            .map(|(idx, b)| {
                let rank = self
                    .roster_rank
                    .get(&b.employee_id())
                    .copied()
                    .unwrap_or(self.employees.len() + idx);
                (
                    rank,
                    Absence {
                        employee_id: b.employee_id(),
                        color: b.color,
                    },
                )
            })
            .collect();
        ranked.sort_by_key(|(rank, _)| *rank);

        let mut absences: Vec<Absence> = Vec::with_capacity(ranked.len());
        for (_, absence) in ranked {
            if !absences.iter().any(|a| a.employee_id == absence.employee_id) {
                absences.push(absence);
            }
        }
        absences
    }
}
