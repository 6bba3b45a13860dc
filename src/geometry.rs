//! Shared geometry primitives: calendar-day arithmetic, colors and path helpers

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color used when an employee has no color or an unparseable one.
pub const DEFAULT_COLOR_HEX: &str = "#3498db";

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday header labels, Monday first.
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Inclusive number of calendar days in `from..=to`. Zero or negative when `to < from`.
pub fn days_inclusive(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days() + 1
}

/// Zero-based column of `date` relative to `from`.
pub fn day_offset(from: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(from).num_days()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Monday-indexed weekday (Monday = 0, Sunday = 6).
pub fn monday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(start), Some(end)) => end.signed_duration_since(start).num_days() as u32,
        _ => 0,
    }
}

/// Every `(year, month)` that intersects `from..=to`, in chronological order.
///
/// Partial months at both ends are included. Returns an empty list when
/// `to < from`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    if to < from {
        return months;
    }
    let (mut year, mut month) = (from.year(), from.month());
    let last = (to.year(), to.month());
    while (year, month) <= last {
        months.push((year, month));
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    months
}

/// Intersection of `start..=end` with the window `from..=to`, if any.
pub fn clip_range(
    start: NaiveDate,
    end: NaiveDate,
    from: NaiveDate,
    to: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    let clipped_start = start.max(from);
    let clipped_end = end.min(to);
    (clipped_start <= clipped_end).then_some((clipped_start, clipped_end))
}

/// Short month + day, no year (`Jun 5`).
pub fn short_date(date: NaiveDate) -> String {
    format!("{} {}", MONTH_ABBREVIATIONS[date.month0() as usize], date.day())
}

/// `Jun 5 - Jun 7`, or a single short date when the range is one day.
pub fn short_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        short_date(start)
    } else {
        format!("{} - {}", short_date(start), short_date(end))
    }
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const DEFAULT: Rgb = Rgb::new(0x34, 0x98, 0xdb);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`. Anything else is rejected.
    pub fn parse_hex(input: &str) -> Option<Rgb> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parse a user-supplied color, degrading to [`Rgb::DEFAULT`].
    pub fn normalize(input: Option<&str>) -> Rgb {
        match input {
            Some(raw) => Rgb::parse_hex(raw).unwrap_or_else(|| {
                log::trace!("malformed color {:?}, using {}", raw, DEFAULT_COLOR_HEX);
                Rgb::DEFAULT
            }),
            None => Rgb::DEFAULT,
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Rgb::parse_hex(&value).ok_or_else(|| format!("invalid hex color '{}'", value))
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// SVG path data for a rectangle with rounded corners.
///
/// The radius is clamped to half of the shorter side. Degenerate rectangles
/// produce an empty path.
pub fn rounded_rect_path(x: f32, y: f32, width: f32, height: f32, radius: f32) -> String {
    if width <= 0.0 || height <= 0.0 {
        return String::new();
    }
    let r = radius.max(0.0).min(width / 2.0).min(height / 2.0);
    let (right, bottom) = (x + width, y + height);
    if r == 0.0 {
        return format!("M{x} {y}H{right}V{bottom}H{x}Z");
    }
    format!(
        "M{x0} {y}H{x1}A{r} {r} 0 0 1 {right} {y0}V{y1}A{r} {r} 0 0 1 {x1} {bottom}H{x0}A{r} {r} 0 0 1 {x} {y1}V{y0}A{r} {r} 0 0 1 {x0} {y}Z",
        x0 = x + r,
        x1 = right - r,
        y0 = y + r,
        y1 = bottom - r,
    )
}
