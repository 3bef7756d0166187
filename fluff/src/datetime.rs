//! Calendar date generation in `YYYY-MM-DD` form
//!
//! Days are bounded by a fixed month table in which February always has 28
//! days. There is no leap-year adjustment.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::config::MAX_YEAR;
use crate::error::{FluffError, FluffResult};
use crate::generator::Generator;

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days in `month` (1-12), or `None` for an out-of-range month
pub fn days_in_month(month: u8) -> Option<u8> {
    match month {
        1..=12 => Some(DAYS_IN_MONTH[usize::from(month) - 1]),
        _ => None,
    }
}

// ============================================================================
// Calendar Date
// ============================================================================

/// A date whose fields always satisfy the fixed month table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Build a date, validating every field
    pub fn new(year: u16, month: u8, day: u8) -> FluffResult<Self> {
        if year == 0 || year > MAX_YEAR {
            return Err(FluffError::invalid_argument(
                "year",
                format!("{} is outside 1..={}", year, MAX_YEAR),
            ));
        }
        let max_day = days_in_month(month).ok_or_else(|| {
            FluffError::invalid_argument("month", format!("{} is outside 1..=12", month))
        })?;
        if day == 0 || day > max_day {
            return Err(FluffError::invalid_argument(
                "day",
                format!("{} is outside 1..={} for month {:02}", day, max_day, month),
            ));
        }
        Ok(Self { year, month, day })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = FluffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(FluffError::invalid_argument(
                "date",
                format!("`{}` is not in YYYY-MM-DD form", s),
            ));
        }

        let field = |name: &'static str, text: &str, width: usize| {
            if text.len() != width || !text.bytes().all(|b| b.is_ascii_digit()) {
                return Err(FluffError::invalid_argument(
                    name,
                    format!("`{}` is not a {}-digit number", text, width),
                ));
            }
            text.parse::<u16>().map_err(|_| {
                FluffError::invalid_argument(name, format!("`{}` is not a number", text))
            })
        };
        let year = field("year", parts[0], 4)?;
        // two ASCII digits always fit in a u8
        let month = u8::try_from(field("month", parts[1], 2)?).unwrap_or(u8::MAX);
        let day = u8::try_from(field("day", parts[2], 2)?).unwrap_or(u8::MAX);

        Self::new(year, month, day)
    }
}

// ============================================================================
// Date Generator
// ============================================================================

/// Generator for calendar dates with years in a bounded range
#[derive(Debug, Clone)]
pub struct DateGenerator {
    min_year: u16,
    max_year: u16,
}

impl DateGenerator {
    /// Create a date generator for years in `min_year..=max_year`
    pub fn new(min_year: u16, max_year: u16) -> FluffResult<Self> {
        if min_year == 0 || min_year > max_year || max_year > MAX_YEAR {
            return Err(FluffError::invalid_argument(
                "year range",
                format!(
                    "{}..={} must satisfy 1 <= min <= max <= {}",
                    min_year, max_year, MAX_YEAR
                ),
            ));
        }
        Ok(Self { min_year, max_year })
    }

    pub fn year_range(&self) -> (u16, u16) {
        (self.min_year, self.max_year)
    }
}

impl Default for DateGenerator {
    fn default() -> Self {
        Self {
            min_year: 1,
            max_year: MAX_YEAR,
        }
    }
}

impl Generator<CalendarDate> for DateGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore) -> CalendarDate {
        let year = rng.gen_range(self.min_year..=self.max_year);
        let month = rng.gen_range(1..=12u8);
        let day = rng.gen_range(1..=DAYS_IN_MONTH[usize::from(month) - 1]);
        CalendarDate { year, month, day }
    }
}
