//! Calendar day identifiers.
//!
//! Travel calendars name days with a fixed-width `YYYYMMDD` token. Because
//! the width is fixed, lexicographic order on the token equals calendar
//! order, and this type orders the same way.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid day token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid travel day: {reason}")]
pub struct InvalidTravelDay {
    reason: &'static str,
}

/// A single calendar day in `YYYYMMDD` form.
///
/// # Examples
///
/// ```
/// use pass_planner::domain::TravelDay;
///
/// let day = TravelDay::parse("20240315").unwrap();
/// assert_eq!(day.to_string(), "20240315");
/// assert_eq!(day.next().unwrap().to_string(), "20240316");
///
/// // Not 8 digits
/// assert!(TravelDay::parse("2024-03-15").is_err());
/// // Not a real date
/// assert!(TravelDay::parse("20240230").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelDay(NaiveDate);

impl TravelDay {
    /// Parse an 8-digit `YYYYMMDD` token.
    pub fn parse(s: &str) -> Result<Self, InvalidTravelDay> {
        let bytes = s.as_bytes();

        if bytes.len() != 8 {
            return Err(InvalidTravelDay {
                reason: "must be exactly 8 digits (YYYYMMDD)",
            });
        }

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidTravelDay {
                reason: "must contain only digits",
            });
        }

        let year = digits(&bytes[0..4]);
        let month = digits(&bytes[4..6]);
        let day = digits(&bytes[6..8]);

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(Self)
            .ok_or(InvalidTravelDay {
                reason: "no such calendar date",
            })
    }

    /// Wrap a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The following calendar day, if it still has a 4-digit year.
    pub fn next(&self) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(1))
            .filter(|d| d.year() <= 9999)
            .map(Self)
    }

    /// This day and the `count - 1` days after it.
    ///
    /// Returns `None` if the run would leave the representable calendar.
    pub fn run(&self, count: u32) -> Option<Vec<Self>> {
        let mut days = Vec::with_capacity(count.min(366) as usize);
        let mut day = *self;
        for i in 0..count {
            if i > 0 {
                day = day.next()?;
            }
            days.push(day);
        }
        Some(days)
    }
}

fn digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

impl fmt::Debug for TravelDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TravelDay({self})")
    }
}

impl fmt::Display for TravelDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}

impl Serialize for TravelDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
