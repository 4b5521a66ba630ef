//! Travel calendar format.
//!
//! Each line is either a single day (`20240315`) or a day and a count
//! (`20240315 5`), the latter meaning that day and the following four.
//! Overlapping entries are merged.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::TravelDay;

use super::{InputError, content_lines, read_file};

/// Parse a travel calendar from text.
pub fn parse_travel_days(text: &str) -> Result<BTreeSet<TravelDay>, InputError> {
    let mut days = BTreeSet::new();

    for (line, fields) in content_lines(text) {
        match fields.as_slice() {
            [day] => {
                days.insert(parse_day(line, day)?);
            }
            [day, count] => {
                let start = parse_day(line, day)?;
                let count: i64 = count.parse().map_err(|_| InputError::InvalidNumber {
                    line,
                    field: "count",
                    value: (*count).to_string(),
                })?;
                if count <= 0 {
                    return Err(InputError::NonPositiveCount { line, count });
                }
                let run = u32::try_from(count)
                    .ok()
                    .and_then(|count| start.run(count))
                    .ok_or(InputError::RangeOverflow { line })?;
                days.extend(run);
            }
            _ => {
                return Err(InputError::FieldCount {
                    line,
                    expected: "1 or 2 fields (day [count])",
                    found: fields.len(),
                });
            }
        }
    }

    Ok(days)
}

/// Read and parse a travel calendar file.
pub fn load_travel_days(path: &Path) -> Result<BTreeSet<TravelDay>, InputError> {
    parse_travel_days(&read_file(path)?)
}

fn parse_day(line: usize, token: &str) -> Result<TravelDay, InputError> {
    TravelDay::parse(token).map_err(|source| InputError::InvalidDate { line, source })
}
