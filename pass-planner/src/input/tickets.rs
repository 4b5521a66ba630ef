//! Ticket catalog format.
//!
//! One ticket per line: `NAME DAYS VALID_FOR COST`, e.g. `WEEK 5 7 8.00`.
//! Catalog order is kept; the planner tries tickets in this order.

use std::path::Path;

use crate::domain::{Money, TicketType};

use super::{InputError, content_lines, read_file};

const TICKET_FIELDS: &str = "4 fields (name days valid_for cost)";

/// Parse a ticket catalog from text.
pub fn parse_ticket_catalog(text: &str) -> Result<Vec<TicketType>, InputError> {
    content_lines(text)
        .map(|(line, fields)| parse_ticket(line, &fields))
        .collect()
}

/// Read and parse a ticket catalog file.
pub fn load_ticket_catalog(path: &Path) -> Result<Vec<TicketType>, InputError> {
    parse_ticket_catalog(&read_file(path)?)
}

fn parse_ticket(line: usize, fields: &[&str]) -> Result<TicketType, InputError> {
    let [name, days, valid_for, cost] = fields else {
        return Err(InputError::FieldCount {
            line,
            expected: TICKET_FIELDS,
            found: fields.len(),
        });
    };

    let days = parse_count(line, "days", days)?;
    let valid_for = parse_count(line, "valid_for", valid_for)?;
    let cost = Money::parse(cost).map_err(|source| InputError::InvalidCost { line, source })?;

    TicketType::new(*name, days, valid_for, cost)
        .map_err(|source| InputError::InvalidTicket { line, source })
}

fn parse_count(line: usize, field: &'static str, value: &str) -> Result<u32, InputError> {
    value.parse().map_err(|_| InputError::InvalidNumber {
        line,
        field,
        value: value.to_string(),
    })
}
