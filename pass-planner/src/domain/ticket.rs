//! Ticket catalog entries.

use serde::Serialize;

use super::Money;

/// Error returned when a ticket's terms are unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ticket {name}: {reason}")]
pub struct InvalidTicket {
    name: String,
    reason: &'static str,
}

/// A purchasable ticket product.
///
/// Grants `days` travel-days, usable within `valid_for` calendar days, for
/// `cost`. Names are expected to be unique but this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketType {
    pub name: String,
    pub days: u32,
    pub valid_for: u32,
    pub cost: Money,
}

impl TicketType {
    /// Create a ticket type.
    ///
    /// Both `days` and `valid_for` must be positive, otherwise buying the
    /// ticket would not let a stalled plan make progress.
    pub fn new(
        name: impl Into<String>,
        days: u32,
        valid_for: u32,
        cost: Money,
    ) -> Result<Self, InvalidTicket> {
        let name = name.into();

        if days == 0 {
            return Err(InvalidTicket {
                name,
                reason: "must grant at least one travel day",
            });
        }
        if valid_for == 0 {
            return Err(InvalidTicket {
                name,
                reason: "must be valid for at least one day",
            });
        }

        Ok(Self {
            name,
            days,
            valid_for,
            cost,
        })
    }
}
