//! Domain types for the pass planner.
//!
//! Value types are validated at construction time, so the planner can
//! trust any `TravelDay`, `Money` or `TicketType` it is handed.

mod money;
mod ticket;
mod travel_day;
mod wallet;

pub use money::{Money, MoneyError};
pub use ticket::{InvalidTicket, TicketType};
pub use travel_day::{InvalidTravelDay, TravelDay};
pub use wallet::{CreditRule, Purchase, UnknownCreditRule, Wallet};
