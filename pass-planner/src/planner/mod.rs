//! Minimum-cost ticket planning.
//!
//! Given credit already owned, a calendar of travel days and a ticket
//! catalog, the planner tries every sequence of purchases that covers the
//! calendar and keeps the cheapest ones.

mod advance;
mod config;
mod rank;
mod search;

pub use advance::{Advance, Branch};
pub use config::{
    ConfigError, ENV_CREDIT_RULE, ENV_DAYS_CREDIT, ENV_DAYS_LEFT, ENV_OUTPUT, ENV_PLAN, ENV_START,
    ENV_TICKETS, PlanConfig,
};
pub use rank::cheapest;
pub use search::{Plan, PlanError, PlanRequest, Planner, SearchOutcome};
