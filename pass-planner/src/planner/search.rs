//! Exhaustive purchase search.
//!
//! Each branch is simulated until it either covers every travel day or
//! stalls on a day it cannot pay for. A stalled branch forks once per
//! ticket type, buying that ticket on the stalled day. Every branch that
//! covers the calendar is kept as a solution.
//!
//! Pending branches live on an explicit stack rather than the call stack,
//! so deep purchase sequences cannot overflow it. Children are pushed in
//! reverse catalog order, which makes solutions come out in the same
//! depth-first, catalog-ordered sequence a recursive search would produce.
//!
//! There is no pruning or memoization: the tree has one child per ticket
//! type at every stall, so catalogs and calendars must stay small.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::domain::{CreditRule, TicketType, TravelDay, Wallet};

use super::advance::{Advance, Branch};
use super::rank::cheapest;

/// Errors from planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// No tickets to buy
    #[error("no valid ticket types")]
    EmptyCatalog,

    /// Empty travel calendar
    #[error("no travel days given")]
    NoTravelDays,

    /// Every travel day is in the past
    #[error("no valid travel days on or after {start}")]
    NoTravelDaysFromStart { start: TravelDay },

    /// The search finished without a covering plan
    #[error("no ticket combination covers the travel days")]
    NoSolutionFound,
}

/// What to plan for.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Credit already owned.
    pub wallet: Wallet,

    /// First simulated day. Travel days before it are ignored.
    pub start: TravelDay,

    /// Days the traveler travels.
    pub travel_days: BTreeSet<TravelDay>,
}

impl PlanRequest {
    /// Create a new plan request.
    pub fn new(wallet: Wallet, start: TravelDay, travel_days: BTreeSet<TravelDay>) -> Self {
        Self {
            wallet,
            start,
            travel_days,
        }
    }

    /// Travel days on or after the start day.
    pub fn upcoming_days(&self) -> BTreeSet<TravelDay> {
        self.travel_days.range(self.start..).copied().collect()
    }
}

/// Every solution the search found.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Wallets covering all upcoming travel days, in discovery order.
    pub solutions: Vec<Wallet>,

    /// Branches simulated, including the root.
    pub branches_explored: usize,
}

/// The cheapest ways to cover a calendar.
#[derive(Debug, Clone)]
pub struct Plan {
    /// The travel days that were planned for.
    pub travel_days: Vec<TravelDay>,

    /// Cheapest solutions, all at the same cost, in discovery order.
    pub solutions: Vec<Wallet>,

    /// Branches simulated, including the root.
    pub branches_explored: usize,

    /// Solutions found before keeping only the cheapest.
    pub solutions_found: usize,
}

/// Searches ticket purchase sequences over a fixed catalog.
pub struct Planner<'a> {
    catalog: &'a [TicketType],
    rule: CreditRule,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(catalog: &'a [TicketType], rule: CreditRule) -> Self {
        Self { catalog, rule }
    }

    /// Find every purchase sequence covering the request's upcoming days.
    pub fn search(&self, request: &PlanRequest) -> Result<SearchOutcome, PlanError> {
        let remaining = self.validate(request)?;

        let mut solutions = Vec::new();
        let mut branches_explored = 0;
        let mut stack = vec![Branch::new(request.wallet.clone(), request.start, remaining)];

        while let Some(mut branch) = stack.pop() {
            branches_explored += 1;

            match branch.advance(self.rule) {
                Advance::Covered => {
                    debug!(
                        cost = %branch.wallet.cost(),
                        purchases = branch.wallet.log().len(),
                        "branch covered"
                    );
                    solutions.push(branch.wallet);
                }
                Advance::Stalled => {
                    debug!(day = %branch.day, wallet = %branch.wallet, "branch stalled, forking");
                    stack.extend(self.catalog.iter().rev().map(|ticket| branch.fork(ticket)));
                }
            }
        }

        info!(
            branches_explored,
            solutions = solutions.len(),
            "search complete"
        );

        Ok(SearchOutcome {
            solutions,
            branches_explored,
        })
    }

    /// Search, then keep only the cheapest solutions.
    pub fn plan(&self, request: &PlanRequest) -> Result<Plan, PlanError> {
        let outcome = self.search(request)?;
        let solutions_found = outcome.solutions.len();
        let solutions = cheapest(outcome.solutions);

        let Some(best) = solutions.first() else {
            return Err(PlanError::NoSolutionFound);
        };
        debug!(
            cost = %best.cost(),
            ties = solutions.len(),
            solutions_found,
            "cheapest plans selected"
        );

        Ok(Plan {
            travel_days: request.upcoming_days().into_iter().collect(),
            solutions,
            branches_explored: outcome.branches_explored,
            solutions_found,
        })
    }

    fn validate(&self, request: &PlanRequest) -> Result<BTreeSet<TravelDay>, PlanError> {
        if self.catalog.is_empty() {
            return Err(PlanError::EmptyCatalog);
        }
        if request.travel_days.is_empty() {
            return Err(PlanError::NoTravelDays);
        }

        let remaining = request.upcoming_days();
        if remaining.is_empty() {
            return Err(PlanError::NoTravelDaysFromStart {
                start: request.start,
            });
        }
        Ok(remaining)
    }
}
