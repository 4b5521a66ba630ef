//! Day-by-day simulation of one branch.
//!
//! Every calendar day is visited in order, travel day or not, because
//! validity runs down daily whether or not the traveler travels.

use std::collections::BTreeSet;

use crate::domain::{CreditRule, TicketType, TravelDay, Wallet};

/// Why a branch stopped advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Every travel day has been taken.
    Covered,

    /// The cursor is on a travel day the wallet cannot pay for.
    Stalled,
}

/// Complete state of one branch of the search.
///
/// Cloning a branch clones the wallet, cursor and remaining days together,
/// so siblings never see each other's changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// The branch's wallet.
    pub wallet: Wallet,

    /// The day currently being simulated.
    pub day: TravelDay,

    /// Travel days not yet taken, all on or after `day`.
    pub remaining: BTreeSet<TravelDay>,
}

impl Branch {
    /// Start a branch at `day`.
    pub fn new(wallet: Wallet, day: TravelDay, remaining: BTreeSet<TravelDay>) -> Self {
        Self {
            wallet,
            day,
            remaining,
        }
    }

    /// Simulate days until every travel day is taken or the wallet cannot
    /// pay for the current one.
    pub fn advance(&mut self, rule: CreditRule) -> Advance {
        loop {
            if self.remaining.is_empty() {
                return Advance::Covered;
            }

            if self.remaining.contains(&self.day) {
                if !self.wallet.has_credit(rule) {
                    return Advance::Stalled;
                }
                self.wallet.travel();
                self.remaining.remove(&self.day);
                if self.remaining.is_empty() {
                    return Advance::Covered;
                }
            } else {
                self.wallet.expire();
            }

            // A travel day later than the cursor remains, so the next day exists.
            self.day = self
                .day
                .next()
                .expect("remaining travel days lie after the cursor");
        }
    }

    /// A copy of this branch with `ticket` bought on the current day.
    pub fn fork(&self, ticket: &TicketType) -> Self {
        let mut child = self.clone();
        child.wallet.buy_ticket(child.day, ticket);
        child
    }
}
