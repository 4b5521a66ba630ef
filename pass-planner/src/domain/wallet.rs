//! Wallet state for one candidate purchase plan.
//!
//! A wallet tracks how many travel-days the traveler can still spend, how
//! many calendar days of validity remain, what has been spent, and which
//! tickets were bought when. It is a plain value: cloning a wallet gives
//! a fully independent copy, which is what lets the planner fork branches.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{Money, TicketType, TravelDay};

/// Rule deciding whether a wallet may be spent on a travel day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreditRule {
    /// Only remaining validity is checked; credit may run negative until
    /// validity lapses. This matches the historical behavior of the tool.
    ValidityOnly,

    /// Both remaining travel-days and remaining validity must be positive.
    #[default]
    CreditAndValidity,
}

/// Error returned when parsing an unknown credit rule name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown credit rule {0:?} (expected \"validity\" or \"credit\")")]
pub struct UnknownCreditRule(String);

impl FromStr for CreditRule {
    type Err = UnknownCreditRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "validity" => Ok(Self::ValidityOnly),
            "credit" => Ok(Self::CreditAndValidity),
            other => Err(UnknownCreditRule(other.to_string())),
        }
    }
}

/// One ticket purchase recorded in a wallet's log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Purchase {
    /// Day the ticket was bought.
    pub day: TravelDay,

    /// Name of the ticket type bought.
    pub ticket: String,

    /// Wallet cost after this purchase.
    pub total_cost: Money,
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: buy {} total_cost={}",
            self.day, self.ticket, self.total_cost
        )
    }
}

/// Travel credit, validity, spend and purchase log of one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    days_credit: i64,
    days_left: u32,
    cost: Money,
    log: Vec<Purchase>,
}

impl Wallet {
    /// Create a wallet holding already-owned credit, with nothing spent.
    pub fn new(days_credit: u32, days_left: u32) -> Self {
        Self {
            days_credit: i64::from(days_credit),
            days_left,
            cost: Money::ZERO,
            log: Vec::new(),
        }
    }

    /// Travel-days remaining. Negative only under [`CreditRule::ValidityOnly`].
    pub fn days_credit(&self) -> i64 {
        self.days_credit
    }

    /// Calendar days of validity remaining.
    pub fn days_left(&self) -> u32 {
        self.days_left
    }

    /// Total spent so far.
    pub fn cost(&self) -> Money {
        self.cost
    }

    /// Purchases in the order they were made.
    pub fn log(&self) -> &[Purchase] {
        &self.log
    }

    /// Buy `ticket` on `day`.
    pub fn buy_ticket(&mut self, day: TravelDay, ticket: &TicketType) {
        self.days_credit += i64::from(ticket.days);
        self.days_left = self.days_left.saturating_add(ticket.valid_for);
        self.cost = self.cost + ticket.cost;
        self.log.push(Purchase {
            day,
            ticket: ticket.name.clone(),
            total_cost: self.cost,
        });
    }

    /// Whether a travel day can be taken without buying anything.
    pub fn has_credit(&self, rule: CreditRule) -> bool {
        match rule {
            CreditRule::ValidityOnly => self.days_left > 0,
            CreditRule::CreditAndValidity => self.days_left > 0 && self.days_credit > 0,
        }
    }

    /// Spend one travel-day; the calendar day also elapses.
    pub fn travel(&mut self) {
        self.days_credit -= 1;
        self.expire();
    }

    /// Let one calendar day of validity elapse.
    pub fn expire(&mut self) {
        self.days_left = self.days_left.saturating_sub(1);
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wallet credit={} left={} cost={}",
            self.days_credit, self.days_left, self.cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> TravelDay {
        TravelDay::parse(s).unwrap()
    }

    fn ticket(name: &str, days: u32, valid_for: u32, cents: u64) -> TicketType {
        TicketType::new(name, days, valid_for, Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn new_wallet_is_empty() {
        let w = Wallet::new(2, 3);
        assert_eq!(w.days_credit(), 2);
        assert_eq!(w.days_left(), 3);
        assert_eq!(w.cost(), Money::ZERO);
        assert!(w.log().is_empty());
    }

    #[test]
    fn buy_ticket_adds_terms_and_logs() {
        let mut w = Wallet::new(1, 1);
        w.buy_ticket(day("20240301"), &ticket("WEEK", 5, 7, 800));
        w.buy_ticket(day("20240308"), &ticket("DAY1", 1, 1, 200));

        assert_eq!(w.days_credit(), 7);
        assert_eq!(w.days_left(), 9);
        assert_eq!(w.cost(), Money::from_cents(1000));
        assert_eq!(w.log().len(), 2);
        assert_eq!(
            w.log()[0].to_string(),
            "20240301: buy WEEK total_cost=8.00"
        );
        assert_eq!(
            w.log()[1].to_string(),
            "20240308: buy DAY1 total_cost=10.00"
        );
    }

    #[test]
    fn travel_spends_credit_and_validity() {
        let mut w = Wallet::new(2, 5);
        w.travel();
        assert_eq!(w.days_credit(), 1);
        assert_eq!(w.days_left(), 4);
    }

    #[test]
    fn expire_stops_at_zero() {
        let mut w = Wallet::new(0, 1);
        w.expire();
        assert_eq!(w.days_left(), 0);
        w.expire();
        assert_eq!(w.days_left(), 0);
    }

    #[test]
    fn credit_rules_differ_when_credit_spent() {
        // Validity remains but every travel-day has been used.
        let mut w = Wallet::new(1, 5);
        w.travel();
        assert_eq!(w.days_credit(), 0);
        assert_eq!(w.days_left(), 4);

        assert!(w.has_credit(CreditRule::ValidityOnly));
        assert!(!w.has_credit(CreditRule::CreditAndValidity));
    }

    #[test]
    fn no_validity_means_no_credit_under_either_rule() {
        let w = Wallet::new(3, 0);
        assert!(!w.has_credit(CreditRule::ValidityOnly));
        assert!(!w.has_credit(CreditRule::CreditAndValidity));
    }

    #[test]
    fn validity_only_lets_credit_go_negative() {
        let mut w = Wallet::new(0, 2);
        assert!(w.has_credit(CreditRule::ValidityOnly));
        w.travel();
        assert_eq!(w.days_credit(), -1);
    }

    #[test]
    fn clones_are_independent() {
        let mut a = Wallet::new(1, 1);
        let b = a.clone();
        a.buy_ticket(day("20240301"), &ticket("DAY1", 1, 1, 200));
        assert!(b.log().is_empty());
        assert_eq!(b.cost(), Money::ZERO);
    }

    #[test]
    fn credit_rule_from_str() {
        assert_eq!("validity".parse::<CreditRule>(), Ok(CreditRule::ValidityOnly));
        assert_eq!("credit".parse::<CreditRule>(), Ok(CreditRule::CreditAndValidity));
        assert!("both".parse::<CreditRule>().is_err());
        assert_eq!(CreditRule::default(), CreditRule::CreditAndValidity);
    }

    #[test]
    fn display() {
        let w = Wallet::new(2, 3);
        assert_eq!(w.to_string(), "Wallet credit=2 left=3 cost=0.00");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Buy(u32, u32, u64),
        Travel,
        Expire,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u32..10, 1u32..30, 0u64..5000).prop_map(|(d, v, c)| Op::Buy(d, v, c)),
            Just(Op::Travel),
            Just(Op::Expire),
        ]
    }

    proptest! {
        /// Cost never decreases and validity only drops by one per day
        #[test]
        fn cost_and_validity_monotonic(
            credit in 0u32..10,
            extra in 0u32..10,
            ops in prop::collection::vec(op(), 0..50),
        ) {
            let start = TravelDay::parse("20240101").unwrap();
            let mut w = Wallet::new(credit, credit + extra);

            for op in ops {
                let before = w.clone();
                match op {
                    Op::Buy(d, v, c) => {
                        let t = TicketType::new("T", d, v, Money::from_cents(c)).unwrap();
                        w.buy_ticket(start, &t);
                        prop_assert_eq!(w.cost(), before.cost() + Money::from_cents(c));
                        prop_assert_eq!(w.days_left(), before.days_left() + v);
                        prop_assert_eq!(w.log().len(), before.log().len() + 1);
                    }
                    Op::Travel => {
                        w.travel();
                        prop_assert_eq!(w.days_credit(), before.days_credit() - 1);
                        prop_assert_eq!(w.days_left(), before.days_left().saturating_sub(1));
                    }
                    Op::Expire => {
                        w.expire();
                        prop_assert_eq!(w.days_left(), before.days_left().saturating_sub(1));
                    }
                }
                prop_assert!(w.cost() >= before.cost());
            }
        }
    }
}
