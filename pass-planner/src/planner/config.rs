//! Planner configuration.

use std::path::PathBuf;

use crate::domain::{CreditRule, TravelDay, Wallet};
use crate::report::OutputFormat;

/// Environment variable holding already-owned travel-days.
pub const ENV_DAYS_CREDIT: &str = "has_days";
/// Environment variable holding already-owned validity days.
pub const ENV_DAYS_LEFT: &str = "has_left";
/// Environment variable naming the travel calendar file.
pub const ENV_PLAN: &str = "plan";
/// Environment variable naming the ticket catalog file.
pub const ENV_TICKETS: &str = "tickets";
/// Environment variable overriding the start day (`YYYYMMDD`).
pub const ENV_START: &str = "start";
/// Environment variable selecting the credit rule (`credit` or `validity`).
pub const ENV_CREDIT_RULE: &str = "credit_rule";
/// Environment variable selecting the output format (`text` or `json`).
pub const ENV_OUTPUT: &str = "output";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A variable is set to something unusable
    #[error("invalid {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Owned validity cannot cover owned travel-days
    #[error("invalid has_left: {days_left} is less than has_days {days_credit}")]
    ValidityBelowCredit { days_credit: u32, days_left: u32 },
}

/// Everything a planning run needs besides the input files' contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    /// Travel-days already owned.
    pub initial_days_credit: u32,

    /// Validity days already owned. Never less than `initial_days_credit`.
    pub initial_days_left: u32,

    /// Travel calendar file.
    pub travel_days_path: PathBuf,

    /// Ticket catalog file.
    pub tickets_path: PathBuf,

    /// First day of the plan; `None` means today.
    pub start: Option<TravelDay>,

    /// When a wallet may be spent without buying.
    pub credit_rule: CreditRule,

    /// How results are printed.
    pub output: OutputFormat,
}

impl PlanConfig {
    /// Create a configuration with no owned credit, starting today.
    pub fn new(travel_days_path: impl Into<PathBuf>, tickets_path: impl Into<PathBuf>) -> Self {
        Self {
            initial_days_credit: 0,
            initial_days_left: 0,
            travel_days_path: travel_days_path.into(),
            tickets_path: tickets_path.into(),
            start: None,
            credit_rule: CreditRule::default(),
            output: OutputFormat::default(),
        }
    }

    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let travel_days_path = lookup(ENV_PLAN).ok_or(ConfigError::Missing(ENV_PLAN))?;
        let tickets_path = lookup(ENV_TICKETS).ok_or(ConfigError::Missing(ENV_TICKETS))?;

        let mut config = Self::new(travel_days_path, tickets_path);
        config.initial_days_credit = parse_days(ENV_DAYS_CREDIT, lookup(ENV_DAYS_CREDIT))?;
        config.initial_days_left = parse_days(ENV_DAYS_LEFT, lookup(ENV_DAYS_LEFT))?;

        if let Some(value) = lookup(ENV_START) {
            config.start = Some(TravelDay::parse(&value).map_err(|e| invalid(ENV_START, value, e))?);
        }
        if let Some(value) = lookup(ENV_CREDIT_RULE) {
            config.credit_rule = value
                .parse::<CreditRule>()
                .map_err(|e| invalid(ENV_CREDIT_RULE, value, e))?;
        }
        if let Some(value) = lookup(ENV_OUTPUT) {
            config.output = value
                .parse::<OutputFormat>()
                .map_err(|e| invalid(ENV_OUTPUT, value, e))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the owned-credit invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_days_left < self.initial_days_credit {
            return Err(ConfigError::ValidityBelowCredit {
                days_credit: self.initial_days_credit,
                days_left: self.initial_days_left,
            });
        }
        Ok(())
    }

    /// The wallet a plan starts from.
    pub fn initial_wallet(&self) -> Wallet {
        Wallet::new(self.initial_days_credit, self.initial_days_left)
    }

    /// The configured start day, or today's local date.
    pub fn start_day(&self) -> TravelDay {
        self.start
            .unwrap_or_else(|| TravelDay::from_date(chrono::Local::now().date_naive()))
    }
}

fn invalid(name: &'static str, value: String, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        name,
        value,
        reason: reason.to_string(),
    }
}

fn parse_days(name: &'static str, value: Option<String>) -> Result<u32, ConfigError> {
    let Some(value) = value else {
        return Ok(0);
    };

    match value.trim().parse::<i64>() {
        Ok(n) if n < 0 => Err(invalid(name, value, "must not be negative")),
        Ok(n) => u32::try_from(n).map_err(|e| invalid(name, value, e)),
        Err(e) => Err(invalid(name, value, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config =
            PlanConfig::from_lookup(lookup(&[("plan", "days.txt"), ("tickets", "t.txt")]))
                .unwrap();

        assert_eq!(config.initial_days_credit, 0);
        assert_eq!(config.initial_days_left, 0);
        assert_eq!(config.travel_days_path, PathBuf::from("days.txt"));
        assert_eq!(config.tickets_path, PathBuf::from("t.txt"));
        assert_eq!(config.start, None);
        assert_eq!(config.credit_rule, CreditRule::CreditAndValidity);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn all_fields() {
        let config = PlanConfig::from_lookup(lookup(&[
            ("plan", "days.txt"),
            ("tickets", "t.txt"),
            ("has_days", "3"),
            ("has_left", "10"),
            ("start", "20240301"),
            ("credit_rule", "validity"),
            ("output", "json"),
        ]))
        .unwrap();

        assert_eq!(config.initial_days_credit, 3);
        assert_eq!(config.initial_days_left, 10);
        assert_eq!(config.start, Some(TravelDay::parse("20240301").unwrap()));
        assert_eq!(config.credit_rule, CreditRule::ValidityOnly);
        assert_eq!(config.output, OutputFormat::Json);

        let wallet = config.initial_wallet();
        assert_eq!(wallet.days_credit(), 3);
        assert_eq!(wallet.days_left(), 10);
        assert_eq!(config.start_day().to_string(), "20240301");
    }

    #[test]
    fn missing_paths() {
        let err = PlanConfig::from_lookup(lookup(&[("tickets", "t.txt")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("plan"));

        let err = PlanConfig::from_lookup(lookup(&[("plan", "d.txt")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("tickets"));
    }

    #[test]
    fn negative_credit_rejected() {
        let err = PlanConfig::from_lookup(lookup(&[
            ("plan", "d.txt"),
            ("tickets", "t.txt"),
            ("has_days", "-1"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "has_days", .. }));
    }

    #[test]
    fn non_numeric_credit_rejected() {
        let err = PlanConfig::from_lookup(lookup(&[
            ("plan", "d.txt"),
            ("tickets", "t.txt"),
            ("has_left", "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "has_left", .. }));
    }

    #[test]
    fn validity_below_credit_rejected() {
        let err = PlanConfig::from_lookup(lookup(&[
            ("plan", "d.txt"),
            ("tickets", "t.txt"),
            ("has_days", "5"),
            ("has_left", "4"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ValidityBelowCredit {
                days_credit: 5,
                days_left: 4
            }
        );
        assert_eq!(err.to_string(), "invalid has_left: 4 is less than has_days 5");
    }

    #[test]
    fn bad_start_and_rule_rejected() {
        let base = [("plan", "d.txt"), ("tickets", "t.txt")];

        let mut vars = base.to_vec();
        vars.push(("start", "2024-03-01"));
        let err = PlanConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "start", .. }));

        let mut vars = base.to_vec();
        vars.push(("credit_rule", "maybe"));
        let err = PlanConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "credit_rule", .. }));

        let mut vars = base.to_vec();
        vars.push(("output", "xml"));
        let err = PlanConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "output", .. }));
    }
}
