//! Rendering planner results for the console.

use std::fmt::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{Money, Purchase, TravelDay};
use crate::planner::Plan;

/// How a plan is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable purchase logs.
    #[default]
    Text,

    /// A single JSON document.
    Json,
}

/// Error returned when parsing an unknown output format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format {0:?} (expected \"text\" or \"json\")")]
pub struct UnknownOutputFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(UnknownOutputFormat(other.to_string())),
        }
    }
}

/// Serialized form of a [`Plan`].
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    /// Travel days planned for, ascending
    pub travel_days: &'a [TravelDay],

    /// Cost shared by every cheapest solution
    pub cost: Money,

    /// The cheapest solutions
    pub solutions: Vec<SolutionReport<'a>>,

    /// Covering solutions found before picking the cheapest
    pub solutions_found: usize,

    /// Search branches simulated
    pub branches_explored: usize,
}

/// One cheapest solution.
#[derive(Debug, Serialize)]
pub struct SolutionReport<'a> {
    pub cost: Money,
    pub purchases: &'a [Purchase],
}

impl<'a> From<&'a Plan> for PlanReport<'a> {
    fn from(plan: &'a Plan) -> Self {
        Self {
            travel_days: &plan.travel_days,
            cost: plan
                .solutions
                .first()
                .map_or(Money::ZERO, |w| w.cost()),
            solutions: plan
                .solutions
                .iter()
                .map(|w| SolutionReport {
                    cost: w.cost(),
                    purchases: w.log(),
                })
                .collect(),
            solutions_found: plan.solutions_found,
            branches_explored: plan.branches_explored,
        }
    }
}

/// Render a plan in the requested format.
pub fn render(plan: &Plan, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(plan)),
        OutputFormat::Json => serde_json::to_string_pretty(&PlanReport::from(plan)),
    }
}

/// Render a plan as purchase logs separated by `OR`.
pub fn render_text(plan: &Plan) -> String {
    let days: Vec<String> = plan.travel_days.iter().map(ToString::to_string).collect();

    let mut out = String::new();
    let _ = writeln!(out, "Ticket purchases for [{}]", days.join(", "));
    let _ = writeln!(out, "Found {} solutions:", plan.solutions.len());

    let solutions: Vec<String> = plan
        .solutions
        .iter()
        .map(|w| {
            if w.log().is_empty() {
                "no purchases needed".to_string()
            } else {
                w.log()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        })
        .collect();
    out.push_str(&solutions.join("\n OR\n"));
    out.push('\n');

    out
}
