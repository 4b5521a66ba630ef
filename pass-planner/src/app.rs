//! One planning run, from configuration to rendered report.

use tracing::info;

use crate::input::{InputError, load_ticket_catalog, load_travel_days};
use crate::planner::{ConfigError, PlanConfig, PlanError, PlanRequest, Planner};
use crate::report;

/// Anything that stops a planning run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Load the inputs named by `config`, plan, and render the result.
pub fn run(config: &PlanConfig) -> Result<String, Error> {
    config.validate()?;

    let travel_days = load_travel_days(&config.travel_days_path)?;
    let catalog = load_ticket_catalog(&config.tickets_path)?;
    let start = config.start_day();
    info!(
        travel_days = travel_days.len(),
        tickets = catalog.len(),
        %start,
        "inputs loaded"
    );

    let request = PlanRequest::new(config.initial_wallet(), start, travel_days);
    let plan = Planner::new(&catalog, config.credit_rule).plan(&request)?;

    Ok(report::render(&plan, config.output)?)
}
