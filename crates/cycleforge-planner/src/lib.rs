//! CycleForge allocation engine.
//!
//! One allocation run is a pure function of (roster snapshot, bracket
//! recipe, energy cap, strategy) → (plan, issues). Stages:
//!
//! 1. **`quota`** — derive the feasible team target from roster capacity
//! 2. **`pinner`** — honor declared roles first, in roster order
//! 3. **`compose`** / **`greedy`** — fill the open slots
//!    ([`strategy::AllocationStrategy`], selected by configuration)
//! 4. **`plan`** — materialize rows, totals, histogram, CSV
//!
//! Nothing mid-run performs I/O or touches shared state; concurrent runs
//! need no coordination.

pub mod compose;
pub mod error;
pub mod greedy;
pub mod pinner;
pub mod plan;
pub mod quota;
pub mod report;
pub mod strategy;

use tracing::info;

use cycleforge_core::{PlanConfig, Roster, bracket};

pub use error::{PlanError, PlanResult};
pub use pinner::{Issue, IssueKind, PinOutcome};
pub use plan::{Plan, PlanRow, PlanTotals};
pub use quota::{QuotaEstimate, QuotaRemainder};
pub use strategy::AllocationStrategy;

/// Run one allocation: validate, estimate, pin, allocate, aggregate.
pub fn plan(roster: &Roster, config: &PlanConfig) -> PlanResult<Plan> {
    config.validate()?;
    let bracket = bracket(&config.bracket)
        .copied()
        .ok_or_else(|| cycleforge_core::ConfigError::UnknownBracket(config.bracket.clone()))?;

    let quota = quota::estimate(&roster.players, config.energy_cap, &bracket);
    let pinned = pinner::pin_desired_roles(&roster.players, &quota, config.energy_cap);

    let strategy = strategy::for_config(config.strategy);
    info!(
        bracket = bracket.name,
        energy_cap = config.energy_cap,
        strategy = strategy.name(),
        players = roster.players.len(),
        cycles = quota.cycles,
        "running allocation"
    );
    let assigned = strategy.allocate(
        &roster.players,
        &pinned.assigned,
        pinned.remaining,
        config.energy_cap,
    );

    Ok(plan::build_plan(
        &roster.players,
        &assigned,
        &quota,
        bracket,
        pinned.issues,
    ))
}
