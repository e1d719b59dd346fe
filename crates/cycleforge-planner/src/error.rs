//! Planner error types.

use thiserror::Error;

/// Errors that can end an allocation run before it starts.
///
/// Nothing inside the engine itself is fatal: pinning conflicts become
/// issues, and an unfillable composition search yields an empty
/// allocation rather than an error.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid configuration: {0}")]
    Config(#[from] cycleforge_core::ConfigError),
}

pub type PlanResult<T> = Result<T, PlanError>;
