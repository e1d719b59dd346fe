//! CycleForge core — static game data and shared types.
//!
//! Holds the immutable inputs of an allocation run: the per-level points
//! tables, the fixed role catalogue and bracket recipes, the eligibility
//! gate, the roster model, and the run configuration. The planning logic
//! lives in `cycleforge-planner`.

pub mod catalogue;
pub mod config;
pub mod points;
pub mod roster;

pub use catalogue::{Bracket, RoleId, RoleStats, bracket, feasible, BRACKETS};
pub use config::{ConfigError, PlanConfig, Strategy};
pub use roster::{Participant, Roster};
