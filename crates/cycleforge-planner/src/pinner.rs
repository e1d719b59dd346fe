//! Preference pinning.
//!
//! Explicit per-player role declarations are honored before any automatic
//! allocation, in roster order, so human intent consumes quota first.
//! Conflicts never fail the run; they become ordered issues.

use serde::Serialize;
use tracing::debug;

use cycleforge_core::{Participant, RoleId, feasible};

use crate::quota::{QuotaEstimate, QuotaRemainder};

/// Why a declared role could not be honored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    /// The declared identifier is not in the catalogue. The player stays
    /// available to automatic allocation (typo tolerance).
    UnknownRole { declared: String },
    /// The declared role fails the eligibility gate. The player is
    /// forced to Idle (hard constraint).
    InfeasibleRole { role: RoleId },
    /// The declared role's casts do not fit the remaining quota. The
    /// player is forced to Idle.
    ExceedsQuota { role: RoleId },
}

/// A pinning conflict, reported to the operator but never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub participant: String,
    pub kind: IssueKind,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            IssueKind::UnknownRole { declared } => {
                write!(f, "{}: unknown role '{}' → ignored", self.participant, declared)
            }
            IssueKind::InfeasibleRole { role } => {
                write!(f, "{}: infeasible desired '{}' → Idle", self.participant, role)
            }
            IssueKind::ExceedsQuota { role } => {
                write!(
                    f,
                    "{}: desired '{}' exceeds remaining quotas → Idle",
                    self.participant, role
                )
            }
        }
    }
}

/// Casts, energy, and points consumed by pinned roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PinTotals {
    pub sb_casts: u32,
    pub mag_casts: u32,
    pub energy: u32,
    pub sb_points: u32,
    pub mag_points: u32,
}

/// Result of the pinning pass.
#[derive(Debug, Clone)]
pub struct PinOutcome {
    /// Per-roster-index assignment. `None` means the slot is open to
    /// automatic allocation; `Some(Idle)` is a forced Idle.
    pub assigned: Vec<Option<RoleId>>,
    pub remaining: QuotaRemainder,
    pub totals: PinTotals,
    pub issues: Vec<Issue>,
}

/// Resolve declared roles against the quota, in roster order.
pub fn pin_desired_roles(
    roster: &[Participant],
    quota: &QuotaEstimate,
    energy_cap: u32,
) -> PinOutcome {
    let mut assigned: Vec<Option<RoleId>> = vec![None; roster.len()];
    let mut remaining = quota.remainder();
    let mut totals = PinTotals::default();
    let mut issues = Vec::new();

    for (idx, p) in roster.iter().enumerate() {
        let desired = p.desired_role.trim();
        if desired.is_empty() || desired == "Auto" {
            continue;
        }
        let Some(role) = RoleId::parse(desired) else {
            issues.push(Issue {
                participant: p.name.clone(),
                kind: IssueKind::UnknownRole { declared: desired.to_string() },
            });
            continue;
        };
        if role == RoleId::Auto {
            continue;
        }
        if !feasible(p, role, energy_cap) {
            issues.push(Issue {
                participant: p.name.clone(),
                kind: IssueKind::InfeasibleRole { role },
            });
            assigned[idx] = Some(RoleId::Idle);
            continue;
        }
        let stats = role.stats();
        if stats.sb_casts > remaining.sb || stats.mag_casts > remaining.mag {
            issues.push(Issue {
                participant: p.name.clone(),
                kind: IssueKind::ExceedsQuota { role },
            });
            assigned[idx] = Some(RoleId::Idle);
            continue;
        }

        assigned[idx] = Some(role);
        remaining = QuotaRemainder {
            sb: remaining.sb - stats.sb_casts,
            mag: remaining.mag - stats.mag_casts,
        };
        totals.sb_casts += stats.sb_casts;
        totals.mag_casts += stats.mag_casts;
        totals.energy += stats.energy;
        totals.sb_points += cycleforge_core::points::sb_points(p.sb_level) * stats.sb_casts;
        totals.mag_points += cycleforge_core::points::mag_points(p.mag_level) * stats.mag_casts;
        debug!(player = %p.name, role = %role, "pinned declared role");
    }

    PinOutcome { assigned, remaining, totals, issues }
}
