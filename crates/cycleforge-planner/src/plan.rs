//! Final plan materialization.
//!
//! Turns the completed assignment into per-player rows, team totals, a
//! role histogram, and the CSV export. Pure recomputation from the
//! assignment: running it twice on the same inputs yields identical
//! output.

use std::collections::BTreeMap;

use serde::Serialize;

use cycleforge_core::catalogue::Bracket;
use cycleforge_core::points::{mag_points, sb_points};
use cycleforge_core::{Participant, RoleId};

use crate::pinner::Issue;
use crate::quota::{QuotaEstimate, QuotaRemainder};

/// One row of the final plan, in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanRow {
    pub name: String,
    pub sb_level: i32,
    pub mag_level: i32,
    pub role: RoleId,
    pub pts_per_sb: u32,
    pub pts_per_mag: u32,
    pub sb_casts: u32,
    pub mag_casts: u32,
    pub sb_points: u32,
    pub mag_points: u32,
    pub player_points: u32,
    pub energy_used: u32,
}

/// Team-wide sums over the final assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlanTotals {
    pub sb_casts: u32,
    pub mag_casts: u32,
    pub energy: u32,
    pub sb_points: u32,
    pub mag_points: u32,
}

impl PlanTotals {
    pub fn grand_total(&self) -> u32 {
        self.sb_points + self.mag_points
    }
}

/// The complete output of one allocation run.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub bracket: Bracket,
    pub quota: QuotaEstimate,
    pub rows: Vec<PlanRow>,
    pub totals: PlanTotals,
    pub role_counts: BTreeMap<RoleId, u32>,
    /// Quota left unfilled after allocation (shortfall vs the target).
    pub remaining: QuotaRemainder,
    pub expected_kills: u32,
    pub issues: Vec<Issue>,
}

/// Columns of the CSV export, in locked order.
const CSV_COLUMNS: [&str; 12] = [
    "name",
    "sb_level",
    "mag_level",
    "role",
    "pts_per_sb",
    "pts_per_mag",
    "sb_casts",
    "mag_casts",
    "sb_points",
    "mag_points",
    "player_points",
    "energy_used",
];

impl Plan {
    /// Serialize the per-player rows as delimited text: header row,
    /// comma-separated, UTF-8, no index column.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&CSV_COLUMNS.join(","));
        out.push('\n');
        for row in &self.rows {
            let fields = [
                csv_field(&row.name),
                row.sb_level.to_string(),
                row.mag_level.to_string(),
                csv_field(row.role.label()),
                row.pts_per_sb.to_string(),
                row.pts_per_mag.to_string(),
                row.sb_casts.to_string(),
                row.mag_casts.to_string(),
                row.sb_points.to_string(),
                row.mag_points.to_string(),
                row.player_points.to_string(),
                row.energy_used.to_string(),
            ];
            out.push_str(&fields.join(","));
            out.push('\n');
        }
        out
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Materialize the final plan. Untouched slots default to Idle; every
/// participant appears exactly once.
pub fn build_plan(
    roster: &[Participant],
    assigned: &[Option<RoleId>],
    quota: &QuotaEstimate,
    bracket: Bracket,
    issues: Vec<Issue>,
) -> Plan {
    let mut rows = Vec::with_capacity(roster.len());
    let mut totals = PlanTotals::default();
    let mut role_counts: BTreeMap<RoleId, u32> = BTreeMap::new();

    for (p, slot) in roster.iter().zip(assigned) {
        let role = slot.unwrap_or(RoleId::Idle);
        let stats = role.stats();
        let pts_per_sb = sb_points(p.sb_level);
        let pts_per_mag = mag_points(p.mag_level);
        let sb_pts = pts_per_sb * stats.sb_casts;
        let mag_pts = pts_per_mag * stats.mag_casts;

        rows.push(PlanRow {
            name: p.name.clone(),
            sb_level: p.sb_level,
            mag_level: p.mag_level,
            role,
            pts_per_sb,
            pts_per_mag,
            sb_casts: stats.sb_casts,
            mag_casts: stats.mag_casts,
            sb_points: sb_pts,
            mag_points: mag_pts,
            player_points: sb_pts + mag_pts,
            energy_used: stats.energy,
        });

        totals.sb_casts += stats.sb_casts;
        totals.mag_casts += stats.mag_casts;
        totals.energy += stats.energy;
        totals.sb_points += sb_pts;
        totals.mag_points += mag_pts;
        *role_counts.entry(role).or_insert(0) += 1;
    }

    Plan {
        bracket,
        quota: *quota,
        remaining: QuotaRemainder {
            sb: quota.sb_required.saturating_sub(totals.sb_casts),
            mag: quota.mag_required.saturating_sub(totals.mag_casts),
        },
        expected_kills: 1 + quota.sb_required,
        rows,
        totals,
        role_counts,
        issues,
    }
}
