//! Human-readable plan formatting.

use cycleforge_core::RoleId;
use cycleforge_core::catalogue::ACTIVE_ROLES;

use crate::plan::Plan;

pub fn format_plan(plan: &Plan) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\nBracket {} (perfect round: {} SB, {} Mag, {} kills, energy {})\n\n",
        plan.bracket.name,
        plan.bracket.sb_required,
        plan.bracket.mag_required,
        plan.bracket.kills,
        plan.bracket.team_energy,
    ));

    out.push_str("Roster capability:\n");
    out.push_str(&format!(
        "  SB capacity:  {} casts    Mag capacity: {} casts\n",
        plan.quota.sb_capacity, plan.quota.mag_capacity
    ));
    out.push_str(&format!(
        "  Feasible quota: {} SB / {} Mag ({} cycles)\n\n",
        plan.quota.sb_required, plan.quota.mag_required, plan.quota.cycles
    ));

    out.push_str("Role counts:\n");
    for role in ACTIVE_ROLES {
        let count = plan.role_counts.get(&role).copied().unwrap_or(0);
        out.push_str(&format!("  {:<14} {}\n", role.label(), count));
    }
    let idle = plan.role_counts.get(&RoleId::Idle).copied().unwrap_or(0);
    out.push_str(&format!("  {:<14} {}\n\n", "Idle", idle));

    out.push_str(&format!(
        "{:<20} {:>4} {:>4}  {:<14} {:>4} {:>4} {:>8} {:>8} {:>7} {:>7}\n",
        "name", "sb", "mag", "role", "sbC", "magC", "sb_pts", "mag_pts", "total", "energy"
    ));
    for row in &plan.rows {
        out.push_str(&format!(
            "{:<20} {:>4} {:>4}  {:<14} {:>4} {:>4} {:>8} {:>8} {:>7} {:>7}\n",
            row.name,
            row.sb_level,
            row.mag_level,
            row.role.label(),
            row.sb_casts,
            row.mag_casts,
            row.sb_points,
            row.mag_points,
            row.player_points,
            row.energy_used,
        ));
    }

    out.push_str(&format!(
        "\nTeam totals: {} SB casts, {} Mag casts, {} energy\n",
        plan.totals.sb_casts, plan.totals.mag_casts, plan.totals.energy
    ));
    out.push_str(&format!(
        "Expected points: {} SB + {} Mag = {}\n",
        plan.totals.sb_points,
        plan.totals.mag_points,
        plan.totals.grand_total()
    ));
    out.push_str(&format!(
        "Expected kills: {} / {}\n",
        plan.expected_kills, plan.bracket.kills
    ));

    if !plan.issues.is_empty() {
        out.push_str("\nPinned role notices:\n");
        for issue in &plan.issues {
            out.push_str(&format!("  - {issue}\n"));
        }
    }

    if plan.remaining.sb > 0 || plan.remaining.mag > 0 {
        out.push_str(&format!(
            "\nShortfall vs quota: SB {}, Mag {}\n",
            plan.remaining.sb, plan.remaining.mag
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::build_plan;
    use crate::quota::QuotaEstimate;
    use cycleforge_core::{Participant, bracket};

    #[test]
    fn report_covers_every_section() {
        let roster = vec![Participant {
            name: "Ada".to_string(),
            sb_level: 10,
            mag_level: 0,
            desired_role: "Auto".to_string(),
        }];
        let quota = QuotaEstimate {
            sb_capacity: 3,
            mag_capacity: 0,
            cycles: 0,
            sb_required: 0,
            mag_required: 6,
        };
        let plan = build_plan(
            &roster,
            &[Some(cycleforge_core::RoleId::Idle)],
            &quota,
            *bracket("13").unwrap(),
            vec![],
        );

        let text = format_plan(&plan);
        assert!(text.contains("Bracket 13"));
        assert!(text.contains("Role counts:"));
        assert!(text.contains("Ada"));
        assert!(text.contains("Team totals:"));
        assert!(text.contains("Shortfall vs quota: SB 0, Mag 6"));
        assert!(!text.contains("Pinned role notices"));
    }
}
