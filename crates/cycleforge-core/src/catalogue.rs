//! Role catalogue, bracket recipes, and the eligibility gate.
//!
//! Role costs are fixed constants. Every assignment path in the planner
//! must go through [`feasible`] — nothing else may decide eligibility.

use serde::{Deserialize, Serialize};

use crate::roster::Participant;

/// Energy consumed by one SB cast.
pub const ENERGY_PER_SB_CAST: u32 = 7;
/// Energy consumed by one Mag cast.
pub const ENERGY_PER_MAG_CAST: u32 = 2;
/// Mag casts a round needs regardless of cycle count.
pub const MAG_BASE: u32 = 6;
/// Additional Mag casts needed per cycle.
pub const MAG_PER_CYCLE: u32 = 3;

/// A role identifier from the fixed catalogue.
///
/// `Idle` and `Auto` are the two null roles: `Idle` means "sit out",
/// `Auto` means "let the planner decide".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleId {
    #[serde(rename = "SB-only")]
    SbOnly,
    #[serde(rename = "1 SB + 7 Mag")]
    MagHeavy,
    #[serde(rename = "2 SB + 3 Mag")]
    Balanced,
    #[serde(rename = "Mag-only")]
    MagOnly,
    #[serde(rename = "Idle")]
    Idle,
    #[serde(rename = "Auto")]
    Auto,
}

/// Fixed per-role cast counts and energy cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleStats {
    pub sb_casts: u32,
    pub mag_casts: u32,
    pub energy: u32,
}

/// Every concrete (non-null) role, in catalogue order.
pub const ACTIVE_ROLES: [RoleId; 4] = [
    RoleId::SbOnly,
    RoleId::MagHeavy,
    RoleId::Balanced,
    RoleId::MagOnly,
];

impl RoleId {
    pub fn stats(self) -> RoleStats {
        match self {
            RoleId::SbOnly => RoleStats { sb_casts: 3, mag_casts: 0, energy: 21 },
            RoleId::MagHeavy => RoleStats { sb_casts: 1, mag_casts: 7, energy: 21 },
            RoleId::Balanced => RoleStats { sb_casts: 2, mag_casts: 3, energy: 20 },
            RoleId::MagOnly => RoleStats { sb_casts: 0, mag_casts: 10, energy: 20 },
            RoleId::Idle | RoleId::Auto => RoleStats { sb_casts: 0, mag_casts: 0, energy: 0 },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoleId::SbOnly => "SB-only",
            RoleId::MagHeavy => "1 SB + 7 Mag",
            RoleId::Balanced => "2 SB + 3 Mag",
            RoleId::MagOnly => "Mag-only",
            RoleId::Idle => "Idle",
            RoleId::Auto => "Auto",
        }
    }

    /// Parse a catalogue identifier. Returns `None` for unknown strings;
    /// the pinner turns those into issues rather than errors.
    pub fn parse(s: &str) -> Option<RoleId> {
        match s {
            "SB-only" => Some(RoleId::SbOnly),
            "1 SB + 7 Mag" => Some(RoleId::MagHeavy),
            "2 SB + 3 Mag" => Some(RoleId::Balanced),
            "Mag-only" => Some(RoleId::MagOnly),
            "Idle" => Some(RoleId::Idle),
            "Auto" => Some(RoleId::Auto),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A bracket's perfect-round recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bracket {
    pub name: &'static str,
    pub sb_required: u32,
    pub mag_required: u32,
    pub kills: u32,
    /// Informational team energy budget, displayed as-is.
    pub team_energy: &'static str,
}

/// Recipes in selector order.
pub const BRACKETS: [Bracket; 3] = [
    Bracket { name: "13", sb_required: 20, mag_required: 66, kills: 21, team_energy: "272 / 273" },
    Bracket { name: "19", sb_required: 29, mag_required: 93, kills: 30, team_energy: "389 / 399" },
    Bracket { name: "25", sb_required: 39, mag_required: 123, kills: 40, team_energy: "519 / 525" },
];

/// Look up a bracket recipe by name.
pub fn bracket(name: &str) -> Option<&'static Bracket> {
    BRACKETS.iter().find(|b| b.name == name)
}

/// The single eligibility gate.
///
/// A participant can hold a role only if the role fits inside the energy
/// cap and the participant has a usable level for every attack kind the
/// role casts.
pub fn feasible(p: &Participant, role: RoleId, energy_cap: u32) -> bool {
    let stats = role.stats();
    if stats.energy > energy_cap {
        return false;
    }
    if stats.sb_casts > 0 && p.sb_level <= 0 {
        return false;
    }
    if stats.mag_casts > 0 && p.mag_level <= 0 {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(sb: i32, mag: i32) -> Participant {
        Participant {
            name: "p".to_string(),
            sb_level: sb,
            mag_level: mag,
            desired_role: "Auto".to_string(),
        }
    }

    #[test]
    fn role_labels_round_trip() {
        for role in [
            RoleId::SbOnly,
            RoleId::MagHeavy,
            RoleId::Balanced,
            RoleId::MagOnly,
            RoleId::Idle,
            RoleId::Auto,
        ] {
            assert_eq!(RoleId::parse(role.label()), Some(role));
        }
        assert_eq!(RoleId::parse("Nuker"), None);
    }

    #[test]
    fn bracket_lookup() {
        let b = bracket("13").unwrap();
        assert_eq!(b.sb_required, 20);
        assert_eq!(b.mag_required, 66);
        assert!(bracket("99").is_none());
    }

    #[test]
    fn energy_cap_gates_every_role() {
        let p = player(10, 10);
        // Cap below every active role's cost.
        for role in ACTIVE_ROLES {
            assert!(!feasible(&p, role, 19));
        }
        // Null roles cost nothing.
        assert!(feasible(&p, RoleId::Idle, 0));
    }

    #[test]
    fn levels_gate_cast_kinds() {
        let no_sb = player(0, 10);
        assert!(!feasible(&no_sb, RoleId::SbOnly, 21));
        assert!(!feasible(&no_sb, RoleId::Balanced, 21));
        assert!(feasible(&no_sb, RoleId::MagOnly, 21));

        let no_mag = player(10, 0);
        assert!(feasible(&no_mag, RoleId::SbOnly, 21));
        assert!(!feasible(&no_mag, RoleId::MagHeavy, 21));
        assert!(!feasible(&no_mag, RoleId::MagOnly, 21));
    }

    #[test]
    fn recipe_mag_matches_cycle_arithmetic() {
        // Each recipe's Mag requirement is the base plus the per-cycle
        // rate times the SB requirement.
        for b in BRACKETS {
            assert_eq!(b.mag_required, MAG_BASE + MAG_PER_CYCLE * b.sb_required);
        }
    }
}
