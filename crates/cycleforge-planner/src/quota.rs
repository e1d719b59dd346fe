//! Feasible quota derivation from roster capacity.
//!
//! The cycle is the scarce resource: each cycle consumes one SB cast, and
//! Mag output scales affinely with cycles once the fixed baseline is met.
//! The derived quota never exceeds the bracket's raw requirement.

use serde::Serialize;

use cycleforge_core::Participant;
use cycleforge_core::catalogue::{
    Bracket, ENERGY_PER_MAG_CAST, ENERGY_PER_SB_CAST, MAG_BASE, MAG_PER_CYCLE,
};

/// The team-wide output target derived for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaEstimate {
    /// Total SB casts the roster could make under the energy cap.
    pub sb_capacity: u32,
    /// Total Mag casts the roster could make under the energy cap.
    pub mag_capacity: u32,
    /// Cycles the team should attempt.
    pub cycles: u32,
    /// SB casts to produce (equals `cycles`).
    pub sb_required: u32,
    /// Mag casts to produce (`MAG_BASE + MAG_PER_CYCLE * cycles`).
    pub mag_required: u32,
}

impl QuotaEstimate {
    pub fn remainder(&self) -> QuotaRemainder {
        QuotaRemainder {
            sb: self.sb_required,
            mag: self.mag_required,
        }
    }
}

/// Quota still unconsumed after a stage. Threaded between stages as an
/// immutable value; each stage returns an updated copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuotaRemainder {
    pub sb: u32,
    pub mag: u32,
}

/// Derive the feasible quota for this roster, energy cap, and recipe.
pub fn estimate(roster: &[Participant], energy_cap: u32, bracket: &Bracket) -> QuotaEstimate {
    let sb_capacity: u32 = roster
        .iter()
        .filter(|p| p.sb_level > 0)
        .map(|_| energy_cap / ENERGY_PER_SB_CAST)
        .sum();
    let mag_capacity: u32 = roster
        .iter()
        .filter(|p| p.mag_level > 0)
        .map(|_| energy_cap / ENERGY_PER_MAG_CAST)
        .sum();

    // Cycles are bounded by the recipe target, the SB capacity, and how
    // many cycles the Mag capacity can sustain past the baseline.
    let mag_cycles = mag_capacity.saturating_sub(MAG_BASE) / MAG_PER_CYCLE;
    let cycles = bracket.sb_required.min(sb_capacity).min(mag_cycles);

    QuotaEstimate {
        sb_capacity,
        mag_capacity,
        cycles,
        sb_required: cycles,
        mag_required: MAG_BASE + MAG_PER_CYCLE * cycles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cycleforge_core::bracket;

    fn player(sb: i32, mag: i32) -> Participant {
        Participant {
            name: "p".to_string(),
            sb_level: sb,
            mag_level: mag,
            desired_role: "Auto".to_string(),
        }
    }

    #[test]
    fn sb_only_roster_yields_zero_cycles() {
        // Three SB-capable players, no Mag capability at all.
        let roster = vec![player(5, 0), player(5, 0), player(5, 0)];
        let q = estimate(&roster, 21, bracket("13").unwrap());

        assert_eq!(q.sb_capacity, 9); // 3 * (21 / 7)
        assert_eq!(q.mag_capacity, 0);
        assert_eq!(q.cycles, 0);
        assert_eq!(q.sb_required, 0);
        assert_eq!(q.mag_required, 6); // baseline even at zero cycles
    }

    #[test]
    fn quota_never_exceeds_recipe() {
        // A huge roster: the recipe target is the binding constraint.
        let roster: Vec<_> = (0..50).map(|_| player(10, 10)).collect();
        let b = bracket("13").unwrap();
        let q = estimate(&roster, 21, b);

        assert_eq!(q.cycles, b.sb_required);
        assert_eq!(q.sb_required, 20);
        assert_eq!(q.mag_required, 66);
        assert!(q.mag_required <= b.mag_required);
    }

    #[test]
    fn mag_required_tracks_cycles_exactly() {
        for n in [1, 3, 7, 20] {
            let roster: Vec<_> = (0..n).map(|_| player(10, 10)).collect();
            let q = estimate(&roster, 21, bracket("25").unwrap());
            assert_eq!(q.mag_required, MAG_BASE + MAG_PER_CYCLE * q.cycles);
            assert!(q.sb_required <= 39);
        }
    }

    #[test]
    fn thin_mag_capacity_limits_cycles() {
        // One dual player: sb_capacity = 3, mag_capacity = 10,
        // mag side allows (10 - 6) / 3 = 1 cycle.
        let roster = vec![player(10, 10)];
        let q = estimate(&roster, 21, bracket("13").unwrap());
        assert_eq!(q.cycles, 1);
    }
}
