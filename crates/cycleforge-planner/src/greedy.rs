//! Single-pass greedy allocation.
//!
//! Ranks SB-bearing role candidates by value per SB cast (the scarce
//! resource) and fills while both quotas allow, then spends the leftover
//! Mag quota on Mag-only roles. No backtracking; trades optimality for
//! an O(n log n) pass.

use std::cmp::Ordering;

use tracing::debug;

use cycleforge_core::{Participant, RoleId, feasible};

use crate::quota::QuotaRemainder;
use crate::strategy::{AllocationStrategy, open_slots, role_score};

/// Candidate (player, SB-bearing role) pairing for phase A.
struct SbCandidate {
    idx: usize,
    role: RoleId,
    total: u32,
    sb_casts: u32,
    mag_casts: u32,
}

impl SbCandidate {
    /// Orders best-first: value per SB cast, then raw total, then fewer
    /// Mag casts consumed per SB cast. Ratios compare by
    /// cross-multiplication so ties are exact.
    fn rank(&self, other: &Self) -> Ordering {
        let value = (u64::from(other.total) * u64::from(self.sb_casts))
            .cmp(&(u64::from(self.total) * u64::from(other.sb_casts)));
        value
            .then_with(|| other.total.cmp(&self.total))
            .then_with(|| {
                (u64::from(self.mag_casts) * u64::from(other.sb_casts))
                    .cmp(&(u64::from(other.mag_casts) * u64::from(self.sb_casts)))
            })
    }
}

/// The fallback strategy: value-density ranking, single pass.
pub struct GreedyAllocator;

/// Phase-A roles, in candidate generation order.
const SB_ROLES: [RoleId; 3] = [RoleId::SbOnly, RoleId::Balanced, RoleId::MagHeavy];

impl AllocationStrategy for GreedyAllocator {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn allocate(
        &self,
        roster: &[Participant],
        seed: &[Option<RoleId>],
        remaining: QuotaRemainder,
        energy_cap: u32,
    ) -> Vec<Option<RoleId>> {
        let open = open_slots(seed);
        let mut assigned = seed.to_vec();
        let mut remaining = remaining;

        // Phase A: SB-bearing roles by value per SB cast.
        let mut candidates: Vec<SbCandidate> = Vec::new();
        for &idx in &open {
            for role in SB_ROLES {
                if !feasible(&roster[idx], role, energy_cap) {
                    continue;
                }
                let stats = role.stats();
                candidates.push(SbCandidate {
                    idx,
                    role,
                    total: role_score(&roster[idx], role),
                    sb_casts: stats.sb_casts,
                    mag_casts: stats.mag_casts,
                });
            }
        }
        candidates.sort_by(SbCandidate::rank);

        for cand in &candidates {
            if remaining.sb == 0 {
                break;
            }
            if matches!(assigned[cand.idx], Some(r) if r != RoleId::Idle) {
                continue;
            }
            if cand.sb_casts <= remaining.sb && cand.mag_casts <= remaining.mag {
                assigned[cand.idx] = Some(cand.role);
                remaining = QuotaRemainder {
                    sb: remaining.sb - cand.sb_casts,
                    mag: remaining.mag - cand.mag_casts,
                };
            }
        }

        // Phase B: spend leftover Mag quota on Mag-only roles.
        let mag_casts = RoleId::MagOnly.stats().mag_casts;
        let mut mag_candidates: Vec<usize> = open
            .iter()
            .copied()
            .filter(|&i| !matches!(assigned[i], Some(r) if r != RoleId::Idle))
            .filter(|&i| feasible(&roster[i], RoleId::MagOnly, energy_cap))
            .collect();
        mag_candidates.sort_by_key(|&i| {
            std::cmp::Reverse(cycleforge_core::points::mag_points(roster[i].mag_level))
        });

        for idx in mag_candidates {
            if remaining.mag < mag_casts {
                break;
            }
            assigned[idx] = Some(RoleId::MagOnly);
            remaining = QuotaRemainder { sb: remaining.sb, mag: remaining.mag - mag_casts };
        }

        debug!(
            leftover_sb = remaining.sb,
            leftover_mag = remaining.mag,
            "greedy allocation finished"
        );
        assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, sb: i32, mag: i32) -> Participant {
        Participant {
            name: name.to_string(),
            sb_level: sb,
            mag_level: mag,
            desired_role: "Auto".to_string(),
        }
    }

    fn run(
        roster: &[Participant],
        remaining: QuotaRemainder,
        energy_cap: u32,
    ) -> Vec<Option<RoleId>> {
        let seed = vec![None; roster.len()];
        GreedyAllocator.allocate(roster, &seed, remaining, energy_cap)
    }

    #[test]
    fn respects_both_quotas() {
        let roster: Vec<_> = (0..10).map(|i| player(&format!("p{i}"), 10, 10)).collect();
        let remaining = QuotaRemainder { sb: 5, mag: 21 };
        let assigned = run(&roster, remaining, 21);

        let (sb, mag) = assigned.iter().flatten().fold((0u32, 0u32), |(a, b), r| {
            let s = r.stats();
            (a + s.sb_casts, b + s.mag_casts)
        });
        assert!(sb <= 5);
        assert!(mag <= 21);
        assert!(sb > 0, "some SB quota should be spent");
    }

    #[test]
    fn sb_only_player_gets_sb_only_role() {
        let roster = vec![player("sniper", 15, 0)];
        let remaining = QuotaRemainder { sb: 3, mag: 0 };
        let assigned = run(&roster, remaining, 21);
        assert_eq!(assigned[0], Some(RoleId::SbOnly));
    }

    #[test]
    fn leftover_mag_quota_fills_mag_only() {
        let roster = vec![player("caster", 0, 12), player("idler", 0, 0)];
        let remaining = QuotaRemainder { sb: 0, mag: 16 };
        let assigned = run(&roster, remaining, 21);

        assert_eq!(assigned[0], Some(RoleId::MagOnly));
        assert_eq!(assigned[1], None);
    }

    #[test]
    fn mag_quota_below_role_size_assigns_nothing() {
        let roster = vec![player("caster", 0, 12)];
        let remaining = QuotaRemainder { sb: 0, mag: 6 };
        let assigned = run(&roster, remaining, 21);
        assert_eq!(assigned[0], None);
    }

    #[test]
    fn prefers_higher_value_per_sb_cast() {
        // The level-20 dual's MagHeavy role packs the most value into a
        // single SB cast; with only one SB cast of quota and ample Mag,
        // that candidate must win it.
        let roster = vec![player("strong", 20, 20), player("mid", 10, 10)];
        let remaining = QuotaRemainder { sb: 1, mag: 20 };
        let assigned = run(&roster, remaining, 21);

        assert_eq!(assigned[0], Some(RoleId::MagHeavy));
    }

    #[test]
    fn pinned_players_are_skipped() {
        let roster = vec![player("pinned", 20, 20), player("free", 10, 10)];
        let seed = vec![Some(RoleId::SbOnly), None];
        let remaining = QuotaRemainder { sb: 3, mag: 10 };
        let assigned = GreedyAllocator.allocate(&roster, &seed, remaining, 21);

        assert_eq!(assigned[0], Some(RoleId::SbOnly));
        // The free player takes an SB-bearing role within quota.
        assert!(matches!(assigned[1], Some(r) if r != RoleId::Idle));
    }

    #[test]
    fn mag_ranking_orders_by_level() {
        let roster = vec![
            player("low", 0, 3),
            player("high", 0, 18),
            player("mid", 0, 9),
        ];
        // Quota for exactly two Mag-only roles.
        let remaining = QuotaRemainder { sb: 0, mag: 20 };
        let assigned = run(&roster, remaining, 21);

        assert_eq!(assigned[1], Some(RoleId::MagOnly));
        assert_eq!(assigned[2], Some(RoleId::MagOnly));
        assert_eq!(assigned[0], None);
    }
}
