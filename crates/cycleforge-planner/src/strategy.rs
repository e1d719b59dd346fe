//! The allocation strategy seam.
//!
//! Both strategies share the quota estimator, the pinner, and the
//! aggregator; only the slot-filling logic differs. The choice is
//! external configuration, never an implicit fallback.

use cycleforge_core::{Participant, RoleId, Strategy};

use crate::compose::CompositionOptimizer;
use crate::greedy::GreedyAllocator;
use crate::quota::QuotaRemainder;

/// Fills the open roster slots after pinning.
///
/// `seed` is the pinning result: `Some(role)` slots with a non-Idle role
/// are untouchable; `None` and `Some(Idle)` slots are candidates. The
/// returned vector extends the seed and has one entry per roster index.
pub trait AllocationStrategy {
    fn name(&self) -> &'static str;

    fn allocate(
        &self,
        roster: &[Participant],
        seed: &[Option<RoleId>],
        remaining: QuotaRemainder,
        energy_cap: u32,
    ) -> Vec<Option<RoleId>>;
}

static COMPOSITION: CompositionOptimizer = CompositionOptimizer;
static GREEDY: GreedyAllocator = GreedyAllocator;

/// Resolve the configured strategy to its implementation.
pub fn for_config(strategy: Strategy) -> &'static dyn AllocationStrategy {
    match strategy {
        Strategy::Composition => &COMPOSITION,
        Strategy::Greedy => &GREEDY,
    }
}

/// Roster indices still open to automatic allocation.
pub(crate) fn open_slots(seed: &[Option<RoleId>]) -> Vec<usize> {
    seed.iter()
        .enumerate()
        .filter(|(_, s)| matches!(s, None | Some(RoleId::Idle)))
        .map(|(i, _)| i)
        .collect()
}

/// Total points a participant would score in the given role.
pub(crate) fn role_score(p: &Participant, role: RoleId) -> u32 {
    let stats = role.stats();
    cycleforge_core::points::sb_points(p.sb_level) * stats.sb_casts
        + cycleforge_core::points::mag_points(p.mag_level) * stats.mag_casts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_slots_skip_pinned_roles_but_not_forced_idle() {
        let seed = vec![
            None,
            Some(RoleId::SbOnly),
            Some(RoleId::Idle),
            Some(RoleId::MagOnly),
        ];
        assert_eq!(open_slots(&seed), vec![0, 2]);
    }

    #[test]
    fn role_score_combines_both_kinds() {
        let p = Participant {
            name: "p".to_string(),
            sb_level: 10,
            mag_level: 10,
            desired_role: "Auto".to_string(),
        };
        // 1 SB + 7 Mag at level 10: 2050 + 7 * 715.
        assert_eq!(role_score(&p, RoleId::MagHeavy), 2050 + 7 * 715);
        assert_eq!(role_score(&p, RoleId::Idle), 0);
    }
}
