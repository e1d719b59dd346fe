//! Composition-exact allocation.
//!
//! Two separated passes per candidate cycle count: (1) enumerate integer
//! role-count compositions satisfying the cycle arithmetic, using only
//! pool sizes; (2) fill each valid composition with the best-scoring
//! eligible players. Cycle count is the primary objective, total score
//! the tie-break, so the search walks cycle counts downward and stops at
//! the first count with any fillable composition.

use tracing::{debug, trace};

use cycleforge_core::catalogue::{MAG_BASE, MAG_PER_CYCLE};
use cycleforge_core::{Participant, RoleId, feasible};

use crate::quota::QuotaRemainder;
use crate::strategy::{AllocationStrategy, open_slots, role_score};

/// Role counts for one candidate composition.
///
/// Per-unit (SB, Mag) casts: MagHeavy (1,7), Balanced (2,3),
/// SbOnly (3,0), MagOnly (0,10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Composition {
    cycles: u32,
    mag_heavy: u32,
    balanced: u32,
    sb_only: u32,
    mag_only: u32,
}

/// Exact small-integer search over role compositions.
pub struct CompositionOptimizer;

impl AllocationStrategy for CompositionOptimizer {
    fn name(&self) -> &'static str {
        "composition"
    }

    fn allocate(
        &self,
        roster: &[Participant],
        seed: &[Option<RoleId>],
        remaining: QuotaRemainder,
        energy_cap: u32,
    ) -> Vec<Option<RoleId>> {
        let open = open_slots(seed);
        let dual = open.iter().filter(|&&i| is_dual(&roster[i])).count() as u32;
        let sb_only = open.iter().filter(|&&i| is_sb_only(&roster[i])).count() as u32;
        let mag_only = open.iter().filter(|&&i| is_mag_only(&roster[i])).count() as u32;

        for cycles in (0..=remaining.sb).rev() {
            let mag_target = MAG_BASE + MAG_PER_CYCLE * cycles;
            if mag_target > remaining.mag {
                continue;
            }

            let mut best: Option<(u32, Vec<Option<RoleId>>)> = None;
            for comp in enumerate(cycles, mag_target, dual, sb_only, mag_only) {
                let Some((assigned, score)) = fill(&comp, roster, seed, &open, energy_cap) else {
                    continue;
                };
                trace!(?comp, score, "fillable composition");
                if best.as_ref().is_none_or(|(s, _)| score > *s) {
                    best = Some((score, assigned));
                }
            }

            // The first cycle count with any fillable composition wins;
            // lower counts are never considered.
            if let Some((score, assigned)) = best {
                debug!(cycles, score, "composition search settled");
                return assigned;
            }
        }

        debug!("no fillable composition at any cycle count");
        seed.to_vec()
    }
}

fn is_dual(p: &Participant) -> bool {
    p.sb_level > 0 && p.mag_level > 0
}

fn is_sb_only(p: &Participant) -> bool {
    p.sb_level > 0 && p.mag_level <= 0
}

fn is_mag_only(p: &Participant) -> bool {
    p.sb_level <= 0 && p.mag_level > 0
}

fn sb_capable(p: &Participant) -> bool {
    p.sb_level > 0
}

fn mag_capable(p: &Participant) -> bool {
    p.mag_level > 0
}

/// Pass 1: all role-count compositions for `cycles` that satisfy
/// `mag_heavy + 2*balanced + 3*sb_only = cycles` and
/// `7*mag_heavy + 3*balanced + 10*mag_only = mag_target`, bounded by the
/// pool sizes. Pure arithmetic; the fill pass is the final feasibility
/// arbiter.
fn enumerate(
    cycles: u32,
    mag_target: u32,
    dual: u32,
    sb_pool: u32,
    mag_pool: u32,
) -> Vec<Composition> {
    let mut out = Vec::new();
    for mag_heavy in 0..=cycles.min(dual) {
        for balanced in 0..=((cycles - mag_heavy) / 2) {
            if mag_heavy + balanced > dual {
                break;
            }
            let sb_rest = cycles - mag_heavy - 2 * balanced;
            if sb_rest % 3 != 0 {
                continue;
            }
            let sb_only = sb_rest / 3;

            let mag_used = 7 * mag_heavy + 3 * balanced;
            if mag_used > mag_target || (mag_target - mag_used) % 10 != 0 {
                continue;
            }
            let mag_only = (mag_target - mag_used) / 10;

            let dual_left = dual - mag_heavy - balanced;
            if sb_only > sb_pool + dual_left || mag_only > mag_pool + dual_left {
                continue;
            }
            out.push(Composition { cycles, mag_heavy, balanced, sb_only, mag_only });
        }
    }
    out
}

/// Pass 2: deterministic greedy fill. Stages claim players in a fixed
/// order; dual-capable players left unclaimed by the dual stages fall
/// through into the single-kind pools. Any stage that cannot fill its
/// count rejects the composition.
fn fill(
    comp: &Composition,
    roster: &[Participant],
    seed: &[Option<RoleId>],
    open: &[usize],
    energy_cap: u32,
) -> Option<(Vec<Option<RoleId>>, u32)> {
    let mut assigned = seed.to_vec();
    let mut score = 0u32;

    score += claim(&mut assigned, roster, open, energy_cap, RoleId::MagHeavy, comp.mag_heavy, is_dual)?;
    score += claim(&mut assigned, roster, open, energy_cap, RoleId::Balanced, comp.balanced, is_dual)?;
    score += claim(&mut assigned, roster, open, energy_cap, RoleId::SbOnly, comp.sb_only, sb_capable)?;
    score += claim(&mut assigned, roster, open, energy_cap, RoleId::MagOnly, comp.mag_only, mag_capable)?;

    Some((assigned, score))
}

/// Claim `count` slots for `role` from the pool, best score first.
/// Returns the points gained, or `None` if the pool runs short.
fn claim(
    assigned: &mut [Option<RoleId>],
    roster: &[Participant],
    open: &[usize],
    energy_cap: u32,
    role: RoleId,
    count: u32,
    pool: fn(&Participant) -> bool,
) -> Option<u32> {
    if count == 0 {
        return Some(0);
    }
    let mut candidates: Vec<usize> = open
        .iter()
        .copied()
        .filter(|&i| matches!(assigned[i], None | Some(RoleId::Idle)))
        .filter(|&i| pool(&roster[i]) && feasible(&roster[i], role, energy_cap))
        .collect();
    if (candidates.len() as u32) < count {
        return None;
    }
    // Stable sort: ties resolve by roster order.
    candidates.sort_by_key(|&i| std::cmp::Reverse(role_score(&roster[i], role)));
    let mut gained = 0;
    for &i in candidates.iter().take(count as usize) {
        assigned[i] = Some(role);
        gained += role_score(&roster[i], role);
    }
    Some(gained)
}
