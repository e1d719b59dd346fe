//! Per-cast point tables for the two attack kinds.
//!
//! Values are taken from the in-game reward tables and are not derivable
//! from a formula. Index 0 holds level 1.

/// Points per Mag cast by mag_level (levels 1..=20).
const MAG_POINTS: [u32; 20] = [
    300, 330, 365, 400, 440, 485, 535, 590, 650, 715, 785, 865, 950, 1045, 1150, 1265, 1390, 1530,
    1685, 1855,
];

/// Points per SB cast by sb_level (levels 1..=20).
const SB_POINTS: [u32; 20] = [
    700, 850, 1000, 1150, 1300, 1450, 1600, 1750, 1900, 2050, 2200, 2300, 2500, 2650, 2800, 2950,
    3100, 3250, 3400, 3550,
];

fn lookup(table: &[u32; 20], level: i32) -> u32 {
    if level < 1 || level > 20 {
        // Out-of-range levels contribute nothing rather than erroring.
        return 0;
    }
    table[(level - 1) as usize]
}

/// Points earned per SB cast at the given level. Zero when the level is
/// unset, non-positive, or above the table.
pub fn sb_points(level: i32) -> u32 {
    lookup(&SB_POINTS, level)
}

/// Points earned per Mag cast at the given level.
pub fn mag_points(level: i32) -> u32 {
    lookup(&MAG_POINTS, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabulated_values() {
        assert_eq!(sb_points(1), 700);
        assert_eq!(sb_points(10), 2050);
        assert_eq!(sb_points(20), 3550);
        assert_eq!(mag_points(1), 300);
        assert_eq!(mag_points(13), 950);
        assert_eq!(mag_points(20), 1855);
    }

    #[test]
    fn out_of_range_degrades_to_zero() {
        assert_eq!(sb_points(0), 0);
        assert_eq!(sb_points(-3), 0);
        assert_eq!(sb_points(21), 0);
        assert_eq!(mag_points(0), 0);
        assert_eq!(mag_points(100), 0);
    }
}
