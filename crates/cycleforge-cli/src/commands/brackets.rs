use cycleforge_core::BRACKETS;

pub fn run() -> anyhow::Result<()> {
    println!("{:<8} {:>8} {:>9} {:>6}  {}", "bracket", "SB req", "Mag req", "kills", "team energy");
    for b in BRACKETS {
        println!(
            "{:<8} {:>8} {:>9} {:>6}  {}",
            b.name, b.sb_required, b.mag_required, b.kills, b.team_energy
        );
    }
    Ok(())
}
