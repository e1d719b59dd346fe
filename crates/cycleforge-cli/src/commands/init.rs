use cycleforge_core::Roster;

pub fn run(path: &str, players: usize) -> anyhow::Result<()> {
    let roster = Roster::scaffold(players);
    std::fs::write(path, roster.to_toml_string()?)?;
    println!("✓ Generated {path}");
    Ok(())
}
