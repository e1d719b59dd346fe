use std::path::Path;

use cycleforge_core::{ConfigError, PlanConfig, Roster, Strategy};
use cycleforge_planner::report;

pub fn run(
    roster_path: &str,
    bracket: &str,
    energy_cap: u32,
    strategy: &str,
    format: &str,
    out: Option<&str>,
) -> anyhow::Result<()> {
    let strategy = Strategy::parse(strategy)
        .ok_or_else(|| ConfigError::UnknownStrategy(strategy.to_string()))?;
    let config = PlanConfig {
        bracket: bracket.to_string(),
        energy_cap,
        strategy,
    };

    let roster = Roster::from_file(Path::new(roster_path))?;
    let plan = cycleforge_planner::plan(&roster, &config)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        _ => {
            println!("{}", report::format_plan(&plan));
        }
    }

    if let Some(out) = out {
        std::fs::write(out, plan.to_csv())?;
        println!("✓ Wrote {out}");
    }

    Ok(())
}
