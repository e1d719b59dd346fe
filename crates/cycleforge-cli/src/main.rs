use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "cycleforge",
    about = "CycleForge — round cycle planner",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign roles to a roster and print the plan.
    ///
    /// Declared roles are pinned first (conflicts become notices), then
    /// the selected strategy fills the remaining slots within the
    /// derived quota.
    Plan {
        /// Roster file (TOML, [[players]] table)
        #[arg(short, long)]
        roster: String,
        /// Bracket recipe: 13, 19, or 25
        #[arg(short, long, default_value = "13")]
        bracket: String,
        /// Energy cap per player
        #[arg(short, long, default_value_t = 21)]
        energy_cap: u32,
        /// Allocation strategy: composition or greedy
        #[arg(short, long, default_value = "composition")]
        strategy: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Write the plan as CSV to this path
        #[arg(short, long)]
        out: Option<String>,
    },
    /// List the bracket recipes
    Brackets,
    /// Write a roster scaffold to fill in
    Init {
        /// Output path for the roster file
        #[arg(short, long, default_value = "roster.toml")]
        path: String,
        /// Number of empty roster rows
        #[arg(short = 'n', long, default_value_t = 10)]
        players: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cycleforge=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { roster, bracket, energy_cap, strategy, format, out } => {
            commands::plan::run(&roster, &bracket, energy_cap, &strategy, &format, out.as_deref())
        }
        Commands::Brackets => commands::brackets::run(),
        Commands::Init { path, players } => commands::init::run(&path, players),
    }
}
