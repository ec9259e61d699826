use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{handle_budget_command, handle_profile_command};
use budget_tracker::config::paths::{TrackerPaths, DATA_DIR_ENV};
use budget_tracker::models::Money;
use budget_tracker::services::start_session;
use budget_tracker::storage::ProfileStore;

#[derive(Parser)]
#[command(
    name = "budget-tracker",
    version,
    about = "Income-driven category budgeting with persistent profiles",
    long_about = "budget-tracker splits your monthly income across spending categories \
                  and keeps each budget as a named profile you can edit and export."
)]
struct Cli {
    /// Directory holding budget-tracker data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile management commands
    #[command(subcommand)]
    Profile(budget_tracker::cli::ProfileCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(budget_tracker::cli::BudgetCommands),

    /// Initialize the data directory and the default profile
    Init,

    /// Show current configuration and paths
    Config {
        /// Income used when the first profile is created
        #[arg(long)]
        default_income: Option<String>,
    },
}

fn main() -> Result<()> {
    budget_tracker::init_tracing();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("budget-tracker - Income-driven category budgeting");
        println!();
        println!("Run 'budget-tracker --help' for usage information.");
        println!("Run 'budget-tracker init' to create your first profile.");
        return Ok(());
    };

    // Initialize paths and the profile store
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let fresh = !paths.is_initialized();
    let mut store = ProfileStore::open(paths.clone())?;

    match command {
        Commands::Profile(cmd) => {
            start_session(&mut store)?;
            handle_profile_command(&mut store, cmd)?;
        }
        Commands::Budget(cmd) => {
            start_session(&mut store)?;
            handle_budget_command(&mut store, cmd)?;
        }
        Commands::Init => {
            start_session(&mut store)?;
            let profile = store.get_active_profile()?;
            if fresh {
                println!("Initialized budget-tracker at: {}", paths.data_dir().display());
            } else {
                println!("budget-tracker already initialized at: {}", paths.data_dir().display());
            }
            println!();
            println!("Active profile: {}", profile);
            println!("  Income: {}", profile.income);
            println!("  Rows:   {}", profile.budget.len());
            println!();
            println!("Run 'budget-tracker budget show' to see the budget.");
        }
        // No session here: a first profile created later picks up these settings
        Commands::Config { default_income } => {
            if let Some(amount) = default_income {
                let income = Money::parse(&amount)
                    .map_err(|e| anyhow::anyhow!("Invalid amount: {}", e))?;
                store.configuration_mut().set_default_income(income)?;
            }
            print_configuration(&store, &paths);
        }
    }

    Ok(())
}

fn print_configuration(store: &ProfileStore, paths: &TrackerPaths) {
    let config = store.configuration();
    println!("budget-tracker Configuration");
    println!("============================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Config file:      {}", paths.config_file().display());
    println!();
    println!("Settings:");
    println!("  Schema version: {}", config.schema_version);
    println!("  Default income: {}", config.default_income);
    match config.get_default_profile() {
        Some(id) => println!("  Default profile: {}", id),
        None => println!("  Default profile: (none)"),
    }
}
