use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use horizon::cli::{
    handle_alerts_command, handle_bill_command, handle_card_command, handle_dashboard_command,
    handle_expense_command, handle_income_command, handle_planner_command, handle_savings_command,
};
use horizon::config::{HorizonPaths, Settings};
use horizon::storage::Storage;

#[derive(Parser)]
#[command(
    name = "horizon",
    version,
    about = "Terminal-based monthly finance planner",
    long_about = "Horizon tracks recurring incomes, expense obligations, and \
                  credit-card bills per planner, and derives monthly KPIs with \
                  forward-looking due-date alerts from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory and settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Planner management commands
    #[command(subcommand)]
    Planner(horizon::cli::PlannerCommands),

    /// Income commands
    #[command(subcommand)]
    Income(horizon::cli::IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(horizon::cli::ExpenseCommands),

    /// Credit card commands
    #[command(subcommand)]
    Card(horizon::cli::CardCommands),

    /// Card bill commands
    #[command(subcommand)]
    Bill(horizon::cli::BillCommands),

    /// Savings movement commands
    #[command(subcommand)]
    Savings(horizon::cli::SavingsCommands),

    /// Show the dashboard (KPIs, balances, and alerts)
    Dashboard {
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the detailed alert view
    Alerts {
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = HorizonPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Commands::Init => {
            paths.ensure_directories()?;
            settings.save(&paths)?;
            storage.save_all()?;
            println!("Initialized Horizon at {}", paths.base_dir().display());
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Planners file:  {}", paths.planners_file().display());
            println!(
                "Default planner: {}",
                settings.default_planner.as_deref().unwrap_or("(none)")
            );
            println!("Default currency: {}", settings.currency);
            println!(
                "Default commitment limit: {:.0}%",
                settings.alert_threshold * 100.0
            );
        }
        Commands::Planner(cmd) => handle_planner_command(&storage, &mut settings, &paths, cmd)?,
        Commands::Income(cmd) => handle_income_command(&storage, &settings, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&storage, &settings, cmd)?,
        Commands::Card(cmd) => handle_card_command(&storage, &settings, cmd)?,
        Commands::Bill(cmd) => handle_bill_command(&storage, &settings, cmd)?,
        Commands::Savings(cmd) => handle_savings_command(&storage, &settings, cmd)?,
        Commands::Dashboard { planner, date } => {
            handle_dashboard_command(&storage, &settings, planner, date)?
        }
        Commands::Alerts { planner, date } => {
            handle_alerts_command(&storage, &settings, planner, date)?
        }
    }

    Ok(())
}
