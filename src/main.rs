use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::stderr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use budget_alerts::cli::{
    handle_budget_command, handle_category_command, handle_report_command,
    handle_transaction_command, BudgetCommands, CategoryCommands, ReportCommands,
    TransactionCommands,
};
use budget_alerts::config::{paths::AppPaths, settings::Settings};
use budget_alerts::models::OwnerId;
use budget_alerts::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget-alerts",
    version,
    about = "Monthly category budgets with near-limit and exceeded alerts",
    long_about = "budget-alerts records income and expenses, tracks monthly \
                  spending limits per category, and warns when spending \
                  approaches (80%) or reaches a limit."
)]
struct Cli {
    /// Owner whose data to use (e.g., "usr-1" or "1")
    #[arg(long, global = true, env = "BUDGET_ALERTS_OWNER")]
    owner: Option<OwnerId>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Reports and export
    #[command(subcommand)]
    Report(ReportCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Create the data directory and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn log_filter(verbose: u8, settings: &Settings) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = match verbose {
        0 => settings.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    EnvFilter::try_new(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
        EnvFilter::new("warn")
    })
}

fn setup_logging(filter: EnvFilter) {
    // stdout carries command output and exports
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(terminal_log).init();
}

fn require_owner(owner: Option<OwnerId>) -> Result<OwnerId> {
    owner.context(
        "No owner selected. Pass --owner, set BUDGET_ALERTS_OWNER, \
         or run 'budget-alerts init --owner <ID>' to store a default",
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AppPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    setup_logging(log_filter(cli.verbose, &settings));

    let owner = cli.owner.or(settings.default_owner);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing budget-alerts at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            if cli.owner.is_some() {
                settings.default_owner = cli.owner;
            }
            settings.save(&paths)?;

            let mut storage = Storage::new(paths.clone())?;
            storage.load_all()?;
            storage.save_all()?;

            println!("Initialization complete!");
            if let Some(owner) = settings.default_owner {
                println!("Default owner: {}", owner);
            }
            println!();
            println!("Run 'budget-alerts budget add <CATEGORY> <LIMIT>' to create a budget.");
        }
        Some(Commands::Config) => {
            println!("budget-alerts Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Log level:       {}", settings.log_level);
            match settings.default_owner {
                Some(owner) => println!("  Default owner:   {}", owner),
                None => println!("  Default owner:   (none)"),
            }
        }
        Some(command) => {
            let mut storage = Storage::new(paths)?;
            storage.load_all()?;

            match command {
                Commands::Budget(cmd) => {
                    handle_budget_command(&storage, &settings, require_owner(owner)?, cmd)?
                }
                Commands::Transaction(cmd) => {
                    handle_transaction_command(&storage, &settings, require_owner(owner)?, cmd)?
                }
                Commands::Report(cmd) => {
                    handle_report_command(&storage, &settings, require_owner(owner)?, cmd)?
                }
                Commands::Category(cmd) => handle_category_command(&storage, owner, cmd)?,
                Commands::Init | Commands::Config => {}
            }
        }
        None => {
            println!("budget-alerts - monthly budgets with spending alerts");
            println!();
            println!("Run 'budget-alerts --help' for usage information.");
        }
    }

    Ok(())
}
