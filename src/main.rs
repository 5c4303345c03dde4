use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use expense_tracker::cli::{
    handle_add_command, handle_list_command, handle_summary_command, AddArgs, Shell, SummaryArgs,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::services::ExpenseService;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense log with monthly and category summaries",
    long_about = "Records expenses in an append-only CSV ledger and summarizes \
                  them by month or by category. Run without a command for the \
                  interactive menu."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, env = "EXPENSE_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List all recorded expenses
    #[command(alias = "ls")]
    List,

    /// Summarize expenses by month or by category
    Summary(SummaryArgs),

    /// Launch the interactive menu
    #[command(alias = "menu")]
    Shell,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = match cli.file {
        Some(ledger) => Storage::with_ledger(paths.clone(), ledger)?,
        None => Storage::new(paths.clone(), &settings)?,
    };

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::List) => handle_list_command(&storage, &settings)?,
        Some(Commands::Summary(args)) => handle_summary_command(&storage, &settings, args)?,
        Some(Commands::Config { save }) => {
            let paths = storage.paths();
            if save {
                settings.save(paths)?;
            }

            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Ledger file:      {}", storage.expenses.path().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            if save {
                println!();
                println!("Settings saved to: {}", paths.settings_file().display());
            }
        }
        Some(Commands::Shell) | None => {
            let service =
                ExpenseService::new(&storage).with_date_format(settings.date_format.clone());
            let stdin = io::stdin();
            let mut shell = Shell::new(
                service,
                settings.currency_symbol.clone(),
                stdin.lock(),
                io::stdout(),
            );
            shell.run()?;
        }
    }

    Ok(())
}
