//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::{HorizonError, HorizonResult};
use crate::models::{ExpenseCategory, ExpenseEntry, ExpenseId};
use crate::storage::Storage;

use super::{parse_money_arg, parse_month_arg, parse_recurrence, resolve_planner, store_planner};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense entry
    Add {
        /// Description (e.g. "Rent")
        description: String,
        /// Amount (e.g. "1500" or "1500.00")
        amount: String,
        /// Day of month the expense falls due (1-31)
        #[arg(short, long)]
        day: u32,
        /// Category: financing, electric, water, internet, phone, rent, tax, other
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Start month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        start: Option<String>,
        /// Recurrence: once, monthly, or months (with --months N)
        #[arg(short, long)]
        recurrence: Option<String>,
        /// Number of months for a fixed-term recurrence
        #[arg(short, long)]
        months: Option<u32>,
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },

    /// List expense entries
    List {
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },

    /// Delete an expense entry by ID
    Delete {
        /// Entry ID (short form like "exp-1a2b3c4d" or full UUID)
        id: String,
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> HorizonResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            day,
            category,
            start,
            recurrence,
            months,
            planner,
        } => {
            let mut planner = resolve_planner(storage, settings, planner.as_deref())?;

            let category: ExpenseCategory =
                category.parse().map_err(HorizonError::Validation)?;
            let amount = parse_money_arg(&amount)?;
            let start = parse_month_arg(start.as_deref())?;
            let recurrence = parse_recurrence(recurrence.as_deref(), months)?;

            let entry = ExpenseEntry::new(description, category, amount, day, start, recurrence);
            let summary = format!(
                "{} ({}, due day {}, {} from {})",
                entry.description, entry.category, entry.due_day, entry.recurrence, entry.start
            );
            planner.add_expense(entry)?;
            store_planner(storage, planner)?;

            println!("Added expense: {}", summary);
            Ok(())
        }

        ExpenseCommands::List { planner } => {
            let planner = resolve_planner(storage, settings, planner.as_deref())?;
            print!(
                "{}",
                format_expense_list(&planner.expenses, &planner.currency)
            );
            Ok(())
        }

        ExpenseCommands::Delete { id, planner } => {
            let mut planner = resolve_planner(storage, settings, planner.as_deref())?;

            let target = planner
                .expenses
                .iter()
                .find(|e| e.id.to_string() == id || id.parse::<ExpenseId>().map_or(false, |p| p == e.id))
                .map(|e| e.id);

            let removed = target
                .and_then(|t| planner.remove_expense(t))
                .ok_or_else(|| HorizonError::entry_not_found(&id))?;
            store_planner(storage, planner)?;

            println!("Deleted expense: {}", removed.description);
            Ok(())
        }
    }
}
