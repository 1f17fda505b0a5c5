//! Income CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_income_list;
use crate::error::{HorizonError, HorizonResult};
use crate::models::{IncomeEntry, IncomeId, IncomeKind};
use crate::storage::Storage;

use super::{parse_money_arg, parse_month_arg, parse_recurrence, resolve_planner, store_planner};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add an income entry
    Add {
        /// Description (e.g. "Salary")
        description: String,
        /// Amount (e.g. "5000" or "5000.00")
        amount: String,
        /// Income type: fixed, commission, bonus, extra, other
        #[arg(short, long, default_value = "fixed")]
        kind: String,
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

    /// List income entries
    List {
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },

    /// Delete an income entry by ID
    Delete {
        /// Entry ID (short form like "inc-1a2b3c4d" or full UUID)
        id: String,
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> HorizonResult<()> {
    match cmd {
        IncomeCommands::Add {
            description,
            amount,
            kind,
            start,
            recurrence,
            months,
            planner,
        } => {
            let mut planner = resolve_planner(storage, settings, planner.as_deref())?;

            let kind: IncomeKind = kind.parse().map_err(HorizonError::Validation)?;
            let amount = parse_money_arg(&amount)?;
            let start = parse_month_arg(start.as_deref())?;
            let recurrence = parse_recurrence(recurrence.as_deref(), months)?;

            let entry = IncomeEntry::new(description, kind, amount, start, recurrence);
            let summary = format!(
                "{} ({}, {} from {})",
                entry.description, entry.kind, entry.recurrence, entry.start
            );
            planner.add_income(entry)?;
            store_planner(storage, planner)?;

            println!("Added income: {}", summary);
            Ok(())
        }

        IncomeCommands::List { planner } => {
            let planner = resolve_planner(storage, settings, planner.as_deref())?;
            print!(
                "{}",
                format_income_list(&planner.incomes, &planner.currency)
            );
            Ok(())
        }

        IncomeCommands::Delete { id, planner } => {
            let mut planner = resolve_planner(storage, settings, planner.as_deref())?;

            let target = planner
                .incomes
                .iter()
                .find(|e| e.id.to_string() == id || id.parse::<IncomeId>().map_or(false, |p| p == e.id))
                .map(|e| e.id);

            let removed = target
                .and_then(|t| planner.remove_income(t))
                .ok_or_else(|| HorizonError::entry_not_found(&id))?;
            store_planner(storage, planner)?;

            println!("Deleted income: {}", removed.description);
            Ok(())
        }
    }
}
