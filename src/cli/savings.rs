//! Savings movement CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_adjustment_list;
use crate::error::{HorizonError, HorizonResult};
use crate::models::{AdjustmentId, AdjustmentKind, SavingsAdjustment};
use crate::storage::Storage;

use super::{parse_date_arg, parse_money_arg, resolve_planner, store_planner};

/// Savings subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Record a savings movement
    Add {
        /// Description (e.g. "Emergency fund")
        description: String,
        /// Amount (always positive; the kind carries the sign)
        amount: String,
        /// Kind: deposit or withdrawal
        #[arg(short, long, default_value = "deposit")]
        kind: String,
        /// Movement date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },

    /// List savings movements
    List {
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },

    /// Delete a savings movement by ID
    Delete {
        /// Movement ID (short form like "adj-1a2b3c4d" or full UUID)
        id: String,
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },
}

/// Handle a savings command
pub fn handle_savings_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SavingsCommands,
) -> HorizonResult<()> {
    match cmd {
        SavingsCommands::Add {
            description,
            amount,
            kind,
            date,
            planner,
        } => {
            let mut planner = resolve_planner(storage, settings, planner.as_deref())?;

            let kind: AdjustmentKind = kind.parse().map_err(HorizonError::Validation)?;
            let amount = parse_money_arg(&amount)?;
            let date = parse_date_arg(date.as_deref())?;

            let adjustment = SavingsAdjustment::new(description, amount, date, kind);
            let summary = format!("{} ({} on {})", adjustment.description, adjustment.kind, date);
            planner.add_adjustment(adjustment)?;
            store_planner(storage, planner)?;

            println!("Recorded movement: {}", summary);
            Ok(())
        }

        SavingsCommands::List { planner } => {
            let planner = resolve_planner(storage, settings, planner.as_deref())?;
            print!(
                "{}",
                format_adjustment_list(&planner.adjustments, &planner.currency)
            );
            Ok(())
        }

        SavingsCommands::Delete { id, planner } => {
            let mut planner = resolve_planner(storage, settings, planner.as_deref())?;

            let target = planner
                .adjustments
                .iter()
                .find(|a| a.id.to_string() == id || id.parse::<AdjustmentId>().map_or(false, |p| p == a.id))
                .map(|a| a.id);

            let removed = target
                .and_then(|t| planner.remove_adjustment(t))
                .ok_or_else(|| HorizonError::entry_not_found(&id))?;
            store_planner(storage, planner)?;

            println!("Deleted movement: {}", removed.description);
            Ok(())
        }
    }
}
