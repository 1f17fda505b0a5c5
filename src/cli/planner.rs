//! Planner CLI commands

use clap::Subcommand;

use crate::config::{HorizonPaths, Settings};
use crate::error::{HorizonError, HorizonResult};
use crate::models::{Planner, PlannerProfile};
use crate::storage::Storage;

/// Planner subcommands
#[derive(Subcommand)]
pub enum PlannerCommands {
    /// Create a new planner
    Create {
        /// Planner name
        name: String,
        /// Profile: personal or business
        #[arg(short = 'P', long, default_value = "personal")]
        profile: String,
        /// Currency symbol shown in listings (defaults from settings)
        #[arg(short, long)]
        currency: Option<String>,
        /// Commitment limit as a ratio, e.g. 0.8 (defaults from settings)
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// List all planners
    List,

    /// Set the default planner for future commands
    Use {
        /// Planner name
        name: String,
    },

    /// Delete a planner and everything it owns
    Delete {
        /// Planner name
        name: String,
    },
}

/// Handle a planner command
pub fn handle_planner_command(
    storage: &Storage,
    settings: &mut Settings,
    paths: &HorizonPaths,
    cmd: PlannerCommands,
) -> HorizonResult<()> {
    match cmd {
        PlannerCommands::Create {
            name,
            profile,
            currency,
            threshold,
        } => {
            let profile: PlannerProfile = profile
                .parse()
                .map_err(HorizonError::Validation)?;

            let mut planner = Planner::new(name, profile);
            planner.currency = currency.unwrap_or_else(|| settings.currency.clone());
            planner.alert_threshold = threshold.unwrap_or(settings.alert_threshold);

            storage.planners.insert(planner.clone())?;
            storage.planners.save()?;

            // First planner becomes the default automatically
            if settings.default_planner.is_none() {
                settings.default_planner = Some(planner.name.clone());
                settings.save(paths)?;
            }

            println!("Created planner '{}' ({})", planner.name, planner.profile);
            Ok(())
        }

        PlannerCommands::List => {
            let planners = storage.planners.list()?;
            if planners.is_empty() {
                println!("No planners yet. Create one with 'horizon planner create <name>'");
                return Ok(());
            }

            for planner in planners {
                let marker = if settings.default_planner.as_deref() == Some(planner.name.as_str())
                {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} {:<20} {:<9} limit {:.0}%  {} incomes, {} expenses, {} cards",
                    marker,
                    planner.name,
                    planner.profile.to_string(),
                    planner.alert_threshold * 100.0,
                    planner.incomes.len(),
                    planner.expenses.len(),
                    planner.cards.len(),
                );
            }
            Ok(())
        }

        PlannerCommands::Use { name } => {
            let planner = storage
                .planners
                .get_by_name(&name)?
                .ok_or_else(|| HorizonError::planner_not_found(&name))?;

            settings.default_planner = Some(planner.name.clone());
            settings.save(paths)?;
            println!("Default planner is now '{}'", planner.name);
            Ok(())
        }

        PlannerCommands::Delete { name } => {
            let removed = storage
                .planners
                .delete_by_name(&name)?
                .ok_or_else(|| HorizonError::planner_not_found(&name))?;
            storage.planners.save()?;

            if settings.default_planner.as_deref() == Some(removed.name.as_str()) {
                settings.default_planner = None;
                settings.save(paths)?;
            }

            println!("Deleted planner '{}'", removed.name);
            Ok(())
        }
    }
}
