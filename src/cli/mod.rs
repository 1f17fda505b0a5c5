//! CLI command handlers
//!
//! Bridges clap argument parsing with the models, storage, and reports. The
//! handlers are the "caller" side of the engine: they resolve the planner,
//! supply the reference date, and pass the planner's configured commitment
//! limit through explicitly.

pub mod card;
pub mod dashboard;
pub mod expense;
pub mod income;
pub mod planner;
pub mod savings;

pub use card::{handle_bill_command, handle_card_command, BillCommands, CardCommands};
pub use dashboard::{handle_alerts_command, handle_dashboard_command};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use planner::{handle_planner_command, PlannerCommands};
pub use savings::{handle_savings_command, SavingsCommands};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::error::{HorizonError, HorizonResult};
use crate::models::{Money, Month, Planner, Recurrence};
use crate::storage::Storage;

/// Resolve the planner a command targets: the explicit `--planner` argument,
/// or the default planner from settings
pub(crate) fn resolve_planner(
    storage: &Storage,
    settings: &Settings,
    name: Option<&str>,
) -> HorizonResult<Planner> {
    let name = name
        .map(str::to_string)
        .or_else(|| settings.default_planner.clone())
        .ok_or_else(|| {
            HorizonError::Config(
                "No planner selected. Pass --planner or set a default with 'planner use'".into(),
            )
        })?;

    storage
        .planners
        .get_by_name(&name)?
        .ok_or_else(|| HorizonError::planner_not_found(name))
}

/// Write an updated planner back and persist the snapshot
pub(crate) fn store_planner(storage: &Storage, planner: Planner) -> HorizonResult<()> {
    storage.planners.upsert(planner)?;
    storage.planners.save()
}

/// Parse a money amount argument
pub(crate) fn parse_money_arg(s: &str) -> HorizonResult<Money> {
    Money::parse(s).map_err(|e| HorizonError::Validation(e.to_string()))
}

/// Parse a "YYYY-MM" month argument, defaulting to the current month
pub(crate) fn parse_month_arg(s: Option<&str>) -> HorizonResult<Month> {
    match s {
        Some(s) => Month::parse(s).map_err(|e| HorizonError::Validation(e.to_string())),
        None => Ok(Month::from_date(chrono::Local::now().date_naive())),
    }
}

/// Parse a "YYYY-MM-DD" date argument, defaulting to today
pub(crate) fn parse_date_arg(s: Option<&str>) -> HorizonResult<NaiveDate> {
    match s {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| HorizonError::Validation(format!("Invalid date (want YYYY-MM-DD): {}", s))),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Build a recurrence rule from `--recurrence` and `--months`
///
/// `--months N` selects a fixed-term rule; otherwise `--recurrence` picks
/// "once" or "monthly" (the default).
pub(crate) fn parse_recurrence(
    recurrence: Option<&str>,
    months: Option<u32>,
) -> HorizonResult<Recurrence> {
    if let Some(count) = months {
        if !matches!(recurrence, None | Some("months")) {
            return Err(HorizonError::Validation(
                "--months only applies to a fixed-term recurrence".into(),
            ));
        }
        return Ok(Recurrence::ForMonths(count));
    }

    match recurrence.unwrap_or("monthly") {
        "once" => Ok(Recurrence::Once),
        "monthly" => Ok(Recurrence::Monthly),
        "months" => Err(HorizonError::Validation(
            "A fixed-term recurrence needs --months N".into(),
        )),
        other => Err(HorizonError::Validation(format!(
            "Unknown recurrence: {} (want once, monthly, or months)",
            other
        ))),
    }
}
