//! Dashboard and alert CLI commands

use crate::config::Settings;
use crate::display::{format_alerts, format_dashboard};
use crate::error::HorizonResult;
use crate::reports::{scan_alerts, AlertKind, Dashboard};
use crate::storage::Storage;

use super::{parse_date_arg, resolve_planner};

/// Show the full dashboard for a planner
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    planner: Option<String>,
    date: Option<String>,
) -> HorizonResult<()> {
    let planner = resolve_planner(storage, settings, planner.as_deref())?;
    let today = parse_date_arg(date.as_deref())?;

    let dashboard = Dashboard::build(&planner, today, planner.alert_threshold)?;
    print!(
        "{}",
        format_dashboard(&dashboard, &planner.name, &planner.currency)
    );
    Ok(())
}

/// Show the detailed alert view for a planner
pub fn handle_alerts_command(
    storage: &Storage,
    settings: &Settings,
    planner: Option<String>,
    date: Option<String>,
) -> HorizonResult<()> {
    let planner = resolve_planner(storage, settings, planner.as_deref())?;
    let today = parse_date_arg(date.as_deref())?;

    let alerts = scan_alerts(&planner, today, planner.alert_threshold)?;

    let due_soon: Vec<_> = alerts
        .iter()
        .filter(|a| matches!(a.kind, AlertKind::DueSoon { .. }))
        .cloned()
        .collect();
    let due_tomorrow: Vec<_> = alerts
        .iter()
        .filter(|a| a.kind == AlertKind::DueTomorrow)
        .cloned()
        .collect();
    let breaches: Vec<_> = alerts
        .iter()
        .filter(|a| a.kind == AlertKind::CommitmentExceeded)
        .cloned()
        .collect();

    println!("Due in the next {} days", crate::reports::DUE_WINDOW_DAYS);
    print!("{}", format_alerts(&due_soon, &planner.currency));

    println!("\nDue tomorrow");
    if due_tomorrow.is_empty() {
        println!("  Nothing due tomorrow.");
    } else {
        print!("{}", format_alerts(&due_tomorrow, &planner.currency));
    }

    if !breaches.is_empty() {
        println!();
        print!("{}", format_alerts(&breaches, &planner.currency));
    }

    Ok(())
}
