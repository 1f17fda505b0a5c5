//! Dashboard display formatting
//!
//! Renders the engine's structured output for the terminal. All currency and
//! percentage formatting lives here; the reports themselves emit numbers.

use crate::reports::{Alert, AlertKind, Dashboard, KpiSet, MonthSummary};

/// Format a month-over-month delta as a signed percentage
fn format_delta(delta: Option<f64>) -> String {
    match delta {
        Some(value) => format!("{:+.1}%", value * 100.0),
        None => "--".to_string(),
    }
}

fn summary_line(label: &str, summary: &MonthSummary, currency: &str) -> String {
    format!(
        "  {:<22} {:>12} {:>12} {:>12}\n",
        format!("{} ({})", label, summary.month),
        summary.income.format_with_symbol(currency),
        summary.expense.format_with_symbol(currency),
        summary.net().format_with_symbol(currency),
    )
}

/// Format the KPI block
pub fn format_kpis(kpis: &KpiSet, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "  {:<22} {:>12} {:>12} {:>12}\n",
        "Month", "Income", "Expenses", "Net"
    ));
    output.push_str(&format!("  {}\n", "-".repeat(62)));
    output.push_str(&summary_line("Previous", &kpis.previous, currency));
    output.push_str(&summary_line("Current", &kpis.current, currency));
    output.push_str(&summary_line("Projected", &kpis.projected, currency));
    output.push('\n');

    output.push_str(&format!(
        "  Income vs previous month:  {}\n",
        format_delta(kpis.income_delta)
    ));
    output.push_str(&format!(
        "  Expense vs previous month: {}\n",
        format_delta(kpis.expense_delta)
    ));
    output.push_str(&format!(
        "  Commitment: {} of income (limit {:.0}%){}\n",
        kpis.ratio,
        kpis.limit * 100.0,
        if kpis.over_limit { "  [OVER LIMIT]" } else { "" }
    ));

    output
}

/// Format the alert list
pub fn format_alerts(alerts: &[Alert], currency: &str) -> String {
    if alerts.is_empty() {
        return "  No alerts. Nothing due in the next few days.\n".to_string();
    }

    let mut output = String::new();
    for alert in alerts {
        let badge = match alert.kind {
            AlertKind::DueSoon { days: 0 } => "DUE TODAY",
            AlertKind::DueSoon { .. } => "DUE SOON",
            AlertKind::DueTomorrow => "TOMORROW",
            AlertKind::CommitmentExceeded => "OVER LIMIT",
        };
        let amount = alert
            .amount
            .map(|a| a.format_with_symbol(currency))
            .unwrap_or_default();
        output.push_str(&format!("  [{:<10}] {} {}\n", badge, alert.message, amount));
    }
    output
}

/// Format the full dashboard view
pub fn format_dashboard(dashboard: &Dashboard, planner_name: &str, currency: &str) -> String {
    let month = dashboard.kpis.current.month;

    let mut output = String::new();
    output.push_str(&format!("Dashboard: {} - {}\n", planner_name, month));
    output.push_str(&format!("{}\n", "=".repeat(66)));
    output.push_str(&format_kpis(&dashboard.kpis, currency));
    output.push('\n');
    output.push_str(&format!(
        "  Accumulated balance:      {:>12}\n",
        dashboard.balance.current.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "  Projected (12 months):    {:>12}\n",
        dashboard.balance.projected.format_with_symbol(currency)
    ));
    output.push('\n');
    output.push_str("Alerts\n");
    output.push_str(&format!("{}\n", "-".repeat(66)));
    output.push_str(&format_alerts(&dashboard.alerts, currency));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ExpenseCategory, ExpenseEntry, IncomeEntry, IncomeKind, Money, Month, Planner,
        PlannerProfile, Recurrence,
    };
    use chrono::NaiveDate;

    fn sample_dashboard() -> Dashboard {
        let mut planner = Planner::new("Household", PlannerProfile::Personal);
        planner
            .add_income(IncomeEntry::new(
                "Salary",
                IncomeKind::Fixed,
                Money::from_cents(400000),
                Month::new(2024, 1),
                Recurrence::Monthly,
            ))
            .unwrap();
        planner
            .add_expense(ExpenseEntry::new(
                "Rent",
                ExpenseCategory::Rent,
                Money::from_cents(220000),
                12,
                Month::new(2024, 1),
                Recurrence::Monthly,
            ))
            .unwrap();
        Dashboard::build(
            &planner,
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            0.5,
        )
        .unwrap()
    }

    #[test]
    fn test_dashboard_output_contains_totals() {
        let output = format_dashboard(&sample_dashboard(), "Household", "$");
        assert!(output.contains("Household"));
        assert!(output.contains("$4000.00"));
        assert!(output.contains("$2200.00"));
        assert!(output.contains("$1800.00"));
        assert!(output.contains("55.0%"));
        assert!(output.contains("OVER LIMIT"));
    }

    #[test]
    fn test_alerts_empty() {
        let output = format_alerts(&[], "$");
        assert!(output.contains("No alerts"));
    }

    #[test]
    fn test_delta_formatting() {
        assert_eq!(format_delta(Some(0.25)), "+25.0%");
        assert_eq!(format_delta(Some(-0.1)), "-10.0%");
        assert_eq!(format_delta(None), "--");
    }
}
