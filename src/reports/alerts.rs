//! Due-date and commitment alerts
//!
//! Scans a planner's obligations for a reference date and emits, in fixed
//! order: due-soon alerts for the next five days, a higher-urgency duplicate
//! list for obligations due tomorrow, and a single commitment-breach alert
//! when the month's expense ratio exceeds the configured limit.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HorizonError, HorizonResult};
use crate::models::{Money, Month, Planner};

use super::kpi::KpiSet;
use super::summary::EntryRef;

/// Inclusive look-ahead window for due-soon alerts, in days
pub const DUE_WINDOW_DAYS: i64 = 5;

/// What an alert is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum AlertKind {
    /// Obligation due within the look-ahead window (0 = today)
    DueSoon { days: i64 },
    /// Obligation due exactly tomorrow; also present in the due-soon list
    DueTomorrow,
    /// The month's expense/income ratio exceeded the configured limit
    CommitmentExceeded,
}

/// A single recomputed-on-demand alert
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    /// Human-readable context; amounts stay structured in `amount`
    pub message: String,
    /// The obligation behind the alert; `None` for commitment alerts
    pub entry: Option<EntryRef>,
    pub amount: Option<Money>,
    pub due_date: Option<NaiveDate>,
}

/// An obligation falling due inside the scan window
struct DueObligation {
    entry: EntryRef,
    description: String,
    amount: Money,
    due: NaiveDate,
}

/// Scan a planner for alerts as of `today`
///
/// Obligations are gated on their recurrence being active in the month the
/// due date falls in; paid card bills are skipped. The commitment check uses
/// the month `today` falls in.
pub fn scan_alerts(planner: &Planner, today: NaiveDate, limit: f64) -> HorizonResult<Vec<Alert>> {
    let window_end = today + Duration::days(DUE_WINDOW_DAYS);

    // The window may straddle a month boundary
    let mut months = vec![Month::from_date(today)];
    let end_month = Month::from_date(window_end);
    if end_month != months[0] {
        months.push(end_month);
    }

    let mut due = Vec::new();

    for entry in &planner.expenses {
        entry
            .validate()
            .map_err(|e| HorizonError::Validation(format!("{}: {}", entry.description, e)))?;
        for month in &months {
            if let Some(date) = entry.due_date_in(*month) {
                if date >= today && date <= window_end {
                    due.push(DueObligation {
                        entry: EntryRef::Expense(entry.id),
                        description: entry.description.clone(),
                        amount: entry.amount,
                        due: date,
                    });
                }
            }
        }
    }

    for bill in &planner.bills {
        bill.validate()
            .map_err(|e| HorizonError::Validation(format!("bill {}: {}", bill.id, e)))?;
        if bill.paid {
            continue;
        }
        if bill.due_date >= today && bill.due_date <= window_end {
            let description = planner
                .card(bill.card_id)
                .map(|c| c.display_name())
                .unwrap_or_else(|| "Card bill".to_string());
            due.push(DueObligation {
                entry: EntryRef::Bill(bill.id),
                description,
                amount: bill.amount,
                due: bill.due_date,
            });
        }
    }

    due.sort_by(|a, b| a.due.cmp(&b.due).then_with(|| a.description.cmp(&b.description)));

    let mut alerts = Vec::new();

    for obligation in &due {
        let days = (obligation.due - today).num_days();
        let when = match days {
            0 => "today".to_string(),
            1 => "tomorrow".to_string(),
            n => format!("in {} days", n),
        };
        alerts.push(Alert {
            kind: AlertKind::DueSoon { days },
            message: format!("{} is due {} ({})", obligation.description, when, obligation.due),
            entry: Some(obligation.entry),
            amount: Some(obligation.amount),
            due_date: Some(obligation.due),
        });
    }

    // Obligations due tomorrow appear a second time under the higher-urgency
    // kind; the two lists feed different UI badges
    let tomorrow = today + Duration::days(1);
    for obligation in due.iter().filter(|o| o.due == tomorrow) {
        alerts.push(Alert {
            kind: AlertKind::DueTomorrow,
            message: format!("{} is due tomorrow ({})", obligation.description, obligation.due),
            entry: Some(obligation.entry),
            amount: Some(obligation.amount),
            due_date: Some(obligation.due),
        });
    }

    let kpis = KpiSet::compute(planner, Month::from_date(today), limit)?;
    if kpis.over_limit {
        alerts.push(Alert {
            kind: AlertKind::CommitmentExceeded,
            message: format!(
                "Expenses are {} of income this month (limit: {:.0}%)",
                kpis.ratio,
                limit * 100.0
            ),
            entry: None,
            amount: None,
            due_date: None,
        });
    }

    debug!(
        %today,
        due = due.len(),
        total = alerts.len(),
        over_limit = kpis.over_limit,
        "scanned alerts"
    );

    Ok(alerts)
}
