//! Dashboard orchestration
//!
//! Pure composition of the KPI, alert, and balance reports over one planner
//! snapshot and one reference date. Errors from the underlying reports
//! propagate unmodified; a dashboard is all-or-nothing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::HorizonResult;
use crate::models::{Month, Planner};

use super::alerts::{scan_alerts, Alert};
use super::balance::AccumulatedBalance;
use super::kpi::KpiSet;

/// Everything the presentation layer needs for one dashboard view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub kpis: KpiSet,
    pub alerts: Vec<Alert>,
    pub balance: AccumulatedBalance,
}

impl Dashboard {
    /// Build the full dashboard for a planner as of `today`
    ///
    /// `limit` is the commitment ratio ceiling; callers usually pass the
    /// planner's configured `alert_threshold`.
    pub fn build(planner: &Planner, today: NaiveDate, limit: f64) -> HorizonResult<Self> {
        let reference = Month::from_date(today);
        let kpis = KpiSet::compute(planner, reference, limit)?;
        let alerts = scan_alerts(planner, today, limit)?;
        let balance = AccumulatedBalance::compute(planner, today)?;

        info!(
            planner = %planner.name,
            %reference,
            alerts = alerts.len(),
            "built dashboard"
        );

        Ok(Self {
            kpis,
            alerts,
            balance,
        })
    }
}
