//! Dashboard KPI set
//!
//! Combines month summaries for the reference month, the month before, and a
//! projection for the month after, plus the income-commitment ratio checked
//! against the planner's configured limit.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::HorizonResult;
use crate::models::{Money, Month, Planner};

use super::summary::MonthSummary;

/// Expense-to-income ratio for a month
///
/// Zero income is modeled as an explicit sentinel rather than a division
/// error; a "not applicable" ratio never breaches the limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum CommitmentRatio {
    Ratio(f64),
    NotApplicable,
}

impl CommitmentRatio {
    /// Compute the ratio for a month's totals
    pub fn of(expense: Money, income: Money) -> Self {
        if income.is_zero() {
            Self::NotApplicable
        } else {
            Self::Ratio(expense.cents() as f64 / income.cents() as f64)
        }
    }

    /// The ratio value, when applicable
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Ratio(value) => Some(*value),
            Self::NotApplicable => None,
        }
    }

    /// Whether the ratio breaches `limit` (never true when not applicable)
    pub fn exceeds(&self, limit: f64) -> bool {
        matches!(self, Self::Ratio(value) if *value > limit)
    }
}

impl fmt::Display for CommitmentRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(value) => write!(f, "{:.1}%", value * 100.0),
            Self::NotApplicable => write!(f, "n/a"),
        }
    }
}

/// Month-over-month change as a fraction of the previous value
///
/// `None` when the previous value is zero (no meaningful base).
fn delta(current: Money, previous: Money) -> Option<f64> {
    if previous.is_zero() {
        None
    } else {
        Some((current.cents() - previous.cents()) as f64 / previous.cents() as f64)
    }
}

/// The dashboard KPI set for one reference month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiSet {
    pub previous: MonthSummary,
    pub current: MonthSummary,
    /// Forward-looking summary built from currently known entries only
    pub projected: MonthSummary,
    pub ratio: CommitmentRatio,
    /// The limit the ratio was checked against
    pub limit: f64,
    pub over_limit: bool,
    /// Income change vs the previous month, as a fraction
    pub income_delta: Option<f64>,
    /// Expense change vs the previous month, as a fraction
    pub expense_delta: Option<f64>,
}

impl KpiSet {
    /// Compute KPIs for a reference month against a commitment limit
    pub fn compute(planner: &Planner, reference: Month, limit: f64) -> HorizonResult<Self> {
        let previous = MonthSummary::generate(planner, reference.prev())?;
        let current = MonthSummary::generate(planner, reference)?;
        let projected = MonthSummary::generate(planner, reference.next())?;

        let ratio = CommitmentRatio::of(current.expense, current.income);
        let over_limit = ratio.exceeds(limit);

        debug!(%reference, %ratio, limit, over_limit, "computed KPIs");

        Ok(Self {
            income_delta: delta(current.income, previous.income),
            expense_delta: delta(current.expense, previous.expense),
            previous,
            current,
            projected,
            ratio,
            limit,
            over_limit,
        })
    }
}
