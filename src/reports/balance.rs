//! Accumulated balance report
//!
//! Sums monthly net results over a bounded horizon around the reference date
//! and folds in one-off savings movements. The current balance covers months
//! strictly before the reference month plus movements through the reference
//! date; the projection extends through the forward horizon.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::HorizonResult;
use crate::models::{Money, Month, Planner};

use super::summary::MonthSummary;

/// How many months to look back and ahead when accumulating balances
pub const BALANCE_HORIZON_MONTHS: i64 = 12;

/// Accumulated balance as of a reference date, plus its forward projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AccumulatedBalance {
    /// Net results of past months plus savings movements through the
    /// reference date
    pub current: Money,
    /// Current balance plus projected nets and future movements over the
    /// forward horizon
    pub projected: Money,
}

impl AccumulatedBalance {
    /// Compute the balance pair for a planner as of `today`
    pub fn compute(planner: &Planner, today: NaiveDate) -> HorizonResult<Self> {
        let this_month = Month::from_date(today);

        let mut past_nets = Money::zero();
        let mut future_nets = Money::zero();
        for offset in -BALANCE_HORIZON_MONTHS..=BALANCE_HORIZON_MONTHS {
            let month = this_month.plus_months(offset);
            let net = MonthSummary::generate(planner, month)?.net();
            if month < this_month {
                past_nets += net;
            } else {
                future_nets += net;
            }
        }

        let mut past_moves = Money::zero();
        let mut future_moves = Money::zero();
        for adjustment in &planner.adjustments {
            if adjustment.date <= today {
                past_moves += adjustment.signed_amount();
            } else {
                future_moves += adjustment.signed_amount();
            }
        }

        let current = past_nets + past_moves;
        let projected = current + future_nets + future_moves;

        debug!(
            %today,
            current = current.cents(),
            projected = projected.cents(),
            "accumulated balances"
        );

        Ok(Self { current, projected })
    }
}
