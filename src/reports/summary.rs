//! Month summary report
//!
//! Expands every ledger record owned by a planner against one target month
//! and totals the matches. Summaries are ephemeral; they are recomputed on
//! demand and never persisted.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HorizonError, HorizonResult};
use crate::models::{BillId, ExpenseId, IncomeId, Money, Month, Planner};

/// Reference to the ledger record behind a contribution or alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum EntryRef {
    Income(IncomeId),
    Expense(ExpenseId),
    Bill(BillId),
}

/// One record's share of a month's totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub entry: EntryRef,
    pub description: String,
    pub amount: Money,
}

/// Income, expense, and net totals for one (planner, month) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
    /// Every record that contributed to the totals
    pub contributions: Vec<Contribution>,
}

impl MonthSummary {
    /// Expand and total a planner's records for one month
    ///
    /// Fail-fast: the first malformed record aborts the whole call. Silently
    /// dropping a financial record would be worse than refusing the summary.
    pub fn generate(planner: &Planner, month: Month) -> HorizonResult<Self> {
        let mut income = Money::zero();
        let mut expense = Money::zero();
        let mut contributions = Vec::new();

        for entry in &planner.incomes {
            entry
                .validate()
                .map_err(|e| HorizonError::Validation(format!("{}: {}", entry.description, e)))?;
            if let Some(amount) = entry.contribution(month) {
                income += amount;
                contributions.push(Contribution {
                    entry: EntryRef::Income(entry.id),
                    description: entry.description.clone(),
                    amount,
                });
            }
        }

        for entry in &planner.expenses {
            entry
                .validate()
                .map_err(|e| HorizonError::Validation(format!("{}: {}", entry.description, e)))?;
            if let Some(amount) = entry.contribution(month) {
                expense += amount;
                contributions.push(Contribution {
                    entry: EntryRef::Expense(entry.id),
                    description: entry.description.clone(),
                    amount,
                });
            }
        }

        // Card bills count toward the expense total but keep their own
        // identity for alerting
        for bill in &planner.bills {
            bill.validate()
                .map_err(|e| HorizonError::Validation(format!("bill {}: {}", bill.id, e)))?;
            if bill.month == month {
                expense += bill.amount;
                let description = planner
                    .card(bill.card_id)
                    .map(|c| c.display_name())
                    .unwrap_or_else(|| "Card bill".to_string());
                contributions.push(Contribution {
                    entry: EntryRef::Bill(bill.id),
                    description,
                    amount: bill.amount,
                });
            }
        }

        debug!(
            %month,
            contributions = contributions.len(),
            income = income.cents(),
            expense = expense.cents(),
            "summarized month"
        );

        Ok(Self {
            month,
            income,
            expense,
            contributions,
        })
    }

    /// Net result: total income minus total expense
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}
