//! Expense entry model
//!
//! An expense entry is a recurring or one-off obligation with a due
//! day-of-month. The due day is clamped to the length of whichever month the
//! obligation falls in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;
use super::month::Month;
use super::recurrence::Recurrence;

/// Closed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Financing,
    Electric,
    Water,
    Internet,
    Phone,
    Rent,
    Tax,
    Other,
}

impl ExpenseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Financing => "Financing",
            Self::Electric => "Electric",
            Self::Water => "Water",
            Self::Internet => "Internet",
            Self::Phone => "Phone",
            Self::Rent => "Rent",
            Self::Tax => "Tax",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "financing" => Ok(Self::Financing),
            "electric" => Ok(Self::Electric),
            "water" => Ok(Self::Water),
            "internet" => Ok(Self::Internet),
            "phone" => Ok(Self::Phone),
            "rent" => Ok(Self::Rent),
            "tax" => Ok(Self::Tax),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown expense category: {}", s)),
        }
    }
}

/// Validation errors for expense entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NegativeAmount,
    InvalidDueDay(u32),
    InvalidRecurrence,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::InvalidDueDay(day) => write!(f, "Due day must be 1-31, got {}", day),
            Self::InvalidRecurrence => write!(f, "Recurrence month count must be at least 1"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recurring or one-off expense obligation owned by a planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: ExpenseId,
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Day of month the obligation falls due (1-31, clamped to month length)
    pub due_day: u32,
    /// First month this expense contributes to
    pub start: Month,
    pub recurrence: Recurrence,
    pub created_at: DateTime<Utc>,
}

impl ExpenseEntry {
    /// Create a new expense entry
    pub fn new(
        description: impl Into<String>,
        category: ExpenseCategory,
        amount: Money,
        due_day: u32,
        start: Month,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            category,
            amount,
            due_day,
            start,
            recurrence,
            created_at: Utc::now(),
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if !(1..=31).contains(&self.due_day) {
            return Err(ExpenseValidationError::InvalidDueDay(self.due_day));
        }
        if self.recurrence.validate().is_err() {
            return Err(ExpenseValidationError::InvalidRecurrence);
        }
        Ok(())
    }

    /// The amount this entry contributes to `month`, if any
    pub fn contribution(&self, month: Month) -> Option<Money> {
        self.recurrence
            .active_in(self.start, month)
            .then_some(self.amount)
    }

    /// The due date of this obligation within `month`, if active there
    ///
    /// The due day clamps to the month length (day 31 in June becomes the
    /// 30th).
    pub fn due_date_in(&self, month: Month) -> Option<NaiveDate> {
        self.recurrence
            .active_in(self.start, month)
            .then(|| month.date_with_day(self.due_day))
    }
}
