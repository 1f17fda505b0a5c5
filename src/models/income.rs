//! Income entry model
//!
//! An income entry is a recurring or one-off inflow owned by a planner. The
//! recurrence rule decides which months it contributes to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::IncomeId;
use super::money::Money;
use super::month::Month;
use super::recurrence::Recurrence;

/// Closed set of income types
///
/// Unknown types are rejected at entry construction rather than silently
/// aggregated at computation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeKind {
    Fixed,
    Commission,
    Bonus,
    Extra,
    Other,
}

impl IncomeKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Commission => "Commission",
            Self::Bonus => "Bonus",
            Self::Extra => "Extra",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for IncomeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "commission" => Ok(Self::Commission),
            "bonus" => Ok(Self::Bonus),
            "extra" => Ok(Self::Extra),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown income type: {}", s)),
        }
    }
}

/// Validation errors for income entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyDescription,
    NegativeAmount,
    InvalidRecurrence,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Income description cannot be empty"),
            Self::NegativeAmount => write!(f, "Income amount cannot be negative"),
            Self::InvalidRecurrence => write!(f, "Recurrence month count must be at least 1"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A recurring or one-off income owned by a planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub id: IncomeId,
    pub description: String,
    pub kind: IncomeKind,
    pub amount: Money,
    /// First month this income contributes to
    pub start: Month,
    pub recurrence: Recurrence,
    pub created_at: DateTime<Utc>,
}

impl IncomeEntry {
    /// Create a new income entry
    pub fn new(
        description: impl Into<String>,
        kind: IncomeKind,
        amount: Money,
        start: Month,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            description: description.into(),
            kind,
            amount,
            start,
            recurrence,
            created_at: Utc::now(),
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.description.trim().is_empty() {
            return Err(IncomeValidationError::EmptyDescription);
        }
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        if self.recurrence.validate().is_err() {
            return Err(IncomeValidationError::InvalidRecurrence);
        }
        Ok(())
    }

    /// The amount this entry contributes to `month`, if any
    ///
    /// Pure function of (entry, month); assumes a validated entry.
    pub fn contribution(&self, month: Month) -> Option<Money> {
        self.recurrence
            .active_in(self.start, month)
            .then_some(self.amount)
    }
}
