//! Savings adjustment model
//!
//! One-off movements (deposits into or withdrawals from savings) that affect
//! the accumulated balance but never the monthly income/expense summaries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::AdjustmentId;
use super::money::Money;

/// Direction of a savings movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for AdjustmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
        }
    }
}

impl FromStr for AdjustmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deposit" => Ok(Self::Deposit),
            "withdrawal" => Ok(Self::Withdrawal),
            _ => Err(format!("Unknown adjustment kind: {}", s)),
        }
    }
}

/// Validation errors for savings adjustments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustmentValidationError {
    EmptyDescription,
    NegativeAmount,
}

impl fmt::Display for AdjustmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Adjustment description cannot be empty"),
            Self::NegativeAmount => write!(f, "Adjustment amount cannot be negative"),
        }
    }
}

impl std::error::Error for AdjustmentValidationError {}

/// A one-off savings movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsAdjustment {
    pub id: AdjustmentId,
    pub description: String,
    /// Always non-negative; the kind carries the sign
    pub amount: Money,
    pub date: NaiveDate,
    pub kind: AdjustmentKind,
    pub created_at: DateTime<Utc>,
}

impl SavingsAdjustment {
    /// Create a new adjustment
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        kind: AdjustmentKind,
    ) -> Self {
        Self {
            id: AdjustmentId::new(),
            description: description.into(),
            amount,
            date,
            kind,
            created_at: Utc::now(),
        }
    }

    /// Validate the adjustment
    pub fn validate(&self) -> Result<(), AdjustmentValidationError> {
        if self.description.trim().is_empty() {
            return Err(AdjustmentValidationError::EmptyDescription);
        }
        if self.amount.is_negative() {
            return Err(AdjustmentValidationError::NegativeAmount);
        }
        Ok(())
    }

    /// The signed effect on the accumulated balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            AdjustmentKind::Deposit => self.amount,
            AdjustmentKind::Withdrawal => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        let deposit = SavingsAdjustment::new(
            "Emergency fund",
            Money::from_cents(50000),
            date(2024, 5, 10),
            AdjustmentKind::Deposit,
        );
        assert_eq!(deposit.signed_amount(), Money::from_cents(50000));

        let withdrawal = SavingsAdjustment::new(
            "Car repair",
            Money::from_cents(30000),
            date(2024, 5, 20),
            AdjustmentKind::Withdrawal,
        );
        assert_eq!(withdrawal.signed_amount(), Money::from_cents(-30000));
    }

    #[test]
    fn test_validation() {
        let mut adj = SavingsAdjustment::new(
            "Savings",
            Money::from_cents(1000),
            date(2024, 5, 1),
            AdjustmentKind::Deposit,
        );
        assert!(adj.validate().is_ok());

        adj.amount = Money::from_cents(-1);
        assert_eq!(
            adj.validate(),
            Err(AdjustmentValidationError::NegativeAmount)
        );

        let mut adj = SavingsAdjustment::new(
            "",
            Money::from_cents(1000),
            date(2024, 5, 1),
            AdjustmentKind::Deposit,
        );
        adj.description = String::new();
        assert_eq!(
            adj.validate(),
            Err(AdjustmentValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(
            "deposit".parse::<AdjustmentKind>().unwrap(),
            AdjustmentKind::Deposit
        );
        assert_eq!(
            "Withdrawal".parse::<AdjustmentKind>().unwrap(),
            AdjustmentKind::Withdrawal
        );
        assert!("transfer".parse::<AdjustmentKind>().is_err());
    }
}
