//! Credit card and card bill models
//!
//! A card identifies the bank and an optional label; a bill is one statement
//! for a (card, month) pair. Bills count as expense obligations when
//! aggregating, but keep their own identity for due-date alerting.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BillId, CardId};
use super::money::Money;
use super::month::Month;

/// Validation errors for cards and bills
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardValidationError {
    EmptyBankName,
    NegativeAmount,
}

impl fmt::Display for CardValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBankName => write!(f, "Card bank name cannot be empty"),
            Self::NegativeAmount => write!(f, "Bill amount cannot be negative"),
        }
    }
}

impl std::error::Error for CardValidationError {}

/// A credit card registered with a planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: CardId,
    /// Bank or issuer name
    pub bank: String,
    /// Optional nickname for the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CreditCard {
    /// Create a new card
    pub fn new(bank: impl Into<String>, label: Option<String>) -> Self {
        Self {
            id: CardId::new(),
            bank: bank.into(),
            label,
            created_at: Utc::now(),
        }
    }

    /// Validate the card
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.bank.trim().is_empty() {
            return Err(CardValidationError::EmptyBankName);
        }
        Ok(())
    }

    /// Display name: bank plus label, e.g. "Nubank - Platinum"
    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => format!("{} - {}", self.bank, label),
            None => format!("{} - Card", self.bank),
        }
    }
}

impl fmt::Display for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A card statement for one (card, month) pair
///
/// Duplicate bills for the same pair are a caller-side concern; the engine
/// aggregates whatever it is handed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardBill {
    pub id: BillId,
    pub card_id: CardId,
    /// The statement's reference month
    pub month: Month,
    pub amount: Money,
    pub due_date: NaiveDate,
    /// Paid bills still aggregate into the month's expenses but are never
    /// alerted
    #[serde(default)]
    pub paid: bool,
    pub created_at: DateTime<Utc>,
}

impl CardBill {
    /// Create a new bill
    pub fn new(card_id: CardId, month: Month, amount: Money, due_date: NaiveDate) -> Self {
        Self {
            id: BillId::new(),
            card_id,
            month,
            amount,
            due_date,
            paid: false,
            created_at: Utc::now(),
        }
    }

    /// Validate the bill
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.amount.is_negative() {
            return Err(CardValidationError::NegativeAmount);
        }
        Ok(())
    }

    /// Mark the bill paid or unpaid
    pub fn set_paid(&mut self, paid: bool) {
        self.paid = paid;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let card = CreditCard::new("Nubank", Some("Platinum".into()));
        assert_eq!(card.display_name(), "Nubank - Platinum");

        let unnamed = CreditCard::new("Itau", None);
        assert_eq!(unnamed.display_name(), "Itau - Card");
    }

    #[test]
    fn test_card_validation() {
        let card = CreditCard::new("  ", None);
        assert_eq!(card.validate(), Err(CardValidationError::EmptyBankName));
        assert!(CreditCard::new("Nubank", None).validate().is_ok());
    }

    #[test]
    fn test_bill_validation() {
        let card = CreditCard::new("Nubank", None);
        let mut bill = CardBill::new(
            card.id,
            Month::new(2024, 6),
            Money::from_cents(80000),
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
        );
        assert!(bill.validate().is_ok());

        bill.amount = Money::from_cents(-1);
        assert_eq!(bill.validate(), Err(CardValidationError::NegativeAmount));
    }

    #[test]
    fn test_set_paid() {
        let card = CreditCard::new("Nubank", None);
        let mut bill = CardBill::new(
            card.id,
            Month::new(2024, 6),
            Money::from_cents(80000),
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
        );
        assert!(!bill.paid);
        bill.set_paid(true);
        assert!(bill.paid);
    }

    #[test]
    fn test_serialization() {
        let card = CreditCard::new("Nubank", Some("Gold".into()));
        let bill = CardBill::new(
            card.id,
            Month::new(2024, 6),
            Money::from_cents(80000),
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
        );

        let json = serde_json::to_string(&bill).unwrap();
        let deserialized: CardBill = serde_json::from_str(&json).unwrap();
        assert_eq!(bill.id, deserialized.id);
        assert_eq!(bill.month, deserialized.month);
        assert_eq!(bill.due_date, deserialized.due_date);
    }
}
