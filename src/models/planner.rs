//! Planner model
//!
//! A planner is the logical container owning disjoint sets of incomes,
//! expenses, cards, bills, and savings adjustments, scoped to one profile
//! (personal or business). Planners never share entries.
//!
//! Every mutation validates the entry first; the engine side only ever sees
//! `&Planner` snapshots and performs no mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{HorizonError, HorizonResult};

use super::adjustment::SavingsAdjustment;
use super::card::{CardBill, CreditCard};
use super::expense::ExpenseEntry;
use super::ids::{AdjustmentId, BillId, CardId, ExpenseId, IncomeId, PlannerId};
use super::income::IncomeEntry;

/// Default commitment limit for new planners (expenses / income)
pub const DEFAULT_ALERT_THRESHOLD: f64 = 0.8;

/// Whether a planner tracks personal or business finances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlannerProfile {
    #[default]
    Personal,
    Business,
}

impl fmt::Display for PlannerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Personal => write!(f, "Personal"),
            Self::Business => write!(f, "Business"),
        }
    }
}

impl FromStr for PlannerProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "business" => Ok(Self::Business),
            _ => Err(format!("Unknown planner profile: {}", s)),
        }
    }
}

/// A planner and the ledger records it owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planner {
    pub id: PlannerId,
    pub name: String,
    pub profile: PlannerProfile,
    /// Currency symbol, used by the presentation layer only
    pub currency: String,
    /// Commitment limit handed to the engine (expense / income ratio)
    pub alert_threshold: f64,
    #[serde(default)]
    pub incomes: Vec<IncomeEntry>,
    #[serde(default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(default)]
    pub cards: Vec<CreditCard>,
    #[serde(default)]
    pub bills: Vec<CardBill>,
    #[serde(default)]
    pub adjustments: Vec<SavingsAdjustment>,
    pub created_at: DateTime<Utc>,
}

impl Planner {
    /// Create a new planner with default currency and threshold
    pub fn new(name: impl Into<String>, profile: PlannerProfile) -> Self {
        Self {
            id: PlannerId::new(),
            name: name.into(),
            profile,
            currency: "$".to_string(),
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            incomes: Vec::new(),
            expenses: Vec::new(),
            cards: Vec::new(),
            bills: Vec::new(),
            adjustments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Validate the planner itself (not its entries)
    pub fn validate(&self) -> HorizonResult<()> {
        if self.name.trim().is_empty() {
            return Err(HorizonError::Validation(
                "Planner name cannot be empty".into(),
            ));
        }
        if !self.alert_threshold.is_finite() || self.alert_threshold <= 0.0 {
            return Err(HorizonError::Validation(format!(
                "Alert threshold must be a positive ratio, got {}",
                self.alert_threshold
            )));
        }
        Ok(())
    }

    /// Add a validated income entry
    pub fn add_income(&mut self, entry: IncomeEntry) -> HorizonResult<()> {
        entry
            .validate()
            .map_err(|e| HorizonError::Validation(e.to_string()))?;
        self.incomes.push(entry);
        Ok(())
    }

    /// Remove an income entry by id
    pub fn remove_income(&mut self, id: IncomeId) -> Option<IncomeEntry> {
        let pos = self.incomes.iter().position(|e| e.id == id)?;
        Some(self.incomes.remove(pos))
    }

    /// Add a validated expense entry
    pub fn add_expense(&mut self, entry: ExpenseEntry) -> HorizonResult<()> {
        entry
            .validate()
            .map_err(|e| HorizonError::Validation(e.to_string()))?;
        self.expenses.push(entry);
        Ok(())
    }

    /// Remove an expense entry by id
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<ExpenseEntry> {
        let pos = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(pos))
    }

    /// Add a validated credit card
    pub fn add_card(&mut self, card: CreditCard) -> HorizonResult<()> {
        card.validate()
            .map_err(|e| HorizonError::Validation(e.to_string()))?;
        self.cards.push(card);
        Ok(())
    }

    /// Look up a card by id
    pub fn card(&self, id: CardId) -> Option<&CreditCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Add a validated bill; the referenced card must exist
    pub fn add_bill(&mut self, bill: CardBill) -> HorizonResult<()> {
        bill.validate()
            .map_err(|e| HorizonError::Validation(e.to_string()))?;
        if self.card(bill.card_id).is_none() {
            return Err(HorizonError::card_not_found(bill.card_id.to_string()));
        }
        self.bills.push(bill);
        Ok(())
    }

    /// Look up a bill by id, mutably
    pub fn bill_mut(&mut self, id: BillId) -> Option<&mut CardBill> {
        self.bills.iter_mut().find(|b| b.id == id)
    }

    /// Add a validated savings adjustment
    pub fn add_adjustment(&mut self, adjustment: SavingsAdjustment) -> HorizonResult<()> {
        adjustment
            .validate()
            .map_err(|e| HorizonError::Validation(e.to_string()))?;
        self.adjustments.push(adjustment);
        Ok(())
    }

    /// Remove an adjustment by id
    pub fn remove_adjustment(&mut self, id: AdjustmentId) -> Option<SavingsAdjustment> {
        let pos = self.adjustments.iter().position(|a| a.id == id)?;
        Some(self.adjustments.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ExpenseCategory, IncomeKind, Money, Month, Recurrence,
    };
    use chrono::NaiveDate;

    fn planner() -> Planner {
        Planner::new("Household", PlannerProfile::Personal)
    }

    #[test]
    fn test_new_planner_defaults() {
        let p = planner();
        assert_eq!(p.profile, PlannerProfile::Personal);
        assert_eq!(p.alert_threshold, DEFAULT_ALERT_THRESHOLD);
        assert!(p.incomes.is_empty());
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let mut p = planner();
        p.alert_threshold = 0.0;
        assert!(p.validate().is_err());

        p.alert_threshold = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_add_income_validates() {
        let mut p = planner();
        let ok = IncomeEntry::new(
            "Salary",
            IncomeKind::Fixed,
            Money::from_cents(500000),
            Month::new(2024, 1),
            Recurrence::Monthly,
        );
        p.add_income(ok).unwrap();
        assert_eq!(p.incomes.len(), 1);

        let bad = IncomeEntry::new(
            "Broken",
            IncomeKind::Other,
            Money::from_cents(100),
            Month::new(2024, 1),
            Recurrence::ForMonths(0),
        );
        let err = p.add_income(bad).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(p.incomes.len(), 1);
    }

    #[test]
    fn test_remove_income() {
        let mut p = planner();
        let entry = IncomeEntry::new(
            "Salary",
            IncomeKind::Fixed,
            Money::from_cents(500000),
            Month::new(2024, 1),
            Recurrence::Monthly,
        );
        let id = entry.id;
        p.add_income(entry).unwrap();

        assert!(p.remove_income(id).is_some());
        assert!(p.remove_income(id).is_none());
        assert!(p.incomes.is_empty());
    }

    #[test]
    fn test_add_bill_requires_card() {
        let mut p = planner();
        let card = CreditCard::new("Nubank", None);
        let card_id = card.id;
        p.add_card(card).unwrap();

        let bill = CardBill::new(
            card_id,
            Month::new(2024, 6),
            Money::from_cents(80000),
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
        );
        p.add_bill(bill).unwrap();

        let orphan = CardBill::new(
            CardId::new(),
            Month::new(2024, 6),
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
        );
        let err = p.add_bill(orphan).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_add_expense_validates_due_day() {
        let mut p = planner();
        let bad = ExpenseEntry::new(
            "Rent",
            ExpenseCategory::Rent,
            Money::from_cents(150000),
            0,
            Month::new(2024, 1),
            Recurrence::Monthly,
        );
        assert!(p.add_expense(bad).unwrap_err().is_validation());
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!(
            "personal".parse::<PlannerProfile>().unwrap(),
            PlannerProfile::Personal
        );
        assert_eq!(
            "Business".parse::<PlannerProfile>().unwrap(),
            PlannerProfile::Business
        );
        assert!("corporate".parse::<PlannerProfile>().is_err());
    }

    #[test]
    fn test_serialization() {
        let mut p = planner();
        p.add_income(IncomeEntry::new(
            "Salary",
            IncomeKind::Fixed,
            Money::from_cents(500000),
            Month::new(2024, 1),
            Recurrence::Monthly,
        ))
        .unwrap();

        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Planner = serde_json::from_str(&json).unwrap();
        assert_eq!(p.id, deserialized.id);
        assert_eq!(deserialized.incomes.len(), 1);
    }
}
