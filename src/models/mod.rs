//! Core data models for Horizon
//!
//! This module contains the data structures that represent the planning
//! domain: planners, incomes, expenses, credit cards and their bills, and
//! savings adjustments.

pub mod adjustment;
pub mod card;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod month;
pub mod planner;
pub mod recurrence;

pub use adjustment::{AdjustmentKind, SavingsAdjustment};
pub use card::{CardBill, CreditCard};
pub use expense::{ExpenseCategory, ExpenseEntry};
pub use ids::{AdjustmentId, BillId, CardId, ExpenseId, IncomeId, PlannerId};
pub use income::{IncomeEntry, IncomeKind};
pub use money::Money;
pub use month::Month;
pub use planner::{Planner, PlannerProfile, DEFAULT_ALERT_THRESHOLD};
pub use recurrence::Recurrence;
