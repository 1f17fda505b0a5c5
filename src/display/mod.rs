//! Terminal display formatting
//!
//! All human-facing formatting (currency symbols, percentages, tables) lives
//! here, downstream of the engine's structured output.

pub mod dashboard;
pub mod tables;

pub use dashboard::{format_alerts, format_dashboard, format_kpis};
pub use tables::{
    format_adjustment_list, format_bill_list, format_card_list, format_expense_list,
    format_income_list,
};
