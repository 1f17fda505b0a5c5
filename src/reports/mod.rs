//! Derived reports for Horizon
//!
//! Everything here is recomputed on demand from a planner snapshot: month
//! summaries, dashboard KPIs, due-date alerts, and accumulated balances.
//! Report code never mutates the planner it reads.

pub mod alerts;
pub mod balance;
pub mod dashboard;
pub mod kpi;
pub mod summary;

pub use alerts::{scan_alerts, Alert, AlertKind, DUE_WINDOW_DAYS};
pub use balance::{AccumulatedBalance, BALANCE_HORIZON_MONTHS};
pub use dashboard::Dashboard;
pub use kpi::{CommitmentRatio, KpiSet};
pub use summary::{Contribution, EntryRef, MonthSummary};
