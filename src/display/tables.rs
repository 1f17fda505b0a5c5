//! Ledger list formatting
//!
//! Formats planner records for terminal output in table views.

use crate::models::{CreditCard, ExpenseEntry, IncomeEntry, Planner, SavingsAdjustment};

fn name_width<'a, I: Iterator<Item = &'a str>>(names: I) -> usize {
    names.map(str::len).max().unwrap_or(4).max(11)
}

/// Format a list of income entries as a table
pub fn format_income_list(incomes: &[IncomeEntry], currency: &str) -> String {
    if incomes.is_empty() {
        return "No incomes registered.\n".to_string();
    }

    let width = name_width(incomes.iter().map(|e| e.description.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<width$}  {:<10}  {:>12}  {:<9}  {}\n",
        "ID", "Description", "Type", "Amount", "Start", "Recurrence",
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<width$}  {:-<10}  {:->12}  {:-<9}  {:-<16}\n",
        "", "", "", "", "", "",
    ));

    for entry in incomes {
        output.push_str(&format!(
            "{:<12}  {:<width$}  {:<10}  {:>12}  {:<9}  {}\n",
            entry.id.to_string(),
            entry.description,
            entry.kind.to_string(),
            entry.amount.format_with_symbol(currency),
            entry.start.to_string(),
            entry.recurrence,
        ));
    }
    output
}

/// Format a list of expense entries as a table
pub fn format_expense_list(expenses: &[ExpenseEntry], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses registered.\n".to_string();
    }

    let width = name_width(expenses.iter().map(|e| e.description.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<width$}  {:<10}  {:>12}  {:>4}  {:<9}  {}\n",
        "ID", "Description", "Category", "Amount", "Day", "Start", "Recurrence",
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<width$}  {:-<10}  {:->12}  {:->4}  {:-<9}  {:-<16}\n",
        "", "", "", "", "", "", "",
    ));

    for entry in expenses {
        output.push_str(&format!(
            "{:<12}  {:<width$}  {:<10}  {:>12}  {:>4}  {:<9}  {}\n",
            entry.id.to_string(),
            entry.description,
            entry.category.to_string(),
            entry.amount.format_with_symbol(currency),
            entry.due_day,
            entry.start.to_string(),
            entry.recurrence,
        ));
    }
    output
}

/// Format a list of credit cards as a table
pub fn format_card_list(cards: &[CreditCard]) -> String {
    if cards.is_empty() {
        return "No cards registered.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<13}  {}\n", "ID", "Card"));
    output.push_str(&format!("{:-<13}  {:-<30}\n", "", ""));
    for card in cards {
        output.push_str(&format!("{:<13}  {}\n", card.id.to_string(), card));
    }
    output
}

/// Format a planner's card bills as a table
pub fn format_bill_list(planner: &Planner, currency: &str) -> String {
    if planner.bills.is_empty() {
        return "No bills registered.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13}  {:<26}  {:<9}  {:>12}  {:<12}  {}\n",
        "ID", "Card", "Month", "Amount", "Due", "Status",
    ));
    output.push_str(&format!(
        "{:-<13}  {:-<26}  {:-<9}  {:->12}  {:-<12}  {:-<6}\n",
        "", "", "", "", "", "",
    ));

    for bill in &planner.bills {
        let card = planner
            .card(bill.card_id)
            .map(|c| c.display_name())
            .unwrap_or_else(|| "Card bill".to_string());
        output.push_str(&format!(
            "{:<13}  {:<26}  {:<9}  {:>12}  {:<12}  {}\n",
            bill.id.to_string(),
            card,
            bill.month.to_string(),
            bill.amount.format_with_symbol(currency),
            bill.due_date.to_string(),
            if bill.paid { "paid" } else { "open" },
        ));
    }
    output
}

/// Format a list of savings adjustments as a table
pub fn format_adjustment_list(adjustments: &[SavingsAdjustment], currency: &str) -> String {
    if adjustments.is_empty() {
        return "No savings movements registered.\n".to_string();
    }

    let width = name_width(adjustments.iter().map(|a| a.description.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<width$}  {:<10}  {:>12}  {}\n",
        "ID", "Description", "Kind", "Amount", "Date",
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<width$}  {:-<10}  {:->12}  {:-<10}\n",
        "", "", "", "", "",
    ));

    for adjustment in adjustments {
        output.push_str(&format!(
            "{:<12}  {:<width$}  {:<10}  {:>12}  {}\n",
            adjustment.id.to_string(),
            adjustment.description,
            adjustment.kind.to_string(),
            adjustment.signed_amount().format_with_symbol(currency),
            adjustment.date,
        ));
    }
    output
}
