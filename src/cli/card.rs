//! Credit card and bill CLI commands

use clap::Subcommand;
use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_bill_list, format_card_list};
use crate::error::{HorizonError, HorizonResult};
use crate::models::{BillId, CardBill, CardId, CreditCard, Month, Planner};
use crate::storage::Storage;

use super::{parse_money_arg, parse_month_arg, resolve_planner, store_planner};

/// Card subcommands
#[derive(Subcommand)]
pub enum CardCommands {
    /// Register a credit card
    Add {
        /// Bank or issuer name
        bank: String,
        /// Optional nickname for the card
        #[arg(short, long)]
        label: Option<String>,
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },

    /// List registered cards
    List {
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },
}

/// Bill subcommands
#[derive(Subcommand)]
pub enum BillCommands {
    /// Register a card bill for one month
    Add {
        /// Card (bank name, card ID, or short ID like "card-1a2b3c4d")
        card: String,
        /// Bill amount (e.g. "800" or "800.00")
        amount: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
        /// Reference month (YYYY-MM, defaults to the due date's month)
        #[arg(short, long)]
        month: Option<String>,
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },

    /// List card bills
    List {
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },

    /// Mark a bill as paid
    Pay {
        /// Bill ID (short form like "bill-1a2b3c4d" or full UUID)
        id: String,
        /// Planner name
        #[arg(short, long)]
        planner: Option<String>,
    },
}

/// Find a card by bank name, display ID, or UUID
fn find_card(planner: &Planner, key: &str) -> Option<CardId> {
    planner
        .cards
        .iter()
        .find(|c| {
            c.bank.eq_ignore_ascii_case(key)
                || c.id.to_string() == key
                || key.parse().map_or(false, |p: CardId| p == c.id)
        })
        .map(|c| c.id)
}

/// Handle a card command
pub fn handle_card_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CardCommands,
) -> HorizonResult<()> {
    match cmd {
        CardCommands::Add {
            bank,
            label,
            planner,
        } => {
            let mut planner = resolve_planner(storage, settings, planner.as_deref())?;

            let card = CreditCard::new(bank, label);
            let name = card.display_name();
            planner.add_card(card)?;
            store_planner(storage, planner)?;

            println!("Added card: {}", name);
            Ok(())
        }

        CardCommands::List { planner } => {
            let planner = resolve_planner(storage, settings, planner.as_deref())?;
            print!("{}", format_card_list(&planner.cards));
            Ok(())
        }
    }
}

/// Handle a bill command
pub fn handle_bill_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BillCommands,
) -> HorizonResult<()> {
    match cmd {
        BillCommands::Add {
            card,
            amount,
            due,
            month,
            planner,
        } => {
            let mut planner = resolve_planner(storage, settings, planner.as_deref())?;

            let card_id = find_card(&planner, &card)
                .ok_or_else(|| HorizonError::card_not_found(&card))?;
            let amount = parse_money_arg(&amount)?;
            let due = NaiveDate::parse_from_str(&due, "%Y-%m-%d").map_err(|_| {
                HorizonError::Validation(format!("Invalid due date (want YYYY-MM-DD): {}", due))
            })?;
            let month = match month.as_deref() {
                Some(s) => parse_month_arg(Some(s))?,
                None => Month::from_date(due),
            };

            let bill = CardBill::new(card_id, month, amount, due);
            planner.add_bill(bill)?;
            store_planner(storage, planner)?;

            println!("Added bill for {} due {}", month, due);
            Ok(())
        }

        BillCommands::List { planner } => {
            let planner = resolve_planner(storage, settings, planner.as_deref())?;
            print!("{}", format_bill_list(&planner, &planner.currency));
            Ok(())
        }

        BillCommands::Pay { id, planner } => {
            let mut planner = resolve_planner(storage, settings, planner.as_deref())?;

            let target = planner
                .bills
                .iter()
                .find(|b| b.id.to_string() == id || id.parse::<BillId>().map_or(false, |p| p == b.id))
                .map(|b| b.id);

            let bill = target
                .and_then(|t| planner.bill_mut(t))
                .ok_or_else(|| HorizonError::entry_not_found(&id))?;
            bill.set_paid(true);
            let month = bill.month;
            store_planner(storage, planner)?;

            println!("Marked bill for {} as paid", month);
            Ok(())
        }
    }
}
