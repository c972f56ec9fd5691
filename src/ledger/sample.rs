use chrono::{Datelike, Local, NaiveDate};

use super::transaction::{Transaction, TransactionKind};

/// Returns the demo dataset pinned to the given `YYYY-MM` month. An
/// unparseable month key falls back to the current month.
pub fn sample_transactions(month: &str) -> Vec<Transaction> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .unwrap_or_else(|_| current_month_start());

    vec![
        row(first, 1, TransactionKind::Income, "Income", "Salary", 3200.0),
        row(first, 2, TransactionKind::Expense, "Housing", "Rent", 1200.0),
        row(first, 3, TransactionKind::Expense, "Food", "Groceries", 140.0),
        row(
            first,
            5,
            TransactionKind::Income,
            "Investments",
            "Stock Dividend",
            45.0,
        ),
        row(first, 7, TransactionKind::Expense, "Food", "Coffee", 9.5),
        row(first, 10, TransactionKind::Expense, "Transport", "Gas", 65.0),
        row(first, 12, TransactionKind::Income, "Income", "Freelance", 400.0),
        row(
            first,
            15,
            TransactionKind::Expense,
            "Utilities",
            "Internet",
            60.0,
        ),
        row(
            first,
            18,
            TransactionKind::Expense,
            "Food",
            "Restaurant",
            55.0,
        ),
        row(
            first,
            20,
            TransactionKind::Expense,
            "Utilities",
            "Electricity",
            80.0,
        ),
    ]
}

fn current_month_start() -> NaiveDate {
    let today = Local::now().date_naive();
    today.with_day(1).unwrap_or(today)
}

fn row(
    first: NaiveDate,
    day: u32,
    kind: TransactionKind,
    label: &str,
    detail: &str,
    amount: f64,
) -> Transaction {
    // Sample days stop at 20, so this is valid in every month.
    let date = first.with_day(day).unwrap_or(first);
    Transaction::new(date, kind, label, detail, amount)
}
