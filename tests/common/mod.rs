use chrono::NaiveDate;
use tracker_core::ledger::{Transaction, TransactionKind};

/// Builds one ledger entry for a fixture.
pub fn txn(
    date: &str,
    kind: TransactionKind,
    label: &str,
    detail: &str,
    amount: f64,
) -> Transaction {
    Transaction::new(
        NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date"),
        kind,
        label,
        detail,
        amount,
    )
}

/// January scenario shared across suites: one paycheck and two expenses.
pub fn january_scenario() -> Vec<Transaction> {
    vec![
        txn(
            "2024-01-01",
            TransactionKind::Income,
            "Income",
            "Salary",
            1000.0,
        ),
        txn(
            "2024-01-02",
            TransactionKind::Expense,
            "Housing",
            "Rent",
            300.0,
        ),
        txn(
            "2024-01-03",
            TransactionKind::Expense,
            "Food",
            "Groceries",
            200.0,
        ),
    ]
}
