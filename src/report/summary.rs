use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::ledger::transaction::{Transaction, TransactionKind};

/// Income and expense totals over a slice, both kept as magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Sums magnitudes by kind; `balance = income - expenses`. Empty input
/// yields all zeros.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income = 0.0;
    let mut expenses = 0.0;
    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expenses += transaction.amount,
        }
    }
    Summary {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Signed net per label: income adds, expense subtracts. Ordering is left
/// to the caller.
pub fn net_by_label(transactions: &[Transaction]) -> HashMap<String, f64> {
    let mut totals = HashMap::new();
    for transaction in transactions {
        *totals.entry(transaction.label.clone()).or_insert(0.0) +=
            transaction.signed_amount();
    }
    totals
}

/// One point on the running balance series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: f64,
}

/// Nets each date with activity, then prefix-sums in date order. Dates in
/// the output are strictly ascending and the final balance equals
/// `summarize(..).balance`.
pub fn running_balance_by_date(transactions: &[Transaction]) -> Vec<BalancePoint> {
    let mut nets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for transaction in transactions {
        *nets.entry(transaction.date).or_insert(0.0) += transaction.signed_amount();
    }

    let mut running = 0.0;
    nets.into_iter()
        .map(|(date, net)| {
            running += net;
            BalancePoint {
                date,
                balance: running,
            }
        })
        .collect()
}
