use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};

use crate::ledger::transaction::{Transaction, TransactionKind};

use super::{
    filter::LedgerFilter,
    summary::{summarize, Summary},
};

/// Percent change between two monthly totals. A previous total of zero (or
/// less) yields 0 so a month with no history never divides by zero.
pub fn month_over_month_delta(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}

/// Percent change for the balance metric. Balances can legitimately be zero
/// or negative, so the guard is `!= 0` and the denominator is the absolute
/// previous value, which keeps the sign of the change meaningful when last
/// month ended negative.
pub fn balance_delta(current: f64, previous: f64) -> f64 {
    if previous != 0.0 {
        (current - previous) / previous.abs() * 100.0
    } else {
        0.0
    }
}

/// Month-over-month percent changes for the three dashboard totals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyChanges {
    pub income_pct: f64,
    pub expenses_pct: f64,
    pub balance_pct: f64,
}

/// Compares `month` against the previous calendar month across the whole
/// list. Income and expenses use the zero guard; the balance uses the
/// absolute-denominator rule.
pub fn monthly_changes(transactions: &[Transaction], month: &str) -> MonthlyChanges {
    let current = summarize(&LedgerFilter::by_month(month).apply(transactions));
    let previous = match previous_month_key(month) {
        Some(key) => summarize(&LedgerFilter::by_month(&key).apply(transactions)),
        None => Summary::default(),
    };
    MonthlyChanges {
        income_pct: month_over_month_delta(current.income, previous.income),
        expenses_pct: month_over_month_delta(current.expenses, previous.expenses),
        balance_pct: balance_delta(current.balance, previous.balance),
    }
}

/// `YYYY-MM` key of the month before `month`, or None when the key does not
/// parse.
pub fn previous_month_key(month: &str) -> Option<String> {
    let start = month_start(month)?;
    Some(shift_month(start, -1).format("%Y-%m").to_string())
}

/// Calendar day count (28–31) of a `YYYY-MM` month, leap-aware.
pub fn days_in_month(month: &str) -> Option<u32> {
    let start = month_start(month)?;
    Some(last_day_of(start.year(), start.month()))
}

/// Total expense magnitude divided by the calendar day count of the month,
/// regardless of how many days carry data. A zero day count yields 0.
pub fn average_daily_spending(transactions: &[Transaction], days_in_month: u32) -> f64 {
    if days_in_month == 0 {
        return 0.0;
    }
    summarize(transactions).expenses / f64::from(days_in_month)
}

/// Income and expense totals for one month of the trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthTotals {
    pub month: String,
    pub income: f64,
    pub expenses: f64,
}

/// Totals per requested month key, in the order given. Months without
/// activity report zeros so chart series stay aligned.
pub fn trend_by_month(transactions: &[Transaction], months: &[String]) -> Vec<MonthTotals> {
    months
        .iter()
        .map(|month| {
            let summary = summarize(&LedgerFilter::by_month(month).apply(transactions));
            MonthTotals {
                month: month.clone(),
                income: summary.income,
                expenses: summary.expenses,
            }
        })
        .collect()
}

/// Ascending run of `count` month keys ending at the reference date's month.
pub fn recent_month_keys(reference: NaiveDate, count: usize) -> Vec<String> {
    let anchor = reference.with_day(1).unwrap_or(reference);
    (0..count)
        .rev()
        .map(|back| {
            shift_month(anchor, -(back as i32))
                .format("%Y-%m")
                .to_string()
        })
        .collect()
}

/// Distinct-label and volume counters for one month's activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyActivity {
    pub income_sources: usize,
    pub expense_categories: usize,
    pub transaction_count: usize,
}

pub fn monthly_activity(transactions: &[Transaction]) -> MonthlyActivity {
    let mut income_sources = HashSet::new();
    let mut expense_categories = HashSet::new();
    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => income_sources.insert(transaction.label.as_str()),
            TransactionKind::Expense => expense_categories.insert(transaction.label.as_str()),
        };
    }
    MonthlyActivity {
        income_sources: income_sources.len(),
        expense_categories: expense_categories.len(),
        transaction_count: transactions.len(),
    }
}

/// Newest entries first; entries sharing a date keep their stored order.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut recent = transactions.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}

fn month_start(month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").ok()
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(last_day_of(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn last_day_of(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| (first_next - Duration::days(1)).day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: &str, kind: TransactionKind, label: &str, amount: f64) -> Transaction {
        Transaction::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
            label,
            "",
            amount,
        )
    }

    #[test]
    fn delta_reports_percent_change() {
        assert_eq!(month_over_month_delta(110.0, 100.0), 10.0);
        assert_eq!(month_over_month_delta(90.0, 100.0), -10.0);
    }

    #[test]
    fn delta_guards_zero_and_negative_previous() {
        assert_eq!(month_over_month_delta(5.0, 0.0), 0.0);
        assert_eq!(month_over_month_delta(0.0, 0.0), 0.0);
        assert_eq!(month_over_month_delta(5.0, -10.0), 0.0);
    }

    #[test]
    fn balance_delta_divides_by_absolute_previous() {
        // -100 -> 50 is a 150% swing, and the sign must stay positive.
        assert_eq!(balance_delta(50.0, -100.0), 150.0);
        assert_eq!(balance_delta(-150.0, -100.0), -50.0);
        assert_eq!(balance_delta(110.0, 100.0), 10.0);
    }

    #[test]
    fn balance_delta_guards_on_exact_zero_only() {
        assert_eq!(balance_delta(42.0, 0.0), 0.0);
        assert_ne!(balance_delta(42.0, -1.0), 0.0);
    }

    #[test]
    fn previous_month_key_wraps_the_year() {
        assert_eq!(previous_month_key("2024-07").as_deref(), Some("2024-06"));
        assert_eq!(previous_month_key("2024-01").as_deref(), Some("2023-12"));
        assert_eq!(previous_month_key("garbage"), None);
    }

    #[test]
    fn days_in_month_is_leap_aware() {
        assert_eq!(days_in_month("2024-02"), Some(29));
        assert_eq!(days_in_month("2023-02"), Some(28));
        assert_eq!(days_in_month("2024-04"), Some(30));
        assert_eq!(days_in_month("2024-12"), Some(31));
        assert_eq!(days_in_month("2024-13"), None);
    }

    #[test]
    fn average_daily_spending_uses_calendar_days() {
        let rows = vec![
            txn("2024-01-02", TransactionKind::Expense, "Housing", 300.0),
            txn("2024-01-20", TransactionKind::Expense, "Food", 10.0),
            txn("2024-01-05", TransactionKind::Income, "Income", 1000.0),
        ];
        assert_eq!(average_daily_spending(&rows, 31), 10.0);
        assert_eq!(average_daily_spending(&rows, 0), 0.0);
        assert_eq!(average_daily_spending(&[], 30), 0.0);
    }

    #[test]
    fn monthly_changes_compares_against_previous_month() {
        let rows = vec![
            txn("2024-01-10", TransactionKind::Income, "Income", 100.0),
            txn("2024-01-15", TransactionKind::Expense, "Food", 50.0),
            txn("2024-02-10", TransactionKind::Income, "Income", 110.0),
            txn("2024-02-15", TransactionKind::Expense, "Food", 25.0),
        ];
        let changes = monthly_changes(&rows, "2024-02");
        assert_eq!(changes.income_pct, 10.0);
        assert_eq!(changes.expenses_pct, -50.0);
        // Balance moved 50 -> 85 against |50|.
        assert_eq!(changes.balance_pct, 70.0);
    }

    #[test]
    fn monthly_changes_with_no_history_is_all_zeros() {
        let rows = vec![txn("2024-02-10", TransactionKind::Income, "Income", 110.0)];
        let changes = monthly_changes(&rows, "2024-02");
        assert_eq!(changes, MonthlyChanges::default());
    }

    #[test]
    fn trend_reports_zeros_for_silent_months() {
        let rows = vec![
            txn("2024-01-10", TransactionKind::Income, "Income", 100.0),
            txn("2024-03-15", TransactionKind::Expense, "Food", 40.0),
        ];
        let months = vec![
            "2024-01".to_string(),
            "2024-02".to_string(),
            "2024-03".to_string(),
        ];
        let trend = trend_by_month(&rows, &months);
        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0].income, 100.0);
        assert_eq!(trend[1].income, 0.0);
        assert_eq!(trend[1].expenses, 0.0);
        assert_eq!(trend[2].expenses, 40.0);
    }

    #[test]
    fn recent_month_keys_ascend_to_the_reference_month() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let keys = recent_month_keys(reference, 6);
        assert_eq!(
            keys,
            vec!["2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06"]
        );

        let wrapped = recent_month_keys(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), 3);
        assert_eq!(wrapped, vec!["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn monthly_activity_counts_distinct_labels() {
        let rows = vec![
            txn("2024-01-01", TransactionKind::Income, "Income", 3200.0),
            txn("2024-01-12", TransactionKind::Income, "Income", 400.0),
            txn("2024-01-05", TransactionKind::Income, "Investments", 45.0),
            txn("2024-01-03", TransactionKind::Expense, "Food", 140.0),
            txn("2024-01-07", TransactionKind::Expense, "Food", 9.5),
            txn("2024-01-02", TransactionKind::Expense, "Housing", 1200.0),
        ];
        let activity = monthly_activity(&rows);
        assert_eq!(activity.income_sources, 2);
        assert_eq!(activity.expense_categories, 2);
        assert_eq!(activity.transaction_count, 6);
    }

    #[test]
    fn recent_transactions_sorts_newest_first_and_truncates() {
        let rows = vec![
            txn("2024-01-05", TransactionKind::Expense, "Food", 10.0),
            txn("2024-01-20", TransactionKind::Expense, "Food", 20.0),
            txn("2024-01-10", TransactionKind::Income, "Income", 30.0),
        ];
        let recent = recent_transactions(&rows, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
        assert_eq!(recent[1].date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }
}
