//! Snapshot export: pretty JSON for re-import, CSV for spreadsheets.

use std::io::Write;

use crate::errors::TrackerError;
use crate::ledger::transaction::Transaction;

const CSV_HEADERS: [&str; 5] = ["Date", "Type", "Category/Source", "Description", "Amount"];

/// Pretty-printed JSON array carrying every field, suitable for `import`.
pub fn to_json(transactions: &[Transaction]) -> Result<String, TrackerError> {
    Ok(serde_json::to_string_pretty(transactions)?)
}

/// CSV document with the fixed `Date,Type,Category/Source,Description,Amount`
/// header and two-decimal amounts.
pub fn to_csv(transactions: &[Transaction]) -> Result<String, TrackerError> {
    let mut buffer = Vec::new();
    write_csv(transactions, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|err| TrackerError::Storage(format!("CSV export was not UTF-8: {}", err)))
}

/// Streams the CSV export into `writer`.
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), TrackerError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADERS)?;
    for transaction in transactions {
        csv_writer.write_record([
            transaction.date.format("%Y-%m-%d").to_string(),
            transaction.kind.as_str().to_string(),
            transaction.label.clone(),
            transaction.detail.clone(),
            format!("{:.2}", transaction.amount),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::transaction::TransactionKind;
    use chrono::NaiveDate;

    fn txn(date: &str, kind: TransactionKind, label: &str, detail: &str, amount: f64) -> Transaction {
        Transaction::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
            label,
            detail,
            amount,
        )
    }

    #[test]
    fn json_export_is_a_pretty_array() {
        let rows = vec![txn(
            "2024-01-01",
            TransactionKind::Income,
            "Income",
            "Salary",
            3200.0,
        )];
        let json = to_json(&rows).expect("export");
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"label\": \"Income\""));
        assert!(json.contains("\"kind\": \"income\""));
        assert!(json.contains("\"date\": \"2024-01-01\""));
    }

    #[test]
    fn empty_json_export_is_an_empty_array() {
        assert_eq!(to_json(&[]).expect("export"), "[]");
    }

    #[test]
    fn csv_export_matches_the_fixed_shape() {
        let rows = vec![
            txn("2024-01-01", TransactionKind::Income, "Income", "", 3200.0),
            txn(
                "2024-01-07",
                TransactionKind::Expense,
                "Food",
                "Coffee",
                9.5,
            ),
        ];
        let csv = to_csv(&rows).expect("export");
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Date,Type,Category/Source,Description,Amount")
        );
        assert_eq!(lines.next(), Some("2024-01-01,income,Income,,3200.00"));
        assert_eq!(lines.next(), Some("2024-01-07,expense,Food,Coffee,9.50"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn csv_quotes_fields_containing_commas() {
        let rows = vec![txn(
            "2024-01-18",
            TransactionKind::Expense,
            "Food",
            "Dinner, drinks",
            55.0,
        )];
        let csv = to_csv(&rows).expect("export");
        assert!(csv.contains("\"Dinner, drinks\""));
    }
}
