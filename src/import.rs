//! Snapshot import. The only hard failure is a document whose top level is
//! not a JSON array; individual records are coerced field by field with the
//! same defaulting rules the store applies on load.

use chrono::{Local, NaiveDate};
use serde_json::Value;

use crate::errors::TrackerError;
use crate::ledger::transaction::{coerce_record, Transaction};

/// Parses an exported document back into transactions. Callers decide what
/// to do with the result; on error the current ledger is simply not
/// replaced.
pub fn from_json(raw: &str) -> Result<Vec<Transaction>, TrackerError> {
    from_json_at(raw, Local::now().date_naive())
}

fn from_json_at(raw: &str, fallback_date: NaiveDate) -> Result<Vec<Transaction>, TrackerError> {
    let parsed: Value = serde_json::from_str(raw)
        .map_err(|err| TrackerError::Import(format!("document is not valid JSON: {}", err)))?;
    let records = parsed
        .as_array()
        .ok_or_else(|| TrackerError::Import("document is not a list of transactions".into()))?;
    Ok(records
        .iter()
        .map(|record| coerce_record(record, fallback_date))
        .collect())
}
