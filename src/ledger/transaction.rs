use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::TrackerError;

/// Direction of a ledger entry. Anything that is not income is an expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Maps loose text onto a kind; only the exact word `income` counts.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw == "income" {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// A single ledger entry. `label` carries the income source or expense
/// category; `detail` carries the free-text description, which is often
/// empty for income. `amount` is a magnitude — the sign is always derived
/// from `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub label: String,
    #[serde(default)]
    pub detail: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        label: impl Into<String>,
        detail: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            kind,
            label: label.into(),
            detail: detail.into(),
            amount,
        }
    }

    /// Month key of the entry, formatted `YYYY-MM`.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Amount with the sign implied by the kind.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Caller-facing input for a new entry. The store never validates; callers
/// gate through `validate` (or `into_transaction`) before adding.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub kind: TransactionKind,
    pub label: String,
    pub detail: String,
    pub amount: f64,
}

impl TransactionDraft {
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(TrackerError::Validation(
                "amount must be a positive number".into(),
            ));
        }
        if self.label.trim().is_empty() {
            let field = match self.kind {
                TransactionKind::Income => "income source",
                TransactionKind::Expense => "expense category",
            };
            return Err(TrackerError::Validation(format!(
                "{} must not be empty",
                field
            )));
        }
        if self.kind == TransactionKind::Expense && self.detail.trim().is_empty() {
            return Err(TrackerError::Validation(
                "expense description must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn into_transaction(self) -> Result<Transaction, TrackerError> {
        self.validate()?;
        Ok(Transaction {
            id: Uuid::new_v4(),
            date: self.date,
            kind: self.kind,
            label: self.label,
            detail: self.detail,
            amount: self.amount,
        })
    }
}

/// Field-wise update merged over an existing entry by
/// `TransactionStore::update_by_id`.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub date: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
    pub label: Option<String>,
    pub detail: Option<String>,
    pub amount: Option<f64>,
}

impl TransactionPatch {
    pub fn apply(&self, target: &mut Transaction) {
        if let Some(date) = self.date {
            target.date = date;
        }
        if let Some(kind) = self.kind {
            target.kind = kind;
        }
        if let Some(label) = &self.label {
            target.label = label.clone();
        }
        if let Some(detail) = &self.detail {
            target.detail = detail.clone();
        }
        if let Some(amount) = self.amount {
            target.amount = amount;
        }
    }
}

/// Rebuilds a transaction from an untyped record, defaulting every field
/// that does not parse: bad ids get fresh ones, bad dates become
/// `fallback_date`, bad amounts become zero, and any kind other than
/// `income` becomes an expense. Accepts the legacy field spellings
/// `category`/`source` for `label`, `description` for `detail`, and `type`
/// for `kind`, so snapshots written by older builds keep loading.
pub fn coerce_record(value: &Value, fallback_date: NaiveDate) -> Transaction {
    let id = value
        .get("id")
        .and_then(Value::as_str)
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .unwrap_or_else(Uuid::new_v4);
    let date = value
        .get("date")
        .and_then(Value::as_str)
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .unwrap_or(fallback_date);
    let kind = value
        .get("kind")
        .or_else(|| value.get("type"))
        .and_then(Value::as_str)
        .map(TransactionKind::parse_lenient)
        .unwrap_or(TransactionKind::Expense);
    let label = text_field(value, &["label", "category", "source"]);
    let detail = text_field(value, &["detail", "description"]);
    let amount = numeric_field(value.get("amount"));

    Transaction {
        id,
        date,
        kind,
        label,
        detail,
        amount,
    }
}

fn text_field(value: &Value, names: &[&str]) -> String {
    for name in names {
        match value.get(*name) {
            Some(Value::String(text)) => return text.clone(),
            Some(Value::Number(number)) => return number.to_string(),
            _ => continue,
        }
    }
    String::new()
}

fn numeric_field(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if parsed.is_finite() {
        parsed.abs()
    } else {
        0.0
    }
}
