use crate::ledger::transaction::Transaction;

/// Month and free-text constraints over a transaction list. Blank inputs
/// mean "no constraint"; the search text is matched case-insensitively as a
/// substring of the label or the detail.
#[derive(Debug, Clone, Default)]
pub struct LedgerFilter {
    month: Option<String>,
    search: Option<String>,
}

impl LedgerFilter {
    pub fn new(month: Option<&str>, search: Option<&str>) -> Self {
        let month = month
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(str::to_string);
        let search = search
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map(str::to_lowercase);
        Self { month, search }
    }

    pub fn by_month(month: &str) -> Self {
        Self::new(Some(month), None)
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(month) = &self.month {
            if transaction.month_key() != *month {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let label_hit = transaction.label.to_lowercase().contains(search);
            let detail_hit = transaction.detail.to_lowercase().contains(search);
            if !label_hit && !detail_hit {
                return false;
            }
        }
        true
    }

    /// Keeps matching entries in their original order.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| self.matches(txn))
            .cloned()
            .collect()
    }
}
