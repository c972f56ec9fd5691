use chrono::Local;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::storage::{KeyValueStore, TRANSACTIONS_KEY};

use super::transaction::{coerce_record, Transaction, TransactionPatch};

/// Owns the in-memory transaction list and mirrors every change to the
/// backing store under a fixed key. Persistence is full-snapshot: each
/// mutation rewrites the whole list. The in-memory state stays
/// authoritative when a write fails; the failure is logged, not raised.
pub struct TransactionStore {
    storage: Box<dyn KeyValueStore>,
    entries: Vec<Transaction>,
}

impl TransactionStore {
    /// Loads the persisted snapshot, degrading to an empty ledger when the
    /// payload is missing or unreadable.
    pub fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let entries = load_snapshot(storage.as_ref());
        Self { storage, entries }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Transaction> {
        self.entries.iter().find(|txn| txn.id == id)
    }

    /// Appends an entry and persists. Returns the entry id.
    pub fn add(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.entries.push(transaction);
        self.persist();
        id
    }

    /// Merges `patch` over the entry with `id`. An unknown id is not an
    /// error: the store is left untouched, nothing is persisted, and the
    /// miss is reported through the boolean return.
    pub fn update_by_id(&mut self, id: Uuid, patch: &TransactionPatch) -> bool {
        match self.entries.iter_mut().find(|txn| txn.id == id) {
            Some(entry) => {
                patch.apply(entry);
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Drops the entry with `id` if present. The snapshot is rewritten
    /// whether or not anything matched.
    pub fn remove_by_id(&mut self, id: Uuid) {
        self.entries.retain(|txn| txn.id != id);
        self.persist();
    }

    /// Replaces the whole ledger (the import path) and persists.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.entries = transactions;
        self.persist();
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.entries) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("failed to serialize transaction snapshot: {}", err);
                return;
            }
        };
        if let Err(err) = self.storage.write(TRANSACTIONS_KEY, &payload) {
            warn!("failed to persist transaction snapshot: {}", err);
        }
    }
}

fn load_snapshot(storage: &dyn KeyValueStore) -> Vec<Transaction> {
    let raw = match storage.read(TRANSACTIONS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!("failed to read transaction snapshot: {}", err);
            return Vec::new();
        }
    };
    let parsed: Value = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!("discarding malformed transaction snapshot: {}", err);
            return Vec::new();
        }
    };
    let records = match parsed.as_array() {
        Some(records) => records,
        None => {
            warn!("discarding non-list transaction snapshot");
            return Vec::new();
        }
    };
    let today = Local::now().date_naive();
    records
        .iter()
        .map(|record| coerce_record(record, today))
        .collect()
}
