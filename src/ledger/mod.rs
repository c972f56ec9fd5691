//! Transaction model, the owning store, and demo data helpers.

pub mod sample;
pub mod store;
pub mod transaction;

pub use sample::sample_transactions;
pub use store::TransactionStore;
pub use transaction::{
    coerce_record, Transaction, TransactionDraft, TransactionKind, TransactionPatch,
};
