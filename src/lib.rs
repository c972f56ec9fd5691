#![doc(test(attr(deny(warnings))))]

//! Tracker Core offers the transaction store, aggregation, and snapshot
//! exchange primitives that power personal income/expense tracking front ends.

pub mod config;
pub mod currency;
pub mod errors;
pub mod export;
pub mod import;
pub mod ledger;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tracker Core tracing initialized.");
    });
}
