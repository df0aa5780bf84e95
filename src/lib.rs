#![doc(test(attr(deny(warnings))))]

//! Fin Core is an in-memory personal finance ledger: bank accounts,
//! categorized income/expense operations, and account balances derived from
//! the operation history.
//!
//! The [`ledger::Ledger`] facade is the entry point. It combines a
//! [`factory::DomainFactory`], one store per entity type, and an ordered list
//! of [`observer::OperationObserver`]s, and keeps every account's cached
//! balance equal to the signed sum of the operations recorded against it.

pub mod command;
pub mod domain;
pub mod errors;
pub mod factory;
pub mod ledger;
pub mod observer;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fin Core tracing initialized.");
    });
}
