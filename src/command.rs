//! Deferred units of work against the ledger, with a timing decorator.

use std::time::Instant;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{FlowKind, Operation};
use crate::errors::LedgerError;
use crate::ledger::Ledger;

/// A unit of work that can be prepared up front and executed later against
/// a ledger.
pub trait Command {
    type Output;

    fn execute(&mut self, ledger: &mut Ledger) -> Result<Self::Output, LedgerError>;
}

/// Captures the parameters of an operation to record on execution.
#[derive(Debug, Clone)]
pub struct CreateOperationCommand {
    pub kind: FlowKind,
    pub account_id: Uuid,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category_id: Uuid,
}

impl Command for CreateOperationCommand {
    type Output = Operation;

    fn execute(&mut self, ledger: &mut Ledger) -> Result<Operation, LedgerError> {
        ledger.create_operation(
            self.kind,
            self.account_id,
            self.amount,
            self.date,
            &self.description,
            self.category_id,
        )
    }
}

/// Decorator that reports the wall time an inner command took, through
/// tracing. The inner result passes through unchanged.
pub struct Timed<C> {
    inner: C,
    label: &'static str,
}

impl<C> Timed<C> {
    pub fn new(inner: C, label: &'static str) -> Self {
        Self { inner, label }
    }
}

impl<C: Command> Command for Timed<C> {
    type Output = C::Output;

    fn execute(&mut self, ledger: &mut Ledger) -> Result<C::Output, LedgerError> {
        let started = Instant::now();
        let result = self.inner.execute(ledger);
        tracing::info!(
            command = self.label,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "command finished"
        );
        result
    }
}
