//! Change notification fan-out for recorded operations.

use crate::domain::{Displayable, Operation};

/// Notification sink invoked once per successfully recorded operation,
/// after both the operation and account stores are updated.
///
/// The ledger holds observers as an ordered list and calls them
/// synchronously in registration order; panics are not swallowed.
pub trait OperationObserver {
    fn on_operation_created(&self, operation: &Operation);
}

/// Observer that announces each created operation through tracing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl OperationObserver for LogObserver {
    fn on_operation_created(&self, operation: &Operation) {
        tracing::info!(
            id = %operation.id,
            account = %operation.account_id,
            "operation created: {}",
            operation.display_label()
        );
    }
}
