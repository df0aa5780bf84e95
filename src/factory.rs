//! Entity construction with freshly generated identities.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Account, Category, FlowKind, Operation};
use crate::errors::LedgerError;

/// Mints new domain entities, one fresh globally-unique identity per call.
///
/// Validation happens here (via the entity constructors) rather than at the
/// store layer; a failed call constructs nothing and writes nothing. The
/// trait exists so tests and embedders can control identity generation.
pub trait DomainFactory {
    fn create_account(&self, name: &str, opening_balance: f64) -> Result<Account, LedgerError>;

    fn create_category(&self, kind: FlowKind, name: &str) -> Result<Category, LedgerError>;

    fn create_operation(
        &self,
        kind: FlowKind,
        account_id: Uuid,
        amount: f64,
        date: DateTime<Utc>,
        description: &str,
        category_id: Uuid,
    ) -> Result<Operation, LedgerError>;
}

/// Stock factory backed by v4 UUID generation.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidFactory;

impl DomainFactory for UuidFactory {
    fn create_account(&self, name: &str, opening_balance: f64) -> Result<Account, LedgerError> {
        Account::new(Uuid::new_v4(), name, opening_balance)
    }

    fn create_category(&self, kind: FlowKind, name: &str) -> Result<Category, LedgerError> {
        Category::new(Uuid::new_v4(), kind, name)
    }

    fn create_operation(
        &self,
        kind: FlowKind,
        account_id: Uuid,
        amount: f64,
        date: DateTime<Utc>,
        description: &str,
        category_id: Uuid,
    ) -> Result<Operation, LedgerError> {
        Operation::new(
            Uuid::new_v4(),
            kind,
            account_id,
            amount,
            date,
            description,
            category_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mints_distinct_identities() {
        let factory = UuidFactory;
        let first = factory.create_account("Checking", 0.0).unwrap();
        let second = factory.create_account("Checking", 0.0).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn surfaces_entity_validation() {
        let factory = UuidFactory;
        assert_eq!(
            factory.create_category(FlowKind::Expense, " ").unwrap_err(),
            LedgerError::EmptyName
        );
        let err = factory
            .create_operation(
                FlowKind::Income,
                Uuid::new_v4(),
                -10.0,
                Utc::now(),
                "",
                Uuid::new_v4(),
            )
            .unwrap_err();
        assert_eq!(err, LedgerError::NegativeAmount(-10.0));
    }
}
