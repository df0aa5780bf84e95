//! The ledger facade: the one place where multi-entity consistency is
//! enforced.
//!
//! Every balance-affecting call follows the same protocol: validate, read a
//! snapshot of the owning account, reverse the old effect and/or apply the
//! new one, write the account back, persist the operation, then notify.
//! Entities are plain values; the facade never mutates through a reference
//! aliased into a store.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{validate_name, Account, Category, FlowKind, Operation};
use crate::errors::LedgerError;
use crate::factory::{DomainFactory, UuidFactory};
use crate::observer::OperationObserver;
use crate::store::{MemoryStore, OperationStore, Store};

/// Field values applied to an existing operation by [`Ledger::update_operation`].
///
/// The owning account is deliberately absent: operations never move between
/// accounts.
#[derive(Debug, Clone)]
pub struct OperationChanges {
    pub kind: FlowKind,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category_id: Uuid,
}

/// Facade coordinating the entity stores, the factory, and the observer
/// list.
///
/// Holds no entity state of its own. Outside of an in-flight call, each
/// account's balance equals its opening balance plus the signed effects of
/// all stored operations attributed to it; account references are enforced
/// (see [`Ledger::delete_account`] and [`Ledger::create_operation`]) so the
/// invariant holds unconditionally.
///
/// Designed for single-threaded synchronous use: every call runs to
/// completion before returning, and the account read-modify-write inside
/// the operation calls is never interleaved.
pub struct Ledger {
    accounts: Box<dyn Store<Account>>,
    categories: Box<dyn Store<Category>>,
    operations: Box<dyn OperationStore>,
    factory: Box<dyn DomainFactory>,
    observers: Vec<Box<dyn OperationObserver>>,
}

impl Ledger {
    /// Builds a ledger from concrete collaborator implementations.
    pub fn new(
        accounts: Box<dyn Store<Account>>,
        categories: Box<dyn Store<Category>>,
        operations: Box<dyn OperationStore>,
        factory: Box<dyn DomainFactory>,
    ) -> Self {
        Self {
            accounts,
            categories,
            operations,
            factory,
            observers: Vec::new(),
        }
    }

    /// Convenience constructor wiring the stock in-memory stores and the
    /// UUID factory.
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(MemoryStore::new()),
            Box::new(MemoryStore::new()),
            Box::new(MemoryStore::new()),
            Box::new(UuidFactory),
        )
    }

    /// Appends an observer to the notification list. Observers fire in
    /// registration order.
    pub fn register_observer(&mut self, observer: Box<dyn OperationObserver>) {
        self.observers.push(observer);
    }

    pub fn create_account(
        &mut self,
        name: &str,
        opening_balance: f64,
    ) -> Result<Account, LedgerError> {
        let account = self.factory.create_account(name, opening_balance)?;
        self.accounts.add(account.clone());
        debug!(id = %account.id, "account created");
        Ok(account)
    }

    pub fn create_category(&mut self, kind: FlowKind, name: &str) -> Result<Category, LedgerError> {
        let category = self.factory.create_category(kind, name)?;
        self.categories.add(category.clone());
        debug!(id = %category.id, "category created");
        Ok(category)
    }

    /// Records an operation and applies its signed effect to the owning
    /// account's balance, then notifies every registered observer.
    ///
    /// Fails with [`LedgerError::UnknownAccount`] before any write when the
    /// account does not exist. The category id is an unchecked reference.
    pub fn create_operation(
        &mut self,
        kind: FlowKind,
        account_id: Uuid,
        amount: f64,
        date: DateTime<Utc>,
        description: &str,
        category_id: Uuid,
    ) -> Result<Operation, LedgerError> {
        let mut account = self.account_snapshot(account_id)?;
        let operation = self
            .factory
            .create_operation(kind, account_id, amount, date, description, category_id)?;

        self.operations.add(operation.clone());
        account.apply(operation.signed_effect());
        self.accounts.update(account);
        debug!(id = %operation.id, account = %account_id, "operation recorded");

        for observer in &self.observers {
            observer.on_operation_created(&operation);
        }
        Ok(operation)
    }

    /// Renames an account. `Ok(None)` when the account does not exist.
    pub fn update_account(
        &mut self,
        id: Uuid,
        new_name: &str,
    ) -> Result<Option<Account>, LedgerError> {
        validate_name(new_name)?;
        let Some(mut account) = self.accounts.get(id).cloned() else {
            return Ok(None);
        };
        account.name = new_name.to_string();
        self.accounts.update(account.clone());
        Ok(Some(account))
    }

    /// Renames and retypes a category. `Ok(None)` when it does not exist.
    pub fn update_category(
        &mut self,
        id: Uuid,
        new_name: &str,
        new_kind: FlowKind,
    ) -> Result<Option<Category>, LedgerError> {
        validate_name(new_name)?;
        let Some(mut category) = self.categories.get(id).cloned() else {
            return Ok(None);
        };
        category.name = new_name.to_string();
        category.kind = new_kind;
        self.categories.update(category.clone());
        Ok(Some(category))
    }

    /// Rewrites an operation's mutable fields, atomically reversing its old
    /// balance effect and applying the new one. `Ok(None)` when the
    /// operation does not exist.
    pub fn update_operation(
        &mut self,
        id: Uuid,
        changes: OperationChanges,
    ) -> Result<Option<Operation>, LedgerError> {
        Operation::validate_amount(changes.amount)?;
        let Some(mut operation) = self.operations.get(id).cloned() else {
            return Ok(None);
        };
        let mut account = self.account_snapshot(operation.account_id)?;

        account.apply(-operation.signed_effect());
        operation.kind = changes.kind;
        operation.amount = changes.amount;
        operation.date = changes.date;
        operation.description = changes.description;
        operation.category_id = changes.category_id;
        account.apply(operation.signed_effect());

        self.accounts.update(account);
        self.operations.update(operation.clone());
        debug!(id = %operation.id, "operation updated");
        Ok(Some(operation))
    }

    /// Removes an account. `Ok(false)` when it does not exist; fails with
    /// [`LedgerError::AccountInUse`] while operations still reference it, so
    /// balances never silently diverge.
    pub fn delete_account(&mut self, id: Uuid) -> Result<bool, LedgerError> {
        if self.accounts.get(id).is_none() {
            return Ok(false);
        }
        if !self.operations.by_account(id).is_empty() {
            return Err(LedgerError::AccountInUse(id));
        }
        self.accounts.remove(id);
        debug!(%id, "account deleted");
        Ok(true)
    }

    /// Removes a category, independent of operations referencing it.
    /// `false` when it does not exist.
    pub fn delete_category(&mut self, id: Uuid) -> bool {
        if self.categories.get(id).is_none() {
            return false;
        }
        self.categories.remove(id);
        debug!(%id, "category deleted");
        true
    }

    /// Removes an operation, reversing its balance effect first.
    /// `Ok(false)` when it does not exist.
    pub fn delete_operation(&mut self, id: Uuid) -> Result<bool, LedgerError> {
        let Some(operation) = self.operations.get(id).cloned() else {
            return Ok(false);
        };
        let mut account = self.account_snapshot(operation.account_id)?;
        account.apply(-operation.signed_effect());
        self.accounts.update(account);
        self.operations.remove(id);
        debug!(%id, "operation deleted");
        Ok(true)
    }

    /// Transaction history for one account. Ordering is unspecified.
    pub fn operations_for_account(&self, account_id: Uuid) -> Vec<&Operation> {
        self.operations.by_account(account_id)
    }

    /// Net of income minus expense over the inclusive `[start, end]` date
    /// range, across all accounts. O(n) scan.
    pub fn income_expense_difference(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
        self.operations
            .get_all()
            .into_iter()
            .filter(|operation| operation.date >= start && operation.date <= end)
            .map(Operation::signed_effect)
            .sum()
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.get(id)
    }

    pub fn operation(&self, id: Uuid) -> Option<&Operation> {
        self.operations.get(id)
    }

    pub fn accounts(&self) -> Vec<&Account> {
        self.accounts.get_all()
    }

    pub fn categories(&self) -> Vec<&Category> {
        self.categories.get_all()
    }

    pub fn operations(&self) -> Vec<&Operation> {
        self.operations.get_all()
    }

    fn account_snapshot(&self, id: Uuid) -> Result<Account, LedgerError> {
        self.accounts
            .get(id)
            .cloned()
            .ok_or(LedgerError::UnknownAccount(id))
    }
}
