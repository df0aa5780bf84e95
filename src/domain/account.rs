use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{validate_name, Displayable, Identifiable};
use crate::errors::LedgerError;

/// A bank account tracked within the ledger.
///
/// `balance` is a cached derived quantity: outside of an in-flight facade
/// call it equals the opening balance plus the signed effects of every
/// operation currently attributed to this account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub balance: f64,
}

impl Account {
    /// Creates an account seeded with an opening balance. The seed is not
    /// backed by any operation and is not validated against history.
    pub fn new(id: Uuid, name: impl Into<String>, opening_balance: f64) -> Result<Self, LedgerError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id,
            name,
            balance: opening_balance,
        })
    }

    /// Applies a signed effect to the cached balance.
    pub fn apply(&mut self, delta: f64) {
        self.balance += delta;
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({:.2})", self.name, self.balance)
    }
}
