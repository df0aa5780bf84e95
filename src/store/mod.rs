//! Keyed entity storage. Stores are dumb collections: no validation happens
//! here, and ordering of listings is unspecified (stable between mutations
//! within a process run).

pub mod memory;

pub use memory::MemoryStore;

use uuid::Uuid;

use crate::domain::{Identifiable, Operation};

/// An in-memory keyed collection for one entity type.
///
/// All methods are O(1) average except [`Store::get_all`].
pub trait Store<T: Identifiable> {
    fn add(&mut self, entity: T);

    fn get(&self, id: Uuid) -> Option<&T>;

    fn get_all(&self) -> Vec<&T>;

    /// Replaces the entity with the same identity; inserts when the identity
    /// is not present (upsert).
    fn update(&mut self, entity: T);

    /// No-op when the identity is absent.
    fn remove(&mut self, id: Uuid);
}

/// Operation storage with a secondary lookup by owning account.
pub trait OperationStore: Store<Operation> {
    /// All operations attributed to `account_id`. O(n) scan.
    fn by_account(&self, account_id: Uuid) -> Vec<&Operation> {
        self.get_all()
            .into_iter()
            .filter(|operation| operation.account_id == account_id)
            .collect()
    }
}
