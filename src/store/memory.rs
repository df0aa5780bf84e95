use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{Identifiable, Operation};

use super::{OperationStore, Store};

/// HashMap-backed store, the stock implementation for every entity type.
#[derive(Debug)]
pub struct MemoryStore<T> {
    entries: HashMap<Uuid, T>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identifiable> Store<T> for MemoryStore<T> {
    fn add(&mut self, entity: T) {
        self.entries.insert(entity.id(), entity);
    }

    fn get(&self, id: Uuid) -> Option<&T> {
        self.entries.get(&id)
    }

    fn get_all(&self) -> Vec<&T> {
        self.entries.values().collect()
    }

    fn update(&mut self, entity: T) {
        self.entries.insert(entity.id(), entity);
    }

    fn remove(&mut self, id: Uuid) {
        self.entries.remove(&id);
    }
}

impl OperationStore for MemoryStore<Operation> {}
