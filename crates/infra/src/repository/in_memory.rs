//! `Vec`-backed in-memory repository.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use orderdesk_core::Entity;

use super::generic::GenericRepository;

/// In-memory, `Vec`-backed repository.
///
/// Lookups are linear scans and insertion order is kept, including across
/// `update` (entities are replaced in place). Intended for tests/dev.
#[derive(Debug)]
pub struct InMemoryGenericRepository<T> {
    entities: RwLock<Vec<T>>,
}

impl<T> InMemoryGenericRepository<T> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Option<RwLockReadGuard<'_, Vec<T>>> {
        match self.entities.read() {
            Ok(guard) => Some(guard),
            Err(_) => {
                tracing::error!("repository lock poisoned; treating store as unreadable");
                None
            }
        }
    }

    fn write(&self) -> Option<RwLockWriteGuard<'_, Vec<T>>> {
        match self.entities.write() {
            Ok(guard) => Some(guard),
            Err(_) => {
                tracing::error!("repository lock poisoned; rejecting write");
                None
            }
        }
    }
}

impl<T> Default for InMemoryGenericRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryGenericRepository<T>
where
    T: Entity + Clone,
{
    /// Seed a repository. Later entities with an already-seen id are dropped,
    /// exactly as repeated `add` calls would.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let mut seeded: Vec<T> = Vec::new();
        for entity in entities {
            if position_of(&seeded, *entity.id()).is_none() {
                seeded.push(entity);
            }
        }
        Self {
            entities: RwLock::new(seeded),
        }
    }

    /// First entity matching `predicate`, in insertion order.
    pub fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let entities = self.read()?;
        let found = entities.iter().find(|&e| predicate(e)).cloned();
        found
    }

    /// Every entity matching `predicate`, in insertion order.
    pub fn find_all(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let Some(entities) = self.read() else {
            return vec![];
        };
        let matching = entities.iter().filter(|&e| predicate(e)).cloned().collect();
        matching
    }
}

fn position_of<T: Entity>(entities: &[T], id: T::Id) -> Option<usize> {
    entities.iter().position(|e| *e.id() == id)
}

impl<T> GenericRepository<T> for InMemoryGenericRepository<T>
where
    T: Entity + Clone + Send + Sync,
{
    fn get_by_id(&self, id: T::Id) -> Option<T> {
        self.find_first(|e| *e.id() == id)
    }

    fn get_all(&self) -> Vec<T> {
        self.read().map(|entities| entities.clone()).unwrap_or_default()
    }

    fn add(&self, entity: T) -> bool {
        let Some(mut entities) = self.write() else {
            return false;
        };
        if position_of(entities.as_slice(), *entity.id()).is_some() {
            tracing::debug!(id = %entity.id(), "add rejected: id already stored");
            return false;
        }
        entities.push(entity);
        true
    }

    fn update(&self, entity: T) -> bool {
        let Some(mut entities) = self.write() else {
            return false;
        };
        match position_of(entities.as_slice(), *entity.id()) {
            Some(idx) => {
                entities[idx] = entity;
                true
            }
            None => {
                tracing::debug!(id = %entity.id(), "update rejected: id not stored");
                false
            }
        }
    }

    fn delete(&self, entity: &T) -> bool {
        let Some(mut entities) = self.write() else {
            return false;
        };
        match position_of(entities.as_slice(), *entity.id()) {
            Some(idx) => {
                entities.remove(idx);
                true
            }
            None => {
                tracing::debug!(id = %entity.id(), "delete rejected: id not stored");
                false
            }
        }
    }

    fn contains(&self, id: T::Id) -> bool {
        self.read()
            .map(|entities| position_of(entities.as_slice(), id).is_some())
            .unwrap_or(false)
    }

    fn len(&self) -> usize {
        self.read().map(|entities| entities.len()).unwrap_or(0)
    }
}
