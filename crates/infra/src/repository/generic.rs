//! Identity-keyed CRUD contract.

use std::sync::Arc;

use orderdesk_core::Entity;

/// CRUD over a collection of entities keyed by identity.
///
/// Existence is decided by [`Entity::id`] alone: two values carrying the same
/// id are the same entity for `add`, `update` and `delete`.
pub trait GenericRepository<T: Entity>: Send + Sync {
    /// First stored entity with this id.
    fn get_by_id(&self, id: T::Id) -> Option<T>;

    /// Snapshot of every stored entity. Changing it never touches the store.
    fn get_all(&self) -> Vec<T>;

    /// Store `entity` unless its id is taken. Returns whether it was stored.
    fn add(&self, entity: T) -> bool;

    /// Replace the stored entity with the same id. Returns `false` if none exists.
    fn update(&self, entity: T) -> bool;

    /// Remove the stored entity with the same id. Returns `false` if none exists.
    fn delete(&self, entity: &T) -> bool;

    fn contains(&self, id: T::Id) -> bool {
        self.get_by_id(id).is_some()
    }

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> GenericRepository<T> for Arc<S>
where
    T: Entity,
    S: GenericRepository<T> + ?Sized,
{
    fn get_by_id(&self, id: T::Id) -> Option<T> {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> Vec<T> {
        (**self).get_all()
    }

    fn add(&self, entity: T) -> bool {
        (**self).add(entity)
    }

    fn update(&self, entity: T) -> bool {
        (**self).update(entity)
    }

    fn delete(&self, entity: &T) -> bool {
        (**self).delete(entity)
    }

    fn contains(&self, id: T::Id) -> bool {
        (**self).contains(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
