//! Item validation rules.

use crate::item::Item;

/// Pure predicate deciding whether an item may be persisted.
pub trait ItemValidator: Send + Sync {
    fn is_valid(&self, item: &Item) -> bool;
}

impl<F> ItemValidator for F
where
    F: Fn(&Item) -> bool + Send + Sync,
{
    fn is_valid(&self, item: &Item) -> bool {
        self(item)
    }
}

/// Default rules: the name must not be blank.
///
/// Negative prices cannot be represented (see [`orderdesk_core::Price`]).
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultItemValidator;

impl DefaultItemValidator {
    pub fn new() -> Self {
        Self
    }
}

impl ItemValidator for DefaultItemValidator {
    fn is_valid(&self, item: &Item) -> bool {
        !item.name().trim().is_empty()
    }
}
