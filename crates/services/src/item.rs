use orderdesk_core::ItemId;
use orderdesk_infra::{ItemRepository, OrderItemRepository};
use orderdesk_items::{Item, ItemValidator};

/// Item catalogue rules. Ordered items are frozen: they cannot be deleted.
#[derive(Debug)]
pub struct ItemService<I, OI, V> {
    items: I,
    order_items: OI,
    validator: V,
}

impl<I, OI, V> ItemService<I, OI, V> {
    pub fn new(items: I, order_items: OI, validator: V) -> Self {
        Self {
            items,
            order_items,
            validator,
        }
    }

    pub fn into_parts(self) -> (I, OI, V) {
        (self.items, self.order_items, self.validator)
    }
}

impl<I, OI, V> ItemService<I, OI, V>
where
    I: ItemRepository,
    OI: OrderItemRepository,
    V: ItemValidator,
{
    pub fn get_all_items(&self) -> Vec<Item> {
        self.items.get_all()
    }

    pub fn get_item(&self, id: ItemId) -> Option<Item> {
        self.items.get_by_id(id)
    }

    /// Items not linked to any order.
    pub fn get_all_not_ordered_items(&self) -> Vec<Item> {
        self.items
            .get_all()
            .into_iter()
            .filter(|item| !self.is_ordered(item))
            .collect()
    }

    pub fn add_item(&self, item: Option<Item>) -> bool {
        let Some(item) = item else {
            return false;
        };
        if !self.validator.is_valid(&item) {
            tracing::debug!("item {} rejected by validator", item.id_typed());
            return false;
        }

        let id = item.id_typed();
        let added = self.items.add(item);
        if added {
            tracing::info!("item {} added", id);
        }
        added
    }

    pub fn update_item(&self, item: &Item) -> bool {
        if !self.validator.is_valid(item) {
            tracing::debug!("item {} update rejected by validator", item.id_typed());
            return false;
        }
        if self.items.get_by_id(item.id_typed()).is_none() {
            tracing::debug!("item {} update rejected: unknown item", item.id_typed());
            return false;
        }

        let updated = self.items.update(item.clone());
        if updated {
            tracing::info!("item {} updated", item.id_typed());
        }
        updated
    }

    pub fn delete_item(&self, item: &Item) -> bool {
        if self.is_ordered(item) {
            tracing::debug!("item {} not deleted: already ordered", item.id_typed());
            return false;
        }

        let deleted = self.items.delete(item);
        if deleted {
            tracing::info!("item {} deleted", item.id_typed());
        }
        deleted
    }

    fn is_ordered(&self, item: &Item) -> bool {
        self.order_items.get_by_item_id(item.id_typed()).is_some()
    }
}
