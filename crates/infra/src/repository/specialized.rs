//! Per-entity repository contracts and their in-memory versions.
//!
//! The in-memory versions are the generic store instantiated for each entity;
//! domain queries are scans over that same store.

use std::sync::Arc;

use orderdesk_clients::Client;
use orderdesk_core::{ClientId, Entity, ItemId, OrderId, OrderItemId};
use orderdesk_items::Item;
use orderdesk_orders::{Order, OrderItem};

use super::generic::GenericRepository;
use super::in_memory::InMemoryGenericRepository;

pub trait ClientRepository: GenericRepository<Client> {}

pub trait ItemRepository: GenericRepository<Item> {}

pub trait OrderRepository: GenericRepository<Order> {
    /// All orders owned by `client_id` (empty if none).
    fn get_by_client_id(&self, client_id: ClientId) -> Vec<Order>;
}

pub trait OrderItemRepository: GenericRepository<OrderItem> {
    /// The link for `item_id`, if the item has been ordered.
    ///
    /// Items are ordered at most once, so there is at most one match.
    fn get_by_item_id(&self, item_id: ItemId) -> Option<OrderItem>;

    /// All links belonging to `order_id`.
    fn get_by_order_id(&self, order_id: OrderId) -> Vec<OrderItem>;

    /// An id no stored link uses: one past the highest stored id.
    fn next_id(&self) -> OrderItemId {
        let highest = self
            .get_all()
            .iter()
            .map(|link| link.id().get())
            .max()
            .unwrap_or(0);
        OrderItemId::new(highest.saturating_add(1))
    }
}

pub type InMemoryClientRepository = InMemoryGenericRepository<Client>;
pub type InMemoryItemRepository = InMemoryGenericRepository<Item>;
pub type InMemoryOrderRepository = InMemoryGenericRepository<Order>;
pub type InMemoryOrderItemRepository = InMemoryGenericRepository<OrderItem>;

impl ClientRepository for InMemoryClientRepository {}

impl ItemRepository for InMemoryItemRepository {}

impl OrderRepository for InMemoryOrderRepository {
    fn get_by_client_id(&self, client_id: ClientId) -> Vec<Order> {
        self.find_all(|order| order.belongs_to(client_id))
    }
}

impl OrderItemRepository for InMemoryOrderItemRepository {
    fn get_by_item_id(&self, item_id: ItemId) -> Option<OrderItem> {
        self.find_first(|link| link.item_id() == item_id)
    }

    fn get_by_order_id(&self, order_id: OrderId) -> Vec<OrderItem> {
        self.find_all(|link| link.order_id() == order_id)
    }
}

impl<S: ClientRepository + ?Sized> ClientRepository for Arc<S> {}

impl<S: ItemRepository + ?Sized> ItemRepository for Arc<S> {}

impl<S: OrderRepository + ?Sized> OrderRepository for Arc<S> {
    fn get_by_client_id(&self, client_id: ClientId) -> Vec<Order> {
        (**self).get_by_client_id(client_id)
    }
}

impl<S: OrderItemRepository + ?Sized> OrderItemRepository for Arc<S> {
    fn get_by_item_id(&self, item_id: ItemId) -> Option<OrderItem> {
        (**self).get_by_item_id(item_id)
    }

    fn get_by_order_id(&self, order_id: OrderId) -> Vec<OrderItem> {
        (**self).get_by_order_id(order_id)
    }

    fn next_id(&self) -> OrderItemId {
        (**self).next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u32, client: u32) -> Order {
        Order::new(OrderId::new(id), ClientId::new(client))
    }

    fn link(id: u32, order: u32, item: u32) -> OrderItem {
        OrderItem::new(OrderItemId::new(id), OrderId::new(order), ItemId::new(item))
    }

    #[test]
    fn get_by_client_id_returns_only_that_clients_orders() {
        let repo = InMemoryOrderRepository::with_entities([order(1, 10), order(2, 20), order(3, 10)]);

        assert_eq!(repo.get_by_client_id(ClientId::new(10)), vec![order(1, 10), order(3, 10)]);
        assert!(repo.get_by_client_id(ClientId::new(99)).is_empty());
    }

    #[test]
    fn get_by_item_id_finds_the_link() {
        let repo = InMemoryOrderItemRepository::new();
        assert!(repo.get_by_item_id(ItemId::new(5)).is_none());

        let stored = link(1, 1, 5);
        assert!(repo.add(stored.clone()));
        assert_eq!(repo.get_by_item_id(ItemId::new(5)), Some(stored));
        assert!(repo.get_by_item_id(ItemId::new(1)).is_none());
    }

    #[test]
    fn get_by_order_id_collects_links() {
        let repo = InMemoryOrderItemRepository::with_entities([
            link(1, 1, 1),
            link(2, 2, 2),
            link(3, 1, 3),
        ]);

        let items: Vec<ItemId> = repo
            .get_by_order_id(OrderId::new(1))
            .iter()
            .map(OrderItem::item_id)
            .collect();
        assert_eq!(items, vec![ItemId::new(1), ItemId::new(3)]);
    }

    #[test]
    fn next_id_is_past_every_stored_link() {
        let repo = InMemoryOrderItemRepository::new();
        assert_eq!(repo.next_id(), OrderItemId::new(1));

        assert!(repo.add(link(7, 1, 2)));
        assert!(repo.add(link(3, 1, 9)));
        assert_eq!(repo.next_id(), OrderItemId::new(8));
        assert!(!repo.contains(repo.next_id()));
    }

    #[test]
    fn queries_work_through_arc() {
        let repo: Arc<InMemoryOrderRepository> = Arc::new(InMemoryOrderRepository::new());
        assert!(repo.add(order(1, 10)));

        fn count<R: OrderRepository>(repo: &R) -> usize {
            repo.get_by_client_id(ClientId::new(10)).len()
        }
        assert_eq!(count(&repo), 1);
    }
}
