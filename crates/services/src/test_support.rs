//! Hand-written fakes for service tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use orderdesk_core::{ClientId, Entity, ItemId, OrderId, OrderItemId};
use orderdesk_infra::{GenericRepository, ItemRepository, OrderItemRepository, OrderRepository};
use orderdesk_orders::{Order, OrderItem};

/// Wraps any store and counts every call made against it.
#[derive(Debug, Default)]
pub struct Counting<R> {
    inner: R,
    calls: AtomicUsize,
}

impl<R> Counting<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl<T, R> GenericRepository<T> for Counting<R>
where
    T: Entity,
    R: GenericRepository<T>,
{
    fn get_by_id(&self, id: T::Id) -> Option<T> {
        self.hit();
        self.inner.get_by_id(id)
    }

    fn get_all(&self) -> Vec<T> {
        self.hit();
        self.inner.get_all()
    }

    fn add(&self, entity: T) -> bool {
        self.hit();
        self.inner.add(entity)
    }

    fn update(&self, entity: T) -> bool {
        self.hit();
        self.inner.update(entity)
    }

    fn delete(&self, entity: &T) -> bool {
        self.hit();
        self.inner.delete(entity)
    }
}

impl<R: ItemRepository> ItemRepository for Counting<R> {}

impl<R: OrderRepository> OrderRepository for Counting<R> {
    fn get_by_client_id(&self, client_id: ClientId) -> Vec<Order> {
        self.hit();
        self.inner.get_by_client_id(client_id)
    }
}

impl<R: OrderItemRepository> OrderItemRepository for Counting<R> {
    fn get_by_item_id(&self, item_id: ItemId) -> Option<OrderItem> {
        self.hit();
        self.inner.get_by_item_id(item_id)
    }

    fn get_by_order_id(&self, order_id: OrderId) -> Vec<OrderItem> {
        self.hit();
        self.inner.get_by_order_id(order_id)
    }

    fn next_id(&self) -> OrderItemId {
        self.hit();
        self.inner.next_id()
    }
}

/// Order-item store whose writes always fail, for checking that services
/// report the repository's answer rather than assuming success.
#[derive(Debug, Default)]
pub struct RejectingOrderItems;

impl GenericRepository<OrderItem> for RejectingOrderItems {
    fn get_by_id(&self, _id: OrderItemId) -> Option<OrderItem> {
        None
    }

    fn get_all(&self) -> Vec<OrderItem> {
        vec![]
    }

    fn add(&self, _entity: OrderItem) -> bool {
        false
    }

    fn update(&self, _entity: OrderItem) -> bool {
        false
    }

    fn delete(&self, _entity: &OrderItem) -> bool {
        false
    }
}

impl OrderItemRepository for RejectingOrderItems {
    fn get_by_item_id(&self, _item_id: ItemId) -> Option<OrderItem> {
        None
    }

    fn get_by_order_id(&self, _order_id: OrderId) -> Vec<OrderItem> {
        vec![]
    }
}
