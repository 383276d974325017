use orderdesk_clients::Client;
use orderdesk_core::{DomainResult, require};
use orderdesk_infra::{ItemRepository, OrderItemRepository, OrderRepository};
use orderdesk_items::Item;
use orderdesk_orders::{Order, OrderItem};

/// Order queries and the "an item is ordered at most once" rule.
#[derive(Debug)]
pub struct OrderService<O, OI, I> {
    orders: O,
    order_items: OI,
    items: I,
}

impl<O, OI, I> OrderService<O, OI, I> {
    pub fn new(orders: O, order_items: OI, items: I) -> Self {
        Self {
            orders,
            order_items,
            items,
        }
    }

    pub fn into_parts(self) -> (O, OI, I) {
        (self.orders, self.order_items, self.items)
    }
}

impl<O, OI, I> OrderService<O, OI, I>
where
    O: OrderRepository,
    OI: OrderItemRepository,
    I: ItemRepository,
{
    /// All orders placed by `client`.
    pub fn get_client_orders(&self, client: Option<&Client>) -> DomainResult<Vec<Order>> {
        let client = require(client, "client")?;
        Ok(self.orders.get_by_client_id(client.id_typed()))
    }

    /// Link `item` to `order` under a fresh link id.
    ///
    /// Returns `false` without touching any repository if either argument is
    /// missing, and `false` if the item is already linked to any order.
    /// The lookup and the insert are not atomic with respect to other callers.
    pub fn add_item_to_order(&self, item: Option<&Item>, order: Option<&Order>) -> bool {
        let (Some(item), Some(order)) = (item, order) else {
            return false;
        };

        if let Some(existing) = self.order_items.get_by_item_id(item.id_typed()) {
            tracing::debug!(
                "item {} already ordered in order {}",
                item.id_typed(),
                existing.order_id()
            );
            return false;
        }

        let link = OrderItem::new(
            self.order_items.next_id(),
            order.id_typed(),
            item.id_typed(),
        );
        let added = self.order_items.add(link);
        if added {
            tracing::info!("item {} added to order {}", item.id_typed(), order.id_typed());
        }
        added
    }

    /// Items linked to `order`, in link order. Links to items that no longer
    /// exist are skipped.
    pub fn get_order_items(&self, order: &Order) -> Vec<Item> {
        self.order_items
            .get_by_order_id(order.id_typed())
            .into_iter()
            .filter_map(|link| {
                let item = self.items.get_by_id(link.item_id());
                if item.is_none() {
                    tracing::warn!(
                        "order {} links missing item {}",
                        order.id_typed(),
                        link.item_id()
                    );
                }
                item
            })
            .collect()
    }
}
