use serde::{Deserialize, Serialize};

use orderdesk_core::{ClientId, Entity, ItemId, OrderId, OrderItemId};

/// Entity: Order.
///
/// `client_id` is a plain foreign key; nothing at this layer checks that the
/// client exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    client_id: ClientId,
}

impl Order {
    pub fn new(id: OrderId, client_id: ClientId) -> Self {
        Self { id, client_id }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn set_client_id(&mut self, client_id: ClientId) {
        self.client_id = client_id;
    }

    pub fn belongs_to(&self, client_id: ClientId) -> bool {
        self.client_id == client_id
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Entity: OrderItem (join record between one order and one item).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    order_id: OrderId,
    item_id: ItemId,
}

impl OrderItem {
    pub fn new(id: OrderItemId, order_id: OrderId, item_id: ItemId) -> Self {
        Self {
            id,
            order_id,
            item_id,
        }
    }

    pub fn id_typed(&self) -> OrderItemId {
        self.id
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
