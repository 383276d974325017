use serde::{Deserialize, Serialize};

use orderdesk_core::{Entity, ItemId, Price};

/// Entity: Item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    price: Price,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_price_keeps_identity_and_name() {
        let apple = Item::new(ItemId::new(1), "Apple", Price::from_parts(20, 1).unwrap());
        let cheaper = apple.clone().with_price(Price::from_parts(15, 1).unwrap());

        assert_eq!(cheaper.id(), apple.id());
        assert_eq!(cheaper.name(), "Apple");
        assert_eq!(cheaper.price().to_string(), "1.5");
    }

    #[test]
    fn serde_shape_is_flat() {
        let item = Item::new(ItemId::new(3), "Cherry", Price::from_parts(3, 1).unwrap());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Cherry");

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
