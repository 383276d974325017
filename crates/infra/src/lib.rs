//! Infrastructure layer: entity storage.

pub mod repository;

pub use repository::{
    ClientRepository, GenericRepository, InMemoryClientRepository, InMemoryGenericRepository,
    InMemoryItemRepository, InMemoryOrderItemRepository, InMemoryOrderRepository,
    ItemRepository, OrderItemRepository, OrderRepository,
};
