//! Identity-keyed repositories.
//!
//! `generic` holds the CRUD contract, `in_memory` the `Vec`-backed store and
//! `specialized` the per-entity query traits layered on top.

pub mod generic;
pub mod in_memory;
pub mod specialized;

pub use generic::GenericRepository;
pub use in_memory::InMemoryGenericRepository;
pub use specialized::{
    ClientRepository, InMemoryClientRepository, InMemoryItemRepository,
    InMemoryOrderItemRepository, InMemoryOrderRepository, ItemRepository, OrderItemRepository,
    OrderRepository,
};
