//! `orderdesk-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the entity crates,
//! the repositories and the services (no storage concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, require};
pub use id::{ClientId, ItemId, OrderId, OrderItemId};
pub use value_object::{Price, ValueObject};
