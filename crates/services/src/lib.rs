//! Application services: business rules layered over the repositories.
//!
//! Services take their collaborators (validators, repositories) by value and
//! are generic over them, so tests can hand in fakes and production code can
//! share one store between services through `Arc`.
//!
//! Error policy:
//! - a missing required argument is caller misuse and yields
//!   `Err(DomainError::InvalidArgument(param))`;
//! - a broken business rule (invalid fields, duplicate id, already-ordered
//!   item, client with orders) yields `false` and leaves the store untouched.

pub mod client;
pub mod item;
pub mod order;

#[cfg(test)]
mod test_support;

pub use client::ClientService;
pub use item::ItemService;
pub use order::OrderService;
