//! Items domain module.
//!
//! This crate contains the sellable item entity and its validation rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod item;
pub mod validator;

pub use item::Item;
pub use validator::{DefaultItemValidator, ItemValidator};
