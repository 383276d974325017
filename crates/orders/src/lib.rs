//! Orders domain module.
//!
//! Orders belong to a client; order items link one order to one item.

pub mod order;

pub use order::{Order, OrderItem};
