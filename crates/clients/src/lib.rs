//! Clients domain module.
//!
//! This crate contains the client entity and the rules deciding whether a
//! client's details may be stored (no IO, no storage).

pub mod client;
pub mod validator;

pub use client::Client;
pub use validator::{ClientValidator, DefaultClientValidator};
