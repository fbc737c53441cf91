//! Wire-faithful data records and their draft DTOs.
//!
//! Field names are snake_case both here and on the wire, so serde needs no
//! renames. Optional wire fields are `Option`; absent and zero are never
//! conflated. Every record's `id` is backend-assigned: `0` marks a record
//! the backend has not created yet.

pub mod client;
pub mod order;
pub mod order_item;
pub mod product;

pub use client::*;
pub use order::*;
pub use order_item::*;
pub use product::*;
