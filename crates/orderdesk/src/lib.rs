//! # Orderdesk
//!
//! The desktop-CRUD core for a small commerce backend: clients, products,
//! orders, and order line items, each presented as a screen with an
//! authoritative list, an editable form, and asynchronous
//! create/update/delete against the REST API.
//!
//! The synchronization protocol itself (selection, form fill, advisory
//! validation, status reporting, list patching from server responses)
//! lives once in [`desk_framework`] as a generic view-model actor; this
//! crate supplies the four entity contracts, the REST gateways, and the
//! wiring.
//!
//! ## Module Tour
//!
//! - [`model`]: wire records and draft DTOs.
//! - [`forms`]: per-entity schemas, validation rules, status vocabulary.
//! - [`gateway`]: the shared HTTP wrapper and the four REST gateways.
//! - [`screens`]: typed facades a view layer drives.
//! - [`lifecycle`]: [`OrderDesk`](lifecycle::OrderDesk) spawns, wires, and
//!   shuts down the screens.

pub mod forms;
pub mod gateway;
pub mod lifecycle;
pub mod model;
pub mod screens;
