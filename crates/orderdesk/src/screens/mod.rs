//! Typed screen facades.
//!
//! Each screen wraps a generic [`FormHandle`](desk_framework::FormHandle)
//! and names the operations in domain terms; the shared surface (selection,
//! field edits, observable reads) comes from
//! [`FormClient`](desk_framework::FormClient). A view layer binds widgets to
//! the cells behind these screens and calls the operations from its
//! handlers; nothing here knows about any particular UI toolkit.

pub mod clients;
pub mod order_items;
pub mod orders;
pub mod products;

pub use clients::ClientsScreen;
pub use order_items::OrderItemsScreen;
pub use orders::OrdersScreen;
pub use products::ProductsScreen;
