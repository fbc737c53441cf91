//! REST gateways: the [`EntityGateway`](desk_framework::EntityGateway)
//! implementations the view-models run against, plus the shared [`Api`]
//! wrapper that owns the HTTP verb/status-code contract.

pub mod api;
pub mod clients;
pub mod order_items;
pub mod orders;
pub mod products;

pub use api::Api;
pub use clients::ClientGateway;
pub use order_items::OrderItemGateway;
pub use orders::OrderGateway;
pub use products::ProductGateway;
