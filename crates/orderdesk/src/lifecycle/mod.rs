//! # Application Lifecycle & Orchestration
//!
//! [`OrderDesk`] is the conductor: it creates the four view-model actors,
//! wires each to its REST gateway, spawns them, and hands out the screen
//! facades. Shutdown follows the channel-closure pattern: dropping the
//! screens closes every mailbox sender, each actor drains its queue and
//! exits, and `shutdown` awaits them all.
//!
//! Unlike actors that call each other, the four screens share nothing but
//! the HTTP connection pool, so there is no dependency wiring to sequence:
//! each gateway is injected at construction and the actors start in any
//! order.

use crate::gateway::{Api, ClientGateway, OrderGateway, OrderItemGateway, ProductGateway};
use crate::screens::{ClientsScreen, OrderItemsScreen, OrdersScreen, ProductsScreen};
use desk_framework::FormViewModel;
use tracing::{error, info};

/// Mailbox capacity per view-model; a full mailbox back-pressures the
/// caller, it never drops a request.
const MAILBOX_SIZE: usize = 32;

/// The running application core: four screens over one backend.
pub struct OrderDesk {
    pub clients: ClientsScreen,
    pub products: ProductsScreen,
    pub orders: OrdersScreen,
    pub order_items: OrderItemsScreen,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderDesk {
    /// Spawns all four view-model actors against `base_url`.
    pub fn new(base_url: &str) -> Self {
        let api = Api::new(base_url);
        info!(base_url, "Starting view-models");

        let (clients_vm, clients_handle) =
            FormViewModel::new(ClientGateway::new(api.clone()), MAILBOX_SIZE);
        let clients_task = tokio::spawn(clients_vm.run());

        let (products_vm, products_handle) =
            FormViewModel::new(ProductGateway::new(api.clone()), MAILBOX_SIZE);
        let products_task = tokio::spawn(products_vm.run());

        let (orders_vm, orders_handle) =
            FormViewModel::new(OrderGateway::new(api.clone()), MAILBOX_SIZE);
        let orders_task = tokio::spawn(orders_vm.run());

        let (items_vm, items_handle) =
            FormViewModel::new(OrderItemGateway::new(api), MAILBOX_SIZE);
        let items_task = tokio::spawn(items_vm.run());

        Self {
            clients: ClientsScreen::new(clients_handle),
            products: ProductsScreen::new(products_handle),
            orders: OrdersScreen::new(orders_handle),
            order_items: OrderItemsScreen::new(items_handle),
            handles: vec![clients_task, products_task, orders_task, items_task],
        }
    }

    /// Gracefully shuts down all view-models.
    ///
    /// Dropping the screens closes the mailbox channels; each actor finishes
    /// its queued requests and exits. Returns an error if any actor task
    /// panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order desk...");

        drop(self.clients);
        drop(self.products);
        drop(self.orders);
        drop(self.order_items);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("View-model task failed: {:?}", e);
                return Err(format!("View-model task failed: {:?}", e));
            }
        }

        info!("Order desk shutdown complete.");
        Ok(())
    }
}
