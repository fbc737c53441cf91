//! Demo entry point: start the desk, refresh every screen against the
//! backend, report what happened, and shut down cleanly.
//!
//! The backend address defaults to the local development server and can be
//! overridden with `ORDERDESK_BASE_URL` (a `.env` file works too).

use desk_framework::tracing::setup_tracing;
use desk_framework::FormClient;
use orderdesk::lifecycle::OrderDesk;
use tracing::info;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let base_url =
        std::env::var("ORDERDESK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    info!(%base_url, "Starting order desk");

    let desk = OrderDesk::new(&base_url);

    // Refresh every screen; failures land in each status line rather than
    // aborting the run.
    desk.clients.load().await.map_err(|e| e.to_string())?;
    info!(status = %desk.clients.status(), count = desk.clients.items().len(), "Clients");

    desk.products.load().await.map_err(|e| e.to_string())?;
    info!(status = %desk.products.status(), count = desk.products.items().len(), "Products");

    desk.orders.load().await.map_err(|e| e.to_string())?;
    info!(status = %desk.orders.status(), count = desk.orders.items().len(), "Orders");

    // Line items need an order context; use the first order if there is one.
    if let Some(order) = desk.orders.items().first() {
        desk.order_items
            .load_for_order(order.id)
            .await
            .map_err(|e| e.to_string())?;
        info!(
            status = %desk.order_items.status(),
            order_id = order.id,
            "Order items"
        );
    }

    desk.shutdown().await?;
    info!("Order desk closed");
    Ok(())
}
