//! Full-system test: the whole desk wired against a mock backend.

use desk_framework::FormClient;
use orderdesk::lifecycle::OrderDesk;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_desk_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Ann", "email": "ann@x.com" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 3,
            "order_number": "SO-3",
            "client_id": 1,
            "order_status": "pending",
            "payment_method": "credit_card",
            "currency_code": "EUR",
            "subtotal_amount": 10.0,
            "discount_amount": 0.0,
            "tax_amount": 2.0,
            "total_amount": 12.0
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders/3/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 4,
            "order_id": 3,
            "product_id": 9,
            "quantity": 2,
            "unit_price": 5.0,
            "line_total": 10.0
        }])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 2,
            "name": "Bo",
            "email": "bo@x.com",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        })))
        .mount(&server)
        .await;

    let desk = OrderDesk::new(&server.uri());

    // Every screen loads independently.
    desk.clients.load().await.unwrap();
    assert_eq!(desk.clients.status(), "Loaded 1 clients");

    desk.orders.load().await.unwrap();
    let order_id = desk.orders.items()[0].id;
    desk.order_items.load_for_order(order_id).await.unwrap();
    assert_eq!(desk.order_items.status(), "Loaded 1 items");

    // A create round-trip through the clients screen.
    desk.clients.set_field("name", "Bo").await.unwrap();
    desk.clients.set_field("email", "bo@x.com").await.unwrap();
    desk.clients.create_client().await.unwrap();
    assert_eq!(desk.clients.status(), "Created client ID 2");
    assert_eq!(desk.clients.items().len(), 2);
    assert_eq!(desk.clients.items()[0].id, 2);

    // A backend failure surfaces in the status line, nowhere else.
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;
    desk.products.load().await.unwrap();
    assert_eq!(
        desk.products.status(),
        "Load failed: HTTP 500: database down"
    );
    assert!(desk.products.items().is_empty());

    desk.shutdown().await.unwrap();
}
