//! Screen-level behavior: real view-model actors driven through the typed
//! facades, with a scripted gateway standing in for the backend.

use desk_framework::mock::MockGateway;
use desk_framework::{FormClient, FormViewModel};
use orderdesk::model::{Client, Order, OrderItem, Product};
use orderdesk::screens::{ClientsScreen, OrderItemsScreen, OrdersScreen, ProductsScreen};

fn client(id: u32, name: &str, email: &str) -> Client {
    Client {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
        address: None,
        created_at: Some("2024-05-01T10:00:00Z".to_string()),
        updated_at: Some("2024-05-01T10:00:00Z".to_string()),
    }
}

fn clients_screen(mock: &MockGateway<Client>) -> ClientsScreen {
    let (vm, handle) = FormViewModel::new(mock.clone(), 8);
    tokio::spawn(vm.run());
    ClientsScreen::new(handle)
}

fn products_screen(mock: &MockGateway<Product>) -> ProductsScreen {
    let (vm, handle) = FormViewModel::new(mock.clone(), 8);
    tokio::spawn(vm.run());
    ProductsScreen::new(handle)
}

fn orders_screen(mock: &MockGateway<Order>) -> OrdersScreen {
    let (vm, handle) = FormViewModel::new(mock.clone(), 8);
    tokio::spawn(vm.run());
    OrdersScreen::new(handle)
}

fn items_screen(mock: &MockGateway<OrderItem>) -> OrderItemsScreen {
    let (vm, handle) = FormViewModel::new(mock.clone(), 8);
    tokio::spawn(vm.run());
    OrderItemsScreen::new(handle)
}

#[tokio::test]
async fn test_create_client_takes_server_record() {
    let mock = MockGateway::new();
    mock.expect_create().return_ok(client(7, "Ann", "ann@x.com"));
    let screen = clients_screen(&mock);

    screen.set_field("name", "Ann").await.unwrap();
    screen.set_field("email", "ann@x.com").await.unwrap();
    screen.create_client().await.unwrap();

    assert_eq!(screen.items()[0].id, 7);
    assert_eq!(screen.selected().map(|c| c.id), Some(7));
    assert_eq!(screen.status(), "Created client ID 7");
    // The server-assigned timestamps flowed back into the form.
    assert_eq!(screen.field("created_at"), "2024-05-01T10:00:00Z");
    mock.verify();
}

#[tokio::test]
async fn test_create_product_with_blank_name_is_rejected_locally() {
    let mock = MockGateway::new();
    let screen = products_screen(&mock);

    screen.set_field("name", "").await.unwrap();
    screen.set_field("price", "5").await.unwrap();
    screen.set_field("stock", "1").await.unwrap();
    screen.create_product().await.unwrap();

    assert_eq!(screen.status(), "Name is required");
    assert!(screen.items().is_empty());
    assert!(mock.calls().is_empty(), "no network call may happen");
}

#[tokio::test]
async fn test_add_item_with_zero_quantity_is_rejected_locally() {
    let mock = MockGateway::new();
    let screen = items_screen(&mock);

    screen.set_field("product_id", "9").await.unwrap();
    screen.set_field("quantity", "0").await.unwrap();
    screen.add_item(3).await.unwrap();

    assert_eq!(screen.status(), "Quantity must be positive");
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_add_item_reports_product_and_order() {
    let mock = MockGateway::new();
    mock.expect_create().return_ok(OrderItem {
        id: 4,
        order_id: 3,
        product_id: 9,
        quantity: 2,
        unit_price: 5.0,
        line_total: 10.0,
    });
    let screen = items_screen(&mock);

    screen.set_field("product_id", "9").await.unwrap();
    screen.set_field("quantity", "2").await.unwrap();
    screen.set_field("unit_price", "5").await.unwrap();
    screen.add_item(3).await.unwrap();

    assert_eq!(screen.status(), "Added product ID 9 to order 3");
    // The line total is whatever the server computed, never a local product.
    assert_eq!(screen.field("line_total"), "10");
    mock.verify();
}

#[tokio::test]
async fn test_load_items_is_scoped_to_the_order() {
    let mock = MockGateway::new();
    mock.expect_list().return_ok(vec![
        OrderItem {
            id: 1,
            order_id: 3,
            product_id: 9,
            quantity: 1,
            unit_price: 2.5,
            line_total: 2.5,
        },
        OrderItem {
            id: 2,
            order_id: 3,
            product_id: 12,
            quantity: 4,
            unit_price: 1.0,
            line_total: 4.0,
        },
    ]);
    let screen = items_screen(&mock);

    screen.load_for_order(3).await.unwrap();
    assert_eq!(screen.items().len(), 2);
    assert_eq!(screen.status(), "Loaded 2 items");
}

#[tokio::test]
async fn test_order_form_defaults_restore_on_deselect() {
    let mock = MockGateway::new();
    mock.expect_list().return_ok(vec![Order {
        id: 11,
        order_number: "SO-11".to_string(),
        client_id: 4,
        order_date: Some("2024-05-02".to_string()),
        order_status: "shipped".to_string(),
        payment_method: "paypal".to_string(),
        currency_code: "USD".to_string(),
        subtotal_amount: 40.0,
        discount_amount: 0.0,
        tax_amount: 8.0,
        total_amount: 48.0,
        shipping_address: None,
        billing_address: None,
        notes: None,
        created_at: None,
        updated_at: None,
    }]);
    let screen = orders_screen(&mock);
    screen.load().await.unwrap();

    screen.select(0).await.unwrap();
    assert_eq!(screen.field("order_status"), "shipped");
    assert_eq!(screen.field("total_amount"), "48");
    assert_eq!(screen.field("shipping_address"), "");

    screen.clear_selection().await.unwrap();
    assert_eq!(screen.field("order_status"), "pending");
    assert_eq!(screen.field("payment_method"), "credit_card");
    assert_eq!(screen.field("currency_code"), "EUR");
    assert_eq!(screen.field("client_id"), "0");
}

#[tokio::test]
async fn test_create_order_requires_a_real_client_id() {
    let mock = MockGateway::new();
    let screen = orders_screen(&mock);

    screen.set_field("order_number", "SO-12").await.unwrap();
    screen.create_order().await.unwrap();
    assert_eq!(screen.status(), "Valid client ID is required");
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_delete_selected_client_clears_selection() {
    let mock = MockGateway::new();
    mock.expect_list()
        .return_ok(vec![client(1, "Ann", "ann@x.com"), client(2, "Bo", "bo@x.com")]);
    mock.expect_delete().return_ok();
    let screen = clients_screen(&mock);
    screen.load().await.unwrap();

    screen.select(1).await.unwrap();
    screen.delete_selected().await.unwrap();

    assert_eq!(screen.items().len(), 1);
    assert_eq!(screen.items()[0].id, 1);
    assert!(!screen.has_selection());
    assert_eq!(screen.field("name"), "");
    assert_eq!(screen.status(), "Deleted client ID 2");
}

#[tokio::test]
async fn test_email_feedback_while_typing() {
    let mock = MockGateway::new();
    let screen = clients_screen(&mock);

    screen.set_field("email", "ann").await.unwrap();
    assert_eq!(screen.status(), "Invalid email format");
    screen.set_field("email", "ann@x.com").await.unwrap();
    assert_eq!(screen.status(), "");
}
