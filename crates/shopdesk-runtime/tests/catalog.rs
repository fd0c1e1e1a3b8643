use anyhow::Result;
use serde_json::json;
use shopdesk_api::Method;
use shopdesk_runtime::render::RowAction;
use shopdesk_runtime::{Entity, Intent, ModalState, Notice, Outcome, Overlay, Panel, PanelView, View};
use shopdesk_testing::assertions::{column, table};
use shopdesk_testing::{ExportRecord, MockTransport, TEST_BASE, TestConsole, fixtures};
use std::time::Duration;
use shopdesk_types::{OrderStatus, ReturnStatus};

async fn open(view: View, mock: &MockTransport) -> TestConsole {
    let mut t = TestConsole::signed_in(mock);
    t.console.dispatch(Intent::Navigate(view)).await;
    t.console.settle().await;
    t
}

#[tokio::test]
async fn test_search_and_price_sort() -> Result<()> {
    // Given
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    let mut t = open(View::Products, &mock).await;

    // When: search "app"
    t.console.dispatch(Intent::SearchChanged("app".into())).await;

    // Then
    assert_eq!(column(t.console.canvas(), Panel::ProductTable, 1)?, vec!["Apple", "apple pie"]);

    // When: clear search, sort by price ascending
    t.console.dispatch(Intent::SearchChanged(String::new())).await;
    t.console.dispatch(Intent::SortChanged(2)).await;

    // Then
    assert_eq!(
        column(t.console.canvas(), Panel::ProductTable, 1)?,
        vec!["Banana", "apple pie", "Apple"]
    );
    Ok(())
}

#[tokio::test]
async fn test_products_wait_for_seller_lookup() -> Result<()> {
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    let t = open(View::Products, &mock).await;

    // apple pie points at seller 9, which does not exist
    assert_eq!(
        column(t.console.canvas(), Panel::ProductTable, 5)?,
        vec!["Asha Orchards", "-", "Coastal Farms"]
    );
    Ok(())
}

#[tokio::test]
async fn test_failed_seller_lookup_still_lists_products() -> Result<()> {
    let mock = MockTransport::new();
    mock.status(Method::Get, "/sellers", 500);
    mock.get("/products", fixtures::products());
    let t = open(View::Products, &mock).await;

    assert_eq!(column(t.console.canvas(), Panel::ProductTable, 5)?, vec!["-", "-", "-"]);
    Ok(())
}

#[tokio::test]
async fn test_empty_price_keeps_modal_open_and_sends_nothing() -> Result<()> {
    // Given
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    let mut t = open(View::Products, &mock).await;

    // When
    t.console.dispatch(Intent::OpenCreate(Entity::Product)).await;
    for (field, value) in [("name", "Mango"), ("category", "Fruit"), ("price", "")] {
        t.console
            .dispatch(Intent::EditField {
                field: field.into(),
                value: value.into(),
            })
            .await;
    }
    let outcome = t.console.dispatch(Intent::SubmitForm).await;

    // Then
    assert!(matches!(outcome, Outcome::Rejected(_)));
    let ModalState::Open(form) = t.console.modal().state() else {
        panic!("modal closed");
    };
    assert!(form.error.is_some());
    assert_eq!(form.value("name"), "Mango");
    assert!(mock.mutations().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_product_update_closes_modal_and_reruns() -> Result<()> {
    // Given: the second products fetch reflects the new price
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    let mut updated = fixtures::products();
    updated[1]["price"] = json!("15.00");
    mock.get("/products", updated);
    mock.on(Method::Put, "/products/2", fixtures::ok());
    let mut t = open(View::Products, &mock).await;

    // When
    t.console.dispatch(Intent::OpenEdit(Entity::Product, 2)).await;
    t.console
        .dispatch(Intent::EditField {
            field: "price".into(),
            value: "15".into(),
        })
        .await;
    t.console.dispatch(Intent::SubmitForm).await;
    t.console.settle().await;

    // Then
    assert_eq!(t.console.modal().state(), &ModalState::Closed);
    let body = mock.last_body(Method::Put, "/products/2").unwrap_or_default();
    assert_eq!(body["price"], json!(15.0));
    assert!(body.get("product_id").is_none());
    assert_eq!(mock.count(Method::Get, "/products"), 2);
    let prices = column(t.console.canvas(), Panel::ProductTable, 3)?;
    assert!(prices.contains(&"₹15".to_string()));
    assert_eq!(
        t.console.last_notice(),
        Some(&Notice::Info("Product updated successfully".into()))
    );
    Ok(())
}

#[tokio::test]
async fn test_server_rejection_keeps_form_values() -> Result<()> {
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    mock.on(Method::Post, "/sellers", json!({"success": false, "error": "Email already used"}));
    let mut t = open(View::Sellers, &mock).await;

    t.console.dispatch(Intent::OpenCreate(Entity::Seller)).await;
    t.console
        .dispatch(Intent::EditField {
            field: "name".into(),
            value: "Hill Spices".into(),
        })
        .await;
    t.console.dispatch(Intent::SubmitForm).await;

    let form = t.console.modal().form().expect("modal open");
    assert_eq!(form.error.as_deref(), Some("Email already used"));
    assert_eq!(form.value("name"), "Hill Spices");
    assert!(t.console.last_notice().is_some_and(Notice::is_error));
    Ok(())
}

#[tokio::test]
async fn test_blank_seller_name_is_refused_before_sending() -> Result<()> {
    // Given
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    let mut t = open(View::Sellers, &mock).await;

    // When: the name is only whitespace
    t.console.dispatch(Intent::OpenCreate(Entity::Seller)).await;
    t.console
        .dispatch(Intent::EditField {
            field: "name".into(),
            value: "   ".into(),
        })
        .await;
    let outcome = t.console.dispatch(Intent::SubmitForm).await;

    // Then
    assert!(matches!(outcome, Outcome::Rejected(_)));
    assert!(matches!(t.console.modal().state(), ModalState::Open(_)));
    let form = t.console.modal().form().expect("modal open");
    assert_eq!(form.error.as_deref(), Some("Name is required"));
    assert!(mock.mutations().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_save_reply_without_success_flag_keeps_modal_open() -> Result<()> {
    // Given: the server answers the update with an empty object
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    mock.on(Method::Put, "/products/2", json!({}));
    let mut t = open(View::Products, &mock).await;

    // When
    t.console.dispatch(Intent::OpenEdit(Entity::Product, 2)).await;
    t.console
        .dispatch(Intent::EditField {
            field: "price".into(),
            value: "15".into(),
        })
        .await;
    t.console.dispatch(Intent::SubmitForm).await;
    t.console.settle().await;

    // Then: nothing claims success and the view is not re-run
    let form = t.console.modal().form().expect("modal open");
    assert_eq!(form.error.as_deref(), Some("Unknown error"));
    assert_eq!(form.value("price"), "15");
    assert_eq!(mock.count(Method::Get, "/products"), 1);
    assert!(t.console.last_notice().is_some_and(Notice::is_error));
    Ok(())
}

#[tokio::test]
async fn test_delete_requires_confirmation() -> Result<()> {
    // Given
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    mock.on(Method::Delete, "/products/1", fixtures::ok());
    let mut t = open(View::Products, &mock).await;

    // When: asked, then declined
    let asked = t.console.dispatch(Intent::Delete(Entity::Product, 1)).await;
    t.console.dispatch(Intent::Decline).await;

    // Then
    assert_eq!(asked, Outcome::ConfirmationRequired("Delete product \"Apple\"?".into()));
    assert!(mock.mutations().is_empty());

    // When: asked again and confirmed
    t.console.dispatch(Intent::Delete(Entity::Product, 1)).await;
    t.console.dispatch(Intent::Confirm).await;
    t.console.settle().await;

    // Then
    assert_eq!(mock.count(Method::Delete, "/products/1"), 1);
    assert_eq!(mock.count(Method::Get, "/products"), 2);
    assert_eq!(t.console.prompt(), None);
    Ok(())
}

#[tokio::test]
async fn test_order_status_facet_and_detail_overlay() -> Result<()> {
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    let mut t = open(View::Orders, &mock).await;

    // newest first
    assert_eq!(column(t.console.canvas(), Panel::OrderTable, 0)?, vec!["#103", "#102", "#101"]);
    assert_eq!(column(t.console.canvas(), Panel::OrderTable, 2)?[0], "Guest");

    t.console.dispatch(Intent::FacetChanged("Pending".into())).await;
    assert_eq!(column(t.console.canvas(), Panel::OrderTable, 0)?, vec!["#102"]);

    t.console.dispatch(Intent::ShowOrder(101)).await;
    let Some(Overlay::OrderDetail(detail)) = t.console.overlay() else {
        panic!("no order overlay");
    };
    assert_eq!(detail.lines[0].total, 1250.0);
    assert_eq!(detail.grand_total, 1250.0);

    assert_eq!(t.console.dispatch(Intent::CloseOverlay).await, Outcome::Rendered);
    assert!(t.console.overlay().is_none());
    Ok(())
}

#[tokio::test]
async fn test_customer_toggle_and_history() -> Result<()> {
    // Given
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    mock.on(Method::Put, "/customers/8/toggle", fixtures::ok());
    mock.get(
        "/customers/7/history",
        json!({"success": true, "orders": [fixtures::orders()[0].clone()]}),
    );
    let mut t = open(View::Customers, &mock).await;

    // When
    t.console.dispatch(Intent::FacetChanged("Blocked".into())).await;

    // Then
    assert_eq!(column(t.console.canvas(), Panel::CustomerTable, 0)?, vec!["Ravi Kumar"]);

    // When
    t.console.dispatch(Intent::ToggleCustomer(8)).await;
    t.console.settle().await;
    t.console.dispatch(Intent::ShowCustomerHistory(7)).await;

    // Then
    assert_eq!(mock.count(Method::Put, "/customers/8/toggle"), 1);
    // the facet survives the refresh
    assert_eq!(column(t.console.canvas(), Panel::CustomerTable, 0)?, vec!["Ravi Kumar"]);
    let Some(Overlay::CustomerHistory(history)) = t.console.overlay() else {
        panic!("no history overlay");
    };
    assert_eq!(history.customer_name, "Meera Rao");
    assert_eq!(history.rows[0].items, 1);
    Ok(())
}

#[tokio::test]
async fn test_history_failure_is_a_notice() {
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    mock.status(Method::Get, "/customers/7/history", 500);
    let mut t = open(View::Customers, &mock).await;

    t.console.dispatch(Intent::ShowCustomerHistory(7)).await;

    assert!(t.console.overlay().is_none());
    assert_eq!(
        t.console.last_notice(),
        Some(&Notice::Error("Error loading customer history: Server returned HTTP 500".into()))
    );
}

#[tokio::test]
async fn test_return_decisions() -> Result<()> {
    // Given
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    mock.on(Method::Put, "/returns/11", fixtures::ok());
    let mut t = open(View::Returns, &mock).await;
    let returns = table(t.console.canvas(), Panel::ReturnTable)?;
    assert_eq!(returns.rows[0].actions, vec![RowAction::Approve, RowAction::Reject]);
    assert!(returns.rows[1].actions.is_empty());

    // When
    let decided = t
        .console
        .dispatch(Intent::UpdateReturnStatus {
            return_id: 11,
            status: ReturnStatus::Approved,
        })
        .await;
    let refused = t
        .console
        .dispatch(Intent::UpdateReturnStatus {
            return_id: 12,
            status: ReturnStatus::Approved,
        })
        .await;
    t.console.settle().await;

    // Then
    assert_eq!(decided, Outcome::Rendered);
    assert!(matches!(refused, Outcome::Rejected(_)));
    assert_eq!(mock.last_body(Method::Put, "/returns/11"), Some(json!({"status": "Approved"})));
    assert_eq!(mock.count(Method::Put, "/returns/12"), 0);
    assert_eq!(mock.count(Method::Get, "/returns"), 2);
    Ok(())
}

#[tokio::test]
async fn test_global_search_from_dashboard_lands_on_products() -> Result<()> {
    let mock = MockTransport::new();
    fixtures::dashboard(&mock);
    fixtures::catalog(&mock);
    let mut t = TestConsole::signed_in(&mock);
    t.console.gate();
    t.console.settle().await;

    t.console.dispatch(Intent::GlobalSearch("APPLE".into())).await;
    t.console.settle().await;

    assert_eq!(t.console.router().active_view(), Some(View::Products));
    assert_eq!(column(t.console.canvas(), Panel::ProductTable, 1)?, vec!["Apple", "apple pie"]);
    Ok(())
}

#[tokio::test]
async fn test_navigation_resets_query() {
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    let mut t = open(View::Products, &mock).await;
    t.console.dispatch(Intent::SearchChanged("zzz".into())).await;
    assert_eq!(
        t.console.canvas().get(Panel::ProductTable),
        Some(&PanelView::empty("No products match"))
    );

    t.console.dispatch(Intent::Navigate(View::Products)).await;
    t.console.settle().await;

    assert_eq!(t.console.active().map(|ctx| ctx.query.search.as_str()), Some(""));
    assert!(matches!(
        t.console.canvas().get(Panel::ProductTable),
        Some(PanelView::Table(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_slow_run_of_abandoned_view_is_dropped() -> Result<()> {
    // Given: customers answer slowly, orders at once
    let mock = MockTransport::new();
    mock.on_delayed(Method::Get, "/customers", fixtures::customers(), Duration::from_secs(5));
    mock.get("/orders", fixtures::orders());
    let mut t = TestConsole::signed_in(&mock);

    // When: the operator leaves customers before it loads
    t.console.dispatch(Intent::Navigate(View::Customers)).await;
    t.console.dispatch(Intent::Navigate(View::Orders)).await;
    t.console.settle().await;
    tokio::time::sleep(Duration::from_secs(10)).await;

    // Then
    assert_eq!(t.console.drain(), 0);
    assert!(t.console.canvas().get(Panel::CustomerTable).is_none());
    assert_eq!(table(t.console.canvas(), Panel::OrderTable)?.rows.len(), 3);
    assert_eq!(t.console.active().map(|ctx| ctx.loading), Some(false));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_second_navigation_to_orders_wins() -> Result<()> {
    // Given: the first /orders call answers slowly with an outdated list
    let mock = MockTransport::new();
    mock.on_delayed(
        Method::Get,
        "/orders",
        json!([{"order_id": 90, "date": "2024-04-01", "status": "Pending", "total_amount": 5}]),
        Duration::from_secs(5),
    );
    mock.get("/orders", fixtures::orders());
    let mut t = TestConsole::signed_in(&mock);

    // When: orders is opened twice before the first run completes
    t.console.dispatch(Intent::Navigate(View::Orders)).await;
    tokio::time::sleep(Duration::from_millis(1)).await;
    t.console.dispatch(Intent::Navigate(View::Orders)).await;
    t.console.settle().await;
    tokio::time::sleep(Duration::from_secs(10)).await;

    // Then: only the latest generation reaches the table
    assert_eq!(mock.count(Method::Get, "/orders"), 2);
    assert_eq!(t.console.drain(), 0);
    assert_eq!(column(t.console.canvas(), Panel::OrderTable, 0)?, vec!["#103", "#102", "#101"]);
    Ok(())
}

#[tokio::test]
async fn test_bulk_stock_update_covers_every_product() -> Result<()> {
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    mock.on(
        Method::Post,
        "/bulk/products/update-stock",
        json!({"success": true, "updated_count": 3}),
    );
    let mut t = open(View::Products, &mock).await;

    t.console.dispatch(Intent::BulkUpdateStock(50)).await;
    t.console.settle().await;

    let body = mock
        .last_body(Method::Post, "/bulk/products/update-stock")
        .unwrap_or_default();
    assert_eq!(
        body,
        json!({"updates": [
            {"product_id": 1, "stock": 50},
            {"product_id": 2, "stock": 50},
            {"product_id": 3, "stock": 50}
        ]})
    );
    assert_eq!(
        t.console.last_notice(),
        Some(&Notice::Info("Updated stock for 3 products".into()))
    );
    Ok(())
}

#[tokio::test]
async fn test_bulk_delete_asks_first() -> Result<()> {
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    mock.on(
        Method::Post,
        "/bulk/products/delete",
        json!({"success": true, "deleted_count": 3}),
    );
    let mut t = open(View::Products, &mock).await;

    let asked = t.console.dispatch(Intent::BulkDeleteProducts).await;
    assert!(matches!(asked, Outcome::ConfirmationRequired(_)));
    assert!(mock.mutations().is_empty());

    t.console.dispatch(Intent::Confirm).await;
    t.console.settle().await;

    assert_eq!(
        mock.last_body(Method::Post, "/bulk/products/delete"),
        Some(json!({"product_ids": [1, 2, 3]}))
    );
    assert_eq!(t.console.last_notice(), Some(&Notice::Info("Deleted 3 products".into())));
    Ok(())
}

#[tokio::test]
async fn test_bulk_order_status_failure_is_reported() {
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    mock.offline(Method::Post, "/bulk/orders/update-status");
    let mut t = open(View::Orders, &mock).await;

    t.console
        .dispatch(Intent::BulkUpdateOrderStatus(OrderStatus::Shipped))
        .await;

    assert_eq!(
        t.console.last_notice(),
        Some(&Notice::Error(
            "Bulk status update failed: Could not reach the server".into()
        ))
    );
}

#[tokio::test]
async fn test_csv_export_follows_the_visible_table() -> Result<()> {
    // Given
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    let mut t = open(View::Orders, &mock).await;
    t.console.dispatch(Intent::FacetChanged("Pending".into())).await;

    // When
    t.console.dispatch(Intent::ExportOrdersCsv).await;

    // Then
    let (name, content) = t.sink.last_csv().expect("csv saved");
    assert_eq!(name, "orders.csv");
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        vec!["Order ID,Date,Customer,Status,Amount", "102,2024-05-03,Ravi Kumar,Pending,80.00"]
    );
    assert_eq!(mock.count(Method::Get, "/export/orders"), 0);
    Ok(())
}

#[tokio::test]
async fn test_csv_export_outside_list_views_fetches_everything() -> Result<()> {
    let mock = MockTransport::new();
    fixtures::dashboard(&mock);
    mock.get("/export/orders", json!({"success": true, "orders": fixtures::orders()}));
    let mut t = TestConsole::signed_in(&mock);
    t.console.gate();
    t.console.settle().await;

    t.console.dispatch(Intent::ExportOrdersCsv).await;

    let (name, content) = t.sink.last_csv().expect("csv saved");
    assert_eq!(name, "bulk_export.csv");
    assert_eq!(content.lines().count(), 4);
    assert!(content.contains("103,2024-05-04,,Shipped,40.00"));
    Ok(())
}

#[tokio::test]
async fn test_bill_export_hands_pdf_url_to_sink() {
    let mock = MockTransport::new();
    fixtures::catalog(&mock);
    let mut t = open(View::Bills, &mock).await;

    t.console.dispatch(Intent::ExportBill(101)).await;

    assert_eq!(
        t.sink.records(),
        vec![ExportRecord::Pdf {
            order_id: 101,
            url: format!("{}/bills/101/pdf", TEST_BASE),
        }]
    );
    assert!(t.console.last_notice().is_some_and(|n| !n.is_error()));
}
