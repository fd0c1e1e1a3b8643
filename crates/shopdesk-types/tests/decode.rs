use anyhow::Result;
use serde_json::json;
use shopdesk_types::{Customer, Order, OrderStatus, Product, ReturnRequest, ReturnStatus};

#[test]
fn test_order_with_decimal_strings_and_history_items() -> Result<()> {
    // Given: an order as served by the customer history view
    let raw = json!({
        "order_id": 42,
        "order_date": "2024-05-01T10:15:00",
        "formatted_date": "2024-05-01 10:15",
        "status": "Shipped",
        "total_amount": "2499.00",
        "customer_name": "Asha",
        "items": [{"product_name": "Kettle", "price": "1249.5", "category": "Home"}]
    });

    // When
    let order: Order = serde_json::from_value(raw)?;

    // Then
    assert_eq!(order.status, OrderStatus::Shipped);
    assert_eq!(order.total_amount, 2499.0);
    assert_eq!(order.display_date(), "2024-05-01 10:15");
    assert_eq!(order.items[0].name, "Kettle");
    assert_eq!(order.items[0].qty, 1);
    assert_eq!(order.items[0].line_total(), 1249.5);
    Ok(())
}

#[test]
fn test_order_without_customer_has_no_name() -> Result<()> {
    let order: Order = serde_json::from_value(json!({"order_id": 1, "customer_name": ""}))?;
    assert_eq!(order.customer(), None);
    assert_eq!(order.display_date(), "");
    Ok(())
}

#[test]
fn test_customer_flags_and_spend_fallbacks() -> Result<()> {
    let customer: Customer = serde_json::from_value(json!({
        "customer_id": "7",
        "name": "Ravi",
        "blocked": 1,
        "lifetime_value": null,
        "total_spent": "5120.75"
    }))?;

    assert!(customer.blocked);
    assert_eq!(customer.state_label(), "Blocked");
    assert_eq!(customer.spent(), 5120.75);
    assert_eq!(customer.lifetime(), 5120.75);
    Ok(())
}

#[test]
fn test_product_with_null_aggregates() -> Result<()> {
    let product: Product = serde_json::from_value(json!({
        "product_id": 3,
        "name": "Lamp",
        "category": "Home",
        "price": "899.00",
        "quantityavailable": null,
        "seller_id": null,
        "total_sold": null
    }))?;

    assert_eq!(product.price, 899.0);
    assert_eq!(product.quantityavailable, 0);
    assert_eq!(product.seller_id, None);
    assert_eq!(product.total_sold, 0);
    Ok(())
}

#[test]
fn test_return_status_open_only_while_requested() -> Result<()> {
    let open: ReturnRequest = serde_json::from_value(json!({"id": 1, "status": "Requested"}))?;
    let closed: ReturnRequest = serde_json::from_value(json!({"id": 2, "status": "Refunded"}))?;

    assert!(open.status.is_open());
    assert_eq!(closed.status, ReturnStatus::Refunded);
    assert!(!closed.status.is_open());
    Ok(())
}
