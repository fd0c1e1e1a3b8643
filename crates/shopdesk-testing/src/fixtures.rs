//! Canned admin API bodies.
//!
//! Bodies mimic what the API actually sends: decimals as strings, a mix of
//! bare arrays and `{success, <list>}` envelopes.

use serde_json::{Value, json};

use shopdesk_api::Method;

use crate::transport::MockTransport;

/// `Apple 50/0`, `Banana 10/5`, `apple pie 20/2` (price/stock), as a bare array.
pub fn products() -> Value {
    json!([
        {"product_id": 1, "name": "Apple", "category": "Fruit", "price": "50.00", "quantityavailable": 0, "seller_id": 1, "total_sold": 40, "views": 300},
        {"product_id": 2, "name": "Banana", "category": "Fruit", "price": "10.00", "quantityavailable": 5, "seller_id": 2, "total_sold": 90, "views": 120},
        {"product_id": 3, "name": "apple pie", "category": "Bakery", "price": 20, "quantityavailable": 2, "seller_id": 9, "total_sold": 12, "views": 45}
    ])
}

pub fn sellers() -> Value {
    json!({"success": true, "sellers": [
        {"id": 1, "name": "Asha Orchards", "company": "Asha Agro", "email": "asha@example.com", "phone": "98450 00001"},
        {"id": 2, "name": "Coastal Farms", "company": "Coastal Pvt Ltd", "email": "hello@coastal.example", "phone": "98450 00002"}
    ]})
}

pub fn orders() -> Value {
    json!([
        {"order_id": 101, "date": "2024-05-01", "status": "Delivered", "total_amount": "1250.00", "customer_id": 7, "customer_name": "Meera Rao", "customer_email": "meera@example.com",
         "items": [{"name": "Apple", "price": "50.00", "qty": 25}]},
        {"order_id": 102, "date": "2024-05-03", "status": "Pending", "total_amount": "80.00", "customer_id": 8, "customer_name": "Ravi Kumar",
         "items": [{"name": "Banana", "price": "10.00", "qty": 8}]},
        {"order_id": 103, "date": "2024-05-04", "status": "Shipped", "total_amount": 40, "customer_name": null, "items": []}
    ])
}

pub fn customers() -> Value {
    json!([
        {"customer_id": 7, "name": "Meera Rao", "email": "meera@example.com", "phone": "98860 11111", "blocked": 0, "lifetime_value": "62000.00", "total_orders": 14},
        {"customer_id": 8, "name": "Ravi Kumar", "email": "ravi@example.com", "phone": "98860 22222", "blocked": 1, "lifetime_value": "2300.00", "total_orders": 2}
    ])
}

pub fn returns() -> Value {
    json!({"success": true, "returns": [
        {"id": 11, "order_id": 101, "customer_name": "Meera Rao", "product_name": "Apple", "reason": "Bruised", "status": "Requested", "refund_amount": "250.00"},
        {"id": 12, "order_id": 102, "customer_name": "Ravi Kumar", "product_name": "Banana", "reason": "Late", "status": "Rejected", "refund_amount": "80.00"}
    ]})
}

pub fn ok() -> Value {
    json!({"success": true})
}

/// Every dashboard route, answered successfully.
pub fn dashboard(mock: &MockTransport) {
    mock.get(
        "/dashboard",
        json!({"total_products": 3, "total_orders": 3, "total_revenue": "1370.00", "pending_orders": 1, "low_stock_count": 2, "pending_returns": 1}),
    )
    .get(
        "/metrics",
        json!({"conversion_rate": 3.2, "avg_order_value": "456.67", "avg_lifetime_value": "32150.00", "recent_orders": 2}),
    )
    .get(
        "/dashboard/monthly-sales",
        json!([{"month": "2024-04", "total": "900.00"}, {"month": "2024-05", "total": "1370.00"}]),
    )
    .get(
        "/dashboard/best-sellers",
        json!([{"name": "Banana", "total_qty": "90"}, {"name": "Apple", "total_qty": 40}]),
    )
    .get(
        "/orders/statistics",
        json!({"success": true, "statistics": {"total_orders": 3, "by_status": [{"status": "Pending", "count": 1}, {"status": "Shipped", "count": 1}, {"status": "Delivered", "count": 1}], "orders_today": 1, "revenue_today": "80.00"}}),
    )
    .get("/customers", customers())
    .get("/sellers", sellers())
    .get(
        "/dashboard/revenue-summary",
        json!({"today": "80.00", "week": "120.00", "month": "1370.00", "total": "1370.00"}),
    )
    .get("/orders/pending", json!({"success": true, "orders": [orders()[1].clone()]}))
    .get(
        "/reports/sales-by-category",
        json!({"success": true, "data": [{"category": "Fruit", "revenue": "1330.00"}, {"category": "Bakery", "total_revenue": "40.00"}]}),
    )
    .get("/customers/top?limit=5", json!({"success": true, "customers": customers()}))
    .get("/orders/recent?limit=5", json!({"success": true, "orders": orders()}))
    .get(
        "/inventory/low-stock?threshold=10",
        json!({"success": true, "products": [{"product_id": 1, "name": "Apple", "category": "Fruit", "quantityavailable": 0}, {"product_id": 3, "name": "apple pie", "category": "Bakery", "quantityavailable": 2}]}),
    )
    .get(
        "/inventory-alerts",
        json!({"success": true, "alerts": [{"product_name": "Apple", "current_stock": 0, "threshold": 10}]}),
    );
}

/// Record-set routes for every list view.
pub fn catalog(mock: &MockTransport) {
    mock.get("/products", products())
        .get("/sellers", sellers())
        .get("/orders", orders())
        .get("/customers", customers())
        .get("/returns", returns());
}

/// Reports routes for the given month range.
pub fn reports(mock: &MockTransport, from: &str, to: &str) {
    mock.get(
        &format!("/reports/revenue?from={}&to={}", from, to),
        json!({"total_revenue": "1370.00", "monthly_data": [{"month": "2024-04", "total": "900.00", "order_count": 2}, {"month": "2024-05", "total": "470.00", "order_count": 1}]}),
    )
    .get(
        &format!("/reports/sales-by-category?from={}&to={}", from, to),
        json!({"success": true, "data": [{"category": "Fruit", "revenue": "1330.00"}]}),
    )
    .get(
        "/reports/daily-sales?days=30",
        json!({"success": true, "sales": [{"sale_date": "2024-05-04", "revenue": "40.00", "order_count": 1}, {"sale_date": "2024-05-03", "revenue": "80.00", "order_count": 1}]}),
    )
    .get("/customers/top?limit=5", json!({"success": true, "customers": customers()}))
    .get("/dashboard/best-sellers", json!([{"name": "Banana", "total_qty": 90}]));
}

pub fn analytics(mock: &MockTransport) {
    mock.get(
        "/analytics/sales-forecast",
        json!({"success": true, "forecast": [{"month": "2024-06", "revenue": "1500.00", "orders": 4}]}),
    )
    .get(
        "/analytics/customer-behavior",
        json!({"success": true, "behavior": [{"segment": "VIP", "avg_orders": 12, "avg_order_value": "900", "avg_lifetime_value": "62000"}]}),
    )
    .get(
        "/analytics/category-performance",
        json!({"success": true, "performance": [{"category": "Fruit", "total_sold": 130, "revenue": "1330.00"}]}),
    )
    .get(
        "/orders/shipping-status-overview",
        json!({"success": true, "overview": [{"shipping_status": "Delivered", "count": 3, "total_value": "1250.00"}, {"shipping_status": "Pending", "count": 1, "total_value": "80.00"}]}),
    )
    .get("/products", products())
    .get(
        "/orders/statistics",
        json!({"success": true, "statistics": {"by_status": [{"status": "Pending", "count": 1}]}}),
    )
    .get("/customers/top?limit=10", json!({"success": true, "customers": customers()}));
}

pub fn login_ok(mock: &MockTransport) {
    mock.on(Method::Post, "/login", ok());
}
