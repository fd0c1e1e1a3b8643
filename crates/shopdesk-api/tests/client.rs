use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};
use shopdesk_api::{ApiClient, ApiError, ApiRequest, Method, MonthRange, Transport};
use shopdesk_types::{OrderStatus, ProductDraft, ReturnStatus, StockUpdate};
use std::sync::{Arc, Mutex};

/// Answers every request with the same body and remembers what was sent.
struct Echo {
    reply: Value,
    seen: Mutex<Vec<ApiRequest>>,
}

impl Echo {
    fn new(reply: Value) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }

    fn last(&self) -> ApiRequest {
        self.seen.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl Transport for Echo {
    async fn send(&self, request: ApiRequest) -> shopdesk_api::Result<Value> {
        self.seen.lock().unwrap().push(request);
        Ok(self.reply.clone())
    }
}

fn client(transport: Arc<Echo>) -> ApiClient {
    ApiClient::new(transport, "http://shop.test/api/admin/")
}

#[tokio::test]
async fn test_order_statistics_unwraps_named_object() -> Result<()> {
    // Given
    let echo = Echo::new(json!({
        "success": true,
        "statistics": {
            "total_orders": 12,
            "by_status": [{"status": "Pending", "count": 4}],
            "avg_order_value": "850.5",
            "orders_today": 2,
            "revenue_today": "1700.00"
        }
    }));

    // When
    let stats = client(echo.clone()).order_statistics().await?;

    // Then
    assert_eq!(stats.total_orders, 12);
    assert_eq!(stats.by_status[0].count, 4);
    assert_eq!(stats.revenue_today, 1700.0);
    assert_eq!(echo.last().target(), "/orders/statistics");
    Ok(())
}

#[tokio::test]
async fn test_low_stock_sends_threshold_and_reads_products() -> Result<()> {
    let echo = Echo::new(json!({"success": true, "products": [{"name": "Mug", "quantityavailable": 3}], "count": 1}));

    let rows = client(echo.clone()).low_stock(10).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantityavailable, 3);
    assert_eq!(echo.last().target(), "/inventory/low-stock?threshold=10");
    Ok(())
}

#[tokio::test]
async fn test_report_range_goes_into_query() -> Result<()> {
    let echo = Echo::new(json!({"total_revenue": 0, "monthly_data": []}));
    let range = MonthRange {
        from: "2024-01".to_string(),
        to: "2024-06".to_string(),
    };

    client(echo.clone()).revenue_report(&range).await?;

    assert_eq!(echo.last().target(), "/reports/revenue?from=2024-01&to=2024-06");
    Ok(())
}

#[tokio::test]
async fn test_rejected_list_surfaces_reason() -> Result<()> {
    let echo = Echo::new(json!({"success": false, "error": "db offline"}));

    let err = client(echo).pending_orders().await.unwrap_err();

    assert!(matches!(err, ApiError::Rejected(ref r) if r == "db offline"));
    Ok(())
}

#[tokio::test]
async fn test_login_failure_without_reason_reads_as_bad_credentials() -> Result<()> {
    let echo = Echo::new(json!({"success": false}));

    let err = client(echo).login("admin", "nope").await.unwrap_err();

    assert_eq!(err.user_message(), "Invalid username or password");
    Ok(())
}

#[tokio::test]
async fn test_save_product_picks_method_from_identifier() -> Result<()> {
    let echo = Echo::new(json!({"success": true}));
    let api = client(echo.clone());
    let mut draft = ProductDraft {
        product_id: None,
        name: "Desk".to_string(),
        category: "Office".to_string(),
        price: 4999.0,
        quantityavailable: 3,
        description: String::new(),
        seller_id: Some(2),
    };

    api.save_product(&draft).await?;
    let create = echo.last();
    draft.product_id = Some(8);
    api.save_product(&draft).await?;
    let update = echo.last();

    assert_eq!((create.method, create.path.as_str()), (Method::Post, "/products"));
    assert_eq!((update.method, update.path.as_str()), (Method::Put, "/products/8"));
    assert!(update.body.unwrap().get("product_id").is_none());
    Ok(())
}

#[tokio::test]
async fn test_bulk_bodies() -> Result<()> {
    let echo = Echo::new(json!({"success": true, "updated_count": 2}));
    let api = client(echo.clone());

    let receipt = api
        .bulk_update_stock(&[
            StockUpdate { product_id: 1, stock: 5 },
            StockUpdate { product_id: 2, stock: 5 },
        ])
        .await?;
    assert_eq!(receipt.updated_count, 2);
    assert_eq!(
        echo.last().body,
        Some(json!({"updates": [{"product_id": 1, "stock": 5}, {"product_id": 2, "stock": 5}]}))
    );

    api.bulk_update_order_status(&[4, 5], &OrderStatus::Shipped).await?;
    assert_eq!(echo.last().body, Some(json!({"order_ids": [4, 5], "status": "Shipped"})));

    api.update_return_status(9, &ReturnStatus::Approved).await?;
    assert_eq!(echo.last().path, "/returns/9");
    Ok(())
}

#[test]
fn test_bill_url_uses_trimmed_base() {
    let api = client(Echo::new(Value::Null));
    assert_eq!(api.bill_pdf_url(17), "http://shop.test/api/admin/bills/17/pdf");
}
