use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::debug;

use shopdesk_types::{
    BehaviorSegment, BestSeller, CategoryPerformance, CategorySale, Customer, DailySale, DashboardSummary,
    ForecastPoint, InventoryAlert, LowStockProduct, MonthlySale, MutationReceipt, Order, OrderStatistics,
    OrderStatus, PerformanceMetrics, Product, ProductDraft, ReturnRequest, ReturnStatus, RevenueReport,
    RevenueSummary, Seller, SellerDraft, ShippingStatusCount, StockUpdate,
};

use crate::envelope::Envelope;
use crate::error::{ApiError, Result};
use crate::transport::{ApiRequest, Transport};

const BAD_CREDENTIALS: &str = "Invalid username or password";

/// Inclusive month range, both ends formatted `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRange {
    pub from: String,
    pub to: String,
}

/// Typed access to every admin endpoint the console uses.
///
/// Cheap to clone; orchestrator tasks each hold their own handle.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base: String,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn call(&self, request: ApiRequest) -> Result<Envelope> {
        debug!(%request, "api call");
        let body = self.transport.send(request).await?;
        Ok(Envelope::new(body))
    }

    async fn list<T: DeserializeOwned>(&self, request: ApiRequest, key: &str) -> Result<Vec<T>> {
        self.call(request).await?.into_list(key)
    }

    async fn object<T: DeserializeOwned>(&self, request: ApiRequest, key: Option<&str>) -> Result<T> {
        self.call(request).await?.into_object(key)
    }

    async fn mutate(&self, request: ApiRequest) -> Result<MutationReceipt> {
        let receipt: MutationReceipt = match self.call(request).await?.into_payload()? {
            Value::Null => MutationReceipt::default(),
            body => serde_json::from_value(body)?,
        };
        Ok(receipt)
    }

    // --- session ---

    /// `POST /login`. Only an explicit `success: true` signs in; any other body,
    /// or a `{success: false}` without a reason, reads as invalid credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let body = json!({ "username": username, "password": password });
        match self.call(ApiRequest::post("/login", body)).await? {
            Envelope::Payload(body) if body.get("success") == Some(&Value::Bool(true)) => Ok(()),
            Envelope::Payload(_) => Err(ApiError::Rejected(BAD_CREDENTIALS.to_string())),
            Envelope::Rejected(reason) if reason == "Request failed" => {
                Err(ApiError::Rejected(BAD_CREDENTIALS.to_string()))
            }
            Envelope::Rejected(reason) => Err(ApiError::Rejected(reason)),
        }
    }

    // --- record sets ---

    pub async fn products(&self) -> Result<Vec<Product>> {
        self.list(ApiRequest::get("/products"), "products").await
    }

    pub async fn sellers(&self) -> Result<Vec<Seller>> {
        self.list(ApiRequest::get("/sellers"), "sellers").await
    }

    pub async fn orders(&self) -> Result<Vec<Order>> {
        self.list(ApiRequest::get("/orders"), "orders").await
    }

    pub async fn customers(&self) -> Result<Vec<Customer>> {
        self.list(ApiRequest::get("/customers"), "customers").await
    }

    /// `GET /returns`, optionally narrowed server-side by status.
    pub async fn returns(&self, status: Option<&ReturnStatus>) -> Result<Vec<ReturnRequest>> {
        let mut request = ApiRequest::get("/returns");
        if let Some(status) = status {
            request = request.param("status", status);
        }
        self.list(request, "returns").await
    }

    pub async fn customer_history(&self, customer_id: u64) -> Result<Vec<Order>> {
        self.list(ApiRequest::get(format!("/customers/{}/history", customer_id)), "orders")
            .await
    }

    pub async fn export_orders(&self) -> Result<Vec<Order>> {
        self.list(ApiRequest::get("/export/orders"), "orders").await
    }

    // --- dashboard ---

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        self.object(ApiRequest::get("/dashboard"), None).await
    }

    pub async fn performance_metrics(&self) -> Result<PerformanceMetrics> {
        self.object(ApiRequest::get("/metrics"), None).await
    }

    pub async fn monthly_sales(&self) -> Result<Vec<MonthlySale>> {
        self.list(ApiRequest::get("/dashboard/monthly-sales"), "sales").await
    }

    pub async fn best_sellers(&self) -> Result<Vec<BestSeller>> {
        self.list(ApiRequest::get("/dashboard/best-sellers"), "products").await
    }

    pub async fn order_statistics(&self) -> Result<OrderStatistics> {
        self.object(ApiRequest::get("/orders/statistics"), Some("statistics"))
            .await
    }

    pub async fn revenue_summary(&self) -> Result<RevenueSummary> {
        self.object(ApiRequest::get("/dashboard/revenue-summary"), None).await
    }

    pub async fn pending_orders(&self) -> Result<Vec<Order>> {
        self.list(ApiRequest::get("/orders/pending"), "orders").await
    }

    pub async fn recent_orders(&self, limit: u32) -> Result<Vec<Order>> {
        self.list(ApiRequest::get("/orders/recent").param("limit", limit), "orders")
            .await
    }

    pub async fn top_customers(&self, limit: u32) -> Result<Vec<Customer>> {
        self.list(ApiRequest::get("/customers/top").param("limit", limit), "customers")
            .await
    }

    pub async fn low_stock(&self, threshold: u32) -> Result<Vec<LowStockProduct>> {
        self.list(
            ApiRequest::get("/inventory/low-stock").param("threshold", threshold),
            "products",
        )
        .await
    }

    pub async fn inventory_alerts(&self) -> Result<Vec<InventoryAlert>> {
        self.list(ApiRequest::get("/inventory-alerts"), "alerts").await
    }

    // --- reports ---

    pub async fn sales_by_category(&self, range: Option<&MonthRange>) -> Result<Vec<CategorySale>> {
        let mut request = ApiRequest::get("/reports/sales-by-category");
        if let Some(range) = range {
            request = request.param("from", &range.from).param("to", &range.to);
        }
        self.list(request, "data").await
    }

    pub async fn revenue_report(&self, range: &MonthRange) -> Result<RevenueReport> {
        let request = ApiRequest::get("/reports/revenue")
            .param("from", &range.from)
            .param("to", &range.to);
        self.object(request, None).await
    }

    pub async fn daily_sales(&self, days: u32) -> Result<Vec<DailySale>> {
        self.list(ApiRequest::get("/reports/daily-sales").param("days", days), "sales")
            .await
    }

    // --- analytics ---

    pub async fn sales_forecast(&self) -> Result<Vec<ForecastPoint>> {
        self.list(ApiRequest::get("/analytics/sales-forecast"), "forecast")
            .await
    }

    pub async fn customer_behavior(&self) -> Result<Vec<BehaviorSegment>> {
        self.list(ApiRequest::get("/analytics/customer-behavior"), "behavior")
            .await
    }

    pub async fn category_performance(&self) -> Result<Vec<CategoryPerformance>> {
        self.list(ApiRequest::get("/analytics/category-performance"), "performance")
            .await
    }

    pub async fn shipping_overview(&self) -> Result<Vec<ShippingStatusCount>> {
        self.list(ApiRequest::get("/orders/shipping-status-overview"), "overview")
            .await
    }

    // --- mutations ---

    pub async fn save_product(&self, draft: &ProductDraft) -> Result<MutationReceipt> {
        let body = serde_json::to_value(draft)?;
        let request = match draft.product_id {
            Some(id) => ApiRequest::put(format!("/products/{}", id), body),
            None => ApiRequest::post("/products", body),
        };
        self.mutate(request).await
    }

    pub async fn delete_product(&self, product_id: u64) -> Result<MutationReceipt> {
        self.mutate(ApiRequest::delete(format!("/products/{}", product_id)))
            .await
    }

    pub async fn save_seller(&self, draft: &SellerDraft) -> Result<MutationReceipt> {
        let body = serde_json::to_value(draft)?;
        let request = match draft.id {
            Some(id) => ApiRequest::put(format!("/sellers/{}", id), body),
            None => ApiRequest::post("/sellers", body),
        };
        self.mutate(request).await
    }

    pub async fn delete_seller(&self, seller_id: u64) -> Result<MutationReceipt> {
        self.mutate(ApiRequest::delete(format!("/sellers/{}", seller_id)))
            .await
    }

    pub async fn toggle_customer(&self, customer_id: u64) -> Result<MutationReceipt> {
        self.mutate(ApiRequest::put(format!("/customers/{}/toggle", customer_id), json!({})))
            .await
    }

    pub async fn update_return_status(&self, return_id: u64, status: &ReturnStatus) -> Result<MutationReceipt> {
        let body = json!({ "status": status.as_str() });
        self.mutate(ApiRequest::put(format!("/returns/{}", return_id), body))
            .await
    }

    pub async fn bulk_update_stock(&self, updates: &[StockUpdate]) -> Result<MutationReceipt> {
        let body = json!({ "updates": updates });
        self.mutate(ApiRequest::post("/bulk/products/update-stock", body))
            .await
    }

    pub async fn bulk_delete_products(&self, product_ids: &[u64]) -> Result<MutationReceipt> {
        let body = json!({ "product_ids": product_ids });
        self.mutate(ApiRequest::post("/bulk/products/delete", body)).await
    }

    pub async fn bulk_update_order_status(&self, order_ids: &[u64], status: &OrderStatus) -> Result<MutationReceipt> {
        let body = json!({ "order_ids": order_ids, "status": status.as_str() });
        self.mutate(ApiRequest::post("/bulk/orders/update-status", body))
            .await
    }

    // --- exports ---

    /// Absolute URL of the printable bill for an order.
    pub fn bill_pdf_url(&self, order_id: u64) -> String {
        format!("{}/bills/{}/pdf", self.base, order_id)
    }
}
