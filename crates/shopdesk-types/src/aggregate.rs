//! Aggregate payloads served by the dashboard, report and analytics endpoints.
//!
//! These are the inner shapes; envelope unwrapping happens in `shopdesk-api`.

use serde::{Deserialize, Serialize};

use crate::util::{lenient_bool, lenient_f64, lenient_opt_f64, lenient_opt_string, lenient_string, lenient_u64};

/// `GET /dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_products: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub orders_today: u64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue_today: f64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub pending_orders: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub low_stock_count: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub pending_returns: u64,
}

/// `GET /metrics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub conversion_rate: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_order_value: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_lifetime_value: f64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub recent_orders: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySale {
    #[serde(default, deserialize_with = "lenient_string")]
    pub month: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSeller {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_qty: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub count: u64,
}

/// The `statistics` object of `GET /orders/statistics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStatistics {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_orders: u64,
    #[serde(default)]
    pub by_status: Vec<StatusCount>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_order_value: f64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub orders_today: u64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue_today: f64,
}

/// `GET /dashboard/revenue-summary`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub today: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub week: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub month: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySale {
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub order_count: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_qty: u64,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub revenue: Option<f64>,
    /// Older report builds name the revenue column `total_revenue`.
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub total_revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_price: f64,
}

impl CategorySale {
    pub fn revenue(&self) -> f64 {
        self.revenue.or(self.total_revenue).unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockProduct {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub product_id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub quantityavailable: u64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryAlert {
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_name: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub current_stock: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub threshold: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(default, deserialize_with = "lenient_string")]
    pub month: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorSegment {
    #[serde(default, deserialize_with = "lenient_string")]
    pub segment: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_orders: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_order_value: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_lifetime_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPerformance {
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_products: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_stock: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub out_of_stock: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_sold: u64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingStatusCount {
    #[serde(default, deserialize_with = "lenient_string")]
    pub shipping_status: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    #[serde(default, deserialize_with = "lenient_string")]
    pub month: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total: f64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub order_count: u64,
}

/// `GET /reports/revenue?from&to`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueReport {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_revenue: f64,
    #[serde(default)]
    pub monthly_data: Vec<MonthlyRevenue>,
}

impl RevenueReport {
    pub fn order_count(&self) -> u64 {
        self.monthly_data.iter().map(|m| m.order_count).sum()
    }

    /// Revenue per order, zero when the range holds no orders.
    pub fn average_order(&self) -> f64 {
        match self.order_count() {
            0 => 0.0,
            n => self.total_revenue / n as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySale {
    #[serde(default, alias = "sale_date", deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub order_count: u64,
}

/// Reply to every mutation. Counts are only present on bulk endpoints. A reply
/// without a truthy `success` flag is a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationReceipt {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub updated_count: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_average_with_no_orders_is_zero() {
        let report = RevenueReport {
            total_revenue: 1200.0,
            monthly_data: vec![],
        };
        assert_eq!(report.order_count(), 0);
        assert_eq!(report.average_order(), 0.0);
    }

    #[test]
    fn test_report_average_sums_monthly_counts() {
        let report: RevenueReport = serde_json::from_value(json!({
            "total_revenue": "3000.00",
            "monthly_data": [
                {"month": "2024-01", "total": "1000", "order_count": 2},
                {"month": "2024-02", "total": "2000", "order_count": 4}
            ]
        }))
        .unwrap();
        assert_eq!(report.order_count(), 6);
        assert_eq!(report.average_order(), 500.0);
    }

    #[test]
    fn test_category_sale_reads_either_revenue_column() {
        let new: CategorySale = serde_json::from_value(json!({"category": "Toys", "revenue": 10})).unwrap();
        let old: CategorySale =
            serde_json::from_value(json!({"category": "Toys", "total_revenue": "12.5"})).unwrap();
        assert_eq!(new.revenue(), 10.0);
        assert_eq!(old.revenue(), 12.5);
    }

    #[test]
    fn test_daily_sale_accepts_sale_date() {
        let row: DailySale = serde_json::from_value(json!({"sale_date": "2024-03-01", "revenue": 5})).unwrap();
        assert_eq!(row.date, "2024-03-01");
    }

    #[test]
    fn test_receipt_without_flag_is_not_success() {
        let receipt: MutationReceipt = serde_json::from_value(json!({"updated_count": 3})).unwrap();
        assert!(!receipt.success);
        assert_eq!(receipt.updated_count, 3);

        let receipt: MutationReceipt = serde_json::from_value(json!({"success": 1, "deleted_count": 2})).unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.deleted_count, 2);
    }
}
