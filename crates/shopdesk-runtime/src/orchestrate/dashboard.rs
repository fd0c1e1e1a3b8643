use futures::future::BoxFuture;

use shopdesk_api::ApiClient;

use super::{PanelData, Step, step};
use crate::config::PanelSettings;
use crate::render::Panel;

/// Panels fed by each dashboard request, in request order.
pub(super) const PANEL_REQUESTS: &[&[Panel]] = &[
    &[Panel::Summary],
    &[Panel::Conversion],
    &[Panel::MonthlySales],
    &[Panel::BestSellers],
    &[Panel::TodayStats],
    &[Panel::CustomerCount],
    &[Panel::SellerCount],
    &[Panel::RevenueSummary],
    &[Panel::PendingOrders],
    &[Panel::CategorySales],
    &[Panel::TopCustomers],
    &[Panel::RecentOrders],
    &[Panel::LowStock],
    &[Panel::InventoryAlerts],
];

pub(super) fn requests<'a>(api: &'a ApiClient, settings: &PanelSettings) -> Vec<BoxFuture<'a, Step>> {
    let top = settings.top_customers_limit;
    let recent = settings.recent_orders_limit;
    let threshold = settings.low_stock_threshold;
    vec![
        step(PANEL_REQUESTS[0], "dashboard", api.dashboard_summary(), PanelData::Summary),
        step(PANEL_REQUESTS[1], "metrics", api.performance_metrics(), PanelData::Metrics),
        step(PANEL_REQUESTS[2], "monthly-sales", api.monthly_sales(), PanelData::MonthlySales),
        step(PANEL_REQUESTS[3], "best-sellers", api.best_sellers(), PanelData::BestSellers),
        step(PANEL_REQUESTS[4], "order-statistics", api.order_statistics(), PanelData::OrderStats),
        step(
            PANEL_REQUESTS[5],
            "customers",
            async move { api.customers().await.map(|rows| rows.len()) },
            PanelData::Count,
        ),
        step(
            PANEL_REQUESTS[6],
            "sellers",
            async move { api.sellers().await.map(|rows| rows.len()) },
            PanelData::Count,
        ),
        step(PANEL_REQUESTS[7], "revenue-summary", api.revenue_summary(), PanelData::RevenueSummary),
        step(PANEL_REQUESTS[8], "pending-orders", api.pending_orders(), PanelData::Orders),
        step(PANEL_REQUESTS[9], "sales-by-category", api.sales_by_category(None), PanelData::CategorySales),
        step(PANEL_REQUESTS[10], "top-customers", api.top_customers(top), PanelData::Customers),
        step(PANEL_REQUESTS[11], "recent-orders", api.recent_orders(recent), PanelData::Orders),
        step(PANEL_REQUESTS[12], "low-stock", api.low_stock(threshold), PanelData::LowStock),
        step(PANEL_REQUESTS[13], "inventory-alerts", api.inventory_alerts(), PanelData::Alerts),
    ]
}
