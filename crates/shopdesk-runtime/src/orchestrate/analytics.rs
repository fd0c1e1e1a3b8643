use futures::future::BoxFuture;

use shopdesk_api::ApiClient;

use super::{PanelData, Step, step};
use crate::config::PanelSettings;
use crate::render::Panel;

pub(super) const PANEL_REQUESTS: &[&[Panel]] = &[
    &[Panel::Forecast, Panel::RevenueTrends],
    &[Panel::CustomerBehavior],
    &[Panel::CategoryPerformance],
    &[Panel::ShippingOverview],
    &[Panel::ProductPerformance],
    &[Panel::OrderStatus],
    &[Panel::LifetimeValue],
];

pub(super) fn requests<'a>(api: &'a ApiClient, settings: &PanelSettings) -> Vec<BoxFuture<'a, Step>> {
    vec![
        step(PANEL_REQUESTS[0], "sales-forecast", api.sales_forecast(), PanelData::Forecast),
        step(PANEL_REQUESTS[1], "customer-behavior", api.customer_behavior(), PanelData::Behavior),
        step(
            PANEL_REQUESTS[2],
            "category-performance",
            api.category_performance(),
            PanelData::CategoryPerformance,
        ),
        step(PANEL_REQUESTS[3], "shipping-overview", api.shipping_overview(), PanelData::Shipping),
        step(PANEL_REQUESTS[4], "products", api.products(), PanelData::Products),
        step(PANEL_REQUESTS[5], "order-statistics", api.order_statistics(), PanelData::OrderStats),
        step(
            PANEL_REQUESTS[6],
            "lifetime-value",
            api.top_customers(settings.lifetime_value_limit),
            PanelData::Customers,
        ),
    ]
}
