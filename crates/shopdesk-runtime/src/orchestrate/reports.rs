use chrono::Local;
use futures::future::BoxFuture;

use shopdesk_api::{ApiClient, MonthRange};
use shopdesk_engine::month_range;

use super::{PanelData, Step, step};
use crate::config::PanelSettings;
use crate::render::Panel;

pub(super) const PANEL_REQUESTS: &[&[Panel]] = &[
    &[Panel::ReportSummary, Panel::RevenueTrend],
    &[Panel::ReportCategories],
    &[Panel::DailySales],
    &[Panel::ReportTopCustomers],
    &[Panel::ReportBestSellers],
];

/// Range used when a run starts without one.
pub(super) fn default_range(settings: &PanelSettings) -> MonthRange {
    let (from, to) = month_range(Local::now().date_naive(), settings.report_months);
    MonthRange { from, to }
}

pub(super) fn requests<'a>(
    api: &'a ApiClient,
    settings: &PanelSettings,
    range: &'a MonthRange,
) -> Vec<BoxFuture<'a, Step>> {
    vec![
        step(PANEL_REQUESTS[0], "revenue-report", api.revenue_report(range), PanelData::RevenueReport),
        step(
            PANEL_REQUESTS[1],
            "report-categories",
            api.sales_by_category(Some(range)),
            PanelData::CategorySales,
        ),
        step(PANEL_REQUESTS[2], "daily-sales", api.daily_sales(settings.daily_sales_days), PanelData::DailySales),
        step(
            PANEL_REQUESTS[3],
            "top-customers",
            api.top_customers(settings.top_customers_limit),
            PanelData::Customers,
        ),
        step(PANEL_REQUESTS[4], "best-sellers", api.best_sellers(), PanelData::BestSellers),
    ]
}
