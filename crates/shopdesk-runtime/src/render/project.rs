//! Payload projections for the dashboard, reports and analytics panels.

use shopdesk_engine::{
    LOW_STOCK_VISIBLE, LtvTier, StockLevel, daily_window, format_compact, format_inr, format_percent,
    shipping_shares, top_by_sold,
};
use shopdesk_types::{BestSeller, Customer, Order};

use super::panel::Panel;
use super::view::{ChartKind, Dataset, ListRow, PanelView, Tile};
use crate::config::PanelSettings;
use crate::orchestrate::PanelData;

const PRODUCT_PERFORMANCE_LIMIT: usize = 10;

/// Project a panel payload into its visual state. A missing payload, a payload
/// of the wrong kind or an empty list all render the panel's empty state.
pub fn project(panel: Panel, data: Option<&PanelData>, settings: &PanelSettings) -> PanelView {
    let Some(data) = data else {
        return PanelView::empty(panel.empty_message());
    };
    let view = match (panel, data) {
        (Panel::Summary, PanelData::Summary(s)) => tiles(vec![
            Tile::new("Products", s.total_products.to_string()),
            Tile::new("Orders", s.total_orders.to_string()),
            Tile::new("Revenue", format_inr(s.total_revenue)),
            Tile::new("Pending Orders", s.pending_orders.to_string()),
            Tile::new("Low Stock", s.low_stock_count.to_string()),
            Tile::new("Pending Returns", s.pending_returns.to_string()),
        ]),
        (Panel::Conversion, PanelData::Metrics(m)) => tiles(vec![
            Tile::new("Conversion", format!("{}%", m.conversion_rate)),
            Tile::new("Avg Order Value", format_inr(m.avg_order_value)),
            Tile::new("Avg Lifetime Value", format_inr(m.avg_lifetime_value)),
            Tile::new("Orders (24h)", m.recent_orders.to_string()),
        ]),
        (Panel::TodayStats, PanelData::OrderStats(s)) => tiles(vec![
            Tile::new("Orders Today", s.orders_today.to_string()),
            Tile::new("Revenue Today", format_inr(s.revenue_today)),
        ]),
        (Panel::CustomerCount, PanelData::Count(n)) => tiles(vec![Tile::new("Customers", format_compact(*n as u64))]),
        (Panel::SellerCount, PanelData::Count(n)) => tiles(vec![Tile::new("Sellers", format_compact(*n as u64))]),
        (Panel::RevenueSummary, PanelData::RevenueSummary(r)) => tiles(vec![
            Tile::new("Today", format_inr(r.today)),
            Tile::new("This Week", format_inr(r.week)),
            Tile::new("This Month", format_inr(r.month)),
            Tile::new("All Time", format_inr(r.total)),
        ]),
        (Panel::MonthlySales, PanelData::MonthlySales(rows)) => chart(
            Dataset::new(ChartKind::Line, rows.iter().map(|r| r.month.clone()).collect())
                .with_series("Revenue", rows.iter().map(|r| r.total).collect()),
        ),
        (Panel::BestSellers | Panel::ReportBestSellers, PanelData::BestSellers(rows)) => best_sellers(rows),
        (Panel::PendingOrders | Panel::RecentOrders, PanelData::Orders(rows)) => order_list(rows),
        (Panel::CategorySales, PanelData::CategorySales(rows)) => chart(
            Dataset::new(ChartKind::Doughnut, rows.iter().map(|r| r.category.clone()).collect())
                .with_series("Revenue", rows.iter().map(|r| r.revenue()).collect()),
        ),
        (Panel::TopCustomers | Panel::ReportTopCustomers, PanelData::Customers(rows)) => top_customers(rows),
        (Panel::LowStock, PanelData::LowStock(rows)) => {
            let mut shown: Vec<ListRow> = rows
                .iter()
                .take(LOW_STOCK_VISIBLE)
                .map(|p| {
                    ListRow::new(&p.name)
                        .secondary(&p.category)
                        .value(format!("{} left", p.quantityavailable))
                        .badge(stock_badge(StockLevel::of(p.quantityavailable)))
                })
                .collect();
            if rows.len() > LOW_STOCK_VISIBLE {
                shown.push(ListRow::new(format!(
                    "+{} more products with low stock",
                    rows.len() - LOW_STOCK_VISIBLE
                )));
            }
            list(shown)
        }
        (Panel::InventoryAlerts, PanelData::Alerts(rows)) => list(
            rows.iter()
                .map(|a| {
                    ListRow::new(&a.product_name)
                        .value(format!("{} in stock", a.current_stock))
                        .secondary(format!("threshold {}", a.threshold))
                })
                .collect(),
        ),

        (Panel::ReportSummary, PanelData::RevenueReport(r)) => tiles(vec![
            Tile::new("Total Revenue", format_inr(r.total_revenue)),
            Tile::new("Orders", r.order_count().to_string()),
            Tile::new("Avg Order Value", format_inr(r.average_order())),
        ]),
        (Panel::RevenueTrend, PanelData::RevenueReport(r)) => chart(
            Dataset::new(ChartKind::Bar, r.monthly_data.iter().map(|m| m.month.clone()).collect())
                .with_series("Revenue", r.monthly_data.iter().map(|m| m.total).collect()),
        ),
        (Panel::ReportCategories, PanelData::CategorySales(rows)) => chart(
            Dataset::new(ChartKind::Bar, rows.iter().map(|r| r.category.clone()).collect())
                .with_series("Revenue", rows.iter().map(|r| r.revenue()).collect()),
        ),
        (Panel::DailySales, PanelData::DailySales(rows)) => {
            let window = daily_window(rows, settings.daily_sales_days as usize);
            chart(
                Dataset::new(ChartKind::Line, window.iter().map(|r| r.date.clone()).collect())
                    .with_series("Revenue", window.iter().map(|r| r.revenue).collect())
                    .with_series("Orders", window.iter().map(|r| r.order_count as f64).collect()),
            )
        }

        (Panel::Forecast, PanelData::Forecast(rows)) => chart(
            Dataset::new(ChartKind::Line, rows.iter().map(|r| r.month.clone()).collect())
                .with_series("Revenue", rows.iter().map(|r| r.revenue).collect())
                .with_series("Orders", rows.iter().map(|r| r.orders as f64).collect()),
        ),
        (Panel::RevenueTrends, PanelData::Forecast(rows)) => chart(
            Dataset::new(ChartKind::Line, rows.iter().map(|r| r.month.clone()).collect())
                .with_series("Revenue", rows.iter().map(|r| r.revenue).collect())
                .with_series(
                    "Avg Order Value",
                    rows.iter()
                        .map(|r| if r.orders > 0 { r.revenue / r.orders as f64 } else { 0.0 })
                        .collect(),
                ),
        ),
        (Panel::CustomerBehavior, PanelData::Behavior(rows)) => chart(
            Dataset::new(ChartKind::Bar, rows.iter().map(|r| r.segment.clone()).collect())
                .with_series("Avg Order Value", rows.iter().map(|r| r.avg_order_value).collect())
                .with_series("Avg Lifetime Value", rows.iter().map(|r| r.avg_lifetime_value).collect()),
        ),
        (Panel::CategoryPerformance, PanelData::CategoryPerformance(rows)) => chart(
            Dataset::new(ChartKind::Bar, rows.iter().map(|r| r.category.clone()).collect())
                .with_series("Revenue", rows.iter().map(|r| r.revenue).collect())
                .with_series("Units Sold", rows.iter().map(|r| r.total_sold as f64).collect()),
        ),
        (Panel::ShippingOverview, PanelData::Shipping(rows)) => list(
            shipping_shares(rows)
                .into_iter()
                .map(|(r, share)| {
                    ListRow::new(&r.shipping_status)
                        .secondary(format!("{} orders ({})", r.count, format_percent(share)))
                        .value(format_inr(r.total_value))
                })
                .collect(),
        ),
        (Panel::ProductPerformance, PanelData::Products(rows)) => list(
            top_by_sold(rows, PRODUCT_PERFORMANCE_LIMIT)
                .into_iter()
                .enumerate()
                .map(|(i, p)| {
                    ListRow::new(format!("{}. {}", i + 1, p.name))
                        .secondary(format!("{} views", p.views))
                        .value(format!("{} sold", p.total_sold))
                })
                .collect(),
        ),
        (Panel::OrderStatus, PanelData::OrderStats(s)) => chart(
            Dataset::new(ChartKind::Doughnut, s.by_status.iter().map(|r| r.status.clone()).collect())
                .with_series("Orders", s.by_status.iter().map(|r| r.count as f64).collect()),
        ),
        (Panel::LifetimeValue, PanelData::Customers(rows)) => list(
            rows.iter()
                .map(|c| {
                    let ltv = c.lifetime();
                    ListRow::new(&c.name)
                        .secondary(format!("{} orders", c.total_orders))
                        .value(format_inr(ltv))
                        .badge(LtvTier::of(ltv).label())
                })
                .collect(),
        ),
        _ => {
            tracing::warn!(?panel, "payload does not belong to panel");
            None
        }
    };

    match view {
        Some(view) => view,
        None => PanelView::empty(panel.empty_message()),
    }
}

fn tiles(tiles: Vec<Tile>) -> Option<PanelView> {
    Some(PanelView::Tiles { tiles })
}

fn list(rows: Vec<ListRow>) -> Option<PanelView> {
    (!rows.is_empty()).then_some(PanelView::List { rows })
}

fn chart(dataset: Dataset) -> Option<PanelView> {
    (!dataset.is_empty()).then_some(PanelView::Chart(dataset))
}

fn best_sellers(rows: &[BestSeller]) -> Option<PanelView> {
    list(
        rows.iter()
            .enumerate()
            .map(|(i, b)| ListRow::new(format!("{}. {}", i + 1, b.name)).value(format!("{} sold", b.total_qty)))
            .collect(),
    )
}

fn order_list(rows: &[Order]) -> Option<PanelView> {
    list(
        rows.iter()
            .map(|o| {
                ListRow::new(format!("Order #{}", o.order_id))
                    .secondary(format!("{} · {}", o.customer().unwrap_or("Guest"), o.display_date()))
                    .value(format_inr(o.total_amount))
                    .badge(o.status.as_str())
            })
            .collect(),
    )
}

fn top_customers(rows: &[Customer]) -> Option<PanelView> {
    list(
        rows.iter()
            .map(|c| {
                ListRow::new(&c.name)
                    .secondary(format!("{} orders", c.total_orders))
                    .value(format_inr(c.spent()))
            })
            .collect(),
    )
}

fn stock_badge(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Out => "out",
        StockLevel::Critical => "critical",
        StockLevel::Low => "low",
    }
}
