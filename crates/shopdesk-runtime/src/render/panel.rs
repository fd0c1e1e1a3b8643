use serde::Serialize;

use crate::router::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    // dashboard
    Summary,
    Conversion,
    MonthlySales,
    BestSellers,
    TodayStats,
    CustomerCount,
    SellerCount,
    RevenueSummary,
    PendingOrders,
    CategorySales,
    TopCustomers,
    RecentOrders,
    LowStock,
    InventoryAlerts,

    // list views
    ProductTable,
    OrderTable,
    CustomerTable,
    SellerTable,
    ReturnTable,
    BillTable,

    // reports
    ReportSummary,
    RevenueTrend,
    ReportCategories,
    DailySales,
    ReportTopCustomers,
    ReportBestSellers,

    // analytics
    Forecast,
    RevenueTrends,
    CustomerBehavior,
    CategoryPerformance,
    ShippingOverview,
    ProductPerformance,
    OrderStatus,
    LifetimeValue,
}

impl Panel {
    pub const DASHBOARD: [Panel; 14] = [
        Panel::Summary,
        Panel::Conversion,
        Panel::MonthlySales,
        Panel::BestSellers,
        Panel::TodayStats,
        Panel::CustomerCount,
        Panel::SellerCount,
        Panel::RevenueSummary,
        Panel::PendingOrders,
        Panel::CategorySales,
        Panel::TopCustomers,
        Panel::RecentOrders,
        Panel::LowStock,
        Panel::InventoryAlerts,
    ];

    pub const REPORTS: [Panel; 6] = [
        Panel::ReportSummary,
        Panel::RevenueTrend,
        Panel::ReportCategories,
        Panel::DailySales,
        Panel::ReportTopCustomers,
        Panel::ReportBestSellers,
    ];

    pub const ANALYTICS: [Panel; 8] = [
        Panel::Forecast,
        Panel::RevenueTrends,
        Panel::CustomerBehavior,
        Panel::CategoryPerformance,
        Panel::ShippingOverview,
        Panel::ProductPerformance,
        Panel::OrderStatus,
        Panel::LifetimeValue,
    ];

    /// Panels laid out by `view`, in display order.
    pub fn of_view(view: View) -> &'static [Panel] {
        match view {
            View::Dashboard => &Self::DASHBOARD,
            View::Reports => &Self::REPORTS,
            View::Analytics => &Self::ANALYTICS,
            View::Products => &[Panel::ProductTable],
            View::Orders => &[Panel::OrderTable],
            View::Customers => &[Panel::CustomerTable],
            View::Sellers => &[Panel::SellerTable],
            View::Returns => &[Panel::ReturnTable],
            View::Bills => &[Panel::BillTable],
        }
    }

    pub fn table_of(view: View) -> Option<Panel> {
        match view {
            View::Products => Some(Panel::ProductTable),
            View::Orders => Some(Panel::OrderTable),
            View::Customers => Some(Panel::CustomerTable),
            View::Sellers => Some(Panel::SellerTable),
            View::Returns => Some(Panel::ReturnTable),
            View::Bills => Some(Panel::BillTable),
            View::Dashboard | View::Reports | View::Analytics => None,
        }
    }

    pub fn is_chart(self) -> bool {
        matches!(
            self,
            Panel::MonthlySales
                | Panel::CategorySales
                | Panel::RevenueTrend
                | Panel::ReportCategories
                | Panel::DailySales
                | Panel::Forecast
                | Panel::RevenueTrends
                | Panel::CustomerBehavior
                | Panel::CategoryPerformance
                | Panel::OrderStatus
        )
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Summary => "Overview",
            Panel::Conversion => "Performance",
            Panel::MonthlySales => "Monthly Sales",
            Panel::BestSellers => "Best Sellers",
            Panel::TodayStats => "Today",
            Panel::CustomerCount => "Customers",
            Panel::SellerCount => "Sellers",
            Panel::RevenueSummary => "Revenue",
            Panel::PendingOrders => "Pending Orders",
            Panel::CategorySales => "Sales by Category",
            Panel::TopCustomers => "Top Customers",
            Panel::RecentOrders => "Recent Orders",
            Panel::LowStock => "Low Stock",
            Panel::InventoryAlerts => "Inventory Alerts",
            Panel::ProductTable => "Products",
            Panel::OrderTable => "Orders",
            Panel::CustomerTable => "Customers",
            Panel::SellerTable => "Sellers",
            Panel::ReturnTable => "Returns",
            Panel::BillTable => "Bills",
            Panel::ReportSummary => "Revenue Report",
            Panel::RevenueTrend => "Monthly Revenue",
            Panel::ReportCategories => "Category Revenue",
            Panel::DailySales => "Daily Sales",
            Panel::ReportTopCustomers => "Top Customers",
            Panel::ReportBestSellers => "Best Sellers",
            Panel::Forecast => "Sales Forecast",
            Panel::RevenueTrends => "Revenue Trends",
            Panel::CustomerBehavior => "Customer Behavior",
            Panel::CategoryPerformance => "Category Performance",
            Panel::ShippingOverview => "Shipping Status",
            Panel::ProductPerformance => "Product Performance",
            Panel::OrderStatus => "Order Status",
            Panel::LifetimeValue => "Customer Lifetime Value",
        }
    }

    /// Shown whenever the panel has nothing to display, including after a failed request.
    pub fn empty_message(self) -> &'static str {
        match self {
            Panel::BestSellers | Panel::ReportBestSellers => "No sales data available",
            Panel::TopCustomers | Panel::ReportTopCustomers | Panel::LifetimeValue => "No customer data",
            Panel::PendingOrders => "No pending orders",
            Panel::RecentOrders => "No recent orders",
            Panel::LowStock => "All products are well stocked",
            Panel::InventoryAlerts => "No inventory alerts",
            Panel::ShippingOverview => "No shipping data",
            Panel::ProductPerformance => "No product data",
            Panel::ProductTable => "No products found",
            Panel::OrderTable | Panel::BillTable => "No orders found",
            Panel::CustomerTable => "No customers found",
            Panel::SellerTable => "No sellers found",
            Panel::ReturnTable => "No return requests",
            p if p.is_chart() => "No chart data",
            _ => "No data",
        }
    }
}
