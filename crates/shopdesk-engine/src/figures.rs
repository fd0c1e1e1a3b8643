//! Derived display figures computed from aggregate payloads.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use shopdesk_types::{DailySale, Product, ShippingStatusCount};

/// Rows shown by the low-stock panel before collapsing into "+N more".
pub const LOW_STOCK_VISIBLE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockLevel {
    Out,
    Critical,
    Low,
}

impl StockLevel {
    pub fn of(quantity: u64) -> Self {
        match quantity {
            0 => StockLevel::Out,
            1..=5 => StockLevel::Critical,
            _ => StockLevel::Low,
        }
    }
}

/// Customer lifetime-value tier used by the analytics list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LtvTier {
    Vip,
    Regular,
    New,
}

impl LtvTier {
    pub fn of(lifetime_value: f64) -> Self {
        if lifetime_value > 50_000.0 {
            LtvTier::Vip
        } else if lifetime_value > 20_000.0 {
            LtvTier::Regular
        } else {
            LtvTier::New
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LtvTier::Vip => "VIP",
            LtvTier::Regular => "Regular",
            LtvTier::New => "New",
        }
    }
}

/// Share of each shipping status in the total order count, in percent.
pub fn shipping_shares(rows: &[ShippingStatusCount]) -> Vec<(&ShippingStatusCount, f64)> {
    let total: u64 = rows.iter().map(|r| r.count).sum();
    rows.iter()
        .map(|r| {
            let share = if total > 0 {
                r.count as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            (r, share)
        })
        .collect()
}

/// Best-selling products by units sold, highest first.
pub fn top_by_sold(products: &[Product], limit: usize) -> Vec<&Product> {
    let mut rows: Vec<&Product> = products.iter().collect();
    rows.sort_by(|a, b| b.total_sold.cmp(&a.total_sold));
    rows.truncate(limit);
    rows
}

/// The API lists daily sales newest first; charts want the latest `days` oldest first.
pub fn daily_window(rows: &[DailySale], days: usize) -> Vec<&DailySale> {
    let mut window: Vec<&DailySale> = rows.iter().take(days).collect();
    window.reverse();
    window
}

/// Default report range: from `months` months before `today` up to today's month,
/// both as `YYYY-MM`.
pub fn month_range(today: NaiveDate, months: u32) -> (String, String) {
    let start = today
        .with_day(1)
        .and_then(|first| first.checked_sub_months(Months::new(months)))
        .unwrap_or(today);
    (
        format!("{:04}-{:02}", start.year(), start.month()),
        format!("{:04}-{:02}", today.year(), today.month()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_levels() {
        assert_eq!(StockLevel::of(0), StockLevel::Out);
        assert_eq!(StockLevel::of(5), StockLevel::Critical);
        assert_eq!(StockLevel::of(6), StockLevel::Low);
    }

    #[test]
    fn test_ltv_tier_boundaries() {
        assert_eq!(LtvTier::of(50_000.0), LtvTier::Regular);
        assert_eq!(LtvTier::of(50_000.01), LtvTier::Vip);
        assert_eq!(LtvTier::of(20_000.0), LtvTier::New);
    }

    #[test]
    fn test_shipping_shares_with_zero_total() {
        let rows = vec![ShippingStatusCount {
            shipping_status: "Packed".to_string(),
            count: 0,
            total_value: 0.0,
        }];
        assert_eq!(shipping_shares(&rows)[0].1, 0.0);
    }

    #[test]
    fn test_month_range_crosses_year() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(month_range(today, 6), ("2023-09".to_string(), "2024-03".to_string()));
    }

    #[test]
    fn test_daily_window_takes_newest_then_reverses() {
        let rows: Vec<DailySale> = (1..=4)
            .map(|d| DailySale {
                date: format!("2024-01-0{}", 5 - d),
                revenue: d as f64,
                order_count: 1,
            })
            .collect();
        let window = daily_window(&rows, 3);
        let dates: Vec<&str> = window.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-02", "2024-01-03", "2024-01-04"]);
    }
}
