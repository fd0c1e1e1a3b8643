//! Export sinks and CSV assembly.

use shopdesk_types::Order;

use crate::{Error, Result};

pub const ORDERS_CSV_HEADER: [&str; 5] = ["Order ID", "Date", "Customer", "Status", "Amount"];
pub const BULK_EXPORT_NAME: &str = "bulk_export.csv";
pub const ORDERS_EXPORT_NAME: &str = "orders.csv";

/// Where exported documents go. Both calls return a human-readable location
/// (a path or URL) for the confirmation notice.
pub trait ExportSink: Send {
    fn save_csv(&mut self, name: &str, content: &str) -> Result<String>;
    fn open_pdf(&mut self, order_id: u64, url: &str) -> Result<String>;
}

/// Orders as CSV, one row per order in the given order.
pub fn orders_csv(orders: &[&Order]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(ORDERS_CSV_HEADER)?;
    for order in orders {
        writer.write_record([
            order.order_id.to_string(),
            order.display_date().to_string(),
            order.customer().unwrap_or_default().to_string(),
            order.status.to_string(),
            format!("{:.2}", order.total_amount),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|err| Error::Export(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| Error::Export(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_orders_csv_quotes_commas() {
        let orders: Vec<Order> = serde_json::from_value(json!([
            {"order_id": 2, "date": "2024-05-02", "customer_name": "Rao, Meera", "status": "Shipped", "total_amount": "1299.5"},
            {"order_id": 1, "date": "2024-05-01", "status": "Pending", "total_amount": 80}
        ]))
        .unwrap();
        let rows: Vec<&Order> = orders.iter().collect();

        let csv = orders_csv(&rows).unwrap();

        insta::assert_snapshot!(csv, @r#"
        Order ID,Date,Customer,Status,Amount
        2,2024-05-02,"Rao, Meera",Shipped,1299.50
        1,2024-05-01,,Pending,80.00
        "#);
    }
}
