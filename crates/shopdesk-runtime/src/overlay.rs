//! Read-only overlays opened on top of a list view.

use serde::Serialize;

use shopdesk_types::{Customer, Order};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailLine {
    pub name: String,
    pub price: f64,
    pub qty: u64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    pub order_id: u64,
    pub date: String,
    pub status: String,
    pub customer: String,
    pub email: String,
    pub phone: String,
    pub lines: Vec<DetailLine>,
    /// The order's billed amount, not the sum of the lines.
    pub grand_total: f64,
}

impl OrderDetail {
    pub fn of(order: &Order) -> Self {
        let or_na = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or("N/A")
                .to_string()
        };
        Self {
            order_id: order.order_id,
            date: order.display_date().to_string(),
            status: order.status.to_string(),
            customer: or_na(&order.customer_name),
            email: or_na(&order.customer_email),
            phone: or_na(&order.customer_phone),
            lines: order
                .items
                .iter()
                .map(|item| DetailLine {
                    name: item.name.clone(),
                    price: item.price,
                    qty: item.qty,
                    total: item.line_total(),
                })
                .collect(),
            grand_total: order.total_amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub order_id: u64,
    pub date: String,
    pub items: usize,
    pub total: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerHistory {
    pub customer_id: u64,
    pub customer_name: String,
    pub rows: Vec<HistoryRow>,
}

impl CustomerHistory {
    pub fn new(customer_id: u64, customer: Option<&Customer>, orders: &[Order]) -> Self {
        Self {
            customer_id,
            customer_name: customer.map_or_else(|| format!("Customer #{}", customer_id), |c| c.name.clone()),
            rows: orders
                .iter()
                .map(|o| HistoryRow {
                    order_id: o.order_id,
                    date: o.display_date().to_string(),
                    items: o.items.len(),
                    total: o.total_amount,
                    status: o.status.to_string(),
                })
                .collect(),
        }
    }

    pub fn lifetime_total(&self) -> f64 {
        self.rows.iter().map(|r| r.total).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Overlay {
    OrderDetail(OrderDetail),
    CustomerHistory(CustomerHistory),
}

impl Overlay {
    pub fn title(&self) -> String {
        match self {
            Overlay::OrderDetail(detail) => format!("Order #{}", detail.order_id),
            Overlay::CustomerHistory(history) => format!("Purchase history: {}", history.customer_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_detail_uses_billed_total() {
        let order: Order = serde_json::from_value(json!({
            "order_id": 31,
            "date": "2024-04-02",
            "status": "Shipped",
            "total_amount": "1048.00",
            "customer_name": "Meera",
            "items": [
                {"name": "Mug", "price": "249.50", "qty": 2},
                {"product_name": "Coaster", "price": 499}
            ]
        }))
        .unwrap();

        let detail = OrderDetail::of(&order);

        assert_eq!(detail.lines[0].total, 499.0);
        assert_eq!(detail.lines[1].qty, 1);
        assert_eq!(detail.grand_total, 1048.0);
        assert_eq!(detail.email, "N/A");
    }

    #[test]
    fn test_history_without_customer_record() {
        let history = CustomerHistory::new(8, None, &[]);
        assert_eq!(history.customer_name, "Customer #8");
        assert_eq!(history.lifetime_total(), 0.0);
    }
}
