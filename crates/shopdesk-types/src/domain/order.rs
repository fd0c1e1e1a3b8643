use serde::{Deserialize, Serialize};

use super::OrderStatus;
use crate::util::{lenient_f64, lenient_opt_string, lenient_opt_u64, lenient_string, lenient_u64};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, alias = "product_name", deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,

    #[serde(default = "one", deserialize_with = "lenient_u64")]
    pub qty: u64,
}

fn one() -> u64 {
    1
}

impl LineItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.qty as f64
    }
}

/// An order row from `GET /orders` and the order summary endpoints.
///
/// The API reports the date three ways depending on the endpoint: `date`
/// (`YYYY-MM-DD`), `formatted_date` (`YYYY-MM-DD HH:MM`) and the raw `order_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub order_id: u64,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub formatted_date: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub order_date: Option<String>,

    #[serde(default)]
    pub status: OrderStatus,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub shipping_status: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_amount: f64,

    #[serde(default, deserialize_with = "lenient_opt_u64")]
    pub customer_id: Option<u64>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub customer_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub customer_email: Option<String>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub customer_phone: Option<String>,

    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Order {
    pub fn display_date(&self) -> &str {
        self.formatted_date
            .as_deref()
            .or(self.date.as_deref())
            .or(self.order_date.as_deref())
            .unwrap_or("")
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer_name.as_deref().filter(|name| !name.is_empty())
    }
}
