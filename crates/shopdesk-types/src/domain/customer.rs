use serde::{Deserialize, Serialize};

use crate::util::{lenient_bool, lenient_f64, lenient_opt_f64, lenient_opt_string, lenient_string, lenient_u64};

/// A customer row. Spend aggregates are computed server-side and only read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub customer_id: u64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub blocked: bool,

    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub lifetime_value: Option<f64>,

    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub total_spent: Option<f64>,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_orders: u64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_order_value: f64,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub segment: Option<String>,
}

impl Customer {
    /// Amount spent as shown on ranking lists.
    pub fn spent(&self) -> f64 {
        self.total_spent.or(self.lifetime_value).unwrap_or(0.0)
    }

    /// Lifetime value, falling back to total spend when the view lacks it.
    pub fn lifetime(&self) -> f64 {
        self.lifetime_value.or(self.total_spent).unwrap_or(0.0)
    }

    pub fn state_label(&self) -> &'static str {
        if self.blocked { "Blocked" } else { "Active" }
    }
}
