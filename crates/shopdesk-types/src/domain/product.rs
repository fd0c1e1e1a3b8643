use serde::{Deserialize, Serialize};

use crate::util::{lenient_f64, lenient_opt_string, lenient_opt_u64, lenient_string, lenient_u64};

/// A catalogue entry as returned by `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub product_id: u64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub quantityavailable: u64,

    #[serde(default, deserialize_with = "lenient_opt_u64")]
    pub seller_id: Option<u64>,

    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub description: Option<String>,

    /// Units sold, present when the API joins sales figures.
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_sold: u64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub views: u64,
}

/// Body of `POST /products` and `PUT /products/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(skip_serializing)]
    pub product_id: Option<u64>,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantityavailable: u64,
    pub description: String,
    pub seller_id: Option<u64>,
}

impl ProductDraft {
    pub fn is_update(&self) -> bool {
        self.product_id.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub product_id: u64,
    pub stock: u64,
}
