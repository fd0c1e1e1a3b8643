use serde::{Deserialize, Serialize};

use super::ReturnStatus;
use crate::util::{lenient_f64, lenient_opt_u64, lenient_string, lenient_u64};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRequest {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub id: u64,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub order_id: u64,

    #[serde(default, deserialize_with = "lenient_opt_u64")]
    pub product_id: Option<u64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub customer_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub product_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: String,

    #[serde(default)]
    pub status: ReturnStatus,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub refund_amount: f64,
}
