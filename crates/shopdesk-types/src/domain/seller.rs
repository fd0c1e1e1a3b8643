use serde::{Deserialize, Serialize};

use crate::util::{lenient_string, lenient_u64};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub id: u64,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub company: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
}

impl Seller {
    /// Label used by seller pickers: `Name (Company)`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.company)
    }

    pub fn contact(&self) -> String {
        format!("{}, {}", self.email, self.phone)
    }
}

/// Body of `POST /sellers` and `PUT /sellers/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerDraft {
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

impl SellerDraft {
    pub fn is_update(&self) -> bool {
        self.id.is_some()
    }
}
