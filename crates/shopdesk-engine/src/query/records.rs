use shopdesk_types::{Customer, Order, Product, ReturnRequest, Seller};

use super::sort::{CustomerSort, OrderSort, ProductSort, ReturnSort, SellerSort};
use super::{Record, contains};

impl Record for Product {
    type Sort = ProductSort;

    fn matches_text(&self, needle: &str) -> bool {
        contains(&self.name, needle) || contains(&self.category, needle)
    }

    fn facet(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Record for Order {
    type Sort = OrderSort;

    fn matches_text(&self, needle: &str) -> bool {
        self.customer_name.as_deref().is_some_and(|name| contains(name, needle))
            || format!("#{}", self.order_id).contains(needle)
            || contains(self.status.as_str(), needle)
    }

    fn facet(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

impl Record for Customer {
    type Sort = CustomerSort;

    fn matches_text(&self, needle: &str) -> bool {
        contains(&self.name, needle) || contains(&self.email, needle)
    }

    fn facet(&self) -> Option<&str> {
        Some(self.state_label())
    }
}

impl Record for Seller {
    type Sort = SellerSort;

    fn matches_text(&self, needle: &str) -> bool {
        contains(&self.name, needle) || contains(&self.company, needle) || contains(&self.email, needle)
    }

    fn facet(&self) -> Option<&str> {
        None
    }
}

impl Record for ReturnRequest {
    type Sort = ReturnSort;

    fn matches_text(&self, needle: &str) -> bool {
        contains(&self.customer_name, needle)
            || contains(&self.product_name, needle)
            || contains(&self.reason, needle)
    }

    fn facet(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}
