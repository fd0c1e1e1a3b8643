use serde::Serialize;

use shopdesk_types::{Customer, Order, Product, ReturnRequest, Seller};

/// The record set of a list view. Replaced wholesale by every orchestrator run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RecordSet {
    Products { products: Vec<Product>, sellers: Vec<Seller> },
    Orders(Vec<Order>),
    Customers(Vec<Customer>),
    Sellers(Vec<Seller>),
    Returns(Vec<ReturnRequest>),
    Bills(Vec<Order>),
}

impl RecordSet {
    pub fn len(&self) -> usize {
        match self {
            RecordSet::Products { products, .. } => products.len(),
            RecordSet::Orders(rows) | RecordSet::Bills(rows) => rows.len(),
            RecordSet::Customers(rows) => rows.len(),
            RecordSet::Sellers(rows) => rows.len(),
            RecordSet::Returns(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn orders(&self) -> Option<&[Order]> {
        match self {
            RecordSet::Orders(rows) | RecordSet::Bills(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn order(&self, order_id: u64) -> Option<&Order> {
        self.orders()?.iter().find(|o| o.order_id == order_id)
    }

    pub fn product(&self, product_id: u64) -> Option<&Product> {
        match self {
            RecordSet::Products { products, .. } => products.iter().find(|p| p.product_id == product_id),
            _ => None,
        }
    }

    /// Sellers known to this record set: the sellers view itself, or the
    /// lookup fetched alongside products.
    pub fn sellers(&self) -> &[Seller] {
        match self {
            RecordSet::Products { sellers, .. } | RecordSet::Sellers(sellers) => sellers,
            _ => &[],
        }
    }

    pub fn seller(&self, seller_id: u64) -> Option<&Seller> {
        self.sellers().iter().find(|s| s.id == seller_id)
    }

    pub fn customer(&self, customer_id: u64) -> Option<&Customer> {
        match self {
            RecordSet::Customers(rows) => rows.iter().find(|c| c.customer_id == customer_id),
            _ => None,
        }
    }

    pub fn return_request(&self, return_id: u64) -> Option<&ReturnRequest> {
        match self {
            RecordSet::Returns(rows) => rows.iter().find(|r| r.id == return_id),
            _ => None,
        }
    }
}
