use std::cmp::Ordering;
use std::fmt::Debug;

use shopdesk_types::{Customer, Order, Product, ReturnRequest, Seller};

use super::collate;

/// A closed set of orderings over `T`.
pub trait SortKey<T: ?Sized>: Copy + Eq + Debug + Default + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn compare(self, a: &T, b: &T) -> Ordering;

    /// Next key in [`Self::ALL`], wrapping around.
    fn cycle(self) -> Self {
        let idx = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    #[default]
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    StockAsc,
    StockDesc,
    Category,
}

impl SortKey<Product> for ProductSort {
    const ALL: &'static [Self] = &[
        Self::NameAsc,
        Self::NameDesc,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::StockAsc,
        Self::StockDesc,
        Self::Category,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name A-Z",
            Self::NameDesc => "Name Z-A",
            Self::PriceAsc => "Price low-high",
            Self::PriceDesc => "Price high-low",
            Self::StockAsc => "Stock low-high",
            Self::StockDesc => "Stock high-low",
            Self::Category => "Category",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::NameAsc => collate(&a.name, &b.name),
            Self::NameDesc => collate(&b.name, &a.name),
            Self::PriceAsc => a.price.total_cmp(&b.price),
            Self::PriceDesc => b.price.total_cmp(&a.price),
            Self::StockAsc => a.quantityavailable.cmp(&b.quantityavailable),
            Self::StockDesc => b.quantityavailable.cmp(&a.quantityavailable),
            Self::Category => collate(&a.category, &b.category),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderSort {
    #[default]
    Newest,
    Oldest,
    AmountDesc,
    AmountAsc,
}

impl SortKey<Order> for OrderSort {
    const ALL: &'static [Self] = &[Self::Newest, Self::Oldest, Self::AmountDesc, Self::AmountAsc];

    fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::AmountDesc => "Amount high-low",
            Self::AmountAsc => "Amount low-high",
        }
    }

    fn compare(self, a: &Order, b: &Order) -> Ordering {
        match self {
            Self::Newest => b.order_id.cmp(&a.order_id),
            Self::Oldest => a.order_id.cmp(&b.order_id),
            Self::AmountDesc => b.total_amount.total_cmp(&a.total_amount),
            Self::AmountAsc => a.total_amount.total_cmp(&b.total_amount),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomerSort {
    /// Order the API returned (lifetime value, highest first).
    #[default]
    Ranked,
    NameAsc,
    SpentDesc,
}

impl SortKey<Customer> for CustomerSort {
    const ALL: &'static [Self] = &[Self::Ranked, Self::NameAsc, Self::SpentDesc];

    fn label(self) -> &'static str {
        match self {
            Self::Ranked => "Ranked",
            Self::NameAsc => "Name A-Z",
            Self::SpentDesc => "Spent high-low",
        }
    }

    fn compare(self, a: &Customer, b: &Customer) -> Ordering {
        match self {
            Self::Ranked => Ordering::Equal,
            Self::NameAsc => collate(&a.name, &b.name),
            Self::SpentDesc => b.spent().total_cmp(&a.spent()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SellerSort {
    #[default]
    NameAsc,
    Company,
}

impl SortKey<Seller> for SellerSort {
    const ALL: &'static [Self] = &[Self::NameAsc, Self::Company];

    fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name A-Z",
            Self::Company => "Company",
        }
    }

    fn compare(self, a: &Seller, b: &Seller) -> Ordering {
        match self {
            Self::NameAsc => collate(&a.name, &b.name),
            Self::Company => collate(&a.company, &b.company),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnSort {
    /// API order (most recently created first).
    #[default]
    Newest,
    RefundDesc,
}

impl SortKey<ReturnRequest> for ReturnSort {
    const ALL: &'static [Self] = &[Self::Newest, Self::RefundDesc];

    fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::RefundDesc => "Refund high-low",
        }
    }

    fn compare(self, a: &ReturnRequest, b: &ReturnRequest) -> Ordering {
        match self {
            Self::Newest => Ordering::Equal,
            Self::RefundDesc => b.refund_amount.total_cmp(&a.refund_amount),
        }
    }
}
