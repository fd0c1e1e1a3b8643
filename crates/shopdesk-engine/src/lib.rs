// Engine module - pure, synchronous logic over record sets and aggregate payloads.
// Nothing here touches the network; the runtime feeds it data and renders the results.

pub mod figures;
pub mod format;
pub mod query;

pub use figures::{
    LtvTier, StockLevel, daily_window, month_range, shipping_shares, top_by_sold, LOW_STOCK_VISIBLE,
};
pub use format::{format_compact, format_inr, format_percent, title_case};
pub use query::{
    collate, facet_options, filter_sort, CustomerSort, Facet, OrderSort, ProductSort, Query, Record, ReturnSort,
    SellerSort, SortKey,
};
