//! Client-side filtering and sorting of a view's record set.
//!
//! [`filter_sort`] is re-run on every search keystroke, facet change or sort
//! change. It borrows the record set, never reorders it in place, and keeps the
//! original relative order for records that compare equal.

mod collate;
mod records;
mod sort;

pub use collate::collate;
pub use sort::{CustomerSort, OrderSort, ProductSort, ReturnSort, SellerSort, SortKey};

/// A record type the engine can filter and sort.
pub trait Record {
    type Sort: SortKey<Self>;

    /// Case-insensitive substring match; `needle` is already lowercased and non-empty.
    fn matches_text(&self, needle: &str) -> bool;

    /// Value compared against [`Facet::Only`]. `None` means the entity has no facet.
    fn facet(&self) -> Option<&str>;
}

/// Category / status / state selector. `All` is the "all" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    pub fn from_selection(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Facet::All
        } else {
            Facet::Only(value.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Facet::All => "All",
            Facet::Only(value) => value,
        }
    }

    fn admits(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Facet::All, _) | (_, None) => true,
            (Facet::Only(wanted), Some(value)) => wanted == value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query<S> {
    pub search: String,
    pub facet: Facet,
    pub sort: S,
}

impl<S: Default> Query<S> {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn filter_sort<'a, T: Record>(records: &'a [T], query: &Query<T::Sort>) -> Vec<&'a T> {
    let needle = query.search.trim().to_lowercase();
    let mut rows: Vec<&T> = records
        .iter()
        .filter(|r| needle.is_empty() || r.matches_text(&needle))
        .filter(|r| query.facet.admits(r.facet()))
        .collect();
    // slice::sort_by is stable, so ties keep record-set order
    rows.sort_by(|a, b| query.sort.compare(a, b));
    rows
}

/// Distinct facet values in first-seen order.
pub fn facet_options<T: Record>(records: &[T]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in records.iter().filter_map(|r| r.facet()) {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
