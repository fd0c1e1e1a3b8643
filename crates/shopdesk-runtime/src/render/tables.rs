//! Record-set views rendered as tables.

use shopdesk_engine::{
    CustomerSort, Facet, OrderSort, ProductSort, Query, Record, ReturnSort, SellerSort, SortKey, facet_options,
    filter_sort, format_inr,
};
use shopdesk_types::{Customer, Order, Product, ReturnRequest, Seller};

use super::panel::Panel;
use super::view::{PanelView, RowAction, TableRow, TableView};
use crate::records::RecordSet;
use crate::router::{QueryState, View};

const UNKNOWN_SELLER: &str = "-";
const GUEST: &str = "Guest";

/// Run the record set through the filter/sort engine and lay the result out as
/// a table. A record set of the wrong kind for `view` renders the empty state.
pub fn table_for(view: View, records: &RecordSet, state: &QueryState) -> PanelView {
    let Some(panel) = Panel::table_of(view) else {
        return PanelView::empty("No data");
    };
    if records.is_empty() {
        return PanelView::empty(panel.empty_message());
    }

    let table = match (view, records) {
        (View::Products, RecordSet::Products { products, sellers }) => products_table(products, sellers, state),
        (View::Orders, RecordSet::Orders(rows)) => orders_table(rows, state),
        (View::Bills, RecordSet::Bills(rows)) => bills_table(rows, state),
        (View::Customers, RecordSet::Customers(rows)) => customers_table(rows, state),
        (View::Sellers, RecordSet::Sellers(rows)) => sellers_table(rows, state),
        (View::Returns, RecordSet::Returns(rows)) => returns_table(rows, state),
        _ => return PanelView::empty(panel.empty_message()),
    };

    if table.rows.is_empty() {
        PanelView::empty(&format!("No {} match", view.name()))
    } else {
        PanelView::Table(table)
    }
}

/// Labels of the sort keys offered by a list view, in cycling order.
pub fn sort_labels(view: View) -> Vec<&'static str> {
    fn labels<T, S: SortKey<T>>() -> Vec<&'static str> {
        S::ALL.iter().map(|k| k.label()).collect()
    }
    match view {
        View::Products => labels::<Product, ProductSort>(),
        View::Orders | View::Bills => labels::<Order, OrderSort>(),
        View::Customers => labels::<Customer, CustomerSort>(),
        View::Sellers => labels::<Seller, SellerSort>(),
        View::Returns => labels::<ReturnRequest, ReturnSort>(),
        View::Dashboard | View::Reports | View::Analytics => Vec::new(),
    }
}

/// Facet values a host offers next to the search box, "All" first.
pub fn facet_choices(records: &RecordSet) -> Vec<String> {
    let mut choices = vec![Facet::All.label().to_string()];
    choices.extend(match records {
        RecordSet::Products { products, .. } => facet_options(products),
        RecordSet::Orders(rows) | RecordSet::Bills(rows) => facet_options(rows),
        RecordSet::Customers(rows) => facet_options(rows),
        RecordSet::Sellers(_) => Vec::new(),
        RecordSet::Returns(rows) => facet_options(rows),
    });
    choices
}

/// Orders of an orders or bills record set as the table currently shows them.
pub fn visible_orders<'a>(records: &'a RecordSet, state: &QueryState) -> Option<Vec<&'a Order>> {
    match records {
        RecordSet::Orders(rows) | RecordSet::Bills(rows) => Some(filter_sort(rows, &query::<Order>(state))),
        _ => None,
    }
}

fn query<T: Record>(state: &QueryState) -> Query<T::Sort> {
    Query {
        search: state.search.clone(),
        facet: state.facet.clone(),
        sort: <T::Sort as SortKey<T>>::ALL.get(state.sort).copied().unwrap_or_default(),
    }
}

fn products_table(products: &[Product], sellers: &[Seller], state: &QueryState) -> TableView {
    let rows = filter_sort(products, &query::<Product>(state))
        .into_iter()
        .map(|p| {
            let seller = p
                .seller_id
                .and_then(|id| sellers.iter().find(|s| s.id == id))
                .map(|s| s.name.clone())
                .unwrap_or_else(|| UNKNOWN_SELLER.to_string());
            TableRow {
                id: p.product_id,
                cells: vec![
                    p.product_id.to_string(),
                    p.name.clone(),
                    p.category.clone(),
                    format_inr(p.price),
                    p.quantityavailable.to_string(),
                    seller,
                ],
                actions: vec![RowAction::Edit, RowAction::Delete],
            }
        })
        .collect();
    TableView {
        columns: vec!["ID", "Name", "Category", "Price", "Stock", "Seller"],
        rows,
        total: products.len(),
    }
}

fn order_cells(o: &Order) -> Vec<String> {
    vec![
        format!("#{}", o.order_id),
        o.display_date().to_string(),
        o.customer().unwrap_or(GUEST).to_string(),
        o.status.to_string(),
        format_inr(o.total_amount),
    ]
}

fn orders_table(orders: &[Order], state: &QueryState) -> TableView {
    let rows = filter_sort(orders, &query::<Order>(state))
        .into_iter()
        .map(|o| TableRow {
            id: o.order_id,
            cells: order_cells(o),
            actions: vec![RowAction::Detail],
        })
        .collect();
    TableView {
        columns: vec!["Order", "Date", "Customer", "Status", "Amount"],
        rows,
        total: orders.len(),
    }
}

fn bills_table(orders: &[Order], state: &QueryState) -> TableView {
    let rows = filter_sort(orders, &query::<Order>(state))
        .into_iter()
        .map(|o| TableRow {
            id: o.order_id,
            cells: order_cells(o),
            actions: vec![RowAction::Detail, RowAction::Pdf],
        })
        .collect();
    TableView {
        columns: vec!["Bill", "Date", "Customer", "Status", "Amount"],
        rows,
        total: orders.len(),
    }
}

fn customers_table(customers: &[Customer], state: &QueryState) -> TableView {
    let rows = filter_sort(customers, &query::<Customer>(state))
        .into_iter()
        .map(|c| TableRow {
            id: c.customer_id,
            cells: vec![
                c.name.clone(),
                c.email.clone(),
                c.phone.clone(),
                c.total_orders.to_string(),
                format_inr(c.spent()),
                c.state_label().to_string(),
            ],
            actions: vec![RowAction::History, RowAction::Toggle],
        })
        .collect();
    TableView {
        columns: vec!["Name", "Email", "Phone", "Orders", "Spent", "Status"],
        rows,
        total: customers.len(),
    }
}

fn sellers_table(sellers: &[Seller], state: &QueryState) -> TableView {
    let rows = filter_sort(sellers, &query::<Seller>(state))
        .into_iter()
        .map(|s| TableRow {
            id: s.id,
            cells: vec![s.name.clone(), s.company.clone(), s.email.clone(), s.phone.clone()],
            actions: vec![RowAction::Edit, RowAction::Delete],
        })
        .collect();
    TableView {
        columns: vec!["Name", "Company", "Email", "Phone"],
        rows,
        total: sellers.len(),
    }
}

fn returns_table(returns: &[ReturnRequest], state: &QueryState) -> TableView {
    let rows = filter_sort(returns, &query::<ReturnRequest>(state))
        .into_iter()
        .map(|r| TableRow {
            id: r.id,
            cells: vec![
                format!("#{}", r.order_id),
                r.customer_name.clone(),
                r.product_name.clone(),
                r.reason.clone(),
                format_inr(r.refund_amount),
                r.status.to_string(),
            ],
            actions: if r.status.is_open() {
                vec![RowAction::Approve, RowAction::Reject]
            } else {
                Vec::new()
            },
        })
        .collect();
    TableView {
        columns: vec!["Order", "Customer", "Product", "Reason", "Refund", "Status"],
        rows,
        total: returns.len(),
    }
}
