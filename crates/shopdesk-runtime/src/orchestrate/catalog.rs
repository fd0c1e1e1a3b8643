use shopdesk_api::ApiClient;

use super::settle;
use crate::records::RecordSet;
use crate::router::View;

/// Fetch the record set of a list view. Every request settles before the set
/// is built; failures leave the affected list empty.
pub(super) async fn fetch(api: &ApiClient, view: View) -> RecordSet {
    match view {
        View::Products => {
            let (products, sellers) = futures::join!(api.products(), api.sellers());
            RecordSet::Products {
                products: settle("products", products).unwrap_or_default(),
                sellers: settle("sellers", sellers).unwrap_or_default(),
            }
        }
        View::Orders => RecordSet::Orders(settle("orders", api.orders().await).unwrap_or_default()),
        View::Bills => RecordSet::Bills(settle("bills", api.orders().await).unwrap_or_default()),
        View::Customers => RecordSet::Customers(settle("customers", api.customers().await).unwrap_or_default()),
        View::Sellers => RecordSet::Sellers(settle("sellers", api.sellers().await).unwrap_or_default()),
        View::Returns => RecordSet::Returns(settle("returns", api.returns(None).await).unwrap_or_default()),
        View::Dashboard | View::Reports | View::Analytics => {
            tracing::error!(%view, "view has no record set");
            RecordSet::Orders(Vec::new())
        }
    }
}
