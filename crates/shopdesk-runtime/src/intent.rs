use serde::Serialize;

use shopdesk_types::{OrderStatus, ReturnStatus};

use crate::modal::Entity;
use crate::router::View;

/// Everything an operator can do. Hosts translate keys or clicks into intents
/// and hand them to [`crate::Console::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Navigate(View),
    Refresh,
    SearchChanged(String),
    /// Search across list views; lands on products when no list view is active.
    GlobalSearch(String),
    /// A facet value, or "All".
    FacetChanged(String),
    /// Index into the active view's sort keys.
    SortChanged(usize),
    OpenCreate(Entity),
    OpenEdit(Entity, u64),
    EditField { field: String, value: String },
    SubmitForm,
    CancelForm,
    Delete(Entity, u64),
    Confirm,
    Decline,
    ToggleCustomer(u64),
    ShowCustomerHistory(u64),
    ShowOrder(u64),
    CloseOverlay,
    UpdateReturnStatus { return_id: u64, status: ReturnStatus },
    RunReport { from: String, to: String },
    ExportBill(u64),
    ExportOrdersCsv,
    /// Set the stock of every product to this quantity.
    BulkUpdateStock(u64),
    BulkDeleteProducts,
    BulkUpdateOrderStatus(OrderStatus),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Rendered,
    /// Nothing was sent; answer with [`Intent::Confirm`] or [`Intent::Decline`].
    ConfirmationRequired(String),
    /// Refused before any request, with the reason shown to the operator.
    Rejected(String),
    /// The intent does not apply to the current state.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}
