//! The console: every piece of UI state behind one intent-driven API.
//!
//! Hosts call [`Console::dispatch`] for operator actions and feed orchestrator
//! output back through [`Console::apply`] (or [`Console::drain`] /
//! [`Console::settle`]). Nothing outside this type mutates the router, the
//! canvas or the record set.

use chrono::{Local, NaiveDate};
use std::collections::VecDeque;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info, warn};

use shopdesk_api::{ApiClient, MonthRange};
use shopdesk_engine::{Facet, month_range};
use shopdesk_types::{MutationReceipt, OrderStatus, ReturnStatus, StockUpdate};

use crate::config::PanelSettings;
use crate::export::{BULK_EXPORT_NAME, ExportSink, ORDERS_EXPORT_NAME, orders_csv};
use crate::intent::{Intent, Notice, Outcome};
use crate::modal::{Entity, Form, Modal, Submission};
use crate::orchestrate::{Delivery, Orchestrator, RunMessage};
use crate::overlay::{CustomerHistory, OrderDetail, Overlay};
use crate::records::RecordSet;
use crate::render::{Canvas, Panel, project, sort_labels, table_for, visible_orders};
use crate::router::{QueryState, Router, RunTicket, View, ViewContext};
use crate::session::{Credentials, LoginOutcome, Screen, Session, SessionStore};

const NOTICE_LIMIT: usize = 8;

/// An action waiting on [`Intent::Confirm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAction {
    Delete(Entity, u64),
    BulkDeleteProducts,
}

pub struct Console {
    api: ApiClient,
    settings: PanelSettings,
    session: Session,
    router: Router,
    canvas: Canvas,
    modal: Modal,
    overlay: Option<Overlay>,
    notices: VecDeque<Notice>,
    pending: Option<(PendingAction, String)>,
    report_error: Option<String>,
    orchestrator: Orchestrator,
    rx: UnboundedReceiver<RunMessage>,
    sink: Box<dyn ExportSink>,
    today: NaiveDate,
}

impl Console {
    pub fn new(
        api: ApiClient,
        settings: PanelSettings,
        store: Box<dyn SessionStore>,
        sink: Box<dyn ExportSink>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            orchestrator: Orchestrator::new(api.clone(), settings.clone(), tx),
            api,
            settings,
            session: Session::restore(store),
            router: Router::new(),
            canvas: Canvas::new(),
            modal: Modal::new(),
            overlay: None,
            notices: VecDeque::new(),
            pending: None,
            report_error: None,
            rx,
            sink,
            today: Local::now().date_naive(),
        }
    }

    /// Pin the date the report range defaults are computed from.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    // --- session gate ---

    /// Decide what the host shows. Idempotent: the first authenticated call
    /// opens the dashboard, later calls leave the active view alone.
    pub fn gate(&mut self) -> Screen {
        if !self.session.is_authenticated() {
            return Screen::Login;
        }
        if self.router.active().is_none() {
            self.navigate(View::Dashboard);
        }
        Screen::Shell
    }

    pub async fn login(&mut self, credentials: &Credentials) -> LoginOutcome {
        let outcome = self.session.login(&self.api, credentials).await;
        match &outcome {
            LoginOutcome::Success => {
                self.gate();
            }
            LoginOutcome::Failure(reason) => self.notify(Notice::Error(reason.clone())),
        }
        outcome
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.router.reset();
        self.canvas.reset();
        self.modal.cancel();
        self.overlay = None;
        self.pending = None;
        self.report_error = None;
    }

    // --- orchestrator output ---

    /// Apply one orchestrator message. Messages from a view that is no longer
    /// active, or from an older run of the active view, are dropped.
    pub fn apply(&mut self, message: RunMessage) -> bool {
        if !self.router.accepts(message.ticket) {
            debug!(
                view = %message.ticket.view,
                generation = message.ticket.generation,
                "dropping stale delivery"
            );
            return false;
        }
        match message.delivery {
            Delivery::Panel { panel, data } => {
                let view = project(panel, data.as_ref(), &self.settings);
                self.canvas.paint(panel, view);
            }
            Delivery::Records(records) => {
                if let Some(ctx) = self.router.active_mut() {
                    ctx.records = Some(records);
                }
                self.repaint_table();
            }
            Delivery::Finished => {
                if let Some(ctx) = self.router.active_mut() {
                    ctx.loading = false;
                }
            }
        }
        true
    }

    pub async fn recv(&mut self) -> Option<RunMessage> {
        self.rx.recv().await
    }

    /// Apply everything already queued without waiting. Returns how many
    /// messages were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            if self.apply(message) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait until the active run has finished.
    pub async fn settle(&mut self) {
        while self.router.active().is_some_and(|ctx| ctx.loading) {
            match self.rx.recv().await {
                Some(message) => {
                    self.apply(message);
                }
                None => break,
            }
        }
    }

    // --- intents ---

    pub async fn dispatch(&mut self, intent: Intent) -> Outcome {
        if !self.session.is_authenticated() {
            debug!(?intent, "ignoring intent while signed out");
            return Outcome::Ignored;
        }
        match intent {
            Intent::Navigate(view) => {
                self.navigate(view);
                Outcome::Rendered
            }
            Intent::Refresh => match self.router.refresh() {
                Some(ticket) => {
                    self.start(ticket);
                    Outcome::Rendered
                }
                None => Outcome::Ignored,
            },
            Intent::SearchChanged(text) => self.update_query(|q| q.search = text),
            Intent::GlobalSearch(text) => {
                if !self.router.active_view().is_some_and(View::has_records) {
                    self.navigate(View::Products);
                }
                self.update_query(|q| q.search = text)
            }
            Intent::FacetChanged(value) => self.update_query(|q| q.facet = Facet::from_selection(&value)),
            Intent::SortChanged(index) => {
                let Some(view) = self.router.active_view() else {
                    return Outcome::Ignored;
                };
                if index >= sort_labels(view).len() {
                    return Outcome::Ignored;
                }
                self.update_query(|q| q.sort = index)
            }
            Intent::OpenCreate(entity) => {
                let form = match entity {
                    Entity::Product => Form::product(None, self.known_sellers()),
                    Entity::Seller => Form::seller(None),
                };
                self.modal.open(form);
                Outcome::Rendered
            }
            Intent::OpenEdit(entity, id) => self.open_edit(entity, id),
            Intent::EditField { field, value } => match self.modal.form_mut() {
                Some(form) => {
                    if form.set(&field, value) {
                        Outcome::Rendered
                    } else {
                        Outcome::Ignored
                    }
                }
                None => Outcome::Ignored,
            },
            Intent::SubmitForm => self.submit().await,
            Intent::CancelForm => {
                if !self.modal.is_open() {
                    return Outcome::Ignored;
                }
                self.modal.cancel();
                Outcome::Rendered
            }
            Intent::Delete(entity, id) => {
                let prompt = match self.records().and_then(|r| match entity {
                    Entity::Product => r.product(id).map(|p| p.name.clone()),
                    Entity::Seller => r.seller(id).map(|s| s.name.clone()),
                }) {
                    Some(name) => format!("Delete {} \"{}\"?", entity.name().to_lowercase(), name),
                    None => format!("Delete {} #{}?", entity.name().to_lowercase(), id),
                };
                self.ask(PendingAction::Delete(entity, id), prompt)
            }
            Intent::BulkDeleteProducts => self.ask(
                PendingAction::BulkDeleteProducts,
                "Delete ALL products? This cannot be undone!".to_string(),
            ),
            Intent::Confirm => match self.pending.take() {
                Some((action, _)) => {
                    self.perform(action).await;
                    Outcome::Rendered
                }
                None => Outcome::Ignored,
            },
            Intent::Decline => match self.pending.take() {
                Some(_) => Outcome::Rendered,
                None => Outcome::Ignored,
            },
            Intent::ToggleCustomer(id) => {
                let result = self.api.toggle_customer(id).await;
                self.report(result, "Customer status updated", "Error updating customer");
                self.rerun(&[View::Customers]);
                Outcome::Rendered
            }
            Intent::ShowCustomerHistory(id) => {
                match self.api.customer_history(id).await {
                    Ok(orders) => {
                        let history = CustomerHistory::new(id, self.records().and_then(|r| r.customer(id)), &orders);
                        self.overlay = Some(Overlay::CustomerHistory(history));
                    }
                    Err(err) => {
                        warn!(customer_id = id, error = %err, "customer history failed");
                        self.notify(Notice::Error(format!(
                            "Error loading customer history: {}",
                            err.user_message()
                        )));
                    }
                }
                Outcome::Rendered
            }
            Intent::ShowOrder(id) => match self.records().and_then(|r| r.order(id)).map(OrderDetail::of) {
                Some(detail) => {
                    self.overlay = Some(Overlay::OrderDetail(detail));
                    Outcome::Rendered
                }
                None => Outcome::Rejected(format!("Order #{} is not loaded", id)),
            },
            Intent::CloseOverlay => match self.overlay.take() {
                Some(_) => Outcome::Rendered,
                None => Outcome::Ignored,
            },
            Intent::UpdateReturnStatus { return_id, status } => self.decide_return(return_id, status).await,
            Intent::RunReport { from, to } => self.run_report(&from, &to),
            Intent::ExportBill(order_id) => {
                let url = self.api.bill_pdf_url(order_id);
                match self.sink.open_pdf(order_id, &url) {
                    Ok(location) => self.notify(Notice::Info(format!("Bill #{} exported to {}", order_id, location))),
                    Err(err) => self.notify(Notice::Error(format!("Error exporting bill: {}", err))),
                }
                Outcome::Rendered
            }
            Intent::ExportOrdersCsv => {
                self.export_orders().await;
                Outcome::Rendered
            }
            Intent::BulkUpdateStock(stock) => {
                self.bulk_update_stock(stock).await;
                Outcome::Rendered
            }
            Intent::BulkUpdateOrderStatus(status) => {
                self.bulk_update_order_status(status).await;
                Outcome::Rendered
            }
        }
    }

    // --- accessors ---

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn active(&self) -> Option<&ViewContext> {
        self.router.active()
    }

    pub fn records(&self) -> Option<&RecordSet> {
        self.router.active()?.records.as_ref()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// The question an outstanding confirmation asks.
    pub fn prompt(&self) -> Option<&str> {
        self.pending.as_ref().map(|(_, prompt)| prompt.as_str())
    }

    pub fn report_error(&self) -> Option<&str> {
        self.report_error.as_deref()
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // --- internals ---

    fn navigate(&mut self, view: View) {
        self.modal.cancel();
        self.overlay = None;
        self.pending = None;
        self.report_error = None;
        self.canvas.reset();
        let ticket = self.router.navigate(view);
        if view == View::Reports {
            let (from, to) = month_range(self.today, self.settings.report_months);
            if let Some(ctx) = self.router.active_mut() {
                ctx.report_range = Some(MonthRange { from, to });
            }
        }
        self.start(ticket);
    }

    fn start(&mut self, ticket: RunTicket) {
        let range = self.router.active().and_then(|ctx| ctx.report_range.clone());
        self.orchestrator.spawn(ticket, range);
    }

    /// Refresh the active view when it is one of `views`.
    fn rerun(&mut self, views: &[View]) {
        if self.router.active_view().is_some_and(|v| views.contains(&v)) {
            if let Some(ticket) = self.router.refresh() {
                self.start(ticket);
            }
        }
    }

    fn update_query(&mut self, change: impl FnOnce(&mut QueryState)) -> Outcome {
        match self.router.active_mut() {
            Some(ctx) if ctx.view.has_records() => change(&mut ctx.query),
            _ => return Outcome::Ignored,
        }
        self.repaint_table();
        Outcome::Rendered
    }

    fn repaint_table(&mut self) {
        let Some(ctx) = self.router.active() else {
            return;
        };
        let (Some(panel), Some(records)) = (Panel::table_of(ctx.view), ctx.records.as_ref()) else {
            return;
        };
        let view = table_for(ctx.view, records, &ctx.query);
        self.canvas.paint(panel, view);
    }

    fn known_sellers(&self) -> &[shopdesk_types::Seller] {
        self.records().map(RecordSet::sellers).unwrap_or(&[])
    }

    fn open_edit(&mut self, entity: Entity, id: u64) -> Outcome {
        let form = match entity {
            Entity::Product => self
                .records()
                .and_then(|r| r.product(id))
                .map(|p| Form::product(Some(p), self.known_sellers())),
            Entity::Seller => self.records().and_then(|r| r.seller(id)).map(|s| Form::seller(Some(s))),
        };
        match form {
            Some(form) => {
                self.modal.open(form);
                Outcome::Rendered
            }
            None => Outcome::Rejected(format!("{} #{} is not loaded", entity.name(), id)),
        }
    }

    async fn submit(&mut self) -> Outcome {
        let submission = match self.modal.begin_submit() {
            None => return Outcome::Ignored,
            Some(Err(err)) => return Outcome::Rejected(err.message),
            Some(Ok(submission)) => submission,
        };

        let (entity, updating, result) = match &submission {
            Submission::Product(draft) => (Entity::Product, draft.is_update(), self.api.save_product(draft).await),
            Submission::Seller(draft) => (Entity::Seller, draft.is_update(), self.api.save_seller(draft).await),
        };

        match receipt(result) {
            Ok(_) => {
                info!(entity = entity.name(), updating, "saved");
                self.modal.finish(Ok(()));
                let verb = if updating { "updated" } else { "added" };
                self.notify(Notice::Info(format!("{} {} successfully", entity.name(), verb)));
                self.rerun(&[owner_of(entity)]);
            }
            Err(message) => {
                warn!(entity = entity.name(), error = %message, "save failed");
                self.modal.finish(Err(message.clone()));
                self.notify(Notice::Error(format!("Error saving {}: {}", entity.name().to_lowercase(), message)));
            }
        }
        Outcome::Rendered
    }

    fn ask(&mut self, action: PendingAction, prompt: String) -> Outcome {
        self.pending = Some((action, prompt.clone()));
        Outcome::ConfirmationRequired(prompt)
    }

    async fn perform(&mut self, action: PendingAction) {
        match action {
            PendingAction::Delete(entity, id) => {
                let result = match entity {
                    Entity::Product => self.api.delete_product(id).await,
                    Entity::Seller => self.api.delete_seller(id).await,
                };
                info!(entity = entity.name(), id, ok = result.is_ok(), "delete");
                self.report(
                    result,
                    &format!("{} deleted", entity.name()),
                    &format!("Error deleting {}", entity.name().to_lowercase()),
                );
                self.rerun(&[owner_of(entity)]);
            }
            PendingAction::BulkDeleteProducts => {
                let result = match self.api.products().await {
                    Ok(products) => {
                        let ids: Vec<u64> = products.iter().map(|p| p.product_id).collect();
                        self.api.bulk_delete_products(&ids).await
                    }
                    Err(err) => Err(err),
                };
                match receipt(result) {
                    Ok(r) => self.notify(Notice::Info(format!("Deleted {} products", r.deleted_count))),
                    Err(message) => self.notify(Notice::Error(format!("Bulk delete failed: {}", message))),
                }
                self.rerun(&[View::Products]);
            }
        }
    }

    async fn decide_return(&mut self, return_id: u64, status: ReturnStatus) -> Outcome {
        if let Some(request) = self.records().and_then(|r| r.return_request(return_id))
            && !request.status.is_open()
        {
            return Outcome::Rejected(format!("Return #{} is already {}", return_id, request.status));
        }
        let result = self.api.update_return_status(return_id, &status).await;
        self.report(
            result,
            &format!("Return #{} marked {}", return_id, status),
            "Error updating return",
        );
        self.rerun(&[View::Returns]);
        Outcome::Rendered
    }

    fn run_report(&mut self, from: &str, to: &str) -> Outcome {
        if self.router.active_view() != Some(View::Reports) {
            return Outcome::Ignored;
        }
        let range = match validate_range(from, to) {
            Ok(range) => range,
            Err(message) => {
                self.report_error = Some(message.clone());
                return Outcome::Rejected(message);
            }
        };
        self.report_error = None;
        if let Some(ctx) = self.router.active_mut() {
            ctx.report_range = Some(range);
        }
        if let Some(ticket) = self.router.refresh() {
            self.start(ticket);
        }
        Outcome::Rendered
    }

    async fn export_orders(&mut self) {
        let listed = self
            .router
            .active()
            .and_then(|ctx| visible_orders(ctx.records.as_ref()?, &ctx.query))
            .map(|orders| orders_csv(&orders));

        let (name, csv) = match listed {
            Some(csv) => (ORDERS_EXPORT_NAME, csv),
            None => match self.api.export_orders().await {
                Ok(orders) => (BULK_EXPORT_NAME, orders_csv(&orders.iter().collect::<Vec<_>>())),
                Err(err) => {
                    warn!(error = %err, "order export fetch failed");
                    self.notify(Notice::Error(format!("Export failed: {}", err.user_message())));
                    return;
                }
            },
        };

        let saved = csv.and_then(|content| self.sink.save_csv(name, &content));
        match saved {
            Ok(location) => self.notify(Notice::Info(format!("Orders exported to {}", location))),
            Err(err) => self.notify(Notice::Error(format!("Export failed: {}", err))),
        }
    }

    async fn bulk_update_stock(&mut self, stock: u64) {
        let result = match self.api.products().await {
            Ok(products) => {
                let updates: Vec<StockUpdate> = products
                    .iter()
                    .map(|p| StockUpdate {
                        product_id: p.product_id,
                        stock,
                    })
                    .collect();
                self.api.bulk_update_stock(&updates).await
            }
            Err(err) => Err(err),
        };
        match receipt(result) {
            Ok(r) => self.notify(Notice::Info(format!("Updated stock for {} products", r.updated_count))),
            Err(message) => self.notify(Notice::Error(format!("Bulk stock update failed: {}", message))),
        }
        self.rerun(&[View::Products]);
    }

    async fn bulk_update_order_status(&mut self, status: OrderStatus) {
        let result = match self.api.orders().await {
            Ok(orders) => {
                let ids: Vec<u64> = orders.iter().map(|o| o.order_id).collect();
                self.api.bulk_update_order_status(&ids, &status).await
            }
            Err(err) => Err(err),
        };
        match receipt(result) {
            Ok(r) => self.notify(Notice::Info(format!("Updated {} orders to {}", r.updated_count, status))),
            Err(message) => self.notify(Notice::Error(format!("Bulk status update failed: {}", message))),
        }
        self.rerun(&[View::Orders, View::Bills]);
    }

    fn report(&mut self, result: shopdesk_api::Result<MutationReceipt>, success: &str, failure: &str) {
        match receipt(result) {
            Ok(_) => self.notify(Notice::Info(success.to_string())),
            Err(message) => self.notify(Notice::Error(format!("{}: {}", failure, message))),
        }
    }

    fn notify(&mut self, notice: Notice) {
        if self.notices.len() == NOTICE_LIMIT {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }
}

fn owner_of(entity: Entity) -> View {
    match entity {
        Entity::Product => View::Products,
        Entity::Seller => View::Sellers,
    }
}

/// Collapse a transport result and the receipt's own success flag into the
/// message an operator sees.
fn receipt(result: shopdesk_api::Result<MutationReceipt>) -> Result<MutationReceipt, String> {
    match result {
        Ok(r) if r.success => Ok(r),
        Ok(r) => Err(r.error.or(r.message).unwrap_or_else(|| "Unknown error".to_string())),
        Err(err) => Err(err.user_message()),
    }
}

/// Both ends present, `YYYY-MM`, and not reversed.
fn validate_range(from: &str, to: &str) -> Result<MonthRange, String> {
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err("Please select both start and end dates".to_string());
    }
    let month = |raw: &str| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d").ok();
    let (Some(start), Some(end)) = (month(from), month(to)) else {
        return Err("Dates must be in YYYY-MM format".to_string());
    };
    if start > end {
        return Err("Start date must not be after end date".to_string());
    }
    Ok(MonthRange {
        from: from.to_string(),
        to: to.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_api::ApiError;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("2024-01", "2024-06").is_ok());
        assert!(validate_range("2024-03", "2024-03").is_ok());
        assert_eq!(
            validate_range("", "2024-06").unwrap_err(),
            "Please select both start and end dates"
        );
        assert_eq!(
            validate_range("2024-07", "2024-06").unwrap_err(),
            "Start date must not be after end date"
        );
        assert_eq!(validate_range("2024-13", "2024-14").unwrap_err(), "Dates must be in YYYY-MM format");
    }

    #[test]
    fn test_receipt_failure_messages() {
        let refused = MutationReceipt {
            success: false,
            error: Some("Seller has products".into()),
            ..Default::default()
        };
        assert_eq!(receipt(Ok(refused)).unwrap_err(), "Seller has products");

        let silent = MutationReceipt {
            success: false,
            ..Default::default()
        };
        assert_eq!(receipt(Ok(silent)).unwrap_err(), "Unknown error");

        let down = Err(ApiError::Transport("refused".into()));
        assert_eq!(receipt(down).unwrap_err(), "Could not reach the server");
    }
}
