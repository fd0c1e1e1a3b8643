//! View data orchestrators.
//!
//! One run per navigation or refresh. A run issues its view's requests
//! concurrently and forwards every result the moment it settles, tagged with
//! the [`RunTicket`] it was started for. Failed requests are logged and
//! delivered as `None` so the panel falls back to its empty state; a run never
//! retries and never fails as a whole.

mod analytics;
mod catalog;
mod dashboard;
mod reports;

use futures::StreamExt;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::FuturesUnordered;
use std::future::Future;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use shopdesk_api::{ApiClient, MonthRange};
use shopdesk_types::{
    BehaviorSegment, BestSeller, CategoryPerformance, CategorySale, Customer, DailySale, DashboardSummary,
    ForecastPoint, InventoryAlert, LowStockProduct, MonthlySale, Order, OrderStatistics, PerformanceMetrics,
    Product, RevenueReport, RevenueSummary, ShippingStatusCount,
};

use crate::config::PanelSettings;
use crate::records::RecordSet;
use crate::render::Panel;
use crate::router::{RunTicket, View};

/// Decoded payload of one panel request.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelData {
    Summary(DashboardSummary),
    Metrics(PerformanceMetrics),
    MonthlySales(Vec<MonthlySale>),
    BestSellers(Vec<BestSeller>),
    OrderStats(OrderStatistics),
    Count(usize),
    RevenueSummary(RevenueSummary),
    Orders(Vec<Order>),
    CategorySales(Vec<CategorySale>),
    Customers(Vec<Customer>),
    LowStock(Vec<LowStockProduct>),
    Alerts(Vec<InventoryAlert>),
    RevenueReport(RevenueReport),
    DailySales(Vec<DailySale>),
    Forecast(Vec<ForecastPoint>),
    Behavior(Vec<BehaviorSegment>),
    CategoryPerformance(Vec<CategoryPerformance>),
    Shipping(Vec<ShippingStatusCount>),
    Products(Vec<Product>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    /// `None` when the request failed.
    Panel { panel: Panel, data: Option<PanelData> },
    Records(RecordSet),
    /// Every request of the run has settled.
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunMessage {
    pub ticket: RunTicket,
    pub delivery: Delivery,
}

/// Result of one panel request, fanned out to every panel it feeds.
pub(crate) struct Step {
    panels: &'static [Panel],
    data: Option<PanelData>,
}

/// Wrap one request into a [`Step`] future. A failure is logged with the
/// request label and becomes a `None` payload.
pub(crate) fn step<'a, T, F>(
    panels: &'static [Panel],
    label: &'static str,
    request: F,
    wrap: fn(T) -> PanelData,
) -> BoxFuture<'a, Step>
where
    T: Send + 'a,
    F: Future<Output = shopdesk_api::Result<T>> + Send + 'a,
{
    async move {
        Step {
            panels,
            data: settle(label, request.await).map(wrap),
        }
    }
    .boxed()
}

pub(crate) fn settle<T>(label: &'static str, result: shopdesk_api::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(request = label, error = %err, "panel request failed");
            None
        }
    }
}

#[derive(Clone)]
pub struct Orchestrator {
    api: ApiClient,
    settings: PanelSettings,
    tx: UnboundedSender<RunMessage>,
}

impl Orchestrator {
    pub fn new(api: ApiClient, settings: PanelSettings, tx: UnboundedSender<RunMessage>) -> Self {
        Self { api, settings, tx }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn settings(&self) -> &PanelSettings {
        &self.settings
    }

    /// Start a run on the current runtime. `range` is only read by the reports view.
    pub fn spawn(&self, ticket: RunTicket, range: Option<MonthRange>) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move { this.run(ticket, range).await })
    }

    pub async fn run(&self, ticket: RunTicket, range: Option<MonthRange>) {
        info!(view = %ticket.view, generation = ticket.generation, "orchestrator run");
        match ticket.view {
            View::Dashboard => {
                self.fan_out(ticket, dashboard::requests(&self.api, &self.settings))
                    .await
            }
            View::Reports => {
                let range = range.unwrap_or_else(|| reports::default_range(&self.settings));
                self.fan_out(ticket, reports::requests(&self.api, &self.settings, &range))
                    .await
            }
            View::Analytics => {
                self.fan_out(ticket, analytics::requests(&self.api, &self.settings))
                    .await
            }
            view => {
                let records = catalog::fetch(&self.api, view).await;
                self.send(ticket, Delivery::Records(records));
            }
        }
        self.send(ticket, Delivery::Finished);
    }

    async fn fan_out(&self, ticket: RunTicket, requests: Vec<BoxFuture<'_, Step>>) {
        let mut pending: FuturesUnordered<_> = requests.into_iter().collect();
        while let Some(step) = pending.next().await {
            for panel in step.panels {
                self.send(
                    ticket,
                    Delivery::Panel {
                        panel: *panel,
                        data: step.data.clone(),
                    },
                );
            }
        }
    }

    fn send(&self, ticket: RunTicket, delivery: Delivery) {
        if self.tx.send(RunMessage { ticket, delivery }).is_err() {
            debug!(view = %ticket.view, "console dropped, discarding delivery");
        }
    }
}
