//! Navigation router.
//!
//! Exactly one [`ViewContext`] is alive at a time. Every transition or refresh
//! issues a new generation number; orchestrator messages carry it back in a
//! [`RunTicket`] and anything that does not match the live context is stale.

use serde::Serialize;
use std::fmt;

use shopdesk_api::MonthRange;
use shopdesk_engine::{Facet, title_case};
use tracing::info;

use crate::records::RecordSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Products,
    Orders,
    Customers,
    Sellers,
    Reports,
    Analytics,
    Returns,
    Bills,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Dashboard,
        View::Products,
        View::Orders,
        View::Customers,
        View::Sellers,
        View::Reports,
        View::Analytics,
        View::Returns,
        View::Bills,
    ];

    pub fn name(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Products => "products",
            View::Orders => "orders",
            View::Customers => "customers",
            View::Sellers => "sellers",
            View::Reports => "reports",
            View::Analytics => "analytics",
            View::Returns => "returns",
            View::Bills => "bills",
        }
    }

    pub fn title(self) -> String {
        title_case(self.name())
    }

    pub fn parse(raw: &str) -> Option<View> {
        let raw = raw.trim();
        View::ALL.into_iter().find(|v| v.name().eq_ignore_ascii_case(raw))
    }

    /// Views backed by a filterable record set.
    pub fn has_records(self) -> bool {
        !matches!(self, View::Dashboard | View::Reports | View::Analytics)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RunTicket {
    pub view: View,
    pub generation: u64,
}

/// Search, facet and sort inputs of a list view. `sort` indexes the view's
/// sort key list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub facet: Facet,
    pub sort: usize,
}

#[derive(Debug, Clone)]
pub struct ViewContext {
    pub view: View,
    pub generation: u64,
    pub records: Option<RecordSet>,
    pub query: QueryState,
    pub report_range: Option<MonthRange>,
    pub loading: bool,
}

impl ViewContext {
    fn new(view: View, generation: u64) -> Self {
        Self {
            view,
            generation,
            records: None,
            query: QueryState::default(),
            report_range: None,
            loading: true,
        }
    }

    pub fn ticket(&self) -> RunTicket {
        RunTicket {
            view: self.view,
            generation: self.generation,
        }
    }
}

#[derive(Debug, Default)]
pub struct Router {
    active: Option<ViewContext>,
    issued: u64,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full transition, even when `view` is already active.
    pub fn navigate(&mut self, view: View) -> RunTicket {
        self.issued += 1;
        let context = ViewContext::new(view, self.issued);
        let ticket = context.ticket();
        self.active = Some(context);
        info!(view = %view, generation = ticket.generation, "navigate");
        ticket
    }

    /// New generation for the active view; its query and report range survive.
    pub fn refresh(&mut self) -> Option<RunTicket> {
        let context = self.active.as_mut()?;
        self.issued += 1;
        context.generation = self.issued;
        context.loading = true;
        Some(context.ticket())
    }

    pub fn accepts(&self, ticket: RunTicket) -> bool {
        self.active
            .as_ref()
            .is_some_and(|ctx| ctx.view == ticket.view && ctx.generation == ticket.generation)
    }

    pub fn active(&self) -> Option<&ViewContext> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ViewContext> {
        self.active.as_mut()
    }

    pub fn active_view(&self) -> Option<View> {
        self.active.as_ref().map(|ctx| ctx.view)
    }

    pub fn reset(&mut self) {
        self.active = None;
    }
}
