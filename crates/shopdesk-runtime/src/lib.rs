//! Console runtime for shopdesk.
//!
//! The [`Console`] owns every piece of UI state: the session gate, the router
//! and its per-view context, the render canvas, the CRUD modal and overlays.
//! Hosts feed it [`Intent`]s and drain [`RunMessage`]s produced by the view
//! orchestrators; they never mutate state directly.

pub mod config;
pub mod console;
pub mod error;
pub mod export;
pub mod intent;
pub mod modal;
pub mod orchestrate;
pub mod overlay;
pub mod records;
pub mod render;
pub mod router;
pub mod session;

pub use config::{Config, PanelSettings, resolve_data_dir};
pub use console::Console;
pub use error::{Error, Result, ValidationError};
pub use export::{BULK_EXPORT_NAME, ExportSink, ORDERS_EXPORT_NAME, orders_csv};
pub use intent::{Intent, Notice, Outcome};
pub use modal::{Entity, Field, Form, FormMode, Modal, ModalState, Submission};
pub use orchestrate::{Delivery, Orchestrator, PanelData, RunMessage};
pub use overlay::{CustomerHistory, OrderDetail, Overlay};
pub use records::RecordSet;
pub use render::{Canvas, ChartStore, Dataset, Panel, PanelView};
pub use router::{QueryState, Router, RunTicket, View, ViewContext};
pub use session::{
    Credentials, FileSessionStore, LoginOutcome, MemorySessionStore, Screen, Session, SessionStore,
};
