//! Render pipeline.
//!
//! Every destination on screen is a [`Panel`]. Payloads and record sets are
//! projected into a [`PanelView`] that fully replaces whatever the panel showed
//! before; chart panels additionally go through the [`ChartRegistry`] so an old
//! chart instance is always destroyed before its replacement is created.

mod canvas;
mod chart;
mod panel;
mod project;
mod tables;
mod view;

pub use canvas::Canvas;
pub use chart::{ChartEvent, ChartId, ChartRegistry, ChartStore, ChartSurface};
pub use panel::Panel;
pub use project::project;
pub use tables::{facet_choices, sort_labels, table_for, visible_orders};
pub use view::{ChartKind, Dataset, ListRow, PanelView, RowAction, Series, TableRow, TableView, Tile};
