//! Headless rendering of a settled console: JSON via serde, or plain text.

mod plain;

pub use plain::render_plain;

use serde::Serialize;

use shopdesk_runtime::{Console, Notice, Panel, PanelView, View};

/// Everything one view rendered, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub view: Option<View>,
    pub panels: Vec<PanelDump>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelDump {
    pub panel: Panel,
    pub title: &'static str,
    pub content: PanelView,
}

impl Snapshot {
    pub fn of(console: &Console) -> Self {
        let view = console.router().active_view();
        let panels = view
            .map(Panel::of_view)
            .unwrap_or_default()
            .iter()
            .filter_map(|panel| {
                console.canvas().get(*panel).map(|content| PanelDump {
                    panel: *panel,
                    title: panel.title(),
                    content: content.clone(),
                })
            })
            .collect();
        Self {
            view,
            panels,
            notices: console.notices().cloned().collect(),
        }
    }
}
