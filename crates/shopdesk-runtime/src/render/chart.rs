use serde::Serialize;
use std::collections::{BTreeMap, HashMap, VecDeque};

use super::panel::Panel;
use super::view::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChartId(pub u64);

/// The charting widget seam. A surface owns chart instances; the registry
/// decides when they are created and destroyed.
pub trait ChartSurface {
    fn create(&mut self, panel: Panel, dataset: &Dataset) -> ChartId;
    fn destroy(&mut self, id: ChartId);
    fn clear(&mut self, panel: Panel);
}

/// At most one live chart instance per panel.
#[derive(Debug, Default)]
pub struct ChartRegistry<S> {
    surface: S,
    instances: HashMap<Panel, ChartId>,
}

impl<S: ChartSurface> ChartRegistry<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            instances: HashMap::new(),
        }
    }

    /// Destroy any existing instance, then create one for a non-empty dataset or
    /// clear the surface for an empty one.
    pub fn show(&mut self, panel: Panel, dataset: Option<&Dataset>) {
        if let Some(id) = self.instances.remove(&panel) {
            self.surface.destroy(id);
        }
        match dataset.filter(|d| !d.is_empty()) {
            Some(dataset) => {
                let id = self.surface.create(panel, dataset);
                self.instances.insert(panel, id);
            }
            None => self.surface.clear(panel),
        }
    }

    pub fn destroy_all(&mut self) {
        let mut ids: Vec<ChartId> = self.instances.drain().map(|(_, id)| id).collect();
        ids.sort();
        for id in ids {
            self.surface.destroy(id);
        }
    }

    pub fn instance(&self, panel: Panel) -> Option<ChartId> {
        self.instances.get(&panel).copied()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartEvent {
    Created(Panel, ChartId),
    Destroyed(ChartId),
    Cleared(Panel),
}

const EVENT_LOG_LIMIT: usize = 256;

/// In-process chart surface. Keeps the live datasets for the terminal UI to
/// draw and a bounded log of lifecycle calls.
#[derive(Debug, Default)]
pub struct ChartStore {
    next_id: u64,
    live: BTreeMap<ChartId, (Panel, Dataset)>,
    events: VecDeque<ChartEvent>,
}

impl ChartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self, panel: Panel) -> Option<&Dataset> {
        self.live.values().find(|(p, _)| *p == panel).map(|(_, d)| d)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn events(&self) -> &VecDeque<ChartEvent> {
        &self.events
    }

    fn record(&mut self, event: ChartEvent) {
        if self.events.len() == EVENT_LOG_LIMIT {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

impl ChartSurface for ChartStore {
    fn create(&mut self, panel: Panel, dataset: &Dataset) -> ChartId {
        self.next_id += 1;
        let id = ChartId(self.next_id);
        self.live.insert(id, (panel, dataset.clone()));
        self.record(ChartEvent::Created(panel, id));
        id
    }

    fn destroy(&mut self, id: ChartId) {
        self.live.remove(&id);
        self.record(ChartEvent::Destroyed(id));
    }

    fn clear(&mut self, panel: Panel) {
        self.record(ChartEvent::Cleared(panel));
    }
}
