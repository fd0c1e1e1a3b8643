use std::collections::BTreeMap;

use super::chart::{ChartRegistry, ChartStore};
use super::panel::Panel;
use super::view::PanelView;

/// Visual state of every panel of the active view.
#[derive(Debug, Default)]
pub struct Canvas {
    panels: BTreeMap<Panel, PanelView>,
    charts: ChartRegistry<ChartStore>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content of `panel`. Chart panels also cycle their chart instance.
    pub fn paint(&mut self, panel: Panel, view: PanelView) {
        if panel.is_chart() {
            let dataset = match &view {
                PanelView::Chart(dataset) => Some(dataset),
                _ => None,
            };
            self.charts.show(panel, dataset);
        }
        self.panels.insert(panel, view);
    }

    /// Tear down every panel and chart instance, e.g. on navigation.
    pub fn reset(&mut self) {
        self.charts.destroy_all();
        self.panels.clear();
    }

    pub fn get(&self, panel: Panel) -> Option<&PanelView> {
        self.panels.get(&panel)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Panel, &PanelView)> {
        self.panels.iter().map(|(panel, view)| (*panel, view))
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn charts(&self) -> &ChartRegistry<ChartStore> {
        &self.charts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::view::{ChartKind, Dataset};

    #[test]
    fn test_reset_destroys_live_charts() {
        let mut canvas = Canvas::new();
        let dataset = Dataset::new(ChartKind::Bar, vec!["Jan".into()]).with_series("Revenue", vec![10.0]);
        canvas.paint(Panel::RevenueTrend, PanelView::Chart(dataset));
        canvas.paint(Panel::ReportSummary, PanelView::empty("No data"));
        assert_eq!(canvas.charts().surface().live_count(), 1);

        canvas.reset();

        assert!(canvas.is_empty());
        assert_eq!(canvas.charts().surface().live_count(), 0);
    }

    #[test]
    fn test_empty_chart_panel_clears_surface() {
        let mut canvas = Canvas::new();
        canvas.paint(Panel::DailySales, PanelView::empty("No chart data"));
        assert_eq!(canvas.charts().instance(Panel::DailySales), None);
        assert_eq!(canvas.get(Panel::DailySales), Some(&PanelView::empty("No chart data")));
    }
}
