use owo_colors::OwoColorize;
use std::fmt::Write;

use shopdesk_runtime::render::{Dataset, ListRow, TableView, Tile};
use shopdesk_runtime::{Notice, PanelView};

use super::Snapshot;

/// Render `snapshot` as indented text. ANSI styling only when `color` is set.
pub fn render_plain(snapshot: &Snapshot, color: bool) -> String {
    let paint = Paint { color };
    let mut out = String::new();

    if let Some(view) = snapshot.view {
        let _ = writeln!(out, "{}", paint.title(&format!("== {} ==", view.title())));
    }
    for dump in &snapshot.panels {
        let _ = writeln!(out, "\n{}", paint.heading(dump.title));
        match &dump.content {
            PanelView::Tiles { tiles } => write_tiles(&mut out, tiles),
            PanelView::List { rows } => write_list(&mut out, rows, &paint),
            PanelView::Table(table) => write_table(&mut out, table, &paint),
            PanelView::Chart(dataset) => write_chart(&mut out, dataset),
            PanelView::Empty { message } => {
                let _ = writeln!(out, "  {}", paint.dim(message));
            }
        }
    }
    if !snapshot.notices.is_empty() {
        out.push('\n');
        for notice in &snapshot.notices {
            let _ = writeln!(out, "{}", paint.notice(notice));
        }
    }
    out
}

struct Paint {
    color: bool,
}

impl Paint {
    fn title(&self, text: &str) -> String {
        if self.color { text.bold().bright_blue().to_string() } else { text.to_string() }
    }

    fn heading(&self, text: &str) -> String {
        if self.color { text.bold().to_string() } else { text.to_string() }
    }

    fn dim(&self, text: &str) -> String {
        if self.color { text.dimmed().to_string() } else { text.to_string() }
    }

    fn badge(&self, text: &str) -> String {
        let text = format!("[{}]", text);
        if self.color { text.yellow().to_string() } else { text }
    }

    fn notice(&self, notice: &Notice) -> String {
        match (notice, self.color) {
            (Notice::Error(message), true) => format!("{} {}", "✗".red(), message.red()),
            (Notice::Error(message), false) => format!("! {}", message),
            (Notice::Info(message), true) => format!("{} {}", "✓".green(), message),
            (Notice::Info(message), false) => format!("* {}", message),
        }
    }
}

fn write_tiles(out: &mut String, tiles: &[Tile]) {
    let width = tiles.iter().map(|t| t.label.chars().count()).max().unwrap_or(0);
    for tile in tiles {
        let _ = writeln!(out, "  {:<width$}  {}", tile.label, tile.value, width = width);
    }
}

fn write_list(out: &mut String, rows: &[ListRow], paint: &Paint) {
    for row in rows {
        let mut line = format!("  {}", row.primary);
        if let Some(secondary) = &row.secondary {
            let _ = write!(line, "  {}", paint.dim(secondary));
        }
        if let Some(value) = &row.value {
            let _ = write!(line, "  {}", value);
        }
        if let Some(badge) = &row.badge {
            let _ = write!(line, "  {}", paint.badge(badge));
        }
        let _ = writeln!(out, "{}", line);
    }
}

fn write_table(out: &mut String, table: &TableView, paint: &Paint) {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.cells.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }
    let line = |cells: Vec<&str>| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect();
        format!("  {}", padded.join("  ")).trim_end().to_string()
    };

    let _ = writeln!(out, "{}", paint.heading(&line(table.columns.clone())));
    for row in &table.rows {
        let _ = writeln!(out, "{}", line(row.cells.iter().map(String::as_str).collect()));
    }
    let _ = writeln!(out, "  {}", paint.dim(&format!("{} of {}", table.rows.len(), table.total)));
}

fn write_chart(out: &mut String, dataset: &Dataset) {
    for (i, label) in dataset.labels.iter().enumerate() {
        let values: Vec<String> = dataset
            .series
            .iter()
            .filter_map(|s| s.values.get(i).map(|v| format!("{} {}", s.name, v)))
            .collect();
        let _ = writeln!(out, "  {}: {}", label, values.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::PanelDump;
    use shopdesk_runtime::render::{ChartKind, RowAction, TableRow};
    use shopdesk_runtime::{Panel, View};

    #[test]
    fn test_plain_output_without_color() {
        let snapshot = Snapshot {
            view: Some(View::Reports),
            panels: vec![
                PanelDump {
                    panel: Panel::ReportSummary,
                    title: Panel::ReportSummary.title(),
                    content: PanelView::Tiles {
                        tiles: vec![Tile::new("Total Revenue", "₹1,370"), Tile::new("Orders", "3")],
                    },
                },
                PanelDump {
                    panel: Panel::RevenueTrend,
                    title: Panel::RevenueTrend.title(),
                    content: PanelView::Chart(
                        Dataset::new(ChartKind::Bar, vec!["2024-04".into(), "2024-05".into()])
                            .with_series("Revenue", vec![900.0, 470.0]),
                    ),
                },
                PanelDump {
                    panel: Panel::ReportBestSellers,
                    title: Panel::ReportBestSellers.title(),
                    content: PanelView::empty("No sales data"),
                },
            ],
            notices: vec![Notice::Error("Could not reach the server".into())],
        };

        let text = render_plain(&snapshot, false);

        assert!(text.starts_with("== Reports ==\n"));
        assert!(text.contains("  Total Revenue  ₹1,370\n  Orders         3\n"));
        assert!(text.contains("  2024-04: Revenue 900\n  2024-05: Revenue 470\n"));
        assert!(text.contains("  No sales data\n"));
        assert!(text.ends_with("! Could not reach the server\n"));
    }

    #[test]
    fn test_table_columns_align() {
        let table = TableView {
            columns: vec!["Order", "Customer"],
            rows: vec![
                TableRow {
                    id: 103,
                    cells: vec!["#103".into(), "Guest".into()],
                    actions: vec![RowAction::Detail],
                },
                TableRow {
                    id: 101,
                    cells: vec!["#101".into(), "Meera Rao".into()],
                    actions: vec![RowAction::Detail],
                },
            ],
            total: 3,
        };
        let mut out = String::new();

        write_table(&mut out, &table, &Paint { color: false });

        assert_eq!(out, "  Order  Customer\n  #103   Guest\n  #101   Meera Rao\n  2 of 3\n");
    }
}
