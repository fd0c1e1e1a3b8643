//! Canvas assertions.

use anyhow::{Context, Result, bail};

use shopdesk_runtime::render::{ListRow, TableView};
use shopdesk_runtime::{Canvas, Panel, PanelView};

fn painted(canvas: &Canvas, panel: Panel) -> Result<&PanelView> {
    canvas
        .get(panel)
        .with_context(|| format!("{:?} was never painted", panel))
}

/// The panel shows data, not its empty state.
pub fn assert_has_data(canvas: &Canvas, panel: Panel) -> Result<()> {
    if let PanelView::Empty { message } = painted(canvas, panel)? {
        bail!("{:?} shows its empty state: {}", panel, message);
    }
    Ok(())
}

pub fn assert_empty_state(canvas: &Canvas, panel: Panel) -> Result<()> {
    match painted(canvas, panel)? {
        PanelView::Empty { message } if message == panel.empty_message() => Ok(()),
        other => bail!("{:?} expected empty state, got {:?}", panel, other),
    }
}

pub fn table(canvas: &Canvas, panel: Panel) -> Result<&TableView> {
    match painted(canvas, panel)? {
        PanelView::Table(table) => Ok(table),
        other => bail!("{:?} is not a table: {:?}", panel, other),
    }
}

pub fn list(canvas: &Canvas, panel: Panel) -> Result<&[ListRow]> {
    match painted(canvas, panel)? {
        PanelView::List { rows } => Ok(rows),
        other => bail!("{:?} is not a list: {:?}", panel, other),
    }
}

/// Cell `column` of every table row, top to bottom.
pub fn column(canvas: &Canvas, panel: Panel, column: usize) -> Result<Vec<String>> {
    table(canvas, panel)?
        .rows
        .iter()
        .map(|row| {
            row.cells
                .get(column)
                .cloned()
                .with_context(|| format!("row {} has no column {}", row.id, column))
        })
        .collect()
}
