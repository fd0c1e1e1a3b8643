use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Clear, List, ListItem, Paragraph, Row, Table, TableState, Tabs, Wrap},
};

use shopdesk_engine::format_inr;
use shopdesk_runtime::render::{Dataset, ListRow, TableView, Tile};
use shopdesk_runtime::{Form, Notice, Overlay, Panel, PanelView, View};

use super::app::{App, LoginField, LoginForm, Mode};

const ACCENT: Color = Color::Cyan;

pub(crate) fn draw(f: &mut Frame, app: &App) {
    if let Mode::Login(form) = &app.mode {
        draw_login(f, form, app.console.last_notice());
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(5), Constraint::Length(4)]).split(f.area());
    draw_nav(f, chunks[0], app);
    draw_body(f, chunks[1], app);
    draw_status(f, chunks[2], app);

    if let Some(form) = app.console.modal().form() {
        draw_form(f, form, app.form_field);
    } else if let Some(overlay) = app.console.overlay() {
        draw_overlay(f, overlay);
    }
    if let Some(question) = app.console.prompt() {
        draw_prompt(f, question);
    }
}

fn draw_login(f: &mut Frame, form: &LoginForm, notice: Option<&Notice>) {
    let area = popup(f.area(), 50, 9);
    let focus = |field: LoginField| {
        if form.focus == field {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Username: ", focus(LoginField::Username)),
            Span::raw(form.username.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Password: ", focus(LoginField::Password)),
            Span::raw("*".repeat(form.password.chars().count())),
        ]),
        Line::raw(""),
    ];
    if let Some(Notice::Error(message)) = notice {
        lines.push(Line::styled(message.as_str(), Style::default().fg(Color::Red)));
    }
    lines.push(Line::styled("[Enter] sign in  [Tab] switch field  [Esc] quit", Style::default().fg(Color::DarkGray)));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(Block::default().title(" shopdesk admin ").borders(Borders::ALL)),
        area,
    );
}

fn draw_nav(f: &mut Frame, area: Rect, app: &App) {
    let active = app.console.router().active_view();
    let titles: Vec<String> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| format!("{} {}", i + 1, view.title()))
        .collect();
    let selected = active.and_then(|view| View::ALL.iter().position(|v| *v == view)).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tabs, area);
}

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
    let Some(view) = app.console.router().active_view() else {
        return;
    };
    let panels = Panel::of_view(view);

    if let [single] = panels {
        draw_panel(f, area, app, *single);
        return;
    }

    let rows = panels.len().div_ceil(2);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    for (row_area, pair) in row_areas.iter().zip(panels.chunks(2)) {
        let cells = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(*row_area);
        for (cell, panel) in cells.iter().zip(pair) {
            draw_panel(f, *cell, app, *panel);
        }
    }
}

fn draw_panel(f: &mut Frame, area: Rect, app: &App, panel: Panel) {
    let block = Block::default().title(format!(" {} ", panel.title())).borders(Borders::ALL);
    let loading = app.console.active().is_some_and(|ctx| ctx.loading);

    match app.console.canvas().get(panel) {
        None => {
            let text = if loading { "Loading..." } else { "" };
            f.render_widget(Paragraph::new(text).block(block), area);
        }
        Some(PanelView::Empty { message }) => {
            f.render_widget(
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
        }
        Some(PanelView::Tiles { tiles }) => f.render_widget(Paragraph::new(tile_lines(tiles)).block(block), area),
        Some(PanelView::List { rows }) => f.render_widget(List::new(list_items(rows)).block(block), area),
        Some(PanelView::Table(table)) => draw_table(f, area, table, app, block),
        Some(PanelView::Chart(dataset)) => draw_chart(f, area, dataset, block),
    }
}

fn tile_lines(tiles: &[Tile]) -> Vec<Line<'_>> {
    tiles
        .iter()
        .map(|tile| {
            Line::from(vec![
                Span::styled(format!("{}: ", tile.label), Style::default().fg(Color::DarkGray)),
                Span::styled(tile.value.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect()
}

fn list_items(rows: &[ListRow]) -> Vec<ListItem<'_>> {
    rows.iter()
        .map(|row| {
            let mut spans = vec![Span::raw(row.primary.as_str())];
            if let Some(secondary) = &row.secondary {
                spans.push(Span::styled(format!("  {}", secondary), Style::default().fg(Color::DarkGray)));
            }
            if let Some(value) = &row.value {
                spans.push(Span::raw(format!("  {}", value)));
            }
            if let Some(badge) = &row.badge {
                spans.push(Span::styled(format!("  [{}]", badge), Style::default().fg(Color::Yellow)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect()
}

fn draw_table(f: &mut Frame, area: Rect, table: &TableView, app: &App, block: Block<'_>) {
    let header = Row::new(table.columns.clone()).style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = table.rows.iter().map(|row| Row::new(row.cells.clone())).collect();
    let widths = vec![Constraint::Fill(1); table.columns.len()];
    let caption = match app.console.active() {
        Some(ctx) if !ctx.query.search.is_empty() => {
            format!(" {} of {} matching \"{}\" ", table.rows.len(), table.total, ctx.query.search)
        }
        _ => format!(" {} of {} ", table.rows.len(), table.total),
    };

    let widget = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .block(block.title_bottom(caption));
    let mut state = TableState::default().with_selected(Some(app.selected.min(table.rows.len().saturating_sub(1))));
    f.render_stateful_widget(widget, area, &mut state);
}

fn draw_chart(f: &mut Frame, area: Rect, dataset: &Dataset, block: Block<'_>) {
    let Some(series) = dataset.series.first() else {
        return;
    };
    let bars: Vec<(&str, u64)> = dataset
        .labels
        .iter()
        .map(String::as_str)
        .zip(series.values.iter().map(|v| v.max(0.0).round() as u64))
        .collect();
    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = (inner_width / bars.len().max(1)).saturating_sub(1).clamp(1, 12) as u16;

    let chart = BarChart::default()
        .block(block.title_bottom(format!(" {} ", series.name)))
        .data(bars.as_slice())
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(ACCENT));
    f.render_widget(chart, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let first = match &app.mode {
        Mode::Input(line) => Line::from(vec![
            Span::styled(format!("{}: ", line.purpose.prompt()), Style::default().fg(ACCENT)),
            Span::raw(format!("{}_", line.buffer)),
        ]),
        _ => match (&app.hint, app.console.last_notice()) {
            (Some(hint), _) => Line::styled(hint.as_str(), Style::default().fg(Color::Yellow)),
            (None, Some(Notice::Error(message))) => Line::styled(message.as_str(), Style::default().fg(Color::Red)),
            (None, Some(Notice::Info(message))) => Line::styled(message.as_str(), Style::default().fg(Color::Green)),
            (None, None) => Line::raw(""),
        },
    };
    let view = app.console.router().active_view();
    let keys = Line::styled(key_help(view), Style::default().fg(Color::DarkGray));

    f.render_widget(
        Paragraph::new(vec![first, keys])
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP)),
        area,
    );
}

fn key_help(view: Option<View>) -> &'static str {
    match view {
        Some(View::Products) => "[/] search [f] category [s] sort [n] new [e] edit [d] delete [B] bulk stock [X] delete all [c] csv [r] refresh [q] quit",
        Some(View::Sellers) => "[/] search [s] sort [n] new [e] edit [d] delete [r] refresh [q] quit",
        Some(View::Orders) => "[/] search [f] status [s] sort [Enter] detail [S] bulk status [c] csv [r] refresh [q] quit",
        Some(View::Bills) => "[/] search [f] status [s] sort [Enter] detail [p] pdf [c] csv [r] refresh [q] quit",
        Some(View::Customers) => "[/] search [f] state [s] sort [Enter] history [t] block/unblock [r] refresh [q] quit",
        Some(View::Returns) => "[/] search [f] status [s] sort [a] approve [x] reject [r] refresh [q] quit",
        Some(View::Reports) => "[R] date range [g] search [c] csv [r] refresh [L] logout [q] quit",
        _ => "[1-9/Tab] views [g] search [c] csv [r] refresh [L] logout [q] quit",
    }
}

fn draw_form(f: &mut Frame, form: &Form, focused: usize) {
    let area = popup(f.area(), 60, form.fields.len() as u16 + 6);
    let mut lines: Vec<Line> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let value = if field.key == "seller" {
                form.seller_choices
                    .iter()
                    .find(|(id, _)| id.to_string() == field.value)
                    .map(|(_, label)| format!("< {} >", label))
                    .unwrap_or_else(|| "< none >".to_string())
            } else {
                field.value.clone()
            };
            let style = if i == focused {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![Span::styled(format!("{:>12}: ", field.label), style), Span::raw(value)])
        })
        .collect();
    lines.push(Line::raw(""));
    if let Some(error) = &form.error {
        lines.push(Line::styled(error.as_str(), Style::default().fg(Color::Red)));
    }
    lines.push(Line::styled("[Enter] save  [Esc] cancel  [Tab] next field", Style::default().fg(Color::DarkGray)));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(Block::default().title(format!(" {} ", form.title())).borders(Borders::ALL)),
        area,
    );
}

fn draw_overlay(f: &mut Frame, overlay: &Overlay) {
    let mut lines: Vec<Line> = Vec::new();
    match overlay {
        Overlay::OrderDetail(detail) => {
            lines.push(Line::raw(format!("Date: {}   Status: {}", detail.date, detail.status)));
            lines.push(Line::raw(format!("Customer: {}", detail.customer)));
            lines.push(Line::raw(format!("Email: {}   Phone: {}", detail.email, detail.phone)));
            lines.push(Line::raw(""));
            for line in &detail.lines {
                lines.push(Line::raw(format!(
                    "{}  {} x {} = {}",
                    line.name,
                    line.qty,
                    format_inr(line.price),
                    format_inr(line.total)
                )));
            }
            lines.push(Line::styled(
                format!("Total: {}", format_inr(detail.grand_total)),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        Overlay::CustomerHistory(history) => {
            if history.rows.is_empty() {
                lines.push(Line::styled("No orders yet", Style::default().fg(Color::DarkGray)));
            }
            for row in &history.rows {
                lines.push(Line::raw(format!(
                    "#{}  {}  {} items  {}  {}",
                    row.order_id,
                    row.date,
                    row.items,
                    format_inr(row.total),
                    row.status
                )));
            }
            lines.push(Line::styled(
                format!("Lifetime: {}", format_inr(history.lifetime_total())),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
    }
    lines.push(Line::styled("[Esc] close", Style::default().fg(Color::DarkGray)));

    let area = popup(f.area(), 70, lines.len() as u16 + 2);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(format!(" {} ", overlay.title())).borders(Borders::ALL)),
        area,
    );
}

fn draw_prompt(f: &mut Frame, question: &str) {
    let area = popup(f.area(), (question.chars().count() as u16 + 4).max(30), 5);
    let lines = vec![
        Line::raw(question),
        Line::raw(""),
        Line::styled("[y] yes  [n] no", Style::default().fg(Color::DarkGray)),
    ];
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        ),
        area,
    );
}

/// A `width` x `height` rectangle centred in `area`, clipped to it.
fn popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_is_centred_and_clipped() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(popup(area, 50, 10), Rect::new(25, 15, 50, 10));
        assert_eq!(popup(Rect::new(0, 0, 20, 5), 50, 10), Rect::new(0, 0, 20, 5));
    }
}
