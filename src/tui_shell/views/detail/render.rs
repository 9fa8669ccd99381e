use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::super::super::app::fmt_opt_ts_list;
use super::super::super::{RenderCtx, render_view_chrome};
use super::errors::{event_detail_lines, event_rows};
use super::overview::overview_lines;
use super::patterns::{pattern_detail_lines, pattern_rows};
use super::rows::{WorkflowRow, workflow_rows};
use super::{DetailTab, DetailView};

pub(super) fn render(
    view: &DetailView,
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    ctx: &RenderCtx,
) {
    let title = format!("{} [{}]", view.instance.name, view.instance.status.label());
    let inner = render_view_chrome(frame, &title, &view.updated_at, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(Paragraph::new(tab_bar(view)), parts[0]);

    match view.tab {
        DetailTab::Overview => {
            frame.render_widget(
                Paragraph::new(overview_lines(view, ctx)).wrap(Wrap { trim: false }),
                parts[1],
            );
        }
        _ if view.locked() => {
            frame.render_widget(
                Paragraph::new(locked_lines()).wrap(Wrap { trim: false }),
                parts[1],
            );
        }
        DetailTab::Workflows => render_workflows(view, frame, parts[1], ctx),
        DetailTab::Errors => render_list_with_details(
            frame,
            parts[1],
            view.cursor,
            match view.events.as_deref() {
                Some(events) => event_rows(events, ctx),
                None => vec![ListItem::new("(loading...)")],
            },
            event_detail_lines(view.events.as_deref().unwrap_or(&[]), view.cursor),
            "(Enter: refresh; /: commands)",
        ),
        DetailTab::Patterns => render_list_with_details(
            frame,
            parts[1],
            view.cursor,
            match view.patterns.as_deref() {
                Some(patterns) => pattern_rows(patterns, ctx),
                None => vec![ListItem::new("(loading...)")],
            },
            pattern_detail_lines(view.patterns.as_deref().unwrap_or(&[]), view.cursor),
            &format!("range: {} (range <1d|14d|1m|6m|12m>)", view.range.as_str()),
        ),
    }
}

fn tab_bar(view: &DetailView) -> Line<'static> {
    let mut spans = Vec::new();
    for tab in DetailTab::ALL {
        let style = if tab == view.tab {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        "(Tab cycles)",
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn locked_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from("instance is locked"),
        Line::from(""),
        Line::from("Data cannot be shown because the stored API key could not be used."),
        Line::from("Log in again to restore access."),
    ]
}

fn render_workflows(
    view: &DetailView,
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    ctx: &RenderCtx,
) {
    let rows = workflow_rows(view);
    let items: Vec<ListItem<'static>> = if view.workflows.is_none() {
        vec![ListItem::new("(loading...)")]
    } else if rows.is_empty() {
        vec![ListItem::new("(no workflows match this filter)")]
    } else {
        rows.iter().map(|r| workflow_list_item(r, ctx)).collect()
    };

    let hint = format!(
        "filter: {}  selected: {}  (Enter: toggle; select all|none; export; import)",
        view.filter.label(),
        view.selected_ids.len()
    );

    render_list_with_details(
        frame,
        area,
        view.cursor,
        items,
        workflow_detail_lines(view, &rows, ctx),
        &hint,
    );
}

fn workflow_list_item(row: &WorkflowRow, ctx: &RenderCtx) -> ListItem<'static> {
    match row {
        WorkflowRow::Group {
            key,
            count,
            collapsed,
        } => {
            let marker = if *collapsed { "[+]" } else { "[-]" };
            ListItem::new(Line::from(Span::styled(
                format!("{} {} ({})", marker, key, count),
                Style::default().add_modifier(Modifier::BOLD),
            )))
        }
        WorkflowRow::Item {
            name,
            active,
            last_run_at,
            selected,
            ..
        } => {
            let check = if *selected { "[x]" } else { "[ ]" };
            let state = if *active { "active" } else { "inactive" };
            ListItem::new(format!(
                "  {} {:<32} {:<8} {}",
                check,
                name,
                state,
                fmt_opt_ts_list(last_run_at.as_deref(), ctx, "never ran")
            ))
        }
    }
}

fn workflow_detail_lines(
    view: &DetailView,
    rows: &[WorkflowRow],
    ctx: &RenderCtx,
) -> Vec<Line<'static>> {
    if rows.is_empty() {
        return vec![Line::from("(no selection)")];
    }

    match &rows[view.cursor.min(rows.len().saturating_sub(1))] {
        WorkflowRow::Group { key, count, .. } => vec![
            Line::from(format!("group: {}", key)),
            Line::from(format!("workflows: {}", count)),
            Line::from("Enter: collapse/expand"),
        ],
        WorkflowRow::Item {
            id,
            name,
            active,
            last_run_at,
            last_error_at,
            selected,
        } => vec![
            Line::from(format!("workflow: {}", name)),
            Line::from(format!("id: {}", id)),
            Line::from(format!("active: {}", active)),
            Line::from(format!(
                "last run: {}",
                fmt_opt_ts_list(last_run_at.as_deref(), ctx, "never")
            )),
            Line::from(format!(
                "last error: {}",
                fmt_opt_ts_list(last_error_at.as_deref(), ctx, "none")
            )),
            Line::from(format!("selected: {}", selected)),
        ],
    }
}

fn render_list_with_details(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    cursor: usize,
    items: Vec<ListItem<'static>>,
    details: Vec<Line<'static>>,
    hint: &str,
) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(cursor.min(items.len().saturating_sub(1))));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title(hint.to_string()),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, parts[0], &mut state);

    frame.render_widget(
        Paragraph::new(details).wrap(Wrap { trim: false }),
        parts[1],
    );
}
