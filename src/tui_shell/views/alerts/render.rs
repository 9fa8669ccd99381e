use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph, Wrap};

use super::super::super::{RenderCtx, render_view_chrome};
use super::rows::list_rows;
use super::{AlertsItemKind, AlertsView};

pub(super) fn render(
    view: &AlertsView,
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    ctx: &RenderCtx,
) {
    let inner = render_view_chrome(frame, "Alert Settings", &view.updated_at, area);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(65),
            Constraint::Min(0),
        ])
        .split(inner);

    let note = if let Some(msg) = view.active_notice(ctx.now) {
        Line::styled(msg.to_string(), Style::default().fg(Color::Green))
    } else if let Some(err) = &view.error_note {
        Line::styled(err.clone(), Style::default().fg(Color::Red))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(note), parts[0]);

    let mut state = ListState::default();
    if !view.items.is_empty() {
        state.select(Some(view.selected.min(view.items.len().saturating_sub(1))));
    }

    let list = List::new(list_rows(view))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title("(Enter: edit/toggle; save to persist)".to_string()),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, parts[1], &mut state);

    frame.render_widget(
        Paragraph::new(detail_lines(view)).wrap(Wrap { trim: false }),
        parts[2],
    );
}

fn detail_lines(view: &AlertsView) -> Vec<Line<'static>> {
    match view.selected_kind() {
        None => vec![Line::from("(no selection)")],
        Some(kind) => {
            let mut out = match kind {
                AlertsItemKind::Email => vec![
                    Line::from("Address that receives alert emails"),
                    Line::from("Enter: edit"),
                ],
                AlertsItemKind::ToggleEnabled => vec![
                    Line::from("Master switch for email notifications"),
                    Line::from("Off removes the email channel entirely"),
                ],
                AlertsItemKind::ToggleInstanceOffline => {
                    vec![Line::from("Alert when an instance stops responding")]
                }
                AlertsItemKind::ToggleWorkflowError => {
                    vec![Line::from("Alert on failed workflow executions")]
                }
                AlertsItemKind::ToggleInvalidApiKey => {
                    vec![Line::from("Alert when an instance credential stops working")]
                }
                AlertsItemKind::Save => vec![Line::from("Persist the settings above")],
            };
            if let Some(reason) = view.disabled_reason(kind) {
                out.push(Line::styled(
                    reason.to_string(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            out
        }
    }
}
