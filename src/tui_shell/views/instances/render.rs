use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListState, Paragraph, Wrap};

use super::super::super::{RenderCtx, render_view_chrome};
use super::details::details_lines;
use super::rows::list_rows;
use super::InstancesView;

pub(super) fn render(
    view: &InstancesView,
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    ctx: &RenderCtx,
) {
    let inner = render_view_chrome(frame, "Instances", &view.updated_at, area);

    let banner_height = (view.quota_note.is_some() as u16) + (view.locked_note.is_some() as u16);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Percentage(65),
            Constraint::Min(0),
        ])
        .split(inner);

    if banner_height > 0 {
        let mut lines = Vec::new();
        if let Some(note) = &view.locked_note {
            lines.push(Line::styled(
                note.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(note) = &view.quota_note {
            lines.push(Line::styled(note.clone(), Style::default().fg(Color::Gray)));
        }
        frame.render_widget(Paragraph::new(lines), parts[0]);
    }

    let mut state = ListState::default();
    if !view.items.is_empty() {
        state.select(Some(view.selected.min(view.items.len().saturating_sub(1))));
    }

    let list = List::new(list_rows(view, ctx))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title("(Enter: open; add/edit/export; /: commands)".to_string()),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, parts[1], &mut state);

    frame.render_widget(
        Paragraph::new(details_lines(view, ctx)).wrap(Wrap { trim: false }),
        parts[2],
    );
}
