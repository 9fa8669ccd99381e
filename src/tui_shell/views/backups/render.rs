use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::super::super::app::fmt_opt_ts_list;
use super::super::super::{RenderCtx, render_view_chrome};
use super::{BackupsItemKind, BackupsView};

pub(super) fn render(
    view: &BackupsView,
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    ctx: &RenderCtx,
) {
    let inner = render_view_chrome(frame, "Backup Settings", &view.updated_at, area);

    if !view.premium {
        frame.render_widget(
            Paragraph::new(upsell_lines()).wrap(Wrap { trim: false }),
            inner,
        );
        return;
    }

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Percentage(50),
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

    let list = List::new(form_rows(view))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .title("(Enter: edit/toggle; save to persist)".to_string()),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, parts[1], &mut state);

    let mut status_lines = vec![Line::styled(
        "last backup per instance",
        Style::default().fg(Color::Gray),
    )];
    if view.statuses.is_empty() {
        status_lines.push(Line::from("(no instances)"));
    }
    for s in &view.statuses {
        status_lines.push(Line::from(format!(
            "{:<24} {}",
            s.instance_name,
            fmt_opt_ts_list(s.last_backup_at.as_deref(), ctx, "never")
        )));
    }
    frame.render_widget(
        Paragraph::new(status_lines).wrap(Wrap { trim: false }),
        parts[2],
    );
}

fn form_rows(view: &BackupsView) -> Vec<ListItem<'static>> {
    let Some(form) = view.form.as_ref() else {
        return Vec::new();
    };

    view.items
        .iter()
        .map(|kind| {
            let row = match kind {
                BackupsItemKind::ToggleEnabled => format!(
                    "backups: {}",
                    if form.enabled { "on" } else { "off" }
                ),
                BackupsItemKind::Folder => {
                    let folder = if form.folder_id.is_empty() {
                        "(unset)"
                    } else {
                        form.folder_id.as_str()
                    };
                    format!("destination folder: {}", folder)
                }
                BackupsItemKind::Interval => format!(
                    "interval: {} ({}h)",
                    form.interval.label(),
                    form.interval.hours()
                ),
                BackupsItemKind::Save => "save changes".to_string(),
            };
            ListItem::new(row)
        })
        .collect()
}

fn upsell_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from("Automatic workflow backups are a premium feature."),
        Line::from(""),
        Line::from("Upgrade the license to schedule recurring exports of every"),
        Line::from("instance to a storage folder, with per-instance status tracking."),
    ]
}
