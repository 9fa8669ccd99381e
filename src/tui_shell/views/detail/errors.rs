use ratatui::text::Line;
use ratatui::widgets::ListItem;

use super::super::super::RenderCtx;
use super::super::super::app::fmt_ts_list;
use crate::model::EventRecord;

pub(super) const UNKNOWN_WORKFLOW: &str = "(unknown workflow)";

pub(super) fn event_rows(events: &[EventRecord], ctx: &RenderCtx) -> Vec<ListItem<'static>> {
    let mut rows = Vec::new();
    for ev in events {
        let name = ev
            .payload
            .workflow_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_WORKFLOW.to_string());
        let message = ev
            .payload
            .error_message
            .clone()
            .unwrap_or_else(|| "(no error message)".to_string());
        rows.push(ListItem::new(format!(
            "{:<8} {:<12} {:<24} {}",
            ev.severity.label(),
            fmt_ts_list(&ev.occurred_at, ctx),
            name,
            message
        )));
    }
    if rows.is_empty() {
        rows.push(ListItem::new("(no errors)"));
    }
    rows
}

pub(super) fn event_detail_lines(events: &[EventRecord], cursor: usize) -> Vec<Line<'static>> {
    if events.is_empty() {
        return vec![Line::from("(no selection)")];
    }

    let ev = &events[cursor.min(events.len().saturating_sub(1))];
    let mut out = Vec::new();
    out.push(Line::from(format!("severity: {}", ev.severity.label())));
    out.push(Line::from(format!("occurred_at: {}", ev.occurred_at)));
    match (&ev.payload.workflow_name, &ev.payload.workflow_id) {
        (Some(name), Some(id)) => {
            out.push(Line::from(format!("workflow: {} ({})", name, id)));
        }
        (Some(name), None) => out.push(Line::from(format!("workflow: {}", name))),
        _ => out.push(Line::from(UNKNOWN_WORKFLOW)),
    }
    if let Some(msg) = &ev.payload.error_message {
        out.push(Line::from(format!("error: {}", msg)));
    }
    if let Some(node) = &ev.payload.node {
        out.push(Line::from(format!("node: {}", node)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventPayload, Severity};

    fn event(name: Option<&str>, node: Option<&str>) -> EventRecord {
        EventRecord {
            id: "e1".to_string(),
            severity: Severity::Error,
            occurred_at: "2026-02-01T10:00:00Z".to_string(),
            payload: EventPayload {
                workflow_id: name.map(|_| "w1".to_string()),
                workflow_name: name.map(str::to_string),
                error_message: Some("timeout".to_string()),
                node: node.map(str::to_string),
            },
        }
    }

    #[test]
    fn events_without_workflow_use_the_unknown_label() {
        let lines = event_detail_lines(&[event(None, None)], 0);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains(UNKNOWN_WORKFLOW)));
    }

    #[test]
    fn node_line_appears_only_when_present() {
        let with = event_detail_lines(&[event(Some("Sync"), Some("HTTP Request"))], 0);
        assert!(with.iter().any(|l| l.to_string().contains("HTTP Request")));

        let without = event_detail_lines(&[event(Some("Sync"), None)], 0);
        assert!(!without.iter().any(|l| l.to_string().starts_with("node:")));
    }
}
