use ratatui::text::Line;
use ratatui::widgets::ListItem;

use super::super::super::RenderCtx;
use super::super::super::app::fmt_ts_list;
use crate::model::ErrorPattern;

/// At most this many affected workflows are shown inline; the rest collapse
/// into a "+N more" marker.
const AFFECTED_SHOWN: usize = 3;

pub(super) fn affected_summary(workflows: &[String]) -> String {
    if workflows.is_empty() {
        return "-".to_string();
    }
    let shown: Vec<&str> = workflows
        .iter()
        .take(AFFECTED_SHOWN)
        .map(|s| s.as_str())
        .collect();
    let mut out = shown.join(", ");
    if workflows.len() > AFFECTED_SHOWN {
        out.push_str(&format!(" +{} more", workflows.len() - AFFECTED_SHOWN));
    }
    out
}

pub(super) fn pattern_rows(patterns: &[ErrorPattern], ctx: &RenderCtx) -> Vec<ListItem<'static>> {
    let mut rows = Vec::new();
    for p in patterns {
        rows.push(ListItem::new(format!(
            "{:>5}x {:<12} {}",
            p.count,
            fmt_ts_list(&p.last_occurred, ctx),
            p.error_message
        )));
    }
    if rows.is_empty() {
        rows.push(ListItem::new("(no error patterns in this range)"));
    }
    rows
}

pub(super) fn pattern_detail_lines(patterns: &[ErrorPattern], cursor: usize) -> Vec<Line<'static>> {
    if patterns.is_empty() {
        return vec![Line::from("(no selection)")];
    }

    let p = &patterns[cursor.min(patterns.len().saturating_sub(1))];
    vec![
        Line::from(format!("error: {}", p.error_message)),
        Line::from(format!("count: {}", p.count)),
        Line::from(format!("last_occurred: {}", p.last_occurred)),
        Line::from(format!("workflows: {}", affected_summary(&p.affected_workflows))),
    ]
}
