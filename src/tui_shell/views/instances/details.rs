use ratatui::text::Line;

use super::super::super::RenderCtx;
use super::super::super::app::{fmt_opt_ts_list, fmt_ts_ui};
use super::InstancesView;

pub(super) fn details_lines(view: &InstancesView, ctx: &RenderCtx) -> Vec<Line<'static>> {
    let Some(inst) = view.selected_instance() else {
        return vec![Line::from("(no selection)")];
    };

    let mut out = Vec::new();
    out.push(Line::from(format!("name: {}", inst.name)));
    out.push(Line::from(format!("id: {}", inst.id)));
    out.push(Line::from(format!("url: {}", inst.base_url)));
    out.push(Line::from(format!("status: {}", inst.status.label())));
    out.push(Line::from(format!(
        "last seen: {}",
        fmt_opt_ts_list(inst.last_seen_at.as_deref(), ctx, "never")
    )));
    if !inst.created_at.is_empty() {
        out.push(Line::from(format!("created: {}", fmt_ts_ui(&inst.created_at))));
    }
    out
}
