use ratatui::text::Line;

use super::super::super::RenderCtx;
use super::super::super::app::{fmt_opt_ts_list, fmt_ts_ui};
use super::DetailView;
use crate::model::VersionBadge;

pub(super) fn overview_lines(view: &DetailView, ctx: &RenderCtx) -> Vec<Line<'static>> {
    let inst = &view.instance;
    let mut out = Vec::new();

    let version = if inst.version.is_empty() {
        "unknown".to_string()
    } else {
        inst.version.clone()
    };
    let badge = match inst.version_badge() {
        Some(VersionBadge::UpToDate) => "  [up to date]".to_string(),
        Some(VersionBadge::UpdateAvailable(latest)) => {
            format!("  [update available: {}]", latest)
        }
        None => String::new(),
    };
    out.push(Line::from(format!("version: {}{}", version, badge)));
    out.push(Line::from(format!("status: {}", inst.status.label())));
    out.push(Line::from(format!("url: {}", inst.base_url)));
    out.push(Line::from(format!(
        "last seen: {}",
        fmt_opt_ts_list(inst.last_seen_at.as_deref(), ctx, "never")
    )));
    if !inst.created_at.is_empty() {
        out.push(Line::from(format!("created: {}", fmt_ts_ui(&inst.created_at))));
    }

    // Loaded only for premium sessions.
    if let Some(last_backup) = &view.last_backup {
        out.push(Line::from(format!(
            "last backup: {}",
            fmt_opt_ts_list(last_backup.as_deref(), ctx, "never")
        )));
    }

    if view.locked() {
        out.push(Line::from(""));
        out.push(Line::from(
            "instance is locked: the stored API key cannot be used; log in again to restore access",
        ));
    }

    out
}
