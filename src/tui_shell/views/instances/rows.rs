use ratatui::widgets::ListItem;

use super::super::super::RenderCtx;
use super::super::super::app::fmt_opt_ts_list;
use super::InstancesView;
use crate::model::VersionBadge;

pub(super) fn list_rows(view: &InstancesView, ctx: &RenderCtx) -> Vec<ListItem<'static>> {
    let mut rows = Vec::new();
    for inst in &view.items {
        let version = match inst.version_badge() {
            Some(VersionBadge::UpToDate) => format!("{} (up to date)", inst.version),
            Some(VersionBadge::UpdateAvailable(latest)) => {
                format!("{} (update available: {})", inst.version, latest)
            }
            None if inst.version.is_empty() => "-".to_string(),
            None => inst.version.clone(),
        };
        let busy = if view.exporting.as_deref() == Some(inst.id.as_str()) {
            " [exporting...]"
        } else {
            ""
        };
        rows.push(ListItem::new(format!(
            "{:<24} {:<8} {:<32} {}{}",
            inst.name,
            inst.status.label(),
            version,
            fmt_opt_ts_list(inst.last_seen_at.as_deref(), ctx, "never seen"),
            busy
        )));
    }
    if rows.is_empty() {
        rows.push(ListItem::new("(no instances registered; run `add`)"));
    }
    rows
}
