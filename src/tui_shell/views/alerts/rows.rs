use ratatui::widgets::ListItem;

use super::{AlertsItemKind, AlertsView};

fn on_off(v: bool) -> &'static str {
    if v { "on" } else { "off" }
}

pub(super) fn list_rows(view: &AlertsView) -> Vec<ListItem<'static>> {
    let mut rows = Vec::new();
    for kind in &view.items {
        let locked = view.disabled_reason(*kind).is_some();
        let suffix = if locked { "  (disabled)" } else { "" };
        let row = match kind {
            AlertsItemKind::Email => {
                let address = if view.form.email.is_empty() {
                    "(unset)"
                } else {
                    view.form.email.as_str()
                };
                format!("email address: {}", address)
            }
            AlertsItemKind::ToggleEnabled => {
                format!("notifications: {}", on_off(view.form.enabled))
            }
            AlertsItemKind::ToggleInstanceOffline => format!(
                "notify on instance offline: {}{}",
                on_off(view.form.notify_on_instance_offline),
                suffix
            ),
            AlertsItemKind::ToggleWorkflowError => format!(
                "notify on workflow error: {}{}",
                on_off(view.form.notify_on_workflow_error),
                suffix
            ),
            AlertsItemKind::ToggleInvalidApiKey => format!(
                "notify on invalid API key: {}{}",
                on_off(view.form.notify_on_invalid_api_key),
                suffix
            ),
            AlertsItemKind::Save => "save changes".to_string(),
        };
        rows.push(ListItem::new(row));
    }
    rows
}
