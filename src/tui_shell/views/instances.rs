use super::super::{RenderCtx, UiMode, View};
use crate::license::LicenseState;
use crate::model::{Instance, InstanceStatus};

mod details;
mod render;
mod rows;

/// Root view: one row per registered instance, with the quota/locked banners
/// recomputed on every refresh.
#[derive(Debug)]
pub(in crate::tui_shell) struct InstancesView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) items: Vec<Instance>,
    pub(in crate::tui_shell) selected: usize,

    pub(in crate::tui_shell) quota_note: Option<String>,
    pub(in crate::tui_shell) locked_note: Option<String>,

    /// Instance id with an export download in flight. Only one is tracked at
    /// a time, so only one row can show the busy marker.
    pub(in crate::tui_shell) exporting: Option<String>,
}

impl InstancesView {
    pub(in crate::tui_shell) fn new(items: Vec<Instance>, license: &LicenseState, updated_at: String) -> Self {
        let quota_note = quota_banner(items.len(), license);
        let locked_note = locked_banner(&items);
        Self {
            updated_at,
            items,
            selected: 0,
            quota_note,
            locked_note,
            exporting: None,
        }
    }

    pub(in crate::tui_shell) fn selected_instance(&self) -> Option<&Instance> {
        if self.items.is_empty() {
            return None;
        }
        Some(&self.items[self.selected.min(self.items.len().saturating_sub(1))])
    }
}

pub(in crate::tui_shell) fn quota_banner(count: usize, license: &LicenseState) -> Option<String> {
    match license.remaining_quota(count) {
        None => None,
        Some(0) => Some(format!(
            "instance limit reached ({}); the add command is disabled",
            license.max_instances()
        )),
        Some(n) if count > 0 => Some(format!("{} more instance(s) can be added", n)),
        Some(_) => None,
    }
}

pub(in crate::tui_shell) fn locked_banner(items: &[Instance]) -> Option<String> {
    let locked = items
        .iter()
        .filter(|i| i.status == InstanceStatus::Locked)
        .count();
    if locked == 0 {
        return None;
    }
    Some(format!(
        "{} instance(s) locked; log in again to restore access",
        locked
    ))
}

impl View for InstancesView {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Instances
    }

    fn title(&self) -> &str {
        "Instances"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.items.is_empty() {
            self.selected = 0;
            return;
        }
        let max = self.items.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        render::render(self, frame, area, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LicenseInfo;
    use std::collections::HashMap;

    fn license(max: i64) -> LicenseState {
        LicenseState::resolved(LicenseInfo {
            edition: "Community Edition".to_string(),
            features: HashMap::new(),
            max_instances: max,
        })
    }

    fn inst(id: &str, status: InstanceStatus) -> Instance {
        Instance {
            id: id.to_string(),
            name: id.to_string(),
            base_url: "https://flows.example.com".to_string(),
            status,
            version: String::new(),
            latest_version: String::new(),
            last_seen_at: None,
            created_at: String::new(),
        }
    }

    #[test]
    fn quota_banner_reports_remaining_capacity() {
        assert_eq!(
            quota_banner(2, &license(3)),
            Some("1 more instance(s) can be added".to_string())
        );
    }

    #[test]
    fn quota_banner_reports_a_full_quota() {
        let note = quota_banner(3, &license(3)).unwrap();
        assert!(note.contains("limit reached"));
    }

    #[test]
    fn quota_banner_is_silent_when_unlimited_or_empty() {
        assert_eq!(quota_banner(100, &license(crate::license::UNLIMITED_INSTANCES)), None);
        // An empty list below quota shows no banner (nothing to report yet).
        assert_eq!(quota_banner(0, &license(3)), None);
    }

    #[test]
    fn locked_banner_counts_locked_instances() {
        let items = vec![
            inst("a", InstanceStatus::Active),
            inst("b", InstanceStatus::Locked),
            inst("c", InstanceStatus::Locked),
        ];
        assert_eq!(
            locked_banner(&items),
            Some("2 instance(s) locked; log in again to restore access".to_string())
        );
        assert_eq!(locked_banner(&[inst("a", InstanceStatus::Active)]), None);
    }
}
