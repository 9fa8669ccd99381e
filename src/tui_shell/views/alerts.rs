use time::OffsetDateTime;

use super::super::{RenderCtx, UiMode, View};
use crate::model::AlertForm;

mod render;
mod rows;

/// Success notices auto-dismiss after this many seconds.
pub(in crate::tui_shell) const NOTICE_SECS: i64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum AlertsItemKind {
    Email,
    ToggleEnabled,
    ToggleInstanceOffline,
    ToggleWorkflowError,
    ToggleInvalidApiKey,
    Save,
}

/// Alert-settings form. Two of the event toggles are license-gated; the
/// gates are captured when the view is opened and the gated rows stay
/// disabled no matter what is persisted.
#[derive(Debug)]
pub(in crate::tui_shell) struct AlertsView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) form: AlertForm,
    pub(in crate::tui_shell) items: Vec<AlertsItemKind>,
    pub(in crate::tui_shell) selected: usize,

    pub(in crate::tui_shell) workflow_error_allowed: bool,
    pub(in crate::tui_shell) invalid_api_key_allowed: bool,

    pub(in crate::tui_shell) notice: Option<(OffsetDateTime, String)>,
    pub(in crate::tui_shell) error_note: Option<String>,
}

impl AlertsView {
    pub(in crate::tui_shell) fn new(
        form: AlertForm,
        workflow_error_allowed: bool,
        invalid_api_key_allowed: bool,
        updated_at: String,
    ) -> Self {
        Self {
            updated_at,
            form,
            items: vec![
                AlertsItemKind::Email,
                AlertsItemKind::ToggleEnabled,
                AlertsItemKind::ToggleInstanceOffline,
                AlertsItemKind::ToggleWorkflowError,
                AlertsItemKind::ToggleInvalidApiKey,
                AlertsItemKind::Save,
            ],
            selected: 0,
            workflow_error_allowed,
            invalid_api_key_allowed,
            notice: None,
            error_note: None,
        }
    }

    pub(in crate::tui_shell) fn selected_kind(&self) -> Option<AlertsItemKind> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items[self.selected.min(self.items.len().saturating_sub(1))])
    }

    /// Why an item cannot be activated right now; `None` means it can.
    /// License gates win over the global switch, so a gated row reads as
    /// locked even when notifications are off entirely.
    pub(in crate::tui_shell) fn disabled_reason(&self, kind: AlertsItemKind) -> Option<&'static str> {
        match kind {
            AlertsItemKind::Email | AlertsItemKind::ToggleEnabled | AlertsItemKind::Save => None,
            AlertsItemKind::ToggleWorkflowError if !self.workflow_error_allowed => {
                Some("requires the alert.workflow_error license feature")
            }
            AlertsItemKind::ToggleInvalidApiKey if !self.invalid_api_key_allowed => {
                Some("requires the alert.invalid_api_key license feature")
            }
            _ if !self.form.enabled => Some("enable notifications first"),
            _ => None,
        }
    }

    pub(in crate::tui_shell) fn set_notice(&mut self, msg: impl Into<String>, now: OffsetDateTime) {
        self.notice = Some((now, msg.into()));
        self.error_note = None;
    }

    pub(in crate::tui_shell) fn active_notice(&self, now: OffsetDateTime) -> Option<&str> {
        let (at, msg) = self.notice.as_ref()?;
        if (now - *at).whole_seconds() < NOTICE_SECS {
            Some(msg.as_str())
        } else {
            None
        }
    }
}

impl View for AlertsView {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Alerts
    }

    fn title(&self) -> &str {
        "Alert Settings"
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

    fn view(enabled: bool, wf_allowed: bool, key_allowed: bool) -> AlertsView {
        let form = AlertForm {
            enabled,
            ..AlertForm::default()
        };
        AlertsView::new(form, wf_allowed, key_allowed, "2026-02-01T00:00:00Z".to_string())
    }

    #[test]
    fn gated_toggles_stay_disabled_regardless_of_the_global_switch() {
        let v = view(true, false, false);
        assert!(v.disabled_reason(AlertsItemKind::ToggleWorkflowError).is_some());
        assert!(v.disabled_reason(AlertsItemKind::ToggleInvalidApiKey).is_some());

        // Even with notifications off, the gate message wins.
        let v = view(false, false, true);
        assert_eq!(
            v.disabled_reason(AlertsItemKind::ToggleWorkflowError),
            Some("requires the alert.workflow_error license feature")
        );
    }

    #[test]
    fn event_toggles_need_the_global_switch() {
        let v = view(false, true, true);
        assert_eq!(
            v.disabled_reason(AlertsItemKind::ToggleInstanceOffline),
            Some("enable notifications first")
        );
        let v = view(true, true, true);
        assert!(v.disabled_reason(AlertsItemKind::ToggleInstanceOffline).is_none());
        assert!(v.disabled_reason(AlertsItemKind::ToggleWorkflowError).is_none());
    }

    #[test]
    fn email_enabled_and_save_are_never_gated() {
        let v = view(false, false, false);
        assert!(v.disabled_reason(AlertsItemKind::Email).is_none());
        assert!(v.disabled_reason(AlertsItemKind::ToggleEnabled).is_none());
        assert!(v.disabled_reason(AlertsItemKind::Save).is_none());
    }

    #[test]
    fn notices_expire_after_three_seconds() {
        let mut v = view(true, true, true);
        let t0 = OffsetDateTime::from_unix_timestamp(1_760_000_000).unwrap();
        v.set_notice("settings saved", t0);

        assert_eq!(v.active_notice(t0), Some("settings saved"));
        assert_eq!(
            v.active_notice(t0 + time::Duration::seconds(2)),
            Some("settings saved")
        );
        assert_eq!(v.active_notice(t0 + time::Duration::seconds(3)), None);
    }
}
