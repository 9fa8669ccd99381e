use time::OffsetDateTime;

use super::super::{RenderCtx, UiMode, View};
use super::alerts::NOTICE_SECS;
use crate::model::{BackupInterval, BackupStatus};

mod render;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum BackupsItemKind {
    ToggleEnabled,
    Folder,
    Interval,
    Save,
}

#[derive(Clone, Debug, Default)]
pub(in crate::tui_shell) struct BackupForm {
    pub(in crate::tui_shell) enabled: bool,
    pub(in crate::tui_shell) folder_id: String,
    pub(in crate::tui_shell) interval: BackupInterval,
}

/// Backup-settings view. The whole form is premium-gated: non-premium
/// sessions get the upsell placeholder and no items at all. The per-instance
/// status list rides along read-only.
#[derive(Debug)]
pub(in crate::tui_shell) struct BackupsView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) premium: bool,
    pub(in crate::tui_shell) form: Option<BackupForm>,
    pub(in crate::tui_shell) statuses: Vec<BackupStatus>,
    pub(in crate::tui_shell) items: Vec<BackupsItemKind>,
    pub(in crate::tui_shell) selected: usize,

    pub(in crate::tui_shell) notice: Option<(OffsetDateTime, String)>,
    pub(in crate::tui_shell) error_note: Option<String>,
}

impl BackupsView {
    pub(in crate::tui_shell) fn premium(
        form: BackupForm,
        statuses: Vec<BackupStatus>,
        updated_at: String,
    ) -> Self {
        Self {
            updated_at,
            premium: true,
            form: Some(form),
            statuses,
            items: vec![
                BackupsItemKind::ToggleEnabled,
                BackupsItemKind::Folder,
                BackupsItemKind::Interval,
                BackupsItemKind::Save,
            ],
            selected: 0,
            notice: None,
            error_note: None,
        }
    }

    pub(in crate::tui_shell) fn upsell(updated_at: String) -> Self {
        Self {
            updated_at,
            premium: false,
            form: None,
            statuses: Vec::new(),
            items: Vec::new(),
            selected: 0,
            notice: None,
            error_note: None,
        }
    }

    pub(in crate::tui_shell) fn selected_kind(&self) -> Option<BackupsItemKind> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items[self.selected.min(self.items.len().saturating_sub(1))])
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

impl View for BackupsView {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Backups
    }

    fn title(&self) -> &str {
        "Backup Settings"
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

    #[test]
    fn upsell_view_has_no_editable_items() {
        let v = BackupsView::upsell("2026-02-01T00:00:00Z".to_string());
        assert!(!v.premium);
        assert!(v.selected_kind().is_none());
        assert!(v.form.is_none());
    }

    #[test]
    fn premium_view_exposes_the_form_items() {
        let v = BackupsView::premium(
            BackupForm::default(),
            Vec::new(),
            "2026-02-01T00:00:00Z".to_string(),
        );
        assert!(v.premium);
        assert_eq!(v.items.len(), 4);
        assert_eq!(v.selected_kind(), Some(BackupsItemKind::ToggleEnabled));
    }
}
