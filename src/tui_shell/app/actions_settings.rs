use crate::model::BackupSettings;

use super::*;

impl App {
    pub(super) fn dispatch_alerts(&mut self, cmd: &str, args: &[String]) {
        if !args.is_empty() {
            self.push_error(format!("usage: {}", cmd));
            return;
        }
        match cmd {
            "save" => self.save_alert_settings(),
            "refresh" => {
                self.cache.invalidate(&Self::alerts_key());
                self.open_alerts_view();
                self.push_output(vec!["reloaded alert settings".to_string()]);
            }
            _ => self.push_error(format!("unknown command: {}", cmd)),
        }
    }

    pub(super) fn dispatch_backups(&mut self, cmd: &str, args: &[String]) {
        if !args.is_empty() {
            self.push_error(format!("usage: {}", cmd));
            return;
        }
        match cmd {
            "save" => self.save_backup_settings(),
            "refresh" => {
                self.cache.invalidate(&Self::backups_key());
                self.cache.invalidate(&Self::backup_statuses_key());
                self.open_backups_view();
                self.push_output(vec!["reloaded backup settings".to_string()]);
            }
            _ => self.push_error(format!("unknown command: {}", cmd)),
        }
    }

    pub(super) fn do_alerts_item(&mut self) {
        let Some(kind) = self
            .current_view::<AlertsView>()
            .and_then(|v| v.selected_kind())
        else {
            return;
        };

        // Gated/disabled rows explain themselves instead of toggling.
        if let Some(reason) = self
            .current_view::<AlertsView>()
            .and_then(|v| v.disabled_reason(kind))
        {
            self.push_error(reason.to_string());
            return;
        }

        match kind {
            AlertsItemKind::Email => {
                let initial = self
                    .current_view::<AlertsView>()
                    .map(|v| v.form.email.clone())
                    .filter(|s| !s.is_empty());
                self.open_text_input_modal(
                    "Alert Settings",
                    "email> ",
                    TextInputAction::AlertsEmail,
                    initial,
                    vec!["Address that receives alert emails.".to_string()],
                );
            }
            AlertsItemKind::ToggleEnabled => {
                if let Some(v) = self.current_view_mut::<AlertsView>() {
                    v.form.enabled = !v.form.enabled;
                }
            }
            AlertsItemKind::ToggleInstanceOffline => {
                if let Some(v) = self.current_view_mut::<AlertsView>() {
                    v.form.notify_on_instance_offline = !v.form.notify_on_instance_offline;
                }
            }
            AlertsItemKind::ToggleWorkflowError => {
                if let Some(v) = self.current_view_mut::<AlertsView>() {
                    v.form.notify_on_workflow_error = !v.form.notify_on_workflow_error;
                }
            }
            AlertsItemKind::ToggleInvalidApiKey => {
                if let Some(v) = self.current_view_mut::<AlertsView>() {
                    v.form.notify_on_invalid_api_key = !v.form.notify_on_invalid_api_key;
                }
            }
            AlertsItemKind::Save => self.save_alert_settings(),
        }
    }

    fn save_alert_settings(&mut self) {
        let Some(form) = self.current_view::<AlertsView>().map(|v| v.form.clone()) else {
            return;
        };
        if form.enabled && form.email.trim().is_empty() {
            if let Some(v) = self.current_view_mut::<AlertsView>() {
                v.error_note = Some("email address is required when notifications are on".to_string());
            }
            return;
        }

        let Some(client) = self.remote_client() else {
            return;
        };
        match client.update_alert_settings(&form.to_settings()) {
            Ok(_) => {
                self.cache.invalidate(&Self::alerts_key());
                let now = OffsetDateTime::now_utc();
                if let Some(v) = self.current_view_mut::<AlertsView>() {
                    v.set_notice("settings saved", now);
                    v.updated_at = now_ts();
                }
            }
            Err(err) => {
                let msg = format!("save failed: {:#}", err);
                if let Some(v) = self.current_view_mut::<AlertsView>() {
                    v.error_note = Some(msg);
                }
            }
        }
    }

    pub(super) fn do_backups_item(&mut self) {
        let Some(view) = self.current_view::<BackupsView>() else {
            return;
        };
        if !view.premium {
            self.push_error("automatic backups require a premium license".to_string());
            return;
        }
        let Some(kind) = view.selected_kind() else {
            return;
        };

        match kind {
            BackupsItemKind::ToggleEnabled => {
                if let Some(v) = self.current_view_mut::<BackupsView>()
                    && let Some(form) = v.form.as_mut()
                {
                    form.enabled = !form.enabled;
                }
            }
            BackupsItemKind::Folder => {
                let initial = self
                    .current_view::<BackupsView>()
                    .and_then(|v| v.form.as_ref())
                    .map(|f| f.folder_id.clone())
                    .filter(|s| !s.is_empty());
                self.open_text_input_modal(
                    "Backup Settings",
                    "folder> ",
                    TextInputAction::BackupsFolder,
                    initial,
                    vec!["Destination folder id for backup archives.".to_string()],
                );
            }
            BackupsItemKind::Interval => {
                if let Some(v) = self.current_view_mut::<BackupsView>()
                    && let Some(form) = v.form.as_mut()
                {
                    form.interval = form.interval.next();
                }
            }
            BackupsItemKind::Save => self.save_backup_settings(),
        }
    }

    fn save_backup_settings(&mut self) {
        let Some(form) = self
            .current_view::<BackupsView>()
            .and_then(|v| v.form.clone())
        else {
            self.push_error("automatic backups require a premium license".to_string());
            return;
        };

        let Some(client) = self.remote_client() else {
            return;
        };
        let settings = BackupSettings {
            enabled: form.enabled,
            google_drive_folder_id: form.folder_id,
            interval_hours: form.interval.hours(),
            last_backup_at: None,
        };
        match client.update_backup_settings(&settings) {
            Ok(_) => {
                self.cache.invalidate(&Self::backups_key());
                let now = OffsetDateTime::now_utc();
                if let Some(v) = self.current_view_mut::<BackupsView>() {
                    v.set_notice("settings saved", now);
                    v.updated_at = now_ts();
                }
            }
            Err(err) => {
                let msg = format!("save failed: {:#}", err);
                if let Some(v) = self.current_view_mut::<BackupsView>() {
                    v.error_note = Some(msg);
                }
            }
        }
    }
}
