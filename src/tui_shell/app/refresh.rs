use crate::model::AlertSettings;

use super::*;

impl App {
    pub(super) fn instances_key() -> QueryKey {
        QueryKey::bare("instances")
    }

    fn workflows_key(id: &str) -> QueryKey {
        QueryKey::new("workflows", [id])
    }

    fn events_key(id: &str) -> QueryKey {
        QueryKey::new("events", [id])
    }

    fn patterns_key(id: &str, range: PatternRange) -> QueryKey {
        QueryKey::new("patterns", [id, range.as_str()])
    }

    fn last_backup_key(id: &str) -> QueryKey {
        QueryKey::new("last-backup", [id])
    }

    pub(super) fn alerts_key() -> QueryKey {
        QueryKey::bare("alert-settings")
    }

    pub(super) fn backups_key() -> QueryKey {
        QueryKey::bare("backup-settings")
    }

    pub(super) fn backup_statuses_key() -> QueryKey {
        QueryKey::bare("backup-statuses")
    }

    fn fetch_instances(&mut self) -> Option<Vec<Instance>> {
        let client = self.remote_client()?;
        match self
            .cache
            .get_or_fetch(Self::instances_key(), || client.list_instances())
        {
            Ok(items) => Some(items),
            Err(err) => {
                self.push_error(format!("list instances: {:#}", err));
                None
            }
        }
    }

    pub(in crate::tui_shell) fn open_instances_view(&mut self) {
        let Some(items) = self.fetch_instances() else {
            return;
        };

        // The instance list is the root frame; replace it rather than stack.
        while self.frames.len() > 1 {
            self.frames.pop();
        }
        self.frames[0] = ViewFrame {
            view: Box::new(InstancesView::new(items, &self.license, now_ts())),
        };
    }

    pub(in crate::tui_shell) fn refresh_instances_view(&mut self) {
        let Some(items) = self.fetch_instances() else {
            return;
        };
        let license = self.license.clone();
        let exporting = self.exporting_instance.clone();
        if let Some(v) = self.current_view_mut::<InstancesView>() {
            let selected = v.selected.min(items.len().saturating_sub(1));
            let mut fresh = InstancesView::new(items, &license, now_ts());
            fresh.selected = selected;
            fresh.exporting = exporting;
            *v = fresh;
        }
    }

    pub(in crate::tui_shell) fn open_detail_view(&mut self, instance: Instance) {
        self.push_view(DetailView::new(instance, now_ts()));
        self.load_detail_tab();
    }

    /// Fetch whatever the active tab needs, if it is not already cached.
    /// Locked instances skip data fetches entirely; the tabs render the
    /// locked placeholder instead.
    pub(in crate::tui_shell) fn load_detail_tab(&mut self) {
        let Some(view) = self.current_view::<DetailView>() else {
            return;
        };
        let id = view.instance.id.clone();
        let tab = view.tab;
        let range = view.range;
        let locked = view.locked();

        match tab {
            DetailTab::Overview => {
                if locked || !self.license.is_premium() {
                    return;
                }
                if self
                    .current_view::<DetailView>()
                    .is_some_and(|v| v.last_backup.is_some())
                {
                    return;
                }
                let Some(client) = self.remote_client() else {
                    return;
                };
                let fetched = self.cache.get_or_fetch(Self::last_backup_key(&id), || {
                    client.instance_last_backup(&id).map(|b| b.last_backup_at)
                });
                match fetched {
                    Ok(last) => {
                        if let Some(v) = self.current_view_mut::<DetailView>() {
                            v.last_backup = Some(last);
                        }
                    }
                    Err(err) => self.push_error(format!("last backup: {:#}", err)),
                }
            }

            DetailTab::Workflows => {
                if locked
                    || self
                        .current_view::<DetailView>()
                        .is_some_and(|v| v.workflows.is_some())
                {
                    return;
                }
                let Some(client) = self.remote_client() else {
                    return;
                };
                let fetched = self
                    .cache
                    .get_or_fetch(Self::workflows_key(&id), || client.list_workflows(&id));
                match fetched {
                    Ok(workflows) => {
                        if let Some(v) = self.current_view_mut::<DetailView>() {
                            v.workflows = Some(workflows);
                            v.updated_at = now_ts();
                        }
                    }
                    Err(err) => self.push_error(format!("list workflows: {:#}", err)),
                }
            }

            DetailTab::Errors => {
                if locked
                    || self
                        .current_view::<DetailView>()
                        .is_some_and(|v| v.events.is_some())
                {
                    return;
                }
                let Some(client) = self.remote_client() else {
                    return;
                };
                let fetched = self
                    .cache
                    .get_or_fetch(Self::events_key(&id), || client.list_error_events(&id));
                match fetched {
                    Ok(events) => {
                        if let Some(v) = self.current_view_mut::<DetailView>() {
                            v.events = Some(events);
                            v.updated_at = now_ts();
                        }
                    }
                    Err(err) => self.push_error(format!("list error events: {:#}", err)),
                }
            }

            DetailTab::Patterns => {
                if locked
                    || self
                        .current_view::<DetailView>()
                        .is_some_and(|v| v.patterns.is_some())
                {
                    return;
                }
                let Some(client) = self.remote_client() else {
                    return;
                };
                let fetched = self.cache.get_or_fetch(Self::patterns_key(&id, range), || {
                    client.error_patterns(&id, range)
                });
                match fetched {
                    Ok(patterns) => {
                        if let Some(v) = self.current_view_mut::<DetailView>() {
                            v.patterns = Some(patterns);
                            v.updated_at = now_ts();
                        }
                    }
                    Err(err) => self.push_error(format!("error patterns: {:#}", err)),
                }
            }
        }
    }

    /// Drop the active tab's cache entry and refetch it.
    pub(in crate::tui_shell) fn refetch_detail_tab(&mut self) {
        let Some(view) = self.current_view::<DetailView>() else {
            return;
        };
        let id = view.instance.id.clone();
        let tab = view.tab;
        let range = view.range;

        match tab {
            DetailTab::Overview => self.cache.invalidate(&Self::last_backup_key(&id)),
            DetailTab::Workflows => self.cache.invalidate(&Self::workflows_key(&id)),
            DetailTab::Errors => self.cache.invalidate(&Self::events_key(&id)),
            DetailTab::Patterns => self.cache.invalidate(&Self::patterns_key(&id, range)),
        }

        if let Some(v) = self.current_view_mut::<DetailView>() {
            match tab {
                DetailTab::Overview => v.last_backup = None,
                DetailTab::Workflows => {
                    v.workflows = None;
                    v.selected_ids.clear();
                }
                DetailTab::Errors => v.events = None,
                DetailTab::Patterns => v.patterns = None,
            }
        }
        self.load_detail_tab();
    }

    pub(in crate::tui_shell) fn open_alerts_view(&mut self) {
        let Some(client) = self.remote_client() else {
            return;
        };
        let fetched = self
            .cache
            .get_or_fetch(Self::alerts_key(), || client.alert_settings());
        let settings: AlertSettings = match fetched {
            Ok(s) => s,
            Err(err) => {
                self.push_error(format!("fetch alert settings: {:#}", err));
                return;
            }
        };

        let view = AlertsView::new(
            AlertForm::from_settings(&settings),
            self.license.is_feature_enabled("alert.workflow_error"),
            self.license.is_feature_enabled("alert.invalid_api_key"),
            now_ts(),
        );
        if self.mode() == UiMode::Alerts {
            if let Some(v) = self.current_view_mut::<AlertsView>() {
                *v = view;
            }
        } else {
            self.push_view(view);
        }
    }

    pub(in crate::tui_shell) fn open_backups_view(&mut self) {
        if !self.license.is_premium() {
            let view = BackupsView::upsell(now_ts());
            if self.mode() != UiMode::Backups {
                self.push_view(view);
            }
            return;
        }

        let Some(client) = self.remote_client() else {
            return;
        };
        let settings = match self
            .cache
            .get_or_fetch(Self::backups_key(), || client.backup_settings())
        {
            Ok(s) => s,
            Err(err) => {
                self.push_error(format!("fetch backup settings: {:#}", err));
                return;
            }
        };
        let statuses: Vec<BackupStatus> = match self
            .cache
            .get_or_fetch(Self::backup_statuses_key(), || client.backups_last_all())
        {
            Ok(s) => s,
            Err(err) => {
                self.push_error(format!("backup statuses: {:#}", err));
                Vec::new()
            }
        };

        let form = BackupForm {
            enabled: settings.enabled,
            folder_id: settings.google_drive_folder_id.clone(),
            interval: BackupInterval::from_hours(settings.interval_hours)
                .unwrap_or_default(),
        };
        let view = BackupsView::premium(form, statuses, now_ts());
        if self.mode() == UiMode::Backups {
            if let Some(v) = self.current_view_mut::<BackupsView>() {
                *v = view;
            }
        } else {
            self.push_view(view);
        }
    }
}
