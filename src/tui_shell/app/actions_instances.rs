use super::*;

impl App {
    pub(super) fn dispatch_instances(&mut self, cmd: &str, args: &[String]) {
        if !args.is_empty() {
            self.push_error(format!("usage: {}", cmd));
            return;
        }
        match cmd {
            "refresh" => {
                self.cache.invalidate(&Self::instances_key());
                self.refresh_instances_view();
                self.push_output(vec!["refreshed instances".to_string()]);
            }
            "open" => self.open_selected_instance(),
            "add" => self.start_add_instance_wizard(),
            "edit" => self.start_edit_instance_wizard(),
            "export" => self.export_all_workflows(),
            _ => self.push_error(format!("unknown command: {}", cmd)),
        }
    }

    pub(super) fn run_default_action(&mut self) {
        match self.mode() {
            UiMode::Instances => self.open_selected_instance(),
            UiMode::Detail => self.detail_default_action(),
            UiMode::Alerts => self.do_alerts_item(),
            UiMode::Backups => self.do_backups_item(),
        }
    }

    fn open_selected_instance(&mut self) {
        let Some(inst) = self
            .current_view::<InstancesView>()
            .and_then(|v| v.selected_instance())
            .cloned()
        else {
            self.push_error("no instance selected".to_string());
            return;
        };
        self.open_detail_view(inst);
    }

    /// Export every workflow of the selected instance. One export at a time;
    /// the busy marker on the card is keyed by instance id.
    fn export_all_workflows(&mut self) {
        if let Some(busy) = self.exporting_instance.as_deref() {
            self.push_error(format!("export already running for instance {}", busy));
            return;
        }

        let Some(inst) = self
            .current_view::<InstancesView>()
            .and_then(|v| v.selected_instance())
            .cloned()
        else {
            self.push_error("no instance selected".to_string());
            return;
        };

        let Some(client) = self.remote_client() else {
            return;
        };

        self.exporting_instance = Some(inst.id.clone());
        if let Some(v) = self.current_view_mut::<InstancesView>() {
            v.exporting = Some(inst.id.clone());
        }

        let result = client
            .export_workflows(&inst.id, None)
            .and_then(|bytes| save_archive(&format!("workflows-{}.zip", inst.id), &bytes));

        self.exporting_instance = None;
        if let Some(v) = self.current_view_mut::<InstancesView>() {
            v.exporting = None;
        }

        match result {
            Ok(path) => {
                self.push_output(vec![format!("exported workflows to {}", path.display())]);
            }
            Err(err) => self.open_alert_modal(format!("export failed: {:#}", err)),
        }
    }
}

pub(super) fn save_archive(filename: &str, bytes: &[u8]) -> Result<std::path::PathBuf> {
    let path = std::env::current_dir()
        .context("get current dir")?
        .join(filename);
    std::fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
