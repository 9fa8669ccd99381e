use super::actions_instances::save_archive;
use super::*;

impl App {
    pub(super) fn dispatch_detail(&mut self, cmd: &str, args: &[String]) {
        match cmd {
            "tab" => match args.first().map(|s| s.as_str()) {
                None => self.cycle_detail_tab(),
                Some(name) => match DetailTab::parse(name) {
                    Some(tab) => self.switch_detail_tab(tab),
                    None => {
                        self.push_error("usage: tab <overview|workflows|errors|patterns>".to_string())
                    }
                },
            },

            "refresh" => self.refetch_detail_tab(),

            "filter" => match args.first().and_then(|s| WorkflowFilter::parse(s)) {
                Some(filter) => {
                    if let Some(v) = self.current_view_mut::<DetailView>() {
                        v.set_filter(filter);
                    }
                    self.push_output(vec![format!("filter: {}", filter.label())]);
                }
                None => self.push_error("usage: filter <active|inactive|all>".to_string()),
            },

            "select" => match args.first().map(|s| s.as_str()) {
                Some("all") => {
                    if let Some(v) = self.current_view_mut::<DetailView>() {
                        v.select_all_filtered();
                        let n = v.selected_ids.len();
                        self.push_output(vec![format!("selected {} workflow(s)", n)]);
                    }
                }
                Some("none") => {
                    if let Some(v) = self.current_view_mut::<DetailView>() {
                        v.clear_selection();
                    }
                    self.push_output(vec!["selection cleared".to_string()]);
                }
                _ => self.push_error("usage: select <all|none>".to_string()),
            },

            "export" => self.export_selected_workflows(),

            "import" => match args.first().cloned() {
                Some(path) => self.import_workflow_file(path),
                None => {
                    if !self.license.is_premium() {
                        self.push_error(
                            "workflow import requires a premium license".to_string(),
                        );
                        return;
                    }
                    self.open_text_input_modal(
                        "Import Workflow",
                        "file> ",
                        TextInputAction::ImportPath,
                        None,
                        vec!["Path to a workflow definition (.json).".to_string()],
                    );
                }
            },

            "range" => match args.first().and_then(|s| PatternRange::parse(s)) {
                Some(range) => self.set_pattern_range(range),
                None => self.push_error("usage: range <1d|14d|1m|6m|12m>".to_string()),
            },

            _ => self.push_error(format!("unknown command: {}", cmd)),
        }
    }

    pub(super) fn cycle_detail_tab(&mut self) {
        let Some(next) = self.current_view::<DetailView>().map(|v| v.tab.next()) else {
            return;
        };
        self.switch_detail_tab(next);
    }

    fn switch_detail_tab(&mut self, tab: DetailTab) {
        if let Some(v) = self.current_view_mut::<DetailView>() {
            v.set_tab(tab);
        }
        self.load_detail_tab();
    }

    fn set_pattern_range(&mut self, range: PatternRange) {
        let changed = self
            .current_view_mut::<DetailView>()
            .map(|v| {
                if v.range != range {
                    v.range = range;
                    // Each range is its own cache key; a cached range is
                    // served as-is on the next load.
                    v.patterns = None;
                    v.cursor = 0;
                    true
                } else {
                    false
                }
            })
            .unwrap_or(false);

        if changed {
            self.load_detail_tab();
        }
    }

    pub(super) fn detail_default_action(&mut self) {
        let Some(view) = self.current_view::<DetailView>() else {
            return;
        };

        match view.tab {
            DetailTab::Workflows => {
                if view.locked() {
                    return;
                }
                let rows = workflow_rows(view);
                if rows.is_empty() {
                    return;
                }
                let row = rows[view.cursor.min(rows.len() - 1)].clone();
                if let Some(v) = self.current_view_mut::<DetailView>() {
                    match row {
                        WorkflowRow::Group { key, .. } => v.toggle_group(&key),
                        WorkflowRow::Item { id, .. } => v.toggle_selected(&id),
                    }
                }
            }
            _ => self.refetch_detail_tab(),
        }
    }

    /// Bulk export of exactly the selected ids; the selection is cleared only
    /// on success.
    fn export_selected_workflows(&mut self) {
        let Some(view) = self.current_view::<DetailView>() else {
            return;
        };
        if view.locked() {
            self.push_error("instance is locked".to_string());
            return;
        }
        let id = view.instance.id.clone();
        let ids: Vec<String> = view.selected_ids.iter().cloned().collect();
        if ids.is_empty() {
            self.push_error("no workflows selected (use `select all` or Enter on rows)".to_string());
            return;
        }

        let Some(client) = self.remote_client() else {
            return;
        };

        let result = client
            .export_workflows(&id, Some(&ids))
            .and_then(|bytes| save_archive(&format!("workflows-{}-selected.zip", id), &bytes));

        match result {
            Ok(path) => {
                if let Some(v) = self.current_view_mut::<DetailView>() {
                    v.clear_selection();
                }
                self.push_output(vec![format!(
                    "exported {} workflow(s) to {}",
                    ids.len(),
                    path.display()
                )]);
            }
            Err(err) => self.open_alert_modal(format!("export failed: {:#}", err)),
        }
    }

    /// Premium-gated import. The file is parsed locally first; a parse error
    /// never reaches the backend.
    pub(super) fn import_workflow_file(&mut self, path: String) {
        if !self.license.is_premium() {
            self.push_error("workflow import requires a premium license".to_string());
            return;
        }

        let Some(view) = self.current_view::<DetailView>() else {
            return;
        };
        if view.locked() {
            self.push_error("instance is locked".to_string());
            return;
        }
        let id = view.instance.id.clone();

        let text = match std::fs::read_to_string(&path) {
            Ok(t) => t,
            Err(err) => {
                self.open_alert_modal(format!("import failed: read {}: {}", path, err));
                return;
            }
        };
        let definition: serde_json::Value = match serde_json::from_str(&text) {
            Ok(v) => v,
            Err(err) => {
                self.open_alert_modal(format!("import failed: {} is not valid JSON: {}", path, err));
                return;
            }
        };

        let Some(client) = self.remote_client() else {
            return;
        };
        match client.import_workflow(&id, &definition) {
            Ok(()) => {
                self.cache.invalidate(&QueryKey::new("workflows", [id.as_str()]));
                if let Some(v) = self.current_view_mut::<DetailView>() {
                    v.workflows = None;
                }
                self.load_detail_tab();
                self.push_output(vec!["workflow imported".to_string()]);
            }
            Err(err) => self.open_alert_modal(format!("import failed: {:#}", err)),
        }
    }
}
