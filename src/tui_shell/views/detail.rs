use std::collections::BTreeSet;

use super::super::{RenderCtx, UiMode, View};
use crate::model::{ErrorPattern, EventRecord, Instance, InstanceStatus, PatternRange, Workflow};

mod errors;
mod grouping;
mod overview;
mod patterns;
mod render;
mod rows;

use grouping::visible_ids;
pub(in crate::tui_shell) use rows::{WorkflowRow, workflow_rows};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::tui_shell) enum DetailTab {
    #[default]
    Overview,
    Workflows,
    Errors,
    Patterns,
}

impl DetailTab {
    pub(in crate::tui_shell) const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Workflows,
        DetailTab::Errors,
        DetailTab::Patterns,
    ];

    pub(in crate::tui_shell) fn label(self) -> &'static str {
        match self {
            DetailTab::Overview => "overview",
            DetailTab::Workflows => "workflows",
            DetailTab::Errors => "errors",
            DetailTab::Patterns => "patterns",
        }
    }

    pub(in crate::tui_shell) fn next(self) -> DetailTab {
        match self {
            DetailTab::Overview => DetailTab::Workflows,
            DetailTab::Workflows => DetailTab::Errors,
            DetailTab::Errors => DetailTab::Patterns,
            DetailTab::Patterns => DetailTab::Overview,
        }
    }

    pub(in crate::tui_shell) fn parse(s: &str) -> Option<DetailTab> {
        Self::ALL.into_iter().find(|t| t.label() == s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::tui_shell) enum WorkflowFilter {
    #[default]
    Active,
    Inactive,
    All,
}

impl WorkflowFilter {
    pub(in crate::tui_shell) fn matches(self, workflow: &Workflow) -> bool {
        match self {
            WorkflowFilter::Active => workflow.active,
            WorkflowFilter::Inactive => !workflow.active,
            WorkflowFilter::All => true,
        }
    }

    pub(in crate::tui_shell) fn label(self) -> &'static str {
        match self {
            WorkflowFilter::Active => "active",
            WorkflowFilter::Inactive => "inactive",
            WorkflowFilter::All => "all",
        }
    }

    pub(in crate::tui_shell) fn parse(s: &str) -> Option<WorkflowFilter> {
        match s {
            "active" => Some(WorkflowFilter::Active),
            "inactive" => Some(WorkflowFilter::Inactive),
            "all" => Some(WorkflowFilter::All),
            _ => None,
        }
    }
}

/// Tabbed view over one instance. Tab data is filled in lazily by the app
/// (through the query cache) the first time a tab becomes active; `None`
/// means not loaded yet.
#[derive(Debug)]
pub(in crate::tui_shell) struct DetailView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) instance: Instance,
    pub(in crate::tui_shell) tab: DetailTab,
    pub(in crate::tui_shell) cursor: usize,

    pub(in crate::tui_shell) workflows: Option<Vec<Workflow>>,
    pub(in crate::tui_shell) filter: WorkflowFilter,
    pub(in crate::tui_shell) selected_ids: BTreeSet<String>,
    pub(in crate::tui_shell) collapsed_groups: BTreeSet<String>,

    pub(in crate::tui_shell) events: Option<Vec<EventRecord>>,

    pub(in crate::tui_shell) range: PatternRange,
    pub(in crate::tui_shell) patterns: Option<Vec<ErrorPattern>>,

    /// Premium only. Outer `None` = not loaded; inner `None` = never backed up.
    pub(in crate::tui_shell) last_backup: Option<Option<String>>,
}

impl DetailView {
    pub(in crate::tui_shell) fn new(instance: Instance, updated_at: String) -> Self {
        Self {
            updated_at,
            instance,
            tab: DetailTab::default(),
            cursor: 0,
            workflows: None,
            filter: WorkflowFilter::default(),
            selected_ids: BTreeSet::new(),
            collapsed_groups: BTreeSet::new(),
            events: None,
            range: PatternRange::default(),
            patterns: None,
            last_backup: None,
        }
    }

    pub(in crate::tui_shell) fn locked(&self) -> bool {
        self.instance.status == InstanceStatus::Locked
    }

    /// Set the filter; the selection is cleared so hidden ids can never leak
    /// into an export.
    pub(in crate::tui_shell) fn set_filter(&mut self, filter: WorkflowFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.selected_ids.clear();
            self.cursor = 0;
        }
    }

    pub(in crate::tui_shell) fn set_tab(&mut self, tab: DetailTab) {
        if self.tab != tab {
            if self.tab == DetailTab::Workflows {
                self.selected_ids.clear();
            }
            self.tab = tab;
            self.cursor = 0;
        }
    }

    pub(in crate::tui_shell) fn toggle_selected(&mut self, id: &str) {
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.to_string());
        }
    }

    pub(in crate::tui_shell) fn select_all_filtered(&mut self) {
        let Some(workflows) = self.workflows.as_deref() else {
            return;
        };
        self.selected_ids = visible_ids(workflows, self.filter).into_iter().collect();
    }

    pub(in crate::tui_shell) fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    pub(in crate::tui_shell) fn toggle_group(&mut self, key: &str) {
        if !self.collapsed_groups.remove(key) {
            self.collapsed_groups.insert(key.to_string());
        }
    }

    fn row_len(&self) -> usize {
        if self.locked() {
            return 0;
        }
        match self.tab {
            DetailTab::Overview => 0,
            DetailTab::Workflows => workflow_rows(self).len(),
            DetailTab::Errors => self.events.as_ref().map(|e| e.len()).unwrap_or(0),
            DetailTab::Patterns => self.patterns.as_ref().map(|p| p.len()).unwrap_or(0),
        }
    }
}

impl View for DetailView {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn mode(&self) -> UiMode {
        UiMode::Detail
    }

    fn title(&self) -> &str {
        &self.instance.name
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let len = self.row_len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor + 1).min(len - 1);
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        render::render(self, frame, area, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wf(id: &str, name: &str, active: bool) -> Workflow {
        Workflow {
            id: id.to_string(),
            name: name.to_string(),
            active,
            last_run_at: None,
            last_error_at: None,
        }
    }

    fn view_with(workflows: Vec<Workflow>) -> DetailView {
        let instance = Instance {
            id: "i1".to_string(),
            name: "prod".to_string(),
            base_url: "https://flows.example.com".to_string(),
            status: InstanceStatus::Active,
            version: String::new(),
            latest_version: String::new(),
            last_seen_at: None,
            created_at: String::new(),
        };
        let mut view = DetailView::new(instance, "2026-02-01T00:00:00Z".to_string());
        view.tab = DetailTab::Workflows;
        view.workflows = Some(workflows);
        view
    }

    #[test]
    fn select_all_covers_exactly_the_filtered_set() {
        let mut view = view_with(vec![
            wf("w1", "Alpha", true),
            wf("w2", "Beta", false),
            wf("w3", "Gamma", true),
        ]);
        view.set_filter(WorkflowFilter::Active);
        view.select_all_filtered();

        let selected: Vec<&str> = view.selected_ids.iter().map(|s| s.as_str()).collect();
        assert_eq!(selected, vec!["w1", "w3"]);
    }

    #[test]
    fn changing_the_filter_clears_the_selection() {
        let mut view = view_with(vec![wf("w1", "Alpha", true), wf("w2", "Beta", false)]);
        view.select_all_filtered();
        assert!(!view.selected_ids.is_empty());

        view.set_filter(WorkflowFilter::Inactive);
        assert!(view.selected_ids.is_empty());

        // Re-applying the same filter leaves the selection alone.
        view.toggle_selected("w2");
        view.set_filter(WorkflowFilter::Inactive);
        assert_eq!(view.selected_ids.len(), 1);
    }

    #[test]
    fn leaving_the_workflows_tab_clears_the_selection() {
        let mut view = view_with(vec![wf("w1", "Alpha", true)]);
        view.toggle_selected("w1");
        view.set_tab(DetailTab::Errors);
        assert!(view.selected_ids.is_empty());
    }

    #[test]
    fn toggle_selected_flips_membership() {
        let mut view = view_with(vec![wf("w1", "Alpha", true)]);
        view.toggle_selected("w1");
        assert!(view.selected_ids.contains("w1"));
        view.toggle_selected("w1");
        assert!(!view.selected_ids.contains("w1"));
    }

    #[test]
    fn tab_cycle_visits_all_four_tabs() {
        let mut tab = DetailTab::Overview;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(tab);
            tab = tab.next();
        }
        assert_eq!(tab, DetailTab::Overview);
        assert_eq!(seen, DetailTab::ALL.to_vec());
    }
}
