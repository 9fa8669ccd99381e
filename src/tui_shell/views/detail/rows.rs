use super::grouping::{filter_workflows, group_workflows};
use super::DetailView;

/// Flattened row model for the workflows tab: group headers interleaved with
/// the member workflows of expanded groups. The cursor walks this list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum WorkflowRow {
    Group {
        key: String,
        count: usize,
        collapsed: bool,
    },
    Item {
        id: String,
        name: String,
        active: bool,
        last_run_at: Option<String>,
        last_error_at: Option<String>,
        selected: bool,
    },
}

pub(in crate::tui_shell) fn workflow_rows(view: &DetailView) -> Vec<WorkflowRow> {
    let Some(workflows) = view.workflows.as_deref() else {
        return Vec::new();
    };

    let filtered = filter_workflows(workflows, view.filter);
    let mut rows = Vec::new();
    for (key, members) in group_workflows(&filtered) {
        let collapsed = view.collapsed_groups.contains(&key);
        rows.push(WorkflowRow::Group {
            key,
            count: members.len(),
            collapsed,
        });
        if collapsed {
            continue;
        }
        for w in members {
            rows.push(WorkflowRow::Item {
                id: w.id.clone(),
                name: w.name.clone(),
                active: w.active,
                last_run_at: w.last_run_at.clone(),
                last_error_at: w.last_error_at.clone(),
                selected: view.selected_ids.contains(&w.id),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::super::{DetailTab, DetailView, WorkflowFilter};
    use super::*;
    use crate::model::{Instance, InstanceStatus, Workflow};

    fn wf(id: &str, name: &str) -> Workflow {
        Workflow {
            id: id.to_string(),
            name: name.to_string(),
            active: true,
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
        view.filter = WorkflowFilter::All;
        view.workflows = Some(workflows);
        view
    }

    #[test]
    fn rows_interleave_headers_and_members() {
        let view = view_with(vec![wf("w1", "apple"), wf("w2", "avocado"), wf("w3", "banana")]);
        let rows = workflow_rows(&view);

        assert_eq!(rows.len(), 5);
        assert!(matches!(&rows[0], WorkflowRow::Group { key, count: 2, .. } if key == "A"));
        assert!(matches!(&rows[1], WorkflowRow::Item { id, .. } if id == "w1"));
        assert!(matches!(&rows[3], WorkflowRow::Group { key, count: 1, .. } if key == "B"));
    }

    #[test]
    fn collapsed_groups_hide_their_members() {
        let mut view = view_with(vec![wf("w1", "apple"), wf("w2", "banana")]);
        view.toggle_group("A");
        let rows = workflow_rows(&view);

        assert_eq!(rows.len(), 3);
        assert!(matches!(&rows[0], WorkflowRow::Group { key, collapsed: true, .. } if key == "A"));
        assert!(matches!(&rows[1], WorkflowRow::Group { key, collapsed: false, .. } if key == "B"));
        assert!(matches!(&rows[2], WorkflowRow::Item { id, .. } if id == "w2"));
    }

    #[test]
    fn rows_mark_selected_workflows() {
        let mut view = view_with(vec![wf("w1", "apple")]);
        view.toggle_selected("w1");
        let rows = workflow_rows(&view);
        assert!(matches!(&rows[1], WorkflowRow::Item { selected: true, .. }));
    }

    #[test]
    fn unloaded_workflows_render_no_rows() {
        let mut view = view_with(Vec::new());
        view.workflows = None;
        assert!(workflow_rows(&view).is_empty());
    }
}
