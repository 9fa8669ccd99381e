use super::{Workflow, WorkflowFilter};

/// Workflows whose name does not start with an ASCII letter land in this
/// group. Its key sorts before the lettered groups, so the catch-all always
/// renders first.
pub(in crate::tui_shell) const CATCH_ALL_GROUP: &str = "#";

pub(in crate::tui_shell) fn filter_workflows(
    workflows: &[Workflow],
    filter: WorkflowFilter,
) -> Vec<&Workflow> {
    workflows.iter().filter(|w| filter.matches(w)).collect()
}

pub(in crate::tui_shell) fn visible_ids(
    workflows: &[Workflow],
    filter: WorkflowFilter,
) -> Vec<String> {
    filter_workflows(workflows, filter)
        .into_iter()
        .map(|w| w.id.clone())
        .collect()
}

pub(in crate::tui_shell) fn group_key(name: &str) -> String {
    let Some(first) = name.chars().next() else {
        return CATCH_ALL_GROUP.to_string();
    };
    let upper = first.to_uppercase().next().unwrap_or(first);
    if upper.is_ascii_uppercase() {
        upper.to_string()
    } else {
        CATCH_ALL_GROUP.to_string()
    }
}

/// Partition the filtered list into groups keyed by uppercased first letter,
/// sorted ascending by key. Order within a group follows the input order.
pub(in crate::tui_shell) fn group_workflows<'a>(
    filtered: &[&'a Workflow],
) -> Vec<(String, Vec<&'a Workflow>)> {
    let mut groups: Vec<(String, Vec<&'a Workflow>)> = Vec::new();
    for w in filtered {
        let key = group_key(&w.name);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(w),
            None => groups.push((key, vec![w])),
        }
    }
    groups.sort_by(|(a, _), (b, _)| a.cmp(b));
    groups
}
