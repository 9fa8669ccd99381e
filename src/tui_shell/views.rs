mod alerts;
mod backups;
mod detail;
mod instances;

pub(in crate::tui_shell) use alerts::{AlertsItemKind, AlertsView};
pub(in crate::tui_shell) use backups::{BackupForm, BackupsItemKind, BackupsView};
pub(in crate::tui_shell) use detail::{
    DetailTab, DetailView, WorkflowFilter, WorkflowRow, workflow_rows,
};
pub(in crate::tui_shell) use instances::InstancesView;
