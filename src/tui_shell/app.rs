use super::*;

mod actions_detail;
mod actions_instances;
mod actions_settings;
mod cmd_dispatch;
mod cmd_text_input;
mod event_loop;
mod lifecycle;
mod output;
mod refresh;
mod render;
mod time_utils;
mod view_nav;

pub(in crate::tui_shell) use event_loop::run_loop;
pub(in crate::tui_shell) use time_utils::{fmt_opt_ts_list, fmt_ts_list, fmt_ts_ui, now_ts};

pub(in crate::tui_shell) struct ViewFrame {
    pub(in crate::tui_shell) view: Box<dyn View>,
}

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) store: Option<ConfigStore>,
    pub(in crate::tui_shell) store_err: Option<String>,

    pub(in crate::tui_shell) base_url: Option<String>,
    pub(in crate::tui_shell) session: AuthSession,
    pub(in crate::tui_shell) license: LicenseState,
    pub(in crate::tui_shell) license_note: Option<String>,
    pub(in crate::tui_shell) server_version: Option<String>,

    pub(in crate::tui_shell) cache: QueryCache,
    pub(in crate::tui_shell) ts_mode: TimestampMode,

    /// Instance id with an export download in flight. One at a time; the
    /// matching list row shows a busy marker while it is set.
    pub(in crate::tui_shell) exporting_instance: Option<String>,

    // Internal log (useful for debugging) but not the primary UI.
    pub(in crate::tui_shell) log: Vec<ScrollEntry>,

    pub(in crate::tui_shell) last_command: Option<String>,
    pub(in crate::tui_shell) last_result: Option<ScrollEntry>,

    pub(in crate::tui_shell) modal: Option<Modal>,

    pub(in crate::tui_shell) login_wizard: Option<LoginWizard>,
    pub(in crate::tui_shell) forgot_wizard: Option<ForgotWizard>,
    pub(in crate::tui_shell) reset_wizard: Option<ResetWizard>,
    pub(in crate::tui_shell) add_wizard: Option<AddInstanceWizard>,
    pub(in crate::tui_shell) edit_wizard: Option<EditInstanceWizard>,

    pub(in crate::tui_shell) input: Input,

    pub(in crate::tui_shell) suggestions: Vec<CommandDef>,
    pub(in crate::tui_shell) suggestion_selected: usize,

    pub(in crate::tui_shell) frames: Vec<ViewFrame>,

    pub(in crate::tui_shell) quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            store: None,
            store_err: None,
            base_url: None,
            session: AuthSession::default(),
            license: LicenseState::unresolved(),
            license_note: None,
            server_version: None,
            cache: QueryCache::default(),
            ts_mode: TimestampMode::Relative,
            exporting_instance: None,
            log: Vec::new(),
            last_command: None,
            last_result: None,
            modal: None,
            login_wizard: None,
            forgot_wizard: None,
            reset_wizard: None,
            add_wizard: None,
            edit_wizard: None,
            input: Input::default(),
            suggestions: Vec::new(),
            suggestion_selected: 0,
            frames: vec![ViewFrame {
                view: Box::new(InstancesView::new(
                    Vec::new(),
                    &LicenseState::unresolved(),
                    time_utils::now_ts(),
                )),
            }],
            quit: false,
        }
    }
}
