#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct LoginWizard {
    pub(in crate::tui_shell) url: Option<String>,
    pub(in crate::tui_shell) username: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub(in crate::tui_shell) struct ForgotWizard {
    pub(in crate::tui_shell) email: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub(in crate::tui_shell) struct ResetWizard {
    pub(in crate::tui_shell) token: Option<String>,
    pub(in crate::tui_shell) password: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub(in crate::tui_shell) struct AddInstanceWizard {
    pub(in crate::tui_shell) name: Option<String>,
    pub(in crate::tui_shell) base_url: Option<String>,

    /// Set when the previous submission was rejected; shown inline when the
    /// form reopens.
    pub(in crate::tui_shell) error: Option<String>,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct EditInstanceWizard {
    pub(in crate::tui_shell) id: String,
    pub(in crate::tui_shell) name: String,
    pub(in crate::tui_shell) base_url: String,

    pub(in crate::tui_shell) error: Option<String>,
}
