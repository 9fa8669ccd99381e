use super::*;

impl App {
    /// Route a submitted text-input modal to whichever flow opened it.
    pub(in crate::tui_shell) fn handle_text_input(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::LoginUrl
            | TextInputAction::LoginUsername
            | TextInputAction::LoginPassword => self.continue_login_wizard(action, value),

            TextInputAction::ForgotEmail => self.continue_forgot_wizard(value),

            TextInputAction::ResetToken
            | TextInputAction::ResetPassword
            | TextInputAction::ResetConfirm => self.continue_reset_wizard(action, value),

            TextInputAction::AddInstanceName
            | TextInputAction::AddInstanceUrl
            | TextInputAction::AddInstanceApiKey => {
                self.continue_add_instance_wizard(action, value)
            }

            TextInputAction::EditInstanceName
            | TextInputAction::EditInstanceUrl
            | TextInputAction::EditInstanceApiKey => {
                self.continue_edit_instance_wizard(action, value)
            }

            TextInputAction::AlertsEmail => {
                if let Some(v) = self.current_view_mut::<AlertsView>() {
                    v.form.email = value.trim().to_string();
                }
            }

            TextInputAction::BackupsFolder => {
                if let Some(v) = self.current_view_mut::<BackupsView>()
                    && let Some(form) = v.form.as_mut()
                {
                    form.folder_id = value.trim().to_string();
                }
            }

            TextInputAction::ImportPath => {
                let path = value.trim().to_string();
                if path.is_empty() {
                    self.push_error("import: missing file path".to_string());
                    return;
                }
                self.import_workflow_file(path);
            }
        }
    }
}
