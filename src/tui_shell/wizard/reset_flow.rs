use super::super::TextInputAction;
use super::types::{ForgotWizard, ResetWizard};
use super::validate::validate_reset_password;

impl super::super::App {
    pub(in crate::tui_shell) fn start_forgot_wizard(&mut self) {
        if self.base_url.is_none() {
            self.push_error("no backend configured (run `login` once to set the url)".to_string());
            return;
        }

        self.forgot_wizard = Some(ForgotWizard::default());
        self.open_text_input_modal(
            "Password Reset",
            "email> ",
            TextInputAction::ForgotEmail,
            None,
            vec!["Account email address; a reset link will be mailed to it.".to_string()],
        );
    }

    pub(in crate::tui_shell) fn continue_forgot_wizard(&mut self, value: String) {
        if self.forgot_wizard.take().is_none() {
            self.push_error("password-reset wizard not active".to_string());
            return;
        }

        let email = value.trim().to_string();
        if email.is_empty() {
            self.push_error("password reset: missing email".to_string());
            return;
        }

        let Some(client) = self.client_unauthed() else {
            return;
        };
        match client.request_password_reset(&email) {
            Ok(()) => {
                // Deliberately vague; the backend does not reveal whether the
                // address exists.
                self.push_output(vec![
                    "If the address is known, a reset email is on its way.".to_string(),
                    "Continue with `reset <token>` once it arrives.".to_string(),
                ]);
            }
            Err(err) => self.push_error(format!("password reset: {:#}", err)),
        }
    }

    /// Entry point for `reset [token]`. A missing/empty token short-circuits
    /// to the invalid state without asking the backend anything.
    pub(in crate::tui_shell) fn start_reset_wizard(&mut self, token: Option<String>) {
        if self.base_url.is_none() {
            self.push_error("no backend configured (run `login` once to set the url)".to_string());
            return;
        }

        match token {
            Some(token) => self.begin_reset_with_token(token),
            None => {
                self.reset_wizard = Some(ResetWizard::default());
                self.open_text_input_modal(
                    "Password Reset",
                    "token> ",
                    TextInputAction::ResetToken,
                    None,
                    vec!["Token from the reset email.".to_string()],
                );
            }
        }
    }

    fn begin_reset_with_token(&mut self, token: String) {
        let token = token.trim().to_string();
        if token.is_empty() {
            self.reset_wizard = None;
            self.push_error(
                "reset link is invalid or expired (request a new one with `forgot`)".to_string(),
            );
            return;
        }

        let Some(client) = self.client_unauthed() else {
            self.reset_wizard = None;
            return;
        };
        match client.validate_reset_token(&token) {
            Ok(true) => {
                self.reset_wizard = Some(ResetWizard {
                    token: Some(token),
                    password: None,
                });
                self.open_secret_input_modal(
                    "Password Reset",
                    "new password> ",
                    TextInputAction::ResetPassword,
                    vec![format!(
                        "At least {} characters (input is hidden).",
                        super::validate::MIN_PASSWORD_LEN
                    )],
                );
            }
            Ok(false) => {
                self.reset_wizard = None;
                self.push_error(
                    "reset link is invalid or expired (request a new one with `forgot`)"
                        .to_string(),
                );
            }
            Err(err) => {
                self.reset_wizard = None;
                self.push_error(format!("validate reset token: {:#}", err));
            }
        }
    }

    pub(in crate::tui_shell) fn continue_reset_wizard(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        if self.reset_wizard.is_none() {
            self.push_error("password-reset wizard not active".to_string());
            return;
        }

        match action {
            TextInputAction::ResetToken => self.begin_reset_with_token(value),

            TextInputAction::ResetPassword => {
                if let Some(w) = self.reset_wizard.as_mut() {
                    w.password = Some(value);
                }
                self.open_secret_input_modal(
                    "Password Reset",
                    "confirm password> ",
                    TextInputAction::ResetConfirm,
                    vec!["Repeat the new password.".to_string()],
                );
            }

            TextInputAction::ResetConfirm => {
                let (token, password) = match self.reset_wizard.as_ref() {
                    Some(w) => (
                        w.token.clone().unwrap_or_default(),
                        w.password.clone().unwrap_or_default(),
                    ),
                    None => {
                        self.push_error("password-reset wizard not active".to_string());
                        return;
                    }
                };

                // Client-side rules gate the request entirely.
                if let Err(err) = validate_reset_password(&password, &value) {
                    self.reset_wizard = None;
                    self.push_error(format!("password reset: {}", err));
                    return;
                }

                self.reset_wizard = None;
                let Some(client) = self.client_unauthed() else {
                    return;
                };
                match client.reset_password(&token, &password) {
                    Ok(()) => self.push_output(vec![
                        "password reset".to_string(),
                        "Log in with the new password.".to_string(),
                    ]),
                    Err(err) => self.push_error(format!("password reset: {:#}", err)),
                }
            }

            _ => {
                self.push_error("unexpected password-reset wizard input".to_string());
            }
        }
    }
}
