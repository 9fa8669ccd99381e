use super::super::TextInputAction;
use super::types::LoginWizard;
use super::validate::validate_login_inputs;

impl super::super::App {
    pub(in crate::tui_shell) fn start_login_wizard(&mut self) {
        let default_url = self
            .base_url
            .clone()
            .or_else(|| Some("http://127.0.0.1:9000".to_string()));

        self.login_wizard = Some(LoginWizard {
            url: default_url.clone(),
            username: self.session.username().map(str::to_string),
        });

        self.open_text_input_modal(
            "Login",
            "url> ",
            TextInputAction::LoginUrl,
            default_url,
            vec![
                "Backend base URL (example: https://console.example.com/api)".to_string(),
                "Esc cancels; Enter continues.".to_string(),
            ],
        );
    }

    pub(in crate::tui_shell) fn continue_login_wizard(
        &mut self,
        action: TextInputAction,
        value: String,
    ) {
        if self.login_wizard.is_none() {
            self.push_error("login wizard not active".to_string());
            return;
        }

        match action {
            TextInputAction::LoginUrl => {
                if let Some(w) = self.login_wizard.as_mut() {
                    w.url = Some(value.trim().to_string());
                }
                let initial = self.login_wizard.as_ref().and_then(|w| w.username.clone());
                self.open_text_input_modal(
                    "Login",
                    "username> ",
                    TextInputAction::LoginUsername,
                    initial,
                    vec!["Operator account name".to_string()],
                );
            }

            TextInputAction::LoginUsername => {
                if let Some(w) = self.login_wizard.as_mut() {
                    w.username = Some(value.trim().to_string());
                }
                self.open_secret_input_modal(
                    "Login",
                    "password> ",
                    TextInputAction::LoginPassword,
                    vec!["Password (input is hidden).".to_string()],
                );
            }

            TextInputAction::LoginPassword => {
                let (url, username) = match self.login_wizard.take() {
                    Some(w) => (
                        w.url.unwrap_or_default(),
                        w.username.unwrap_or_default(),
                    ),
                    None => {
                        self.push_error("login wizard not active".to_string());
                        return;
                    }
                };

                if let Err(err) = validate_login_inputs(&url, &username, &value) {
                    self.push_error(err);
                    return;
                }
                self.finish_login(url, username, value);
            }

            _ => {
                self.push_error("unexpected login wizard input".to_string());
            }
        }
    }

    fn finish_login(&mut self, url: String, username: String, password: String) {
        let client = match crate::remote::RemoteClient::new(url.clone(), None) {
            Ok(c) => c,
            Err(err) => {
                self.push_error(format!("login: {:#}", err));
                return;
            }
        };

        let resp = match client.login(&username, &password) {
            Ok(r) => r,
            Err(err) => {
                self.push_error(format!("login: {:#}", err));
                return;
            }
        };

        if let Some(store) = self.store.clone() {
            if let Err(err) = store.set_backend(&url) {
                self.push_error(format!("store backend url: {:#}", err));
                return;
            }
            if let Err(err) = store.set_session(&resp.token, &resp.username) {
                self.push_error(format!("store session: {:#}", err));
                return;
            }
        }

        self.base_url = Some(url);
        self.session.establish(resp.token, resp.username.clone());
        self.cache.clear();

        self.bootstrap_session_data();
        self.push_output(vec![format!("logged in as {}", resp.username)]);
        self.open_instances_view();
    }

    pub(in crate::tui_shell) fn logout(&mut self) {
        if let Some(store) = self.store.clone()
            && let Err(err) = store.clear_session()
        {
            self.push_error(format!("clear session: {:#}", err));
            return;
        }

        self.session.clear();
        self.cache.clear();
        self.license = crate::license::LicenseState::unresolved();
        self.server_version = None;

        // Drop any stacked views; the root list will show logged-out state.
        while self.frames.len() > 1 {
            self.frames.pop();
        }
        if let Some(v) = self.current_view_mut::<super::super::InstancesView>() {
            v.items.clear();
            v.quota_note = None;
            v.locked_note = None;
        }
        self.push_output(vec![
            "logged out".to_string(),
            "Run `login` to start a new session.".to_string(),
        ]);
    }
}
