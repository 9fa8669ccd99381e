use super::*;

impl App {
    pub(in crate::tui_shell) fn load() -> Self {
        let mut app = App::default();

        match ConfigStore::open_default() {
            Ok(store) => {
                match store.read_config() {
                    Ok(cfg) => app.base_url = cfg.backend.map(|b| b.base_url),
                    Err(err) => app.store_err = Some(format!("read config: {:#}", err)),
                }
                match store.read_state() {
                    Ok(state) => app.session = AuthSession::from_state(&state),
                    Err(err) => app.store_err = Some(format!("read state: {:#}", err)),
                }
                app.store = Some(store);
            }
            Err(err) => {
                app.store_err = Some(format!("{:#}", err));
            }
        }

        if let Some(err) = app.store_err.clone() {
            app.push_error(err);
        }

        app.push_output(vec![
            "Type `help` for commands.".to_string(),
            "(Use `Esc` to go back; use `/` to show available commands.)".to_string(),
        ]);

        // The stored-session check above has completed by now; only an
        // unauthenticated session gets pushed into the login flow.
        if app.session.is_authenticated() && app.base_url.is_some() {
            app.bootstrap_session_data();
            app.open_instances_view();
        } else {
            app.start_login_wizard();
        }

        app
    }

    /// Fetch the once-per-session data: license descriptor and backend
    /// version. A failed license fetch leaves the session in degraded
    /// (non-premium) mode; that is logged, not fatal.
    pub(in crate::tui_shell) fn bootstrap_session_data(&mut self) {
        let Some(client) = self.remote_client() else {
            return;
        };

        match client.license() {
            Ok(info) => {
                self.license = LicenseState::resolved(info);
                self.license_note = None;
            }
            Err(err) => {
                self.license = LicenseState::unresolved();
                self.license_note = Some("license unavailable (non-premium mode)".to_string());
                self.push_error(format!("fetch license: {:#}", err));
            }
        }

        match client.server_version() {
            Ok(v) => self.server_version = Some(v.version),
            Err(_) => self.server_version = None,
        }
    }

    /// Client for authenticated endpoints; errors into the log when there is
    /// no usable session.
    pub(in crate::tui_shell) fn remote_client(&mut self) -> Option<RemoteClient> {
        let Some(base_url) = self.base_url.clone() else {
            self.push_error("no backend configured (run `login`)".to_string());
            return None;
        };
        let Some(token) = self.session.token().map(str::to_string) else {
            self.push_error("not logged in (run `login`)".to_string());
            return None;
        };

        match RemoteClient::new(base_url, Some(token)) {
            Ok(c) => Some(c),
            Err(err) => {
                self.push_error(format!("build client: {:#}", err));
                None
            }
        }
    }

    /// Client for the auth endpoints (login, password reset), which work
    /// without a session.
    pub(in crate::tui_shell) fn client_unauthed(&mut self) -> Option<RemoteClient> {
        let Some(base_url) = self.base_url.clone() else {
            self.push_error("no backend configured (run `login`)".to_string());
            return None;
        };
        match RemoteClient::new(base_url, None) {
            Ok(c) => Some(c),
            Err(err) => {
                self.push_error(format!("build client: {:#}", err));
                None
            }
        }
    }
}
