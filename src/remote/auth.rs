use super::*;

impl RemoteClient {
    pub fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let req = self
            .post("/auth/login")
            .json(&LoginRequest { username, password });
        let resp = self.send(req, "login")?;

        // A 401 here is a credentials problem, not a stale session; surface
        // the backend's message rather than the re-login hint.
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            let body = resp.text().unwrap_or_default();
            let body = body.trim();
            if body.is_empty() {
                anyhow::bail!("invalid credentials");
            }
            anyhow::bail!("{}", body);
        }

        let out: LoginResponse = self
            .ensure_ok(resp, "login")?
            .json()
            .context("parse login response")?;
        Ok(out)
    }

    /// Always succeeds from the caller's perspective unless the request
    /// itself fails; the backend does not reveal whether the address exists.
    pub fn request_password_reset(&self, email: &str) -> Result<()> {
        let req = self
            .post("/auth/request-password-reset")
            .json(&RequestPasswordResetRequest { email });
        let resp = self.send(req, "request password reset")?;
        self.ensure_ok(resp, "request password reset")?;
        Ok(())
    }

    /// `Ok(false)` means the backend rejected the token (invalid/expired);
    /// only transport problems surface as errors.
    pub fn validate_reset_token(&self, token: &str) -> Result<bool> {
        let req = self
            .get("/auth/validate-reset-token")
            .query(&[("token", token)]);
        let resp = self.send(req, "validate reset token")?;
        Ok(resp.status().is_success())
    }

    pub fn reset_password(&self, token: &str, new_password: &str) -> Result<()> {
        let req = self.post("/auth/reset-password").json(&ResetPasswordRequest {
            token,
            new_password,
        });
        let resp = self.send(req, "reset password")?;
        self.ensure_ok(resp, "reset password")?;
        Ok(())
    }
}
