use super::*;

pub(super) fn with_retries<T>(label: &str, mut f: impl FnMut() -> Result<T>) -> Result<T> {
    const ATTEMPTS: usize = 3;
    let mut last: Option<anyhow::Error> = None;
    for i in 0..ATTEMPTS {
        match f() {
            Ok(v) => return Ok(v),
            Err(err) => {
                last = Some(err);
                if i + 1 < ATTEMPTS {
                    std::thread::sleep(std::time::Duration::from_millis(200 * (1 << i)));
                }
            }
        }
    }
    Err(last
        .unwrap_or_else(|| anyhow::anyhow!("unknown error"))
        .context(label.to_string()))
}

impl RemoteClient {
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> reqwest::blocking::RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(token) = &self.token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        req
    }

    pub(super) fn get(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.request(reqwest::Method::GET, path)
    }

    pub(super) fn post(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.request(reqwest::Method::POST, path)
    }

    pub(super) fn put(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.request(reqwest::Method::PUT, path)
    }

    pub(super) fn send(
        &self,
        req: reqwest::blocking::RequestBuilder,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        req.send()
            .with_context(|| format!("network error (try again later): {}", label))
    }

    /// Turn a non-2xx response into an error. The backend's response body is
    /// surfaced verbatim where it has one; 401 gets a re-login hint instead.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!("unauthorized (session invalid/expired; run `flowdeck login`)");
        }
        if status.is_client_error() || status.is_server_error() {
            let body = resp.text().unwrap_or_default();
            anyhow::bail!("{}", backend_error_message(status, &body, label));
        }
        Ok(resp)
    }
}

fn backend_error_message(status: reqwest::StatusCode, body: &str, label: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("{} failed ({})", label, status);
    }

    // Error bodies are either plain text or {"error": "..."} / {"message": "..."}.
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(msg) = v.get(key).and_then(|m| m.as_str()) {
                return msg.to_string();
            }
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::backend_error_message;

    #[test]
    fn json_error_bodies_surface_their_message() {
        let status = reqwest::StatusCode::CONFLICT;
        assert_eq!(
            backend_error_message(status, r#"{"error":"instance limit reached"}"#, "create"),
            "instance limit reached"
        );
        assert_eq!(
            backend_error_message(status, r#"{"message":"name already in use"}"#, "create"),
            "name already in use"
        );
    }

    #[test]
    fn plain_text_bodies_are_surfaced_verbatim() {
        let status = reqwest::StatusCode::BAD_REQUEST;
        assert_eq!(
            backend_error_message(status, "base url is not reachable", "create"),
            "base url is not reachable"
        );
    }

    #[test]
    fn empty_bodies_fall_back_to_a_generic_message() {
        let status = reqwest::StatusCode::INTERNAL_SERVER_ERROR;
        let msg = backend_error_message(status, "  ", "update instance");
        assert!(msg.contains("update instance failed"));
        assert!(msg.contains("500"));
    }
}
