/// Minimum accepted password length for the reset flow.
pub(in crate::tui_shell) const MIN_PASSWORD_LEN: usize = 6;

pub(in crate::tui_shell) fn validate_login_inputs(
    url: &str,
    username: &str,
    password: &str,
) -> Result<(), String> {
    if url.trim().is_empty() {
        return Err("login: missing backend url".to_string());
    }
    if !is_http_url(url) {
        return Err("login: url must start with http:// or https://".to_string());
    }
    if username.trim().is_empty() {
        return Err("login: missing username".to_string());
    }
    if password.is_empty() {
        return Err("login: missing password".to_string());
    }
    Ok(())
}

pub(in crate::tui_shell) fn validate_instance_inputs(
    name: &str,
    base_url: &str,
    api_key: Option<&str>,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("name is required".to_string());
    }
    if base_url.trim().is_empty() {
        return Err("base url is required".to_string());
    }
    if !is_http_url(base_url) {
        return Err("base url must start with http:// or https://".to_string());
    }
    if let Some(key) = api_key
        && key.is_empty()
    {
        return Err("API key is required".to_string());
    }
    Ok(())
}

/// Client-side reset rules; nothing is sent to the backend until these pass.
pub(in crate::tui_shell) fn validate_reset_password(
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if password != confirm {
        return Err("passwords do not match".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "password must be at least {} characters long",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_are_rejected_before_length() {
        let err = validate_reset_password("secret1", "secret2").unwrap_err();
        assert_eq!(err, "passwords do not match");
    }

    #[test]
    fn short_passwords_are_rejected() {
        let err = validate_reset_password("abc", "abc").unwrap_err();
        assert!(err.contains("at least 6"));
        // Exactly six characters passes.
        assert!(validate_reset_password("abcdef", "abcdef").is_ok());
    }

    #[test]
    fn instance_inputs_require_all_mandatory_fields() {
        assert!(validate_instance_inputs("prod", "https://x.example.com", Some("key")).is_ok());
        assert!(validate_instance_inputs("", "https://x.example.com", Some("key")).is_err());
        assert!(validate_instance_inputs("prod", "", Some("key")).is_err());
        assert!(validate_instance_inputs("prod", "ftp://x", Some("key")).is_err());
        assert!(validate_instance_inputs("prod", "https://x.example.com", Some("")).is_err());
        // Edit flow: None means "keep the stored key".
        assert!(validate_instance_inputs("prod", "https://x.example.com", None).is_ok());
    }

    #[test]
    fn login_inputs_require_url_username_password() {
        assert!(validate_login_inputs("http://127.0.0.1:9000", "admin", "pw").is_ok());
        assert!(validate_login_inputs("", "admin", "pw").is_err());
        assert!(validate_login_inputs("127.0.0.1", "admin", "pw").is_err());
        assert!(validate_login_inputs("http://h", "", "pw").is_err());
        assert!(validate_login_inputs("http://h", "admin", "").is_err());
    }
}
