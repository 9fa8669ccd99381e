//! Request/response payload types for the backend API. The monitored
//! entities themselves (instances, workflows, events, ...) live in
//! `crate::model`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(super) struct LoginRequest<'a> {
    pub(super) username: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RequestPasswordResetRequest<'a> {
    pub(super) email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ResetPasswordRequest<'a> {
    pub(super) token: &'a str,
    pub(super) new_password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceRequest {
    pub name: String,
    pub base_url: String,
    pub api_key: String,
}

/// Update payload. `api_key: None` means "keep the stored key"; the field is
/// omitted from the body entirely in that case.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstanceRequest {
    pub name: String,
    pub base_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastBackup {
    #[serde(default)]
    pub last_backup_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_without_api_key_omits_the_field() {
        let body = serde_json::to_value(UpdateInstanceRequest {
            name: "prod".to_string(),
            base_url: "https://flows.example.com".to_string(),
            api_key: None,
        })
        .unwrap();
        assert!(body.get("apiKey").is_none());
        assert_eq!(body["baseUrl"], "https://flows.example.com");
    }

    #[test]
    fn update_with_api_key_sends_it() {
        let body = serde_json::to_value(UpdateInstanceRequest {
            name: "prod".to_string(),
            base_url: "https://flows.example.com".to_string(),
            api_key: Some("n8n_api_123".to_string()),
        })
        .unwrap();
        assert_eq!(body["apiKey"], "n8n_api_123");
    }
}
