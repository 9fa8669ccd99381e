use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub backend: Option<BackendConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            backend: None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,

    // Token is stored in state.json, not config.json.
    // Kept as an optional field for backwards-compatible parsing of older config files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    pub version: u32,

    #[serde(default)]
    pub token: Option<String>,

    #[serde(default)]
    pub username: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            token: None,
            username: None,
        }
    }
}
