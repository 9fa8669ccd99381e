use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::{AppConfig, AppState, BackendConfig};

const STORE_DIR_ENV: &str = "FLOWDECK_CONFIG_DIR";
const STORE_DIR_NAME: &str = ".flowdeck";

/// On-disk configuration for the client: `config.json` carries the backend
/// location, `state.json` carries the session (token + username).
#[derive(Clone)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    /// Resolve the config dir: `$FLOWDECK_CONFIG_DIR` if set, else
    /// `~/.flowdeck`. The directory is created on first use.
    pub fn open_default() -> Result<Self> {
        if let Some(dir) = std::env::var_os(STORE_DIR_ENV) {
            return Self::open(PathBuf::from(dir));
        }

        let home = std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .context("cannot locate home directory (set FLOWDECK_CONFIG_DIR)")?;
        Self::open(PathBuf::from(home).join(STORE_DIR_NAME))
    }

    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("create config dir {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<AppConfig> {
        let path = self.root.join("config.json");
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let mut cfg: AppConfig = serde_json::from_slice(&bytes).context("parse config.json")?;

        // Migration: if an older config contains a token, move it into state.json.
        if let Some(backend) = cfg.backend.as_mut()
            && let Some(token) = backend.token.take()
        {
            let mut st = self.read_state()?;
            st.token = Some(token);
            self.write_state(&st)
                .context("migrate session token to state")?;
            self.write_config(&cfg)
                .context("write config after token migration")?;
        }

        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &AppConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_state(&self) -> Result<AppState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(AppState::default());
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: AppState = serde_json::from_slice(&bytes).context("parse state.json")?;
        Ok(st)
    }

    pub fn write_state(&self, st: &AppState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }

    pub fn set_backend(&self, base_url: &str) -> Result<()> {
        let mut cfg = self.read_config()?;
        cfg.backend = Some(BackendConfig {
            base_url: base_url.to_string(),
            token: None,
        });
        self.write_config(&cfg)
    }

    pub fn base_url(&self) -> Result<Option<String>> {
        Ok(self.read_config()?.backend.map(|b| b.base_url))
    }

    pub fn set_session(&self, token: &str, username: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.token = Some(token.to_string());
        st.username = Some(username.to_string());
        self.write_state(&st)
    }

    pub fn clear_session(&self) -> Result<()> {
        let mut st = self.read_state()?;
        st.token = None;
        st.username = None;
        self.write_state(&st)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}
