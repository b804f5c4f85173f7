use std::{collections::HashMap, fs, path::PathBuf, time::Duration};

use anyhow::Context;
use gemini_integration::{GeminiConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "chemimix.toml";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_endpoint: String,
    pub gemini_timeout_seconds: Option<u64>,
    /// Extra `[[reaction]]` entries merged over the built-in table.
    pub reaction_table_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.into(),
            gemini_endpoint: DEFAULT_ENDPOINT.into(),
            gemini_timeout_seconds: None,
            reaction_table_path: None,
        }
    }
}

impl Settings {
    /// `None` when no API key is configured; the server then answers only
    /// from the reaction table.
    pub fn gemini_config(&self) -> anyhow::Result<Option<GeminiConfig>> {
        let Some(api_key) = self
            .gemini_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        else {
            return Ok(None);
        };

        let mut config = GeminiConfig::new(api_key)?.with_endpoint(&self.gemini_endpoint)?;
        config.model = self.gemini_model.clone();
        config.request_timeout = self.gemini_timeout_seconds.map(Duration::from_secs);
        Ok(Some(config))
    }

    pub fn read_reaction_table(&self) -> anyhow::Result<Option<String>> {
        let Some(path) = &self.reaction_table_path else {
            return Ok(None);
        };
        fs::read_to_string(path)
            .with_context(|| format!("failed to read reaction table {}", path.display()))
            .map(Some)
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();
    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |name| std::env::var(name).ok());
    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("gemini_model") {
        settings.gemini_model = v.clone();
    }
    if let Some(v) = file_cfg.get("gemini_endpoint") {
        settings.gemini_endpoint = v.clone();
    }
    if let Some(v) = file_cfg.get("reaction_table_path") {
        settings.reaction_table_path = Some(PathBuf::from(v));
    }
}

// Later names win, so the APP__ spelling overrides the plain one.
fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    for name in ["SERVER_BIND", "APP__BIND_ADDR"] {
        if let Some(v) = var(name) {
            settings.server_bind = v;
        }
    }
    for name in ["GEMINI_API_KEY", "APP__GEMINI_API_KEY"] {
        if let Some(v) = var(name) {
            settings.gemini_api_key = Some(v);
        }
    }
    if let Some(v) = var("APP__GEMINI_MODEL") {
        settings.gemini_model = v;
    }
    if let Some(v) = var("APP__GEMINI_ENDPOINT") {
        settings.gemini_endpoint = v;
    }
    if let Some(v) = var("APP__REACTION_TABLE_PATH") {
        settings.reaction_table_path = Some(PathBuf::from(v));
    }
    if let Some(v) = var("APP__GEMINI_TIMEOUT_SECONDS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.gemini_timeout_seconds = Some(parsed);
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
