use std::collections::HashMap;

use anyhow::Context;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Fetch records from the remote user directory.
    Upstream,
    /// Serve the built-in seed data, no upstream needed.
    Fixture,
}

impl DataSource {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "upstream" => Some(Self::Upstream),
            "fixture" => Some(Self::Fixture),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_bind: String,
    pub upstream_base_url: String,
    pub upstream_timeout_secs: u64,
    pub data_source: DataSource,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            upstream_base_url: "https://jsonplaceholder.typicode.com".into(),
            upstream_timeout_secs: 10,
            data_source: DataSource::Upstream,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = std::fs::read_to_string("server.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply(&mut settings, |key| file_cfg.get(key).cloned());
        }
    }

    apply(&mut settings, |key| {
        std::env::var(format!("APP__{}", key.to_ascii_uppercase())).ok()
    });

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("UPSTREAM_BASE_URL") {
        settings.upstream_base_url = v;
    }

    settings
}

fn apply(settings: &mut Settings, get: impl Fn(&str) -> Option<String>) {
    if let Some(v) = get("bind_addr") {
        settings.server_bind = v;
    }
    if let Some(v) = get("upstream_base_url") {
        settings.upstream_base_url = v;
    }
    if let Some(v) = get("upstream_timeout_secs") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.upstream_timeout_secs = parsed;
        }
    }
    if let Some(v) = get("data_source") {
        if let Some(parsed) = DataSource::parse(&v) {
            settings.data_source = parsed;
        }
    }
}

/// Validate the upstream base URL and strip any trailing slash so request
/// paths can be appended directly.
pub fn prepare_upstream_base_url(raw: &str) -> anyhow::Result<String> {
    let url = Url::parse(raw.trim()).with_context(|| format!("invalid upstream base url '{raw}'"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("upstream base url '{raw}' must be http or https");
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
