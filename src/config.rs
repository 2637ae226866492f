use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration, loaded from `ebank.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Botpress Cloud shareable webchat page, embedded as an iframe.
    pub shareable_url: String,
    /// Webchat config JSON; also the health-check target.
    pub config_url: String,
    pub cloud_base: String,
    /// Botpress API base. Not called; the iframe handles all chat traffic.
    pub api_url: String,
    pub app_title: String,
    pub app_icon: String,
    pub chat_height: u32,
    pub widget_height: u32,
    pub enable_transcript_download: bool,
    pub show_powered_by: bool,
    pub theme_primary_color: String,
    pub theme_secondary_color: String,
    pub theme_text_color: String,
    pub theme_background_color: String,
    pub probe_timeout_secs: u64,
    pub host: String,
    pub port: u16,
    pub session_ttl_secs: u64,
    pub log_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shareable_url: "https://cdn.botpress.cloud/webchat/v3.5/shareable.html?configUrl=https://files.bpcontent.cloud/2025/12/22/16/20251222161552-VB8CIRA4.json".to_string(),
            config_url: "https://files.bpcontent.cloud/2025/12/22/16/20251222161552-VB8CIRA4.json".to_string(),
            cloud_base: "https://cdn.botpress.cloud".to_string(),
            api_url: "https://api.botpress.cloud".to_string(),
            app_title: "E-Bank Digital Assistant".to_string(),
            app_icon: "🏦".to_string(),
            chat_height: 600,
            widget_height: 550,
            enable_transcript_download: true,
            show_powered_by: false,
            theme_primary_color: "#1f77b4".to_string(),
            theme_secondary_color: "#ffffff".to_string(),
            theme_text_color: "#333333".to_string(),
            theme_background_color: "#ffffff".to_string(),
            probe_timeout_secs: 3,
            host: "127.0.0.1".to_string(),
            port: 8501,
            session_ttl_secs: 3600,
            log_dir: "logs".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration with the chain: `./ebank.toml` -> `~/ebank.toml` -> defaults.
    pub fn load() -> Self {
        let candidates = Self::config_paths();
        for path in &candidates {
            if let Ok(contents) = fs::read_to_string(path) {
                match toml::from_str::<AppConfig>(&contents) {
                    Ok(cfg) => return cfg,
                    Err(e) => {
                        eprintln!("Warning: failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("ebank.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join("ebank.toml"));
        }
        paths
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
