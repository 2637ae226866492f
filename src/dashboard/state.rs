use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::logger::Logger;
use crate::session::SessionStore;

/// Shared state behind every dashboard request.
pub struct DashboardState {
    pub config: AppConfig,
    /// Reused for every probe.
    pub client: reqwest::Client,
    pub sessions: RwLock<SessionStore>,
    pub logger: Option<Logger>,
}

impl DashboardState {
    pub fn new(config: AppConfig, logger: Option<Logger>) -> Self {
        let sessions = RwLock::new(SessionStore::new(config.session_ttl()));
        Self {
            config,
            client: reqwest::Client::new(),
            sessions,
            logger,
        }
    }

    /// Run `f` against the log file if one is open. Write failures are dropped.
    pub fn log(&self, f: impl FnOnce(&Logger) -> anyhow::Result<()>) {
        if let Some(logger) = &self.logger {
            let _ = f(logger);
        }
    }
}
