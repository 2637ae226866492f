use anyhow::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::probe::ProbeOutcome;
use crate::utils::{ensure_dir, find_char_boundary};

/// Append-only log file for one server run.
#[derive(Debug, Clone)]
pub struct Logger {
    log_file: PathBuf,
}

impl Logger {
    pub fn new(log_dir: &str) -> Result<Self> {
        let dir = PathBuf::from(log_dir);
        ensure_dir(&dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_file = dir.join(format!("session_{}.log", timestamp));

        Ok(Self { log_file })
    }

    pub fn path(&self) -> &Path {
        &self.log_file
    }

    pub fn log(&self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(file, "[{}] {}", timestamp, message)?;
        Ok(())
    }

    pub fn log_server_start(&self, addr: &str) -> Result<()> {
        self.log(&format!("SERVER START: listening on http://{}", addr))
    }

    pub fn log_session_created(&self, user_id: &str) -> Result<()> {
        self.log(&format!("SESSION NEW: {}", user_id))
    }

    pub fn log_probe(&self, url: &str, outcome: &ProbeOutcome) -> Result<()> {
        let status = if outcome.is_connected() { "OK" } else { "DOWN" };
        self.log(&format!("PROBE {}: {} ({})", status, url, outcome.label()))
    }

    pub fn log_chat(&self, user_id: &str, prompt: &str) -> Result<()> {
        let preview = if prompt.len() > 200 {
            format!("{}...", &prompt[..find_char_boundary(prompt, 200)])
        } else {
            prompt.to_string()
        };
        self.log(&format!("CHAT {}: {}", user_id, preview))
    }

    pub fn log_clear(&self, user_id: &str, removed: usize) -> Result<()> {
        self.log(&format!("CLEAR {}: {} messages removed", user_id, removed))
    }

    pub fn log_error(&self, error: &str) -> Result<()> {
        self.log(&format!("ERROR: {}", error))
    }
}
