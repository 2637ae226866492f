use anyhow::Result;
use colored::*;
use dotenvy::dotenv;
use std::sync::Arc;

pub mod bank;
pub mod chat;
pub mod config;
pub mod dashboard;
pub mod logger;
pub mod probe;
pub mod session;
pub mod utils;

/// Run the application: load `.env`, load config, open the log file and
/// serve the dashboard.
pub async fn run() -> Result<()> {
    // Load environment variables from .env
    dotenv().ok();

    let config = config::AppConfig::load();

    let logger = match logger::Logger::new(&config.log_dir) {
        Ok(l) => Some(l),
        Err(e) => {
            eprintln!("{} {}", "Warning: logging disabled:".yellow(), e);
            None
        }
    };

    print_banner(&config);

    let state = Arc::new(dashboard::DashboardState::new(config, logger));
    if let Err(e) = dashboard::start_dashboard(state.clone()).await {
        state.log(|l| l.log_error(&e.to_string()));
        return Err(e);
    }

    Ok(())
}

fn print_banner(config: &AppConfig) {
    println!("{}", "====================================".bright_cyan());
    println!("{}", format!("  {} {}", config.app_icon, config.app_title).bright_cyan().bold());
    println!("{}", "====================================".bright_cyan());
    println!(" Dashboard: {}", format!("http://{}", config.bind_addr()).bright_white());
    println!(" Health check: {}\n", config.config_url.dimmed());
}

// Re-exports for library consumers: common useful types
pub use config::AppConfig;
pub use probe::ProbeOutcome;
pub use session::{ChatMessage, Role, Session, SessionStore};
