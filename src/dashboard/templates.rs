use askama::Template;

use crate::bank::{QuickLink, Transaction, ACCOUNT_BALANCE, AVAILABLE_SERVICES, RECENT_TRANSACTIONS};
use crate::config::AppConfig;
use crate::session::ChatMessage;
use crate::utils::html_escape;

// ── Askama Templates ─────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub icon: &'a str,
    pub shareable_url: &'a str,
    pub chat_height: u32,
    pub widget_height: u32,
    pub primary_color: &'a str,
    pub secondary_color: &'a str,
    pub text_color: &'a str,
    pub background_color: &'a str,
    pub show_powered_by: bool,
    pub transcript_enabled: bool,
    pub connected: bool,
    pub user_id: &'a str,
    pub messages: &'a [ChatMessage],
    pub notice: Option<&'a str>,
    pub services: &'a [&'a str],
    pub balance: &'a str,
    pub transactions: &'a [Transaction],
    pub quick_links: &'a [QuickLink],
}

#[derive(Template)]
#[template(path = "partials/status.html")]
pub struct StatusTemplate {
    pub connected: bool,
}

/// Per-request data for the main page.
pub struct PageView<'a> {
    pub connected: bool,
    /// Already truncated for display.
    pub user_id: &'a str,
    pub messages: &'a [ChatMessage],
    pub notice: Option<&'a str>,
}

// ── Render helpers (called from routes.rs) ───────────────────────────

pub fn render_index(config: &AppConfig, page: &PageView<'_>) -> axum::response::Html<String> {
    let template = IndexTemplate {
        title: &config.app_title,
        icon: &config.app_icon,
        shareable_url: &config.shareable_url,
        chat_height: config.chat_height,
        widget_height: config.widget_height,
        primary_color: &config.theme_primary_color,
        secondary_color: &config.theme_secondary_color,
        text_color: &config.theme_text_color,
        background_color: &config.theme_background_color,
        show_powered_by: config.show_powered_by,
        transcript_enabled: config.enable_transcript_download,
        connected: page.connected,
        user_id: page.user_id,
        messages: page.messages,
        notice: page.notice,
        services: &AVAILABLE_SERVICES,
        balance: ACCOUNT_BALANCE,
        transactions: &RECENT_TRANSACTIONS,
        quick_links: &QuickLink::ALL,
    };
    axum::response::Html(template.render().unwrap_or_else(|e| {
        format!("<h1>Template error: {}</h1>", html_escape(&e.to_string()))
    }))
}

pub fn render_status(connected: bool) -> String {
    let template = StatusTemplate { connected };
    template.render().unwrap_or_default()
}
