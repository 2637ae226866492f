use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::state::DashboardState;
use super::templates::{self, PageView};
use crate::bank::{QuickLink, Transaction, ACCOUNT_BALANCE, RECENT_TRANSACTIONS};
use crate::chat;
use crate::probe::{self, ProbeOutcome};
use crate::session::{ChatMessage, Session};

pub const SESSION_COOKIE: &str = "ebank_session";

// ── GET / — main dashboard page ──────────────────────────────────────

#[derive(Deserialize)]
pub struct IndexQuery {
    pub panel: Option<String>,
}

pub async fn index(
    State(state): State<Arc<DashboardState>>,
    jar: CookieJar,
    Query(query): Query<IndexQuery>,
) -> impl IntoResponse {
    let (jar, (user_id, messages)) = with_session(&state, jar, |s| {
        (s.display_user_id(), s.messages().to_vec())
    })
    .await;

    let outcome = run_probe(&state).await;
    let notice = query
        .panel
        .as_deref()
        .and_then(QuickLink::from_slug)
        .map(|link| link.notice());

    let page = PageView {
        connected: outcome.is_connected(),
        user_id: &user_id,
        messages: &messages,
        notice,
    };
    (jar, templates::render_index(&state.config, &page))
}

// ── POST /actions/refresh — re-render ────────────────────────────────

pub async fn refresh(State(state): State<Arc<DashboardState>>, jar: CookieJar) -> impl IntoResponse {
    let (jar, ()) = with_session(&state, jar, |_| ()).await;
    (jar, Redirect::to("/"))
}

// ── POST /actions/clear — empty the message log ──────────────────────

pub async fn clear_history(
    State(state): State<Arc<DashboardState>>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (jar, (user_id, removed)) = with_session(&state, jar, |s| {
        let removed = s.messages().len();
        s.clear();
        (s.user_id().to_string(), removed)
    })
    .await;

    state.log(|l| l.log_clear(&user_id, removed));
    (jar, Redirect::to("/"))
}

// ── POST /chat — text-input fallback ─────────────────────────────────

#[derive(Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub prompt: String,
}

pub async fn submit_message(
    State(state): State<Arc<DashboardState>>,
    jar: CookieJar,
    Form(form): Form<ChatForm>,
) -> impl IntoResponse {
    if form.prompt.trim().is_empty() {
        let (jar, ()) = with_session(&state, jar, |_| ()).await;
        return (jar, Redirect::to("/"));
    }

    let prompt = form.prompt;
    let (jar, user_id) = with_session(&state, jar, |s| {
        let reply = chat::reply_text(&prompt, s.user_id());
        s.record_exchange(&prompt, &reply);
        s.user_id().to_string()
    })
    .await;

    state.log(|l| l.log_chat(&user_id, &prompt));
    (jar, Redirect::to("/#messages"))
}

// ── GET /api/status — probe outcome as JSON ──────────────────────────

#[derive(Serialize)]
pub struct StatusResponse {
    pub connected: bool,
    pub target: String,
    pub outcome: ProbeOutcome,
}

pub async fn get_status(State(state): State<Arc<DashboardState>>) -> impl IntoResponse {
    let outcome = run_probe(&state).await;
    Json(StatusResponse {
        connected: outcome.is_connected(),
        target: state.config.config_url.clone(),
        outcome,
    })
}

// ── GET /api/status/html — status partial ────────────────────────────

pub async fn get_status_html(State(state): State<Arc<DashboardState>>) -> impl IntoResponse {
    let outcome = run_probe(&state).await;
    Html(templates::render_status(outcome.is_connected()))
}

// ── GET /api/session — caller's session as JSON ──────────────────────

#[derive(Serialize)]
pub struct SessionResponse {
    pub user_id: String,
    pub messages: Vec<ChatMessage>,
}

pub async fn get_session(
    State(state): State<Arc<DashboardState>>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (jar, body) = with_session(&state, jar, |s| SessionResponse {
        user_id: s.user_id().to_string(),
        messages: s.messages().to_vec(),
    })
    .await;
    (jar, Json(body))
}

// ── GET /api/transactions — static account data ──────────────────────

#[derive(Serialize)]
pub struct AccountResponse {
    pub balance: &'static str,
    pub transactions: Vec<Transaction>,
}

pub async fn get_transactions() -> impl IntoResponse {
    Json(AccountResponse {
        balance: ACCOUNT_BALANCE,
        transactions: RECENT_TRANSACTIONS.to_vec(),
    })
}

// ── GET /api/transcript — download the message log ───────────────────

pub async fn download_transcript(
    State(state): State<Arc<DashboardState>>,
    jar: CookieJar,
) -> Response {
    if !state.config.enable_transcript_download {
        return (StatusCode::NOT_FOUND, "Transcript download is disabled").into_response();
    }

    let (jar, (user_id, text)) =
        with_session(&state, jar, |s| (s.user_id().to_string(), s.transcript())).await;

    let disposition = format!("attachment; filename=\"chat_transcript_{}.txt\"", user_id);
    (
        jar,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        text,
    )
        .into_response()
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Resolve the caller's session from its cookie, creating one if needed,
/// and run `f` on it under the store lock. The returned jar carries the
/// session cookie whenever a new session was created.
async fn with_session<T>(
    state: &DashboardState,
    jar: CookieJar,
    f: impl FnOnce(&mut Session) -> T,
) -> (CookieJar, T) {
    let current = jar.get(SESSION_COOKIE).map(|c| c.value().to_string());

    let (key, created, user_id, out) = {
        let mut store = state.sessions.write().await;
        let (key, created, session) = store.resolve(current.as_deref());
        let user_id = session.user_id().to_string();
        let out = f(session);
        (key, created, user_id, out)
    };

    if !created {
        return (jar, out);
    }

    state.log(|l| l.log_session_created(&user_id));
    let cookie = Cookie::build((SESSION_COOKIE, key))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), out)
}

async fn run_probe(state: &DashboardState) -> ProbeOutcome {
    let url = &state.config.config_url;
    let outcome = probe::probe(&state.client, url, state.config.probe_timeout()).await;
    state.log(|l| l.log_probe(url, &outcome));
    outcome
}
