use anyhow::Result;
use serde::{Deserialize, Serialize};

const IFRAME_NOTE: &str =
    "Using iframe-based chat. Messages are handled directly by the Botpress webchat widget.";
const IFRAME_MESSAGE: &str = "Please use the chat widget above to interact with the bot.";

/// Reply to a message typed into the fallback text input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BotReply {
    Error { error: String },
    Responses { responses: Vec<ResponseItem> },
    Text { text: String },
    Notice { note: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseItem {
    #[serde(default)]
    pub text: String,
}

impl BotReply {
    /// Text shown in the message log for this reply.
    pub fn render(&self) -> String {
        match self {
            Self::Error { error } => format!("⚠️ {}", error),
            Self::Responses { responses } => responses
                .iter()
                .map(|r| r.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Text { text } => text.clone(),
            Self::Notice { .. } => {
                serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("⚠️ {}", e))
            }
        }
    }
}

/// Reply for a text-input message.
///
/// Chat traffic goes through the embedded webchat, so nothing is sent
/// anywhere: every prompt gets the same notice pointing at the widget.
pub fn send_message(_prompt: &str, _user_id: &str) -> Result<BotReply> {
    Ok(BotReply::Notice {
        note: IFRAME_NOTE.to_string(),
        message: IFRAME_MESSAGE.to_string(),
    })
}

/// Dispatch `prompt` and turn the outcome into log text. Failures become a
/// warning line instead of propagating.
pub fn reply_text(prompt: &str, user_id: &str) -> String {
    match send_message(prompt, user_id) {
        Ok(reply) => reply.render(),
        Err(e) => BotReply::Error {
            error: e.to_string(),
        }
        .render(),
    }
}
