//! REST API helpers for the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning empty/error values since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Vec`/`Result` outputs instead of panics: a failed history
//! load collapses to an empty list and a failed send collapses to a fixed
//! apology message, both logged only. No retries, no timeouts, no auth.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::chat::{ChatMessage, Sender};

/// Reply text when the send response omits the `response` field.
pub const EMPTY_REPLY_TEXT: &str = "No response received";

/// Synthetic assistant reply appended when a send fails.
pub const SEND_FAILURE_TEXT: &str = "Sorry, I encountered an error. Please try again.";

/// Response body of `POST /api/v1/chat/widget`. Both fields are optional on
/// the wire; callers fall back via [`reply_message`].
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct SendReply {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

/// Fetch the ordered message history for a session from
/// `GET /api/v1/chat/history/{session_id}`.
///
/// Any failure — network error, non-2xx status, non-array or malformed
/// body — degrades to an empty history. Never surfaced to the user.
pub async fn fetch_history(session_id: &str) -> Vec<ChatMessage> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/v1/chat/history/{session_id}");
        let resp = match gloo_net::http::Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("chat history request failed: {e}");
                return Vec::new();
            }
        };

        if !resp.ok() {
            leptos::logging::warn!("chat history request failed: status {}", resp.status());
            return Vec::new();
        }

        let body: serde_json::Value = match resp.json().await {
            Ok(body) => body,
            Err(e) => {
                leptos::logging::warn!("chat history body malformed: {e}");
                return Vec::new();
            }
        };

        parse_history(&body).unwrap_or_else(|| {
            leptos::logging::warn!("chat history body is not an array");
            Vec::new()
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Vec::new()
    }
}

/// Send one user message to `POST /api/v1/chat/widget`.
///
/// # Errors
///
/// Returns an error string on network failure, non-2xx status, or an
/// unparseable response body. Callers map errors to [`failure_message`].
pub async fn send_message(session_id: &str, text: &str) -> Result<SendReply, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct SendRequest<'a> {
            message: &'a str,
            session_id: &'a str,
        }

        let body = SendRequest {
            message: text,
            session_id,
        };
        let resp = gloo_net::http::Request::post("/api/v1/chat/widget")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !resp.ok() {
            return Err(format!("send failed: status {}", resp.status()));
        }

        resp.json::<SendReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session_id, text);
        Err("not available on server".to_owned())
    }
}

/// Parse a history response body. Returns `None` for non-array bodies; on
/// an array, elements that don't carry message text are skipped.
pub fn parse_history(body: &serde_json::Value) -> Option<Vec<ChatMessage>> {
    let items = body.as_array()?;
    Some(items.iter().filter_map(parse_history_message).collect())
}

/// Parse one history element with field fallbacks: `text` is required,
/// everything else defaults (unknown senders render as the assistant).
fn parse_history_message(item: &serde_json::Value) -> Option<ChatMessage> {
    let text = item.get("text").and_then(|v| v.as_str())?.to_owned();

    let id = item
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_owned();

    let sender = item
        .get("sender")
        .and_then(|v| v.as_str())
        .map(Sender::from_wire)
        .unwrap_or(Sender::Ai);

    let timestamp = item
        .get("timestamp")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_owned();

    Some(ChatMessage {
        id,
        sender,
        text,
        timestamp,
    })
}

/// Build the assistant reply for a successful send, falling back to a local
/// id and placeholder text when the server omits fields.
pub fn reply_message(reply: SendReply, fallback_id: String, timestamp: String) -> ChatMessage {
    ChatMessage::ai(
        reply.response.unwrap_or_else(|| EMPTY_REPLY_TEXT.to_owned()),
        reply.message_id.unwrap_or(fallback_id),
        timestamp,
    )
}

/// Build the synthetic apology reply appended when a send fails.
pub fn failure_message(id: String, timestamp: String) -> ChatMessage {
    ChatMessage::ai(SEND_FAILURE_TEXT, id, timestamp)
}
