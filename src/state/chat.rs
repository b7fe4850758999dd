#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Fixed session identifier shared by every widget instance.
///
/// The backend keys chat history on this value, so the conversation
/// survives page reloads. One session per running instance; never rotated.
pub const PERSISTENT_SESSION_ID: &str = "persistent-chat-session";

/// Configuration injected into the widget at construction time.
///
/// Provided as a plain (read-only) Leptos context by the root component so
/// the widget stays free of hardcoded literals and hosts can swap the
/// session id in tests or embeddings.
#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub session_id: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            session_id: PERSISTENT_SESSION_ID.to_owned(),
        }
    }
}

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// Map a wire-format sender string. Anything that isn't the user is
    /// rendered as the assistant.
    pub fn from_wire(s: &str) -> Self {
        if s == "user" { Self::User } else { Self::Ai }
    }
}

/// A single chat message.
///
/// Display order is insertion order; ids are opaque and never used for
/// deduplication. Timestamps are ISO-8601 strings from the local clock (or
/// the backend, for history entries).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: String,
}

impl ChatMessage {
    /// Build a user message. Id and timestamp come from the caller so this
    /// stays clock-free.
    pub fn user(text: impl Into<String>, id: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender: Sender::User,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Build an assistant message.
    pub fn ai(text: impl Into<String>, id: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender: Sender::Ai,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// State for the chat widget conversation.
///
/// `session_id` is set once on mount from [`ChatConfig`]; `messages` is
/// replaced wholesale by the history load and appended to by every send
/// cycle; `loading` is true only while one send request is in flight.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl ChatState {
    /// Send guard: trimmed input non-empty, session established, and no
    /// send already in flight. A failed guard makes send a no-op.
    pub fn can_send(&self, input: &str) -> bool {
        !input.trim().is_empty() && !self.session_id.is_empty() && !self.loading
    }
}
