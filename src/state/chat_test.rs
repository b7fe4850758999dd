use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty_messages() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn chat_state_default_not_loading() {
    let state = ChatState::default();
    assert!(!state.loading);
}

#[test]
fn chat_state_default_no_session() {
    let state = ChatState::default();
    assert!(state.session_id.is_empty());
}

// =============================================================
// Send guard
// =============================================================

fn ready_state() -> ChatState {
    ChatState {
        session_id: PERSISTENT_SESSION_ID.to_owned(),
        messages: Vec::new(),
        loading: false,
    }
}

#[test]
fn can_send_with_session_and_text() {
    assert!(ready_state().can_send("hello"));
}

#[test]
fn can_send_trims_surrounding_whitespace() {
    assert!(ready_state().can_send("  hello  "));
}

#[test]
fn cannot_send_blank_input() {
    assert!(!ready_state().can_send(""));
    assert!(!ready_state().can_send("   "));
    assert!(!ready_state().can_send("\n\t"));
}

#[test]
fn cannot_send_without_session() {
    let state = ChatState::default();
    assert!(!state.can_send("hello"));
}

#[test]
fn cannot_send_while_loading() {
    let mut state = ready_state();
    state.loading = true;
    assert!(!state.can_send("hello"));
}

// =============================================================
// Message constructors & ordering
// =============================================================

#[test]
fn user_message_has_user_sender() {
    let msg = ChatMessage::user("hi", "1", "2024-01-01T00:00:00Z");
    assert_eq!(msg.sender, Sender::User);
    assert_eq!(msg.text, "hi");
    assert_eq!(msg.id, "1");
    assert_eq!(msg.timestamp, "2024-01-01T00:00:00Z");
}

#[test]
fn ai_message_has_ai_sender() {
    let msg = ChatMessage::ai("hello", "2", "2024-01-01T00:00:01Z");
    assert_eq!(msg.sender, Sender::Ai);
    assert_eq!(msg.text, "hello");
}

#[test]
fn messages_keep_insertion_order() {
    let mut state = ready_state();
    state.messages.push(ChatMessage::user("first", "1", ""));
    state.messages.push(ChatMessage::ai("second", "2", ""));
    state.messages.push(ChatMessage::user("third", "3", ""));

    let texts: Vec<&str> = state.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn send_cycle_appends_user_then_reply_and_releases_loading() {
    // State-level walk of one send cycle: optimistic append, loading on,
    // reply append, loading off.
    let mut state = ready_state();

    assert!(state.can_send("hello"));
    state.messages.push(ChatMessage::user("hello", "100", ""));
    state.loading = true;
    assert!(!state.can_send("again"));

    state.messages.push(ChatMessage::ai("hi there", "srv-1", ""));
    state.loading = false;

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].sender, Sender::User);
    assert_eq!(state.messages[1].sender, Sender::Ai);
    assert!(state.can_send("again"));
}

// =============================================================
// Sender wire mapping
// =============================================================

#[test]
fn sender_from_wire_user() {
    assert_eq!(Sender::from_wire("user"), Sender::User);
}

#[test]
fn sender_from_wire_defaults_to_ai() {
    assert_eq!(Sender::from_wire("ai"), Sender::Ai);
    assert_eq!(Sender::from_wire("assistant"), Sender::Ai);
    assert_eq!(Sender::from_wire(""), Sender::Ai);
}

// =============================================================
// ChatConfig
// =============================================================

#[test]
fn chat_config_default_uses_persistent_session() {
    let config = ChatConfig::default();
    assert_eq!(config.session_id, "persistent-chat-session");
}
