#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the widget chrome: theme and open/closed panel.
///
/// The open flag lives here rather than in [`crate::state::chat::ChatState`]
/// because toggling the panel is independent of the conversation — closing
/// and reopening must leave the message list untouched.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub widget_open: bool,
}
