//! Floating chat widget: launcher button, chat window, and send flow.

use leptos::prelude::*;

use crate::state::chat::{ChatConfig, ChatMessage, ChatState, Sender};
use crate::state::ui::UiState;
use crate::util::clock;

/// Floating chat widget bound to the persistent backend session.
///
/// Closed state renders a single launcher button; open state renders the
/// chat window (header, scrollable history, input row). Chat history loads
/// once on mount; sends are optimistic and guarded by the loading flag.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<ChatConfig>();

    let input = RwSignal::new(String::new());
    let history_requested = RwSignal::new(false);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Establish the session and load history, exactly once. The session id
    // is set before the fetch so the input unlocks even if the fetch fails.
    let session_id = config.session_id;
    Effect::new(move || {
        if history_requested.get() {
            return;
        }
        history_requested.set(true);

        let sid = session_id.clone();
        chat.update(|c| c.session_id = sid.clone());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let history = crate::net::api::fetch_history(&sid).await;
            // try_update: a response landing after teardown is ignored.
            let _ = chat.try_update(|c| c.messages = history);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = sid;
    });

    // Keep the newest message (or the typing indicator) in view.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let state = chat.get();
        if !state.can_send(&text) {
            return;
        }

        let text = text.trim().to_owned();
        input.set(String::new());

        // Optimistic append; never rolled back, even if the send fails.
        let now = clock::now_millis();
        chat.update(|c| {
            c.messages
                .push(ChatMessage::user(text.clone(), now.to_string(), clock::now_iso()));
        });

        #[cfg(feature = "hydrate")]
        {
            chat.update(|c| c.loading = true);
            let sid = state.session_id.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::send_message(&sid, &text).await;
                let fallback_id = clock::now_millis().to_string();
                let timestamp = clock::now_iso();
                let reply = match result {
                    Ok(reply) => crate::net::api::reply_message(reply, fallback_id, timestamp),
                    Err(e) => {
                        leptos::logging::warn!("chat send failed: {e}");
                        crate::net::api::failure_message(fallback_id, timestamp)
                    }
                };
                let _ = chat.try_update(|c| {
                    c.messages.push(reply);
                    c.loading = false;
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (state, text);
        }
    };

    let on_send_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let input_disabled = move || {
        let state = chat.get();
        state.loading || state.session_id.is_empty()
    };

    let send_disabled = move || !chat.get().can_send(&input.get());

    view! {
        <Show when=move || !ui.get().widget_open>
            <button
                class="chat-widget__launcher"
                on:click=move |_| ui.update(|u| u.widget_open = true)
                title="Open chat"
                aria-label="Open chat"
            >
                <svg viewBox="0 0 20 20" aria-hidden="true">
                    <rect x="3" y="3" width="14" height="10" />
                    <path d="M7 13 L7 17 L11 13" />
                </svg>
            </button>
        </Show>

        <Show when=move || ui.get().widget_open>
            <div class="chat-widget">
                <div class="chat-widget__header">
                    <span class="chat-widget__title">"Chat Assistant"</span>
                    <button
                        class="chat-widget__close"
                        on:click=move |_| ui.update(|u| u.widget_open = false)
                        aria-label="Close chat"
                    >
                        "✕"
                    </button>
                </div>

                <div class="chat-widget__messages" node_ref=messages_ref>
                    {move || {
                        let messages = chat.get().messages;
                        if messages.is_empty() {
                            return view! {
                                <div class="chat-widget__empty">
                                    <p>"Start a conversation!"</p>
                                    <p>"Ask me anything."</p>
                                </div>
                            }
                                .into_any();
                        }

                        messages
                            .iter()
                            .map(|msg| {
                                let is_user = msg.sender == Sender::User;
                                let text = msg.text.clone();
                                view! {
                                    <div
                                        class="chat-widget__message"
                                        class:chat-widget__message--user=is_user
                                    >
                                        <div class="chat-widget__bubble">{text}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                    {move || {
                        chat.get()
                            .loading
                            .then(|| {
                                view! {
                                    <div class="chat-widget__typing">
                                        <span class="chat-widget__dot"></span>
                                        <span class="chat-widget__dot chat-widget__dot--two"></span>
                                        <span class="chat-widget__dot chat-widget__dot--three"></span>
                                    </div>
                                }
                            })
                    }}
                </div>

                <div class="chat-widget__input-row">
                    <input
                        class="chat-widget__input"
                        type="text"
                        placeholder="Type your message..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        disabled=input_disabled
                    />
                    <button
                        class="btn btn--primary chat-widget__send"
                        on:click=on_send_click
                        disabled=send_disabled
                    >
                        "Send"
                    </button>
                </div>
            </div>
        </Show>
    }
}
