//! Root application component with context providers and host page.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::chat_widget::ChatWidget;
use crate::state::chat::{ChatConfig, ChatState};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and the widget configuration, owns
/// theming, and mounts the floating chat widget over a minimal host page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for the widget. The session id is an
    // explicit configuration value, passed in here rather than hardcoded in
    // the component.
    let ui = RwSignal::new(UiState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(ui);
    provide_context(chat);
    provide_context(ChatConfig::default());

    // Pick up the system color-scheme preference on mount.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    let toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-widget.css"/>
        <Title text="Chat Assistant"/>

        <main class="host-page">
            <header class="host-page__header">
                <h1>"Chat Assistant"</h1>
                <button class="btn host-page__theme" on:click=toggle_dark>
                    {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
                </button>
            </header>
            <p class="host-page__hint">
                "Open the chat bubble in the corner to start a conversation."
            </p>
        </main>

        <ChatWidget/>
    }
}
