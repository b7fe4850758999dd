//! Dark mode detection and toggle.
//!
//! The widget treats theme as an injected read-only capability: it only
//! reads `UiState::dark_mode`. The host page owns detection and toggling.
//! Preference is read from the system (`prefers-color-scheme`) and applied
//! as a `.dark-mode` class on the `<html>` element; the choice is not
//! persisted anywhere. Requires a browser environment.

/// Read the system dark mode preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark-mode");
                } else {
                    let _ = class_list.remove_1("dark-mode");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, returning the new state.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}
