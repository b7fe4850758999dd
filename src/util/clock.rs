//! Wall-clock helpers for message ids and timestamps.
//!
//! Locally-built messages use the current epoch milliseconds as an opaque
//! id and the local ISO-8601 time as the timestamp, matching what the
//! backend stores. Requires a browser environment; SSR builds get inert
//! values since no messages are constructed server-side.

/// Current time as epoch milliseconds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Current local time as an ISO-8601 string.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
