//! Network layer for the chat backend.
//!
//! The backend is an external collaborator reached through two REST
//! endpoints; everything here degrades to empty/fallback values on failure
//! so the widget never surfaces a blocking error state.

pub mod api;
