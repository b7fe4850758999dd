//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `ui`) so individual components can
//! depend on small focused models. Structs hold plain fields; components
//! wrap them in `RwSignal` contexts.

pub mod chat;
pub mod ui;
