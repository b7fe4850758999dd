//! Browser utility helpers, gated on the `hydrate` feature.

pub mod clock;
pub mod dark_mode;
