//! User-facing messages.
//!
//! [`Message`] enumerates the text, `display` renders it and `macros`
//! routes it either to the terminal or, in debug mode, to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
