//! User-facing message catalog.
//!
//! All wording lives in one place: the [`Message`] enum carries the dynamic
//! parts, `display.rs` renders them, and the `msg_*` macros in `macros.rs`
//! route output to the console or to `tracing` depending on debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
