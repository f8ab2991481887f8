//! UI primitives for the Daybook CLI.
//!
//! - **Context**: Environment detection (TTY, color) and output mode
//! - **Render**: Tables, hints, styled text

mod context;
pub mod render;

pub use context::UiContext;

#[cfg(test)]
pub use context::OutputMode;
