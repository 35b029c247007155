//! Interactive session module
//!
//! This module provides the lookup state machine and its sub-components.
//!
//! # Components
//!
//! - `SessionState`: The four screens of the session
//! - `SessionController`: Consumes keys and completions, emits commands
//! - `TextInput` / `Viewport`: Family name input and profile scrolling
//! - `run_command`: Executes a command and produces its completion

mod controller;
mod dispatch;
mod input;
mod message;
mod state;
mod viewport;

// Re-export main types
pub use controller::SessionController;
pub use dispatch::run_command;
pub use input::{TextInput, FAMILY_NAME_LIMIT};
pub use message::{Command, Completion, Envelope, Key};
pub use state::SessionState;
pub use viewport::Viewport;
