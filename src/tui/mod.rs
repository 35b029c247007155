//! Terminal user interface
//!
//! This module contains:
//! - The pure profile renderer and its `Theme`
//! - Screen drawing for each session state
//! - The crossterm event loop that drives a `SessionController`

mod app;
mod keys;
mod render;
mod spinner;
mod theme;
mod view;

pub use app::run;
pub use render::render_profile;
pub use spinner::Spinner;
pub use theme::Theme;
pub use view::draw;
