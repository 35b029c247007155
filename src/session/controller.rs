//! Session controller - the interactive lookup state machine
//!
//! The controller never performs I/O. Key presses and completions go in,
//! `Command`s come out, and the runtime executes them. A lookup is a chain
//! of two commands (resolve, then fetch) tagged with a generation number so
//! results from an abandoned lookup are recognised and dropped.

use crate::model::Profile;
use crate::session::input::TextInput;
use crate::session::message::{Command, Completion, Envelope, Key};
use crate::session::state::SessionState;
use crate::session::viewport::Viewport;
use crate::tui::{render_profile, Theme};

/// Owns all state of one interactive session
#[derive(Debug)]
pub struct SessionController {
    state: SessionState,
    input: TextInput,
    viewport: Viewport,
    profile: Option<Profile>,
    error_message: String,
    searched: String,
    generation: u64,
    theme: Theme,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl SessionController {
    /// Creates a controller in the `Search` state
    ///
    /// The theme is used to render fetched profiles into the viewport.
    pub fn new(theme: Theme) -> Self {
        Self {
            state: SessionState::Search,
            input: TextInput::default(),
            viewport: Viewport::default(),
            profile: None,
            error_message: String::new(),
            searched: String::new(),
            generation: 0,
            theme,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The displayed profile, only set in `ProfileView`
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Message of the last failure, empty outside `Error`
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Family name of the current or last lookup
    pub fn searched(&self) -> &str {
        &self.searched
    }

    /// Generation of the current or last lookup
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handles a key press
    ///
    /// # Returns
    ///
    /// The command to execute, if the key triggered one
    pub fn handle_key(&mut self, key: Key) -> Option<Command> {
        if self.state.accepts_input() {
            return match key {
                Key::Enter => Some(self.submit()),
                Key::Esc | Key::CtrlC => Some(Command::Quit),
                other => {
                    self.input.handle_key(other);
                    None
                }
            };
        }

        match self.state {
            SessionState::Search | SessionState::Error => None,
            SessionState::Loading => match key {
                Key::CtrlC => Some(Command::Quit),
                _ => None,
            },
            SessionState::ProfileView => match key {
                Key::Backspace | Key::Esc => {
                    self.back_to_search();
                    None
                }
                Key::CtrlC => Some(Command::Quit),
                other => {
                    self.viewport.handle_key(other);
                    None
                }
            },
        }
    }

    /// Handles the result of an asynchronous step
    ///
    /// Envelopes from an older generation, or arriving outside `Loading`,
    /// are discarded.
    pub fn handle_completion(&mut self, envelope: Envelope) -> Option<Command> {
        if !self.state.is_loading() || envelope.generation != self.generation {
            tracing::debug!(
                "Discarding stale completion (generation {}, current {}, state {})",
                envelope.generation,
                self.generation,
                self.state
            );
            return None;
        }

        match envelope.completion {
            Completion::ProfileResolved { url } => {
                tracing::info!("Resolved '{}' to {}", self.searched, url);
                Some(Command::FetchProfile {
                    generation: self.generation,
                    url,
                })
            }
            Completion::ProfileFetched { profile } => {
                tracing::info!("Loaded profile '{}'", profile.family_info.name);
                self.viewport
                    .set_content(render_profile(&profile, &self.theme));
                self.viewport.goto_top();
                self.profile = Some((*profile).clone());
                self.transition(SessionState::ProfileView);
                Some(Command::SaveProfile { profile })
            }
            Completion::Failed { message } => {
                tracing::warn!("Lookup for '{}' failed: {}", self.searched, message);
                self.error_message = message;
                self.transition(SessionState::Error);
                None
            }
        }
    }

    /// Resizes the profile viewport to fit a terminal of the given size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport
            .resize(width.saturating_sub(4), height.saturating_sub(2));
    }

    fn submit(&mut self) -> Command {
        self.error_message.clear();
        self.searched = self.input.value().trim().to_string();
        self.generation += 1;
        self.transition(SessionState::Loading);

        Command::Resolve {
            generation: self.generation,
            family: self.searched.clone(),
        }
    }

    fn back_to_search(&mut self) {
        self.profile = None;
        self.viewport.clear();
        self.input.reset();
        self.transition(SessionState::Search);
    }

    fn transition(&mut self, to: SessionState) {
        tracing::debug!("Session {} -> {}", self.state, to);
        self.state = to;
    }
}
