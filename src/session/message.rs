//! Messages exchanged between the session controller and its runtime

use crate::model::Profile;
use crate::ProfileError;
use url::Url;

/// Terminal-independent key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Esc,
    CtrlC,
    Backspace,
    Delete,
    Char(char),
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Other,
}

/// Work the controller asks its runtime to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve a family name to a profile URL
    Resolve { generation: u64, family: String },

    /// Fetch and extract the profile at a resolved URL
    FetchProfile { generation: u64, url: Url },

    /// Write a displayed profile to the debug export file
    SaveProfile { profile: Box<Profile> },

    /// Leave the session
    Quit,
}

/// Outcome of one asynchronous step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    ProfileResolved { url: Url },
    ProfileFetched { profile: Box<Profile> },
    Failed { message: String },
}

impl From<ProfileError> for Completion {
    fn from(error: ProfileError) -> Self {
        Self::Failed {
            message: error.to_string(),
        }
    }
}

/// A completion tagged with the lookup it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub generation: u64,
    pub completion: Completion,
}

impl Envelope {
    pub fn new(generation: u64, completion: Completion) -> Self {
        Self {
            generation,
            completion,
        }
    }
}
