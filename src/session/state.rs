/// Session state definitions for the interactive viewer
///
/// The session has no terminal state; it ends only on an explicit quit.
use std::fmt;

/// Represents the current screen of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// Waiting for a family name
    #[default]
    Search,

    /// A resolve/fetch chain is in flight
    Loading,

    /// A fetched profile is displayed
    ProfileView,

    /// The last lookup failed; the message is shown above the input
    Error,
}

impl SessionState {
    /// Returns true if the state accepts text input and submit
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Search | Self::Error)
    }

    /// Returns true while a fetch chain is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the state name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Loading => "loading",
            Self::ProfileView => "profile_view",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
