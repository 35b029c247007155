//! Field extraction from the site's HTML
//!
//! This module turns fetched pages into data:
//! - Resolving a search results page to a profile URL
//! - Extracting a full `Profile` from a profile page
//! - Listing guild members from a guild page
//!
//! All selectors come from [`ProfileSelectors`], compiled from configuration.

mod profile;
mod search;
mod selectors;
mod text;

pub use profile::extract_profile;
pub use search::{extract_guild_members, resolve_profile_url};
pub use selectors::ProfileSelectors;
pub use text::{clean_text, direct_text, element_text, split_level, text_excluding};
