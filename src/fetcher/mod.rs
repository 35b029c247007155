//! Document fetching for the profile site
//!
//! This module contains the network side of a lookup:
//! - HTTP GET with a fixed timeout and browser user agent
//! - Search and guild URL construction
//! - `ProfileClient`, which chains fetching and extraction

mod client;
mod http;
mod urls;

pub use client::ProfileClient;
pub use http::{build_http_client, fetch_document, fetch_page};
pub use urls::{guild_url, search_url};
