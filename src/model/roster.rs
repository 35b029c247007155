use serde::{Deserialize, Serialize};

/// One guild member as listed on the guild page
///
/// Serialized as a `Nickname,Ref` CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildMember {
    #[serde(rename = "Nickname")]
    pub nickname: String,

    /// Profile page URL
    #[serde(rename = "Ref")]
    pub url: String,
}
