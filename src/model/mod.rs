//! Profile data model
//!
//! Shared by the extractor, the session controller, the renderer and the
//! export helpers.

mod gearscore;
mod profile;
mod roster;

pub use gearscore::{parse_papd, GearscoreRecord, GearscoreSummary, PRIVATE_PAPD};
pub use profile::{Character, FamilyInfo, LifeSkill, Profile};
pub use roster::GuildMember;
