//! Gearscore parsing and averaging
//!
//! PAPD is either a non-negative integer, the private sentinel, or empty.
//! Only integers count toward the average; everything else is tallied as
//! private and kept out of the denominator.

use crate::model::FamilyInfo;

/// Value the site shows in place of PAPD for private profiles
pub const PRIVATE_PAPD: &str = "Privado";

/// Parses a PAPD field into a gearscore
///
/// Returns `None` for the private sentinel, empty text, and anything that is
/// not a non-negative integer.
///
/// # Example
///
/// ```
/// use bdo_profile::parse_papd;
///
/// assert_eq!(parse_papd(" 712 "), Some(712));
/// assert_eq!(parse_papd("Privado"), None);
/// assert_eq!(parse_papd(""), None);
/// ```
pub fn parse_papd(raw: &str) -> Option<u32> {
    let papd = raw.trim();
    if papd.is_empty() || papd == PRIVATE_PAPD {
        return None;
    }
    papd.parse::<u32>().ok()
}

/// Gearscore of one member, absent when private or unparseable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearscoreRecord {
    pub gearscore: Option<u32>,
}

impl From<&FamilyInfo> for GearscoreRecord {
    fn from(info: &FamilyInfo) -> Self {
        Self {
            gearscore: parse_papd(&info.papd),
        }
    }
}

/// Aggregate over a set of members
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GearscoreSummary {
    /// Members with a valid gearscore
    pub valid: usize,

    /// Members whose PAPD was private, empty, or invalid
    pub private: usize,

    sum: u64,
}

impl GearscoreSummary {
    /// Adds one member to the summary
    pub fn record(&mut self, record: GearscoreRecord) {
        match record.gearscore {
            Some(value) => {
                self.valid += 1;
                self.sum += u64::from(value);
            }
            None => self.private += 1,
        }
    }

    /// Total members seen, private ones included
    pub fn members(&self) -> usize {
        self.valid + self.private
    }

    /// Integer-truncated average of the valid gearscores
    ///
    /// `None` when no member has a valid value.
    pub fn average(&self) -> Option<u64> {
        if self.valid == 0 {
            return None;
        }
        Some(self.sum / self.valid as u64)
    }
}

impl FromIterator<GearscoreRecord> for GearscoreSummary {
    fn from_iter<I: IntoIterator<Item = GearscoreRecord>>(iter: I) -> Self {
        let mut summary = Self::default();
        for record in iter {
            summary.record(record);
        }
        summary
    }
}
