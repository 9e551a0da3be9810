//! Sort key identifiers.
//!
//! The grid never sorts. It only needs to know which sort key is active
//! because some keys show an always-visible annotation under each poster,
//! and that annotation needs vertical space.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Active sort key of the upstream item sequence.
///
/// Unknown keys are kept verbatim in [`SortKey::Other`] and reserve no space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// `sortName`
    SortName,
    /// `status`
    Status,
    /// `qualityProfileId`
    QualityProfileId,
    /// `nextAiring`
    NextAiring,
    /// `previousAiring`
    PreviousAiring,
    /// `added`
    Added,
    /// `seasons`
    Seasons,
    /// `path`
    Path,
    /// `sizeOnDisk`
    SizeOnDisk,
    /// Any key this crate does not know about.
    Other(String),
}

impl SortKey {
    /// Known keys in the order the terminal host cycles through them.
    pub fn known() -> [SortKey; 9] {
        [
            SortKey::SortName,
            SortKey::Status,
            SortKey::QualityProfileId,
            SortKey::NextAiring,
            SortKey::PreviousAiring,
            SortKey::Added,
            SortKey::Seasons,
            SortKey::Path,
            SortKey::SizeOnDisk,
        ]
    }

    /// Wire name of the key.
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::SortName => "sortName",
            SortKey::Status => "status",
            SortKey::QualityProfileId => "qualityProfileId",
            SortKey::NextAiring => "nextAiring",
            SortKey::PreviousAiring => "previousAiring",
            SortKey::Added => "added",
            SortKey::Seasons => "seasons",
            SortKey::Path => "path",
            SortKey::SizeOnDisk => "sizeOnDisk",
            SortKey::Other(raw) => raw,
        }
    }

    /// Next key in [`SortKey::known`] order. `None` and unknown keys start over.
    pub fn cycle(current: Option<&SortKey>) -> Option<SortKey> {
        let known = Self::known();
        let Some(current) = current else {
            return Some(known[0].clone());
        };
        match known.iter().position(|key| key == current) {
            Some(pos) if pos + 1 < known.len() => Some(known[pos + 1].clone()),
            Some(_) => None,
            None => Some(known[0].clone()),
        }
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "sortName" => SortKey::SortName,
            "status" => SortKey::Status,
            "qualityProfileId" => SortKey::QualityProfileId,
            "nextAiring" => SortKey::NextAiring,
            "previousAiring" => SortKey::PreviousAiring,
            "added" => SortKey::Added,
            "seasons" => SortKey::Seasons,
            "path" => SortKey::Path,
            "sizeOnDisk" => SortKey::SizeOnDisk,
            other => SortKey::Other(other.to_string()),
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        // FromStr for SortKey never fails
        Ok(raw.parse().unwrap_or(SortKey::Other(raw)))
    }
}
