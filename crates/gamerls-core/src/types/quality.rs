use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GamerlsError;

/// Distribution class of a game release.
///
/// The first block describes how a game was packaged or sourced. The
/// resolution-class values at the end only appear for video-style release
/// names and are kept for backward compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Quality {
    #[default]
    Unknown,
    /// Release by a known scene group.
    Scene,
    /// Crack, crack fix or DRM-free re-release.
    SceneCracked,
    /// GOG installer rip.
    #[serde(rename = "GOG")]
    Gog,
    Steam,
    Epic,
    Origin,
    Uplay,
    /// Re-compressed redistribution (FitGirl, DODI, ...).
    Repack,
    /// Repack that bundles every DLC.
    RepackAllDlc,
    #[serde(rename = "ISO")]
    Iso,
    Retail,
    Portable,
    Preload,
    UpdateOnly,
    MultiLang,

    // Legacy video classes
    Sdtv,
    Dvd,
    Hdtv720p,
    Hdtv1080p,
    WebDl720p,
    WebDl1080p,
    WebDl2160p,
    Bluray720p,
    Bluray1080p,
    Bluray2160p,
}

impl Quality {
    /// Every quality, in id order.
    pub const ALL: [Quality; 26] = [
        Self::Unknown,
        Self::Scene,
        Self::SceneCracked,
        Self::Gog,
        Self::Steam,
        Self::Epic,
        Self::Origin,
        Self::Uplay,
        Self::Repack,
        Self::RepackAllDlc,
        Self::Iso,
        Self::Retail,
        Self::Portable,
        Self::Preload,
        Self::UpdateOnly,
        Self::MultiLang,
        Self::Sdtv,
        Self::Dvd,
        Self::Hdtv720p,
        Self::Hdtv1080p,
        Self::WebDl720p,
        Self::WebDl1080p,
        Self::WebDl2160p,
        Self::Bluray720p,
        Self::Bluray1080p,
        Self::Bluray2160p,
    ];

    /// Stable numeric id. Legacy video classes start at 101.
    #[must_use]
    pub fn id(self) -> u32 {
        match self {
            Self::Unknown => 0,
            Self::Scene => 1,
            Self::SceneCracked => 2,
            Self::Gog => 3,
            Self::Steam => 4,
            Self::Epic => 5,
            Self::Origin => 6,
            Self::Uplay => 7,
            Self::Repack => 8,
            Self::RepackAllDlc => 9,
            Self::Iso => 10,
            Self::Retail => 11,
            Self::Portable => 12,
            Self::Preload => 13,
            Self::UpdateOnly => 14,
            Self::MultiLang => 15,
            Self::Sdtv => 101,
            Self::Dvd => 102,
            Self::Hdtv720p => 103,
            Self::Hdtv1080p => 104,
            Self::WebDl720p => 105,
            Self::WebDl1080p => 106,
            Self::WebDl2160p => 107,
            Self::Bluray720p => 108,
            Self::Bluray1080p => 109,
            Self::Bluray2160p => 110,
        }
    }

    /// Looks a quality up by its id.
    #[must_use]
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.id() == id)
    }

    /// Human readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Scene => "Scene",
            Self::SceneCracked => "Scene Cracked",
            Self::Gog => "GOG",
            Self::Steam => "Steam",
            Self::Epic => "Epic",
            Self::Origin => "Origin",
            Self::Uplay => "Uplay",
            Self::Repack => "Repack",
            Self::RepackAllDlc => "Repack All DLC",
            Self::Iso => "ISO",
            Self::Retail => "Retail",
            Self::Portable => "Portable",
            Self::Preload => "Preload",
            Self::UpdateOnly => "Update Only",
            Self::MultiLang => "Multi-Language",
            Self::Sdtv => "SDTV",
            Self::Dvd => "DVD",
            Self::Hdtv720p => "HDTV-720p",
            Self::Hdtv1080p => "HDTV-1080p",
            Self::WebDl720p => "WEBDL-720p",
            Self::WebDl1080p => "WEBDL-1080p",
            Self::WebDl2160p => "WEBDL-2160p",
            Self::Bluray720p => "Bluray-720p",
            Self::Bluray1080p => "Bluray-1080p",
            Self::Bluray2160p => "Bluray-2160p",
        }
    }

    /// Returns `true` for the resolution-class values.
    #[must_use]
    pub fn is_legacy(self) -> bool {
        self.id() > 100
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quality {
    type Err = GamerlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|q| {
                q.name().eq_ignore_ascii_case(wanted)
                    || format!("{q:?}").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| GamerlsError::UnknownQuality { name: s.to_string() })
    }
}

/// Scene revision markers (PROPER / REAL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Revision {
    /// 1 for an initial release, 2 once any PROPER or REAL marker is present.
    pub version: u32,
    /// Number of REAL markers.
    pub real: u32,
}

impl Revision {
    #[must_use]
    pub fn new(version: u32, real: u32) -> Self {
        Self { version, real }
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self { version: 1, real: 0 }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.version)?;
        if self.real > 0 {
            write!(f, " REAL:{}", self.real)?;
        }
        Ok(())
    }
}

/// A quality together with its revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QualityModel {
    pub quality: Quality,
    pub revision: Revision,
}

impl QualityModel {
    #[must_use]
    pub fn new(quality: Quality, revision: Revision) -> Self {
        Self { quality, revision }
    }
}

impl Ord for QualityModel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.quality
            .id()
            .cmp(&other.quality.id())
            .then_with(|| self.revision.cmp(&other.revision))
    }
}

impl PartialOrd for QualityModel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QualityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.revision == Revision::default() {
            write!(f, "{}", self.quality)
        } else {
            write!(f, "{} {}", self.quality, self.revision)
        }
    }
}

/// How much of the pipeline a parse runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParseMode {
    /// Title boundaries only: titles, year, edition, catalog id, hash, group.
    Light,
    /// Boundaries plus quality, languages, platform, content type and version.
    #[default]
    Full,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Full => write!(f, "full"),
        }
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown parse mode {other:?}, expected light or full")),
        }
    }
}
