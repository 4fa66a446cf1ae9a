use serde::{Deserialize, Serialize};

use super::content_type::ReleaseContentType;
use super::game_version::GameVersion;
use super::language::Language;
use super::platform::PlatformFamily;
use super::quality::QualityModel;

/// The primary output of the gamerls parsing engine.
///
/// Every field has a "not found" value: empty collections or strings,
/// `None`, `0` for numbers, and `Unknown` for the enums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedGameInfo {
    /// Candidate titles. The first entry is the primary title, the rest are
    /// alternate ("AKA") titles.
    pub game_titles: Vec<String>,

    /// Input exactly as received.
    pub original_title: String,

    /// Input after extension removal and bracket normalization.
    pub release_title: String,

    /// Release title with the title span replaced by a placeholder.
    pub simple_release_title: String,

    pub quality: QualityModel,

    /// Never empty once produced by the parser; `[Unknown]` when nothing matched.
    pub languages: Vec<Language>,

    pub release_group: Option<String>,

    /// CRC-style hash token, e.g. `ABCD1234` from `[ABCD1234]`.
    pub release_hash: Option<String>,

    /// Edition qualifier, empty when none was found.
    pub edition: String,

    /// Release year, `0` when unknown.
    pub year: i32,

    /// Catalog id embedded in the name, `0` when unknown.
    pub igdb_id: i32,

    pub hardcoded_subs: Option<String>,

    pub platform: PlatformFamily,

    /// Canonical platform label such as `"PS3"`, `None` when unknown.
    pub platform_string: Option<String>,

    pub content_type: ReleaseContentType,

    pub game_version: GameVersion,
}

impl ParsedGameInfo {
    /// Creates an empty result for the given input.
    #[must_use]
    pub fn new(original_title: impl Into<String>) -> Self {
        Self {
            game_titles: Vec::new(),
            original_title: original_title.into(),
            release_title: String::new(),
            simple_release_title: String::new(),
            quality: QualityModel::default(),
            languages: vec![Language::Unknown],
            release_group: None,
            release_hash: None,
            edition: String::new(),
            year: 0,
            igdb_id: 0,
            hardcoded_subs: None,
            platform: PlatformFamily::Unknown,
            platform_string: None,
            content_type: ReleaseContentType::Unknown,
            game_version: GameVersion::default(),
        }
    }

    /// The primary title, if one was found.
    #[must_use]
    pub fn primary_game_title(&self) -> Option<&str> {
        self.game_titles.first().map(String::as_str)
    }

    #[must_use]
    pub fn has_title(&self) -> bool {
        !self.game_titles.is_empty()
    }
}

impl Default for ParsedGameInfo {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl std::fmt::Display for ParsedGameInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.primary_game_title().unwrap_or("[unknown]"))?;
        write!(f, " - {}", self.year)?;
        write!(f, " {}", self.quality)
    }
}
