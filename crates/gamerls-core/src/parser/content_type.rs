//! # Content Type Parser
//!
//! Classifies a release as a full game, a DLC or update that needs the
//! base game, or a bundle that ships everything.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::Result;
use crate::types::ReleaseContentType;

/// Words that turn a bare `DLC` into a bundle description rather than a
/// DLC-only release when they come right before it.
const DLC_BUNDLE_PREFIXES: &[&str] = &[
    "all",
    "incl",
    "include",
    "includes",
    "including",
    "with",
    "and",
    "plus",
];

/// Same, when they come right after it.
const DLC_BUNDLE_SUFFIXES: &[&str] = &["bundle", "pack", "unlocker", "included", "incl"];

#[derive(Debug)]
pub struct ContentTypeParser {
    re_dlc_only: Regex,
    re_bare_dlc: Regex,
    re_update_only: Regex,
    re_season_pass: Regex,
    re_expansion: Regex,
    re_complete: Regex,
}

static SHARED: LazyLock<ContentTypeParser> =
    LazyLock::new(|| ContentTypeParser::new().expect("content type patterns are valid"));

impl ContentTypeParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_dlc_only: Regex::new(r"(?i)\b(?:DLC[\s-]?ONLY|ADD[\s-]?ON[\s-]?ONLY|EXPANSION[\s-]?ONLY)\b")?,
            re_bare_dlc: Regex::new(r"(?i)\bDLC\b")?,
            re_update_only: Regex::new(
                r"(?i)\b(?:(?:UPDATE|PATCH)(?:[\s-]?v?\d+)?[\s-]?ONLY|HOTFIX[\s-]?ONLY)\b",
            )?,
            re_season_pass: Regex::new(
                r"(?i)\b(?:SEASON[\s-]?PASS|DLC[\s-]?BUNDLE|EXPANSION[\s-]?PASS|CONTENT[\s-]?PACK)\b",
            )?,
            re_expansion: Regex::new(r"(?i)\b(?:STANDALONE[\s-]?EXPANSION|EXPANSION(?:[\s-]?PACK)?)\b")?,
            re_complete: Regex::new(concat!(
                r"(?i)\b(?:COMPLETE[\s-]?(?:EDITION|PACK)|DEFINITIVE[\s-]?EDITION|ULTIMATE[\s-]?EDITION",
                r"|GOTY|GAME[\s-]?OF[\s-]?THE[\s-]?YEAR|GOLD[\s-]?EDITION|LEGENDARY[\s-]?EDITION",
                r"|PREMIUM[\s-]?EDITION|(?:INCL(?:UDES?)?|WITH)[\s-]?ALL[\s-]?DLCs?",
                r"|ALL[\s-]?DLCs?[\s-]?(?:INCL(?:UDED)?|PACK))\b",
            ))?,
        })
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    pub fn parse(&self, title: &str) -> ReleaseContentType {
        let name = title.replace(['_', '.'], " ");
        let name = name.trim();
        if name.is_empty() {
            return ReleaseContentType::Unknown;
        }

        let content_type = if self.re_dlc_only.is_match(name) || self.has_bare_dlc(name) {
            ReleaseContentType::DlcOnly
        } else if self.re_update_only.is_match(name) {
            ReleaseContentType::UpdateOnly
        } else if self.re_season_pass.is_match(name) {
            ReleaseContentType::SeasonPass
        } else if self.re_expansion.is_match(name) {
            ReleaseContentType::Expansion
        } else if self.re_complete.is_match(name) {
            ReleaseContentType::BaseGameWithAllDlc
        } else {
            ReleaseContentType::Unknown
        };

        if content_type != ReleaseContentType::Unknown {
            trace!(title, %content_type, "detected content type");
        }
        content_type
    }

    /// A standalone `DLC` token, as in `Game.Name.DLC-PLAZA`. `All DLC`,
    /// `Incl 5 DLC` and `DLC Pack` describe bundles and do not count.
    fn has_bare_dlc(&self, name: &str) -> bool {
        self.re_bare_dlc.find_iter(name).any(|m| {
            let previous = name[..m.start()]
                .split(|c: char| !c.is_alphanumeric())
                .rev()
                .find(|word| !word.is_empty());
            let next = name[m.end()..]
                .split(|c: char| !c.is_alphanumeric())
                .find(|word| !word.is_empty());

            let bundled_before = previous.is_some_and(|word| {
                word.chars().all(|c| c.is_ascii_digit())
                    || DLC_BUNDLE_PREFIXES.contains(&word.to_ascii_lowercase().as_str())
            });
            let bundled_after = next.is_some_and(|word| {
                DLC_BUNDLE_SUFFIXES.contains(&word.to_ascii_lowercase().as_str())
            });
            !bundled_before && !bundled_after
        })
    }
}

/// Content classification of `title`; `Unknown` when nothing matches.
pub fn parse_content_type(title: &str) -> ReleaseContentType {
    ContentTypeParser::shared().parse(title)
}
