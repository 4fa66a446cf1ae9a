//! # Release Group Parser
//!
//! Finds the group or repack tool a release is attributed to.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::parser::lexicon::{self, REPACK_TOOLS, TRAILING_GROUPS};

/// Extracts release-group attribution from a release name.
#[derive(Debug)]
pub struct ReleaseGroupParser {
    re_bracket: Regex,
    re_repack_suffix: Regex,
    re_known: Regex,
    re_dash: Regex,
    re_domain: Regex,
    re_invalid: Regex,
}

static SHARED: LazyLock<ReleaseGroupParser> =
    LazyLock::new(|| ReleaseGroupParser::new().expect("release group patterns are valid"));

impl ReleaseGroupParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_bracket: Regex::new(r"\[(?P<tag>[^\[\]]+)\]\s*$")?,
            re_repack_suffix: Regex::new(
                r"(?i)^(?P<name>.+?)[\s._-]+(?:Monkey[\s._-]+)?Repacks?$",
            )?,
            re_known: Regex::new(&format!(
                "(?i)^(?:{}|{})$",
                lexicon::alternation(REPACK_TOOLS),
                lexicon::alternation(TRAILING_GROUPS)
            ))?,
            re_dash: Regex::new(r"-(?P<group>[A-Za-z0-9_]+(?:\.[A-Za-z]{2,6})?)\s*$")?,
            re_domain: Regex::new(
                r"(?i)\.(?:com|net|org|io|gov|edu|info|biz|ru|to|tv|me|cc|lt|tc|xyz|club|site|online)$",
            )?,
            re_invalid: Regex::new(
                r"(?i)^(?:\d+|[se]\d+|[0-9a-f]{8}|DL|HD|MA|ES|EN|X|RAY|BIT|CAT|GER|FRA|FRE|ITA|RIP)$",
            )?,
        })
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Returns the release group, preferring a trailing bracketed repack tag
    /// over a classic `-GROUP` suffix.
    pub fn parse(&self, title: &str) -> Option<String> {
        let mut title = title.trim();
        while let Some(stem) = lexicon::strip_extension(title) {
            title = stem;
        }

        self.bracket_group(title).or_else(|| self.dash_group(title))
    }

    /// `[FitGirl Repack]` → `FitGirl`, `[R.G. Mechanics]` → `R.G. Mechanics`.
    pub fn bracket_group(&self, title: &str) -> Option<String> {
        let caps = self.re_bracket.captures(title)?;
        let tag = caps["tag"].split(',').next().unwrap_or_default().trim();

        if let Some(named) = self.re_repack_suffix.captures(tag) {
            return Some(named["name"].trim().to_string());
        }
        self.re_known.is_match(tag).then(|| tag.to_string())
    }

    /// Classic scene suffix, `Title.2018.DVDRip.XviD-GROUP` → `GROUP`.
    pub fn dash_group(&self, title: &str) -> Option<String> {
        let caps = self.re_dash.captures(title)?;
        let group = &caps["group"];

        if self.re_domain.is_match(group) || group.contains('.') {
            return None;
        }
        if self.re_invalid.is_match(group) {
            return None;
        }
        Some(group.to_string())
    }
}

/// Returns the release group of `title`, if any.
pub fn parse_release_group(title: &str) -> Option<String> {
    ReleaseGroupParser::shared().parse(title)
}
