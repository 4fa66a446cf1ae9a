//! # Platform Parser
//!
//! Detects console and operating-system tags. PC releases carry no tag and
//! come back as `Unknown`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::types::PlatformFamily;

/// Ordered token table; the first matching row wins.
const PLATFORM_TOKENS: &[(PlatformFamily, &str, &str)] = &[
    (PlatformFamily::PlayStation, "PS5", r"PS5|PlayStation\s*5"),
    (PlatformFamily::PlayStation, "PS4", r"PS4|PlayStation\s*4"),
    (PlatformFamily::PlayStation, "PS3", r"PS3|PlayStation\s*3"),
    (PlatformFamily::PlayStation, "PS Vita", r"PSV(?:ita)?|PS\s*Vita"),
    (PlatformFamily::PlayStation, "PSP", r"PSP"),
    (PlatformFamily::Xbox, "Xbox Series X", r"Xbox\s*Series\s*[XS]|XSX|XSS"),
    (PlatformFamily::Xbox, "Xbox One", r"Xbox\s*One|XB1|XBONE"),
    (PlatformFamily::Xbox, "Xbox 360", r"Xbox\s*360|X360|XB360"),
    (PlatformFamily::Xbox, "Xbox", r"Xbox|XB"),
    (PlatformFamily::Nintendo, "Switch", r"Switch|NSW|NSwitch|Nintendo\s*Switch"),
    (PlatformFamily::Nintendo, "Wii U", r"Wii\s*U"),
    (PlatformFamily::Nintendo, "Wii", r"Wii"),
    (PlatformFamily::Nintendo, "3DS", r"3DS|N3DS"),
    (PlatformFamily::Nintendo, "NDS", r"NDS|Nintendo\s*DS"),
    (PlatformFamily::Mac, "Mac", r"MAC|macOS|OSX|Mac\s*OS"),
    (PlatformFamily::Linux, "Linux", r"Linux|LNX"),
];

/// A matched platform: family plus canonical label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformMatch {
    pub family: PlatformFamily,
    pub label: &'static str,
}

#[derive(Debug)]
pub struct PlatformParser {
    rows: Vec<(PlatformMatch, Regex)>,
}

static SHARED: LazyLock<PlatformParser> =
    LazyLock::new(|| PlatformParser::new().expect("platform patterns are valid"));

impl PlatformParser {
    pub fn new() -> Result<Self> {
        let rows = PLATFORM_TOKENS
            .iter()
            .map(|&(family, label, pattern)| {
                let re = Regex::new(&format!(r"(?i)\b(?:{pattern})\b"))?;
                Ok((PlatformMatch { family, label }, re))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// First platform row matching `title`.
    pub fn detect(&self, title: &str) -> Option<PlatformMatch> {
        self.rows
            .iter()
            .find(|(_, re)| re.is_match(title))
            .map(|(found, _)| *found)
    }
}

/// Platform family of `title`, `Unknown` for PC or untagged releases.
pub fn parse_platform(title: &str) -> PlatformFamily {
    PlatformParser::shared()
        .detect(title)
        .map_or(PlatformFamily::Unknown, |found| found.family)
}

/// Canonical platform label of `title`, e.g. `"PS3"`.
pub fn parse_platform_string(title: &str) -> Option<String> {
    PlatformParser::shared()
        .detect(title)
        .map(|found| found.label.to_string())
}
