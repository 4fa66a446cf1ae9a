//! # Game Version Parser
//!
//! Finds the version a release ships (`v1.10.1`, `Build 12345`,
//! `Update 5`) inside a release name. Scene revisions (PROPER/REAL) are
//! handled by the quality parser instead.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::Result;
use crate::types::GameVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Dotted,
    Spaced,
    Single,
    Build,
    Update,
    BareBuild,
    BareSpaced,
}

/// Scans release names for shipped game versions.
#[derive(Debug)]
pub struct GameVersionParser {
    patterns: Vec<(Shape, Regex)>,
    re_size_unit: Regex,
    re_audio: Regex,
}

static SHARED: LazyLock<GameVersionParser> =
    LazyLock::new(|| GameVersionParser::new().expect("game version patterns are valid"));

impl GameVersionParser {
    pub fn new() -> Result<Self> {
        // Earlier shapes win ties at the same position.
        let patterns = vec![
            (
                Shape::Dotted,
                Regex::new(
                    r"(?i)(?:^|[\s._\-(\[])(?P<v>v\.?\s?)?(?P<num>\d+(?:\.\d+){1,3})(?P<suffix>[a-z][a-z0-9]*)?(?P<end>$|[\s._\-,)\]+])",
                )?,
            ),
            (
                Shape::Spaced,
                Regex::new(r"(?i)(?:^|[\s(\[])v(?P<num>\d+(?:\s+\d+){1,3})(?P<end>$|[\s,)\]\-])")?,
            ),
            (
                Shape::Single,
                Regex::new(r"(?i)(?:^|[\s._\-(\[])v(?P<num>\d{3,})(?P<end>$|[\s._\-,)\]])")?,
            ),
            (
                Shape::Build,
                Regex::new(
                    r"(?i)(?:^|[\s._\-(\[])(?:build[\s._\-]?|b)(?P<num>\d{3,})(?P<end>$|[\s._\-,)\]])",
                )?,
            ),
            (
                Shape::Update,
                Regex::new(
                    r"(?i)(?:^|[\s._\-(\[])(?:update|patch)[\s._\-]?v?(?P<num>\d+(?:\.\d+){0,3})(?P<end>$|[\s._\-,)\]])",
                )?,
            ),
            (
                Shape::BareBuild,
                Regex::new(r"(?i)(?:^|\s)(?P<num>\d{6,})\s+MULTi")?,
            ),
            (
                Shape::BareSpaced,
                Regex::new(r"(?i)\s(?P<num>\d+(?:\s+\d+){2,3})\s+MULTi")?,
            ),
        ];

        Ok(Self {
            patterns,
            re_size_unit: Regex::new(r"(?i)^\s*[KMGT]i?B\b")?,
            re_audio: Regex::new(
                r"(?i)(?:^|[^a-z0-9])(?:dd|ddp|dd\+|aac|ac3|eac3|dts|ma|atmos|truehd|plus|h|x|ch)$",
            )?,
        })
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Returns the left-most version token, or an empty version.
    pub fn parse(&self, title: &str) -> GameVersion {
        let mut best: Option<(usize, GameVersion)> = None;

        for (shape, re) in &self.patterns {
            let found = re
                .captures_iter(title)
                .find_map(|caps| self.accept(*shape, &caps, title));
            if let Some((start, version)) = found {
                if best.is_none_or(|(at, _)| start < at) {
                    best = Some((start, version));
                }
            }
        }

        best.map(|(_, version)| version).unwrap_or_default()
    }

    fn accept(&self, shape: Shape, caps: &Captures<'_>, title: &str) -> Option<(usize, GameVersion)> {
        let whole = caps.get(0)?;
        let num = caps.name("num")?;
        let start = num.start();

        let version = match shape {
            Shape::Dotted => {
                let prefixed = caps.name("v").is_some();
                let parts: Vec<&str> = num.as_str().split('.').collect();
                if !prefixed {
                    if caps.name("suffix").is_some() {
                        return None;
                    }
                    if parts.iter().any(|p| is_year(p)) {
                        return None;
                    }
                    if self.re_audio.is_match(&title[..whole.start()]) {
                        return None;
                    }
                }
                if self.re_size_unit.is_match(&title[num.end()..]) {
                    return None;
                }
                from_parts(&parts)?
            }
            Shape::Spaced | Shape::BareSpaced => {
                let parts: Vec<&str> = num.as_str().split_whitespace().collect();
                from_parts(&parts)?
            }
            Shape::Single => GameVersion::new(num.as_str().parse().ok()?, 0, 0, 0),
            Shape::Build | Shape::BareBuild => GameVersion::from_build(num.as_str().parse().ok()?),
            Shape::Update => {
                // "Update v4 1 1 ..." belongs to the space-separated shape.
                let end = caps.name("end").map_or("", |m| m.as_str());
                let rest = &title[whole.end()..];
                if end.chars().all(char::is_whitespace)
                    && !end.is_empty()
                    && rest.starts_with(|c: char| c.is_ascii_digit())
                {
                    return None;
                }
                let parts: Vec<&str> = num.as_str().split('.').collect();
                from_parts(&parts)?
            }
        };

        version.has_value().then_some((start, version))
    }
}

fn is_year(part: &str) -> bool {
    part.len() == 4 && (part.starts_with("19") || part.starts_with("20"))
}

fn from_parts(parts: &[&str]) -> Option<GameVersion> {
    let mut values = [0u32; 4];
    for (slot, part) in values.iter_mut().zip(parts) {
        *slot = part.parse().ok()?;
    }
    Some(GameVersion::new(values[0], values[1], values[2], values[3]))
}

/// Returns the version shipped in `title`; `has_value()` is false when none is present.
pub fn parse_game_version(title: &str) -> GameVersion {
    GameVersionParser::shared().parse(title)
}
