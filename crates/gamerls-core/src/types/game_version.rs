use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::GamerlsError;

/// The version a game ships with, as opposed to the scene revision.
///
/// Field order gives the lexicographic ordering used by `Ord`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GameVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

static DOTTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^v?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:\.(\d+))?$")
        .expect("dotted version pattern is valid")
});

static BUILD_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:build|b)[ .]?(\d+)$").expect("build version pattern is valid")
});

impl GameVersion {
    #[must_use]
    pub fn new(major: u32, minor: u32, patch: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
        }
    }

    /// A version carrying only a build number.
    #[must_use]
    pub fn from_build(build: u32) -> Self {
        Self {
            build,
            ..Self::default()
        }
    }

    /// Returns `true` if any component is set.
    #[must_use]
    pub fn has_value(&self) -> bool {
        self.major > 0 || self.minor > 0 || self.patch > 0 || self.build > 0
    }

    /// Reads a stand-alone version string such as `v1.0`, `1.0.1` or `Build 12345`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Some(caps) = DOTTED.captures(input) {
            let part = |i: usize| -> Option<u32> {
                caps.get(i).map_or(Some(0), |m| m.as_str().parse().ok())
            };
            return Some(Self::new(part(1)?, part(2)?, part(3)?, part(4)?));
        }

        BUILD_ONLY
            .captures(input)
            .and_then(|caps| caps[1].parse().ok())
            .map(Self::from_build)
    }
}

impl FromStr for GameVersion {
    type Err = GamerlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| GamerlsError::InvalidVersion {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_value() {
            return Ok(());
        }
        if self.major == 0 && self.minor == 0 && self.patch == 0 {
            return write!(f, "Build {}", self.build);
        }
        match (self.patch, self.build) {
            (0, 0) => write!(f, "v{}.{}", self.major, self.minor),
            (_, 0) => write!(f, "v{}.{}.{}", self.major, self.minor, self.patch),
            _ => write!(
                f,
                "v{}.{}.{}.{}",
                self.major, self.minor, self.patch, self.build
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_versions() {
        assert_eq!(GameVersion::parse("v1.0"), Some(GameVersion::new(1, 0, 0, 0)));
        assert_eq!(GameVersion::parse("1.0.1"), Some(GameVersion::new(1, 0, 1, 0)));
        assert_eq!(GameVersion::parse("V1.5.2"), Some(GameVersion::new(1, 5, 2, 0)));
        assert_eq!(
            GameVersion::parse("1.2.3.4567"),
            Some(GameVersion::new(1, 2, 3, 4567))
        );
    }

    #[test]
    fn parses_build_versions() {
        for input in ["Build 12345", "B12345", "b.12345"] {
            assert_eq!(GameVersion::parse(input), Some(GameVersion::from_build(12345)), "{input}");
        }
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(GameVersion::parse(""), None);
        assert_eq!(GameVersion::parse("invalid"), None);
        assert_eq!(GameVersion::parse("version one"), None);
        assert!("version one".parse::<GameVersion>().is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let v = |s: &str| GameVersion::parse(s).unwrap();
        assert!(v("1.10") > v("1.9"));
        assert!(v("2.0") > v("1.99.99"));
        assert!(v("1.0.1") > v("1.0"));
        assert_eq!(v("1.0"), v("v1.0.0.0"));
    }

    #[test]
    fn display_forms() {
        assert_eq!(GameVersion::default().to_string(), "");
        assert_eq!(GameVersion::from_build(6458966).to_string(), "Build 6458966");
        assert_eq!(GameVersion::new(2, 1, 0, 0).to_string(), "v2.1");
        assert_eq!(GameVersion::new(1, 0, 5, 0).to_string(), "v1.0.5");
        assert_eq!(GameVersion::new(4, 1, 1, 3956366).to_string(), "v4.1.1.3956366");
    }

    #[test]
    fn has_value() {
        assert!(!GameVersion::default().has_value());
        assert!(GameVersion::from_build(1).has_value());
    }
}
