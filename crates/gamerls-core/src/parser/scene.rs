//! # Scene Checker
//!
//! Decides whether a name follows the `Title.Source.Codec-GROUP` scene shape.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::parser::lexicon::{self, QUALITY_SCENE_GROUPS, SCENE_GROUPS};
use crate::parser::release_group::ReleaseGroupParser;

#[derive(Debug)]
pub struct SceneChecker {
    re_indicator: Regex,
    re_scene_group: Regex,
    groups: ReleaseGroupParser,
}

static SHARED: LazyLock<SceneChecker> =
    LazyLock::new(|| SceneChecker::new().expect("scene checker patterns are valid"));

impl SceneChecker {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_indicator: Regex::new(
                r"(?i)[._-](?:480p|540p|576p|720p|1080p|2160p|4k|hdtv|pdtv|sdtv|dvdrip|dvdr|dvd|bdrip|brrip|bluray|blu-ray|web-?dl|webrip|web|hdrip|xvid|x264|x265|h\.?264|h\.?265|hevc|remux|repack|proper|real|gog|iso|portable|multi\d+|update|crack(?:fix)?|v\d+(?:\.\d+)+|build[._]?\d+)(?:[._-]|$)",
            )?,
            re_scene_group: Regex::new(&format!(
                "(?i)^(?:{}|{})$",
                lexicon::alternation(SCENE_GROUPS),
                lexicon::alternation(QUALITY_SCENE_GROUPS)
            ))?,
            groups: ReleaseGroupParser::new()?,
        })
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Returns the canonical scene form of `raw`, or `None` if it is not scene-shaped.
    ///
    /// Underscore padding and known file extensions are removed and
    /// fullwidth brackets become ASCII brackets.
    pub fn scene_title(&self, raw: &str) -> Option<String> {
        let mut title = raw.trim().trim_matches('_');
        while let Some(stem) = lexicon::strip_extension(title) {
            title = stem;
        }
        let title = title.replace('【', "[").replace('】', "]");

        if title.is_empty() || title.contains(' ') || !title.contains('.') {
            return None;
        }

        let group = self.groups.dash_group(&title)?;
        let group_start = title.len() - group.len();

        // The indicator must sit before `-GROUP`, not be the group itself.
        let indicator = self
            .re_indicator
            .find_iter(&title)
            .find(|m| m.end() <= group_start);
        let title_end = match indicator {
            Some(m) => m.start(),
            None if self.re_scene_group.is_match(&group) => group_start - 1,
            None => return None,
        };

        title[..title_end]
            .chars()
            .any(char::is_alphanumeric)
            .then_some(title)
    }

    pub fn is_scene_title(&self, title: &str) -> bool {
        self.scene_title(title).is_some()
    }
}

/// Returns the canonical scene form of `raw`, or `None`.
pub fn get_scene_title(raw: &str) -> Option<String> {
    SceneChecker::shared().scene_title(raw)
}

/// Returns `true` for names with a title, a quality indicator and a `-GROUP` suffix.
pub fn is_scene_title(title: &str) -> bool {
    SceneChecker::shared().is_scene_title(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_scene_names() {
        assert!(is_scene_title("game.title.2022.dvdrip.x264-ingot"));
        assert!(is_scene_title("Cyberpunk.2077.v2.1-CODEX"));
        assert!(is_scene_title("Game.Name.Build.12345-PLAZA"));
        assert!(is_scene_title("Hitman.3-CODEX"));
    }

    #[test]
    fn rejects_non_scene_names() {
        assert!(!is_scene_title("aaaaa"));
        assert!(!is_scene_title("Game Title 2022 DVDRip x264-GROUP"));
        assert!(!is_scene_title("game.title.2022.dvdrip.x264"));
        assert!(!is_scene_title("Some.Random.Words-nobody"));
        assert!(!is_scene_title(".dvdrip.x264-ingot"));
    }

    #[test]
    fn group_named_like_a_marker_is_not_an_indicator() {
        assert!(!is_scene_title("Some.Random.Words-REPACK"));
        assert!(!is_scene_title("Some.Random.Words-PROPER"));
        assert!(is_scene_title("Some.Random.Words.REPACK-GROUP"));
    }

    #[test]
    fn strips_extensions_and_padding() {
        let expected = Some("game.title.2022.dvdrip.x264-ingot".to_string());
        for raw in [
            "game.title.2022.dvdrip.x264-ingot",
            "game.title.2022.dvdrip.x264-ingot.mkv",
            "game.title.2022.dvdrip.x264-ingot.iso",
            "game.title.2022.dvdrip.x264-ingot.par2",
            "game.title.2022.dvdrip.x264-ingot.nzb",
            "game.title.2022.dvdrip.x264-ingot__",
        ] {
            assert_eq!(get_scene_title(raw), expected, "{raw}");
        }
    }

    #[test]
    fn extension_stripping_is_idempotent() {
        let s = "Game.Name.2020.REPACK-FLT";
        assert_eq!(get_scene_title(&format!("{s}.mkv")), get_scene_title(s));
        assert!(get_scene_title(s).is_some());
    }

    #[test]
    fn normalises_fullwidth_brackets() {
        assert_eq!(
            get_scene_title("【Tag】Game.2020.1080p.WEB-DL.x264-GRP").as_deref(),
            Some("[Tag]Game.2020.1080p.WEB-DL.x264-GRP")
        );
    }
}
