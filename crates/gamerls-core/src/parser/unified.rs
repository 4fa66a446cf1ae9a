//! # Unified Parser Interface
//!
//! Runs the title rules and, in [`ParseMode::Full`], the classifiers for
//! quality, languages, content type, game version and platform. Paths are
//! parsed leaf first; a hashed or unreadable leaf falls back to its parent
//! folder.

use std::sync::LazyLock;

use tracing::debug;

use crate::error::Result;
use crate::parser::content_type::ContentTypeParser;
use crate::parser::game_version::GameVersionParser;
use crate::parser::language::LanguageParser;
use crate::parser::lexicon;
use crate::parser::platform::PlatformParser;
use crate::parser::quality::QualityParser;
use crate::parser::release_group::ReleaseGroupParser;
use crate::parser::title::{PreparedTitle, TitleMatch, TitleParser};
use crate::types::{Language, ParseMode, ParsedGameInfo};

/// Stand-in for the release group when scanning for language tokens.
const GROUP_PLACEHOLDER: &str = "RlsGrp";

/// Configuration for the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Which classifiers run after the title rules.
    pub mode: ParseMode,
    /// Split `AKA` and `/` separated names into alternate titles.
    pub include_alternate_titles: bool,
}

impl ParserConfig {
    /// Create a new parser configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the parse mode.
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable alternate title splitting.
    pub fn with_alternate_titles(mut self, enabled: bool) -> Self {
        self.include_alternate_titles = enabled;
        self
    }
}

/// Release-name parser combining the title rules with every classifier.
///
/// Holds only compiled patterns, so one instance can be shared across
/// threads.
#[derive(Debug)]
pub struct GameParser {
    config: ParserConfig,
    title: TitleParser,
    release_group: ReleaseGroupParser,
    quality: QualityParser,
    language: LanguageParser,
    content_type: ContentTypeParser,
    version: GameVersionParser,
    platform: PlatformParser,
}

static SHARED_FULL: LazyLock<GameParser> =
    LazyLock::new(|| GameParser::new(ParserConfig::default()).expect("parser patterns are valid"));

impl GameParser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            config,
            title: TitleParser::new()?,
            release_group: ReleaseGroupParser::new()?,
            quality: QualityParser::new()?,
            language: LanguageParser::new()?,
            content_type: ContentTypeParser::new()?,
            version: GameVersionParser::new()?,
            platform: PlatformParser::new()?,
        })
    }

    /// Get the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a release name.
    ///
    /// Names that cannot be releases (spam, hashes, no alphanumerics) and
    /// names no rule recognises come back with empty `game_titles` and
    /// `languages == [Unknown]`.
    ///
    /// # Examples
    /// ```
    /// use gamerls_core::parser::{GameParser, ParserConfig};
    /// use gamerls_core::types::Quality;
    ///
    /// let parser = GameParser::new(ParserConfig::default()).unwrap();
    /// let info = parser.parse_title("Game.2018.DVDRip.XviD-GAMARR");
    ///
    /// assert_eq!(info.primary_game_title(), Some("Game"));
    /// assert_eq!(info.year, 2018);
    /// assert_eq!(info.quality.quality, Quality::Dvd);
    /// ```
    pub fn parse_title(&self, title: &str) -> ParsedGameInfo {
        self.parse_name(title)
    }

    /// Parse a file path, falling back to the parent folder when the leaf
    /// yields no title. Only the extension is taken from the leaf then.
    pub fn parse_path(&self, path: &str) -> ParsedGameInfo {
        let mut segments = path.rsplit(['/', '\\']).filter(|segment| !segment.is_empty());
        let Some(leaf) = segments.next() else {
            return ParsedGameInfo::new(path);
        };

        let info = self.parse_name(leaf);
        if info.has_title() {
            return info;
        }

        let Some(folder) = segments.next() else {
            return info;
        };
        let extension = lexicon::strip_extension(leaf).map_or("", |stem| &leaf[stem.len()..]);
        debug!(leaf, folder, "leaf has no usable title, parsing parent folder");
        self.parse_name(&format!("{folder}{extension}"))
    }

    fn parse_name(&self, title: &str) -> ParsedGameInfo {
        let mut info = ParsedGameInfo::new(title);
        if title.trim().is_empty() || !self.title.is_parseable(title) {
            return info;
        }

        let prepared = self.title.prepare(title);
        let Some(found) = self
            .title
            .match_rules(&prepared.simple_title, self.config.include_alternate_titles)
        else {
            debug!(title, "no title rule matched");
            return info;
        };

        self.fill(&mut info, &prepared, found);
        info
    }

    fn fill(&self, info: &mut ParsedGameInfo, prepared: &PreparedTitle, found: TitleMatch) {
        let placeholder = if found.title_span.contains('.') {
            "A.Game"
        } else {
            "A Game"
        };
        let stripped_title = self.title.simplify_release_title(&prepared.release_title);
        let simple_release_title = stripped_title.replacen(&found.title_span, placeholder, 1);

        let release_group = found
            .release_group
            .or(found.subgroup)
            .or_else(|| self.release_group.parse(&simple_release_title));

        if self.config.mode == ParseMode::Full {
            info.languages =
                self.languages(&stripped_title, &simple_release_title, release_group.as_deref());
            info.quality = self.quality.parse(&prepared.title);
            info.quality.revision = self.quality.parse_revision(&simple_release_title);
            info.game_version = self.version.parse(&prepared.title);
            info.content_type = self.content_type.parse(&prepared.title);
            if let Some(platform) = self.platform.detect(&prepared.title) {
                info.platform = platform.family;
                info.platform_string = Some(platform.label.to_string());
            }
        }

        info.edition = found
            .edition
            .or_else(|| self.title.edition(&simple_release_title))
            .unwrap_or_default();
        info.hardcoded_subs = self.title.hardcoded_subs(&prepared.title);
        info.igdb_id = self.title.igdb_id(&simple_release_title);
        info.game_titles = found.titles;
        info.year = found.year;
        info.release_hash = found.hash;
        info.release_group = release_group;
        info.release_title = prepared.release_title.clone();
        info.simple_release_title = simple_release_title;
    }

    /// Languages outside the title span and the group name. Hebrew and
    /// Ukrainian are also looked for across the whole release title.
    fn languages(
        &self,
        stripped_title: &str,
        simple_release_title: &str,
        release_group: Option<&str>,
    ) -> Vec<Language> {
        let hide_group = |text: &str| match release_group {
            Some(group) => text.replace(group, GROUP_PLACEHOLDER),
            None => text.to_string(),
        };

        let mut languages = self.language.parse(&hide_group(simple_release_title));
        let full_title = hide_group(stripped_title);
        let extra: Vec<Language> = [Language::Hebrew, Language::Ukrainian]
            .into_iter()
            .filter(|language| self.language.mentions(&full_title, *language))
            .collect();

        if extra.is_empty() {
            return languages;
        }
        if languages == [Language::Unknown] {
            return extra;
        }
        for language in extra {
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
        languages
    }
}

/// Parse a release name with the shared full-mode parser.
///
/// Alternate-title splitting uses a second shared parser configured for
/// it.
pub fn parse_game_title(title: &str, include_alternate_titles: bool) -> ParsedGameInfo {
    if !include_alternate_titles {
        return SHARED_FULL.parse_title(title);
    }
    static SHARED_ALTERNATE: LazyLock<GameParser> = LazyLock::new(|| {
        GameParser::new(ParserConfig::default().with_alternate_titles(true))
            .expect("parser patterns are valid")
    });
    SHARED_ALTERNATE.parse_title(title)
}

/// Parse a file path with the shared full-mode parser.
pub fn parse_game_path(path: &str) -> ParsedGameInfo {
    SHARED_FULL.parse_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameVersion, Quality, ReleaseContentType, Revision};

    #[test]
    fn config_builders() {
        let config = ParserConfig::new()
            .with_mode(ParseMode::Light)
            .with_alternate_titles(true);
        assert_eq!(config.mode, ParseMode::Light);
        assert!(config.include_alternate_titles);
        assert_eq!(ParserConfig::default().mode, ParseMode::Full);
    }

    #[test]
    fn scene_release_full_mode() {
        let info = parse_game_title("Cyberpunk.2077.v2.1-CODEX", false);
        assert_eq!(info.game_titles, vec!["Cyberpunk 2077"]);
        assert_eq!(info.release_group.as_deref(), Some("CODEX"));
        assert_eq!(info.quality.quality, Quality::Scene);
        assert_eq!(info.game_version, GameVersion::new(2, 1, 0, 0));
        assert_eq!(info.simple_release_title, "A.Game.v2.1-CODEX");
        assert_eq!(info.year, 0);
    }

    #[test]
    fn light_mode_skips_classifiers() {
        let parser = GameParser::new(ParserConfig::new().with_mode(ParseMode::Light)).unwrap();
        let info = parser.parse_title("Cyberpunk.2077.v2.1-CODEX");
        assert_eq!(info.game_titles, vec!["Cyberpunk 2077"]);
        assert_eq!(info.release_group.as_deref(), Some("CODEX"));
        assert_eq!(info.quality.quality, Quality::Unknown);
        assert_eq!(info.languages, vec![Language::Unknown]);
        assert!(!info.game_version.has_value());
        assert_eq!(info.content_type, ReleaseContentType::Unknown);
    }

    #[test]
    fn words_in_title_are_not_languages() {
        let info = parse_game_title("The.Good.German.2006.720p.HDTV.x264-RlsGrp", false);
        assert_eq!(info.game_titles, vec!["The Good German"]);
        assert_eq!(info.year, 2006);
        assert_eq!(info.languages, vec![Language::Unknown]);
    }

    #[test]
    fn title_words_do_not_bump_revision() {
        let info = parse_game_title("Real.Racing.3-CODEX", false);
        assert_eq!(info.game_titles, vec!["Real Racing 3"]);
        assert_eq!(info.quality.revision, Revision::default());
    }

    #[test]
    fn year_first_names() {
        let info = parse_game_title("(1995) Game Name", false);
        assert_eq!(info.game_titles, vec!["Game Name"]);
        assert_eq!(info.year, 1995);
    }

    #[test]
    fn site_tags_do_not_leak_into_languages() {
        let info = parse_game_title("Game.Title.2010.720p.BluRay.x264.-[YTS.LT]", false);
        assert_eq!(info.game_titles, vec!["Game Title"]);
        assert_eq!(info.languages, vec![Language::Unknown]);
    }

    #[test]
    fn empty_and_unparseable_input() {
        for input in ["", "   ", "password yenc", "AHFMZXGHEWD660.mkv"] {
            let info = parse_game_title(input, false);
            assert!(info.game_titles.is_empty(), "{input:?}");
            assert_eq!(info.languages, vec![Language::Unknown]);
            assert_eq!(info.original_title, input);
        }
    }

    #[test]
    fn hashed_leaf_falls_back_to_folder() {
        let info = parse_game_path("/downloads/Game.2018.DVDRip.XviD-GAMARR/AHFMZXGHEWD660.mkv");
        assert_eq!(info.game_titles, vec!["Game"]);
        assert_eq!(info.quality.quality, Quality::Dvd);
        assert_eq!(info.release_group.as_deref(), Some("GAMARR"));
        assert_eq!(info.release_title, "Game.2018.DVDRip.XviD-GAMARR");
    }

    #[test]
    fn windows_paths_split_on_backslash() {
        let info = parse_game_path(r"D:\Games\Cyberpunk.2077.v2.1-CODEX");
        assert_eq!(info.game_titles, vec!["Cyberpunk 2077"]);
    }
}
