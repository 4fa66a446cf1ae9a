//! # Title Rules
//!
//! Boundary detection for release names. A name is first cleaned of
//! resolution/codec noise, site decorations and trailing quality brackets,
//! then run through an ordered table of anchored rules. The first rule
//! that yields a title wins; its captures (title, year, edition, group,
//! subgroup, hash) are returned as a [`TitleMatch`].
//!
//! The orchestrator in [`crate::parser::unified`] builds the final
//! [`ParsedGameInfo`](crate::types::ParsedGameInfo) from that match.

use std::sync::LazyLock;

use fancy_regex::{Captures as FancyCaptures, Regex as FancyRegex};
use regex::Regex;
use tracing::{debug, trace};

use crate::error::Result;
use crate::parser::lexicon::{
    self, PLATFORM_SUFFIXES, SCENE_GROUPS, SPACED_SCENE_GROUPS, TITLE_REPACKERS, TRAILING_GROUPS,
    alternation,
};
use crate::parser::quality::QualityParser;
use crate::types::Quality;

/// Edition qualifiers such as `Director's Cut`, `Extended` or `Remastered`.
const EDITION_PATTERN: &str = concat!(
    r"\(?\b(?P<edition>(?:(?:Recut.|Extended.|Ultimate.)?",
    r"(?:Director.?s|Collector.?s|Theatrical|Ultimate|Extended|Despecialized",
    r"|(?:Special|Rouge|Final|Assembly|Imperial|Diamond|Signature|Hunter|Rekall)(?=.(?:Cut|Edition|Version))",
    r"|\d{2,3}(?:th)?.Anniversary)(?:.(?:Cut|Edition|Version))?",
    r"(?:.(?:Extended|Uncensored|Remastered|Unrated|Uncut|Open.?Matte|IMAX|Fan.?Edit))?",
    r"|(?:Uncensored|Remastered|Unrated|Uncut|Open?.Matte|IMAX|Fan.?Edit|Restored|[234]in1)))\b\)?",
);

/// Leaf names that are hashes or placeholders rather than release names.
const HASHED_RELEASE_PATTERNS: &[&str] = &[
    r"^[0-9a-zA-Z]{32}",
    r"^[a-z0-9]{24}$",
    r"^[A-Z]{11}\d{3}$",
    r"^[a-z]{12}\d{3}$",
    r"^Backup_\d{5,}S\d{2}-\d{2}$",
    r"^123$",
    r"(?i)^abc$",
    r"(?i)^abc[-_. ]xyz",
    r"(?i)^b00bs$",
];

/// One entry of the rule table.
#[derive(Debug)]
struct TitleRule {
    name: &'static str,
    re: FancyRegex,
}

/// Boundaries found by the winning rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleMatch {
    /// Name of the rule that produced the match.
    pub rule: &'static str,
    /// Primary title first, alternates after it when requested.
    pub titles: Vec<String>,
    /// Title span exactly as captured from the simplified name.
    pub title_span: String,
    pub year: i32,
    pub edition: Option<String>,
    /// Group captured by the rule itself (`-CODEX`, ` EMPRESS`).
    pub release_group: Option<String>,
    /// Leading `[subgroup]` of anime-style names.
    pub subgroup: Option<String>,
    pub hash: Option<String>,
}

/// A release name after extension removal and noise cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTitle {
    /// Input with reversed names restored; used by the classifiers.
    pub title: String,
    /// Extension removed, edge dashes trimmed, fullwidth brackets mapped.
    pub release_title: String,
    /// Release title without codec noise, site decorations or quality brackets.
    pub simple_title: String,
}

#[derive(Debug)]
pub struct TitleParser {
    rules: Vec<TitleRule>,
    hashed: Vec<Regex>,
    re_reversed: Regex,
    re_simple_noise: FancyRegex,
    re_website_prefix: Regex,
    re_website_postfix: Regex,
    re_torrent_suffix: Regex,
    re_quality_bracket: Regex,
    re_keep_bracket: Regex,
    re_unsafe_chars: Regex,
    re_aka_dotted: Regex,
    re_request_info: Regex,
    re_bracketed_aka: Regex,
    re_alternate_split: Regex,
    re_edition: FancyRegex,
    re_hardcoded_subs: FancyRegex,
    re_igdb: Regex,
    quality: QualityParser,
}

static SHARED: LazyLock<TitleParser> =
    LazyLock::new(|| TitleParser::new().expect("title rule patterns are valid"));

/// The ordered rule table. Order encodes priority; do not sort.
fn rule_patterns() -> Vec<(&'static str, String)> {
    let scene = alternation(SCENE_GROUPS);
    let spaced = alternation(SPACED_SCENE_GROUPS);
    let trailing = alternation(TRAILING_GROUPS);
    let repackers = alternation(TITLE_REPACKERS);
    let platforms = alternation(PLATFORM_SUFFIXES);
    let repack_bracket = r"\[(?:FitGirl|DODI)(?:\s+(?:Monkey\s+)?Repack)?(?:,\s*[^\]]+)?\]$";
    let year_sep = r"(?:[-_\W](?<![)\[!]))*";

    vec![
        (
            "scene_version_platform",
            format!(r"(?i)^(?P<title>.+?)[._]v\d+(?:[._]\d+)*[._](?:{platforms})-(?P<releasegroup>{scene})$"),
        ),
        (
            "scene_platform",
            format!(r"(?i)^(?P<title>.+?)\.(?:{platforms})-(?P<releasegroup>{scene})$"),
        ),
        (
            "scene_german",
            r"(?i)^(?P<title>.+?)[._]German-(?P<releasegroup>DELiGHT|RUNE|TENOKE|CODEX|PLAZA|SKIDROW)$".to_string(),
        ),
        (
            "update_version_group",
            r"(?i)^(?P<title>(?![(\[]).+?)[._\s](?:Update|Patch)[._\s]+v?[\d.]+.*?-(?P<releasegroup>[A-Za-z0-9_]+)$".to_string(),
        ),
        (
            "gog_version_group",
            r"(?i)^(?P<title>(?![(\[]).+?)[._]v\d+[^-]*[._]GOG-(?P<releasegroup>DELiGHT)$".to_string(),
        ),
        (
            "version_group",
            r"(?i)^(?P<title>(?![(\[]).+?(?<![._]Update))[._]v(?P<version>\d+(?:\.\d+)*[a-z]*\d*)[._-](?P<releasegroup>[A-Za-z0-9_]+)$".to_string(),
        ),
        (
            "date_version",
            r"(?i)^(?P<title>(?![(\[]).+?)\s+v\d{4}\.\d{2}\.\d{2}$".to_string(),
        ),
        (
            "date_version_dmy",
            r"(?i)^(?P<title>(?![(\[]).+?)\s+v\d{2}\.\d{2}\.\d{4}$".to_string(),
        ),
        (
            "paren_version",
            r"(?i)^(?P<title>(?![(\[]).+?)\s*\(v\d+(?:\.\d+)+\)$".to_string(),
        ),
        (
            "paren_metadata",
            format!(r"(?i)^(?P<title>(?![(\[]).+?)\s*\(v\d+[^)]*\)(?:\s*\[(?:{repackers})[-_. ]*(?:Monkey\s+)?Repack\])?\s*$"),
        ),
        (
            "r4v3n",
            r"(?i)^(?P<title>(?![(\[]).+?)\s+(?P<releasegroup>r4v3n)\b".to_string(),
        ),
        (
            "repack_year_colon",
            format!(r"(?i)^(?P<title>.+?\(\d{{4}}\):\s*[^(]+?)\s*\([^)]+\)\s*{repack_bracket}"),
        ),
        (
            "repack_year",
            format!(r"(?i)^(?P<title>[^(]+?)\s*\(\d{{4}}\)[^(\[]*\([^)]+\)\s*{repack_bracket}"),
        ),
        (
            "repack_paren",
            format!(r"(?i)^(?P<title>[^(]+?)\s*(?:\([^)]*\)\s*)+{repack_bracket}"),
        ),
        (
            "repack_bracket",
            format!(r"(?i)^(?P<title>.+?)\s+{repack_bracket}"),
        ),
        (
            "portable_bracket",
            r"(?i)^(?P<title>[^(\[]+?)(?:\s*\((?P<year>\d{4})\))?(?:\s*\+[^\[]+)?\s*\[(?:Crack\s*V?\d*\.?\d*\s*)?\]?\s*\[PORTABLE\]$".to_string(),
        ),
        (
            "crack_bracket",
            r"(?i)^(?P<title>[^(\[]+?)(?:\s*\((?P<year>\d{4})\))?\s*\[CRACK\s*[\d.]+\]".to_string(),
        ),
        (
            "crackfix",
            r"(?i)^(?P<title>(?![(\[]).+?)\s+(?:CRACKFIX|PROPER)-(?P<releasegroup>\w+)$".to_string(),
        ),
        (
            "simple_paren_version",
            r"(?i)^(?P<title>[^(\[]+?)\s*\(v[\d.]+(?:\s*[&+][^)]+)?\)$".to_string(),
        ),
        (
            "update_keyword",
            r"(?i)^(?!DL\s)(?P<title>(?![(\[])(?:(?![\s._]v\d).)+?)[.\s]+(?:Update|Patch|Language[\s._-]?Pack)(?:[.\s]+v?[\d.]|\s*[-_]|$)".to_string(),
        ),
        (
            "space_version",
            r"(?i)^(?P<title>(?![(\[]).+?)\s+v\d+(?:\.\d+)*[a-z]*\d*$".to_string(),
        ),
        (
            "year_repacker",
            format!(r"(?i)^(?P<title>(?![(\[]).+?)[._](?P<year>(?:19|20)\d{{2}})[-_](?:{repackers})(?:[._-]?Repack)?"),
        ),
        (
            "spaced_scene_group",
            format!(r"(?i)^(?P<title>.+?)\s+(?P<releasegroup>{spaced})$"),
        ),
        (
            "russian_repack",
            concat!(
                r"(?i)^(?P<title>(?![(\[]).+?)(?=\s+v\s*\d|\s+(?:19|20)\d{2}\s+PC)",
                r"(?:\s+v[\s\d.]+(?:[a-z]+\d*)*(?:\s+(?:\d+\s+)?DLCs?)?)?(?:\s+(?P<year>(?:19|20)\d{2}))?",
                r"\s+PC\s+(?:RePack|Rip)\s+(?:от|by|from)\s+",
                r"(?:xatab|R\.?G\.?\s*(?:Механики|Механіки|Mechanics|Catalyst|Freedom|SteamGames)?",
                r"|FitGirl|DODI|Chovka|Decepticon|Wanterlude|Let.?sPlay)",
            )
            .to_string(),
        ),
        (
            "switch",
            r"(?i)^(?:Nintendo\s+Switch\s+)?(?P<title>(?![(\[]).+?)(?=\s+v\d|\s+(?:NSP|NSZ|Switch\s+Emulators?|Ryujinx|Suyu)\b).*?(?:NSP|NSZ|Switch\s+Emulators?|Ryujinx|Suyu)".to_string(),
        ),
        (
            "dl_gog",
            r"(?i)^DL\s+(?P<title>(?![(\[]).+?)\s+L\s+(?:RUS|ENG|MULTi).+\bGOG$".to_string(),
        ),
        (
            "gog",
            concat!(
                r"(?i)^(?P<title>(?![(\[]).+?)(?:\s+(?:live|v\s*\d|win|mac|linux|\d{4}\s+",
                r"(?:Arcade|RPG|Adventure|FPS|TPS|Action|Strategy|Puzzle|Simulation|Sports|Racing|MMORPG)))",
                r"\b.+?\bGOG\b",
            )
            .to_string(),
        ),
        (
            "dl_language",
            r"(?i)^(?:DL\s+)?(?P<title>(?![(\[]).+?)\s+(?:P\s+)?(?:L\s+)?(?:RUS|ENG|MULTi)\b".to_string(),
        ),
        (
            "year_pc_repack",
            r"(?i)^(?P<title>(?![(\[]).+?)(?=\s+(?:19|20)\d{2}\s+PC).*?(?:DODI|FitGirl)[-_. ]?Repack".to_string(),
        ),
        (
            "flexible_version",
            r"(?i)^(?P<title>(?![(\[]).+?(?<!\sUpdate)(?<!\sPatch))\s+v\s*\d+[\s._]\d+".to_string(),
        ),
        (
            "build",
            r"(?i)^(?P<title>(?![(\[]).+?)(?:\s+Build\s+\d+)".to_string(),
        ),
        (
            "edition_tracker",
            concat!(
                r"(?i)^(?P<title>(?![(\[]).+?(?:Deluxe|Ultimate|Standard|Premium|Gold|Collectors?|Limited|Complete",
                r"|GOTY|Game[._\-\s]?of[._\-\s]?the[._\-\s]?Year|Definitive|Anniversary|Enhanced|Remastered",
                r"|Digital\s+Deluxe|Directors?[._\-\s]?Cut)[._\-\s]*Edition)",
                r"(?:\s+v[\d\s._]+|\s+\d+\s+DLCs?|\s+All\s+DLCs?|\s+MULTi\d+|\s+Build\s+\d+)",
            )
            .to_string(),
        ),
        (
            "fitgirl_version",
            r"(?i)^(?P<title>(?![(\[]).+?)(?=\s+v\d).*?FitGirl\s+(?:Monkey\s+)?Repack".to_string(),
        ),
        (
            "bonus_repack",
            r"(?i)^(?P<title>(?![(\[]).+?)(?=\s+Bonus\s+(?:DLCs?|Content)\s+[^\[\(]).*?(?:FitGirl|DODI)[-_. ]?Repack".to_string(),
        ),
        (
            "multi_repacker",
            concat!(
                r"(?i)^(?P<title>(?![(\[]).+?)(?=\s+(?:198\d|199\d|20[0-4]\d)\s+MULTi",
                r"|\s+MULTi\d+[-\s]+(?:ElAmigos|FitGirl|DODI)).*?MULTi\d+[-\s]+(?:ElAmigos|FitGirl|DODI)",
            )
            .to_string(),
        ),
        (
            "multi_or_repack",
            format!(r"(?i)^(?P<title>(?![(\[]).+?)(?:[-_. ]+(?:MULTi\d+|(?:{repackers})[-_. ]*Repack))"),
        ),
        (
            "scene_portable",
            format!(r"(?i)^(?P<title>(?![(\[]).+?)\s+(?P<releasegroup>{spaced}|HI2U)\s+PORTABLE$"),
        ),
        (
            "underscore_platform",
            format!(r"(?i)^(?P<title>(?![(\[]).+?_(?:{platforms}))-(?P<releasegroup>{scene})$"),
        ),
        (
            "dash_scene_group",
            format!(r"(?i)^(?P<title>(?![(\[]).+?)-(?P<releasegroup>{scene})$"),
        ),
        (
            "trailing_group",
            format!(
                r"(?i)^(?P<title>(?![(\[]).+?)(?:[._]v\d+(?:[._]\d+)*)?(?:[._]REPACK)?[-_. ](?P<releasegroup>{trailing})(?:[-_. ]?REPACK)?(?:\.[a-z0-9]{{2,4}})?$"
            ),
        ),
        (
            "russian_tracker",
            r"(?i)^\[(?:DL|UL|SP|CD|DVD|P|L)\]\s*(?P<title>[^\[\]]+?)\s*(?:\(\d+\)\s*)?(?:\[[^\]]*\]\s*)*\((?P<year>(?:1[89]|20)\d{2})".to_string(),
        ),
        (
            "anime_year",
            format!(
                r"(?i)^(?:\[(?P<subgroup>.+?)\][-_. ]?)(?P<title>(?![(\[]).+?)?(?:{year_sep}(?P<year>(?:1[89]|20)\d{{2}}(?!p|i|x|\d+|\]|\W\d+)))+.*?(?P<hash>\[\w{{8}}\])?(?:$|\.)"
            ),
        ),
        (
            "anime_version_hash",
            r"(?i)^(?:\[(?P<subgroup>.+?)\][-_. ]?)(?P<title>(?![(\[]).+?)v\d{1,2}[-_. ](?:\[.*)?(?:[\[(][^])])?.*?(?P<hash>\[\w{8}\])(?:$|\.)".to_string(),
        ),
        (
            "anime_brackets_hash",
            r"(?i)^(?:\[(?P<subgroup>.+?)\][-_. ]?)(?P<title>(?![(\[]).+?)\[.*?(?P<hash>\[\w{8}\])(?:$|\.)".to_string(),
        ),
        (
            "anime_paren_hash",
            r"(?i)^(?:\[(?P<subgroup>.+?)\][-_. ]?)(?P<title>(?![(\[]).+)(?:[\[(][^])]).*?(?P<hash>\[\w{8}\])(?:$|\.)".to_string(),
        ),
        (
            "german_tracker",
            format!(
                r"(?i)^(?P<title>(?![(\[])(?:(?!(?:19|20)\d{{2}}).)+?)(?:\W|_)(?:{EDITION_PATTERN}.{{1,3}})?(?<!Good[_ .-])(?<!The[_ .-])(?:German|TrueFrench).+?(?=(?:19|20)\d{{2}}|$)(?P<year>(?:19|20)\d{{2}}(?!p|i|\d+|\]|\W\d+))?(?:\W+|_|$)(?!\\)"
            ),
        ),
        (
            "edition_year",
            format!(
                r"(?i)^(?P<title>(?![(\[]).+?)?(?:{year_sep}{EDITION_PATTERN}.{{1,3}}(?P<year>(?:1[89]|20)\d{{2}}(?!p|i|\d+|\]|\W\d+)))+(?:\W+|_|$)(?!\\)"
            ),
        ),
        (
            "year",
            format!(
                r"(?i)^(?P<title>(?![(\[]).+?)?(?:{year_sep}(?P<year>(?:1[89]|20)\d{{2}}(?!p|i|(?:1[89]|20)\d{{2}}|\]|\W(?:1[89]|20)\d{{2}})))+(?:\W+|_|$)(?!\\)"
            ),
        ),
        (
            "bracket_tag",
            r"(?i)^(?P<title>.+?)?(?:(?:[-_\W](?<![()\[!]))*(?P<year>\[\w *\]))+(?:\W+|_|$)(?!\\)".to_string(),
        ),
        (
            "bracket_year",
            r"(?i)^(?P<title>(?![(\[]).+?)?(?:(?:[-_\W](?<![)!]))*(?P<year>(?:1[89]|20)\d{2}(?!p|i|\d+|\W\d+)))+(?:\W+|_|$)(?!\\)".to_string(),
        ),
        (
            "last_resort_year",
            format!(
                r"(?i)^(?P<title>.+?)?(?:{year_sep}(?P<year>(?:1[89]|20)\d{{2}}(?!p|i|\d+|\]|\W\d+)))+(?:\W+|_|$)(?!\\)"
            ),
        ),
        (
            "dash_caps_group",
            r"^(?P<title>[A-Za-z0-9][A-Za-z0-9._-]*?[A-Za-z0-9])-(?P<releasegroup>[A-Z]{4,})$".to_string(),
        ),
        (
            "plain_name",
            r"^(?P<title>[A-Z][a-z]+(?:[A-Z][a-z]+)*(?:(?::\s+|\s+)[A-Za-z][a-z]+(?:[A-Z][a-z]+)*)*(?:\s+(?:\d{1,4}|[IVXLCDM]+))?)$".to_string(),
        ),
        ("year_first", YEAR_FIRST_RULE.to_string()),
    ]
}

/// Names that lead with the year, e.g. `(2018) Game Name`. Tried last.
const YEAR_FIRST_RULE: &str =
    r"^(?:(?:[-_\W](?<![)!]))*(?P<year>(?:19|20)\d{2}(?!p|i|\d+|\W\d+)))+(?:\W+|_|$)(?P<title>.+?)?$";

fn captures<'t>(re: &FancyRegex, text: &'t str) -> Option<FancyCaptures<'t>> {
    re.captures(text).ok().flatten()
}

fn group<'t>(caps: &FancyCaptures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}

impl TitleParser {
    pub fn new() -> Result<Self> {
        let rules = rule_patterns()
            .into_iter()
            .map(|(name, pattern)| {
                Ok(TitleRule {
                    name,
                    re: FancyRegex::new(&pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let hashed = HASHED_RELEASE_PATTERNS
            .iter()
            .map(|pattern| Ok(Regex::new(pattern)?))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            hashed,
            re_reversed: Regex::new(r"(?:^|[-._ ])(?:p027|p0801)[-._ ]")?,
            re_simple_noise: FancyRegex::new(concat!(
                r"(?i)(?:(?:480|540|576|720|1080|2160)[ip]|[xh][\W_]?26[45]|DD\W?5\W1|[<>?*]",
                r"|848x480|1280x720|1920x1080|3840x2160|4096x2160|(?:8|10)b(?:it)?|10-bit)\s*?(?![a-b0-9])",
            ))?,
            re_website_prefix: Regex::new(
                r"(?i)^(?:[\[(]\s*)?(?:www\.)?[-a-z0-9]{1,256}\.(?:[a-z]{2,6}\.[a-z]{2,6}|xn--[a-z0-9-]{4,}|[a-z]{2,})\b(?:\s*[\])]|[ -]{2,})[ -]*",
            )?,
            re_website_postfix: Regex::new(
                r"(?i)(?:\[\s*)?(?:www\.)?[-a-z0-9]{1,256}\.(?:xn--[a-z0-9-]{4,}|[a-z]{2,6})\b\s*\]$",
            )?,
            re_torrent_suffix: Regex::new(r"(?i)\[(?:ettv|rartv|rarbg|cttv|publichd)\]$")?,
            re_quality_bracket: Regex::new(r"(?i)\[[a-z0-9 ._-]+\]$")?,
            re_keep_bracket: Regex::new(r"(?i)\b(?:FitGirl|DODI)\b")?,
            re_unsafe_chars: Regex::new(r"\s*[<>?*|]")?,
            re_aka_dotted: Regex::new(r"(?i) +A\.K\.A\. +")?,
            re_request_info: Regex::new(r"^(?:\[.+?\])+")?,
            re_bracketed_aka: Regex::new(r"(?i)^(?P<main>.*) \( *AKA +(?P<alt>.*)\)")?,
            re_alternate_split: Regex::new(r"(?i) +(?:AKA|/) +")?,
            re_edition: FancyRegex::new(&format!("(?i){EDITION_PATTERN}"))?,
            re_hardcoded_subs: FancyRegex::new(
                r"(?i)\b(?:(?P<hcsub>\w+(?<!SOFT)(?<!MULTI)(?<!HORRIBLE)SUBS?)|(?P<hc>HC|SUBBED))\b",
            )?,
            re_igdb: Regex::new(r"(?i)igdb(?:id)?-(?P<igdbid>\d+)")?,
            quality: QualityParser::new()?,
        })
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Rejects spam, names without alphanumerics and hashed leaf names.
    pub fn is_parseable(&self, title: &str) -> bool {
        let lower = title.to_lowercase();
        if lower.contains("password") && lower.contains("yenc") {
            return false;
        }
        if !title.chars().any(char::is_alphanumeric) {
            return false;
        }

        let stem = lexicon::strip_extension(title).unwrap_or(title);
        if self.hashed.iter().any(|re| re.is_match(stem)) {
            debug!(title, "rejected hashed release name");
            return false;
        }
        true
    }

    /// Restores reversed names, strips the extension and removes noise.
    pub fn prepare(&self, title: &str) -> PreparedTitle {
        let title = if self.re_reversed.is_match(title) {
            let stem = lexicon::strip_extension(title).unwrap_or(title);
            let reversed: String = stem.chars().rev().collect();
            let restored = format!("{reversed}{}", &title[stem.len()..]);
            debug!(%restored, "reversed name detected");
            restored
        } else {
            title.to_string()
        };

        let release_title = lexicon::strip_extension(&title)
            .unwrap_or(&title)
            .trim_matches(['-', '_'])
            .replace('【', "[")
            .replace('】', "]");

        let simple = strip_fancy(&self.re_simple_noise, &release_title);
        let simple = self.re_website_prefix.replace(&simple, "");
        let simple = self.re_website_postfix.replace(&simple, "");
        let simple = self.re_torrent_suffix.replace(&simple, "");
        let simple_title = self.clean_quality_bracket(&simple);
        trace!(%simple_title, "simplified release name");

        PreparedTitle {
            title,
            release_title,
            simple_title,
        }
    }

    /// Drops a trailing `[...]` tag that is only a quality marker. Repack
    /// brackets stay because several rules anchor on them.
    fn clean_quality_bracket(&self, simple: &str) -> String {
        let Some(m) = self.re_quality_bracket.find(simple) else {
            return simple.to_string();
        };
        let tag = m.as_str();
        if self.re_keep_bracket.is_match(tag) || self.quality.parse(tag).quality == Quality::Unknown {
            return simple.to_string();
        }
        simple[..m.start()].to_string()
    }

    /// Runs the rule table over a simplified name.
    pub fn match_rules(
        &self,
        simple_title: &str,
        include_alternate_titles: bool,
    ) -> Option<TitleMatch> {
        for rule in &self.rules {
            let Some(caps) = captures(&rule.re, simple_title) else {
                continue;
            };
            if let Some(found) = self.build_match(rule.name, &caps, include_alternate_titles) {
                debug!(rule = rule.name, title = %found.titles[0], "title rule matched");
                return Some(found);
            }
        }
        None
    }

    fn build_match(
        &self,
        rule: &'static str,
        caps: &FancyCaptures<'_>,
        include_alternate_titles: bool,
    ) -> Option<TitleMatch> {
        let span = group(caps, "title")?;
        if span == "(" {
            return None;
        }

        let name = span.replace('_', " ");
        let name = self.re_aka_dotted.replace_all(&name, " AKA ");
        let name = self.re_request_info.replace(&name, "");
        let name = join_title_parts(name.trim_matches(' '));
        if name.is_empty() {
            return None;
        }

        let mut titles = vec![name.clone()];
        if include_alternate_titles {
            let unbracketed = self.re_bracketed_aka.replace(&name, "$main AKA $alt");
            titles.extend(
                self.re_alternate_split
                    .split(&unbracketed)
                    .filter(|alt| !alt.trim().is_empty() && *alt != name)
                    .map(str::to_string),
            );
        }

        let hash = group(caps, "hash")
            .map(|hash| hash.trim_matches(['[', ']']))
            .filter(|hash| *hash != "1280x720")
            .map(str::to_string);

        Some(TitleMatch {
            rule,
            titles,
            title_span: span.to_string(),
            year: group(caps, "year")
                .and_then(|year| year.parse().ok())
                .unwrap_or(0),
            edition: group(caps, "edition").map(|edition| edition.replace('.', " ")),
            release_group: group(caps, "releasegroup")
                .filter(|g| !g.trim().is_empty())
                .map(str::to_string),
            subgroup: group(caps, "subgroup")
                .filter(|g| !g.trim().is_empty())
                .map(str::to_string),
            hash,
        })
    }

    /// Release title with `<>?*|` and site decorations removed.
    pub fn simplify_release_title(&self, release_title: &str) -> String {
        let simple = self.re_unsafe_chars.replace_all(release_title, "");
        let simple = self.re_website_prefix.replace(&simple, "");
        let simple = self.re_website_postfix.replace(&simple, "");
        self.re_torrent_suffix.replace(&simple, "").into_owned()
    }

    /// First edition qualifier in `text`, dots turned into spaces.
    pub fn edition(&self, text: &str) -> Option<String> {
        let caps = captures(&self.re_edition, text)?;
        group(&caps, "edition")
            .filter(|edition| !edition.trim().is_empty())
            .map(|edition| edition.replace('.', " "))
    }

    /// Hard-coded subtitle marker; the last one in the name wins.
    pub fn hardcoded_subs(&self, text: &str) -> Option<String> {
        let caps = self
            .re_hardcoded_subs
            .captures_iter(text)
            .map_while(|caps| caps.ok())
            .last()?;
        if let Some(subs) = group(&caps, "hcsub") {
            return Some(subs.to_string());
        }
        group(&caps, "hc").map(|_| "Generic Hardcoded Subs".to_string())
    }

    /// Catalog id from an `igdb-1234` / `igdbid-1234` tag, `0` when absent.
    pub fn igdb_id(&self, text: &str) -> i32 {
        self.re_igdb
            .captures(text)
            .and_then(|caps| caps["igdbid"].parse().ok())
            .unwrap_or(0)
    }
}

/// Removes every match of a look-around pattern. A backtracking error
/// leaves the remainder of the text as it was.
fn strip_fancy(re: &FancyRegex, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for found in re.find_iter(text).map_while(|found| found.ok()) {
        out.push_str(&text[last..found.start()]);
        last = found.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Turns dot-separated parts into words, keeping dotted acronyms
/// (`R.I.P.D.`, `U.N.C.L.E.`) and `Dr.` intact.
fn join_title_parts(name: &str) -> String {
    let parts: Vec<&str> = name.split('.').collect();
    let is_number = |part: &str| part.trim().parse::<i64>().is_ok();
    let mut joined = String::with_capacity(name.len() + 4);
    let mut previous_acronym = false;

    for (n, part) in parts.iter().enumerate() {
        let next = parts.get(n + 1).copied().unwrap_or("");
        let lower = part.to_lowercase();
        let single = part.chars().count() == 1;
        let has_next = n + 1 < parts.len();

        let acronym = if single && lower != "a" && !is_number(part) {
            previous_acronym || (has_next && !is_number(next))
        } else if lower == "a" {
            previous_acronym || next.chars().count() == 1
        } else {
            lower == "dr"
        };

        if acronym {
            joined.push_str(part);
            joined.push('.');
            previous_acronym = true;
        } else {
            if previous_acronym {
                joined.push(' ');
                previous_acronym = false;
            }
            joined.push_str(part);
            joined.push(' ');
        }
    }

    joined.trim_matches(' ').to_string()
}

/// First edition qualifier in `text`.
pub fn parse_edition(text: &str) -> Option<String> {
    TitleParser::shared().edition(text)
}

/// Hard-coded subtitle marker of `title`, if any.
pub fn parse_hardcoded_subs(title: &str) -> Option<String> {
    TitleParser::shared().hardcoded_subs(title)
}

/// Catalog id embedded in `title`, `0` when absent.
pub fn parse_igdb_id(title: &str) -> i32 {
    TitleParser::shared().igdb_id(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(title: &str) -> TitleMatch {
        let parser = TitleParser::shared();
        let prepared = parser.prepare(title);
        parser
            .match_rules(&prepared.simple_title, false)
            .unwrap_or_else(|| panic!("no rule matched {title}"))
    }

    #[test]
    fn rule_table_compiles() {
        assert!(TitleParser::new().is_ok());
    }

    #[test]
    fn scene_version_and_group() {
        let found = matched("Cyberpunk.2077.v2.1-CODEX");
        assert_eq!(found.rule, "version_group");
        assert_eq!(found.titles, vec!["Cyberpunk 2077"]);
        assert_eq!(found.release_group.as_deref(), Some("CODEX"));
    }

    #[test]
    fn dash_group_keeps_hyphenated_title() {
        let found = matched("Half-Life.2-RELOADED");
        assert_eq!(found.rule, "dash_scene_group");
        assert_eq!(found.titles, vec!["Half-Life 2"]);
    }

    #[test]
    fn date_versions_are_not_years() {
        let found = matched("Hades II v2025.08.03");
        assert_eq!(found.rule, "date_version");
        assert_eq!(found.titles, vec!["Hades II"]);
        assert_eq!(found.year, 0);

        let found = matched("Hades II (v2025.06.18)");
        assert_eq!(found.rule, "paren_version");
        assert_eq!(found.titles, vec!["Hades II"]);
    }

    #[test]
    fn update_keyword_stops_title() {
        let found = matched("Baldurs Gate 3 Update v4 1 1 6848561 RUNE");
        assert_eq!(found.rule, "update_keyword");
        assert_eq!(found.titles, vec!["Baldurs Gate 3"]);
    }

    #[test]
    fn repack_tool_suffixes() {
        let found = matched("Cyberpunk 2077 MULTi19-ElAmigos");
        assert_eq!(found.rule, "multi_repacker");
        assert_eq!(found.titles, vec!["Cyberpunk 2077"]);

        let found = matched("God of War 2022 MULTi19-ElAmigos");
        assert_eq!(found.titles, vec!["God of War"]);
    }

    #[test]
    fn year_rule() {
        let found = matched("Game.2018.DVDRip.XviD-GAMARR");
        assert_eq!(found.rule, "year");
        assert_eq!(found.titles, vec!["Game"]);
        assert_eq!(found.year, 2018);
    }

    #[test]
    fn acronyms_are_rejoined() {
        assert_eq!(join_title_parts("R.I.P.D"), "R.I.P.D.");
        assert_eq!(join_title_parts("The.Game.from.U.N.C.L.E"), "The Game from U.N.C.L.E.");
        assert_eq!(join_title_parts("Dr.Strangelove"), "Dr. Strangelove");
        assert_eq!(join_title_parts("Dragon.Ball.Z"), "Dragon Ball Z");
        assert_eq!(join_title_parts("Half-Life.2"), "Half-Life 2");
    }

    #[test]
    fn alternate_titles_split_on_aka() {
        let parser = TitleParser::shared();
        let prepared = parser.prepare("Mon cousin a.k.a. My Cousin 2020 1080p Blu-ray DD 5.1 x264.mkv");
        let found = parser
            .match_rules(&prepared.simple_title, true)
            .expect("year rule matches");
        assert_eq!(
            found.titles,
            vec!["Mon cousin AKA My Cousin", "Mon cousin", "My Cousin"]
        );
        assert_eq!(found.year, 2020);
    }

    #[test]
    fn anime_subgroup_and_hash() {
        let found = matched("[MTBB] Kimi no Na wa. (2016) v2 [97681524].mkv");
        assert_eq!(found.rule, "anime_year");
        assert_eq!(found.titles, vec!["Kimi no Na wa"]);
        assert_eq!(found.subgroup.as_deref(), Some("MTBB"));
        assert_eq!(found.year, 2016);
        assert_eq!(found.hash.as_deref(), Some("97681524"));
    }

    #[test]
    fn year_leading_names_match_last() {
        let found = matched("(1995) Game Name");
        assert_eq!(found.rule, "year_first");
        assert_eq!(found.titles, vec!["Game Name"]);
        assert_eq!(found.year, 1995);
    }

    #[test]
    fn site_tags_are_removed_from_release_title() {
        let parser = TitleParser::shared();
        assert_eq!(
            parser.simplify_release_title("Game.Title.2010.720p.BluRay.x264.-[YTS.LT]"),
            "Game.Title.2010.720p.BluRay.x264.-"
        );
        assert_eq!(
            parser.simplify_release_title("[ www.Torrenting.com ] - Game.2008.720p-GRP"),
            "Game.2008.720p-GRP"
        );
        assert_eq!(parser.simplify_release_title("Game <Title>?"), "GameTitle");
    }

    #[test]
    fn rejects_unparseable_names() {
        let parser = TitleParser::shared();
        assert!(!parser.is_parseable("password yenc"));
        assert!(!parser.is_parseable("---"));
        assert!(!parser.is_parseable("AHFMZXGHEWD660.mkv"));
        assert!(!parser.is_parseable("123"));
        assert!(parser.is_parseable("Game.2018.DVDRip.XviD-GAMARR"));
    }

    #[test]
    fn simplification_strips_noise() {
        let parser = TitleParser::shared();
        let prepared = parser.prepare("www.Torrenting.com - Game.2008.720p.x264-GRP.mkv");
        assert_eq!(prepared.release_title, "www.Torrenting.com - Game.2008.720p.x264-GRP");
        assert!(prepared.simple_title.starts_with("Game.2008"));
        assert!(!prepared.simple_title.contains("720p"));

        let prepared = parser.prepare("Leaving Game by Game (1897) [DVD].mp4");
        assert_eq!(prepared.simple_title.trim_end(), "Leaving Game by Game (1897)");

        let prepared = parser.prepare("Game Name [FitGirl Repack]");
        assert_eq!(prepared.simple_title, "Game Name [FitGirl Repack]");
    }

    #[test]
    fn reversed_names_are_restored() {
        let prepared = TitleParser::shared().prepare("PRG-462x.p0801.8102.emaG.mkv");
        assert_eq!(prepared.release_title, "Game.2018.1080p.x264-GRP");
    }

    #[test]
    fn edition_and_subs() {
        assert_eq!(
            parse_edition("A.Game.2018.Directors.Cut.1080p").as_deref(),
            Some("Directors Cut")
        );
        assert_eq!(parse_edition("A Game 2018"), None);
        assert_eq!(
            parse_hardcoded_subs("Game.2018.KORSUB.720p").as_deref(),
            Some("KORSUB")
        );
        assert_eq!(
            parse_hardcoded_subs("Game.2018.HC.720p").as_deref(),
            Some("Generic Hardcoded Subs")
        );
        assert_eq!(parse_hardcoded_subs("Game.2018.SOFTSUBS.720p"), None);
        assert_eq!(parse_hardcoded_subs("Game.2018.MULTISUBS.720p"), None);
    }

    #[test]
    fn igdb_ids() {
        assert_eq!(parse_igdb_id("Game (2020) {igdb-1234}"), 1234);
        assert_eq!(parse_igdb_id("Game (2020) [igdbid-99]"), 99);
        assert_eq!(parse_igdb_id("Game (2020)"), 0);
    }
}
