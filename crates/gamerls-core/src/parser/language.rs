//! # Language Parser
//!
//! Dictionary-driven language detection over release names, plus a
//! separate lookup for subtitle file suffixes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::types::Language;

/// `(language, pattern, case_sensitive)`. Output follows table order, so
/// Spanish-Latino sits ahead of generic Spanish.
const LANGUAGE_TOKENS: &[(Language, &str, bool)] = &[
    (Language::SpanishLatino, r"latino", false),
    (Language::English, r"english|eng|ingl[eé]s|inglese", false),
    (Language::English, r"EN", true),
    (Language::French, r"french|fran[cç]ais|truefrench|vff|vfq|vf2|vfi|vf|fra|fre", false),
    (Language::French, r"FR", true),
    (Language::Spanish, r"spanish|espa[ñn]ol|castellano|esp|spa", false),
    (Language::Spanish, r"ES", true),
    (Language::German, r"german|swissgerman|deutsch|ger|videomann", false),
    (Language::German, r"DE", true),
    (Language::Italian, r"italian|italiano|ita", false),
    (Language::Italian, r"IT", true),
    (Language::Danish, r"danish|dansk", false),
    (Language::Dutch, r"dutch|nederlands", false),
    (Language::Dutch, r"NL", true),
    (Language::Japanese, r"japanese|jap|jpn", false),
    (Language::Icelandic, r"icelandic", false),
    (Language::Chinese, r"chinese|mandarin|cantonese|chs|cht", false),
    (Language::Russian, r"russian|rus", false),
    (Language::Russian, r"RU", true),
    (
        Language::Polish,
        r"polish|polski|pl[-._ ]?dub|dub[-._ ]?pl|pl[-._ ]?lek|lek[-._ ]?pl",
        false,
    ),
    (Language::Polish, r"PL", true),
    (Language::Vietnamese, r"vietnamese|vie", false),
    (Language::Swedish, r"swedish|svenska|swe", false),
    (Language::Norwegian, r"norwegian|norsk", false),
    (Language::Finnish, r"finnish|suomi", false),
    (Language::Turkish, r"turkish", false),
    (Language::PortugueseBr, r"dublado|brazilian|pt[-._ ]?br", false),
    (Language::Portuguese, r"portuguese|portugu[eê]s", false),
    (Language::Flemish, r"flemish", false),
    (Language::Greek, r"greek", false),
    (Language::Korean, r"korean|kor", false),
    (Language::Hungarian, r"hungarian|hun", false),
    (Language::Hungarian, r"HU", true),
    (Language::Hebrew, r"hebrew|heb[-._ ]?dub\w*", false),
    (Language::Lithuanian, r"lithuanian", false),
    (Language::Lithuanian, r"LT", true),
    (Language::Czech, r"czech", false),
    (Language::Czech, r"CZ", true),
    (Language::Hindi, r"hindi|hin", false),
    (Language::Romanian, r"romanian|rodubbed|rodub", false),
    (Language::Thai, r"thai", false),
    (Language::Bulgarian, r"bulgarian|bgaudio|bg[-._ ]audio", false),
    (Language::Bulgarian, r"BG", true),
    (Language::Arabic, r"arabic", false),
    (Language::Ukrainian, r"ukrainian|(?:\d+x)?ukr", false),
    (Language::Persian, r"persian|farsi", false),
    (Language::Bengali, r"bengali", false),
    (Language::Slovak, r"slovak", false),
    (Language::Slovak, r"SK", true),
    (Language::Latvian, r"latvian|lav|lat|lv", false),
    (Language::Catalan, r"catalan|catalán|catala|català", false),
    (Language::Croatian, r"croatian", false),
    (Language::Serbian, r"serbian", false),
    (Language::Bosnian, r"bosnian", false),
    (Language::Estonian, r"estonian", false),
    (Language::Tamil, r"tamil", false),
    (Language::Indonesian, r"indonesian", false),
    (Language::Telugu, r"telugu|tel", false),
    (Language::Macedonian, r"macedonian", false),
    (Language::Slovenian, r"slovenian|slovene", false),
    (Language::Malayalam, r"malayalam", false),
    (Language::Kannada, r"kannada", false),
    (Language::Albanian, r"albanian", false),
    (Language::Afrikaans, r"afrikaans", false),
    (Language::Marathi, r"marathi", false),
    (Language::Tagalog, r"tagalog|filipino", false),
    (Language::Urdu, r"urdu", false),
    (Language::Romansh, r"romansh|rumantsch|romansch", false),
    (Language::Mongolian, r"mongolian|khalkha", false),
    (Language::Georgian, r"georgian|geo", false),
    (Language::Georgian, r"KA", true),
    (Language::Original, r"original|orig", false),
];

/// Tokens that look like languages but are not audio languages.
const DENY_PATTERN: &str = r"(?i)\bDTS[-._ ]?ES\b|\bPL[-._ ]?SUBS?\b|\bSUBS?[-._ ]?PL\b";

/// Subtitle tags that may follow the language code in a subtitle file name.
const SUBTITLE_TAGS: &str = "full|forced|foreign|default|cc|psdh|sdh";

#[derive(Debug)]
pub struct LanguageParser {
    tokens: Vec<(Language, Regex)>,
    re_deny: Regex,
    re_cyrillic: Regex,
    re_dual: Regex,
    re_multi: Regex,
    re_subtitle: Regex,
}

static SHARED: LazyLock<LanguageParser> =
    LazyLock::new(|| LanguageParser::new().expect("language patterns are valid"));

impl LanguageParser {
    pub fn new() -> Result<Self> {
        let tokens = LANGUAGE_TOKENS
            .iter()
            .map(|&(language, pattern, case_sensitive)| {
                let flags = if case_sensitive { "" } else { "(?i)" };
                Ok((language, Regex::new(&format!(r"{flags}\b(?:{pattern})\b"))?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tokens,
            re_deny: Regex::new(DENY_PATTERN)?,
            re_cyrillic: Regex::new(r"\p{Cyrillic}")?,
            re_dual: Regex::new(r"\bDL\b")?,
            re_multi: Regex::new(r"\bML\b")?,
            re_subtitle: Regex::new(&format!(
                r"(?i)^.+?[-_. ](?P<code>[a-z]{{2,3}}(?:-[a-z]{{2}})?)(?:[-_. ](?:{SUBTITLE_TAGS}))*$"
            ))?,
        })
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Languages named in `title`, in dictionary order. Never empty.
    pub fn parse(&self, title: &str) -> Vec<Language> {
        let cleaned = self.re_deny.replace_all(title, " ");
        let mut found: Vec<Language> = Vec::new();

        for (language, re) in &self.tokens {
            if !found.contains(language) && re.is_match(&cleaned) {
                found.push(*language);
            }
        }

        if !found.contains(&Language::Russian) && self.re_cyrillic.is_match(&cleaned) {
            found.push(Language::Russian);
        }

        if found.contains(&Language::German) {
            self.apply_german_original_rule(&cleaned, &mut found);
        }

        if found.is_empty() {
            found.push(Language::Unknown);
        }
        found
    }

    /// Returns `true` if `title` carries any token of `language`.
    pub fn mentions(&self, title: &str, language: Language) -> bool {
        let cleaned = self.re_deny.replace_all(title, " ");
        self.tokens
            .iter()
            .any(|(candidate, re)| *candidate == language && re.is_match(&cleaned))
    }

    /// German dual releases (`DL`) keep the original audio track; `ML`
    /// releases add English as well. A `DL` that belongs to `WEB-DL` does
    /// not count.
    fn apply_german_original_rule(&self, title: &str, found: &mut Vec<Language>) {
        let dual = self.re_dual.find_iter(title).any(|m| {
            let before = title[..m.start()].to_ascii_lowercase();
            !["web-", "web.", "web ", "web_"]
                .iter()
                .any(|marker| before.ends_with(marker))
        });
        let multi = self.re_multi.is_match(title);

        let mut push = |language: Language| {
            if !found.contains(&language) {
                found.push(language);
            }
        };
        if dual || multi {
            push(Language::Original);
        }
        if multi {
            push(Language::English);
        }
    }

    /// Language of a subtitle file such as `Game.2022.en.forced.srt`.
    pub fn parse_subtitle(&self, filename: &str) -> Language {
        let stem = filename
            .rsplit_once('.')
            .map_or(filename, |(stem, _)| stem)
            .trim();

        if let Some(language) = self
            .re_subtitle
            .captures(stem)
            .and_then(|caps| Language::from_iso_code(&caps["code"]))
        {
            return language;
        }

        let lower = stem.to_lowercase();
        Language::table()
            .iter()
            .filter(|entry| !matches!(entry.language, Language::Unknown | Language::Original))
            .find(|entry| lower.ends_with(&entry.name.to_lowercase()))
            .map_or(Language::Unknown, |entry| entry.language)
    }
}

/// Languages named in `title`; `[Unknown]` when none match.
pub fn parse_languages(title: &str) -> Vec<Language> {
    LanguageParser::shared().parse(title)
}

/// Language of a subtitle file name, `Unknown` when it carries none.
pub fn parse_subtitle_language(filename: &str) -> Language {
    LanguageParser::shared().parse_subtitle(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_names() {
        assert_eq!(
            parse_languages("Game.Title.1994.English.1080p.XviD-LOL"),
            vec![Language::English]
        );
        assert_eq!(parse_languages("Game.Title.1994.FRENCH.1080p"), vec![Language::French]);
        assert_eq!(parse_languages("Game.Title.1994.Spanish.1080p"), vec![Language::Spanish]);
        assert_eq!(parse_languages("Game.Title.1994.Catalán.1080p"), vec![Language::Catalan]);
    }

    #[test]
    fn abbreviations() {
        assert_eq!(parse_languages("Game.Title.1994.TRUEFRENCH.1080p"), vec![Language::French]);
        assert_eq!(parse_languages("Game.Title.1994.VFF.1080p"), vec![Language::French]);
        assert_eq!(parse_languages("Game.Title.1994.PLDUB.1080p"), vec![Language::Polish]);
        assert_eq!(parse_languages("Game.Title.2019.PT-BR.1080p"), vec![Language::PortugueseBr]);
        assert_eq!(parse_languages("Game.Title.2019.HebDub.1080p"), vec![Language::Hebrew]);
        assert_eq!(parse_languages("Game.Title.2019.RoDubbed.1080p"), vec![Language::Romanian]);
        assert_eq!(parse_languages("Game.Title.2022.lv.WEBRip"), vec![Language::Latvian]);
        assert_eq!(
            parse_languages("Game.Title.2025.Original.1080P.WEB.H264-RlsGrp"),
            vec![Language::Original]
        );

        let langs = parse_languages("Game.Title.2018.2xUkr.Eng");
        assert!(langs.contains(&Language::Ukrainian));
        assert!(langs.contains(&Language::English));
    }

    #[test]
    fn multiple_languages() {
        let langs = parse_languages("Game.Title.2016.Hun/Ger/Ita.1080p");
        assert_eq!(langs.len(), 3);
        assert!(langs.contains(&Language::Hungarian));
        assert!(langs.contains(&Language::German));
        assert!(langs.contains(&Language::Italian));

        let langs = parse_languages("Game.Title.1994.AC3.LT.EN-CNN");
        assert!(langs.contains(&Language::Lithuanian));
        assert!(langs.contains(&Language::English));
    }

    #[test]
    fn latino_comes_first() {
        let langs = parse_languages("Game Title 2019 Audio Eng-Spa(Latino)");
        assert_eq!(langs[0], Language::SpanishLatino);
        assert_eq!(parse_languages("Game.Title.2019.Latino.1080p"), vec![Language::SpanishLatino]);
    }

    #[test]
    fn case_sensitive_codes() {
        assert_eq!(parse_languages("Game.Title.1994.ES.1080p"), vec![Language::Spanish]);
        assert_eq!(parse_languages("Game.Title.1994.PL.1080p"), vec![Language::Polish]);
        assert_eq!(parse_languages("Game.Title.2010.En.1080p"), vec![Language::Unknown]);
    }

    #[test]
    fn deny_list() {
        for title in [
            "Game.Title.1994.DTS-ES.1080p",
            "Game.Title.1994.PL-SUB.1080p",
            "Game.Title.1994.PLSUB.1080p",
            "Game.Title.1994.SUB-PL.1080p",
            "Game.Title.2010.SUBFRENCH.1080p",
        ] {
            assert_eq!(parse_languages(title), vec![Language::Unknown], "{title}");
        }
    }

    #[test]
    fn cyrillic_means_russian() {
        assert!(parse_languages("Ведьмак 3 Game Title").contains(&Language::Russian));
    }

    #[test]
    fn german_original_audio() {
        assert_eq!(
            parse_languages("Game.Name.2016.German.DTS.DL.720p.BluRay.x264-RlsGrp"),
            vec![Language::German, Language::Original]
        );
        assert_eq!(
            parse_languages("Game.Name.2016.GERMAN.WEB-DL.x264-RlsGrp"),
            vec![Language::German]
        );
        assert_eq!(
            parse_languages("Game.Name.2023.German.ML.EAC3.720p.NF.WEB.H264-RlsGrp"),
            vec![Language::German, Language::Original, Language::English]
        );
    }

    #[test]
    fn never_empty() {
        assert_eq!(parse_languages(""), vec![Language::Unknown]);
        assert_eq!(parse_languages("Game.Title.2019.1080p"), vec![Language::Unknown]);
    }

    #[test]
    fn mentions_single_language() {
        let parser = LanguageParser::shared();
        assert!(parser.mentions("Game 2xUkr", Language::Ukrainian));
        assert!(!parser.mentions("Game Title", Language::Hebrew));
    }

    #[test]
    fn subtitle_languages() {
        let cases = [
            ("Game Title - 2022.en.sub", Language::English),
            ("Game Title - 2022.EN.srt", Language::English),
            ("Game Title - 2022.English.sub", Language::English),
            ("Game Title - 2022.en.sdh.forced.sub", Language::English),
            ("Game-Title-eng-forced.sub", Language::English),
            ("Game.Title.2022.fre.srt", Language::French),
            ("Game.Title.2022.pt-br.srt", Language::PortugueseBr),
            ("Game Title.sub", Language::Unknown),
        ];
        for (filename, expected) in cases {
            assert_eq!(parse_subtitle_language(filename), expected, "{filename}");
        }
    }
}
