//! # Text Normalizer
//!
//! Folds titles into comparison keys: lower case, ASCII base letters,
//! no punctuation, no filler words.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::Result;

const ARTICLES: &[&str] = &["a", "à", "an", "the", "and", "or", "of"];

/// Compiled junk-marker patterns used by the normalizer.
#[derive(Debug)]
pub struct TitleNormalizer {
    re_junk: Regex,
    re_separators: Regex,
    re_multi: Regex,
}

static SHARED: LazyLock<TitleNormalizer> =
    LazyLock::new(|| TitleNormalizer::new().expect("normalizer patterns are valid"));

impl TitleNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // Catalog-id tags and bracketed site names.
            re_junk: Regex::new(
                r"(?i)[\[{(]\s*(?:igdb(?:id)?|tmdb(?:id)?|imdb(?:id)?)[-:\s]*\w+\s*[\]})]|\[\s*(?:www\.)?[-a-z0-9]+\.[a-z]{2,6}\s*\]|^(?:www\.)?[-a-z0-9]+\.[a-z]{2,6}\s+-\s+",
            )?,
            re_separators: Regex::new(r"[\s._\-]+")?,
            re_multi: Regex::new(r"(?i)[_. ]multi[_. ]")?,
        })
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Folds a title into a lower-case ASCII key without punctuation.
    ///
    /// Empty, whitespace-only and purely numeric inputs come back unchanged.
    pub fn clean(&self, text: &str) -> String {
        if text.trim().is_empty() || text.chars().all(|c| c.is_ascii_digit()) {
            return text.to_string();
        }

        let text = self.re_junk.replace_all(text, " ");
        let words = word_spans(&text);
        let mut kept = String::with_capacity(text.len());

        for (i, &(start, end)) in words.iter().enumerate() {
            let word = &text[start..end];
            let lower = word.to_lowercase();
            let is_article = ARTICLES.contains(&lower.as_str());
            let at_edge = start == 0 || end == text.len();
            if is_article && !at_edge && !part_of_acronym(&lower, &text, &words, i) {
                continue;
            }
            kept.push_str(word);
        }

        fold_to_ascii(&kept.to_lowercase())
    }

    /// Lower-cases and collapses separator runs to single spaces.
    pub fn normalize_title(&self, text: &str) -> String {
        self.re_separators
            .replace_all(text.trim(), " ")
            .trim()
            .to_lowercase()
    }

    /// ASCII, hyphen-separated slug.
    pub fn to_url_slug(&self, text: &str) -> String {
        let folded = fold_to_ascii(&text.to_lowercase());
        let mut slug = String::with_capacity(folded.len());
        for c in folded.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c);
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_end_matches('-').to_string()
    }

    /// Returns `true` if the name carries a `.multi.` language tag.
    pub fn has_multiple_languages(&self, text: &str) -> bool {
        self.re_multi.is_match(text)
    }
}

/// Byte spans of the alphanumeric runs in `text`.
fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        match (c.is_alphanumeric(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

/// A single-letter "a" between dotted initials (`A.I.a.K`) is a letter, not an article.
fn part_of_acronym(lower: &str, text: &str, words: &[(usize, usize)], i: usize) -> bool {
    if lower != "a" && lower != "à" {
        return false;
    }
    let single = |j: usize| {
        words
            .get(j)
            .is_some_and(|&(s, e)| text[s..e].chars().count() == 1)
    };
    (i > 0 && single(i - 1)) || single(i + 1)
}

/// Replaces German umlauts and drops every other diacritic.
fn fold_to_ascii(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'ä' => expanded.push_str("ae"),
            'ö' => expanded.push_str("oe"),
            'ü' => expanded.push_str("ue"),
            'ß' => expanded.push_str("ss"),
            other => expanded.push(other),
        }
    }
    expanded.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Folds a title into a comparison key. See [`TitleNormalizer::clean`].
pub fn clean_game_title(text: &str) -> String {
    TitleNormalizer::shared().clean(text)
}

/// See [`TitleNormalizer::normalize_title`].
pub fn normalize_title(text: &str) -> String {
    TitleNormalizer::shared().normalize_title(text)
}

/// See [`TitleNormalizer::to_url_slug`].
pub fn to_url_slug(text: &str) -> String {
    TitleNormalizer::shared().to_url_slug(text)
}

/// See [`TitleNormalizer::has_multiple_languages`].
pub fn has_multiple_languages(text: &str) -> bool {
    TitleNormalizer::shared().has_multiple_languages(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_accents() {
        assert_eq!(clean_game_title("Carniv\u{00E0}le"), "carnivale");
        assert_eq!(clean_game_title("Pokémon Légendes"), "pokemonlegendes");
    }

    #[test]
    fn folds_umlauts() {
        assert_eq!(clean_game_title("Café Ülm"), "cafeuelm");
        assert_eq!(clean_game_title("Straße"), "strasse");
    }

    #[test]
    fn drops_inner_articles_only() {
        assert_eq!(clean_game_title("The Lord of the Rings"), "thelordrings");
        assert_eq!(clean_game_title("Tom and Jerry"), "tomjerry");
        assert_eq!(clean_game_title("Game of"), "gameof");
    }

    #[test]
    fn keeps_acronym_letters() {
        assert_eq!(clean_game_title("A.I.a.K"), "aiak");
    }

    #[test]
    fn strips_punctuation_and_junk() {
        assert_eq!(clean_game_title("The Witcher 3: Wild Hunt"), "thewitcher3wildhunt");
        assert_eq!(clean_game_title("Half-Life 2 {igdbid-1234}"), "halflife2");
        assert_eq!(clean_game_title("www.site.com - Portal 2"), "portal2");
    }

    #[test]
    fn passes_through_trivial_input() {
        assert_eq!(clean_game_title(""), "");
        assert_eq!(clean_game_title("   "), "   ");
        assert_eq!(clean_game_title("1776"), "1776");
    }

    #[test]
    fn helpers() {
        assert_eq!(normalize_title("  Half-Life.2_Episode  One "), "half life 2 episode one");
        assert_eq!(to_url_slug("Baldur's Gate 3: Édition"), "baldur-s-gate-3-edition");
        assert!(has_multiple_languages("Game.2018.MULTi.1080p"));
        assert!(!has_multiple_languages("Game.2018.MULTi5.1080p"));
    }
}
