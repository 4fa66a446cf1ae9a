use std::fmt;

use serde::{Deserialize, Serialize};

/// Audio or subtitle language of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    Unknown,
    /// The release keeps the original-language audio track.
    Original,
    English,
    French,
    Spanish,
    SpanishLatino,
    German,
    Italian,
    Danish,
    Dutch,
    Japanese,
    Icelandic,
    Chinese,
    Russian,
    Polish,
    Vietnamese,
    Swedish,
    Norwegian,
    Finnish,
    Turkish,
    Portuguese,
    PortugueseBr,
    Flemish,
    Greek,
    Korean,
    Hungarian,
    Hebrew,
    Lithuanian,
    Czech,
    Hindi,
    Romanian,
    Thai,
    Bulgarian,
    Arabic,
    Ukrainian,
    Persian,
    Bengali,
    Slovak,
    Latvian,
    Catalan,
    Croatian,
    Serbian,
    Bosnian,
    Estonian,
    Tamil,
    Indonesian,
    Telugu,
    Macedonian,
    Slovenian,
    Malayalam,
    Kannada,
    Albanian,
    Afrikaans,
    Marathi,
    Tagalog,
    Urdu,
    Romansh,
    Mongolian,
    Georgian,
}

/// Static description of one language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageInfo {
    pub language: Language,
    pub id: i32,
    pub name: &'static str,
    /// ISO 639-1 and 639-2 codes, lower case.
    pub iso_codes: &'static [&'static str],
}

const fn info(
    language: Language,
    id: i32,
    name: &'static str,
    iso_codes: &'static [&'static str],
) -> LanguageInfo {
    LanguageInfo {
        language,
        id,
        name,
        iso_codes,
    }
}

static LANGUAGE_TABLE: &[LanguageInfo] = &[
    info(Language::Unknown, 0, "Unknown", &[]),
    info(Language::Original, -2, "Original", &[]),
    info(Language::English, 1, "English", &["en", "eng"]),
    info(Language::French, 2, "French", &["fr", "fra", "fre"]),
    info(Language::Spanish, 3, "Spanish", &["es", "spa"]),
    info(Language::German, 4, "German", &["de", "deu", "ger"]),
    info(Language::Italian, 5, "Italian", &["it", "ita"]),
    info(Language::Danish, 6, "Danish", &["da", "dan"]),
    info(Language::Dutch, 7, "Dutch", &["nl", "nld", "dut"]),
    info(Language::Japanese, 8, "Japanese", &["ja", "jpn"]),
    info(Language::Icelandic, 9, "Icelandic", &["is", "isl", "ice"]),
    info(Language::Chinese, 10, "Chinese", &["zh", "zho", "chi"]),
    info(Language::Russian, 11, "Russian", &["ru", "rus"]),
    info(Language::Polish, 12, "Polish", &["pl", "pol"]),
    info(Language::Vietnamese, 13, "Vietnamese", &["vi", "vie"]),
    info(Language::Swedish, 14, "Swedish", &["sv", "swe"]),
    info(Language::Norwegian, 15, "Norwegian", &["no", "nor", "nb", "nob"]),
    info(Language::Finnish, 16, "Finnish", &["fi", "fin"]),
    info(Language::Turkish, 17, "Turkish", &["tr", "tur"]),
    info(Language::Portuguese, 18, "Portuguese", &["pt", "por"]),
    info(Language::Flemish, 19, "Flemish", &["nl-be"]),
    info(Language::Greek, 20, "Greek", &["el", "ell", "gre"]),
    info(Language::Korean, 21, "Korean", &["ko", "kor"]),
    info(Language::Hungarian, 22, "Hungarian", &["hu", "hun"]),
    info(Language::Hebrew, 23, "Hebrew", &["he", "heb"]),
    info(Language::Lithuanian, 24, "Lithuanian", &["lt", "lit"]),
    info(Language::Czech, 25, "Czech", &["cs", "ces", "cze"]),
    info(Language::Hindi, 26, "Hindi", &["hi", "hin"]),
    info(Language::Romanian, 27, "Romanian", &["ro", "ron", "rum"]),
    info(Language::Thai, 28, "Thai", &["th", "tha"]),
    info(Language::Bulgarian, 29, "Bulgarian", &["bg", "bul"]),
    info(Language::PortugueseBr, 30, "Portuguese (Brazil)", &["pt-br"]),
    info(Language::Arabic, 31, "Arabic", &["ar", "ara"]),
    info(Language::Ukrainian, 32, "Ukrainian", &["uk", "ukr"]),
    info(Language::Persian, 33, "Persian", &["fa", "fas", "per"]),
    info(Language::Bengali, 34, "Bengali", &["bn", "ben"]),
    info(Language::Slovak, 35, "Slovak", &["sk", "slk", "slo"]),
    info(Language::Latvian, 36, "Latvian", &["lv", "lav"]),
    info(Language::SpanishLatino, 37, "Spanish (Latino)", &["es-mx"]),
    info(Language::Catalan, 38, "Catalan", &["ca", "cat"]),
    info(Language::Croatian, 39, "Croatian", &["hr", "hrv"]),
    info(Language::Serbian, 40, "Serbian", &["sr", "srp"]),
    info(Language::Bosnian, 41, "Bosnian", &["bs", "bos"]),
    info(Language::Estonian, 42, "Estonian", &["et", "est"]),
    info(Language::Tamil, 43, "Tamil", &["ta", "tam"]),
    info(Language::Indonesian, 44, "Indonesian", &["id", "ind"]),
    info(Language::Telugu, 45, "Telugu", &["te", "tel"]),
    info(Language::Macedonian, 46, "Macedonian", &["mk", "mkd", "mac"]),
    info(Language::Slovenian, 47, "Slovenian", &["sl", "slv"]),
    info(Language::Malayalam, 48, "Malayalam", &["ml", "mal"]),
    info(Language::Kannada, 49, "Kannada", &["kn", "kan"]),
    info(Language::Albanian, 50, "Albanian", &["sq", "sqi", "alb"]),
    info(Language::Afrikaans, 51, "Afrikaans", &["af", "afr"]),
    info(Language::Marathi, 52, "Marathi", &["mr", "mar"]),
    info(Language::Tagalog, 53, "Tagalog", &["tl", "tgl"]),
    info(Language::Urdu, 54, "Urdu", &["ur", "urd"]),
    info(Language::Romansh, 55, "Romansh", &["rm", "roh"]),
    info(Language::Mongolian, 56, "Mongolian", &["mn", "mon"]),
    info(Language::Georgian, 57, "Georgian", &["ka", "kat", "geo"]),
];

impl Language {
    /// Static description table, one entry per language.
    #[must_use]
    pub fn table() -> &'static [LanguageInfo] {
        LANGUAGE_TABLE
    }

    #[must_use]
    pub fn info(self) -> &'static LanguageInfo {
        LANGUAGE_TABLE
            .iter()
            .find(|entry| entry.language == self)
            .unwrap_or(&LANGUAGE_TABLE[0])
    }

    #[must_use]
    pub fn id(self) -> i32 {
        self.info().id
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Finds a language by ISO 639 code, ignoring case.
    #[must_use]
    pub fn from_iso_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        LANGUAGE_TABLE
            .iter()
            .find(|entry| entry.iso_codes.contains(&code.as_str()))
            .map(|entry| entry.language)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_an_entry() {
        let ids: std::collections::HashSet<i32> =
            Language::table().iter().map(|entry| entry.id).collect();
        assert_eq!(ids.len(), Language::table().len());
        assert_eq!(Language::Georgian.id(), 57);
        assert_eq!(Language::Original.id(), -2);
    }

    #[test]
    fn iso_lookup() {
        assert_eq!(Language::from_iso_code("EN"), Some(Language::English));
        assert_eq!(Language::from_iso_code("fre"), Some(Language::French));
        assert_eq!(Language::from_iso_code("pt-BR"), Some(Language::PortugueseBr));
        assert_eq!(Language::from_iso_code("xx"), None);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Language::SpanishLatino.to_string(), "Spanish (Latino)");
        assert_eq!(Language::default(), Language::Unknown);
    }
}
