//! # Shared keyword tables
//!
//! Immutable token lists used by several parsers. Entries are regex
//! fragments, so they can be joined into alternations directly.

/// Scene groups recognised by the title rules as a trailing `-GROUP`.
pub const SCENE_GROUPS: &[&str] = &[
    "PLAZA",
    "CODEX",
    "SKIDROW",
    "CPY",
    "EMPRESS",
    "FLT",
    "HOODLUM",
    "RAZOR1911",
    "RAZOR",
    "RazorDOX",
    "RELOADED",
    "PROPHET",
    "DARKSiDERS",
    "TiNYiSO",
    "CHRONOS",
    "SiMPLEX",
    "RUNE",
    "HI2U",
    "TENOKE",
    "DELiGHT",
    "DINOByTES",
    "bADkARMA",
    "PLAYMAGiC",
    "voices38",
    "I_KnoW",
    "GOG",
];

/// Scene groups that appear space-separated at the end of a name.
pub const SPACED_SCENE_GROUPS: &[&str] = &[
    "CODEX",
    "PLAZA",
    "SKIDROW",
    "CPY",
    "EMPRESS",
    "FLT",
    "HOODLUM",
    "RELOADED",
    "PROPHET",
    "DARKSiDERS",
    "TiNYiSO",
    "RUNE",
    "TENOKE",
    "DELiGHT",
];

/// Groups and repack tools accepted at the very end of a name.
pub const TRAILING_GROUPS: &[&str] = &[
    "CODEX",
    "PLAZA",
    "SKIDROW",
    "CPY",
    "EMPRESS",
    "FLT",
    "DOGE",
    "HOODLUM",
    "RAZOR1911",
    "RAZOR",
    "RazorDOX",
    "RELOADED",
    "PROPHET",
    "DARKSiDERS",
    "TiNYiSO",
    "CHRONOS",
    "SiMPLEX",
    "ALI213",
    "3DM",
    "STEAMPUNKS",
    "FCKDRM",
    "ANOMALY",
    "RUNE",
    "VREX",
    "HI2U",
    "TENOKE",
    "I_KnoW",
    "DELiGHT",
    "DINOByTES",
    "bADkARMA",
    "PLAYMAGiC",
    "voices38",
    "FITGIRL",
    "DODI",
    "XATAB",
    "ELAMIGOS",
    "COREPACK",
    "KAOS",
    "MASQUERADE",
    "GOG",
    "STEAM[-_.]?RIP",
    "EPIC[-_.]?RIP",
    "P2P",
];

/// Scene groups that classify a release as `Scene` quality.
pub const QUALITY_SCENE_GROUPS: &[&str] = &[
    "CODEX",
    "PLAZA",
    "SKIDROW",
    "CPY",
    "EMPRESS",
    "FLT",
    "DOGE",
    "HOODLUM",
    "RAZOR1911",
    "RELOADED",
    "PROPHET",
    "DARKSiDERS",
    "TiNYiSO",
    "CHRONOS",
    "SiMPLEX",
    "ALI213",
    "3DM",
    "STEAMPUNKS",
    "FCKDRM",
    "ANOMALY",
    "RUNE",
];

/// Repack tools and their spelling variants.
pub const REPACK_TOOLS: &[&str] = &[
    "FITGIRL",
    "DODI",
    "XATAB",
    "ELAMIGOS",
    "COREPACK",
    r"MR[\s._-]?DJ",
    "KAOS",
    r"DARCK[\s._-]?REPACKS?",
    "MASQUERADE",
    "CHOVKA",
    "DECEPTICON",
    "WANTERLUDE",
    r"R[\s.]?G[\s._-]*(?:МЕХАНИКИ|МЕХАНІКИ|MECHANICS|CATALYST|FREEDOM|STEAMGAMES)",
];

/// Repack tools used in bracket and suffix title rules.
pub const TITLE_REPACKERS: &[&str] = &["FitGirl", "DODI", "XATAB", "Elamigos", "CorePack", "KaOs"];

/// Platform suffixes seen directly before a scene group.
pub const PLATFORM_SUFFIXES: &[&str] = &["Linux", "MacOS", "Mac", "Win(?:dows)?", "x64", "x86"];

/// File extensions stripped from release and file names.
pub const FILE_EXTENSIONS: &[&str] = &[
    // video
    "mkv", "mp4", "avi", "m4v", "wmv", "mpg", "mpeg", "ts", "m2ts", "mov", "webm", "divx", "xvid",
    "flv", "ogm", "vob",
    // game images and archives
    "iso", "bin", "cue", "nsp", "nsz", "xci", "pkg", "vpk", "wux", "wua", "rpx", "cia", "nds",
    "dmg", "exe", "zip", "rar", "7z", "tar", "gz",
    // usenet
    "nzb", "par2", "torrent", "nfo", "sfv",
];

/// Joins table entries into a regex alternation.
#[must_use]
pub fn alternation(entries: &[&str]) -> String {
    entries.join("|")
}

/// Returns the name with a known file extension removed, if it had one.
#[must_use]
pub fn strip_extension(name: &str) -> Option<&str> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    FILE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
        .then_some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternation_joins_with_pipes() {
        assert_eq!(alternation(&["A", "B"]), "A|B");
    }

    #[test]
    fn strips_known_extensions_only() {
        assert_eq!(strip_extension("Game.2018.mkv"), Some("Game.2018"));
        assert_eq!(strip_extension("Game.2018.PAR2"), Some("Game.2018"));
        assert_eq!(strip_extension("Game.2018-CODEX"), None);
        assert_eq!(strip_extension("Cyberpunk.2077.v2.1-CODEX"), None);
        assert_eq!(strip_extension(".mkv"), None);
    }

    #[test]
    fn tables_compile_as_alternations() {
        for table in [SCENE_GROUPS, TRAILING_GROUPS, QUALITY_SCENE_GROUPS, REPACK_TOOLS] {
            assert!(regex::Regex::new(&format!("(?i)^(?:{})$", alternation(table))).is_ok());
        }
    }
}
