//! # Quality Parser
//!
//! Maps release markers to a [`Quality`] and counts PROPER / REAL revision
//! markers. Game-shipped version tokens (`v1.0.5`, `Build.12345`) never
//! touch the revision.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::Result;
use crate::parser::lexicon::{QUALITY_SCENE_GROUPS, REPACK_TOOLS, alternation};
use crate::types::{Quality, QualityModel, Revision};

/// Video source classes used when no game marker is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Bluray,
    WebDl,
    Hdtv,
    Dvd,
    Sdtv,
}

#[derive(Debug)]
pub struct QualityParser {
    /// Ordered categorical markers; the first match wins.
    markers: Vec<(Quality, Regex)>,
    re_scene: Regex,
    re_cracked: Regex,
    re_gog: Regex,
    re_repack: Regex,
    re_all_dlc: Regex,
    re_update_only: Regex,
    re_multi: Regex,
    re_arch: Regex,
    sources: Vec<(Source, Regex)>,
    re_resolution: Regex,
    re_proper: Regex,
    re_real: Regex,
}

static SHARED: LazyLock<QualityParser> =
    LazyLock::new(|| QualityParser::new().expect("quality patterns are valid"));

fn ci_word(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b(?:{pattern})\b"))
}

impl QualityParser {
    pub fn new() -> Result<Self> {
        // Checked in order after scene, crack, GOG and repack markers.
        let markers = [
            (Quality::Steam, r"STEAM[\s-]?(?:RIP|UNLOCKED)"),
            (Quality::Epic, r"EPIC[\s-]?(?:GAMES[\s-]?)?RIP"),
            (Quality::Origin, r"ORIGIN[\s-]?RIP|EA[\s-]?(?:APP[\s-]?)?RIP"),
            (Quality::Uplay, r"UPLAY[\s-]?RIP|UBISOFT[\s-]?CONNECT[\s-]?RIP"),
            (Quality::Portable, r"PORTABLE|NO[\s-]?INSTALL"),
            (Quality::Iso, r"ISO|DISC[\s-]?IMAGE"),
            (Quality::Retail, r"RETAIL"),
            (Quality::Preload, r"PRELOAD|PRE[\s-]?RELEASE"),
        ]
        .into_iter()
        .map(|(quality, pattern)| Ok((quality, ci_word(pattern)?)))
        .collect::<Result<Vec<_>>>()?;

        let sources = [
            (Source::Bluray, r"blu[\s-]?ray|bdrip|brrip"),
            (Source::WebDl, r"web[\s-]?(?:dl|rip)?"),
            (Source::Hdtv, r"hdtv"),
            (Source::Dvd, r"dvd[\s-]?rip|dvd(?:r|5|9)?"),
            (Source::Sdtv, r"sdtv|pdtv|tvrip"),
        ]
        .into_iter()
        .map(|(source, pattern)| Ok((source, ci_word(pattern)?)))
        .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            markers,
            re_scene: ci_word(&alternation(QUALITY_SCENE_GROUPS))?,
            re_cracked: ci_word(r"CRACKED|CRACK[\s-]?ONLY|CRACK[\s-]?FIX|NO[\s-]?DRM")?,
            re_gog: ci_word(r"GOG(?:[\s-]?RIP)?")?,
            re_repack: ci_word(&format!("REPACK|{}", alternation(REPACK_TOOLS)))?,
            re_all_dlc: ci_word(concat!(
                r"(?:INCL(?:UDES?)?[\s-]?)?(?:ALL[\s-]?)?DLCs?|DLC[\s-]?(?:PACK|UNLOCKER)",
                r"|COMPLETE[\s-]?(?:EDITION|PACK)|ULTIMATE[\s-]?EDITION|GOTY",
                r"|GAME[\s-]?OF[\s-]?THE[\s-]?YEAR",
            ))?,
            re_update_only: Regex::new(
                r"(?i)\b(?:UPDATE[\s-]?ONLY|PATCH[\s-]?ONLY|HOTFIX)\b|\b(?:UPDATE|PATCH)\s+v\d",
            )?,
            re_multi: ci_word(r"MULTI(?:[\s-]?\d+|LANGUAGE)?")?,
            re_arch: Regex::new(r"(?i)(?:^|[\s_.-])(?:x86|x64|win32|win64|pc)(?:[\s_.-]|$)")?,
            sources,
            re_resolution: Regex::new(r"(?i)\b(?P<res>2160|1080|720)[pi]\b")?,
            re_proper: ci_word("PROPER")?,
            re_real: ci_word("REAL")?,
        })
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    pub fn parse(&self, title: &str) -> QualityModel {
        let name = title.replace(['_', '.'], " ");
        let name = name.trim();
        if name.is_empty() {
            return QualityModel::default();
        }

        let quality = self.classify(name);
        let revision = self.revision(name);
        trace!(title, %quality, %revision, "parsed quality");
        QualityModel::new(quality, revision)
    }

    /// PROPER/REAL revision of `title` alone. The orchestrator passes the
    /// name with its title span masked so a title word such as `Real` is
    /// not read as a marker.
    pub fn parse_revision(&self, title: &str) -> Revision {
        self.revision(&title.replace(['_', '.'], " "))
    }

    fn classify(&self, name: &str) -> Quality {
        if self.re_scene.is_match(name) {
            return if self.re_cracked.is_match(name) {
                Quality::SceneCracked
            } else {
                Quality::Scene
            };
        }
        if self.re_cracked.is_match(name) {
            return Quality::SceneCracked;
        }
        if self.re_gog.is_match(name) {
            return Quality::Gog;
        }
        if self.re_repack.is_match(name) {
            return if self.re_all_dlc.is_match(name) {
                Quality::RepackAllDlc
            } else {
                Quality::Repack
            };
        }
        if let Some((quality, _)) = self.markers.iter().find(|(_, re)| re.is_match(name)) {
            return *quality;
        }
        if self.re_update_only.is_match(name) {
            return Quality::UpdateOnly;
        }
        if self.re_multi.is_match(name) {
            return Quality::MultiLang;
        }
        if self.re_arch.is_match(name) {
            return Quality::Scene;
        }
        self.legacy_source(name).unwrap_or(Quality::Unknown)
    }

    /// Resolution-class quality from a video source token.
    fn legacy_source(&self, name: &str) -> Option<Quality> {
        let source = self
            .sources
            .iter()
            .find(|(_, re)| re.is_match(name))
            .map(|(source, _)| *source)?;
        let resolution = self
            .re_resolution
            .captures(name)
            .map(|caps| caps["res"].to_string());

        let quality = match (source, resolution.as_deref()) {
            (Source::Bluray, Some("2160")) => Quality::Bluray2160p,
            (Source::Bluray, Some("1080")) => Quality::Bluray1080p,
            (Source::Bluray, _) => Quality::Bluray720p,
            (Source::WebDl, Some("2160")) => Quality::WebDl2160p,
            (Source::WebDl, Some("1080")) => Quality::WebDl1080p,
            (Source::WebDl, _) => Quality::WebDl720p,
            (Source::Hdtv, Some("1080")) => Quality::Hdtv1080p,
            (Source::Hdtv, Some("720")) => Quality::Hdtv720p,
            (Source::Hdtv | Source::Sdtv, _) => Quality::Sdtv,
            (Source::Dvd, _) => Quality::Dvd,
        };
        Some(quality)
    }

    /// PROPER and REAL markers, each collapsing to a single version bump.
    fn revision(&self, name: &str) -> Revision {
        let real = u32::try_from(self.re_real.find_iter(name).count()).unwrap_or(u32::MAX);
        let version = if real > 0 || self.re_proper.is_match(name) {
            2
        } else {
            1
        };
        Revision::new(version, real)
    }
}

/// Quality and revision of `title`; `Unknown` when no marker matches.
pub fn parse_quality(title: &str) -> QualityModel {
    QualityParser::shared().parse(title)
}
