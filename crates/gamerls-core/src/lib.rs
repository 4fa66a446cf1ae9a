//! # Gamerls Core
//!
//! Release-name parsing for PC and console game releases. Turns names such
//! as `Cyberpunk.2077.v2.1-CODEX` or `Elden Ring [FitGirl Repack]` into a
//! [`ParsedGameInfo`]: titles, year, edition, release group, quality,
//! languages, platform, content type and shipped game version.
//!
//! Every parse operation is total. Unrecognised input comes back with
//! empty titles and `Unknown` classifications instead of an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use gamerls_core::parse_game_title;
//!
//! let info = parse_game_title("Cyberpunk.2077.v2.1-CODEX", false);
//!
//! assert_eq!(info.primary_game_title(), Some("Cyberpunk 2077"));
//! assert_eq!(info.release_group.as_deref(), Some("CODEX"));
//! ```
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use error::{GamerlsError, Result};
pub use parser::{
    GameParser, ParserConfig, clean_game_title, get_scene_title, is_scene_title,
    parse_content_type, parse_game_path, parse_game_title, parse_game_version, parse_languages,
    parse_platform, parse_platform_string, parse_quality, parse_release_group,
    parse_subtitle_language,
};
pub use types::{
    GameVersion, Language, LanguageInfo, ParseMode, ParsedGameInfo, PlatformFamily, Quality,
    QualityModel, ReleaseContentType, Revision,
};
