pub mod content_type;
pub mod game_version;
pub mod language;
pub mod platform;
pub mod quality;
pub mod result;

pub use content_type::ReleaseContentType;
pub use game_version::GameVersion;
pub use language::{Language, LanguageInfo};
pub use platform::PlatformFamily;
pub use quality::{ParseMode, Quality, QualityModel, Revision};
pub use result::ParsedGameInfo;
