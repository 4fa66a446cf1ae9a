pub mod content_type;
pub mod game_version;
pub mod language;
pub mod lexicon;
pub mod normalizer;
pub mod platform;
pub mod quality;
pub mod release_group;
pub mod scene;
pub mod title;
pub mod unified;

pub use content_type::{ContentTypeParser, parse_content_type};
pub use game_version::{GameVersionParser, parse_game_version};
pub use language::{LanguageParser, parse_languages, parse_subtitle_language};
pub use normalizer::{
    TitleNormalizer, clean_game_title, has_multiple_languages, normalize_title, to_url_slug,
};
pub use platform::{PlatformMatch, PlatformParser, parse_platform, parse_platform_string};
pub use quality::{QualityParser, parse_quality};
pub use release_group::{ReleaseGroupParser, parse_release_group};
pub use scene::{SceneChecker, get_scene_title, is_scene_title};
pub use title::{TitleMatch, TitleParser, parse_edition, parse_hardcoded_subs, parse_igdb_id};
pub use unified::{GameParser, ParserConfig, parse_game_path, parse_game_title};
