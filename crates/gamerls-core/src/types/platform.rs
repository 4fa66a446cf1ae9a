use std::fmt;

use serde::{Deserialize, Serialize};

/// Console or operating-system family a release targets.
///
/// `Unknown` covers PC releases: the absence of a platform tag says nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlatformFamily {
    #[default]
    Unknown,
    PlayStation,
    Xbox,
    Nintendo,
    Mac,
    Linux,
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::PlayStation => "PlayStation",
            Self::Xbox => "Xbox",
            Self::Nintendo => "Nintendo",
            Self::Mac => "Mac",
            Self::Linux => "Linux",
        };
        f.write_str(name)
    }
}
