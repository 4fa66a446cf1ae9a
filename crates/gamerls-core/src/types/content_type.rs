use std::fmt;

use serde::{Deserialize, Serialize};

/// What part of a game a release contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReleaseContentType {
    #[default]
    Unknown,
    BaseGame,
    BaseGameWithAllDlc,
    DlcOnly,
    UpdateOnly,
    SeasonPass,
    Expansion,
}

impl ReleaseContentType {
    /// The release cannot be played without owning the base game.
    #[must_use]
    pub fn requires_base_game(self) -> bool {
        matches!(self, Self::DlcOnly | Self::UpdateOnly | Self::SeasonPass)
    }

    /// The release ships the base game. Unknown releases are assumed to.
    #[must_use]
    pub fn includes_base_game(self) -> bool {
        matches!(self, Self::BaseGame | Self::BaseGameWithAllDlc | Self::Unknown)
    }

    #[must_use]
    pub fn includes_dlc(self) -> bool {
        matches!(
            self,
            Self::BaseGameWithAllDlc | Self::DlcOnly | Self::SeasonPass | Self::Expansion
        )
    }
}

impl fmt::Display for ReleaseContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::BaseGame => "Base Game",
            Self::BaseGameWithAllDlc => "Base Game + All DLC",
            Self::DlcOnly => "DLC Only",
            Self::UpdateOnly => "Update Only",
            Self::SeasonPass => "Season Pass",
            Self::Expansion => "Expansion",
        };
        f.write_str(name)
    }
}
