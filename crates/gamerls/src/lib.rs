//! # Gamerls
//!
//! Parses game release names into structured metadata. This crate
//! re-exports [`gamerls_core`]; see its documentation for the full API.
//!
//! ```rust
//! let info = gamerls::parse_game_title("Half-Life.2-RELOADED", false);
//! assert_eq!(info.primary_game_title(), Some("Half-Life 2"));
//! ```

pub use gamerls_core::*;
