//! Card layout variants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout mode for a topic card list.
///
/// `List` and `Landscape` lay cards out as rows; `Grid` and `Portrait` lay
/// them out as tiles. `None` means cards are not rendered at all and the
/// host falls back to its plain topic list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Full-width row cards
    List,
    /// Tiled cards
    Grid,
    /// Row cards with a wide thumbnail
    Landscape,
    /// Tiled cards with a tall thumbnail
    Portrait,
    /// Cards disabled
    None,
}

impl Variant {
    /// Token used in settings and in the `--<variant>` class suffix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
            Self::None => "none",
        }
    }

    /// True for every variant except `None`.
    pub const fn is_shown(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Row variants: `list` and `landscape`.
    pub const fn is_row(self) -> bool {
        matches!(self, Self::List | Self::Landscape)
    }

    /// Tile variants: `grid` and `portrait`.
    pub const fn is_tile(self) -> bool {
        matches!(self, Self::Grid | Self::Portrait)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    /// Parses a style token. Matching is case-insensitive and ignores
    /// surrounding whitespace; `disabled` is accepted as an alias of `none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(Self::List),
            "grid" => Ok(Self::Grid),
            "landscape" => Ok(Self::Landscape),
            "portrait" => Ok(Self::Portrait),
            "none" | "disabled" => Ok(Self::None),
            other => Err(format!("Unrecognized style token '{other}'")),
        }
    }
}
