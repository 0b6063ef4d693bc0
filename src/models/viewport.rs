//! Rendering viewport.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering context a page is drawn for.
///
/// Desktop and mobile carry fully independent configuration; nothing
/// resolved for one viewport influences the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Desktop layout
    Desktop,
    /// Mobile layout
    Mobile,
}

impl Viewport {
    /// Both viewports, desktop first.
    pub const ALL: [Self; 2] = [Self::Desktop, Self::Mobile];

    /// Lowercase name used in settings keys and output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Viewport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!(
                "Invalid viewport '{other}'. Must be 'desktop' or 'mobile'"
            )),
        }
    }
}
