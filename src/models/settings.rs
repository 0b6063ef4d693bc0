//! Complete validated theme settings.

use crate::models::{CarouselConfig, StyleConfig};
use serde::Serialize;

/// Everything the theme component reads from its settings document.
///
/// Produced once by the settings parser; both halves are immutable
/// snapshots handed to the resolver and the carousel planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSettings {
    /// Card style rules
    pub style: StyleConfig,
    /// Carousel gating
    pub carousel: CarouselConfig,
}
