//! Data models for card styles, categories, viewports and carousels.
//!
//! This module contains the core value types used throughout the crate.
//! Models are independent of settings parsing and of the CLI.

pub mod carousel;
pub mod category;
pub mod constraints;
pub mod settings;
pub mod style_config;
pub mod variant;
pub mod viewport;

// Re-export all model types
pub use carousel::{CarouselConfig, DisplayLocation, Route};
pub use category::{CategoryId, CategorySet};
pub use constraints::{SizeConstraint, SizeConstraints};
pub use settings::ThemeSettings;
pub use style_config::{
    DefaultPolicy, Membership, StyleConfig, StyleConfigBuilder, TieBreak, ViewportRule,
};
pub use variant::Variant;
pub use viewport::Viewport;
