//! Service layer for style resolution and carousel gating.
//!
//! This module contains the decision logic the theme component runs per
//! page render.

pub mod carousel;
pub mod resolver;

// Re-export commonly used types and functions
pub use carousel::{plan_subcategory_carousel, plan_topic_carousel};
pub use resolver::{resolve, resolve_all, ResolvedStyle, ViewportStyles};
