//! Rendering of resolved card styles.
//!
//! Produces the CSS classes the front end applies to topic lists and a
//! markdown summary of a settings document.

pub mod classes;
pub mod summary;

// Re-export main functions
pub use classes::CardClasses;
pub use summary::generate_style_summary;
