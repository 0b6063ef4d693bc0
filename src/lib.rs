//! Topic Cards Library
//!
//! Card style resolution for a forum theme component: parses the theme's
//! settings document, resolves the card layout variant and size modifiers
//! for a category on each viewport, renders the matching CSS classes, and
//! decides which carousels a page shows.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
