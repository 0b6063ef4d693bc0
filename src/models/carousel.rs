//! Carousel settings and the page routes they are gated on.

use crate::models::{CategoryId, CategorySet};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Default cap on topics shown in the topic carousel.
pub const DEFAULT_CAROUSEL_MAX_ITEMS: usize = 10;

/// Default minimum number of subcategories before the subcategory carousel shows.
pub const DEFAULT_SUBCATEGORY_MIN_CHILDREN: usize = 2;

static CATEGORY_ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/c/(?:[^/]+/)*?(\d+)(?:/l/[a-z]+)?/?$").expect("category route pattern is valid")
});

/// Where the topic carousel is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLocation {
    /// Never rendered
    #[default]
    Disabled,
    /// Homepage and the discovery lists (latest, top, categories)
    Home,
}

impl FromStr for DisplayLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "disabled" | "none" => Ok(Self::Disabled),
            other => Err(format!(
                "Invalid carousel display location '{other}'. Must be 'home' or 'disabled'"
            )),
        }
    }
}

impl fmt::Display for DisplayLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::Home => f.write_str("home"),
        }
    }
}

/// Validated carousel settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselConfig {
    /// Topic carousel placement
    pub display_location: DisplayLocation,
    /// Render pagination dots under the topic carousel
    pub show_dots: bool,
    /// Upper bound on topics in the topic carousel (at least 1)
    pub max_items: usize,
    /// Parent categories whose page shows the subcategory carousel
    pub subcategory_categories: CategorySet,
    /// Subcategories required before the subcategory carousel shows (at least 1)
    pub subcategory_min_children: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            display_location: DisplayLocation::default(),
            show_dots: false,
            max_items: DEFAULT_CAROUSEL_MAX_ITEMS,
            subcategory_categories: CategorySet::new(),
            subcategory_min_children: DEFAULT_SUBCATEGORY_MIN_CHILDREN,
        }
    }
}

/// A page route, as far as carousel gating cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "route", content = "value")]
pub enum Route {
    /// `/`
    Home,
    /// `/latest`
    Latest,
    /// `/top`
    Top,
    /// `/categories`
    Categories,
    /// `/c/<slug>/<id>`, including nested subcategory slugs
    Category(CategoryId),
    /// Anything else
    Other(String),
}

impl Route {
    /// Classifies a URL path.
    ///
    /// Query strings and fragments are ignored, as is a trailing slash.
    ///
    /// # Examples
    ///
    /// ```
    /// use topic_cards::models::{CategoryId, Route};
    ///
    /// assert_eq!(Route::from_path("/latest?order=activity"), Route::Latest);
    /// assert_eq!(
    ///     Route::from_path("/c/parent/child/12"),
    ///     Route::Category(CategoryId::new(12))
    /// );
    /// ```
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();

        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/latest" => Self::Latest,
            "/top" => Self::Top,
            "/categories" => Self::Categories,
            other => CATEGORY_ROUTE
                .captures(path)
                .and_then(|caps| caps.get(1))
                .and_then(|id| id.as_str().parse::<CategoryId>().ok())
                .map_or_else(|| Self::Other(other.to_string()), Self::Category),
        }
    }

    /// True for the homepage and the discovery topic lists.
    pub const fn is_discovery(&self) -> bool {
        matches!(self, Self::Home | Self::Latest | Self::Top | Self::Categories)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Latest => f.write_str("latest"),
            Self::Top => f.write_str("top"),
            Self::Categories => f.write_str("categories"),
            Self::Category(id) => write!(f, "category {id}"),
            Self::Other(path) => write!(f, "other ({path})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_discovery_paths() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/latest"), Route::Latest);
        assert_eq!(Route::from_path("/latest/"), Route::Latest);
        assert_eq!(Route::from_path("/top"), Route::Top);
        assert_eq!(Route::from_path("/categories"), Route::Categories);
    }

    #[test]
    fn test_route_category_paths() {
        assert_eq!(
            Route::from_path("/c/general/5"),
            Route::Category(CategoryId::new(5))
        );
        assert_eq!(
            Route::from_path("/c/parent-category/sub/31/"),
            Route::Category(CategoryId::new(31))
        );
        assert_eq!(
            Route::from_path("/c/general/5/l/latest"),
            Route::Category(CategoryId::new(5))
        );
    }

    #[test]
    fn test_route_id_only_category_paths() {
        assert_eq!(Route::from_path("/c/5"), Route::Category(CategoryId::new(5)));
        assert_eq!(
            Route::from_path("/c/5/l/top"),
            Route::Category(CategoryId::new(5))
        );
        assert_eq!(
            Route::from_path("/c/2024/8"),
            Route::Category(CategoryId::new(8))
        );
    }

    #[test]
    fn test_route_other_paths() {
        assert_eq!(
            Route::from_path("/t/some-topic/99"),
            Route::Other("/t/some-topic/99".to_string())
        );
        assert_eq!(
            Route::from_path("/c/no-id"),
            Route::Other("/c/no-id".to_string())
        );
    }

    #[test]
    fn test_display_location_parsing() {
        assert_eq!("home".parse::<DisplayLocation>().unwrap(), DisplayLocation::Home);
        assert_eq!(
            "Disabled".parse::<DisplayLocation>().unwrap(),
            DisplayLocation::Disabled
        );
        assert!("sidebar".parse::<DisplayLocation>().is_err());
    }

    #[test]
    fn test_carousel_config_default() {
        let config = CarouselConfig::default();
        assert_eq!(config.display_location, DisplayLocation::Disabled);
        assert!(!config.show_dots);
        assert_eq!(config.max_items, DEFAULT_CAROUSEL_MAX_ITEMS);
        assert_eq!(config.subcategory_min_children, 2);
    }
}
