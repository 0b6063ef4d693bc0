//! Carousel gating.
//!
//! Decides whether the topic carousel and the subcategory carousel render
//! on a page, and how many items they hold. Slide animation and focus
//! handling belong to the front end.

use crate::models::{CarouselConfig, DisplayLocation, Route};
use serde::Serialize;
use tracing::debug;

/// How the topic carousel renders on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicCarouselPlan {
    /// Number of topic cards in the carousel
    pub items: usize,
    /// Render pagination dots
    pub show_dots: bool,
}

/// How the subcategory carousel renders on a category page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubcategoryCarouselPlan {
    /// One slide per subcategory
    pub slides: usize,
    /// Render pagination dots; always on for subcategories
    pub show_dots: bool,
}

/// Plans the topic carousel for a route.
///
/// Returns `None` when the carousel is disabled, the route is not a
/// discovery list, or there are no topics to show.
///
/// # Examples
///
/// ```
/// use topic_cards::models::{CarouselConfig, DisplayLocation, Route};
/// use topic_cards::services::carousel::plan_topic_carousel;
///
/// let config = CarouselConfig {
///     display_location: DisplayLocation::Home,
///     max_items: 2,
///     ..CarouselConfig::default()
/// };
/// let plan = plan_topic_carousel(&Route::Latest, 3, &config).unwrap();
/// assert_eq!(plan.items, 2);
/// assert!(plan_topic_carousel(&Route::from_path("/c/general/5"), 3, &config).is_none());
/// ```
pub fn plan_topic_carousel(
    route: &Route,
    available_topics: usize,
    config: &CarouselConfig,
) -> Option<TopicCarouselPlan> {
    let on_route = match config.display_location {
        DisplayLocation::Disabled => false,
        DisplayLocation::Home => route.is_discovery(),
    };

    if !on_route || available_topics == 0 {
        debug!(%route, available_topics, "Topic carousel not shown");
        return None;
    }

    Some(TopicCarouselPlan {
        items: available_topics.min(config.max_items),
        show_dots: config.show_dots,
    })
}

/// Plans the subcategory carousel for a route.
///
/// Only category pages listed in `subcategory_categories` with at least
/// `subcategory_min_children` subcategories get a carousel.
pub fn plan_subcategory_carousel(
    route: &Route,
    child_count: usize,
    config: &CarouselConfig,
) -> Option<SubcategoryCarouselPlan> {
    let Route::Category(category) = route else {
        return None;
    };

    if !config.subcategory_categories.contains(*category) {
        return None;
    }

    if child_count < config.subcategory_min_children {
        debug!(
            %category,
            child_count,
            min_children = config.subcategory_min_children,
            "Subcategory carousel below minimum children"
        );
        return None;
    }

    Some(SubcategoryCarouselPlan {
        slides: child_count,
        show_dots: true,
    })
}
