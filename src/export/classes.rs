//! CSS class rendering for resolved card styles.
//!
//! The front end applies these classes to the card list container and to
//! each card:
//!
//! ```text
//! <div class="topic-cards-list topic-cards-list--grid">
//!   <div class="topic-card topic-card--grid has-max-width has-grid-height">
//! ```

use crate::constants::{CARD_CLASS, CONTAINER_CLASS};
use crate::models::StyleConfig;
use crate::services::ResolvedStyle;
use serde::Serialize;

/// Classes and custom properties for one rendered card list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardClasses {
    /// Classes on the card list container
    pub container: Vec<String>,
    /// Classes on every card element
    pub card: Vec<String>,
    /// CSS custom properties for active constraints, as (name, value)
    pub custom_properties: Vec<(String, String)>,
}

impl CardClasses {
    /// Renders the classes for a resolved style.
    ///
    /// A `none` style renders nothing at all, so the host keeps its plain
    /// topic list.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeSet;
    /// use topic_cards::export::classes::CardClasses;
    /// use topic_cards::models::{DefaultPolicy, SizeConstraint, StyleConfig, TieBreak, Variant};
    /// use topic_cards::services::ResolvedStyle;
    ///
    /// let config = StyleConfig::builder(TieBreak::GridWins, DefaultPolicy::Disabled)
    ///     .max_height(275)
    ///     .build()
    ///     .unwrap();
    /// let style = ResolvedStyle {
    ///     variant: Variant::List,
    ///     constraints: BTreeSet::from([SizeConstraint::MaxHeight]),
    /// };
    ///
    /// let classes = CardClasses::render(&style, &config);
    /// assert_eq!(classes.card, vec!["topic-card", "topic-card--list", "has-max-height"]);
    /// assert_eq!(classes.style_attribute(), "--topic-card-max-height: 275px");
    /// ```
    pub fn render(style: &ResolvedStyle, config: &StyleConfig) -> Self {
        if !style.is_shown() {
            return Self::default();
        }

        let variant = style.variant.as_str();

        let container = vec![
            CONTAINER_CLASS.to_string(),
            format!("{CONTAINER_CLASS}--{variant}"),
        ];

        let mut card = vec![CARD_CLASS.to_string(), format!("{CARD_CLASS}--{variant}")];
        card.extend(style.modifier_classes().into_iter().map(String::from));

        let custom_properties = style
            .constraints
            .iter()
            .filter_map(|constraint| {
                config
                    .constraints()
                    .value(*constraint)
                    .map(|px| (constraint.css_property().to_string(), format!("{px}px")))
            })
            .collect();

        Self {
            container,
            card,
            custom_properties,
        }
    }

    /// True when nothing is rendered.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty() && self.card.is_empty()
    }

    /// Container classes joined for a `class` attribute.
    pub fn container_attribute(&self) -> String {
        self.container.join(" ")
    }

    /// Card classes joined for a `class` attribute.
    pub fn card_attribute(&self) -> String {
        self.card.join(" ")
    }

    /// Custom properties joined for a `style` attribute.
    pub fn style_attribute(&self) -> String {
        self.custom_properties
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
